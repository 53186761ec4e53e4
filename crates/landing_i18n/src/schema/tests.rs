use super::*;
use serde_json::json;

fn node(value: serde_json::Value) -> ContentNode {
    ContentNode::from_json(value).expect("gültiges JSON")
}

#[test]
fn expertise_item_accepts_plain_string() {
    let item = ExpertiseItem::from_content(&node(json!("Problem solving"))).unwrap();
    assert_eq!(item.title, "Problem solving");
    assert!(item.details.is_none());
}

#[test]
fn expertise_item_accepts_title_with_details() {
    let item = ExpertiseItem::from_content(&node(json!({
        "title": "Programming",
        "details": "Rust, Python"
    })))
    .unwrap();
    assert_eq!(item.details.as_deref(), Some("Rust, Python"));
}

#[test]
fn expertise_item_rejects_non_text_details() {
    let err = ExpertiseItem::from_content(&node(json!({
        "title": "Programming",
        "details": ["Rust"]
    })))
    .unwrap_err();
    assert_eq!(err.field, Some("details"));
    assert_eq!(err.found, Some(NodeShape::Sequence));
}

#[test]
fn academic_work_maps_type_to_kind() {
    let work = AcademicWork::from_content(&node(json!({
        "title": "Thesis",
        "type": "BSc",
        "description": "Stiff ODEs",
        "file": "/docs/thesis.pdf"
    })))
    .unwrap();
    assert_eq!(work.kind, "BSc");
}

#[test]
fn service_copy_reports_missing_field() {
    let err = ServiceCopy::from_content(&node(json!({"title": "Music", "description": "x"})))
        .unwrap_err();
    assert_eq!(
        err,
        ShapeError {
            field: Some("cta"),
            expected: NodeShape::Text,
            found: None,
        }
    );
}

#[test]
fn shipped_locales_satisfy_schema() {
    let tree = TranslationTree::from_json_documents([
        (Language::En, include_str!("../../../../assets/locales/en/common.json")),
        (Language::Nl, include_str!("../../../../assets/locales/nl/common.json")),
    ])
    .unwrap();

    assert_eq!(validate(&tree), Vec::new());
    assert!(tree.parity_gaps().is_empty());
}

#[test]
fn validate_reports_violations_per_language() {
    let tree = TranslationTree::from_json_documents([
        (
            Language::En,
            r#"{
                "general": { "name": "Stephen" },
                "about": { "sections": { "academicWorks": { "works": [
                    { "title": "Thesis", "type": "BSc", "description": "d" }
                ] } } },
                "expertise": { "items": { "broken": ["x"] } }
            }"#,
        ),
    ])
    .unwrap();

    let violations = validate(&tree);

    assert!(violations.iter().all(|v| v.language == Language::En));
    assert!(violations.contains(&SchemaViolation {
        language: Language::En,
        path: "general.intro".into(),
        problem: ResolutionErrorKind::MissingKey,
    }));
    assert!(violations.contains(&SchemaViolation {
        language: Language::En,
        path: "about.sections.academicWorks.works.0.file".into(),
        problem: ResolutionErrorKind::MissingKey,
    }));
    assert!(violations.contains(&SchemaViolation {
        language: Language::En,
        path: "expertise.items.broken".into(),
        problem: ResolutionErrorKind::ShapeMismatch {
            expected: NodeShape::Map,
            found: NodeShape::Sequence,
        },
    }));
    assert!(!violations.iter().any(|v| v.path == "general.name"));
}
