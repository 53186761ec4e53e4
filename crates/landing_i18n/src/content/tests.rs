use super::*;
use crate::tree::TranslationTree;
use std::sync::Arc;

fn shipped_tree() -> Arc<TranslationTree> {
    Arc::new(
        TranslationTree::from_json_documents([
            (Language::En, include_str!("../../../../assets/locales/en/common.json")),
            (Language::Nl, include_str!("../../../../assets/locales/nl/common.json")),
        ])
        .expect("mitgelieferte Übersetzungen sollten laden"),
    )
}

#[test]
fn shipped_content_resolves_without_errors() {
    for language in Language::ALL {
        let localizer = Localizer::with_language(shipped_tree(), language);

        let resolved = LandingContent::resolve(&localizer);

        assert!(resolved.errors.is_empty(), "{language}: {:?}", resolved.errors);
        assert_eq!(resolved.content.language, language);
        assert_eq!(resolved.content.services.len(), SERVICE_KEYS.len());
        assert_eq!(resolved.content.about.academic_works.len(), 2);
    }
}

#[test]
fn language_switch_changes_service_titles() {
    let mut localizer = Localizer::new(shipped_tree());
    let en = LandingContent::resolve(&localizer).content;

    localizer.toggle_language();
    let nl = LandingContent::resolve(&localizer).content;

    assert_eq!(en.service("music").unwrap().title, "Music");
    assert_eq!(nl.service("music").unwrap().title, "Muziek");
}

#[test]
fn expertise_items_keep_document_order_and_mixed_shapes() {
    let localizer = Localizer::new(shipped_tree());

    let content = LandingContent::resolve(&localizer).content;
    let keys: Vec<&str> = content.expertise.items.keys().map(String::as_str).collect();

    assert_eq!(
        keys,
        [
            "advancedEducation",
            "diverseKnowledge",
            "researchAppliedMath",
            "programmingSkills",
            "problemSolving",
            "continuousLearning"
        ]
    );
    assert!(content.expertise.items["diverseKnowledge"].details.is_none());
    assert!(content.expertise.items["advancedEducation"].details.is_some());
}

#[test]
fn about_section_detail_picks_section_specific_field() {
    let localizer = Localizer::new(shipped_tree());

    let about = LandingContent::resolve(&localizer).content.about;

    assert_eq!(
        about.sections["languages"].detail.as_deref(),
        Some("Dutch, English, Twi")
    );
    assert_eq!(about.sections["tutoring"].years.as_deref(), Some("10+ years"));
    assert!(about.sections["teaching"].detail.is_none());
}

#[test]
fn broken_sections_degrade_instead_of_failing() {
    let tree = TranslationTree::from_json_documents([(
        Language::En,
        r#"{
            "general": { "name": "Stephen" },
            "about": { "sections": { "academicWorks": { "works": "oops" } } },
            "expertise": { "items": { "ok": "Fine", "bad": ["x"] } }
        }"#,
    )])
    .unwrap();
    let localizer = Localizer::new(Arc::new(tree));

    let resolved = LandingContent::resolve(&localizer);

    assert_eq!(resolved.content.general.name, "Stephen");
    assert_eq!(resolved.content.general.intro, "general.intro");
    assert!(resolved.content.about.academic_works.is_empty());
    assert_eq!(resolved.content.expertise.items.len(), 1);
    assert!(resolved.errors.iter().any(|e| e.is_shape_mismatch()
        && e.path == ACADEMIC_WORKS_PATH));
    assert!(resolved
        .errors
        .iter()
        .any(|e| e.is_shape_mismatch() && e.path == "expertise.items.bad"));
}
