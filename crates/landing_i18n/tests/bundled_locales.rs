use landing_i18n::{schema, LandingContent, Language, Localizer, TranslationTree};
use std::path::Path;
use std::sync::Arc;

fn bundled_tree() -> Arc<TranslationTree> {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../assets/locales");
    let tree = TranslationTree::load_dir(&dir).expect("Mitgelieferte Übersetzungen sollten laden");
    Arc::new(tree)
}

#[test]
fn bundled_locales_match_schema_and_each_other() {
    let tree = bundled_tree();

    assert_eq!(schema::validate(&tree), Vec::new());
    assert!(tree.parity_gaps().is_empty(), "{:?}", tree.parity_gaps());
}

#[test]
fn bundled_locales_resolve_in_both_languages() {
    let tree = bundled_tree();

    for language in Language::ALL {
        let localizer = Localizer::with_language(tree.clone(), language);
        let resolved = LandingContent::resolve(&localizer);

        assert!(
            resolved.errors.is_empty(),
            "Fehler in {language}: {:?}",
            resolved.errors
        );
        assert_eq!(resolved.content.about.academic_works.len(), 2);
        assert_eq!(resolved.content.expertise.items.len(), 6);
    }
}

#[test]
fn dutch_content_differs_from_english_fallback() {
    let tree = bundled_tree();
    let en = Localizer::with_language(tree.clone(), Language::En);
    let nl = Localizer::with_language(tree, Language::Nl);

    assert_eq!(en.text("services.music.title").ok(), Some("Music"));
    assert_eq!(nl.text("services.music.title").ok(), Some("Muziek"));
}
