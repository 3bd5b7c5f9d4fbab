use gemdesk_core::catalog::{category_by_slug, category_label, CATEGORY_CATALOG, DEFAULT_CATEGORY_SLUG};

#[test]
fn default_slug_is_listed() {
    assert!(CATEGORY_CATALOG
        .iter()
        .any(|entry| entry.slug == DEFAULT_CATEGORY_SLUG));
}

#[test]
fn slug_lookup_trims_and_ignores_case() {
    let entry = category_by_slug("  Mala-Rosary ").expect("known slug");
    assert_eq!(entry.label, "Mala & Rosary");
    assert!(category_by_slug("diamonds").is_none());
}

#[test]
fn label_falls_back_to_the_raw_slug() {
    assert_eq!(category_label("rudraksha"), "Rudraksha");
    assert_eq!(category_label("retired-category"), "retired-category");
}
