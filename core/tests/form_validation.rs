use gemdesk_core::product::{ProductDraft, TextField};
use gemdesk_core::validate::validate_draft;

fn draft_with_basics() -> ProductDraft {
    let mut draft = ProductDraft::default();
    draft.set_text(TextField::Name, "Ruby".to_string());
    draft.set_text(TextField::Category, "gemstones".to_string());
    draft.set_text(TextField::ActualPrice, "100".to_string());
    draft.set_text(TextField::SalePrice, "150".to_string());
    draft
}

#[test]
fn complete_draft_passes() {
    let draft = draft_with_basics();
    assert_eq!(validate_draft(&draft), Vec::<String>::new());
}

#[test]
fn sale_below_actual_is_rejected() {
    let mut draft = draft_with_basics();
    draft.set_text(TextField::SalePrice, "90".to_string());
    let errors = validate_draft(&draft);
    assert_eq!(errors.len(), 1);
    assert!(errors[0].contains("Sale price"));
}

#[test]
fn equal_prices_are_rejected() {
    let mut draft = draft_with_basics();
    draft.set_text(TextField::SalePrice, "100".to_string());
    let errors = validate_draft(&draft);
    assert!(errors.iter().any(|e| e.contains("greater than")));
}

#[test]
fn missing_category_is_reported() {
    let mut draft = draft_with_basics();
    draft.set_text(TextField::Category, String::new());
    let errors = validate_draft(&draft);
    assert!(errors.iter().any(|e| e.contains("Category")));
}

#[test]
fn negative_price_is_reported() {
    let mut draft = draft_with_basics();
    draft.set_text(TextField::ActualPrice, "-5".to_string());
    let errors = validate_draft(&draft);
    assert!(errors.iter().any(|e| e.contains("must not be negative")));
}

#[test]
fn non_numeric_price_is_reported() {
    let mut draft = draft_with_basics();
    draft.set_text(TextField::SalePrice, "abc".to_string());
    let errors = validate_draft(&draft);
    assert!(errors.iter().any(|e| e.contains("must be a number")));
}

#[test]
fn empty_draft_collects_every_violation() {
    let errors = validate_draft(&ProductDraft::default());
    // category, name, both prices
    assert_eq!(errors.len(), 4);
}

#[test]
fn fractional_quantity_is_rejected() {
    let mut draft = draft_with_basics();
    draft.set_text(TextField::Quantity, "2.5".to_string());
    let errors = validate_draft(&draft);
    assert!(errors.iter().any(|e| e.contains("whole number")));

    draft.set_text(TextField::Quantity, "3".to_string());
    assert!(validate_draft(&draft).is_empty());
}

#[test]
fn set_text_leaves_other_fields_alone() {
    let mut draft = draft_with_basics();
    draft.set_text(TextField::Colour, "Pigeon Blood".to_string());
    assert_eq!(draft.text(TextField::Name), "Ruby");
    assert_eq!(draft.text(TextField::ActualPrice), "100");
    assert_eq!(draft.text(TextField::Colour), "Pigeon Blood");
}
