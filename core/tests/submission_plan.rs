use gemdesk_core::product::{FileField, ProductDraft, TextField};
use gemdesk_core::submission::{build_submission, is_upload_reference_name, SubmissionPlan};

fn part<'a>(plan: &'a SubmissionPlan, name: &str) -> Option<&'a str> {
    plan.text_parts
        .iter()
        .find(|(part_name, _)| part_name == name)
        .map(|(_, value)| value.as_str())
}

#[test]
fn plan_carries_scalar_fields_without_attachments() {
    let mut draft = ProductDraft::default();
    draft.set_text(TextField::Name, "Ruby".to_string());
    draft.set_text(TextField::Category, "gemstones".to_string());
    draft.set_text(TextField::ActualPrice, "100".to_string());
    draft.set_text(TextField::SalePrice, "150".to_string());

    let plan = build_submission(&draft, &[]);
    assert_eq!(part(&plan, "name"), Some("Ruby"));
    assert_eq!(part(&plan, "category"), Some("gemstones"));
    assert_eq!(part(&plan, "actual_price"), Some("100"));
    assert_eq!(part(&plan, "sale_price"), Some("150"));
    assert!(plan.file_parts.is_empty());
}

#[test]
fn upload_reference_fields_never_become_text_parts() {
    let mut draft = ProductDraft::default();
    draft.set_text(
        TextField::CertificateUrl,
        "https://cdn.example/cert.jpg".to_string(),
    );
    let plan = build_submission(&draft, &[]);
    assert_eq!(part(&plan, "certificate_url"), None);
}

#[test]
fn attached_slots_keep_canonical_order() {
    let draft = ProductDraft::default();
    let plan = build_submission(&draft, &[FileField::Video, FileField::Image2]);
    assert_eq!(plan.file_parts, vec![FileField::Image2, FileField::Video]);
}

#[test]
fn reference_name_matching() {
    assert!(is_upload_reference_name("certificate_url"));
    assert!(is_upload_reference_name("image_file"));
    assert!(is_upload_reference_name("url"));
    assert!(is_upload_reference_name("FILE"));
    assert!(!is_upload_reference_name("name"));
    assert!(!is_upload_reference_name("curl"));
}

#[test]
fn empty_fields_still_appear_as_parts() {
    let plan = build_submission(&ProductDraft::default(), &[]);
    assert_eq!(part(&plan, "description"), Some(""));
    assert_eq!(part(&plan, "quantity"), Some(""));
}
