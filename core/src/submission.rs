use crate::product::{FileField, ProductDraft, FILE_FIELDS, TEXT_FIELDS};

/// Ordered parts for one multipart product submission.
///
/// Text parts keep draft order and keep empty values; binary slots are
/// listed so the caller can append the actual file handles itself.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SubmissionPlan {
    pub text_parts: Vec<(String, String)>,
    pub file_parts: Vec<FileField>,
}

/// Wire names reserved for uploads or upload references. Draft fields
/// whose name matches are never emitted as plain text parts.
pub fn is_upload_reference_name(name: &str) -> bool {
    let name = name.to_ascii_lowercase();
    name.contains("file") || name == "url" || name.ends_with("_url")
}

pub fn build_submission(draft: &ProductDraft, attached: &[FileField]) -> SubmissionPlan {
    let mut plan = SubmissionPlan::default();
    for &field in TEXT_FIELDS {
        let name = field.upload_name();
        if is_upload_reference_name(name) {
            continue;
        }
        plan.text_parts
            .push((name.to_string(), draft.text(field).to_string()));
    }
    for &slot in FILE_FIELDS {
        if attached.contains(&slot) {
            plan.file_parts.push(slot);
        }
    }
    plan
}
