pub mod catalog;
pub mod certificate;
pub mod preview;
pub mod product;
pub mod protocol;
pub mod submission;
pub mod validate;

pub use catalog::{category_by_slug, category_label, CategoryEntry, CATEGORY_CATALOG, DEFAULT_CATEGORY_SLUG};
pub use certificate::{
    CertificateData, CertificateRow, ImageLoadState, CERTIFICATE_TITLE_EN, CERTIFICATE_TITLE_HI,
    IMAGE_LOAD_ERROR_TEXT,
};
pub use preview::{classify_mime, PreviewKind, ScopedPreview};
pub use product::{FileField, ProductDraft, TextField, FILE_FIELDS, FILE_SLOT_COUNT, TEXT_FIELDS};
pub use protocol::ProductRecord;
pub use submission::{build_submission, is_upload_reference_name, SubmissionPlan};
pub use validate::validate_draft;
