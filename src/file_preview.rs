use web_sys::{File, Url};

use gemdesk_core::preview::{classify_mime, PreviewKind, ScopedPreview};
use gemdesk_core::product::{FileField, FILE_FIELDS, FILE_SLOT_COUNT};

pub(crate) const UPLOAD_MAX_BYTES: u64 = 50 * 1024 * 1024;

/// Builds a preview for a freshly picked file. Supported kinds get an
/// object URL that is revoked when the preview is dropped; anything else
/// gets a URL-less placeholder.
pub(crate) fn preview_for_file(file: &File) -> Result<ScopedPreview, String> {
    let kind = classify_mime(&file.type_());
    if kind == PreviewKind::Unsupported {
        return Ok(ScopedPreview::unsupported(file.name()));
    }
    let url = Url::create_object_url_with_blob(file)
        .map_err(|_| "failed to create preview".to_string())?;
    Ok(ScopedPreview::new(kind, url, file.name(), revoke_preview_url))
}

pub(crate) fn revoke_preview_url(url: &str) {
    let _ = Url::revoke_object_url(url);
}

/// One live preview per media slot. Setting a slot drops the previous
/// preview, which revokes its URL.
#[derive(Default)]
pub(crate) struct PreviewSlots {
    slots: [Option<ScopedPreview>; FILE_SLOT_COUNT],
}

impl PreviewSlots {
    pub(crate) fn set(&mut self, field: FileField, preview: Option<ScopedPreview>) {
        self.slots[field.index()] = preview;
    }

    pub(crate) fn get(&self, field: FileField) -> Option<&ScopedPreview> {
        self.slots[field.index()].as_ref()
    }

    pub(crate) fn clear(&mut self) {
        for slot in &mut self.slots {
            *slot = None;
        }
    }
}

/// The picked file handles themselves, kept apart from previews so a
/// submission can read them after previews are replaced.
#[derive(Clone, Default)]
pub(crate) struct FileSlots {
    slots: [Option<File>; FILE_SLOT_COUNT],
}

impl FileSlots {
    pub(crate) fn set(&mut self, field: FileField, file: Option<File>) {
        self.slots[field.index()] = file;
    }

    pub(crate) fn get(&self, field: FileField) -> Option<&File> {
        self.slots[field.index()].as_ref()
    }

    pub(crate) fn attached(&self) -> Vec<FileField> {
        FILE_FIELDS
            .iter()
            .copied()
            .filter(|field| self.slots[field.index()].is_some())
            .collect()
    }

    pub(crate) fn clear(&mut self) {
        for slot in &mut self.slots {
            *slot = None;
        }
    }
}
