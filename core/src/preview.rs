/// How a picked file can be shown before upload.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PreviewKind {
    Image,
    Video,
    Unsupported,
}

pub fn classify_mime(mime: &str) -> PreviewKind {
    let mime = mime.trim();
    if mime.starts_with("image/") {
        PreviewKind::Image
    } else if mime.starts_with("video/") {
        PreviewKind::Video
    } else {
        PreviewKind::Unsupported
    }
}

/// A preview URL tied to the lifetime of this value.
///
/// The disposer runs exactly once, when the preview is dropped. Replacing
/// a slot's preview therefore releases the old URL before the new one is
/// shown; unsupported files carry no URL and nothing to release.
pub struct ScopedPreview {
    kind: PreviewKind,
    url: Option<String>,
    file_name: String,
    disposer: Option<Box<dyn FnOnce(&str)>>,
}

impl ScopedPreview {
    pub fn new<F>(kind: PreviewKind, url: String, file_name: impl Into<String>, disposer: F) -> Self
    where
        F: FnOnce(&str) + 'static,
    {
        Self {
            kind,
            url: Some(url),
            file_name: file_name.into(),
            disposer: Some(Box::new(disposer)),
        }
    }

    pub fn unsupported(file_name: impl Into<String>) -> Self {
        Self {
            kind: PreviewKind::Unsupported,
            url: None,
            file_name: file_name.into(),
            disposer: None,
        }
    }

    pub fn kind(&self) -> PreviewKind {
        self.kind
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }
}

impl Drop for ScopedPreview {
    fn drop(&mut self) {
        if let (Some(disposer), Some(url)) = (self.disposer.take(), self.url.take()) {
            disposer(&url);
        }
    }
}
