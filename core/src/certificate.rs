use crate::product::{ProductDraft, TextField};

pub const CERTIFICATE_TITLE_HI: &str = "रत्न प्रमाणपत्र";
pub const CERTIFICATE_TITLE_EN: &str = "GEMSTONE CERTIFICATE";
pub const IMAGE_LOAD_ERROR_TEXT: &str = "Image failed to load";

/// Read-only snapshot of the draft fields the certificate displays.
///
/// Derived on every draft edit; the certificate never feeds values back
/// into the form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CertificateData {
    pub name: String,
    pub weight_ratti: String,
    pub weight_carat: String,
    pub shape: String,
    pub colour: String,
    pub cut: String,
    pub origin: String,
    pub treatment: String,
    pub hardness: String,
    pub refractive_index: String,
    pub specific_gravity: String,
    pub dimensions: String,
    pub base_image_url: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CertificateRow {
    pub label_hi: &'static str,
    pub label_en: &'static str,
    pub value: String,
}

impl CertificateData {
    pub fn from_draft(draft: &ProductDraft) -> Self {
        let field = |f: TextField| draft.text(f).trim().to_string();
        Self {
            name: field(TextField::Name),
            weight_ratti: field(TextField::WeightRatti),
            weight_carat: field(TextField::WeightCarat),
            shape: field(TextField::Shape),
            colour: field(TextField::Colour),
            cut: field(TextField::Cut),
            origin: field(TextField::Origin),
            treatment: field(TextField::Treatment),
            hardness: field(TextField::Hardness),
            refractive_index: field(TextField::RefractiveIndex),
            specific_gravity: field(TextField::SpecificGravity),
            dimensions: field(TextField::Dimensions),
            base_image_url: field(TextField::CertificateUrl),
        }
    }

    /// Property rows in template order. Fields left blank on the draft
    /// produce no row at all.
    pub fn rows(&self) -> Vec<CertificateRow> {
        let mut rows = Vec::new();
        push_row(&mut rows, "वज़न", "WEIGHT", &self.weight_ratti, Some("RATTI"));
        push_row(
            &mut rows,
            "कैरेट भार",
            "CARAT WEIGHT",
            &self.weight_carat,
            Some("CARAT"),
        );
        push_row(&mut rows, "आकृति", "SHAPE", &self.shape, None);
        push_row(&mut rows, "रंग", "COLOUR", &self.colour, None);
        push_row(&mut rows, "कट", "CUT", &self.cut, None);
        push_row(&mut rows, "उद्गम", "ORIGIN", &self.origin, None);
        push_row(&mut rows, "उपचार", "TREATMENT", &self.treatment, None);
        push_row(&mut rows, "कठोरता", "HARDNESS", &self.hardness, Some("MOHS"));
        push_row(
            &mut rows,
            "अपवर्तनांक",
            "REFRACTIVE INDEX",
            &self.refractive_index,
            None,
        );
        push_row(
            &mut rows,
            "आपेक्षिक घनत्व",
            "SPECIFIC GRAVITY",
            &self.specific_gravity,
            None,
        );
        push_row(&mut rows, "आयाम", "DIMENSIONS", &self.dimensions, Some("MM"));
        rows
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.base_image_url.is_empty() && self.rows().is_empty()
    }
}

fn push_row(
    rows: &mut Vec<CertificateRow>,
    label_hi: &'static str,
    label_en: &'static str,
    raw: &str,
    unit: Option<&str>,
) {
    let value = raw.trim();
    if value.is_empty() {
        return;
    }
    let value = match unit {
        Some(unit) => format!("{value} {unit}"),
        None => value.to_string(),
    };
    rows.push(CertificateRow {
        label_hi,
        label_en,
        value,
    });
}

/// Where the certificate's base image is in its load cycle.
///
/// A non-empty URL is shown immediately; the error state is only entered
/// when the browser reports the load failing, and only a URL change can
/// leave it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ImageLoadState {
    #[default]
    NoImage,
    Loaded,
    Error,
}

impl ImageLoadState {
    pub fn url_changed(self, url: &str) -> Self {
        if url.trim().is_empty() {
            ImageLoadState::NoImage
        } else {
            ImageLoadState::Loaded
        }
    }

    pub fn load_failed(self) -> Self {
        match self {
            ImageLoadState::NoImage => ImageLoadState::NoImage,
            ImageLoadState::Loaded | ImageLoadState::Error => ImageLoadState::Error,
        }
    }
}
