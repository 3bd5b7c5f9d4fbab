use crate::protocol::ProductRecord;

/// Typed path to one scalar field of the product form. Wire names for the
/// multipart payload come from [`TextField::upload_name`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextField {
    Name,
    Category,
    Description,
    ActualPrice,
    SalePrice,
    Quantity,
    WeightRatti,
    WeightCarat,
    Shape,
    Colour,
    Cut,
    Origin,
    Treatment,
    Hardness,
    RefractiveIndex,
    SpecificGravity,
    Dimensions,
    CertificateUrl,
}

pub const TEXT_FIELDS: &[TextField] = &[
    TextField::Name,
    TextField::Category,
    TextField::Description,
    TextField::ActualPrice,
    TextField::SalePrice,
    TextField::Quantity,
    TextField::WeightRatti,
    TextField::WeightCarat,
    TextField::Shape,
    TextField::Colour,
    TextField::Cut,
    TextField::Origin,
    TextField::Treatment,
    TextField::Hardness,
    TextField::RefractiveIndex,
    TextField::SpecificGravity,
    TextField::Dimensions,
    TextField::CertificateUrl,
];

impl TextField {
    pub fn upload_name(self) -> &'static str {
        match self {
            TextField::Name => "name",
            TextField::Category => "category",
            TextField::Description => "description",
            TextField::ActualPrice => "actual_price",
            TextField::SalePrice => "sale_price",
            TextField::Quantity => "quantity",
            TextField::WeightRatti => "weight_ratti",
            TextField::WeightCarat => "weight_carat",
            TextField::Shape => "shape",
            TextField::Colour => "colour",
            TextField::Cut => "cut",
            TextField::Origin => "origin",
            TextField::Treatment => "treatment",
            TextField::Hardness => "hardness",
            TextField::RefractiveIndex => "refractive_index",
            TextField::SpecificGravity => "specific_gravity",
            TextField::Dimensions => "dimensions",
            TextField::CertificateUrl => "certificate_url",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TextField::Name => "Product name",
            TextField::Category => "Category",
            TextField::Description => "Description",
            TextField::ActualPrice => "Actual price",
            TextField::SalePrice => "Sale price",
            TextField::Quantity => "Quantity in stock",
            TextField::WeightRatti => "Weight (ratti)",
            TextField::WeightCarat => "Weight (carat)",
            TextField::Shape => "Shape",
            TextField::Colour => "Colour",
            TextField::Cut => "Cut",
            TextField::Origin => "Origin",
            TextField::Treatment => "Treatment",
            TextField::Hardness => "Hardness (Mohs)",
            TextField::RefractiveIndex => "Refractive index",
            TextField::SpecificGravity => "Specific gravity",
            TextField::Dimensions => "Dimensions (mm)",
            TextField::CertificateUrl => "Certificate image URL",
        }
    }
}

/// Typed path to one file-bearing slot of the product form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FileField {
    Image1,
    Image2,
    Image3,
    Image4,
    Video,
}

pub const FILE_FIELDS: &[FileField] = &[
    FileField::Image1,
    FileField::Image2,
    FileField::Image3,
    FileField::Image4,
    FileField::Video,
];

pub const FILE_SLOT_COUNT: usize = FILE_FIELDS.len();

impl FileField {
    pub fn upload_name(self) -> &'static str {
        match self {
            FileField::Image1 => "image1",
            FileField::Image2 => "image2",
            FileField::Image3 => "image3",
            FileField::Image4 => "image4",
            FileField::Video => "video",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FileField::Image1 => "Image 1",
            FileField::Image2 => "Image 2",
            FileField::Image3 => "Image 3",
            FileField::Image4 => "Image 4",
            FileField::Video => "Video",
        }
    }

    pub fn accept(self) -> &'static str {
        match self {
            FileField::Video => "video/*",
            _ => "image/*",
        }
    }

    pub fn index(self) -> usize {
        match self {
            FileField::Image1 => 0,
            FileField::Image2 => 1,
            FileField::Image3 => 2,
            FileField::Image4 => 3,
            FileField::Video => 4,
        }
    }
}

/// Flat record of every scalar form field, carried as raw input text.
/// Numeric interpretation happens at validation time, never per keystroke.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProductDraft {
    pub name: String,
    pub category: String,
    pub description: String,
    pub actual_price: String,
    pub sale_price: String,
    pub quantity: String,
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
    pub certificate_url: String,
}

impl ProductDraft {
    pub fn text(&self, field: TextField) -> &str {
        match field {
            TextField::Name => &self.name,
            TextField::Category => &self.category,
            TextField::Description => &self.description,
            TextField::ActualPrice => &self.actual_price,
            TextField::SalePrice => &self.sale_price,
            TextField::Quantity => &self.quantity,
            TextField::WeightRatti => &self.weight_ratti,
            TextField::WeightCarat => &self.weight_carat,
            TextField::Shape => &self.shape,
            TextField::Colour => &self.colour,
            TextField::Cut => &self.cut,
            TextField::Origin => &self.origin,
            TextField::Treatment => &self.treatment,
            TextField::Hardness => &self.hardness,
            TextField::RefractiveIndex => &self.refractive_index,
            TextField::SpecificGravity => &self.specific_gravity,
            TextField::Dimensions => &self.dimensions,
            TextField::CertificateUrl => &self.certificate_url,
        }
    }

    /// Replaces exactly one field, leaving every sibling untouched.
    pub fn set_text(&mut self, field: TextField, value: String) {
        let slot = match field {
            TextField::Name => &mut self.name,
            TextField::Category => &mut self.category,
            TextField::Description => &mut self.description,
            TextField::ActualPrice => &mut self.actual_price,
            TextField::SalePrice => &mut self.sale_price,
            TextField::Quantity => &mut self.quantity,
            TextField::WeightRatti => &mut self.weight_ratti,
            TextField::WeightCarat => &mut self.weight_carat,
            TextField::Shape => &mut self.shape,
            TextField::Colour => &mut self.colour,
            TextField::Cut => &mut self.cut,
            TextField::Origin => &mut self.origin,
            TextField::Treatment => &mut self.treatment,
            TextField::Hardness => &mut self.hardness,
            TextField::RefractiveIndex => &mut self.refractive_index,
            TextField::SpecificGravity => &mut self.specific_gravity,
            TextField::Dimensions => &mut self.dimensions,
            TextField::CertificateUrl => &mut self.certificate_url,
        };
        *slot = value;
    }

    /// Prefills a draft from a stored record for the edit flow.
    pub fn from_record(record: &ProductRecord) -> Self {
        Self {
            name: record.name.clone(),
            category: record.category.clone(),
            description: record.description.clone(),
            actual_price: format_amount(record.actual_price),
            sale_price: format_amount(record.sale_price),
            quantity: record.quantity.to_string(),
            weight_ratti: record.weight_ratti.clone(),
            weight_carat: record.weight_carat.clone(),
            shape: record.shape.clone(),
            colour: record.colour.clone(),
            cut: record.cut.clone(),
            origin: record.origin.clone(),
            treatment: record.treatment.clone(),
            hardness: record.hardness.clone(),
            refractive_index: record.refractive_index.clone(),
            specific_gravity: record.specific_gravity.clone(),
            dimensions: record.dimensions.clone(),
            certificate_url: record.certificate_url.clone(),
        }
    }
}

fn format_amount(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1.0e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}
