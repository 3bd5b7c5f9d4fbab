#[derive(Clone, Copy, Debug)]
pub struct CategoryEntry {
    pub label: &'static str,
    pub slug: &'static str,
}

pub const DEFAULT_CATEGORY_SLUG: &str = "gemstones";

pub const CATEGORY_CATALOG: &[CategoryEntry] = &[
    CategoryEntry {
        label: "Gemstones",
        slug: DEFAULT_CATEGORY_SLUG,
    },
    CategoryEntry {
        label: "Rudraksha",
        slug: "rudraksha",
    },
    CategoryEntry {
        label: "Bracelets",
        slug: "bracelets",
    },
    CategoryEntry {
        label: "Mala & Rosary",
        slug: "mala-rosary",
    },
    CategoryEntry {
        label: "Yantra",
        slug: "yantra",
    },
    CategoryEntry {
        label: "Lucky Charms",
        slug: "lucky-charms",
    },
];

pub fn category_by_slug(slug: &str) -> Option<&'static CategoryEntry> {
    let trimmed = slug.trim();
    CATEGORY_CATALOG
        .iter()
        .find(|entry| entry.slug.eq_ignore_ascii_case(trimmed))
}

/// Display label for a stored category slug, falling back to the raw slug
/// for values the catalog no longer lists.
pub fn category_label(slug: &str) -> &str {
    match category_by_slug(slug) {
        Some(entry) => entry.label,
        None => slug,
    }
}
