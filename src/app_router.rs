use std::rc::Rc;

use gloo::events::EventListener;

use crate::persisted_store;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Section {
    Products,
    NewProduct,
    Orders,
    Customers,
    Banners,
    Offers,
    Astrologers,
    Appointments,
    Blogs,
    Reports,
}

pub(crate) const SECTIONS: &[Section] = &[
    Section::Products,
    Section::NewProduct,
    Section::Orders,
    Section::Customers,
    Section::Banners,
    Section::Offers,
    Section::Astrologers,
    Section::Appointments,
    Section::Blogs,
    Section::Reports,
];

impl Section {
    pub(crate) fn slug(self) -> &'static str {
        match self {
            Section::Products => "products",
            Section::NewProduct => "products/new",
            Section::Orders => "orders",
            Section::Customers => "customers",
            Section::Banners => "banners",
            Section::Offers => "offers",
            Section::Astrologers => "astrologers",
            Section::Appointments => "appointments",
            Section::Blogs => "blogs",
            Section::Reports => "reports",
        }
    }

    pub(crate) fn title(self) -> &'static str {
        match self {
            Section::Products => "Products",
            Section::NewProduct => "New Product",
            Section::Orders => "Orders",
            Section::Customers => "Customers",
            Section::Banners => "Banners",
            Section::Offers => "Navbar Offers",
            Section::Astrologers => "Astrologers",
            Section::Appointments => "Appointments",
            Section::Blogs => "Blog",
            Section::Reports => "Reports",
        }
    }

    fn from_slug(slug: &str) -> Option<Self> {
        let slug = slug.trim().trim_matches('/');
        SECTIONS
            .iter()
            .copied()
            .find(|section| section.slug().eq_ignore_ascii_case(slug))
    }
}

pub(crate) fn parse_section_hash(hash: &str) -> Option<Section> {
    let raw = hash.trim();
    if raw.is_empty() {
        return None;
    }
    let raw = raw.trim_start_matches('#').trim();
    if raw.is_empty() {
        return None;
    }
    Section::from_slug(raw)
}

pub(crate) fn format_section_hash(section: Section) -> String {
    format!("#/{}", section.slug())
}

/// Section for the current location, falling back to the last section
/// the user visited, then to the product list.
pub(crate) fn current_section() -> Section {
    if let Some(section) = location_section() {
        return section;
    }
    if let Some(slug) = persisted_store::ui_settings().last_section {
        if let Some(section) = Section::from_slug(&slug) {
            return section;
        }
    }
    Section::Products
}

fn location_section() -> Option<Section> {
    let window = web_sys::window()?;
    let hash = window.location().hash().ok()?;
    parse_section_hash(&hash)
}

pub(crate) fn navigate_to(section: Section) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let _ = window.location().set_hash(&format_section_hash(section));
}

pub(crate) fn remember_section(section: Section) {
    persisted_store::update_ui_settings(move |settings| {
        settings.last_section = Some(section.slug().to_string());
    });
}

pub(crate) fn listen_hash_change(handler: Rc<dyn Fn()>) -> Option<EventListener> {
    let window = web_sys::window()?;
    Some(EventListener::new(&window, "hashchange", move |_| {
        handler();
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_round_trips_for_every_section() {
        for &section in SECTIONS {
            let hash = format_section_hash(section);
            assert_eq!(parse_section_hash(&hash), Some(section));
        }
    }

    #[test]
    fn hash_without_leading_slash_still_parses() {
        assert_eq!(parse_section_hash("#orders"), Some(Section::Orders));
        assert_eq!(parse_section_hash("#/ORDERS"), Some(Section::Orders));
    }

    #[test]
    fn unknown_or_empty_hash_parses_to_none() {
        assert_eq!(parse_section_hash(""), None);
        assert_eq!(parse_section_hash("#"), None);
        assert_eq!(parse_section_hash("#/warehouse"), None);
    }
}
