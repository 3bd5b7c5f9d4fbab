pub(crate) const UI_SETTINGS_VERSION: u32 = 1;

pub(crate) const UI_SETTINGS_KEY: &str = "ui.v1";

#[derive(Clone, Copy, Debug, PartialEq, Eq, rkyv::Archive, rkyv::Serialize, rkyv::Deserialize)]
#[repr(u8)]
pub(crate) enum ThemeMode {
    System,
    Light,
    Dark,
}

impl ThemeMode {
    pub(crate) fn attr_value(self) -> &'static str {
        match self {
            ThemeMode::System => "system",
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    pub(crate) fn next(self) -> Self {
        match self {
            ThemeMode::System => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::System,
        }
    }

    pub(crate) fn label(self) -> &'static str {
        match self {
            ThemeMode::System => "System",
            ThemeMode::Light => "Light",
            ThemeMode::Dark => "Dark",
        }
    }
}

#[derive(Clone, rkyv::Archive, rkyv::Serialize, rkyv::Deserialize)]
pub(crate) struct UiSettings {
    pub(crate) version: u32,
    pub(crate) theme_mode: ThemeMode,
    pub(crate) last_section: Option<String>,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            version: UI_SETTINGS_VERSION,
            theme_mode: ThemeMode::System,
            last_section: None,
        }
    }
}
