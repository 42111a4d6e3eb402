//! Platform detection helpers.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Web,
    Desktop,
    Mobile,
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(target_arch = "wasm32") {
            Self::Web
        } else if cfg!(any(target_os = "android", target_os = "ios")) {
            Self::Mobile
        } else {
            Self::Desktop
        }
    }

    /// Shell modifier. Web and desktop frame the flow in a phone-sized column.
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Web => "app--web",
            Self::Desktop => "app--desktop",
            Self::Mobile => "app--mobile",
        }
    }
}
