//! Shared UI crate for Tempo onboarding. Flow logic, screens and the theme
//! live here; the platform crates only launch [`components::AppShell`].

pub mod components;
pub mod core;
pub mod i18n;
pub mod views;

/// Unified theme, inlined by every launcher.
pub const THEME_CSS: &str = include_str!("../assets/theme/main.css");

#[cfg(test)]
mod tests {
    mod i18n_completeness;
}
