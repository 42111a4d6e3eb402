#![cfg(test)]
//! Selector lint for the shared theme.
//!
//! A substring check per selector the screens rely on. When a component's
//! class names change, update `REQUIRED_SELECTORS` together with the markup.

use ui::core::flow::Screen;

const THEME_CSS: &str = ui::THEME_CSS;

const REQUIRED_SELECTORS: &[&str] = &[
    // Shell
    ":root",
    "body {",
    ".app {",
    ".app--web .device",
    ".device__viewport",
    ".screen {",
    ".status-bar",
    // Page scaffolding
    ".page {",
    ".page__header",
    ".page__title",
    ".page__footer",
    ".gradient-bg",
    // Controls
    ".button--primary",
    ".button--block",
    ".back-button",
    ".skip-button",
    ".link-button",
    // Forms and code entry
    ".form__input--invalid",
    ".form__error",
    ".otp__box",
    ".otp__box--verified",
    ".keypad__key",
    // Lists, chips, dialogs
    ".chip--active",
    ".pill--done",
    ".dialog-backdrop",
    ".sheet",
    ".polaroid--right",
    ".event-card--purple",
    // Toasts
    ".toast--info",
    ".toast--destructive",
    "@media (max-width: 480px)",
];

#[test]
fn unified_theme_contains_required_selectors() {
    let missing: Vec<_> = REQUIRED_SELECTORS
        .iter()
        .filter(|sel| !THEME_CSS.contains(**sel))
        .copied()
        .collect();

    assert!(
        missing.is_empty(),
        "Missing {} required CSS selectors/tokens in unified theme:\n{}",
        missing.len(),
        missing.join("\n")
    );
}

#[test]
fn every_screen_has_a_page_block() {
    // `.screen--<key>` wrappers are unstyled; each screen styles its `.page-*` root.
    let missing: Vec<_> = Screen::ALL
        .iter()
        .map(|screen| page_class(*screen))
        .filter(|class| !THEME_CSS.contains(class.as_str()))
        .collect();
    assert!(missing.is_empty(), "screens without page styles: {missing:?}");
}

fn page_class(screen: Screen) -> String {
    let page = match screen {
        Screen::Splash => "splash",
        Screen::GetStarted => "get-started",
        Screen::Signup => "signup",
        Screen::Email => "email",
        Screen::Otp => "otp",
        Screen::Welcome => "welcome",
        Screen::ProfileSetup => "profile",
        Screen::WelcomePersonalized => "welcome-personalized",
        Screen::Preferences => "preferences",
        Screen::Location => "location",
        Screen::Friends => "friends",
        Screen::PhotoCapture => "photo",
        Screen::Notifications => "notifications",
        Screen::FinalWelcome => "final",
        Screen::MainApp => "main",
    };
    format!(".page-{page}")
}

#[test]
fn unified_theme_not_trivially_empty() {
    let non_ws_len = THEME_CSS.chars().filter(|c| !c.is_whitespace()).count();
    assert!(
        non_ws_len > 4_000,
        "Embedded theme appears unexpectedly small ({non_ws_len} non-whitespace chars)"
    );
}
