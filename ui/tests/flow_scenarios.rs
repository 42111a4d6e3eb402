//! End-to-end navigation scenarios driven on the navigator's simulated clock.

use pretty_assertions::assert_eq;

use ui::core::config::{FlowConfig, FlowTimings};
use ui::core::flow::{FlowNavigator, NavError, NavRequest, Screen};
use ui::core::onboarding;
use ui::core::validation::{EmailForm, Field, ValidationError};

#[test]
fn every_screen_is_directly_reachable() {
    let mut nav = FlowNavigator::default();
    for screen in Screen::ALL {
        nav.navigate(screen);
        assert_eq!(nav.current(), screen);
    }
}

#[test]
fn runtime_routes_resolve_or_fail_without_moving() {
    let mut nav = FlowNavigator::new(Screen::Welcome);
    nav.navigate_to("/friends").unwrap();
    assert_eq!(nav.current(), Screen::Friends);

    let before = nav.generation();
    assert_eq!(
        nav.navigate_to("login"),
        Err(NavError::InvalidRoute("login".to_string()))
    );
    assert_eq!(nav.current(), Screen::Friends);
    assert_eq!(nav.generation(), before);
}

#[test]
fn splash_waits_the_full_delay() {
    let timings = FlowTimings::default();
    let mut nav = FlowNavigator::default();
    let splash = nav.enter(Screen::Splash);
    nav.navigate_after_delay(Screen::GetStarted, timings.splash_ms, splash);

    assert_eq!(nav.advance(2999), 0);
    assert_eq!(nav.current(), Screen::Splash);

    assert_eq!(nav.advance(1), 1);
    assert_eq!(nav.current(), Screen::GetStarted);
    assert_eq!(nav.pending().count(), 0);
}

#[test]
fn leaving_splash_early_cancels_its_timer() {
    let mut nav = FlowNavigator::default();
    let splash = nav.enter(Screen::Splash);
    let ticket = nav.navigate_after_delay(Screen::GetStarted, 3000, splash);

    nav.advance(1200);
    nav.navigate(Screen::Signup);
    assert_eq!(nav.teardown(splash), 1);

    assert_eq!(nav.advance(10_000), 0);
    assert!(!nav.fire(ticket));
    assert_eq!(nav.current(), Screen::Signup);
}

#[test]
fn repeated_navigation_is_idempotent_but_remounts() {
    let mut nav = FlowNavigator::new(Screen::Preferences);
    nav.navigate(Screen::Location);
    nav.navigate(Screen::Location);
    assert_eq!(nav.current(), Screen::Location);
    assert_eq!(nav.generation(), 2);
}

#[test]
fn email_screen_stays_on_bad_input_and_moves_on_good() {
    let config = FlowConfig::default();
    let mut nav = FlowNavigator::new(Screen::Email);
    let scope = nav.enter(Screen::Email);

    let bad = EmailForm {
        email: "ada@".into(),
    };
    let errors = onboarding::submit_email(&bad, &config.timings).unwrap_err();
    assert_eq!(errors.get(Field::Email), Some(ValidationError::InvalidEmail));
    assert_eq!(nav.current(), Screen::Email);

    let good = EmailForm {
        email: "ada@example.com".into(),
    };
    let request = onboarding::submit_email(&good, &config.timings).unwrap();
    assert!(nav.request(request, scope).is_some());

    nav.advance(config.timings.email_check_ms - 1);
    assert_eq!(nav.current(), Screen::Email);
    nav.advance(1);
    assert_eq!(nav.current(), Screen::Otp);
}

#[test]
fn earlier_deadline_fires_first_and_later_one_wins() {
    let mut nav = FlowNavigator::new(Screen::Otp);
    let scope = nav.enter(Screen::Otp);
    nav.navigate_after_delay(Screen::MainApp, 500, scope);
    nav.navigate_after_delay(Screen::Welcome, 200, scope);

    assert_eq!(nav.advance(200), 1);
    assert_eq!(nav.current(), Screen::Welcome);
    assert_eq!(nav.advance(300), 1);
    assert_eq!(nav.current(), Screen::MainApp);
}

#[test]
fn pending_timer_overwrites_explicit_navigation_while_owner_lives() {
    let mut nav = FlowNavigator::new(Screen::Otp);
    let otp = nav.enter(Screen::Otp);
    nav.navigate_after_delay(Screen::Welcome, 1000, otp);

    // The Otp scope has not been torn down, so its ticket is still live.
    nav.navigate(Screen::Email);
    nav.advance(1000);
    assert_eq!(nav.current(), Screen::Welcome);
}

#[test]
fn zero_delay_request_needs_no_clock() {
    let mut nav = FlowNavigator::new(Screen::Welcome);
    let scope = nav.enter(Screen::Welcome);
    assert_eq!(nav.request(NavRequest::now(Screen::MainApp), scope), None);
    assert_eq!(nav.current(), Screen::MainApp);
}

#[test]
fn full_happy_path_reaches_main_app() {
    let timings = FlowTimings::default();
    let mut nav = FlowNavigator::default();

    let splash = nav.enter(Screen::Splash);
    nav.navigate_after_delay(Screen::GetStarted, timings.splash_ms, splash);
    nav.advance(timings.splash_ms);
    nav.teardown(splash);

    for screen in [Screen::Signup, Screen::Email, Screen::Otp] {
        nav.navigate(screen);
    }

    let otp = nav.enter(Screen::Otp);
    nav.navigate_after_delay(Screen::Welcome, timings.otp_redirect_ms, otp);
    nav.advance(timings.otp_redirect_ms);
    nav.teardown(otp);

    for screen in [
        Screen::ProfileSetup,
        Screen::WelcomePersonalized,
        Screen::Preferences,
        Screen::Location,
        Screen::Friends,
        Screen::PhotoCapture,
        Screen::Notifications,
        Screen::FinalWelcome,
        Screen::MainApp,
    ] {
        nav.navigate(screen);
    }

    assert_eq!(nav.current(), Screen::MainApp);
    assert_eq!(nav.pending().count(), 0);
}
