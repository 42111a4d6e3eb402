//! Reactive binding of the [`FlowNavigator`] into the component tree.
//!
//! `AppShell` owns the navigator signal and hands out [`FlowHandle`]s through
//! context. Screens that schedule delayed navigation open a [`ScreenTimers`]
//! with [`use_screen_scope`]; its pending tickets die with the mounting.

use dioxus::prelude::*;
use tracing::{debug, warn};

use crate::core::flow::{FlowNavigator, NavError, NavTicket, Screen, ScreenScope};
use crate::core::timing;
use crate::views::{
    EmailScreen, FinalWelcomeScreen, FriendsScreen, GetStartedScreen, LocationScreen,
    MainAppScreen, NotificationsScreen, OtpScreen, PhotoCaptureScreen, PreferencesScreen,
    ProfileSetupScreen, SignupScreen, SplashScreen, WelcomePersonalizedScreen, WelcomeScreen,
};

/// Capability handed to screens. Copyable; never exposes the raw state.
#[derive(Clone, Copy, PartialEq)]
pub struct FlowHandle {
    navigator: Signal<FlowNavigator>,
}

impl FlowHandle {
    pub fn new(navigator: Signal<FlowNavigator>) -> Self {
        Self { navigator }
    }

    pub fn current(&self) -> Screen {
        self.navigator.read().current()
    }

    pub fn generation(&self) -> u64 {
        self.navigator.read().generation()
    }

    pub fn navigate(&self, target: Screen) {
        let mut navigator = self.navigator;
        navigator.write().navigate(target);
    }

    pub fn navigate_to(&self, raw: &str) -> Result<(), NavError> {
        let mut navigator = self.navigator;
        let result = navigator.write().navigate_to(raw);
        result
    }

    /// Tickets still waiting to fire, oldest first.
    pub fn pending(&self) -> Vec<NavTicket> {
        self.navigator.read().pending().copied().collect()
    }

    fn enter(&self, screen: Screen) -> ScreenScope {
        self.navigator.peek().enter(screen)
    }

    fn schedule(&self, target: Screen, delay_ms: u64, owner: ScreenScope) -> NavTicket {
        let mut navigator = self.navigator;
        let ticket = navigator.write().navigate_after_delay(target, delay_ms, owner);
        ticket
    }

    fn fire(&self, ticket: NavTicket) {
        let mut navigator = self.navigator;
        let fired = navigator.write().fire(ticket);
        if !fired {
            let owner = ticket.owner();
            debug!(
                screen = %owner.screen(),
                instance = owner.instance(),
                "stale timer ignored"
            );
        }
    }

    fn teardown(&self, scope: ScreenScope) {
        let mut navigator = self.navigator;
        // The signal may already be gone when the whole tree is being dropped.
        match navigator.try_write() {
            Ok(mut nav) => {
                nav.teardown(scope);
            }
            Err(err) => warn!(screen = %scope.screen(), %err, "navigator unavailable on teardown"),
        };
    }
}

pub fn use_flow() -> FlowHandle {
    use_context::<FlowHandle>()
}

/// Delayed navigation bound to one mounting of a screen.
#[derive(Clone, Copy, PartialEq)]
pub struct ScreenTimers {
    flow: FlowHandle,
    scope: ScreenScope,
}

impl ScreenTimers {
    /// Register the ticket and arm a timer task in the calling component.
    pub fn navigate_after_delay(&self, target: Screen, delay_ms: u64) -> NavTicket {
        let flow = self.flow;
        let ticket = flow.schedule(target, delay_ms, self.scope);
        debug!(
            from = %self.scope.screen(),
            to = %ticket.target(),
            due_ms = ticket.due_ms(),
            "delayed navigation armed"
        );
        spawn(async move {
            timing::sleep_ms(delay_ms).await;
            flow.fire(ticket);
        });
        ticket
    }
}

pub fn use_screen_scope(screen: Screen) -> ScreenTimers {
    let flow = use_flow();
    let scope = use_hook(move || flow.enter(screen));
    use_drop(move || flow.teardown(scope));
    ScreenTimers { flow, scope }
}

/// Renders the current screen. Keyed on the navigator generation so that
/// every transition, including one to the same screen, remounts it.
#[component]
pub fn FlowHost() -> Element {
    let flow = use_flow();
    let screen = flow.current();
    let generation = flow.generation();
    let screen_key = screen.key();

    // A key only takes effect inside a list, so the single child goes
    // through a one-element iterator.
    rsx! {
        for generation in std::iter::once(generation) {
            div {
                key: "{generation}",
                class: "screen screen--{screen_key}",
                "data-screen": screen_key,
                {render_screen(screen)}
            }
        }
    }
}

fn render_screen(screen: Screen) -> Element {
    match screen {
        Screen::Splash => rsx! { SplashScreen {} },
        Screen::GetStarted => rsx! { GetStartedScreen {} },
        Screen::Signup => rsx! { SignupScreen {} },
        Screen::Email => rsx! { EmailScreen {} },
        Screen::Otp => rsx! { OtpScreen {} },
        Screen::Welcome => rsx! { WelcomeScreen {} },
        Screen::ProfileSetup => rsx! { ProfileSetupScreen {} },
        Screen::WelcomePersonalized => rsx! { WelcomePersonalizedScreen {} },
        Screen::Preferences => rsx! { PreferencesScreen {} },
        Screen::Location => rsx! { LocationScreen {} },
        Screen::Friends => rsx! { FriendsScreen {} },
        Screen::PhotoCapture => rsx! { PhotoCaptureScreen {} },
        Screen::Notifications => rsx! { NotificationsScreen {} },
        Screen::FinalWelcome => rsx! { FinalWelcomeScreen {} },
        Screen::MainApp => rsx! { MainAppScreen {} },
    }
}
