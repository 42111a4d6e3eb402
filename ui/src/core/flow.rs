//! Flow navigator: the single owner of "which onboarding screen is active".
//!
//! Screens never mutate the current screen directly. They hold a
//! [`FlowHandle`](crate::components::flow::FlowHandle) and ask the navigator
//! to move, either immediately or after a delay. Delayed requests are owned
//! by a [`ScreenScope`] (one mounting of a screen) and are dropped when that
//! scope is torn down, so a screen that is no longer showing can never
//! redirect the user.
//!
//! The navigator carries its own monotonic clock in milliseconds. The UI
//! drives pending tickets with real timers through [`FlowNavigator::fire`];
//! tests and headless runs drive them deterministically with
//! [`FlowNavigator::advance`].

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Every screen of the onboarding flow. The set is closed at build time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Screen {
    Splash,
    GetStarted,
    Signup,
    Email,
    Otp,
    Welcome,
    ProfileSetup,
    WelcomePersonalized,
    Preferences,
    Location,
    Friends,
    PhotoCapture,
    Notifications,
    FinalWelcome,
    MainApp,
}

impl Screen {
    /// All screens in onboarding order.
    pub const ALL: [Screen; 15] = [
        Screen::Splash,
        Screen::GetStarted,
        Screen::Signup,
        Screen::Email,
        Screen::Otp,
        Screen::Welcome,
        Screen::ProfileSetup,
        Screen::WelcomePersonalized,
        Screen::Preferences,
        Screen::Location,
        Screen::Friends,
        Screen::PhotoCapture,
        Screen::Notifications,
        Screen::FinalWelcome,
        Screen::MainApp,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Screen::Splash => "splash",
            Screen::GetStarted => "get-started",
            Screen::Signup => "signup",
            Screen::Email => "email",
            Screen::Otp => "otp",
            Screen::Welcome => "welcome",
            Screen::ProfileSetup => "profile-setup",
            Screen::WelcomePersonalized => "welcome-personalized",
            Screen::Preferences => "preferences",
            Screen::Location => "location",
            Screen::Friends => "friends",
            Screen::PhotoCapture => "photo-capture",
            Screen::Notifications => "notifications",
            Screen::FinalWelcome => "final-welcome",
            Screen::MainApp => "main-app",
        }
    }

    /// Route path; the splash screen lives at the root.
    pub fn path(self) -> &'static str {
        match self {
            Screen::Splash => "/",
            Screen::GetStarted => "/get-started",
            Screen::Signup => "/signup",
            Screen::Email => "/email",
            Screen::Otp => "/otp",
            Screen::Welcome => "/welcome",
            Screen::ProfileSetup => "/profile-setup",
            Screen::WelcomePersonalized => "/welcome-personalized",
            Screen::Preferences => "/preferences",
            Screen::Location => "/location",
            Screen::Friends => "/friends",
            Screen::PhotoCapture => "/photo-capture",
            Screen::Notifications => "/notifications",
            Screen::FinalWelcome => "/final-welcome",
            Screen::MainApp => "/main-app",
        }
    }

    fn lookup(raw: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|screen| screen.key() == raw || screen.path() == raw)
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Screen {
    type Err = NavError;

    /// Accepts a key (`"get-started"`) or a path (`"/get-started"`).
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::lookup(raw).ok_or_else(|| NavError::InvalidRoute(raw.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavError {
    #[error("unknown route `{0}`")]
    InvalidRoute(String),
}

/// A request to move to `target`, immediately (`delay_ms == 0`) or later.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavRequest {
    pub target: Screen,
    pub delay_ms: u64,
}

impl NavRequest {
    pub fn now(target: Screen) -> Self {
        Self {
            target,
            delay_ms: 0,
        }
    }

    pub fn after(target: Screen, delay_ms: u64) -> Self {
        Self { target, delay_ms }
    }
}

static NEXT_INSTANCE: AtomicU64 = AtomicU64::new(1);

/// One mounting of a screen. Remounting the same screen yields a new scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScreenScope {
    screen: Screen,
    instance: u64,
}

impl ScreenScope {
    pub fn mount(screen: Screen) -> Self {
        Self {
            screen,
            instance: NEXT_INSTANCE.fetch_add(1, Ordering::Relaxed),
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn instance(&self) -> u64 {
        self.instance
    }
}

/// Handle to a pending delayed navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NavTicket {
    id: u64,
    owner: ScreenScope,
    target: Screen,
    due_ms: u64,
}

impl NavTicket {
    pub fn owner(&self) -> ScreenScope {
        self.owner
    }

    pub fn target(&self) -> Screen {
        self.target
    }

    /// Navigator clock time at which the ticket becomes due.
    pub fn due_ms(&self) -> u64 {
        self.due_ms
    }
}

#[derive(Debug, Clone)]
pub struct FlowNavigator {
    current: Screen,
    generation: u64,
    now_ms: u64,
    next_ticket: u64,
    pending: BTreeMap<u64, NavTicket>,
}

impl Default for FlowNavigator {
    fn default() -> Self {
        Self::new(Screen::Splash)
    }
}

impl FlowNavigator {
    pub fn new(initial: Screen) -> Self {
        Self {
            current: initial,
            generation: 0,
            now_ms: 0,
            next_ticket: 1,
            pending: BTreeMap::new(),
        }
    }

    pub fn current(&self) -> Screen {
        self.current
    }

    /// Number of transitions applied so far. Bumps even when the target is
    /// already current, so renderers keyed on it remount the screen.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    pub fn navigate(&mut self, target: Screen) {
        debug!(from = %self.current, to = %target, "navigate");
        self.current = target;
        self.generation = self.generation.wrapping_add(1);
    }

    /// Navigate by key or path. Unknown routes leave the current screen as is.
    pub fn navigate_to(&mut self, raw: &str) -> Result<(), NavError> {
        let target = raw.parse::<Screen>()?;
        self.navigate(target);
        Ok(())
    }

    pub fn navigate_after_delay(
        &mut self,
        target: Screen,
        delay_ms: u64,
        owner: ScreenScope,
    ) -> NavTicket {
        let ticket = NavTicket {
            id: self.next_ticket,
            owner,
            target,
            due_ms: self.now_ms.saturating_add(delay_ms),
        };
        self.next_ticket += 1;
        self.pending.insert(ticket.id, ticket);
        debug!(
            owner = %owner.screen,
            to = %target,
            delay_ms,
            "scheduled delayed navigation"
        );
        ticket
    }

    /// Zero-delay requests apply at once and yield no ticket.
    pub fn request(&mut self, request: NavRequest, owner: ScreenScope) -> Option<NavTicket> {
        if request.delay_ms == 0 {
            self.navigate(request.target);
            None
        } else {
            Some(self.navigate_after_delay(request.target, request.delay_ms, owner))
        }
    }

    /// Open a scope for a new mounting of `screen`.
    pub fn enter(&self, screen: Screen) -> ScreenScope {
        ScreenScope::mount(screen)
    }

    /// Cancel every pending ticket owned by `scope`; returns how many were dropped.
    pub fn teardown(&mut self, scope: ScreenScope) -> usize {
        let before = self.pending.len();
        self.pending.retain(|_, ticket| ticket.owner != scope);
        let cancelled = before - self.pending.len();
        if cancelled > 0 {
            debug!(screen = %scope.screen, cancelled, "cancelled pending navigation on teardown");
        }
        cancelled
    }

    pub fn cancel(&mut self, ticket: NavTicket) -> bool {
        self.pending.remove(&ticket.id).is_some()
    }

    pub fn is_pending(&self, ticket: NavTicket) -> bool {
        self.pending.contains_key(&ticket.id)
    }

    pub fn pending(&self) -> impl Iterator<Item = &NavTicket> {
        self.pending.values()
    }

    /// Consume `ticket` now. Returns false if it was cancelled or already fired.
    pub fn fire(&mut self, ticket: NavTicket) -> bool {
        match self.pending.remove(&ticket.id) {
            Some(ticket) => {
                self.now_ms = self.now_ms.max(ticket.due_ms);
                self.navigate(ticket.target);
                true
            }
            None => false,
        }
    }

    /// Move the clock forward, firing every ticket that falls due in
    /// deadline order (scheduling order on ties). Returns the number fired.
    pub fn advance(&mut self, elapsed_ms: u64) -> usize {
        let horizon = self.now_ms.saturating_add(elapsed_ms);
        let mut fired = 0;
        while let Some(ticket) = self.next_due(horizon) {
            if self.fire(ticket) {
                fired += 1;
            }
        }
        self.now_ms = horizon;
        fired
    }

    fn next_due(&self, horizon: u64) -> Option<NavTicket> {
        self.pending
            .values()
            .filter(|ticket| ticket.due_ms <= horizon)
            .min_by_key(|ticket| (ticket.due_ms, ticket.id))
            .copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_and_paths_round_trip() {
        for screen in Screen::ALL {
            assert_eq!(screen.key().parse::<Screen>(), Ok(screen));
            assert_eq!(screen.path().parse::<Screen>(), Ok(screen));
        }
        assert_eq!("/".parse::<Screen>(), Ok(Screen::Splash));
    }

    #[test]
    fn serde_uses_kebab_keys() {
        let json = serde_json::to_string(&Screen::WelcomePersonalized).unwrap();
        assert_eq!(json, "\"welcome-personalized\"");
        let back: Screen = serde_json::from_str("\"photo-capture\"").unwrap();
        assert_eq!(back, Screen::PhotoCapture);
    }

    #[test]
    fn unknown_route_is_rejected() {
        let mut nav = FlowNavigator::new(Screen::Email);
        let err = nav.navigate_to("/pasword-reset").unwrap_err();
        assert_eq!(err, NavError::InvalidRoute("/pasword-reset".into()));
        assert_eq!(nav.current(), Screen::Email);
        assert_eq!(nav.generation(), 0);
    }

    #[test]
    fn zero_delay_request_applies_immediately() {
        let mut nav = FlowNavigator::default();
        let scope = nav.enter(Screen::Splash);
        assert!(nav.request(NavRequest::now(Screen::Signup), scope).is_none());
        assert_eq!(nav.current(), Screen::Signup);

        let ticket = nav.request(NavRequest::after(Screen::Email, 10), scope);
        assert!(ticket.is_some());
        assert_eq!(nav.current(), Screen::Signup);
    }

    #[test]
    fn scopes_are_unique_per_mount() {
        let nav = FlowNavigator::default();
        let a = nav.enter(Screen::Otp);
        let b = nav.enter(Screen::Otp);
        assert_ne!(a, b);
        assert_eq!(a.screen(), b.screen());
    }

    #[test]
    fn teardown_only_touches_its_own_scope() {
        let mut nav = FlowNavigator::default();
        let first = nav.enter(Screen::Splash);
        let second = nav.enter(Screen::Splash);
        nav.navigate_after_delay(Screen::GetStarted, 100, first);
        let kept = nav.navigate_after_delay(Screen::Signup, 200, second);

        assert_eq!(nav.teardown(first), 1);
        assert!(nav.is_pending(kept));
        assert_eq!(nav.advance(200), 1);
        assert_eq!(nav.current(), Screen::Signup);
    }

    #[test]
    fn fire_is_one_shot() {
        let mut nav = FlowNavigator::default();
        let scope = nav.enter(Screen::Splash);
        let ticket = nav.navigate_after_delay(Screen::GetStarted, 3000, scope);
        assert!(nav.fire(ticket));
        assert!(!nav.fire(ticket));
        assert_eq!(nav.now_ms(), 3000);
        assert_eq!(nav.generation(), 1);
    }

    #[test]
    fn cancelled_ticket_never_fires() {
        let mut nav = FlowNavigator::default();
        let scope = nav.enter(Screen::Splash);
        let ticket = nav.navigate_after_delay(Screen::GetStarted, 50, scope);
        assert!(nav.cancel(ticket));
        assert!(!nav.fire(ticket));
        assert_eq!(nav.advance(100), 0);
        assert_eq!(nav.current(), Screen::Splash);
    }
}
