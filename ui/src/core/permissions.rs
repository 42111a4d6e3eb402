//! Device permission prompts.
//!
//! In the browser, location and notification requests go to the real
//! Geolocation and Notification APIs. Everything else, and every request on
//! native targets, waits for the configured prompt delay and resolves as
//! granted.

use std::fmt;

use tracing::info;

use super::timing;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionKind {
    Location,
    Notifications,
    Contacts,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionStatus {
    Granted,
    Denied,
}

impl fmt::Display for PermissionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PermissionKind::Location => "location",
            PermissionKind::Notifications => "notifications",
            PermissionKind::Contacts => "contacts",
        })
    }
}

impl PermissionStatus {
    pub fn is_granted(self) -> bool {
        matches!(self, PermissionStatus::Granted)
    }
}

/// Maps a browser permission answer (`"granted"`, `"denied"`, `"default"`).
/// Anything but an explicit grant counts as denied.
pub fn status_from_answer(answer: &str) -> PermissionStatus {
    if answer == "granted" {
        PermissionStatus::Granted
    } else {
        PermissionStatus::Denied
    }
}

pub async fn request(kind: PermissionKind, prompt_ms: u64) -> PermissionStatus {
    let status = prompt(kind, prompt_ms).await;
    info!(permission = %kind, ?status, "permission prompt answered");
    status
}

/// The user turned the prompt down in our own dialog; no system prompt shown.
pub fn decline(kind: PermissionKind) -> PermissionStatus {
    info!(permission = %kind, "permission declined in app");
    PermissionStatus::Denied
}

#[cfg(not(target_arch = "wasm32"))]
async fn prompt(_kind: PermissionKind, prompt_ms: u64) -> PermissionStatus {
    timing::sleep_ms(prompt_ms).await;
    PermissionStatus::Granted
}

#[cfg(target_arch = "wasm32")]
async fn prompt(kind: PermissionKind, prompt_ms: u64) -> PermissionStatus {
    match kind {
        PermissionKind::Location => web::location().await,
        PermissionKind::Notifications => web::notifications().await,
        PermissionKind::Contacts => {
            timing::sleep_ms(prompt_ms).await;
            PermissionStatus::Granted
        }
    }
}

#[cfg(target_arch = "wasm32")]
mod web {
    use tracing::warn;
    use wasm_bindgen::JsValue;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::Notification;

    use super::{status_from_answer, PermissionStatus};

    /// Resolves once the browser hands out a position or reports an error.
    pub(super) async fn location() -> PermissionStatus {
        let geolocation = match web_sys::window().map(|w| w.navigator().geolocation()) {
            Some(Ok(geolocation)) => geolocation,
            _ => {
                warn!("geolocation unavailable");
                return PermissionStatus::Denied;
            }
        };

        let mut armed: Result<(), JsValue> = Ok(());
        let position = js_sys::Promise::new(&mut |resolve, reject| {
            armed = geolocation.get_current_position_with_error_callback(&resolve, Some(&reject));
        });
        if armed.is_err() {
            warn!("geolocation request rejected");
            return PermissionStatus::Denied;
        }

        match JsFuture::from(position).await {
            Ok(_) => PermissionStatus::Granted,
            Err(_) => PermissionStatus::Denied,
        }
    }

    pub(super) async fn notifications() -> PermissionStatus {
        let answer = match Notification::request_permission() {
            Ok(promise) => JsFuture::from(promise).await,
            Err(err) => Err(err),
        };
        match answer {
            Ok(value) => status_from_answer(&value.as_string().unwrap_or_default()),
            Err(_) => {
                warn!("notification permission request failed");
                PermissionStatus::Denied
            }
        }
    }
}
