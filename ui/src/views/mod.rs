//! One component per onboarding screen. `FlowHost` picks which to mount.

mod email;
mod final_welcome;
mod forms;
mod friends;
mod get_started;
mod location;
mod main_app;
mod notifications;
mod otp;
mod photo_capture;
mod preferences;
mod profile_setup;
mod signup;
mod splash;
mod welcome;
mod welcome_personalized;

pub use email::EmailScreen;
pub use final_welcome::FinalWelcomeScreen;
pub use forms::field_error_text;
pub use friends::FriendsScreen;
pub use get_started::GetStartedScreen;
pub use location::LocationScreen;
pub use main_app::MainAppScreen;
pub use notifications::NotificationsScreen;
pub use otp::OtpScreen;
pub use photo_capture::PhotoCaptureScreen;
pub use preferences::PreferencesScreen;
pub use profile_setup::ProfileSetupScreen;
pub use signup::SignupScreen;
pub use splash::SplashScreen;
pub use welcome::WelcomeScreen;
pub use welcome_personalized::WelcomePersonalizedScreen;
