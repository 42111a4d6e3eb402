//! Platform-agnostic onboarding logic: navigation, forms, simulated services.

pub mod catalog;
pub mod config;
pub mod flow;
pub mod invite;
pub mod onboarding;
pub mod otp;
pub mod permissions;
pub mod platform;
pub mod selection;
pub mod timing;
pub mod toast;
pub mod validation;
