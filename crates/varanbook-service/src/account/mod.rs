//! Account management: onboarding, self-service, and password flows.

pub mod service;

pub use service::AccountService;
