//! Best-effort notification dispatch.

pub mod mailer;
pub mod service;

pub use mailer::RelayMailer;
pub use service::NotificationService;
