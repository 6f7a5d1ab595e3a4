//! Password reset token entity.

pub mod model;

pub use model::PasswordResetToken;
