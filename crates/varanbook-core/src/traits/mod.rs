//! Collaborator traits consumed by the core.
//!
//! Object storage, email delivery, and the notification queue are external
//! collaborators with no interesting invariants of their own; the traits
//! here are the seams the core depends on, implemented elsewhere.

pub mod mailer;
pub mod object_store;
pub mod queue;

pub use mailer::Mailer;
pub use object_store::ObjectStore;
pub use queue::JobQueue;
