//! Interest (shortlist) management.

pub mod service;

pub use service::InterestService;
