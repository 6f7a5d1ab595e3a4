//! Interest (shortlist) entity.

pub mod model;
pub mod status;

pub use model::{CreateInterest, Interest};
pub use status::InterestStatus;
