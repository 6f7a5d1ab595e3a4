//! Access policy evaluation.

pub mod evaluator;

pub use evaluator::{AccessPolicy, Action, Actor, ResourceRef};
