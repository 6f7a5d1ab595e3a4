//! Repository implementations.
//!
//! Pool-backed methods serve the tenant-free flows (tenant registry,
//! authentication); methods taking `&mut PgConnection` run inside a caller-
//! owned transaction, either for row-security binding or for
//! read-modify-write locking.

pub mod interest;
pub mod job;
pub mod profile;
pub mod reset;
pub mod session;
pub mod tenant;
pub mod user;
