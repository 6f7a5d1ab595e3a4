//! # varanbook-storage
//!
//! Object storage integration. Uploads never transit the API: the service
//! mints pre-signed S3 PUT URLs and clients upload directly.

pub mod s3;

pub use s3::S3ObjectStore;
