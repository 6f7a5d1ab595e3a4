//! Middleware: tenant resolution, request logging, CORS.

pub mod cors;
pub mod logging;
pub mod tenant;
