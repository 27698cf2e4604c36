//! gradecast - interactive color-adjustment preview server
//!
//! Caches the last full-resolution image committed per node instance and
//! re-renders downscaled previews with new adjustment parameters on demand.
//! This library exposes modules for integration testing.

pub mod api;
pub mod error;
pub mod server;
pub mod services;
