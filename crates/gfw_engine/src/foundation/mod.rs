//! Foundation module - Core utilities and types
//!
//! This module provides fundamental utilities used throughout the framework:
//! - Integer and float 2D point types
//! - Logging utilities

pub mod math;
pub mod logging;
