//! Shared utilities for Innkeeper binaries and libraries.

pub mod logger;
pub mod time;
