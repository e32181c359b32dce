//! Shared utilities for the tether workspace.

pub mod logger;
