//! Utility functions and helpers.

pub mod decimal;
