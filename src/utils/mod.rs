//! Utils module - Shared utilities and helpers

/// Coordinate format validation
pub mod validation;

/// Verbose output for the command-line front end
pub mod logging;
