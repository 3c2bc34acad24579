//! Storage layer
//!
//! Handles the TOML configuration file and the address templates it declares.

use crate::error::StorageError;

pub mod address_template;
pub mod config;

type Result<T> = std::result::Result<T, StorageError>;
