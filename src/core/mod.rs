//! core
//!
//! Core domain types and the configuration store.
//!
//! # Modules
//!
//! - [`key`] - Key vocabulary: separator, reserved names, validation
//! - [`config`] - The configuration store, its views and subblocks
//!
//! # Design Principles
//!
//! - Values are always text; typed values are rendered before they are stored
//! - Failed operations never leave partial state behind
//! - Shared storage is explicit: only views alias, everything else copies

pub mod config;
pub mod key;
