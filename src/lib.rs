//! Bindery - game key binding subsystem
//!
//! This crate provides the registry of mappable game functions, the live
//! mapping table with its rebind protocol, per-frame dispatch, the key-map
//! editor state and keymap file persistence.

pub mod cli;
pub mod config;
pub mod config_paths;
pub mod keymap;
pub mod tracing;

// Re-export commonly used types
pub use config::GameConfig;
pub use keymap::{InputManager, KeyFunctionRegistry, KeymapError, KeymapFile, MappableFunction};
