//! Configurable key mapping system
//!
//! This module provides the game's key binding layer:
//! - A fixed registry of every function a key can trigger
//! - The live mapping table with conflict-clearing rebinds
//! - Per-frame dispatch of triggered functions against an input oracle
//! - The key-map editor's selection and capture state
//! - JSON persistence of user bindings
//!
//! # Architecture
//!
//! ```text
//! KeyFunctionRegistry ──borrowed by──> InputManager ──> triggered_functions()
//!                                          ▲    │
//!                         KeyMapEditor ────┘    └──> KeymapFile (keymap.json)
//! ```
//!
//! # Usage
//!
//! ```ignore
//! let registry = KeyFunctionRegistry::global();
//! let mut store = InputManager::new(registry);
//! init_mappings(&mut store, &KeymapFile::new("keymap.json"), false);
//!
//! for function in store.triggered_functions(&input, &ActiveContexts::in_game()) {
//!     // run the game action
//! }
//! ```

mod context;
mod defaults;
mod dispatch;
mod editor;
mod error;
mod function;
mod input;
mod mapping;
mod parse;
mod persist;
mod registry;
mod store;
mod types;

pub use context::{ActiveContexts, InputContext};
pub use defaults::builtin_functions;
pub use editor::{EditorRow, EditorSlot, KeyMapEditor, KeyMapSelection, SelectOutcome, NOT_BOUND_LABEL};
pub use error::KeymapError;
pub use function::{DroidOrder, DroidSetting, FactoryKind, MappableFunction, UnitKind, UnitSelection};
pub use input::{InputOracle, InputState};
pub use mapping::{KeyCombination, KeyMapping};
pub use parse::{format_binding, parse_binding};
pub use persist::{
    apply_keymap_json, init_mappings, serialize_keymap, InitOutcome, KeymapFile, LoadReport,
    KEYMAP_VERSION,
};
pub use registry::{KeyFunctionInfo, KeyFunctionRegistry, KeyMappingType};
pub use store::{InputManager, RebindOutcome};
pub use types::{InputSource, KeyAction, KeyCode, KeyMappingInput, KeyMappingSlot, MouseKeyCode};

#[cfg(test)]
mod tests;
