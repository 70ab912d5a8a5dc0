//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use bindery::keymap::{
    InputManager, KeyAction, KeyCode, KeyFunctionInfo, KeyFunctionRegistry, KeyMappingInput,
    KeyMappingSlot, KeymapFile,
};
use tempfile::TempDir;

/// A binding reduced to comparable values
pub type BindingRow = (String, KeyMappingSlot, Option<KeyCode>, KeyMappingInput, KeyAction);

/// Store over the built-in registry with every default installed
pub fn default_store() -> InputManager<'static> {
    InputManager::with_defaults(KeyFunctionRegistry::global())
}

/// Look up a built-in function by name
pub fn info(name: &str) -> &'static KeyFunctionInfo {
    KeyFunctionRegistry::global()
        .lookup_by_name(name)
        .unwrap_or_else(|| panic!("no key function named {name}"))
}

/// Keymap file inside a fresh temporary directory
///
/// Keep the `TempDir` alive for as long as the file is used.
pub fn temp_keymap() -> (TempDir, KeymapFile) {
    let dir = TempDir::new().unwrap();
    let file = KeymapFile::new(dir.path().join("keymap.json"));
    (dir, file)
}

/// Every assignable binding, sorted by function name then slot
pub fn assignable_rows(store: &InputManager<'_>) -> Vec<BindingRow> {
    let mut rows: Vec<BindingRow> = store
        .all_mappings()
        .iter()
        .filter(|m| m.info.is_assignable())
        .map(|m| (m.info.name.clone(), m.slot, m.meta, m.input, m.action))
        .collect();
    rows.sort_by(|a, b| (&a.0, a.1.index()).cmp(&(&b.0, b.1.index())));
    rows
}

/// Every binding in table order, including fixed and hidden ones
pub fn all_rows(store: &InputManager<'_>) -> Vec<BindingRow> {
    store
        .all_mappings()
        .iter()
        .map(|m| (m.info.name.clone(), m.slot, m.meta, m.input, m.action))
        .collect()
}
