//! Registry of every mappable key function
//!
//! The registry is built once and never changes. It owns the
//! `KeyFunctionInfo` entries; mappings and the editor only ever borrow them.

use std::collections::HashMap;
use std::sync::LazyLock;

use super::context::InputContext;
use super::defaults::builtin_functions;
use super::error::KeymapError;
use super::function::MappableFunction;
use super::mapping::KeyCombination;
use super::types::KeyMappingSlot;

/// How a key function may be bound
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyMappingType {
    /// Always has its default binding; shown in the editor but not editable
    Fixed,
    /// Freely rebindable and persisted to the keymap file
    Assignable,
    /// Has a default binding but never shown in the editor
    Hidden,
}

/// Static description of one mappable function
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyFunctionInfo {
    pub context: InputContext,
    pub kind: KeyMappingType,
    pub function: MappableFunction,
    /// Stable identifier written to the keymap file
    pub name: String,
    /// Label shown in the editor
    pub display_name: String,
    pub default_mappings: Vec<(KeyMappingSlot, KeyCombination)>,
}

impl KeyFunctionInfo {
    pub fn new(
        context: InputContext,
        kind: KeyMappingType,
        function: MappableFunction,
        name: impl Into<String>,
        display_name: impl Into<String>,
    ) -> Self {
        Self {
            context,
            kind,
            function,
            name: name.into(),
            display_name: display_name.into(),
            default_mappings: Vec::new(),
        }
    }

    /// Add a default binding for a slot (builder pattern)
    pub fn with_default(mut self, slot: KeyMappingSlot, combination: KeyCombination) -> Self {
        self.default_mappings.push((slot, combination));
        self
    }

    pub fn is_assignable(&self) -> bool {
        self.kind == KeyMappingType::Assignable
    }

    /// Whether the key-map editor lists this function
    pub fn is_visible(&self) -> bool {
        self.kind != KeyMappingType::Hidden && self.context != InputContext::Debug
    }

    /// Default combination for a slot, if any
    pub fn default_for(&self, slot: KeyMappingSlot) -> Option<&KeyCombination> {
        self.default_mappings
            .iter()
            .find(|(s, _)| *s == slot)
            .map(|(_, combination)| combination)
    }
}

static GLOBAL: LazyLock<KeyFunctionRegistry> =
    LazyLock::new(|| KeyFunctionRegistry::from_unique(builtin_functions()));

/// Lookup table over an ordered list of key functions
#[derive(Debug)]
pub struct KeyFunctionRegistry {
    entries: Vec<KeyFunctionInfo>,
    by_name: HashMap<String, usize>,
    by_function: HashMap<MappableFunction, usize>,
}

impl KeyFunctionRegistry {
    /// Build a registry, rejecting repeated names or functions
    pub fn new(entries: Vec<KeyFunctionInfo>) -> Result<Self, KeymapError> {
        let mut by_name = HashMap::with_capacity(entries.len());
        let mut by_function = HashMap::with_capacity(entries.len());

        for (index, info) in entries.iter().enumerate() {
            if by_name.insert(info.name.clone(), index).is_some() {
                return Err(KeymapError::DuplicateFunction(info.name.clone()));
            }
            if by_function.insert(info.function, index).is_some() {
                return Err(KeymapError::DuplicateFunction(format!(
                    "{} ({:?})",
                    info.name, info.function
                )));
            }
        }

        Ok(Self {
            entries,
            by_name,
            by_function,
        })
    }

    // Keeps the first of any repeated entry and logs the rest
    fn from_unique(entries: Vec<KeyFunctionInfo>) -> Self {
        let mut kept = Vec::with_capacity(entries.len());
        let mut by_name = HashMap::with_capacity(entries.len());
        let mut by_function = HashMap::with_capacity(entries.len());

        for info in entries {
            if by_name.contains_key(&info.name) || by_function.contains_key(&info.function) {
                tracing::error!(name = %info.name, "Duplicate built-in key function, ignoring");
                continue;
            }
            by_name.insert(info.name.clone(), kept.len());
            by_function.insert(info.function, kept.len());
            kept.push(info);
        }

        Self {
            entries: kept,
            by_name,
            by_function,
        }
    }

    /// The built-in catalog of game functions
    pub fn global() -> &'static KeyFunctionRegistry {
        &GLOBAL
    }

    pub fn lookup_by_name(&self, name: &str) -> Option<&KeyFunctionInfo> {
        self.by_name.get(name).map(|&index| &self.entries[index])
    }

    pub fn lookup_by_function(&self, function: MappableFunction) -> Option<&KeyFunctionInfo> {
        self.by_function
            .get(&function)
            .map(|&index| &self.entries[index])
    }

    /// Every entry in registration order
    pub fn all_entries(&self) -> &[KeyFunctionInfo] {
        &self.entries
    }

    /// Entries the key-map editor shows, in registration order
    pub fn visible_entries(&self) -> Vec<&KeyFunctionInfo> {
        self.entries.iter().filter(|info| info.is_visible()).collect()
    }

    /// Visible entries ordered by a caller-chosen key
    pub fn visible_entries_sorted_by<K, F>(&self, mut key: F) -> Vec<&KeyFunctionInfo>
    where
        K: Ord,
        F: FnMut(&KeyFunctionInfo) -> K,
    {
        let mut visible = self.visible_entries();
        visible.sort_by_key(|info| key(*info));
        visible
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
