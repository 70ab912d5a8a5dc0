//! Key mappings: a bound input combination attached to a registry entry

use std::fmt;

use super::context::InputContext;
use super::registry::KeyFunctionInfo;
use super::types::{KeyAction, KeyCode, KeyMappingInput, KeyMappingSlot};

/// An optional meta key, a primary input and the edge that triggers it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyCombination {
    pub meta: Option<KeyCode>,
    pub input: KeyMappingInput,
    pub action: KeyAction,
}

impl KeyCombination {
    pub fn new(meta: Option<KeyCode>, input: impl Into<KeyMappingInput>, action: KeyAction) -> Self {
        Self {
            meta,
            input: input.into(),
            action,
        }
    }

    /// A combination triggered once when the input goes down
    pub fn pressed(meta: Option<KeyCode>, input: impl Into<KeyMappingInput>) -> Self {
        Self::new(meta, input, KeyAction::Pressed)
    }

    /// A combination triggered every frame while the input is held
    pub fn held(meta: Option<KeyCode>, input: impl Into<KeyMappingInput>) -> Self {
        Self::new(meta, input, KeyAction::Down)
    }
}

impl fmt::Display for KeyCombination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_combination(f, self.meta, self.input)
    }
}

/// A live binding held by the input manager
///
/// `info` borrows the registry entry the binding belongs to, so a mapping can
/// never outlive its registry.
#[derive(Debug, Clone, Copy)]
pub struct KeyMapping<'r> {
    pub meta: Option<KeyCode>,
    pub input: KeyMappingInput,
    pub action: KeyAction,
    pub info: &'r KeyFunctionInfo,
    pub slot: KeyMappingSlot,
}

impl<'r> KeyMapping<'r> {
    pub fn new(
        combination: KeyCombination,
        info: &'r KeyFunctionInfo,
        slot: KeyMappingSlot,
    ) -> Self {
        Self {
            meta: combination.meta,
            input: combination.input,
            action: combination.action,
            info,
            slot,
        }
    }

    pub fn combination(&self) -> KeyCombination {
        KeyCombination {
            meta: self.meta,
            input: self.input,
            action: self.action,
        }
    }

    pub fn is_cleared(&self) -> bool {
        self.input.is_cleared()
    }

    /// Check if this mapping belongs to the same function and slot
    pub fn is_at(&self, info: &KeyFunctionInfo, slot: KeyMappingSlot) -> bool {
        self.info.function == info.function && self.slot == slot
    }

    /// Check if this mapping holds the given input combination in a context
    pub fn occupies(
        &self,
        meta: Option<KeyCode>,
        input: KeyMappingInput,
        context: InputContext,
    ) -> bool {
        self.meta == meta && self.input == input && self.info.context == context
    }

    /// Label used by the editor: "Ctrl + B", "F7", "Mouse Wheel Up"
    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl PartialEq for KeyMapping<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.meta == other.meta
            && self.input == other.input
            && self.action == other.action
            && self.slot == other.slot
            && self.info.function == other.info.function
    }
}

impl Eq for KeyMapping<'_> {}

impl fmt::Display for KeyMapping<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_combination(f, self.meta, self.input)
    }
}

fn write_combination(
    f: &mut fmt::Formatter<'_>,
    meta: Option<KeyCode>,
    input: KeyMappingInput,
) -> fmt::Result {
    if input.is_cleared() {
        return Ok(());
    }
    match meta {
        Some(meta) => match meta.modifier_label() {
            Some(label) => write!(f, "{} + {}", label, input),
            None => write!(f, "{} + {}", meta, input),
        },
        None => write!(f, "{}", input),
    }
}
