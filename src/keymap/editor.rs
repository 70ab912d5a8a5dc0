//! Key-map editor state
//!
//! Drives the rebind protocol from user interaction without drawing
//! anything. The front end renders [`KeyMapEditor::rows`], forwards slot
//! clicks to [`KeyMapEditor::select`] and calls [`KeyMapEditor::poll`] every
//! frame while the editor is open.

use super::error::KeymapError;
use super::function::MappableFunction;
use super::input::InputOracle;
use super::registry::KeyFunctionInfo;
use super::store::{InputManager, RebindOutcome};
use super::types::{KeyCode, KeyMappingInput, KeyMappingSlot, MouseKeyCode};

/// Label shown for an assignable slot with nothing bound
pub const NOT_BOUND_LABEL: &str = "<not bound>";

/// The slot waiting for a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyMapSelection {
    pub function: MappableFunction,
    pub slot: KeyMappingSlot,
}

/// Result of clicking a slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOutcome {
    /// The slot now waits for input
    Selected,
    /// The slot was already waiting and has been released
    Deselected,
}

/// One binding cell of an editor row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorSlot {
    pub slot: KeyMappingSlot,
    pub label: String,
    /// Bound to a keypad key, which the UI highlights
    pub numpad: bool,
    pub selected: bool,
}

/// One function as listed by the editor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorRow<'r> {
    pub info: &'r KeyFunctionInfo,
    pub slots: [EditorSlot; 2],
}

impl EditorRow<'_> {
    pub fn is_assignable(&self) -> bool {
        self.info.is_assignable()
    }
}

#[derive(Debug, Clone, Default)]
pub struct KeyMapEditor {
    in_game: bool,
    multiplayer: bool,
    selection: Option<KeyMapSelection>,
}

impl KeyMapEditor {
    pub fn new(in_game: bool, multiplayer: bool) -> Self {
        Self {
            in_game,
            multiplayer,
            selection: None,
        }
    }

    pub fn selection(&self) -> Option<KeyMapSelection> {
        self.selection
    }

    /// Visible functions sorted by display name, with their slot labels
    pub fn rows<'r>(&self, store: &InputManager<'r>) -> Vec<EditorRow<'r>> {
        store
            .registry()
            .visible_entries_sorted_by(|info| info.display_name.clone())
            .into_iter()
            .map(|info| EditorRow {
                info,
                slots: KeyMappingSlot::ALL.map(|slot| self.slot_cell(store, info, slot)),
            })
            .collect()
    }

    fn slot_cell(&self, store: &InputManager<'_>, info: &KeyFunctionInfo, slot: KeyMappingSlot) -> EditorSlot {
        let mapping = store.get_mapping(info, slot).filter(|m| !m.is_cleared());
        let label = match mapping {
            Some(mapping) => mapping.label(),
            None if info.is_assignable() => NOT_BOUND_LABEL.to_string(),
            None => String::new(),
        };

        EditorSlot {
            slot,
            label,
            numpad: mapping.is_some_and(|m| m.input.is_numpad()),
            selected: self.is_selected(info.function, slot),
        }
    }

    pub fn is_selected(&self, function: MappableFunction, slot: KeyMappingSlot) -> bool {
        self.selection == Some(KeyMapSelection { function, slot })
    }

    /// Handle a click on a function's slot
    ///
    /// Fixed and hidden functions are refused and drop any selection.
    /// Clicking the selected slot again while it holds a binding releases it.
    pub fn select(
        &mut self,
        store: &InputManager<'_>,
        function: MappableFunction,
        slot: KeyMappingSlot,
    ) -> Result<SelectOutcome, KeymapError> {
        let info = store
            .registry()
            .lookup_by_function(function)
            .ok_or_else(|| KeymapError::NotFound(format!("{:?}", function)))?;

        if !info.is_assignable() {
            self.selection = None;
            return Err(KeymapError::NotAssignable(info.name.clone()));
        }

        if self.is_selected(function, slot) && store.get_mapping(info, slot).is_some() {
            self.selection = None;
            return Ok(SelectOutcome::Deselected);
        }

        self.selection = Some(KeyMapSelection { function, slot });
        Ok(SelectOutcome::Selected)
    }

    /// Drop the selection without touching any binding
    pub fn cancel(&mut self) {
        self.selection = None;
    }

    /// Capture a key press for the selected slot
    ///
    /// Returns `None` while nothing is selected or nothing bindable was
    /// pressed. Once a key or extra mouse button goes down the selection is
    /// released and the rebind result is returned.
    pub fn poll<'r>(
        &mut self,
        store: &mut InputManager<'r>,
        oracle: &impl InputOracle,
    ) -> Option<Result<RebindOutcome<'r>, KeymapError>> {
        let selection = self.selection?;
        let input = scan_keyboard(oracle)
            .map(KeyMappingInput::Key)
            .or_else(|| scan_mouse(oracle).map(KeyMappingInput::Mouse))?;
        let meta = held_meta(oracle);

        self.selection = None;

        let registry = store.registry();
        let Some(info) = registry.lookup_by_function(selection.function) else {
            return Some(Err(KeymapError::NotFound(format!("{:?}", selection.function))));
        };
        Some(store.rebind(info, selection.slot, meta, input))
    }

    pub fn can_reset_to_defaults(&self) -> bool {
        !(self.in_game && self.multiplayer)
    }

    /// Restore every default binding
    pub fn reset_to_defaults(&mut self, store: &mut InputManager<'_>) -> Result<(), KeymapError> {
        if !self.can_reset_to_defaults() {
            return Err(KeymapError::NotAllowed(
                "key mappings cannot be reset during a multiplayer game".to_string(),
            ));
        }
        self.selection = None;
        store.reset_mappings(true);
        Ok(())
    }
}

fn scan_keyboard(oracle: &impl InputOracle) -> Option<KeyCode> {
    KeyCode::scannable().find(|&key| !key.is_modifier() && oracle.key_pressed(key))
}

fn scan_mouse(oracle: &impl InputOracle) -> Option<MouseKeyCode> {
    MouseKeyCode::ALL
        .into_iter()
        .find(|&button| button.is_bindable() && oracle.mouse_pressed(button))
}

fn held_meta(oracle: &impl InputOracle) -> Option<KeyCode> {
    let held = |left: KeyCode, right: KeyCode| oracle.key_down(left) || oracle.key_down(right);

    if held(KeyCode::LALT, KeyCode::RALT) {
        Some(KeyCode::LALT)
    } else if held(KeyCode::LCTRL, KeyCode::RCTRL) {
        Some(KeyCode::LCTRL)
    } else if held(KeyCode::LSHIFT, KeyCode::RSHIFT) {
        Some(KeyCode::LSHIFT)
    } else if held(KeyCode::LMETA, KeyCode::RMETA) {
        Some(KeyCode::LMETA)
    } else {
        None
    }
}
