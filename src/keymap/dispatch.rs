//! Per-frame evaluation of the mapping table

use super::context::ActiveContexts;
use super::function::MappableFunction;
use super::input::InputOracle;
use super::mapping::KeyMapping;
use super::store::InputManager;
use super::types::{KeyAction, KeyCode};

impl InputManager<'_> {
    /// Functions whose bindings trigger this frame
    ///
    /// Bindings with a meta key are reported before bare bindings. A bare
    /// edge-triggered binding does not fire while any modifier is held, so
    /// `Ctrl + B` never also fires `B`. Held (`Down`) bindings ignore
    /// modifiers so the camera keeps scrolling with Shift held.
    pub fn triggered_functions(
        &self,
        oracle: &impl InputOracle,
        contexts: &ActiveContexts,
    ) -> Vec<MappableFunction> {
        let modifier_held = KeyCode::MODIFIERS.iter().any(|&key| oracle.key_down(key));
        let mut fired = Vec::new();

        let live = self
            .all_mappings()
            .iter()
            .filter(|m| !m.is_cleared() && m.info.context.is_active(contexts));

        for mapping in live.clone().filter(|m| m.meta.is_some()) {
            if meta_held(mapping, oracle) && action_triggers(mapping, oracle) {
                push_unique(&mut fired, mapping.info.function);
            }
        }

        for mapping in live.filter(|m| m.meta.is_none()) {
            if modifier_held && mapping.action != KeyAction::Down {
                continue;
            }
            if action_triggers(mapping, oracle) {
                push_unique(&mut fired, mapping.info.function);
            }
        }

        fired
    }
}

fn meta_held(mapping: &KeyMapping<'_>, oracle: &impl InputOracle) -> bool {
    let Some(meta) = mapping.meta else {
        return false;
    };
    oracle.key_down(meta) || meta.paired_modifier().is_some_and(|other| oracle.key_down(other))
}

fn action_triggers(mapping: &KeyMapping<'_>, oracle: &impl InputOracle) -> bool {
    match mapping.action {
        KeyAction::Down => mapping.input.is_down(oracle),
        KeyAction::Pressed => mapping.input.is_pressed(oracle),
        KeyAction::Released => mapping.input.is_released(oracle),
    }
}

fn push_unique(fired: &mut Vec<MappableFunction>, function: MappableFunction) {
    if !fired.contains(&function) {
        fired.push(function);
    }
}
