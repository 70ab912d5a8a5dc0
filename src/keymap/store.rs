//! The live mapping table and the rebind protocol
//!
//! `InputManager` owns every active `KeyMapping`. Editing goes through
//! [`InputManager::rebind`], which clears whatever else holds the requested
//! input in the same context before installing the new binding.
//! [`InputManager::add_mapping`] is the raw insert used by the loader and
//! performs no conflict resolution at all.

use std::mem;

use super::context::InputContext;
use super::error::KeymapError;
use super::function::MappableFunction;
use super::mapping::KeyMapping;
use super::registry::{KeyFunctionInfo, KeyFunctionRegistry};
use super::types::{KeyAction, KeyCode, KeyMappingInput, KeyMappingSlot};

/// What a successful rebind displaced
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RebindOutcome<'r> {
    /// Mappings of any function that held the same input in the same context
    pub conflicts: Vec<KeyMapping<'r>>,
    /// The binding that previously sat in the rebound slot
    pub replaced: Option<KeyMapping<'r>>,
}

/// Owner of the active key mappings
#[derive(Debug, Clone)]
pub struct InputManager<'r> {
    registry: &'r KeyFunctionRegistry,
    mappings: Vec<KeyMapping<'r>>,
}

impl<'r> InputManager<'r> {
    /// An empty table over `registry`; call [`reset_mappings`](Self::reset_mappings) to install defaults
    pub fn new(registry: &'r KeyFunctionRegistry) -> Self {
        Self {
            registry,
            mappings: Vec::new(),
        }
    }

    /// A table with every default binding installed
    pub fn with_defaults(registry: &'r KeyFunctionRegistry) -> Self {
        let mut manager = Self::new(registry);
        manager.reset_mappings(true);
        manager
    }

    pub fn registry(&self) -> &'r KeyFunctionRegistry {
        self.registry
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// The mapping bound to a function's slot
    pub fn get_mapping(&self, info: &KeyFunctionInfo, slot: KeyMappingSlot) -> Option<&KeyMapping<'r>> {
        self.mapping_for_function(info.function, slot)
    }

    pub fn mapping_for_function(
        &self,
        function: MappableFunction,
        slot: KeyMappingSlot,
    ) -> Option<&KeyMapping<'r>> {
        self.mappings
            .iter()
            .find(|m| m.info.function == function && m.slot == slot)
    }

    /// Every mapping of one function, in table order
    pub fn mappings_for<'a>(
        &'a self,
        info: &'a KeyFunctionInfo,
    ) -> impl Iterator<Item = &'a KeyMapping<'r>> + 'a {
        self.mappings
            .iter()
            .filter(move |m| m.info.function == info.function)
    }

    /// Mappings of functions the editor lists
    pub fn visible_mappings(&self) -> impl Iterator<Item = &KeyMapping<'r>> {
        self.mappings.iter().filter(|m| m.info.is_visible())
    }

    pub fn all_mappings(&self) -> &[KeyMapping<'r>] {
        &self.mappings
    }

    // ========================================================================
    // Raw edits
    // ========================================================================

    /// Insert a binding without any conflict check
    ///
    /// Only assignable functions are accepted; anything else is logged and
    /// ignored. A binding already present at (function, slot) is overwritten.
    pub fn add_mapping(
        &mut self,
        meta: Option<KeyCode>,
        input: KeyMappingInput,
        action: KeyAction,
        info: &KeyFunctionInfo,
        slot: KeyMappingSlot,
    ) -> Option<&KeyMapping<'r>> {
        let registry = self.registry;
        let Some(own) = registry.lookup_by_function(info.function) else {
            tracing::warn!("Key function '{}' is not registered, ignoring mapping", info.name);
            return None;
        };
        if !own.is_assignable() {
            tracing::warn!(
                "Key function '{}' is not assignable, ignoring mapping",
                own.name
            );
            return None;
        }
        Some(self.insert(meta, input, action, own, slot))
    }

    /// Remove a function's slot binding, returning it if there was one
    pub fn remove_mapping(
        &mut self,
        info: &KeyFunctionInfo,
        slot: KeyMappingSlot,
    ) -> Option<KeyMapping<'r>> {
        let index = self.mappings.iter().position(|m| m.is_at(info, slot))?;
        Some(self.mappings.remove(index))
    }

    /// Remove every mapping holding `meta + input` in `context`
    ///
    /// Matching is exact: a bare key and the same key with a meta key are
    /// different inputs. Function, slot and mapping type are not considered.
    pub fn remove_conflicting_mappings(
        &mut self,
        meta: Option<KeyCode>,
        input: KeyMappingInput,
        context: InputContext,
    ) -> Vec<KeyMapping<'r>> {
        if input.is_cleared() {
            return Vec::new();
        }

        let (conflicts, kept): (Vec<_>, Vec<_>) = mem::take(&mut self.mappings)
            .into_iter()
            .partition(|m| m.occupies(meta, input, context));
        self.mappings = kept;

        for conflict in &conflicts {
            tracing::debug!(
                function = %conflict.info.name,
                slot = %conflict.slot,
                "Removed conflicting mapping {}",
                conflict
            );
        }
        conflicts
    }

    /// Drop every binding of an assignable function
    pub fn clear_assignable_mappings(&mut self) {
        self.mappings.retain(|m| !m.info.is_assignable());
    }

    /// Clear the table and reinstall registry defaults
    ///
    /// With `to_defaults == false` only fixed and hidden functions get their
    /// defaults; assignable slots are left for the keymap file to fill.
    pub fn reset_mappings(&mut self, to_defaults: bool) {
        self.mappings.clear();

        let registry = self.registry;
        for info in registry.all_entries() {
            if info.is_assignable() && !to_defaults {
                continue;
            }
            for (slot, combination) in &info.default_mappings {
                self.insert(combination.meta, combination.input, combination.action, info, *slot);
            }
        }

        tracing::debug!(
            "Reset key mappings ({} installed, defaults: {})",
            self.mappings.len(),
            to_defaults
        );
    }

    fn insert(
        &mut self,
        meta: Option<KeyCode>,
        input: KeyMappingInput,
        action: KeyAction,
        info: &'r KeyFunctionInfo,
        slot: KeyMappingSlot,
    ) -> &KeyMapping<'r> {
        let mapping = KeyMapping {
            meta,
            input,
            action,
            info,
            slot,
        };

        match self.mappings.iter().position(|m| m.is_at(info, slot)) {
            Some(index) => {
                self.mappings[index] = mapping;
                &self.mappings[index]
            }
            None => {
                self.mappings.push(mapping);
                &self.mappings[self.mappings.len() - 1]
            }
        }
    }

    // ========================================================================
    // Rebind protocol
    // ========================================================================

    /// Bind `meta + input` to a function's slot
    ///
    /// Fixed and hidden functions are refused before anything changes, as is
    /// an input a fixed or hidden function holds in the same context.
    /// Otherwise every holder of the same input in the function's context is
    /// removed, the slot's old binding is removed, and the new binding is
    /// installed with [`KeyAction::Pressed`].
    pub fn rebind(
        &mut self,
        info: &KeyFunctionInfo,
        slot: KeyMappingSlot,
        meta: Option<KeyCode>,
        input: KeyMappingInput,
    ) -> Result<RebindOutcome<'r>, KeymapError> {
        let registry = self.registry;
        let own = registry
            .lookup_by_function(info.function)
            .ok_or_else(|| KeymapError::NotFound(info.name.clone()))?;
        if !own.is_assignable() {
            return Err(KeymapError::NotAssignable(own.name.clone()));
        }
        if let Some(holder) = self
            .mappings
            .iter()
            .find(|m| !m.info.is_assignable() && m.occupies(meta, input, own.context))
        {
            return Err(KeymapError::InputReserved {
                input: holder.to_string(),
                holder: holder.info.name.clone(),
            });
        }

        let conflicts = self.remove_conflicting_mappings(meta, input, own.context);
        let replaced = self.remove_mapping(own, slot);
        let installed = self.insert(meta, input, KeyAction::Pressed, own, slot);

        tracing::info!(
            "Bound '{}' {} slot to '{}' ({} conflict(s) cleared)",
            own.name,
            slot,
            installed,
            conflicts.len()
        );

        Ok(RebindOutcome { conflicts, replaced })
    }

    /// Clear a function's slot, leaving the cleared sentinel in place
    pub fn unbind(
        &mut self,
        info: &KeyFunctionInfo,
        slot: KeyMappingSlot,
    ) -> Result<RebindOutcome<'r>, KeymapError> {
        self.rebind(info, slot, None, KeyMappingInput::CLEARED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keymap::mapping::KeyCombination;
    use crate::keymap::registry::KeyMappingType;

    fn registry() -> KeyFunctionRegistry {
        KeyFunctionRegistry::new(vec![
            KeyFunctionInfo::new(
                InputContext::Gameplay,
                KeyMappingType::Assignable,
                MappableFunction::CentreOnBase,
                "CentreOnBase",
                "Center View on HQ",
            )
            .with_default(KeyMappingSlot::Primary, KeyCombination::pressed(None, KeyCode::B)),
            KeyFunctionInfo::new(
                InputContext::Gameplay,
                KeyMappingType::Assignable,
                MappableFunction::QuickSave,
                "QuickSave",
                "QuickSave",
            )
            .with_default(KeyMappingSlot::Primary, KeyCombination::pressed(None, KeyCode::F7)),
            KeyFunctionInfo::new(
                InputContext::AlwaysActive,
                KeyMappingType::Fixed,
                MappableFunction::ChooseBuild,
                "ChooseBuild",
                "Build",
            )
            .with_default(KeyMappingSlot::Primary, KeyCombination::pressed(None, KeyCode::F3)),
        ])
        .unwrap()
    }

    #[test]
    fn test_with_defaults_installs_everything() {
        let registry = registry();
        let manager = InputManager::with_defaults(&registry);
        assert_eq!(manager.all_mappings().len(), 3);
    }

    #[test]
    fn test_add_mapping_replaces_same_slot() {
        let registry = registry();
        let mut manager = InputManager::with_defaults(&registry);
        let info = registry.lookup_by_name("QuickSave").unwrap();

        manager.add_mapping(None, KeyCode::S.into(), KeyAction::Pressed, info, KeyMappingSlot::Primary);

        assert_eq!(manager.mappings_for(info).count(), 1);
        let mapping = manager.get_mapping(info, KeyMappingSlot::Primary).unwrap();
        assert_eq!(mapping.input, KeyMappingInput::Key(KeyCode::S));
    }

    #[test]
    fn test_add_mapping_rejects_fixed() {
        let registry = registry();
        let mut manager = InputManager::new(&registry);
        let info = registry.lookup_by_name("ChooseBuild").unwrap();

        let added = manager.add_mapping(None, KeyCode::Z.into(), KeyAction::Pressed, info, KeyMappingSlot::Primary);
        assert!(added.is_none());
        assert!(manager.all_mappings().is_empty());
    }

    #[test]
    fn test_remove_mapping_absent_is_noop() {
        let registry = registry();
        let mut manager = InputManager::with_defaults(&registry);
        let info = registry.lookup_by_name("QuickSave").unwrap();

        assert!(manager.remove_mapping(info, KeyMappingSlot::Secondary).is_none());
        assert_eq!(manager.all_mappings().len(), 3);
    }

    #[test]
    fn test_reset_without_defaults_keeps_fixed_only() {
        let registry = registry();
        let mut manager = InputManager::with_defaults(&registry);
        manager.reset_mappings(false);

        let names: Vec<_> = manager.all_mappings().iter().map(|m| m.info.name.as_str()).collect();
        assert_eq!(names, vec!["ChooseBuild"]);
    }

    #[test]
    fn test_rebind_reports_replaced() {
        let registry = registry();
        let mut manager = InputManager::with_defaults(&registry);
        let info = registry.lookup_by_name("QuickSave").unwrap();

        let outcome = manager
            .rebind(info, KeyMappingSlot::Primary, Some(KeyCode::LCTRL), KeyCode::S.into())
            .unwrap();

        assert!(outcome.conflicts.is_empty());
        assert_eq!(outcome.replaced.map(|m| m.input), Some(KeyMappingInput::Key(KeyCode::F7)));
    }

    #[test]
    fn test_rebind_refuses_input_of_fixed_function() {
        let registry = registry();
        let mut manager = InputManager::with_defaults(&registry);
        let centre = registry.lookup_by_name("CentreOnBase").unwrap();
        // F3 belongs to ChooseBuild in a different context, so it is free
        manager.rebind(centre, KeyMappingSlot::Secondary, None, KeyCode::F3.into()).unwrap();

        let registry = KeyFunctionRegistry::new(vec![
            KeyFunctionInfo::new(
                InputContext::Background,
                KeyMappingType::Fixed,
                MappableFunction::AddInGameOptions,
                "addInGameOptions",
                "Display In-Game Options",
            )
            .with_default(KeyMappingSlot::Primary, KeyCombination::pressed(None, KeyCode::ESC)),
            KeyFunctionInfo::new(
                InputContext::Background,
                KeyMappingType::Assignable,
                MappableFunction::AddMultiMenu,
                "addMultiMenu",
                "Multiplayer Options / Alliance dialog",
            ),
        ])
        .unwrap();
        let mut manager = InputManager::with_defaults(&registry);
        let multi = registry.lookup_by_name("addMultiMenu").unwrap();

        let result = manager.rebind(multi, KeyMappingSlot::Primary, None, KeyCode::ESC.into());

        assert!(matches!(
            result,
            Err(KeymapError::InputReserved { ref holder, .. }) if holder == "addInGameOptions"
        ));
        assert_eq!(manager.all_mappings().len(), 1);
        assert!(manager.get_mapping(multi, KeyMappingSlot::Primary).is_none());
    }

    #[test]
    fn test_unbind_leaves_cleared_sentinel() {
        let registry = registry();
        let mut manager = InputManager::with_defaults(&registry);
        let info = registry.lookup_by_name("CentreOnBase").unwrap();

        manager.unbind(info, KeyMappingSlot::Primary).unwrap();

        let mapping = manager.get_mapping(info, KeyMappingSlot::Primary).unwrap();
        assert!(mapping.is_cleared());
    }
}
