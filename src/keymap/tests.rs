//! Integration tests for the keymap system

use super::*;

fn global_store() -> InputManager<'static> {
    InputManager::with_defaults(KeyFunctionRegistry::global())
}

/// (function name, slot) -> (meta, input, action) for every assignable mapping
fn assignable_snapshot(store: &InputManager<'_>) -> Vec<(String, KeyMappingSlot, Option<KeyCode>, KeyMappingInput, KeyAction)> {
    let mut snapshot: Vec<_> = store
        .all_mappings()
        .iter()
        .filter(|m| m.info.is_assignable())
        .map(|m| (m.info.name.clone(), m.slot, m.meta, m.input, m.action))
        .collect();
    snapshot.sort_by(|a, b| (&a.0, a.1.index()).cmp(&(&b.0, b.1.index())));
    snapshot
}

/// One assignable gameplay function bound to B, as in the slot scenario
fn scenario_registry() -> KeyFunctionRegistry {
    KeyFunctionRegistry::new(vec![KeyFunctionInfo::new(
        InputContext::Gameplay,
        KeyMappingType::Assignable,
        MappableFunction::CentreOnBase,
        "CentreOnBase",
        "Center View on HQ",
    )
    .with_default(KeyMappingSlot::Primary, KeyCombination::pressed(None, KeyCode::B))])
    .unwrap()
}

#[test]
fn test_every_entry_found_by_name() {
    let registry = KeyFunctionRegistry::global();
    assert!(!registry.is_empty());

    for info in registry.all_entries() {
        let found = registry.lookup_by_name(&info.name).unwrap();
        assert_eq!(found.function, info.function);
        assert!(std::ptr::eq(found, info));
    }
}

#[test]
fn test_reset_installs_exact_defaults() {
    let store = global_store();

    for info in store.registry().all_entries() {
        for slot in KeyMappingSlot::ALL {
            let mapping = store.get_mapping(info, slot);
            match info.default_for(slot) {
                Some(default) => {
                    let mapping = mapping.unwrap();
                    assert_eq!(mapping.combination(), *default, "{} {}", info.name, slot);
                }
                None => assert!(mapping.is_none(), "{} {} should be unbound", info.name, slot),
            }
        }
    }
}

#[test]
fn test_add_mapping_never_duplicates_slot() {
    let mut store = global_store();
    let info = store.registry().lookup_by_name("QuickLoad").unwrap();

    store.add_mapping(None, KeyCode::L.into(), KeyAction::Pressed, info, KeyMappingSlot::Secondary);
    store.add_mapping(Some(KeyCode::LALT), KeyCode::L.into(), KeyAction::Released, info, KeyMappingSlot::Secondary);

    let in_slot = store
        .mappings_for(info)
        .filter(|m| m.slot == KeyMappingSlot::Secondary)
        .count();
    assert_eq!(in_slot, 1);

    let mapping = store.get_mapping(info, KeyMappingSlot::Secondary).unwrap();
    assert_eq!(mapping.meta, Some(KeyCode::LALT));
    assert_eq!(mapping.action, KeyAction::Released);
}

#[test]
fn test_conflicts_respect_meta_key() {
    let mut store = global_store();
    let registry = store.registry();
    let plain = registry.lookup_by_name("CentreOnBase").unwrap();
    let shifted = registry.lookup_by_name("QuickSave").unwrap();

    store.add_mapping(Some(KeyCode::LSHIFT), KeyCode::B.into(), KeyAction::Pressed, shifted, KeyMappingSlot::Secondary);

    let removed = store.remove_conflicting_mappings(None, KeyCode::B.into(), InputContext::Gameplay);

    assert!(!removed.is_empty());
    assert!(removed.iter().all(|m| m.meta.is_none()
        && m.input == KeyMappingInput::Key(KeyCode::B)
        && m.info.context == InputContext::Gameplay));
    assert!(store.get_mapping(plain, KeyMappingSlot::Primary).is_none());
    assert!(store.get_mapping(shifted, KeyMappingSlot::Secondary).is_some());

    // Nothing left to remove
    assert!(store
        .remove_conflicting_mappings(None, KeyCode::B.into(), InputContext::Gameplay)
        .is_empty());
}

#[test]
fn test_conflicts_limited_to_context() {
    let mut store = global_store();
    let terrain = store.registry().lookup_by_name("ToggleRadarTerrain").unwrap();

    // Ctrl+Tab belongs to the radar context
    let removed = store.remove_conflicting_mappings(Some(KeyCode::LCTRL), KeyCode::TAB.into(), InputContext::Gameplay);
    assert!(removed.is_empty());
    assert!(store.get_mapping(terrain, KeyMappingSlot::Primary).is_some());
}

#[test]
fn test_save_clear_load_round_trip() {
    let mut store = global_store();
    let registry = store.registry();

    let save = registry.lookup_by_name("QuickSave").unwrap();
    store
        .rebind(save, KeyMappingSlot::Secondary, Some(KeyCode::LCTRL), KeyCode::S.into())
        .unwrap();
    let group = registry.lookup_by_name("SelectGrouping_3").unwrap();
    store.unbind(group, KeyMappingSlot::Primary).unwrap();
    let zoom = registry.lookup_by_name("ZoomIn").unwrap();
    store
        .rebind(zoom, KeyMappingSlot::Primary, None, MouseKeyCode::X1.into())
        .unwrap();

    let expected = assignable_snapshot(&store);
    let (json, count) = serialize_keymap(&store).unwrap();
    assert_eq!(count, expected.len());

    store.clear_assignable_mappings();
    assert!(assignable_snapshot(&store).is_empty());

    let report = apply_keymap_json(&mut store, &json).unwrap();
    assert_eq!(report.skipped, 0);
    assert_eq!(assignable_snapshot(&store), expected);
}

#[test]
fn test_rebind_fixed_leaves_store_unchanged() {
    let mut store = global_store();
    let before: Vec<_> = store
        .all_mappings()
        .iter()
        .map(|m| (m.info.function, m.slot, m.meta, m.input, m.action))
        .collect();

    let build = store.registry().lookup_by_name("ChooseBuild").unwrap();
    let result = store.rebind(build, KeyMappingSlot::Primary, None, KeyCode::Z.into());
    assert!(matches!(result, Err(KeymapError::NotAssignable(_))));

    let after: Vec<_> = store
        .all_mappings()
        .iter()
        .map(|m| (m.info.function, m.slot, m.meta, m.input, m.action))
        .collect();
    assert_eq!(before, after);
}

#[test]
fn test_secondary_slot_takes_key_from_primary() {
    let registry = scenario_registry();
    let mut store = InputManager::with_defaults(&registry);
    let info = registry.lookup_by_name("CentreOnBase").unwrap();

    let outcome = store
        .rebind(info, KeyMappingSlot::Secondary, None, KeyCode::B.into())
        .unwrap();

    // Conflicts are keyed on the input, so the primary binding is the conflict
    assert_eq!(outcome.conflicts.len(), 1);
    assert_eq!(outcome.conflicts[0].slot, KeyMappingSlot::Primary);
    assert!(outcome.replaced.is_none());

    assert!(store.get_mapping(info, KeyMappingSlot::Primary).is_none());
    let secondary = store.get_mapping(info, KeyMappingSlot::Secondary).unwrap();
    assert_eq!(secondary.input, KeyMappingInput::Key(KeyCode::B));
    assert_eq!(secondary.action, KeyAction::Pressed);
    assert_eq!(store.all_mappings().len(), 1);
}

#[test]
fn test_rebind_leaves_single_holder() {
    let mut store = global_store();
    let registry = store.registry();
    let save = registry.lookup_by_name("QuickSave").unwrap();

    // B is CentreOnBase's default
    store.rebind(save, KeyMappingSlot::Primary, None, KeyCode::B.into()).unwrap();

    let holders: Vec<_> = store
        .all_mappings()
        .iter()
        .filter(|m| m.occupies(None, KeyCode::B.into(), InputContext::Gameplay))
        .collect();
    assert_eq!(holders.len(), 1);
    assert_eq!(holders[0].info.function, MappableFunction::QuickSave);
}

#[test]
fn test_dispatch_after_rebind() {
    let mut store = global_store();
    let save = store.registry().lookup_by_name("QuickSave").unwrap();
    store.rebind(save, KeyMappingSlot::Primary, Some(KeyCode::LCTRL), KeyCode::S.into()).unwrap();

    let mut input = InputState::new();
    input.press_key(KeyCode::F7);
    let fired = store.triggered_functions(&input, &ActiveContexts::in_game());
    assert!(!fired.contains(&MappableFunction::QuickSave));

    input.end_frame();
    input.press_key(KeyCode::RCTRL);
    input.press_key(KeyCode::S);
    let fired = store.triggered_functions(&input, &ActiveContexts::in_game());
    assert!(fired.contains(&MappableFunction::QuickSave));
}

#[test]
fn test_editor_capture_flow() {
    let mut store = global_store();
    let mut editor = KeyMapEditor::new(false, false);

    let outcome = editor
        .select(&store, MappableFunction::QuickLoad, KeyMappingSlot::Secondary)
        .unwrap();
    assert_eq!(outcome, SelectOutcome::Selected);

    let mut input = InputState::new();
    assert!(editor.poll(&mut store, &input).is_none());

    input.press_key(KeyCode::LALT);
    assert!(editor.poll(&mut store, &input).is_none());

    input.press_key(KeyCode::L);
    let result = editor.poll(&mut store, &input).unwrap();
    assert!(result.is_ok());
    assert!(editor.selection().is_none());

    let load = store.registry().lookup_by_name("QuickLoad").unwrap();
    let mapping = store.get_mapping(load, KeyMappingSlot::Secondary).unwrap();
    assert_eq!(mapping.label(), "Alt + L");
}

#[test]
fn test_key_strings_match_labels() {
    let store = global_store();

    for mapping in store.all_mappings().iter().filter(|m| !m.is_cleared()) {
        let text = format_binding(mapping.meta, mapping.input);
        let (meta, input) = parse_binding(&text).unwrap();
        assert_eq!(meta.map(|m| m.modifier_label()), mapping.meta.map(|m| m.modifier_label()), "{}", text);
        assert_eq!(input, mapping.input, "{}", text);
    }
}
