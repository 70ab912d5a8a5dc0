//! Benchmarks for the per-frame keymap paths
//!
//! Run with: cargo bench keymap

use bindery::keymap::{
    apply_keymap_json, serialize_keymap, ActiveContexts, InputManager, InputState, KeyCode,
    KeyFunctionRegistry, KeyMappingSlot,
};

#[global_allocator]
static ALLOC: divan::AllocProfiler = divan::AllocProfiler::system();

fn main() {
    divan::main();
}

// ============================================================================
// Dispatch
// ============================================================================

#[divan::bench]
fn dispatch_idle_frame(bencher: divan::Bencher) {
    let store = InputManager::with_defaults(KeyFunctionRegistry::global());
    let input = InputState::new();
    let contexts = ActiveContexts::in_game();

    bencher.bench_local(|| divan::black_box(store.triggered_functions(&input, &contexts)));
}

#[divan::bench(args = [1, 4, 16])]
fn dispatch_keys_held(bencher: divan::Bencher, held: usize) {
    let store = InputManager::with_defaults(KeyFunctionRegistry::global());
    let mut input = InputState::new();
    input.press_key(KeyCode::LCTRL);
    for key in KeyCode::scannable().filter(|k| !k.is_modifier()).take(held) {
        input.press_key(key);
    }
    let contexts = ActiveContexts::in_game().over_radar().with_debug(true);

    bencher.bench_local(|| divan::black_box(store.triggered_functions(&input, &contexts)));
}

// ============================================================================
// Rebind and reset
// ============================================================================

#[divan::bench]
fn rebind_with_conflict(bencher: divan::Bencher) {
    let registry = KeyFunctionRegistry::global();
    let save = registry.lookup_by_name("QuickSave").unwrap();
    let mut store = InputManager::with_defaults(registry);

    bencher.bench_local(|| {
        // B is held by CentreOnBase after every reset
        store.reset_mappings(true);
        let outcome = store.rebind(save, KeyMappingSlot::Primary, None, KeyCode::B.into());
        divan::black_box(outcome.is_ok())
    });
}

#[divan::bench]
fn reset_to_defaults(bencher: divan::Bencher) {
    let mut store = InputManager::with_defaults(KeyFunctionRegistry::global());

    bencher.bench_local(|| {
        store.reset_mappings(true);
        divan::black_box(store.all_mappings().len())
    });
}

// ============================================================================
// Persistence
// ============================================================================

#[divan::bench]
fn serialize_defaults(bencher: divan::Bencher) {
    let store = InputManager::with_defaults(KeyFunctionRegistry::global());

    bencher.bench_local(|| divan::black_box(serialize_keymap(&store).map(|(json, _)| json.len())));
}

#[divan::bench]
fn apply_saved_keymap(bencher: divan::Bencher) {
    let mut store = InputManager::with_defaults(KeyFunctionRegistry::global());
    let (json, _) = serialize_keymap(&store).unwrap();

    bencher.bench_local(|| divan::black_box(apply_keymap_json(&mut store, &json).map(|r| r.loaded)));
}
