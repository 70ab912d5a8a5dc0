//! bindery command-line tool
//!
//! Usage:
//!   bindery list [--all]
//!   bindery bind QuickSave ctrl+s [--secondary]
//!   bindery unbind CentreOnBase [--secondary]
//!   bindery reset
//!   bindery path [--logs]

use anyhow::{Context, Result};
use clap::Parser;

use bindery::cli::{CliArgs, CliCommand};
use bindery::config::GameConfig;
use bindery::keymap::{
    parse_binding, InputManager, KeyFunctionInfo, KeyFunctionRegistry, KeyMappingSlot,
    KeyMappingType, KeymapError, KeymapFile, RebindOutcome,
};

fn main() -> Result<()> {
    let args = CliArgs::parse();
    let _log_guard = bindery::tracing::init(args.verbose);

    if let CliCommand::Path { logs: true } = args.command {
        let log = bindery::config_paths::log_file().context("No config directory available")?;
        println!("{}", log.display());
        return Ok(());
    }

    let config = GameConfig::load();
    let path = args
        .keymap_path(&config)
        .context("No config directory available; pass --keymap")?;
    let file = KeymapFile::new(path);

    if let CliCommand::Path { .. } = args.command {
        println!("{}", file.path().display());
        return Ok(());
    }

    let registry = KeyFunctionRegistry::global();
    let mut store = InputManager::with_defaults(registry);
    if !args.defaults && file.exists() {
        file.load(&mut store)
            .with_context(|| format!("Failed to load keymap {}", file.path().display()))?;
    }

    match &args.command {
        CliCommand::List { all } => list(&store, *all),
        CliCommand::Bind { function, key, .. } => {
            let info = lookup(registry, function)?;
            let (meta, input) = parse_binding(key)?;
            let slot = args.command.slot().unwrap_or(KeyMappingSlot::Primary);
            let outcome = store.rebind(info, slot, meta, input)?;
            report(&outcome);
            println!("{} {} = {}", info.name, slot, store_label(&store, info, slot));
        }
        CliCommand::Unbind { function, .. } => {
            let info = lookup(registry, function)?;
            let slot = args.command.slot().unwrap_or(KeyMappingSlot::Primary);
            let outcome = store.unbind(info, slot)?;
            report(&outcome);
            println!("{} {} cleared", info.name, slot);
        }
        CliCommand::Reset => {
            store.reset_mappings(true);
            println!("Restored default key mappings");
        }
        CliCommand::Path { .. } => {}
    }

    if args.command.writes_keymap() {
        file.save(&store)
            .with_context(|| format!("Failed to save keymap {}", file.path().display()))?;
    }

    Ok(())
}

fn lookup<'r>(registry: &'r KeyFunctionRegistry, name: &str) -> Result<&'r KeyFunctionInfo> {
    registry
        .lookup_by_name(name)
        .ok_or_else(|| KeymapError::NotFound(name.to_string()))
        .context("Run `bindery list --all` for the function names")
}

fn list(store: &InputManager<'_>, all: bool) {
    let registry = store.registry();
    let entries = if all {
        let mut entries: Vec<_> = registry.all_entries().iter().collect();
        entries.sort_by(|a, b| a.display_name.cmp(&b.display_name));
        entries
    } else {
        registry.visible_entries_sorted_by(|info| info.display_name.clone())
    };

    for info in entries {
        let kind = match info.kind {
            KeyMappingType::Assignable => "",
            KeyMappingType::Fixed => " (fixed)",
            KeyMappingType::Hidden => " (hidden)",
        };
        println!(
            "{:<36} {:<16} {:<16} {}{}",
            info.display_name,
            store_label(store, info, KeyMappingSlot::Primary),
            store_label(store, info, KeyMappingSlot::Secondary),
            info.name,
            kind
        );
    }
}

fn store_label(store: &InputManager<'_>, info: &KeyFunctionInfo, slot: KeyMappingSlot) -> String {
    match store.get_mapping(info, slot).filter(|m| !m.is_cleared()) {
        Some(mapping) => mapping.label(),
        None => "-".to_string(),
    }
}

fn report(outcome: &RebindOutcome<'_>) {
    for conflict in &outcome.conflicts {
        println!(
            "Cleared {} {} ({})",
            conflict.info.name, conflict.slot, conflict
        );
    }
}
