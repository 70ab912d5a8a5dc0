//! Keymap file persistence
//!
//! User bindings are stored as JSON:
//!
//! ```text
//! {
//!   "version": 1,
//!   "mappings": [
//!     { "name": "Select Group 1", "meta": 5190, "source": "default", "sub": 49,
//!       "slot": "primary", "action": 1, "function": "SelectGrouping_1" }
//!   ]
//! }
//! ```
//!
//! Only assignable functions are written. `function` identifies the entry;
//! `name` is the display name and is ignored on load.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::error::KeymapError;
use super::store::InputManager;
use super::types::{InputSource, KeyAction, KeyCode, KeyMappingInput, KeyMappingSlot};

/// Format version written to new keymap files
pub const KEYMAP_VERSION: u32 = 1;

/// Root structure of a keymap file
///
/// Records are read as raw JSON values and decoded one by one, so a single
/// malformed record cannot reject the whole file.
#[derive(Debug, Serialize, Deserialize)]
struct KeymapDocument<R> {
    #[serde(default = "default_version")]
    version: u32,
    #[serde(default = "Vec::new")]
    mappings: Vec<R>,
}

/// A single mapping entry
#[derive(Debug, Serialize, Deserialize)]
struct MappingRecord {
    #[serde(default)]
    name: String,
    #[serde(default)]
    meta: u32,
    #[serde(default = "default_source")]
    source: String,
    #[serde(default)]
    sub: u32,
    #[serde(default = "default_slot")]
    slot: String,
    #[serde(default)]
    action: i64,
    #[serde(default)]
    function: String,
}

fn default_version() -> u32 {
    KEYMAP_VERSION
}

fn default_source() -> String {
    InputSource::KeyCode.name().to_string()
}

fn default_slot() -> String {
    KeyMappingSlot::Primary.name().to_string()
}

/// Counts from applying a keymap file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub loaded: usize,
    pub skipped: usize,
}

/// How [`init_mappings`] populated the table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitOutcome {
    /// The keymap file was applied over the defaults
    Loaded(LoadReport),
    /// Defaults are in effect and were written back to the file
    Defaults,
    /// Defaults are in effect; the existing file could not be loaded and was left alone
    Unreadable,
}

/// A keymap file on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeymapFile {
    path: PathBuf,
}

impl KeymapFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `~/.config/bindery/keymap.json`
    pub fn default_location() -> Option<Self> {
        crate::config_paths::keymap_file().map(Self::new)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Write every assignable mapping
    ///
    /// Creates the parent directory if it doesn't exist.
    pub fn save(&self, store: &InputManager<'_>) -> Result<(), KeymapError> {
        let result = self.write(store);
        match &result {
            Ok(count) => tracing::info!("Keymap written to {} ({} mappings)", self.path.display(), count),
            Err(e) => tracing::error!("Could not save keymap to {}: {}", self.path.display(), e),
        }
        result.map(|_| ())
    }

    fn write(&self, store: &InputManager<'_>) -> Result<usize, KeymapError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| {
                KeymapError::PersistenceUnavailable(format!(
                    "Failed to create {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let (json, count) = serialize_keymap(store)?;
        fs::write(&self.path, json).map_err(|e| {
            KeymapError::PersistenceUnavailable(format!("{}: {}", self.path.display(), e))
        })?;
        Ok(count)
    }

    /// Replace the assignable mappings with the file's contents
    ///
    /// The file is read and parsed before anything changes, so a missing or
    /// malformed file leaves the current mappings untouched.
    pub fn load(&self, store: &mut InputManager<'_>) -> Result<LoadReport, KeymapError> {
        let content = fs::read_to_string(&self.path).map_err(|e| {
            KeymapError::PersistenceUnavailable(format!("{}: {}", self.path.display(), e))
        })?;

        let report = apply_keymap_json(store, &content)?;
        tracing::info!(
            "Loaded keymap from {} ({} mappings, {} skipped)",
            self.path.display(),
            report.loaded,
            report.skipped
        );
        Ok(report)
    }
}

/// Serialize the assignable mappings, returning the JSON and the record count
pub fn serialize_keymap(store: &InputManager<'_>) -> Result<(String, usize), KeymapError> {
    let mappings: Vec<MappingRecord> = store
        .all_mappings()
        .iter()
        .filter(|m| m.info.is_assignable())
        .map(|m| MappingRecord {
            name: m.info.display_name.clone(),
            meta: KeyCode::meta_to_code(m.meta),
            source: m.input.source().name().to_string(),
            sub: m.input.code(),
            slot: m.slot.name().to_string(),
            action: m.action.code(),
            function: m.info.name.clone(),
        })
        .collect();

    let count = mappings.len();
    let document = KeymapDocument {
        version: KEYMAP_VERSION,
        mappings,
    };
    let json = serde_json::to_string_pretty(&document)
        .map_err(|e| KeymapError::Parse(format!("Failed to serialize keymap: {}", e)))?;
    Ok((json, count))
}

/// Parse keymap JSON and install its records
///
/// Records bypass conflict resolution. Unknown or non-assignable functions
/// are skipped; malformed fields fall back to safe values with a log line.
pub fn apply_keymap_json(store: &mut InputManager<'_>, json: &str) -> Result<LoadReport, KeymapError> {
    let document: KeymapDocument<serde_json::Value> =
        serde_json::from_str(json).map_err(|e| KeymapError::Parse(e.to_string()))?;

    if document.version != KEYMAP_VERSION {
        tracing::warn!(
            "Keymap file version {} (expected {}), loading anyway",
            document.version,
            KEYMAP_VERSION
        );
    }

    store.clear_assignable_mappings();

    let registry = store.registry();
    let mut report = LoadReport::default();

    for (index, value) in document.mappings.into_iter().enumerate() {
        let record: MappingRecord = match serde_json::from_value(value) {
            Ok(record) => record,
            Err(e) => {
                tracing::warn!("Skipping malformed keymap record #{}: {}", index, e);
                report.skipped += 1;
                continue;
            }
        };

        let Some(info) = registry.lookup_by_name(&record.function) else {
            tracing::warn!("Skipping unknown keymap function \"{}\"", record.function);
            report.skipped += 1;
            continue;
        };
        if !info.is_assignable() {
            tracing::warn!("Skipping non-assignable keymap function \"{}\"", record.function);
            report.skipped += 1;
            continue;
        }

        let input = record_input(&record);
        let slot = KeyMappingSlot::from_name(&record.slot).unwrap_or_else(|| {
            tracing::warn!(
                "Unknown keymap slot \"{}\" for \"{}\", using primary",
                record.slot,
                record.function
            );
            KeyMappingSlot::Primary
        });
        let action = KeyAction::from_code(record.action).unwrap_or_else(|| {
            tracing::warn!(
                "Unknown keymap action {} for \"{}\", using pressed",
                record.action,
                record.function
            );
            KeyAction::Pressed
        });

        let meta = KeyCode::meta_from_code(record.meta);
        if store.add_mapping(meta, input, action, info, slot).is_some() {
            report.loaded += 1;
        } else {
            report.skipped += 1;
        }
    }

    Ok(report)
}

fn record_input(record: &MappingRecord) -> KeyMappingInput {
    let Some(source) = InputSource::from_name(&record.source) else {
        tracing::error!(
            "Invalid key mapping source \"{}\" for \"{}\"",
            record.source,
            record.function
        );
        return KeyMappingInput::CLEARED;
    };

    KeyMappingInput::from_source(source, record.sub).unwrap_or_else(|| {
        tracing::error!(
            "Invalid {} code {} for \"{}\"",
            record.source,
            record.sub,
            record.function
        );
        KeyMappingInput::CLEARED
    })
}

/// Install defaults, then overlay the keymap file
///
/// With `force_defaults`, or when there is no file yet, the defaults stay in
/// effect and are written back to the file. A file that exists but cannot be
/// loaded is never overwritten.
pub fn init_mappings(
    store: &mut InputManager<'_>,
    file: &KeymapFile,
    force_defaults: bool,
) -> InitOutcome {
    store.reset_mappings(true);

    if !force_defaults && file.exists() {
        match file.load(store) {
            Ok(report) => return InitOutcome::Loaded(report),
            Err(e) => {
                tracing::warn!("{}; using default key mappings, file left unchanged", e);
                return InitOutcome::Unreadable;
            }
        }
    }

    // Failure is already logged by save
    let _ = file.save(store);
    InitOutcome::Defaults
}
