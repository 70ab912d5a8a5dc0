//! Key strings such as `"ctrl+b"`, `"F7"` or `"mouse_wup"`

use super::error::KeymapError;
use super::types::{KeyCode, KeyMappingInput, MouseKeyCode};

/// Parse a key string into an optional meta key and an input
///
/// At most one modifier prefix is accepted (`ctrl`, `alt`, `shift`, `meta`).
/// The remainder is a key display name, a mouse token, or `none` for the
/// cleared sentinel.
pub fn parse_binding(text: &str) -> Result<(Option<KeyCode>, KeyMappingInput), KeymapError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(KeymapError::InvalidKey("empty key string".to_string()));
    }

    // A lone "+" (or "kp +") is a key name, not a separator
    let (meta, rest) = match trimmed.split_once('+') {
        Some((prefix, rest)) if !rest.trim().is_empty() => match parse_modifier(prefix) {
            Some(meta) => (Some(meta), rest.trim()),
            None if is_key_name(trimmed) => (None, trimmed),
            None => {
                return Err(KeymapError::InvalidKey(format!(
                    "Unknown modifier '{}' in '{}'",
                    prefix.trim(),
                    text
                )))
            }
        },
        _ => (None, trimmed),
    };

    if rest.contains('+') && parse_modifier(rest.split('+').next().unwrap_or_default()).is_some() {
        return Err(KeymapError::InvalidKey(format!(
            "Only one modifier is allowed: {}",
            text
        )));
    }

    let input = parse_input(rest)
        .ok_or_else(|| KeymapError::InvalidKey(format!("Unknown key: {}", rest)))?;

    if meta.is_some() && input.is_cleared() {
        return Err(KeymapError::InvalidKey(format!(
            "A cleared binding cannot take a modifier: {}",
            text
        )));
    }

    Ok((meta, input))
}

/// Render a binding the way [`parse_binding`] reads it back
pub fn format_binding(meta: Option<KeyCode>, input: KeyMappingInput) -> String {
    let key = match input {
        _ if input.is_cleared() => return "none".to_string(),
        KeyMappingInput::Key(key) => key.to_string(),
        KeyMappingInput::Mouse(button) => button.token().to_string(),
    };
    match meta.and_then(KeyCode::modifier_label) {
        Some(label) => format!("{}+{}", label.to_lowercase(), key),
        None => key,
    }
}

fn parse_modifier(text: &str) -> Option<KeyCode> {
    match text.trim().to_ascii_lowercase().as_str() {
        "ctrl" | "control" => Some(KeyCode::LCTRL),
        "alt" => Some(KeyCode::LALT),
        "shift" => Some(KeyCode::LSHIFT),
        "meta" | "cmd" | "super" => Some(KeyCode::LMETA),
        _ => None,
    }
}

fn is_key_name(text: &str) -> bool {
    KeyCode::from_name(text).is_some()
}

fn parse_input(text: &str) -> Option<KeyMappingInput> {
    if text.eq_ignore_ascii_case("none") {
        return Some(KeyMappingInput::CLEARED);
    }
    if let Some(button) = MouseKeyCode::from_token(text) {
        return Some(KeyMappingInput::Mouse(button));
    }
    KeyCode::from_name(text).map(KeyMappingInput::Key)
}
