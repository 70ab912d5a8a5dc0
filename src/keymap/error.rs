//! Errors produced by the keymap layer

/// Errors that can occur while building, editing or persisting keymaps
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeymapError {
    /// Unknown function name or missing mapping
    NotFound(String),
    /// Attempt to rebind a fixed or hidden function
    NotAssignable(String),
    /// Input held by a fixed or hidden function in the same context
    InputReserved { input: String, holder: String },
    /// Keymap file could not be read or written
    PersistenceUnavailable(String),
    /// Keymap file contents are malformed
    Parse(String),
    /// Key string could not be understood
    InvalidKey(String),
    /// Registry built with a repeated name or function
    DuplicateFunction(String),
    /// Operation refused in the current session
    NotAllowed(String),
}

impl std::fmt::Display for KeymapError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KeymapError::NotFound(name) => write!(f, "Unknown key function: {}", name),
            KeymapError::NotAssignable(name) => {
                write!(f, "Key function cannot be reassigned: {}", name)
            }
            KeymapError::InputReserved { input, holder } => {
                write!(f, "{} is reserved by key function {}", input, holder)
            }
            KeymapError::PersistenceUnavailable(e) => write!(f, "Keymap file unavailable: {}", e),
            KeymapError::Parse(e) => write!(f, "Parse error: {}", e),
            KeymapError::InvalidKey(k) => write!(f, "Invalid key: {}", k),
            KeymapError::DuplicateFunction(name) => {
                write!(f, "Key function registered twice: {}", name)
            }
            KeymapError::NotAllowed(why) => write!(f, "Not allowed: {}", why),
        }
    }
}

impl std::error::Error for KeymapError {}
