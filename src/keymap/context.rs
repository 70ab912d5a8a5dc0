//! Input contexts for scoped keybindings
//!
//! Every mappable function is tagged with the context in which it may fire.
//! Two bindings only compete for the same physical input when they share a
//! context; a radar shortcut and a gameplay shortcut may reuse the same key.

use std::fmt;

/// Scope in which a mappable function is active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputContext {
    /// Active everywhere, including menus
    AlwaysActive,
    /// Active whenever the game screen is up, even behind menus
    Background,
    /// Active during normal play
    Gameplay,
    /// Active while the cursor is over the radar panel
    Radar,
    /// Active only when debug mappings are enabled
    Debug,
}

impl InputContext {
    /// Check if this context currently receives input
    pub fn is_active(self, active: &ActiveContexts) -> bool {
        match self {
            InputContext::AlwaysActive | InputContext::Background => true,
            InputContext::Gameplay => active.gameplay,
            InputContext::Radar => active.radar,
            InputContext::Debug => active.debug,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            InputContext::AlwaysActive => "always_active",
            InputContext::Background => "background",
            InputContext::Gameplay => "gameplay",
            InputContext::Radar => "radar",
            InputContext::Debug => "debug",
        }
    }
}

impl fmt::Display for InputContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Which of the switchable contexts are live this frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActiveContexts {
    /// The game itself has focus (no modal menu open)
    pub gameplay: bool,
    /// The cursor hovers the radar panel
    pub radar: bool,
    /// Debug mappings have been switched on
    pub debug: bool,
}

impl ActiveContexts {
    /// Contexts live during normal play with the cursor over the battlefield
    pub fn in_game() -> Self {
        Self {
            gameplay: true,
            radar: false,
            debug: false,
        }
    }

    /// Contexts live while a front-end or in-game menu is open
    pub fn menu() -> Self {
        Self::default()
    }

    /// Same contexts, with the cursor over the radar panel
    pub fn over_radar(mut self) -> Self {
        self.radar = true;
        self
    }

    /// Same contexts, with debug mappings enabled or disabled
    pub fn with_debug(mut self, enabled: bool) -> Self {
        self.debug = enabled;
        self
    }
}
