//! Core input types for the keymap system: KeyCode, MouseKeyCode, KeyMappingInput

use std::fmt;

/// A physical keyboard scan code
///
/// Values follow the game's historical keysym numbering so that keymap files
/// written by older builds keep loading: letters and most punctuation are
/// their lowercase ASCII value, the keypad starts at 256, function keys at 282.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct KeyCode(u32);

impl KeyCode {
    pub const BACKSPACE: KeyCode = KeyCode(8);
    pub const TAB: KeyCode = KeyCode(9);
    pub const RETURN: KeyCode = KeyCode(13);
    pub const ESC: KeyCode = KeyCode(27);
    pub const SPACE: KeyCode = KeyCode(32);
    pub const QUOTE: KeyCode = KeyCode(39);
    pub const COMMA: KeyCode = KeyCode(44);
    pub const MINUS: KeyCode = KeyCode(45);
    pub const FULLSTOP: KeyCode = KeyCode(46);
    pub const FORWARDSLASH: KeyCode = KeyCode(47);
    pub const KEY_0: KeyCode = KeyCode(48);
    pub const KEY_9: KeyCode = KeyCode(57);
    pub const SEMICOLON: KeyCode = KeyCode(59);
    pub const EQUALS: KeyCode = KeyCode(61);
    pub const LSQUAREBRACKET: KeyCode = KeyCode(91);
    pub const BACKSLASH: KeyCode = KeyCode(92);
    pub const RSQUAREBRACKET: KeyCode = KeyCode(93);
    pub const BACKQUOTE: KeyCode = KeyCode(96);
    pub const A: KeyCode = KeyCode(b'a' as u32);
    pub const B: KeyCode = KeyCode(b'b' as u32);
    pub const C: KeyCode = KeyCode(b'c' as u32);
    pub const D: KeyCode = KeyCode(b'd' as u32);
    pub const E: KeyCode = KeyCode(b'e' as u32);
    pub const F: KeyCode = KeyCode(b'f' as u32);
    pub const G: KeyCode = KeyCode(b'g' as u32);
    pub const H: KeyCode = KeyCode(b'h' as u32);
    pub const I: KeyCode = KeyCode(b'i' as u32);
    pub const J: KeyCode = KeyCode(b'j' as u32);
    pub const K: KeyCode = KeyCode(b'k' as u32);
    pub const L: KeyCode = KeyCode(b'l' as u32);
    pub const M: KeyCode = KeyCode(b'm' as u32);
    pub const N: KeyCode = KeyCode(b'n' as u32);
    pub const O: KeyCode = KeyCode(b'o' as u32);
    pub const P: KeyCode = KeyCode(b'p' as u32);
    pub const Q: KeyCode = KeyCode(b'q' as u32);
    pub const R: KeyCode = KeyCode(b'r' as u32);
    pub const S: KeyCode = KeyCode(b's' as u32);
    pub const T: KeyCode = KeyCode(b't' as u32);
    pub const U: KeyCode = KeyCode(b'u' as u32);
    pub const V: KeyCode = KeyCode(b'v' as u32);
    pub const W: KeyCode = KeyCode(b'w' as u32);
    pub const X: KeyCode = KeyCode(b'x' as u32);
    pub const Y: KeyCode = KeyCode(b'y' as u32);
    pub const Z: KeyCode = KeyCode(b'z' as u32);
    pub const DELETE: KeyCode = KeyCode(127);

    // Keypad
    pub const KP_0: KeyCode = KeyCode(256);
    pub const KP_1: KeyCode = KeyCode(257);
    pub const KP_2: KeyCode = KeyCode(258);
    pub const KP_3: KeyCode = KeyCode(259);
    pub const KP_4: KeyCode = KeyCode(260);
    pub const KP_5: KeyCode = KeyCode(261);
    pub const KP_6: KeyCode = KeyCode(262);
    pub const KP_7: KeyCode = KeyCode(263);
    pub const KP_8: KeyCode = KeyCode(264);
    pub const KP_9: KeyCode = KeyCode(265);
    pub const KP_FULLSTOP: KeyCode = KeyCode(266);
    pub const KP_BACKSLASH: KeyCode = KeyCode(267);
    pub const KP_STAR: KeyCode = KeyCode(268);
    pub const KP_MINUS: KeyCode = KeyCode(269);
    pub const KP_PLUS: KeyCode = KeyCode(270);
    pub const KP_ENTER: KeyCode = KeyCode(271);

    // Navigation
    pub const UPARROW: KeyCode = KeyCode(273);
    pub const DOWNARROW: KeyCode = KeyCode(274);
    pub const RIGHTARROW: KeyCode = KeyCode(275);
    pub const LEFTARROW: KeyCode = KeyCode(276);
    pub const INSERT: KeyCode = KeyCode(277);
    pub const HOME: KeyCode = KeyCode(278);
    pub const END: KeyCode = KeyCode(279);
    pub const PAGEUP: KeyCode = KeyCode(280);
    pub const PAGEDOWN: KeyCode = KeyCode(281);

    // Function keys
    pub const F1: KeyCode = KeyCode(282);
    pub const F2: KeyCode = KeyCode(283);
    pub const F3: KeyCode = KeyCode(284);
    pub const F4: KeyCode = KeyCode(285);
    pub const F5: KeyCode = KeyCode(286);
    pub const F6: KeyCode = KeyCode(287);
    pub const F7: KeyCode = KeyCode(288);
    pub const F8: KeyCode = KeyCode(289);
    pub const F9: KeyCode = KeyCode(290);
    pub const F10: KeyCode = KeyCode(291);
    pub const F11: KeyCode = KeyCode(292);
    pub const F12: KeyCode = KeyCode(293);

    // Locks and modifiers
    pub const NUMLOCK: KeyCode = KeyCode(300);
    pub const CAPSLOCK: KeyCode = KeyCode(301);
    pub const SCROLLLOCK: KeyCode = KeyCode(302);
    pub const RSHIFT: KeyCode = KeyCode(303);
    pub const LSHIFT: KeyCode = KeyCode(304);
    pub const RCTRL: KeyCode = KeyCode(305);
    pub const LCTRL: KeyCode = KeyCode(306);
    pub const RALT: KeyCode = KeyCode(307);
    pub const LALT: KeyCode = KeyCode(308);
    pub const RMETA: KeyCode = KeyCode(309);
    pub const LMETA: KeyCode = KeyCode(310);
    pub const LSUPER: KeyCode = KeyCode(311);
    pub const RSUPER: KeyCode = KeyCode(312);

    /// One past the last scannable key; as a primary input it marks a cleared binding
    pub const MAXSCAN: KeyCode = KeyCode(323);

    /// Persisted encoding of "no meta key"
    pub const IGNORE: KeyCode = KeyCode(5190);

    /// Every modifier key, left and right variants
    pub const MODIFIERS: [KeyCode; 8] = [
        KeyCode::LALT,
        KeyCode::RALT,
        KeyCode::LCTRL,
        KeyCode::RCTRL,
        KeyCode::LSHIFT,
        KeyCode::RSHIFT,
        KeyCode::LMETA,
        KeyCode::RMETA,
    ];

    /// Wrap a raw scan code
    pub const fn from_code(code: u32) -> Self {
        KeyCode(code)
    }

    /// The raw scan code
    #[inline]
    pub const fn code(self) -> u32 {
        self.0
    }

    /// The number row key for a digit (0-9)
    pub const fn digit(n: u8) -> Self {
        KeyCode(KeyCode::KEY_0.0 + (n % 10) as u32)
    }

    /// Decode a persisted meta key: 0 and `IGNORE` both mean "no meta key"
    pub fn meta_from_code(code: u32) -> Option<KeyCode> {
        match code {
            0 => None,
            c if c == KeyCode::IGNORE.0 => None,
            c => Some(KeyCode(c)),
        }
    }

    /// Encode an optional meta key for persistence
    pub fn meta_to_code(meta: Option<KeyCode>) -> u32 {
        meta.map_or(KeyCode::IGNORE.0, KeyCode::code)
    }

    /// All codes a capture scan looks at, in scan order
    pub fn scannable() -> impl Iterator<Item = KeyCode> {
        (1..KeyCode::MAXSCAN.0).map(KeyCode)
    }

    /// Check if this is a shift/ctrl/alt/meta key
    pub fn is_modifier(self) -> bool {
        KeyCode::MODIFIERS.contains(&self)
    }

    /// Check if this key lives on the numeric keypad
    pub fn is_numpad(self) -> bool {
        (KeyCode::KP_0.0..=KeyCode::KP_ENTER.0).contains(&self.0)
    }

    /// The other-hand variant of a modifier (LCTRL <-> RCTRL, ...)
    pub fn paired_modifier(self) -> Option<KeyCode> {
        match self {
            KeyCode::LCTRL => Some(KeyCode::RCTRL),
            KeyCode::RCTRL => Some(KeyCode::LCTRL),
            KeyCode::LALT => Some(KeyCode::RALT),
            KeyCode::RALT => Some(KeyCode::LALT),
            KeyCode::LSHIFT => Some(KeyCode::RSHIFT),
            KeyCode::RSHIFT => Some(KeyCode::LSHIFT),
            KeyCode::LMETA => Some(KeyCode::RMETA),
            KeyCode::RMETA => Some(KeyCode::LMETA),
            _ => None,
        }
    }

    /// Short label used when this key acts as a meta key ("Ctrl", "Shift", ...)
    pub fn modifier_label(self) -> Option<&'static str> {
        match self {
            KeyCode::LCTRL | KeyCode::RCTRL => Some("Ctrl"),
            KeyCode::LALT | KeyCode::RALT => Some("Alt"),
            KeyCode::LSHIFT | KeyCode::RSHIFT => Some("Shift"),
            KeyCode::LMETA | KeyCode::RMETA => Some("Meta"),
            _ => None,
        }
    }

    /// Human readable name for keys that are not a single letter or digit
    pub fn name(self) -> Option<&'static str> {
        NAMED_KEYS
            .iter()
            .find(|(code, _)| *code == self)
            .map(|(_, name)| *name)
    }

    /// Look a key up by display name, ignoring case, spaces and underscores
    pub fn from_name(name: &str) -> Option<KeyCode> {
        let wanted = normalize_name(name);
        if wanted.is_empty() {
            return None;
        }

        let mut chars = wanted.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if c.is_ascii_alphanumeric() {
                return Some(KeyCode(c.to_ascii_lowercase() as u32));
            }
        }

        NAMED_KEYS
            .iter()
            .find(|(_, candidate)| normalize_name(candidate) == wanted)
            .map(|(code, _)| *code)
            .or_else(|| raw_code(&wanted))
    }
}

/// The `Key <N>` form used for codes without a name
fn raw_code(normalized: &str) -> Option<KeyCode> {
    let digits = normalized.strip_prefix("key")?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok().map(KeyCode)
}

fn normalize_name(name: &str) -> String {
    name.chars()
        .filter(|c| !c.is_whitespace() && *c != '_')
        .flat_map(char::to_lowercase)
        .collect()
}

const NAMED_KEYS: &[(KeyCode, &str)] = &[
    (KeyCode::BACKSPACE, "Backspace"),
    (KeyCode::TAB, "Tab"),
    (KeyCode::RETURN, "Return"),
    (KeyCode::ESC, "Esc"),
    (KeyCode::SPACE, "Space"),
    (KeyCode::QUOTE, "'"),
    (KeyCode::COMMA, ","),
    (KeyCode::MINUS, "-"),
    (KeyCode::FULLSTOP, "."),
    (KeyCode::FORWARDSLASH, "/"),
    (KeyCode::SEMICOLON, ";"),
    (KeyCode::EQUALS, "="),
    (KeyCode::LSQUAREBRACKET, "["),
    (KeyCode::BACKSLASH, "\\"),
    (KeyCode::RSQUAREBRACKET, "]"),
    (KeyCode::BACKQUOTE, "`"),
    (KeyCode::DELETE, "Delete"),
    (KeyCode::KP_0, "KP 0"),
    (KeyCode::KP_1, "KP 1"),
    (KeyCode::KP_2, "KP 2"),
    (KeyCode::KP_3, "KP 3"),
    (KeyCode::KP_4, "KP 4"),
    (KeyCode::KP_5, "KP 5"),
    (KeyCode::KP_6, "KP 6"),
    (KeyCode::KP_7, "KP 7"),
    (KeyCode::KP_8, "KP 8"),
    (KeyCode::KP_9, "KP 9"),
    (KeyCode::KP_FULLSTOP, "KP ."),
    (KeyCode::KP_BACKSLASH, "KP /"),
    (KeyCode::KP_STAR, "KP *"),
    (KeyCode::KP_MINUS, "KP -"),
    (KeyCode::KP_PLUS, "KP +"),
    (KeyCode::KP_ENTER, "KP Enter"),
    (KeyCode::UPARROW, "Up"),
    (KeyCode::DOWNARROW, "Down"),
    (KeyCode::RIGHTARROW, "Right"),
    (KeyCode::LEFTARROW, "Left"),
    (KeyCode::INSERT, "Insert"),
    (KeyCode::HOME, "Home"),
    (KeyCode::END, "End"),
    (KeyCode::PAGEUP, "Page Up"),
    (KeyCode::PAGEDOWN, "Page Down"),
    (KeyCode::F1, "F1"),
    (KeyCode::F2, "F2"),
    (KeyCode::F3, "F3"),
    (KeyCode::F4, "F4"),
    (KeyCode::F5, "F5"),
    (KeyCode::F6, "F6"),
    (KeyCode::F7, "F7"),
    (KeyCode::F8, "F8"),
    (KeyCode::F9, "F9"),
    (KeyCode::F10, "F10"),
    (KeyCode::F11, "F11"),
    (KeyCode::F12, "F12"),
    (KeyCode::NUMLOCK, "Num Lock"),
    (KeyCode::CAPSLOCK, "Caps Lock"),
    (KeyCode::SCROLLLOCK, "Scroll Lock"),
    (KeyCode::RSHIFT, "Right Shift"),
    (KeyCode::LSHIFT, "Left Shift"),
    (KeyCode::RCTRL, "Right Ctrl"),
    (KeyCode::LCTRL, "Left Ctrl"),
    (KeyCode::RALT, "Right Alt"),
    (KeyCode::LALT, "Left Alt"),
    (KeyCode::RMETA, "Right Meta"),
    (KeyCode::LMETA, "Left Meta"),
    (KeyCode::LSUPER, "Left Super"),
    (KeyCode::RSUPER, "Right Super"),
];

impl fmt::Display for KeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(c) = char::from_u32(self.0).filter(char::is_ascii_alphanumeric) {
            return write!(f, "{}", c.to_ascii_uppercase());
        }
        match self.name() {
            Some(name) => write!(f, "{}", name),
            None => write!(f, "Key {}", self.0),
        }
    }
}

/// A mouse button or wheel direction
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MouseKeyCode {
    Lmb = 1,
    Mmb,
    Rmb,
    X1,
    X2,
    WheelUp,
    WheelDown,
    Bad,
}

impl MouseKeyCode {
    /// Every button in scan order
    pub const ALL: [MouseKeyCode; 8] = [
        MouseKeyCode::Lmb,
        MouseKeyCode::Mmb,
        MouseKeyCode::Rmb,
        MouseKeyCode::X1,
        MouseKeyCode::X2,
        MouseKeyCode::WheelUp,
        MouseKeyCode::WheelDown,
        MouseKeyCode::Bad,
    ];

    pub const fn code(self) -> u32 {
        self as u32
    }

    pub fn from_code(code: u32) -> Option<Self> {
        MouseKeyCode::ALL.into_iter().find(|b| b.code() == code)
    }

    /// Left, middle and right buttons drive the game itself and cannot be bound
    pub fn is_bindable(self) -> bool {
        !matches!(
            self,
            MouseKeyCode::Lmb | MouseKeyCode::Mmb | MouseKeyCode::Rmb | MouseKeyCode::Bad
        )
    }

    /// Identifier used in key strings (`mouse_x1`, `mouse_wup`, ...)
    pub fn token(self) -> &'static str {
        match self {
            MouseKeyCode::Lmb => "mouse_lmb",
            MouseKeyCode::Mmb => "mouse_mmb",
            MouseKeyCode::Rmb => "mouse_rmb",
            MouseKeyCode::X1 => "mouse_x1",
            MouseKeyCode::X2 => "mouse_x2",
            MouseKeyCode::WheelUp => "mouse_wup",
            MouseKeyCode::WheelDown => "mouse_wdn",
            MouseKeyCode::Bad => "mouse_bad",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        let token = token.to_ascii_lowercase();
        MouseKeyCode::ALL.into_iter().find(|b| b.token() == token)
    }
}

impl fmt::Display for MouseKeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MouseKeyCode::Lmb => "Mouse Left",
            MouseKeyCode::Mmb => "Mouse Middle",
            MouseKeyCode::Rmb => "Mouse Right",
            MouseKeyCode::X1 => "Mouse 4",
            MouseKeyCode::X2 => "Mouse 5",
            MouseKeyCode::WheelUp => "Mouse Wheel Up",
            MouseKeyCode::WheelDown => "Mouse Wheel Down",
            MouseKeyCode::Bad => "Mouse ???",
        };
        write!(f, "{}", label)
    }
}

/// Which device an input comes from, as written to the keymap file
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InputSource {
    KeyCode,
    MouseKeyCode,
}

impl InputSource {
    pub fn name(self) -> &'static str {
        match self {
            InputSource::KeyCode => "default",
            InputSource::MouseKeyCode => "mouse_key",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "default" => Some(InputSource::KeyCode),
            "mouse_key" => Some(InputSource::MouseKeyCode),
            _ => None,
        }
    }
}

/// The primary input of a binding: a keyboard key or a mouse button
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyMappingInput {
    Key(KeyCode),
    Mouse(MouseKeyCode),
}

impl KeyMappingInput {
    /// Marks "nothing bound in this slot"
    pub const CLEARED: KeyMappingInput = KeyMappingInput::Key(KeyCode::MAXSCAN);

    #[inline]
    pub fn is_cleared(self) -> bool {
        self == KeyMappingInput::CLEARED
    }

    pub fn source(self) -> InputSource {
        match self {
            KeyMappingInput::Key(_) => InputSource::KeyCode,
            KeyMappingInput::Mouse(_) => InputSource::MouseKeyCode,
        }
    }

    /// Raw value as written to the keymap file
    pub fn code(self) -> u32 {
        match self {
            KeyMappingInput::Key(key) => key.code(),
            KeyMappingInput::Mouse(button) => button.code(),
        }
    }

    /// Rebuild an input from its persisted (source, value) pair
    pub fn from_source(source: InputSource, code: u32) -> Option<Self> {
        match source {
            InputSource::KeyCode => Some(KeyMappingInput::Key(KeyCode::from_code(code))),
            InputSource::MouseKeyCode => MouseKeyCode::from_code(code).map(KeyMappingInput::Mouse),
        }
    }

    pub fn as_key_code(self) -> Option<KeyCode> {
        match self {
            KeyMappingInput::Key(key) => Some(key),
            KeyMappingInput::Mouse(_) => None,
        }
    }

    pub fn as_mouse_key_code(self) -> Option<MouseKeyCode> {
        match self {
            KeyMappingInput::Mouse(button) => Some(button),
            KeyMappingInput::Key(_) => None,
        }
    }

    pub fn is_numpad(self) -> bool {
        self.as_key_code().is_some_and(KeyCode::is_numpad)
    }
}

impl From<KeyCode> for KeyMappingInput {
    fn from(key: KeyCode) -> Self {
        KeyMappingInput::Key(key)
    }
}

impl From<MouseKeyCode> for KeyMappingInput {
    fn from(button: MouseKeyCode) -> Self {
        KeyMappingInput::Mouse(button)
    }
}

impl fmt::Display for KeyMappingInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyMappingInput::Key(key) => write!(f, "{}", key),
            KeyMappingInput::Mouse(button) => write!(f, "{}", button),
        }
    }
}

/// When a binding fires
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyAction {
    /// Every frame while the input is held
    Down = 0,
    /// Once, on the frame the input goes down
    Pressed = 1,
    /// Once, on the frame the input goes up
    Released = 2,
}

impl KeyAction {
    pub const fn code(self) -> i64 {
        self as i64
    }

    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(KeyAction::Down),
            1 => Some(KeyAction::Pressed),
            2 => Some(KeyAction::Released),
            _ => None,
        }
    }
}

/// One of the two independent binding positions of a function
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum KeyMappingSlot {
    Primary,
    Secondary,
}

impl KeyMappingSlot {
    pub const ALL: [KeyMappingSlot; 2] = [KeyMappingSlot::Primary, KeyMappingSlot::Secondary];

    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            KeyMappingSlot::Primary => "primary",
            KeyMappingSlot::Secondary => "secondary",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "primary" => Some(KeyMappingSlot::Primary),
            "secondary" => Some(KeyMappingSlot::Secondary),
            _ => None,
        }
    }
}

impl fmt::Display for KeyMappingSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
