//! Key combinations and their textual form (`"ctrl+a"`, `"cmd+shift+f5"`).

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::event::{Key, KeyEvent, KeyPhase, Modifiers};

/// Errors produced when parsing a key combination.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseKeyError {
    #[error("empty key combination")]
    Empty,
    #[error("unknown modifier '{0}'")]
    UnknownModifier(String),
    #[error("unknown key '{0}'")]
    UnknownKey(String),
    #[error("key combination '{0}' has no key")]
    MissingKey(String),
}

/// A key combination (key + modifiers)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    /// The key code
    pub key: Key,
    /// Modifier keys that must be held
    pub modifiers: Modifiers,
}

impl KeyCombo {
    /// Create a new key combo
    pub const fn new(key: Key, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }

    /// Create a key combo without modifiers
    pub const fn key(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers::NONE,
        }
    }

    /// Add ctrl modifier
    pub const fn ctrl(mut self) -> Self {
        self.modifiers.ctrl = true;
        self
    }

    /// Add shift modifier
    pub const fn shift(mut self) -> Self {
        self.modifiers.shift = true;
        self
    }

    /// Add alt modifier
    pub const fn alt(mut self) -> Self {
        self.modifiers.alt = true;
        self
    }

    /// Add super (command) modifier
    pub const fn super_(mut self) -> Self {
        self.modifiers.super_ = true;
        self
    }

    /// Check a key and held modifiers against this combo.
    ///
    /// Character keys compare case-insensitively, since terminals report
    /// `ctrl+shift+a` as `'A'`. Extra held modifiers do not prevent a match.
    pub fn matches(&self, key: Key, held: Modifiers) -> bool {
        let same_key = match (self.key, key) {
            (Key::Char(a), Key::Char(b)) => a.to_lowercase().eq(b.to_lowercase()),
            (a, b) => a == b,
        };
        same_key && held.contains(self.modifiers)
    }

    /// Like [`KeyCombo::matches`], but only for press and repeat events.
    pub fn matches_event(&self, event: &KeyEvent) -> bool {
        event.phase != KeyPhase::Release && self.matches(event.key, event.modifiers)
    }
}

impl FromStr for KeyCombo {
    type Err = ParseKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseKeyError::Empty);
        }

        // A trailing '+' is the plus key itself ("ctrl++").
        let (mods, key) = match s.strip_suffix("++") {
            Some(rest) => (rest, "+"),
            None if s == "+" => ("", "+"),
            None => match s.rsplit_once('+') {
                Some((mods, key)) => (mods, key),
                None => ("", s),
            },
        };
        if key.is_empty() {
            return Err(ParseKeyError::MissingKey(s.to_string()));
        }

        let mut modifiers = Modifiers::NONE;
        for part in mods.split('+').filter(|p| !p.is_empty()) {
            modifiers = modifiers.with(parse_modifier(part)?);
        }

        Ok(Self::new(parse_key(key)?, modifiers))
    }
}

pub(crate) fn parse_modifier(s: &str) -> Result<Modifiers, ParseKeyError> {
    match s.trim().to_ascii_lowercase().as_str() {
        "ctrl" | "control" => Ok(Modifiers::ctrl()),
        "shift" => Ok(Modifiers::shift()),
        "alt" | "option" => Ok(Modifiers::alt()),
        "super" | "cmd" | "command" | "win" => Ok(Modifiers::super_()),
        other => Err(ParseKeyError::UnknownModifier(other.to_string())),
    }
}

fn parse_key(s: &str) -> Result<Key, ParseKeyError> {
    let mut chars = s.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return Ok(Key::Char(c.to_ascii_lowercase()));
    }

    let lower = s.to_ascii_lowercase();
    let key = match lower.as_str() {
        "space" => Key::Char(' '),
        "enter" | "return" => Key::Enter,
        "backspace" => Key::Backspace,
        "delete" | "del" => Key::Delete,
        "tab" => Key::Tab,
        "backtab" => Key::BackTab,
        "esc" | "escape" => Key::Escape,
        "up" => Key::Up,
        "down" => Key::Down,
        "left" => Key::Left,
        "right" => Key::Right,
        "home" => Key::Home,
        "end" => Key::End,
        "pageup" => Key::PageUp,
        "pagedown" => Key::PageDown,
        "insert" | "ins" => Key::Insert,
        _ => match lower.strip_prefix('f').and_then(|n| n.parse::<u8>().ok()) {
            Some(n) if (1..=24).contains(&n) => Key::F(n),
            _ => return Err(ParseKeyError::UnknownKey(s.to_string())),
        },
    };
    Ok(key)
}

/// Writes the textual form accepted by `FromStr`. [`Key::Unknown`] is written
/// as `unknown`, which does not parse back.
impl fmt::Display for KeyCombo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let m = self.modifiers;
        for (held, name) in [
            (m.ctrl, "ctrl"),
            (m.alt, "alt"),
            (m.super_, "super"),
            (m.shift, "shift"),
        ] {
            if held {
                write!(f, "{name}+")?;
            }
        }
        match self.key {
            Key::Char(' ') => write!(f, "space"),
            Key::Char(c) => write!(f, "{c}"),
            Key::F(n) => write!(f, "f{n}"),
            Key::Escape => write!(f, "esc"),
            other => write!(f, "{}", format!("{other:?}").to_ascii_lowercase()),
        }
    }
}
