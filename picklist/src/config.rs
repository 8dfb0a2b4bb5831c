//! Selection behavior configuration.

use std::str::FromStr;

use crate::event::{Key, Modifiers};
use crate::keybinds::{parse_modifier, KeyCombo, ParseKeyError};

/// The modifier that turns a click into a toggle ("action" click).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionModifier {
    /// Control key (Linux, Windows).
    Ctrl,
    /// Command/super key (macOS).
    Super,
}

impl Default for ActionModifier {
    fn default() -> Self {
        if cfg!(target_os = "macos") {
            Self::Super
        } else {
            Self::Ctrl
        }
    }
}

impl ActionModifier {
    /// The modifier set holding just this key.
    pub fn modifiers(self) -> Modifiers {
        match self {
            Self::Ctrl => Modifiers::ctrl(),
            Self::Super => Modifiers::super_(),
        }
    }

    /// Check whether this modifier is held.
    pub fn is_held(self, held: Modifiers) -> bool {
        held.contains(self.modifiers())
    }
}

impl FromStr for ActionModifier {
    type Err = ParseKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let m = parse_modifier(s)?;
        if m == Modifiers::ctrl() {
            Ok(Self::Ctrl)
        } else if m == Modifiers::super_() {
            Ok(Self::Super)
        } else {
            Err(ParseKeyError::UnknownModifier(s.trim().to_string()))
        }
    }
}

/// Configuration for a [`SelectionList`](crate::SelectionList).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionConfig {
    /// Allow toggle (action+click) and range (shift+click) selection.
    /// When false every click replaces the selection.
    pub multi_select: bool,

    /// Modifier that makes a click toggle one item.
    pub action_modifier: ActionModifier,

    /// Key binding that selects every item.
    pub select_all: KeyCombo,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        let action_modifier = ActionModifier::default();
        Self {
            multi_select: true,
            action_modifier,
            select_all: default_select_all(action_modifier),
        }
    }
}

fn default_select_all(action: ActionModifier) -> KeyCombo {
    KeyCombo::new(Key::Char('a'), action.modifiers())
}

impl SelectionConfig {
    /// Create the default multi-select configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Single-selection configuration: modified clicks behave like plain clicks.
    pub fn single() -> Self {
        Self {
            multi_select: false,
            ..Default::default()
        }
    }

    /// Enable or disable multi-selection.
    pub fn multi_select(mut self, enabled: bool) -> Self {
        self.multi_select = enabled;
        self
    }

    /// Set the action modifier.
    ///
    /// A select-all binding still at its default (`a` + old action modifier)
    /// follows the new modifier.
    pub fn action_modifier(mut self, modifier: ActionModifier) -> Self {
        if self.select_all == default_select_all(self.action_modifier) {
            self.select_all = default_select_all(modifier);
        }
        self.action_modifier = modifier;
        self
    }

    /// Set the select-all binding.
    pub fn select_all(mut self, combo: KeyCombo) -> Self {
        self.select_all = combo;
        self
    }

    /// Set the select-all binding from its textual form, e.g. `"ctrl+a"`.
    pub fn select_all_str(self, combo: &str) -> Result<Self, ParseKeyError> {
        Ok(self.select_all(combo.parse()?))
    }
}
