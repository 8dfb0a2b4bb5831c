//! Which selection transition a click performs.
//!
//! Modified clicks act on button-down; a plain click replaces the selection
//! on button-up, so the selection does not change under a press that is
//! still held.

use crate::config::SelectionConfig;
use crate::event::{ButtonPhase, Modifiers};

/// Outcome of a click on a list child.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickAction {
    /// Toggle the hit child ([`selection::multi_select`](crate::selection::multi_select)).
    Toggle,
    /// Select from the anchor to the hit child ([`selection::shift_select`](crate::selection::shift_select)).
    Range,
    /// Make the hit child the only selection ([`selection::select`](crate::selection::select)).
    Replace,
    /// Consume the click without changing the selection.
    Claim,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Chord {
    Action,
    Shift,
    Plain,
}

fn chord(config: &SelectionConfig, modifiers: Modifiers) -> Chord {
    if !config.multi_select {
        Chord::Plain
    } else if config.action_modifier.is_held(modifiers) {
        Chord::Action
    } else if modifiers.shift {
        Chord::Shift
    } else {
        Chord::Plain
    }
}

/// Decide what a click does from the held modifiers and the button phase.
///
/// | chord  | down     | up        |
/// |--------|----------|-----------|
/// | action | `Toggle` | `Claim`   |
/// | shift  | `Range`  | `Claim`   |
/// | plain  | `Claim`  | `Replace` |
///
/// With multi-select disabled every click is plain. The action modifier wins
/// over shift.
pub fn click_action(
    config: &SelectionConfig,
    modifiers: Modifiers,
    phase: ButtonPhase,
) -> ClickAction {
    match (chord(config, modifiers), phase) {
        (Chord::Action, ButtonPhase::Down) => ClickAction::Toggle,
        (Chord::Shift, ButtonPhase::Down) => ClickAction::Range,
        (Chord::Plain, ButtonPhase::Up) => ClickAction::Replace,
        (Chord::Action | Chord::Shift, ButtonPhase::Up) | (Chord::Plain, ButtonPhase::Down) => {
            ClickAction::Claim
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ActionModifier;

    fn ctrl_config() -> SelectionConfig {
        SelectionConfig::new().action_modifier(ActionModifier::Ctrl)
    }

    #[test]
    fn test_plain_click_replaces_on_release_only() {
        let config = ctrl_config();
        assert_eq!(
            click_action(&config, Modifiers::NONE, ButtonPhase::Down),
            ClickAction::Claim
        );
        assert_eq!(
            click_action(&config, Modifiers::NONE, ButtonPhase::Up),
            ClickAction::Replace
        );
    }

    #[test]
    fn test_modified_clicks_act_on_press_only() {
        let config = ctrl_config();
        assert_eq!(
            click_action(&config, Modifiers::ctrl(), ButtonPhase::Down),
            ClickAction::Toggle
        );
        assert_eq!(
            click_action(&config, Modifiers::ctrl(), ButtonPhase::Up),
            ClickAction::Claim
        );
        assert_eq!(
            click_action(&config, Modifiers::shift(), ButtonPhase::Down),
            ClickAction::Range
        );
        assert_eq!(
            click_action(&config, Modifiers::shift(), ButtonPhase::Up),
            ClickAction::Claim
        );
    }

    #[test]
    fn test_action_wins_over_shift() {
        let both = Modifiers::ctrl().with(Modifiers::shift());
        assert_eq!(
            click_action(&ctrl_config(), both, ButtonPhase::Down),
            ClickAction::Toggle
        );
    }

    #[test]
    fn test_super_action_modifier() {
        let config = SelectionConfig::new().action_modifier(ActionModifier::Super);
        assert_eq!(
            click_action(&config, Modifiers::super_(), ButtonPhase::Down),
            ClickAction::Toggle
        );
        // ctrl is just a plain click now
        assert_eq!(
            click_action(&config, Modifiers::ctrl(), ButtonPhase::Up),
            ClickAction::Replace
        );
    }

    #[test]
    fn test_single_select_ignores_modifiers() {
        let config = ctrl_config().multi_select(false);
        for mods in [Modifiers::ctrl(), Modifiers::shift()] {
            assert_eq!(
                click_action(&config, mods, ButtonPhase::Down),
                ClickAction::Claim
            );
            assert_eq!(
                click_action(&config, mods, ButtonPhase::Up),
                ClickAction::Replace
            );
        }
    }
}
