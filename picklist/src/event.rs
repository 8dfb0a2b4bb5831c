/// Simplified key representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Backspace,
    Delete,
    Tab,
    BackTab,
    Escape,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
    Insert,
    F(u8),
    /// A key crossterm reports that has no equivalent here (media keys, lone modifiers).
    Unknown,
}

/// Key and button modifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    /// Command on macOS, the Windows/logo key elsewhere.
    pub super_: bool,
}

impl Modifiers {
    pub const NONE: Self = Self {
        shift: false,
        ctrl: false,
        alt: false,
        super_: false,
    };

    pub fn shift() -> Self {
        Self {
            shift: true,
            ..Default::default()
        }
    }

    pub fn ctrl() -> Self {
        Self {
            ctrl: true,
            ..Default::default()
        }
    }

    pub fn alt() -> Self {
        Self {
            alt: true,
            ..Default::default()
        }
    }

    pub fn super_() -> Self {
        Self {
            super_: true,
            ..Default::default()
        }
    }

    /// True if every modifier set in `required` is also set in `self`.
    pub fn contains(&self, required: Modifiers) -> bool {
        (!required.shift || self.shift)
            && (!required.ctrl || self.ctrl)
            && (!required.alt || self.alt)
            && (!required.super_ || self.super_)
    }

    /// Union of both modifier sets.
    pub fn with(self, other: Modifiers) -> Self {
        Self {
            shift: self.shift || other.shift,
            ctrl: self.ctrl || other.ctrl,
            alt: self.alt || other.alt,
            super_: self.super_ || other.super_,
        }
    }
}

/// Mouse button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// Whether a mouse button went down or came back up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonPhase {
    Down,
    Up,
}

/// A mouse button press or release at a terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonEvent {
    pub x: u16,
    pub y: u16,
    pub button: MouseButton,
    pub phase: ButtonPhase,
    pub modifiers: Modifiers,
}

impl ButtonEvent {
    pub fn down(x: u16, y: u16, modifiers: Modifiers) -> Self {
        Self {
            x,
            y,
            button: MouseButton::Left,
            phase: ButtonPhase::Down,
            modifiers,
        }
    }

    pub fn up(x: u16, y: u16, modifiers: Modifiers) -> Self {
        Self {
            x,
            y,
            button: MouseButton::Left,
            phase: ButtonPhase::Up,
            modifiers,
        }
    }

    pub fn is_down(&self) -> bool {
        self.phase == ButtonPhase::Down
    }

    /// Convert a crossterm mouse event.
    /// Returns None for moves, drags and scroll wheel events.
    pub fn from_crossterm(event: &crossterm::event::MouseEvent) -> Option<Self> {
        use crossterm::event::MouseEventKind;
        let (button, phase) = match event.kind {
            MouseEventKind::Down(button) => (button, ButtonPhase::Down),
            MouseEventKind::Up(button) => (button, ButtonPhase::Up),
            _ => return None,
        };
        Some(Self {
            x: event.column,
            y: event.row,
            button: button.into(),
            phase,
            modifiers: event.modifiers.into(),
        })
    }
}

/// Press, auto-repeat or release of a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyPhase {
    Press,
    Repeat,
    Release,
}

/// A key event delivered to the focused element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: Key,
    pub phase: KeyPhase,
    pub modifiers: Modifiers,
}

impl KeyEvent {
    pub fn press(key: Key, modifiers: Modifiers) -> Self {
        Self {
            key,
            phase: KeyPhase::Press,
            modifiers,
        }
    }

    pub fn repeat(key: Key, modifiers: Modifiers) -> Self {
        Self {
            key,
            phase: KeyPhase::Repeat,
            modifiers,
        }
    }

    pub fn release(key: Key, modifiers: Modifiers) -> Self {
        Self {
            key,
            phase: KeyPhase::Release,
            modifiers,
        }
    }
}

// Conversion from crossterm types
impl From<crossterm::event::KeyCode> for Key {
    fn from(code: crossterm::event::KeyCode) -> Self {
        use crossterm::event::KeyCode;
        match code {
            KeyCode::Char(c) => Key::Char(c),
            KeyCode::Enter => Key::Enter,
            KeyCode::Backspace => Key::Backspace,
            KeyCode::Delete => Key::Delete,
            KeyCode::Tab => Key::Tab,
            KeyCode::BackTab => Key::BackTab,
            KeyCode::Esc => Key::Escape,
            KeyCode::Up => Key::Up,
            KeyCode::Down => Key::Down,
            KeyCode::Left => Key::Left,
            KeyCode::Right => Key::Right,
            KeyCode::Home => Key::Home,
            KeyCode::End => Key::End,
            KeyCode::PageUp => Key::PageUp,
            KeyCode::PageDown => Key::PageDown,
            KeyCode::Insert => Key::Insert,
            KeyCode::F(n) => Key::F(n),
            _ => Key::Unknown,
        }
    }
}

impl From<crossterm::event::KeyModifiers> for Modifiers {
    fn from(mods: crossterm::event::KeyModifiers) -> Self {
        use crossterm::event::KeyModifiers;
        Self {
            shift: mods.contains(KeyModifiers::SHIFT),
            ctrl: mods.contains(KeyModifiers::CONTROL),
            alt: mods.contains(KeyModifiers::ALT),
            super_: mods.contains(KeyModifiers::SUPER),
        }
    }
}

impl From<crossterm::event::MouseButton> for MouseButton {
    fn from(btn: crossterm::event::MouseButton) -> Self {
        use crossterm::event::MouseButton as CtBtn;
        match btn {
            CtBtn::Left => MouseButton::Left,
            CtBtn::Right => MouseButton::Right,
            CtBtn::Middle => MouseButton::Middle,
        }
    }
}

impl From<crossterm::event::KeyEventKind> for KeyPhase {
    fn from(kind: crossterm::event::KeyEventKind) -> Self {
        use crossterm::event::KeyEventKind;
        match kind {
            KeyEventKind::Press => KeyPhase::Press,
            KeyEventKind::Repeat => KeyPhase::Repeat,
            KeyEventKind::Release => KeyPhase::Release,
        }
    }
}

impl From<crossterm::event::KeyEvent> for KeyEvent {
    fn from(event: crossterm::event::KeyEvent) -> Self {
        Self {
            key: event.code.into(),
            phase: event.kind.into(),
            modifiers: event.modifiers.into(),
        }
    }
}
