//! Repaint requests and the context handed to event handlers.

use crate::layout::Rect;

/// The surface elements ask to repaint after their state changes.
pub trait View {
    /// Repaint the given area.
    fn refresh(&mut self, area: Rect);

    /// Repaint the whole surface.
    fn refresh_all(&mut self);
}

/// Per-event handler context: the active view and the bounds of the element
/// receiving the event.
pub struct Context<'a> {
    pub view: &'a mut dyn View,
    pub bounds: Rect,
}

impl<'a> Context<'a> {
    pub fn new(view: &'a mut dyn View, bounds: Rect) -> Self {
        Self { view, bounds }
    }
}

/// A view that records refresh requests until the next paint.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Damage {
    areas: Vec<Rect>,
    full: bool,
}

impl Damage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Areas requested through [`View::refresh`] since the last [`Damage::clear`].
    pub fn areas(&self) -> &[Rect] {
        &self.areas
    }

    /// True if [`View::refresh_all`] was requested.
    pub fn is_full(&self) -> bool {
        self.full
    }

    /// True if anything needs repainting.
    pub fn is_dirty(&self) -> bool {
        self.full || !self.areas.is_empty()
    }

    pub fn clear(&mut self) {
        self.areas.clear();
        self.full = false;
    }
}

impl View for Damage {
    fn refresh(&mut self, area: Rect) {
        if !area.is_empty() {
            self.areas.push(area);
        }
    }

    fn refresh_all(&mut self) {
        self.full = true;
    }
}
