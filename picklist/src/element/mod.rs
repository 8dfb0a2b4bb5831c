//! Element capabilities used by selection.
//!
//! Elements advertise what they can do through capability queries
//! (`as_selectable`, `as_composite`) rather than a fixed type hierarchy.
//! A `None` answer means the capability is absent and callers skip the
//! element.

mod item;
mod list;

pub use item::{Item, SelectFlag};
pub use list::List;

use crate::event::{ButtonEvent, KeyEvent};
use crate::layout::Rect;
use crate::view::Context;

/// Result of handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was ignored, try other handlers.
    Ignored,
    /// Event was consumed, stop propagation.
    Consumed,
}

/// A node in the element tree.
///
/// All methods have default implementations, so elements only implement the
/// events and capabilities they care about.
pub trait Element {
    /// Handle a mouse button press or release inside `cx.bounds`.
    fn click(&mut self, _cx: &mut Context<'_>, _btn: &ButtonEvent) -> EventResult {
        EventResult::Ignored
    }

    /// Handle a key event while focused.
    fn key(&mut self, _cx: &mut Context<'_>, _key: &KeyEvent) -> EventResult {
        EventResult::Ignored
    }

    /// Rows occupied when stacked in a [`List`].
    fn height(&self) -> u16 {
        1
    }

    fn as_selectable(&self) -> Option<&dyn Selectable> {
        None
    }

    fn as_selectable_mut(&mut self) -> Option<&mut dyn Selectable> {
        None
    }

    fn as_composite(&self) -> Option<&dyn Composite> {
        None
    }

    fn as_composite_mut(&mut self) -> Option<&mut dyn Composite> {
        None
    }
}

/// Something carrying a selected/unselected flag.
pub trait Selectable {
    fn is_selected(&self) -> bool;
    fn select(&mut self, state: bool);
}

/// Result of hit-testing a composite: the index of the child under the point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hit {
    pub index: usize,
}

/// An ordered container of child elements.
pub trait Composite {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn at(&self, index: usize) -> Option<&dyn Element>;

    fn at_mut(&mut self, index: usize) -> Option<&mut dyn Element>;

    /// Find the child at `(x, y)` when this composite is laid out in `bounds`.
    fn hit_element(&self, bounds: Rect, x: u16, y: u16) -> Option<Hit>;
}
