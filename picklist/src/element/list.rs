use crate::layout::Rect;

use super::{Composite, Element, Hit};

/// A vertical stack of children, laid out top to bottom from the top of its
/// bounds. Each child occupies [`Element::height`] rows; children past the
/// bottom edge are not hit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct List<E> {
    children: Vec<E>,
}

impl<E: Element> List<E> {
    pub fn new() -> Self {
        Self {
            children: Vec::new(),
        }
    }

    pub fn with_children(children: Vec<E>) -> Self {
        Self { children }
    }

    pub fn child(mut self, child: E) -> Self {
        self.children.push(child);
        self
    }

    pub fn push(&mut self, child: E) {
        self.children.push(child);
    }

    pub fn children(&self) -> &[E] {
        &self.children
    }

    pub fn get(&self, index: usize) -> Option<&E> {
        self.children.get(index)
    }

    /// Row band of each child within `bounds`, clipped to it.
    pub fn child_bounds(&self, bounds: Rect) -> impl Iterator<Item = (usize, Rect)> + '_ {
        let mut top = bounds.y;
        self.children
            .iter()
            .enumerate()
            .map_while(move |(index, child)| {
                if top >= bounds.bottom() {
                    return None;
                }
                let band = bounds.band(top, child.height());
                top = top.saturating_add(child.height());
                Some((index, band))
            })
    }
}

impl<E: Element> Composite for List<E> {
    fn len(&self) -> usize {
        self.children.len()
    }

    fn at(&self, index: usize) -> Option<&dyn Element> {
        self.children.get(index).map(|c| c as &dyn Element)
    }

    fn at_mut(&mut self, index: usize) -> Option<&mut dyn Element> {
        self.children.get_mut(index).map(|c| c as &mut dyn Element)
    }

    fn hit_element(&self, bounds: Rect, x: u16, y: u16) -> Option<Hit> {
        if !bounds.contains(x, y) {
            return None;
        }
        self.child_bounds(bounds)
            .find(|(_, band)| band.contains(x, y))
            .map(|(index, _)| Hit { index })
    }
}

impl<E: Element> Element for List<E> {
    fn height(&self) -> u16 {
        self.children
            .iter()
            .fold(0u16, |acc, c| acc.saturating_add(c.height()))
    }

    fn as_composite(&self) -> Option<&dyn Composite> {
        Some(self)
    }

    fn as_composite_mut(&mut self) -> Option<&mut dyn Composite> {
        Some(self)
    }
}
