//! Selection state stored on the children of a composite.
//!
//! There is no separate selection set: an index is selected when the child at
//! that index is [`Selectable`] and reports `is_selected()`. Children without
//! the capability are skipped by every function here.
//!
//! The transition functions take the anchor ("hook") by mutable reference.
//! The anchor is the index most recently established as the pivot for range
//! selection, `None` when there is none.

use crate::element::{Composite, Hit, Selectable};

fn selectable_at(c: &dyn Composite, index: usize) -> Option<&dyn Selectable> {
    c.at(index)?.as_selectable()
}

fn selectable_at_mut(c: &mut dyn Composite, index: usize) -> Option<&mut dyn Selectable> {
    c.at_mut(index)?.as_selectable_mut()
}

/// Indices of all selected children, ascending.
pub fn get_selected(c: &dyn Composite) -> Vec<usize> {
    (0..c.len())
        .filter(|&i| selectable_at(c, i).is_some_and(|s| s.is_selected()))
        .collect()
}

/// Number of selected children.
pub fn count_selected(c: &dyn Composite) -> usize {
    (0..c.len())
        .filter(|&i| selectable_at(c, i).is_some_and(|s| s.is_selected()))
        .count()
}

/// Unselect every child.
pub fn select_none(c: &mut dyn Composite) {
    for i in 0..c.len() {
        if let Some(s) = selectable_at_mut(c, i) {
            s.select(false);
        }
    }
}

/// Select every child.
pub fn select_all(c: &mut dyn Composite) {
    for i in 0..c.len() {
        if let Some(s) = selectable_at_mut(c, i) {
            s.select(true);
        }
    }
}

/// Replace the selection with `indices`. Out-of-range indices are dropped.
pub fn set_selected(c: &mut dyn Composite, indices: &[usize]) {
    select_none(c);
    for &i in indices {
        if let Some(s) = selectable_at_mut(c, i) {
            s.select(true);
        }
    }
}

/// Plain click: the hit child becomes the only selected child and the anchor.
///
/// Returns false, touching nothing, if the hit child is not selectable.
pub fn select(c: &mut dyn Composite, hit: Hit, hook: &mut Option<usize>) -> bool {
    if selectable_at(c, hit.index).is_none() {
        return false;
    }
    select_none(c);
    if let Some(s) = selectable_at_mut(c, hit.index) {
        s.select(true);
    }
    *hook = Some(hit.index);
    true
}

/// Action click: toggle the hit child, leaving the others alone.
///
/// A child that becomes selected becomes the anchor. Once nothing is selected
/// the anchor is cleared.
pub fn multi_select(c: &mut dyn Composite, hit: Hit, hook: &mut Option<usize>) -> bool {
    let Some(s) = selectable_at_mut(c, hit.index) else {
        return false;
    };
    let state = !s.is_selected();
    s.select(state);

    if state {
        *hook = Some(hit.index);
    }
    if count_selected(c) == 0 {
        *hook = None;
    }
    true
}

/// Shift click: select exactly the children between the anchor and the hit
/// child, both inclusive.
///
/// A missing anchor counts as index 0 and is stored back as the anchor.
pub fn shift_select(c: &mut dyn Composite, hit: Hit, hook: &mut Option<usize>) -> bool {
    if selectable_at(c, hit.index).is_none() {
        return false;
    }
    let anchor = hook.unwrap_or(0);
    *hook = Some(anchor);

    let from = anchor.min(hit.index);
    // A stale anchor may point past the end.
    let to = anchor.max(hit.index).min(c.len() - 1);
    select_none(c);
    for i in from..=to {
        if let Some(s) = selectable_at_mut(c, i) {
            s.select(true);
        }
    }
    true
}
