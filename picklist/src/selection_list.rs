//! Mouse and keyboard selection over a composite element.

use std::fmt;

use crate::config::SelectionConfig;
use crate::element::{Element, EventResult};
use crate::event::{ButtonEvent, KeyEvent};
use crate::policy::{click_action, ClickAction};
use crate::selection;
use crate::view::Context;

type SelectCallback = Box<dyn FnMut(Option<usize>)>;

/// Wraps an element and turns clicks on its children into a selection.
///
/// The subject keeps first refusal on every event; the selection logic runs
/// afterwards if the subject exposes the [`Composite`](crate::Composite) capability. Selection
/// state lives on the children themselves. The list only owns the anchor
/// ("hook"), the pivot for shift+click range selection.
///
/// The list does not expose its subject's composite capability, so
/// wrapping one `SelectionList` in another leaves the outer one without a
/// composite: the inner list alone runs the selection.
pub struct SelectionList<E> {
    subject: E,
    hook: Option<usize>,
    config: SelectionConfig,
    on_select: Option<SelectCallback>,
}

impl<E: Element> SelectionList<E> {
    pub fn new(subject: E) -> Self {
        Self::with_config(subject, SelectionConfig::default())
    }

    pub fn with_config(subject: E, config: SelectionConfig) -> Self {
        Self {
            subject,
            hook: None,
            config,
            on_select: None,
        }
    }

    /// Register the selection-changed callback, replacing any previous one.
    /// It receives the anchor after the change.
    pub fn on_select(mut self, callback: impl FnMut(Option<usize>) + 'static) -> Self {
        self.on_select = Some(Box::new(callback));
        self
    }

    pub fn set_on_select(&mut self, callback: impl FnMut(Option<usize>) + 'static) {
        self.on_select = Some(Box::new(callback));
    }

    pub fn config(&self) -> &SelectionConfig {
        &self.config
    }

    pub fn subject(&self) -> &E {
        &self.subject
    }

    pub fn subject_mut(&mut self) -> &mut E {
        &mut self.subject
    }

    pub fn into_subject(self) -> E {
        self.subject
    }

    /// The current anchor.
    pub fn get_hook(&self) -> Option<usize> {
        self.hook
    }

    /// Selected child indices, ascending. Empty if the subject is not a composite.
    pub fn get_selection(&self) -> Vec<usize> {
        self.subject
            .as_composite()
            .map(selection::get_selected)
            .unwrap_or_default()
    }

    /// Replace the selection. Indices outside the composite are ignored.
    /// Does not move the anchor or notify.
    pub fn set_selection(&mut self, indices: &[usize]) {
        if let Some(c) = self.subject.as_composite_mut() {
            selection::set_selected(c, indices);
        }
    }

    pub fn count_selected(&self) -> usize {
        self.subject
            .as_composite()
            .map(selection::count_selected)
            .unwrap_or(0)
    }

    /// Select every child and notify. The anchor is kept.
    pub fn select_all(&mut self) {
        if let Some(c) = self.subject.as_composite_mut() {
            selection::select_all(c);
            self.notify();
        }
    }

    /// Clear the selection and the anchor, then notify.
    pub fn select_none(&mut self) {
        if let Some(c) = self.subject.as_composite_mut() {
            self.hook = None;
            selection::select_none(c);
            self.notify();
        }
    }

    fn notify(&mut self) {
        let hook = self.hook;
        if let Some(callback) = self.on_select.as_mut() {
            callback(hook);
        }
    }
}

impl<E: Element> Element for SelectionList<E> {
    fn click(&mut self, cx: &mut Context<'_>, btn: &ButtonEvent) -> EventResult {
        let base = self.subject.click(cx, btn);

        let Some(c) = self.subject.as_composite_mut() else {
            return base;
        };
        let Some(hit) = c.hit_element(cx.bounds, btn.x, btn.y) else {
            log::trace!("[selection_list] click at ({}, {}) hit nothing", btn.x, btn.y);
            return base;
        };

        let action = click_action(&self.config, btn.modifiers, btn.phase);
        let (handled, changed) = match action {
            ClickAction::Toggle => {
                let changed = selection::multi_select(c, hit, &mut self.hook);
                (changed, changed)
            }
            ClickAction::Range => {
                let changed = selection::shift_select(c, hit, &mut self.hook);
                (changed, changed)
            }
            ClickAction::Replace => (true, selection::select(c, hit, &mut self.hook)),
            ClickAction::Claim => (true, false),
        };
        log::debug!(
            "[selection_list] {:?} {:?} on child {} changed={} hook={:?}",
            btn.phase,
            action,
            hit.index,
            changed,
            self.hook
        );

        if changed && self.hook.is_some() {
            cx.view.refresh(cx.bounds);
            self.notify();
        }

        if handled {
            EventResult::Consumed
        } else {
            base
        }
    }

    fn key(&mut self, cx: &mut Context<'_>, key: &KeyEvent) -> EventResult {
        let base = self.subject.key(cx, key);

        if !self.config.multi_select || !self.config.select_all.matches_event(key) {
            return base;
        }
        let Some(c) = self.subject.as_composite_mut() else {
            return base;
        };
        selection::select_all(c);
        log::debug!("[selection_list] select all via {}", self.config.select_all);
        cx.view.refresh_all();
        EventResult::Consumed
    }

    fn height(&self) -> u16 {
        self.subject.height()
    }
}

impl<E: fmt::Debug> fmt::Debug for SelectionList<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectionList")
            .field("subject", &self.subject)
            .field("hook", &self.hook)
            .field("config", &self.config)
            .field("on_select", &self.on_select.is_some())
            .finish()
    }
}
