use super::{Element, Selectable};

/// A bare selection flag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectFlag(pub bool);

impl Selectable for SelectFlag {
    fn is_selected(&self) -> bool {
        self.0
    }

    fn select(&mut self, state: bool) {
        self.0 = state;
    }
}

/// A labelled list row.
///
/// Rows built with [`Item::selectable`] take part in selection; rows built
/// with [`Item::text`] (headers, separators) are skipped by it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    label: String,
    flag: Option<SelectFlag>,
    height: u16,
}

impl Item {
    pub fn selectable(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            flag: Some(SelectFlag(false)),
            height: 1,
        }
    }

    pub fn text(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            flag: None,
            height: 1,
        }
    }

    /// Start out selected. No effect on a text row.
    pub fn selected(mut self) -> Self {
        if let Some(flag) = self.flag.as_mut() {
            flag.0 = true;
        }
        self
    }

    /// Number of rows this item occupies.
    pub fn rows(mut self, height: u16) -> Self {
        self.height = height;
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_selectable(&self) -> bool {
        self.flag.is_some()
    }

    pub fn is_selected(&self) -> bool {
        self.flag.is_some_and(|f| f.0)
    }
}

impl Element for Item {
    fn height(&self) -> u16 {
        self.height
    }

    fn as_selectable(&self) -> Option<&dyn Selectable> {
        self.flag.as_ref().map(|f| f as &dyn Selectable)
    }

    fn as_selectable_mut(&mut self) -> Option<&mut dyn Selectable> {
        self.flag.as_mut().map(|f| f as &mut dyn Selectable)
    }
}
