pub mod config;
pub mod element;
pub mod event;
pub mod keybinds;
pub mod layout;
pub mod policy;
pub mod selection;
pub mod selection_list;
pub mod view;

pub use config::{ActionModifier, SelectionConfig};
pub use element::{Composite, Element, EventResult, Hit, Item, List, SelectFlag, Selectable};
pub use event::{ButtonEvent, ButtonPhase, Key, KeyEvent, KeyPhase, Modifiers, MouseButton};
pub use keybinds::{KeyCombo, ParseKeyError};
pub use layout::Rect;
pub use policy::{click_action, ClickAction};
pub use selection_list::SelectionList;
pub use view::{Context, Damage, View};
