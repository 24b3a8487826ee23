//! User interface - screens, the special-character menu, and rendering.
//!
//! The session controller keeps track of which screen is showing and hands
//! a [`View`] snapshot to the display surface after every visible change.
//!
//! ## Screens
//!
//! - **Editor**: four touch buttons (dot, dash, ret, del) plus the text so far
//! - **Special menu**: five punctuation literals and a back row

pub mod render;

use crate::morse::{Literal, SessionState};

/// Screens (views) the UI can be in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Screen {
    /// Dot/dash/ret/del buttons over the entered text.
    Editor,
    /// Punctuation picker.
    SpecialMenu,
}

/// One row of the special-character menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MenuItem {
    Insert(Literal),
    Back,
}

impl MenuItem {
    pub const fn label(self) -> &'static str {
        match self {
            MenuItem::Insert(Literal::Period) => ".",
            MenuItem::Insert(Literal::Comma) => ",",
            MenuItem::Insert(Literal::Question) => "?",
            MenuItem::Insert(Literal::Exclamation) => "!",
            MenuItem::Insert(Literal::Hyphen) => "-",
            MenuItem::Back => "< Back",
        }
    }
}

/// Special-character menu rows, top to bottom.
pub const SPECIAL_MENU: [MenuItem; 6] = [
    MenuItem::Insert(Literal::Period),
    MenuItem::Insert(Literal::Comma),
    MenuItem::Insert(Literal::Question),
    MenuItem::Insert(Literal::Exclamation),
    MenuItem::Insert(Literal::Hyphen),
    MenuItem::Back,
];

/// Everything a display surface needs to draw one frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct View<'a> {
    pub screen: Screen,
    /// Pending dots and dashes.
    pub signals: &'a str,
    /// Trailing window of the committed text.
    pub text: &'a str,
}

impl<'a> View<'a> {
    pub fn new(screen: Screen, state: &'a SessionState) -> Self {
        Self {
            screen,
            signals: state.signals(),
            text: state.display_tail(),
        }
    }
}
