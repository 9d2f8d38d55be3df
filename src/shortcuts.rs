//! Keyboard shortcuts for section navigation and theme cycling.
//!
//! With the designated modifier held, `a`, `p` and `c` jump to About, Projects and Contact and
//! `t` cycles the theme. A recognised press has its default handling prevented exactly once;
//! anything else passes through untouched.

use crate::error::{Error, Result};
use crate::listener::Subscription;
use crate::nav::Navigator;
use crate::section::SectionId;
use crate::theme::ThemeStore;
use crate::viewport::Window;
use std::str::FromStr;
use std::sync::Arc;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// Modifier keys held during a key press.
pub struct Modifiers {
    /// Alt / Option.
    pub alt: bool,
    /// Control.
    pub ctrl: bool,
    /// Shift.
    pub shift: bool,
    /// Super / Command.
    pub meta: bool,
}

impl Modifiers {
    /// No modifiers held.
    pub const NONE: Self = Self {
        alt: false,
        ctrl: false,
        shift: false,
        meta: false,
    };

    /// Only Alt held.
    pub const ALT: Self = Self {
        alt: true,
        ..Self::NONE
    };

    /// Only Control held.
    pub const CTRL: Self = Self {
        ctrl: true,
        ..Self::NONE
    };

    #[must_use]
    /// Whether `modifier` is among the held keys.
    pub const fn contains(self, modifier: Modifier) -> bool {
        match modifier {
            Modifier::Alt => self.alt,
            Modifier::Ctrl => self.ctrl,
            Modifier::Meta => self.meta,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// The modifier that activates shortcuts.
pub enum Modifier {
    /// Alt / Option.
    #[default]
    Alt,
    /// Control.
    Ctrl,
    /// Super / Command.
    Meta,
}

impl Modifier {
    #[must_use]
    /// Label used in help text.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Alt => "Alt",
            Self::Ctrl => "Ctrl",
            Self::Meta => "Meta",
        }
    }
}

impl FromStr for Modifier {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "alt" | "option" => Ok(Self::Alt),
            "ctrl" | "control" => Ok(Self::Ctrl),
            "meta" | "super" | "cmd" => Ok(Self::Meta),
            _ => Err(Error::unknown("modifier", s)),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// A key press travelling through the window's key listeners.
pub struct KeyPress {
    /// The character produced.
    pub key: char,
    /// Modifiers held.
    pub modifiers: Modifiers,
    prevented: u32,
}

impl KeyPress {
    #[must_use]
    /// A press of `key` with `modifiers` held.
    pub const fn new(key: char, modifiers: Modifiers) -> Self {
        Self {
            key,
            modifiers,
            prevented: 0,
        }
    }

    /// Stops the host from running its own handling for this press.
    pub fn prevent_default(&mut self) {
        self.prevented += 1;
    }

    #[must_use]
    /// Whether any listener prevented default handling.
    pub const fn default_prevented(&self) -> bool {
        self.prevented > 0
    }

    #[must_use]
    /// How many times default handling was prevented.
    pub const fn prevent_count(&self) -> u32 {
        self.prevented
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Action bound to a shortcut.
pub enum Shortcut {
    /// Scroll to a section.
    Navigate(SectionId),
    /// Advance the theme preference.
    CycleTheme,
}

/// Keys recognised with the shortcut modifier held.
pub const BINDINGS: [(char, Shortcut); 4] = [
    ('a', Shortcut::Navigate(SectionId::About)),
    ('p', Shortcut::Navigate(SectionId::Projects)),
    ('c', Shortcut::Navigate(SectionId::Contact)),
    ('t', Shortcut::CycleTheme),
];

#[must_use]
/// The shortcut `press` triggers when `modifier` is the shortcut modifier.
pub fn shortcut_for(press: &KeyPress, modifier: Modifier) -> Option<Shortcut> {
    if !press.modifiers.contains(modifier) {
        return None;
    }
    BINDINGS
        .iter()
        .find(|(key, _)| *key == press.key)
        .map(|(_, shortcut)| *shortcut)
}

/// Routes shortcut presses while mounted.
pub struct ShortcutRouter {
    modifier: Modifier,
    _listener: Subscription,
}

impl ShortcutRouter {
    #[must_use]
    /// Starts intercepting key presses on `window`.
    pub fn mount(
        window: &Window,
        navigator: Navigator,
        theme: Arc<ThemeStore>,
        modifier: Modifier,
    ) -> Self {
        let listener = window.on_key(move |press: &mut KeyPress| {
            let Some(shortcut) = shortcut_for(press, modifier) else {
                return;
            };
            press.prevent_default();
            tracing::debug!(?shortcut, "shortcut triggered");
            match shortcut {
                Shortcut::Navigate(id) => {
                    navigator.navigate_to(id);
                }
                Shortcut::CycleTheme => {
                    theme.cycle();
                }
            }
        });

        Self {
            modifier,
            _listener: listener,
        }
    }

    #[must_use]
    /// The modifier this router listens for.
    pub fn modifier(&self) -> Modifier {
        self.modifier
    }
}

#[cfg(test)]
#[path = "tests/shortcuts.rs"]
mod tests;
