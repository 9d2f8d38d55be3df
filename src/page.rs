//! The mounted page view.
//!
//! `PageView` is the single place that registers listeners on the host window for one page: the
//! scroll-spy, the scroll tracker, the shortcut router, the resize listener and the theme
//! observer. Everything it registers is held as a guard field, so dropping the view releases all of
//! it synchronously. Renderers read a [`Chrome`] snapshot and never mutate tracker state.

use crate::config::Config;
use crate::listener::Subscription;
use crate::nav::Navigator;
use crate::scroll::{self, ChromeThresholds, Direction, ScrollTracker};
use crate::section::{SectionId, SECTIONS};
use crate::shortcuts::{Modifier, ShortcutRouter};
use crate::spy::{TieBreak, VisibilityTracker};
use crate::theme::{ThemePreference, ThemeStore};
use crate::viewport::{Band, ResizeEvent, Window};
use std::cell::Cell;
use std::rc::Rc;
use std::sync::{Arc, Mutex, PoisonError};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Tunables for a mounted page.
pub struct PageSettings {
    /// Header height the scroll-spy band starts below.
    pub spy_offset: u32,
    /// Chrome thresholds.
    pub thresholds: ChromeThresholds,
    /// Widths below this use the mobile layout.
    pub mobile_breakpoint: u32,
    /// Shortcut modifier.
    pub modifier: Modifier,
    /// Intersection tie-break.
    pub tie_break: TieBreak,
}

impl Default for PageSettings {
    fn default() -> Self {
        Self {
            spy_offset: 80,
            thresholds: ChromeThresholds::default(),
            mobile_breakpoint: 768,
            modifier: Modifier::Alt,
            tie_break: TieBreak::LatestEntry,
        }
    }
}

impl From<&Config> for PageSettings {
    fn from(cfg: &Config) -> Self {
        Self {
            spy_offset: cfg.spy_offset,
            thresholds: cfg.thresholds(),
            mobile_breakpoint: cfg.mobile_breakpoint,
            modifier: cfg.modifier(),
            tie_break: cfg.tie_break(),
        }
    }
}

/// Decides when the hero's 3D model is mounted.
///
/// The renderer itself is external; the slot only tracks whether the hero intersects the
/// viewport, which is when the model should be alive.
pub struct ModelSlot {
    hero_visible: Rc<Cell<bool>>,
    _observation: Subscription,
}

impl ModelSlot {
    #[must_use]
    /// Starts watching the hero against the full viewport.
    pub fn mount(window: &Window) -> Self {
        let hero_visible = Rc::new(Cell::new(false));
        let visible = Rc::clone(&hero_visible);
        let observation =
            window.observe_intersections(Band::default(), &[SectionId::Hero], move |entries| {
                for entry in entries {
                    visible.set(entry.is_intersecting);
                }
            });
        Self {
            hero_visible,
            _observation: observation,
        }
    }

    #[must_use]
    /// Whether the model should currently be mounted.
    pub fn is_mounted(&self) -> bool {
        self.hero_visible.get()
    }

    #[must_use]
    /// Model scale for the layout: smaller on the stacked mobile hero.
    pub fn scale(mobile: bool) -> f32 {
        if mobile {
            0.5
        } else {
            0.7
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
/// Everything the header, bottom nav and floating buttons need to draw themselves.
pub struct Chrome {
    /// Section highlighted in the navigation.
    pub active: Option<SectionId>,
    /// Latest scroll direction.
    pub direction: Direction,
    /// Current scroll offset.
    pub offset: u32,
    /// Header drawn with its scrolled backdrop.
    pub scrolled: bool,
    /// Header slid out of view.
    pub header_hidden: bool,
    /// Overlay menu open.
    pub overlay_open: bool,
    /// Narrow layout with bottom nav.
    pub mobile: bool,
    /// Fraction of the page scrolled.
    pub progress: f64,
    /// Scroll-to-top button shown.
    pub scroll_to_top: bool,
    /// Theme preference as last notified.
    pub theme: ThemePreference,
    /// Hero model mounted.
    pub model_mounted: bool,
}

/// A page mounted in a window.
pub struct PageView {
    window: Rc<Window>,
    navigator: Navigator,
    theme: Arc<ThemeStore>,
    settings: PageSettings,
    spy: VisibilityTracker,
    scroll: ScrollTracker,
    model: ModelSlot,
    mobile: Rc<Cell<bool>>,
    theme_seen: Arc<Mutex<ThemePreference>>,
    _shortcuts: ShortcutRouter,
    _resize: Subscription,
    _theme: Subscription,
}

impl PageView {
    #[must_use]
    /// Mounts the page: registers every tracker and listener on `window`.
    pub fn mount(window: &Rc<Window>, theme: Arc<ThemeStore>, settings: PageSettings) -> Self {
        let navigator = Navigator::for_window(window);
        let spy = VisibilityTracker::mount(
            window,
            &SECTIONS,
            settings.spy_offset,
            settings.tie_break,
        );
        let scroll = ScrollTracker::mount(window);
        let model = ModelSlot::mount(window);
        let shortcuts = ShortcutRouter::mount(
            window,
            navigator.clone(),
            Arc::clone(&theme),
            settings.modifier,
        );

        let breakpoint = settings.mobile_breakpoint;
        let mobile = Rc::new(Cell::new(window.width() < breakpoint));
        let layout = Rc::clone(&mobile);
        let overlay = navigator.clone();
        let resize = window.on_resize(move |event: &mut ResizeEvent| {
            let now_mobile = event.width < breakpoint;
            if layout.get() != now_mobile {
                tracing::debug!(mobile = now_mobile, width = event.width, "layout changed");
            }
            layout.set(now_mobile);
            if !now_mobile {
                overlay.close_overlay();
            }
        });

        let theme_seen = Arc::new(Mutex::new(theme.get()));
        let seen = Arc::clone(&theme_seen);
        let theme_sub = theme.subscribe(move |value| {
            *seen.lock().unwrap_or_else(PoisonError::into_inner) = value;
        });

        tracing::debug!(
            width = window.width(),
            height = window.height(),
            listeners = window.listener_count(),
            "page mounted"
        );

        Self {
            window: Rc::clone(window),
            navigator,
            theme,
            settings,
            spy,
            scroll,
            model,
            mobile,
            theme_seen,
            _shortcuts: shortcuts,
            _resize: resize,
            _theme: theme_sub,
        }
    }

    #[must_use]
    /// The host window.
    pub fn window(&self) -> &Rc<Window> {
        &self.window
    }

    #[must_use]
    /// The page's navigator (shares the overlay flag with the shortcut router).
    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    #[must_use]
    /// The shared theme store.
    pub fn theme(&self) -> &Arc<ThemeStore> {
        &self.theme
    }

    #[must_use]
    /// Settings the page was mounted with.
    pub fn settings(&self) -> &PageSettings {
        &self.settings
    }

    #[must_use]
    /// Whether the mobile layout is active.
    pub fn is_mobile(&self) -> bool {
        self.mobile.get()
    }

    /// Scrolls to `id`; see [`Navigator::navigate_to`].
    pub fn navigate_to(&self, id: SectionId) -> bool {
        self.navigator.navigate_to(id)
    }

    /// Toggles the overlay menu. Only the mobile layout has one; returns the new state.
    pub fn toggle_menu(&self) -> bool {
        if !self.is_mobile() {
            return false;
        }
        self.navigator.toggle_overlay()
    }

    /// Smooth-scrolls to the top of the page.
    pub fn scroll_to_top(&self) {
        self.navigator.scroll_to_top();
    }

    /// Cycles the theme preference.
    pub fn cycle_theme(&self) -> ThemePreference {
        self.theme.cycle()
    }

    /// Moves the scroll-spy band to a new header offset.
    pub fn set_spy_offset(&mut self, offset: u32) {
        self.settings.spy_offset = offset;
        self.spy.retarget(&self.window, &SECTIONS, offset);
    }

    #[must_use]
    /// Snapshot of the derived chrome state.
    pub fn chrome(&self) -> Chrome {
        let sample = self.scroll.sample();
        let thresholds = &self.settings.thresholds;
        let overlay_open = self.navigator.overlay_open();
        Chrome {
            active: self.spy.active(),
            direction: sample.direction,
            offset: sample.offset,
            scrolled: sample.is_scrolled(thresholds),
            header_hidden: sample.header_hidden(thresholds, overlay_open),
            overlay_open,
            mobile: self.is_mobile(),
            progress: scroll::progress(
                sample.offset,
                self.window.document_height(),
                self.window.height(),
            ),
            scroll_to_top: sample.shows_scroll_to_top(thresholds),
            theme: *self
                .theme_seen
                .lock()
                .unwrap_or_else(PoisonError::into_inner),
            model_mounted: self.model.is_mounted(),
        }
    }
}

impl Drop for PageView {
    fn drop(&mut self) {
        tracing::debug!("page unmounted");
    }
}

#[cfg(test)]
#[path = "tests/page.rs"]
mod tests;
