//! The TUI state: one mounted page plus the interactive widgets inside its sections.
//!
//! The body is produced as plain lines per section. A section's height in pixels is its line count
//! times the configured row height, and whenever the line counts change the window gets a freshly
//! stacked document so the scroll-spy observes the new geometry.

use crate::contact::{ContactForm, Field, SubmitOutcome, Submitter};
use crate::content::{AboutTab, Gallery, EDUCATION, EXPERIENCE, PROFILE, SKILLS};
use crate::page::{ModelSlot, PageView};
use crate::section::{SectionId, BOTTOM_NAV_ITEMS, SECTIONS};
use crate::viewport::Document;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// Where key presses without a shortcut modifier go.
pub enum Focus {
    /// Scrolling and page-level keys.
    #[default]
    Page,
    /// Project cards in the gallery.
    Gallery,
    /// A contact form input.
    Form(Field),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// How a body line is styled.
pub enum LineKind {
    /// Section heading.
    Heading,
    /// Ordinary text.
    Text,
    /// Secondary text.
    Muted,
    /// The highlighted tab, card or input.
    Selected,
    /// Validation message.
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// One row of the scrolling body.
pub struct BodyLine {
    /// Styling hint.
    pub kind: LineKind,
    /// Row text.
    pub text: String,
}

impl BodyLine {
    fn new(kind: LineKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    fn blank() -> Self {
        Self::new(LineKind::Text, "")
    }
}

/// Single source of truth for the running TUI.
pub struct AppState {
    /// The mounted page and its trackers.
    pub page: PageView,
    /// Project gallery state.
    pub gallery: Gallery,
    /// Selected About tab.
    pub about_tab: AboutTab,
    /// Contact form contents.
    pub form: ContactForm,
    /// Current key focus.
    pub focus: Focus,
    /// Status line message, if any.
    pub message: Option<String>,
    row_height: u32,
    scroll_step_rows: u32,
    layout: Vec<(SectionId, u32)>,
}

impl AppState {
    #[must_use]
    /// Wraps a mounted page and lays out its body.
    pub fn new(page: PageView, row_height: u32, scroll_step_rows: u32) -> Self {
        let mut state = Self {
            page,
            gallery: Gallery::new(),
            about_tab: AboutTab::default(),
            form: ContactForm::new(),
            focus: Focus::Page,
            message: None,
            row_height: row_height.max(1),
            scroll_step_rows: scroll_step_rows.max(1),
            layout: Vec::new(),
        };
        state.relayout();
        state
    }

    #[must_use]
    /// Pixels per terminal row.
    pub fn row_height(&self) -> u32 {
        self.row_height
    }

    // --- <Layout> ---

    #[must_use]
    /// The lines making up `id`.
    pub fn section_lines(&self, id: SectionId) -> Vec<BodyLine> {
        let mut lines = vec![BodyLine::new(LineKind::Heading, id.heading()), BodyLine::blank()];
        match id {
            SectionId::Hero => self.hero_lines(&mut lines),
            SectionId::About => self.about_lines(&mut lines),
            SectionId::Projects => self.project_lines(&mut lines),
            SectionId::Contact => self.contact_lines(&mut lines),
        }
        lines.push(BodyLine::blank());
        lines
    }

    #[must_use]
    /// Every section's lines in page order.
    pub fn body(&self) -> Vec<(SectionId, Vec<BodyLine>)> {
        SECTIONS
            .iter()
            .map(|&id| (id, self.section_lines(id)))
            .collect()
    }

    /// Re-stacks the document if any section changed height. Returns whether it did.
    pub fn relayout(&mut self) -> bool {
        let heights: Vec<(SectionId, u32)> = self
            .body()
            .iter()
            .map(|(id, lines)| {
                let rows = u32::try_from(lines.len()).unwrap_or(u32::MAX);
                (*id, rows.saturating_mul(self.row_height))
            })
            .collect();
        if heights == self.layout {
            return false;
        }
        tracing::debug!(?heights, "relayout");
        self.page.window().set_document(Document::stacked(&heights));
        self.layout = heights;
        true
    }

    /// Maps a terminal body area to the window's pixel geometry.
    pub fn resize_terminal(&self, columns: u16, rows: u16) {
        self.page
            .window()
            .resize(u32::from(columns), u32::from(rows).saturating_mul(self.row_height));
    }

    #[must_use]
    /// First body row shown at the current scroll offset.
    pub fn first_row(&self) -> usize {
        usize::try_from(self.page.window().scroll_y() / self.row_height).unwrap_or(usize::MAX)
    }

    fn hero_lines(&self, lines: &mut Vec<BodyLine>) {
        lines.push(BodyLine::new(LineKind::Text, PROFILE.name));
        lines.push(BodyLine::new(LineKind::Muted, PROFILE.tagline));
        lines.push(BodyLine::blank());
        lines.push(BodyLine::new(LineKind::Text, PROFILE.intro));
        lines.push(BodyLine::blank());
        let chrome = self.page.chrome();
        let model = if chrome.model_mounted {
            format!("[3D model, scale {}]", ModelSlot::scale(chrome.mobile))
        } else {
            "[3D model paused]".to_string()
        };
        lines.push(BodyLine::new(LineKind::Muted, model));
    }

    fn about_lines(&self, lines: &mut Vec<BodyLine>) {
        let tabs = AboutTab::ALL
            .iter()
            .map(|tab| {
                if *tab == self.about_tab {
                    format!("[{}]", tab.label())
                } else {
                    format!(" {} ", tab.label())
                }
            })
            .collect::<Vec<_>>()
            .join(" ");
        lines.push(BodyLine::new(LineKind::Selected, tabs));
        lines.push(BodyLine::blank());
        match self.about_tab {
            AboutTab::Skills => {
                for group in &SKILLS {
                    lines.push(BodyLine::new(LineKind::Text, group.category));
                    lines.push(BodyLine::new(LineKind::Muted, group.items.join(" · ")));
                }
            }
            AboutTab::Experience => {
                for role in &EXPERIENCE {
                    lines.push(BodyLine::new(
                        LineKind::Text,
                        format!("{} at {}", role.title, role.organisation),
                    ));
                    lines.push(BodyLine::new(LineKind::Muted, role.period));
                    lines.push(BodyLine::new(LineKind::Muted, role.summary));
                }
            }
            AboutTab::Education => {
                for study in &EDUCATION {
                    lines.push(BodyLine::new(LineKind::Text, study.degree));
                    lines.push(BodyLine::new(
                        LineKind::Muted,
                        format!("{}, {}", study.institution, study.period),
                    ));
                }
            }
        }
    }

    fn project_lines(&self, lines: &mut Vec<BodyLine>) {
        lines.push(BodyLine::new(
            LineKind::Selected,
            format!("Filter: {}", self.gallery.filter().label()),
        ));
        lines.push(BodyLine::blank());
        let focused = self.focus == Focus::Gallery;
        for (i, project) in self.gallery.visible().iter().enumerate() {
            let kind = if focused && i == self.gallery.cursor() {
                LineKind::Selected
            } else {
                LineKind::Text
            };
            lines.push(BodyLine::new(
                kind,
                format!("{} ({})", project.title, project.category.label()),
            ));
            lines.push(BodyLine::new(LineKind::Muted, project.summary));
            lines.push(BodyLine::new(LineKind::Muted, project.tech.join(", ")));
        }
        if self.gallery.has_more() {
            lines.push(BodyLine::new(LineKind::Muted, "(e) show more"));
        }
    }

    fn contact_lines(&self, lines: &mut Vec<BodyLine>) {
        lines.push(BodyLine::new(
            LineKind::Muted,
            format!("{} · {}", PROFILE.email, PROFILE.location),
        ));
        for (label, url) in PROFILE.links {
            lines.push(BodyLine::new(LineKind::Muted, format!("{label}: {url}")));
        }
        lines.push(BodyLine::blank());
        for field in Field::ALL {
            let kind = if self.focus == Focus::Form(field) {
                LineKind::Selected
            } else {
                LineKind::Text
            };
            lines.push(BodyLine::new(
                kind,
                format!("{}: {}", field.label(), self.form.value(field)),
            ));
            if let Some(error) = self.form.error(field) {
                lines.push(BodyLine::new(LineKind::Error, format!("  {error}")));
            }
        }
    }

    // --- </Layout> ---

    // --- <Scrolling> ---

    /// Scrolls by whole rows, negative for up.
    pub fn scroll_rows(&self, rows: i64) {
        self.page
            .window()
            .scroll_by(rows.saturating_mul(i64::from(self.row_height)));
    }

    /// Scrolls by the configured arrow-key step.
    pub fn scroll_step(&self, down: bool) {
        let step = i64::from(self.scroll_step_rows);
        self.scroll_rows(if down { step } else { -step });
    }

    /// Scrolls by one viewport, keeping a row of overlap.
    pub fn scroll_page(&self, down: bool) {
        let rows = i64::from(
            (self.page.window().height() / self.row_height)
                .saturating_sub(1)
                .max(1),
        );
        self.scroll_rows(if down { rows } else { -rows });
    }

    /// Jumps to the bottom of the page.
    pub fn scroll_to_end(&self) {
        let window = self.page.window();
        window.scroll_to(window.max_scroll());
    }

    /// Follows the bottom navigation item at `index`.
    pub fn bottom_nav(&mut self, index: usize) {
        let Some(item) = BOTTOM_NAV_ITEMS.get(index) else {
            return;
        };
        if !self.page.navigate_to(item.id) {
            self.message = Some(format!("{} is not on the page", item.label));
        }
    }

    // --- </Scrolling> ---

    // --- <Widgets> ---

    /// Shows the next About tab.
    pub fn next_about_tab(&mut self) {
        self.about_tab = self.about_tab.next();
    }

    /// Moves key focus into the gallery and brings it into view.
    pub fn focus_gallery(&mut self) {
        self.focus = Focus::Gallery;
        self.page.navigate_to(SectionId::Projects);
    }

    /// Moves key focus to the first form input and brings it into view.
    pub fn focus_form(&mut self) {
        self.focus = Focus::Form(Field::Name);
        self.page.navigate_to(SectionId::Contact);
    }

    /// Returns focus to the page, blurring any focused input.
    pub fn release_focus(&mut self) {
        if let Focus::Form(field) = self.focus {
            self.form.blur(field);
        }
        self.focus = Focus::Page;
    }

    /// Blurs the focused input and focuses the next one.
    pub fn next_field(&mut self) {
        if let Focus::Form(field) = self.focus {
            self.form.blur(field);
            self.focus = Focus::Form(field.next());
        }
    }

    /// Types into the focused input.
    pub fn type_char(&mut self, c: char) {
        if let Focus::Form(field) = self.focus {
            self.form.push_char(field, c);
        }
    }

    /// Deletes from the focused input.
    pub fn backspace(&mut self) {
        if let Focus::Form(field) = self.focus {
            self.form.pop_char(field);
        }
    }

    /// Submits the form and reports the outcome on the status line.
    pub fn submit(&mut self, submitter: &dyn Submitter) -> SubmitOutcome {
        let outcome = self.form.submit(submitter);
        self.message = Some(match &outcome {
            SubmitOutcome::Invalid => "Please fix the highlighted fields".to_string(),
            SubmitOutcome::Sent => {
                self.focus = Focus::Page;
                "Message sent".to_string()
            }
            SubmitOutcome::Failed(reason) => format!("Could not send: {reason}"),
        });
        outcome
    }

    // --- </Widgets> ---
}

#[cfg(test)]
#[path = "tests/app_state.rs"]
mod tests;
