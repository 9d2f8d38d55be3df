//! The UI renders the mounted page into the terminal.
//!
//! The body scrolls underneath a fixed header, the way a page scrolls under a sticky navigation
//! bar. The header, progress line, bottom navigation and popups are drawn over it from the
//! [`Chrome`] snapshot, so they always agree with the trackers.

use crate::app_state::{AppState, BodyLine, Focus, LineKind};
use crate::content::{Project, PROFILE};
use crate::page::Chrome;
use crate::section::{Glyph, BOTTOM_NAV_ITEMS, HEADER_ITEMS};
use crate::theme::Scheme;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, LineGauge, Paragraph, Wrap},
    Frame,
};

/// Rows taken by the fixed header.
pub const HEADER_ROWS: u16 = 3;

/// Rows taken by the mobile bottom navigation.
pub const BOTTOM_NAV_ROWS: u16 = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Palette {
    fg: Color,
    bg: Color,
    accent: Color,
    muted: Color,
    error: Color,
}

impl Palette {
    const fn for_scheme(scheme: Scheme) -> Self {
        match scheme {
            Scheme::Light => Self {
                fg: Color::Black,
                bg: Color::White,
                accent: Color::Blue,
                muted: Color::DarkGray,
                error: Color::Red,
            },
            Scheme::Dark => Self {
                fg: Color::White,
                bg: Color::Black,
                accent: Color::Cyan,
                muted: Color::Gray,
                error: Color::LightRed,
            },
        }
    }

    fn base(self) -> Style {
        Style::default().fg(self.fg).bg(self.bg)
    }

    fn line(self, kind: LineKind) -> Style {
        let base = self.base();
        match kind {
            LineKind::Heading => base.fg(self.accent).add_modifier(Modifier::BOLD),
            LineKind::Text => base,
            LineKind::Muted => base.fg(self.muted),
            LineKind::Selected => base.add_modifier(Modifier::REVERSED),
            LineKind::Error => base.fg(self.error),
        }
    }
}

#[must_use]
/// Splits the terminal into the scrolling viewport and the help line.
pub fn split(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);
    (chunks[0], chunks[1])
}

/// Renders the page and everything floating over it.
pub fn draw(f: &mut Frame, app: &AppState, system_is_dark: bool) {
    let chrome = app.page.chrome();
    let palette = Palette::for_scheme(chrome.theme.resolve(system_is_dark));
    let (viewport, help) = split(f.area());

    f.render_widget(Block::default().style(palette.base()), f.area());
    draw_body(f, app, viewport, palette);
    draw_progress(f, &chrome, viewport, palette);
    if !chrome.header_hidden {
        draw_header(f, &chrome, viewport, palette);
    }
    if chrome.mobile {
        draw_bottom_nav(f, &chrome, viewport, palette);
    }
    if chrome.scroll_to_top {
        draw_scroll_to_top(f, &chrome, viewport, palette);
    }
    if chrome.overlay_open {
        draw_menu(f, &chrome, viewport, palette);
    }
    if let Some(project) = app.gallery.dialog() {
        draw_dialog(f, project, viewport, palette);
    }
    draw_help(f, app, help, palette);
}

fn styled(line: BodyLine, palette: Palette) -> Line<'static> {
    Line::styled(line.text, palette.line(line.kind))
}

fn draw_body(f: &mut Frame, app: &AppState, area: Rect, palette: Palette) {
    let lines: Vec<Line> = app
        .body()
        .into_iter()
        .flat_map(|(_, lines)| lines)
        .skip(app.first_row())
        .take(usize::from(area.height))
        .map(|line| styled(line, palette))
        .collect();
    f.render_widget(Paragraph::new(lines).style(palette.base()), area);
}

fn draw_progress(f: &mut Frame, chrome: &Chrome, area: Rect, palette: Palette) {
    if area.height == 0 {
        return;
    }
    let row = Rect {
        height: 1,
        ..area
    };
    let gauge = LineGauge::default()
        .filled_style(Style::default().fg(palette.accent))
        .unfilled_style(Style::default().fg(palette.bg))
        .label("")
        .ratio(chrome.progress.clamp(0.0, 1.0));
    f.render_widget(gauge, row);
}

fn draw_header(f: &mut Frame, chrome: &Chrome, area: Rect, palette: Palette) {
    let rect = Rect {
        y: area.y.saturating_add(1),
        height: HEADER_ROWS.min(area.height.saturating_sub(1)),
        ..area
    };

    let mut spans = Vec::new();
    if chrome.mobile {
        let glyph = if chrome.overlay_open {
            Glyph::Close
        } else {
            Glyph::Menu
        };
        spans.push(Span::styled(
            format!("{} menu (m)", glyph.symbol()),
            Style::default().fg(palette.accent),
        ));
    } else {
        for item in &HEADER_ITEMS {
            let style = if chrome.active == Some(item.id) {
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
            } else {
                Style::default().fg(palette.fg)
            };
            spans.push(Span::styled(format!(" {} ", item.label), style));
        }
    }
    spans.push(Span::raw("  "));
    spans.push(Span::styled(
        chrome.theme.glyph().symbol(),
        Style::default().fg(palette.muted),
    ));

    let border = if chrome.scrolled {
        palette.accent
    } else {
        palette.muted
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .title(PROFILE.name);
    f.render_widget(Clear, rect);
    f.render_widget(
        Paragraph::new(Line::from(spans))
            .block(block)
            .style(palette.base()),
        rect,
    );
}

fn draw_bottom_nav(f: &mut Frame, chrome: &Chrome, area: Rect, palette: Palette) {
    let height = BOTTOM_NAV_ROWS.min(area.height);
    let rect = Rect {
        y: area.bottom().saturating_sub(height),
        height,
        ..area
    };

    let spans: Vec<Span> = BOTTOM_NAV_ITEMS
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let style = if chrome.active == Some(item.id) {
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(palette.muted)
            };
            Span::styled(
                format!(" {} {} {} ", i + 1, item.icon.symbol(), item.label),
                style,
            )
        })
        .collect();

    f.render_widget(Clear, rect);
    f.render_widget(
        Paragraph::new(Line::from(spans))
            .block(Block::default().borders(Borders::TOP))
            .style(palette.base()),
        rect,
    );
}

fn draw_scroll_to_top(f: &mut Frame, chrome: &Chrome, area: Rect, palette: Palette) {
    let label = format!(" {} top ", Glyph::ArrowUp.symbol());
    let width = u16::try_from(label.chars().count()).unwrap_or(u16::MAX);
    let lift = if chrome.mobile { BOTTOM_NAV_ROWS } else { 0 };
    if area.height <= lift || area.width < width {
        return;
    }
    let rect = Rect {
        x: area.right().saturating_sub(width),
        y: area.bottom().saturating_sub(lift + 1),
        width,
        height: 1,
    };
    f.render_widget(
        Paragraph::new(label).style(
            Style::default()
                .fg(palette.bg)
                .bg(palette.accent)
                .add_modifier(Modifier::BOLD),
        ),
        rect,
    );
}

fn draw_menu(f: &mut Frame, chrome: &Chrome, area: Rect, palette: Palette) {
    let rect = centered_rect(60, 50, area);
    let lines: Vec<Line> = HEADER_ITEMS
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let style = if chrome.active == Some(item.id) {
                palette.line(LineKind::Selected)
            } else {
                palette.line(LineKind::Text)
            };
            Line::styled(
                format!("{} {} {}", i + 1, item.icon.symbol(), item.label),
                style,
            )
        })
        .collect();

    f.render_widget(Clear, rect);
    f.render_widget(
        Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title("Menu"))
            .style(palette.base()),
        rect,
    );
}

fn draw_dialog(f: &mut Frame, project: &Project, area: Rect, palette: Palette) {
    let rect = centered_rect(80, 80, area);
    let heading = palette.line(LineKind::Heading);
    let muted = palette.line(LineKind::Muted);

    let mut lines = vec![
        Line::styled(project.category.label(), muted),
        Line::raw(""),
        Line::raw(project.description),
        Line::raw(""),
        Line::styled(format!("Tech: {}", project.tech.join(", ")), muted),
        Line::raw(""),
        Line::styled("Challenges", heading),
    ];
    lines.extend(project.challenges.iter().map(|c| Line::raw(format!("- {c}"))));
    lines.push(Line::raw(""));
    lines.push(Line::styled("Outcomes", heading));
    lines.extend(project.outcomes.iter().map(|o| Line::raw(format!("- {o}"))));

    f.render_widget(Clear, rect);
    f.render_widget(
        Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title(project.title))
            .wrap(Wrap { trim: true })
            .style(palette.base()),
        rect,
    );
}

fn draw_help(f: &mut Frame, app: &AppState, area: Rect, palette: Palette) {
    let modifier = app.page.settings().modifier.label();
    let text = if let Some(ref msg) = app.message {
        msg.clone()
    } else if app.gallery.dialog().is_some() {
        "Esc Close".to_string()
    } else {
        match app.focus {
            Focus::Page => format!(
                "↑↓ Scroll | 1-4 Go | m Menu | Tab About | g Gallery | i Contact form | \
                 Home Top | {modifier}+a/p/c Jump | {modifier}+t Theme | q Quit"
            ),
            Focus::Gallery => {
                "↑↓ Select | Enter Details | f Filter | e Show more | Esc Back".to_string()
            }
            Focus::Form(_) => "Tab Next field | Enter Send | Esc Back".to_string(),
        }
    };
    f.render_widget(
        Paragraph::new(text).style(Style::default().fg(palette.muted).bg(palette.bg)),
        area,
    );
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
