use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::search::SearchState;
use crate::ui::theme::{
    ACCENT, GLOBAL_BORDER, HEADER_TEXT, INPUT_BORDER, ROW_ALT, STATUS_ERROR, STATUS_OK,
};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap};
use ratatui::Frame;

/// Spinner animation frames.
const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub const LOADING_TEXT: &str = "Loading...";
pub const IDLE_HINT: &str = "Type a package name and press Enter.";

/// What the results body shows, checked in order: error, loading, rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultsView<'a> {
    Error(&'a str),
    Loading,
    /// Nothing to list yet, or the last search matched nothing.
    Idle,
    Rows(&'a [String]),
}

pub fn results_view(state: &SearchState) -> ResultsView<'_> {
    if let Some(error) = state.error.as_deref() {
        ResultsView::Error(error)
    } else if state.loading {
        ResultsView::Loading
    } else if state.is_idle() {
        ResultsView::Idle
    } else {
        ResultsView::Rows(&state.data)
    }
}

/// Horizontal scroll for the input line so the cursor cell stays visible.
pub fn input_scroll(cursor: usize, width: u16) -> usize {
    cursor.saturating_sub(width.saturating_sub(1) as usize)
}

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let regions = layout_regions(frame.area());

    frame.render_widget(Header::new(app.registry_label()).widget(), regions.header);
    draw_input(frame, app, regions.input);
    frame.render_widget(Clear, regions.body);
    draw_results(frame, app, regions.body);
    frame.render_widget(Footer::new().widget(regions.footer), regions.footer);
}

fn draw_input(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let block = Block::default()
        .title(Span::styled(" Search ", Style::default().fg(ACCENT)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(INPUT_BORDER));
    let inner = block.inner(area);
    let cursor = app.input().cursor();
    let offset = input_scroll(cursor, inner.width);
    let widget = Paragraph::new(Line::from(Span::styled(
        app.input().value().to_string(),
        Style::default().fg(HEADER_TEXT),
    )))
    .scroll((0, offset.min(u16::MAX as usize) as u16))
    .block(block);
    frame.render_widget(widget, area);

    if inner.width > 0 && inner.height > 0 {
        let x = inner.x + (cursor - offset) as u16;
        frame.set_cursor_position((x, inner.y));
    }
}

fn draw_results(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let state = app.search_state();
    let title = match results_view(state) {
        ResultsView::Rows(rows) => format!(" Results ({}) ", rows.len()),
        _ => " Results ".to_string(),
    };
    let block = Block::default()
        .title(Span::styled(title, Style::default().fg(HEADER_TEXT)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));

    match results_view(state) {
        ResultsView::Error(message) => {
            let line = Line::from(Span::styled(
                message.to_string(),
                Style::default().fg(STATUS_ERROR).add_modifier(Modifier::BOLD),
            ));
            // Shown verbatim, wrapped rather than clipped.
            let widget = Paragraph::new(line)
                .wrap(Wrap { trim: false })
                .block(block);
            frame.render_widget(widget, area);
        }
        ResultsView::Loading => {
            let spinner =
                SPINNER_FRAMES[(app.animation_tick() as usize) % SPINNER_FRAMES.len()];
            let line = Line::from(vec![
                Span::styled(format!("{} ", spinner), Style::default().fg(STATUS_OK)),
                Span::styled(LOADING_TEXT, Style::default().fg(HEADER_TEXT)),
            ]);
            frame.render_widget(Paragraph::new(line).block(block), area);
        }
        ResultsView::Idle => {
            let line = Line::from(Span::styled(
                IDLE_HINT,
                Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM),
            ));
            frame.render_widget(Paragraph::new(line).block(block), area);
        }
        ResultsView::Rows(rows) => {
            let items: Vec<ListItem> = rows
                .iter()
                .enumerate()
                .map(|(idx, name)| {
                    let style = if idx % 2 == 1 {
                        Style::default().fg(HEADER_TEXT).bg(ROW_ALT)
                    } else {
                        Style::default().fg(HEADER_TEXT)
                    };
                    ListItem::new(name.as_str()).style(style)
                })
                .collect();
            frame.render_widget(List::new(items).block(block), area);
        }
    }
}
