use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::app::{App, InputMode};
use crate::notify::AlertKind;
use crate::tree::{RowKind, ScalarKind};

// ===============================
// Top-level draw
// ===============================
pub fn draw(f: &mut Frame, app: &mut App) {
    // Fill the page with the theme background first
    f.render_widget(
        Block::default().style(Style::default().bg(app.theme().background).fg(app.theme().text)),
        f.area(),
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // header
            Constraint::Min(0),    // body
            Constraint::Length(1), // footer
        ])
        .split(f.area());

    header(f, chunks[0], app);
    body(f, chunks[1], app);
    footer(f, chunks[2], app);

    // Overlays render last
    if matches!(app.input_mode(), InputMode::History | InputMode::ConfirmClear) {
        draw_history_overlay(f, app);
    }
    if app.input_mode() == InputMode::ConfirmClear {
        draw_confirm_modal(f, app);
    }
    if app.modal_error().is_some() {
        draw_error_modal(f, app);
    }
}

// ===============================
// Header
// ===============================
fn header(f: &mut Frame, area: Rect, app: &App) {
    let titles = ["Editor", "Tree"];
    let selected = app.pane();

    let mut spans = Vec::new();
    for (i, title) in titles.iter().enumerate() {
        if i == 0 {
            spans.push(Span::raw("┌─"));
        } else {
            spans.push(Span::raw("┬─"));
        }
        if i == selected {
            spans.push(Span::styled(
                *title,
                Style::default()
                    .fg(app.theme().focus_border)
                    .add_modifier(Modifier::BOLD),
            ));
        } else {
            spans.push(Span::raw(*title));
        }
        spans.push(Span::raw("─"));
    }
    spans.push(Span::raw("┐"));
    spans.push(Span::styled(
        format!("  jsonscope · {} theme", app.theme_kind()),
        Style::default().fg(app.theme().text_dim),
    ));

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

// ===============================
// Body
// ===============================
fn body(f: &mut Frame, area: Rect, app: &mut App) {
    // Show warning if terminal is too small to be usable
    const MIN_WIDTH: u16 = 60;
    const MIN_HEIGHT: u16 = 12;

    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        let warning_text = format!(
            "Terminal too small!\n\nMinimum size: {}×{}\nCurrent size: {}×{}",
            MIN_WIDTH, MIN_HEIGHT, area.width, area.height
        );
        let warning = Paragraph::new(warning_text)
            .alignment(ratatui::layout::Alignment::Center)
            .style(
                Style::default()
                    .fg(app.theme().alert_error)
                    .add_modifier(Modifier::BOLD),
            )
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(app.theme().alert_error)),
            );
        f.render_widget(warning, area);
        return;
    }

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(6, 10), Constraint::Ratio(4, 10)])
        .split(area);

    render_editor_pane(f, cols[0], app);
    render_tree_pane(f, cols[1], app);
}

fn render_editor_pane(f: &mut Frame, area: Rect, app: &mut App) {
    let focused = app.pane() == 0;
    let focus_color = app.theme().focus_border;
    let unfocused_color = app.theme().unfocused_border;
    let editor_bg = app.editor().palette().background;

    let title = if focused { " [ Editor ] " } else { " Editor " };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(if focused {
            BorderType::Double
        } else {
            BorderType::Rounded
        })
        .border_style(
            Style::default()
                .fg(if focused { focus_color } else { unfocused_color })
                .add_modifier(if focused {
                    Modifier::BOLD
                } else {
                    Modifier::empty()
                }),
        )
        .style(Style::default().bg(editor_bg));

    app.editor_mut().textarea_mut().set_block(block);
    f.render_widget(app.editor().textarea(), area);
}

fn render_tree_pane(f: &mut Frame, area: Rect, app: &App) {
    let focused = app.pane() == 1;
    let focus_color = app.theme().focus_border;
    let unfocused_color = app.theme().unfocused_border;

    let block = Block::default()
        .title(if focused { " [ Tree ] " } else { " Tree " })
        .borders(Borders::ALL)
        .border_type(if focused {
            BorderType::Double
        } else {
            BorderType::Rounded
        })
        .border_style(
            Style::default()
                .fg(if focused { focus_color } else { unfocused_color })
                .add_modifier(if focused {
                    Modifier::BOLD
                } else {
                    Modifier::empty()
                }),
        );

    let rows = app.visible_tree_rows();
    if rows.is_empty() {
        let hint = Paragraph::new("(no tree - press Ctrl+T to build one)")
            .style(Style::default().fg(app.theme().text_dim))
            .block(block);
        f.render_widget(hint, area);
        return;
    }

    let items: Vec<ListItem> = rows
        .iter()
        .map(|row| {
            let mut spans = Vec::with_capacity(5);
            spans.push(Span::raw("  ".repeat(row.depth)));

            if row.is_toggle() {
                let glyph = if row.expanded { "▼ " } else { "▶ " };
                spans.push(Span::styled(
                    glyph,
                    Style::default().fg(app.theme().tree_punct),
                ));
            } else {
                spans.push(Span::raw("  "));
            }

            if let Some(key) = &row.key {
                spans.push(Span::styled(
                    format!("\"{key}\""),
                    Style::default().fg(app.theme().tree_key),
                ));
                spans.push(Span::styled(
                    ": ",
                    Style::default().fg(app.theme().tree_punct),
                ));
            }

            let value_color = match row.kind {
                RowKind::Open | RowKind::Close => app.theme().tree_punct,
                RowKind::Leaf(ScalarKind::String) => app.theme().tree_string,
                RowKind::Leaf(ScalarKind::Number) => app.theme().tree_number,
                RowKind::Leaf(_) => app.theme().tree_keyword,
            };
            spans.push(Span::styled(
                row.text.clone(),
                Style::default().fg(value_color),
            ));

            ListItem::new(Line::from(spans))
        })
        .collect();

    let mut st = ListState::default();
    st.select(Some(app.tree_selection().min(rows.len() - 1)));

    let list = List::new(items)
        .highlight_style(
            Style::default()
                .bg(app.theme().selection_bg)
                .fg(app.theme().selection_fg)
                .add_modifier(Modifier::BOLD),
        )
        .block(block);

    f.render_stateful_widget(list, area, &mut st);
}

// ===============================
// Footer
// ===============================
fn footer(f: &mut Frame, area: Rect, app: &App) {
    let accent = Style::default().fg(app.theme().focus_border);
    let mut spans: Vec<Span> = Vec::with_capacity(32);

    spans.push(Span::styled("Tab", accent));
    spans.push(Span::raw(" pane │ "));
    spans.push(Span::styled("^K", accent));
    spans.push(Span::raw(" validate │ "));
    spans.push(Span::styled("^P", accent));
    spans.push(Span::raw(" pretty │ "));
    spans.push(Span::styled("^N", accent));
    spans.push(Span::raw(" minify │ "));
    spans.push(Span::styled("^Y", accent));
    spans.push(Span::raw(" copy │ "));
    spans.push(Span::styled("^S", accent));
    spans.push(Span::raw(" save │ "));
    spans.push(Span::styled("^T", accent));
    spans.push(Span::raw(" tree │ "));
    spans.push(Span::styled("^O", accent));
    spans.push(Span::raw(" history │ "));
    spans.push(Span::styled("^L", accent));
    spans.push(Span::raw(" theme │ "));
    spans.push(Span::styled("^Q", accent));
    spans.push(Span::raw(" quit"));

    if let Some((msg, kind)) = app.alert() {
        let color = match kind {
            AlertKind::Success => app.theme().alert_success,
            AlertKind::Error => app.theme().alert_error,
        };
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(
            msg.to_string(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

// ===============================
// Overlays
// ===============================
fn draw_history_overlay(f: &mut Frame, app: &App) {
    let entries = app.history_entries();
    let sel = app.history_selection();

    // Centered overlay (70% width, 60% height)
    let area = f.area();
    let width = (area.width * 7) / 10;
    let height = (area.height * 6) / 10;
    let x = (area.width.saturating_sub(width)) / 2;
    let y = (area.height.saturating_sub(height)) / 2;
    let overlay = Rect { x, y, width, height };

    f.render_widget(Clear, overlay);

    let container = Block::default()
        .title(format!(" History ({} snapshots) ", entries.len()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(app.theme().focus_border))
        .style(Style::default().bg(app.theme().background));
    f.render_widget(container, overlay);

    let inner = Rect {
        x: overlay.x + 1,
        y: overlay.y + 1,
        width: overlay.width.saturating_sub(2),
        height: overlay.height.saturating_sub(2),
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(inner);

    if entries.is_empty() {
        let empty = Paragraph::new("(no snapshots yet - validate or paste valid JSON)")
            .style(Style::default().fg(app.theme().text_dim));
        f.render_widget(empty, chunks[0]);
    } else {
        let items: Vec<ListItem> = entries
            .iter()
            .map(|e| {
                let line = Line::from(vec![
                    Span::styled(
                        e.timestamp.clone(),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::raw("  │  "),
                    Span::styled(
                        e.size_label.clone(),
                        Style::default().fg(app.theme().text_dim),
                    ),
                ]);
                ListItem::new(line)
            })
            .collect();

        let mut st = ListState::default();
        st.select(Some(sel.min(entries.len() - 1)));
        let list = List::new(items)
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED));
        f.render_stateful_widget(list, chunks[0], &mut st);
    }

    let help = Paragraph::new(Line::from(vec![
        Span::raw("↑/↓ move  "),
        Span::styled("Enter", Style::default().fg(app.theme().focus_border)),
        Span::raw(" restore  "),
        Span::styled("x", Style::default().fg(app.theme().focus_border)),
        Span::raw(" clear all  "),
        Span::styled("Esc", Style::default().fg(app.theme().focus_border)),
        Span::raw(" close"),
    ]));
    f.render_widget(help, chunks[1]);
}

fn draw_confirm_modal(f: &mut Frame, app: &App) {
    let area = f.area();
    let width = (area.width * 4) / 10;
    let height = 3;
    let x = (area.width.saturating_sub(width)) / 2;
    let y = (area.height.saturating_sub(height)) / 2;
    let overlay = Rect { x, y, width, height };

    f.render_widget(Clear, overlay);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(app.theme().alert_error))
        .style(Style::default().bg(app.theme().background));

    let text = Paragraph::new("Clear all history? (y/N)")
        .style(
            Style::default()
                .fg(app.theme().text)
                .add_modifier(Modifier::BOLD),
        )
        .block(block);
    f.render_widget(text, overlay);
}

fn draw_error_modal(f: &mut Frame, app: &App) {
    let message = app.modal_error().unwrap_or("");

    let area = f.area();
    let width = (area.width * 4) / 10;
    let height = 3;
    let x = (area.width.saturating_sub(width)) / 2;
    let y = (area.height.saturating_sub(height)) / 2;
    let overlay = Rect { x, y, width, height };

    f.render_widget(Clear, overlay);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(app.theme().alert_error))
        .style(Style::default().bg(app.theme().background));

    let text = Paragraph::new(format!("✗ {message} (press any key)"))
        .style(
            Style::default()
                .fg(app.theme().alert_error)
                .add_modifier(Modifier::BOLD),
        )
        .block(block);
    f.render_widget(text, overlay);
}
