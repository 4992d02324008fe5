//! Editor Host: a thin wrapper around the `tui-textarea` widget
//!
//! Owns the document text, cursor, and palette styling, and delegates
//! text search to the widget's search engine. Replacing the whole text
//! rebuilds the widget, so styling is reapplied on every set.

use crossterm::event::KeyEvent;
use ratatui::style::{Modifier, Style};
use tui_textarea::{CursorMove, TextArea};

use crate::theme::EditorPalette;

pub struct EditorHost {
    textarea: TextArea<'static>,
    palette: EditorPalette,
}

impl EditorHost {
    pub fn new(palette: EditorPalette) -> Self {
        let mut host = Self {
            textarea: TextArea::default(),
            palette,
        };
        host.apply_palette();
        host
    }

    /// Full document text.
    pub fn text(&self) -> String {
        self.textarea.lines().join("\n")
    }

    /// Replace the full document text; cursor returns to the top.
    pub fn set_text(&mut self, text: &str) {
        self.textarea = TextArea::from(text.lines());
        self.apply_palette();
    }

    /// Current (row, column) cursor position.
    pub fn cursor(&self) -> (usize, usize) {
        self.textarea.cursor()
    }

    /// Forward a key event to the widget's own editing behavior.
    pub fn input(&mut self, key: KeyEvent) -> bool {
        self.textarea.input(key)
    }

    pub fn palette(&self) -> EditorPalette {
        self.palette
    }

    pub fn set_palette(&mut self, palette: EditorPalette) {
        self.palette = palette;
        self.apply_palette();
    }

    /// Move the cursor to the first occurrence of `"<key>"` (quoted),
    /// case-insensitive, searching from the top of the document. The widget
    /// scrolls the match into view on the next render. Returns false when the
    /// key does not occur. Multiple same-named keys at different nesting
    /// levels are not disambiguated.
    pub fn jump_to_key(&mut self, key: &str) -> bool {
        let quoted = format!("\"{key}\"");
        let pattern = format!("(?i){}", regex::escape(&quoted));
        if self.textarea.set_search_pattern(&pattern).is_err() {
            return false;
        }
        self.textarea.move_cursor(CursorMove::Jump(0, 0));
        let found = self.textarea.search_forward(true);
        let _ = self.textarea.set_search_pattern("");
        found
    }

    pub fn textarea(&self) -> &TextArea<'static> {
        &self.textarea
    }

    pub fn textarea_mut(&mut self) -> &mut TextArea<'static> {
        &mut self.textarea
    }

    fn apply_palette(&mut self) {
        let p = self.palette;
        self.textarea
            .set_style(Style::default().fg(p.foreground).bg(p.background));
        self.textarea
            .set_cursor_style(Style::default().fg(p.background).bg(p.cursor));
        // No cursor-line highlight; the palette only colors text and cursor.
        self.textarea.set_cursor_line_style(Style::default());
        self.textarea
            .set_line_number_style(Style::default().fg(p.line_number).bg(p.background));
        self.textarea
            .set_selection_style(Style::default().bg(p.selection));
        self.textarea
            .set_search_style(Style::default().bg(p.selection).add_modifier(Modifier::UNDERLINED));
        self.textarea.set_tab_length(4);
        self.textarea.set_hard_tab_indent(false);
    }
}
