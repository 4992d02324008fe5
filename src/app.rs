use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::editor::EditorHost;
use crate::history::{HistoryEntry, HistoryStore};
use crate::notify::{AlertKind, Notifier};
use crate::theme::{ColorScheme, EditorPalette, Theme};
use crate::tree::{self, TreeRow};
use crate::{clipboard, ops};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    History,
    ConfirmClear,
}

/// Application state machine. Every user action is a synchronous method that
/// runs to completion; the UI layer is a thin draw pass over this state.
pub struct App {
    quit: bool,
    pane: usize, // 0 editor, 1 tree

    editor: EditorHost,

    theme: Theme,
    scheme: ColorScheme,

    // Tree state (rebuilt on explicit triggers only)
    tree_rows: Vec<TreeRow>,
    tree_selection: usize, // index into the visible-row list

    // History state
    history: HistoryStore,
    history_entries: Vec<HistoryEntry>,
    history_selection: usize,

    notifier: Notifier,
    // Blocking modal channel for tree-build failure, distinct from the
    // footer notifier. Any key dismisses it.
    modal_error: Option<String>,
    input_mode: InputMode,

    export_dir: PathBuf,
}

impl App {
    pub fn new(theme: Theme, history: HistoryStore) -> Self {
        let palette = match theme {
            Theme::Dark => EditorPalette::hacker(),
            Theme::Light => EditorPalette::builtin(Theme::Light),
        };
        Self {
            quit: false,
            pane: 0,
            editor: EditorHost::new(palette),
            theme,
            scheme: theme.colors(),
            tree_rows: Vec::new(),
            tree_selection: 0,
            history,
            history_entries: Vec::new(),
            history_selection: 0,
            notifier: Notifier::new(),
            modal_error: None,
            input_mode: InputMode::Normal,
            export_dir: PathBuf::from("."),
        }
    }

    // ----- getters -----
    pub fn quit_flag(&self) -> bool {
        self.quit
    }
    pub fn pane(&self) -> usize {
        self.pane
    }
    pub fn input_mode(&self) -> InputMode {
        self.input_mode
    }
    pub fn theme(&self) -> &ColorScheme {
        &self.scheme
    }
    pub fn theme_kind(&self) -> Theme {
        self.theme
    }
    pub fn editor(&self) -> &EditorHost {
        &self.editor
    }
    pub fn editor_mut(&mut self) -> &mut EditorHost {
        &mut self.editor
    }
    pub fn alert(&self) -> Option<(&str, AlertKind)> {
        self.notifier.current()
    }
    pub fn modal_error(&self) -> Option<&str> {
        self.modal_error.as_deref()
    }
    pub fn history_entries(&self) -> &[HistoryEntry] {
        &self.history_entries
    }
    pub fn history_selection(&self) -> usize {
        self.history_selection
    }
    pub fn tree_selection(&self) -> usize {
        self.tree_selection
    }

    /// Rows currently visible in the tree pane, in display order.
    pub fn visible_tree_rows(&self) -> Vec<&TreeRow> {
        self.tree_rows.iter().filter(|r| r.visible).collect()
    }

    // ----- lifecycle -----
    pub fn quit(&mut self) {
        self.quit = true;
    }

    /// Load a file into the editor at startup. The tree is built right away
    /// when the file parses; invalid files still load as plain text.
    pub fn load_file(&mut self, path: &Path) -> anyhow::Result<()> {
        let text = std::fs::read_to_string(path)
            .map_err(|err| anyhow::anyhow!("Failed to read {}: {err}", path.display()))?;
        self.editor.set_text(&text);
        if let Ok(value) = ops::parse(&text) {
            self.rebuild_tree(&value);
        }
        Ok(())
    }

    /// Redirect the download target directory (defaults to the working
    /// directory).
    pub fn set_export_dir(&mut self, dir: PathBuf) {
        self.export_dir = dir;
    }

    // ----- pane focus -----
    pub fn next_pane(&mut self) {
        self.pane = (self.pane + 1) % 2;
    }
    pub fn prev_pane(&mut self) {
        self.pane = (self.pane + 1) % 2;
    }

    // ----- editor passthrough -----
    pub fn editor_input(&mut self, key: crossterm::event::KeyEvent) {
        self.editor.input(key);
    }

    /// Paste pipeline: parse the pasted buffer; on success replace the whole
    /// document with the 4-space pretty form, persist a snapshot and rebuild
    /// the tree. On failure the document is left untouched.
    pub fn paste(&mut self, pasted: &str) {
        match ops::prettify(pasted) {
            Ok(formatted) => {
                self.editor.set_text(&formatted);
                self.save_snapshot(&formatted);
                if let Ok(value) = ops::parse(&formatted) {
                    self.rebuild_tree(&value);
                }
                self.notifier
                    .show_transient(AlertKind::Success, "JSON pasted, formatted and saved");
            }
            Err(_) => {
                self.notifier
                    .show_transient(AlertKind::Error, "Invalid JSON pasted");
            }
        }
    }

    // ----- JSON operations -----
    /// Validate the current document. Success records a snapshot and rebuilds
    /// the tree; the document itself is never mutated.
    pub fn validate(&mut self) {
        let text = self.editor.text();
        match ops::parse(&text) {
            Ok(value) => {
                self.save_snapshot(&text);
                self.rebuild_tree(&value);
                self.notifier
                    .show_persistent(AlertKind::Success, "JSON is valid");
            }
            Err(err) => {
                self.notifier
                    .show_persistent(AlertKind::Error, format!("Invalid JSON: {err}"));
            }
        }
    }

    pub fn prettify(&mut self) {
        match ops::prettify(&self.editor.text()) {
            Ok(formatted) => self.editor.set_text(&formatted),
            Err(err) => self
                .notifier
                .show_persistent(AlertKind::Error, format!("Invalid JSON: {err}")),
        }
    }

    pub fn minify(&mut self) {
        match ops::minify(&self.editor.text()) {
            Ok(compact) => self.editor.set_text(&compact),
            Err(err) => self
                .notifier
                .show_persistent(AlertKind::Error, format!("Invalid JSON: {err}")),
        }
    }

    /// Copy the raw document to the system clipboard. No validation.
    pub fn copy(&mut self) {
        if clipboard::copy_to_clipboard(&self.editor.text()) {
            self.notifier
                .show_transient(AlertKind::Success, "Copied to clipboard");
        } else {
            self.notifier
                .show_transient(AlertKind::Error, "Copy failed");
        }
    }

    /// Write the raw document to `data.json`. No validation.
    pub fn download(&mut self) {
        match ops::export(&self.editor.text(), &self.export_dir) {
            Ok(path) => self
                .notifier
                .show_transient(AlertKind::Success, format!("Saved {}", path.display())),
            Err(err) => self
                .notifier
                .show_transient(AlertKind::Error, format!("Save failed: {err}")),
        }
    }

    // ----- tree -----
    /// Explicit tree build. Parse failure raises the blocking modal instead
    /// of a footer alert.
    pub fn build_tree(&mut self) {
        match ops::parse(&self.editor.text()) {
            Ok(value) => self.rebuild_tree(&value),
            Err(_) => self.modal_error = Some("Invalid JSON".to_string()),
        }
    }

    pub fn dismiss_modal(&mut self) {
        self.modal_error = None;
    }

    fn rebuild_tree(&mut self, value: &Value) {
        self.tree_rows = tree::build_rows(value);
        tree::recompute_visibility(&mut self.tree_rows);
        self.tree_selection = 0;
    }

    pub fn tree_up(&mut self) {
        self.tree_selection = self.tree_selection.saturating_sub(1);
    }

    pub fn tree_down(&mut self) {
        let visible = self.visible_tree_rows().len();
        if visible > 0 {
            self.tree_selection = (self.tree_selection + 1).min(visible - 1);
        }
    }

    /// Toggle expansion of the selected container row.
    pub fn tree_toggle(&mut self) {
        if let Some(idx) = self.selected_row_index() {
            if self.tree_rows[idx].is_toggle() {
                self.tree_rows[idx].expanded = !self.tree_rows[idx].expanded;
                tree::recompute_visibility(&mut self.tree_rows);
                let visible = tree::visible_indices(&self.tree_rows).len();
                if visible > 0 {
                    self.tree_selection = self.tree_selection.min(visible - 1);
                }
            }
        }
    }

    /// Activate the selected row: a keyed row jumps the editor to that key's
    /// first occurrence and focuses the editor pane; a bare container row
    /// toggles instead.
    pub fn tree_activate(&mut self) {
        let Some(idx) = self.selected_row_index() else {
            return;
        };
        if let Some(key) = self.tree_rows[idx].key.clone() {
            if self.editor.jump_to_key(&key) {
                self.pane = 0;
            }
        } else if self.tree_rows[idx].is_toggle() {
            self.tree_toggle();
        }
    }

    fn selected_row_index(&self) -> Option<usize> {
        tree::visible_indices(&self.tree_rows)
            .get(self.tree_selection)
            .copied()
    }

    // ----- theme -----
    /// Swap dark/light. The editor's custom startup palette is permanently
    /// replaced by the built-in pair on first use.
    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        self.scheme = self.theme.colors();
        self.editor.set_palette(EditorPalette::builtin(self.theme));
    }

    // ----- history -----
    pub fn open_history(&mut self) {
        self.history_entries = self.history.list();
        self.history_selection = 0;
        self.input_mode = InputMode::History;
    }

    pub fn close_history(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    pub fn history_up(&mut self) {
        self.history_selection = self.history_selection.saturating_sub(1);
    }

    pub fn history_down(&mut self) {
        if !self.history_entries.is_empty() {
            self.history_selection =
                (self.history_selection + 1).min(self.history_entries.len() - 1);
        }
    }

    /// Restore the selected snapshot verbatim. No re-validation and no tree
    /// rebuild happen on this path.
    pub fn restore_selected(&mut self) {
        if let Some(entry) = self.history_entries.get(self.history_selection) {
            let content = entry.content.clone();
            self.editor.set_text(&content);
            self.input_mode = InputMode::Normal;
            self.notifier
                .show_transient(AlertKind::Success, "Snapshot restored");
        }
    }

    /// Ask for confirmation before wiping history.
    pub fn request_clear_history(&mut self) {
        self.input_mode = InputMode::ConfirmClear;
    }

    pub fn confirm_clear_history(&mut self) {
        match self.history.clear() {
            Ok(()) => {
                self.history_entries.clear();
                self.history_selection = 0;
            }
            Err(err) => {
                log::warn!("failed to clear history: {err:#}");
                self.notifier
                    .show_transient(AlertKind::Error, "Failed to clear history");
            }
        }
        self.input_mode = InputMode::History;
    }

    pub fn cancel_clear_history(&mut self) {
        self.input_mode = InputMode::History;
    }

    fn save_snapshot(&mut self, text: &str) {
        if let Err(err) = self.history.save(text) {
            log::warn!("failed to save history snapshot: {err:#}");
        }
    }
}
