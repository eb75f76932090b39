//! Inventory component - Main application screen
//!
//! Renders the catalog as a table with a cursor row, plus a status line
//! and help bar. Owns navigation state; catalog mutation happens in the
//! App in response to the Actions emitted here.

use crate::action::Action;
use crate::component::Component;
use crate::components::calculate_main_layout;
use crate::model::{Catalog, Record};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

const COLUMNS: [&str; 6] = ["Photo", "Name", "Description", "Category", "Quantity", "Price"];

/// Widest a single column may grow before truncation
const MAX_COL_WIDTH: usize = 32;

/// Inventory screen: record table with a cursor row
pub struct InventoryComponent {
    /// Index of the cursor row in the catalog
    pub cursor: usize,
    /// Scroll offset when the table is taller than the viewport
    scroll: usize,
}

impl Default for InventoryComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl InventoryComponent {
    pub fn new() -> Self {
        Self { cursor: 0, scroll: 0 }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────────────────────

    pub fn next(&mut self, catalog: &Catalog) {
        if self.cursor + 1 < catalog.len() {
            self.cursor += 1;
        }
    }

    pub fn previous(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn select_first(&mut self) {
        self.cursor = 0;
    }

    pub fn select_last(&mut self, catalog: &Catalog) {
        self.cursor = catalog.len().saturating_sub(1);
    }

    /// Move the cursor onto the record with the given id, if present
    pub fn select_record(&mut self, catalog: &Catalog, id: u64) {
        if let Some(index) = catalog.records().iter().position(|r| r.id == id) {
            self.cursor = index;
        }
    }

    /// Keep the cursor on a valid row after removals
    pub fn clamp_cursor(&mut self, catalog: &Catalog) {
        if catalog.is_empty() {
            self.cursor = 0;
        } else if self.cursor >= catalog.len() {
            self.cursor = catalog.len() - 1;
        }
    }

    /// The record under the cursor
    pub fn selected_record<'a>(&self, catalog: &'a Catalog) -> Option<&'a Record> {
        catalog.get(self.cursor)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Rendering
    // ─────────────────────────────────────────────────────────────────────────

    fn record_cells(record: &Record) -> [&str; 6] {
        [
            &record.photo,
            &record.title,
            &record.description,
            &record.category,
            &record.quantity,
            &record.price,
        ]
    }

    fn truncate(text: &str, width: usize) -> String {
        if text.width() <= width {
            return text.to_string();
        }
        let mut out = String::new();
        let budget = width.saturating_sub(3);
        for c in text.chars() {
            if out.width() + c.to_string().width() > budget {
                break;
            }
            out.push(c);
        }
        out.push_str("...");
        out
    }

    /// Build the table lines: header, separator, one line per record
    pub fn build_table_lines(&self, catalog: &Catalog) -> Vec<Line<'static>> {
        let mut lines = Vec::new();

        if catalog.is_empty() {
            lines.push(Line::from(Span::styled(
                "No records. Press 'a' to add one.",
                Style::default().fg(Color::DarkGray),
            )));
            return lines;
        }

        // Column widths from content, capped
        let mut col_widths: Vec<usize> = COLUMNS.iter().map(|h| h.width()).collect();
        for record in catalog.records() {
            for (i, cell) in Self::record_cells(record).iter().enumerate() {
                col_widths[i] = col_widths[i].max(cell.width());
            }
        }
        for width in &mut col_widths {
            *width = (*width).min(MAX_COL_WIDTH);
        }

        // Header row
        let mut header_spans = vec![Span::raw("  ")];
        for (i, header) in COLUMNS.iter().enumerate() {
            header_spans.push(Span::styled(
                format!("{:width$}", header, width = col_widths[i]),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ));
            header_spans.push(Span::raw(" │ "));
        }
        lines.push(Line::from(header_spans));

        let separator: String = col_widths
            .iter()
            .map(|w| "─".repeat(*w))
            .collect::<Vec<_>>()
            .join("─┼─");
        lines.push(Line::from(Span::styled(
            format!("──{}", separator),
            Style::default().fg(Color::DarkGray),
        )));

        // Data rows, with the cursor row highlighted
        for (row_idx, record) in catalog.records().iter().enumerate() {
            let is_cursor = row_idx == self.cursor;
            let marker = if is_cursor { "▶ " } else { "  " };
            let cell_style = if is_cursor {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };

            let mut row_spans = vec![Span::styled(marker.to_string(), cell_style)];
            for (i, cell) in Self::record_cells(record).iter().enumerate() {
                let truncated = Self::truncate(cell, col_widths[i]);
                row_spans.push(Span::styled(
                    format!("{:width$}", truncated, width = col_widths[i]),
                    cell_style,
                ));
                row_spans.push(Span::raw(" │ "));
            }
            lines.push(Line::from(row_spans));
        }

        lines
    }

    /// Draw the full screen: header, table, status line, help bar
    pub fn draw_with_catalog(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        catalog: &Catalog,
        status: Option<&str>,
    ) -> Result<()> {
        let layout = calculate_main_layout(area, status.is_some());

        // Header
        let header = Paragraph::new(Line::from(vec![
            Span::styled(
                " Inventory ",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("({} records)", catalog.len()),
                Style::default().fg(Color::DarkGray),
            ),
        ]))
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(header, layout.header);

        // Table, scrolled so the cursor row stays visible
        let visible_height = layout.table.height.saturating_sub(2) as usize;
        let cursor_line = self.cursor + 2; // header + separator above the rows
        if cursor_line >= self.scroll + visible_height {
            self.scroll = cursor_line + 1 - visible_height;
        } else if cursor_line < self.scroll {
            self.scroll = cursor_line;
        }

        let table = Paragraph::new(self.build_table_lines(catalog))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .scroll((self.scroll as u16, 0));
        frame.render_widget(table, layout.table);

        // Status line
        if let (Some(status_area), Some(message)) = (layout.status, status) {
            let status_widget = Paragraph::new(Line::from(Span::styled(
                format!(" {}", message),
                Style::default().fg(Color::Green),
            )));
            frame.render_widget(status_widget, status_area);
        }

        // Help bar
        let help = Paragraph::new(Line::from(vec![
            Span::styled(
                " a ",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("Add  "),
            Span::styled(
                " e/Enter ",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("Edit  "),
            Span::styled(
                " d ",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            Span::raw("Delete  "),
            Span::styled(
                " j/k ",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("Move  "),
            Span::styled(
                " ? ",
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("Help  "),
            Span::styled(
                " q ",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            Span::raw("Quit"),
        ]))
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, layout.help);

        Ok(())
    }
}

impl Component for InventoryComponent {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Char('j') | KeyCode::Down => Some(Action::NextRow),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::PrevRow),
            KeyCode::Char('g') => Some(Action::FirstRow),
            KeyCode::Char('G') => Some(Action::LastRow),
            KeyCode::Char('a') => Some(Action::OpenCreateEditor),
            KeyCode::Char('e') | KeyCode::Enter => Some(Action::OpenEditEditor),
            KeyCode::Char('d') => Some(Action::OpenDeleteConfirm),
            KeyCode::Char('?') => Some(Action::OpenHelp),
            KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let catalog = Catalog::new();
        self.draw_with_catalog(frame, area, &catalog, None)
    }
}
