//! Record editor dialog component
//!
//! Modal form over a `Draft`: one input row per field, Cancel/Save
//! buttons, and required-field validation on save. The draft is rebuilt
//! from its seed every time the dialog opens, so switching between
//! records can never leak state from a previous edit.
//!
//! Closing is restricted on purpose: only the Cancel button or a
//! successful save close the dialog. Escape is ignored so a stray key
//! cannot silently throw away edits.

use crate::action::Action;
use crate::component::Component;
use crate::components::centered_popup;
use crate::model::{Draft, FieldErrors, FieldId, Record};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Focus position inside the editor dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorFocus {
    /// Index into `FieldId::all()`
    Field(usize),
    Cancel,
    Save,
}

/// Record editor dialog
pub struct EditorDialog {
    /// Working copy being edited
    pub draft: Draft,
    /// Validation failures from the latest save attempt
    pub errors: FieldErrors,
    /// Currently focused field or button
    pub focus: EditorFocus,
    /// Whether the draft was seeded from an existing record
    editing_existing: bool,
}

impl Default for EditorDialog {
    fn default() -> Self {
        Self {
            draft: Draft::blank(),
            errors: FieldErrors::default(),
            focus: EditorFocus::Field(0),
            editing_existing: false,
        }
    }
}

impl EditorDialog {
    /// Open for the create flow: blank draft, clean errors
    pub fn open_blank(&mut self) {
        self.draft = Draft::blank();
        self.errors = FieldErrors::default();
        self.focus = EditorFocus::Field(0);
        self.editing_existing = false;
    }

    /// Open for the edit flow, seeded from an existing record
    pub fn open_with(&mut self, record: &Record) {
        self.draft = Draft::from_record(record);
        self.errors = FieldErrors::default();
        self.focus = EditorFocus::Field(0);
        self.editing_existing = true;
    }

    fn title(&self) -> &'static str {
        if self.editing_existing {
            " Edit Product "
        } else {
            " New Product "
        }
    }

    fn save_label(&self) -> &'static str {
        if self.editing_existing {
            "Save"
        } else {
            "Create"
        }
    }

    fn next_focus(&mut self) {
        let field_count = FieldId::all().len();
        self.focus = match self.focus {
            EditorFocus::Field(i) if i + 1 < field_count => EditorFocus::Field(i + 1),
            EditorFocus::Field(_) => EditorFocus::Cancel,
            EditorFocus::Cancel => EditorFocus::Save,
            EditorFocus::Save => EditorFocus::Field(0),
        };
    }

    fn prev_focus(&mut self) {
        let field_count = FieldId::all().len();
        self.focus = match self.focus {
            EditorFocus::Field(0) => EditorFocus::Save,
            EditorFocus::Field(i) => EditorFocus::Field(i - 1),
            EditorFocus::Cancel => EditorFocus::Field(field_count - 1),
            EditorFocus::Save => EditorFocus::Cancel,
        };
    }

    fn focused_field(&self) -> Option<FieldId> {
        match self.focus {
            EditorFocus::Field(i) => FieldId::all().get(i).copied(),
            _ => None,
        }
    }

    /// Validate the draft; on success emit the finalized record
    ///
    /// On failure every failing field gets its message and the dialog
    /// stays open. Nothing is committed partially.
    fn submit(&mut self) -> Option<Action> {
        self.errors = self.draft.validate();
        if self.errors.is_empty() {
            Some(Action::CommitRecord(self.draft.clone().into_record()))
        } else {
            None
        }
    }
}

impl Component for EditorDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Tab | KeyCode::Down => {
                self.next_focus();
                None
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.prev_focus();
                None
            }
            KeyCode::Enter => match self.focus {
                EditorFocus::Field(_) => {
                    self.next_focus();
                    None
                }
                EditorFocus::Cancel => Some(Action::CancelEditor),
                EditorFocus::Save => self.submit(),
            },
            KeyCode::Backspace => {
                if let Some(field) = self.focused_field() {
                    self.draft.field_mut(field).pop();
                }
                None
            }
            KeyCode::Char(c) => {
                if let Some(field) = self.focused_field() {
                    self.draft.field_mut(field).push(c);
                }
                None
            }
            // Esc is not a close trigger: only Cancel or a successful
            // save may close the dialog
            KeyCode::Esc => None,
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let mut content = vec![Line::from("")];

        for (i, &field) in FieldId::all().iter().enumerate() {
            let is_focused = self.focus == EditorFocus::Field(i);
            let marker = if is_focused { "▶ " } else { "  " };
            let label_style = if is_focused {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };

            let value = self.draft.field(field);
            let value_span = if value.is_empty() && !is_focused {
                Span::styled(
                    field.placeholder().to_string(),
                    Style::default().fg(Color::DarkGray),
                )
            } else if is_focused {
                Span::styled(
                    format!("{}_", value),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                Span::styled(value.to_string(), Style::default().fg(Color::White))
            };

            content.push(Line::from(vec![
                Span::styled(marker.to_string(), label_style),
                Span::styled(format!("{:12}", field.label()), label_style),
                value_span,
            ]));

            if let Some(message) = self.errors.message(field) {
                content.push(Line::from(Span::styled(
                    format!("              {}", message),
                    Style::default().fg(Color::Red),
                )));
            }
        }

        content.push(Line::from(""));

        // Buttons
        let button_style = |focused: bool| {
            if focused {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            }
        };
        content.push(Line::from(vec![
            Span::raw("    "),
            Span::styled("[ Cancel ]", button_style(self.focus == EditorFocus::Cancel)),
            Span::raw("   "),
            Span::styled(
                format!("[ {} ]", self.save_label()),
                button_style(self.focus == EditorFocus::Save),
            ),
        ]));

        content.push(Line::from(""));
        content.push(Line::from(vec![
            Span::styled(
                " Tab ",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("Next field  "),
            Span::styled(
                " Enter ",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("Select  "),
            Span::raw("Type to edit"),
        ]));

        let height = content.len() as u16 + 2;
        let popup_area = centered_popup(area, 64, height);

        frame.render_widget(Clear, popup_area);

        let paragraph = Paragraph::new(content).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(self.title())
                .title_style(
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
        );

        frame.render_widget(paragraph, popup_area);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> Record {
        Record {
            id: 1,
            title: "Apple".to_string(),
            subtitle: "Fresh".to_string(),
            description: "ok".to_string(),
            price: "5".to_string(),
            quantity: "10".to_string(),
            category: String::new(),
            photo: String::new(),
        }
    }

    fn press(dialog: &mut EditorDialog, code: KeyCode) -> Option<Action> {
        dialog
            .handle_key_event(KeyEvent::new(code, crossterm::event::KeyModifiers::NONE))
            .unwrap()
    }

    fn focus_save(dialog: &mut EditorDialog) {
        while dialog.focus != EditorFocus::Save {
            press(dialog, KeyCode::Tab);
        }
    }

    #[test]
    fn test_open_with_populates_from_seed() {
        let mut dialog = EditorDialog::default();
        dialog.open_with(&sample_record());

        assert_eq!(dialog.draft, Draft::from_record(&sample_record()));
        assert!(dialog.errors.is_empty());
        assert_eq!(dialog.focus, EditorFocus::Field(0));
    }

    #[test]
    fn test_open_blank_resets_prior_state() {
        let mut dialog = EditorDialog::default();
        dialog.open_with(&sample_record());
        press(&mut dialog, KeyCode::Char('x'));
        focus_save(&mut dialog);

        dialog.open_blank();
        assert_eq!(dialog.draft, Draft::blank());
        assert_eq!(dialog.focus, EditorFocus::Field(0));
    }

    #[test]
    fn test_typing_edits_only_the_focused_field() {
        let mut dialog = EditorDialog::default();
        dialog.open_with(&sample_record());

        press(&mut dialog, KeyCode::Char('s'));
        assert_eq!(dialog.draft.title, "Apples");
        assert_eq!(dialog.draft.subtitle, "Fresh");

        press(&mut dialog, KeyCode::Backspace);
        assert_eq!(dialog.draft.title, "Apple");
    }

    #[test]
    fn test_escape_does_not_close_or_emit() {
        let mut dialog = EditorDialog::default();
        dialog.open_with(&sample_record());
        press(&mut dialog, KeyCode::Char('x'));

        assert_eq!(press(&mut dialog, KeyCode::Esc), None);
        // Edits survive: Esc is not a discard
        assert_eq!(dialog.draft.title, "Applex");
    }

    #[test]
    fn test_cancel_button_emits_cancel() {
        let mut dialog = EditorDialog::default();
        dialog.open_with(&sample_record());

        while dialog.focus != EditorFocus::Cancel {
            press(&mut dialog, KeyCode::Tab);
        }
        assert_eq!(press(&mut dialog, KeyCode::Enter), Some(Action::CancelEditor));
    }

    #[test]
    fn test_save_with_cleared_title_is_blocked() {
        let mut dialog = EditorDialog::default();
        dialog.open_with(&sample_record());

        for _ in 0.."Apple".len() {
            press(&mut dialog, KeyCode::Backspace);
        }
        focus_save(&mut dialog);

        assert_eq!(press(&mut dialog, KeyCode::Enter), None);
        assert!(dialog.errors.has_error(FieldId::Title));
        assert_eq!(
            dialog.errors.message(FieldId::Title),
            Some("Title is required.")
        );
    }

    #[test]
    fn test_blank_save_reports_all_required_fields() {
        let mut dialog = EditorDialog::default();
        dialog.open_blank();
        focus_save(&mut dialog);

        assert_eq!(press(&mut dialog, KeyCode::Enter), None);
        for &field in FieldId::all() {
            assert_eq!(dialog.errors.has_error(field), field.is_required());
        }
    }

    #[test]
    fn test_save_emits_finalized_record_with_seed_id() {
        let mut dialog = EditorDialog::default();
        dialog.open_with(&sample_record());
        press(&mut dialog, KeyCode::Char('s'));
        focus_save(&mut dialog);

        let action = press(&mut dialog, KeyCode::Enter);
        match action {
            Some(Action::CommitRecord(record)) => {
                assert_eq!(record.id, 1);
                assert_eq!(record.title, "Apples");
                assert_eq!(record.subtitle, "Fresh");
            }
            other => panic!("expected CommitRecord, got {:?}", other),
        }
    }

    #[test]
    fn test_zero_valued_numeric_fields_pass() {
        let mut dialog = EditorDialog::default();
        let mut seed = sample_record();
        seed.price = "0".to_string();
        seed.quantity = "0".to_string();
        dialog.open_with(&seed);
        focus_save(&mut dialog);

        assert!(matches!(
            press(&mut dialog, KeyCode::Enter),
            Some(Action::CommitRecord(_))
        ));
    }

    #[test]
    fn test_focus_wraps_through_fields_and_buttons() {
        let mut dialog = EditorDialog::default();
        dialog.open_blank();

        let steps = FieldId::all().len() + 2;
        for _ in 0..steps {
            press(&mut dialog, KeyCode::Tab);
        }
        assert_eq!(dialog.focus, EditorFocus::Field(0));

        press(&mut dialog, KeyCode::BackTab);
        assert_eq!(dialog.focus, EditorFocus::Save);
    }
}
