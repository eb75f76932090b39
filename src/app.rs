//! Root application component
//!
//! The App struct implements the Component trait, acting as the root
//! component that delegates event handling and rendering to children.
//! It owns the catalog (the authoritative record collection) and the
//! modal stack; all catalog mutation happens here, in `update`, in
//! response to Actions emitted by the components.

use crate::action::Action;
use crate::component::Component;
use crate::components::{DeleteDialog, EditorDialog, HelpDialog, InventoryComponent};
use crate::model::{Catalog, Modal, ModalStack};
use anyhow::Result;
use crossterm::event::KeyEvent;
use ratatui::{layout::Rect, Frame};

/// Main application state - coordinates between components
pub struct App {
    /// The record collection
    pub catalog: Catalog,

    /// Modal overlay stack
    pub modals: ModalStack,

    /// Flag to indicate the app should quit
    pub should_quit: bool,

    /// Transient status message shown after saves and deletes
    pub status_message: Option<String>,

    // ─────────────────────────────────────────────────────────────────────────
    // Child Components
    // ─────────────────────────────────────────────────────────────────────────
    pub inventory: InventoryComponent,
    pub editor: EditorDialog,
    pub delete_dialog: DeleteDialog,
    pub help_dialog: HelpDialog,
}

impl App {
    pub fn new(catalog: Catalog) -> App {
        App {
            catalog,
            modals: ModalStack::new(),
            should_quit: false,
            status_message: None,
            inventory: InventoryComponent::new(),
            editor: EditorDialog::default(),
            delete_dialog: DeleteDialog::default(),
            help_dialog: HelpDialog::default(),
        }
    }
}

impl Component for App {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        match self.modals.top() {
            Some(Modal::Editor) => self.editor.handle_key_event(key),
            Some(Modal::DeleteConfirm { .. }) => self.delete_dialog.handle_key_event(key),
            Some(Modal::Help) => self.help_dialog.handle_key_event(key),
            None => self.inventory.handle_key_event(key),
        }
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            // ─────────────────────────────────────────────────────────────────
            // App Lifecycle
            // ─────────────────────────────────────────────────────────────────
            Action::Tick => {}
            Action::Resize(_, _) => {}
            Action::Quit => {
                self.should_quit = true;
            }

            // ─────────────────────────────────────────────────────────────────
            // Navigation (delegate to InventoryComponent)
            // ─────────────────────────────────────────────────────────────────
            Action::NextRow => self.inventory.next(&self.catalog),
            Action::PrevRow => self.inventory.previous(),
            Action::FirstRow => self.inventory.select_first(),
            Action::LastRow => self.inventory.select_last(&self.catalog),

            // ─────────────────────────────────────────────────────────────────
            // Editor Dialog
            // ─────────────────────────────────────────────────────────────────
            Action::OpenCreateEditor => {
                self.editor.open_blank();
                self.modals.push(Modal::Editor);
            }
            Action::OpenEditEditor => {
                // Opening always re-seeds the draft, so switching
                // between records never reuses stale editor state
                if let Some(record) = self.inventory.selected_record(&self.catalog) {
                    self.editor.open_with(record);
                    self.modals.push(Modal::Editor);
                }
            }
            Action::CancelEditor => {
                self.modals.pop();
            }
            Action::CommitRecord(record) => {
                let title = record.title.clone();
                let is_new = record.id == 0;
                let id = self.catalog.upsert(record);
                self.modals.pop();
                self.inventory.select_record(&self.catalog, id);
                self.status_message = Some(if is_new {
                    format!("Added '{}'", title)
                } else {
                    format!("Updated '{}'", title)
                });
            }

            // ─────────────────────────────────────────────────────────────────
            // Deletion
            // ─────────────────────────────────────────────────────────────────
            Action::OpenDeleteConfirm => {
                if let Some(record) = self.inventory.selected_record(&self.catalog) {
                    self.delete_dialog.confirm(record.id, record.title.clone());
                    self.modals.push(Modal::DeleteConfirm { id: record.id });
                }
            }
            Action::DeleteRecord(id) => {
                if let Some(removed) = self.catalog.remove(id) {
                    self.status_message = Some(format!("Deleted '{}'", removed.title));
                }
                self.modals.pop();
                self.inventory.clamp_cursor(&self.catalog);
            }

            // ─────────────────────────────────────────────────────────────────
            // Other Modals
            // ─────────────────────────────────────────────────────────────────
            Action::OpenHelp => {
                self.help_dialog.scroll_offset = 0;
                self.modals.push(Modal::Help);
            }
            Action::CloseModal => {
                self.modals.pop();
            }
        }

        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        self.inventory.draw_with_catalog(
            frame,
            area,
            &self.catalog,
            self.status_message.as_deref(),
        )?;

        // Draw modal overlay if active
        match self.modals.top() {
            Some(Modal::Editor) => self.editor.draw(frame, area)?,
            Some(Modal::DeleteConfirm { .. }) => self.delete_dialog.draw(frame, area)?,
            Some(Modal::Help) => self.help_dialog.draw(frame, area)?,
            None => {}
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Record;
    use crossterm::event::{KeyCode, KeyModifiers};

    /// Drive a key through the event → action → update pipeline,
    /// the same way run_app does
    fn press(app: &mut App, code: KeyCode) {
        let mut action = app
            .handle_key_event(KeyEvent::new(code, KeyModifiers::NONE))
            .unwrap();
        while let Some(a) = action {
            action = app.update(a).unwrap();
        }
    }

    fn tab_to_save(app: &mut App) {
        use crate::components::editor_dialog::EditorFocus;
        while app.editor.focus != EditorFocus::Save {
            press(app, KeyCode::Tab);
        }
    }

    fn sample_app() -> App {
        App::new(Catalog::sample().unwrap())
    }

    #[test]
    fn test_edit_flow_replaces_row_in_place() {
        let mut app = sample_app();
        let before = app.catalog.records().to_vec();

        press(&mut app, KeyCode::Char('e'));
        assert_eq!(app.modals.top(), Some(&Modal::Editor));

        press(&mut app, KeyCode::Char('!'));
        tab_to_save(&mut app);
        press(&mut app, KeyCode::Enter);

        assert!(app.modals.is_empty());
        assert_eq!(app.catalog.len(), before.len());

        // Only the title of the first row changed, same id and position
        let after = app.catalog.records();
        assert_eq!(after[0].id, before[0].id);
        assert_eq!(after[0].title, format!("{}!", before[0].title));
        assert_eq!(after[0].quantity, before[0].quantity);
        assert_eq!(&after[1..], &before[1..]);
        assert_eq!(app.status_message.as_deref(), Some("Updated 'Widget A!'"));
    }

    #[test]
    fn test_create_flow_appends_exactly_one_record() {
        let mut app = sample_app();
        let before = app.catalog.len();

        press(&mut app, KeyCode::Char('a'));
        for c in ['T', 'S', 'D', '5', '9'] {
            press(&mut app, KeyCode::Char(c));
            press(&mut app, KeyCode::Tab);
        }
        tab_to_save(&mut app);
        press(&mut app, KeyCode::Enter);

        assert!(app.modals.is_empty());
        assert_eq!(app.catalog.len(), before + 1);

        let added = app.catalog.records().last().unwrap();
        assert_eq!(added.id, 6);
        assert_eq!(added.title, "T");
        assert_eq!(added.quantity, "9");
        // Cursor follows the new row
        assert_eq!(app.inventory.cursor, before);
    }

    #[test]
    fn test_blocked_submit_keeps_dialog_open_and_catalog_unchanged() {
        let mut app = App::new(Catalog::new());
        app.catalog.upsert(Record {
            id: 0,
            title: "Apple".to_string(),
            subtitle: "Fresh".to_string(),
            description: "ok".to_string(),
            price: "5".to_string(),
            quantity: "10".to_string(),
            category: String::new(),
            photo: String::new(),
        });
        let before = app.catalog.records().to_vec();

        press(&mut app, KeyCode::Char('e'));
        for _ in 0.."Apple".len() {
            press(&mut app, KeyCode::Backspace);
        }
        tab_to_save(&mut app);
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.modals.top(), Some(&Modal::Editor));
        assert_eq!(
            app.editor.errors.message(crate::model::FieldId::Title),
            Some("Title is required.")
        );
        assert_eq!(app.catalog.records(), &before[..]);
    }

    #[test]
    fn test_cancel_discards_edits_and_reopen_reproduces_seed() {
        use crate::components::editor_dialog::EditorFocus;
        let mut app = sample_app();

        press(&mut app, KeyCode::Char('e'));
        press(&mut app, KeyCode::Char('x'));
        while app.editor.focus != EditorFocus::Cancel {
            press(&mut app, KeyCode::Tab);
        }
        press(&mut app, KeyCode::Enter);

        assert!(app.modals.is_empty());
        assert_eq!(app.catalog.records()[0].title, "Widget A");

        press(&mut app, KeyCode::Char('e'));
        assert_eq!(app.editor.draft.title, "Widget A");
    }

    #[test]
    fn test_escape_does_not_close_the_editor() {
        let mut app = sample_app();

        press(&mut app, KeyCode::Char('e'));
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.modals.top(), Some(&Modal::Editor));
    }

    #[test]
    fn test_delete_flow_removes_the_row() {
        let mut app = sample_app();
        press(&mut app, KeyCode::Char('j'));

        press(&mut app, KeyCode::Char('d'));
        assert_eq!(app.modals.top(), Some(&Modal::DeleteConfirm { id: 2 }));

        press(&mut app, KeyCode::Char('y'));
        assert!(app.modals.is_empty());
        assert_eq!(app.catalog.len(), 4);
        assert!(app.catalog.find(2).is_none());
        assert_eq!(app.status_message.as_deref(), Some("Deleted 'Widget B'"));
    }

    #[test]
    fn test_delete_declined_keeps_the_row() {
        let mut app = sample_app();

        press(&mut app, KeyCode::Char('d'));
        press(&mut app, KeyCode::Char('n'));

        assert!(app.modals.is_empty());
        assert_eq!(app.catalog.len(), 5);
    }

    #[test]
    fn test_delete_last_row_clamps_cursor() {
        let mut app = sample_app();
        press(&mut app, KeyCode::Char('G'));
        assert_eq!(app.inventory.cursor, 4);

        press(&mut app, KeyCode::Char('d'));
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.catalog.len(), 4);
        assert_eq!(app.inventory.cursor, 3);
    }

    #[test]
    fn test_switching_edit_targets_reseeds_the_draft() {
        use crate::components::editor_dialog::EditorFocus;
        let mut app = sample_app();

        press(&mut app, KeyCode::Char('e'));
        press(&mut app, KeyCode::Char('x'));
        while app.editor.focus != EditorFocus::Cancel {
            press(&mut app, KeyCode::Tab);
        }
        press(&mut app, KeyCode::Enter);

        // Edit a different record: no state from the first edit survives
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Char('e'));
        assert_eq!(app.editor.draft.id, 2);
        assert_eq!(app.editor.draft.title, "Widget B");
    }

    #[test]
    fn test_quit_key_sets_flag() {
        let mut app = sample_app();
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }
}
