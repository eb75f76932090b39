//! UI Components
//!
//! Each component encapsulates its own state, event handling, and rendering logic.
//! Components communicate through Actions rather than direct state mutation.

pub mod delete_dialog;
pub mod editor_dialog;
pub mod help_dialog;
pub mod inventory;
pub mod layout;

pub use delete_dialog::DeleteDialog;
pub use editor_dialog::EditorDialog;
pub use help_dialog::HelpDialog;
pub use inventory::InventoryComponent;
pub use layout::{calculate_main_layout, centered_popup};
