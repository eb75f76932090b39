//! Action enum - All possible application actions
//!
//! Actions are discrete operations that the application can perform.
//! Components emit Actions in response to events, and the App processes
//! them to update state.

use crate::model::Record;
use std::fmt;

/// All possible actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // ─────────────────────────────────────────────────────────────────────────
    // App Lifecycle
    // ─────────────────────────────────────────────────────────────────────────
    /// Regular tick for time-based updates
    Tick,
    /// Terminal was resized
    Resize(u16, u16),
    /// Quit the application
    Quit,

    // ─────────────────────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────────────────────
    /// Move cursor to next row
    NextRow,
    /// Move cursor to previous row
    PrevRow,
    /// Jump to first row
    FirstRow,
    /// Jump to last row
    LastRow,

    // ─────────────────────────────────────────────────────────────────────────
    // Editor Dialog
    // ─────────────────────────────────────────────────────────────────────────
    /// Open the editor with a blank draft (create flow)
    OpenCreateEditor,
    /// Open the editor seeded from the cursor row (edit flow)
    OpenEditEditor,
    /// Cancel button pressed: discard the draft and close
    CancelEditor,
    /// Validation passed: merge the finalized record into the catalog
    CommitRecord(Record),

    // ─────────────────────────────────────────────────────────────────────────
    // Deletion
    // ─────────────────────────────────────────────────────────────────────────
    /// Ask for confirmation before deleting the cursor row
    OpenDeleteConfirm,
    /// Confirmed: remove the record with this id
    DeleteRecord(u64),

    // ─────────────────────────────────────────────────────────────────────────
    // Other Modals
    // ─────────────────────────────────────────────────────────────────────────
    /// Open the keyboard shortcut overlay
    OpenHelp,
    /// Close the current modal
    CloseModal,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Tick => write!(f, "Tick"),
            Action::Resize(w, h) => write!(f, "Resize({}, {})", w, h),
            Action::Quit => write!(f, "Quit"),
            Action::NextRow => write!(f, "NextRow"),
            Action::PrevRow => write!(f, "PrevRow"),
            Action::FirstRow => write!(f, "FirstRow"),
            Action::LastRow => write!(f, "LastRow"),
            Action::OpenCreateEditor => write!(f, "OpenCreateEditor"),
            Action::OpenEditEditor => write!(f, "OpenEditEditor"),
            Action::CancelEditor => write!(f, "CancelEditor"),
            Action::CommitRecord(record) => write!(f, "CommitRecord(#{})", record.id),
            Action::OpenDeleteConfirm => write!(f, "OpenDeleteConfirm"),
            Action::DeleteRecord(id) => write!(f, "DeleteRecord({})", id),
            Action::OpenHelp => write!(f, "OpenHelp"),
            Action::CloseModal => write!(f, "CloseModal"),
        }
    }
}
