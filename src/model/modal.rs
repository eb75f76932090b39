//! Modal stack for managing overlays
//!
//! A single enum-based stack instead of one boolean flag per dialog.
//! Only the top modal receives input events.

/// Overlays that can sit on top of the inventory screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modal {
    /// Record editor dialog (create or edit; the editor component holds
    /// the draft and knows which mode it is in)
    Editor,
    /// Delete confirmation for the record with this id
    DeleteConfirm { id: u64 },
    /// Keyboard shortcut overlay
    Help,
}

/// A stack of modal overlays, rendered bottom to top
#[derive(Debug, Default)]
pub struct ModalStack {
    stack: Vec<Modal>,
}

impl ModalStack {
    pub fn new() -> Self {
        Self { stack: Vec::new() }
    }

    pub fn push(&mut self, modal: Modal) {
        self.stack.push(modal);
    }

    pub fn pop(&mut self) -> Option<Modal> {
        self.stack.pop()
    }

    /// The modal currently receiving input, if any
    pub fn top(&self) -> Option<&Modal> {
        self.stack.last()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }
}
