//! Model layer - centralized state management
//!
//! This module contains all state-related types:
//! - `Catalog` - the owned record collection
//! - `Record` / `Draft` - catalog entities and their editable copies
//! - `ModalStack` - modal overlay management

pub mod catalog;
pub mod modal;
pub mod record;

// Re-export commonly used types
pub use catalog::Catalog;
pub use modal::{Modal, ModalStack};
pub use record::{Draft, FieldErrors, FieldId, Record};
