//! Record and Draft models
//!
//! A `Record` is a catalog entity living in the in-memory collection.
//! A `Draft` is the transient working copy the editor dialog mutates;
//! it is committed into the catalog only after validation passes.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A catalog record as stored in the collection
///
/// `price` and `quantity` hold numeric text entered by the user.
/// They stay free-form until validated on submit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Unique within the catalog; 0 means "not yet assigned"
    pub id: u64,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub price: String,
    pub quantity: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub photo: String,
}

/// Editable fields of a record, in form order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum FieldId {
    Title,
    Subtitle,
    Description,
    Price,
    Quantity,
    Category,
    Photo,
}

impl FieldId {
    /// All fields in the order the editor presents them
    pub fn all() -> &'static [FieldId] {
        &[
            FieldId::Title,
            FieldId::Subtitle,
            FieldId::Description,
            FieldId::Price,
            FieldId::Quantity,
            FieldId::Category,
            FieldId::Photo,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            FieldId::Title => "Title",
            FieldId::Subtitle => "Subtitle",
            FieldId::Description => "Description",
            FieldId::Price => "Price",
            FieldId::Quantity => "Quantity",
            FieldId::Category => "Category",
            FieldId::Photo => "Photo",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            FieldId::Title => "Apple",
            FieldId::Subtitle => "Fresh Fruits",
            FieldId::Description => "Good quality apples",
            FieldId::Price => "5",
            FieldId::Quantity => "10",
            FieldId::Category => "Groceries",
            FieldId::Photo => "https://example.com/apple.jpg",
        }
    }

    /// Whether the field must be non-empty for a draft to commit
    pub fn is_required(&self) -> bool {
        !matches!(self, FieldId::Category | FieldId::Photo)
    }
}

/// Per-field validation failures from the latest submit attempt
///
/// Recomputed in full on every validation pass; a field absent from the
/// map has no error. Purely presentational state, never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: BTreeMap<FieldId, String>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn has_error(&self, field: FieldId) -> bool {
        self.errors.contains_key(&field)
    }

    pub fn message(&self, field: FieldId) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    fn insert(&mut self, field: FieldId, message: String) {
        self.errors.insert(field, message);
    }
}

/// Working copy of a record while the editor dialog is open
///
/// Discarded on cancel; turned back into a `Record` only when
/// `validate` reports no errors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub id: u64,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub price: String,
    pub quantity: String,
    pub category: String,
    pub photo: String,
}

impl Draft {
    /// Blank template for the create flow (id 0 = unassigned)
    pub fn blank() -> Self {
        Self::default()
    }

    /// Seed a draft from an existing record for the edit flow
    pub fn from_record(record: &Record) -> Self {
        Self {
            id: record.id,
            title: record.title.clone(),
            subtitle: record.subtitle.clone(),
            description: record.description.clone(),
            price: record.price.clone(),
            quantity: record.quantity.clone(),
            category: record.category.clone(),
            photo: record.photo.clone(),
        }
    }

    pub fn field(&self, field: FieldId) -> &str {
        match field {
            FieldId::Title => &self.title,
            FieldId::Subtitle => &self.subtitle,
            FieldId::Description => &self.description,
            FieldId::Price => &self.price,
            FieldId::Quantity => &self.quantity,
            FieldId::Category => &self.category,
            FieldId::Photo => &self.photo,
        }
    }

    pub fn field_mut(&mut self, field: FieldId) -> &mut String {
        match field {
            FieldId::Title => &mut self.title,
            FieldId::Subtitle => &mut self.subtitle,
            FieldId::Description => &mut self.description,
            FieldId::Price => &mut self.price,
            FieldId::Quantity => &mut self.quantity,
            FieldId::Category => &mut self.category,
            FieldId::Photo => &mut self.photo,
        }
    }

    /// Validate every required field and report all failures at once
    ///
    /// Presence is a non-empty check on the text, so "0" is a valid
    /// price or quantity.
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::default();
        for &field in FieldId::all() {
            if field.is_required() && self.field(field).is_empty() {
                errors.insert(field, format!("{} is required.", field.label()));
            }
        }
        errors
    }

    /// Finalize the draft into a record
    ///
    /// Callers must have seen `validate` return no errors first.
    pub fn into_record(self) -> Record {
        Record {
            id: self.id,
            title: self.title,
            subtitle: self.subtitle,
            description: self.description,
            price: self.price,
            quantity: self.quantity,
            category: self.category,
            photo: self.photo,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_draft() -> Draft {
        Draft {
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

    #[test]
    fn test_filled_draft_passes_validation() {
        assert!(filled_draft().validate().is_empty());
    }

    #[test]
    fn test_zero_string_counts_as_present() {
        let mut draft = filled_draft();
        draft.price = "0".to_string();
        draft.quantity = "0".to_string();
        assert!(draft.validate().is_empty());
    }

    #[test]
    fn test_missing_title_is_reported() {
        let mut draft = filled_draft();
        draft.title.clear();

        let errors = draft.validate();
        assert!(errors.has_error(FieldId::Title));
        assert_eq!(errors.message(FieldId::Title), Some("Title is required."));
        assert!(!errors.has_error(FieldId::Subtitle));
    }

    #[test]
    fn test_all_failures_reported_simultaneously() {
        let errors = Draft::blank().validate();
        for &field in FieldId::all() {
            assert_eq!(errors.has_error(field), field.is_required());
        }
    }

    #[test]
    fn test_optional_fields_never_fail() {
        let mut draft = filled_draft();
        draft.category.clear();
        draft.photo.clear();
        assert!(draft.validate().is_empty());
    }

    #[test]
    fn test_seeded_draft_copies_every_field() {
        let record = Record {
            id: 7,
            title: "Widget A".to_string(),
            subtitle: "Sturdy".to_string(),
            description: "lol".to_string(),
            price: "50".to_string(),
            quantity: "30".to_string(),
            category: "Tools".to_string(),
            photo: "photo.jpg".to_string(),
        };

        let draft = Draft::from_record(&record);
        assert_eq!(draft.id, 7);
        for &field in FieldId::all() {
            assert!(!draft.field(field).is_empty());
        }
        assert_eq!(draft.clone().into_record(), record);
    }

    #[test]
    fn test_blank_draft_is_empty_with_unassigned_id() {
        let draft = Draft::blank();
        assert_eq!(draft.id, 0);
        for &field in FieldId::all() {
            assert!(draft.field(field).is_empty());
        }
    }

    #[test]
    fn test_field_mut_edits_exactly_one_field() {
        let mut draft = filled_draft();
        draft.field_mut(FieldId::Price).push('9');

        let mut expected = filled_draft();
        expected.price = "59".to_string();
        assert_eq!(draft, expected);
    }
}
