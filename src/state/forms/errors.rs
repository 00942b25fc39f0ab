//! Per-field validation errors

use super::field::ContactField;
use std::collections::BTreeMap;
use thiserror::Error;

/// Why a single field failed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("value is required")]
    MissingRequired,
    #[error("value is not a valid email address")]
    InvalidEmailFormat,
}

impl ValidationError {
    /// Inline message shown under the field
    pub fn message(&self, field: ContactField) -> &'static str {
        match (self, field) {
            (Self::InvalidEmailFormat, _) => "Please enter a valid email address",
            (Self::MissingRequired, ContactField::Name) => "Name is required",
            (Self::MissingRequired, ContactField::Email) => "Email is required",
            (Self::MissingRequired, ContactField::Service) => "Please select a service",
            (Self::MissingRequired, ContactField::Message) => "Message is required",
        }
    }
}

/// Validation failures keyed by field. A field with no entry is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorSet {
    entries: BTreeMap<ContactField, ValidationError>,
}

impl ErrorSet {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn get(&self, field: ContactField) -> Option<ValidationError> {
        self.entries.get(&field).copied()
    }

    /// Message for the field, if it is currently invalid
    pub fn message(&self, field: ContactField) -> Option<&'static str> {
        self.get(field).map(|error| error.message(field))
    }

    pub fn iter(&self) -> impl Iterator<Item = (ContactField, ValidationError)> + '_ {
        self.entries.iter().map(|(field, error)| (*field, *error))
    }

    pub(crate) fn insert(&mut self, field: ContactField, error: ValidationError) {
        self.entries.insert(field, error);
    }

    pub(crate) fn remove(&mut self, field: ContactField) -> Option<ValidationError> {
        self.entries.remove(&field)
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_messages_match_field() {
        let cases = [
            (ContactField::Name, "Name is required"),
            (ContactField::Email, "Email is required"),
            (ContactField::Service, "Please select a service"),
            (ContactField::Message, "Message is required"),
        ];
        for (field, expected) in cases {
            assert_eq!(ValidationError::MissingRequired.message(field), expected);
        }
        assert_eq!(
            ValidationError::InvalidEmailFormat.message(ContactField::Email),
            "Please enter a valid email address"
        );
    }

    #[test]
    fn test_insert_and_remove() {
        let mut errors = ErrorSet::default();
        assert!(errors.is_empty());

        errors.insert(ContactField::Email, ValidationError::InvalidEmailFormat);
        assert_eq!(errors.len(), 1);
        assert!(errors.get(ContactField::Email).is_some());
        assert_eq!(
            errors.message(ContactField::Email),
            Some("Please enter a valid email address")
        );
        assert_eq!(errors.message(ContactField::Name), None);

        assert_eq!(
            errors.remove(ContactField::Email),
            Some(ValidationError::InvalidEmailFormat)
        );
        assert!(errors.is_empty());
    }

    #[test]
    fn test_iter_is_in_field_order() {
        let mut errors = ErrorSet::default();
        errors.insert(ContactField::Message, ValidationError::MissingRequired);
        errors.insert(ContactField::Name, ValidationError::MissingRequired);

        let fields: Vec<_> = errors.iter().map(|(field, _)| field).collect();
        assert_eq!(fields, vec![ContactField::Name, ContactField::Message]);
    }
}
