//! Field-keyed validation error values.

use crate::model::record::EntityKind;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Field name → ordered validation messages.
///
/// Fields keep the order they first failed in, which follows rule
/// declaration order until [`FieldErrors::order_by`] applies form order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    entries: Vec<(&'static str, Vec<String>)>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one message to a field, after any earlier ones.
    pub fn push(&mut self, field: &'static str, message: impl Into<String>) {
        let message = message.into();
        match self.entries.iter_mut().find(|(name, _)| *name == field) {
            Some((_, messages)) => messages.push(message),
            None => self.entries.push((field, vec![message])),
        }
    }

    /// Messages for one field, if it failed.
    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|(name, _)| *name == field)
            .map(|(_, messages)| messages.as_slice())
    }

    /// First message for a field; what an inline form hint shows.
    pub fn first(&self, field: &str) -> Option<&str> {
        self.get(field)
            .and_then(|messages| messages.first())
            .map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.get(field).is_some()
    }

    /// Drops one field's messages. Returns whether anything was removed.
    pub fn clear_field(&mut self, field: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(name, _)| *name != field);
        self.entries.len() != before
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of failing fields.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Reorders fields to follow `order`. Fields missing from `order` go
    /// last, keeping their relative order.
    pub fn order_by(&mut self, order: &[&str]) {
        self.entries.sort_by_key(|(name, _)| {
            order
                .iter()
                .position(|field| field == name)
                .unwrap_or(order.len())
        });
    }

    /// Failing field names in display order.
    pub fn fields(&self) -> Vec<&'static str> {
        self.entries.iter().map(|(name, _)| *name).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &[String])> + '_ {
        self.entries
            .iter()
            .map(|(field, messages)| (*field, messages.as_slice()))
    }
}

impl Serialize for FieldErrors {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (field, messages) in &self.entries {
            map.serialize_entry(field, messages)?;
        }
        map.end()
    }
}

/// Rejected draft: the complete set of field errors for one entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    kind: EntityKind,
    errors: FieldErrors,
}

impl ValidationError {
    pub fn new(kind: EntityKind, errors: FieldErrors) -> Self {
        Self { kind, errors }
    }

    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn into_errors(self) -> FieldErrors {
        self.errors
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid {}: ", self.kind)?;
        let mut first = true;
        for (field, messages) in self.errors.iter() {
            if !first {
                f.write_str("; ")?;
            }
            first = false;
            write!(f, "{field}: {}", messages.join(", "))?;
        }
        Ok(())
    }
}

impl Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::{FieldErrors, ValidationError};
    use crate::model::record::EntityKind;

    #[test]
    fn clear_field_only_touches_that_field() {
        let mut errors = FieldErrors::new();
        errors.push("name", "Name is required");
        errors.push("phone", "Phone number is required");

        assert!(errors.clear_field("name"));
        assert!(!errors.clear_field("name"));
        assert_eq!(errors.fields(), vec!["phone"]);
    }

    #[test]
    fn display_lists_fields_and_messages() {
        let mut errors = FieldErrors::new();
        errors.push("number", "Number must be at least 10 digits");
        errors.push("number", "Number must be numeric");
        let err = ValidationError::new(EntityKind::EmergencyContact, errors);
        assert_eq!(
            err.to_string(),
            "invalid emergency_contact: number: Number must be at least 10 digits, Number must be numeric"
        );
    }

    #[test]
    fn order_by_follows_form_order() {
        let mut errors = FieldErrors::new();
        errors.push("relationship", "Please select a relationship");
        errors.push("extra", "not a form field");
        errors.push("name", "Name is required");
        errors.order_by(&["name", "phone", "relationship"]);
        assert_eq!(errors.fields(), vec!["name", "relationship", "extra"]);
    }

    #[test]
    fn serializes_as_plain_map() {
        let mut errors = FieldErrors::new();
        errors.push("title", "Title is required");
        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(json["title"][0], "Title is required");
    }
}
