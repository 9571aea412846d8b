//! Declarative per-entity validation.
//!
//! # Responsibility
//! - Evaluate an entity's ordered rule schema against a draft.
//! - Report every violated rule, grouped by field, as a typed error value.
//!
//! # Invariants
//! - Validation is a pure function of the draft and the context.
//! - All rules are evaluated; one field may collect several messages, kept in
//!   rule declaration order.
//! - Fields with no violation never appear in the error map.
//! - Error keys are a subset of the draft's `FIELDS` and follow their order.
//! - On success the normalized value equals the draft field-for-field.

mod errors;
pub mod rules;

pub use errors::{FieldErrors, ValidationError};

use crate::model::record::{Draft, RecordId};
use std::collections::BTreeSet;

/// Read-only facts a validator may consult beyond the draft itself.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationContext {
    contact_ids: BTreeSet<RecordId>,
}

impl ValidationContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a context that knows the given live contact ids.
    pub fn with_contacts(ids: impl IntoIterator<Item = RecordId>) -> Self {
        Self {
            contact_ids: ids.into_iter().collect(),
        }
    }

    /// Returns whether `id` references a live contact.
    pub fn has_contact(&self, id: RecordId) -> bool {
        self.contact_ids.contains(&id)
    }
}

/// One field constraint: `check` returns `true` when the draft satisfies it.
pub struct Rule<D: 'static> {
    pub field: &'static str,
    pub message: &'static str,
    pub check: fn(&D, &ValidationContext) -> bool,
}

/// Ordered rule list for one draft type.
pub struct Schema<D: 'static> {
    rules: &'static [Rule<D>],
}

impl<D: 'static> Schema<D> {
    pub const fn new(rules: &'static [Rule<D>]) -> Self {
        Self { rules }
    }

    /// Runs every rule and collects the messages of the ones that fail.
    pub fn evaluate(&self, draft: &D, ctx: &ValidationContext) -> FieldErrors {
        let mut errors = FieldErrors::new();
        for rule in self.rules {
            if !(rule.check)(draft, ctx) {
                errors.push(rule.field, rule.message);
            }
        }
        errors
    }

    /// Distinct field names the schema constrains, in first-declared order.
    pub fn fields(&self) -> Vec<&'static str> {
        let mut fields = Vec::new();
        for rule in self.rules {
            if !fields.contains(&rule.field) {
                fields.push(rule.field);
            }
        }
        fields
    }
}

/// Validates a draft against its entity schema.
///
/// Returns a copy of the draft on success, or every field error on failure.
pub fn validate<D: Draft>(draft: &D, ctx: &ValidationContext) -> Result<D, ValidationError> {
    let mut errors = D::schema().evaluate(draft, ctx);
    debug_assert!(
        errors.fields().iter().all(|field| D::FIELDS.contains(field)),
        "{} schema reports a field outside its draft",
        D::KIND
    );
    errors.order_by(D::FIELDS);
    if errors.is_empty() {
        Ok(draft.clone())
    } else {
        Err(ValidationError::new(D::KIND, errors))
    }
}

#[cfg(test)]
mod tests {
    use super::{Rule, Schema, ValidationContext};

    struct Pair {
        left: &'static str,
        right: &'static str,
    }

    fn left_present(pair: &Pair, _: &ValidationContext) -> bool {
        !pair.left.is_empty()
    }

    fn right_present(pair: &Pair, _: &ValidationContext) -> bool {
        !pair.right.is_empty()
    }

    fn left_short(pair: &Pair, _: &ValidationContext) -> bool {
        pair.left.len() < 3
    }

    static PAIR_SCHEMA: Schema<Pair> = Schema::new(&[
        Rule {
            field: "left",
            message: "left is required",
            check: left_present,
        },
        Rule {
            field: "right",
            message: "right is required",
            check: right_present,
        },
        Rule {
            field: "left",
            message: "left must be short",
            check: left_short,
        },
    ]);

    #[test]
    fn evaluate_keeps_declaration_order_per_field() {
        let errors = PAIR_SCHEMA.evaluate(
            &Pair {
                left: "",
                right: "ok",
            },
            &ValidationContext::new(),
        );
        assert_eq!(errors.fields(), vec!["left"]);
        assert_eq!(errors.get("left"), Some(&["left is required".to_string()][..]));

        let errors = PAIR_SCHEMA.evaluate(
            &Pair {
                left: "long",
                right: "",
            },
            &ValidationContext::new(),
        );
        assert_eq!(errors.fields(), vec!["right", "left"]);
        assert_eq!(errors.first("left"), Some("left must be short"));
    }

    #[test]
    fn schema_fields_are_deduplicated() {
        assert_eq!(PAIR_SCHEMA.fields(), vec!["left", "right"]);
    }

    #[test]
    fn context_reports_known_contacts() {
        let ctx = ValidationContext::with_contacts([1, 3]);
        assert!(ctx.has_contact(3));
        assert!(!ctx.has_contact(2));
        assert!(!ValidationContext::new().has_contact(1));
    }
}
