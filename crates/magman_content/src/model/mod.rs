//! Content domain model.
//!
//! # Responsibility
//! - Define the canonical article and comment records.
//! - Provide value semantics (equality, hashing, rendering) that ignore
//!   persistence identity.
//!
//! # Invariants
//! - Identifiers are optional and never take part in equality or hashing.
//! - An article always owns a (possibly empty) ordered comment list.

use std::fmt::{Display, Formatter};

pub mod article;
pub mod comment;

/// Renders an optional text field for diagnostics: `'value'` or `null`.
pub(crate) struct OptionalText<'a>(pub(crate) Option<&'a str>);

impl Display for OptionalText<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Some(value) => write!(f, "'{value}'"),
            None => f.write_str("null"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::OptionalText;

    #[test]
    fn optional_text_quotes_present_values() {
        assert_eq!(OptionalText(Some("x")).to_string(), "'x'");
        assert_eq!(OptionalText(Some("")).to_string(), "''");
    }

    #[test]
    fn optional_text_renders_absent_as_null() {
        assert_eq!(OptionalText(None).to_string(), "null");
    }
}
