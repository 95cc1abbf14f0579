//! Caller-supplied interaction selection criteria.
//!
//! A criterion is chosen at construction time as either a literal or a
//! pattern; comparison code never inspects which variant it holds beyond
//! calling `satisfies`. This is the sole comparison primitive behind both
//! `find_interactions` and `find_interaction`.

use std::collections::BTreeMap;
use std::fmt;

use regex::Regex;

use crate::types::Interaction;

#[derive(Debug, Clone)]
/// Enumerates supported `CriterionValue` values.
pub enum CriterionValue {
    Literal(String),
    Pattern(Regex),
}

impl CriterionValue {
    pub fn satisfies(&self, attribute: &str) -> bool {
        match self {
            Self::Literal(expected) => attribute == expected,
            Self::Pattern(pattern) => pattern.is_match(attribute),
        }
    }
}

impl fmt::Display for CriterionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(value) => write!(f, "\"{value}\""),
            Self::Pattern(pattern) => write!(f, "/{}/", pattern.as_str()),
        }
    }
}

#[derive(Debug, Clone, Default)]
/// Mapping from interaction field name to the criterion it must satisfy.
/// Renders as `{field: value, ...}` in diagnostics, fields in sorted order.
pub struct Criteria {
    fields: BTreeMap<String, CriterionValue>,
}

impl Criteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_description(self, value: impl Into<String>) -> Self {
        self.with_literal("description", value)
    }

    pub fn with_provider_state(self, value: impl Into<String>) -> Self {
        self.with_literal("provider_state", value)
    }

    pub fn with_literal(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields
            .insert(field.into(), CriterionValue::Literal(value.into()));
        self
    }

    pub fn with_pattern(mut self, field: impl Into<String>, pattern: Regex) -> Self {
        self.fields
            .insert(field.into(), CriterionValue::Pattern(pattern));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &CriterionValue)> {
        self.fields
            .iter()
            .map(|(field, criterion)| (field.as_str(), criterion))
    }
}

impl fmt::Display for Criteria {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (index, (field, criterion)) in self.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{field}: {criterion}")?;
        }
        write!(f, "}}")
    }
}

impl Interaction {
    fn attribute(&self, field: &str) -> Option<&str> {
        match field {
            "description" => self.description.as_deref(),
            "provider_state" => self.provider_state.as_deref(),
            _ => None,
        }
    }

    /// True when every criterion is satisfied by the corresponding attribute.
    /// An interaction missing an attribute referenced by criteria never
    /// matches.
    pub fn matches_criteria(&self, criteria: &Criteria) -> bool {
        criteria.iter().all(|(field, criterion)| {
            self.attribute(field)
                .map(|attribute| criterion.satisfies(attribute))
                .unwrap_or(false)
        })
    }
}
