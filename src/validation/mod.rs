//! Movie validation.
//!
//! [`MovieValidator`] runs the stock field constraints declared on
//! [`MovieInput`] and then every registered [`Rule`], collecting all failures
//! into a [`ValidationReport`]. Nothing short-circuits.

use chrono::{DateTime, NaiveDate, Utc};
use validator::Validate;

use crate::config::ValidationConfig;
use crate::models::MovieInput;

pub mod report;
pub mod rules;

pub use report::{RECORD_SCOPE, ValidationFailure, ValidationReport};
pub use rules::{FamilyMovie, RateWhenPublished, Rule, Vintage};

/// Inputs from outside the record that rules may depend on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationContext {
    pub now: DateTime<Utc>,
}

impl ValidationContext {
    #[must_use]
    pub const fn at(now: DateTime<Utc>) -> Self {
        Self { now }
    }

    /// Context pinned to the current wall-clock time.
    #[must_use]
    pub fn current() -> Self {
        Self::at(Utc::now())
    }

    #[must_use]
    pub fn today(&self) -> NaiveDate {
        self.now.date_naive()
    }
}

/// Where a rule's failures are reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldScope {
    Field(&'static str),
    Record,
}

impl FieldScope {
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Field(name) => name,
            Self::Record => RECORD_SCOPE,
        }
    }
}

pub struct MovieValidator {
    rules: Vec<(FieldScope, Box<dyn Rule>)>,
    default_price: f64,
}

impl MovieValidator {
    /// Validator with no cross-field rules registered.
    #[must_use]
    pub fn empty(default_price: f64) -> Self {
        Self {
            rules: Vec::new(),
            default_price,
        }
    }

    #[must_use]
    pub fn new(config: &ValidationConfig) -> Self {
        Self::empty(config.default_price)
            .with_rule(FieldScope::Field("genre"), FamilyMovie)
            .with_rule(
                FieldScope::Field("genre"),
                Vintage::new(config.vintage_cutoff_year),
            )
            .with_rule(FieldScope::Field("rating"), RateWhenPublished)
    }

    #[must_use]
    pub fn with_rule(mut self, scope: FieldScope, rule: impl Rule + 'static) -> Self {
        self.rules.push((scope, Box::new(rule)));
        self
    }

    /// Registered rules in evaluation order.
    pub fn rules(&self) -> impl Iterator<Item = (FieldScope, &str)> {
        self.rules.iter().map(|(scope, rule)| (*scope, rule.name()))
    }

    /// Fills in defaults for fields the client may omit.
    #[must_use]
    pub fn prepare(&self, mut input: MovieInput) -> MovieInput {
        if input.price.is_none() {
            input.price = Some(self.default_price);
        }
        input
    }

    #[must_use]
    pub fn validate(&self, input: &MovieInput, ctx: &ValidationContext) -> ValidationReport {
        let mut report = ValidationReport::new();

        if let Err(errors) = input.validate() {
            report.absorb(&errors);
        }

        for (scope, rule) in &self.rules {
            if let Err(failure) = rule.check(input, ctx) {
                tracing::debug!(
                    rule = rule.name(),
                    field = scope.key(),
                    message = %failure.message,
                    "Validation rule failed"
                );
                report.add(scope.key(), failure);
            }
        }

        report
    }

    /// Like [`Self::validate`] but returns the report as the error when invalid.
    pub fn validate_or_err(
        &self,
        input: &MovieInput,
        ctx: &ValidationContext,
    ) -> Result<(), ValidationReport> {
        let report = self.validate(input, ctx);
        if report.is_valid() {
            Ok(())
        } else {
            Err(report)
        }
    }
}

impl Default for MovieValidator {
    fn default() -> Self {
        Self::new(&ValidationConfig::default())
    }
}
