//! Validation System - Rule/Policy Separation
//!
//! Rules produce structured violations.
//! Policy: errors block derivation, warnings are only reported.

use serde::{Deserialize, Serialize};
use crate::form::FormInput;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ViolationSeverity {
    Error,
    Warning,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationViolation {
    pub rule: String,
    pub field: String,
    pub severity: ViolationSeverity,
    pub message: String,
    pub remediation: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub violations: Vec<ValidationViolation>,
}

impl ValidationResult {
    pub fn from_violations(violations: Vec<ValidationViolation>) -> Self {
        let valid = !violations.iter().any(|v| v.severity == ViolationSeverity::Error);
        Self { valid, violations }
    }

    pub fn has_errors(&self) -> bool {
        !self.valid
    }

    pub fn errors(&self) -> impl Iterator<Item = &ValidationViolation> {
        self.violations.iter().filter(|v| v.severity == ViolationSeverity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &ValidationViolation> {
        self.violations.iter().filter(|v| v.severity == ViolationSeverity::Warning)
    }
}

/// Validation rule trait - produces violations
pub trait ValidationRule {
    fn name(&self) -> &'static str;
    fn validate(&self, input: &FormInput) -> Vec<ValidationViolation>;
}

// --- Concrete Rules ---

/// Product name, audience and features must be filled in.
///
/// Mirrors the builder form: only a truly empty value blocks. A value made
/// of whitespace alone passes but is flagged.
pub struct RequiredFieldRule;

impl RequiredFieldRule {
    fn fields(input: &FormInput) -> [(&'static str, &str); 3] {
        [
            ("productName", input.product_name.as_str()),
            ("targetAudience", input.target_audience.as_str()),
            ("keyFeatures", input.key_features.as_str()),
        ]
    }
}

impl ValidationRule for RequiredFieldRule {
    fn name(&self) -> &'static str { "required_field" }

    fn validate(&self, input: &FormInput) -> Vec<ValidationViolation> {
        let mut violations = vec![];

        for (field, value) in Self::fields(input) {
            if value.is_empty() {
                violations.push(ValidationViolation {
                    rule: self.name().to_string(),
                    field: field.to_string(),
                    severity: ViolationSeverity::Error,
                    message: format!("{} is required", field),
                    remediation: vec!["Fill in all required fields to generate your page".to_string()],
                });
            } else if value.trim().is_empty() {
                violations.push(ValidationViolation {
                    rule: self.name().to_string(),
                    field: field.to_string(),
                    severity: ViolationSeverity::Warning,
                    message: format!("{} contains only whitespace", field),
                    remediation: vec![format!("Enter a meaningful value for {}", field)],
                });
            }
        }

        violations
    }
}

/// Brand colors are expected as `#rgb` or `#rrggbb`.
///
/// Other CSS color tokens still export, so this only warns.
pub struct BrandColorRule;

pub fn is_hex_color(value: &str) -> bool {
    match value.strip_prefix('#') {
        Some(digits) => {
            (digits.len() == 3 || digits.len() == 6)
                && digits.chars().all(|c| c.is_ascii_hexdigit())
        }
        None => false,
    }
}

impl ValidationRule for BrandColorRule {
    fn name(&self) -> &'static str { "brand_color" }

    fn validate(&self, input: &FormInput) -> Vec<ValidationViolation> {
        [
            ("brandColorPrimary", input.brand_color_primary.as_str()),
            ("brandColorSecondary", input.brand_color_secondary.as_str()),
        ]
        .into_iter()
        .filter(|(_, value)| !is_hex_color(value))
        .map(|(field, value)| ValidationViolation {
            rule: self.name().to_string(),
            field: field.to_string(),
            severity: ViolationSeverity::Warning,
            message: format!("'{}' is not a hex color", value),
            remediation: vec!["Use a #rrggbb value from the color picker".to_string()],
        })
        .collect()
    }
}

/// Validator runs every rule and applies the blocking policy
pub struct Validator {
    rules: Vec<Box<dyn ValidationRule>>,
}

impl Validator {
    pub fn new() -> Self {
        Self {
            rules: vec![
                Box::new(RequiredFieldRule),
                Box::new(BrandColorRule),
            ],
        }
    }

    pub fn validate(&self, input: &FormInput) -> ValidationResult {
        let violations = self.rules.iter()
            .flat_map(|rule| rule.validate(input))
            .collect();

        ValidationResult::from_violations(violations)
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}
