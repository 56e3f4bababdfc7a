use std::fmt;

use serde_json::{Map, Value};
use serde::Serialize;

use super::domain::{BusinessTenure, ExperienceLevel, RevenueBracket, Submission};

/// How forgiving the decoder is about optional fields. Enum membership is
/// enforced in both modes; leniency only governs defaulting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaMode {
    Strict,
    Lenient,
}

impl SchemaMode {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "strict" => Some(Self::Strict),
            "lenient" => Some(Self::Lenient),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Strict => "strict",
            Self::Lenient => "lenient",
        }
    }
}

/// Schema dial backing the decoder.
#[derive(Debug, Clone)]
pub struct SchemaPolicy {
    mode: SchemaMode,
}

impl SchemaPolicy {
    pub fn new(mode: SchemaMode) -> Self {
        Self { mode }
    }

    pub fn strict() -> Self {
        Self::new(SchemaMode::Strict)
    }

    pub fn lenient() -> Self {
        Self::new(SchemaMode::Lenient)
    }

    pub fn mode(&self) -> SchemaMode {
        self.mode
    }
}

impl Default for SchemaPolicy {
    fn default() -> Self {
        Self::strict()
    }
}

/// A single schema violation, reported to the caller field by field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: &'static str,
    pub reason: String,
}

/// Every violation found in one decoding pass. The decoder keeps going after
/// the first failure so callers see the full list at once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationReport {
    violations: Vec<FieldViolation>,
}

impl ValidationReport {
    pub fn single(field: &'static str, reason: impl Into<String>) -> Self {
        let mut report = Self::default();
        report.push(field, reason);
        report
    }

    pub fn violations(&self) -> &[FieldViolation] {
        &self.violations
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    fn push(&mut self, field: &'static str, reason: impl Into<String>) {
        self.violations.push(FieldViolation {
            field,
            reason: reason.into(),
        });
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields: Vec<&str> = self
            .violations
            .iter()
            .map(|violation| violation.field)
            .collect();
        write!(f, "{} violation(s) in [{}]", fields.len(), fields.join(", "))
    }
}

/// Decoder failure: either the body was not JSON at all, or the JSON did not
/// match the submission schema.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("request body is not valid JSON: {source}")]
    Malformed {
        #[from]
        source: serde_json::Error,
    },
    #[error("submission failed schema validation: {0}")]
    Schema(ValidationReport),
}

impl DecodeError {
    /// Field-level view for response composition. Malformed bodies surface as
    /// a single whole-body violation.
    pub fn into_report(self) -> ValidationReport {
        match self {
            DecodeError::Malformed { .. } => {
                ValidationReport::single("body", "request body is not valid JSON")
            }
            DecodeError::Schema(report) => report,
        }
    }
}

/// Turns a raw request body into a validated [`Submission`] under a schema
/// policy. No side effects; safe to share across requests.
#[derive(Debug, Clone, Default)]
pub struct SubmissionDecoder {
    policy: SchemaPolicy,
}

impl SubmissionDecoder {
    pub fn with_policy(policy: SchemaPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &SchemaPolicy {
        &self.policy
    }

    pub fn decode(&self, body: &[u8]) -> Result<Submission, DecodeError> {
        let value: Value = serde_json::from_slice(body)?;
        let Value::Object(fields) = value else {
            return Err(DecodeError::Schema(ValidationReport::single(
                "body",
                "expected a JSON object",
            )));
        };

        let mut report = ValidationReport::default();
        let mode = self.policy.mode();

        let name = match required_text(&fields, "name", &mut report) {
            Some(value) if value.is_empty() => {
                report.push("name", "must not be empty");
                None
            }
            other => other,
        };

        let email = match required_text(&fields, "email", &mut report) {
            Some(value) if !is_valid_email(&value) => {
                report.push("email", "must be a valid email address");
                None
            }
            other => other,
        };

        let business_name = match mode {
            SchemaMode::Strict => match required_text(&fields, "businessName", &mut report) {
                Some(value) if value.is_empty() => {
                    report.push("businessName", "must not be empty");
                    None
                }
                other => other,
            },
            SchemaMode::Lenient => optional_text(&fields, "businessName", &mut report),
        };

        let business_description = enum_field(
            &fields,
            "businessDescription",
            ExperienceLevel::parse,
            "is not a recognized experience level",
            &mut report,
        );

        let business_years = enum_field(
            &fields,
            "businessYears",
            BusinessTenure::parse,
            "is not a recognized tenure bucket",
            &mut report,
        );

        let annual_revenue = if mode == SchemaMode::Lenient && is_absent(&fields, "annualRevenue")
        {
            Some(RevenueBracket::NotSpecified)
        } else {
            enum_field(
                &fields,
                "annualRevenue",
                RevenueBracket::parse,
                "is not a recognized revenue bracket",
                &mut report,
            )
        };

        let open_to_contact = match fields.get("openToContact") {
            Some(Value::Bool(flag)) => Some(*flag),
            Some(Value::Null) | None => match mode {
                SchemaMode::Lenient => Some(true),
                SchemaMode::Strict => {
                    report.push("openToContact", "is required");
                    None
                }
            },
            Some(_) => {
                report.push("openToContact", "must be a boolean");
                None
            }
        };

        let phone = optional_text(&fields, "phone", &mut report);
        let biggest_challenge = optional_text(&fields, "biggestChallenge", &mut report);

        if !report.is_empty() {
            return Err(DecodeError::Schema(report));
        }

        match (
            name,
            email,
            business_description,
            business_years,
            annual_revenue,
            open_to_contact,
        ) {
            (
                Some(name),
                Some(email),
                Some(business_description),
                Some(business_years),
                Some(annual_revenue),
                Some(open_to_contact),
            ) => Ok(Submission {
                name,
                email,
                business_name,
                business_description,
                business_years,
                annual_revenue,
                phone,
                biggest_challenge,
                open_to_contact,
            }),
            _ => Err(DecodeError::Schema(ValidationReport::single(
                "body",
                "incomplete submission",
            ))),
        }
    }
}

fn is_absent(fields: &Map<String, Value>, field: &str) -> bool {
    matches!(fields.get(field), None | Some(Value::Null))
}

fn required_text(
    fields: &Map<String, Value>,
    field: &'static str,
    report: &mut ValidationReport,
) -> Option<String> {
    match fields.get(field) {
        Some(Value::String(value)) => Some(value.clone()),
        Some(Value::Null) | None => {
            report.push(field, "is required");
            None
        }
        Some(_) => {
            report.push(field, "must be a string");
            None
        }
    }
}

fn optional_text(
    fields: &Map<String, Value>,
    field: &'static str,
    report: &mut ValidationReport,
) -> Option<String> {
    match fields.get(field) {
        Some(Value::String(value)) => Some(value.clone()),
        Some(Value::Null) | None => None,
        Some(_) => {
            report.push(field, "must be a string");
            None
        }
    }
}

fn enum_field<T>(
    fields: &Map<String, Value>,
    field: &'static str,
    parse: fn(&str) -> Option<T>,
    out_of_set_reason: &'static str,
    report: &mut ValidationReport,
) -> Option<T> {
    match fields.get(field) {
        Some(Value::String(tag)) => match parse(tag) {
            Some(value) => Some(value),
            None => {
                report.push(field, out_of_set_reason);
                None
            }
        },
        Some(Value::Null) | None => {
            report.push(field, "is required");
            None
        }
        Some(_) => {
            report.push(field, "must be a string");
            None
        }
    }
}

fn is_valid_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };

    !local.is_empty()
        && !domain.is_empty()
        && !domain.contains('@')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && domain.contains('.')
        && !value.chars().any(char::is_whitespace)
}
