//! Diagnostics for the MT toolchain.
//!
//! Provides the [`Diagnostic`] and [`Severity`] types used to report errors,
//! warnings, and informational messages from the validator and generator.
//! Diagnostic codes are defined in the [`codes`] module.
//!
//! MT diagnostics are addressed by **field tag** rather than byte offset:
//! the text-block grammar is line-oriented and validation runs over the
//! decoded record, so a tag like `"32A"` is the natural anchor for a finding.

#![warn(missing_docs)]

/// Diagnostic ID constants for the MT toolchain.
pub mod codes;

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::BTreeMap;

/// Severity level for a diagnostic message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum Severity {
    /// Hard error — the message is invalid.
    Error,
    /// Warning — the message may be rejected or misinterpreted downstream.
    Warn,
    /// Informational note.
    Info,
}

/// A diagnostic message produced by the validator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Unique diagnostic code (e.g., `"MT1101"`).
    pub id: Cow<'static, str>,
    /// Severity level.
    pub severity: Severity,
    /// Human-readable diagnostic message.
    pub message: String,
    /// The field tag this diagnostic relates to (e.g., `"32A"`), when the
    /// finding is anchored to a single field. Serialized only when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    /// Machine-readable context for tooling. Keys and values are free-form
    /// strings. Absent when no context is applicable.
    ///
    /// Uses `BTreeMap` for deterministic key ordering in serialized output.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<BTreeMap<String, String>>,
}

impl Diagnostic {
    /// Create a diagnostic with the given fields.
    pub fn new(
        id: impl Into<Cow<'static, str>>,
        severity: Severity,
        message: impl Into<String>,
        tag: Option<&str>,
    ) -> Self {
        Self {
            id: id.into(),
            severity,
            message: message.into(),
            tag: tag.map(str::to_string),
            context: None,
        }
    }

    /// Shorthand for an `Error` diagnostic.
    pub fn error(
        id: impl Into<Cow<'static, str>>,
        message: impl Into<String>,
        tag: Option<&str>,
    ) -> Self {
        Self::new(id, Severity::Error, message, tag)
    }

    /// Shorthand for a `Warn` diagnostic.
    pub fn warn(
        id: impl Into<Cow<'static, str>>,
        message: impl Into<String>,
        tag: Option<&str>,
    ) -> Self {
        Self::new(id, Severity::Warn, message, tag)
    }

    /// Shorthand for an `Info` diagnostic.
    pub fn info(
        id: impl Into<Cow<'static, str>>,
        message: impl Into<String>,
        tag: Option<&str>,
    ) -> Self {
        Self::new(id, Severity::Info, message, tag)
    }

    /// Attach machine-readable context metadata (builder pattern).
    ///
    /// Context is a set of key-value string pairs providing structured
    /// details about the diagnostic for tooling, filtering, and programmatic
    /// consumption. Keys are short descriptors like `"tag"`, `"value"`,
    /// `"expected"`, etc.
    pub fn with_context(mut self, ctx: BTreeMap<String, String>) -> Self {
        self.context = Some(ctx);
        self
    }

    /// Returns the human-readable explanation for this diagnostic's code,
    /// if available.
    pub fn explain(&self) -> Option<&'static str> {
        explain(&self.id)
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warn => write!(f, "warn"),
            Severity::Info => write!(f, "info"),
        }
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.tag {
            Some(tag) => write!(
                f,
                "{}[{}]: {} (field {})",
                self.severity, self.id, self.message, tag
            ),
            None => write!(f, "{}[{}]: {}", self.severity, self.id, self.message),
        }
    }
}

/// Returns the human-readable explanation for a diagnostic code, if known.
pub fn explain(id: &str) -> Option<&'static str> {
    Some(match id {
        codes::UNKNOWN_MESSAGE_TYPE => {
            "The application header names a message type with no field \
             specification in the registry (or the header is missing \
             entirely). Validation cannot proceed without a field catalogue, \
             so this finding short-circuits all further checks."
        }
        codes::MISSING_MANDATORY => {
            "The message type's specification marks this field as mandatory, \
             but the text block contains no value for it (the tag is absent, \
             or present with empty content)."
        }
        codes::FIELD_TOO_LONG => {
            "The field's value, with continuation lines joined by a single \
             line break, exceeds the maximum length given in the field \
             specification."
        }
        codes::MALFORMED_AMOUNT => {
            "A value-date/currency/amount field must be a 6-digit date, a \
             3-letter currency code, and an amount using a comma as the \
             decimal separator (e.g. 240101USD100,00)."
        }
        codes::INVALID_CODE => {
            "The field carries an enumerated code (such as a details-of-charges \
             or bank-operation code) whose value is not a member of the fixed \
             code set for that field."
        }
        codes::REQUIRED_ONE_OF => {
            "The message type requires at least one member of a group of \
             mutually exclusive field encodings (for example the beneficiary \
             options), and none is present."
        }
        codes::UNKNOWN_FIELD => {
            "The tag does not appear in the message type's field \
             specification. Unknown tags are advisory, never blocking, so \
             that messages using newer catalogue fields still validate."
        }
        codes::BALANCE_FORMAT => {
            "A balance field should be a debit/credit indicator, a 6-digit \
             date, a 3-letter currency code, and a comma-decimal amount \
             (e.g. C240131EUR4500,12). Balance sub-validation is advisory."
        }
        codes::RECOMMENDED_ONE_OF => {
            "The message type recommends at least one member of a group of \
             mutually exclusive field encodings (for example the ordering \
             customer options), and none is present."
        }
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── Severity Display ────────────────────────────────────────────────

    #[test]
    fn severity_display() {
        assert_eq!(format!("{}", Severity::Error), "error");
        assert_eq!(format!("{}", Severity::Warn), "warn");
        assert_eq!(format!("{}", Severity::Info), "info");
    }

    // ── Diagnostic constructors ─────────────────────────────────────────

    #[test]
    fn diagnostic_error_constructor() {
        let d = Diagnostic::error(codes::MISSING_MANDATORY, "missing field", Some("20"));
        assert_eq!(d.id, "MT1101");
        assert_eq!(d.severity, Severity::Error);
        assert_eq!(d.message, "missing field");
        assert_eq!(d.tag.as_deref(), Some("20"));
    }

    #[test]
    fn diagnostic_warn_constructor() {
        let d = Diagnostic::warn(codes::UNKNOWN_FIELD, "unknown tag", Some("99Z"));
        assert_eq!(d.severity, Severity::Warn);
        assert_eq!(d.tag.as_deref(), Some("99Z"));
    }

    #[test]
    fn diagnostic_info_constructor() {
        let d = Diagnostic::info("CUSTOM", "custom message", None);
        assert_eq!(d.severity, Severity::Info);
        assert_eq!(d.id, "CUSTOM");
        assert!(d.tag.is_none());
    }

    // ── Diagnostic Display ──────────────────────────────────────────────

    #[test]
    fn diagnostic_display_with_tag() {
        let d = Diagnostic::error(codes::FIELD_TOO_LONG, "value too long", Some("70"));
        assert_eq!(
            format!("{}", d),
            "error[MT1102]: value too long (field 70)"
        );
    }

    #[test]
    fn diagnostic_display_without_tag() {
        let d = Diagnostic::error(codes::UNKNOWN_MESSAGE_TYPE, "unknown message type MT999", None);
        assert_eq!(
            format!("{}", d),
            "error[MT1001]: unknown message type MT999"
        );
    }

    // ── explain() exhaustiveness ────────────────────────────────────────

    #[test]
    fn all_codes_have_explanations() {
        let all = [
            codes::UNKNOWN_MESSAGE_TYPE,
            codes::MISSING_MANDATORY,
            codes::FIELD_TOO_LONG,
            codes::MALFORMED_AMOUNT,
            codes::INVALID_CODE,
            codes::REQUIRED_ONE_OF,
            codes::UNKNOWN_FIELD,
            codes::BALANCE_FORMAT,
            codes::RECOMMENDED_ONE_OF,
        ];
        for code in &all {
            assert!(
                explain(code).is_some(),
                "diagnostic code {code} has no explain() entry"
            );
        }
    }

    #[test]
    fn explain_unknown_code() {
        assert!(explain("MT9999").is_none());
    }

    // ── Serde round-trip ────────────────────────────────────────────────

    #[test]
    fn diagnostic_serde_roundtrip() {
        let d = Diagnostic::error(codes::MISSING_MANDATORY, "test message", Some("23B"));
        let json = serde_json::to_string(&d).unwrap();
        let d2: Diagnostic = serde_json::from_str(&json).unwrap();
        assert_eq!(d, d2);
    }

    #[test]
    fn diagnostic_serde_omits_none_fields() {
        let d = Diagnostic::error(codes::UNKNOWN_MESSAGE_TYPE, "test", None);
        let json = serde_json::to_string(&d).unwrap();
        assert!(!json.contains("\"tag\""), "None tag should be omitted: {json}");
        assert!(
            !json.contains("context"),
            "None context should be omitted: {json}"
        );
    }

    // ── Context ─────────────────────────────────────────────────────────

    #[test]
    fn diagnostic_with_context() {
        let d = Diagnostic::error(codes::INVALID_CODE, "bad charge code", Some("71A"))
            .with_context(BTreeMap::from([
                ("value".into(), "XXX".into()),
                ("expected".into(), "OUR|SHA|BEN".into()),
            ]));
        let ctx = d.context.as_ref().unwrap();
        assert_eq!(ctx.get("value").unwrap(), "XXX");
        assert_eq!(ctx.get("expected").unwrap(), "OUR|SHA|BEN");
    }

    #[test]
    fn diagnostic_context_deterministic_order() {
        let d = Diagnostic::error(codes::INVALID_CODE, "test", None).with_context(BTreeMap::from([
            ("z_last".into(), "1".into()),
            ("a_first".into(), "2".into()),
        ]));
        let json = serde_json::to_string(&d).unwrap();
        let a_pos = json.find("a_first").unwrap();
        let z_pos = json.find("z_last").unwrap();
        assert!(
            a_pos < z_pos,
            "BTreeMap should serialize in alphabetical key order: {json}"
        );
    }
}
