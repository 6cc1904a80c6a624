//! Decoded-record validation against the field specification tables.
//!
//! Validation never raises: every outcome, including a completely malformed
//! message, is communicated through the returned [`ValidationResult`].
//! Errors are blocking (the message is invalid); warnings are advisory.
//! Output ordering is deterministic for identical input: mandatory-field
//! checks in specification declaration order, then per-field checks in wire
//! appearance order, then the message-type semantic rules.

mod semantic;

use crate::wire::decode::decode;
use crate::wire::diag::{Diagnostic, codes};
use crate::wire::record::{FieldMap, ParsedMessage};
use mt_toolchain_spec_tables::SpecTables;
use serde::Serialize;

/// Shorthand for building a `BTreeMap<String, String>` context from
/// key-value pairs.
///
/// ```ignore
/// ctx!("tag" => tag, "value" => val, "expected" => codes)
/// ```
macro_rules! ctx {
    ($($k:expr => $v:expr),+ $(,)?) => {
        std::collections::BTreeMap::from([$(($k.into(), $v.into())),+])
    };
}
pub(crate) use ctx;

/// Result of validating a decoded message against the specification tables.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    /// `true` if no blocking errors were found (warnings are allowed).
    pub ok: bool,
    /// The message type the record was validated as.
    pub message_type: String,
    /// Blocking findings, in deterministic emission order.
    pub errors: Vec<Diagnostic>,
    /// Advisory findings, in deterministic emission order.
    pub warnings: Vec<Diagnostic>,
    /// The decoded field mapping the verdict applies to.
    pub fields: FieldMap,
}

/// Validate a decoded record.
///
/// An unknown (or absent) message type is a blocking error that
/// short-circuits all further checks: the result carries exactly that one
/// error and no warnings.
pub fn validate(message: &ParsedMessage, tables: &SpecTables) -> ValidationResult {
    let mut errors: Vec<Diagnostic> = Vec::new();
    let mut warnings: Vec<Diagnostic> = Vec::new();

    let Some(spec) = tables.spec_for(&message.message_type) else {
        let shown = if message.message_type.is_empty() {
            "(none)"
        } else {
            message.message_type.as_str()
        };
        errors.push(
            Diagnostic::error(
                codes::UNKNOWN_MESSAGE_TYPE,
                format!("unknown message type {shown}"),
                None,
            )
            .with_context(ctx!("messageType" => message.message_type.clone())),
        );
        return ValidationResult {
            ok: false,
            message_type: message.message_type.clone(),
            errors,
            warnings,
            fields: message.fields.clone(),
        };
    };

    // ── Mandatory fields, in specification declaration order ────────────
    for fs in spec.mandatory_fields() {
        let present = message
            .fields
            .get_str(&fs.tag)
            .is_some_and(|v| !v.is_empty());
        if !present {
            errors.push(
                Diagnostic::error(
                    codes::MISSING_MANDATORY,
                    format!("missing mandatory field {} ({})", fs.tag, fs.name),
                    Some(&fs.tag),
                )
                .with_context(ctx!("tag" => fs.tag.clone(), "name" => fs.name.clone())),
            );
        }
    }

    // ── Present fields, in wire appearance order ────────────────────────
    for (tag, value) in message.fields.iter() {
        match spec.field_spec(tag.as_str()) {
            None => {
                // Forward-compatibility policy: unknown tags never block.
                warnings.push(
                    Diagnostic::warn(
                        codes::UNKNOWN_FIELD,
                        format!("unknown field {} for {}", tag, spec.message_type),
                        Some(tag.as_str()),
                    )
                    .with_context(ctx!("tag" => tag.as_str())),
                );
            }
            Some(fs) => {
                if let Some(max) = fs.max_length {
                    let len = value.joined().chars().count();
                    if len > max {
                        errors.push(
                            Diagnostic::error(
                                codes::FIELD_TOO_LONG,
                                format!("field {} is {len} characters, maximum is {max}", fs.tag),
                                Some(&fs.tag),
                            )
                            .with_context(ctx!(
                                "tag" => fs.tag.clone(),
                                "length" => len.to_string(),
                                "max" => max.to_string(),
                            )),
                        );
                    }
                }
            }
        }
    }

    // ── Message-type-specific semantic rules ────────────────────────────
    semantic::apply(spec, &message.fields, &mut errors, &mut warnings);

    ValidationResult {
        ok: errors.is_empty(),
        message_type: message.message_type.clone(),
        errors,
        warnings,
        fields: message.fields.clone(),
    }
}

/// Decode raw message text and validate the result.
pub fn validate_str(input: &str, tables: &SpecTables) -> ValidationResult {
    validate(&decode(input), tables)
}
