//! Message-type-specific semantic rules.
//!
//! The registry pass in [`super::validate`] is table-driven; the rules here
//! are the hand-written per-type checks: value sub-grammars for amount and
//! balance fields, fixed code sets, and cross-field one-of groups.

use super::ctx;
use crate::wire::diag::{Diagnostic, codes};
use crate::wire::record::FieldMap;
use mt_toolchain_spec_tables::{CHARGE_CODES, MessageSpec};

/// Mutually exclusive beneficiary customer encodings (MT103).
const BENEFICIARY_TAGS: &[&str] = &["59", "59A", "59F"];
/// Mutually exclusive ordering customer encodings (MT103, recommended).
const ORDERING_CUSTOMER_TAGS: &[&str] = &["50A", "50F", "50K"];
/// Mutually exclusive beneficiary institution encodings (MT202).
const BENEFICIARY_INSTITUTION_TAGS: &[&str] = &["58A", "58D"];
/// Opening balance variants (statements).
const OPENING_BALANCE_TAGS: &[&str] = &["60F", "60M"];
/// Closing balance variants (statements).
const CLOSING_BALANCE_TAGS: &[&str] = &["62F", "62M"];
/// Every balance-shaped field a statement may carry.
const BALANCE_TAGS: &[&str] = &["60F", "60M", "62F", "62M", "64", "65"];

/// Apply the semantic rules for `spec`'s message type.
pub(super) fn apply(
    spec: &MessageSpec,
    fields: &FieldMap,
    errors: &mut Vec<Diagnostic>,
    warnings: &mut Vec<Diagnostic>,
) {
    match spec.message_type.as_str() {
        "MT103" => {
            check_value_date_amount(fields, "32A", errors);
            check_charge_code(fields, errors);
            require_one_of(fields, BENEFICIARY_TAGS, "beneficiary customer", errors);
            recommend_one_of(fields, ORDERING_CUSTOMER_TAGS, "ordering customer", warnings);
        }
        "MT202" => {
            check_value_date_amount(fields, "32A", errors);
            require_one_of(
                fields,
                BENEFICIARY_INSTITUTION_TAGS,
                "beneficiary institution",
                errors,
            );
        }
        "MT940" | "MT950" => {
            require_one_of(fields, OPENING_BALANCE_TAGS, "opening balance", errors);
            require_one_of(fields, CLOSING_BALANCE_TAGS, "closing balance", errors);
            check_balance_shapes(fields, warnings);
        }
        _ => {}
    }
}

// ── One-of groups ───────────────────────────────────────────────────────

fn has_any(fields: &FieldMap, tags: &[&str]) -> bool {
    tags.iter()
        .any(|t| fields.get_str(t).is_some_and(|v| !v.is_empty()))
}

fn require_one_of(fields: &FieldMap, tags: &[&str], group: &str, errors: &mut Vec<Diagnostic>) {
    if !has_any(fields, tags) {
        errors.push(
            Diagnostic::error(
                codes::REQUIRED_ONE_OF,
                format!("no {group} field present: expected one of {}", tags.join(", ")),
                None,
            )
            .with_context(ctx!("group" => group, "tags" => tags.join("|"))),
        );
    }
}

fn recommend_one_of(
    fields: &FieldMap,
    tags: &[&str],
    group: &str,
    warnings: &mut Vec<Diagnostic>,
) {
    if !has_any(fields, tags) {
        warnings.push(
            Diagnostic::warn(
                codes::RECOMMENDED_ONE_OF,
                format!("no {group} field present: one of {} is recommended", tags.join(", ")),
                None,
            )
            .with_context(ctx!("group" => group, "tags" => tags.join("|"))),
        );
    }
}

// ── Value sub-grammars ──────────────────────────────────────────────────

/// A value-date/currency/amount field: 6 digits, 3 uppercase letters, then
/// a comma-decimal amount (blocking when violated).
fn check_value_date_amount(fields: &FieldMap, tag: &str, errors: &mut Vec<Diagnostic>) {
    let Some(value) = fields.get_str(tag) else {
        return;
    };
    let joined = value.joined();
    // Emptiness is the mandatory pass's finding, not a shape violation.
    if joined.is_empty() || is_value_date_amount(&joined) {
        return;
    }
    errors.push(
        Diagnostic::error(
            codes::MALFORMED_AMOUNT,
            format!("field {tag} must be date (6 digits), currency (3 letters), amount with comma decimal"),
            Some(tag),
        )
        .with_context(ctx!("tag" => tag, "value" => joined.into_owned())),
    );
}

/// Details-of-charges code must be a member of the fixed code set.
fn check_charge_code(fields: &FieldMap, errors: &mut Vec<Diagnostic>) {
    let Some(value) = fields.get_str("71A") else {
        return;
    };
    let joined = value.joined();
    if joined.is_empty() || CHARGE_CODES.contains(&joined.as_ref()) {
        return;
    }
    errors.push(
        Diagnostic::error(
            codes::INVALID_CODE,
            format!("invalid details-of-charges code {joined:?}"),
            Some("71A"),
        )
        .with_context(ctx!(
            "tag" => "71A",
            "value" => joined.into_owned(),
            "expected" => CHARGE_CODES.join("|"),
        )),
    );
}

/// Balance sub-validation is advisory: a present balance field that does not
/// match the debit/credit + date + currency + amount shape warns, never
/// blocks.
fn check_balance_shapes(fields: &FieldMap, warnings: &mut Vec<Diagnostic>) {
    for tag in BALANCE_TAGS {
        let Some(value) = fields.get_str(tag) else {
            continue;
        };
        // Forward available balances may repeat through a multi-line value;
        // every line must match on its own.
        let malformed = match value {
            crate::wire::record::FieldValue::Single(s) => !s.is_empty() && !is_balance(s),
            crate::wire::record::FieldValue::Lines(lines) => lines
                .iter()
                .any(|line| !line.is_empty() && !is_balance(line)),
        };
        if malformed {
            warnings.push(
                Diagnostic::warn(
                    codes::BALANCE_FORMAT,
                    format!(
                        "field {tag} should be D/C indicator, date (6 digits), currency (3 letters), amount with comma decimal"
                    ),
                    Some(tag),
                )
                .with_context(ctx!("tag" => *tag, "value" => value.joined().into_owned())),
            );
        }
    }
}

// ── Shape predicates ────────────────────────────────────────────────────

/// `6!n3!a` then a comma-decimal amount.
fn is_value_date_amount(s: &str) -> bool {
    let b = s.as_bytes();
    if b.len() < 11 {
        return false;
    }
    if !b[..6].iter().all(u8::is_ascii_digit) {
        return false;
    }
    if !b[6..9].iter().all(u8::is_ascii_uppercase) {
        return false;
    }
    is_amount(&s[9..])
}

/// Digits with exactly one comma as the decimal separator. The comma is
/// required; the fractional part may be empty (`"100,"`).
fn is_amount(s: &str) -> bool {
    let Some((int, frac)) = s.split_once(',') else {
        return false;
    };
    !int.is_empty()
        && int.bytes().all(|b| b.is_ascii_digit())
        && frac.bytes().all(|b| b.is_ascii_digit())
}

/// `1!a` debit/credit indicator then the value-date/currency/amount shape.
fn is_balance(s: &str) -> bool {
    let mut chars = s.chars();
    matches!(chars.next(), Some('D' | 'C')) && is_value_date_amount(chars.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_date_amount_shapes() {
        assert!(is_value_date_amount("240101USD100,00"));
        assert!(is_value_date_amount("240101USD100,"));
        assert!(!is_value_date_amount("240101USD100.00")); // dot decimal
        assert!(!is_value_date_amount("240101USD100")); // no comma
        assert!(!is_value_date_amount("24010AUSD100,00")); // letter in date
        assert!(!is_value_date_amount("240101usd100,00")); // lowercase currency
        assert!(!is_value_date_amount("240101USD,00")); // no integer digits
        assert!(!is_value_date_amount(""));
    }

    #[test]
    fn amount_rejects_two_commas() {
        assert!(!is_amount("1,00,0"));
        assert!(is_amount("1,000"));
    }

    #[test]
    fn balance_shapes() {
        assert!(is_balance("C240131EUR4500,12"));
        assert!(is_balance("D240101USD0,"));
        assert!(!is_balance("X240131EUR4500,12"));
        assert!(!is_balance("240131EUR4500,12"));
        assert!(!is_balance(""));
    }
}
