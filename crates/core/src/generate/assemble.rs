//! Per-message-type field assembly.
//!
//! Mirrors the validator's field ordering and mandatory/one-of rules in
//! reverse: mandatory fields are always emitted (failing fast when a value
//! was not supplied), optional fields only when present, and the emission
//! order follows the specification catalogue for the message type.

use super::GenerateError;
use super::model::{
    Balance, CreditTransfer, InstitutionTransfer, MessageBody, Statement, StatementSummary,
    lines_value,
};
use crate::amount::{format_amount, format_value_date};
use crate::wire::record::{FieldMap, FieldValue, Tag};
use mt_toolchain_spec_tables::{CHARGE_CODES, OPERATION_CODES};

/// Assemble the ordered text-block fields for a message body.
pub(super) fn body_fields(body: &MessageBody) -> Result<FieldMap, GenerateError> {
    match body {
        MessageBody::Mt103(ct) => mt103_fields(ct),
        MessageBody::Mt202(it) => mt202_fields(it),
        MessageBody::Mt940(st) => mt940_fields(st),
        MessageBody::Mt950(st) => mt950_fields(st),
    }
}

// ── Precondition helpers ────────────────────────────────────────────────

fn require(tag: &'static str, name: &'static str, value: &str) -> Result<(), GenerateError> {
    if value.trim().is_empty() {
        Err(GenerateError::MissingMandatory { tag, name })
    } else {
        Ok(())
    }
}

fn check_code(
    what: &'static str,
    value: &str,
    allowed: &'static [&'static str],
) -> Result<(), GenerateError> {
    if allowed.contains(&value) {
        Ok(())
    } else {
        Err(GenerateError::InvalidCode {
            what,
            value: value.to_string(),
            expected: allowed.join("|"),
        })
    }
}

fn check_currency(what: &'static str, value: &str) -> Result<(), GenerateError> {
    if value.len() == 3 && value.bytes().all(|b| b.is_ascii_uppercase()) {
        Ok(())
    } else {
        Err(GenerateError::InvalidValue {
            what,
            value: value.to_string(),
            reason: "expected a 3-letter uppercase currency code",
        })
    }
}

fn check_balance(tag: &'static str, balance: &Balance) -> Result<(), GenerateError> {
    check_currency(balance_currency_name(tag), &balance.currency)
}

fn balance_currency_name(tag: &'static str) -> &'static str {
    match tag {
        "60F" => "opening balance currency",
        "62F" => "closing balance currency",
        "64" => "closing available balance currency",
        _ => "forward available balance currency",
    }
}

fn value_date_amount(date: &chrono::NaiveDate, currency: &str, amount: &rust_decimal::Decimal) -> FieldValue {
    FieldValue::Single(format!(
        "{}{}{}",
        format_value_date(date),
        currency,
        format_amount(amount)
    ))
}

// ── MT103 ───────────────────────────────────────────────────────────────

fn mt103_fields(ct: &CreditTransfer) -> Result<FieldMap, GenerateError> {
    require("20", "Sender's Reference", &ct.reference)?;
    check_code("bank operation code", &ct.operation_code, OPERATION_CODES)?;
    check_currency("settlement currency", &ct.currency)?;
    check_code("details of charges code", &ct.charge_code, CHARGE_CODES)?;
    let beneficiary = ct.beneficiary.value();
    if beneficiary.is_empty() {
        return Err(GenerateError::MissingMandatory {
            tag: "59",
            name: "Beneficiary Customer",
        });
    }
    if let Some(ia) = &ct.instructed_amount {
        check_currency("instructed currency", &ia.currency)?;
    }

    let mut fields = FieldMap::new();
    fields.insert(Tag::T20, FieldValue::Single(ct.reference.clone()));
    fields.insert(Tag::T23B, FieldValue::Single(ct.operation_code.clone()));
    fields.insert(
        Tag::T32A,
        value_date_amount(&ct.value_date, &ct.currency, &ct.amount),
    );
    if let Some(ia) = &ct.instructed_amount {
        fields.insert(
            Tag::T33B,
            FieldValue::Single(format!("{}{}", ia.currency, format_amount(&ia.amount))),
        );
    }
    if let Some(oc) = &ct.ordering_customer {
        fields.insert(oc.tag(), oc.value());
    }
    fields.insert(ct.beneficiary.tag(), beneficiary);
    if !ct.remittance_info.is_empty() {
        fields.insert(Tag::T70, lines_value(&ct.remittance_info));
    }
    fields.insert(Tag::T71A, FieldValue::Single(ct.charge_code.clone()));
    if !ct.sender_to_receiver.is_empty() {
        fields.insert(Tag::T72, lines_value(&ct.sender_to_receiver));
    }
    Ok(fields)
}

// ── MT202 ───────────────────────────────────────────────────────────────

fn mt202_fields(it: &InstitutionTransfer) -> Result<FieldMap, GenerateError> {
    require("20", "Transaction Reference Number", &it.reference)?;
    require("21", "Related Reference", &it.related_reference)?;
    check_currency("transfer currency", &it.currency)?;
    let beneficiary = it.beneficiary_institution.value();
    if beneficiary.is_empty() {
        return Err(GenerateError::MissingMandatory {
            tag: "58",
            name: "Beneficiary Institution",
        });
    }

    let mut fields = FieldMap::new();
    fields.insert(Tag::T20, FieldValue::Single(it.reference.clone()));
    fields.insert(Tag::T21, FieldValue::Single(it.related_reference.clone()));
    fields.insert(
        Tag::T32A,
        value_date_amount(&it.value_date, &it.currency, &it.amount),
    );
    if let Some(oi) = &it.ordering_institution {
        fields.insert(oi.tag_for("52"), oi.value());
    }
    if let Some(awi) = &it.account_with_institution {
        fields.insert(awi.tag_for("57"), awi.value());
    }
    fields.insert(it.beneficiary_institution.tag_for("58"), beneficiary);
    if !it.sender_to_receiver.is_empty() {
        fields.insert(Tag::T72, lines_value(&it.sender_to_receiver));
    }
    Ok(fields)
}

// ── Statements ──────────────────────────────────────────────────────────

fn mt940_fields(st: &Statement) -> Result<FieldMap, GenerateError> {
    require("20", "Transaction Reference Number", &st.reference)?;
    require("25", "Account Identification", &st.account)?;
    require("28C", "Statement Number/Sequence Number", &st.statement_number)?;
    check_balance("60F", &st.opening_balance)?;
    check_balance("62F", &st.closing_balance)?;
    if let Some(b) = &st.closing_available {
        check_balance("64", b)?;
    }
    for b in &st.forward_available {
        check_balance("65", b)?;
    }

    let mut fields = FieldMap::new();
    fields.insert(Tag::T20, FieldValue::Single(st.reference.clone()));
    if let Some(related) = &st.related_reference {
        fields.insert(Tag::T21, FieldValue::Single(related.clone()));
    }
    fields.insert(Tag::T25, FieldValue::Single(st.account.clone()));
    fields.insert(Tag::T28C, FieldValue::Single(st.statement_number.clone()));
    fields.insert(
        Tag::T60F,
        FieldValue::Single(st.opening_balance.to_wire()),
    );
    if !st.statement_lines.is_empty() {
        fields.insert(Tag::T61, lines_value(&st.statement_lines));
    }
    if !st.info_to_account_owner.is_empty() {
        fields.insert(Tag::T86, lines_value(&st.info_to_account_owner));
    }
    fields.insert(
        Tag::T62F,
        FieldValue::Single(st.closing_balance.to_wire()),
    );
    if let Some(b) = &st.closing_available {
        fields.insert(Tag::T64, FieldValue::Single(b.to_wire()));
    }
    if !st.forward_available.is_empty() {
        let lines: Vec<String> = st.forward_available.iter().map(Balance::to_wire).collect();
        fields.insert(Tag::T65, lines_value(&lines));
    }
    Ok(fields)
}

fn mt950_fields(st: &StatementSummary) -> Result<FieldMap, GenerateError> {
    require("20", "Transaction Reference Number", &st.reference)?;
    require("25", "Account Identification", &st.account)?;
    require("28C", "Statement Number/Sequence Number", &st.statement_number)?;
    check_balance("60F", &st.opening_balance)?;
    check_balance("62F", &st.closing_balance)?;
    if let Some(b) = &st.closing_available {
        check_balance("64", b)?;
    }

    let mut fields = FieldMap::new();
    fields.insert(Tag::T20, FieldValue::Single(st.reference.clone()));
    fields.insert(Tag::T25, FieldValue::Single(st.account.clone()));
    fields.insert(Tag::T28C, FieldValue::Single(st.statement_number.clone()));
    fields.insert(
        Tag::T60F,
        FieldValue::Single(st.opening_balance.to_wire()),
    );
    if !st.statement_lines.is_empty() {
        fields.insert(Tag::T61, lines_value(&st.statement_lines));
    }
    fields.insert(
        Tag::T62F,
        FieldValue::Single(st.closing_balance.to_wire()),
    );
    if let Some(b) = &st.closing_available {
        fields.insert(Tag::T64, FieldValue::Single(b.to_wire()));
    }
    Ok(fields)
}
