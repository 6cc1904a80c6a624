//! Typed generation inputs, one per message type.
//!
//! One-of field groups (beneficiary, ordering customer, institution
//! identification) are tagged enums, so two encodings of the same logical
//! party can never be populated at once; the variant selects the option
//! letter of the emitted tag.

use crate::amount::{format_amount, format_value_date};
use crate::wire::record::{FieldValue, SubFields, Tag};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A request to generate one wire message.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    /// Sender institution identifier (BIC, 8 or 11 characters).
    pub sender: String,
    /// Receiver institution identifier (BIC, 8 or 11 characters).
    pub receiver: String,
    /// Optional user header entries (block 3); the block is emitted only
    /// when at least one entry is supplied.
    #[serde(default, skip_serializing_if = "SubFields::is_empty")]
    pub user_header: SubFields,
    /// The message body, selected by the `messageType` tag.
    #[serde(flatten)]
    pub body: MessageBody,
}

/// The per-message-type body of a generation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "messageType")]
pub enum MessageBody {
    /// Single customer credit transfer.
    #[serde(rename = "MT103")]
    Mt103(CreditTransfer),
    /// General financial institution transfer.
    #[serde(rename = "MT202")]
    Mt202(InstitutionTransfer),
    /// Customer statement message.
    #[serde(rename = "MT940")]
    Mt940(Statement),
    /// Statement message.
    #[serde(rename = "MT950")]
    Mt950(StatementSummary),
}

impl MessageBody {
    /// The message type identifier (e.g., `"MT103"`).
    pub fn message_type(&self) -> &'static str {
        match self {
            MessageBody::Mt103(_) => "MT103",
            MessageBody::Mt202(_) => "MT202",
            MessageBody::Mt940(_) => "MT940",
            MessageBody::Mt950(_) => "MT950",
        }
    }

    /// The 3-digit type carried in the application header.
    pub fn type_digits(&self) -> &'static str {
        match self {
            MessageBody::Mt103(_) => "103",
            MessageBody::Mt202(_) => "202",
            MessageBody::Mt940(_) => "940",
            MessageBody::Mt950(_) => "950",
        }
    }
}

// ── MT103 ───────────────────────────────────────────────────────────────

/// Input for a single customer credit transfer (MT103).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditTransfer {
    /// Sender's reference (field 20).
    pub reference: String,
    /// Bank operation code (field 23B); must be a registered operation code.
    pub operation_code: String,
    /// Value date of the settlement (field 32A).
    pub value_date: NaiveDate,
    /// Settlement currency (field 32A), 3 uppercase letters.
    pub currency: String,
    /// Settled amount (field 32A).
    pub amount: Decimal,
    /// Instructed currency and amount (field 33B), when it differs from the
    /// settled amount.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructed_amount: Option<CurrencyAmount>,
    /// Ordering customer (field 50A/50F/50K).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ordering_customer: Option<OrderingCustomer>,
    /// Beneficiary customer (field 59/59A/59F).
    pub beneficiary: Beneficiary,
    /// Details-of-charges code (field 71A); must be a registered charge code.
    pub charge_code: String,
    /// Remittance information lines (field 70), absent when empty.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub remittance_info: Vec<String>,
    /// Sender-to-receiver information lines (field 72), absent when empty.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sender_to_receiver: Vec<String>,
}

/// A currency code with an amount.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrencyAmount {
    /// 3-letter currency code.
    pub currency: String,
    /// The amount.
    pub amount: Decimal,
}

/// The mutually exclusive ordering customer encodings of field 50.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "option", rename_all = "camelCase")]
pub enum OrderingCustomer {
    /// Option A (`:50A:`): account and institution BIC.
    Bic {
        /// Account line, emitted with a leading slash when present.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        account: Option<String>,
        /// The customer's institution BIC.
        bic: String,
    },
    /// Option F (`:50F:`): party identifier plus numbered detail lines.
    Party {
        /// Identifier line followed by the numbered detail lines.
        lines: Vec<String>,
    },
    /// Option K (`:50K:`): free-form name and address lines.
    NameAddress {
        /// Optional account line (with leading slash) and name/address lines.
        lines: Vec<String>,
    },
}

impl OrderingCustomer {
    /// The tag this encoding emits under.
    pub fn tag(&self) -> Tag {
        match self {
            OrderingCustomer::Bic { .. } => Tag::T50A,
            OrderingCustomer::Party { .. } => Tag::T50F,
            OrderingCustomer::NameAddress { .. } => Tag::T50K,
        }
    }

    /// The wire value of this encoding.
    pub fn value(&self) -> FieldValue {
        match self {
            OrderingCustomer::Bic { account, bic } => account_and_bic(account.as_deref(), bic),
            OrderingCustomer::Party { lines } | OrderingCustomer::NameAddress { lines } => {
                lines_value(lines)
            }
        }
    }
}

/// The mutually exclusive beneficiary customer encodings of field 59.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "option", rename_all = "camelCase")]
pub enum Beneficiary {
    /// Option A (`:59A:`): account and institution BIC.
    Bic {
        /// Account line, emitted with a leading slash when present.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        account: Option<String>,
        /// The beneficiary's institution BIC.
        bic: String,
    },
    /// Option F (`:59F:`): party identifier plus numbered detail lines.
    Party {
        /// Identifier line followed by the numbered detail lines.
        lines: Vec<String>,
    },
    /// No option letter (`:59:`): free-form name and address lines.
    NameAddress {
        /// Optional account line (with leading slash) and name/address lines.
        lines: Vec<String>,
    },
}

impl Beneficiary {
    /// The tag this encoding emits under.
    pub fn tag(&self) -> Tag {
        match self {
            Beneficiary::Bic { .. } => Tag::T59A,
            Beneficiary::Party { .. } => Tag::T59F,
            Beneficiary::NameAddress { .. } => Tag::T59,
        }
    }

    /// The wire value of this encoding.
    pub fn value(&self) -> FieldValue {
        match self {
            Beneficiary::Bic { account, bic } => account_and_bic(account.as_deref(), bic),
            Beneficiary::Party { lines } | Beneficiary::NameAddress { lines } => lines_value(lines),
        }
    }
}

// ── MT202 ───────────────────────────────────────────────────────────────

/// Input for a general financial institution transfer (MT202).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstitutionTransfer {
    /// Transaction reference number (field 20).
    pub reference: String,
    /// Related reference (field 21).
    pub related_reference: String,
    /// Value date (field 32A).
    pub value_date: NaiveDate,
    /// Currency (field 32A), 3 uppercase letters.
    pub currency: String,
    /// Amount (field 32A).
    pub amount: Decimal,
    /// Ordering institution (field 52A/52D).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ordering_institution: Option<InstitutionId>,
    /// Account-with institution (field 57A/57D).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_with_institution: Option<InstitutionId>,
    /// Beneficiary institution (field 58A/58D).
    pub beneficiary_institution: InstitutionId,
    /// Sender-to-receiver information lines (field 72), absent when empty.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sender_to_receiver: Vec<String>,
}

/// The mutually exclusive institution identification encodings shared by
/// fields 52, 57, and 58: the option letter is combined with the base tag
/// of the field the value is emitted under.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "option", rename_all = "camelCase")]
pub enum InstitutionId {
    /// Option A: account and institution BIC.
    Bic {
        /// Account line, emitted with a leading slash when present.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        account: Option<String>,
        /// The institution BIC.
        bic: String,
    },
    /// Option D: free-form name and address lines.
    NameAddress {
        /// Optional account line (with leading slash) and name/address lines.
        lines: Vec<String>,
    },
}

impl InstitutionId {
    /// The tag this encoding emits under for the given base (e.g., `"58"`).
    pub fn tag_for(&self, base: &str) -> Tag {
        let letter = match self {
            InstitutionId::Bic { .. } => 'A',
            InstitutionId::NameAddress { .. } => 'D',
        };
        Tag::parse(&format!("{base}{letter}"))
    }

    /// The wire value of this encoding.
    pub fn value(&self) -> FieldValue {
        match self {
            InstitutionId::Bic { account, bic } => account_and_bic(account.as_deref(), bic),
            InstitutionId::NameAddress { lines } => lines_value(lines),
        }
    }
}

// ── Statements (MT940 / MT950) ──────────────────────────────────────────

/// Input for a customer statement message (MT940).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statement {
    /// Transaction reference number (field 20).
    pub reference: String,
    /// Related reference (field 21).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related_reference: Option<String>,
    /// Account identification (field 25).
    pub account: String,
    /// Statement number, optionally `/`-joined with a sequence number
    /// (field 28C).
    pub statement_number: String,
    /// Opening balance (emitted as field 60F).
    pub opening_balance: Balance,
    /// Statement lines (field 61); each entry is one physical line of the
    /// multi-line value.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub statement_lines: Vec<String>,
    /// Information to the account owner (field 86), absent when empty.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub info_to_account_owner: Vec<String>,
    /// Closing balance (emitted as field 62F).
    pub closing_balance: Balance,
    /// Closing available balance (field 64).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub closing_available: Option<Balance>,
    /// Forward available balances (field 65); multiple entries become the
    /// lines of a multi-line value.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub forward_available: Vec<Balance>,
}

/// Input for the abbreviated statement message (MT950).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatementSummary {
    /// Transaction reference number (field 20).
    pub reference: String,
    /// Account identification (field 25).
    pub account: String,
    /// Statement number, optionally `/`-joined with a sequence number
    /// (field 28C).
    pub statement_number: String,
    /// Opening balance (emitted as field 60F).
    pub opening_balance: Balance,
    /// Statement lines (field 61).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub statement_lines: Vec<String>,
    /// Closing balance (emitted as field 62F).
    pub closing_balance: Balance,
    /// Closing available balance (field 64).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub closing_available: Option<Balance>,
}

/// A booked or available balance.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Balance {
    /// Whether the balance is in debit or credit.
    pub side: BalanceSide,
    /// Booking date of the balance.
    pub date: NaiveDate,
    /// 3-letter currency code.
    pub currency: String,
    /// The balance amount.
    pub amount: Decimal,
}

impl Balance {
    /// The wire form: indicator, `YYMMDD` date, currency, comma-decimal
    /// amount (e.g. `C240131EUR4500,12`).
    pub fn to_wire(&self) -> String {
        format!(
            "{}{}{}{}",
            self.side.indicator(),
            format_value_date(&self.date),
            self.currency,
            format_amount(&self.amount)
        )
    }
}

/// Debit/credit indicator of a balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BalanceSide {
    /// The balance is in debit (`D`).
    Debit,
    /// The balance is in credit (`C`).
    Credit,
}

impl BalanceSide {
    /// The single-character wire indicator.
    pub fn indicator(&self) -> char {
        match self {
            BalanceSide::Debit => 'D',
            BalanceSide::Credit => 'C',
        }
    }
}

// ── Value construction helpers ──────────────────────────────────────────

/// Collapse a line list into a field value: one line is a scalar, more stay
/// a sequence, none is an empty scalar (caught by mandatory checks).
pub(crate) fn lines_value(lines: &[String]) -> FieldValue {
    match lines {
        [] => FieldValue::Single(String::new()),
        [line] => FieldValue::Single(line.clone()),
        _ => FieldValue::Lines(lines.to_vec()),
    }
}

/// An optional `/account` line above an institution BIC line.
fn account_and_bic(account: Option<&str>, bic: &str) -> FieldValue {
    match account {
        Some(acct) => FieldValue::Lines(vec![format!("/{acct}"), bic.to_string()]),
        None => FieldValue::Single(bic.to_string()),
    }
}
