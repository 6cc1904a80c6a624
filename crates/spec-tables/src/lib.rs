//! MT field specification tables.
//!
//! Defines the per-message-type field catalogues consumed by the validator
//! and generator: tag, display name, mandatory flag, SWIFT sub-format
//! descriptor, and optional maximum length. Four message types are
//! populated: MT103 (single customer credit transfer), MT202 (general
//! financial institution transfer), MT940 (customer statement), and MT950
//! (statement message).
//!
//! The tables are pure data. Sub-format descriptors (`16x`, `6!n3!a15d`,
//! `4*35x`, …) are carried for display and tooling; semantic value checks
//! live in the validator. The registry is built once per process and never
//! mutated afterwards, so any number of decode/validate/generate calls may
//! share it without synchronization.

#![warn(missing_docs)]

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::OnceLock;

/// Bank operation codes accepted in field 23B of a customer credit transfer.
pub const OPERATION_CODES: &[&str] = &["CRED", "CRTS", "SPAY", "SPRI", "SSTD"];

/// Details-of-charges codes accepted in field 71A.
pub const CHARGE_CODES: &[&str] = &["OUR", "SHA", "BEN"];

/// Specification of a single field within a message type.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldSpec {
    /// Field tag: two digits with an optional trailing option letter
    /// (e.g., `"20"`, `"32A"`).
    pub tag: String,
    /// Human-readable field name (e.g., `"Details of Charges"`).
    pub name: String,
    /// Whether the field must be present (and non-empty) in a valid message.
    pub mandatory: bool,
    /// SWIFT sub-format descriptor string (e.g., `"6!n3!a15d"`).
    pub format: String,
    /// Maximum length of the line-joined value, when the catalogue bounds it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
}

impl FieldSpec {
    /// Create a field entry with the given fields.
    pub fn new(
        tag: &str,
        name: &str,
        mandatory: bool,
        format: &str,
        max_length: Option<usize>,
    ) -> Self {
        Self {
            tag: tag.to_string(),
            name: name.to_string(),
            mandatory,
            format: format.to_string(),
            max_length,
        }
    }
}

/// Shorthand for a mandatory [`FieldSpec`] in the built-in catalogues.
fn req(tag: &str, name: &str, format: &str, max_length: Option<usize>) -> FieldSpec {
    FieldSpec::new(tag, name, true, format, max_length)
}

/// Shorthand for an optional [`FieldSpec`] in the built-in catalogues.
fn opt(tag: &str, name: &str, format: &str, max_length: Option<usize>) -> FieldSpec {
    FieldSpec::new(tag, name, false, format, max_length)
}

/// Ordered field catalogue for one message type.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageSpec {
    /// Message type identifier (e.g., `"MT103"`).
    pub message_type: String,
    /// Human-readable message name.
    pub name: String,
    /// Field specifications in catalogue declaration order.
    pub fields: Vec<FieldSpec>,

    /// Cached tag → index map (lazily initialized).
    #[serde(skip)]
    field_map: OnceLock<HashMap<String, usize>>,
}

impl MessageSpec {
    /// Create a new `MessageSpec`. The lookup cache is initialized lazily.
    pub fn new(message_type: &str, name: &str, fields: Vec<FieldSpec>) -> Self {
        Self {
            message_type: message_type.to_string(),
            name: name.to_string(),
            fields,
            field_map: OnceLock::new(),
        }
    }

    fn field_map(&self) -> &HashMap<String, usize> {
        self.field_map.get_or_init(|| {
            self.fields
                .iter()
                .enumerate()
                .map(|(i, f)| (f.tag.clone(), i))
                .collect()
        })
    }

    /// Look up a field specification by tag. O(1) via the cached map.
    pub fn field_spec(&self, tag: &str) -> Option<&FieldSpec> {
        self.field_map().get(tag).map(|&i| &self.fields[i])
    }

    /// Iterate the mandatory field specifications in declaration order.
    pub fn mandatory_fields(&self) -> impl Iterator<Item = &FieldSpec> {
        self.fields.iter().filter(|f| f.mandatory)
    }
}

/// Top-level container for all MT message specification tables.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpecTables {
    /// All registered message specifications.
    pub messages: Vec<MessageSpec>,

    /// Cached message type → index map (lazily initialized).
    #[serde(skip)]
    type_map: OnceLock<HashMap<String, usize>>,
}

impl SpecTables {
    /// Create a `SpecTables` from a list of message specifications.
    pub fn new(messages: Vec<MessageSpec>) -> Self {
        Self {
            messages,
            type_map: OnceLock::new(),
        }
    }

    fn type_map(&self) -> &HashMap<String, usize> {
        self.type_map.get_or_init(|| {
            self.messages
                .iter()
                .enumerate()
                .map(|(i, m)| (m.message_type.clone(), i))
                .collect()
        })
    }

    /// Look up the specification for a message type (e.g., `"MT103"`).
    pub fn spec_for(&self, message_type: &str) -> Option<&MessageSpec> {
        self.type_map().get(message_type).map(|&i| &self.messages[i])
    }

    /// The registered message type identifiers, in declaration order.
    pub fn message_types(&self) -> impl Iterator<Item = &str> {
        self.messages.iter().map(|m| m.message_type.as_str())
    }

    /// Build the built-in catalogue for the four supported message types.
    pub fn builtin() -> Self {
        Self::new(vec![mt103(), mt202(), mt940(), mt950()])
    }
}

/// Process-wide, read-only specification registry.
///
/// Built on first access and shared by all subsequent decode/validate/
/// generate calls; never mutated after initialization.
pub fn registry() -> &'static SpecTables {
    static REGISTRY: OnceLock<SpecTables> = OnceLock::new();
    REGISTRY.get_or_init(SpecTables::builtin)
}

// ─── Built-in catalogues ────────────────────────────────────────────────────
// Maximum lengths are measured on the line-joined value: an n*35x multiline
// format allows n lines of 35 characters plus n-1 joining line breaks.

fn mt103() -> MessageSpec {
    MessageSpec::new(
        "MT103",
        "Single Customer Credit Transfer",
        vec![
            req("20", "Sender's Reference", "16x", Some(16)),
            opt("13C", "Time Indication", "/8c/4!n1!x4!n", Some(24)),
            req("23B", "Bank Operation Code", "4!c", Some(4)),
            opt("23E", "Instruction Code", "4!c[/30x]", Some(35)),
            opt("26T", "Transaction Type Code", "3!c", Some(3)),
            req("32A", "Value Date/Currency/Settled Amount", "6!n3!a15d", Some(24)),
            opt("33B", "Currency/Instructed Amount", "3!a15d", Some(18)),
            opt("36", "Exchange Rate", "12d", Some(12)),
            opt("50A", "Ordering Customer (BIC)", "[/34x]4!a2!a2!c[3!c]", Some(46)),
            opt("50F", "Ordering Customer (Party Identifier)", "35x4*35x", Some(179)),
            opt("50K", "Ordering Customer (Name and Address)", "[/34x]4*35x", Some(178)),
            opt("52A", "Ordering Institution (BIC)", "[/1!a][/34x]4!a2!a2!c[3!c]", Some(48)),
            opt("52D", "Ordering Institution (Name and Address)", "[/1!a][/34x]4*35x", Some(180)),
            opt("53A", "Sender's Correspondent (BIC)", "[/1!a][/34x]4!a2!a2!c[3!c]", Some(48)),
            opt("53B", "Sender's Correspondent (Location)", "[/1!a][/34x][35x]", Some(72)),
            opt("53D", "Sender's Correspondent (Name and Address)", "[/1!a][/34x]4*35x", Some(180)),
            opt("56A", "Intermediary Institution (BIC)", "[/1!a][/34x]4!a2!a2!c[3!c]", Some(48)),
            opt("56C", "Intermediary Institution (Account)", "/34x", Some(35)),
            opt("56D", "Intermediary Institution (Name and Address)", "[/1!a][/34x]4*35x", Some(180)),
            opt("57A", "Account With Institution (BIC)", "[/1!a][/34x]4!a2!a2!c[3!c]", Some(48)),
            opt("57B", "Account With Institution (Location)", "[/1!a][/34x][35x]", Some(72)),
            opt("57C", "Account With Institution (Account)", "/34x", Some(35)),
            opt("57D", "Account With Institution (Name and Address)", "[/1!a][/34x]4*35x", Some(180)),
            opt("59", "Beneficiary Customer", "[/34x]4*35x", Some(178)),
            opt("59A", "Beneficiary Customer (BIC)", "[/34x]4!a2!a2!c[3!c]", Some(46)),
            opt("59F", "Beneficiary Customer (Party Identifier)", "[/34x]4*(1!n/33x)", Some(178)),
            opt("70", "Remittance Information", "4*35x", Some(143)),
            req("71A", "Details of Charges", "3!a", Some(3)),
            opt("71F", "Sender's Charges", "3!a15d", Some(18)),
            opt("71G", "Receiver's Charges", "3!a15d", Some(18)),
            opt("72", "Sender to Receiver Information", "6*35x", Some(215)),
            opt("77B", "Regulatory Reporting", "3*35x", Some(107)),
        ],
    )
}

fn mt202() -> MessageSpec {
    MessageSpec::new(
        "MT202",
        "General Financial Institution Transfer",
        vec![
            req("20", "Transaction Reference Number", "16x", Some(16)),
            req("21", "Related Reference", "16x", Some(16)),
            opt("13C", "Time Indication", "/8c/4!n1!x4!n", Some(24)),
            req("32A", "Value Date, Currency Code, Amount", "6!n3!a15d", Some(24)),
            opt("52A", "Ordering Institution (BIC)", "[/1!a][/34x]4!a2!a2!c[3!c]", Some(48)),
            opt("52D", "Ordering Institution (Name and Address)", "[/1!a][/34x]4*35x", Some(180)),
            opt("53A", "Sender's Correspondent (BIC)", "[/1!a][/34x]4!a2!a2!c[3!c]", Some(48)),
            opt("53B", "Sender's Correspondent (Location)", "[/1!a][/34x][35x]", Some(72)),
            opt("53D", "Sender's Correspondent (Name and Address)", "[/1!a][/34x]4*35x", Some(180)),
            opt("54A", "Receiver's Correspondent (BIC)", "[/1!a][/34x]4!a2!a2!c[3!c]", Some(48)),
            opt("54B", "Receiver's Correspondent (Location)", "[/1!a][/34x][35x]", Some(72)),
            opt("54D", "Receiver's Correspondent (Name and Address)", "[/1!a][/34x]4*35x", Some(180)),
            opt("56A", "Intermediary (BIC)", "[/1!a][/34x]4!a2!a2!c[3!c]", Some(48)),
            opt("56D", "Intermediary (Name and Address)", "[/1!a][/34x]4*35x", Some(180)),
            opt("57A", "Account With Institution (BIC)", "[/1!a][/34x]4!a2!a2!c[3!c]", Some(48)),
            opt("57B", "Account With Institution (Location)", "[/1!a][/34x][35x]", Some(72)),
            opt("57D", "Account With Institution (Name and Address)", "[/1!a][/34x]4*35x", Some(180)),
            opt("58A", "Beneficiary Institution (BIC)", "[/1!a][/34x]4!a2!a2!c[3!c]", Some(48)),
            opt("58D", "Beneficiary Institution (Name and Address)", "[/1!a][/34x]4*35x", Some(180)),
            opt("72", "Sender to Receiver Information", "6*35x", Some(215)),
        ],
    )
}

fn mt940() -> MessageSpec {
    MessageSpec::new(
        "MT940",
        "Customer Statement Message",
        vec![
            req("20", "Transaction Reference Number", "16x", Some(16)),
            opt("21", "Related Reference", "16x", Some(16)),
            req("25", "Account Identification", "35x", Some(35)),
            req("28C", "Statement Number/Sequence Number", "5n[/5n]", Some(11)),
            opt("60F", "Opening Balance (First)", "1!a6!n3!a15d", Some(25)),
            opt("60M", "Opening Balance (Intermediate)", "1!a6!n3!a15d", Some(25)),
            opt("61", "Statement Line", "6!n[4!n]2a[1!a]15d1!a3!c16x[//16x][34x]", None),
            opt("86", "Information to Account Owner", "6*65x", Some(395)),
            opt("62F", "Closing Balance (Booked Funds)", "1!a6!n3!a15d", Some(25)),
            opt("62M", "Closing Balance (Intermediate)", "1!a6!n3!a15d", Some(25)),
            opt("64", "Closing Available Balance", "1!a6!n3!a15d", Some(25)),
            // Repeats through a multi-line value, so the joined form is
            // unbounded like field 61.
            opt("65", "Forward Available Balance", "1!a6!n3!a15d", None),
        ],
    )
}

fn mt950() -> MessageSpec {
    MessageSpec::new(
        "MT950",
        "Statement Message",
        vec![
            req("20", "Transaction Reference Number", "16x", Some(16)),
            req("25", "Account Identification", "35x", Some(35)),
            req("28C", "Statement Number/Sequence Number", "5n[/5n]", Some(11)),
            opt("60F", "Opening Balance (First)", "1!a6!n3!a15d", Some(25)),
            opt("60M", "Opening Balance (Intermediate)", "1!a6!n3!a15d", Some(25)),
            opt("61", "Statement Line", "6!n[4!n]2a[1!a]15d1!a3!c16x[//16x][34x]", None),
            opt("62F", "Closing Balance (Booked Funds)", "1!a6!n3!a15d", Some(25)),
            opt("62M", "Closing Balance (Intermediate)", "1!a6!n3!a15d", Some(25)),
            opt("64", "Closing Available Balance", "1!a6!n3!a15d", Some(25)),
        ],
    )
}
