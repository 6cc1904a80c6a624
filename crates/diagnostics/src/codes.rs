//! Diagnostic ID constants.
//!
//! Use these instead of string literals to get compile-time typo detection
//! and IDE autocomplete. Numbering groups codes by kind: `MT10xx` for
//! type resolution, `MT11xx` for blocking field errors, `MT12xx` for
//! advisory findings.

/// Message type is absent or not in the specification registry.
pub const UNKNOWN_MESSAGE_TYPE: &str = "MT1001";

/// A mandatory field is absent from the text block, or present but empty.
pub const MISSING_MANDATORY: &str = "MT1101";

/// A field's line-joined value exceeds its specified maximum length.
pub const FIELD_TOO_LONG: &str = "MT1102";

/// A value-date/currency/amount field does not match its required shape.
pub const MALFORMED_AMOUNT: &str = "MT1103";

/// An enumerated code value is not a member of its fixed code set.
pub const INVALID_CODE: &str = "MT1104";

/// None of the members of a mandatory one-of field group is present.
pub const REQUIRED_ONE_OF: &str = "MT1105";

/// A field tag is not part of the message type's specification.
pub const UNKNOWN_FIELD: &str = "MT1201";

/// A balance field does not match the indicator/date/currency/amount shape.
pub const BALANCE_FORMAT: &str = "MT1202";

/// None of the members of a recommended one-of field group is present.
pub const RECOMMENDED_ONE_OF: &str = "MT1203";
