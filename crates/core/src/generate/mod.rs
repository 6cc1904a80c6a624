//! Wire-format generation from typed per-message-type inputs.
//!
//! Generation fails fast: sender and receiver must pass BIC validation and
//! every mandatory value and enumerated code is checked **before** any
//! output is produced — a malformed wire message is worse than none. The
//! emitted blocks carry placeholder session and sequence numbers; live
//! network sequencing is not this engine's concern. No validation re-pass
//! runs on the output; callers wanting confirmation run the validator on it.

mod assemble;
/// Typed generation inputs, one per message type.
pub mod model;

pub use model::{GenerateRequest, MessageBody};

use crate::wire::headers::{encode_app, encode_basic, encode_subfields};
use crate::wire::record::{AppHeader, BasicHeader};
use crate::wire::text::emit_fields;
use mt_toolchain_bic::{Bic, BicError};
use thiserror::Error;

/// A generation precondition failure. No partial output is ever produced.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// The sender or receiver identifier failed BIC validation.
    #[error("invalid {role} BIC: {source}")]
    InvalidIdentifier {
        /// Which identifier failed (`"sender"` or `"receiver"`).
        role: &'static str,
        /// The underlying validation failure.
        #[source]
        source: BicError,
    },

    /// A mandatory field value was not supplied.
    #[error("missing mandatory field {tag} ({name})")]
    MissingMandatory {
        /// The tag of the missing field.
        tag: &'static str,
        /// The field's display name.
        name: &'static str,
    },

    /// A supplied enumerated code is not a member of its fixed code set.
    #[error("invalid {what} {value:?}: expected one of {expected}")]
    InvalidCode {
        /// What kind of code was rejected.
        what: &'static str,
        /// The rejected value.
        value: String,
        /// The allowed code set, pipe-joined.
        expected: String,
    },

    /// A supplied value violates its structural requirement.
    #[error("invalid {what} {value:?}: {reason}")]
    InvalidValue {
        /// What kind of value was rejected.
        what: &'static str,
        /// The rejected value.
        value: String,
        /// Why it was rejected.
        reason: &'static str,
    },
}

/// Generate the wire text for a message.
///
/// Assembles blocks 1, 2 (input variant, normal priority), an optional
/// block 3 when user-header entries are supplied, and block 4, concatenated
/// in block order with no separators.
pub fn generate(request: &GenerateRequest) -> Result<String, GenerateError> {
    let sender = Bic::parse(&request.sender).map_err(|source| GenerateError::InvalidIdentifier {
        role: "sender",
        source,
    })?;
    let receiver =
        Bic::parse(&request.receiver).map_err(|source| GenerateError::InvalidIdentifier {
            role: "receiver",
            source,
        })?;

    let fields = assemble::body_fields(&request.body)?;

    let basic = BasicHeader {
        application_id: "F".to_string(),
        service_id: "01".to_string(),
        address: sender.terminal_address(),
        // Placeholder session/sequence: this engine performs no live
        // SWIFT-network sequencing.
        session_number: "0000".to_string(),
        sequence_number: "000000".to_string(),
    };
    let app = AppHeader::Input {
        type_digits: request.body.type_digits().to_string(),
        receiver: receiver.terminal_address(),
        priority: "N".to_string(),
        delivery_monitor: String::new(),
        obsolescence_period: String::new(),
    };

    let mut out = String::new();
    out.push_str("{1:");
    out.push_str(&encode_basic(&basic));
    out.push('}');
    out.push_str("{2:");
    out.push_str(&encode_app(&app));
    out.push('}');
    if !request.user_header.is_empty() {
        out.push_str("{3:");
        out.push_str(&encode_subfields(&request.user_header));
        out.push('}');
    }
    out.push_str("{4:\r\n");
    out.push_str(&emit_fields(&fields));
    out.push_str("-}");
    Ok(out)
}
