//! Generate → decode → validate round-trips.
//!
//! Gold-standard guarantee: a generated message decodes to its supplied
//! field values and re-validates as `ok` for every message type, with
//! mandatory-only and fully-populated inputs alike.

mod common;

use common::request;
use mt_toolchain_core::generate::model::MessageBody;
use mt_toolchain_core::{
    FieldValue, GenerateError, GenerateRequest, decode, generate, registry, validate_str,
};

/// Generate, then assert the output decodes to the expected type and
/// validates clean.
fn assert_roundtrip(request: &GenerateRequest, message_type: &str) -> mt_toolchain_core::ParsedMessage {
    let wire = generate(request).unwrap_or_else(|e| panic!("generation failed: {e}"));
    let decoded = decode(&wire);
    assert_eq!(decoded.message_type, message_type);
    let result = validate_str(&wire, registry());
    assert!(
        result.ok,
        "\n--- Round-trip failed ---\nWire:\n{wire}\nErrors: {:?}\n",
        result.errors
    );
    // Decoding is idempotent on generated output too.
    assert_eq!(decoded, decode(&wire));
    decoded
}

// ─── MT103 ───────────────────────────────────────────────────────────────────

#[test]
fn mt103_minimal_roundtrip() {
    let decoded = assert_roundtrip(
        &request(MessageBody::Mt103(common::credit_transfer_minimal())),
        "MT103",
    );
    assert_eq!(
        decoded.fields.get_str("32A"),
        Some(&FieldValue::Single("240101USD100,00".to_string()))
    );
    assert_eq!(decoded.fields.get_str("23B").unwrap().joined(), "CRED");
}

#[test]
fn mt103_full_roundtrip() {
    let decoded = assert_roundtrip(
        &request(MessageBody::Mt103(common::credit_transfer_full())),
        "MT103",
    );
    assert_eq!(decoded.fields.get_str("33B").unwrap().joined(), "EUR92,50");
    assert_eq!(decoded.fields.get_str("70").unwrap().line_count(), 3);
    assert!(decoded.fields.contains("50K"));
}

#[test]
fn mt103_multiline_fidelity() {
    let decoded = assert_roundtrip(
        &request(MessageBody::Mt103(common::credit_transfer_full())),
        "MT103",
    );
    // The three supplied remittance lines survive as a 3-element sequence
    // whose join reproduces the original content.
    assert_eq!(
        decoded.fields.get_str("70"),
        Some(&FieldValue::Lines(vec![
            "INVOICE 4711".to_string(),
            "ORDER 2024-17".to_string(),
            "PART SHIPMENT".to_string(),
        ]))
    );
    assert_eq!(
        decoded.fields.get_str("70").unwrap().joined(),
        "INVOICE 4711\nORDER 2024-17\nPART SHIPMENT"
    );
}

#[test]
fn mt103_single_line_value_stays_scalar() {
    let decoded = assert_roundtrip(
        &request(MessageBody::Mt103(common::credit_transfer_full())),
        "MT103",
    );
    assert_eq!(
        decoded.fields.get_str("72"),
        Some(&FieldValue::Single("/ACC/SETTLE SAME DAY".to_string()))
    );
}

// ─── MT202 ───────────────────────────────────────────────────────────────────

#[test]
fn mt202_minimal_roundtrip() {
    let decoded = assert_roundtrip(
        &request(MessageBody::Mt202(common::institution_transfer_minimal())),
        "MT202",
    );
    assert_eq!(decoded.fields.get_str("58A").unwrap().joined(), "GGGGHHII");
}

#[test]
fn mt202_full_roundtrip() {
    let decoded = assert_roundtrip(
        &request(MessageBody::Mt202(common::institution_transfer_full())),
        "MT202",
    );
    // Option A with an account becomes a two-line value.
    assert_eq!(
        decoded.fields.get_str("52A"),
        Some(&FieldValue::Lines(vec![
            "/123456".to_string(),
            "JJJJKKLL".to_string()
        ]))
    );
    assert!(decoded.fields.contains("57D"));
}

// ─── MT940 / MT950 ───────────────────────────────────────────────────────────

#[test]
fn mt940_minimal_roundtrip() {
    let decoded = assert_roundtrip(
        &request(MessageBody::Mt940(common::statement_minimal())),
        "MT940",
    );
    assert_eq!(
        decoded.fields.get_str("60F").unwrap().joined(),
        "C240101EUR1000,00"
    );
}

#[test]
fn mt940_full_roundtrip() {
    let decoded = assert_roundtrip(
        &request(MessageBody::Mt940(common::statement_full())),
        "MT940",
    );
    assert_eq!(decoded.fields.get_str("61").unwrap().line_count(), 2);
    assert_eq!(decoded.fields.get_str("65").unwrap().line_count(), 2);
    assert_eq!(decoded.fields.get_str("64").unwrap().joined(), "C240102EUR900,00");
}

#[test]
fn mt950_minimal_roundtrip() {
    assert_roundtrip(
        &request(MessageBody::Mt950(common::statement_summary_minimal())),
        "MT950",
    );
}

#[test]
fn mt950_full_roundtrip() {
    let decoded = assert_roundtrip(
        &request(MessageBody::Mt950(common::statement_summary_full())),
        "MT950",
    );
    assert_eq!(
        decoded.fields.get_str("60F").unwrap().joined(),
        "D240201GBP500,00"
    );
}

// ─── Generated framing ───────────────────────────────────────────────────────

#[test]
fn generated_headers_use_terminal_addresses() {
    let wire = generate(&request(MessageBody::Mt103(common::credit_transfer_minimal()))).unwrap();
    assert!(wire.starts_with("{1:F01AAAABBCCXXXX0000000000}"), "{wire}");
    assert!(wire.contains("{2:I103DDDDEEFFXXXXN}"), "{wire}");
}

#[test]
fn eleven_char_bic_keeps_its_branch() {
    let mut req = request(MessageBody::Mt103(common::credit_transfer_minimal()));
    req.sender = "AAAABBCC123".to_string();
    let wire = generate(&req).unwrap();
    assert!(wire.starts_with("{1:F01AAAABBCCX1230000000000}"), "{wire}");
}

#[test]
fn user_header_block_only_when_supplied() {
    let mut req = request(MessageBody::Mt103(common::credit_transfer_minimal()));
    let without = generate(&req).unwrap();
    assert!(!without.contains("{3:"), "{without}");

    req.user_header.insert("108", "MSGREF");
    req.user_header.insert("121", "ABCD-1234");
    let with = generate(&req).unwrap();
    assert!(with.contains("{3:{108:MSGREF}{121:ABCD-1234}}"), "{with}");
    let decoded = decode(&with);
    assert_eq!(decoded.user_header.get("121"), Some("ABCD-1234"));
}

#[test]
fn text_block_uses_crlf_and_dash_terminator() {
    let wire = generate(&request(MessageBody::Mt103(common::credit_transfer_minimal()))).unwrap();
    assert!(wire.contains("{4:\r\n:20:REF1\r\n"), "{wire}");
    assert!(wire.ends_with("\r\n-}"), "{wire}");
}

// ─── Precondition failures: no partial output ────────────────────────────────

#[test]
fn invalid_sender_bic_fails_before_output() {
    let mut req = request(MessageBody::Mt103(common::credit_transfer_minimal()));
    req.sender = "NOT A BIC".to_string();
    match generate(&req) {
        Err(GenerateError::InvalidIdentifier { role, .. }) => assert_eq!(role, "sender"),
        other => panic!("expected identifier failure, got {other:?}"),
    }
}

#[test]
fn invalid_receiver_bic_fails() {
    let mut req = request(MessageBody::Mt202(common::institution_transfer_minimal()));
    req.receiver = "DDDDEEF".to_string(); // 7 chars
    assert!(matches!(
        generate(&req),
        Err(GenerateError::InvalidIdentifier {
            role: "receiver",
            ..
        })
    ));
}

#[test]
fn invalid_operation_code_fails() {
    let mut body = common::credit_transfer_minimal();
    body.operation_code = "XXXX".to_string();
    match generate(&request(MessageBody::Mt103(body))) {
        Err(GenerateError::InvalidCode { what, value, .. }) => {
            assert_eq!(what, "bank operation code");
            assert_eq!(value, "XXXX");
        }
        other => panic!("expected code failure, got {other:?}"),
    }
}

#[test]
fn invalid_charge_code_fails() {
    let mut body = common::credit_transfer_minimal();
    body.charge_code = "ALL".to_string();
    assert!(matches!(
        generate(&request(MessageBody::Mt103(body))),
        Err(GenerateError::InvalidCode { .. })
    ));
}

#[test]
fn missing_mandatory_value_fails() {
    let mut body = common::credit_transfer_minimal();
    body.reference = "  ".to_string();
    assert!(matches!(
        generate(&request(MessageBody::Mt103(body))),
        Err(GenerateError::MissingMandatory { tag: "20", .. })
    ));
}

#[test]
fn empty_beneficiary_fails() {
    let mut body = common::credit_transfer_minimal();
    body.beneficiary = mt_toolchain_core::generate::model::Beneficiary::NameAddress {
        lines: Vec::new(),
    };
    assert!(matches!(
        generate(&request(MessageBody::Mt103(body))),
        Err(GenerateError::MissingMandatory { tag: "59", .. })
    ));
}

#[test]
fn lowercase_currency_fails() {
    let mut body = common::institution_transfer_minimal();
    body.currency = "eur".to_string();
    assert!(matches!(
        generate(&request(MessageBody::Mt202(body))),
        Err(GenerateError::InvalidValue { .. })
    ));
}

// ─── Generation request serde ────────────────────────────────────────────────

#[test]
fn generate_request_roundtrips_through_json() {
    let req = request(MessageBody::Mt103(common::credit_transfer_full()));
    let json = serde_json::to_string_pretty(&req).unwrap();
    assert!(json.contains("\"messageType\": \"MT103\""), "{json}");
    let back: GenerateRequest = serde_json::from_str(&json).unwrap();
    assert_eq!(generate(&req).unwrap(), generate(&back).unwrap());
}
