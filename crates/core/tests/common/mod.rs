//! Shared fixtures and helpers for `mt_toolchain_core` integration tests.

#![allow(unreachable_pub)]

use chrono::NaiveDate;
use mt_toolchain_core::generate::model::{
    Balance, BalanceSide, Beneficiary, CreditTransfer, CurrencyAmount, InstitutionId,
    InstitutionTransfer, MessageBody, OrderingCustomer, Statement, StatementSummary,
};
use mt_toolchain_core::{Diagnostic, GenerateRequest, SubFields};
use rust_decimal::Decimal;

/// The worked single-customer-credit-transfer example: output application
/// header, multi-line beneficiary, mandatory fields only.
pub const SAMPLE_MT103: &str = "{1:F01AAAABBCCXXX0000000000}{2:O1030000000000AAAABBCCXXX00000000000000000000N}{4:\r\n:20:REF1\r\n:23B:CRED\r\n:32A:240101USD100,00\r\n:59:/ACC\r\nNAME\r\n:71A:SHA\r\n-}";

/// A minimal MT940 with both balances and one statement line.
pub const SAMPLE_MT940: &str = "{1:F01AAAABBCCXXX0000000000}{2:I940DDDDEEFFXXXXN}{4:\r\n:20:STMT1\r\n:25:12345678/001\r\n:28C:1/1\r\n:60F:C240101EUR1000,00\r\n:61:2401020102D100,00NTRFNONREF\r\n:62F:C240102EUR900,00\r\n-}";

// ─── Diagnostic helpers ──────────────────────────────────────────────────────

/// Find the first diagnostic with the given code.
#[allow(dead_code)]
pub fn find_diag<'a>(diags: &'a [Diagnostic], code: &str) -> &'a Diagnostic {
    diags
        .iter()
        .find(|d| &*d.id == code)
        .unwrap_or_else(|| panic!("expected diagnostic {code}, got {diags:?}"))
}

/// Whether any diagnostic carries the given code.
#[allow(dead_code)]
pub fn has_code(diags: &[Diagnostic], code: &str) -> bool {
    diags.iter().any(|d| &*d.id == code)
}

/// Collect the codes of a diagnostic list, in order.
#[allow(dead_code)]
pub fn codes_of(diags: &[Diagnostic]) -> Vec<String> {
    diags.iter().map(|d| d.id.to_string()).collect()
}

// ─── Date/amount fixtures ────────────────────────────────────────────────────

#[allow(dead_code)]
pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid fixture date")
}

#[allow(dead_code)]
pub fn dec(units: i64, scale: u32) -> Decimal {
    Decimal::new(units, scale)
}

// ─── Generation request builders ─────────────────────────────────────────────

#[allow(dead_code)]
pub fn request(body: MessageBody) -> GenerateRequest {
    GenerateRequest {
        sender: "AAAABBCC".to_string(),
        receiver: "DDDDEEFF".to_string(),
        user_header: SubFields::new(),
        body,
    }
}

/// Mandatory fields only.
#[allow(dead_code)]
pub fn credit_transfer_minimal() -> CreditTransfer {
    CreditTransfer {
        reference: "REF1".to_string(),
        operation_code: "CRED".to_string(),
        value_date: date(2024, 1, 1),
        currency: "USD".to_string(),
        amount: dec(10000, 2),
        instructed_amount: None,
        ordering_customer: None,
        beneficiary: Beneficiary::NameAddress {
            lines: vec!["/ACC".to_string(), "NAME".to_string()],
        },
        charge_code: "SHA".to_string(),
        remittance_info: Vec::new(),
        sender_to_receiver: Vec::new(),
    }
}

/// Every optional field populated.
#[allow(dead_code)]
pub fn credit_transfer_full() -> CreditTransfer {
    CreditTransfer {
        instructed_amount: Some(CurrencyAmount {
            currency: "EUR".to_string(),
            amount: dec(9250, 2),
        }),
        ordering_customer: Some(OrderingCustomer::NameAddress {
            lines: vec![
                "/9876543210".to_string(),
                "ORDERING CORP".to_string(),
                "1 MAIN STREET".to_string(),
            ],
        }),
        remittance_info: vec![
            "INVOICE 4711".to_string(),
            "ORDER 2024-17".to_string(),
            "PART SHIPMENT".to_string(),
        ],
        sender_to_receiver: vec!["/ACC/SETTLE SAME DAY".to_string()],
        ..credit_transfer_minimal()
    }
}

/// Mandatory fields only.
#[allow(dead_code)]
pub fn institution_transfer_minimal() -> InstitutionTransfer {
    InstitutionTransfer {
        reference: "TRN1".to_string(),
        related_reference: "RELREF".to_string(),
        value_date: date(2024, 1, 2),
        currency: "EUR".to_string(),
        amount: dec(500000, 2),
        ordering_institution: None,
        account_with_institution: None,
        beneficiary_institution: InstitutionId::Bic {
            account: None,
            bic: "GGGGHHII".to_string(),
        },
        sender_to_receiver: Vec::new(),
    }
}

#[allow(dead_code)]
pub fn institution_transfer_full() -> InstitutionTransfer {
    InstitutionTransfer {
        ordering_institution: Some(InstitutionId::Bic {
            account: Some("123456".to_string()),
            bic: "JJJJKKLL".to_string(),
        }),
        account_with_institution: Some(InstitutionId::NameAddress {
            lines: vec!["SOME BANK".to_string(), "SOME CITY".to_string()],
        }),
        sender_to_receiver: vec!["/INS/COVER".to_string()],
        ..institution_transfer_minimal()
    }
}

#[allow(dead_code)]
pub fn balance(side: BalanceSide, ymd: (i32, u32, u32), currency: &str, amount: Decimal) -> Balance {
    Balance {
        side,
        date: date(ymd.0, ymd.1, ymd.2),
        currency: currency.to_string(),
        amount,
    }
}

/// Mandatory fields only.
#[allow(dead_code)]
pub fn statement_minimal() -> Statement {
    Statement {
        reference: "STMT1".to_string(),
        related_reference: None,
        account: "12345678/001".to_string(),
        statement_number: "1/1".to_string(),
        opening_balance: balance(BalanceSide::Credit, (2024, 1, 1), "EUR", dec(100000, 2)),
        statement_lines: Vec::new(),
        info_to_account_owner: Vec::new(),
        closing_balance: balance(BalanceSide::Credit, (2024, 1, 2), "EUR", dec(90000, 2)),
        closing_available: None,
        forward_available: Vec::new(),
    }
}

#[allow(dead_code)]
pub fn statement_full() -> Statement {
    Statement {
        related_reference: Some("PREV".to_string()),
        statement_lines: vec![
            "2401020102D100,00NTRFNONREF".to_string(),
            "2401020102C250,00NTRFNONREF".to_string(),
        ],
        info_to_account_owner: vec!["SALARY PAYMENTS".to_string()],
        closing_available: Some(balance(
            BalanceSide::Credit,
            (2024, 1, 2),
            "EUR",
            dec(90000, 2),
        )),
        forward_available: vec![
            balance(BalanceSide::Credit, (2024, 1, 3), "EUR", dec(90000, 2)),
            balance(BalanceSide::Credit, (2024, 1, 4), "EUR", dec(91000, 2)),
        ],
        ..statement_minimal()
    }
}

/// Mandatory fields only.
#[allow(dead_code)]
pub fn statement_summary_minimal() -> StatementSummary {
    StatementSummary {
        reference: "SUM1".to_string(),
        account: "12345678/001".to_string(),
        statement_number: "7/1".to_string(),
        opening_balance: balance(BalanceSide::Debit, (2024, 2, 1), "GBP", dec(50000, 2)),
        statement_lines: Vec::new(),
        closing_balance: balance(BalanceSide::Debit, (2024, 2, 2), "GBP", dec(45000, 2)),
        closing_available: None,
    }
}

#[allow(dead_code)]
pub fn statement_summary_full() -> StatementSummary {
    StatementSummary {
        statement_lines: vec!["2402020202C50,00NTRFNONREF".to_string()],
        closing_available: Some(balance(
            BalanceSide::Debit,
            (2024, 2, 2),
            "GBP",
            dec(45000, 2),
        )),
        ..statement_summary_minimal()
    }
}
