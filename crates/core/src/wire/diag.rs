pub use mt_toolchain_diagnostics::{Diagnostic, Severity, codes, explain};
