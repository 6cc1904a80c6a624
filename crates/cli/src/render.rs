//! Diagnostic rendering for terminal and machine consumption.
//!
//! Pretty output prints one `severity[code]: message (field tag)` line per
//! diagnostic to stderr, with the code's explanation as a help note when
//! available. JSON output is a single structured envelope on stdout for
//! piping into other tooling.

use std::io::{self, IsTerminal};

use mt_toolchain_diagnostics::{Diagnostic, Severity};

// ── Output format ───────────────────────────────────────────────────────

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Format {
    /// Human-readable terminal output.
    Pretty,
    /// Machine-readable JSON.
    Json,
}

impl Format {
    /// Resolve an explicit `--output` choice, defaulting to pretty for
    /// interactive terminals and JSON for pipes.
    pub(crate) fn resolve_or_detect(explicit: Option<&str>) -> Self {
        match explicit {
            Some("json") => Format::Json,
            Some("pretty") => Format::Pretty,
            _ => {
                if io::stdout().is_terminal() {
                    Format::Pretty
                } else {
                    Format::Json
                }
            }
        }
    }
}

// ── Pretty rendering ────────────────────────────────────────────────────

/// Render diagnostics as human-readable lines on stderr.
pub(crate) fn render_diagnostics_pretty(diagnostics: &[Diagnostic]) {
    for diag in diagnostics {
        eprintln!("{diag}");
        if let Some(ctx) = &diag.context {
            let note: String = ctx
                .iter()
                .map(|(k, v)| format!("{k}={v}"))
                .collect::<Vec<_>>()
                .join(", ");
            eprintln!("  = note: {note}");
        }
        if let Some(explanation) = diag.explain() {
            eprintln!("  = help: {explanation}");
        }
    }
}

/// One-line verdict summary after validation.
pub(crate) fn print_summary(ok: bool, message_type: &str, errors: usize, warnings: usize) {
    let verdict = if ok { "valid" } else { "INVALID" };
    let shown = if message_type.is_empty() {
        "(unknown type)"
    } else {
        message_type
    };
    println!("{shown}: {verdict} ({errors} error(s), {warnings} warning(s))");
}

/// Count diagnostics of a given severity.
pub(crate) fn count_severity(diags: &[Diagnostic], severity: &Severity) -> usize {
    diags.iter().filter(|d| d.severity == *severity).count()
}
