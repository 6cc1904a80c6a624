mod render;

use std::fs;
use std::process;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use mt_toolchain_core::{
    GenerateRequest, decode, generate, registry, to_pretty_json, validate_str,
};
use mt_toolchain_diagnostics as diag;

use crate::render::{Format, count_severity, print_summary, render_diagnostics_pretty};

// ── CLI definition ──────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(
    name = "mtfin",
    version,
    about = "MT toolchain — decode, validate, and generate SWIFT FIN (MT) messages"
)]
struct Cli {
    /// Output mode: "pretty" for terminal output, "json" for
    /// machine-readable JSON. Defaults to "pretty" when stdout is a TTY,
    /// "json" otherwise.
    #[arg(long, global = true, value_parser = ["pretty", "json"])]
    output: Option<String>,

    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// Decode an MT message file and print the structured record.
    Parse {
        /// Path to the raw message file.
        file: String,
        /// Treat the input as bare block-4 content (lenient mode).
        #[arg(long)]
        body_only: bool,
    },

    /// Decode and validate an MT message file. Exits 1 when invalid.
    Validate {
        /// Path to the raw message file.
        file: String,
    },

    /// Generate wire text from a JSON generation request.
    Generate {
        /// Path to the JSON request file.
        file: String,
        /// Write the wire text to this path instead of stdout.
        #[arg(long, short)]
        out: Option<String>,
    },

    /// Explain a diagnostic ID (e.g. MT1101).
    Explain {
        /// The diagnostic code to explain.
        id: String,
    },
}

// ── Main ────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();
    let format = Format::resolve_or_detect(cli.output.as_deref());

    match cli.cmd {
        Cmd::Parse { file, body_only } => cmd_parse(&file, body_only, format)?,
        Cmd::Validate { file } => cmd_validate(&file, format)?,
        Cmd::Generate { file, out } => cmd_generate(&file, out.as_deref())?,
        Cmd::Explain { id } => cmd_explain(&id, format)?,
    }

    Ok(())
}

// ── Commands ────────────────────────────────────────────────────────────

fn cmd_parse(file: &str, body_only: bool, format: Format) -> Result<()> {
    let input = fs::read_to_string(file).with_context(|| format!("reading {file}"))?;
    let record = if body_only {
        mt_toolchain_core::decode_body(&input)
    } else {
        decode(&input)
    };

    match format {
        Format::Json => println!("{}", to_pretty_json(&record)),
        Format::Pretty => {
            let shown = if record.message_type.is_empty() {
                "(unknown type)"
            } else {
                record.message_type.as_str()
            };
            println!("message type: {shown}");
            if !record.basic_header.address.is_empty() {
                println!("sender LT:    {}", record.basic_header.address);
            }
            for (tag, value) in record.fields.iter() {
                let joined = value.joined();
                match value.line_count() {
                    1 => println!(":{tag}: {joined}"),
                    n => println!(":{tag}: ({n} lines) {}", joined.replace('\n', " / ")),
                }
            }
        }
    }
    Ok(())
}

fn cmd_validate(file: &str, format: Format) -> Result<()> {
    let input = fs::read_to_string(file).with_context(|| format!("reading {file}"))?;
    let result = validate_str(&input, registry());

    match format {
        Format::Json => {
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        Format::Pretty => {
            render_diagnostics_pretty(&result.errors);
            render_diagnostics_pretty(&result.warnings);
            print_summary(
                result.ok,
                &result.message_type,
                count_severity(&result.errors, &diag::Severity::Error),
                result.warnings.len(),
            );
        }
    }

    if !result.ok {
        process::exit(1);
    }
    Ok(())
}

fn cmd_generate(file: &str, out: Option<&str>) -> Result<()> {
    let input = fs::read_to_string(file).with_context(|| format!("reading {file}"))?;
    let request: GenerateRequest =
        serde_json::from_str(&input).with_context(|| format!("parsing request {file}"))?;

    let wire = generate(&request).context("generation failed")?;

    match out {
        Some(path) => {
            fs::write(path, &wire).with_context(|| format!("writing {path}"))?;
            eprintln!("wrote {} bytes to {path}", wire.len());
        }
        None => println!("{wire}"),
    }
    Ok(())
}

fn cmd_explain(id: &str, format: Format) -> Result<()> {
    let normalized = id.trim().to_ascii_uppercase();
    match diag::explain(&normalized) {
        Some(text) => match format {
            Format::Json => println!(
                "{}",
                serde_json::json!({ "id": normalized, "explanation": text })
            ),
            Format::Pretty => {
                println!("{normalized}");
                println!("{text}");
            }
        },
        None => {
            eprintln!("unknown diagnostic id: {normalized}");
            process::exit(1);
        }
    }
    Ok(())
}
