use clap::Parser;
use docx_format_check::{Mismatch, Resolution, Standards};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "docx-format-check",
    about = "Check DOCX paragraph fonts, sizes and line spacing against a standard"
)]
struct Args {
    /// DOCX file to check
    #[arg(default_value = "sample.docx")]
    input: PathBuf,
    /// JSON file with persian_font, english_font, font_size and line_spacing
    #[arg(short, long, default_value = "settings.json")]
    standards: PathBuf,
    /// Inherit missing formatting from paragraph styles and document defaults
    #[arg(long)]
    effective: bool,
    /// Print mismatches as a JSON array
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct JsonMismatch<'a> {
    #[serde(flatten)]
    mismatch: &'a Mismatch,
    message: String,
}

fn fail(message: impl std::fmt::Display) -> ! {
    eprintln!("Error: {message}");
    std::process::exit(1);
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    if !args.input.exists() {
        fail(format_args!("file not found: {}", args.input.display()));
    }
    if !args.input.is_file() {
        fail(format_args!("not a file: {}", args.input.display()));
    }

    let standards = Standards::load(&args.standards).unwrap_or_else(|e| fail(e));

    let resolution = if args.effective {
        Resolution::Effective
    } else {
        Resolution::Direct
    };

    let mismatches = docx_format_check::check_docx(&args.input, &standards, resolution)
        .unwrap_or_else(|e| fail(e));

    if args.json {
        let report: Vec<JsonMismatch> = mismatches
            .iter()
            .map(|mismatch| JsonMismatch {
                mismatch,
                message: mismatch.to_string(),
            })
            .collect();
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{json}"),
            Err(e) => fail(e),
        }
    } else if mismatches.is_empty() {
        println!("Formatting is correct.");
    } else {
        println!("Formatting errors:");
        for mismatch in &mismatches {
            println!("{mismatch}");
        }
    }
}
