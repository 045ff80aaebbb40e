use std::io::IsTerminal;
use std::path::Path;

use clap::ValueEnum;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use fastblocks_frame::FramerSummary;
use serde::Serialize;

#[derive(Clone, Debug, Copy, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Pretty,
}

impl OutputFormat {
    pub fn default_for_stdout() -> Self {
        if std::io::stdout().is_terminal() {
            Self::Table
        } else {
            Self::Json
        }
    }
}

#[derive(Serialize)]
struct SummaryOutput<'a> {
    messages: u64,
    bytes_copied: u64,
    output: &'a str,
}

pub fn print_summary(summary: &FramerSummary, output_path: &Path, format: OutputFormat) {
    let output = output_path.display().to_string();
    match format {
        OutputFormat::Json => {
            let out = SummaryOutput {
                messages: summary.messages,
                bytes_copied: summary.bytes_copied,
                output: &output,
            };
            println!(
                "{}",
                serde_json::to_string(&out).unwrap_or_else(|_| "{}".to_string())
            );
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["MESSAGES", "BYTES", "OUTPUT"])
                .add_row(vec![
                    summary.messages.to_string(),
                    summary.bytes_copied.to_string(),
                    output,
                ]);
            println!("{table}");
        }
        OutputFormat::Pretty => {
            println!(
                "messages={} bytes={} output={}",
                summary.messages, summary.bytes_copied, output
            );
        }
    }
}
