//! lsline — directory listing parser.
//!
//! Reads raw listing text from a file-transfer server, parses each line with
//! an explicitly chosen convention, and prints the resulting file records.
//! The parsing engine lives in [`lsline_core`]; this crate only wires input,
//! configuration and output around it.
//!
//! # Flow
//!
//! ```text
//! input text ──► parse_lines(EntryParser) ──► Vec<FileRecord> ──► render
//! ```

pub use lsline_core::config::{Config, OutputConfig, OutputFormat};
pub use lsline_core::{parse_lines, Convention, EntryParser, FileRecord, Timestamp};

/// Parse `text` with the configured convention and render every record.
pub fn run(config: &Config, text: &str) -> anyhow::Result<String> {
    let parser = config.parser.convention.parser(config.parser.reference_date)?;
    let records = parse_lines(parser.as_ref(), text)?;
    render(&records, &config.output)
}

/// Render records in the configured output format, one per line.
pub fn render(records: &[FileRecord], output: &OutputConfig) -> anyhow::Result<String> {
    let mut out = String::new();
    for record in records {
        let line = match output.format {
            OutputFormat::Json => serde_json::to_string(record)?,
            OutputFormat::Table => table_row(record, output),
        };
        out.push_str(&line);
        out.push('\n');
    }
    Ok(out)
}

/// One aligned text row: type, owner, group, size, timestamp, name.
pub fn table_row(record: &FileRecord, output: &OutputConfig) -> String {
    let size = record.size.map_or_else(|| "-".to_string(), |s| s.to_string());
    let ts = record.timestamp.map_or_else(
        || "-".to_string(),
        |ts| ts.format(&output.date_format, &output.minute_format),
    );
    let name = match &record.link_target {
        Some(target) => format!("{} -> {}", record.name, target),
        None => record.name.clone(),
    };
    format!(
        "{:<4} {:<8} {:<8} {:>10} {:<16} {}",
        record.kind.to_string(),
        record.owner,
        record.group,
        size,
        ts,
        name
    )
}
