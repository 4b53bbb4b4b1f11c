//! Output formatting for CLI commands.

use std::io::{self, Write};

use serde::{Deserialize, Serialize};

use crate::cli::args::{ConcordanceArgs, OutputFormat};
use crate::error::Result;

/// Result of cleaning one source file.
#[derive(Debug, Serialize, Deserialize)]
pub struct SourceCleanResult {
    pub file: String,
    pub texts: usize,
    pub total_removed: usize,
    pub error: Option<String>,
}

/// Result structure for a cleaning run over several sources.
#[derive(Debug, Serialize, Deserialize)]
pub struct CleanSummary {
    pub sources: Vec<SourceCleanResult>,
    pub total_removed: usize,
    pub duration_ms: u64,
}

/// Output a result to stdout in the format selected on the command line.
pub fn output_result<T: Serialize>(message: &str, result: &T, args: &ConcordanceArgs) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_result(&mut out, message, result, args.output_format, args.pretty, args.verbosity())
}

/// Write a result in the given format.
pub fn write_result<T: Serialize, W: Write>(
    out: &mut W,
    message: &str,
    result: &T,
    format: OutputFormat,
    pretty: bool,
    verbosity: u8,
) -> Result<()> {
    match format {
        OutputFormat::Human => write_human(out, message, result, verbosity),
        OutputFormat::Json => write_json(out, result, pretty),
        OutputFormat::Csv => write_csv(out, result),
    }
}

/// Output in human-readable format.
fn write_human<T: Serialize, W: Write>(
    out: &mut W,
    message: &str,
    result: &T,
    verbosity: u8,
) -> Result<()> {
    if verbosity > 0 && !message.is_empty() {
        writeln!(out, "{message}")?;
        writeln!(out)?;
    }

    let value = serde_json::to_value(result)?;
    match &value {
        serde_json::Value::Array(items) => {
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    writeln!(out)?;
                }
                writeln!(out, "#{}", i + 1)?;
                write_fields(out, item)?;
            }
            if items.is_empty() {
                writeln!(out, "No results.")?;
            }
        }
        other => write_fields(out, other)?,
    }
    Ok(())
}

fn write_fields<W: Write>(out: &mut W, value: &serde_json::Value) -> Result<()> {
    match value {
        serde_json::Value::Object(obj) => {
            for (key, val) in obj {
                let formatted_val = format_value(val);
                writeln!(out, "{key}: {formatted_val}")?;
            }
        }
        _ => {
            let formatted_value = format_value(value);
            writeln!(out, "{formatted_value}")?;
        }
    }
    Ok(())
}

/// Output in JSON format.
fn write_json<T: Serialize, W: Write>(out: &mut W, result: &T, pretty: bool) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    writeln!(out, "{json}")?;
    Ok(())
}

/// Output in CSV format.
fn write_csv<T: Serialize, W: Write>(out: &mut W, result: &T) -> Result<()> {
    let value = serde_json::to_value(result)?;

    match value {
        serde_json::Value::Array(arr) => {
            for (i, item) in arr.iter().enumerate() {
                if i == 0
                    && let Some(obj) = item.as_object()
                {
                    let headers: Vec<&str> = obj.keys().map(String::as_str).collect();
                    writeln!(out, "{}", headers.join(","))?;
                }

                if let Some(obj) = item.as_object() {
                    let values: Vec<String> = obj.values().map(format_csv_value).collect();
                    writeln!(out, "{}", values.join(","))?;
                }
            }
        }
        serde_json::Value::Object(obj) => {
            writeln!(out, "key,value")?;
            for (key, value) in obj {
                let formatted_csv_value = format_csv_value(&value);
                writeln!(out, "{key},{formatted_csv_value}")?;
            }
        }
        _ => {
            writeln!(out, "value")?;
            let formatted_csv_value = format_csv_value(&value);
            writeln!(out, "{formatted_csv_value}")?;
        }
    }

    Ok(())
}

/// Format a value for display.
fn format_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        serde_json::Value::Array(arr) => {
            let formatted_values = arr.iter().map(format_value).collect::<Vec<_>>().join(", ");
            format!("[{formatted_values}]")
        }
        serde_json::Value::Object(obj) => {
            let fields = obj
                .iter()
                .map(|(k, v)| format!("{k}={}", format_value(v)))
                .collect::<Vec<_>>()
                .join(" ");
            format!("{{{fields}}}")
        }
        serde_json::Value::Null => "null".to_string(),
    }
}

/// Format a value as a CSV cell, quoting when needed.
fn format_csv_value(value: &serde_json::Value) -> String {
    let raw = match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Null => return String::new(),
        serde_json::Value::Array(arr) => {
            let formatted_values = arr.iter().map(format_value).collect::<Vec<_>>().join("; ");
            format!("[{formatted_values}]")
        }
        other => format_value(other),
    };

    if raw.contains(',') || raw.contains('"') || raw.contains('\n') {
        let escaped = raw.replace('"', "\"\"");
        format!("\"{escaped}\"")
    } else {
        raw
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::window::ContextWindow;

    fn render<T: Serialize>(result: &T, format: OutputFormat) -> String {
        let mut buffer = Vec::new();
        write_result(&mut buffer, "Results", result, format, false, 1).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    fn window() -> ContextWindow {
        ContextWindow {
            left: "a, b".to_string(),
            left_reverse: "b ,a".to_string(),
            center: "cat".to_string(),
            center_reverse: "tac".to_string(),
            right: "says \"hi\"".to_string(),
            source: "https://example.org".to_string(),
            title: "T".to_string(),
        }
    }

    #[test]
    fn test_csv_quotes_cells() {
        let csv = render(&vec![window()], OutputFormat::Csv);
        let mut lines = csv.lines();
        assert_eq!(
            lines.next().unwrap(),
            "center,center_reverse,left,left_reverse,right,source,title"
        );
        assert_eq!(
            lines.next().unwrap(),
            "cat,tac,\"a, b\",\"b ,a\",\"says \"\"hi\"\"\",https://example.org,T"
        );
    }

    #[test]
    fn test_json_round_trips() {
        let json = render(&vec![window()], OutputFormat::Json);
        let back: Vec<ContextWindow> = serde_json::from_str(json.trim()).unwrap();
        assert_eq!(back, vec![window()]);
    }

    #[test]
    fn test_human_lists_items() {
        let human = render(&vec![window(), window()], OutputFormat::Human);
        assert!(human.starts_with("Results\n\n#1\n"));
        assert!(human.contains("#2\n"));
        assert!(human.contains("center: cat\n"));

        let empty: Vec<ContextWindow> = Vec::new();
        assert!(render(&empty, OutputFormat::Human).contains("No results."));
    }
}
