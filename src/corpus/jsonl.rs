//! JSON Lines reading and writing of [`TokenizedText`] records.
//!
//! Each line holds one record:
//! ```jsonl
//! {"url": "https://example.org/a", "text": "Cats sleep .", "shapes": "Xxxx xxxx .", "tags": "NOUN VERB PUNCT", "lemmas": "cat sleep .", "num_words": 2}
//! ```
//! Blank lines are skipped. Record order is preserved, which matters because
//! the first record of a source is its deduplication pivot.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use log::debug;

use crate::corpus::text::TokenizedText;
use crate::error::{ConcordanceError, Result};

/// Read records from any buffered reader.
pub fn read_records<R: BufRead>(reader: R) -> Result<Vec<TokenizedText>> {
    let mut records = Vec::new();
    for (line_num, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let record: TokenizedText = serde_json::from_str(&line).map_err(|e| {
            ConcordanceError::invalid_argument(format!("line {}: {e}", line_num + 1))
        })?;
        records.push(record);
    }
    Ok(records)
}

/// Read records from a JSONL file.
pub fn load_records<P: AsRef<Path>>(path: P) -> Result<Vec<TokenizedText>> {
    let path = path.as_ref();
    let records = read_records(BufReader::new(File::open(path)?))?;
    debug!("Loaded {} records from {}", records.len(), path.display());
    Ok(records)
}

/// Write records to any writer, one JSON object per line.
pub fn write_records<W: Write>(writer: W, records: &[TokenizedText]) -> Result<()> {
    let mut writer = BufWriter::new(writer);
    for record in records {
        serde_json::to_writer(&mut writer, record)?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;
    Ok(())
}

/// Write records to a JSONL file, replacing it if it exists.
pub fn save_records<P: AsRef<Path>>(path: P, records: &[TokenizedText]) -> Result<()> {
    let path = path.as_ref();
    write_records(File::create(path)?, records)?;
    debug!("Saved {} records to {}", records.len(), path.display());
    Ok(())
}
