use crate::error::{DevstatsError, Result};
use crate::normalize::Record;
use std::fs::OpenOptions;
use std::io::{Seek, SeekFrom, Write};
use std::path::Path;

fn output_err(e: impl std::fmt::Display) -> DevstatsError {
    DevstatsError::Output(e.to_string())
}

/// Writes the header row followed by one row per record.
pub fn write_records<W: Write>(writer: W, records: &[Record]) -> Result<()> {
    let mut csv = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    csv.write_record(Record::HEADERS).map_err(output_err)?;
    for record in records {
        csv.serialize(record).map_err(output_err)?;
    }
    csv.flush().map_err(output_err)?;
    Ok(())
}

pub fn render_csv(records: &[Record]) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    write_records(&mut buf, records)?;
    Ok(buf)
}

/// Overwrites `path` from offset zero without truncating it. A previous,
/// longer export leaves its tail behind.
pub fn export_to_file(path: &Path, records: &[Record]) -> Result<()> {
    let content = render_csv(records)?;

    let mut file = OpenOptions::new()
        .read(true)
        .write(true)
        .create(true)
        .truncate(false)
        .open(path)
        .map_err(|e| DevstatsError::Output(format!("opening {}: {e}", path.display())))?;
    file.seek(SeekFrom::Start(0))
        .map_err(|e| DevstatsError::Output(format!("seeking {}: {e}", path.display())))?;
    file.write_all(&content)
        .and_then(|()| file.flush())
        .map_err(|e| DevstatsError::Output(format!("writing {}: {e}", path.display())))?;

    tracing::debug!(path = %path.display(), bytes = content.len(), "wrote csv");
    Ok(())
}
