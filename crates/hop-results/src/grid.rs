//! Grid CSV input and output.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use csv::{Reader, Writer};
use tracing::info;

use crate::{GridRecord, ResultsError, ResultsResult};

pub const DEFAULT_GRID_FILE: &str = "results/grid_results_day20.csv";

/// Read every record from a grid CSV file.
pub fn load_grid_csv(path: &Path) -> ResultsResult<Vec<GridRecord>> {
    if !path.exists() {
        return Err(ResultsError::NotFound(path.to_path_buf()));
    }
    let records = load_grid_reader(File::open(path)?)?;
    info!(path = %path.display(), rows = records.len(), "loaded grid results");
    Ok(records)
}

/// Read every record from any CSV source with a header row.
pub fn load_grid_reader<R: Read>(source: R) -> ResultsResult<Vec<GridRecord>> {
    let mut rdr = Reader::from_reader(source);
    let mut out = Vec::new();
    for rec in rdr.deserialize() {
        out.push(rec?);
    }
    Ok(out)
}

/// Write `records` to `path`, creating parent directories.
pub fn write_grid_csv(path: &Path, records: &[GridRecord]) -> ResultsResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let mut w = GridWriter::new(File::create(path)?);
    for r in records {
        w.write(r)?;
    }
    w.finish()?;
    info!(path = %path.display(), rows = records.len(), "wrote grid results");
    Ok(())
}

/// Streaming grid writer.  The header is written with the first record.
pub struct GridWriter<W: Write> {
    inner: Writer<W>,
}

impl<W: Write> GridWriter<W> {
    pub fn new(out: W) -> Self {
        Self { inner: Writer::from_writer(out) }
    }

    pub fn write(&mut self, record: &GridRecord) -> ResultsResult<()> {
        self.inner.serialize(record)?;
        Ok(())
    }

    pub fn finish(&mut self) -> ResultsResult<()> {
        self.inner.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> ResultsResult<W> {
        self.inner.into_inner().map_err(|e| e.into_error().into())
    }
}
