//! Table writers: delimited text with a header row, or JSON Lines

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::info;

use super::{DatasetError, TableKind, TableRow, Tables};
use crate::config::OutputFormat;

const DELIMITER: char = ',';

/// Quote a field if it contains the delimiter, a quote or a line break.
fn escape_field(field: &str) -> std::borrow::Cow<'_, str> {
    if field.contains([DELIMITER, '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\"")).into()
    } else {
        field.into()
    }
}

/// Write `rows` to `out` in `format`.
pub fn write_table<T: TableRow, W: Write>(
    rows: &[T],
    format: OutputFormat,
    mut out: W,
) -> Result<(), DatasetError> {
    match format {
        OutputFormat::Csv => {
            writeln!(out, "{}", T::HEADER.join(&DELIMITER.to_string()))?;
            for row in rows {
                let line: Vec<_> = row.fields().iter().map(|f| escape_field(f).into_owned()).collect();
                writeln!(out, "{}", line.join(&DELIMITER.to_string()))?;
            }
        }
        OutputFormat::Json => {
            for row in rows {
                serde_json::to_writer(&mut out, row)?;
                writeln!(out)?;
            }
        }
    }
    out.flush()?;
    Ok(())
}

/// Paths of the files written for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetPaths {
    pub motor: PathBuf,
    pub blade: PathBuf,
    pub combined: PathBuf,
}

/// Writes the three tables of a run into one directory.
#[derive(Debug, Clone)]
pub struct DatasetWriter {
    dir: PathBuf,
    format: OutputFormat,
}

impl DatasetWriter {
    pub fn new(dir: impl Into<PathBuf>, format: OutputFormat) -> Self {
        Self { dir: dir.into(), format }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Destination of `kind` under this writer's directory.
    pub fn path_for(&self, kind: TableKind) -> PathBuf {
        let extension = match self.format {
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "jsonl",
        };
        self.dir.join(format!("{}.{extension}", kind.file_stem()))
    }

    /// Write all three tables, creating the directory if needed.
    pub fn write_all(&self, tables: &Tables) -> Result<DatasetPaths, DatasetError> {
        std::fs::create_dir_all(&self.dir)?;

        let paths = DatasetPaths {
            motor: self.write_file(TableKind::Motor, &tables.motor)?,
            blade: self.write_file(TableKind::Blade, &tables.blade)?,
            combined: self.write_file(TableKind::Combined, &tables.combined)?,
        };
        Ok(paths)
    }

    /// Stream one table to `out` in this writer's format.
    pub fn write_kind<W: Write>(&self, kind: TableKind, tables: &Tables, out: W) -> Result<(), DatasetError> {
        match kind {
            TableKind::Motor => write_table(&tables.motor, self.format, out),
            TableKind::Blade => write_table(&tables.blade, self.format, out),
            TableKind::Combined => write_table(&tables.combined, self.format, out),
        }
    }

    fn write_file<T: TableRow>(&self, kind: TableKind, rows: &[T]) -> Result<PathBuf, DatasetError> {
        let path = self.path_for(kind);
        let file = File::create(&path)?;
        write_table(rows, self.format, BufWriter::new(file))?;
        info!(table = %kind, rows = rows.len(), path = %path.display(), "Dataset table written");
        Ok(path)
    }
}
