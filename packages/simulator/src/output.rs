//! JSONL output for simulation results.

use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use time::format_description::well_known::Iso8601;
use time::OffsetDateTime;

use crate::metrics::GameRecord;

pub struct OutputWriter {
    writer: BufWriter<File>,
    path: PathBuf,
}

impl OutputWriter {
    /// Create `<dir>/simulation_<iso-8601 utc>.jsonl`, creating `dir` if needed.
    ///
    /// Never reuses an existing file: a clashing name gets a `_<n>` suffix.
    pub fn new(output_dir: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let dir = Path::new(output_dir);
        std::fs::create_dir_all(dir)?;

        let timestamp = OffsetDateTime::now_utc()
            .format(&Iso8601::DEFAULT)
            .unwrap_or_else(|_| "unknown".to_string())
            .replace(':', "-");
        let (file, path) = create_unique(dir, &timestamp)?;

        Ok(Self {
            writer: BufWriter::new(file),
            path,
        })
    }

    pub fn write_game(&mut self, record: &GameRecord) -> Result<(), Box<dyn std::error::Error>> {
        let json = serde_json::to_string(record)?;
        writeln!(self.writer, "{json}")?;
        self.writer.flush()?;
        Ok(())
    }

    pub fn finish(mut self) -> Result<PathBuf, Box<dyn std::error::Error>> {
        self.writer.flush()?;
        Ok(self.path)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn create_unique(dir: &Path, timestamp: &str) -> io::Result<(File, PathBuf)> {
    let mut attempt = 0u32;
    loop {
        let name = match attempt {
            0 => format!("simulation_{timestamp}.jsonl"),
            n => format!("simulation_{timestamp}_{n}.jsonl"),
        };
        let path = dir.join(name);
        match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(file) => return Ok((file, path)),
            Err(e) if e.kind() == ErrorKind::AlreadyExists => attempt += 1,
            Err(e) => return Err(e),
        }
    }
}
