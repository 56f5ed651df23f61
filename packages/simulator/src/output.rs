//! Output writers for simulation results.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use flate2::write::GzEncoder;
use flate2::Compression;

use crate::metrics::{CsvSummaryRow, GameMetrics};

pub struct OutputWriter {
    jsonl_writer: Box<dyn Write + Send>,
    csv_writer: csv::Writer<BufWriter<File>>,
    jsonl_path: PathBuf,
    csv_path: PathBuf,
}

impl OutputWriter {
    pub fn new(output_dir: &Path, compress: bool) -> Result<Self, Box<dyn std::error::Error>> {
        std::fs::create_dir_all(output_dir)?;

        let timestamp = time::OffsetDateTime::now_utc()
            .format(&time::format_description::well_known::Iso8601::DEFAULT)
            .unwrap_or_else(|_| "unknown".to_string())
            .replace(':', "-");

        let filename = format!("simulation_{timestamp}.jsonl");
        let (jsonl_writer, jsonl_path): (Box<dyn Write + Send>, PathBuf) = if compress {
            let gz_path = output_dir.join(format!("{filename}.gz"));
            let writer = BufWriter::new(GzEncoder::new(File::create(&gz_path)?, Compression::default()));
            (Box::new(writer), gz_path)
        } else {
            let path = output_dir.join(&filename);
            let file = OpenOptions::new()
                .create(true)
                .write(true)
                .truncate(true)
                .open(&path)?;
            (Box::new(BufWriter::new(file)), path)
        };

        // The header comes from the first serialized row.
        let csv_path = output_dir.join(format!("simulation_{timestamp}_summary.csv"));
        let csv_writer = csv::Writer::from_writer(BufWriter::new(File::create(&csv_path)?));

        Ok(Self {
            jsonl_writer,
            csv_writer,
            jsonl_path,
            csv_path,
        })
    }

    pub fn write_game(&mut self, metrics: &GameMetrics) -> Result<(), Box<dyn std::error::Error>> {
        let json = serde_json::to_string(metrics)?;
        writeln!(self.jsonl_writer, "{json}")?;

        let row: CsvSummaryRow = metrics.into();
        self.csv_writer.serialize(&row)?;
        Ok(())
    }

    /// Flush both files; dropping the writers finishes the gzip stream.
    pub fn finish(mut self) -> Result<(), Box<dyn std::error::Error>> {
        self.jsonl_writer.flush()?;
        self.csv_writer.flush()?;
        Ok(())
    }

    pub fn output_paths(&self) -> (&Path, &Path) {
        (&self.jsonl_path, &self.csv_path)
    }
}
