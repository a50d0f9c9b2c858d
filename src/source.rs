use crate::{encode, Error, LossCounts, Record, Window};
use clap::Parser;
use std::io::BufRead;
use std::path::Path;
use std::{fs::File, io::BufReader};

/// Switch drop log source options
#[derive(Parser, Debug, Clone)]
pub struct SourceOpts {
    /// Switch drop log to analyze
    pub file: String,

    /// Bitmap width of each window (1 to 256)
    #[arg(short, long, default_value_t = 16)]
    pub width: usize,
}

/// Drop records of one log: per kind counts and the distinct dropped
/// sequence numbers in ascending order.
#[derive(Debug, Clone, Default)]
pub struct DropLog {
    pub counts: LossCounts,
    pub seqs: Vec<u32>,
}

impl DropLog {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, Error> {
        Self::from_reader(BufReader::with_capacity(1 << 20, File::open(path)?))
    }

    /// Collect all well-formed records, skipping malformed lines.
    pub fn from_reader(reader: impl BufRead) -> Result<Self, Error> {
        let mut log = Self::default();
        let mut skipped = 0;
        for line in reader.lines() {
            match Record::parse(&line?) {
                Some(record) => {
                    log.counts.update(&record);
                    log.seqs.push(record.seq);
                }
                None => skipped += 1,
            }
        }
        log.seqs.sort_unstable();
        let n = log.seqs.len();
        log.seqs.dedup();
        if n > log.seqs.len() {
            log::debug!("Dropped {} duplicate sequence numbers", n - log.seqs.len());
        }
        log::debug!(
            "Read {} records, skipped {} lines",
            log.counts.total(),
            skipped
        );
        Ok(log)
    }

    pub fn windows(&self, width: usize) -> Result<Vec<Window>, Error> {
        encode(&self.seqs, width)
    }
}
