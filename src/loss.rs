use crate::{LossKind, Record};

/// Drop record statistics by kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LossCounts {
    total: u64,
    kinds: [u64; LossKind::ALL.len()],
}

impl LossCounts {
    pub fn update(&mut self, record: &Record) {
        self.total += 1;
        if let Some(kind) = record.kind() {
            self.kinds[kind as usize - 1] += 1;
        } else {
            log::debug!("Unknown drop kind {} for {}", record.tag, record.seq);
        }
    }

    /// Number of valid records, including those of unknown kind.
    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn count(&self, kind: LossKind) -> u64 {
        self.kinds[kind as usize - 1]
    }

    /// Share of `kind` among all records in percent.
    pub fn percentage(&self, kind: LossKind) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.count(kind) as f64 / self.total as f64 * 100.0
    }

    pub fn analyze(&self) {
        if self.total > 0 {
            for kind in LossKind::ALL {
                log::info!(
                    "Loss {}: {:.2} % ({} of {})",
                    kind.name(),
                    self.percentage(kind),
                    self.count(kind),
                    self.total
                );
            }
        }
    }
}
