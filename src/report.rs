use crate::{LossCounts, LossKind, Window};
use std::io::{Result, Write};

/// Report options
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportOpts {
    /// Also print the packed wire words of each bitmap
    pub wire: bool,
}

/// Write the human readable drop summary of log `name`.
///
/// Each window line prints the window anchor `start`, one before the first
/// sequence number the bitmap describes.
pub fn write_report(
    out: &mut impl Write,
    name: &str,
    counts: &LossCounts,
    windows: &[Window],
    opts: ReportOpts,
) -> Result<()> {
    if counts.total() == 0 {
        writeln!(out, "No valid records in {}", name)?;
        return Ok(());
    }
    writeln!(out, "Analyzing {}", name)?;
    writeln!(out, "Total records: {}", counts.total())?;
    writeln!(out, "Drops by kind:")?;
    for kind in LossKind::ALL {
        writeln!(
            out,
            "  Kind {} ({}): {} packets, {:.2} %",
            kind as u8,
            kind.name(),
            counts.count(kind),
            counts.percentage(kind)
        )?;
    }
    writeln!(out)?;
    writeln!(out, "Windows:")?;
    for (i, window) in windows.iter().enumerate() {
        writeln!(
            out,
            "  Window {}: start={}, length={}, bitmap={}",
            i + 1,
            window.start(),
            window.len(),
            window
        )?;
        if opts.wire {
            let words: Vec<String> = window
                .wire_words()
                .iter()
                .map(|w| format!("{:#018x}", w))
                .collect();
            writeln!(out, "    wire=[{}]", words.join(", "))?;
        }
    }
    Ok(())
}
