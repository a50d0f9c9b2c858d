use thiserror::Error;

mod window;
pub use window::*;
mod encode;
pub use encode::*;
mod record;
pub use record::*;
mod loss;
pub use loss::*;

pub mod report;
pub mod source;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Bitmap width {0} outside 1..={max}", max = MAX_WIDTH)]
    Width(usize),
    #[error("Drop index {seq} does not follow {prev}")]
    Unordered { prev: u32, seq: u32 },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
