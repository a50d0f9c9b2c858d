use core::fmt;

/// The widest bitmap that still fits the four 64 bit words of the wire format.
pub const MAX_WIDTH: usize = 256;

/// Number of 64 bit words a bitmap is packed into on the wire.
pub const WIRE_WORDS: usize = MAX_WIDTH / 64;

/// A run of packet positions summarized by an explicit bitmap and an implicit
/// fully lost extension.
///
/// The window covers the half-open span `(start, start + len]`.
/// `bits[i]` describes sequence number `start + 1 + i` and is `false` if that
/// packet was dropped. Positions past the bitmap, `(start + width, start + len]`,
/// are all dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Window {
    first: u32,
    len: u64,
    bits: Vec<bool>,
}

impl Window {
    /// Open a window with its first bitmap position at `first` and nothing dropped yet.
    pub(crate) fn new(first: u32, width: usize) -> Self {
        Self {
            first,
            len: width as _,
            bits: vec![true; width],
        }
    }

    /// Offset of `seq` relative to the first bitmap position.
    pub(crate) fn offset(&self, seq: u32) -> u64 {
        (seq - self.first) as _
    }

    pub(crate) fn drop_bit(&mut self, offset: usize) {
        self.bits[offset] = false;
    }

    pub(crate) fn extend(&mut self, run: u64) {
        self.len += run;
    }

    /// Anchor of the window: one before the first described sequence number.
    pub fn start(&self) -> i64 {
        self.first as i64 - 1
    }

    /// Sequence number described by `bits()[0]`.
    pub fn first(&self) -> u32 {
        self.first
    }

    /// Logical length: number of positions the window describes.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> u64 {
        self.len
    }

    /// Number of explicitly stored bits.
    pub fn width(&self) -> usize {
        self.bits.len()
    }

    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    /// Last covered sequence number (inclusive).
    pub fn end(&self) -> u64 {
        self.first as u64 + self.len - 1
    }

    /// Positions past the bitmap that are implicitly lost.
    pub fn extension(&self) -> u64 {
        self.len - self.width() as u64
    }

    pub fn covers(&self, seq: u32) -> bool {
        seq >= self.first && seq as u64 <= self.end()
    }

    /// Whether the window records `seq` as dropped.
    ///
    /// Positions outside the window are never dropped as far as this window knows.
    pub fn is_dropped(&self, seq: u32) -> bool {
        if !self.covers(seq) {
            return false;
        }
        match self.bits.get(self.offset(seq) as usize) {
            Some(bit) => !bit,
            None => true,
        }
    }

    /// Number of positions the window claims lost.
    pub fn lost(&self) -> u64 {
        self.bits.iter().filter(|b| !**b).count() as u64 + self.extension()
    }

    /// Pack the bitmap LSB first into the fixed header words, a set bit meaning
    /// "not dropped". Unused high bits stay clear.
    pub fn wire_words(&self) -> [u64; WIRE_WORDS] {
        let mut words = [0; WIRE_WORDS];
        for (i, _) in self.bits.iter().enumerate().filter(|(_, b)| **b) {
            words[i / 64] |= 1 << (i % 64);
        }
        words
    }

    /// Unpack `width` bitmap positions from the header words, the inverse of
    /// [`Window::wire_words`]. Widths past [`MAX_WIDTH`] are truncated.
    pub fn bits_from_wire(words: &[u64; WIRE_WORDS], width: usize) -> Vec<bool> {
        (0..width.min(MAX_WIDTH))
            .map(|i| words[i / 64] & (1 << (i % 64)) != 0)
            .collect()
    }
}

impl fmt::Display for Window {
    /// The bitmap as `'0'`/`'1'` characters in position order.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in self.bits.iter() {
            f.write_str(if *bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}
