use crate::{Error, Window, MAX_WIDTH};

/// Length of the maximal prefix of strictly consecutive sequence numbers.
pub fn run_length(seqs: &[u32]) -> usize {
    if seqs.is_empty() {
        return 0;
    }
    1 + seqs
        .windows(2)
        .take_while(|p| p[0].checked_add(1) == Some(p[1]))
        .count()
}

/// Compacts an ascending stream of dropped sequence numbers into [`Window`]s.
///
/// At most one window is open at a time. A drop inside its bitmap clears the
/// corresponding bit, a drop exactly one past its logical end extends it, and
/// anything further away closes it and opens a new window on that drop.
#[derive(Debug, Clone)]
pub struct Encoder {
    width: usize,
    prev: Option<u32>,
    active: Option<Window>,
    windows: Vec<Window>,
}

impl Encoder {
    pub fn new(width: usize) -> Result<Self, Error> {
        if !(1..=MAX_WIDTH).contains(&width) {
            return Err(Error::Width(width));
        }
        Ok(Self {
            width,
            prev: None,
            active: None,
            windows: Vec::new(),
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Closed windows so far.
    pub fn windows(&self) -> &[Window] {
        &self.windows
    }

    /// The window still accepting drops, if any.
    pub fn active(&self) -> Option<&Window> {
        self.active.as_ref()
    }

    fn check(&self, seq: u32) -> Result<(), Error> {
        match self.prev {
            Some(prev) if seq <= prev => Err(Error::Unordered { prev, seq }),
            _ => Ok(()),
        }
    }

    fn open(&mut self, seq: u32) {
        let mut window = Window::new(seq, self.width);
        window.drop_bit(0);
        if let Some(closed) = self.active.replace(window) {
            log::trace!(
                "Closing window {}..={} at {}",
                closed.first(),
                closed.end(),
                seq
            );
            self.windows.push(closed);
        }
    }

    fn at_boundary(&self, seq: u32) -> bool {
        self.active
            .as_ref()
            .is_some_and(|w| w.offset(seq) == w.len())
    }

    /// Feed a single drop.
    ///
    /// Drops must arrive strictly ascending. Feeding an extension run one drop
    /// at a time grows the window by one position per drop.
    pub fn push(&mut self, seq: u32) -> Result<(), Error> {
        self.check(seq)?;
        self.prev = Some(seq);
        let width = self.width as u64;
        match self.active.as_mut() {
            Some(w) if w.offset(seq) < width => w.drop_bit(w.offset(seq) as _),
            Some(w) if w.offset(seq) == w.len() => w.extend(1),
            _ => self.open(seq),
        }
        Ok(())
    }

    /// Feed an ascending slice of drops.
    ///
    /// A consecutive run starting exactly one past the active window is
    /// consumed as a whole and only extends the window.
    pub fn extend(&mut self, seqs: &[u32]) -> Result<(), Error> {
        let mut rest = seqs;
        while let Some((&seq, tail)) = rest.split_first() {
            self.check(seq)?;
            if self.at_boundary(seq) {
                let run = run_length(rest);
                if let Some(w) = self.active.as_mut() {
                    w.extend(run as _);
                }
                self.prev = Some(rest[run - 1]);
                rest = &rest[run..];
            } else {
                self.push(seq)?;
                rest = tail;
            }
        }
        Ok(())
    }

    /// Close the active window and return all windows in ascending order.
    pub fn finish(mut self) -> Vec<Window> {
        self.windows.extend(self.active.take());
        self.windows
    }
}

/// Compact an ascending, duplicate free slice of drops with bitmap `width`.
pub fn encode(seqs: &[u32], width: usize) -> Result<Vec<Window>, Error> {
    let mut encoder = Encoder::new(width)?;
    encoder.extend(seqs)?;
    Ok(encoder.finish())
}
