use num_enum::TryFromPrimitive;

/// Field holding the dropped packet's sequence number.
const SEQ_FIELD: usize = 4;

/// Field holding the drop kind tag.
const KIND_FIELD: usize = 5;

/// Drop event kinds tagged by the switch packet dropper.
#[derive(TryFromPrimitive, Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum LossKind {
    /// Isolated random drop.
    Random = 1,
    /// Drop scheduled within a high frequency loss event.
    HighFrequency = 2,
    /// Drop within a contiguous burst.
    Burst = 3,
}

impl LossKind {
    pub const ALL: [Self; 3] = [Self::Random, Self::HighFrequency, Self::Burst];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Random => "random",
            Self::HighFrequency => "high frequency",
            Self::Burst => "burst",
        }
    }
}

/// One drop line of a switch drop log.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Record {
    pub seq: u32,
    /// Raw kind tag. Tags outside [`LossKind`] are kept but not attributed.
    pub tag: i64,
}

impl Record {
    /// Parse a whitespace separated drop line.
    ///
    /// Returns `None` for lines with fewer than six fields or with a
    /// non-numeric sequence number or tag. Any integer tag is accepted.
    pub fn parse(line: &str) -> Option<Self> {
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() <= KIND_FIELD {
            return None;
        }
        Some(Self {
            seq: fields[SEQ_FIELD].parse().ok()?,
            tag: fields[KIND_FIELD].parse().ok()?,
        })
    }

    pub fn kind(&self) -> Option<LossKind> {
        u8::try_from(self.tag)
            .ok()
            .and_then(|tag| LossKind::try_from(tag).ok())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parse() {
        let r = Record::parse("2000123 3 1 0 4711 3").unwrap();
        assert_eq!(r, Record { seq: 4711, tag: 3 });
        assert_eq!(r.kind(), Some(LossKind::Burst));

        let r = Record::parse("  1 2 3 4 17 1 trailing fields ").unwrap();
        assert_eq!(r.seq, 17);
        assert_eq!(r.kind(), Some(LossKind::Random));
    }

    #[test]
    fn unknown_kind() {
        let r = Record::parse("a b c d 9 7").unwrap();
        assert_eq!(r.tag, 7);
        assert_eq!(r.kind(), None);
    }

    #[test]
    fn out_of_range_kind() {
        for (line, tag) in [
            ("a b c d 9 -1", -1),
            ("a b c d 9 300", 300),
            ("a b c d 9 259", 259),
        ] {
            let r = Record::parse(line).unwrap();
            assert_eq!(r, Record { seq: 9, tag });
            assert_eq!(r.kind(), None);
        }
    }

    #[test]
    fn malformed() {
        assert_eq!(Record::parse(""), None);
        assert_eq!(Record::parse("1 2 3 4 5"), None);
        assert_eq!(Record::parse("1 2 3 4 x 1"), None);
        assert_eq!(Record::parse("1 2 3 4 5 y"), None);
        assert_eq!(Record::parse("1 2 3 4 -5 1"), None);
        assert_eq!(Record::parse("1 2 3 4 4294967296 1"), None);
    }
}
