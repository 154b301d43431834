use crate::ChiasmaError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An immutable strand of symbols. Length is fixed at construction and the
/// aligner only ever compares symbols for equality, so any byte alphabet
/// works; the CLI and the random generator stick to `A T G C`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Strand {
    bases: Vec<u8>,
}

impl Strand {
    pub fn new(bases: Vec<u8>) -> Self {
        Self { bases }
    }

    pub fn len(&self) -> usize {
        self.bases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bases.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bases
    }

    pub fn get(&self, index: usize) -> Option<u8> {
        self.bases.get(index).copied()
    }
}

impl FromStr for Strand {
    type Err = ChiasmaError;

    /// Parses a strand from CLI input. Symbols are uppercased; anything that
    /// would collide with alignment rendering (the gap marker, whitespace,
    /// non-ASCII bytes) is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut bases = Vec::with_capacity(s.len());
        for c in s.bytes() {
            if !c.is_ascii_alphanumeric() {
                return Err(ChiasmaError::Parse(format!(
                    "invalid symbol {:?} in strand {:?}",
                    c as char, s
                )));
            }
            bases.push(c.to_ascii_uppercase());
        }
        Ok(Self { bases })
    }
}

impl fmt::Display for Strand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(&self.bases))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strand_construction() {
        let strand = Strand::new(b"ATGC".to_vec());
        assert_eq!(strand.len(), 4);
        assert!(!strand.is_empty());
        assert_eq!(strand.as_bytes(), b"ATGC");
    }

    #[test]
    fn test_empty_strand() {
        let strand = Strand::new(Vec::new());
        assert_eq!(strand.len(), 0);
        assert!(strand.is_empty());
    }

    #[test]
    fn test_strand_indexing() {
        let strand = Strand::new(b"ATGC".to_vec());
        assert_eq!(strand.get(0), Some(b'A'));
        assert_eq!(strand.get(3), Some(b'C'));
        assert_eq!(strand.get(4), None);
    }

    #[test]
    fn test_parse_uppercases() {
        let strand: Strand = "atgc".parse().unwrap();
        assert_eq!(strand.as_bytes(), b"ATGC");
    }

    #[test]
    fn test_parse_rejects_gap_and_whitespace() {
        assert!("AT-GC".parse::<Strand>().is_err());
        assert!("AT GC".parse::<Strand>().is_err());
        assert!("ATG\u{e9}".parse::<Strand>().is_err());
    }

    #[test]
    fn test_parse_error_kind() {
        match "A-T".parse::<Strand>() {
            Err(ChiasmaError::Parse(msg)) => assert!(msg.contains("invalid symbol")),
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_strand_display() {
        let strand = Strand::new(b"ATGC".to_vec());
        assert_eq!(format!("{}", strand), "ATGC");
    }
}
