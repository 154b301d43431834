use crate::sequence::Strand;
use crate::{ChiasmaError, Result};
use rand::Rng;

/// The DNA alphabet used by the generator.
pub const NUCLEOTIDES: [u8; 4] = [b'A', b'T', b'G', b'C'];

/// Generates a random DNA strand whose length is drawn uniformly from
/// `[min_length, max_length]`.
///
/// `min_length` must be positive and `max_length` must be at least
/// `min_length`; violations are reported as [`ChiasmaError::InvalidInput`].
pub fn random_strand<R: Rng + ?Sized>(
    rng: &mut R,
    min_length: usize,
    max_length: usize,
) -> Result<Strand> {
    if min_length == 0 {
        return Err(ChiasmaError::InvalidInput(
            "minimum strand length must be positive".to_string(),
        ));
    }
    if max_length < min_length {
        return Err(ChiasmaError::InvalidInput(format!(
            "maximum strand length {} is smaller than minimum {}",
            max_length, min_length
        )));
    }

    let length = rng.gen_range(min_length..=max_length);
    let bases = (0..length)
        .map(|_| NUCLEOTIDES[rng.gen_range(0..NUCLEOTIDES.len())])
        .collect();

    Ok(Strand::new(bases))
}
