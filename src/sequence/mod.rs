pub mod random;
pub mod types;

pub use random::{random_strand, NUCLEOTIDES};
pub use types::Strand;
