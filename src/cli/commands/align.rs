use crate::alignment::{Aligner, Scoring};
use crate::cli::{output, Strategy};
use crate::sequence::Strand;
use clap::Args;
use std::time::Instant;

#[derive(Args)]
pub struct AlignArgs {
    /// First strand
    pub strand1: String,

    /// Second strand
    pub strand2: String,

    /// Solver strategy (tabular, recursive)
    #[arg(long, default_value = "tabular")]
    pub strategy: Strategy,

    /// Output format (text, json)
    #[arg(long, default_value = "text")]
    pub format: String,
}

pub fn run(args: AlignArgs) -> anyhow::Result<()> {
    let strand1: Strand = args.strand1.parse()?;
    let strand2: Strand = args.strand2.parse()?;

    tracing::debug!(
        len1 = strand1.len(),
        len2 = strand2.len(),
        strategy = ?args.strategy,
        "aligning strands"
    );

    let aligner = Aligner::new(Scoring::default());
    let start = Instant::now();
    let result = match args.strategy {
        Strategy::Tabular => aligner.align(&strand1, &strand2),
        Strategy::Recursive => aligner.align_recursive(&strand1, &strand2),
    };
    let elapsed = start.elapsed();

    match args.format.as_str() {
        "json" => output::print_json(&result, elapsed)?,
        _ => {
            output::print_strand_pair(&strand1.to_string(), &strand2.to_string());
            output::print_alignment(&result, elapsed);
        }
    }

    Ok(())
}
