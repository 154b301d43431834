use crate::alignment::{Aligner, AlignmentResult, Scoring};
use crate::cli::output;
use crate::sequence::{random_strand, Strand};
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};
use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::{Duration, Instant};

#[derive(Args)]
pub struct RandomArgs {
    /// Minimum strand length
    #[arg(long, default_value = "12")]
    pub min_length: usize,

    /// Maximum strand length
    #[arg(long, default_value = "12")]
    pub max_length: usize,

    /// Number of rounds to run non-interactively
    #[arg(short = 'n', long)]
    pub iterations: Option<u64>,

    /// RNG seed for reproducible strands
    #[arg(long)]
    pub seed: Option<u64>,
}

pub fn run(args: RandomArgs) -> anyhow::Result<()> {
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let aligner = Aligner::new(Scoring::default());

    match args.iterations {
        Some(rounds) => run_batch(&args, &mut rng, &aligner, rounds),
        None => run_interactive(&args, &mut rng, &aligner),
    }
}

/// The read loop: keep generating and aligning strand pairs until the user
/// declines to continue.
fn run_interactive(args: &RandomArgs, rng: &mut StdRng, aligner: &Aligner) -> anyhow::Result<()> {
    loop {
        let proceed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt("Generate random DNA strands?")
            .default(true)
            .interact()?;
        if !proceed {
            return Ok(());
        }

        let strand1 = random_strand(rng, args.min_length, args.max_length)?;
        let strand2 = random_strand(rng, args.min_length, args.max_length)?;

        output::print_strand_pair(&strand1.to_string(), &strand2.to_string());
        let (result, elapsed) = timed_align(aligner, &strand1, &strand2);
        output::print_alignment(&result, elapsed);
    }
}

fn run_batch(
    args: &RandomArgs,
    rng: &mut StdRng,
    aligner: &Aligner,
    rounds: u64,
) -> anyhow::Result<()> {
    let pb = ProgressBar::new(rounds);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} alignments ({per_sec})")
            .unwrap()
            .progress_chars("##-"),
    );

    let mut total_score = 0i64;
    let mut total_elapsed = Duration::ZERO;

    for round in 0..rounds {
        let strand1 = random_strand(rng, args.min_length, args.max_length)?;
        let strand2 = random_strand(rng, args.min_length, args.max_length)?;

        let (result, elapsed) = timed_align(aligner, &strand1, &strand2);
        tracing::debug!(
            round,
            score = result.score,
            len1 = strand1.len(),
            len2 = strand2.len(),
            "aligned random pair"
        );

        total_score += i64::from(result.score);
        total_elapsed += elapsed;
        pb.inc(1);
    }
    pb.finish_and_clear();

    println!(
        "Aligned {} random pairs (lengths {}..={}) in {:.3} seconds",
        rounds,
        args.min_length,
        args.max_length,
        total_elapsed.as_secs_f64()
    );
    println!(
        "Mean alignment score: {:.2}",
        total_score as f64 / rounds.max(1) as f64
    );

    Ok(())
}

fn timed_align(
    aligner: &Aligner,
    strand1: &Strand,
    strand2: &Strand,
) -> (AlignmentResult, Duration) {
    let start = Instant::now();
    let result = aligner.align(strand1, strand2);
    (result, start.elapsed())
}
