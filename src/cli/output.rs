//! Terminal rendering for alignment results.

use crate::alignment::{AlignmentResult, GAP};
use colored::*;
use std::time::Duration;

// Indentation that lines the alignment rows up under the score message.
const ALIGNMENT_INDENT: &str = "                           ";

/// Renders an aligned strand for display, showing gaps as spaces.
pub fn render_aligned(aligned: &[u8]) -> String {
    aligned
        .iter()
        .map(|&b| if b == GAP { ' ' } else { b as char })
        .collect()
}

/// Prints the two input strands above their alignment.
pub fn print_strand_pair(strand1: &str, strand2: &str) {
    println!("Aligning these two strands: {}", strand1.cyan());
    println!("                            {}", strand2.cyan());
}

pub fn print_alignment(result: &AlignmentResult, elapsed: Duration) {
    let score = result.score.to_string();
    let score = if result.score >= 0 {
        score.green().bold()
    } else {
        score.red().bold()
    };

    println!("Optimal alignment score is {}", score);
    println!("{}{}", ALIGNMENT_INDENT, render_aligned(&result.aligned1));
    println!(
        "{}{}",
        ALIGNMENT_INDENT,
        String::from_utf8_lossy(&result.alignment_string()).dimmed()
    );
    println!("{}{}", ALIGNMENT_INDENT, render_aligned(&result.aligned2));
    println!(
        "{}",
        format!(
            "Identity {:.1}%, took {:.6} seconds.",
            result.identity() * 100.0,
            elapsed.as_secs_f64()
        )
        .dimmed()
    );
}

pub fn print_json(result: &AlignmentResult, elapsed: Duration) -> anyhow::Result<()> {
    let payload = serde_json::json!({
        "score": result.score,
        "aligned1": String::from_utf8_lossy(&result.aligned1),
        "aligned2": String::from_utf8_lossy(&result.aligned2),
        "identity": result.identity(),
        "elapsed_seconds": elapsed.as_secs_f64(),
    });
    println!("{}", serde_json::to_string_pretty(&payload)?);
    Ok(())
}
