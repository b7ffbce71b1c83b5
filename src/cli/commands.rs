//! CLI command implementations

use anyhow::{bail, Context, Result};

use crate::distance::{
    edit_distance, edit_distance_memoized, hamming_distance, EditCosts, MemoCache, Operation,
};
use crate::phonetic::{HwPolicy, Soundex};

use super::args::{Commands, CostArgs};

/// Execute a CLI command and return the text to print
pub fn execute(command: Commands) -> Result<String> {
    match command {
        Commands::Distance {
            source,
            target,
            costs,
            memoized,
        } => cmd_distance(&source, &target, costs, memoized),
        Commands::Soundex { words, hw_policy } => Ok(cmd_soundex(&words, hw_policy)),
        Commands::SoundsLike {
            source,
            target,
            costs,
            hw_policy,
        } => cmd_sounds_like(&source, &target, costs, hw_policy),
        Commands::Hamming { left, right } => cmd_hamming(&left, &right),
    }
}

fn cmd_distance(source: &str, target: &str, costs: CostArgs, memoized: bool) -> Result<String> {
    let costs = costs.to_costs().context("Invalid edit costs")?;

    if memoized {
        let fixed = EditCosts::default();
        if costs != fixed {
            let listed = [
                Operation::Deletion,
                Operation::Insertion,
                Operation::Substitution,
            ]
            .iter()
            .map(|&operation| format!("{} {}", operation, fixed.cost_of(operation)))
            .collect::<Vec<_>>()
            .join(", ");
            bail!("--memoized uses fixed costs ({})", listed);
        }
        let cache = MemoCache::new();
        return Ok(edit_distance_memoized(source, target, &cache).to_string());
    }

    Ok(edit_distance(source, target, costs).to_string())
}

fn cmd_soundex(words: &[String], hw_policy: HwPolicy) -> String {
    let soundex = Soundex::new(hw_policy);
    words
        .iter()
        .map(|word| format!("{}\t{}", word, soundex.encode(word)))
        .collect::<Vec<_>>()
        .join("\n")
}

fn cmd_sounds_like(
    source: &str,
    target: &str,
    costs: CostArgs,
    hw_policy: HwPolicy,
) -> Result<String> {
    let costs = costs.to_costs().context("Invalid edit costs")?;
    let soundex = Soundex::new(hw_policy);
    let source_code = soundex.encode(source);
    let target_code = soundex.encode(target);
    let distance = edit_distance(&source_code, &target_code, costs);

    Ok(format!("{}\t{}\t{}", source_code, target_code, distance))
}

fn cmd_hamming(left: &str, right: &str) -> Result<String> {
    let distance = hamming_distance(left, right).context("Cannot compute Hamming distance")?;
    Ok(distance.to_string())
}
