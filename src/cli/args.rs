//! CLI argument definitions

use clap::{Args, Parser, Subcommand};

use crate::distance::{
    DistanceError, EditCosts, DEFAULT_DELETION_COST, DEFAULT_INSERTION_COST,
    DEFAULT_SUBSTITUTION_COST,
};
use crate::phonetic::HwPolicy;

/// Lexical string similarity: edit distance and Soundex codes
#[derive(Parser)]
#[command(name = "lexsim")]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Per-operation edit costs
#[derive(Args, Debug, Clone, Copy, PartialEq)]
pub struct CostArgs {
    /// Cost of deleting one character
    #[arg(long, default_value_t = DEFAULT_DELETION_COST, allow_negative_numbers = true)]
    pub del_cost: f64,

    /// Cost of inserting one character
    #[arg(long, default_value_t = DEFAULT_INSERTION_COST, allow_negative_numbers = true)]
    pub ins_cost: f64,

    /// Cost of substituting one character
    #[arg(long, default_value_t = DEFAULT_SUBSTITUTION_COST, allow_negative_numbers = true)]
    pub sub_cost: f64,
}

impl CostArgs {
    /// Validate the arguments into an [`EditCosts`].
    pub fn to_costs(&self) -> Result<EditCosts, DistanceError> {
        EditCosts::new(self.del_cost, self.ins_cost, self.sub_cost)
    }
}

impl Default for CostArgs {
    fn default() -> Self {
        Self {
            del_cost: DEFAULT_DELETION_COST,
            ins_cost: DEFAULT_INSERTION_COST,
            sub_cost: DEFAULT_SUBSTITUTION_COST,
        }
    }
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Compute the edit distance between two strings
    Distance {
        /// String to transform
        source: String,

        /// String to transform into
        target: String,

        #[command(flatten)]
        costs: CostArgs,

        /// Use the recursive memoized implementation (fixed costs 1/1/2)
        #[arg(short, long)]
        memoized: bool,
    },

    /// Print the Soundex code of each word
    Soundex {
        /// Words to encode
        #[arg(required = true)]
        words: Vec<String>,

        /// How H and W take part in duplicate collapsing
        #[arg(long, value_enum, default_value_t = HwPolicy::Transparent)]
        hw_policy: HwPolicy,
    },

    /// Compute the edit distance between the Soundex codes of two words
    SoundsLike {
        /// First word
        source: String,

        /// Second word
        target: String,

        #[command(flatten)]
        costs: CostArgs,

        /// How H and W take part in duplicate collapsing
        #[arg(long, value_enum, default_value_t = HwPolicy::Transparent)]
        hw_policy: HwPolicy,
    },

    /// Compute the Hamming distance between two strings of equal length
    Hamming {
        /// First string
        left: String,

        /// Second string
        right: String,
    },
}
