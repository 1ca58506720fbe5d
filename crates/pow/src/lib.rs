//! Compact target handling and proof-of-work checks.

pub mod difficulty;
pub mod validation;

pub use difficulty::{compact_to_target, hash_meets_target, target_to_compact, CompactError};
pub use validation::{check_proof_of_work, PowError};
