//! Hardcoded checkpoints and sync-progress statistics.
//!
//! A checkpoint pins the block hash at a height; validation elsewhere rejects
//! any chain that disagrees with one. The three scalars that ride along
//! describe transaction volume up to the last checkpoint and are only used to
//! estimate how far along an initial sync is.

use crate::Hash256;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Checkpoint {
    pub height: i32,
    pub hash: Hash256,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CheckpointData {
    /// Sorted by strictly increasing height; the first entry is height 0.
    pub checkpoints: Vec<Checkpoint>,
    /// UNIX timestamp of the last checkpoint block.
    pub last_checkpoint_time: i64,
    /// Total transactions between genesis and the last checkpoint.
    pub transactions_last_checkpoint: i64,
    /// Estimated transactions per day after the last checkpoint.
    pub transactions_per_day: f64,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CheckpointError {
    MissingGenesis,
    NotIncreasing { previous: i32, height: i32 },
    GenesisMismatch,
}

impl std::fmt::Display for CheckpointError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CheckpointError::MissingGenesis => write!(f, "checkpoint table has no height 0 entry"),
            CheckpointError::NotIncreasing { previous, height } => write!(
                f,
                "checkpoint height {height} does not follow {previous} in increasing order"
            ),
            CheckpointError::GenesisMismatch => {
                write!(f, "height 0 checkpoint does not match the genesis hash")
            }
        }
    }
}

impl std::error::Error for CheckpointError {}

/// Weight of a transaction verified after the last checkpoint relative to
/// one covered by it (signatures are skipped below the checkpoint).
const SIGCHECK_VERIFICATION_FACTOR: f64 = 5.0;

impl CheckpointData {
    pub fn validate(&self) -> Result<(), CheckpointError> {
        match self.checkpoints.first() {
            Some(first) if first.height == 0 => {}
            _ => return Err(CheckpointError::MissingGenesis),
        }
        for window in self.checkpoints.windows(2) {
            if window[1].height <= window[0].height {
                return Err(CheckpointError::NotIncreasing {
                    previous: window[0].height,
                    height: window[1].height,
                });
            }
        }
        Ok(())
    }

    /// Checks the table against a verified genesis hash.
    pub fn validate_against_genesis(&self, genesis_hash: &Hash256) -> Result<(), CheckpointError> {
        self.validate()?;
        match self.hash_at(0) {
            Some(hash) if hash == genesis_hash => Ok(()),
            _ => Err(CheckpointError::GenesisMismatch),
        }
    }

    pub fn hash_at(&self, height: i32) -> Option<&Hash256> {
        self.checkpoints
            .binary_search_by_key(&height, |checkpoint| checkpoint.height)
            .ok()
            .map(|index| &self.checkpoints[index].hash)
    }

    /// Returns false only when a checkpoint exists at `height` with a
    /// different hash.
    pub fn matches(&self, height: i32, hash: &Hash256) -> bool {
        self.hash_at(height).map_or(true, |expected| expected == hash)
    }

    pub fn last_checkpoint(&self) -> Option<&Checkpoint> {
        self.checkpoints.last()
    }

    pub fn total_blocks_estimate(&self) -> i32 {
        self.last_checkpoint().map_or(0, |checkpoint| checkpoint.height)
    }

    /// Estimates initial sync progress in `0.0..=1.0` for a tip that has
    /// `chain_tx` cumulative transactions and timestamp `block_time`.
    pub fn guess_verification_progress(
        &self,
        chain_tx: i64,
        block_time: i64,
        now: i64,
        sigchecks: bool,
    ) -> f64 {
        let factor = if sigchecks {
            SIGCHECK_VERIFICATION_FACTOR
        } else {
            1.0
        };
        let per_day = |since: i64| (now - since).max(0) as f64 / 86_400.0 * self.transactions_per_day;

        let (work_before, work_after) = if chain_tx <= self.transactions_last_checkpoint {
            let cheap_before = chain_tx as f64;
            let cheap_after = (self.transactions_last_checkpoint - chain_tx) as f64;
            let expensive_after = per_day(self.last_checkpoint_time);
            (cheap_before, cheap_after + expensive_after * factor)
        } else {
            let cheap_before = self.transactions_last_checkpoint as f64;
            let expensive_before = (chain_tx - self.transactions_last_checkpoint) as f64;
            let expensive_after = per_day(block_time);
            (
                cheap_before + expensive_before * factor,
                expensive_after * factor,
            )
        };

        let total = work_before + work_after;
        if total <= 0.0 {
            return 1.0;
        }
        work_before / total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data(heights: &[i32]) -> CheckpointData {
        CheckpointData {
            checkpoints: heights
                .iter()
                .map(|height| Checkpoint {
                    height: *height,
                    hash: [*height as u8; 32],
                })
                .collect(),
            last_checkpoint_time: 1_000_000,
            transactions_last_checkpoint: 1_000,
            transactions_per_day: 100.0,
        }
    }

    #[test]
    fn validate_requires_genesis_and_order() {
        assert_eq!(data(&[0, 10, 20]).validate(), Ok(()));
        assert_eq!(data(&[]).validate(), Err(CheckpointError::MissingGenesis));
        assert_eq!(data(&[5, 10]).validate(), Err(CheckpointError::MissingGenesis));
        assert_eq!(
            data(&[0, 10, 10]).validate(),
            Err(CheckpointError::NotIncreasing {
                previous: 10,
                height: 10
            })
        );
        assert_eq!(
            data(&[0, 20, 10]).validate(),
            Err(CheckpointError::NotIncreasing {
                previous: 20,
                height: 10
            })
        );
    }

    #[test]
    fn genesis_entry_must_match() {
        let table = data(&[0, 10]);
        assert_eq!(table.validate_against_genesis(&[0u8; 32]), Ok(()));
        assert_eq!(
            table.validate_against_genesis(&[1u8; 32]),
            Err(CheckpointError::GenesisMismatch)
        );
    }

    #[test]
    fn lookups() {
        let table = data(&[0, 10, 20]);
        assert_eq!(table.hash_at(10), Some(&[10u8; 32]));
        assert_eq!(table.hash_at(11), None);
        assert!(table.matches(10, &[10u8; 32]));
        assert!(!table.matches(10, &[11u8; 32]));
        assert!(table.matches(11, &[0xffu8; 32]));
        assert_eq!(table.total_blocks_estimate(), 20);
        assert_eq!(data(&[]).total_blocks_estimate(), 0);
    }

    #[test]
    fn progress_estimate() {
        let table = data(&[0, 10]);
        let now = table.last_checkpoint_time;

        assert_eq!(table.guess_verification_progress(0, 0, now, true), 0.0);
        let half = table.guess_verification_progress(500, 0, now, true);
        assert!((half - 0.5).abs() < 1e-9);
        assert_eq!(table.guess_verification_progress(1_000, now, now, true), 1.0);

        // One day past the checkpoint: 100 expected tx weighted 5x remain.
        let behind = table.guess_verification_progress(1_000, now, now + 86_400, true);
        assert!((behind - 1_000.0 / 1_500.0).abs() < 1e-9);
        let unweighted = table.guess_verification_progress(1_000, now, now + 86_400, false);
        assert!((unweighted - 1_000.0 / 1_100.0).abs() < 1e-9);
    }

    #[test]
    fn empty_history_counts_as_synced() {
        let mut table = data(&[0]);
        table.transactions_last_checkpoint = 0;
        let now = table.last_checkpoint_time;
        assert_eq!(table.guess_verification_progress(0, now, now, true), 1.0);
    }
}
