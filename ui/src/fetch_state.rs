//! State of the latest-block view and the transitions a fetch cycle makes.

use api::BlockSummary;
use api::TransactionSummary;
use web_time::SystemTime;

/// Stored when a failure carries no message of its own.
pub const UNEXPECTED_ERROR: &str = "Unexpected error";

/// Where the view is in its fetch cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::EnumIs)]
pub enum Phase {
    /// Nothing fetched yet.
    Idle,
    Loading,
    Ready,
    Errored,
}

/// Identifies one fetch cycle. Only the newest ticket can apply a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u64);

/// Everything one successful cycle produces.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LatestBlock {
    pub number: u64,
    pub block: Option<BlockSummary>,
    /// `None` when the provider returned no block for the full-transaction query.
    pub transactions: Option<Vec<TransactionSummary>>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct FetchState {
    loading: bool,
    error: String,
    block_number: Option<u64>,
    block: Option<BlockSummary>,
    transactions: Option<Vec<TransactionSummary>>,
    fetched_at: Option<SystemTime>,
    generation: u64,
}

impl FetchState {
    /// Enters `Loading` and clears the previous error.
    ///
    /// Any cycle still in flight is superseded: its ticket no longer matches.
    pub fn begin(&mut self) -> FetchTicket {
        self.generation += 1;
        self.loading = true;
        self.error.clear();
        FetchTicket(self.generation)
    }

    /// Applies the outcome of the cycle identified by `ticket`.
    ///
    /// Returns `false` and changes nothing if a newer cycle has started since.
    /// On error the previous block data is kept.
    pub fn finish(
        &mut self,
        ticket: FetchTicket,
        outcome: Result<LatestBlock, String>,
        now: SystemTime,
    ) -> bool {
        if ticket.0 != self.generation {
            return false;
        }

        match outcome {
            Ok(latest) => {
                self.block_number = Some(latest.number);
                self.block = latest.block;
                self.transactions = latest.transactions;
                self.fetched_at = Some(now);
            }
            Err(message) if message.trim().is_empty() => {
                self.error = UNEXPECTED_ERROR.to_string();
            }
            Err(message) => self.error = message,
        }
        self.loading = false;
        true
    }

    pub fn phase(&self) -> Phase {
        if self.loading {
            Phase::Loading
        } else if !self.error.is_empty() {
            Phase::Errored
        } else if self.block_number.is_some() {
            Phase::Ready
        } else {
            Phase::Idle
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// The error message of the last cycle, if it failed.
    pub fn error(&self) -> Option<&str> {
        Some(self.error.as_str()).filter(|e| !e.is_empty())
    }

    pub fn block_number(&self) -> Option<u64> {
        self.block_number
    }

    pub fn block(&self) -> Option<&BlockSummary> {
        self.block.as_ref()
    }

    pub fn transactions(&self) -> &[TransactionSummary] {
        self.transactions.as_deref().unwrap_or_default()
    }

    /// When the data on display was fetched.
    pub fn fetched_at(&self) -> Option<SystemTime> {
        self.fetched_at
    }

    /// Number of transactions in the block.
    ///
    /// The fetched list decides, even when empty. Only if that query found no
    /// block are the hashes listed in the summary counted.
    pub fn tx_count(&self) -> usize {
        match &self.transactions {
            Some(list) => list.len(),
            None => self.block.as_ref().map_or(0, |b| b.transactions.len()),
        }
    }
}
