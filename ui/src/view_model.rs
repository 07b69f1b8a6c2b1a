//! Turns a [`FetchState`] into exactly what the page shows.
//!
//! Rebuilt on every render; nothing here is cached.

use api::TransactionSummary;

use crate::fetch_state::FetchState;
use crate::fetch_state::Phase;
use crate::fetch_state::UNEXPECTED_ERROR;
use crate::format::display_value;
use crate::format::format_system_time;
use crate::format::format_timestamp;
use crate::format::safe_json;
use crate::format::truncate_address;
use crate::format::truncate_default;
use crate::format::truncate_hash;
use crate::format::PLACEHOLDER;

/// Only this many transactions of a block are listed.
pub const MAX_TRANSACTIONS: usize = 10;

pub const NO_TRANSACTIONS: &str = "No transactions found for this block.";
pub const LOADING_TRANSACTIONS: &str = "Loading transactions…";
pub const NO_DATA: &str = "No data";
const NOT_AVAILABLE: &str = "N/A";

#[derive(Debug, Clone, PartialEq)]
pub struct DetailRow {
    pub label: &'static str,
    pub value: String,
    /// Untruncated value, for the tooltip.
    pub full: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TransactionRow {
    pub hash: String,
    pub hash_full: Option<String>,
    pub from: String,
    pub from_full: Option<String>,
    pub to: String,
    pub to_full: Option<String>,
    pub nonce: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PageContent {
    pub loading: bool,
    pub block_number: String,
    pub last_seen: String,
    pub details: Vec<DetailRow>,
    /// Rows from the last successful cycle, kept while a refresh runs.
    pub transactions: Vec<TransactionRow>,
    /// Shown below the rows, if any.
    pub transactions_note: Option<&'static str>,
    pub raw_json: String,
}

/// The whole page: either the error alone, or the block content.
#[derive(Debug, Clone, PartialEq)]
pub enum PageView {
    Error(String),
    Content(PageContent),
}

impl PageView {
    pub fn from_state(state: &FetchState) -> Self {
        let loading = match state.phase() {
            Phase::Errored => {
                let message = state.error().unwrap_or(UNEXPECTED_ERROR);
                return Self::Error(message.to_string());
            }
            phase => phase.is_loading(),
        };

        let block_number = match state.block_number() {
            Some(n) => n.to_string(),
            None if loading => PLACEHOLDER.to_string(),
            None => NOT_AVAILABLE.to_string(),
        };

        let transactions_note = if loading {
            Some(LOADING_TRANSACTIONS)
        } else if state.tx_count() == 0 {
            Some(NO_TRANSACTIONS)
        } else {
            None
        };

        Self::Content(PageContent {
            loading,
            block_number,
            last_seen: state
                .fetched_at()
                .map(format_system_time)
                .unwrap_or_else(|| PLACEHOLDER.to_string()),
            details: detail_rows(state),
            transactions: transaction_rows(state.transactions()),
            transactions_note,
            raw_json: state
                .block()
                .map(safe_json)
                .unwrap_or_else(|| NO_DATA.to_string()),
        })
    }
}

/// The eight block detail rows, in display order.
pub fn detail_rows(state: &FetchState) -> Vec<DetailRow> {
    let block = state.block();
    let hash = block.and_then(|b| b.hash.clone());
    let parent = block.and_then(|b| b.parent_hash.clone());

    let row = |label, value| DetailRow {
        label,
        value,
        full: None,
    };

    vec![
        DetailRow {
            label: "Hash",
            value: truncate_default(hash.as_deref()),
            full: hash,
        },
        DetailRow {
            label: "Parent",
            value: truncate_default(parent.as_deref()),
            full: parent,
        },
        row("Timestamp", format_timestamp(block.and_then(|b| b.timestamp.as_ref()))),
        row("Miner / Proposer", display_value(block.and_then(|b| b.author()))),
        row(
            "Base Fee (wei)",
            display_value(block.and_then(|b| b.base_fee_per_gas.as_ref())),
        ),
        row("Gas Used", display_value(block.and_then(|b| b.gas_used.as_ref()))),
        row("Gas Limit", display_value(block.and_then(|b| b.gas_limit.as_ref()))),
        row("Tx Count", state.tx_count().to_string()),
    ]
}

/// Rows for the first [`MAX_TRANSACTIONS`] transactions, in provider order.
pub fn transaction_rows(transactions: &[TransactionSummary]) -> Vec<TransactionRow> {
    transactions
        .iter()
        .take(MAX_TRANSACTIONS)
        .map(|tx| TransactionRow {
            hash: truncate_hash(tx.hash.as_deref()),
            hash_full: tx.hash.clone(),
            from: truncate_address(tx.from.as_deref()),
            from_full: tx.from.clone(),
            to: truncate_address(tx.to.as_deref()),
            to_full: tx.to.clone(),
            nonce: display_value(tx.nonce.as_ref()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use api::BlockSummary;
    use api::BlockWithTransactions;
    use api::Quantity;
    use futures::executor::block_on;
    use web_time::SystemTime;

    use super::*;
    use crate::block_source::fetch_latest;
    use crate::block_source::tests::MockSource;

    /// Runs one full cycle against `source`, the way the view controller does.
    fn run_cycle(source: &MockSource) -> FetchState {
        let mut state = FetchState::default();
        let ticket = state.begin();
        let outcome = block_on(fetch_latest(source)).map_err(|e| e.to_string());
        state.finish(ticket, outcome, SystemTime::now());
        state
    }

    fn content(view: PageView) -> PageContent {
        match view {
            PageView::Content(content) => content,
            PageView::Error(e) => panic!("expected content, got error {}", e),
        }
    }

    fn tx(i: usize) -> TransactionSummary {
        TransactionSummary {
            hash: Some(format!("0x{:064x}", i)),
            from: Some("0x95222290dd7278aa3ddd389cc1e1d165cc4bafe5".to_string()),
            to: None,
            nonce: Some(Quantity::Fixed(i as u64)),
            value: None,
        }
    }

    #[test]
    fn empty_block_shows_zero_and_placeholder() {
        let source = MockSource {
            number: Some(100),
            block: Some(BlockSummary {
                hash: Some("0xabc123".to_string()),
                timestamp: Some(Quantity::Fixed(1_700_000_000)),
                ..Default::default()
            }),
            with_transactions: Some(BlockWithTransactions::default()),
            ..Default::default()
        };

        let state = run_cycle(&source);
        assert!(state.phase().is_ready());

        let page = content(PageView::from_state(&state));
        assert_eq!(page.block_number, "100");
        let tx_count = page.details.iter().find(|r| r.label == "Tx Count").unwrap();
        assert_eq!(tx_count.value, "0");
        assert!(page.transactions.is_empty());
        assert_eq!(page.transactions_note, Some(NO_TRANSACTIONS));
        assert_ne!(page.last_seen, PLACEHOLDER);
    }

    #[test]
    fn error_replaces_the_page() {
        let source = MockSource {
            number_error: Some("rate limited"),
            ..Default::default()
        };

        let state = run_cycle(&source);
        assert!(state.phase().is_errored());
        assert_eq!(
            PageView::from_state(&state),
            PageView::Error("rate limited".to_string())
        );
    }

    #[test]
    fn only_first_ten_transactions_are_listed() {
        let source = MockSource {
            number: Some(1),
            block: Some(BlockSummary::default()),
            with_transactions: Some(BlockWithTransactions {
                transactions: (0..15).map(tx).collect(),
                ..Default::default()
            }),
            ..Default::default()
        };

        let page = content(PageView::from_state(&run_cycle(&source)));
        assert_eq!(page.transactions.len(), MAX_TRANSACTIONS);
        assert_eq!(page.transactions[9].nonce, "9");
        assert_eq!(page.transactions_note, None);
        let tx_count = page.details.iter().find(|r| r.label == "Tx Count").unwrap();
        assert_eq!(tx_count.value, "15");
    }

    #[test]
    fn transaction_rows_are_truncated() {
        let rows = transaction_rows(&[tx(1)]);
        assert_eq!(rows[0].hash, "0x000000000000…0000000001");
        assert_eq!(rows[0].from, "0x952222…4bafe5");
        assert_eq!(rows[0].to, PLACEHOLDER);
        assert_eq!(rows[0].hash_full.as_deref(), Some(&*format!("0x{:064x}", 1)));
    }

    #[test]
    fn before_first_fetch() {
        let page = content(PageView::from_state(&FetchState::default()));
        assert_eq!(page.block_number, NOT_AVAILABLE);
        assert_eq!(page.raw_json, NO_DATA);
        assert_eq!(page.last_seen, PLACEHOLDER);
        assert!(page.details.iter().take(7).all(|r| r.value == PLACEHOLDER));
    }

    #[test]
    fn loading_shows_placeholder_and_dash() {
        let mut state = FetchState::default();
        state.begin();
        let page = content(PageView::from_state(&state));
        assert!(page.loading);
        assert_eq!(page.block_number, PLACEHOLDER);
        assert_eq!(page.transactions_note, Some(LOADING_TRANSACTIONS));
    }

    #[test]
    fn rows_stay_listed_while_refreshing() {
        let source = MockSource {
            number: Some(1),
            block: Some(BlockSummary::default()),
            with_transactions: Some(BlockWithTransactions {
                transactions: vec![tx(1)],
                ..Default::default()
            }),
            ..Default::default()
        };
        let mut state = run_cycle(&source);
        state.begin();

        let page = content(PageView::from_state(&state));
        assert!(page.loading);
        assert_eq!(page.block_number, "1");
        assert_eq!(page.transactions.len(), 1);
        assert_eq!(page.transactions_note, Some(LOADING_TRANSACTIONS));
    }

    #[test]
    fn count_and_note_agree() {
        let block = BlockSummary {
            transactions: vec!["0x1".to_string(), "0x2".to_string()],
            ..Default::default()
        };

        // Full block came back with no transactions.
        let page = content(PageView::from_state(&run_cycle(&MockSource {
            number: Some(3),
            block: Some(block.clone()),
            with_transactions: Some(BlockWithTransactions::default()),
            ..Default::default()
        })));
        let tx_count = page.details.iter().find(|r| r.label == "Tx Count").unwrap();
        assert_eq!(tx_count.value, "0");
        assert_eq!(page.transactions_note, Some(NO_TRANSACTIONS));

        // Full block missing; the summary's hashes are counted.
        let page = content(PageView::from_state(&run_cycle(&MockSource {
            number: Some(3),
            block: Some(block),
            ..Default::default()
        })));
        let tx_count = page.details.iter().find(|r| r.label == "Tx Count").unwrap();
        assert_eq!(tx_count.value, "2");
        assert_eq!(page.transactions_note, None);
    }

    #[test]
    fn detail_rows_render_block_fields() {
        let mut state = FetchState::default();
        let ticket = state.begin();
        let block = BlockSummary {
            hash: Some("0x88e96d4537bea4d9c05d12549907b32561d3bf31f45aae734cdc119f13406cb6".to_string()),
            miner: None,
            proposer: Some("0xproposer".to_string()),
            base_fee_per_gas: Some(Quantity::Hex("0x0a".to_string())),
            gas_used: Some(Quantity::Fixed(12_345)),
            gas_limit: Some(Quantity::parse("0x1c9c380")),
            ..Default::default()
        };
        state.finish(
            ticket,
            Ok(crate::fetch_state::LatestBlock {
                number: 1,
                block: Some(block),
                transactions: None,
            }),
            SystemTime::now(),
        );

        let values: Vec<String> = detail_rows(&state).into_iter().map(|r| r.value).collect();
        assert_eq!(values[0], "0x88e96d45…406cb6");
        assert_eq!(values[3], "0xproposer");
        assert_eq!(values[4], "0x0a");
        assert_eq!(values[5], "12345");
        assert_eq!(values[6], "30000000");
    }
}
