//! The fetch sequence behind one refresh of the view.

use api::ApiError;
use api::BlockSummary;
use api::BlockWithTransactions;

use crate::fetch_state::LatestBlock;

/// Something that can answer the three queries one refresh needs.
pub(crate) trait BlockSource {
    async fn latest_block_number(&self) -> Result<u64, ApiError>;

    async fn block_summary(&self, number: u64) -> Result<Option<BlockSummary>, ApiError>;

    async fn block_with_transactions(
        &self,
        number: u64,
    ) -> Result<Option<BlockWithTransactions>, ApiError>;
}

/// Calls the server functions in the `api` crate.
pub(crate) struct ServerApi;

impl BlockSource for ServerApi {
    async fn latest_block_number(&self) -> Result<u64, ApiError> {
        api::latest_block_number().await
    }

    async fn block_summary(&self, number: u64) -> Result<Option<BlockSummary>, ApiError> {
        api::block_summary(number).await
    }

    async fn block_with_transactions(
        &self,
        number: u64,
    ) -> Result<Option<BlockWithTransactions>, ApiError> {
        api::block_with_transactions(number).await
    }
}

/// Block number, then summary, then transactions, strictly in sequence.
///
/// The first failure aborts the rest.
pub(crate) async fn fetch_latest<S: BlockSource>(source: &S) -> Result<LatestBlock, ApiError> {
    let number = source.latest_block_number().await?;
    let block = source.block_summary(number).await?;
    let with_transactions = source.block_with_transactions(number).await?;

    Ok(LatestBlock {
        number,
        block,
        transactions: with_transactions.map(|b| b.transactions),
    })
}

#[cfg(test)]
pub(crate) mod tests {
    use std::cell::RefCell;

    use api::TransactionSummary;
    use futures::executor::block_on;

    use super::*;

    /// Canned answers, recording which calls were made.
    #[derive(Default)]
    pub(crate) struct MockSource {
        pub number: Option<u64>,
        pub number_error: Option<&'static str>,
        pub block: Option<BlockSummary>,
        pub with_transactions: Option<BlockWithTransactions>,
        pub calls: RefCell<Vec<String>>,
    }

    impl BlockSource for MockSource {
        async fn latest_block_number(&self) -> Result<u64, ApiError> {
            self.calls.borrow_mut().push("number".to_string());
            match self.number_error {
                Some(message) => Err(ApiError::msg(message)),
                None => Ok(self.number.unwrap_or_default()),
            }
        }

        async fn block_summary(&self, number: u64) -> Result<Option<BlockSummary>, ApiError> {
            self.calls.borrow_mut().push(format!("summary {}", number));
            Ok(self.block.clone())
        }

        async fn block_with_transactions(
            &self,
            number: u64,
        ) -> Result<Option<BlockWithTransactions>, ApiError> {
            self.calls.borrow_mut().push(format!("transactions {}", number));
            Ok(self.with_transactions.clone())
        }
    }

    #[test]
    fn calls_run_in_sequence_with_the_same_number() {
        let source = MockSource {
            number: Some(100),
            block: Some(BlockSummary::default()),
            with_transactions: Some(BlockWithTransactions {
                transactions: vec![TransactionSummary::default(); 3],
                ..Default::default()
            }),
            ..Default::default()
        };

        let latest = block_on(fetch_latest(&source)).unwrap();
        assert_eq!(latest.number, 100);
        assert_eq!(latest.transactions.map(|t| t.len()), Some(3));
        assert_eq!(
            *source.calls.borrow(),
            vec!["number", "summary 100", "transactions 100"]
        );
    }

    #[test]
    fn failure_aborts_the_rest() {
        let source = MockSource {
            number_error: Some("rate limited"),
            ..Default::default()
        };

        let err = block_on(fetch_latest(&source)).unwrap_err();
        assert_eq!(err.to_string(), "rate limited");
        assert_eq!(*source.calls.borrow(), vec!["number"]);
    }

    #[test]
    fn missing_block_gives_no_transactions() {
        let source = MockSource {
            number: Some(5),
            ..Default::default()
        };

        let latest = block_on(fetch_latest(&source)).unwrap();
        assert_eq!(latest.block, None);
        assert_eq!(latest.transactions, None);
    }
}
