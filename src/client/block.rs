use async_trait::async_trait;

use crate::error::Result;
use crate::traits::BlockProvider;
use crate::types::{Block, Commitment};

use super::HistoricalClient;

#[async_trait]
impl BlockProvider for HistoricalClient {
    /// Get a block by its slot at the requested commitment level.
    /// GET:/block/{slot}?commitment={commitment}
    ///
    /// # Arguments
    ///
    /// * `slot` - The ledger slot of the block to retrieve.
    /// * `commitment` - The consistency level for the read;
    ///   `Commitment::default()` is `finalized`.
    ///
    /// # Returns
    ///
    /// A `Result` containing a `Block`, or an error if the request fails.
    async fn get_block(&self, slot: u64, commitment: Commitment) -> Result<Block> {
        let endpoint = format!("block/{}?commitment={}", slot, commitment);
        self.get_json(&endpoint).await
    }
}
