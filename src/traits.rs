use async_trait::async_trait;

use crate::error::Result;
use crate::types::{Block, Commitment, SignatureOptions, SignatureRecord, Transaction};

#[async_trait]
pub trait BlockProvider {
    // Get a block by its slot.
    async fn get_block(&self, slot: u64, commitment: Commitment) -> Result<Block>;
}

#[async_trait]
pub trait TransactionProvider {
    // Get a transaction by its signature.
    async fn get_transaction(
        &self,
        signature: &str,
        commitment: Commitment,
    ) -> Result<Transaction>;

    // List signature history for an address, newest first.
    async fn get_signatures_for_address(
        &self,
        address: &str,
        opts: SignatureOptions,
    ) -> Result<Vec<SignatureRecord>>;
}
