use async_trait::async_trait;

use crate::error::Result;
use crate::traits::TransactionProvider;
use crate::types::{Commitment, SignatureOptions, SignatureRecord, Transaction};

use super::HistoricalClient;

#[async_trait]
impl TransactionProvider for HistoricalClient {
    /// Get a transaction by its signature at the requested commitment level.
    /// GET:/tx/{signature}?commitment={commitment}
    ///
    /// # Arguments
    ///
    /// * `signature` - The signature of the transaction to retrieve.
    /// * `commitment` - The consistency level for the read.
    ///
    /// # Returns
    ///
    /// A `Result` containing a `Transaction`, or an error if the request fails.
    async fn get_transaction(
        &self,
        signature: &str,
        commitment: Commitment,
    ) -> Result<Transaction> {
        let endpoint = format!("tx/{}?commitment={}", signature, commitment);
        self.get_json(&endpoint).await
    }

    /// List signature history for an address with sparse pagination options.
    /// GET:/sigs/{address}?limit={limit}&before={before}&until={until}
    ///
    /// Only supplied options appear in the query string; see
    /// [`SignatureOptions`] for the `limit == 0` quirk.
    async fn get_signatures_for_address(
        &self,
        address: &str,
        opts: SignatureOptions,
    ) -> Result<Vec<SignatureRecord>> {
        let query = signatures_query(&opts);
        let endpoint = if query.is_empty() {
            format!("sigs/{}", address)
        } else {
            format!("sigs/{}?{}", address, query)
        };
        self.get_json(&endpoint).await
    }
}

/// Builds the sparse query string for the signature history endpoint.
///
/// A key is emitted iff its option was supplied; a zero limit is dropped the
/// same as an absent one. Keys are emitted as `limit`, `before`, `until`.
fn signatures_query(opts: &SignatureOptions) -> String {
    let mut pairs = Vec::new();
    if let Some(limit) = opts.limit {
        if limit > 0 {
            pairs.push(format!("limit={}", limit));
        }
    }
    if let Some(before) = &opts.before {
        pairs.push(format!("before={}", before));
    }
    if let Some(until) = &opts.until {
        pairs.push(format!("until={}", until));
    }
    pairs.join("&")
}
