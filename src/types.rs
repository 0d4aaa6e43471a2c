use std::fmt;

use serde::{Deserialize, Serialize};

/// Consistency level requested for a read, reflecting how irreversible the
/// server considers the returned data.
///
/// The value is passed through to the query string as-is; the client does not
/// validate it. `Custom` carries any other level the server might accept.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Commitment {
    #[default]
    Finalized,
    Confirmed,
    Processed,
    Custom(String),
}

impl Commitment {
    pub fn as_str(&self) -> &str {
        match self {
            Commitment::Finalized => "finalized",
            Commitment::Confirmed => "confirmed",
            Commitment::Processed => "processed",
            Commitment::Custom(level) => level,
        }
    }
}

impl fmt::Display for Commitment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A block as returned by `GET /block/{slot}`.
///
/// `parent_slot < slot` and the other ordering invariants are guaranteed by
/// the server; the client surfaces the body as-is without validating them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Block {
    pub slot: u64,
    pub blockhash: String,
    pub parent_slot: u64,
    /// Server-assigned, unix seconds.
    pub block_time: i64,
    pub height: u64,
}

/// A transaction as returned by `GET /tx/{signature}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub signature: String,
    pub slot: u64,
    pub block_time: i64,
    /// First signer of the transaction.
    pub signer: String,
    /// Fee paid, in the smallest currency unit.
    pub fee: u64,
    pub compute_units: u64,
    /// Present only when the transaction failed on-chain.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub err: Option<String>,
}

impl Transaction {
    pub fn succeeded(&self) -> bool {
        self.err.is_none()
    }
}

/// A lightweight history row returned by `GET /sigs/{address}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignatureRecord {
    pub signature: String,
    pub slot: u64,
    pub block_time: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub err: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,
}

/// Pagination options for [`crate::traits::TransactionProvider::get_signatures_for_address`].
///
/// Each option is emitted into the query string only when supplied; the
/// default produces an empty query.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignatureOptions {
    /// Maximum records to return. A limit of zero is treated the same as no
    /// limit at all and omitted from the query, matching the server's
    /// historical behavior. Callers cannot request exactly zero records.
    pub limit: Option<u64>,
    /// Return records strictly before this signature.
    pub before: Option<String>,
    /// Stop at this signature; inclusivity is interpreted by the server.
    pub until: Option<String>,
}

impl SignatureOptions {
    pub fn limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn before(mut self, signature: impl Into<String>) -> Self {
        self.before = Some(signature.into());
        self
    }

    pub fn until(mut self, signature: impl Into<String>) -> Self {
        self.until = Some(signature.into());
        self
    }
}
