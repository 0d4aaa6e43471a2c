pub mod client;
pub mod error;
pub mod traits;
pub mod types;

pub use client::*;
pub use error::*;
pub use traits::*;
pub use types::*;
