//! # Fee Estimate
//!
//! Derives the fee, gas limit and storage limit of an operation from the
//! figures a node reports after simulating it.
//!
//! A dry run reports three raw numbers: gas consumed (in **milligas**),
//! storage allocated (in bytes, negative when storage is freed) and the
//! serialized size of the operation. An [`Estimate`] turns those into the
//! values a client writes into the operation before signing, following the
//! default minimal-fee policy of bakers:
//!
//! ```text
//! fee >= 100 mutez + 1 mutez/byte * size + 0.1 mutez/gas * (gas + 100)
//! ```
//!
//! ## Quick start
//!
//! ```rust
//! use fee_estimate::Estimate;
//!
//! // Simulated transfer: 10 400 milligas, no storage, 150 bytes,
//! // 1 mutez burned per storage byte, no caller base fee.
//! let est = Estimate::new(10_400.0, 0.0, 150, 1.0, None);
//!
//! assert_eq!(est.gas_limit(), 111.0);
//! assert_eq!(est.minimal_fee_mutez(), 262.0);
//! assert_eq!(est.total_cost(), 262.0);
//!
//! let summary = est.summary().unwrap();
//! assert_eq!(summary.suggested_fee_mutez, 362);
//! ```
//!
//! See [`estimate`] for the formulas and [`config`] for per-network policies.

pub mod config;
pub mod error;
pub mod estimate;
pub mod properties;
pub mod summary;


// Re-exports for convenience.
pub use config::{FeeConstants, FeePolicy};
pub use error::EstimateError;
pub use estimate::Estimate;
pub use properties::EstimateProperties;
pub use summary::{summarize_batch, BatchSummary, EstimateSummary};
