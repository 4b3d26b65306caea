use {
    crate::{error::EstimateError, estimate::Estimate},
    borsh::{BorshDeserialize, BorshSerialize},
    log::debug,
    serde::{Deserialize, Serialize},
};

/// Derived figures of one estimate as whole integers, ready to be copied into
/// operation fields.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, BorshSerialize, BorshDeserialize,
)]
pub struct EstimateSummary {
    pub burn_fee_mutez: u64,
    pub gas_limit: u64,
    pub minimal_fee_mutez: u64,
    pub storage_limit: u64,
    pub suggested_fee_mutez: u64,
    pub total_cost: u64,
    pub using_base_fee_mutez: u64,
    pub consumed_milligas: u64,
}

/// Totals over every operation of a batch.
///
/// Sums saturate at `u64::MAX`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, BorshSerialize, BorshDeserialize,
)]
pub struct BatchSummary {
    /// Number of operations in the batch.
    pub count: u64,
    pub gas_limit: u64,
    pub storage_limit: u64,
    pub burn_fee_mutez: u64,
    pub minimal_fee_mutez: u64,
    pub suggested_fee_mutez: u64,
    pub total_cost: u64,
}

impl BatchSummary {
    /// Fold one operation into the totals.
    pub fn add(&mut self, summary: &EstimateSummary) {
        self.count = self.count.saturating_add(1);
        self.gas_limit = self.gas_limit.saturating_add(summary.gas_limit);
        self.storage_limit = self.storage_limit.saturating_add(summary.storage_limit);
        self.burn_fee_mutez = self.burn_fee_mutez.saturating_add(summary.burn_fee_mutez);
        self.minimal_fee_mutez = self
            .minimal_fee_mutez
            .saturating_add(summary.minimal_fee_mutez);
        self.suggested_fee_mutez = self
            .suggested_fee_mutez
            .saturating_add(summary.suggested_fee_mutez);
        self.total_cost = self.total_cost.saturating_add(summary.total_cost);
    }
}

impl Estimate {
    /// Every derived figure as a `u64`.
    ///
    /// Fails with [`EstimateError::NonRepresentable`] on the first figure that
    /// is `NaN`, infinite, negative or above `u64::MAX`.
    pub fn summary(&self) -> Result<EstimateSummary, EstimateError> {
        Ok(EstimateSummary {
            burn_fee_mutez: to_u64("burn_fee_mutez", self.burn_fee_mutez())?,
            gas_limit: to_u64("gas_limit", self.gas_limit())?,
            minimal_fee_mutez: to_u64("minimal_fee_mutez", self.minimal_fee_mutez())?,
            storage_limit: to_u64("storage_limit", self.storage_limit())?,
            suggested_fee_mutez: to_u64("suggested_fee_mutez", self.suggested_fee_mutez())?,
            total_cost: to_u64("total_cost", self.total_cost())?,
            using_base_fee_mutez: to_u64("using_base_fee_mutez", self.using_base_fee_mutez())?,
            consumed_milligas: to_u64("consumed_milligas", self.consumed_milligas())?,
        })
    }
}

/// Sum the integer summaries of a batch. An empty batch yields all zeros.
pub fn summarize_batch(estimates: &[Estimate]) -> Result<BatchSummary, EstimateError> {
    estimates
        .iter()
        .try_fold(BatchSummary::default(), |mut totals, estimate| {
            totals.add(&estimate.summary()?);
            Ok(totals)
        })
}

/// Round up and convert, refusing values with no `u64` counterpart.
fn to_u64(field: &'static str, value: f64) -> Result<u64, EstimateError> {
    let rounded = value.ceil();
    // u64::MAX as f64 is 2^64, which is itself out of range.
    if rounded.is_finite() && rounded >= 0.0 && rounded < u64::MAX as f64 {
        Ok(rounded as u64)
    } else {
        debug!("{field}={value} has no u64 representation");
        Err(EstimateError::NonRepresentable { field, value })
    }
}
