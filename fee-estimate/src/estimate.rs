use {
    crate::{
        config::{validate_constants, FeeConstants, FeePolicy},
        error::EstimateError,
    },
    log::{debug, trace},
};

/// Milligas per gas unit.
pub const MILLIGAS_PER_GAS: f64 = 1000.0;

/// Fee and limit estimate for a single operation.
///
/// Built once from the simulation results of a dry run and read afterwards.
/// Every query is recomputed from the raw inputs on each call.
///
/// # Formulas
///
/// ```text
/// storage_limit       = max(storage_limit_raw, 0)
/// burn_fee            = ceil(storage_limit * fee_per_storage_byte)
/// gas_limit           = ceil(milligas / 1000 + gas_buffer)
/// operation_fee       = (milligas / 1000 + gas_buffer) * fee_per_gas
///                       + op_size * fee_per_byte                     (unrounded)
/// minimal_fee         = ceil(minimal_fee_mutez + operation_fee)
/// suggested_fee       = ceil(operation_fee + 2 * minimal_fee_mutez)
/// using_base_fee      = max(base_fee, minimal_fee_mutez) + ceil(operation_fee)
/// total_cost          = minimal_fee + burn_fee
/// ```
///
/// Rounding is always toward positive infinity and happens only where a value
/// becomes an operation field, so compound figures round exactly once.
///
/// The queries never fail. A `NaN` input yields a `NaN` output, except for
/// [`Estimate::storage_limit`], which floors anything that is not a positive
/// number to zero. Use [`Estimate::try_with_constants`] to reject such inputs
/// up front, or [`Estimate::summary`] to get checked integers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Estimate {
    milligas_limit: f64,
    storage_limit_raw: f64,
    op_size: u64,
    base_fee_mutez: Option<f64>,
    fee_per_storage_byte_mutez: f64,
    constants: FeeConstants,
}

impl Estimate {
    /// Estimate using the default baker constants.
    pub fn new(
        milligas_limit: f64,
        storage_limit_raw: f64,
        op_size: u64,
        fee_per_storage_byte_mutez: f64,
        base_fee_mutez: Option<f64>,
    ) -> Self {
        Self::with_constants(
            FeeConstants::default(),
            milligas_limit,
            storage_limit_raw,
            op_size,
            fee_per_storage_byte_mutez,
            base_fee_mutez,
        )
    }

    /// Estimate with explicit baker constants. No input is checked.
    pub fn with_constants(
        constants: FeeConstants,
        milligas_limit: f64,
        storage_limit_raw: f64,
        op_size: u64,
        fee_per_storage_byte_mutez: f64,
        base_fee_mutez: Option<f64>,
    ) -> Self {
        trace!(
            "estimate: milligas={milligas_limit} storage={storage_limit_raw} op_size={op_size} \
             storage_rate={fee_per_storage_byte_mutez} base_fee={base_fee_mutez:?}"
        );
        Self {
            milligas_limit,
            storage_limit_raw,
            op_size,
            base_fee_mutez,
            fee_per_storage_byte_mutez,
            constants,
        }
    }

    /// Estimate under a network policy, taking the storage rate from it.
    pub fn from_policy(
        policy: &FeePolicy,
        milligas_limit: f64,
        storage_limit_raw: f64,
        op_size: u64,
        base_fee_mutez: Option<f64>,
    ) -> Self {
        Self::with_constants(
            policy.constants,
            milligas_limit,
            storage_limit_raw,
            op_size,
            policy.fee_per_storage_byte_mutez,
            base_fee_mutez,
        )
    }

    /// Like [`Estimate::with_constants`], but rejects non-finite or negative
    /// inputs and invalid constants. A negative storage delta is accepted.
    pub fn try_with_constants(
        constants: FeeConstants,
        milligas_limit: f64,
        storage_limit_raw: f64,
        op_size: u64,
        fee_per_storage_byte_mutez: f64,
        base_fee_mutez: Option<f64>,
    ) -> Result<Self, EstimateError> {
        validate_constants(&constants)?;
        check_non_negative("milligas_limit", milligas_limit)?;
        check_finite("storage_limit", storage_limit_raw)?;
        check_non_negative("fee_per_storage_byte_mutez", fee_per_storage_byte_mutez)?;
        if let Some(base_fee) = base_fee_mutez {
            check_non_negative("base_fee_mutez", base_fee)?;
        }
        Ok(Self::with_constants(
            constants,
            milligas_limit,
            storage_limit_raw,
            op_size,
            fee_per_storage_byte_mutez,
            base_fee_mutez,
        ))
    }

    /// Validating form of [`Estimate::new`].
    pub fn try_new(
        milligas_limit: f64,
        storage_limit_raw: f64,
        op_size: u64,
        fee_per_storage_byte_mutez: f64,
        base_fee_mutez: Option<f64>,
    ) -> Result<Self, EstimateError> {
        Self::try_with_constants(
            FeeConstants::default(),
            milligas_limit,
            storage_limit_raw,
            op_size,
            fee_per_storage_byte_mutez,
            base_fee_mutez,
        )
    }

    pub fn constants(&self) -> &FeeConstants {
        &self.constants
    }

    pub fn milligas_limit(&self) -> f64 {
        self.milligas_limit
    }

    /// Raw storage delta as simulated; negative when storage was freed.
    pub fn storage_limit_raw(&self) -> f64 {
        self.storage_limit_raw
    }

    pub fn op_size(&self) -> u64 {
        self.op_size
    }

    pub fn base_fee_mutez(&self) -> Option<f64> {
        self.base_fee_mutez
    }

    pub fn fee_per_storage_byte_mutez(&self) -> f64 {
        self.fee_per_storage_byte_mutez
    }

    /// Storage limit to declare. Freed storage never yields a negative limit.
    pub fn storage_limit(&self) -> f64 {
        // f64::max returns the non-NaN operand, so NaN floors to 0 as well.
        self.storage_limit_raw.max(0.0)
    }

    /// Mutez burned for the storage the operation allocates.
    pub fn burn_fee_mutez(&self) -> f64 {
        round_up(self.storage_limit() * self.fee_per_storage_byte_mutez)
    }

    /// Gas limit to declare: consumption plus the gas buffer, in whole gas units.
    pub fn gas_limit(&self) -> f64 {
        round_up(self.buffered_gas())
    }

    /// Simulated consumption in milligas, without the buffer.
    pub fn consumed_milligas(&self) -> f64 {
        self.milligas_limit
    }

    /// Gas and size component of the fee, before rounding.
    pub fn operation_fee_mutez(&self) -> f64 {
        self.buffered_gas() * self.constants.minimal_fee_per_gas_mutez
            + self.op_size as f64 * self.constants.minimal_fee_per_byte_mutez
    }

    /// Lowest fee a baker with default policy accepts.
    pub fn minimal_fee_mutez(&self) -> f64 {
        round_up(self.constants.minimal_fee_mutez + self.operation_fee_mutez())
    }

    /// Minimal fee plus one more flat fee as margin.
    pub fn suggested_fee_mutez(&self) -> f64 {
        round_up(self.operation_fee_mutez() + self.constants.minimal_fee_mutez * 2.0)
    }

    /// Fee built on the caller's base fee, never below the flat minimum.
    ///
    /// Without a base fee the flat minimum is used, which makes this equal to
    /// `ceil(minimal_fee_mutez) + ceil(operation_fee_mutez)`.
    pub fn using_base_fee_mutez(&self) -> f64 {
        let floor = self.constants.minimal_fee_mutez;
        let base_fee = self.base_fee_mutez.unwrap_or(floor);
        max_or_nan(base_fee, floor) + round_up(self.operation_fee_mutez())
    }

    /// Fee plus storage burn: everything the sender pays.
    pub fn total_cost(&self) -> f64 {
        self.minimal_fee_mutez() + self.burn_fee_mutez()
    }

    #[inline]
    fn buffered_gas(&self) -> f64 {
        self.milligas_limit / MILLIGAS_PER_GAS + self.constants.gas_buffer
    }
}

#[inline]
fn round_up(mutez: f64) -> f64 {
    mutez.ceil()
}

/// `max` that keeps a `NaN` left operand instead of discarding it.
#[inline]
fn max_or_nan(value: f64, floor: f64) -> f64 {
    if value.is_nan() {
        value
    } else {
        value.max(floor)
    }
}

fn check_finite(field: &'static str, value: f64) -> Result<(), EstimateError> {
    if value.is_finite() {
        Ok(())
    } else {
        debug!("rejecting estimate input {field}={value}: not finite");
        Err(EstimateError::NonFiniteInput { field, value })
    }
}

fn check_non_negative(field: &'static str, value: f64) -> Result<(), EstimateError> {
    check_finite(field, value)?;
    if value < 0.0 {
        debug!("rejecting estimate input {field}={value}: negative");
        return Err(EstimateError::NegativeInput { field, value });
    }
    Ok(())
}
