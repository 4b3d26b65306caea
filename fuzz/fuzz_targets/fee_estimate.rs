//! Fuzz the fee estimate with random and extreme inputs.
//!
//! Goals:
//! - Find panics in any derived figure, the summary, or batch totals.
//! - Verify the storage floor and the exact total-cost identity.
//! - Verify that a validated estimate always has a representable summary
//!   when its inputs are in a realistic range.

#![no_main]

use {
    arbitrary::{Arbitrary, Unstructured},
    fee_estimate::{summarize_batch, Estimate, FeeConstants},
    libfuzzer_sys::fuzz_target,
};

/// Fuzz input: raw simulation figures plus constants.
#[derive(Debug)]
struct FuzzInput {
    milligas_limit: f64,
    storage_limit: f64,
    op_size: u64,
    fee_per_storage_byte_mutez: f64,
    base_fee_mutez: Option<f64>,
    constants: FeeConstants,
}

impl<'a> Arbitrary<'a> for FuzzInput {
    fn arbitrary(u: &mut Unstructured<'a>) -> arbitrary::Result<Self> {
        Ok(FuzzInput {
            milligas_limit: u.arbitrary()?,
            storage_limit: u.arbitrary()?,
            op_size: u.arbitrary()?,
            fee_per_storage_byte_mutez: u.arbitrary()?,
            base_fee_mutez: u.arbitrary()?,
            constants: FeeConstants {
                minimal_fee_mutez: u.arbitrary()?,
                minimal_fee_per_byte_mutez: u.arbitrary()?,
                minimal_fee_per_gas_mutez: u.arbitrary()?,
                gas_buffer: u.arbitrary()?,
            },
        })
    }
}

fuzz_target!(|data: &[u8]| {
    let mut u = Unstructured::new(data);
    let input: FuzzInput = match u.arbitrary() {
        Ok(i) => i,
        Err(_) => return,
    };

    let est = Estimate::with_constants(
        input.constants,
        input.milligas_limit,
        input.storage_limit,
        input.op_size,
        input.fee_per_storage_byte_mutez,
        input.base_fee_mutez,
    );

    // ── Invariant: storage limit is never negative, and never NaN ──
    let storage_limit = est.storage_limit();
    assert!(storage_limit >= 0.0, "storage_limit {storage_limit} < 0");

    // ── Invariant: total cost is exactly fee plus burn ──
    let total = est.total_cost();
    let expected = est.minimal_fee_mutez() + est.burn_fee_mutez();
    assert!(
        total == expected || (total.is_nan() && expected.is_nan()),
        "total_cost {total} != {expected}"
    );

    // Must not panic regardless of inputs.
    let _ = est.summary();
    let _ = summarize_batch(&[est, est]);

    // ── Validated path with realistic magnitudes ──
    let bounded = Estimate::try_new(
        input.milligas_limit.abs() % 1e12,
        input.storage_limit % 1e9,
        input.op_size % 1_000_000,
        input.fee_per_storage_byte_mutez.abs() % 1e6,
        input.base_fee_mutez.map(|b| b.abs() % 1e12),
    );
    if let Ok(bounded) = bounded {
        let summary = bounded
            .summary()
            .expect("bounded validated inputs have a u64 summary");
        assert!(summary.minimal_fee_mutez >= 100);
        assert!(summary.suggested_fee_mutez >= summary.minimal_fee_mutez);
        assert_eq!(
            summary.total_cost,
            summary.minimal_fee_mutez + summary.burn_fee_mutez
        );
    }
});
