//! Fee Estimate Property-Based Invariant Tests
//!
//! Uses proptest to verify the numeric contracts of every derived figure.
