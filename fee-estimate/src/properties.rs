//! Simulation results in the shape the submission pipeline hands them over.

use {
    crate::{config::FeeConstants, error::EstimateError, estimate::Estimate},
    serde::{Deserialize, Serialize},
};

/// Raw figures of one simulated operation.
///
/// Field names follow the camelCase JSON the simulation step produces:
///
/// ```json
/// { "milligasLimit": 10400, "storageLimit": 0, "opSize": 150,
///   "minimalFeePerStorageByteMutez": 250, "baseFeeMutez": 500 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimateProperties {
    pub milligas_limit: f64,
    /// Storage delta in bytes; negative when storage was freed.
    pub storage_limit: f64,
    pub op_size: u64,
    pub minimal_fee_per_storage_byte_mutez: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_fee_mutez: Option<f64>,
}

impl Estimate {
    /// Build an estimate from a simulation record without checking it.
    pub fn from_properties(properties: &EstimateProperties, constants: FeeConstants) -> Self {
        Self::with_constants(
            constants,
            properties.milligas_limit,
            properties.storage_limit,
            properties.op_size,
            properties.minimal_fee_per_storage_byte_mutez,
            properties.base_fee_mutez,
        )
    }

    /// Validating form of [`Estimate::from_properties`].
    pub fn try_from_properties(
        properties: &EstimateProperties,
        constants: FeeConstants,
    ) -> Result<Self, EstimateError> {
        Self::try_with_constants(
            constants,
            properties.milligas_limit,
            properties.storage_limit,
            properties.op_size,
            properties.minimal_fee_per_storage_byte_mutez,
            properties.base_fee_mutez,
        )
    }

    /// One estimate per operation of a batch, in order.
    pub fn from_properties_batch(
        batch: &[EstimateProperties],
        constants: FeeConstants,
    ) -> Vec<Self> {
        batch
            .iter()
            .map(|properties| Self::from_properties(properties, constants))
            .collect()
    }

    /// The raw record this estimate was built from.
    pub fn properties(&self) -> EstimateProperties {
        EstimateProperties {
            milligas_limit: self.milligas_limit(),
            storage_limit: self.storage_limit_raw(),
            op_size: self.op_size(),
            minimal_fee_per_storage_byte_mutez: self.fee_per_storage_byte_mutez(),
            base_fee_mutez: self.base_fee_mutez(),
        }
    }
}
