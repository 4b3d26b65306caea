use {
    crate::error::EstimateError,
    borsh::{BorshDeserialize, BorshSerialize},
    log::debug,
    serde::{Deserialize, Serialize},
    std::{fs, path::Path},
};

/// Flat minimum fee every operation pays, in mutez.
pub const DEFAULT_MINIMAL_FEE_MUTEZ: f64 = 100.0;
/// Fee per byte of serialized operation, in mutez.
pub const DEFAULT_MINIMAL_FEE_PER_BYTE_MUTEZ: f64 = 1.0;
/// Fee per unit of gas, in mutez.
pub const DEFAULT_MINIMAL_FEE_PER_GAS_MUTEZ: f64 = 0.1;
/// Gas units added on top of the simulated consumption.
pub const DEFAULT_GAS_BUFFER: f64 = 100.0;
/// Protocol cost of one byte of newly allocated storage, in mutez.
pub const DEFAULT_FEE_PER_STORAGE_BYTE_MUTEZ: f64 = 250.0;

/// Baker fee constants used by every derived fee figure.
///
/// These approximate the default minimal-fee policy of a baker:
/// `fee >= minimal_fee + size * per_byte + gas * per_gas`.
/// The values are fixed per instance; a network with a different policy
/// supplies its own `FeeConstants` at construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, BorshSerialize, BorshDeserialize)]
#[serde(default)]
pub struct FeeConstants {
    /// Flat minimum fee in mutez.
    pub minimal_fee_mutez: f64,

    /// Fee rate per byte of the serialized operation.
    pub minimal_fee_per_byte_mutez: f64,

    /// Fee rate per gas unit consumed.
    pub minimal_fee_per_gas_mutez: f64,

    /// Safety margin in gas units added to the measured consumption.
    pub gas_buffer: f64,
}

impl Default for FeeConstants {
    fn default() -> Self {
        Self {
            minimal_fee_mutez: DEFAULT_MINIMAL_FEE_MUTEZ,                   // 100 mutez
            minimal_fee_per_byte_mutez: DEFAULT_MINIMAL_FEE_PER_BYTE_MUTEZ, // 1 mutez / byte
            minimal_fee_per_gas_mutez: DEFAULT_MINIMAL_FEE_PER_GAS_MUTEZ,   // 0.1 mutez / gas
            gas_buffer: DEFAULT_GAS_BUFFER,                                 // 100 gas
        }
    }
}

/// A network fee policy: baker constants plus the storage burn rate.
///
/// Policies are plain values and can be persisted as YAML:
///
/// ```yaml
/// constants:
///   minimal_fee_mutez: 100.0
///   minimal_fee_per_byte_mutez: 1.0
///   minimal_fee_per_gas_mutez: 0.1
///   gas_buffer: 100.0
/// fee_per_storage_byte_mutez: 250.0
/// ```
///
/// Every key is optional; missing keys take their default.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, BorshSerialize, BorshDeserialize)]
#[serde(default)]
pub struct FeePolicy {
    pub constants: FeeConstants,
    /// Mutez burned per byte of storage the operation allocates.
    pub fee_per_storage_byte_mutez: f64,
}

impl Default for FeePolicy {
    fn default() -> Self {
        Self {
            constants: FeeConstants::default(),
            fee_per_storage_byte_mutez: DEFAULT_FEE_PER_STORAGE_BYTE_MUTEZ,
        }
    }
}

impl FeePolicy {
    /// Default constants with a network-specific storage burn rate.
    pub fn with_storage_rate(fee_per_storage_byte_mutez: f64) -> Self {
        Self {
            fee_per_storage_byte_mutez,
            ..Self::default()
        }
    }

    /// Parse a policy from a YAML document and validate it.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, EstimateError> {
        let policy: Self = serde_yaml::from_str(yaml)?;
        validate_policy(&policy)?;
        Ok(policy)
    }

    /// Load and validate a policy file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, EstimateError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;
        let policy = Self::from_yaml_str(&contents)?;
        debug!(
            "loaded fee policy from {}: minimal_fee={} per_byte={} per_gas={} gas_buffer={} storage_rate={}",
            path.display(),
            policy.constants.minimal_fee_mutez,
            policy.constants.minimal_fee_per_byte_mutez,
            policy.constants.minimal_fee_per_gas_mutez,
            policy.constants.gas_buffer,
            policy.fee_per_storage_byte_mutez,
        );
        Ok(policy)
    }

    /// Write the policy as YAML, creating parent directories as needed.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), EstimateError> {
        let path = path.as_ref();
        if let Some(outdir) = path.parent() {
            fs::create_dir_all(outdir)?;
        }
        let yaml = serde_yaml::to_string(self)?;
        fs::write(path, yaml)?;
        Ok(())
    }
}

/// Validate that every constant is finite and non-negative.
pub fn validate_constants(constants: &FeeConstants) -> Result<(), EstimateError> {
    check_rate("minimal_fee_mutez", constants.minimal_fee_mutez)?;
    check_rate("minimal_fee_per_byte_mutez", constants.minimal_fee_per_byte_mutez)?;
    check_rate("minimal_fee_per_gas_mutez", constants.minimal_fee_per_gas_mutez)?;
    check_rate("gas_buffer", constants.gas_buffer)?;
    Ok(())
}

/// Validate a whole policy, including the storage burn rate.
pub fn validate_policy(policy: &FeePolicy) -> Result<(), EstimateError> {
    validate_constants(&policy.constants)?;
    check_rate("fee_per_storage_byte_mutez", policy.fee_per_storage_byte_mutez)
}

fn check_rate(name: &str, value: f64) -> Result<(), EstimateError> {
    if !value.is_finite() {
        return Err(EstimateError::InvalidConstants {
            reason: format!("{name} ({value}) must be finite"),
        });
    }
    if value < 0.0 {
        return Err(EstimateError::InvalidConstants {
            reason: format!("{name} ({value}) must be >= 0"),
        });
    }
    Ok(())
}
