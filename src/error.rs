//! Error types for subnet calculations.

use thiserror::Error;

/// Errors reported by the calculator. Every failure is terminal for the call.
#[derive(Error, Debug)]
pub enum NetcalcError {
    #[error("Address is not valid: {0}")]
    InvalidAddress(String),

    #[error("Mask is not valid: {0}")]
    InvalidMask(String),

    #[error("Prefix length {0} is outside 0..=32")]
    InvalidPrefixLength(i64),

    #[error("Not a valid network address: {address} with mask {mask}")]
    NotANetworkAddress { address: String, mask: String },

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, NetcalcError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            NetcalcError::InvalidAddress("300.1.1.1".to_string()).to_string(),
            "Address is not valid: 300.1.1.1"
        );
        assert_eq!(
            NetcalcError::InvalidPrefixLength(33).to_string(),
            "Prefix length 33 is outside 0..=32"
        );
        let err = NetcalcError::NotANetworkAddress {
            address: "10.0.0.1".to_string(),
            mask: "255.0.0.0".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Not a valid network address: 10.0.0.1 with mask 255.0.0.0"
        );
    }
}
