// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/create2-tools/blob/main/licenses/COPYRIGHT.md

//! Deployment payload (init code) construction.

use alloy::{
    dyn_abi::{DynSolType, DynSolValue},
    primitives::Bytes,
};

use super::{
    artifact::AbiParameter,
    codec::{EncodableValue, EncodedArgument},
};

#[derive(Debug, thiserror::Error)]
pub enum PayloadError {
    #[error("mismatched number of constructor arguments (want {want}; got {got})")]
    ArityMismatch { want: usize, got: usize },
    #[error("could not resolve constructor arg type `{ty}`: {source}")]
    InvalidType {
        ty: String,
        source: alloy::dyn_abi::Error,
    },
    #[error("could not parse `{value}` as `{ty}`: {source}")]
    Coercion {
        ty: String,
        value: String,
        source: alloy::dyn_abi::Error,
    },
    #[error("`{0}` is not an array type but got an element sequence")]
    ExpectedArray(String),
}

/// The byte sequence a CREATE2 factory executes to construct the
/// contract: object code followed by the ABI-encoded constructor
/// arguments, in declared parameter order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeploymentPayload(Vec<u8>);

impl DeploymentPayload {
    /// Builds the init code from bytecode and pre-encoded arguments.
    ///
    /// `params` and `args` must be index-aligned in the constructor's
    /// declared order; neither the codec nor this builder may reorder
    /// them, or the encoding no longer matches the declared types. With
    /// no declared parameters the payload is the bytecode unchanged.
    pub fn build(
        bytecode: Vec<u8>,
        params: &[AbiParameter],
        args: &[EncodedArgument],
    ) -> Result<Self, PayloadError> {
        if params.len() != args.len() {
            return Err(PayloadError::ArityMismatch {
                want: params.len(),
                got: args.len(),
            });
        }
        if params.is_empty() {
            return Ok(Self(bytecode));
        }

        let mut values = Vec::with_capacity(args.len());
        for (param, arg) in params.iter().zip(args) {
            values.push(coerce(&param.ty, &arg.value)?);
        }
        let encoded = DynSolValue::Tuple(values).abi_encode_params();

        let mut payload = bytecode;
        payload.extend_from_slice(&encoded);
        Ok(Self(payload))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl From<DeploymentPayload> for Bytes {
    fn from(payload: DeploymentPayload) -> Bytes {
        payload.0.into()
    }
}

/// Coerces one pre-encoded argument into a typed value. The underlying
/// coercion owns final parsing, e.g. decimal string to integer.
fn coerce(ty: &str, value: &EncodableValue) -> Result<DynSolValue, PayloadError> {
    let sol_type = DynSolType::parse(ty).map_err(|source| PayloadError::InvalidType {
        ty: ty.to_owned(),
        source,
    })?;
    match value {
        EncodableValue::Single(value) => {
            sol_type
                .coerce_str(value)
                .map_err(|source| PayloadError::Coercion {
                    ty: ty.to_owned(),
                    value: value.clone(),
                    source,
                })
        }
        EncodableValue::Many(values) => {
            // The codec split on `[]`, so the parsed type is an array of
            // some element type.
            let DynSolType::Array(elem) = &sol_type else {
                return Err(PayloadError::ExpectedArray(ty.to_owned()));
            };
            let mut coerced = Vec::with_capacity(values.len());
            for value in values {
                coerced.push(elem.coerce_str(value).map_err(|source| {
                    PayloadError::Coercion {
                        ty: ty.to_owned(),
                        value: value.clone(),
                        source,
                    }
                })?);
            }
            Ok(DynSolValue::Array(coerced))
        }
    }
}
