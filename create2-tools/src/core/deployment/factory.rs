// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/create2-tools/blob/main/licenses/COPYRIGHT.md

//! The on-chain CREATE2 factory interface.

use alloy::{
    primitives::{address, Address, Bytes},
    sol,
    sol_types::SolCall,
};

use crate::core::{payload::DeploymentPayload, salt::Salt};

/// Well-known factory deployment address, identical on every supported
/// network.
pub const FACTORY_ADDRESS: Address = address!("56434E34E7771aa9680d09220Fe5d4D5c305323a");

sol! {
    interface Create2Factory {
        function deploy(bytes memory code, bytes32 salt) public;
        function getAddress(bytes memory code, bytes32 salt) public view returns (address);
    }
}

/// Calldata for the state-changing deploy entry point.
pub fn deploy_calldata(payload: &DeploymentPayload, salt: &Salt) -> Bytes {
    Create2Factory::deployCall {
        code: payload.as_bytes().to_vec().into(),
        salt: salt.as_b256(),
    }
    .abi_encode()
    .into()
}

/// Calldata for the read-only address-resolution entry point. Must carry
/// the same (payload, salt) pair as the deploy call.
pub fn get_address_calldata(payload: &DeploymentPayload, salt: &Salt) -> Bytes {
    Create2Factory::getAddressCall {
        code: payload.as_bytes().to_vec().into(),
        salt: salt.as_b256(),
    }
    .abi_encode()
    .into()
}

/// Decodes the address returned by `getAddress`.
pub fn decode_address(data: &[u8]) -> Result<Address, alloy::sol_types::Error> {
    Create2Factory::getAddressCall::abi_decode_returns(data)
}
