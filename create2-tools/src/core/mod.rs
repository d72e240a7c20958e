// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/create2-tools/blob/main/licenses/COPYRIGHT.md

pub mod artifact;
pub mod codec;
pub mod deployment;
pub mod network;
pub mod payload;
pub mod salt;
pub mod session;
