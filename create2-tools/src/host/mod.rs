// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/create2-tools/blob/main/licenses/COPYRIGHT.md

//! Concrete host-capability implementations.

pub mod logger;
pub mod provider;

pub use logger::TerminalLog;
pub use provider::ProviderHost;
