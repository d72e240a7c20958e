// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/create2-tools/blob/main/licenses/COPYRIGHT.md

//! Tools for deploying compiled contracts at deterministic addresses.
//!
//! A compiled-contract artifact is parsed, its constructor arguments are
//! encoded against the declared ABI types, and the resulting init code is
//! handed to a well-known CREATE2 factory together with a salt. The
//! factory is then asked, read-only, for the address the (init code,
//! salt) pair resolves to.

#[macro_use]
mod macros;

pub mod core;
pub(crate) mod error;
pub mod host;
pub mod ops;
pub mod utils;

pub use error::{Error, Result};
