// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/create2-tools/blob/main/licenses/COPYRIGHT.md

//! Host capability traits consumed by [`create2-tools`].
//!
//! The deployment pipeline never talks to a concrete IDE, wallet or RPC
//! endpoint directly. Instead the embedder injects three narrow
//! capabilities: workspace file access, logging, and a chain provider.

pub mod chain;
pub mod file;
pub mod log;

pub use chain::{ChainError, ChainEvent, ChainHost};
pub use file::{FileError, FileHost};
pub use log::{LogHost, LogLevel};
