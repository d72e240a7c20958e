// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/create2-tools/blob/main/licenses/COPYRIGHT.md

use create2_host::{LogHost, LogLevel};

/// Forwards progress messages to the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalLog;

impl LogHost for TerminalLog {
    fn log(&self, level: LogLevel, message: &str) {
        match level {
            LogLevel::Debug => debug!(@grey, "{message}"),
            LogLevel::Info => info!(@grey, "{message}"),
            LogLevel::Warn => warn!(@yellow, "{message}"),
            LogLevel::Error => error!(@red, "{message}"),
        }
    }
}
