// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/create2-tools/blob/main/licenses/COPYRIGHT.md

//! Workspace file access capability.

#[derive(Debug, Clone, thiserror::Error)]
pub enum FileError {
    #[error("no file selected")]
    NoFileSelected,
    #[error("file not found: {0}")]
    NotFound(String),
    #[error("io error: {0}")]
    Io(String),
}

/// Access to the files of the host workspace.
///
/// Callers treat a failing [`current_file`](FileHost::current_file) as
/// "no file selected" rather than a hard error.
pub trait FileHost {
    fn current_file(
        &self,
    ) -> impl std::future::Future<Output = Result<Option<String>, FileError>> + Send;

    fn read_file(
        &self,
        path: &str,
    ) -> impl std::future::Future<Output = Result<String, FileError>> + Send;
}
