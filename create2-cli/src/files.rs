// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/create2-tools/blob/main/licenses/COPYRIGHT.md

use std::{io, path::PathBuf};

use create2_host::{FileError, FileHost};

/// Presents one artifact path on disk as the workspace's current file.
#[derive(Debug)]
pub struct WorkspaceFiles {
    artifact: PathBuf,
}

impl WorkspaceFiles {
    pub fn new(artifact: PathBuf) -> Self {
        Self { artifact }
    }
}

impl FileHost for WorkspaceFiles {
    async fn current_file(&self) -> Result<Option<String>, FileError> {
        if self.artifact.is_file() {
            Ok(Some(self.artifact.display().to_string()))
        } else {
            Ok(None)
        }
    }

    async fn read_file(&self, path: &str) -> Result<String, FileError> {
        tokio::fs::read_to_string(path)
            .await
            .map_err(|err| match err.kind() {
                io::ErrorKind::NotFound => FileError::NotFound(path.to_owned()),
                _ => FileError::Io(err.to_string()),
            })
    }
}
