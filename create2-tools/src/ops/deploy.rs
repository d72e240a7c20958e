// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/create2-tools/blob/main/licenses/COPYRIGHT.md

//! End-to-end deployment operations.

use create2_host::{ChainHost, FileHost, LogHost, LogLevel};

use crate::{
    core::{deployment::DeploymentRecord, session::Session},
    utils::color::DebugColor,
    Result,
};

/// Loads the artifact currently selected in the host workspace into the
/// session. Returns `false` when no file is selected; a failing
/// `current_file` counts as no selection, not as an error.
pub async fn load_current_artifact(
    session: &mut Session,
    files: &impl FileHost,
    log: &impl LogHost,
) -> Result<bool> {
    let path = match files.current_file().await {
        Ok(Some(path)) => path,
        Ok(None) | Err(_) => {
            log.log(LogLevel::Warn, "No compiled json selected");
            return Ok(false);
        }
    };
    debug!(@grey, "reading artifact from {path}");
    let raw = files.read_file(&path).await?;
    session.load_artifact(&raw)?;
    Ok(true)
}

/// Deploys the prepared session attempt through the factory.
pub async fn deploy(
    session: &mut Session,
    chain: &impl ChainHost,
    log: &impl LogHost,
) -> Result<DeploymentRecord> {
    let record = session.deploy(chain, log).await?;
    info!(@grey, "deployed code at address: {}", record.address.debug_lavender());
    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::deployment::tests::RecordingLog;
    use create2_host::FileError;

    struct StubFiles {
        current: Option<String>,
        contents: Option<String>,
        fail_current: bool,
    }

    impl FileHost for StubFiles {
        async fn current_file(&self) -> Result<Option<String>, FileError> {
            if self.fail_current {
                return Err(FileError::NoFileSelected);
            }
            Ok(self.current.clone())
        }

        async fn read_file(&self, path: &str) -> Result<String, FileError> {
            self.contents
                .clone()
                .ok_or_else(|| FileError::NotFound(path.to_owned()))
        }
    }

    const ARTIFACT: &str = r#"{
        "abi": [{"type": "constructor", "inputs": [
            {"name": "owner", "type": "address", "internalType": "address"}
        ]}],
        "data": {"bytecode": {"object": "0x6080"}}
    }"#;

    #[tokio::test]
    async fn loads_the_selected_artifact() {
        let files = StubFiles {
            current: Some("out/Contract.json".to_owned()),
            contents: Some(ARTIFACT.to_owned()),
            fail_current: false,
        };
        let log = RecordingLog::default();
        let mut session = Session::new();
        assert!(load_current_artifact(&mut session, &files, &log)
            .await
            .unwrap());
        assert_eq!(session.constructor_params().len(), 1);
    }

    #[tokio::test]
    async fn missing_selection_is_not_an_error() {
        let files = StubFiles {
            current: None,
            contents: None,
            fail_current: false,
        };
        let log = RecordingLog::default();
        let mut session = Session::new();
        assert!(!load_current_artifact(&mut session, &files, &log)
            .await
            .unwrap());
        assert_eq!(log.0.lock().unwrap()[0], "No compiled json selected");
    }

    #[tokio::test]
    async fn failing_selection_counts_as_no_selection() {
        let files = StubFiles {
            current: Some("out/Contract.json".to_owned()),
            contents: Some(ARTIFACT.to_owned()),
            fail_current: true,
        };
        let log = RecordingLog::default();
        let mut session = Session::new();
        assert!(!load_current_artifact(&mut session, &files, &log)
            .await
            .unwrap());
    }
}
