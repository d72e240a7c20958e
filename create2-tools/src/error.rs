// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/create2-tools/blob/main/licenses/COPYRIGHT.md

use create2_host::{ChainError, FileError};

use crate::core::{
    artifact::ArtifactError, deployment::DeploymentError, network::NetworkError,
    payload::PayloadError, salt::SaltError, session::SessionError,
};

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Artifact(#[from] ArtifactError),
    #[error("{0}")]
    Payload(#[from] PayloadError),
    #[error("{0}")]
    Salt(#[from] SaltError),
    #[error("{0}")]
    Network(#[from] NetworkError),
    #[error("{0}")]
    Deployment(#[from] DeploymentError),
    #[error("{0}")]
    Session(#[from] SessionError),
    #[error("provider error: {0}")]
    Chain(#[from] ChainError),
    #[error("file error: {0}")]
    File(#[from] FileError),
}
