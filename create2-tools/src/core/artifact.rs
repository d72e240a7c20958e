// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/create2-tools/blob/main/licenses/COPYRIGHT.md

//! Compiled-contract artifact parsing.
//!
//! Artifacts are the JSON files produced by the compiler, containing at
//! least an `abi` description array and the contract object code under
//! `data.bytecode.object`.

use serde::Deserialize;

#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    #[error("malformed artifact: {0}")]
    Json(#[from] serde_json::Error),
    #[error("abi entry `{entry}` declares a parameter with an empty type")]
    EmptyParameterType { entry: String },
    #[error("invalid bytecode hex: {0}")]
    InvalidBytecode(#[from] hex::FromHexError),
}

/// A single parameter of an ABI entry, e.g. `uint256 amount`.
///
/// Whether the parameter is an array is determined solely by a `[]`
/// marker in [`ty`](Self::ty).
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct AbiParameter {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
    #[serde(rename = "internalType", default)]
    pub internal_type: String,
}

/// One entry of the ABI description array.
#[derive(Debug, Clone, Deserialize)]
pub struct AbiEntry {
    /// Kind tag: "constructor", "function", "event", ...
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub inputs: Vec<AbiParameter>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BytecodeObject {
    pub object: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ArtifactData {
    pub bytecode: BytecodeObject,
}

/// A parsed compiled-contract artifact. Immutable once parsed.
#[derive(Debug, Clone, Deserialize)]
pub struct CompiledArtifact {
    pub abi: Vec<AbiEntry>,
    pub data: ArtifactData,
}

impl CompiledArtifact {
    /// Parses raw artifact text.
    pub fn parse(raw: &str) -> Result<Self, ArtifactError> {
        let artifact: Self = serde_json::from_str(raw)?;
        for entry in &artifact.abi {
            if entry.inputs.iter().any(|p| p.ty.is_empty()) {
                return Err(ArtifactError::EmptyParameterType {
                    entry: if entry.name.is_empty() {
                        entry.kind.clone()
                    } else {
                        entry.name.clone()
                    },
                });
            }
        }
        Ok(artifact)
    }

    /// The first constructor entry of the ABI, if any.
    pub fn constructor(&self) -> Option<&AbiEntry> {
        self.abi.iter().find(|entry| entry.kind == "constructor")
    }

    /// Declared constructor parameters, in declared order.
    ///
    /// A missing constructor entry and a parameterless one both yield an
    /// empty slice; either way the contract deploys without arguments.
    pub fn constructor_params(&self) -> &[AbiParameter] {
        self.constructor()
            .map(|c| c.inputs.as_slice())
            .unwrap_or_default()
    }

    /// Contract object code, with no constructor arguments appended.
    pub fn bytecode(&self) -> Result<Vec<u8>, ArtifactError> {
        let object = &self.data.bytecode.object;
        let object = object.strip_prefix("0x").unwrap_or(object);
        Ok(hex::decode(object)?)
    }
}
