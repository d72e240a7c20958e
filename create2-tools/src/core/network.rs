// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/create2-tools/blob/main/licenses/COPYRIGHT.md

//! Static registry of deployable networks.

#[derive(Debug, thiserror::Error)]
pub enum NetworkError {
    #[error("unknown chain id: {0}")]
    UnknownChain(u64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Network {
    /// Decimal chain id, as reported by the provider.
    pub chain_id: u64,
    /// Hex chain id, as expected by wallet switch requests.
    pub chain_id_hex: &'static str,
    pub name: &'static str,
}

pub const NETWORKS: &[Network] = &[
    Network {
        chain_id: 1,
        chain_id_hex: "0x1",
        name: "Ethereum Main Network (Mainnet)",
    },
    Network {
        chain_id: 3,
        chain_id_hex: "0x3",
        name: "Ropsten Test Network",
    },
    Network {
        chain_id: 4,
        chain_id_hex: "0x4",
        name: "Rinkeby Test Network",
    },
    Network {
        chain_id: 5,
        chain_id_hex: "0x5",
        name: "Goerli Test Network",
    },
    Network {
        chain_id: 42,
        chain_id_hex: "0x2a",
        name: "Kovan Test Network",
    },
];

pub fn find(chain_id: u64) -> Option<&'static Network> {
    NETWORKS.iter().find(|n| n.chain_id == chain_id)
}

pub fn find_by_hex(chain_id_hex: &str) -> Option<&'static Network> {
    NETWORKS.iter().find(|n| n.chain_id_hex == chain_id_hex)
}
