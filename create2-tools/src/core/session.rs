// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/create2-tools/blob/main/licenses/COPYRIGHT.md

//! Deployment session state machine.
//!
//! One session drives one deployment attempt at a time, from artifact
//! load through input collection to the two-phase factory protocol, and
//! keeps the history of prior successful deployments. Transitions are a
//! pure function of (phase, event); the [`Session`] wrapper owns the
//! mutable fields and feeds events in.

use std::collections::BTreeMap;

use alloy::primitives::Address;
use create2_host::{ChainError, ChainEvent, ChainHost, LogHost};

use super::{
    artifact::{AbiParameter, ArtifactError, CompiledArtifact},
    codec,
    deployment::{self, DeploymentError, DeploymentRecord, FACTORY_ADDRESS},
    network::{self, NetworkError},
    payload::{DeploymentPayload, PayloadError},
    salt::Salt,
};

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("artifact or constructor inputs are not ready for deployment")]
    NotReady,
    #[error("a deployment is already in flight")]
    DeploymentInFlight,
    #[error("no connected accounts")]
    NoAccounts,
    #[error("constructor has no parameter named `{0}`")]
    UnknownParameter(String),
    #[error("network switch rejected: {0}")]
    NetworkSwitchRejected(String),
    #[error("network switch failed: {0}")]
    NetworkSwitchFailed(String),
    #[error(transparent)]
    Artifact(#[from] ArtifactError),
    #[error(transparent)]
    Network(#[from] NetworkError),
    #[error(transparent)]
    Payload(#[from] PayloadError),
    #[error(transparent)]
    Deployment(#[from] DeploymentError),
    #[error("provider error: {0}")]
    Chain(#[from] ChainError),
}

/// Lifecycle of a single deployment attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionPhase {
    Idle,
    ArtifactLoaded,
    CollectingInput,
    ReadyToDeploy,
    Deploying,
    ResolvingAddress,
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    ArtifactParsed { has_params: bool },
    ReadinessChanged { ready: bool, has_params: bool },
    DeployRequested,
    SubmitConfirmed,
    SubmitFailed(String),
    AddressResolved,
    ResolveFailed(String),
    Cleared,
}

impl SessionPhase {
    /// Applies one event. Events that do not apply to the current phase
    /// leave it unchanged; in particular a deploy request is ignored
    /// unless the session is ready, which guards re-entrant triggering.
    pub fn step(self, event: &SessionEvent) -> Self {
        use SessionEvent::*;
        use SessionPhase::*;
        match (self, event) {
            (Idle | ArtifactLoaded | CollectingInput | ReadyToDeploy, ArtifactParsed { has_params }) => {
                if *has_params {
                    CollectingInput
                } else {
                    ArtifactLoaded
                }
            }
            (
                ArtifactLoaded | CollectingInput | ReadyToDeploy,
                ReadinessChanged { ready, has_params },
            ) => {
                if *ready {
                    ReadyToDeploy
                } else if *has_params {
                    CollectingInput
                } else {
                    ArtifactLoaded
                }
            }
            (ReadyToDeploy, DeployRequested) => Deploying,
            (Deploying, SubmitConfirmed) => ResolvingAddress,
            (Deploying, SubmitFailed(reason)) => Failed(reason.clone()),
            (ResolvingAddress, AddressResolved) => Idle,
            (ResolvingAddress, ResolveFailed(reason)) => Failed(reason.clone()),
            (_, Cleared) => Idle,
            (phase, _) => phase,
        }
    }
}

/// One user-filled constructor field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstructorInput {
    pub ty: String,
    pub value: String,
}

/// A deployment session.
#[derive(Debug)]
pub struct Session {
    phase: SessionPhase,
    factory: Address,
    artifact: Option<CompiledArtifact>,
    inputs: BTreeMap<String, ConstructorInput>,
    salt: Option<Salt>,
    accounts: Vec<Address>,
    selected_network: Option<u64>,
    history: Vec<DeploymentRecord>,
    last_error: Option<String>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            phase: SessionPhase::Idle,
            factory: FACTORY_ADDRESS,
            artifact: None,
            inputs: BTreeMap::new(),
            salt: None,
            accounts: Vec::new(),
            selected_network: None,
            history: Vec::new(),
            last_error: None,
        }
    }

    /// Overrides the well-known factory address.
    pub fn with_factory(mut self, factory: Address) -> Self {
        self.factory = factory;
        self
    }

    pub fn phase(&self) -> &SessionPhase {
        &self.phase
    }

    pub fn accounts(&self) -> &[Address] {
        &self.accounts
    }

    pub fn selected_network(&self) -> Option<u64> {
        self.selected_network
    }

    pub fn salt(&self) -> Option<Salt> {
        self.salt
    }

    /// Successful deployments, most recent first. Kept across resets for
    /// the lifetime of the session.
    pub fn history(&self) -> &[DeploymentRecord] {
        &self.history
    }

    /// The last user-visible error message (wallet rejections only).
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Fetches accounts and the current network from the provider.
    pub async fn connect(&mut self, chain: &impl ChainHost) -> Result<(), SessionError> {
        self.accounts = chain.request_accounts().await?;
        let chain_id = chain.chain_id().await?;
        if network::find(chain_id).is_some() {
            self.selected_network = Some(chain_id);
        }
        Ok(())
    }

    /// Updates session-visible provider state. Empty account lists and
    /// unregistered networks are ignored, matching wallet behavior of
    /// emitting both during disconnects.
    pub fn handle_event(&mut self, event: ChainEvent) {
        match event {
            ChainEvent::AccountsChanged(accounts) => {
                if !accounts.is_empty() {
                    self.accounts = accounts;
                }
            }
            ChainEvent::NetworkChanged(chain_id) => {
                if network::find(chain_id).is_some() {
                    self.selected_network = Some(chain_id);
                }
            }
        }
    }

    /// Parses raw artifact text into the session.
    ///
    /// A parse failure blocks progression but leaves all other session
    /// state untouched.
    pub fn load_artifact(&mut self, raw: &str) -> Result<(), SessionError> {
        self.guard_in_flight()?;
        let artifact = CompiledArtifact::parse(raw).map_err(SessionError::Artifact)?;
        self.last_error = None;
        let has_params = !artifact.constructor_params().is_empty();
        self.artifact = Some(artifact);
        self.inputs.clear();
        self.phase = self
            .phase
            .clone()
            .step(&SessionEvent::ArtifactParsed { has_params });
        // A salt may already be present, e.g. for an argless constructor.
        self.refresh_phase();
        Ok(())
    }

    /// Declared constructor parameters of the loaded artifact.
    pub fn constructor_params(&self) -> &[AbiParameter] {
        self.artifact
            .as_ref()
            .map(CompiledArtifact::constructor_params)
            .unwrap_or_default()
    }

    /// Records the value for one declared constructor parameter.
    pub fn set_input(&mut self, name: &str, value: &str) -> Result<(), SessionError> {
        self.guard_in_flight()?;
        let param = self
            .constructor_params()
            .iter()
            .find(|p| p.name == name)
            .ok_or_else(|| SessionError::UnknownParameter(name.to_owned()))?;
        let input = ConstructorInput {
            ty: param.ty.clone(),
            value: value.to_owned(),
        };
        self.inputs.insert(name.to_owned(), input);
        self.refresh_phase();
        Ok(())
    }

    pub fn set_salt(&mut self, salt: Salt) -> Result<(), SessionError> {
        self.guard_in_flight()?;
        self.salt = Some(salt);
        self.refresh_phase();
        Ok(())
    }

    pub fn generate_salt(&mut self) -> Result<Salt, SessionError> {
        let salt = Salt::random();
        self.set_salt(salt)?;
        Ok(salt)
    }

    /// Whether every declared constructor parameter has a non-empty
    /// value, with no missing and no stray entries, and a salt is set.
    /// For an argless constructor this degrades to "salt is set".
    pub fn is_ready(&self) -> bool {
        if self.artifact.is_none() || self.salt.is_none() {
            return false;
        }
        let params = self.constructor_params();
        if params.len() != self.inputs.len() {
            return false;
        }
        params.iter().all(|p| {
            self.inputs
                .get(&p.name)
                .is_some_and(|input| !input.value.is_empty())
        })
    }

    /// Builds the init code for the loaded artifact and current inputs.
    pub fn build_payload(&self) -> Result<DeploymentPayload, SessionError> {
        let artifact = self.artifact.as_ref().ok_or(SessionError::NotReady)?;
        let bytecode = artifact.bytecode().map_err(SessionError::Artifact)?;
        let params = artifact.constructor_params();
        let mut args = Vec::with_capacity(params.len());
        for param in params {
            let input = self.inputs.get(&param.name).ok_or(SessionError::NotReady)?;
            args.push(codec::encode(param, &input.value));
        }
        Ok(DeploymentPayload::build(bytecode, params, &args)?)
    }

    /// Runs the factory protocol for the prepared attempt.
    ///
    /// On success the record is prepended to history. Success and
    /// protocol failure both reset the transient session state; only a
    /// wallet-level rejection leaves a user-visible message behind.
    pub async fn deploy(
        &mut self,
        chain: &impl ChainHost,
        log: &impl LogHost,
    ) -> Result<DeploymentRecord, SessionError> {
        match self.phase {
            SessionPhase::Deploying | SessionPhase::ResolvingAddress => {
                return Err(SessionError::DeploymentInFlight)
            }
            SessionPhase::ReadyToDeploy => {}
            _ => return Err(SessionError::NotReady),
        }
        let Some(salt) = self.salt else {
            return Err(SessionError::NotReady);
        };
        let sender = self
            .accounts
            .first()
            .copied()
            .ok_or(SessionError::NoAccounts)?;
        let payload = self.build_payload()?;

        self.last_error = None;
        self.phase = self.phase.clone().step(&SessionEvent::DeployRequested);

        if let Err(err) = deployment::submit(&payload, &salt, sender, self.factory, chain, log).await
        {
            let event = SessionEvent::SubmitFailed(err.to_string());
            return Err(self.fail(event, err, chain).await);
        }
        self.phase = self.phase.clone().step(&SessionEvent::SubmitConfirmed);

        let address = match deployment::resolve(&payload, &salt, self.factory, chain, log).await {
            Ok(address) => address,
            Err(err) => {
                let event = SessionEvent::ResolveFailed(err.to_string());
                return Err(self.fail(event, err, chain).await);
            }
        };

        let record = DeploymentRecord {
            address,
            deployed_at: std::time::SystemTime::now(),
        };
        self.history.insert(0, record.clone());
        self.phase = self.phase.clone().step(&SessionEvent::AddressResolved);
        self.reset(chain).await;
        Ok(record)
    }

    /// Validates the target against the registry and asks the wallet to
    /// switch. A rejection surfaces the wallet's message and resets the
    /// session, like any other protocol-level failure.
    pub async fn switch_network(
        &mut self,
        chain_id: u64,
        chain: &impl ChainHost,
    ) -> Result<(), SessionError> {
        let net = network::find(chain_id).ok_or(NetworkError::UnknownChain(chain_id))?;
        self.selected_network = Some(chain_id);
        match chain.switch_chain(net.chain_id_hex).await {
            Ok(()) => Ok(()),
            Err(ChainError::UserRejected(message)) => {
                self.last_error = Some(message.clone());
                self.reset(chain).await;
                Err(SessionError::NetworkSwitchRejected(message))
            }
            Err(other) => {
                self.reset(chain).await;
                Err(SessionError::NetworkSwitchFailed(other.to_string()))
            }
        }
    }

    /// Clears all transient fields and re-synchronizes the network
    /// selection from the live provider. History survives.
    pub async fn reset(&mut self, chain: &impl ChainHost) {
        self.artifact = None;
        self.inputs.clear();
        self.salt = None;
        self.phase = self.phase.clone().step(&SessionEvent::Cleared);
        // Re-sync must not fail the reset; keep the old selection if the
        // provider is unreachable.
        if let Ok(chain_id) = chain.chain_id().await {
            self.selected_network = Some(chain_id);
        }
    }

    /// Routes a protocol failure through the transient `Failed` phase,
    /// then resets. Only wallet rejections leave a user-visible message.
    async fn fail(
        &mut self,
        event: SessionEvent,
        err: DeploymentError,
        chain: &impl ChainHost,
    ) -> SessionError {
        self.phase = self.phase.clone().step(&event);
        if let DeploymentError::UserRejected(message) = &err {
            self.last_error = Some(message.clone());
        }
        self.reset(chain).await;
        SessionError::Deployment(err)
    }

    fn guard_in_flight(&self) -> Result<(), SessionError> {
        match self.phase {
            SessionPhase::Deploying | SessionPhase::ResolvingAddress => {
                Err(SessionError::DeploymentInFlight)
            }
            _ => Ok(()),
        }
    }

    fn refresh_phase(&mut self) {
        let has_params = !self.constructor_params().is_empty();
        let ready = self.is_ready();
        self.phase = self
            .phase
            .clone()
            .step(&SessionEvent::ReadinessChanged { ready, has_params });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::deployment::{
        factory::Create2Factory,
        tests::{stub_address, RecordingLog, StubChain},
    };
    use alloy::sol_types::SolCall;

    const TWO_PARAM_ARTIFACT: &str = r#"{
        "abi": [{
            "type": "constructor",
            "inputs": [
                {"name": "amount", "type": "uint256", "internalType": "uint256"},
                {"name": "recipients", "type": "address[]", "internalType": "address[]"}
            ]
        }],
        "data": {"bytecode": {"object": "0x6080604052"}}
    }"#;

    const ARGLESS_ARTIFACT: &str = r#"{
        "abi": [{"type": "function", "name": "get", "inputs": []}],
        "data": {"bytecode": {"object": "0x6080604052"}}
    }"#;

    fn step(phase: SessionPhase, event: SessionEvent) -> SessionPhase {
        phase.step(&event)
    }

    #[test]
    fn transition_table() {
        use SessionEvent::*;
        use SessionPhase::*;
        assert_eq!(
            step(Idle, ArtifactParsed { has_params: true }),
            CollectingInput
        );
        assert_eq!(
            step(Idle, ArtifactParsed { has_params: false }),
            ArtifactLoaded
        );
        assert_eq!(
            step(
                CollectingInput,
                ReadinessChanged {
                    ready: true,
                    has_params: true
                }
            ),
            ReadyToDeploy
        );
        assert_eq!(
            step(
                ReadyToDeploy,
                ReadinessChanged {
                    ready: false,
                    has_params: true
                }
            ),
            CollectingInput
        );
        assert_eq!(step(ReadyToDeploy, DeployRequested), Deploying);
        assert_eq!(step(Deploying, SubmitConfirmed), ResolvingAddress);
        assert_eq!(
            step(Deploying, SubmitFailed("boom".into())),
            Failed("boom".into())
        );
        assert_eq!(step(ResolvingAddress, AddressResolved), Idle);
        assert_eq!(step(Failed("boom".into()), Cleared), Idle);
        // Re-entrant deploy requests do not advance the machine.
        assert_eq!(step(Deploying, DeployRequested), Deploying);
        assert_eq!(step(Idle, DeployRequested), Idle);
    }

    async fn ready_session(chain: &StubChain) -> Session {
        let mut session = Session::new();
        session.connect(chain).await.unwrap();
        session.load_artifact(TWO_PARAM_ARTIFACT).unwrap();
        session.set_input("amount", "100").unwrap();
        session
            .set_input(
                "recipients",
                "0xAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA,0xBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBB",
            )
            .unwrap();
        session.set_salt("0x01".parse().unwrap()).unwrap();
        session
    }

    #[tokio::test]
    async fn readiness_requires_every_input_and_a_salt() {
        let chain = StubChain::default();
        let mut session = Session::new();
        session.connect(&chain).await.unwrap();
        session.load_artifact(TWO_PARAM_ARTIFACT).unwrap();
        assert_eq!(session.phase(), &SessionPhase::CollectingInput);

        session.set_input("amount", "100").unwrap();
        assert!(!session.is_ready());
        assert_eq!(session.phase(), &SessionPhase::CollectingInput);

        session.set_input("recipients", "0xAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA").unwrap();
        assert!(!session.is_ready(), "salt still missing");

        session.set_salt("0x01".parse().unwrap()).unwrap();
        assert!(session.is_ready());
        assert_eq!(session.phase(), &SessionPhase::ReadyToDeploy);

        // Blanking a value drops readiness again.
        session.set_input("amount", "").unwrap();
        assert!(!session.is_ready());
        assert_eq!(session.phase(), &SessionPhase::CollectingInput);
    }

    #[tokio::test]
    async fn rejects_stray_parameter_names() {
        let chain = StubChain::default();
        let mut session = Session::new();
        session.connect(&chain).await.unwrap();
        session.load_artifact(TWO_PARAM_ARTIFACT).unwrap();
        assert!(matches!(
            session.set_input("bogus", "1"),
            Err(SessionError::UnknownParameter(_))
        ));
    }

    #[tokio::test]
    async fn successful_deploy_records_history_and_resets() {
        let chain = StubChain::default();
        let log = RecordingLog::default();
        let mut session = ready_session(&chain).await;
        session.handle_event(ChainEvent::NetworkChanged(1));
        assert_eq!(session.selected_network(), Some(1));

        let record = session.deploy(&chain, &log).await.unwrap();
        assert_eq!(session.history(), std::slice::from_ref(&record));
        assert_eq!(session.phase(), &SessionPhase::Idle);
        assert!(session.salt().is_none());
        assert!(session.constructor_params().is_empty());
        assert!(session.last_error().is_none());
        // Selection re-synchronized from the provider, not preserved.
        assert_eq!(session.selected_network(), Some(chain.chain_id));

        // The submitted init code is bytecode plus encoded args.
        let submitted = chain.submitted.lock().unwrap();
        let call = Create2Factory::deployCall::abi_decode(&submitted[0]).unwrap();
        assert!(call.code.len() > 5);
        assert_eq!(&call.code[..5], &[0x60, 0x80, 0x60, 0x40, 0x52]);
    }

    #[tokio::test]
    async fn argless_artifact_needs_only_a_salt_and_ships_raw_bytecode() {
        let chain = StubChain::default();
        let log = RecordingLog::default();
        let mut session = Session::new();
        session.connect(&chain).await.unwrap();
        session.load_artifact(ARGLESS_ARTIFACT).unwrap();
        assert_eq!(session.phase(), &SessionPhase::ArtifactLoaded);

        session.set_salt("0x01".parse().unwrap()).unwrap();
        assert_eq!(session.phase(), &SessionPhase::ReadyToDeploy);

        let record = session.deploy(&chain, &log).await.unwrap();
        let submitted = chain.submitted.lock().unwrap();
        let call = Create2Factory::deployCall::abi_decode(&submitted[0]).unwrap();
        assert_eq!(call.code.as_ref(), &[0x60, 0x80, 0x60, 0x40, 0x52]);
        assert_eq!(
            record.address,
            stub_address(&[0x60, 0x80, 0x60, 0x40, 0x52], call.salt)
        );
    }

    #[tokio::test]
    async fn wallet_rejection_resets_and_surfaces_the_message() {
        let chain = StubChain {
            reject_submit: Some("User denied transaction signature.".to_owned()),
            ..Default::default()
        };
        let log = RecordingLog::default();
        let mut session = ready_session(&chain).await;

        let err = session.deploy(&chain, &log).await.unwrap_err();
        assert!(matches!(
            err,
            SessionError::Deployment(DeploymentError::UserRejected(_))
        ));
        assert_eq!(
            session.last_error(),
            Some("User denied transaction signature.")
        );
        assert!(session.history().is_empty());
        assert_eq!(session.phase(), &SessionPhase::Idle);
        assert!(session.salt().is_none());
    }

    #[tokio::test]
    async fn resolve_failure_resets_without_a_user_message() {
        let chain = StubChain {
            fail_resolve: true,
            ..Default::default()
        };
        let log = RecordingLog::default();
        let mut session = ready_session(&chain).await;

        let err = session.deploy(&chain, &log).await.unwrap_err();
        assert!(matches!(
            err,
            SessionError::Deployment(DeploymentError::Failed(_))
        ));
        assert!(session.last_error().is_none());
        assert!(session.history().is_empty());
        assert_eq!(session.phase(), &SessionPhase::Idle);
    }

    #[tokio::test]
    async fn deploy_requires_readiness() {
        let chain = StubChain::default();
        let log = RecordingLog::default();
        let mut session = Session::new();
        session.connect(&chain).await.unwrap();
        session.load_artifact(TWO_PARAM_ARTIFACT).unwrap();
        assert!(matches!(
            session.deploy(&chain, &log).await,
            Err(SessionError::NotReady)
        ));
    }

    #[tokio::test]
    async fn parse_failure_preserves_session_state() {
        let chain = StubChain::default();
        let mut session = ready_session(&chain).await;
        assert!(session.load_artifact("{ not json").is_err());
        // Prior artifact, inputs and salt are untouched.
        assert_eq!(session.phase(), &SessionPhase::ReadyToDeploy);
        assert!(session.salt().is_some());
        assert!(session.is_ready());
    }

    #[tokio::test]
    async fn network_switch_rejection_resets_like_a_failure() {
        let chain = StubChain {
            reject_switch: Some("User rejected the request.".to_owned()),
            ..Default::default()
        };
        let mut session = ready_session(&chain).await;

        let err = session.switch_network(1, &chain).await.unwrap_err();
        assert!(matches!(err, SessionError::NetworkSwitchRejected(_)));
        assert_eq!(session.last_error(), Some("User rejected the request."));
        assert_eq!(session.phase(), &SessionPhase::Idle);
        assert!(session.salt().is_none());
        // Selection re-synced from the provider.
        assert_eq!(session.selected_network(), Some(chain.chain_id));
    }

    #[tokio::test]
    async fn unknown_networks_cannot_be_selected() {
        let chain = StubChain::default();
        let mut session = Session::new();
        assert!(matches!(
            session.switch_network(1337, &chain).await,
            Err(SessionError::Network(NetworkError::UnknownChain(1337)))
        ));
        session.handle_event(ChainEvent::NetworkChanged(1337));
        assert_eq!(session.selected_network(), None);
    }

    #[tokio::test]
    async fn empty_account_lists_are_ignored() {
        let chain = StubChain::default();
        let mut session = Session::new();
        session.connect(&chain).await.unwrap();
        let before = session.accounts().to_vec();
        session.handle_event(ChainEvent::AccountsChanged(Vec::new()));
        assert_eq!(session.accounts(), before);

        let replacement = vec![Address::with_last_byte(0x22)];
        session.handle_event(ChainEvent::AccountsChanged(replacement.clone()));
        assert_eq!(session.accounts(), replacement);
    }
}
