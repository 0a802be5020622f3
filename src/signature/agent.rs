use crate::consts::{
    DOMAIN_VERSION, L1_AGENT_CHAIN_ID, L1_DOMAIN_NAME, MAINNET_SOURCE, TESTNET_SOURCE,
};
use crate::signature::typed_data::{eip712_domain_types, to_domain_types};
use ethers::types::{
    transaction::eip712::{EIP712Domain, TypedData, Types},
    Address, H256, U256,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

const AGENT_TYPES: &[(&str, &str)] = &[("source", "string"), ("connectionId", "bytes32")];

/// Stand-in signer identity for L1 actions: the action hash is wrapped into
/// an `Agent` message and that message is what the key signs.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PhantomAgent {
    pub source: String,
    pub connection_id: String,
}

impl PhantomAgent {
    pub fn new(hash: &[u8], is_mainnet: bool) -> Self {
        let source = if is_mainnet {
            MAINNET_SOURCE
        } else {
            TESTNET_SOURCE
        };
        Self {
            source: source.to_string(),
            connection_id: format!("0x{}", hex::encode(hash)),
        }
    }

    pub fn from_action_hash(hash: H256, is_mainnet: bool) -> Self {
        Self::new(hash.as_bytes(), is_mainnet)
    }
}

pub fn l1_domain() -> EIP712Domain {
    EIP712Domain {
        name: Some(L1_DOMAIN_NAME.to_string()),
        version: Some(DOMAIN_VERSION.to_string()),
        chain_id: Some(U256::from(L1_AGENT_CHAIN_ID)),
        verifying_contract: Some(Address::zero()),
        salt: None,
    }
}

/// Typed data of an L1 action, signed in the `Exchange` domain on chain 1337.
pub fn l1_payload(agent: &PhantomAgent) -> TypedData {
    let mut types: Types = BTreeMap::new();
    types.insert("EIP712Domain".to_string(), eip712_domain_types());
    types.insert("Agent".to_string(), to_domain_types(AGENT_TYPES));

    let mut message = BTreeMap::new();
    message.insert("source".to_string(), Value::String(agent.source.clone()));
    message.insert(
        "connectionId".to_string(),
        Value::String(agent.connection_id.clone()),
    );

    TypedData {
        domain: l1_domain(),
        types,
        primary_type: "Agent".to_string(),
        message,
    }
}
