use crate::consts::{DOMAIN_VERSION, SIGNATURE_CHAIN_ID, USER_SIGNED_DOMAIN_NAME};
use crate::exchange::to_message;
use crate::prelude::*;
use ethers::types::{
    transaction::eip712::{EIP712Domain, Eip712DomainType, TypedData, Types},
    Address, U256,
};
use lazy_static::lazy_static;
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::{BTreeMap, HashMap};

/// The user-signed action kinds, each with a fixed typed-data schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UserSignedKind {
    UsdSend,
    SpotSend,
    Withdraw,
    UsdClassTransfer,
    SendAsset,
    TokenDelegate,
    ApproveAgent,
    ApproveBuilderFee,
    ConvertToMultiSigUser,
    SendMultiSig,
}

const USD_SEND_TYPES: &[(&str, &str)] = &[
    ("hyperliquidChain", "string"),
    ("destination", "string"),
    ("amount", "string"),
    ("time", "uint64"),
];

const SPOT_SEND_TYPES: &[(&str, &str)] = &[
    ("hyperliquidChain", "string"),
    ("destination", "string"),
    ("token", "string"),
    ("amount", "string"),
    ("time", "uint64"),
];

const WITHDRAW_TYPES: &[(&str, &str)] = &[
    ("hyperliquidChain", "string"),
    ("destination", "string"),
    ("amount", "string"),
    ("time", "uint64"),
];

const USD_CLASS_TRANSFER_TYPES: &[(&str, &str)] = &[
    ("hyperliquidChain", "string"),
    ("amount", "string"),
    ("toPerp", "bool"),
    ("nonce", "uint64"),
];

const SEND_ASSET_TYPES: &[(&str, &str)] = &[
    ("hyperliquidChain", "string"),
    ("destination", "string"),
    ("sourceDex", "string"),
    ("destinationDex", "string"),
    ("token", "string"),
    ("amount", "string"),
    ("fromSubAccount", "string"),
    ("nonce", "uint64"),
];

const TOKEN_DELEGATE_TYPES: &[(&str, &str)] = &[
    ("hyperliquidChain", "string"),
    ("validator", "address"),
    ("wei", "uint64"),
    ("isUndelegate", "bool"),
    ("nonce", "uint64"),
];

const APPROVE_AGENT_TYPES: &[(&str, &str)] = &[
    ("hyperliquidChain", "string"),
    ("agentAddress", "address"),
    ("agentName", "string"),
    ("nonce", "uint64"),
];

const APPROVE_BUILDER_FEE_TYPES: &[(&str, &str)] = &[
    ("hyperliquidChain", "string"),
    ("maxFeeRate", "string"),
    ("builder", "address"),
    ("nonce", "uint64"),
];

const CONVERT_TO_MULTI_SIG_USER_TYPES: &[(&str, &str)] = &[
    ("hyperliquidChain", "string"),
    ("signers", "string"),
    ("nonce", "uint64"),
];

const SEND_MULTI_SIG_TYPES: &[(&str, &str)] = &[
    ("hyperliquidChain", "string"),
    ("multiSigActionHash", "bytes32"),
    ("nonce", "uint64"),
];

const EIP712_DOMAIN_TYPES: &[(&str, &str)] = &[
    ("name", "string"),
    ("version", "string"),
    ("chainId", "uint256"),
    ("verifyingContract", "address"),
];

const ALL_KINDS: [UserSignedKind; 10] = [
    UserSignedKind::UsdSend,
    UserSignedKind::SpotSend,
    UserSignedKind::Withdraw,
    UserSignedKind::UsdClassTransfer,
    UserSignedKind::SendAsset,
    UserSignedKind::TokenDelegate,
    UserSignedKind::ApproveAgent,
    UserSignedKind::ApproveBuilderFee,
    UserSignedKind::ConvertToMultiSigUser,
    UserSignedKind::SendMultiSig,
];

lazy_static! {
    static ref SIGN_TYPES: HashMap<UserSignedKind, Vec<Eip712DomainType>> = ALL_KINDS
        .iter()
        .map(|kind| (*kind, to_domain_types(kind.field_schema())))
        .collect();
}

pub(crate) fn to_domain_types(fields: &[(&str, &str)]) -> Vec<Eip712DomainType> {
    fields
        .iter()
        .map(|(name, r#type)| Eip712DomainType {
            name: name.to_string(),
            r#type: r#type.to_string(),
        })
        .collect()
}

pub(crate) fn eip712_domain_types() -> Vec<Eip712DomainType> {
    to_domain_types(EIP712_DOMAIN_TYPES)
}

impl UserSignedKind {
    pub fn primary_type(&self) -> &'static str {
        match self {
            UserSignedKind::UsdSend => "HyperliquidTransaction:UsdSend",
            UserSignedKind::SpotSend => "HyperliquidTransaction:SpotSend",
            UserSignedKind::Withdraw => "HyperliquidTransaction:Withdraw",
            UserSignedKind::UsdClassTransfer => "HyperliquidTransaction:UsdClassTransfer",
            UserSignedKind::SendAsset => "HyperliquidTransaction:SendAsset",
            UserSignedKind::TokenDelegate => "HyperliquidTransaction:TokenDelegate",
            UserSignedKind::ApproveAgent => "HyperliquidTransaction:ApproveAgent",
            UserSignedKind::ApproveBuilderFee => "HyperliquidTransaction:ApproveBuilderFee",
            UserSignedKind::ConvertToMultiSigUser => {
                "HyperliquidTransaction:ConvertToMultiSigUser"
            }
            UserSignedKind::SendMultiSig => "HyperliquidTransaction:SendMultiSig",
        }
    }

    fn field_schema(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            UserSignedKind::UsdSend => USD_SEND_TYPES,
            UserSignedKind::SpotSend => SPOT_SEND_TYPES,
            UserSignedKind::Withdraw => WITHDRAW_TYPES,
            UserSignedKind::UsdClassTransfer => USD_CLASS_TRANSFER_TYPES,
            UserSignedKind::SendAsset => SEND_ASSET_TYPES,
            UserSignedKind::TokenDelegate => TOKEN_DELEGATE_TYPES,
            UserSignedKind::ApproveAgent => APPROVE_AGENT_TYPES,
            UserSignedKind::ApproveBuilderFee => APPROVE_BUILDER_FEE_TYPES,
            UserSignedKind::ConvertToMultiSigUser => CONVERT_TO_MULTI_SIG_USER_TYPES,
            UserSignedKind::SendMultiSig => SEND_MULTI_SIG_TYPES,
        }
    }

    /// Ordered field schema of the primary type.
    pub fn sign_types(&self) -> &'static [Eip712DomainType] {
        SIGN_TYPES
            .get(self)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

/// An action signed directly by the user's key over its own typed data.
pub trait UserSignedAction: Serialize {
    const KIND: UserSignedKind;

    /// Writes `signatureChainId` and `hyperliquidChain`.
    fn set_chain(&mut self, signature_chain_id: &str, hyperliquid_chain: &str);

    /// The typed-data message, i.e. the action as a JSON map.
    fn message(&self) -> Result<Map<String, Value>> {
        to_message(self)
    }
}

/// Injects the fixed signature chain id and the network name into `action`.
pub fn inject_chain<T: UserSignedAction>(action: &mut T, is_mainnet: bool) {
    let hyperliquid_chain = if is_mainnet { "Mainnet" } else { "Testnet" };
    action.set_chain(SIGNATURE_CHAIN_ID, hyperliquid_chain);
}

/// Parses a chain id written either as `0x`-prefixed hex or as decimal.
pub fn parse_chain_id(chain_id: &str) -> Result<U256> {
    let parsed = match chain_id
        .strip_prefix("0x")
        .or_else(|| chain_id.strip_prefix("0X"))
    {
        Some(hex_digits) => u64::from_str_radix(hex_digits, 16),
        None => chain_id.parse::<u64>(),
    };
    parsed
        .map(U256::from)
        .map_err(|e| Error::schema(format!("signatureChainId `{chain_id}` is not a chain id: {e}")))
}

/// Domain shared by all user-signed actions; only the chain id varies.
pub fn user_signed_domain(chain_id: U256) -> EIP712Domain {
    EIP712Domain {
        name: Some(USER_SIGNED_DOMAIN_NAME.to_string()),
        version: Some(DOMAIN_VERSION.to_string()),
        chain_id: Some(chain_id),
        verifying_contract: Some(Address::zero()),
        salt: None,
    }
}

/// Builds the typed data of a user-signed action from its JSON map.
pub fn user_signed_payload(kind: UserSignedKind, message: Map<String, Value>) -> Result<TypedData> {
    user_signed_payload_with_types(kind.primary_type(), kind.sign_types().to_vec(), message)
}

pub fn user_signed_payload_with_types(
    primary_type: &str,
    payload_types: Vec<Eip712DomainType>,
    message: Map<String, Value>,
) -> Result<TypedData> {
    let chain_id = match message.get("signatureChainId") {
        Some(Value::String(chain_id)) => parse_chain_id(chain_id)?,
        Some(other) => {
            return Err(Error::schema(format!(
                "signatureChainId must be a string, got {other}"
            )))
        }
        None => return Err(Error::schema("signatureChainId is missing")),
    };

    let mut types: Types = BTreeMap::new();
    types.insert("EIP712Domain".to_string(), eip712_domain_types());
    types.insert(primary_type.to_string(), payload_types);

    Ok(TypedData {
        domain: user_signed_domain(chain_id),
        types,
        primary_type: primary_type.to_string(),
        message: message.into_iter().collect(),
    })
}

/// Typed data for a user-signed action whose chain fields are already set.
pub fn user_signed_typed_data<T: UserSignedAction>(action: &T) -> Result<TypedData> {
    user_signed_payload(T::KIND, action.message()?)
}

/// Schema used when a multi-sig member signs a user-signed action: the payload
/// user and the outer signer follow `hyperliquidChain`.
pub fn add_multi_sig_types(sign_types: &[Eip712DomainType]) -> Result<Vec<Eip712DomainType>> {
    let position = sign_types
        .iter()
        .position(|field| field.name == "hyperliquidChain")
        .ok_or_else(|| Error::schema("hyperliquidChain missing from sign types"))?;

    let mut enriched = sign_types.to_vec();
    enriched.splice(
        position + 1..position + 1,
        to_domain_types(&[
            ("payloadMultiSigUser", "address"),
            ("outerSigner", "address"),
        ]),
    );
    Ok(enriched)
}
