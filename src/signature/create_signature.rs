use crate::exchange::{action_hash, Actions, MultiSigAction, SendMultiSig};
use crate::prelude::*;
use crate::signature::agent::{l1_payload, PhantomAgent};
use crate::signature::typed_data::{
    add_multi_sig_types, inject_chain, user_signed_payload_with_types, user_signed_typed_data,
    UserSignedAction,
};
use ethers::{
    signers::LocalWallet,
    types::{
        transaction::eip712::{Eip712, TypedData},
        Address, H160, H256, U256,
    },
    utils::keccak256,
};
use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// An ECDSA signature in the shape the exchange expects: `r` and `s` as
/// 32-byte hex strings and `v` as 27 or 28.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    pub r: String,
    pub s: String,
    pub v: u8,
}

fn u256_to_hex(value: U256) -> String {
    let mut bytes = [0u8; 32];
    value.to_big_endian(&mut bytes);
    format!("0x{}", hex::encode(bytes))
}

fn hex_to_u256(value: &str) -> Result<U256> {
    let digits = value.strip_prefix("0x").unwrap_or(value);
    U256::from_str_radix(digits, 16)
        .map_err(|e| Error::signing(format!("signature component `{value}`: {e:?}")))
}

impl From<ethers::types::Signature> for Signature {
    fn from(signature: ethers::types::Signature) -> Self {
        Self {
            r: u256_to_hex(signature.r),
            s: u256_to_hex(signature.s),
            v: signature.v as u8,
        }
    }
}

impl Signature {
    /// Recovers the address that signed `digest`.
    pub fn recover(&self, digest: H256) -> Result<Address> {
        let signature = ethers::types::Signature {
            r: hex_to_u256(&self.r)?,
            s: hex_to_u256(&self.s)?,
            v: self.v as u64,
        };
        signature
            .recover(digest)
            .map_err(|e| Error::signing(format!("recovery failed: {e}")))
    }
}

/// Parses a hex private key, with or without `0x`.
pub fn wallet_from_private_key(private_key: &str) -> Result<LocalWallet> {
    private_key
        .trim()
        .parse::<LocalWallet>()
        .map_err(|_| Error::signing("private key is not a valid 32-byte secp256k1 key"))
}

fn is_elementary(field_type: &str) -> bool {
    match field_type {
        "string" | "bytes" | "bool" | "address" => true,
        _ => {
            if let Some(bits) = field_type
                .strip_prefix("uint")
                .or_else(|| field_type.strip_prefix("int"))
            {
                return bits
                    .parse::<u16>()
                    .map(|bits| bits > 0 && bits <= 256 && bits % 8 == 0)
                    .unwrap_or(false);
            }
            if let Some(len) = field_type.strip_prefix("bytes") {
                return len
                    .parse::<u8>()
                    .map(|len| (1..=32).contains(&len))
                    .unwrap_or(false);
            }
            false
        }
    }
}

fn base_type(field_type: &str) -> &str {
    let mut base = field_type;
    while let Some(stripped) = base.strip_suffix(']') {
        match stripped.rfind('[') {
            Some(open) => base = &stripped[..open],
            None => break,
        }
    }
    base
}

/// Every declared field type must be elementary or another declared struct.
pub fn validate_types(typed_data: &TypedData) -> Result<()> {
    for (struct_name, fields) in &typed_data.types {
        for field in fields {
            let base = base_type(&field.r#type);
            if !is_elementary(base) && !typed_data.types.contains_key(base) {
                return Err(Error::signing(format!(
                    "unknown type `{}` for field `{}` of `{struct_name}`",
                    field.r#type, field.name
                )));
            }
        }
    }
    if !typed_data.types.contains_key(&typed_data.primary_type) {
        return Err(Error::signing(format!(
            "primary type `{}` is not declared",
            typed_data.primary_type
        )));
    }
    Ok(())
}

/// `keccak256(0x19 0x01 ‖ domainSeparator ‖ hashStruct(message))`.
pub fn eip712_digest(typed_data: &TypedData) -> Result<H256> {
    validate_types(typed_data)?;
    let domain_separator = typed_data.domain.separator();
    let message_hash = typed_data
        .struct_hash()
        .map_err(|e| Error::signing(format!("struct hash of `{}`: {e}", typed_data.primary_type)))?;

    let mut preimage = Vec::with_capacity(66);
    preimage.extend([0x19, 0x01]);
    preimage.extend(domain_separator);
    preimage.extend(message_hash);
    let digest = H256(keccak256(preimage));
    debug!("eip712 digest for {}: {digest:?}", typed_data.primary_type);
    Ok(digest)
}

pub fn sign_hash(hash: H256, wallet: &LocalWallet) -> Result<Signature> {
    wallet
        .sign_hash(hash)
        .map(Signature::from)
        .map_err(|e| Error::signing(e.to_string()))
}

pub fn sign_typed_data(typed_data: &TypedData, wallet: &LocalWallet) -> Result<Signature> {
    sign_hash(eip712_digest(typed_data)?, wallet)
}

/// Signs an already computed action hash through the phantom agent.
pub fn sign_l1_action_hash(
    wallet: &LocalWallet,
    action_hash: H256,
    is_mainnet: bool,
) -> Result<Signature> {
    let agent = PhantomAgent::from_action_hash(action_hash, is_mainnet);
    sign_typed_data(&l1_payload(&agent), wallet)
}

pub fn sign_l1_action(
    wallet: &LocalWallet,
    action: &Actions,
    vault_address: Option<H160>,
    nonce: u64,
    expires_after: Option<u64>,
    is_mainnet: bool,
) -> Result<Signature> {
    let hash = action.hash(nonce, vault_address, expires_after)?;
    sign_l1_action_hash(wallet, hash, is_mainnet)
}

/// Sets the chain fields of `action` and signs its typed data.
pub fn sign_user_signed_action<T: UserSignedAction>(
    wallet: &LocalWallet,
    action: &mut T,
    is_mainnet: bool,
) -> Result<Signature> {
    inject_chain(action, is_mainnet);
    sign_typed_data(&user_signed_typed_data(action)?, wallet)
}

/// Outer signature of a multi-sig action, given over a `SendMultiSig`
/// envelope that commits to the hash of the untagged action.
pub fn sign_multi_sig_action(
    wallet: &LocalWallet,
    action: &MultiSigAction,
    is_mainnet: bool,
    vault_address: Option<H160>,
    nonce: u64,
    expires_after: Option<u64>,
) -> Result<Signature> {
    let multi_sig_action_hash = action_hash(action, nonce, vault_address, expires_after)?;
    let mut envelope = SendMultiSig {
        signature_chain_id: String::new(),
        hyperliquid_chain: String::new(),
        multi_sig_action_hash,
        nonce,
    };
    sign_user_signed_action(wallet, &mut envelope, is_mainnet)
}

/// Member signature over an L1 action executed by a multi-sig user.
#[allow(clippy::too_many_arguments)]
pub fn sign_multi_sig_l1_action_payload(
    wallet: &LocalWallet,
    action: &Actions,
    is_mainnet: bool,
    vault_address: Option<H160>,
    nonce: u64,
    expires_after: Option<u64>,
    payload_multi_sig_user: H160,
    outer_signer: H160,
) -> Result<Signature> {
    let envelope = (
        format!("{payload_multi_sig_user:?}"),
        format!("{outer_signer:?}"),
        action,
    );
    let hash = action_hash(&envelope, nonce, vault_address, expires_after)?;
    sign_l1_action_hash(wallet, hash, is_mainnet)
}

/// Member signature over a user-signed action executed by a multi-sig user.
pub fn sign_multi_sig_user_signed_action_payload<T: UserSignedAction>(
    wallet: &LocalWallet,
    action: &mut T,
    is_mainnet: bool,
    payload_multi_sig_user: H160,
    outer_signer: H160,
) -> Result<Signature> {
    inject_chain(action, is_mainnet);
    let mut message = action.message()?;
    message.insert(
        "payloadMultiSigUser".to_string(),
        Value::String(format!("{payload_multi_sig_user:?}")),
    );
    message.insert(
        "outerSigner".to_string(),
        Value::String(format!("{outer_signer:?}")),
    );
    let typed_data = user_signed_payload_with_types(
        T::KIND.primary_type(),
        add_multi_sig_types(T::KIND.sign_types())?,
        message,
    )?;
    sign_typed_data(&typed_data, wallet)
}
