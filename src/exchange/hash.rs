use crate::exchange::Actions;
use crate::prelude::*;
use ethers::{
    types::{H160, H256},
    utils::keccak256,
};
use log::debug;
use serde::Serialize;

/// Builds the byte stream an action hash is computed over.
///
/// Layout: msgpack of `action` with map keys in declaration order, the nonce as
/// 8 big-endian bytes, `0x00` or `0x01 ‖ vault address`, and, when an expiry
/// is set, `0x00 ‖ expires_after` as 8 big-endian bytes.
pub fn action_hash_preimage<T: Serialize + ?Sized>(
    action: &T,
    nonce: u64,
    vault_address: Option<H160>,
    expires_after: Option<u64>,
) -> Result<Vec<u8>> {
    let mut bytes = rmp_serde::to_vec_named(action)
        .map_err(|e| Error::schema(format!("action could not be encoded as msgpack: {e}")))?;
    bytes.extend(nonce.to_be_bytes());
    if let Some(vault_address) = vault_address {
        bytes.push(1);
        bytes.extend(vault_address.to_fixed_bytes());
    } else {
        bytes.push(0);
    }
    if let Some(expires_after) = expires_after {
        bytes.push(0);
        bytes.extend(expires_after.to_be_bytes());
    }
    Ok(bytes)
}

/// Keccak-256 of [`action_hash_preimage`].
pub fn action_hash<T: Serialize + ?Sized>(
    action: &T,
    nonce: u64,
    vault_address: Option<H160>,
    expires_after: Option<u64>,
) -> Result<H256> {
    let bytes = action_hash_preimage(action, nonce, vault_address, expires_after)?;
    let hash = H256(keccak256(&bytes));
    debug!(
        "action hash {hash:?} over {} bytes (nonce {nonce}, vault {vault_address:?}, expires_after {expires_after:?})",
        bytes.len()
    );
    Ok(hash)
}

impl Actions {
    pub fn hash(
        &self,
        nonce: u64,
        vault_address: Option<H160>,
        expires_after: Option<u64>,
    ) -> Result<H256> {
        action_hash(self, nonce, vault_address, expires_after)
    }
}
