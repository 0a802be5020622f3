use crate::exchange::Actions;
use crate::signature::Signature;
use ethers::types::H160;
use serde::{Deserialize, Serialize};

/// The signed request body posted to the exchange endpoint.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExchangePayload {
    pub action: Actions,
    pub nonce: u64,
    pub signature: Signature,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vault_address: Option<H160>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_after: Option<u64>,
}

impl ExchangePayload {
    /// `vault_address` is dropped for actions that never run on behalf of a vault.
    pub fn new(
        action: Actions,
        nonce: u64,
        signature: Signature,
        vault_address: Option<H160>,
        expires_after: Option<u64>,
    ) -> Self {
        let vault_address = vault_address.filter(|_| action.accepts_vault_address());
        Self {
            action,
            nonce,
            signature,
            vault_address,
            expires_after,
        }
    }
}
