use crate::exchange::{Actions, ExchangePayload};
use crate::prelude::*;
use crate::signature::{sign_hash, Signature};
use ethers::signers::LocalWallet;
use ethers::types::{H160, H256, U256};
use serde_json::Value;

/// Everything an external signer needs to authorize one action, and what is
/// needed afterwards to assemble the posted payload.
#[derive(Debug, Clone, PartialEq)]
pub struct UnsignedTransactionComponents {
    pub action: Actions,
    pub nonce: u64,
    pub digest_to_sign: H256, // final EIP-712 digest

    pub vault_address: Option<H160>, // vault placed in the payload, if any
    pub expires_after: Option<u64>,
    pub eip712_domain_chain_id: Option<U256>, // 1337 for L1 agent, 421614 for user-signed
    pub eip712_hyperliquid_chain_name: Option<String>, // "Mainnet" or "Testnet" for user-signed actions
    pub is_l1_agent_signature: bool, // true if the digest wraps a phantom agent
}

impl UnsignedTransactionComponents {
    /// The `action` field of the final payload.
    pub fn action_payload_json(&self) -> Result<Value> {
        serde_json::to_value(&self.action)
            .map_err(|e| Error::schema(format!("{} action: {e}", self.action.action_type())))
    }

    pub fn sign(&self, wallet: &LocalWallet) -> Result<Signature> {
        sign_hash(self.digest_to_sign, wallet)
    }

    pub fn into_payload(self, signature: Signature) -> ExchangePayload {
        ExchangePayload::new(
            self.action,
            self.nonce,
            signature,
            self.vault_address,
            self.expires_after,
        )
    }

    pub fn sign_into_payload(self, wallet: &LocalWallet) -> Result<ExchangePayload> {
        let signature = self.sign(wallet)?;
        Ok(self.into_payload(signature))
    }
}
