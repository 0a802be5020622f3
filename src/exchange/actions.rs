use crate::exchange::{
    BuilderInfo, CancelRequest, CancelRequestCloid, ModifyRequest, OrderRequest,
};
use crate::prelude::*;
use crate::signature::{Signature, UserSignedAction, UserSignedKind};
use ethers::types::{H160, H256};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// How a batch of orders relates to each other (plain orders or TP/SL brackets).
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub enum Grouping {
    #[default]
    Na,
    NormalTpsl,
    PositionTpsl,
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarginMode {
    Cross,
    Isolated,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BulkOrder {
    pub orders: Vec<OrderRequest>,
    pub grouping: Grouping,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub builder: Option<BuilderInfo>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct BulkCancel {
    pub cancels: Vec<CancelRequest>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct BulkCancelCloid {
    pub cancels: Vec<CancelRequestCloid>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct BulkModify {
    pub modifies: Vec<ModifyRequest>,
}

/// Dead man's switch: cancel all open orders at `time`, or clear the schedule
/// when `time` is absent.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
pub struct ScheduleCancel {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<u64>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateLeverage {
    pub asset: u32,
    pub is_cross: bool,
    pub leverage: u32,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateIsolatedMargin {
    pub asset: u32,
    pub is_buy: bool,
    /// Margin delta in micro-USD.
    pub ntli: i64,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VaultTransfer {
    pub vault_address: H160,
    pub is_deposit: bool,
    /// Amount in micro-USD.
    pub usd: u64,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UsdSend {
    pub signature_chain_id: String,
    pub hyperliquid_chain: String,
    pub destination: String,
    pub amount: String,
    pub time: u64,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SpotSend {
    pub signature_chain_id: String,
    pub hyperliquid_chain: String,
    pub destination: String,
    pub token: String,
    pub amount: String,
    pub time: u64,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Withdraw3 {
    pub signature_chain_id: String,
    pub hyperliquid_chain: String,
    pub destination: String,
    pub amount: String,
    pub time: u64,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UsdClassTransfer {
    pub signature_chain_id: String,
    pub hyperliquid_chain: String,
    pub amount: String,
    pub to_perp: bool,
    pub nonce: u64,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SendAsset {
    pub signature_chain_id: String,
    pub hyperliquid_chain: String,
    pub destination: String,
    pub source_dex: String,
    pub destination_dex: String,
    pub token: String,
    pub amount: String,
    pub from_sub_account: String,
    pub nonce: u64,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TokenDelegate {
    pub signature_chain_id: String,
    pub hyperliquid_chain: String,
    pub validator: String,
    pub wei: u64,
    pub is_undelegate: bool,
    pub nonce: u64,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ApproveAgent {
    pub signature_chain_id: String,
    pub hyperliquid_chain: String,
    pub agent_address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent_name: Option<String>,
    pub nonce: u64,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ApproveBuilderFee {
    pub signature_chain_id: String,
    pub hyperliquid_chain: String,
    pub max_fee_rate: String,
    pub builder: String,
    pub nonce: u64,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ConvertToMultiSigUser {
    pub signature_chain_id: String,
    pub hyperliquid_chain: String,
    /// JSON encoded [`MultiSigSigners`], or `"null"` to convert back to a normal user.
    pub signers: String,
    pub nonce: u64,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MultiSigSigners {
    pub authorized_users: Vec<String>,
    pub threshold: u32,
}

impl MultiSigSigners {
    /// Addresses are lowercased and sorted so every member hashes the same list.
    pub fn new(authorized_users: &[H160], threshold: u32) -> Self {
        let mut authorized_users: Vec<String> = authorized_users
            .iter()
            .map(|user| format!("{user:?}"))
            .collect();
        authorized_users.sort();
        Self {
            authorized_users,
            threshold,
        }
    }

    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| Error::schema(format!("signers: {e}")))
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MultiSigPayload {
    pub multi_sig_user: String,
    pub outer_signer: String,
    pub action: Box<Actions>,
}

/// An inner action executed on behalf of a multi-sig user, together with the
/// member signatures authorizing it.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MultiSigAction {
    pub signature_chain_id: String,
    pub signatures: Vec<Signature>,
    pub payload: MultiSigPayload,
}

/// Typed-data message signed by the outer signer of a multi-sig action. It is
/// never posted; only its signature is.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SendMultiSig {
    pub signature_chain_id: String,
    pub hyperliquid_chain: String,
    pub multi_sig_action_hash: H256,
    pub nonce: u64,
}

/// Every action the exchange accepts, tagged by `type`.
///
/// Variant payloads are plain structs whose field declaration order is the
/// order the fields are serialized and hashed in.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(tag = "type")]
#[serde(rename_all = "camelCase")]
pub enum Actions {
    Order(BulkOrder),
    Cancel(BulkCancel),
    CancelByCloid(BulkCancelCloid),
    Modify(ModifyRequest),
    BatchModify(BulkModify),
    ScheduleCancel(ScheduleCancel),
    UpdateLeverage(UpdateLeverage),
    UpdateIsolatedMargin(UpdateIsolatedMargin),
    VaultTransfer(VaultTransfer),
    UsdSend(UsdSend),
    SpotSend(SpotSend),
    Withdraw3(Withdraw3),
    UsdClassTransfer(UsdClassTransfer),
    SendAsset(SendAsset),
    TokenDelegate(TokenDelegate),
    ApproveAgent(ApproveAgent),
    ApproveBuilderFee(ApproveBuilderFee),
    ConvertToMultiSigUser(ConvertToMultiSigUser),
    MultiSig(MultiSigAction),
}

impl Actions {
    /// The `type` tag this action serializes with.
    pub fn action_type(&self) -> &'static str {
        match self {
            Actions::Order(_) => "order",
            Actions::Cancel(_) => "cancel",
            Actions::CancelByCloid(_) => "cancelByCloid",
            Actions::Modify(_) => "modify",
            Actions::BatchModify(_) => "batchModify",
            Actions::ScheduleCancel(_) => "scheduleCancel",
            Actions::UpdateLeverage(_) => "updateLeverage",
            Actions::UpdateIsolatedMargin(_) => "updateIsolatedMargin",
            Actions::VaultTransfer(_) => "vaultTransfer",
            Actions::UsdSend(_) => "usdSend",
            Actions::SpotSend(_) => "spotSend",
            Actions::Withdraw3(_) => "withdraw3",
            Actions::UsdClassTransfer(_) => "usdClassTransfer",
            Actions::SendAsset(_) => "sendAsset",
            Actions::TokenDelegate(_) => "tokenDelegate",
            Actions::ApproveAgent(_) => "approveAgent",
            Actions::ApproveBuilderFee(_) => "approveBuilderFee",
            Actions::ConvertToMultiSigUser(_) => "convertToMultiSigUser",
            Actions::MultiSig(_) => "multiSig",
        }
    }

    /// The typed-data schema of a user-signed action, `None` for actions signed
    /// through a phantom agent.
    pub fn user_signed_kind(&self) -> Option<UserSignedKind> {
        match self {
            Actions::UsdSend(_) => Some(UsdSend::KIND),
            Actions::SpotSend(_) => Some(SpotSend::KIND),
            Actions::Withdraw3(_) => Some(Withdraw3::KIND),
            Actions::UsdClassTransfer(_) => Some(UsdClassTransfer::KIND),
            Actions::SendAsset(_) => Some(SendAsset::KIND),
            Actions::TokenDelegate(_) => Some(TokenDelegate::KIND),
            Actions::ApproveAgent(_) => Some(ApproveAgent::KIND),
            Actions::ApproveBuilderFee(_) => Some(ApproveBuilderFee::KIND),
            Actions::ConvertToMultiSigUser(_) => Some(ConvertToMultiSigUser::KIND),
            Actions::MultiSig(_) => Some(SendMultiSig::KIND),
            _ => None,
        }
    }

    /// Whether the posted payload may name a vault for this action.
    pub fn accepts_vault_address(&self) -> bool {
        !matches!(self, Actions::UsdClassTransfer(_) | Actions::SendAsset(_))
    }
}

macro_rules! user_signed_action {
    ($($action:ident => $kind:ident),* $(,)?) => {
        $(
            impl UserSignedAction for $action {
                const KIND: UserSignedKind = UserSignedKind::$kind;

                fn set_chain(&mut self, signature_chain_id: &str, hyperliquid_chain: &str) {
                    self.signature_chain_id = signature_chain_id.to_string();
                    self.hyperliquid_chain = hyperliquid_chain.to_string();
                }
            }
        )*
    };
}

user_signed_action! {
    UsdSend => UsdSend,
    SpotSend => SpotSend,
    Withdraw3 => Withdraw,
    UsdClassTransfer => UsdClassTransfer,
    SendAsset => SendAsset,
    TokenDelegate => TokenDelegate,
    ApproveBuilderFee => ApproveBuilderFee,
    ConvertToMultiSigUser => ConvertToMultiSigUser,
    SendMultiSig => SendMultiSig,
}

impl UserSignedAction for ApproveAgent {
    const KIND: UserSignedKind = UserSignedKind::ApproveAgent;

    fn set_chain(&mut self, signature_chain_id: &str, hyperliquid_chain: &str) {
        self.signature_chain_id = signature_chain_id.to_string();
        self.hyperliquid_chain = hyperliquid_chain.to_string();
    }

    // An unnamed agent is signed with an empty name but posted without the key.
    fn message(&self) -> Result<Map<String, Value>> {
        let mut message = to_message(self)?;
        message
            .entry("agentName")
            .or_insert_with(|| Value::String(String::new()));
        Ok(message)
    }
}

pub(crate) fn to_message<T: Serialize + ?Sized>(action: &T) -> Result<Map<String, Value>> {
    match serde_json::to_value(action) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(other) => Err(Error::schema(format!(
            "user-signed action must serialize to a map, got {other}"
        ))),
        Err(e) => Err(Error::schema(format!("user-signed action: {e}"))),
    }
}
