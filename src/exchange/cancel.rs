use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq)]
pub struct ClientCancelRequest {
    pub asset: String,
    pub oid: u64,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct CancelRequest {
    #[serde(rename = "a", alias = "asset")]
    pub asset: u32,
    #[serde(rename = "o", alias = "oid")]
    pub oid: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClientCancelRequestCloid {
    pub asset: String,
    pub cloid: Uuid,
}

/// Cancel by client order id. Unlike [`CancelRequest`] the keys are spelled out.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct CancelRequestCloid {
    pub asset: u32,
    pub cloid: String,
}
