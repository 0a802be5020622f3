use crate::helpers::{float_to_wire, uuid_to_hex_string};
use crate::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Time in force of a limit order.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tif {
    /// Good till cancel.
    Gtc,
    /// Immediate or cancel.
    Ioc,
    /// Add liquidity only (post only).
    Alo,
}

/// Take-profit / stop-loss tag of a trigger order.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Tpsl {
    Tp,
    Sl,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Limit {
    pub tif: Tif,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Trigger {
    pub is_market: bool,
    pub trigger_px: String,
    pub tpsl: Tpsl,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub enum Order {
    Limit(Limit),
    Trigger(Trigger),
}

/// An order in wire form. Field order is the serialized key order.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    #[serde(rename = "a", alias = "asset")]
    pub asset: u32,
    #[serde(rename = "b", alias = "isBuy")]
    pub is_buy: bool,
    #[serde(rename = "p", alias = "limitPx")]
    pub limit_px: String,
    #[serde(rename = "s", alias = "sz")]
    pub sz: String,
    #[serde(rename = "r", alias = "reduceOnly")]
    pub reduce_only: bool,
    #[serde(rename = "t", alias = "orderType")]
    pub order_type: Order,
    #[serde(rename = "c", alias = "cloid", skip_serializing_if = "Option::is_none")]
    pub cloid: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct ClientLimit {
    pub tif: Tif,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ClientTrigger {
    pub is_market: bool,
    pub trigger_px: f64,
    pub tpsl: Tpsl,
}

/// Order type as an unchecked pair of optional variants, the shape requests
/// take when they arrive as loose JSON.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct OrderTypeSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<ClientLimit>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trigger: Option<ClientTrigger>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(try_from = "OrderTypeSpec", into = "OrderTypeSpec")]
pub enum ClientOrder {
    Limit(ClientLimit),
    Trigger(ClientTrigger),
}

impl TryFrom<OrderTypeSpec> for ClientOrder {
    type Error = Error;

    fn try_from(order_type: OrderTypeSpec) -> Result<Self> {
        match (order_type.limit, order_type.trigger) {
            (Some(limit), None) => Ok(ClientOrder::Limit(limit)),
            (None, Some(trigger)) => Ok(ClientOrder::Trigger(trigger)),
            (None, None) => Err(Error::schema(
                "order_type: neither limit nor trigger is set",
            )),
            (Some(_), Some(_)) => Err(Error::schema(
                "order_type: both limit and trigger are set",
            )),
        }
    }
}

impl From<ClientOrder> for OrderTypeSpec {
    fn from(order: ClientOrder) -> Self {
        match order {
            ClientOrder::Limit(limit) => OrderTypeSpec {
                limit: Some(limit),
                trigger: None,
            },
            ClientOrder::Trigger(trigger) => OrderTypeSpec {
                limit: None,
                trigger: Some(trigger),
            },
        }
    }
}

impl ClientOrder {
    pub fn to_wire(&self) -> Result<Order> {
        match self {
            ClientOrder::Limit(limit) => Ok(Order::Limit(Limit { tif: limit.tif })),
            ClientOrder::Trigger(trigger) => Ok(Order::Trigger(Trigger {
                is_market: trigger.is_market,
                trigger_px: float_to_wire(trigger.trigger_px)?,
                tpsl: trigger.tpsl,
            })),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClientOrderRequest {
    pub asset: String,
    pub is_buy: bool,
    pub reduce_only: bool,
    pub limit_px: f64,
    pub sz: f64,
    pub cloid: Option<Uuid>,
    pub order_type: ClientOrder,
}

impl ClientOrderRequest {
    /// Converts the request into wire form for an already resolved asset index.
    pub fn convert(self, asset: u32) -> Result<OrderRequest> {
        let order_type = self.order_type.to_wire()?;
        let cloid = self.cloid.map(uuid_to_hex_string);

        Ok(OrderRequest {
            asset,
            is_buy: self.is_buy,
            reduce_only: self.reduce_only,
            limit_px: float_to_wire(self.limit_px)?,
            sz: float_to_wire(self.sz)?,
            order_type,
            cloid,
        })
    }
}
