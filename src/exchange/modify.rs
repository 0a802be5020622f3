use crate::helpers::uuid_to_hex_string;
use crate::prelude::*;
use crate::{ClientOrderRequest, OrderRequest};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifies the resting order a modify replaces.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ClientOrderRef {
    Oid(u64),
    Cloid(Uuid),
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum OidOrCloid {
    Oid(u64),
    Cloid(String),
}

impl From<ClientOrderRef> for OidOrCloid {
    fn from(order_ref: ClientOrderRef) -> Self {
        match order_ref {
            ClientOrderRef::Oid(oid) => OidOrCloid::Oid(oid),
            ClientOrderRef::Cloid(cloid) => OidOrCloid::Cloid(uuid_to_hex_string(cloid)),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClientModifyRequest {
    pub oid: ClientOrderRef,
    pub order: ClientOrderRequest,
}

impl ClientModifyRequest {
    pub fn convert(self, asset: u32) -> Result<ModifyRequest> {
        Ok(ModifyRequest {
            oid: self.oid.into(),
            order: self.order.convert(asset)?,
        })
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct ModifyRequest {
    pub oid: OidOrCloid,
    pub order: OrderRequest,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ClientLimit, ClientOrder, Tif};

    #[test]
    fn modify_by_cloid_serializes_hex_string() -> Result<()> {
        let request = ClientModifyRequest {
            oid: ClientOrderRef::Cloid(Uuid::from_u128(0xff)),
            order: ClientOrderRequest {
                asset: "ETH".to_string(),
                is_buy: false,
                reduce_only: true,
                limit_px: 2501.5,
                sz: 0.1,
                cloid: None,
                order_type: ClientOrder::Limit(ClientLimit { tif: Tif::Alo }),
            },
        };
        let wire = request.convert(1)?;
        let json = serde_json::to_value(&wire).map_err(|e| Error::Schema(e.to_string()))?;
        assert_eq!(json["oid"], "0x000000000000000000000000000000ff");
        assert_eq!(json["order"]["p"], "2501.5");
        assert_eq!(json["order"]["t"]["limit"]["tif"], "Alo");
        Ok(())
    }

    #[test]
    fn modify_by_oid_serializes_number() {
        let oid: OidOrCloid = ClientOrderRef::Oid(42).into();
        assert_eq!(serde_json::to_string(&oid).unwrap(), "42");
    }
}
