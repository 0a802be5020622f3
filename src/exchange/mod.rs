mod actions;
mod builder;
mod cancel;
mod hash;
mod modify;
mod order;
mod payload;

pub(crate) use actions::to_message;
pub use actions::*;
pub use builder::BuilderInfo;
pub use cancel::{ClientCancelRequest, ClientCancelRequestCloid};
pub use cancel::{CancelRequest, CancelRequestCloid};
pub use hash::{action_hash, action_hash_preimage};
pub use modify::{ClientModifyRequest, ClientOrderRef, ModifyRequest, OidOrCloid};
pub use order::{
    ClientLimit, ClientOrder, ClientOrderRequest, ClientTrigger, Limit, Order, OrderRequest,
    OrderTypeSpec, Tif, Tpsl, Trigger,
};
pub use payload::ExchangePayload;
