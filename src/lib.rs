mod consts;
mod errors;
pub mod exchange;
pub mod helpers;
pub mod prelude;
pub mod signature;
mod unsigned;

pub use consts::{BaseUrl, L1_AGENT_CHAIN_ID, SIGNATURE_CHAIN_ID};
pub use errors::Error;
pub use exchange::*;
pub use helpers::{
    float_to_int_for_hashing, float_to_usd_int, float_to_usd_string, float_to_wire,
};
pub use signature::agent::PhantomAgent;
pub use signature::{Signature, UserSignedAction, UserSignedKind};
pub use unsigned::{UnsignedTransactionBuilder, UnsignedTransactionComponents};
