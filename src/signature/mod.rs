pub mod agent;
mod create_signature;
mod typed_data;

pub use create_signature::{
    eip712_digest, sign_hash, sign_l1_action, sign_l1_action_hash, sign_multi_sig_action,
    sign_multi_sig_l1_action_payload, sign_multi_sig_user_signed_action_payload,
    sign_typed_data, sign_user_signed_action, validate_types, wallet_from_private_key,
    Signature,
};
pub use typed_data::{
    add_multi_sig_types, inject_chain, parse_chain_id, user_signed_domain, user_signed_payload,
    user_signed_payload_with_types, user_signed_typed_data, UserSignedAction, UserSignedKind,
};
