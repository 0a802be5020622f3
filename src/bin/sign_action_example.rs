use ethers::signers::Signer;
use hl_action_signer::helpers::timestamp_ms;
use hl_action_signer::prelude::Result;
use hl_action_signer::signature::wallet_from_private_key;
use hl_action_signer::{
    BaseUrl, ClientCancelRequest, ClientLimit, ClientOrder, ClientOrderRequest, Tif,
    UnsignedTransactionBuilder, UnsignedTransactionComponents,
};
use log::info;
use std::collections::HashMap;
use std::env;
use uuid::Uuid;

// Key was randomly generated for testing and shouldn't be used with any real funds
const FALLBACK_PRIVATE_KEY: &str =
    "e908f86dbb4d55ac876378565aafeabc187f6690f046459397b17d9b9a19688e";

fn main() -> Result<()> {
    env_logger::init();
    dotenv::dotenv().ok();

    let private_key = env::var("TEST_PRIVATE_KEY").unwrap_or_else(|_| {
        info!("TEST_PRIVATE_KEY not set, using the throwaway test key");
        FALLBACK_PRIVATE_KEY.to_string()
    });
    let wallet = wallet_from_private_key(&private_key)?;
    info!("Signing as {:?}", wallet.address());

    let coin_to_asset = HashMap::from([("BTC".to_string(), 0), ("ETH".to_string(), 1)]);
    let builder = UnsignedTransactionBuilder::new(Some(BaseUrl::Testnet), None, coin_to_asset);

    let order = ClientOrderRequest {
        asset: "ETH".to_string(),
        is_buy: true,
        reduce_only: false,
        limit_px: 2000.0,
        sz: 0.1,
        cloid: Some(Uuid::new_v4()),
        order_type: ClientOrder::Limit(ClientLimit { tif: Tif::Gtc }),
    };
    let unsigned_order = builder.prepare_unsigned_order(order, None, timestamp_ms())?;
    sign_and_log("Order", unsigned_order, &wallet)?;

    let cancel = ClientCancelRequest {
        asset: "ETH".to_string(),
        oid: 12345,
    };
    let unsigned_cancel = builder.prepare_unsigned_cancel(cancel, timestamp_ms())?;
    sign_and_log("Cancel", unsigned_cancel, &wallet)?;

    let unsigned_transfer = builder.prepare_unsigned_usdc_transfer(
        "1",
        "0x0d1d9635d0640821d15e323ac8adadfa9c111414",
        timestamp_ms(),
    )?;
    sign_and_log("USDC transfer", unsigned_transfer, &wallet)?;

    Ok(())
}

fn sign_and_log(
    label: &str,
    components: UnsignedTransactionComponents,
    wallet: &ethers::signers::LocalWallet,
) -> Result<()> {
    info!(
        "{label}: nonce {}, digest {:?}, l1 agent: {}, domain chain id: {:?}",
        components.nonce,
        components.digest_to_sign,
        components.is_l1_agent_signature,
        components.eip712_domain_chain_id
    );
    let payload = components.sign_into_payload(wallet)?;
    let body = serde_json::to_string_pretty(&payload)
        .map_err(|e| hl_action_signer::Error::Schema(e.to_string()))?;
    info!("{label} payload: {body}");
    Ok(())
}
