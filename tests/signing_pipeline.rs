use ethers::signers::{LocalWallet, Signer};
use ethers::types::{H160, H256};
use hl_action_signer::prelude::Result;
use hl_action_signer::signature::agent::l1_payload;
use hl_action_signer::signature::{
    eip712_digest, sign_l1_action, sign_user_signed_action, user_signed_typed_data,
    wallet_from_private_key,
};
use hl_action_signer::{
    float_to_wire, Actions, BaseUrl, BulkOrder, ClientLimit, ClientOrder, ClientOrderRequest,
    ClientTrigger, Error, ExchangePayload, Grouping, PhantomAgent, Tif, Tpsl,
    UnsignedTransactionBuilder, UsdSend,
};
use serde_json::json;
use std::collections::HashMap;

fn get_wallet() -> Result<LocalWallet> {
    wallet_from_private_key("e908f86dbb4d55ac876378565aafeabc187f6690f046459397b17d9b9a19688e")
}

fn coin_to_asset() -> HashMap<String, u32> {
    HashMap::from([("BTC".to_string(), 0), ("ETH".to_string(), 1)])
}

fn bracket_orders() -> Vec<ClientOrderRequest> {
    let entry = ClientOrderRequest {
        asset: "BTC".to_string(),
        is_buy: true,
        reduce_only: false,
        limit_px: 50000.0,
        sz: 1.5,
        cloid: None,
        order_type: ClientOrder::Limit(ClientLimit { tif: Tif::Gtc }),
    };
    let take_profit = ClientOrderRequest {
        asset: "BTC".to_string(),
        is_buy: false,
        reduce_only: true,
        limit_px: 55000.0,
        sz: 1.5,
        cloid: None,
        order_type: ClientOrder::Trigger(ClientTrigger {
            is_market: true,
            trigger_px: 55000.0,
            tpsl: Tpsl::Tp,
        }),
    };
    vec![entry, take_profit]
}

#[test]
fn canonical_decimal_strings() -> Result<()> {
    assert_eq!(float_to_wire(1.5)?, "1.5");
    assert_eq!(float_to_wire(0.0)?, "0");
    assert_eq!(float_to_wire(1000000.0)?, "1000000");
    assert_eq!(float_to_wire(0.00000001)?, "0.00000001");
    assert!(matches!(
        float_to_wire(0.000000001),
        Err(Error::Precision { .. })
    ));
    Ok(())
}

#[test]
fn builder_and_direct_signing_agree() -> Result<()> {
    let wallet = get_wallet()?;
    let builder = UnsignedTransactionBuilder::new(Some(BaseUrl::Mainnet), None, coin_to_asset());
    let components =
        builder.prepare_unsigned_bulk_order(bracket_orders(), Grouping::NormalTpsl, None, 42)?;

    let direct = sign_l1_action(&wallet, &components.action, None, 42, None, true)?;
    let payload = components.sign_into_payload(&wallet)?;
    assert_eq!(payload.signature, direct);

    let hash = payload.action.hash(42, None, None)?;
    let digest = eip712_digest(&l1_payload(&PhantomAgent::from_action_hash(hash, true)))?;
    assert_eq!(payload.signature.recover(digest)?, wallet.address());
    Ok(())
}

#[test]
fn posted_payload_shape() -> Result<()> {
    let wallet = get_wallet()?;
    let vault: H160 = "0x1234567890123456789012345678901234567890"
        .parse()
        .unwrap();
    let mut builder =
        UnsignedTransactionBuilder::new(Some(BaseUrl::Testnet), Some(vault), coin_to_asset());
    builder.set_expires_after(Some(1700000060000));

    let payload = builder
        .prepare_unsigned_bulk_order(bracket_orders(), Grouping::NormalTpsl, None, 1700000000000)?
        .sign_into_payload(&wallet)?;
    let value = serde_json::to_value(&payload).unwrap();

    assert_eq!(value["action"]["type"], json!("order"));
    assert_eq!(value["action"]["grouping"], json!("normalTpsl"));
    assert_eq!(
        value["action"]["orders"][1]["t"],
        json!({"trigger": {"isMarket": true, "triggerPx": "55000", "tpsl": "tp"}})
    );
    assert_eq!(value["nonce"], json!(1700000000000u64));
    assert_eq!(
        value["vaultAddress"],
        json!("0x1234567890123456789012345678901234567890")
    );
    assert_eq!(value["expiresAfter"], json!(1700000060000u64));
    let v = value["signature"]["v"].as_u64().unwrap();
    assert!(v == 27 || v == 28);
    assert_eq!(value["signature"]["r"].as_str().unwrap().len(), 66);

    let round_trip: ExchangePayload = serde_json::from_value(value).unwrap();
    assert_eq!(round_trip, payload);
    Ok(())
}

#[test]
fn action_from_json_hashes_like_typed_action() -> Result<()> {
    let builder = UnsignedTransactionBuilder::new(None, None, coin_to_asset());
    let typed = builder
        .prepare_unsigned_bulk_order(bracket_orders(), Grouping::NormalTpsl, None, 7)?
        .action;

    let parsed: Actions = serde_json::from_value(json!({
        "type": "order",
        "orders": [
            {"a": 0, "b": true, "p": "50000", "s": "1.5", "r": false,
             "t": {"limit": {"tif": "Gtc"}}},
            {"a": 0, "b": false, "p": "55000", "s": "1.5", "r": true,
             "t": {"trigger": {"isMarket": true, "triggerPx": "55000", "tpsl": "tp"}}}
        ],
        "grouping": "normalTpsl"
    }))
    .unwrap();

    assert_eq!(parsed, typed);
    assert_eq!(parsed.hash(7, None, None)?, typed.hash(7, None, None)?);
    Ok(())
}

#[test]
fn network_only_changes_source_and_chain_name() -> Result<()> {
    let hash = H256::repeat_byte(0x11);
    let mainnet = PhantomAgent::from_action_hash(hash, true);
    let testnet = PhantomAgent::from_action_hash(hash, false);
    assert_eq!(mainnet.connection_id, testnet.connection_id);
    assert_eq!((mainnet.source.as_str(), testnet.source.as_str()), ("a", "b"));

    let wallet = get_wallet()?;
    let base = UsdSend {
        signature_chain_id: String::new(),
        hyperliquid_chain: String::new(),
        destination: "0x0d1d9635d0640821d15e323ac8adadfa9c111414".to_string(),
        amount: "1".to_string(),
        time: 1690393044548,
    };
    let mut on_mainnet = base.clone();
    let mut on_testnet = base;
    let mainnet_sig = sign_user_signed_action(&wallet, &mut on_mainnet, true)?;
    let testnet_sig = sign_user_signed_action(&wallet, &mut on_testnet, false)?;
    assert_ne!(mainnet_sig, testnet_sig);

    let mainnet_data = user_signed_typed_data(&on_mainnet)?;
    let testnet_data = user_signed_typed_data(&on_testnet)?;
    assert_eq!(mainnet_data.domain, testnet_data.domain);
    for (key, value) in &mainnet_data.message {
        if key == "hyperliquidChain" {
            assert_ne!(value, &testnet_data.message[key]);
        } else {
            assert_eq!(value, &testnet_data.message[key]);
        }
    }
    Ok(())
}

#[test]
fn empty_order_batch_still_signs() -> Result<()> {
    let wallet = get_wallet()?;
    let action = Actions::Order(BulkOrder {
        orders: vec![],
        grouping: Grouping::Na,
        builder: None,
    });
    let signature = sign_l1_action(&wallet, &action, None, 0, None, false)?;
    let hash = action.hash(0, None, None)?;
    let digest = eip712_digest(&l1_payload(&PhantomAgent::from_action_hash(hash, false)))?;
    assert_eq!(signature.recover(digest)?, wallet.address());
    Ok(())
}

#[test]
fn single_order_matches_reference_signatures() -> Result<()> {
    let wallet =
        wallet_from_private_key("0x0123456789012345678901234567890123456789012345678901234567890123")?;
    let order = || ClientOrderRequest {
        asset: "ETH".to_string(),
        is_buy: true,
        reduce_only: false,
        limit_px: 100.0,
        sz: 100.0,
        cloid: None,
        order_type: ClientOrder::Limit(ClientLimit { tif: Tif::Gtc }),
    };

    let cases = [
        (
            BaseUrl::Mainnet,
            "0xa5cfed1f2d7948de30aecacc7fea3c5e05c1e759020e96239847879b906f801e",
            "0xd65369825a9df5d80099e513cce430311d7d26ddf477f5b3a33d2806b100d78e",
            "0x2b54116ff64054968aa237c20ca9ff68000f977c93289157748a3162b6ea940e",
            28,
        ),
        (
            BaseUrl::Testnet,
            "0x606be2d25f68768f876dc04a2c3c86ceafd2d6a3c3cbb963454462d6734ebfa6",
            "0x82b2ba28e76b3d761093aaded1b1cdad4960b3af30212b343fb2e6cdfa4e3d54",
            "0x6b53878fc99d26047f4d7e8c90eb98955a109f44209163f52d8dc4278cbbd9f5",
            27,
        ),
    ];
    for (network, digest, r, s, v) in cases {
        let builder = UnsignedTransactionBuilder::new(Some(network), None, coin_to_asset());
        let components = builder.prepare_unsigned_order(order(), None, 0)?;
        assert_eq!(format!("{:?}", components.digest_to_sign), digest);

        let payload = components.sign_into_payload(&wallet)?;
        assert_eq!(payload.signature.r, r);
        assert_eq!(payload.signature.s, s);
        assert_eq!(payload.signature.v, v);
    }
    Ok(())
}
