use crate::consts::{BaseUrl, L1_AGENT_CHAIN_ID, SIGNATURE_CHAIN_ID};
use crate::exchange::{
    action_hash, Actions, ApproveAgent, ApproveBuilderFee, BuilderInfo, BulkCancel,
    BulkCancelCloid, BulkModify, BulkOrder, CancelRequest, CancelRequestCloid,
    ClientCancelRequest, ClientCancelRequestCloid, ClientModifyRequest, ClientOrderRequest,
    ConvertToMultiSigUser, Grouping, MarginMode, MultiSigAction, MultiSigPayload,
    MultiSigSigners, ScheduleCancel, SendAsset, SendMultiSig, SpotSend, TokenDelegate,
    UpdateIsolatedMargin, UpdateLeverage, UsdClassTransfer, UsdSend, VaultTransfer, Withdraw3,
};
use crate::helpers::{float_to_usd_int, float_to_usd_string, uuid_to_hex_string};
use crate::prelude::*;
use crate::signature::agent::{l1_payload, PhantomAgent};
use crate::signature::{
    eip712_digest, inject_chain, user_signed_typed_data, Signature, UserSignedAction,
};
use crate::UnsignedTransactionComponents;
use ethers::types::{H160, U256};
use log::debug;
use std::collections::HashMap;

/// Builds ready-to-sign components without holding a key or touching the
/// network. Asset names resolve through `coin_to_asset`.
#[derive(Debug, Clone)]
pub struct UnsignedTransactionBuilder {
    pub base_url: BaseUrl,
    pub vault_address: Option<H160>,
    pub expires_after: Option<u64>,
    pub coin_to_asset: HashMap<String, u32>,
}

impl UnsignedTransactionBuilder {
    pub fn new(
        base_url_override: Option<BaseUrl>,
        vault_address: Option<H160>,
        coin_to_asset: HashMap<String, u32>,
    ) -> Self {
        UnsignedTransactionBuilder {
            base_url: base_url_override.unwrap_or(BaseUrl::Mainnet),
            vault_address,
            expires_after: None,
            coin_to_asset,
        }
    }

    /// Actions prepared afterwards are rejected by the exchange once
    /// `expires_after` (ms) has passed. `None` clears it.
    pub fn set_expires_after(&mut self, expires_after: Option<u64>) {
        self.expires_after = expires_after;
    }

    fn is_mainnet(&self) -> bool {
        self.base_url.is_mainnet()
    }

    fn asset(&self, coin: &str) -> Result<u32> {
        self.coin_to_asset
            .get(coin)
            .copied()
            .ok_or_else(|| Error::schema(format!("asset: unknown coin `{coin}`")))
    }

    fn l1_components(
        &self,
        action: Actions,
        nonce: u64,
        vault_address: Option<H160>,
    ) -> Result<UnsignedTransactionComponents> {
        let hash = action.hash(nonce, vault_address, self.expires_after)?;
        let agent = PhantomAgent::from_action_hash(hash, self.is_mainnet());
        let digest_to_sign = eip712_digest(&l1_payload(&agent))?;
        debug!(
            "prepared {} (nonce {nonce}): action hash {hash:?}, digest {digest_to_sign:?}",
            action.action_type()
        );

        let vault_address = vault_address.filter(|_| action.accepts_vault_address());
        Ok(UnsignedTransactionComponents {
            action,
            nonce,
            digest_to_sign,
            vault_address,
            expires_after: self.expires_after,
            eip712_domain_chain_id: Some(U256::from(L1_AGENT_CHAIN_ID)),
            eip712_hyperliquid_chain_name: None,
            is_l1_agent_signature: true,
        })
    }

    fn user_signed_components<T: UserSignedAction>(
        &self,
        mut action: T,
        nonce: u64,
        wrap: impl FnOnce(T) -> Actions,
    ) -> Result<UnsignedTransactionComponents> {
        inject_chain(&mut action, self.is_mainnet());
        let typed_data = user_signed_typed_data(&action)?;
        let digest_to_sign = eip712_digest(&typed_data)?;
        let action = wrap(action);
        debug!(
            "prepared {} (nonce {nonce}): digest {digest_to_sign:?}",
            action.action_type()
        );

        let vault_address = self.vault_address.filter(|_| action.accepts_vault_address());
        Ok(UnsignedTransactionComponents {
            action,
            nonce,
            digest_to_sign,
            vault_address,
            expires_after: self.expires_after,
            eip712_domain_chain_id: typed_data.domain.chain_id,
            eip712_hyperliquid_chain_name: Some(self.base_url.hyperliquid_chain().to_string()),
            is_l1_agent_signature: false,
        })
    }

    pub fn prepare_unsigned_order(
        &self,
        order: ClientOrderRequest,
        builder: Option<BuilderInfo>,
        nonce: u64,
    ) -> Result<UnsignedTransactionComponents> {
        self.prepare_unsigned_bulk_order(vec![order], Grouping::Na, builder, nonce)
    }

    pub fn prepare_unsigned_bulk_order(
        &self,
        orders: Vec<ClientOrderRequest>,
        grouping: Grouping,
        builder: Option<BuilderInfo>,
        nonce: u64,
    ) -> Result<UnsignedTransactionComponents> {
        let mut transformed_orders = Vec::with_capacity(orders.len());
        for order in orders {
            let asset = self.asset(&order.asset)?;
            transformed_orders.push(order.convert(asset)?);
        }

        let action = Actions::Order(BulkOrder {
            orders: transformed_orders,
            grouping,
            builder: builder.map(BuilderInfo::normalized),
        });
        self.l1_components(action, nonce, self.vault_address)
    }

    pub fn prepare_unsigned_cancel(
        &self,
        cancel: ClientCancelRequest,
        nonce: u64,
    ) -> Result<UnsignedTransactionComponents> {
        self.prepare_unsigned_bulk_cancel(vec![cancel], nonce)
    }

    pub fn prepare_unsigned_bulk_cancel(
        &self,
        cancels: Vec<ClientCancelRequest>,
        nonce: u64,
    ) -> Result<UnsignedTransactionComponents> {
        let mut transformed_cancels = Vec::with_capacity(cancels.len());
        for cancel in cancels {
            transformed_cancels.push(CancelRequest {
                asset: self.asset(&cancel.asset)?,
                oid: cancel.oid,
            });
        }

        let action = Actions::Cancel(BulkCancel {
            cancels: transformed_cancels,
        });
        self.l1_components(action, nonce, self.vault_address)
    }

    pub fn prepare_unsigned_cancel_by_cloid(
        &self,
        cancels: Vec<ClientCancelRequestCloid>,
        nonce: u64,
    ) -> Result<UnsignedTransactionComponents> {
        let mut transformed_cancels = Vec::with_capacity(cancels.len());
        for cancel in cancels {
            transformed_cancels.push(CancelRequestCloid {
                asset: self.asset(&cancel.asset)?,
                cloid: uuid_to_hex_string(cancel.cloid),
            });
        }

        let action = Actions::CancelByCloid(BulkCancelCloid {
            cancels: transformed_cancels,
        });
        self.l1_components(action, nonce, self.vault_address)
    }

    pub fn prepare_unsigned_modify_order(
        &self,
        modify: ClientModifyRequest,
        nonce: u64,
    ) -> Result<UnsignedTransactionComponents> {
        let asset = self.asset(&modify.order.asset)?;
        let action = Actions::Modify(modify.convert(asset)?);
        self.l1_components(action, nonce, self.vault_address)
    }

    pub fn prepare_unsigned_bulk_modify(
        &self,
        modifies: Vec<ClientModifyRequest>,
        nonce: u64,
    ) -> Result<UnsignedTransactionComponents> {
        let mut transformed_modifies = Vec::with_capacity(modifies.len());
        for modify in modifies {
            let asset = self.asset(&modify.order.asset)?;
            transformed_modifies.push(modify.convert(asset)?);
        }

        let action = Actions::BatchModify(BulkModify {
            modifies: transformed_modifies,
        });
        self.l1_components(action, nonce, self.vault_address)
    }

    pub fn prepare_unsigned_schedule_cancel(
        &self,
        time: Option<u64>,
        nonce: u64,
    ) -> Result<UnsignedTransactionComponents> {
        let action = Actions::ScheduleCancel(ScheduleCancel { time });
        self.l1_components(action, nonce, self.vault_address)
    }

    pub fn prepare_unsigned_update_leverage(
        &self,
        leverage: u32,
        coin: &str,
        margin_mode: MarginMode,
        nonce: u64,
    ) -> Result<UnsignedTransactionComponents> {
        let action = Actions::UpdateLeverage(UpdateLeverage {
            asset: self.asset(coin)?,
            is_cross: margin_mode == MarginMode::Cross,
            leverage,
        });
        self.l1_components(action, nonce, self.vault_address)
    }

    /// Adds (or with a negative amount removes) isolated margin, in USD.
    pub fn prepare_unsigned_update_isolated_margin(
        &self,
        amount: f64,
        coin: &str,
        nonce: u64,
    ) -> Result<UnsignedTransactionComponents> {
        let action = Actions::UpdateIsolatedMargin(UpdateIsolatedMargin {
            asset: self.asset(coin)?,
            is_buy: true,
            ntli: float_to_usd_int(amount)?,
        });
        self.l1_components(action, nonce, self.vault_address)
    }

    /// The vault is named inside the action, so it is hashed without the
    /// vault marker. `vault_address` falls back to the configured vault.
    pub fn prepare_unsigned_vault_transfer(
        &self,
        is_deposit: bool,
        usd: f64,
        vault_address: Option<H160>,
        nonce: u64,
    ) -> Result<UnsignedTransactionComponents> {
        let vault_address = vault_address
            .or(self.vault_address)
            .ok_or_else(|| Error::schema("vaultTransfer: no vault address configured"))?;
        let usd = u64::try_from(float_to_usd_int(usd)?).map_err(|_| {
            Error::schema(format!("vaultTransfer: usd must not be negative, got {usd}"))
        })?;

        let action = Actions::VaultTransfer(VaultTransfer {
            vault_address,
            is_deposit,
            usd,
        });
        self.l1_components(action, nonce, None)
    }

    pub fn prepare_unsigned_usdc_transfer(
        &self,
        amount: &str,
        destination: &str,
        nonce: u64,
    ) -> Result<UnsignedTransactionComponents> {
        let usd_send = UsdSend {
            signature_chain_id: String::new(),
            hyperliquid_chain: String::new(),
            destination: destination.to_string(),
            amount: amount.to_string(),
            time: nonce,
        };
        self.user_signed_components(usd_send, nonce, Actions::UsdSend)
    }

    pub fn prepare_unsigned_spot_transfer(
        &self,
        amount: &str,
        destination: &str,
        token: &str,
        nonce: u64,
    ) -> Result<UnsignedTransactionComponents> {
        let spot_send = SpotSend {
            signature_chain_id: String::new(),
            hyperliquid_chain: String::new(),
            destination: destination.to_string(),
            token: token.to_string(),
            amount: amount.to_string(),
            time: nonce,
        };
        self.user_signed_components(spot_send, nonce, Actions::SpotSend)
    }

    pub fn prepare_unsigned_withdraw(
        &self,
        amount: &str,
        destination: &str,
        nonce: u64,
    ) -> Result<UnsignedTransactionComponents> {
        let withdraw = Withdraw3 {
            signature_chain_id: String::new(),
            hyperliquid_chain: String::new(),
            destination: destination.to_string(),
            amount: amount.to_string(),
            time: nonce,
        };
        self.user_signed_components(withdraw, nonce, Actions::Withdraw3)
    }

    /// Moves USDC between the spot and perp balances. With a vault configured
    /// the amount names it as the sub-account.
    pub fn prepare_unsigned_class_transfer(
        &self,
        usd_amount: f64,
        to_perp: bool,
        nonce: u64,
    ) -> Result<UnsignedTransactionComponents> {
        let mut amount = float_to_usd_string(usd_amount)?;
        if let Some(vault_address) = self.vault_address {
            amount = format!("{amount} subaccount:{vault_address:?}");
        }

        let class_transfer = UsdClassTransfer {
            signature_chain_id: String::new(),
            hyperliquid_chain: String::new(),
            amount,
            to_perp,
            nonce,
        };
        self.user_signed_components(class_transfer, nonce, Actions::UsdClassTransfer)
    }

    /// Moves a token between dexes; `""` is the perp dex and `"spot"` the
    /// spot balance. A configured vault is the source sub-account.
    pub fn prepare_unsigned_send_asset(
        &self,
        destination: &str,
        source_dex: &str,
        destination_dex: &str,
        token: &str,
        amount: &str,
        nonce: u64,
    ) -> Result<UnsignedTransactionComponents> {
        let send_asset = SendAsset {
            signature_chain_id: String::new(),
            hyperliquid_chain: String::new(),
            destination: destination.to_string(),
            source_dex: source_dex.to_string(),
            destination_dex: destination_dex.to_string(),
            token: token.to_string(),
            amount: amount.to_string(),
            from_sub_account: self
                .vault_address
                .map(|vault_address| format!("{vault_address:?}"))
                .unwrap_or_default(),
            nonce,
        };
        self.user_signed_components(send_asset, nonce, Actions::SendAsset)
    }

    pub fn prepare_unsigned_token_delegate(
        &self,
        validator: H160,
        wei: u64,
        is_undelegate: bool,
        nonce: u64,
    ) -> Result<UnsignedTransactionComponents> {
        let token_delegate = TokenDelegate {
            signature_chain_id: String::new(),
            hyperliquid_chain: String::new(),
            validator: format!("{validator:?}"),
            wei,
            is_undelegate,
            nonce,
        };
        self.user_signed_components(token_delegate, nonce, Actions::TokenDelegate)
    }

    pub fn prepare_unsigned_approve_agent(
        &self,
        agent_address: H160,
        agent_name: Option<String>,
        nonce: u64,
    ) -> Result<UnsignedTransactionComponents> {
        let approve_agent = ApproveAgent {
            signature_chain_id: String::new(),
            hyperliquid_chain: String::new(),
            agent_address: format!("{agent_address:?}"),
            agent_name,
            nonce,
        };
        self.user_signed_components(approve_agent, nonce, Actions::ApproveAgent)
    }

    /// `max_fee_rate` is a percentage string such as `"0.1%"`.
    pub fn prepare_unsigned_approve_builder_fee(
        &self,
        builder: &str,
        max_fee_rate: &str,
        nonce: u64,
    ) -> Result<UnsignedTransactionComponents> {
        let approve_builder_fee = ApproveBuilderFee {
            signature_chain_id: String::new(),
            hyperliquid_chain: String::new(),
            max_fee_rate: max_fee_rate.to_string(),
            builder: builder.to_lowercase(),
            nonce,
        };
        self.user_signed_components(approve_builder_fee, nonce, Actions::ApproveBuilderFee)
    }

    /// `None` converts a multi-sig user back to a normal user.
    pub fn prepare_unsigned_convert_to_multi_sig_user(
        &self,
        signers: Option<MultiSigSigners>,
        nonce: u64,
    ) -> Result<UnsignedTransactionComponents> {
        let signers = match signers {
            Some(signers) => signers.to_json_string()?,
            None => "null".to_string(),
        };
        let convert = ConvertToMultiSigUser {
            signature_chain_id: String::new(),
            hyperliquid_chain: String::new(),
            signers,
            nonce,
        };
        self.user_signed_components(convert, nonce, Actions::ConvertToMultiSigUser)
    }

    /// Wraps `inner` with the collected member signatures. The digest is the
    /// outer signer's `SendMultiSig` envelope over the untagged action hash.
    pub fn prepare_unsigned_multi_sig(
        &self,
        multi_sig_user: H160,
        outer_signer: H160,
        inner: Actions,
        signatures: Vec<Signature>,
        nonce: u64,
    ) -> Result<UnsignedTransactionComponents> {
        let multi_sig_action = MultiSigAction {
            signature_chain_id: SIGNATURE_CHAIN_ID.to_string(),
            signatures,
            payload: MultiSigPayload {
                multi_sig_user: format!("{multi_sig_user:?}"),
                outer_signer: format!("{outer_signer:?}"),
                action: Box::new(inner),
            },
        };
        let multi_sig_action_hash = action_hash(
            &multi_sig_action,
            nonce,
            self.vault_address,
            self.expires_after,
        )?;
        let envelope = SendMultiSig {
            signature_chain_id: String::new(),
            hyperliquid_chain: String::new(),
            multi_sig_action_hash,
            nonce,
        };
        self.user_signed_components(envelope, nonce, |_| Actions::MultiSig(multi_sig_action))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signature::sign_l1_action;
    use crate::{ClientLimit, ClientOrder, ClientOrderRef, Tif};
    use ethers::signers::{LocalWallet, Signer};
    use uuid::Uuid;

    fn builder(base_url: BaseUrl, vault_address: Option<H160>) -> UnsignedTransactionBuilder {
        let coin_to_asset = HashMap::from([("BTC".to_string(), 0), ("ETH".to_string(), 4)]);
        UnsignedTransactionBuilder::new(Some(base_url), vault_address, coin_to_asset)
    }

    fn eth_order() -> ClientOrderRequest {
        ClientOrderRequest {
            asset: "ETH".to_string(),
            is_buy: true,
            reduce_only: false,
            limit_px: 2000.0,
            sz: 0.1,
            cloid: None,
            order_type: ClientOrder::Limit(ClientLimit { tif: Tif::Gtc }),
        }
    }

    fn vault() -> H160 {
        "0x1234567890123456789012345678901234567890".parse().unwrap()
    }

    #[test]
    fn order_components_match_direct_signing() -> Result<()> {
        let wallet: LocalWallet = "e908f86dbb4d55ac876378565aafeabc187f6690f046459397b17d9b9a19688e"
            .parse()
            .unwrap();
        let components = builder(BaseUrl::Testnet, None).prepare_unsigned_order(
            eth_order(),
            None,
            1700000000000,
        )?;

        assert!(components.is_l1_agent_signature);
        assert_eq!(components.eip712_domain_chain_id, Some(U256::from(1337u64)));
        assert_eq!(components.eip712_hyperliquid_chain_name, None);

        let direct = sign_l1_action(
            &wallet,
            &components.action,
            None,
            1700000000000,
            None,
            false,
        )?;
        assert_eq!(components.sign(&wallet)?, direct);
        assert_eq!(direct.recover(components.digest_to_sign)?, wallet.address());

        let json = components.action_payload_json()?;
        assert_eq!(json["type"], "order");
        assert_eq!(json["orders"][0]["a"], 4);
        assert_eq!(json["orders"][0]["p"], "2000");
        assert_eq!(json["orders"][0]["s"], "0.1");
        Ok(())
    }

    #[test]
    fn unknown_coin_is_a_schema_error() {
        let mut order = eth_order();
        order.asset = "DOGE".to_string();
        let result = builder(BaseUrl::Mainnet, None).prepare_unsigned_order(order, None, 1);
        assert!(matches!(result, Err(Error::Schema(_))));
    }

    #[test]
    fn vault_and_expiry_change_the_digest() -> Result<()> {
        let plain = builder(BaseUrl::Mainnet, None).prepare_unsigned_cancel(
            ClientCancelRequest {
                asset: "BTC".to_string(),
                oid: 1,
            },
            5,
        )?;
        let vaulted = builder(BaseUrl::Mainnet, Some(vault())).prepare_unsigned_cancel(
            ClientCancelRequest {
                asset: "BTC".to_string(),
                oid: 1,
            },
            5,
        )?;
        assert_ne!(plain.digest_to_sign, vaulted.digest_to_sign);
        assert_eq!(vaulted.vault_address, Some(vault()));

        let mut expiring = builder(BaseUrl::Mainnet, None);
        expiring.set_expires_after(Some(1700000060000));
        let expiring = expiring.prepare_unsigned_cancel(
            ClientCancelRequest {
                asset: "BTC".to_string(),
                oid: 1,
            },
            5,
        )?;
        assert_ne!(plain.digest_to_sign, expiring.digest_to_sign);
        assert_eq!(expiring.expires_after, Some(1700000060000));
        Ok(())
    }

    #[test]
    fn network_changes_only_the_digest_and_chain_name() -> Result<()> {
        let mainnet = builder(BaseUrl::Mainnet, None).prepare_unsigned_usdc_transfer(
            "1",
            "0x0d1d9635d0640821d15e323ac8adadfa9c111414",
            1690393044548,
        )?;
        let testnet = builder(BaseUrl::Testnet, None).prepare_unsigned_usdc_transfer(
            "1",
            "0x0d1d9635d0640821d15e323ac8adadfa9c111414",
            1690393044548,
        )?;

        assert!(!mainnet.is_l1_agent_signature);
        assert_eq!(mainnet.eip712_domain_chain_id, Some(U256::from(421614u64)));
        assert_eq!(mainnet.eip712_hyperliquid_chain_name.as_deref(), Some("Mainnet"));
        assert_eq!(testnet.eip712_hyperliquid_chain_name.as_deref(), Some("Testnet"));
        assert_ne!(mainnet.digest_to_sign, testnet.digest_to_sign);

        let Actions::UsdSend(usd_send) = &testnet.action else {
            panic!("expected usdSend, got {}", testnet.action.action_type());
        };
        assert_eq!(usd_send.time, 1690393044548);
        assert_eq!(usd_send.signature_chain_id, "0x66eee");
        Ok(())
    }

    #[test]
    fn class_transfer_names_vault_as_sub_account_and_omits_vault() -> Result<()> {
        let components = builder(BaseUrl::Mainnet, Some(vault()))
            .prepare_unsigned_class_transfer(10.5, true, 7)?;
        let Actions::UsdClassTransfer(transfer) = &components.action else {
            panic!("expected usdClassTransfer");
        };
        assert_eq!(
            transfer.amount,
            "10.500000 subaccount:0x1234567890123456789012345678901234567890"
        );
        assert!(components.vault_address.is_none());

        let plain =
            builder(BaseUrl::Mainnet, None).prepare_unsigned_class_transfer(10.0, false, 7)?;
        let json = plain.action_payload_json()?;
        assert_eq!(json["amount"], "10.000000");
        assert_eq!(json["toPerp"], false);

        let wallet = LocalWallet::new(&mut rand::thread_rng());
        let payload = components.sign_into_payload(&wallet)?;
        assert!(payload.vault_address.is_none());
        Ok(())
    }

    #[test]
    fn vault_transfer_requires_a_vault_and_hashes_without_marker() -> Result<()> {
        let no_vault =
            builder(BaseUrl::Mainnet, None).prepare_unsigned_vault_transfer(true, 5.0, None, 1);
        assert!(matches!(no_vault, Err(Error::Schema(_))));

        let components = builder(BaseUrl::Mainnet, Some(vault()))
            .prepare_unsigned_vault_transfer(true, 5.0, None, 1)?;
        let expected_hash = components.action.hash(1, None, None)?;
        let expected_digest =
            eip712_digest(&l1_payload(&PhantomAgent::from_action_hash(expected_hash, true)))?;
        assert_eq!(components.digest_to_sign, expected_digest);

        let json = components.action_payload_json()?;
        assert_eq!(json["usd"], 5000000);
        assert_eq!(json["vaultAddress"], "0x1234567890123456789012345678901234567890");
        Ok(())
    }

    #[test]
    fn modify_by_cloid_resolves_asset() -> Result<()> {
        let components = builder(BaseUrl::Mainnet, None).prepare_unsigned_modify_order(
            ClientModifyRequest {
                oid: ClientOrderRef::Cloid(Uuid::from_u128(2)),
                order: eth_order(),
            },
            3,
        )?;
        let json = components.action_payload_json()?;
        assert_eq!(json["type"], "modify");
        assert_eq!(json["oid"], "0x00000000000000000000000000000002");
        assert_eq!(json["order"]["a"], 4);
        Ok(())
    }

    #[test]
    fn convert_to_normal_user_sends_null_signers() -> Result<()> {
        let components =
            builder(BaseUrl::Testnet, None).prepare_unsigned_convert_to_multi_sig_user(None, 9)?;
        let json = components.action_payload_json()?;
        assert_eq!(json["signers"], "null");
        assert_eq!(json["hyperliquidChain"], "Testnet");
        Ok(())
    }

    #[test]
    fn multi_sig_wraps_inner_action() -> Result<()> {
        let builder = builder(BaseUrl::Mainnet, None);
        let inner = builder
            .prepare_unsigned_schedule_cancel(Some(1700000100000), 11)?
            .action;
        let outer = LocalWallet::new(&mut rand::thread_rng());
        let components = builder.prepare_unsigned_multi_sig(
            vault(),
            outer.address(),
            inner,
            vec![],
            11,
        )?;

        assert!(!components.is_l1_agent_signature);
        let json = components.action_payload_json()?;
        assert_eq!(json["type"], "multiSig");
        assert_eq!(json["payload"]["action"]["type"], "scheduleCancel");
        assert_eq!(
            json["payload"]["multiSigUser"],
            "0x1234567890123456789012345678901234567890"
        );

        let signature = components.sign(&outer)?;
        assert_eq!(signature.recover(components.digest_to_sign)?, outer.address());
        Ok(())
    }
}
