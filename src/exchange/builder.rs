use serde::{Deserialize, Serialize};

/// Builder-fee descriptor attached to an order action.
///
/// A builder (the developer of a trading front end or bot) can collect a fee
/// on the fills of orders it routes for a user. The user has to approve a
/// maximum fee for the builder first, through an `approveBuilderFee`
/// user-signed action; afterwards every order action may carry this
/// descriptor as its trailing `builder` field.
///
/// The descriptor is part of the hashed order action, so its shape is fixed:
/// the key `b` carries the builder address and `f` the fee, in that order.
///
/// # Example
/// ```rust
/// use hl_action_signer::BuilderInfo;
///
/// // 5 tenths of a basis point
/// let builder_info = BuilderInfo {
///     builder: "0xF5Bc9107916B91A3Ea5966cd2e51655D21B7Eb02".to_string(),
///     fee: 5,
/// };
/// assert_eq!(
///     builder_info.normalized().builder,
///     "0xf5bc9107916b91a3ea5966cd2e51655d21b7eb02"
/// );
/// ```
#[derive(Default, Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct BuilderInfo {
    /// Builder wallet address, `0x` followed by 40 hex characters.
    ///
    /// The exchange compares addresses in lowercase and the hash covers the
    /// exact string, so [`BuilderInfo::normalized`] is applied before the
    /// descriptor is placed into an action.
    #[serde(rename = "b")]
    pub builder: String,

    /// Builder fee in tenths of a basis point.
    ///
    /// - `fee = 1` → 0.001%
    /// - `fee = 10` → 0.01%
    /// - `fee = 100` → 0.1%, the ceiling for perpetuals
    /// - `fee = 1000` → 1%, the ceiling for spot
    #[serde(rename = "f")]
    pub fee: u64,
}

impl BuilderInfo {
    /// Returns the descriptor with its address lowercased.
    pub fn normalized(mut self) -> Self {
        self.builder = self.builder.to_lowercase();
        self
    }
}
