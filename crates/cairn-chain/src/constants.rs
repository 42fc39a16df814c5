//! Deployment constants shared across endpoints.

pub const ONE_HOUR_MS: u64 = 3_600_000;
pub const TWENTY_FOUR_HOURS_MS: u64 = 24 * ONE_HOUR_MS;
/// Julian year, the convention for long validity windows.
pub const ONE_YEAR_MS: u64 = 31_557_600_000;
pub const TWO_YEARS_MS: u64 = 2 * ONE_YEAR_MS;

/// Slack applied to transaction validity ranges so a transaction built
/// slightly before or after a slot boundary still validates.
pub const TIME_TOLERANCE_MS: u64 = 100_000;

/// Protocol fee, as a fraction of the transacted amount.
pub const PROTOCOL_FEE: f64 = 0.05;

/// Payment key hash collecting the protocol fee.
pub const PROTOCOL_PAYMENT_KEY: &str = "014e9d57e1623f7eeef5d0a8d4e6734a562ba32cf910244cd74e1680";
/// Stake key hash of the protocol fee address.
pub const PROTOCOL_STAKE_KEY: &str = "5e8aa3f089868eaadf188426f49db6566624844b6c5d529b38f3b8a7";

/// Token name of the protocol parameters NFT.
pub const PROTOCOL_PARAMS_TOKEN_NAME: &str = "ProtocolParams";

/// Token names reserved for the reference-script UTxOs.
pub const REF_SCRIPT_SPEND_ORACLE: &str = "SpendSyngentaOracle";
pub const REF_SCRIPT_MINT_ORACLE: &str = "MintSyngentaOracle";
