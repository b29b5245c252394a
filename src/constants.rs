//! Application constants
//!
//! Centralized location for magic strings, chain ids and mockup defaults.

use std::time::Duration;

/// Chain id of the target test network (Sepolia), decimal form
pub const TARGET_CHAIN_ID: u64 = 11_155_111;

/// Chain id of the target test network, hex form as sent to the wallet provider
pub const TARGET_CHAIN_ID_HEX: &str = "0xaa36a7";

/// Period of the simulated agent activity feed
pub const FEED_TICK_PERIOD: Duration = Duration::from_secs(10);

/// Maximum number of entries kept in the activity feed
pub const FEED_CAPACITY: usize = 3;

/// Fixed bridge preview rate: 1 ETH = 50 PI
pub const BRIDGE_RATE_ETH_TO_PI: f64 = 50.0;

/// Displayed source balance in the bridge preview
pub const BRIDGE_ETH_BALANCE: f64 = 0.5;

/// Stake/unstake step used by the staking preview buttons
pub const STAKE_STEP_XMRT: f64 = 100.0;

/// Source repository link shown in the footer
pub const REPO_URL: &str = "https://github.com/DevGruGold";

/// Block-explorer token link shown in the footer
pub const EXPLORER_TOKEN_URL: &str =
    "https://sepolia.etherscan.io/token/0x77307dfbc436224d5e6f2048d2b6bdfa66998a15";

/// Application name
pub const APP_NAME: &str = "MobileMonero";

/// Application tagline shown under the name
pub const APP_TAGLINE: &str = "AI-Powered Mining DAO";

/// Application version
#[allow(dead_code)]
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
