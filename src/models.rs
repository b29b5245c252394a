use crate::constants::BRIDGE_RATE_ETH_TO_PI;

/// The three autonomous agents shown in the activity feed
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Agent {
    Executive,
    Operations,
    Financial,
}

impl Agent {
    pub const ALL: [Agent; 3] = [Agent::Executive, Agent::Operations, Agent::Financial];

    pub fn as_str(&self) -> &'static str {
        match self {
            Agent::Executive => "Executive",
            Agent::Operations => "Operations",
            Agent::Financial => "Financial",
        }
    }
}

/// A single entry in the agent activity feed
///
/// Entries are immutable once created; the feed replaces the whole
/// sequence on each tick rather than mutating entries in place.
#[derive(Clone, Debug)]
pub struct ActivityEntry {
    pub agent: Agent,
    pub action: String,
    pub age_label: String,
    // TODO: derive the age label from this instead of carrying literals
    #[allow(dead_code)]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl ActivityEntry {
    pub fn new(agent: Agent, action: impl Into<String>, age_label: impl Into<String>) -> Self {
        ActivityEntry {
            agent,
            action: action.into(),
            age_label: age_label.into(),
            created_at: chrono::Utc::now(),
        }
    }
}

/// Browser-wallet session state
///
/// Invariant: `address` is `Some` iff `connected` is true. The session
/// starts disconnected and is only mutated by a successful connect; there
/// is no disconnect action (matching the upstream dashboard).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WalletSession {
    pub connected: bool,
    pub address: Option<String>,
}

impl WalletSession {
    pub fn mark_connected(&mut self, address: String) {
        self.connected = true;
        self.address = Some(address);
    }
}

/// Static balance card figures from the mockup
#[derive(Clone, Debug)]
pub struct BalanceSummary {
    pub usd_balance: String,
    pub day_change_pct: f64,
    pub portfolio_usd: String,
}

impl Default for BalanceSummary {
    fn default() -> Self {
        BalanceSummary {
            usd_balance: String::from("1,234.56"),
            day_change_pct: 2.14,
            portfolio_usd: String::from("5,678.90"),
        }
    }
}

/// Static mining revenue figures from the mockup
#[derive(Clone, Debug)]
pub struct MiningStats {
    pub mined_today_xmr: f64,
    pub daily_target_pct: u16,
    pub active_miners: u32,
    pub hashrate_mhs: f64,
    pub daily_usd: f64,
}

impl Default for MiningStats {
    fn default() -> Self {
        MiningStats {
            mined_today_xmr: 0.0247,
            daily_target_pct: 67,
            active_miners: 147,
            hashrate_mhs: 2.3,
            daily_usd: 47.20,
        }
    }
}

/// Staking preview state
#[derive(Clone, Debug)]
pub struct StakingPosition {
    pub staked_xmrt: f64,
    pub apy_pct: f64,
}

impl Default for StakingPosition {
    fn default() -> Self {
        StakingPosition {
            staked_xmrt: 1_250.0,
            apy_pct: 12.5,
        }
    }
}

/// Direction of the bridge preview
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum BridgeDirection {
    #[default]
    EthToPi,
    PiToEth,
}

impl BridgeDirection {
    pub fn flip(&self) -> BridgeDirection {
        match self {
            BridgeDirection::EthToPi => BridgeDirection::PiToEth,
            BridgeDirection::PiToEth => BridgeDirection::EthToPi,
        }
    }

    pub fn from_symbol(&self) -> &'static str {
        match self {
            BridgeDirection::EthToPi => "ETH",
            BridgeDirection::PiToEth => "PI",
        }
    }

    pub fn to_symbol(&self) -> &'static str {
        match self {
            BridgeDirection::EthToPi => "PI",
            BridgeDirection::PiToEth => "ETH",
        }
    }
}

/// Bridge widget state: an editable amount and a fixed-rate quote
#[derive(Clone, Debug, Default)]
pub struct BridgeForm {
    pub amount_input: String,
    pub direction: BridgeDirection,
}

impl BridgeForm {
    /// Parsed source amount, `None` while the input is empty or invalid
    pub fn parsed_amount(&self) -> Option<f64> {
        self.amount_input.trim().parse::<f64>().ok().filter(|a| *a >= 0.0)
    }

    /// Destination amount at the fixed preview rate
    pub fn quote(&self) -> Option<f64> {
        let amount = self.parsed_amount()?;
        Some(match self.direction {
            BridgeDirection::EthToPi => amount * BRIDGE_RATE_ETH_TO_PI,
            BridgeDirection::PiToEth => amount / BRIDGE_RATE_ETH_TO_PI,
        })
    }
}

/// Seed entries shown before the first feed tick
pub fn seed_activities() -> Vec<ActivityEntry> {
    vec![
        ActivityEntry::new(Agent::Executive, "Analyzing market conditions...", "2m ago"),
        ActivityEntry::new(Agent::Operations, "Optimized mining efficiency by 12%", "5m ago"),
        ActivityEntry::new(Agent::Financial, "Rebalanced treasury allocation", "8m ago"),
    ]
}

/// The pool of synthetic actions a feed tick draws from
pub const ACTIVITY_ACTIONS: [&str; 4] = [
    "Executing autonomous decision...",
    "Monitoring network performance...",
    "Optimizing yield strategies...",
    "Processing governance proposal...",
];
