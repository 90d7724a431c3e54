/// Configuration module for the launch fee estimator
///
/// Defines the network environment switch, the user-authored token launch
/// parameters coming in from the builder UI, and the estimator's own
/// tunables with YAML load/save helpers.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::chain::ChainId;
use crate::constants::{BNB_TO_ETH_RATE, DEPLOY_GAS_UNITS, RPC_TIMEOUT_MS};
use crate::error::EstimateError;

/// Môi trường mạng được inject khi khởi tạo estimator.
///
/// Trước đây fee logic đọc hostname để đoán môi trường; giá trị này giờ được
/// truyền tường minh để hàm tính phí thuần và test được.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NetworkEnvironment {
    /// Mạng production, phí nền tảng cố định được áp dụng
    Mainnet,
    /// Mạng test, phí nền tảng bằng 0
    Testnet,
}

impl Default for NetworkEnvironment {
    fn default() -> Self {
        // Mặc định an toàn: không thu phí khi chưa cấu hình rõ
        Self::Testnet
    }
}

impl NetworkEnvironment {
    /// Kiểm tra xem môi trường có phải testnet hay không
    pub fn is_testnet(&self) -> bool {
        matches!(self, Self::Testnet)
    }
}

/// User-authored parameters for a prospective token launch.
///
/// Numeric fields are kept as decimal strings exactly as the builder UI
/// submits them; typed accessors parse and range-check on demand.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenLaunchConfig {
    /// Token name
    pub name: String,

    /// Token symbol
    pub symbol: String,

    /// Token decimals (metadata only; does not shift estimate math)
    pub decimals: u8,

    /// Initial supply as an arbitrary-precision decimal string
    pub initial_supply: String,

    /// Bonding curve starting price in native currency units
    pub base_price: String,

    /// Bonding curve slope (price increase per token sold)
    pub slope: String,

    /// Buy fee percentage applied on curve purchases
    pub buy_fee_percent: String,

    /// Sell fee percentage applied on curve sales
    pub sell_fee_percent: String,

    /// Selected deployment chains
    pub chains: Vec<ChainId>,

    /// Cross-chain price sync toggle; only meaningful with 2+ chains
    pub cross_chain_enabled: bool,
}

impl Default for TokenLaunchConfig {
    fn default() -> Self {
        Self {
            name: String::new(),
            symbol: String::new(),
            decimals: 18,
            initial_supply: "0".to_string(),
            base_price: "0.0001".to_string(),
            slope: "0".to_string(),
            buy_fee_percent: "0".to_string(),
            sell_fee_percent: "0".to_string(),
            chains: Vec::new(),
            cross_chain_enabled: false,
        }
    }
}

impl TokenLaunchConfig {
    /// Parse a launch payload submitted by the web layer.
    ///
    /// The returned config is already normalized, so the cross-chain clamp
    /// holds on intake.
    pub fn from_json_str(payload: &str) -> Result<Self, EstimateError> {
        let config: TokenLaunchConfig = serde_json::from_str(payload)
            .map_err(|e| EstimateError::ConfigError(format!("launch payload: {}", e)))?;
        Ok(config.normalized())
    }

    /// Dedup the chain set and clamp the cross-chain flag.
    ///
    /// `cross_chain_enabled` is forced to `false` whenever at most one chain
    /// is selected, regardless of its prior value. Idempotent.
    pub fn normalize(&mut self) {
        let mut seen = HashSet::new();
        self.chains.retain(|chain| seen.insert(*chain));

        if self.chains.len() <= 1 {
            self.cross_chain_enabled = false;
        }
    }

    /// Consuming variant of [`normalize`](Self::normalize)
    pub fn normalized(mut self) -> Self {
        self.normalize();
        self
    }

    /// Business-rule validation for the numeric fields.
    ///
    /// Invalid input must block submission; an empty chain set is not an
    /// error here (there is simply nothing to estimate).
    pub fn validate(&self) -> Result<(), EstimateError> {
        self.base_price_decimal()?;
        self.slope_decimal()?;
        self.initial_supply_decimal()?;
        self.buy_fee_decimal()?;
        self.sell_fee_decimal()?;
        Ok(())
    }

    /// Giá khởi điểm dạng Decimal; phải > 0
    pub fn base_price_decimal(&self) -> Result<Decimal, EstimateError> {
        let value = Decimal::from_str(self.base_price.trim())
            .map_err(|_| EstimateError::InvalidBasePrice(self.base_price.clone()))?;
        if value <= Decimal::ZERO {
            return Err(EstimateError::InvalidBasePrice(self.base_price.clone()));
        }
        Ok(value)
    }

    /// Hệ số dốc dạng Decimal; phải >= 0
    pub fn slope_decimal(&self) -> Result<Decimal, EstimateError> {
        let value = Decimal::from_str(self.slope.trim())
            .map_err(|_| EstimateError::InvalidSlope(self.slope.clone()))?;
        if value < Decimal::ZERO {
            return Err(EstimateError::InvalidSlope(self.slope.clone()));
        }
        Ok(value)
    }

    /// Tổng cung dạng Decimal; chuỗi rỗng được coi là 0
    pub fn initial_supply_decimal(&self) -> Result<Decimal, EstimateError> {
        let raw = self.initial_supply.trim();
        if raw.is_empty() {
            return Ok(Decimal::ZERO);
        }
        let value = Decimal::from_str(raw)
            .map_err(|_| EstimateError::InvalidSupply(self.initial_supply.clone()))?;
        if value < Decimal::ZERO {
            return Err(EstimateError::InvalidSupply(self.initial_supply.clone()));
        }
        Ok(value)
    }

    /// Phần trăm phí mua; phải nằm trong 0..=100
    pub fn buy_fee_decimal(&self) -> Result<Decimal, EstimateError> {
        parse_fee_percent(&self.buy_fee_percent)
    }

    /// Phần trăm phí bán; phải nằm trong 0..=100
    pub fn sell_fee_decimal(&self) -> Result<Decimal, EstimateError> {
        parse_fee_percent(&self.sell_fee_percent)
    }
}

fn parse_fee_percent(raw: &str) -> Result<Decimal, EstimateError> {
    let value = Decimal::from_str(raw.trim())
        .map_err(|_| EstimateError::InvalidFeePercent(raw.to_string()))?;
    if value < Decimal::ZERO || value > Decimal::ONE_HUNDRED {
        return Err(EstimateError::InvalidFeePercent(raw.to_string()));
    }
    Ok(value)
}

/// Estimator tunables
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EstimatorConfig {
    /// Assumed gas-unit budget for a typical token deployment transaction
    pub deploy_gas_units: u64,

    /// Timeout per provider fee-data call in milliseconds
    pub quote_timeout_ms: u64,

    /// Rough BNB -> ETH conversion used for the aggregate display figure
    pub bnb_eth_rate: Decimal,

    /// Per-chain RPC URL overrides (defaults come from the chain registry)
    pub rpc_overrides: HashMap<ChainId, String>,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            deploy_gas_units: DEPLOY_GAS_UNITS,
            quote_timeout_ms: RPC_TIMEOUT_MS,
            bnb_eth_rate: *BNB_TO_ETH_RATE,
            rpc_overrides: HashMap::new(),
        }
    }
}

impl EstimatorConfig {
    /// Load configuration from a YAML file, falling back to defaults when the
    /// file does not exist.
    pub fn load(path: &str) -> Result<Self> {
        let path_ref = Path::new(path);

        if !path_ref.exists() {
            info!("Estimator config file not found, using default configuration");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path_ref)
            .with_context(|| format!("Failed to read estimator config: {}", path))?;

        let config: EstimatorConfig =
            serde_yaml::from_str(&content).context("Failed to parse estimator config")?;

        info!("Estimator configuration loaded from {}", path);
        Ok(config)
    }

    /// Save configuration to a YAML file
    pub fn save(&self, path: &str) -> Result<()> {
        let content = serde_yaml::to_string(self).context("Failed to serialize estimator config")?;

        let path_ref = Path::new(path);
        if let Some(parent) = path_ref.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create directory: {:?}", parent))?;
            }
        }

        fs::write(path_ref, content)
            .with_context(|| format!("Failed to write estimator config: {}", path))?;

        info!("Estimator configuration saved to {}", path);
        Ok(())
    }
}
