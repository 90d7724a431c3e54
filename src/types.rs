/// Shared result types for the launch fee estimator
///
/// Everything here is derived display state: recomputed on every relevant
/// input change, never persisted, and safe to drop.

use std::collections::HashMap;
use std::fmt;

use chrono::Utc;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::chain::ChainId;
use crate::constants::QUOTE_DISPLAY_DECIMALS;

/// How a gas quote was obtained.
///
/// A quote carries its provenance separately from its value, so callers can
/// badge live numbers differently from hardcoded defaults without string
/// sniffing. Freshness is tracked at the estimate level via `generation`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuoteSource {
    /// Sampled from a live RPC provider
    Provider,
    /// Hardcoded default (per-family fallback or fixed non-EVM figure)
    StaticDefault,
}

impl QuoteSource {
    /// True when the quote came from a live provider sample
    pub fn is_live(&self) -> bool {
        matches!(self, Self::Provider)
    }
}

/// A human-displayable gas cost figure for one chain
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GasQuote {
    /// Chain the quote applies to
    pub chain: ChainId,

    /// Amount in the chain's native currency
    pub amount: Decimal,

    /// Where the amount came from
    pub source: QuoteSource,
}

impl GasQuote {
    /// Quote computed from a live provider sample
    pub fn live(chain: ChainId, amount: Decimal) -> Self {
        Self {
            chain,
            amount,
            source: QuoteSource::Provider,
        }
    }

    /// Hardcoded default quote for the chain's gas family
    pub fn static_default(chain: ChainId) -> Self {
        Self {
            chain,
            amount: chain.fallback_gas_amount(),
            source: QuoteSource::StaticDefault,
        }
    }
}

impl fmt::Display for GasQuote {
    /// Live quotes render with fixed 6-decimal precision; static defaults
    /// keep their authored form behind a `~` marker (vd: `~0.005 BNB`).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.source {
            QuoteSource::Provider => write!(
                f,
                "{:.prec$} {}",
                self.amount.round_dp(QUOTE_DISPLAY_DECIMALS),
                self.chain.native_token(),
                prec = QUOTE_DISPLAY_DECIMALS as usize
            ),
            QuoteSource::StaticDefault => {
                write!(f, "~{} {}", self.amount, self.chain.native_token())
            }
        }
    }
}

/// Kết quả ước tính phí cho một cấu hình launch.
///
/// Mọi con số ở đây chỉ mang tính hiển thị; giá trị thật do on-chain quyết
/// định tại thời điểm deploy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeeEstimate {
    /// One-time platform fee in native currency (zero on test networks)
    pub platform_fee: Decimal,

    /// Per-chain gas quotes for the selected chains
    pub gas_quotes: HashMap<ChainId, GasQuote>,

    /// Fixed cross-chain sync fee percentage; `Some` only when the launch has
    /// cross-chain sync enabled. Applies to DEX trades, not to deployment.
    pub cross_chain_sync_fee_percent: Option<Decimal>,

    /// Platform fee plus EVM gas quotes expressed in ETH terms, 6 dp.
    /// Non-EVM quotes are shown separately and excluded from this sum.
    pub total_cost_eth: Decimal,

    /// Sequence number of the refresh that produced this estimate
    pub generation: u64,

    /// Unix timestamp (seconds) when the estimate was computed
    pub computed_at: u64,
}

impl FeeEstimate {
    /// Zero-valued estimate for a launch with nothing to estimate
    pub fn empty(generation: u64) -> Self {
        Self {
            platform_fee: Decimal::ZERO,
            gas_quotes: HashMap::new(),
            cross_chain_sync_fee_percent: None,
            total_cost_eth: Decimal::ZERO,
            generation,
            computed_at: Utc::now().timestamp() as u64,
        }
    }

    /// Quote for a single chain, if it was part of the estimated set
    pub fn quote_for(&self, chain: ChainId) -> Option<&GasQuote> {
        self.gas_quotes.get(&chain)
    }

    /// Quotes that are excluded from `total_cost_eth` (non-EVM chains)
    pub fn non_evm_quotes(&self) -> Vec<&GasQuote> {
        self.gas_quotes
            .values()
            .filter(|quote| !quote.chain.is_evm())
            .collect()
    }

    /// Tổng chi phí dạng chuỗi, đánh dấu `~` vì chỉ là ước tính
    pub fn total_display(&self) -> String {
        format!(
            "~{:.prec$} ETH",
            self.total_cost_eth.round_dp(QUOTE_DISPLAY_DECIMALS),
            prec = QUOTE_DISPLAY_DECIMALS as usize
        )
    }

    /// Phí nền tảng dạng chuỗi 6 chữ số thập phân, vd `"0.000000"` trên testnet
    pub fn platform_fee_display(&self) -> String {
        format!(
            "{:.prec$}",
            self.platform_fee.round_dp(QUOTE_DISPLAY_DECIMALS),
            prec = QUOTE_DISPLAY_DECIMALS as usize
        )
    }
}

/// Fee panel summary: one-time costs next to trade-time percentages
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeeBreakdown {
    /// One-time platform fee in native currency
    pub platform_fee: Decimal,

    /// Percentage charged on curve purchases
    pub buy_fee_percent: Decimal,

    /// Percentage charged on curve sales
    pub sell_fee_percent: Decimal,

    /// Fixed sync surcharge on DEX trades when cross-chain is enabled
    pub cross_chain_sync_fee_percent: Option<Decimal>,
}
