/// Platform fee and fee panel calculations
///
/// Mọi hàm ở đây đều thuần: môi trường mạng được truyền vào tường minh,
/// không đọc từ biến toàn cục hay hostname.

use rust_decimal::Decimal;

use crate::config::{NetworkEnvironment, TokenLaunchConfig};
use crate::constants::{CROSS_CHAIN_SYNC_FEE_PERCENT, PLATFORM_FEE_MAINNET};
use crate::error::EstimateError;
use crate::types::FeeBreakdown;

/// One-time platform fee for a launch, in native currency units.
///
/// Flat per environment: zero on test networks, the fixed mainnet constant
/// otherwise. Intentionally independent of supply, price and every other
/// curve parameter; an earlier percentage-of-theoretical-supply model was
/// dropped because it overshot real costs by orders of magnitude.
pub fn platform_fee(env: NetworkEnvironment) -> Decimal {
    if env.is_testnet() {
        Decimal::ZERO
    } else {
        *PLATFORM_FEE_MAINNET
    }
}

/// Fixed sync surcharge percentage, present only when the launch actually
/// spans multiple chains with sync enabled. Applies to DEX trades, not to
/// the deployment itself.
pub fn cross_chain_sync_fee_percent(launch: &TokenLaunchConfig) -> Option<Decimal> {
    if launch.cross_chain_enabled && launch.chains.len() > 1 {
        Some(*CROSS_CHAIN_SYNC_FEE_PERCENT)
    } else {
        None
    }
}

/// Fee panel summary for a launch: one-time platform fee next to the
/// trade-time percentages.
pub fn fee_breakdown(
    launch: &TokenLaunchConfig,
    env: NetworkEnvironment,
) -> Result<FeeBreakdown, EstimateError> {
    Ok(FeeBreakdown {
        platform_fee: platform_fee(env),
        buy_fee_percent: launch.buy_fee_decimal()?,
        sell_fee_percent: launch.sell_fee_decimal()?,
        cross_chain_sync_fee_percent: cross_chain_sync_fee_percent(launch),
    })
}
