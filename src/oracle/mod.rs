/// Fee data sources
///
/// Nguồn dữ liệu phí cho estimator: trait `FeeDataSource` là seam giữa
/// engine và RPC, với hai hiện thực là provider thật (`evm`) và nguồn
/// cố định phục vụ test/offline (`fixed`).

pub mod evm;
pub mod fixed;

pub use evm::ProviderFeeSource;
pub use fixed::FixedFeeSource;

// External imports
use async_trait::async_trait;
use ethers::types::U256;
use rust_decimal::Decimal;

// Internal imports
use crate::chain::ChainId;

/// Wallet-style fee data snapshot for one chain.
///
/// Any field may be absent; a sample with no usable price is valid and the
/// consumer degrades to its fallback figures.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FeeSample {
    /// Legacy gas price in wei
    pub gas_price: Option<U256>,

    /// EIP-1559 fee cap in wei
    pub max_fee_per_gas: Option<U256>,

    /// EIP-1559 priority tip in wei
    pub priority_fee_per_gas: Option<U256>,
}

impl FeeSample {
    /// Sample carrying only a legacy gas price
    pub fn from_gas_price(gas_price: U256) -> Self {
        Self {
            gas_price: Some(gas_price),
            ..Self::default()
        }
    }

    /// Per-unit price used for estimation: legacy gas price first, the
    /// EIP-1559 cap when that is absent
    pub fn effective_gas_price(&self) -> Option<U256> {
        self.gas_price.or(self.max_fee_per_gas)
    }

    /// Native-currency cost of a deployment at this sample's price.
    ///
    /// `None` when no price field is usable or the math does not fit, which
    /// the caller treats the same as a failed sample.
    pub fn deploy_cost_native(&self, gas_units: u64) -> Option<Decimal> {
        let price = self.effective_gas_price()?;
        let total_wei = price.checked_mul(U256::from(gas_units))?;
        wei_to_native(total_wei)
    }
}

/// Async seam giữa estimator và nguồn dữ liệu phí.
///
/// Lỗi trả về là anyhow bình thường; estimator mới là nơi hạ cấp lỗi thành
/// giá trị fallback, nguồn không tự che giấu lỗi.
#[async_trait]
pub trait FeeDataSource: Send + Sync + 'static {
    /// Lấy mẫu phí hiện tại cho một chain
    async fn fee_data(&self, chain: ChainId) -> anyhow::Result<FeeSample>;
}

/// Convert a wei amount into native currency units (18 decimals).
///
/// `None` when the amount exceeds what a `Decimal` mantissa can carry.
pub fn wei_to_native(wei: U256) -> Option<Decimal> {
    if wei > U256::from(u128::MAX) {
        return None;
    }
    let raw = i128::try_from(wei.as_u128()).ok()?;
    Decimal::try_from_i128_with_scale(raw, 18).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn gwei(amount: u64) -> U256 {
        U256::from(amount) * U256::exp10(9)
    }

    #[test]
    fn test_wei_to_native_one_ether() {
        let one_eth = U256::exp10(18);
        assert_eq!(wei_to_native(one_eth), Some(Decimal::ONE));
    }

    #[test]
    fn test_wei_to_native_gwei_scale() {
        // 20 gwei = 0.00000002 native
        assert_eq!(
            wei_to_native(gwei(20)),
            Some(Decimal::from_str("0.00000002").unwrap())
        );
    }

    #[test]
    fn test_wei_to_native_overflow_is_none() {
        assert_eq!(wei_to_native(U256::MAX), None);
    }

    #[test]
    fn test_effective_gas_price_prefers_legacy() {
        let sample = FeeSample {
            gas_price: Some(gwei(20)),
            max_fee_per_gas: Some(gwei(40)),
            priority_fee_per_gas: Some(gwei(2)),
        };
        assert_eq!(sample.effective_gas_price(), Some(gwei(20)));

        let sample = FeeSample {
            gas_price: None,
            max_fee_per_gas: Some(gwei(40)),
            priority_fee_per_gas: None,
        };
        assert_eq!(sample.effective_gas_price(), Some(gwei(40)));

        assert_eq!(FeeSample::default().effective_gas_price(), None);
    }

    #[test]
    fn test_deploy_cost_native() {
        // 20 gwei x 3_000_000 gas = 0.06 native
        let sample = FeeSample::from_gas_price(gwei(20));
        assert_eq!(
            sample.deploy_cost_native(3_000_000),
            Some(Decimal::from_str("0.06").unwrap())
        );
    }

    #[test]
    fn test_deploy_cost_handles_overflow() {
        let sample = FeeSample::from_gas_price(U256::MAX);
        assert_eq!(sample.deploy_cost_native(3_000_000), None);

        assert_eq!(FeeSample::default().deploy_cost_native(3_000_000), None);
    }
}
