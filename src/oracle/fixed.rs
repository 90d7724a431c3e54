use std::collections::HashMap;

use anyhow::{bail, Result};
use async_trait::async_trait;
use ethers::types::U256;

use crate::chain::ChainId;
use crate::oracle::{FeeDataSource, FeeSample};

/// Deterministic fee source with preset samples per chain.
///
/// Serves as the providerless default and as the test stand-in. A chain
/// without a preset sample yields an error, so degradation paths stay
/// exercisable offline.
#[derive(Debug, Clone)]
pub struct FixedFeeSource {
    samples: HashMap<ChainId, FeeSample>,
}

impl FixedFeeSource {
    /// Empty source; every query fails until samples are added
    pub fn new() -> Self {
        Self {
            samples: HashMap::new(),
        }
    }

    /// Preset resembling quiet network conditions: 20 gwei on Ethereum,
    /// 3 gwei on BSC, 0.05 gwei on Base
    pub fn typical() -> Self {
        let gwei = U256::exp10(9);
        Self::new()
            .with_gas_price(ChainId::Ethereum, U256::from(20u64) * gwei)
            .with_gas_price(ChainId::Bsc, U256::from(3u64) * gwei)
            .with_gas_price(ChainId::Base, gwei / U256::from(20u64))
    }

    /// Thêm mẫu chỉ có gas price legacy cho một chain
    pub fn with_gas_price(mut self, chain: ChainId, gas_price: U256) -> Self {
        self.samples.insert(chain, FeeSample::from_gas_price(gas_price));
        self
    }

    /// Thêm mẫu phí đầy đủ cho một chain
    pub fn with_sample(mut self, chain: ChainId, sample: FeeSample) -> Self {
        self.samples.insert(chain, sample);
        self
    }
}

impl Default for FixedFeeSource {
    /// The `typical` preset, so a source-less estimator still quotes
    fn default() -> Self {
        Self::typical()
    }
}

#[async_trait]
impl FeeDataSource for FixedFeeSource {
    async fn fee_data(&self, chain: ChainId) -> Result<FeeSample> {
        match self.samples.get(&chain) {
            Some(sample) => Ok(*sample),
            None => bail!("Không có mẫu phí cố định cho chain {}", chain),
        }
    }
}
