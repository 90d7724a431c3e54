// External imports
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use ethers::providers::{Http, Middleware, Provider};
use tokio::sync::RwLock;
use tokio::time::timeout;
use tracing::debug;

// Internal imports
use crate::chain::ChainId;
use crate::config::{EstimatorConfig, NetworkEnvironment};
use crate::oracle::{FeeDataSource, FeeSample};

/// Nguồn dữ liệu phí dựa trên JSON-RPC provider thật.
///
/// Provider cho mỗi chain EVM được tạo lười và cache lại cho các lần gọi
/// sau. Mọi call đều chạy dưới timeout; timeout hay lỗi RPC trả về `Err`
/// bình thường, việc hạ cấp thành fallback là trách nhiệm của estimator.
pub struct ProviderFeeSource {
    /// Môi trường quyết định RPC URL mặc định cho từng chain
    env: NetworkEnvironment,

    /// RPC URL override theo chain, ưu tiên hơn URL mặc định
    rpc_overrides: HashMap<ChainId, String>,

    /// Timeout cho mỗi RPC call (ms)
    timeout_ms: u64,

    /// Cache provider theo chain
    providers: RwLock<HashMap<ChainId, Arc<Provider<Http>>>>,
}

impl ProviderFeeSource {
    /// Tạo nguồn phí với cấu hình mặc định
    pub fn new(env: NetworkEnvironment) -> Self {
        Self::from_config(env, &EstimatorConfig::default())
    }

    /// Tạo nguồn phí với RPC override và timeout lấy từ cấu hình estimator
    pub fn from_config(env: NetworkEnvironment, config: &EstimatorConfig) -> Self {
        Self {
            env,
            rpc_overrides: config.rpc_overrides.clone(),
            timeout_ms: config.quote_timeout_ms,
            providers: RwLock::new(HashMap::new()),
        }
    }

    /// RPC URL sẽ dùng cho một chain (override trước, mặc định sau)
    pub fn rpc_url(&self, chain: ChainId) -> &str {
        self.rpc_overrides
            .get(&chain)
            .map(String::as_str)
            .unwrap_or_else(|| chain.default_rpc_url(self.env))
    }

    /// Lấy provider đã cache hoặc tạo mới cho chain
    async fn get_or_create_provider(&self, chain: ChainId) -> Result<Arc<Provider<Http>>> {
        {
            let providers = self.providers.read().await;
            if let Some(provider) = providers.get(&chain) {
                return Ok(Arc::clone(provider));
            }
        }

        let url = self.rpc_url(chain).to_string();
        let provider = Provider::<Http>::try_from(url.as_str())
            .with_context(|| format!("Không thể tạo provider cho chain {} từ {}", chain, url))?;
        let provider = Arc::new(provider);

        debug!("Created provider for chain {} at {}", chain, url);

        let mut providers = self.providers.write().await;
        let entry = providers
            .entry(chain)
            .or_insert_with(|| Arc::clone(&provider));
        Ok(Arc::clone(entry))
    }
}

#[async_trait]
impl FeeDataSource for ProviderFeeSource {
    async fn fee_data(&self, chain: ChainId) -> Result<FeeSample> {
        if !chain.is_evm() {
            bail!("Chain {} không có JSON-RPC provider EVM", chain);
        }

        let provider = self.get_or_create_provider(chain).await?;

        let gas_price = timeout(
            Duration::from_millis(self.timeout_ms),
            provider.get_gas_price(),
        )
        .await
        .with_context(|| format!("Timeout khi lấy gas price cho chain {}", chain))?
        .with_context(|| format!("Lỗi khi lấy gas price cho chain {}", chain))?;

        debug!("Gas price for chain {}: {} wei", chain, gas_price);

        Ok(FeeSample::from_gas_price(gas_price))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rpc_url_prefers_override() {
        let mut config = EstimatorConfig::default();
        config
            .rpc_overrides
            .insert(ChainId::Bsc, "http://localhost:8545".to_string());

        let source = ProviderFeeSource::from_config(NetworkEnvironment::Testnet, &config);
        assert_eq!(source.rpc_url(ChainId::Bsc), "http://localhost:8545");
        assert_eq!(
            source.rpc_url(ChainId::Ethereum),
            ChainId::Ethereum.default_rpc_url(NetworkEnvironment::Testnet)
        );
    }

    #[tokio::test]
    async fn test_fee_data_rejects_non_evm_chain() {
        let source = ProviderFeeSource::new(NetworkEnvironment::Testnet);
        let result = source.fee_data(ChainId::Solana).await;
        assert!(result.is_err(), "Solana không được query qua provider EVM");
    }

    #[tokio::test]
    async fn test_invalid_override_url_is_error() {
        let mut config = EstimatorConfig::default();
        config
            .rpc_overrides
            .insert(ChainId::Ethereum, "not a url".to_string());

        let source = ProviderFeeSource::from_config(NetworkEnvironment::Testnet, &config);
        let result = source.fee_data(ChainId::Ethereum).await;
        assert!(result.is_err());
    }
}
