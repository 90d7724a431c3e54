/// Fee estimation engine
///
/// Engine nhận `TokenLaunchConfig`, quote gas song song cho các chain được
/// chọn và tổng hợp thành một `FeeEstimate` hiển thị được. Mọi lỗi nguồn
/// phí đều hạ cấp thành giá trị fallback; chỉ input không hợp lệ mới trả
/// về `Err`.

// External imports
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;
use futures::future::join_all;
use rust_decimal::Decimal;
use tokio::sync::RwLock;
use tracing::{debug, warn};

// Internal imports
use crate::chain::{ChainId, GasFamily};
use crate::config::{EstimatorConfig, NetworkEnvironment, TokenLaunchConfig};
use crate::constants::QUOTE_DISPLAY_DECIMALS;
use crate::error::EstimateError;
use crate::fee;
use crate::oracle::{FeeDataSource, ProviderFeeSource};
use crate::types::{FeeEstimate, GasQuote};

/// Estimation engine for launch fees across the selected chains.
///
/// Each refresh takes a monotonically increasing generation ticket; a
/// refresh that finishes after a newer one has started still returns its
/// result but never overwrites the engine's `latest` slot. Callers compare
/// an estimate against [`is_current`](Self::is_current) before trusting it
/// as display state.
pub struct FeeEstimator {
    /// Môi trường mạng, inject khi khởi tạo
    env: NetworkEnvironment,

    /// Tunables (gas budget, BNB->ETH rate, RPC overrides)
    config: EstimatorConfig,

    /// Nguồn dữ liệu phí
    fee_source: Arc<dyn FeeDataSource>,

    /// Bộ đếm thế hệ cho các lần refresh
    generation: AtomicU64,

    /// Kết quả mới nhất đã commit
    latest: RwLock<Option<FeeEstimate>>,
}

impl FeeEstimator {
    /// Engine với cấu hình mặc định và nguồn phí tuỳ ý
    pub fn new(env: NetworkEnvironment, fee_source: Arc<dyn FeeDataSource>) -> Self {
        Self::with_config(env, fee_source, EstimatorConfig::default())
    }

    /// Engine với cấu hình tuỳ chỉnh
    pub fn with_config(
        env: NetworkEnvironment,
        fee_source: Arc<dyn FeeDataSource>,
        config: EstimatorConfig,
    ) -> Self {
        Self {
            env,
            config,
            fee_source,
            generation: AtomicU64::new(0),
            latest: RwLock::new(None),
        }
    }

    /// Engine dùng JSON-RPC provider thật theo môi trường
    pub fn with_live_source(env: NetworkEnvironment) -> Self {
        let config = EstimatorConfig::default();
        let source = Arc::new(ProviderFeeSource::from_config(env, &config));
        Self::with_config(env, source, config)
    }

    /// Môi trường engine đang chạy
    pub fn environment(&self) -> NetworkEnvironment {
        self.env
    }

    /// Cấu hình engine đang dùng
    pub fn config(&self) -> &EstimatorConfig {
        &self.config
    }

    /// Recompute the fee estimate for a launch configuration.
    ///
    /// The input is normalized (chain dedup, cross-chain clamp) and
    /// validated first; invalid input returns `Err` and leaves the
    /// committed display state untouched. An empty chain set produces a
    /// zero-valued estimate, not an error. Per-chain quoting runs
    /// concurrently and failures degrade to static fallback quotes.
    pub async fn refresh(
        &self,
        launch: &TokenLaunchConfig,
    ) -> Result<FeeEstimate, EstimateError> {
        let launch = launch.clone().normalized();
        launch.validate()?;

        let ticket = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        if launch.chains.is_empty() {
            let estimate = FeeEstimate::empty(ticket);
            self.commit_if_latest(estimate.clone()).await;
            return Ok(estimate);
        }

        let quotes = join_all(
            launch
                .chains
                .iter()
                .map(|chain| self.quote_chain(*chain)),
        )
        .await;

        let mut gas_quotes = HashMap::with_capacity(quotes.len());
        for quote in quotes {
            gas_quotes.insert(quote.chain, quote);
        }

        let platform_fee = fee::platform_fee(self.env);
        let sync_fee_percent = fee::cross_chain_sync_fee_percent(&launch);

        // Tổng theo ETH: họ ETH cộng thẳng, BNB đổi theo tỷ giá gần đúng,
        // Solana hiển thị riêng không cộng vào
        let mut total = platform_fee;
        for quote in gas_quotes.values() {
            let contribution = match quote.chain.gas_family() {
                GasFamily::Eth => quote.amount,
                GasFamily::Bnb => quote.amount.saturating_mul(self.config.bnb_eth_rate),
                GasFamily::Sol => Decimal::ZERO,
            };
            total = total.saturating_add(contribution);
        }

        let estimate = FeeEstimate {
            platform_fee,
            gas_quotes,
            cross_chain_sync_fee_percent: sync_fee_percent,
            total_cost_eth: total.round_dp(QUOTE_DISPLAY_DECIMALS),
            generation: ticket,
            computed_at: Utc::now().timestamp() as u64,
        };

        self.commit_if_latest(estimate.clone()).await;
        Ok(estimate)
    }

    /// Kết quả mới nhất đã commit, nếu có
    pub async fn latest(&self) -> Option<FeeEstimate> {
        self.latest.read().await.clone()
    }

    /// True nếu estimate vẫn là thế hệ mới nhất của engine
    pub fn is_current(&self, estimate: &FeeEstimate) -> bool {
        estimate.generation == self.generation.load(Ordering::SeqCst)
    }

    /// Quote gas cho một chain; không bao giờ lỗi.
    ///
    /// Chain non-EVM dùng con số cố định. Chain EVM thử lấy mẫu phí live;
    /// mọi thất bại (lỗi nguồn, timeout, mẫu không dùng được, tràn số) rơi
    /// về giá trị fallback theo họ chain.
    async fn quote_chain(&self, chain: ChainId) -> GasQuote {
        if !chain.is_evm() {
            return GasQuote::static_default(chain);
        }

        match self.fee_source.fee_data(chain).await {
            Ok(sample) => match sample.deploy_cost_native(self.config.deploy_gas_units) {
                Some(amount) => {
                    debug!("Live gas quote for chain {}: {} native", chain, amount);
                    GasQuote::live(chain, amount.round_dp(QUOTE_DISPLAY_DECIMALS))
                }
                None => {
                    warn!(
                        "Fee sample for chain {} has no usable price, using fallback quote",
                        chain
                    );
                    GasQuote::static_default(chain)
                }
            },
            Err(e) => {
                warn!(
                    "Failed to fetch fee data for chain {}: {}, using fallback quote",
                    chain, e
                );
                GasQuote::static_default(chain)
            }
        }
    }

    /// Commit kết quả vào slot `latest` nếu nó vẫn là thế hệ mới nhất
    async fn commit_if_latest(&self, estimate: FeeEstimate) {
        let mut latest = self.latest.write().await;
        if self.generation.load(Ordering::SeqCst) == estimate.generation {
            debug!("Committed fee estimate generation {}", estimate.generation);
            *latest = Some(estimate);
        } else {
            debug!(
                "Discarded stale fee estimate generation {}",
                estimate.generation
            );
        }
    }
}
