// launchfee/src/lib.rs

//! Ước tính phí khởi tạo token đa chain cho DiamondChain
//!
//! Cung cấp ước tính phí nền tảng, gas deploy theo từng chain và giá
//! bonding curve cho màn hình tạo token. Mọi con số chỉ mang tính hiển
//! thị; giá trị thật do on-chain quyết định tại thời điểm deploy.

// Re-export toàn bộ API công khai
pub use crate::chain::{ChainId, GasFamily};
pub use crate::config::{EstimatorConfig, NetworkEnvironment, TokenLaunchConfig};
pub use crate::curve::{LinearCurve, PriceCurve};
pub use crate::error::EstimateError;
pub use crate::estimator::FeeEstimator;
pub use crate::fee::{cross_chain_sync_fee_percent, fee_breakdown, platform_fee};
pub use crate::oracle::{FeeDataSource, FeeSample, FixedFeeSource, ProviderFeeSource};
pub use crate::types::{FeeBreakdown, FeeEstimate, GasQuote, QuoteSource};

// Export các module chính
pub mod chain;
pub mod config;
pub mod constants;
pub mod curve;
pub mod error;
pub mod estimator;
pub mod fee;
pub mod oracle;
pub mod types;

use std::sync::Arc;

// Một số cấu hình mẫu
pub const DEFAULT_ENVIRONMENT: NetworkEnvironment = NetworkEnvironment::Testnet;

// Các helper functions
pub fn init_estimator(env: NetworkEnvironment) -> FeeEstimator {
    FeeEstimator::with_live_source(env)
}

pub fn offline_estimator(env: NetworkEnvironment) -> FeeEstimator {
    FeeEstimator::new(env, Arc::new(FixedFeeSource::typical()))
}
