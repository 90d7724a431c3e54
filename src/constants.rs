//! Các hằng số cho thư viện ước tính phí
//!
//! Bao gồm các hằng số cho:
//! - Phí nền tảng một lần khi tạo token
//! - Phí đồng bộ giá cross-chain
//! - Ngân sách gas giả định cho giao dịch deploy
//! - Giá trị fallback cho từng họ chain
//! - Timeout cho các cuộc gọi provider

use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Phí nền tảng một lần trên mạng production (đơn vị native currency).
///
/// Cố ý không phụ thuộc vào supply hay tham số curve; mô hình phí theo
/// phần trăm tổng cung lý thuyết đã bị loại bỏ.
pub static PLATFORM_FEE_MAINNET: Lazy<Decimal> = Lazy::new(|| Decimal::from_str("0.01").unwrap_or_else(|e| { tracing::error!("Failed to parse PLATFORM_FEE_MAINNET: {}", e); Decimal::ZERO }));

/// Phí đồng bộ giá cross-chain (%), chỉ áp dụng khi token bật cross-chain
/// và giao dịch diễn ra trên DEX.
pub static CROSS_CHAIN_SYNC_FEE_PERCENT: Lazy<Decimal> = Lazy::new(|| Decimal::from_str("0.5").unwrap_or_else(|e| { tracing::error!("Failed to parse CROSS_CHAIN_SYNC_FEE_PERCENT: {}", e); Decimal::ZERO }));

/// Tỷ giá quy đổi BNB -> ETH dùng cho tổng chi phí hiển thị.
///
/// Đây là hằng số ước lượng thô, không phải tỷ giá live.
pub static BNB_TO_ETH_RATE: Lazy<Decimal> = Lazy::new(|| Decimal::from_str("0.3").unwrap_or_else(|e| { tracing::error!("Failed to parse BNB_TO_ETH_RATE: {}", e); Decimal::ZERO }));

/// Giá trị fallback cho họ chain dùng ETH làm native token (Ethereum, Base).
pub static FALLBACK_GAS_ETH_FAMILY: Lazy<Decimal> = Lazy::new(|| Decimal::from_str("0.002").unwrap_or_else(|e| { tracing::error!("Failed to parse FALLBACK_GAS_ETH_FAMILY: {}", e); Decimal::ZERO }));

/// Giá trị fallback cho họ chain dùng BNB làm native token.
pub static FALLBACK_GAS_BNB_FAMILY: Lazy<Decimal> = Lazy::new(|| Decimal::from_str("0.005").unwrap_or_else(|e| { tracing::error!("Failed to parse FALLBACK_GAS_BNB_FAMILY: {}", e); Decimal::ZERO }));

/// Giá trị cố định cho Solana; không ước tính live cho chain non-EVM.
pub static STATIC_GAS_SOLANA: Lazy<Decimal> = Lazy::new(|| Decimal::from_str("0.01").unwrap_or_else(|e| { tracing::error!("Failed to parse STATIC_GAS_SOLANA: {}", e); Decimal::ZERO }));

/// Ngân sách gas giả định cho một giao dịch deploy token điển hình
/// (factory + curve setup).
pub const DEPLOY_GAS_UNITS: u64 = 3_000_000;

/// Timeout cho mỗi cuộc gọi lấy fee data từ provider (ms)
pub const RPC_TIMEOUT_MS: u64 = 5000;

/// Số chữ số thập phân khi hiển thị các giá trị ước tính
pub const QUOTE_DISPLAY_DECIMALS: u32 = 6;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants_parse() {
        assert!(*PLATFORM_FEE_MAINNET > Decimal::ZERO);
        assert_eq!(*CROSS_CHAIN_SYNC_FEE_PERCENT, Decimal::from_str("0.5").unwrap());
        assert_eq!(*BNB_TO_ETH_RATE, Decimal::from_str("0.3").unwrap());
        assert!(*FALLBACK_GAS_ETH_FAMILY > Decimal::ZERO);
        assert!(*FALLBACK_GAS_BNB_FAMILY > Decimal::ZERO);
        assert!(*STATIC_GAS_SOLANA > Decimal::ZERO);
    }
}
