//! Các error type cho thư viện ước tính phí khởi tạo token
//!
//! Bao gồm các error type cho:
//! - Tham số bonding curve và launch config
//! - Phần trăm phí giao dịch
//! - Chain và provider
//! - Cấu hình hệ thống

use thiserror::Error;

/// Các loại lỗi có thể xảy ra khi ước tính phí khởi tạo token
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EstimateError {
    /// Giá khởi điểm không parse được hoặc <= 0
    #[error("Giá khởi điểm không hợp lệ: {0}")]
    InvalidBasePrice(String),

    /// Hệ số dốc không parse được hoặc < 0
    #[error("Hệ số dốc không hợp lệ: {0}")]
    InvalidSlope(String),

    /// Tổng cung không parse được hoặc < 0
    #[error("Tổng cung không hợp lệ: {0}")]
    InvalidSupply(String),

    /// Phần trăm phí không parse được hoặc nằm ngoài 0..=100
    #[error("Phần trăm phí không hợp lệ: {0}")]
    InvalidFeePercent(String),

    /// Lỗi khi chain không được hỗ trợ
    #[error("Chain không được hỗ trợ: {0}")]
    ChainNotSupported(String),

    /// Lỗi từ nguồn fee data (wallet provider / RPC)
    #[error("Lỗi provider: {0}")]
    ProviderError(String),

    /// Lỗi khi đọc hoặc ghi cấu hình
    #[error("Cấu hình không hợp lệ: {0}")]
    ConfigError(String),
}

impl EstimateError {
    /// Kiểm tra xem lỗi có chặn việc submit launch config hay không.
    ///
    /// Lỗi input (giá, hệ số dốc, tổng cung, phần trăm phí) phải chặn submit;
    /// lỗi provider thì không, chúng đã được hạ cấp xuống giá trị fallback.
    pub fn is_blocking(&self) -> bool {
        matches!(
            self,
            EstimateError::InvalidBasePrice(_)
                | EstimateError::InvalidSlope(_)
                | EstimateError::InvalidSupply(_)
                | EstimateError::InvalidFeePercent(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blocking_classification() {
        assert!(EstimateError::InvalidBasePrice("abc".to_string()).is_blocking());
        assert!(EstimateError::InvalidSlope("-1".to_string()).is_blocking());
        assert!(!EstimateError::ProviderError("timeout".to_string()).is_blocking());
        assert!(!EstimateError::ConfigError("yaml".to_string()).is_blocking());
    }
}
