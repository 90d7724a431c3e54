//! 🧭 Entry Point: Đây là manifest chính chứa toàn bộ module của dự án launchfee.
//! Mỗi file là một đơn vị rõ ràng: `chain`, `config`, `curve`, `oracle`, `estimator`, `fee`, `error`.
//! Bot hãy bắt đầu từ đây để resolve module path chính xác.
//! Được dùng làm tài liệu tham chiếu khi import từ domain khác (ví dụ: snipebot, frontend API).

/*
    launchfee/
    ├── Cargo.toml                 -> Cấu hình dependencies
    ├── manifest.rs                -> Tài liệu tham chiếu module path [liên quan: tất cả các module, BẮT BUỘC đọc đầu tiên]
    ├── src/lib.rs                 -> Entry point cho thư viện, re-export API công khai [liên quan: tất cả các module]
    ├── src/error.rs               -> Định nghĩa EstimateError cho toàn bộ domain, phân loại lỗi chặn submit [liên quan: config.rs, curve/, estimator.rs]
    ├── src/constants.rs           -> Các hằng số phí và gas (phí nền tảng mainnet, tỷ giá BNB->ETH, fallback theo họ chain, gas budget deploy) [liên quan: chain.rs, fee.rs, estimator.rs]
    ├── src/chain.rs               -> Định nghĩa ChainId, GasFamily và các thông tin liên quan đến chain (RPC URLs, chain id theo môi trường, native token) [liên quan: config.rs, oracle/, estimator.rs]
    ├── src/config.rs              -> NetworkEnvironment, TokenLaunchConfig (normalize/validate) và EstimatorConfig với load/save YAML [liên quan: chain.rs, estimator.rs]
    ├── src/types.rs               -> Các kiểu kết quả (FeeEstimate, GasQuote, QuoteSource, FeeBreakdown) với format hiển thị [liên quan: estimator.rs, fee.rs]
    ├── src/fee.rs                 -> Phí nền tảng theo môi trường và fee panel breakdown, hàm thuần [liên quan: config.rs, types.rs]
    ├── src/curve/                 -> Mô hình giá bonding curve cho preview
    │   ├── mod.rs                 -> Trait PriceCurve và khai báo submodule [liên quan: linear.rs]
    │   └── linear.rs              -> LinearCurve: giá tuyến tính theo cung đã bán, chi phí mua tích lũy, số học saturating [liên quan: mod.rs, config.rs]
    ├── src/oracle/                -> Nguồn dữ liệu phí cho estimator
    │   ├── mod.rs                 -> FeeSample, trait FeeDataSource và chuyển đổi wei -> native [liên quan: evm.rs, fixed.rs, estimator.rs]
    │   ├── evm.rs                 -> ProviderFeeSource: JSON-RPC provider thật với cache provider theo chain và timeout [liên quan: mod.rs, chain.rs, config.rs]
    │   └── fixed.rs               -> FixedFeeSource: mẫu phí cố định cho test và chế độ offline [liên quan: mod.rs]
    ├── src/estimator.rs           -> FeeEstimator: engine quote song song theo chain, generation ticket chống kết quả cũ, tổng hợp theo ETH [liên quan: oracle/, fee.rs, types.rs]
    └── tests/
        └── estimator_tests.rs     -> Integration tests cho toàn bộ luồng ước tính [liên quan: estimator.rs, oracle/fixed.rs]
*/
