use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::NetworkEnvironment;
use crate::constants::{FALLBACK_GAS_BNB_FAMILY, FALLBACK_GAS_ETH_FAMILY, STATIC_GAS_SOLANA};
use crate::error::EstimateError;

/// Các chain mà token launch hỗ trợ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChainId {
    /// Ethereum
    Ethereum,
    /// BNB Smart Chain
    Bsc,
    /// Base
    Base,
    /// Solana (non-EVM)
    Solana,
}

/// Họ chain, quyết định đơn vị native và giá trị fallback khi ước tính gas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GasFamily {
    /// Các chain dùng ETH làm native token (Ethereum, Base)
    Eth,
    /// Các chain dùng BNB làm native token
    Bnb,
    /// Solana, không ước tính live
    Sol,
}

impl fmt::Display for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ethereum => write!(f, "Ethereum"),
            Self::Bsc => write!(f, "BNB Smart Chain"),
            Self::Base => write!(f, "Base"),
            Self::Solana => write!(f, "Solana"),
        }
    }
}

impl ChainId {
    /// Kiểm tra xem chain có phải EVM hay không
    pub fn is_evm(&self) -> bool {
        !matches!(self, Self::Solana)
    }

    /// Ký hiệu native token của chain
    pub fn native_token(&self) -> &'static str {
        match self {
            Self::Ethereum | Self::Base => "ETH",
            Self::Bsc => "BNB",
            Self::Solana => "SOL",
        }
    }

    /// Họ chain dùng để chọn giá trị fallback
    pub fn gas_family(&self) -> GasFamily {
        match self {
            Self::Ethereum | Self::Base => GasFamily::Eth,
            Self::Bsc => GasFamily::Bnb,
            Self::Solana => GasFamily::Sol,
        }
    }

    /// Giá trị gas fallback cho chain (đơn vị native currency).
    ///
    /// Mỗi họ chain có một giá trị cố định riêng; Solana dùng giá trị
    /// cố định vì không ước tính live cho chain non-EVM.
    pub fn fallback_gas_amount(&self) -> Decimal {
        match self.gas_family() {
            GasFamily::Eth => *FALLBACK_GAS_ETH_FAMILY,
            GasFamily::Bnb => *FALLBACK_GAS_BNB_FAMILY,
            GasFamily::Sol => *STATIC_GAS_SOLANA,
        }
    }

    /// Chain ID dạng số cho môi trường tương ứng (None với chain non-EVM)
    pub fn deploy_chain_id(&self, env: NetworkEnvironment) -> Option<u64> {
        match (self, env) {
            (Self::Ethereum, NetworkEnvironment::Mainnet) => Some(1),
            (Self::Ethereum, NetworkEnvironment::Testnet) => Some(11155111),
            (Self::Bsc, NetworkEnvironment::Mainnet) => Some(56),
            (Self::Bsc, NetworkEnvironment::Testnet) => Some(97),
            (Self::Base, NetworkEnvironment::Mainnet) => Some(8453),
            (Self::Base, NetworkEnvironment::Testnet) => Some(84532),
            (Self::Solana, _) => None,
        }
    }

    /// Lấy RPC URL mặc định cho chain theo môi trường
    pub fn default_rpc_url(&self, env: NetworkEnvironment) -> &'static str {
        match (self, env) {
            (Self::Ethereum, NetworkEnvironment::Mainnet) => "https://eth.llamarpc.com",
            (Self::Ethereum, NetworkEnvironment::Testnet) => "https://rpc.sepolia.org",
            (Self::Bsc, NetworkEnvironment::Mainnet) => "https://bsc-dataseed.binance.org",
            (Self::Bsc, NetworkEnvironment::Testnet) => {
                "https://data-seed-prebsc-1-s1.binance.org:8545"
            }
            (Self::Base, NetworkEnvironment::Mainnet) => "https://mainnet.base.org",
            (Self::Base, NetworkEnvironment::Testnet) => "https://sepolia.base.org",
            (Self::Solana, NetworkEnvironment::Mainnet) => "https://api.mainnet-beta.solana.com",
            (Self::Solana, NetworkEnvironment::Testnet) => "https://api.devnet.solana.com",
        }
    }

    /// Tên ngắn gọn của chain
    pub fn short_name(&self) -> &'static str {
        match self {
            Self::Ethereum => "eth",
            Self::Bsc => "bsc",
            Self::Base => "base",
            Self::Solana => "sol",
        }
    }
}

impl FromStr for ChainId {
    type Err = EstimateError;

    /// Parse chain từ identifier mà UI gửi lên
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ethereum" | "eth" | "mainnet" => Ok(Self::Ethereum),
            "bsc" | "binance" | "bnb" => Ok(Self::Bsc),
            "base" => Ok(Self::Base),
            "solana" | "sol" => Ok(Self::Solana),
            other => Err(EstimateError::ChainNotSupported(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chain_is_evm() {
        assert!(ChainId::Ethereum.is_evm());
        assert!(ChainId::Bsc.is_evm());
        assert!(ChainId::Base.is_evm());
        assert!(!ChainId::Solana.is_evm());
    }

    #[test]
    fn test_native_token() {
        assert_eq!(ChainId::Ethereum.native_token(), "ETH");
        assert_eq!(ChainId::Base.native_token(), "ETH");
        assert_eq!(ChainId::Bsc.native_token(), "BNB");
        assert_eq!(ChainId::Solana.native_token(), "SOL");
    }

    #[test]
    fn test_deploy_chain_id() {
        assert_eq!(ChainId::Ethereum.deploy_chain_id(NetworkEnvironment::Mainnet), Some(1));
        assert_eq!(
            ChainId::Ethereum.deploy_chain_id(NetworkEnvironment::Testnet),
            Some(11155111)
        );
        assert_eq!(ChainId::Bsc.deploy_chain_id(NetworkEnvironment::Mainnet), Some(56));
        assert_eq!(ChainId::Base.deploy_chain_id(NetworkEnvironment::Mainnet), Some(8453));
        assert_eq!(ChainId::Solana.deploy_chain_id(NetworkEnvironment::Mainnet), None);
    }

    #[test]
    fn test_chain_from_str() {
        assert_eq!("ethereum".parse::<ChainId>().unwrap(), ChainId::Ethereum);
        assert_eq!("bsc".parse::<ChainId>().unwrap(), ChainId::Bsc);
        assert_eq!("BASE".parse::<ChainId>().unwrap(), ChainId::Base);
        assert_eq!("sol".parse::<ChainId>().unwrap(), ChainId::Solana);
        assert!(matches!(
            "tron".parse::<ChainId>(),
            Err(EstimateError::ChainNotSupported(_))
        ));
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&ChainId::Ethereum).unwrap();
        assert_eq!(json, "\"ethereum\"");
        let parsed: ChainId = serde_json::from_str("\"solana\"").unwrap();
        assert_eq!(parsed, ChainId::Solana);
    }
}
