use rust_decimal::Decimal;

use crate::config::TokenLaunchConfig;
use crate::curve::PriceCurve;
use crate::error::EstimateError;

/// Linear bonding curve: `price(s) = base_price + slope * s`.
///
/// `slope = 0` degenerates to a fixed-price sale. There is no client-side
/// supply cap; graduation thresholds are handled elsewhere.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearCurve {
    /// Starting price in native currency units
    pub base_price: Decimal,

    /// Price increase per token sold
    pub slope: Decimal,
}

impl LinearCurve {
    /// Build a curve from decimal strings as submitted by the UI.
    ///
    /// `base_price` must be > 0 and `slope` must be >= 0; violations block
    /// submission upstream.
    pub fn from_params(base_price: &str, slope: &str) -> Result<Self, EstimateError> {
        let base = base_price
            .trim()
            .parse::<Decimal>()
            .map_err(|_| EstimateError::InvalidBasePrice(base_price.to_string()))?;
        if base <= Decimal::ZERO {
            return Err(EstimateError::InvalidBasePrice(base_price.to_string()));
        }

        let slope_value = slope
            .trim()
            .parse::<Decimal>()
            .map_err(|_| EstimateError::InvalidSlope(slope.to_string()))?;
        if slope_value < Decimal::ZERO {
            return Err(EstimateError::InvalidSlope(slope.to_string()));
        }

        Ok(Self {
            base_price: base,
            slope: slope_value,
        })
    }

    /// Curve for a launch config's pricing fields
    pub fn try_from_launch(config: &TokenLaunchConfig) -> Result<Self, EstimateError> {
        Ok(Self {
            base_price: config.base_price_decimal()?,
            slope: config.slope_decimal()?,
        })
    }
}

impl PriceCurve for LinearCurve {
    fn spot_price(&self, supply_sold: Decimal) -> Decimal {
        // Cung âm không có ý nghĩa, coi như 0
        let supply = supply_sold.max(Decimal::ZERO);
        self.base_price.saturating_add(self.slope.saturating_mul(supply))
    }

    fn purchase_cost(&self, supply_sold: Decimal, quantity: Decimal) -> Decimal {
        let supply = supply_sold.max(Decimal::ZERO);
        let quantity = quantity.max(Decimal::ZERO);

        // ∫ (b + m·x) dx trên [s, s+q] = b·q + m·(s·q + q²/2)
        let flat = self.base_price.saturating_mul(quantity);
        let ramp = supply
            .saturating_mul(quantity)
            .saturating_add(quantity.saturating_mul(quantity) / Decimal::TWO);
        flat.saturating_add(self.slope.saturating_mul(ramp))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_spot_price_formula() {
        let curve = LinearCurve::from_params("0.0001", "0.00001").unwrap();

        assert_eq!(curve.spot_price(Decimal::ZERO), dec("0.0001"));
        assert_eq!(curve.spot_price(dec("1000")), dec("0.0101"));
        assert_eq!(curve.spot_price(dec("1")), dec("0.00011"));
    }

    #[test]
    fn test_zero_slope_is_fixed_price() {
        let curve = LinearCurve::from_params("0.5", "0").unwrap();

        assert_eq!(curve.spot_price(Decimal::ZERO), dec("0.5"));
        assert_eq!(curve.spot_price(dec("1000000")), dec("0.5"));
    }

    #[test]
    fn test_price_is_monotonically_non_decreasing() {
        let curve = LinearCurve::from_params("0.0001", "0.00001").unwrap();

        let mut previous = Decimal::MIN;
        for supply in ["0", "1", "10", "999", "1000", "5000000"] {
            let price = curve.spot_price(dec(supply));
            assert!(price >= previous, "Giá phải không giảm khi cung tăng");
            previous = price;
        }
    }

    #[test]
    fn test_purchase_cost_is_integral_of_spot() {
        // b=2, m=1: [2x + x²/2] từ 5 đến 15 = 142.5 - 22.5 = 120
        let curve = LinearCurve {
            base_price: dec("2"),
            slope: dec("1"),
        };
        assert_eq!(curve.purchase_cost(dec("5"), dec("10")), dec("120"));
        assert_eq!(curve.purchase_cost(Decimal::ZERO, dec("10")), dec("70"));
    }

    #[test]
    fn test_purchase_cost_zero_slope() {
        let curve = LinearCurve {
            base_price: dec("1"),
            slope: Decimal::ZERO,
        };
        assert_eq!(curve.purchase_cost(Decimal::ZERO, dec("42")), dec("42"));
    }

    #[test]
    fn test_negative_inputs_clamped() {
        let curve = LinearCurve::from_params("0.0001", "0.00001").unwrap();
        assert_eq!(curve.spot_price(dec("-5")), curve.spot_price(Decimal::ZERO));
        assert_eq!(curve.purchase_cost(dec("-5"), dec("-1")), Decimal::ZERO);
    }

    #[test]
    fn test_extreme_values_saturate_instead_of_panicking() {
        let curve = LinearCurve {
            base_price: Decimal::MAX,
            slope: Decimal::MAX,
        };
        let price = curve.spot_price(Decimal::MAX);
        assert_eq!(price, Decimal::MAX);

        let cost = curve.purchase_cost(Decimal::MAX, Decimal::MAX);
        assert_eq!(cost, Decimal::MAX);
    }

    #[test]
    fn test_from_params_rejects_invalid_input() {
        assert!(matches!(
            LinearCurve::from_params("0", "0.1"),
            Err(EstimateError::InvalidBasePrice(_))
        ));
        assert!(matches!(
            LinearCurve::from_params("-0.1", "0.1"),
            Err(EstimateError::InvalidBasePrice(_))
        ));
        assert!(matches!(
            LinearCurve::from_params("abc", "0.1"),
            Err(EstimateError::InvalidBasePrice(_))
        ));
        assert!(matches!(
            LinearCurve::from_params("0.1", "-1"),
            Err(EstimateError::InvalidSlope(_))
        ));
        assert!(matches!(
            LinearCurve::from_params("0.1", "xyz"),
            Err(EstimateError::InvalidSlope(_))
        ));
    }
}
