/// Bonding curve price models
///
/// Display-grade price math for the launch preview. The authoritative curve
/// lives on-chain; these figures are advisory and must never panic, so all
/// arithmetic saturates instead of overflowing.

pub mod linear;

pub use linear::LinearCurve;

use rust_decimal::Decimal;

/// Price model for a token sale curve.
///
/// `supply_sold` is the amount of tokens already sold into the curve.
/// Implementations clamp negative inputs to zero.
pub trait PriceCurve {
    /// Giá tức thời tại mức cung đã bán
    fn spot_price(&self, supply_sold: Decimal) -> Decimal;

    /// Cumulative cost of buying `quantity` tokens starting from
    /// `supply_sold` (closed-form integral of the spot price)
    fn purchase_cost(&self, supply_sold: Decimal, quantity: Decimal) -> Decimal;
}
