//! Pricing and commission business rules
//!
//! Single source of truth for the per-grade rate table and the commission
//! split. Pure functions, no I/O.

use rust_decimal::Decimal;

use crate::models::Grade;

/// Platform commission on gross sale revenue, in percent
pub const DEFAULT_COMMISSION_RATE: Decimal = Decimal::from_parts(5, 0, 0, false, 0);

/// Per-liter price for a quality grade, in currency units.
/// Fixed table: A=55, B=50, C=45.
pub fn price_for_grade(grade: Grade) -> Decimal {
    match grade {
        Grade::A => Decimal::from(55),
        Grade::B => Decimal::from(50),
        Grade::C => Decimal::from(45),
    }
}

/// Total price of a delivery: quantity x per-grade rate
pub fn total_price(quantity: Decimal, grade: Grade) -> Decimal {
    quantity * price_for_grade(grade)
}

/// The cooperative's cut of gross revenue at the given percent rate
pub fn commission(revenue: Decimal, rate: Decimal) -> Decimal {
    revenue * rate / Decimal::from(100)
}

/// Revenue remaining after commission
pub fn net_revenue(revenue: Decimal, rate: Decimal) -> Decimal {
    revenue - commission(revenue, rate)
}

/// Average quality score over a set of deliveries (A=3, B=2, C=1).
/// Returns 0.0 for an empty set.
pub fn average_quality(grades: &[Grade]) -> f64 {
    if grades.is_empty() {
        return 0.0;
    }
    let sum: u32 = grades.iter().map(|g| u32::from(g.score())).sum();
    f64::from(sum) / grades.len() as f64
}
