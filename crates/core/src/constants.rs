use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Decimal precision for intermediate money calculations
pub const DECIMAL_PRECISION: u32 = 6;

/// Decimal precision for displayed percentages
pub const PERCENT_PRECISION: u32 = 1;

/// Months in a contract year, as Decimal for installment math
pub const MONTHS_PER_YEAR: Decimal = dec!(12);

pub const HUNDRED: Decimal = dec!(100);

/// Currency all monetary fields are denominated in
pub const BASE_CURRENCY: &str = "IDR";
