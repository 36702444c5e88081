/// Decimal precision for serialized valuation figures
pub const DECIMAL_PRECISION: u32 = 6;

/// Decimal precision for allocation ratios
pub const RATIO_PRECISION: u32 = 4;
