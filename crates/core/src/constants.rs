/// Currency asset prices are denominated in. Also the session default and
/// the fallback for unknown currency codes.
pub const BASE_CURRENCY: &str = "USD";

/// Decimal precision for display
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;
