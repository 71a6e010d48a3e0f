/// Basis-point denominator used for fee calculations (10_000 = 100%).
pub const BPS_DENOMINATOR: i128 = 10_000;

pub struct SafeMath;

impl SafeMath {
    /// `unit * quantity`, or `None` on overflow.
    pub fn mul_quantity(unit: i128, quantity: u32) -> Option<i128> {
        unit.checked_mul(quantity as i128)
    }

    /// Fee share of `amount` at `fee_bps` basis points, rounded down.
    pub fn bps_of(amount: i128, fee_bps: u32) -> Option<i128> {
        amount
            .checked_mul(fee_bps as i128)?
            .checked_div(BPS_DENOMINATOR)
    }

    /// `a + b` for counters, or `None` on overflow.
    pub fn add_u32(a: u32, b: u32) -> Option<u32> {
        a.checked_add(b)
    }
}
