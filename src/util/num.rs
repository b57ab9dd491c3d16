/// Number of bits in the integer operand view.
const VIEW_BITS: i64 = 64;

/// Truncates a floating-point operand to its integer view.
///
/// Fractions are discarded toward zero. Values outside the `i64` range
/// saturate and `NaN` becomes `0`, so the view is always defined.
///
/// ## Example
/// ```
/// use infix_tree::util::num::truncate;
///
/// assert_eq!(truncate(7.9), 7);
/// assert_eq!(truncate(-7.9), -7);
/// assert_eq!(truncate(f64::NAN), 0);
/// assert_eq!(truncate(1e300), i64::MAX);
/// ```
#[allow(clippy::cast_possible_truncation)]
#[must_use]
pub fn truncate(value: f64) -> i64 {
    value as i64
}

/// Converts an integer view back to the host type.
///
/// Magnitudes above `2^53` round to the nearest representable `f64`.
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn widen(value: i64) -> f64 {
    value as f64
}

/// Converts a truth value to `1.0` or `0.0`.
#[must_use]
pub fn from_bool(value: bool) -> f64 {
    f64::from(u8::from(value))
}

/// Shifts `value` left by `amount` bits.
///
/// Negative amounts and amounts of 64 or more shift every bit out and yield
/// `0`.
///
/// ## Example
/// ```
/// use infix_tree::util::num::shift_left;
///
/// assert_eq!(shift_left(1, 4), 16);
/// assert_eq!(shift_left(1, 64), 0);
/// assert_eq!(shift_left(1, -1), 0);
/// ```
#[must_use]
pub fn shift_left(value: i64, amount: i64) -> i64 {
    u32::try_from(amount).ok()
                         .and_then(|amount| value.checked_shl(amount))
                         .unwrap_or(0)
}

/// Arithmetic right shift of `value` by `amount` bits.
///
/// Negative amounts and amounts of 64 or more leave only the sign fill:
/// `0` for non-negative values and `-1` for negative ones.
///
/// ## Example
/// ```
/// use infix_tree::util::num::shift_right;
///
/// assert_eq!(shift_right(64, 3), 8);
/// assert_eq!(shift_right(-64, 100), -1);
/// assert_eq!(shift_right(64, 100), 0);
/// ```
#[must_use]
pub fn shift_right(value: i64, amount: i64) -> i64 {
    if (0..VIEW_BITS).contains(&amount) {
        value >> amount
    } else {
        value >> (VIEW_BITS - 1)
    }
}
