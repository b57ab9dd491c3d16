/// Numeric conversion helpers.
///
/// This module provides the integer views that logical and bitwise operators
/// work on, shift helpers that never panic, and the conversions back to the
/// floating-point host type.
pub mod num;
