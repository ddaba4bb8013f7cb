//! Fixed-point price conversion.
//!
//! All maths is integer only. Results are truncated toward zero so a conversion can
//! never issue more than the exact price allows. Decimal alignment multiplies or
//! divides by the precision difference only, so intermediate values stay as small
//! as the less precise token permits.

use crate::types::{ConversionRate, Precision, MAX_DECIMALS, RATE_SCALE};
use crate::MigrationError;

impl ConversionRate {
    pub fn validate(&self) -> Result<(), MigrationError> {
        if self.reference_per_source <= 0 || self.destination_per_source <= 0 {
            return Err(MigrationError::InvalidRate);
        }
        Ok(())
    }

    /// Destination units owed for `source_amount` source units.
    pub fn destination_for_source(
        &self,
        source_amount: i128,
        precision: &Precision,
    ) -> Result<i128, MigrationError> {
        scale(
            source_amount,
            self.destination_per_source,
            RATE_SCALE,
            precision.source,
            precision.destination,
        )
    }

    /// Source units bought by `stable_amount` stable units.
    pub fn source_for_reference(
        &self,
        stable_amount: i128,
        stable_decimals: u32,
        source_decimals: u32,
    ) -> Result<i128, MigrationError> {
        scale(
            stable_amount,
            RATE_SCALE,
            self.reference_per_source,
            stable_decimals,
            source_decimals,
        )
    }
}

impl Precision {
    pub fn validate(&self) -> Result<(), MigrationError> {
        let stable_ok = self.stable.map_or(true, |d| d <= MAX_DECIMALS);
        if self.source > MAX_DECIMALS || self.destination > MAX_DECIMALS || !stable_ok {
            return Err(MigrationError::InvalidDecimals);
        }
        Ok(())
    }
}

/// `amount * numerator / denominator`, re-expressed from `from_decimals` to
/// `to_decimals`, truncated.
fn scale(
    amount: i128,
    numerator: i128,
    denominator: i128,
    from_decimals: u32,
    to_decimals: u32,
) -> Result<i128, MigrationError> {
    let (up, down) = if to_decimals >= from_decimals {
        (pow10(to_decimals - from_decimals)?, 1)
    } else {
        (1, pow10(from_decimals - to_decimals)?)
    };

    let product = amount
        .checked_mul(numerator)
        .and_then(|v| v.checked_mul(up))
        .ok_or(MigrationError::ArithmeticOverflow)?;
    let divisor = denominator
        .checked_mul(down)
        .ok_or(MigrationError::ArithmeticOverflow)?;

    if divisor == 0 {
        return Err(MigrationError::InvalidRate);
    }
    Ok(product / divisor)
}

fn pow10(exp: u32) -> Result<i128, MigrationError> {
    10i128
        .checked_pow(exp)
        .ok_or(MigrationError::ArithmeticOverflow)
}
