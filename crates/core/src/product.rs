//! Field constraints of the `products` table.
//!
//! PostgreSQL enforces these through the column types. The in-memory store
//! uses [`check_columns`] so that both stores reject the same input.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::CoreError;

/// Entity name used in not-found errors.
pub const ENTITY: &str = "Product";

/// `VARCHAR(200)`
pub const NAME_MAX_LEN: usize = 200;

/// `VARCHAR(1000)`
pub const DESCRIPTION_MAX_LEN: usize = 1000;

/// `NUMERIC(18, 2)`
pub const PRICE_PRECISION: u32 = 18;
pub const PRICE_SCALE: u32 = 2;

/// Round a price to the column scale the way PostgreSQL does
/// (half away from zero) and reject values with more than
/// `PRICE_PRECISION - PRICE_SCALE` integer digits.
pub fn normalize_price(price: Decimal) -> Result<Decimal, CoreError> {
    let rounded = price.round_dp_with_strategy(PRICE_SCALE, RoundingStrategy::MidpointAwayFromZero);
    let limit = Decimal::from(10_i64.pow(PRICE_PRECISION - PRICE_SCALE));

    if rounded.abs() >= limit {
        return Err(CoreError::Validation(format!(
            "price {price} exceeds NUMERIC({PRICE_PRECISION}, {PRICE_SCALE})"
        )));
    }
    Ok(rounded)
}

/// Check the length limits of the text columns. Lengths are counted in
/// characters, as `VARCHAR(n)` does.
pub fn check_text_lengths(name: &str, description: Option<&str>) -> Result<(), CoreError> {
    let name_len = name.chars().count();
    if name_len > NAME_MAX_LEN {
        return Err(CoreError::Validation(format!(
            "name is {name_len} characters, limit is {NAME_MAX_LEN}"
        )));
    }

    if let Some(description) = description {
        let len = description.chars().count();
        if len > DESCRIPTION_MAX_LEN {
            return Err(CoreError::Validation(format!(
                "description is {len} characters, limit is {DESCRIPTION_MAX_LEN}"
            )));
        }
    }
    Ok(())
}

/// Apply every column constraint, returning the price as it would be stored.
pub fn check_columns(
    name: &str,
    description: Option<&str>,
    price: Decimal,
) -> Result<Decimal, CoreError> {
    check_text_lengths(name, description)?;
    normalize_price(price)
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use assert_matches::assert_matches;

    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn price_rounds_half_away_from_zero() {
        assert_eq!(normalize_price(dec("3.505")).unwrap(), dec("3.51"));
        assert_eq!(normalize_price(dec("-3.505")).unwrap(), dec("-3.51"));
        assert_eq!(normalize_price(dec("3.504")).unwrap(), dec("3.50"));
    }

    #[test]
    fn price_at_precision_limit() {
        assert!(normalize_price(dec("9999999999999999.99")).is_ok());
        assert_matches!(
            normalize_price(dec("10000000000000000")),
            Err(CoreError::Validation(_))
        );
    }

    #[test]
    fn name_limit_counts_characters() {
        let at_limit = "é".repeat(NAME_MAX_LEN);
        assert!(check_text_lengths(&at_limit, None).is_ok());

        let over = "a".repeat(NAME_MAX_LEN + 1);
        assert_matches!(check_text_lengths(&over, None), Err(CoreError::Validation(_)));
    }

    #[test]
    fn description_limit() {
        let over = "d".repeat(DESCRIPTION_MAX_LEN + 1);
        assert_matches!(
            check_columns("Ham", Some(&over), Decimal::ONE),
            Err(CoreError::Validation(msg)) if msg.contains("description")
        );
        assert!(check_columns("Ham", None, Decimal::ONE).is_ok());
    }
}
