use log::{debug, warn};

use crate::problem::{NUMBER_COUNT, Numbers};
use crate::utils::errors::UtilsError;

/// # Errors
///
/// Returns an error unless `values` holds exactly four integers.
pub fn validate_numbers(values: &[i64]) -> Result<Numbers, UtilsError> {
    debug!("Validating numbers: {:?}", values);

    let numbers: Numbers = values.try_into().map_err(|_| {
        warn!(
            "Expected {} numbers but got {}",
            NUMBER_COUNT,
            values.len()
        );
        UtilsError::WrongNumberCount {
            expected: NUMBER_COUNT,
            found: values.len(),
        }
    })?;

    debug!("Number validation successful");
    Ok(numbers)
}
