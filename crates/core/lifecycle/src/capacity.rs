use gather_result::Result;

/// Validate a requested event capacity against already-confirmed guests
///
/// Capacity must be positive and may never drop below the number of
/// guests who have already confirmed. A missing capacity is unlimited
/// and always valid.
pub fn check_capacity(requested: Option<i64>, confirmed: u64) -> Result<()> {
    if let Some(capacity) = requested {
        if capacity <= 0 {
            return Err(create_error!(InvalidCapacity));
        }

        if (capacity as u64) < confirmed {
            return Err(create_error!(CapacityBelowConfirmed { confirmed }));
        }
    }

    Ok(())
}
