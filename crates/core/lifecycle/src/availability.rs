use iso8601_timestamp::Timestamp;

use gather_result::Result;

use crate::EventAvailability;

/// Compute the availability an event should hold after an update
///
/// Explicit cancellation and archival always win. Publishing demands a
/// future date. Otherwise the date drives the state: a completed event
/// whose date moved back into the future revives, and any event whose
/// date is not in the future rolls to completed.
pub fn next_availability(
    current: EventAvailability,
    requested: Option<EventAvailability>,
    date: Timestamp,
    now: Timestamp,
) -> Result<EventAvailability> {
    match requested {
        Some(EventAvailability::Cancelled) => Ok(EventAvailability::Cancelled),
        Some(EventAvailability::Archived) => Ok(EventAvailability::Archived),
        Some(EventAvailability::Published) => {
            if date > now {
                Ok(EventAvailability::Published)
            } else {
                Err(create_error!(CannotPublishPastEvent))
            }
        }
        // An explicit completion request carries no more intent than the
        // date itself, so it takes the date-driven path below.
        Some(EventAvailability::Completed) | None => {
            let mut next = current;

            if next == EventAvailability::Completed && date > now {
                next = EventAvailability::Published;
            }

            if date <= now {
                next = EventAvailability::Completed;
            }

            Ok(next)
        }
    }
}
