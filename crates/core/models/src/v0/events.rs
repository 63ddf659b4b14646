use iso8601_timestamp::Timestamp;

use gather_lifecycle::EventAvailability;

#[cfg(feature = "validator")]
use validator::Validate;

auto_derived!(
    /// Whether an event is discoverable or invite-only
    pub enum EventVisibility {
        Public,
        Private,
    }

    /// Optional fields on event object
    pub enum FieldsEvent {
        Description,
        Capacity,
        CancelledReason,
    }

    /// New event information
    #[cfg_attr(feature = "validator", derive(Validate))]
    pub struct DataCreateEvent {
        /// Event title
        #[cfg_attr(feature = "validator", validate(length(min = 1, max = 64)))]
        pub title: String,
        /// Event description
        #[cfg_attr(feature = "validator", validate(length(min = 0, max = 2048)))]
        #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
        pub description: Option<String>,
        /// When the event takes place
        pub date: Timestamp,
        /// Maximum number of confirmed guests
        #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
        pub capacity: Option<i64>,
        /// Whether the event is discoverable
        #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
        pub visibility: Option<EventVisibility>,
    }

    /// Changes to be applied to an event
    #[cfg_attr(feature = "validator", derive(Validate))]
    pub struct DataEditEvent {
        /// New event title
        #[cfg_attr(feature = "validator", validate(length(min = 1, max = 64)))]
        pub title: Option<String>,
        /// New event description
        #[cfg_attr(feature = "validator", validate(length(min = 0, max = 2048)))]
        pub description: Option<String>,
        /// New date for the event
        pub date: Option<Timestamp>,
        /// New maximum number of confirmed guests
        pub capacity: Option<i64>,
        /// New visibility
        pub visibility: Option<EventVisibility>,
        /// Requested lifecycle state
        pub availability: Option<EventAvailability>,
        /// Reason the event is being cancelled
        #[cfg_attr(feature = "validator", validate(length(min = 0, max = 1024)))]
        pub cancelled_reason: Option<String>,
        /// Fields to remove from the event
        pub remove: Option<Vec<FieldsEvent>>,
    }
);

impl Default for EventVisibility {
    fn default() -> Self {
        Self::Private
    }
}
