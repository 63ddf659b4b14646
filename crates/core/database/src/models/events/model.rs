use iso8601_timestamp::Timestamp;
use validator::Validate;

use gather_lifecycle::{check_capacity, next_availability, EventAvailability, HiddenBy};
use gather_models::v0;
use gather_result::Result;

use crate::{Database, User};

/// Reason recorded when pending reports hide an event
pub static REASON_MASS_REPORTED: &str = "Automatically hidden: too many reports";

/// Reason recorded when a ban hides an event
pub static REASON_ORGANIZER_BANNED: &str = "Organizer banned";

auto_derived_partial!(
    /// # Event
    pub struct Event {
        /// Unique Id
        #[serde(rename = "_id")]
        pub id: String,
        /// Id of the user organizing this event
        pub owner: String,

        /// Event title
        pub title: String,
        /// Event description
        #[serde(skip_serializing_if = "Option::is_none")]
        pub description: Option<String>,
        /// When the event takes place
        pub date: Timestamp,
        /// Maximum number of confirmed guests, unlimited if not set
        #[serde(skip_serializing_if = "Option::is_none")]
        pub capacity: Option<i64>,

        /// Whether the event is discoverable or invite-only
        pub visibility: v0::EventVisibility,
        /// Lifecycle state of the event
        pub availability: EventAvailability,
        /// Reason given when the event was cancelled
        #[serde(skip_serializing_if = "Option::is_none")]
        pub cancelled_reason: Option<String>,

        /// Number of reports ever filed against this event
        #[serde(skip_serializing_if = "crate::if_zero_u32", default)]
        pub report_count: u32,
        /// Moderation hide applied to this event
        #[serde(skip_serializing_if = "Option::is_none")]
        pub hidden: Option<EventHidden>,

        /// When this event was created
        pub created_at: Timestamp,
    },
    "PartialEvent"
);

auto_derived!(
    /// Moderation hide applied to an event
    pub struct EventHidden {
        /// What hid the event
        pub by: HiddenBy,
        /// Reason the event was hidden
        pub reason: String,
        /// When the event was hidden
        pub at: Timestamp,
    }

    /// Optional fields on event object
    pub enum FieldsEvent {
        Description,
        Capacity,
        CancelledReason,
        Hidden,
    }
);

impl From<v0::FieldsEvent> for FieldsEvent {
    fn from(field: v0::FieldsEvent) -> Self {
        match field {
            v0::FieldsEvent::Description => FieldsEvent::Description,
            v0::FieldsEvent::Capacity => FieldsEvent::Capacity,
            v0::FieldsEvent::CancelledReason => FieldsEvent::CancelledReason,
        }
    }
}

#[allow(clippy::disallowed_methods)]
impl Event {
    /// Create a new event organized by `owner`
    pub async fn create(
        db: &Database,
        data: v0::DataCreateEvent,
        owner: &mut User,
    ) -> Result<Event> {
        owner.assert_good_standing(db).await?;

        data.validate()
            .map_err(|error| create_error!(FailedValidation {
                error: error.to_string()
            }))?;

        let now = Timestamp::now_utc();
        check_capacity(data.capacity, 0)?;

        // New events start out published, which demands a future date
        let availability = next_availability(
            EventAvailability::Published,
            Some(EventAvailability::Published),
            data.date,
            now,
        )?;

        let event = Event {
            id: ulid::Ulid::new().to_string(),
            owner: owner.id.to_string(),
            title: data.title,
            description: data.description,
            date: data.date,
            capacity: data.capacity,
            visibility: data.visibility.unwrap_or_default(),
            availability,
            cancelled_reason: None,
            report_count: 0,
            hidden: None,
            created_at: now,
        };

        db.insert_event(&event).await?;
        Ok(event)
    }

    /// Whether this event is hidden from the platform by moderation
    pub fn is_hidden(&self) -> bool {
        self.hidden.is_some()
    }

    /// Apply an update to this event
    ///
    /// Only the organizer may edit an event. Capacity may never drop
    /// below the number of confirmed guests, and the availability the
    /// event ends up in follows from the requested state and the
    /// resolved date.
    pub async fn update(
        &mut self,
        db: &Database,
        data: v0::DataEditEvent,
        caller: &mut User,
    ) -> Result<()> {
        if caller.id != self.owner {
            return Err(create_error!(NotOwner));
        }

        caller.assert_good_standing(db).await?;

        data.validate()
            .map_err(|error| create_error!(FailedValidation {
                error: error.to_string()
            }))?;

        if data.capacity.is_some() {
            let confirmed = db.count_confirmed_guests(&self.id).await?;
            check_capacity(data.capacity, confirmed)?;
        }

        let now = Timestamp::now_utc();
        let date = data.date.unwrap_or(self.date);
        let availability =
            next_availability(self.availability.clone(), data.availability, date, now)?;

        let remove: Vec<FieldsEvent> = data
            .remove
            .unwrap_or_default()
            .into_iter()
            .map(|field| field.into())
            .collect();

        let partial = PartialEvent {
            title: data.title,
            description: data.description,
            date: data.date,
            capacity: data.capacity,
            visibility: data.visibility,
            availability: Some(availability),
            cancelled_reason: data.cancelled_reason,
            ..Default::default()
        };

        for field in &remove {
            self.remove_field(field);
        }

        self.apply_options(partial.clone());
        db.update_event(&self.id, &partial, remove).await?;

        Ok(())
    }

    /// Hide this event from the platform
    pub async fn hide(&mut self, db: &Database, by: HiddenBy, reason: &str) -> Result<()> {
        let partial = PartialEvent {
            hidden: Some(EventHidden {
                by,
                reason: reason.to_string(),
                at: Timestamp::now_utc(),
            }),
            ..Default::default()
        };

        db.update_event(&self.id, &partial, vec![]).await?;
        self.apply_options(partial);
        Ok(())
    }

    /// Restore this event after moderation hid it
    pub async fn restore(&mut self, db: &Database) -> Result<()> {
        db.update_event(&self.id, &PartialEvent::default(), vec![FieldsEvent::Hidden])
            .await?;
        self.hidden = None;
        Ok(())
    }

    /// Delete this event along with its guest list
    pub async fn delete(self, db: &Database, caller: &User) -> Result<()> {
        if caller.id != self.owner {
            return Err(create_error!(NotOwner));
        }

        db.delete_guests_by_event(&self.id).await?;
        db.delete_event(&self.id).await
    }

    /// Remove a field from event object
    pub fn remove_field(&mut self, field: &FieldsEvent) {
        match field {
            FieldsEvent::Description => self.description = None,
            FieldsEvent::Capacity => self.capacity = None,
            FieldsEvent::CancelledReason => self.cancelled_reason = None,
            FieldsEvent::Hidden => self.hidden = None,
        }
    }
}
