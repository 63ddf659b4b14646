use gather_result::Result;

use crate::{Event, FieldsEvent, PartialEvent};

#[cfg(feature = "mongodb")]
mod mongodb;
mod reference;

#[async_trait]
pub trait AbstractEvents: Sync + Send {
    /// Insert a new event into the database
    async fn insert_event(&self, event: &Event) -> Result<()>;

    /// Fetch an event from the database
    async fn fetch_event(&self, id: &str) -> Result<Event>;

    /// Fetch all events organized by a user
    async fn fetch_events_by_owner(&self, owner_id: &str) -> Result<Vec<Event>>;

    /// Update an event with new information
    async fn update_event(
        &self,
        id: &str,
        event: &PartialEvent,
        remove: Vec<FieldsEvent>,
    ) -> Result<()>;

    /// Delete an event from the database
    async fn delete_event(&self, id: &str) -> Result<()>;
}
