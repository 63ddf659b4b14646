use gather_result::Result;

use crate::ReferenceDb;
use crate::{Event, FieldsEvent, PartialEvent};

use super::AbstractEvents;

#[async_trait]
impl AbstractEvents for ReferenceDb {
    /// Insert a new event into the database
    async fn insert_event(&self, event: &Event) -> Result<()> {
        let mut events = self.events.lock().await;
        if events.contains_key(&event.id) {
            Err(create_database_error!("insert", "event"))
        } else {
            events.insert(event.id.to_string(), event.clone());
            Ok(())
        }
    }

    /// Fetch an event from the database
    async fn fetch_event(&self, id: &str) -> Result<Event> {
        let events = self.events.lock().await;
        events
            .get(id)
            .cloned()
            .ok_or_else(|| create_error!(NotFound))
    }

    /// Fetch all events organized by a user
    async fn fetch_events_by_owner(&self, owner_id: &str) -> Result<Vec<Event>> {
        let events = self.events.lock().await;
        Ok(events
            .values()
            .filter(|event| event.owner == owner_id)
            .cloned()
            .collect())
    }

    /// Update an event with new information
    async fn update_event(
        &self,
        id: &str,
        partial: &PartialEvent,
        remove: Vec<FieldsEvent>,
    ) -> Result<()> {
        let mut events = self.events.lock().await;
        if let Some(event) = events.get_mut(id) {
            for field in remove {
                event.remove_field(&field);
            }

            event.apply_options(partial.clone());
            Ok(())
        } else {
            Err(create_error!(NotFound))
        }
    }

    /// Delete an event from the database
    async fn delete_event(&self, id: &str) -> Result<()> {
        let mut events = self.events.lock().await;
        if events.remove(id).is_some() {
            Ok(())
        } else {
            Err(create_error!(NotFound))
        }
    }
}
