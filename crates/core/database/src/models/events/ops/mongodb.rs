use mongodb::bson::doc;

use gather_result::Result;

use crate::MongoDb;
use crate::{Event, FieldsEvent, IntoDocumentPath, PartialEvent};

use super::AbstractEvents;

static COL: &str = "events";

#[async_trait]
impl AbstractEvents for MongoDb {
    /// Insert a new event into the database
    async fn insert_event(&self, event: &Event) -> Result<()> {
        query!(self, insert_one, COL, event).map(|_| ())
    }

    /// Fetch an event from the database
    async fn fetch_event(&self, id: &str) -> Result<Event> {
        query!(self, find_one_by_id, COL, id)?.ok_or_else(|| create_error!(NotFound))
    }

    /// Fetch all events organized by a user
    async fn fetch_events_by_owner(&self, owner_id: &str) -> Result<Vec<Event>> {
        query!(
            self,
            find,
            COL,
            doc! {
                "owner": owner_id
            }
        )
    }

    /// Update an event with new information
    async fn update_event(
        &self,
        id: &str,
        partial: &PartialEvent,
        remove: Vec<FieldsEvent>,
    ) -> Result<()> {
        query!(
            self,
            update_one_by_id,
            COL,
            id,
            partial,
            remove.iter().map(|x| x as &dyn IntoDocumentPath).collect(),
            None
        )
        .map(|_| ())
    }

    /// Delete an event from the database
    async fn delete_event(&self, id: &str) -> Result<()> {
        query!(self, delete_one_by_id, COL, id).map(|_| ())
    }
}

impl IntoDocumentPath for FieldsEvent {
    fn as_path(&self) -> Option<&'static str> {
        match self {
            FieldsEvent::Description => "description".into(),
            FieldsEvent::Capacity => "capacity".into(),
            FieldsEvent::CancelledReason => "cancelled_reason".into(),
            FieldsEvent::Hidden => "hidden".into(),
        }
    }
}
