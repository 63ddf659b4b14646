use mongodb::bson::doc;

use gather_result::Result;

use crate::MongoDb;
use crate::{Guest, PartialGuest};

use super::AbstractEventGuests;

static COL: &str = "event_guests";

#[async_trait]
impl AbstractEventGuests for MongoDb {
    /// Insert a new guest into the database
    async fn insert_guest(&self, guest: &Guest) -> Result<()> {
        query!(self, insert_one, COL, guest).map(|_| ())
    }

    /// Fetch a guest from the database
    async fn fetch_guest(&self, id: &str) -> Result<Guest> {
        query!(self, find_one_by_id, COL, id)?.ok_or_else(|| create_error!(NotFound))
    }

    /// Fetch a guest of an event by email address
    async fn fetch_guest_by_email(
        &self,
        event_id: &str,
        email: &str,
    ) -> Result<Option<Guest>> {
        query!(
            self,
            find_one,
            COL,
            doc! {
                "event": event_id,
                "email": email
            }
        )
    }

    /// Fetch all guests of an event
    async fn fetch_guests_by_event(&self, event_id: &str) -> Result<Vec<Guest>> {
        query!(
            self,
            find,
            COL,
            doc! {
                "event": event_id
            }
        )
    }

    /// Count the confirmed guests of an event
    async fn count_confirmed_guests(&self, event_id: &str) -> Result<u64> {
        query!(
            self,
            count_documents,
            COL,
            doc! {
                "event": event_id,
                "status": "Yes"
            }
        )
    }

    /// Update a guest with new information
    async fn update_guest(&self, id: &str, partial: &PartialGuest) -> Result<()> {
        query!(self, update_one_by_id, COL, id, partial, vec![], None).map(|_| ())
    }

    /// Delete all guests of an event
    async fn delete_guests_by_event(&self, event_id: &str) -> Result<()> {
        query!(
            self,
            delete_many,
            COL,
            doc! {
                "event": event_id
            }
        )
        .map(|_| ())
    }
}
