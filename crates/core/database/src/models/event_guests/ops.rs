use gather_result::Result;

use crate::{Guest, PartialGuest};

#[cfg(feature = "mongodb")]
mod mongodb;
mod reference;

#[async_trait]
pub trait AbstractEventGuests: Sync + Send {
    /// Insert a new guest into the database
    async fn insert_guest(&self, guest: &Guest) -> Result<()>;

    /// Fetch a guest from the database
    async fn fetch_guest(&self, id: &str) -> Result<Guest>;

    /// Fetch a guest of an event by email address
    async fn fetch_guest_by_email(&self, event_id: &str, email: &str)
        -> Result<Option<Guest>>;

    /// Fetch all guests of an event
    async fn fetch_guests_by_event(&self, event_id: &str) -> Result<Vec<Guest>>;

    /// Count the confirmed guests of an event
    async fn count_confirmed_guests(&self, event_id: &str) -> Result<u64>;

    /// Update a guest with new information
    async fn update_guest(&self, id: &str, guest: &PartialGuest) -> Result<()>;

    /// Delete all guests of an event
    async fn delete_guests_by_event(&self, event_id: &str) -> Result<()>;
}
