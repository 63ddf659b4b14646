use gather_models::v0;
use gather_result::Result;

use crate::ReferenceDb;
use crate::{Guest, PartialGuest};

use super::AbstractEventGuests;

#[async_trait]
impl AbstractEventGuests for ReferenceDb {
    /// Insert a new guest into the database
    async fn insert_guest(&self, guest: &Guest) -> Result<()> {
        let mut event_guests = self.event_guests.lock().await;
        if event_guests.contains_key(&guest.id) {
            Err(create_database_error!("insert", "guest"))
        } else {
            event_guests.insert(guest.id.to_string(), guest.clone());
            Ok(())
        }
    }

    /// Fetch a guest from the database
    async fn fetch_guest(&self, id: &str) -> Result<Guest> {
        let event_guests = self.event_guests.lock().await;
        event_guests
            .get(id)
            .cloned()
            .ok_or_else(|| create_error!(NotFound))
    }

    /// Fetch a guest of an event by email address
    async fn fetch_guest_by_email(
        &self,
        event_id: &str,
        email: &str,
    ) -> Result<Option<Guest>> {
        let event_guests = self.event_guests.lock().await;
        Ok(event_guests
            .values()
            .find(|guest| guest.event == event_id && guest.email == email)
            .cloned())
    }

    /// Fetch all guests of an event
    async fn fetch_guests_by_event(&self, event_id: &str) -> Result<Vec<Guest>> {
        let event_guests = self.event_guests.lock().await;
        Ok(event_guests
            .values()
            .filter(|guest| guest.event == event_id)
            .cloned()
            .collect())
    }

    /// Count the confirmed guests of an event
    async fn count_confirmed_guests(&self, event_id: &str) -> Result<u64> {
        let event_guests = self.event_guests.lock().await;
        Ok(event_guests
            .values()
            .filter(|guest| guest.event == event_id && guest.status == v0::RsvpStatus::Yes)
            .count() as u64)
    }

    /// Update a guest with new information
    async fn update_guest(&self, id: &str, partial: &PartialGuest) -> Result<()> {
        let mut event_guests = self.event_guests.lock().await;
        if let Some(guest) = event_guests.get_mut(id) {
            guest.apply_options(partial.clone());
            Ok(())
        } else {
            Err(create_error!(NotFound))
        }
    }

    /// Delete all guests of an event
    async fn delete_guests_by_event(&self, event_id: &str) -> Result<()> {
        let mut event_guests = self.event_guests.lock().await;
        event_guests.retain(|_, guest| guest.event != event_id);
        Ok(())
    }
}
