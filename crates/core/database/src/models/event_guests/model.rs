use iso8601_timestamp::Timestamp;
use validator::Validate;

use gather_models::v0;
use gather_result::Result;

use crate::{Database, Event, User};

auto_derived_partial!(
    /// # Event Guest
    pub struct Guest {
        /// Unique Id
        #[serde(rename = "_id")]
        pub id: String,
        /// Id of the event this guest is invited to
        pub event: String,

        /// Guest email address
        pub email: String,
        /// Guest display name
        pub name: String,

        /// RSVP status
        pub status: v0::RsvpStatus,
        /// When the guest first responded
        #[serde(skip_serializing_if = "Option::is_none")]
        pub responded_at: Option<Timestamp>,
        /// When the guest was invited
        pub invited_at: Timestamp,
    },
    "PartialGuest"
);

#[allow(clippy::disallowed_methods)]
impl Guest {
    /// Invite a guest to an event
    ///
    /// Only the organizer may invite guests, and each email address can
    /// only be invited once per event.
    pub async fn create(
        db: &Database,
        event: &Event,
        caller: &mut User,
        data: v0::DataInviteGuest,
    ) -> Result<Guest> {
        if caller.id != event.owner {
            return Err(create_error!(NotOwner));
        }

        caller.assert_good_standing(db).await?;

        data.validate()
            .map_err(|error| create_error!(FailedValidation {
                error: error.to_string()
            }))?;

        if db
            .fetch_guest_by_email(&event.id, &data.email)
            .await?
            .is_some()
        {
            return Err(create_error!(AlreadyInvited));
        }

        let guest = Guest {
            id: ulid::Ulid::new().to_string(),
            event: event.id.to_string(),
            email: data.email,
            name: data.name,
            status: v0::RsvpStatus::Pending,
            responded_at: None,
            invited_at: Timestamp::now_utc(),
        };

        db.insert_guest(&guest).await?;
        Ok(guest)
    }

    /// Record this guest's RSVP response
    ///
    /// The confirmed guest count is read inside the same operation as the
    /// write it guards, so a Yes against a full event lands on the
    /// waitlist instead of pushing past capacity.
    pub async fn respond(
        &mut self,
        db: &Database,
        event: &Event,
        data: v0::DataRsvpGuest,
    ) -> Result<()> {
        let mut status = data.status;

        if matches!(status, v0::RsvpStatus::Yes) && !matches!(self.status, v0::RsvpStatus::Yes) {
            if let Some(capacity) = event.capacity {
                let confirmed = db.count_confirmed_guests(&event.id).await?;
                if confirmed >= capacity as u64 {
                    status = v0::RsvpStatus::Waitlisted;
                }
            }
        }

        // The first actual response stamps the guest
        let responded_at =
            if self.responded_at.is_none() && !matches!(status, v0::RsvpStatus::Pending) {
                Some(Timestamp::now_utc())
            } else {
                None
            };

        let partial = PartialGuest {
            status: Some(status),
            responded_at,
            ..Default::default()
        };

        db.update_guest(&self.id, &partial).await?;
        self.apply_options(partial);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use gather_models::v0;
    use gather_result::ErrorType;

    use crate::util::test_fixtures::{test_event, test_guest, test_user};
    use crate::Guest;

    #[async_std::test]
    async fn rsvp_stamps_first_response_only() {
        database_test!(|db| async move {
            let owner = test_user(&db, "morgan").await;
            let event = test_event(&db, &owner, 3, None).await;
            let mut guest = test_guest(&db, &event, "pat@example.com").await;
            assert!(guest.responded_at.is_none());

            guest
                .respond(
                    &db,
                    &event,
                    v0::DataRsvpGuest {
                        status: v0::RsvpStatus::Maybe,
                    },
                )
                .await
                .unwrap();
            let first_response = guest.responded_at;
            assert!(first_response.is_some());

            guest
                .respond(
                    &db,
                    &event,
                    v0::DataRsvpGuest {
                        status: v0::RsvpStatus::Yes,
                    },
                )
                .await
                .unwrap();
            assert_eq!(guest.responded_at, first_response);
            assert_eq!(guest.status, v0::RsvpStatus::Yes);
        });
    }

    #[async_std::test]
    async fn yes_against_full_event_waitlists() {
        database_test!(|db| async move {
            let owner = test_user(&db, "morgan").await;
            let event = test_event(&db, &owner, 3, Some(1)).await;

            let mut first = test_guest(&db, &event, "one@example.com").await;
            let mut second = test_guest(&db, &event, "two@example.com").await;

            first
                .respond(
                    &db,
                    &event,
                    v0::DataRsvpGuest {
                        status: v0::RsvpStatus::Yes,
                    },
                )
                .await
                .unwrap();
            assert_eq!(first.status, v0::RsvpStatus::Yes);

            second
                .respond(
                    &db,
                    &event,
                    v0::DataRsvpGuest {
                        status: v0::RsvpStatus::Yes,
                    },
                )
                .await
                .unwrap();
            assert_eq!(second.status, v0::RsvpStatus::Waitlisted);

            // Confirmed guests never exceed capacity
            assert_eq!(db.count_confirmed_guests(&event.id).await.unwrap(), 1);

            // A confirmed guest re-sending Yes is not bumped to the waitlist
            first
                .respond(
                    &db,
                    &event,
                    v0::DataRsvpGuest {
                        status: v0::RsvpStatus::Yes,
                    },
                )
                .await
                .unwrap();
            assert_eq!(first.status, v0::RsvpStatus::Yes);
        });
    }

    #[async_std::test]
    async fn duplicate_invite_is_rejected() {
        database_test!(|db| async move {
            let mut owner = test_user(&db, "morgan").await;
            let event = test_event(&db, &owner, 3, None).await;

            test_guest(&db, &event, "pat@example.com").await;

            let err = Guest::create(
                &db,
                &event,
                &mut owner,
                v0::DataInviteGuest {
                    email: "pat@example.com".to_string(),
                    name: "Pat".to_string(),
                },
            )
            .await
            .unwrap_err();
            assert!(matches!(err.error_type, ErrorType::AlreadyInvited));
        });
    }

    #[async_std::test]
    async fn only_the_owner_may_invite() {
        database_test!(|db| async move {
            let owner = test_user(&db, "morgan").await;
            let mut other = test_user(&db, "riley").await;
            let event = test_event(&db, &owner, 3, None).await;

            let err = Guest::create(
                &db,
                &event,
                &mut other,
                v0::DataInviteGuest {
                    email: "pat@example.com".to_string(),
                    name: "Pat".to_string(),
                },
            )
            .await
            .unwrap_err();
            assert!(matches!(err.error_type, ErrorType::NotOwner));
        });
    }
}
