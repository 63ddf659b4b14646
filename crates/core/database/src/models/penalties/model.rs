use iso8601_timestamp::Timestamp;
use validator::Validate;

use gather_lifecycle::{suspension_expiry, validate_penalty, HiddenBy, PenaltyType};
use gather_models::v0;
use gather_result::Result;

use crate::{Database, PartialUser, User, UserBan, REASON_ORGANIZER_BANNED};

auto_derived_partial!(
    /// Moderation penalty issued against a user
    pub struct Penalty {
        /// Penalty Id
        #[serde(rename = "_id")]
        pub id: String,
        /// Id of penalized user
        pub user_id: String,
        /// Id of the administrator who issued it
        pub moderator_id: String,

        /// Kind of penalty
        pub penalty_type: PenaltyType,
        /// Attached reason
        pub reason: String,
        /// Suspension length in days
        #[serde(skip_serializing_if = "Option::is_none")]
        pub duration: Option<i64>,
        /// When the suspension lapses
        #[serde(skip_serializing_if = "Option::is_none")]
        pub expires_at: Option<Timestamp>,

        /// Whether this penalty is still in force
        pub is_active: bool,
        /// When this penalty was issued
        pub created_at: Timestamp,
    },
    "PartialPenalty"
);

#[allow(clippy::disallowed_methods)]
impl Penalty {
    /// Issue a penalty against a user
    ///
    /// A warning only leaves an audit record. Suspensions and bans also
    /// ban the user, and a permanent ban additionally hides every event
    /// they organize, whatever state those events are in.
    pub async fn issue(
        db: &Database,
        target: &mut User,
        moderator: &User,
        data: v0::DataIssuePenalty,
    ) -> Result<Penalty> {
        if !moderator.privileged {
            return Err(create_error!(NotPrivileged));
        }

        data.validate()
            .map_err(|error| create_error!(FailedValidation {
                error: error.to_string()
            }))?;

        validate_penalty(target.privileged, &data.penalty_type, data.duration)?;

        let now = Timestamp::now_utc();
        let expires_at = match data.penalty_type {
            PenaltyType::Suspension => data.duration.map(|days| suspension_expiry(now, days)),
            _ => None,
        };

        let penalty = Penalty {
            id: ulid::Ulid::new().to_string(),
            user_id: target.id.to_string(),
            moderator_id: moderator.id.to_string(),
            penalty_type: data.penalty_type,
            reason: data.reason,
            duration: data.duration,
            expires_at,
            is_active: true,
            created_at: now,
        };

        db.insert_penalty(&penalty).await?;

        if matches!(
            penalty.penalty_type,
            PenaltyType::Suspension | PenaltyType::Ban
        ) {
            let partial = PartialUser {
                ban: Some(UserBan {
                    at: now,
                    until: expires_at,
                    reason: penalty.reason.clone(),
                }),
                ..Default::default()
            };

            db.update_user(&target.id, &partial, vec![]).await?;
            target.apply_options(partial);
        }

        if matches!(penalty.penalty_type, PenaltyType::Ban) {
            let mut events = db.fetch_events_by_owner(&target.id).await?;
            for event in &mut events {
                event
                    .hide(db, HiddenBy::BanCascade, REASON_ORGANIZER_BANNED)
                    .await?;
            }

            info!("banned user {}, hid {} events", target.id, events.len());
        }

        Ok(penalty)
    }
}

#[cfg(test)]
mod tests {
    use gather_lifecycle::{HiddenBy, PenaltyType};
    use gather_models::v0;
    use gather_result::ErrorType;

    use crate::util::test_fixtures::{test_admin, test_event, test_user};
    use crate::{Penalty, REASON_ORGANIZER_BANNED};

    fn penalty(penalty_type: PenaltyType, duration: Option<i64>) -> v0::DataIssuePenalty {
        v0::DataIssuePenalty {
            penalty_type,
            reason: "abusive listings".to_string(),
            duration,
        }
    }

    #[async_std::test]
    async fn warning_only_leaves_a_record() {
        database_test!(|db| async move {
            let admin = test_admin(&db).await;
            let mut user = test_user(&db, "casey").await;

            let issued = Penalty::issue(&db, &mut user, &admin, penalty(PenaltyType::Warning, None))
                .await
                .unwrap();
            assert!(issued.is_active);
            assert!(issued.expires_at.is_none());
            assert!(!user.is_banned());

            let penalties = db.fetch_penalties_by_user(&user.id).await.unwrap();
            assert_eq!(penalties.len(), 1);
        });
    }

    #[async_std::test]
    async fn suspension_bans_until_expiry() {
        database_test!(|db| async move {
            let admin = test_admin(&db).await;
            let mut user = test_user(&db, "casey").await;

            let issued = Penalty::issue(
                &db,
                &mut user,
                &admin,
                penalty(PenaltyType::Suspension, Some(7)),
            )
            .await
            .unwrap();
            assert!(issued.expires_at.is_some());

            let ban = user.ban.as_ref().unwrap();
            assert_eq!(ban.until, issued.expires_at);
            assert_eq!(ban.reason, "abusive listings");
        });
    }

    #[async_std::test]
    async fn duration_rules() {
        database_test!(|db| async move {
            let admin = test_admin(&db).await;
            let mut user = test_user(&db, "casey").await;

            let err = Penalty::issue(&db, &mut user, &admin, penalty(PenaltyType::Suspension, None))
                .await
                .unwrap_err();
            assert!(matches!(err.error_type, ErrorType::DurationRequired));

            let err = Penalty::issue(&db, &mut user, &admin, penalty(PenaltyType::Ban, Some(7)))
                .await
                .unwrap_err();
            assert!(matches!(err.error_type, ErrorType::DurationNotAllowed));

            let err = Penalty::issue(
                &db,
                &mut user,
                &admin,
                penalty(PenaltyType::Warning, Some(7)),
            )
            .await
            .unwrap_err();
            assert!(matches!(err.error_type, ErrorType::DurationNotAllowed));
        });
    }

    #[async_std::test]
    async fn administrators_are_immune() {
        database_test!(|db| async move {
            let admin = test_admin(&db).await;
            let mut other_admin = test_admin(&db).await;

            for (penalty_type, duration) in [
                (PenaltyType::Warning, None),
                (PenaltyType::Suspension, Some(7)),
                (PenaltyType::Ban, None),
            ] {
                let err = Penalty::issue(
                    &db,
                    &mut other_admin,
                    &admin,
                    penalty(penalty_type, duration),
                )
                .await
                .unwrap_err();
                assert!(matches!(err.error_type, ErrorType::CannotPenalizeAdmin));
            }
        });
    }

    #[async_std::test]
    async fn ban_hides_every_owned_event() {
        database_test!(|db| async move {
            let admin = test_admin(&db).await;
            let mut user = test_user(&db, "casey").await;

            let mut events = Vec::new();
            for days_ahead in [1, 2, 3] {
                events.push(test_event(&db, &user, days_ahead, None).await);
            }

            // Two of the three are already hidden for other reasons
            events[0]
                .hide(&db, HiddenBy::Automatic, "too many reports")
                .await
                .unwrap();
            events[1]
                .hide(&db, HiddenBy::Manual, "policy review")
                .await
                .unwrap();

            Penalty::issue(&db, &mut user, &admin, penalty(PenaltyType::Ban, None))
                .await
                .unwrap();

            let ban = user.ban.as_ref().unwrap();
            assert!(ban.until.is_none());

            for event in &events {
                let hidden = db.fetch_event(&event.id).await.unwrap().hidden.unwrap();
                assert_eq!(hidden.by, HiddenBy::BanCascade);
                assert_eq!(hidden.reason, REASON_ORGANIZER_BANNED);
            }
        });
    }
}
