use iso8601_timestamp::Timestamp;

use gather_lifecycle::ban_lapsed;
use gather_result::Result;

use crate::Database;

auto_derived_partial!(
    /// # User
    pub struct User {
        /// Unique Id
        #[serde(rename = "_id")]
        pub id: String,
        /// Username
        pub username: String,
        /// Whether this user is a platform administrator
        #[serde(skip_serializing_if = "crate::if_false", default)]
        pub privileged: bool,
        /// Ban currently applied to this user
        #[serde(skip_serializing_if = "Option::is_none")]
        pub ban: Option<UserBan>,
        /// When this user registered
        pub created_at: Timestamp,
    },
    "PartialUser"
);

auto_derived!(
    /// Ban applied to a user
    pub struct UserBan {
        /// When the ban was applied
        pub at: Timestamp,
        /// When the ban lapses, if it is a suspension
        #[serde(skip_serializing_if = "Option::is_none")]
        pub until: Option<Timestamp>,
        /// Reason for the ban
        pub reason: String,
    }

    /// Optional fields on user object
    pub enum FieldsUser {
        Ban,
    }
);

#[allow(clippy::disallowed_methods)]
impl User {
    /// Whether this user is currently banned
    pub fn is_banned(&self) -> bool {
        self.ban.is_some()
    }

    /// Ensure this user may act on the platform
    ///
    /// A suspension whose end date has passed is lifted here, on the
    /// access path, rather than by a background sweep. Lifting a lapsed
    /// suspension touches neither penalty rows nor hidden events.
    /// Permanent bans carry no end date and are never lifted here.
    pub async fn assert_good_standing(&mut self, db: &Database) -> Result<()> {
        let Some(ban) = &self.ban else {
            return Ok(());
        };

        if ban_lapsed(ban.until, Timestamp::now_utc()) {
            db.update_user(&self.id, &PartialUser::default(), vec![FieldsUser::Ban])
                .await?;
            self.ban = None;

            info!("lifted lapsed suspension for user {}", self.id);
            return Ok(());
        }

        Err(create_error!(Banned))
    }

    /// Lift this user's ban
    ///
    /// Clears the ban and deactivates every active penalty on record,
    /// not just the one that caused the ban. Events hidden when the ban
    /// was issued stay hidden.
    pub async fn unban(&mut self, db: &Database, moderator: &User) -> Result<()> {
        if !moderator.privileged {
            return Err(create_error!(NotPrivileged));
        }

        if self.ban.is_none() {
            return Err(create_error!(NotBanned));
        }

        db.update_user(&self.id, &PartialUser::default(), vec![FieldsUser::Ban])
            .await?;
        db.deactivate_penalties_by_user(&self.id).await?;
        self.ban = None;

        info!("user {} unbanned by {}", self.id, moderator.id);
        Ok(())
    }

    /// Remove a field from user object
    pub fn remove_field(&mut self, field: &FieldsUser) {
        match field {
            FieldsUser::Ban => self.ban = None,
        }
    }
}

#[cfg(test)]
mod tests {
    use iso8601_timestamp::{Duration, Timestamp};

    use gather_lifecycle::PenaltyType;
    use gather_models::v0;
    use gather_result::ErrorType;

    use crate::util::test_fixtures::{test_admin, test_user};
    use crate::{PartialUser, Penalty, UserBan};

    #[async_std::test]
    async fn unban_clears_ban_and_deactivates_penalties() {
        database_test!(|db| async move {
            let admin = test_admin(&db).await;
            let mut user = test_user(&db, "casey").await;

            Penalty::issue(
                &db,
                &mut user,
                &admin,
                v0::DataIssuePenalty {
                    penalty_type: PenaltyType::Ban,
                    reason: "ban evasion".to_string(),
                    duration: None,
                },
            )
            .await
            .unwrap();
            assert!(user.is_banned());

            user.unban(&db, &admin).await.unwrap();
            assert!(!user.is_banned());

            let user = db.fetch_user(&user.id).await.unwrap();
            assert!(user.ban.is_none());

            let penalties = db.fetch_penalties_by_user(&user.id).await.unwrap();
            assert!(!penalties.is_empty());
            assert!(penalties.iter().all(|penalty| !penalty.is_active));

            // Unbanning a user in good standing has no effect
            let mut user = user;
            let err = user.unban(&db, &admin).await.unwrap_err();
            assert!(matches!(err.error_type, ErrorType::NotBanned));
        });
    }

    #[async_std::test]
    async fn lapsed_suspension_lifts_on_access() {
        database_test!(|db| async move {
            let mut user = test_user(&db, "jordan").await;
            let partial = PartialUser {
                ban: Some(UserBan {
                    at: Timestamp::now_utc() - Duration::days(8),
                    until: Some(Timestamp::now_utc() - Duration::days(1)),
                    reason: "spam".to_string(),
                }),
                ..Default::default()
            };
            db.update_user(&user.id, &partial, vec![]).await.unwrap();
            user.apply_options(partial);

            user.assert_good_standing(&db).await.unwrap();
            assert!(!user.is_banned());

            let user = db.fetch_user(&user.id).await.unwrap();
            assert!(user.ban.is_none());
        });
    }

    #[async_std::test]
    async fn active_suspension_blocks_access() {
        database_test!(|db| async move {
            let mut user = test_user(&db, "sam").await;
            user.ban = Some(UserBan {
                at: Timestamp::now_utc(),
                until: Some(Timestamp::now_utc() + Duration::days(3)),
                reason: "spam".to_string(),
            });

            let err = user.assert_good_standing(&db).await.unwrap_err();
            assert!(matches!(err.error_type, ErrorType::Banned));
            assert!(user.is_banned());
        });
    }

    #[async_std::test]
    async fn permanent_ban_never_lifts() {
        database_test!(|db| async move {
            let mut user = test_user(&db, "robin").await;
            user.ban = Some(UserBan {
                at: Timestamp::now_utc() - Duration::days(400),
                until: None,
                reason: "fraud".to_string(),
            });

            let err = user.assert_good_standing(&db).await.unwrap_err();
            assert!(matches!(err.error_type, ErrorType::Banned));
            assert!(user.is_banned());
        });
    }
}
