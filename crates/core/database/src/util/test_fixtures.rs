use iso8601_timestamp::{Duration, Timestamp};

use gather_lifecycle::EventAvailability;
use gather_models::v0;

use crate::{Database, Event, Guest, User};

/// Insert a user
pub async fn test_user(db: &Database, username: &str) -> User {
    let user = User {
        id: ulid::Ulid::new().to_string(),
        username: username.to_string(),
        privileged: false,
        ban: None,
        created_at: Timestamp::now_utc(),
    };

    db.insert_user(&user).await.unwrap();
    user
}

/// Insert a platform administrator
pub async fn test_admin(db: &Database) -> User {
    let admin = User {
        id: ulid::Ulid::new().to_string(),
        username: "admin".to_string(),
        privileged: true,
        ban: None,
        created_at: Timestamp::now_utc(),
    };

    db.insert_user(&admin).await.unwrap();
    admin
}

/// Insert an event dated `days_ahead` relative to now
pub async fn test_event(
    db: &Database,
    owner: &User,
    days_ahead: i64,
    capacity: Option<i64>,
) -> Event {
    let now = Timestamp::now_utc();
    let event = Event {
        id: ulid::Ulid::new().to_string(),
        owner: owner.id.to_string(),
        title: "Dinner party".to_string(),
        description: None,
        date: now + Duration::days(days_ahead),
        capacity,
        visibility: v0::EventVisibility::Private,
        availability: if days_ahead > 0 {
            EventAvailability::Published
        } else {
            EventAvailability::Completed
        },
        cancelled_reason: None,
        report_count: 0,
        hidden: None,
        created_at: now,
    };

    db.insert_event(&event).await.unwrap();
    event
}

/// Insert a pending guest
pub async fn test_guest(db: &Database, event: &Event, email: &str) -> Guest {
    let guest = Guest {
        id: ulid::Ulid::new().to_string(),
        event: event.id.to_string(),
        email: email.to_string(),
        name: email.split('@').next().unwrap_or(email).to_string(),
        status: v0::RsvpStatus::Pending,
        responded_at: None,
        invited_at: Timestamp::now_utc(),
    };

    db.insert_guest(&guest).await.unwrap();
    guest
}
