mod admin_migrations;
mod event_guests;
mod events;
mod penalties;
mod safety_reports;
mod users;

pub use admin_migrations::*;
pub use event_guests::*;
pub use events::*;
pub use penalties::*;
pub use safety_reports::*;
pub use users::*;

use crate::{Database, ReferenceDb};

#[cfg(feature = "mongodb")]
use crate::MongoDb;

pub trait AbstractDatabase:
    Sync
    + Send
    + admin_migrations::AbstractMigrations
    + event_guests::AbstractEventGuests
    + events::AbstractEvents
    + penalties::AbstractPenalties
    + safety_reports::AbstractReports
    + users::AbstractUsers
{
}

impl AbstractDatabase for ReferenceDb {}

#[cfg(feature = "mongodb")]
impl AbstractDatabase for MongoDb {}

impl std::ops::Deref for Database {
    type Target = dyn AbstractDatabase;

    fn deref(&self) -> &Self::Target {
        match &self {
            Database::Reference(dummy) => dummy,
            #[cfg(feature = "mongodb")]
            Database::MongoDb(mongo) => mongo,
        }
    }
}
