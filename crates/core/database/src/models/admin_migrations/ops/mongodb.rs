use mongodb::bson::{doc, from_document, Document};
use mongodb::options::IndexOptions;
use mongodb::IndexModel;

use crate::{MigrationInfo, MongoDb};

use super::AbstractMigrations;

pub const LATEST_REVISION: i32 = 1; // MUST BE +1 to last migration

#[async_trait]
impl AbstractMigrations for MongoDb {
    #[cfg(test)]
    /// Drop the database
    async fn drop_database(&self) {
        self.db().drop().await.ok();
    }

    /// Migrate the database
    async fn migrate_database(&self) -> Result<(), ()> {
        info!("Migrating the database.");

        let list = self
            .list_database_names()
            .await
            .expect("Failed to fetch database names.");

        if list.iter().any(|x| x == &self.1) {
            migrate_database(self).await;
        } else {
            create_database(self).await;
        }

        Ok(())
    }
}

async fn create_database(db: &MongoDb) {
    info!("Creating database.");
    let db = db.db();

    for collection in [
        "users",
        "events",
        "event_guests",
        "safety_reports",
        "penalties",
        "migrations",
    ] {
        db.create_collection(collection)
            .await
            .expect("Failed to create collection.");
    }

    // One report per user per event
    db.collection::<Document>("safety_reports")
        .create_index(
            IndexModel::builder()
                .keys(doc! {
                    "event_id": 1_i32,
                    "author_id": 1_i32
                })
                .options(IndexOptions::builder().unique(true).build())
                .build(),
        )
        .await
        .expect("Failed to create report index.");

    // One guest per email address per event
    db.collection::<Document>("event_guests")
        .create_index(
            IndexModel::builder()
                .keys(doc! {
                    "event": 1_i32,
                    "email": 1_i32
                })
                .options(IndexOptions::builder().unique(true).build())
                .build(),
        )
        .await
        .expect("Failed to create guest index.");

    db.collection::<Document>("migrations")
        .insert_one(doc! {
            "_id": 0_i32,
            "revision": LATEST_REVISION
        })
        .await
        .expect("Failed to write migration information.");
}

async fn migrate_database(db: &MongoDb) {
    let migrations = db.col::<Document>("migrations");
    let data = migrations
        .find_one(doc! {})
        .await
        .expect("Failed to fetch migration data.");

    if let Some(doc) = data {
        let info: MigrationInfo =
            from_document(doc).expect("Failed to read migration information.");

        let revision = run_migrations(db, info.revision).await;

        migrations
            .update_one(
                doc! {
                    "_id": info.id
                },
                doc! {
                    "$set": {
                        "revision": revision
                    }
                },
            )
            .await
            .expect("Failed to commit migration information.");

        info!("Migration complete. Currently at revision {}.", revision);
    } else {
        panic!("Database was configured incorrectly, possibly because initalization failed.")
    }
}

async fn run_migrations(_db: &MongoDb, revision: i32) -> i32 {
    info!("Starting database migration.");

    if revision <= 0 {
        info!("Running migration [revision 0]: Verify database is at latest revision.");
    }

    LATEST_REVISION.max(revision)
}
