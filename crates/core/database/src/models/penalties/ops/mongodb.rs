use mongodb::bson::doc;

use gather_result::Result;

use crate::MongoDb;
use crate::Penalty;

use super::AbstractPenalties;

static COL: &str = "penalties";

#[async_trait]
impl AbstractPenalties for MongoDb {
    /// Insert a new penalty into the database
    async fn insert_penalty(&self, penalty: &Penalty) -> Result<()> {
        query!(self, insert_one, COL, penalty).map(|_| ())
    }

    /// Fetch a penalty from the database
    async fn fetch_penalty(&self, id: &str) -> Result<Penalty> {
        query!(self, find_one_by_id, COL, id)?.ok_or_else(|| create_error!(NotFound))
    }

    /// Fetch all penalties issued against a user
    async fn fetch_penalties_by_user(&self, user_id: &str) -> Result<Vec<Penalty>> {
        query!(
            self,
            find,
            COL,
            doc! {
                "user_id": user_id
            }
        )
    }

    /// Deactivate every active penalty issued against a user
    async fn deactivate_penalties_by_user(&self, user_id: &str) -> Result<()> {
        self.col::<Penalty>(COL)
            .update_many(
                doc! {
                    "user_id": user_id,
                    "is_active": true
                },
                doc! {
                    "$set": {
                        "is_active": false
                    }
                },
            )
            .await
            .map(|_| ())
            .map_err(|_| create_database_error!("update_many", COL))
    }
}
