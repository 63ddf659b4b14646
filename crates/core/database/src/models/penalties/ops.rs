use gather_result::Result;

use crate::Penalty;

#[cfg(feature = "mongodb")]
mod mongodb;
mod reference;

#[async_trait]
pub trait AbstractPenalties: Sync + Send {
    /// Insert a new penalty into the database
    async fn insert_penalty(&self, penalty: &Penalty) -> Result<()>;

    /// Fetch a penalty from the database
    async fn fetch_penalty(&self, id: &str) -> Result<Penalty>;

    /// Fetch all penalties issued against a user
    async fn fetch_penalties_by_user(&self, user_id: &str) -> Result<Vec<Penalty>>;

    /// Deactivate every active penalty issued against a user
    async fn deactivate_penalties_by_user(&self, user_id: &str) -> Result<()>;
}
