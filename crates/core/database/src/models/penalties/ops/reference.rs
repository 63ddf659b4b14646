use gather_result::Result;

use crate::Penalty;
use crate::ReferenceDb;

use super::AbstractPenalties;

#[async_trait]
impl AbstractPenalties for ReferenceDb {
    /// Insert a new penalty into the database
    async fn insert_penalty(&self, penalty: &Penalty) -> Result<()> {
        let mut penalties = self.penalties.lock().await;
        if penalties.contains_key(&penalty.id) {
            Err(create_database_error!("insert", "penalty"))
        } else {
            penalties.insert(penalty.id.to_string(), penalty.clone());
            Ok(())
        }
    }

    /// Fetch a penalty from the database
    async fn fetch_penalty(&self, id: &str) -> Result<Penalty> {
        let penalties = self.penalties.lock().await;
        penalties
            .get(id)
            .cloned()
            .ok_or_else(|| create_error!(NotFound))
    }

    /// Fetch all penalties issued against a user
    async fn fetch_penalties_by_user(&self, user_id: &str) -> Result<Vec<Penalty>> {
        let penalties = self.penalties.lock().await;
        Ok(penalties
            .values()
            .filter(|penalty| penalty.user_id == user_id)
            .cloned()
            .collect())
    }

    /// Deactivate every active penalty issued against a user
    async fn deactivate_penalties_by_user(&self, user_id: &str) -> Result<()> {
        let mut penalties = self.penalties.lock().await;
        for penalty in penalties.values_mut() {
            if penalty.user_id == user_id {
                penalty.is_active = false;
            }
        }
        Ok(())
    }
}
