use super::{internal, Service};
use crate::contract::{DiningTable, RestaurantError, TableDraft};
use crate::domain::validation;

impl Service {
    // ===== Table Registry =====

    pub async fn get_all_tables(&self) -> Result<Vec<DiningTable>, RestaurantError> {
        self.table_repo.list_all().await.map_err(internal)
    }

    pub async fn get_table_by_id(&self, id: i32) -> Result<DiningTable, RestaurantError> {
        self.table_repo
            .find_by_id(id)
            .await
            .map_err(internal)?
            .ok_or_else(|| RestaurantError::not_found("table", id))
    }

    /// Tables that are not occupied
    pub async fn get_available_tables(&self) -> Result<Vec<DiningTable>, RestaurantError> {
        self.table_repo
            .find_by_occupied(false)
            .await
            .map_err(internal)
    }

    pub async fn create_table(&self, draft: TableDraft) -> Result<DiningTable, RestaurantError> {
        validation::validate_table(&draft)?;
        self.ensure_table_number_free(draft.table_number, None)
            .await?;

        let table = self.table_repo.create(&draft).await.map_err(internal)?;
        tracing::debug!(
            table_id = table.id,
            table_number = table.table_number,
            "table created"
        );
        Ok(table)
    }

    /// Overwrite number, capacity and occupied flag
    pub async fn update_table(
        &self,
        id: i32,
        draft: TableDraft,
    ) -> Result<DiningTable, RestaurantError> {
        validation::validate_table(&draft)?;

        let mut table = self.get_table_by_id(id).await?;
        self.ensure_table_number_free(draft.table_number, Some(id))
            .await?;

        table.table_number = draft.table_number;
        table.capacity = draft.capacity;
        table.occupied = draft.occupied;

        let updated = self.table_repo.update(&table).await.map_err(internal)?;
        tracing::debug!(table_id = id, occupied = updated.occupied, "table updated");
        Ok(updated)
    }

    pub async fn delete_table(&self, id: i32) -> Result<(), RestaurantError> {
        self.get_table_by_id(id).await?;

        let orders = self
            .order_repo
            .find_by_table(id)
            .await
            .map_err(internal)?;
        if !orders.is_empty() {
            return Err(RestaurantError::conflict(format!(
                "table {} is referenced by {} order(s)",
                id,
                orders.len()
            )));
        }

        self.table_repo.delete(id).await.map_err(internal)?;
        tracing::debug!(table_id = id, "table deleted");
        Ok(())
    }

    // ===== Helper Methods =====

    /// Fail with `Conflict` when another table already uses `table_number`
    async fn ensure_table_number_free(
        &self,
        table_number: i32,
        own_id: Option<i32>,
    ) -> Result<(), RestaurantError> {
        let existing = self
            .table_repo
            .find_by_number(table_number)
            .await
            .map_err(internal)?;

        match existing {
            Some(other) if Some(other.id) != own_id => Err(RestaurantError::conflict(format!(
                "table number {} is already used by table {}",
                table_number, other.id
            ))),
            _ => Ok(()),
        }
    }
}
