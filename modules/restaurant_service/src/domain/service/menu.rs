use super::{internal, Service};
use crate::contract::{MenuItem, MenuItemDraft, RestaurantError};
use crate::domain::validation;

impl Service {
    // ===== Menu Catalog =====

    pub async fn get_all_menu_items(&self) -> Result<Vec<MenuItem>, RestaurantError> {
        self.menu_repo.list_all().await.map_err(internal)
    }

    pub async fn get_menu_item_by_id(&self, id: i32) -> Result<MenuItem, RestaurantError> {
        self.menu_repo
            .find_by_id(id)
            .await
            .map_err(internal)?
            .ok_or_else(|| RestaurantError::not_found("menu_item", id))
    }

    pub async fn get_menu_items_by_category(
        &self,
        category: &str,
    ) -> Result<Vec<MenuItem>, RestaurantError> {
        self.menu_repo
            .find_by_category(category)
            .await
            .map_err(internal)
    }

    pub async fn create_menu_item(
        &self,
        draft: MenuItemDraft,
    ) -> Result<MenuItem, RestaurantError> {
        validation::validate_menu_item(&draft)?;

        let item = self.menu_repo.create(&draft).await.map_err(internal)?;
        tracing::debug!(menu_item_id = item.id, name = %item.name, "menu item created");
        Ok(item)
    }

    /// Overwrite name, description, price and category. Orders placed
    /// earlier keep the price they were created with.
    pub async fn update_menu_item(
        &self,
        id: i32,
        draft: MenuItemDraft,
    ) -> Result<MenuItem, RestaurantError> {
        validation::validate_menu_item(&draft)?;

        let mut item = self.get_menu_item_by_id(id).await?;
        item.name = draft.name;
        item.description = draft.description;
        item.price = draft.price;
        item.category = draft.category;

        let updated = self.menu_repo.update(&item).await.map_err(internal)?;
        tracing::debug!(menu_item_id = id, "menu item updated");
        Ok(updated)
    }

    pub async fn delete_menu_item(&self, id: i32) -> Result<(), RestaurantError> {
        self.get_menu_item_by_id(id).await?;

        if self
            .order_repo
            .menu_item_in_use(id)
            .await
            .map_err(internal)?
        {
            return Err(RestaurantError::conflict(format!(
                "menu item {} is referenced by existing orders",
                id
            )));
        }

        self.menu_repo.delete(id).await.map_err(internal)?;
        tracing::debug!(menu_item_id = id, "menu item deleted");
        Ok(())
    }
}
