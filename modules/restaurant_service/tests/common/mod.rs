//! Common test utilities: in-memory repositories and seeding helpers

#![allow(dead_code)]

use async_trait::async_trait;
use parking_lot::RwLock;
use restaurant_service::contract::*;
use restaurant_service::domain::repository::{
    MenuItemRepository, OrderRepository, TableRepository,
};
use restaurant_service::domain::Service;
use restaurant_service::Config;
use rust_decimal::Decimal;
use std::collections::BTreeMap;
use std::sync::Arc;

#[derive(Default)]
struct State {
    menu: BTreeMap<i32, MenuItem>,
    tables: BTreeMap<i32, DiningTable>,
    orders: BTreeMap<i32, Order>,
    next_id: i32,
}

impl State {
    fn next_id(&mut self) -> i32 {
        self.next_id += 1;
        self.next_id
    }
}

/// One store backing all three repositories, so order writes can flip table
/// occupancy the same way the database transaction does.
#[derive(Default)]
pub struct InMemoryStore {
    state: RwLock<State>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn order_count(&self) -> usize {
        self.state.read().orders.len()
    }

    pub fn table_snapshot(&self, id: i32) -> Option<DiningTable> {
        self.state.read().tables.get(&id).copied()
    }

    /// Print verbose information about store state
    pub fn print_state(&self, context: &str) {
        let state = self.state.read();
        println!("\n========== Store State: {} ==========", context);
        println!("Menu items: {}", state.menu.len());
        for table in state.tables.values() {
            println!(
                "  Table {} (id {}): capacity {}, occupied {}",
                table.table_number, table.id, table.capacity, table.occupied
            );
        }
        for order in state.orders.values() {
            println!(
                "  Order {} on table {}: {} lines, total {}, {}",
                order.id,
                order.table_id,
                order.lines.len(),
                order.total_amount,
                order.status
            );
        }
        println!("==========================================\n");
    }
}

#[async_trait]
impl MenuItemRepository for InMemoryStore {
    async fn create(&self, draft: &MenuItemDraft) -> anyhow::Result<MenuItem> {
        let mut state = self.state.write();
        let item = MenuItem {
            id: state.next_id(),
            name: draft.name.clone(),
            description: draft.description.clone(),
            price: draft.price,
            category: draft.category.clone(),
        };
        state.menu.insert(item.id, item.clone());
        Ok(item)
    }

    async fn find_by_id(&self, id: i32) -> anyhow::Result<Option<MenuItem>> {
        Ok(self.state.read().menu.get(&id).cloned())
    }

    async fn list_all(&self) -> anyhow::Result<Vec<MenuItem>> {
        Ok(self.state.read().menu.values().cloned().collect())
    }

    async fn find_by_category(&self, category: &str) -> anyhow::Result<Vec<MenuItem>> {
        Ok(self
            .state
            .read()
            .menu
            .values()
            .filter(|item| item.category == category)
            .cloned()
            .collect())
    }

    async fn update(&self, item: &MenuItem) -> anyhow::Result<MenuItem> {
        let mut state = self.state.write();
        let slot = state
            .menu
            .get_mut(&item.id)
            .ok_or_else(|| anyhow::anyhow!("menu item {} missing", item.id))?;
        *slot = item.clone();
        Ok(item.clone())
    }

    async fn delete(&self, id: i32) -> anyhow::Result<()> {
        self.state.write().menu.remove(&id);
        Ok(())
    }
}

#[async_trait]
impl TableRepository for InMemoryStore {
    async fn create(&self, draft: &TableDraft) -> anyhow::Result<DiningTable> {
        let mut state = self.state.write();
        let table = DiningTable {
            id: state.next_id(),
            table_number: draft.table_number,
            capacity: draft.capacity,
            occupied: draft.occupied,
        };
        state.tables.insert(table.id, table);
        Ok(table)
    }

    async fn find_by_id(&self, id: i32) -> anyhow::Result<Option<DiningTable>> {
        Ok(self.state.read().tables.get(&id).copied())
    }

    async fn find_by_number(&self, table_number: i32) -> anyhow::Result<Option<DiningTable>> {
        Ok(self
            .state
            .read()
            .tables
            .values()
            .find(|table| table.table_number == table_number)
            .copied())
    }

    async fn list_all(&self) -> anyhow::Result<Vec<DiningTable>> {
        let mut tables: Vec<_> = self.state.read().tables.values().copied().collect();
        tables.sort_by_key(|table| table.table_number);
        Ok(tables)
    }

    async fn find_by_occupied(&self, occupied: bool) -> anyhow::Result<Vec<DiningTable>> {
        let mut tables: Vec<_> = self
            .state
            .read()
            .tables
            .values()
            .filter(|table| table.occupied == occupied)
            .copied()
            .collect();
        tables.sort_by_key(|table| table.table_number);
        Ok(tables)
    }

    async fn update(&self, table: &DiningTable) -> anyhow::Result<DiningTable> {
        let mut state = self.state.write();
        let slot = state
            .tables
            .get_mut(&table.id)
            .ok_or_else(|| anyhow::anyhow!("table {} missing", table.id))?;
        *slot = *table;
        Ok(*table)
    }

    async fn delete(&self, id: i32) -> anyhow::Result<()> {
        self.state.write().tables.remove(&id);
        Ok(())
    }
}

#[async_trait]
impl OrderRepository for InMemoryStore {
    async fn create(&self, new_order: &NewOrder, occupy_table: bool) -> anyhow::Result<Order> {
        let mut state = self.state.write();

        if occupy_table {
            let table = state
                .tables
                .get_mut(&new_order.table_id)
                .ok_or_else(|| anyhow::anyhow!("table {} missing", new_order.table_id))?;
            table.occupied = true;
        }

        let id = state.next_id();
        let mut lines = Vec::with_capacity(new_order.lines.len());
        for line in &new_order.lines {
            lines.push(OrderLine {
                id: state.next_id(),
                menu_item_id: line.menu_item_id,
                menu_item_name: line.menu_item_name.clone(),
                unit_price: line.unit_price,
                quantity: line.quantity,
                special_instructions: line.special_instructions.clone(),
            });
        }

        let order = Order {
            id,
            table_id: new_order.table_id,
            created_at: new_order.created_at,
            lines,
            total_amount: new_order.total_amount,
            status: new_order.status,
        };
        state.orders.insert(id, order.clone());
        Ok(order)
    }

    async fn find_by_id(&self, id: i32) -> anyhow::Result<Option<Order>> {
        Ok(self.state.read().orders.get(&id).cloned())
    }

    async fn list_all(&self) -> anyhow::Result<Vec<Order>> {
        Ok(self.state.read().orders.values().cloned().collect())
    }

    async fn find_by_status(&self, status: OrderStatus) -> anyhow::Result<Vec<Order>> {
        Ok(self
            .state
            .read()
            .orders
            .values()
            .filter(|order| order.status == status)
            .cloned()
            .collect())
    }

    async fn find_by_table(&self, table_id: i32) -> anyhow::Result<Vec<Order>> {
        Ok(self
            .state
            .read()
            .orders
            .values()
            .filter(|order| order.table_id == table_id)
            .cloned()
            .collect())
    }

    async fn update_status(
        &self,
        id: i32,
        status: OrderStatus,
        release_table: bool,
    ) -> anyhow::Result<Order> {
        let mut state = self.state.write();

        let order = state
            .orders
            .get_mut(&id)
            .ok_or_else(|| anyhow::anyhow!("order {} missing", id))?;
        order.status = status;
        let updated = order.clone();

        if release_table {
            let table = state
                .tables
                .get_mut(&updated.table_id)
                .ok_or_else(|| anyhow::anyhow!("table {} missing", updated.table_id))?;
            table.occupied = false;
        }

        Ok(updated)
    }

    async fn menu_item_in_use(&self, menu_item_id: i32) -> anyhow::Result<bool> {
        Ok(self
            .state
            .read()
            .orders
            .values()
            .flat_map(|order| order.lines.iter())
            .any(|line| line.menu_item_id == menu_item_id))
    }
}

pub fn create_test_service(config: Config) -> (Service, Arc<InMemoryStore>) {
    let store = Arc::new(InMemoryStore::new());
    let service = Service::new(
        store.clone() as Arc<dyn MenuItemRepository>,
        store.clone() as Arc<dyn TableRepository>,
        store.clone() as Arc<dyn OrderRepository>,
        config,
    );
    (service, store)
}

pub fn dec(value: &str) -> Decimal {
    value.parse().unwrap()
}

pub fn menu_draft(name: &str, price: &str, category: &str) -> MenuItemDraft {
    MenuItemDraft {
        name: name.to_string(),
        description: None,
        price: dec(price),
        category: category.to_string(),
    }
}

pub fn table_draft(table_number: i32, capacity: i32) -> TableDraft {
    TableDraft {
        table_number,
        capacity,
        occupied: false,
    }
}

pub fn line(menu_item_id: i32, quantity: i32) -> OrderLineRequest {
    OrderLineRequest {
        menu_item_id,
        quantity,
        special_instructions: None,
    }
}

pub async fn seed_menu_item(service: &Service, name: &str, price: &str, category: &str) -> MenuItem {
    service
        .create_menu_item(menu_draft(name, price, category))
        .await
        .unwrap()
}

pub async fn seed_table(service: &Service, table_number: i32, capacity: i32) -> DiningTable {
    service
        .create_table(table_draft(table_number, capacity))
        .await
        .unwrap()
}
