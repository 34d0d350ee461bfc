//! # Reporting
//!
//! Read-only queries over the order book, joined against the customer registry.
//! Nothing here is cached: every call reads the collections as they are now.

use crate::clients::{CustomerClient, ItemClient, OrderClient};
use crate::clock::SharedClock;
use crate::customer_registry::CustomerError;
use crate::framework::Registry;
use crate::item_registry::ItemError;
use crate::model::{CustomerId, OrderId};
use crate::order_book::OrderError;
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::HashMap;
use thiserror::Error;
use tracing::{debug, instrument};

/// Shown in place of a name when an order's customer has since been deleted.
pub const UNKNOWN_CUSTOMER: &str = "Unknown";

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ReportError {
    #[error(transparent)]
    Orders(#[from] OrderError),
    #[error(transparent)]
    Customers(#[from] CustomerError),
    #[error(transparent)]
    Items(#[from] ItemError),
}

/// One row of the order history table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderHistoryEntry {
    pub order_id: OrderId,
    /// Calendar date (UTC) the order was placed.
    pub date: NaiveDate,
    pub customer_id: CustomerId,
    pub customer_name: String,
    pub total: f64,
}

/// Headline counts for a dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DashboardSummary {
    pub customers: usize,
    pub items: usize,
    pub orders_today: usize,
}

/// Report queries. Cheap to clone; holds only client handles and the clock.
#[derive(Clone)]
pub struct OrderReports {
    orders: OrderClient,
    customers: CustomerClient,
    items: ItemClient,
    clock: SharedClock,
}

impl OrderReports {
    pub fn new(
        orders: OrderClient,
        customers: CustomerClient,
        items: ItemClient,
        clock: SharedClock,
    ) -> Self {
        Self {
            orders,
            customers,
            items,
            clock,
        }
    }

    /// Number of orders whose `placed_at` falls on `date` (UTC).
    #[instrument(skip(self))]
    pub async fn orders_placed_on(&self, date: NaiveDate) -> Result<usize, ReportError> {
        let count = self
            .orders
            .list()
            .await?
            .iter()
            .filter(|order| order.placed_at.date_naive() == date)
            .count();
        debug!(count, "Counted orders");
        Ok(count)
    }

    /// Number of orders placed on the clock's current date.
    pub async fn orders_placed_today(&self) -> Result<usize, ReportError> {
        self.orders_placed_on(self.clock.today()).await
    }

    /// Every order in placement order, with the customer's current name.
    #[instrument(skip(self))]
    pub async fn order_history(&self) -> Result<Vec<OrderHistoryEntry>, ReportError> {
        let orders = self.orders.list().await?;
        let names: HashMap<CustomerId, String> = self
            .customers
            .list()
            .await?
            .into_iter()
            .map(|customer| (customer.id, customer.name))
            .collect();

        let history = orders
            .into_iter()
            .map(|order| OrderHistoryEntry {
                order_id: order.id,
                date: order.placed_at.date_naive(),
                customer_id: order.customer_id,
                customer_name: names
                    .get(&order.customer_id)
                    .cloned()
                    .unwrap_or_else(|| UNKNOWN_CUSTOMER.to_string()),
                total: order.total(),
            })
            .collect::<Vec<_>>();
        debug!(rows = history.len(), "Built order history");
        Ok(history)
    }

    pub async fn dashboard(&self) -> Result<DashboardSummary, ReportError> {
        Ok(DashboardSummary {
            customers: self.customers.count().await?,
            items: self.items.count().await?,
            orders_today: self.orders_placed_today().await?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::framework::mock::MockClient;
    use crate::framework::StoreError;
    use crate::model::{Customer, CustomerFields, Item, ItemId, Order, OrderLine};
    use chrono::{TimeZone, Utc};
    use std::sync::Arc;

    fn order(id: u32, customer: u32, day: u32, total: f64) -> Order {
        Order {
            id: OrderId(id),
            customer_id: CustomerId(customer),
            lines: vec![OrderLine {
                line_id: 1,
                order_id: OrderId(id),
                item_id: ItemId(1),
                qty: 1,
                unit_price: total,
            }],
            placed_at: Utc.with_ymd_and_hms(2024, 3, day, 12, 0, 0).unwrap(),
        }
    }

    fn reports(
        orders: &MockClient<Order>,
        customers: &MockClient<Customer>,
        items: &MockClient<Item>,
    ) -> OrderReports {
        let now = Utc.with_ymd_and_hms(2024, 3, 2, 18, 0, 0).unwrap();
        OrderReports::new(
            OrderClient::new(orders.client()),
            CustomerClient::new(customers.client()),
            ItemClient::new(items.client()),
            Arc::new(FixedClock(now)),
        )
    }

    #[tokio::test]
    async fn test_orders_placed_today_counts_only_today() {
        let mut orders = MockClient::<Order>::new();
        orders
            .expect_list()
            .return_ok(vec![order(1, 1, 1, 5.0), order(2, 1, 2, 5.0), order(3, 1, 2, 5.0)]);
        let (customers, items) = (MockClient::new(), MockClient::new());

        let count = reports(&orders, &customers, &items)
            .orders_placed_today()
            .await
            .unwrap();

        assert_eq!(count, 2);
        orders.verify();
    }

    #[tokio::test]
    async fn test_history_marks_deleted_customers_unknown() {
        let mut orders = MockClient::<Order>::new();
        orders
            .expect_list()
            .return_ok(vec![order(1, 1, 1, 25.0), order(2, 7, 2, 3.5)]);
        let mut customers = MockClient::<Customer>::new();
        customers.expect_list().return_ok(vec![Customer::new(
            CustomerId(1),
            CustomerFields::new("Alice", "1 Rd", "N1", "077", "a@x.com"),
        )]);
        let items = MockClient::new();

        let history = reports(&orders, &customers, &items)
            .order_history()
            .await
            .unwrap();

        assert_eq!(history.len(), 2);
        assert_eq!(history[0].customer_name, "Alice");
        assert_eq!(history[0].total, 25.0);
        assert_eq!(history[1].customer_name, UNKNOWN_CUSTOMER);
        assert_eq!(history[1].date, NaiveDate::from_ymd_opt(2024, 3, 2).unwrap());
    }

    #[tokio::test]
    async fn test_store_failure_is_reported() {
        let mut orders = MockClient::<Order>::new();
        orders.expect_list().return_err(StoreError::ActorClosed);
        let (customers, items) = (MockClient::new(), MockClient::new());

        let err = reports(&orders, &customers, &items)
            .order_history()
            .await
            .unwrap_err();

        assert!(matches!(err, ReportError::Orders(OrderError::Communication(_))));
    }
}
