use crate::api::models::Order;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum DashboardIntent {
    Loaded { orders: Vec<Order> },
    SortBy { key: String },
    MoveUp,
    MoveDown,
}

impl Intent for DashboardIntent {}
