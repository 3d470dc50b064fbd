use crate::api::models::Order;
use crate::sort::{sort_rows, SortState};
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct DashboardState {
    pub orders: Vec<Order>,
    pub loaded: bool,
    pub sort: SortState,
    pub selected: usize,
}

impl UiState for DashboardState {}

impl DashboardState {
    pub fn visible_orders(&self) -> Vec<Order> {
        sort_rows(&self.orders, &self.sort)
    }
}
