use crate::ui::dashboard::intent::DashboardIntent;
use crate::ui::dashboard::state::DashboardState;
use crate::ui::mvi::Reducer;

pub struct DashboardReducer;

impl Reducer for DashboardReducer {
    type State = DashboardState;
    type Intent = DashboardIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            DashboardIntent::Loaded { orders } => {
                let selected = if orders.is_empty() {
                    0
                } else {
                    state.selected.min(orders.len() - 1)
                };
                DashboardState {
                    orders,
                    loaded: true,
                    selected,
                    ..state
                }
            }
            DashboardIntent::SortBy { key } => DashboardState {
                sort: state.sort.cycle(&key),
                ..state
            },
            DashboardIntent::MoveUp => DashboardState {
                selected: state.selected.saturating_sub(1),
                ..state
            },
            DashboardIntent::MoveDown => {
                let last = state.orders.len().saturating_sub(1);
                DashboardState {
                    selected: (state.selected + 1).min(last),
                    ..state
                }
            }
        }
    }
}
