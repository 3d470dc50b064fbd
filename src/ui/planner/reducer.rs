use crate::planner::{respond, ChatMessage};
use crate::ui::mvi::Reducer;
use crate::ui::planner::intent::PlannerIntent;
use crate::ui::planner::state::PlannerState;

const GREETING: &str = "Hi! I'm your event planning assistant. Tell me what kind of event \
                        you're organizing, for example a wedding, a corporate team building \
                        day, or a product launch, and I'll suggest the tasks to get it done.";

const DEFAULT_PROJECT: &str = "New Event";

pub struct PlannerReducer;

impl Reducer for PlannerReducer {
    type State = PlannerState;
    type Intent = PlannerIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            PlannerIntent::Opened { now } => {
                if !state.messages.is_empty() {
                    return state;
                }
                PlannerState {
                    messages: vec![ChatMessage::assistant(GREETING, now, Vec::new())],
                    project_name: DEFAULT_PROJECT.to_string(),
                    ..state
                }
            }
            PlannerIntent::Input(ch) => {
                let mut input = state.input.clone();
                input.push(ch);
                PlannerState { input, ..state }
            }
            PlannerIntent::Backspace => {
                let mut input = state.input.clone();
                input.pop();
                PlannerState { input, ..state }
            }
            PlannerIntent::Submit { now } => {
                let content = state.input.trim().to_string();
                if content.is_empty() {
                    return state;
                }
                let reply = respond(&content, &state.project_name);
                let mut messages = state.messages.clone();
                messages.push(ChatMessage::user(content, now));
                messages.push(ChatMessage::assistant(
                    reply.content,
                    now,
                    reply.suggestions,
                ));
                PlannerState {
                    messages,
                    input: String::new(),
                    selected_suggestion: 0,
                    scroll: 0,
                    ..state
                }
            }
            PlannerIntent::SortSuggestions { key } => {
                let Some(message) = state.latest_suggestions() else {
                    return state;
                };
                let id = message.id;
                let cycled = state.sort_for(id).cycle(&key);
                let mut sorts = state.suggestion_sorts.clone();
                sorts.insert(id, cycled);
                PlannerState {
                    suggestion_sorts: sorts,
                    ..state
                }
            }
            PlannerIntent::SelectUp => PlannerState {
                selected_suggestion: state.selected_suggestion.saturating_sub(1),
                ..state
            },
            PlannerIntent::SelectDown => {
                let last = state
                    .latest_suggestions()
                    .map(|m| m.suggestions.len().saturating_sub(1))
                    .unwrap_or(0);
                PlannerState {
                    selected_suggestion: (state.selected_suggestion + 1).min(last),
                    ..state
                }
            }
            PlannerIntent::ScrollUp => PlannerState {
                scroll: state.scroll + 1,
                ..state
            },
            PlannerIntent::ScrollDown => PlannerState {
                scroll: state.scroll.saturating_sub(1),
                ..state
            },
        }
    }
}
