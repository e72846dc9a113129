pub mod navigation;
pub mod reducer;
pub mod store;
mod view;

pub use reducer::{Action, State, ViewStore};
pub use view::SynergyApp;

pub struct SynergyReducer;
use navicula::reducer::Reducer;

impl Reducer for SynergyReducer {
    type Message = Action;

    type DelegateMessage = Action;

    type Action = Action;

    type State = State;

    type Environment = crate::environment::Environment;

    fn reduce<'a, 'b>(
        context: &'a impl navicula::types::MessageContext<
            Self::Action,
            Self::DelegateMessage,
            Self::Message,
        >,
        action: Self::Action,
        state: &'a mut Self::State,
        environment: &'a Self::Environment,
    ) -> navicula::effect::Effect<'b, Self::Action> {
        reducer::reduce(context, action, state, environment)
    }

    fn initial_action() -> Option<Self::Action> {
        Some(Action::Initial)
    }
}
