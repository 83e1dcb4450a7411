use std::rc::Rc;

use log::info;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config;
use crate::counter::store::CounterStore;

/// Submission count shown on the page. Owned by `CounterProvider`; the
/// display reads it through `use_context::<CounterContext>()`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SubmissionCount(pub u64);

pub enum CounterAction {
    /// A submission went through and the store now holds this value.
    Recorded(u64),
    Reset,
}

impl Reducible for SubmissionCount {
    type Action = CounterAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = match action {
            CounterAction::Recorded(value) => self.0.max(value),
            CounterAction::Reset => 0,
        };
        if next == self.0 {
            self
        } else {
            Rc::new(Self(next))
        }
    }
}

pub type CounterContext = UseReducerHandle<SubmissionCount>;

#[derive(Properties, PartialEq)]
pub struct CounterProviderProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(CounterProvider)]
pub fn counter_provider(props: &CounterProviderProps) -> Html {
    let count = use_reducer(|| SubmissionCount(CounterStore::browser().read()));
    let reset_param = use_search_param(config::COUNTER_RESET_PARAM.to_string());

    // Maintenance: `?reset-counter` zeroes the stored count.
    {
        let count = count.clone();
        use_effect_with_deps(
            move |param| {
                if param.is_some() {
                    info!("Resetting submission counter");
                    CounterStore::browser().reset();
                    count.dispatch(CounterAction::Reset);
                }
                || ()
            },
            reset_param,
        );
    }

    html! {
        <ContextProvider<CounterContext> context={count}>
            { props.children.clone() }
        </ContextProvider<CounterContext>>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(start: u64, action: CounterAction) -> u64 {
        Rc::new(SubmissionCount(start)).reduce(action).0
    }

    #[test]
    fn recorded_value_replaces_count() {
        assert_eq!(apply(4, CounterAction::Recorded(5)), 5);
    }

    #[test]
    fn recorded_never_lowers_count() {
        assert_eq!(apply(9, CounterAction::Recorded(3)), 9);
    }

    #[test]
    fn reset_zeroes_count() {
        assert_eq!(apply(12, CounterAction::Reset), 0);
    }

    #[test]
    fn unchanged_state_is_reused() {
        let state = Rc::new(SubmissionCount(2));
        let next = state.clone().reduce(CounterAction::Recorded(2));
        assert!(Rc::ptr_eq(&state, &next));
    }
}
