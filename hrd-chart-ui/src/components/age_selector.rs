//! Age bracket dropdown with the "All ages" sentinel first.

use crate::state::AppState;
use dioxus::prelude::*;
use hrd_core::{AgeFilter, ALL_AGES_LABEL};

/// Reads the available brackets from AppState and updates `age_filter`.
#[component]
pub fn AgeSelector() -> Element {
    let mut state = use_context::<AppState>();
    let brackets = state.age_brackets.read().clone();
    let current = (state.age_filter)();

    let on_change = move |evt: Event<FormData>| {
        state.age_filter.set(AgeFilter::from_selection(&evt.value()));
    };

    rsx! {
        select {
            id: "age-select",
            "aria-label": "Age group",
            style: "flex: 1; padding: 4px;",
            onchange: on_change,
            option {
                value: ALL_AGES_LABEL,
                selected: current == AgeFilter::All,
                "{ALL_AGES_LABEL}"
            }
            for bracket in brackets.iter() {
                option {
                    value: "{bracket}",
                    selected: current.bracket() == Some(bracket.as_str()),
                    "{bracket}"
                }
            }
        }
    }
}
