//! Dropdown selector for choosing a field.

use crate::state::CropDashboardState;
use dioxus::prelude::*;

/// Field dropdown selector.
/// Lists the fields of the current snapshot and updates the selection on change.
#[component]
pub fn FieldSelector() -> Element {
    let mut state = use_context::<CropDashboardState>();
    let (options, selected) = {
        let analysis = state.analysis.read();
        let options: Vec<(String, String)> = analysis
            .snapshot()
            .fields
            .iter()
            .map(|field| (field.id.to_string(), field.option_label()))
            .collect();
        (options, analysis.selected_field_id().to_string())
    };

    let on_change = move |evt: Event<FormData>| {
        let value = evt.value();
        state.analysis.write().select_field(&value);
    };

    rsx! {
        div {
            class: "field-selector",
            style: "margin: 8px 0;",
            select {
                id: "field-select",
                onchange: on_change,
                option {
                    value: "",
                    selected: selected.is_empty(),
                    "Select a field..."
                }
                for (id, label) in options.into_iter() {
                    option {
                        key: "{id}",
                        selected: id == selected,
                        value: "{id}",
                        "{label}"
                    }
                }
            }
        }
    }
}
