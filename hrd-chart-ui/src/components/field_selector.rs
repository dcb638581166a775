//! Dropdown over a fixed field catalog.

use dioxus::prelude::*;
use hrd_core::Field;

#[derive(Props, Clone, PartialEq)]
pub struct FieldSelectorProps {
    /// DOM id of the `<select>`
    pub id: String,
    /// Options in display order
    pub options: &'static [Field],
    /// Signal updated with the chosen field
    pub selected: Signal<Field>,
}

/// Field dropdown. Options show the display name and carry the column name.
#[component]
pub fn FieldSelector(props: FieldSelectorProps) -> Element {
    let mut selected = props.selected;
    let current = selected();

    let on_change = move |evt: Event<FormData>| {
        if let Some(field) = Field::from_column(&evt.value()) {
            selected.set(field);
        }
    };

    rsx! {
        select {
            id: "{props.id}",
            "aria-label": "Variable",
            style: "flex: 1; padding: 4px;",
            onchange: on_change,
            for field in props.options.iter() {
                option {
                    value: "{field.column()}",
                    selected: *field == current,
                    "{field.label()}"
                }
            }
        }
    }
}
