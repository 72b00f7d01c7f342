//! Dropdown selectors for the scatterplot axes.

use crate::state::AppState;
use dioxus::prelude::*;
use tmd_diagnostics::attributes::TopicAttr;

/// Which axis a selector controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisRole {
    X,
    Y,
}

impl AxisRole {
    fn select_id(self) -> &'static str {
        match self {
            AxisRole::X => "x-attr-select",
            AxisRole::Y => "y-attr-select",
        }
    }

    fn label_text(self) -> &'static str {
        match self {
            AxisRole::X => "X axis: ",
            AxisRole::Y => "Y axis: ",
        }
    }
}

/// Axis attribute dropdown.
/// Options come from the topic attribute catalog in catalog order; selecting
/// one updates the corresponding axis signal and the plot re-renders
/// reactively.
#[component]
pub fn AxisSelector(role: AxisRole) -> Element {
    let mut state = use_context::<AppState>();
    let current = match role {
        AxisRole::X => (state.x_attr)(),
        AxisRole::Y => (state.y_attr)(),
    };

    let select_id = role.select_id();
    let label_text = role.label_text();
    let options: Vec<(&'static str, String, bool)> = TopicAttr::ALL
        .iter()
        .map(|attr| (attr.xml_name(), attr.label(), *attr == current))
        .collect();

    let on_change = move |evt: Event<FormData>| {
        // Options are generated from the catalog, so lookup only fails if
        // the DOM was edited by hand; ignore that case.
        if let Some(attr) = TopicAttr::from_xml_name(&evt.value()) {
            match role {
                AxisRole::X => state.x_attr.set(attr),
                AxisRole::Y => state.y_attr.set(attr),
            }
        }
    };

    rsx! {
        label {
            r#for: select_id,
            style: "font-weight: bold; margin-right: 8px;",
            "{label_text}"
        }
        select {
            id: select_id,
            onchange: on_change,
            for (value, label, is_current) in options {
                option {
                    value: value,
                    selected: is_current,
                    "{label}"
                }
            }
        }
    }
}
