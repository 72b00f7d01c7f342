//! The linked word table.
//!
//! One row per topic in id order: a label cell ("<id+1>. ") followed by the
//! topic's ranked words, each colored on the coherence ramp. Clicking a row
//! label selects its topic; the selected row's label renders bold. The
//! container scrolls, and mark clicks scroll it toward the selected row.

use crate::dom::TABLE_CONTAINER_ID;
use crate::state::AppState;
use dioxus::prelude::*;
use tmd_scale::color::coherence_color;
use tmd_scale::table::label_weight;

/// Matches the plot height so the two sit side by side.
const TABLE_HEIGHT_PX: u32 = 800;

/// Scrollable topic/word table.
#[component]
pub fn TopicTable() -> Element {
    let mut state = use_context::<AppState>();
    let topics = state.topics.read();
    let selected = (state.selected)();

    let container_style = format!(
        "display: inline-block; vertical-align: top; height: {TABLE_HEIGHT_PX}px; \
         overflow-y: auto; margin-left: 16px; max-width: 480px;"
    );

    // (id, label, label_style, words as (color, text) pairs)
    let rows: Vec<(usize, String, String, Vec<(String, String)>)> = topics
        .iter()
        .map(|topic| {
            let weight = label_weight(selected, topic.id);
            let words = topic
                .words
                .iter()
                .map(|w| (coherence_color(w.coherence), w.text.clone()))
                .collect();
            (
                topic.id,
                format!("{}. ", topic.id + 1),
                format!("font-weight: {weight}; cursor: pointer;"),
                words,
            )
        })
        .collect();

    rsx! {
        div {
            id: TABLE_CONTAINER_ID,
            style: "{container_style}",
            table {
                for (id, label, label_style, words) in rows {
                    tr { key: "{id}",
                        td {
                            style: "{label_style}",
                            onclick: move |_| state.selected.set(Some(id)),
                            "{label}"
                            for (color, text) in words {
                                span { style: "color: {color};", "{text} " }
                            }
                        }
                    }
                }
            }
        }
    }
}
