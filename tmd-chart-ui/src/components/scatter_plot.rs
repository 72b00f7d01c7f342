//! The topic scatterplot.
//!
//! An 800x800 SVG: two axes fitted to the extent of the selected attributes
//! and one mark (circle plus id label) per topic. Everything here is a pure
//! projection of `AppState`. Clicking a mark selects its topic and scrolls
//! the word table toward its row.

use crate::dom;
use crate::state::{AppState, RenderPhase};
use dioxus::prelude::*;
use tmd_diagnostics::attributes::TopicAttr;
use tmd_diagnostics::topic::Topic;
use tmd_scale::color::mark_fill;
use tmd_scale::linear::{extent, tick_label, LinearScale};

/// Logical drawing surface size, in pixels.
pub const WIDTH: f64 = 800.0;
pub const HEIGHT: f64 = 800.0;
/// Gap between the surface edge and the plotting range.
pub const PADDING: f64 = 75.0;

const MARK_RADIUS: f64 = 8.0;
const TICK_TARGET: usize = 10;
const TICK_LEN: f64 = 6.0;

/// Everything one topic mark needs, precomputed outside the RSX tree.
struct Mark {
    id: usize,
    label: usize,
    group_style: String,
    circle_style: String,
}

/// Fit a linear scale over `attr`'s extent across all topics.
/// An empty topic list gets a unit domain so the axes still draw.
fn axis_scale(topics: &[Topic], attr: TopicAttr, range: (f64, f64)) -> LinearScale {
    let domain = extent(topics.iter().map(|t| t.attr(attr))).unwrap_or((0.0, 1.0));
    LinearScale::new(domain, range)
}

/// Bottom axis: line at the lower edge of the plotting range, ticks below.
fn x_axis(scale: &LinearScale) -> Element {
    let axis_y = HEIGHT - PADDING;
    let x0 = PADDING;
    let x1 = WIDTH - PADDING;
    let tick_y = axis_y + TICK_LEN;
    let label_y = axis_y + TICK_LEN + 12.0;
    let step = scale.tick_step(TICK_TARGET);
    let ticks: Vec<(f64, String)> = scale
        .ticks(TICK_TARGET)
        .into_iter()
        .map(|t| (scale.scale(t), tick_label(t, step)))
        .collect();

    rsx! {
        g { class: "axis",
            line { x1: x0, y1: axis_y, x2: x1, y2: axis_y, style: "stroke: black;" }
            for (px, label) in ticks {
                line { x1: px, y1: axis_y, x2: px, y2: tick_y, style: "stroke: black;" }
                text {
                    x: px,
                    y: label_y,
                    style: "font-size: 10px; text-anchor: middle;",
                    "{label}"
                }
            }
        }
    }
}

/// Left axis: line at the left edge of the plotting range, ticks to its left.
fn y_axis(scale: &LinearScale) -> Element {
    let axis_x = PADDING;
    let y0 = PADDING;
    let y1 = HEIGHT - PADDING;
    let tick_x = axis_x - TICK_LEN;
    let label_x = axis_x - TICK_LEN - 4.0;
    let step = scale.tick_step(TICK_TARGET);
    let ticks: Vec<(f64, String)> = scale
        .ticks(TICK_TARGET)
        .into_iter()
        .map(|t| (scale.scale(t), tick_label(t, step)))
        .collect();

    rsx! {
        g { class: "axis",
            line { x1: axis_x, y1: y0, x2: axis_x, y2: y1, style: "stroke: black;" }
            for (py, label) in ticks {
                line { x1: tick_x, y1: py, x2: axis_x, y2: py, style: "stroke: black;" }
                text {
                    x: label_x,
                    y: py,
                    style: "font-size: 10px; text-anchor: end; dominant-baseline: middle;",
                    "{label}"
                }
            }
        }
    }
}

/// Scatterplot of all topics on the currently selected attribute pair.
#[component]
pub fn ScatterPlot() -> Element {
    let mut state = use_context::<AppState>();
    let topics = state.topics.read();
    let x_attr = (state.x_attr)();
    let y_attr = (state.y_attr)();
    let selected = (state.selected)();
    let phase = (state.render_phase)();

    // Flip to animated positioning once the first populated render has been
    // committed; effects run after commit, so the flip itself moves nothing.
    use_effect(move || {
        if !state.topics.read().is_empty()
            && (state.render_phase)() == RenderPhase::Initial
        {
            state.render_phase.set(RenderPhase::Animated);
        }
    });

    let x_scale = axis_scale(&topics, x_attr, (PADDING, WIDTH - PADDING));
    let y_scale = axis_scale(&topics, y_attr, (HEIGHT - PADDING, PADDING));
    let topic_count = topics.len();

    let move_transition = match phase {
        RenderPhase::Initial => "",
        RenderPhase::Animated => " transition: transform 600ms ease;",
    };
    let marks: Vec<Mark> = topics
        .iter()
        .map(|topic| {
            let px = x_scale.scale(topic.attr(x_attr));
            let py = y_scale.scale(topic.attr(y_attr));
            let fill = mark_fill(selected, topic.id);
            // Only the newly selected mark animates its fill; the rest snap
            // straight back to the base color.
            let circle_style = if selected == Some(topic.id) {
                format!(
                    "fill: {fill}; opacity: 0.7; cursor: pointer; \
                     transition: fill 400ms ease;"
                )
            } else {
                format!("fill: {fill}; opacity: 0.7; cursor: pointer;")
            };
            Mark {
                id: topic.id,
                label: topic.id + 1,
                group_style: format!(
                    "transform: translate({px}px, {py}px);{move_transition}"
                ),
                circle_style,
            }
        })
        .collect();

    rsx! {
        svg {
            width: "{WIDTH}",
            height: "{HEIGHT}",
            style: "display: inline-block; vertical-align: top;",
            { x_axis(&x_scale) }
            { y_axis(&y_scale) }
            for mark in marks {
                g {
                    key: "{mark.id}",
                    style: "{mark.group_style}",
                    circle {
                        r: MARK_RADIUS,
                        style: "{mark.circle_style}",
                        onclick: move |_| {
                            state.selected.set(Some(mark.id));
                            dom::scroll_table_to_topic(mark.id, topic_count);
                        },
                    }
                    text {
                        x: 10,
                        y: 4,
                        style: "font-size: x-small; pointer-events: none;",
                        "{mark.label}"
                    }
                }
            }
        }
    }
}
