//! Typed wrappers around web-sys for scrolling the topic table.

use tmd_scale::table::scroll_offset;
use web_sys::{ScrollBehavior, ScrollToOptions};

/// DOM id of the scrollable table container.
pub const TABLE_CONTAINER_ID: &str = "topic-table";

/// Smoothly scroll the table container so `topic_id`'s row lands near the
/// middle of the viewport. The offset is the proportional approximation from
/// `tmd_scale::table::scroll_offset`, not an exact row position.
pub fn scroll_table_to_topic(topic_id: usize, topic_count: usize) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::warn!("window document object not found");
        return;
    };
    let Some(container) = document.get_element_by_id(TABLE_CONTAINER_ID) else {
        log::warn!("{TABLE_CONTAINER_ID} dom object not found");
        return;
    };

    let top = scroll_offset(topic_id, topic_count, container.scroll_height() as f64);
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    container.scroll_to_with_scroll_to_options(&options);
}
