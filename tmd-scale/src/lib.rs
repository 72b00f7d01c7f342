//! Scale and extent computation for diagnostics charting.
//!
//! This crate turns raw topic attribute values into pixel positions, axis
//! ticks, and colors for the scatterplot UI. It is pure math with no DOM
//! types, so every rule the renderer relies on is testable natively.

/// Linear scales and axis ticks.
pub mod linear {
    /// Minimum and maximum of a value stream; `None` when it is empty.
    pub fn extent<I: IntoIterator<Item = f64>>(values: I) -> Option<(f64, f64)> {
        let mut result: Option<(f64, f64)> = None;
        for v in values {
            result = Some(match result {
                None => (v, v),
                Some((lo, hi)) => (lo.min(v), hi.max(v)),
            });
        }
        result
    }

    /// A linear mapping from a data domain onto a pixel range.
    ///
    /// The range may be inverted (first coordinate larger than the second),
    /// which is how the y axis maps larger values to higher positions on
    /// screen. A collapsed domain maps every input to the range midpoint
    /// rather than dividing by zero.
    #[derive(Debug, Clone, Copy, PartialEq)]
    pub struct LinearScale {
        pub domain: (f64, f64),
        pub range: (f64, f64),
    }

    impl LinearScale {
        pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
            LinearScale { domain, range }
        }

        /// Map a domain value to range coordinates.
        pub fn scale(&self, v: f64) -> f64 {
            let (d0, d1) = self.domain;
            let (r0, r1) = self.range;
            let span = d1 - d0;
            let t = if span == 0.0 { 0.5 } else { (v - d0) / span };
            r0 + t * (r1 - r0)
        }

        /// Round tick values covering the domain, aiming for about
        /// `target` of them. A collapsed domain gets its single value.
        pub fn ticks(&self, target: usize) -> Vec<f64> {
            let (lo, hi) = self.domain;
            if target == 0 {
                return Vec::new();
            }
            let span = hi - lo;
            if span == 0.0 {
                return vec![lo];
            }
            let step = step_for(span, target);
            let start = (lo / step).ceil() * step;
            let mut out = Vec::new();
            let mut v = start;
            while v <= hi + step * 0.01 {
                if v >= lo - step * 0.01 {
                    out.push(v);
                }
                v += step;
            }
            out
        }

        /// The tick step `ticks` would use; drives tick label precision.
        pub fn tick_step(&self, target: usize) -> f64 {
            let span = self.domain.1 - self.domain.0;
            if target == 0 || span == 0.0 {
                return 1.0;
            }
            step_for(span, target)
        }
    }

    /// Pick a step from the 1/2/5 ladder near `span / target`.
    fn step_for(span: f64, target: usize) -> f64 {
        let rough_step = span / target as f64;
        let mag = 10f64.powf(rough_step.log10().floor());
        let normalized = rough_step / mag;
        if normalized < 1.5 {
            mag
        } else if normalized < 3.5 {
            mag * 2.0
        } else if normalized < 7.5 {
            mag * 5.0
        } else {
            mag * 10.0
        }
    }

    /// Format a tick value with decimal places appropriate to the step size.
    pub fn tick_label(v: f64, step: f64) -> String {
        if step >= 0.95 {
            format!("{v:.0}")
        } else if step >= 0.095 {
            format!("{v:.1}")
        } else if step >= 0.0095 {
            format!("{v:.2}")
        } else {
            format!("{v:.3}")
        }
    }

}

/// Chart colors: the coherence ramp for word text and the mark fills.
pub mod color {
    /// Coherence score that renders as black.
    pub const COHERENCE_BLACK: f64 = -1.0;
    /// Coherence score that renders as full red.
    pub const COHERENCE_RED: f64 = -5.0;

    /// Fill for an unselected topic mark.
    pub const MARK_FILL: &str = "#bbbbff";
    /// Fill for the selected topic mark.
    pub const MARK_FILL_SELECTED: &str = "#ff7777";

    /// Fill for topic `id`'s mark under the current selection. At most one
    /// id can match, so at most one mark ever carries the highlight.
    pub fn mark_fill(selected: Option<usize>, id: usize) -> &'static str {
        if selected == Some(id) {
            MARK_FILL_SELECTED
        } else {
            MARK_FILL
        }
    }

    /// Map a coherence score onto the black-to-red ramp as a CSS hex color.
    ///
    /// Scores outside the ramp clamp to its endpoints; less coherent is
    /// redder.
    pub fn coherence_color(coherence: f64) -> String {
        let t = (coherence - COHERENCE_BLACK) / (COHERENCE_RED - COHERENCE_BLACK);
        let red = (t.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!("#{red:02x}0000")
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn ramp_endpoints() {
            assert_eq!(coherence_color(-1.0), "#000000");
            assert_eq!(coherence_color(-5.0), "#ff0000");
        }

        #[test]
        fn ramp_midpoint() {
            assert_eq!(coherence_color(-3.0), "#800000");
        }

        #[test]
        fn out_of_domain_scores_clamp() {
            assert_eq!(coherence_color(0.0), "#000000");
            assert_eq!(coherence_color(-9.5), "#ff0000");
        }

        #[test]
        fn selection_highlights_exactly_one_mark() {
            let fills: Vec<&str> = (0..6).map(|id| mark_fill(Some(3), id)).collect();
            assert_eq!(
                fills.iter().filter(|&&f| f == MARK_FILL_SELECTED).count(),
                1
            );
            assert_eq!(fills[3], MARK_FILL_SELECTED);
        }

        #[test]
        fn no_selection_keeps_all_marks_base() {
            assert!((0..6).all(|id| mark_fill(None, id) == MARK_FILL));
        }
    }
}

/// Table row styling and scrolling math.
pub mod table {
    /// Font weight for topic `id`'s row label under the current selection.
    /// The counterpart of `color::mark_fill`: at most one row is ever bold.
    pub fn label_weight(selected: Option<usize>, id: usize) -> &'static str {
        if selected == Some(id) {
            "bold"
        } else {
            "normal"
        }
    }

    /// Scroll offset that roughly centers a topic's row in the table
    /// container: a fixed 150px lead-in plus the topic's proportional
    /// position within the scrollable height. Row height variance is
    /// deliberately ignored.
    pub fn scroll_offset(topic_id: usize, topic_count: usize, scroll_height: f64) -> f64 {
        if topic_count == 0 {
            return 0.0;
        }
        -150.0 + (topic_id as f64 / topic_count as f64) * scroll_height
    }

    #[cfg(test)]
    mod tests {
        use super::{label_weight, scroll_offset};

        #[test]
        fn selection_bolds_exactly_one_row() {
            let weights: Vec<&str> = (0..6).map(|id| label_weight(Some(2), id)).collect();
            assert_eq!(weights.iter().filter(|&&w| w == "bold").count(), 1);
            assert_eq!(weights[2], "bold");
            assert!((0..6).all(|id| label_weight(None, id) == "normal"));
        }

        #[test]
        fn offset_is_proportional_to_topic_position() {
            assert_eq!(scroll_offset(3, 20, 1000.0), -150.0 + (3.0 / 20.0) * 1000.0);
            assert_eq!(scroll_offset(0, 20, 1000.0), -150.0);
            assert_eq!(scroll_offset(10, 20, 1000.0), 350.0);
        }

        #[test]
        fn empty_table_scrolls_nowhere() {
            assert_eq!(scroll_offset(0, 0, 1000.0), 0.0);
        }
    }
}
