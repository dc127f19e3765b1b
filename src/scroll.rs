//! Page scroll progress and the scroll-linked hero transforms.
//!
//! Progress is the vertical scroll position as a fraction of the scrollable
//! document length, always within `[0, 1]`. The hero reads it through
//! [`use_scroll_progress`] and maps it through two clamped linear transforms.

use std::fmt;

use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

/// Vertical offset of the hero title block, in pixels.
pub const HERO_TITLE_OFFSET: Transform = Transform::new([0.0, 0.4], [0.0, -80.0]);

/// Opacity of the hero title block.
pub const HERO_TITLE_OPACITY: Transform = Transform::new([0.0, 0.3], [1.0, 0.0]);

const SAMPLED_EVENTS: [&str; 2] = ["scroll", "resize"];

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollProgress(f64);

impl ScrollProgress {
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self(0.0);
        }
        Self(value.clamp(0.0, 1.0))
    }

    /// Progress for a document of `scroll_height` viewed through a viewport of
    /// `viewport_height`, scrolled down by `scroll_y`.
    pub fn from_metrics(scroll_y: f64, scroll_height: f64, viewport_height: f64) -> Self {
        let scrollable = scroll_height - viewport_height;
        if scrollable <= 0.0 {
            return Self(0.0);
        }
        Self::new(scroll_y / scrollable)
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

/// Linear map from an input range onto an output range, held at the output
/// endpoints for inputs outside the input range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    input: [f64; 2],
    output: [f64; 2],
}

impl Transform {
    pub const fn new(input: [f64; 2], output: [f64; 2]) -> Self {
        Self { input, output }
    }

    pub fn apply(&self, progress: ScrollProgress) -> f64 {
        let [in_start, in_end] = self.input;
        let [out_start, out_end] = self.output;
        let span = in_end - in_start;
        if span == 0.0 {
            return out_start;
        }
        let t = ((progress.value() - in_start) / span).clamp(0.0, 1.0);
        out_start + t * (out_end - out_start)
    }
}

/// Inline style for the hero title block at the given progress.
pub fn hero_title_style(progress: ScrollProgress) -> String {
    format!(
        "transform: translateY({}px); opacity: {};",
        HERO_TITLE_OFFSET.apply(progress),
        HERO_TITLE_OPACITY.apply(progress),
    )
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollMetrics {
    pub scroll_y: f64,
    pub scroll_height: f64,
    pub viewport_height: f64,
}

impl ScrollMetrics {
    pub fn progress(&self) -> ScrollProgress {
        ScrollProgress::from_metrics(self.scroll_y, self.scroll_height, self.viewport_height)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollReadError {
    NoWindow,
    NoDocumentElement,
    Unavailable(&'static str),
}

impl fmt::Display for ScrollReadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScrollReadError::NoWindow => write!(f, "no global window"),
            ScrollReadError::NoDocumentElement => write!(f, "document has no root element"),
            ScrollReadError::Unavailable(what) => write!(f, "window.{} is unavailable", what),
        }
    }
}

impl std::error::Error for ScrollReadError {}

pub fn read_scroll_metrics() -> Result<ScrollMetrics, ScrollReadError> {
    let window = web_sys::window().ok_or(ScrollReadError::NoWindow)?;
    let scroll_y = window
        .scroll_y()
        .map_err(|_| ScrollReadError::Unavailable("scrollY"))?;
    let root = window
        .document()
        .and_then(|document| document.document_element())
        .ok_or(ScrollReadError::NoDocumentElement)?;

    // clientHeight excludes a horizontal scrollbar, so the bottom reads as 1
    Ok(ScrollMetrics {
        scroll_y,
        scroll_height: f64::from(root.scroll_height()),
        viewport_height: f64::from(root.client_height()),
    })
}

/// Current page scroll progress, resampled on every window scroll and resize.
///
/// A failed read keeps the previous value.
#[hook]
pub fn use_scroll_progress() -> ScrollProgress {
    let progress = use_state_eq(ScrollProgress::default);

    {
        let progress = progress.clone();
        use_effect_with_deps(
            move |_| {
                let sample = move || match read_scroll_metrics() {
                    Ok(metrics) => progress.set(metrics.progress()),
                    Err(err) => warn!("Skipping scroll sample: {}", err),
                };
                // Initial sample so a reload mid-page starts in the right place
                sample();

                let callback = Closure::wrap(Box::new(sample) as Box<dyn FnMut()>);
                let window = web_sys::window();
                if let Some(window) = &window {
                    for event in SAMPLED_EVENTS {
                        if window
                            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
                            .is_err()
                        {
                            warn!("Could not listen for {} events", event);
                        }
                    }
                    debug!("Scroll progress listeners attached");
                }

                move || {
                    if let Some(window) = window {
                        for event in SAMPLED_EVENTS {
                            let _ = window.remove_event_listener_with_callback(
                                event,
                                callback.as_ref().unchecked_ref(),
                            );
                        }
                    }
                    drop(callback);
                }
            },
            (),
        );
    }

    *progress
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn at(p: f64) -> ScrollProgress {
        ScrollProgress::new(p)
    }

    #[test]
    fn progress_is_clamped_into_unit_range() {
        assert_eq!(at(-0.5).value(), 0.0);
        assert_eq!(at(1.7).value(), 1.0);
        assert_eq!(at(0.25).value(), 0.25);
        assert_eq!(at(f64::NAN).value(), 0.0);
    }

    #[test]
    fn progress_from_metrics_uses_scrollable_length() {
        let progress = ScrollProgress::from_metrics(500.0, 3000.0, 1000.0);
        assert_relative_eq!(progress.value(), 0.25);

        let bottom = ScrollProgress::from_metrics(2000.0, 3000.0, 1000.0);
        assert_eq!(bottom.value(), 1.0);
    }

    #[test]
    fn scrolled_to_bottom_reads_full_progress() {
        let metrics = ScrollMetrics {
            scroll_y: 2015.0,
            scroll_height: 3000.0,
            viewport_height: 985.0,
        };
        assert_eq!(metrics.progress().value(), 1.0);
    }

    #[test]
    fn unscrollable_document_has_zero_progress() {
        assert_eq!(ScrollProgress::from_metrics(0.0, 800.0, 800.0).value(), 0.0);
        assert_eq!(ScrollProgress::from_metrics(10.0, 600.0, 800.0).value(), 0.0);
    }

    #[test]
    fn top_of_page_shows_title_in_place() {
        for p in [0.0, -0.1, -5.0] {
            assert_eq!(HERO_TITLE_OFFSET.apply(at(p)), 0.0);
            assert_eq!(HERO_TITLE_OPACITY.apply(at(p)), 1.0);
        }
    }

    #[test]
    fn offset_holds_at_minus_eighty_past_forty_percent() {
        for p in [0.4, 0.55, 1.0] {
            assert_relative_eq!(HERO_TITLE_OFFSET.apply(at(p)), -80.0);
        }
    }

    #[test]
    fn opacity_reaches_zero_at_thirty_percent() {
        for p in [0.3, 0.31, 0.9] {
            assert_relative_eq!(HERO_TITLE_OPACITY.apply(at(p)), 0.0);
        }
    }

    #[test]
    fn midway_values() {
        assert_relative_eq!(HERO_TITLE_OFFSET.apply(at(0.2)), -40.0, epsilon = 1e-9);
        assert_relative_eq!(HERO_TITLE_OPACITY.apply(at(0.2)), 1.0 / 3.0, epsilon = 1e-9);
    }

    #[test]
    fn degenerate_input_range_returns_first_output() {
        let flat = Transform::new([0.5, 0.5], [3.0, 9.0]);
        assert_eq!(flat.apply(at(0.9)), 3.0);
    }

    #[test]
    fn title_style_carries_both_values() {
        assert_eq!(hero_title_style(at(0.0)), "transform: translateY(0px); opacity: 1;");
        assert_eq!(hero_title_style(at(1.0)), "transform: translateY(-80px); opacity: 0;");
    }

    #[test]
    fn read_errors_describe_the_missing_piece() {
        assert_eq!(
            ScrollReadError::Unavailable("scrollY").to_string(),
            "window.scrollY is unavailable"
        );
        assert_eq!(ScrollReadError::NoWindow.to_string(), "no global window");
    }
}
