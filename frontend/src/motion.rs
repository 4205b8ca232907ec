//! Scroll-linked animation math shared by the header, the hero and the
//! reveal-on-scroll sections. Nothing in here touches the DOM.

use crate::config::{
    HEADER_SOLID_THRESHOLD, HERO_MAX_SCALE, HERO_PARALLAX_RANGE, REVEAL_DURATION_SECS,
    REVEAL_OFFSET,
};

/// Fraction of the scrollable range already scrolled, in `[0, 1]`.
pub fn scroll_progress(scroll_y: f64, scroll_height: f64, viewport_height: f64) -> f64 {
    let scrollable = scroll_height - viewport_height;
    if scrollable <= 0.0 || !scroll_y.is_finite() {
        return 0.0;
    }
    (scroll_y / scrollable).clamp(0.0, 1.0)
}

/// Maps `value` from `input` onto `output`, clamped to the ends of `input`.
pub fn transform(value: f64, input: (f64, f64), output: (f64, f64)) -> f64 {
    let (in_start, in_end) = input;
    let (out_start, out_end) = output;
    let span = in_end - in_start;
    if span == 0.0 {
        return out_start;
    }
    let t = ((value - in_start) / span).clamp(0.0, 1.0);
    out_start + (out_end - out_start) * t
}

pub fn header_is_solid(scroll_y: f64) -> bool {
    scroll_y > HEADER_SOLID_THRESHOLD
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeroParallax {
    pub opacity: f64,
    pub scale: f64,
}

impl HeroParallax {
    pub fn from_progress(progress: f64) -> Self {
        Self {
            opacity: transform(progress, HERO_PARALLAX_RANGE, (1.0, 0.0)),
            scale: transform(progress, HERO_PARALLAX_RANGE, (1.0, HERO_MAX_SCALE)),
        }
    }

    pub fn style(&self) -> String {
        format!(
            "opacity: {:.3}; transform: scale({:.3});",
            self.opacity, self.scale
        )
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealDirection {
    #[default]
    Up,
    Left,
    Right,
}

impl RevealDirection {
    /// `(x, y)` offset of the hidden state, in pixels.
    pub fn hidden_offset(self) -> (f64, f64) {
        match self {
            RevealDirection::Up => (0.0, REVEAL_OFFSET),
            RevealDirection::Left => (-REVEAL_OFFSET, 0.0),
            RevealDirection::Right => (REVEAL_OFFSET, 0.0),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealState {
    Hidden,
    Visible,
}

impl RevealState {
    pub fn from_revealed(revealed: bool) -> Self {
        if revealed {
            RevealState::Visible
        } else {
            RevealState::Hidden
        }
    }

    pub fn style(self, direction: RevealDirection) -> String {
        match self {
            RevealState::Hidden => {
                let (x, y) = direction.hidden_offset();
                format!("opacity: 0; transform: translate({}px, {}px);", x, y)
            }
            RevealState::Visible => format!(
                "opacity: 1; transform: translate(0px, 0px); \
                 transition: opacity {d}s ease-out, transform {d}s ease-out;",
                d = REVEAL_DURATION_SECS
            ),
        }
    }
}

/// Whether an intersection observer entry should trigger the one-shot reveal.
pub fn should_reveal(is_intersecting: bool, ratio: f64, amount: f64) -> bool {
    // Browsers report ratios a hair under the threshold that fired the callback.
    is_intersecting && ratio + 1e-3 >= amount
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_is_zero_when_page_cannot_scroll() {
        assert_eq!(scroll_progress(120.0, 800.0, 800.0), 0.0);
        assert_eq!(scroll_progress(120.0, 600.0, 800.0), 0.0);
    }

    #[test]
    fn progress_tracks_scrollable_range() {
        assert_eq!(scroll_progress(0.0, 3000.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(1000.0, 3000.0, 1000.0), 0.5);
        assert_eq!(scroll_progress(2000.0, 3000.0, 1000.0), 1.0);
    }

    #[test]
    fn progress_is_clamped_during_overscroll() {
        assert_eq!(scroll_progress(-40.0, 3000.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(2100.0, 3000.0, 1000.0), 1.0);
    }

    #[test]
    fn transform_clamps_outside_input_range() {
        assert_eq!(transform(-1.0, (0.0, 0.5), (1.0, 0.0)), 1.0);
        assert_eq!(transform(0.25, (0.0, 0.5), (1.0, 0.0)), 0.5);
        assert_eq!(transform(0.9, (0.0, 0.5), (1.0, 0.0)), 0.0);
    }

    #[test]
    fn transform_with_empty_input_range_returns_output_start() {
        assert_eq!(transform(3.0, (1.0, 1.0), (2.0, 4.0)), 2.0);
    }

    #[test]
    fn hero_fades_and_zooms_over_first_half_of_page() {
        let top = HeroParallax::from_progress(0.0);
        assert_eq!(top, HeroParallax { opacity: 1.0, scale: 1.0 });

        let quarter = HeroParallax::from_progress(0.25);
        assert!((quarter.opacity - 0.5).abs() < 1e-9);
        assert!((quarter.scale - 1.1).abs() < 1e-9);

        let past_half = HeroParallax::from_progress(0.8);
        assert_eq!(past_half.opacity, 0.0);
        assert!((past_half.scale - 1.2).abs() < 1e-9);
    }

    #[test]
    fn hero_style_is_inline_css() {
        let style = HeroParallax::from_progress(0.25).style();
        assert_eq!(style, "opacity: 0.500; transform: scale(1.100);");
    }

    #[test]
    fn header_turns_solid_past_threshold_only() {
        assert!(!header_is_solid(0.0));
        assert!(!header_is_solid(50.0));
        assert!(header_is_solid(50.5));
    }

    #[test]
    fn hidden_offsets_follow_direction() {
        assert_eq!(RevealDirection::default(), RevealDirection::Up);
        assert_eq!(RevealDirection::Up.hidden_offset(), (0.0, 50.0));
        assert_eq!(RevealDirection::Left.hidden_offset(), (-50.0, 0.0));
        assert_eq!(RevealDirection::Right.hidden_offset(), (50.0, 0.0));
    }

    #[test]
    fn hidden_style_has_no_transition() {
        let style = RevealState::Hidden.style(RevealDirection::Left);
        assert_eq!(style, "opacity: 0; transform: translate(-50px, 0px);");
    }

    #[test]
    fn visible_style_ignores_direction() {
        let up = RevealState::Visible.style(RevealDirection::Up);
        let right = RevealState::Visible.style(RevealDirection::Right);
        assert_eq!(up, right);
        assert!(up.starts_with("opacity: 1;"));
        assert!(up.contains("0.5s ease-out"));
    }

    #[test]
    fn reveal_requires_intersection_and_enough_area() {
        assert!(!should_reveal(false, 0.0, 0.3));
        assert!(!should_reveal(true, 0.1, 0.3));
        assert!(should_reveal(true, 0.2999, 0.3));
        assert!(should_reveal(true, 0.75, 0.3));
    }
}
