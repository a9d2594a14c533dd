//! Declarative two-state entrance animations.
//!
//! A section is either [`Phase::Hidden`] or [`Phase::Visible`]. Each
//! [`Choreography`] pairs a container variant with an item variant and a fixed
//! stagger, and renders them to inline CSS so the browser runs the actual
//! transitions.

use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Hidden,
    Visible,
}

impl From<bool> for Phase {
    fn from(visible: bool) -> Self {
        if visible {
            Self::Visible
        } else {
            Self::Hidden
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Target {
    pub opacity: f32,
    /// Vertical offset in pixels, positive is below the resting position.
    pub offset_y: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Variant {
    pub hidden: Target,
    pub visible: Target,
    pub duration: Duration,
}

impl Variant {
    /// Plain fade, used for containers.
    pub const FADE: Self = Self {
        hidden: Target {
            opacity: 0.0,
            offset_y: 0.0,
        },
        visible: Target {
            opacity: 1.0,
            offset_y: 0.0,
        },
        duration: Duration::from_millis(300),
    };

    /// Fade while rising 20px into place, used for items.
    pub const RISE: Self = Self {
        hidden: Target {
            opacity: 0.0,
            offset_y: 20.0,
        },
        visible: Target {
            opacity: 1.0,
            offset_y: 0.0,
        },
        duration: Duration::from_millis(500),
    };

    pub const fn target(&self, phase: Phase) -> Target {
        match phase {
            Phase::Hidden => self.hidden,
            Phase::Visible => self.visible,
        }
    }

    fn style(&self, phase: Phase, delay: Duration) -> String {
        let Target { opacity, offset_y } = self.target(phase);
        let duration = self.duration.as_millis();
        let delay = delay.as_millis();
        format!(
            "opacity: {opacity}; transform: translateY({offset_y}px); \
             transition: opacity {duration}ms ease-out {delay}ms, transform {duration}ms ease-out {delay}ms;"
        )
    }

    /// Style for a full-screen layer. Once hidden it is also taken out of
    /// rendering and hit testing, after the fade has run.
    pub fn overlay_style(&self, phase: Phase) -> String {
        let opacity = self.target(phase).opacity;
        let duration = self.duration.as_millis();
        let (visibility, hide_after) = match phase {
            Phase::Hidden => ("hidden", duration),
            Phase::Visible => ("visible", 0),
        };
        format!(
            "opacity: {opacity}; visibility: {visibility}; \
             transition: opacity {duration}ms ease-out, visibility 0ms linear {hide_after}ms;"
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Choreography {
    pub container: Variant,
    pub item: Variant,
    pub stagger: Duration,
}

impl Choreography {
    /// Default for content sections.
    pub const SECTION: Self = Self {
        container: Variant::FADE,
        item: Variant::RISE,
        stagger: Duration::from_millis(100),
    };

    /// Slower cascade for the hero and the experience timeline.
    pub const CASCADE: Self = Self {
        container: Variant::FADE,
        item: Variant::RISE,
        stagger: Duration::from_millis(200),
    };

    pub fn item_delay(&self, index: usize) -> Duration {
        let slot = u32::try_from(index).unwrap_or(u32::MAX);
        self.stagger.saturating_mul(slot)
    }

    pub fn container_style(&self, phase: Phase) -> String {
        self.container.style(phase, Duration::ZERO)
    }

    /// Items only wait for their slot on the way in; hiding is immediate.
    pub fn item_style(&self, phase: Phase, index: usize) -> String {
        let delay = match phase {
            Phase::Hidden => Duration::ZERO,
            Phase::Visible => self.item_delay(index),
        };
        self.item.style(phase, delay)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_from_visibility_flag() {
        assert_eq!(Phase::from(false), Phase::Hidden);
        assert_eq!(Phase::from(true), Phase::Visible);
        assert_eq!(Phase::default(), Phase::Hidden);
    }

    #[test]
    fn test_hidden_items_are_transparent_and_offset() {
        let c = Choreography::SECTION;
        for index in 0..5 {
            let style = c.item_style(Phase::Hidden, index);
            assert!(style.starts_with("opacity: 0; transform: translateY(20px);"));
            assert!(style.contains("ease-out 0ms"));
        }
    }

    #[test]
    fn test_visible_items_stagger_by_index() {
        let c = Choreography::SECTION;
        assert_eq!(
            c.item_style(Phase::Visible, 0),
            "opacity: 1; transform: translateY(0px); \
             transition: opacity 500ms ease-out 0ms, transform 500ms ease-out 0ms;"
        );
        assert!(c.item_style(Phase::Visible, 3).contains("ease-out 300ms"));
        assert!(Choreography::CASCADE
            .item_style(Phase::Visible, 3)
            .contains("ease-out 600ms"));
    }

    #[test]
    fn test_container_fades_without_offset() {
        let c = Choreography::SECTION;
        assert!(c.container_style(Phase::Hidden).starts_with("opacity: 0; transform: translateY(0px);"));
        assert!(c.container_style(Phase::Visible).starts_with("opacity: 1;"));
    }

    #[test]
    fn test_item_delay_saturates() {
        let c = Choreography::SECTION;
        assert_eq!(c.item_delay(4), Duration::from_millis(400));
        // out of range indices clamp instead of wrapping to a short delay
        let last = c.item_delay(u32::MAX as usize);
        assert_eq!(last, Duration::from_millis(100) * u32::MAX);
        assert_eq!(c.item_delay(usize::MAX), last);
    }

    #[test]
    fn test_closed_overlay_is_invisible() {
        let closed = Variant::FADE.overlay_style(Phase::Hidden);
        assert!(closed.starts_with("opacity: 0; visibility: hidden;"));
        // visibility flips only after the fade out
        assert!(closed.contains("visibility 0ms linear 300ms"));

        let open = Variant::FADE.overlay_style(Phase::Visible);
        assert!(open.starts_with("opacity: 1; visibility: visible;"));
        assert!(open.contains("visibility 0ms linear 0ms"));
    }

    #[test]
    fn test_variant_lookup() {
        assert_eq!(Variant::RISE.target(Phase::Hidden).offset_y, 20.0);
        assert_eq!(Variant::RISE.target(Phase::Visible).opacity, 1.0);
    }
}
