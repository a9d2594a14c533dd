/// Scroll offset after which the header gets its solid background.
pub const HEADER_SOLID_AFTER: f64 = 10.0;
/// Scroll offset after which the back-to-top button appears.
pub const SCROLL_TOP_AFTER: f64 = 500.0;
/// Sections count as active this many pixels before their top edge.
pub const SECTION_LEAD: f64 = 100.0;

#[derive(Debug, Clone, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

/// Last section in document order whose (lead-adjusted) span contains `scroll_y`.
pub fn active_section(scroll_y: f64, sections: &[SectionBounds]) -> Option<&str> {
    sections
        .iter()
        .rev()
        .find(|s| {
            let top = s.top - SECTION_LEAD;
            scroll_y >= top && scroll_y < top + s.height
        })
        .map(|s| s.id.as_str())
}

/// Percentage of the page scrolled, clamped to `0..=100`.
pub fn scroll_progress(scroll_top: f64, scroll_height: f64, client_height: f64) -> f64 {
    let scrollable = scroll_height - client_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    (scroll_top / scrollable * 100.0).clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sections() -> Vec<SectionBounds> {
        [("home", 0.0, 800.0), ("about", 800.0, 600.0), ("skills", 1400.0, 500.0)]
            .into_iter()
            .map(|(id, top, height)| SectionBounds {
                id: id.to_string(),
                top,
                height,
            })
            .collect()
    }

    #[test]
    fn test_active_section_uses_lead() {
        let s = sections();
        assert_eq!(active_section(0.0, &s), Some("home"));
        assert_eq!(active_section(650.0, &s), Some("home"));
        assert_eq!(active_section(700.0, &s), Some("about"));
        assert_eq!(active_section(1350.0, &s), Some("skills"));
        assert_eq!(active_section(5000.0, &s), None);
    }

    #[test]
    fn test_scroll_progress() {
        assert_eq!(scroll_progress(0.0, 2000.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(500.0, 2000.0, 1000.0), 50.0);
        assert_eq!(scroll_progress(1000.0, 2000.0, 1000.0), 100.0);
        // overscroll bounce
        assert_eq!(scroll_progress(1100.0, 2000.0, 1000.0), 100.0);
    }

    #[test]
    fn test_scroll_progress_short_page() {
        assert_eq!(scroll_progress(0.0, 800.0, 800.0), 0.0);
        assert_eq!(scroll_progress(0.0, 600.0, 800.0), 0.0);
    }
}
