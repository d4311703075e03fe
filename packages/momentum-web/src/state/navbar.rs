//! Scroll-driven navbar state and scrollspy

/// Vertical extent of a `section[id]`
#[derive(Clone, Debug, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

/// Scroll thresholds, in pixels
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollThresholds {
    pub scrolled: f64,
    pub back_to_top: f64,
    pub spy_offset: f64,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct NavbarView {
    pub scrolled: bool,
    pub back_to_top_visible: bool,
    pub active_section: Option<String>,
}

impl NavbarView {
    pub fn from_scroll(scroll_y: f64, sections: &[SectionBounds], thresholds: ScrollThresholds) -> Self {
        Self {
            scrolled: scroll_y > thresholds.scrolled,
            back_to_top_visible: scroll_y > thresholds.back_to_top,
            active_section: current_section(scroll_y, sections, thresholds.spy_offset),
        }
    }

    /// Whether a nav link pointing at `href` should be highlighted
    pub fn is_link_active(&self, href: &str) -> bool {
        match &self.active_section {
            Some(id) if !id.is_empty() => href.contains(id.as_str()),
            _ => false,
        }
    }
}

/// The section under the header. Later sections win when ranges overlap.
pub fn current_section(scroll_y: f64, sections: &[SectionBounds], offset: f64) -> Option<String> {
    sections
        .iter()
        .filter(|section| {
            let top = section.top - offset;
            scroll_y >= top && scroll_y < top + section.height
        })
        .last()
        .map(|section| section.id.clone())
}

/// Window scroll position that puts an element `header_offset` below the top
pub fn anchor_scroll_target(element_top: f64, page_y_offset: f64, header_offset: f64) -> f64 {
    element_top + page_y_offset - header_offset
}

#[cfg(test)]
mod tests {
    use super::*;

    const THRESHOLDS: ScrollThresholds = ScrollThresholds {
        scrolled: 60.0,
        back_to_top: 500.0,
        spy_offset: 120.0,
    };

    fn sections() -> Vec<SectionBounds> {
        vec![
            SectionBounds { id: "home".into(), top: 0.0, height: 700.0 },
            SectionBounds { id: "about".into(), top: 700.0, height: 600.0 },
            SectionBounds { id: "faq".into(), top: 1300.0, height: 500.0 },
        ]
    }

    #[test]
    fn test_thresholds_are_strict() {
        let at = NavbarView::from_scroll(60.0, &sections(), THRESHOLDS);
        assert!(!at.scrolled);
        let past = NavbarView::from_scroll(61.0, &sections(), THRESHOLDS);
        assert!(past.scrolled);
        assert!(!past.back_to_top_visible);
        assert!(NavbarView::from_scroll(501.0, &sections(), THRESHOLDS).back_to_top_visible);
    }

    #[test]
    fn test_section_becomes_active_before_reaching_top() {
        // about starts at 700, offset 120 => active from 580
        assert_eq!(current_section(579.0, &sections(), 120.0).as_deref(), Some("home"));
        assert_eq!(current_section(580.0, &sections(), 120.0).as_deref(), Some("about"));
    }

    #[test]
    fn test_last_matching_section_wins() {
        let overlapping = vec![
            SectionBounds { id: "outer".into(), top: 0.0, height: 2000.0 },
            SectionBounds { id: "inner".into(), top: 400.0, height: 200.0 },
        ];
        assert_eq!(current_section(350.0, &overlapping, 120.0).as_deref(), Some("inner"));
    }

    #[test]
    fn test_no_section_no_active_link() {
        let view = NavbarView::from_scroll(-200.0, &sections(), THRESHOLDS);
        assert_eq!(view.active_section, None);
        assert!(!view.is_link_active("#home"));
    }

    #[test]
    fn test_link_activation() {
        let view = NavbarView::from_scroll(1300.0, &sections(), THRESHOLDS);
        assert!(view.is_link_active("#faq"));
        assert!(!view.is_link_active("#about"));
    }

    #[test]
    fn test_anchor_target_subtracts_header() {
        assert_eq!(anchor_scroll_target(400.0, 1000.0, 90.0), 1310.0);
    }
}
