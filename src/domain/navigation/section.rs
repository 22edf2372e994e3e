//! Page sections and scroll-position tracking.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Distance above a section's top at which it already counts as active.
pub const SECTION_OFFSET: f64 = 150.0;

/// Slack when deciding the page is scrolled to the bottom.
pub const BOTTOM_TOLERANCE: f64 = 2.0;

/// A navigable section of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    About,
    Education,
    Experience,
    Projects,
    Skills,
    Contact,
}

impl Section {
    /// Scan order used when resolving the active section.
    pub const ALL: [Section; 6] = [
        Section::About,
        Section::Education,
        Section::Experience,
        Section::Projects,
        Section::Skills,
        Section::Contact,
    ];

    /// Element id the navigation links scroll to.
    pub fn anchor(&self) -> &'static str {
        match self {
            Section::About => "about",
            Section::Education => "education",
            Section::Experience => "experience",
            Section::Projects => "projects",
            Section::Skills => "skills",
            Section::Contact => "contact",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.anchor())
    }
}

/// Current scroll metrics of the page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollSnapshot {
    pub scroll_y: f64,
    pub viewport_height: f64,
    pub document_height: f64,
}

impl ScrollSnapshot {
    pub fn is_at_bottom(&self) -> bool {
        self.viewport_height + self.scroll_y >= self.document_height - BOTTOM_TOLERANCE
    }
}

/// Vertical extent of a rendered section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionBounds {
    pub section: Section,
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn new(section: Section, top: f64, height: f64) -> Self {
        Self { section, top, height }
    }

    fn contains(&self, scroll_y: f64) -> bool {
        let start = self.top - SECTION_OFFSET;
        scroll_y >= start && scroll_y < start + self.height
    }
}

/// Resolves which section the navigation should highlight.
///
/// Scrolled to the bottom always means `Contact`. Otherwise the first
/// section in `Section::ALL` order whose offset band contains the scroll
/// position wins. Sections without bounds are skipped. `None` means no
/// section matched and the previous highlight should stay.
pub fn active_section(snapshot: ScrollSnapshot, bounds: &[SectionBounds]) -> Option<Section> {
    if snapshot.is_at_bottom() {
        return Some(Section::Contact);
    }

    Section::ALL.iter().copied().find(|section| {
        bounds
            .iter()
            .find(|b| b.section == *section)
            .is_some_and(|b| b.contains(snapshot.scroll_y))
    })
}

/// Keeps the highlighted section across scroll events.
#[derive(Debug, Clone)]
pub struct ActiveSectionTracker {
    current: Section,
}

impl Default for ActiveSectionTracker {
    fn default() -> Self {
        Self {
            current: Section::About,
        }
    }
}

impl ActiveSectionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Section {
        self.current
    }

    /// Handles a scroll event; returns the section now highlighted.
    pub fn on_scroll(&mut self, snapshot: ScrollSnapshot, bounds: &[SectionBounds]) -> Section {
        if let Some(section) = active_section(snapshot, bounds) {
            self.current = section;
        }
        self.current
    }

    /// Highlights a section directly, as when a navigation link is clicked.
    pub fn select(&mut self, section: Section) {
        self.current = section;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> Vec<SectionBounds> {
        vec![
            SectionBounds::new(Section::About, 0.0, 600.0),
            SectionBounds::new(Section::Skills, 600.0, 400.0),
            SectionBounds::new(Section::Experience, 1000.0, 800.0),
            SectionBounds::new(Section::Contact, 1800.0, 700.0),
        ]
    }

    fn at(scroll_y: f64) -> ScrollSnapshot {
        ScrollSnapshot {
            scroll_y,
            viewport_height: 800.0,
            document_height: 2500.0,
        }
    }

    #[test]
    fn top_of_page_is_about() {
        assert_eq!(active_section(at(0.0), &layout()), Some(Section::About));
    }

    #[test]
    fn offset_activates_section_early() {
        // Skills band starts at 600 - 150 = 450.
        assert_eq!(active_section(at(450.0), &layout()), Some(Section::Skills));
        assert_eq!(active_section(at(449.0), &layout()), Some(Section::About));
    }

    #[test]
    fn bottom_of_page_is_contact() {
        assert_eq!(active_section(at(1698.0), &layout()), Some(Section::Contact));
    }

    #[test]
    fn overlapping_bands_resolve_in_scan_order() {
        let bounds = vec![
            SectionBounds::new(Section::Skills, 100.0, 500.0),
            SectionBounds::new(Section::Experience, 100.0, 500.0),
        ];
        // Experience precedes Skills in scan order.
        assert_eq!(active_section(at(200.0), &bounds), Some(Section::Experience));
    }

    #[test]
    fn gap_between_sections_matches_nothing() {
        let bounds = vec![SectionBounds::new(Section::About, 0.0, 100.0)];
        assert_eq!(active_section(at(300.0), &bounds), None);
    }

    #[test]
    fn tracker_keeps_previous_section_on_gap() {
        let mut tracker = ActiveSectionTracker::new();
        let bounds = vec![
            SectionBounds::new(Section::About, 0.0, 100.0),
            SectionBounds::new(Section::Projects, 500.0, 300.0),
        ];

        assert_eq!(tracker.on_scroll(at(400.0), &bounds), Section::Projects);
        assert_eq!(tracker.on_scroll(at(900.0), &bounds), Section::Projects);
    }

    #[test]
    fn tracker_starts_at_about_and_accepts_selection() {
        let mut tracker = ActiveSectionTracker::new();
        assert_eq!(tracker.current(), Section::About);

        tracker.select(Section::Education);
        assert_eq!(tracker.current(), Section::Education);
    }

    #[test]
    fn anchors_match_display() {
        for section in Section::ALL {
            assert_eq!(section.to_string(), section.anchor());
        }
    }
}
