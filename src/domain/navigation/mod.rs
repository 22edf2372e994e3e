//! Navigation domain module.
//!
//! Works out which page section the navigation bar highlights while the
//! visitor scrolls.

mod section;

pub use section::{
    active_section, ActiveSectionTracker, ScrollSnapshot, Section, SectionBounds,
    BOTTOM_TOLERANCE, SECTION_OFFSET,
};
