//! Scroll-spy math and smooth section scrolling.
//!
//! SYSTEM CONTEXT
//! ==============
//! The navbar highlights whichever section straddles a probe line just below
//! the fixed header. The math here is pure; `observe` and `scroll_to_section`
//! are the hydrate-only DOM glue around it.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

/// Viewport y-coordinate a section must straddle to be active.
pub const ACTIVE_PROBE_PX: f64 = 100.0;

/// Scroll distance after which the navbar switches to its compact style.
pub const SCROLLED_THRESHOLD_PX: f64 = 20.0;

/// Height kept clear for the fixed navbar when scrolling to a section.
pub const NAVBAR_OFFSET_PX: f64 = 80.0;

/// Viewport-relative vertical bounds of a section element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionBounds {
    pub top: f64,
    pub bottom: f64,
}

impl SectionBounds {
    #[must_use]
    pub fn contains(&self, y: f64) -> bool {
        self.top <= y && self.bottom >= y
    }
}

/// First section (in page order) whose bounds contain `probe`.
#[must_use]
pub fn detect_active_section<'a>(sections: &[(&'a str, SectionBounds)], probe: f64) -> Option<&'a str> {
    sections.iter().find(|(_, bounds)| bounds.contains(probe)).map(|(id, _)| *id)
}

#[must_use]
pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLLED_THRESHOLD_PX
}

/// Document y to scroll to so the section lands below the navbar.
#[must_use]
pub fn scroll_target(offset_top: f64) -> f64 {
    (offset_top - NAVBAR_OFFSET_PX).max(0.0)
}

/// One reading of the page scroll position.
#[derive(Clone, Debug, PartialEq)]
pub struct ScrollObservation {
    pub scrolled: bool,
    pub active_section: Option<String>,
}

/// Measure the current scroll offset and the section under the probe line.
///
/// Sections whose element is missing from the document are skipped.
pub fn observe(section_ids: &[&str]) -> Option<ScrollObservation> {
    #[cfg(feature = "hydrate")]
    {
        let window = web_sys::window()?;
        let document = window.document()?;
        let scroll_y = window.scroll_y().unwrap_or(0.0);
        let sections = section_ids
            .iter()
            .filter_map(|id| {
                let rect = document.get_element_by_id(id)?.get_bounding_client_rect();
                Some((*id, SectionBounds { top: rect.top(), bottom: rect.bottom() }))
            })
            .collect::<Vec<_>>();
        Some(ScrollObservation {
            scrolled: is_scrolled(scroll_y),
            active_section: detect_active_section(&sections, ACTIVE_PROBE_PX).map(str::to_owned),
        })
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = section_ids;
        None
    }
}

/// Smoothly scroll the window so section `id` sits below the navbar.
pub fn scroll_to_section(id: &str) {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let Some(window) = web_sys::window() else {
            return;
        };
        let Some(element) = window
            .document()
            .and_then(|d| d.get_element_by_id(id))
            .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
        else {
            return;
        };
        let options = web_sys::ScrollToOptions::new();
        options.set_top(scroll_target(f64::from(element.offset_top())));
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
    }
}
