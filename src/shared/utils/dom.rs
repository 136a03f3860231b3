//! Browser DOM access (WASM only)
//!
//! Thin wrappers over web-sys used by the scroll tracker and nav handlers.

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlAnchorElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, Window};

use crate::domain::models::{ScrollSample, SectionId, SectionSpan};
use crate::shared::errors::{AppError, Result};
use crate::shared::logging::{log_download, log_navigate};

fn window() -> Result<Window> {
    web_sys::window().ok_or_else(|| AppError::Dom("no global window".to_string()))
}

fn document() -> Result<Document> {
    window()?
        .document()
        .ok_or_else(|| AppError::Dom("window has no document".to_string()))
}

/// Bounding span of a section, `None` if its element isn't in the DOM yet
pub fn section_span(document: &Document, section: SectionId) -> Option<SectionSpan> {
    document.get_element_by_id(section.element_id()).map(|element| {
        let rect = element.get_bounding_client_rect();
        SectionSpan::new(rect.top(), rect.bottom())
    })
}

/// Read the scroll offset, viewport height and every section's span
pub fn measure_viewport() -> Result<ScrollSample> {
    let window = window()?;
    let document = document()?;

    let scroll_y = window
        .scroll_y()
        .map_err(|e| AppError::from_js("scrollY", e))?;
    let viewport_height = window
        .inner_height()
        .map_err(|e| AppError::from_js("innerHeight", e))?
        .as_f64()
        .unwrap_or(0.0);

    let spans = SectionId::ALL
        .iter()
        .map(|&section| (section, section_span(&document, section)))
        .collect();

    Ok(ScrollSample {
        scroll_y,
        viewport_height,
        spans,
    })
}

/// Smooth-scroll a section to the top of the viewport.
/// Returns `false` when the section element isn't attached.
pub fn scroll_section_into_view(section: SectionId) -> Result<bool> {
    let document = document()?;
    let Some(element) = document.get_element_by_id(section.element_id()) else {
        log_navigate(section, false);
        return Ok(false);
    };

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    element.scroll_into_view_with_scroll_into_view_options(&options);

    log_navigate(section, true);
    Ok(true)
}

/// Download a statically hosted file through a hidden, temporary anchor
pub fn download_document(href: &str, file_name: &str) -> Result<()> {
    let document = document()?;
    let body = document
        .body()
        .ok_or_else(|| AppError::Dom("document has no body".to_string()))?;

    let link: HtmlAnchorElement = document
        .create_element("a")
        .map_err(|e| AppError::from_js("createElement", e))?
        .dyn_into()
        .map_err(|_| AppError::Dom("created element is not an anchor".to_string()))?;
    link.set_href(href);
    link.set_download(file_name);
    link.style()
        .set_property("display", "none")
        .map_err(|e| AppError::from_js("style.display", e))?;

    log_download(href, file_name);

    body.append_child(&link)
        .map_err(|e| AppError::from_js("appendChild", e))?;
    link.click();
    body.remove_child(&link)
        .map_err(|e| AppError::from_js("removeChild", e))?;

    Ok(())
}
