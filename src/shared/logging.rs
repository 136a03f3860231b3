//! Structured logging helpers
//!
//! Consistent `operation = ...` fields for everything the page logs, so the
//! browser console (or the server's stdout) can be filtered per concern.

use crate::domain::models::SectionId;

#[derive(Debug, Clone, Copy)]
pub enum LogOperation {
    ContentLoad,
    ScrollTrack,
    Navigation,
    Download,
    StaticServe,
}

impl LogOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogOperation::ContentLoad => "content_load",
            LogOperation::ScrollTrack => "scroll_track",
            LogOperation::Navigation => "navigation",
            LogOperation::Download => "download",
            LogOperation::StaticServe => "static_serve",
        }
    }
}

pub fn log_content_loaded(projects: usize, nav_items: usize) {
    tracing::info!(
        operation = LogOperation::ContentLoad.as_str(),
        project_count = projects,
        nav_item_count = nav_items,
        "Site content loaded"
    );
}

pub fn log_content_error(error: &str) {
    tracing::error!(
        operation = LogOperation::ContentLoad.as_str(),
        error = error,
        "Failed to load site content"
    );
}

pub fn log_scroll_listener(attached: bool) {
    tracing::debug!(
        operation = LogOperation::ScrollTrack.as_str(),
        attached = attached,
        "Scroll listener state changed"
    );
}

/// Only logged when the active section actually changes
pub fn log_active_section_change(from: SectionId, to: SectionId, scroll_y: f64) {
    tracing::debug!(
        operation = LogOperation::ScrollTrack.as_str(),
        from = from.as_str(),
        to = to.as_str(),
        scroll_y = scroll_y,
        "Active section changed"
    );
}

pub fn log_navigate(section: SectionId, found: bool) {
    if found {
        tracing::debug!(
            operation = LogOperation::Navigation.as_str(),
            section = section.as_str(),
            "Scrolling section into view"
        );
    } else {
        tracing::debug!(
            operation = LogOperation::Navigation.as_str(),
            section = section.as_str(),
            "Section element not attached, skipping scroll"
        );
    }
}

pub fn log_download(href: &str, file_name: &str) {
    tracing::info!(
        operation = LogOperation::Download.as_str(),
        href = href,
        file_name = file_name,
        "Starting document download"
    );
}

pub fn log_dom_error(operation: LogOperation, error: &str) {
    tracing::warn!(
        operation = operation.as_str(),
        error = error,
        "DOM operation failed"
    );
}
