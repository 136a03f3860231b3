use crate::domain::models::{SectionId, SectionSpan};

/// Section whose span straddles the viewport's vertical midpoint.
///
/// Sections that are not attached yet (`None`) are skipped. When spans
/// overlap the topmost one wins; equal tops keep document order.
pub fn resolve_active_section(
    spans: &[(SectionId, Option<SectionSpan>)],
    viewport_height: f64,
) -> Option<SectionId> {
    let midpoint = viewport_height / 2.0;

    let mut best: Option<(SectionId, f64)> = None;
    for (section, span) in spans {
        let Some(span) = span else { continue };
        if !span.contains(midpoint) {
            continue;
        }
        match best {
            Some((_, top)) if top <= span.top => {}
            _ => best = Some((*section, span.top)),
        }
    }

    best.map(|(section, _)| section)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn span(top: f64, bottom: f64) -> Option<SectionSpan> {
        Some(SectionSpan::new(top, bottom))
    }

    #[test]
    fn test_projects_spanning_midpoint_is_active() {
        let spans = [
            (SectionId::About, span(-900.0, -100.0)),
            (SectionId::Projects, span(-100.0, 1400.0)),
            (SectionId::Contact, span(1400.0, 1700.0)),
        ];
        assert_eq!(resolve_active_section(&spans, 800.0), Some(SectionId::Projects));
    }

    #[test]
    fn test_no_section_at_midpoint() {
        // Hero fills the viewport, about starts below the fold
        let spans = [
            (SectionId::About, span(900.0, 1600.0)),
            (SectionId::Projects, span(1600.0, 2800.0)),
            (SectionId::Contact, span(2800.0, 3000.0)),
        ];
        assert_eq!(resolve_active_section(&spans, 800.0), None);
    }

    #[test]
    fn test_unattached_sections_are_skipped() {
        let spans = [
            (SectionId::About, None),
            (SectionId::Projects, None),
            (SectionId::Contact, span(0.0, 800.0)),
        ];
        assert_eq!(resolve_active_section(&spans, 800.0), Some(SectionId::Contact));
        assert_eq!(resolve_active_section(&spans[..2], 800.0), None);
    }

    #[test]
    fn test_overlapping_spans_topmost_wins() {
        let spans = [
            (SectionId::About, span(-200.0, 500.0)),
            (SectionId::Projects, span(-300.0, 600.0)),
            (SectionId::Contact, span(100.0, 900.0)),
        ];
        assert_eq!(resolve_active_section(&spans, 800.0), Some(SectionId::Projects));
    }

    #[test]
    fn test_equal_tops_keep_document_order() {
        let spans = [
            (SectionId::About, span(0.0, 800.0)),
            (SectionId::Projects, span(0.0, 800.0)),
        ];
        assert_eq!(resolve_active_section(&spans, 800.0), Some(SectionId::About));
    }

    #[test]
    fn test_boundary_touching_midpoint_counts() {
        let spans = [
            (SectionId::About, span(-400.0, 400.0)),
            (SectionId::Projects, span(400.0, 1200.0)),
        ];
        // Both touch y=400; about sits higher
        assert_eq!(resolve_active_section(&spans, 800.0), Some(SectionId::About));
        assert_eq!(resolve_active_section(&spans[1..], 800.0), Some(SectionId::Projects));
    }
}
