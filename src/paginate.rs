use crate::fonts::LineMeasurer;
use crate::model::{Page, Spacing};

/// Greedy single-pass pagination: lines fill the current page until the next
/// one would push it past `max_height - 2 * padding`, then a new page starts.
///
/// A line is always placed, so a line taller than the whole budget ends up
/// alone on its page instead of being dropped or split. Order is preserved.
pub fn paginate(
    lines: Vec<String>,
    measurer: &impl LineMeasurer,
    spacing: Spacing,
    max_height: u32,
    padding: u32,
) -> Vec<Page> {
    let budget = max_height.saturating_sub(padding.saturating_mul(2));
    let mut pages: Vec<Page> = Vec::new();
    let mut current: Vec<String> = Vec::new();
    let mut current_height: u32 = 0;

    for line in lines {
        let needed = measurer.measure(&line).height.saturating_add(spacing.for_line(&line));

        if !current.is_empty() && current_height.saturating_add(needed) > budget {
            pages.push(Page {
                lines: std::mem::take(&mut current),
                height: current_height,
            });
            current_height = 0;
        }

        if current.is_empty() && needed > budget {
            log::debug!(
                "paginate: line {:?} needs {needed}px, over the {budget}px budget; placing it alone",
                line,
            );
        }

        current.push(line);
        current_height = current_height.saturating_add(needed);
    }

    if !current.is_empty() {
        pages.push(Page {
            lines: current,
            height: current_height,
        });
    }

    log::debug!("paginate: {} pages, budget {budget}px", pages.len());
    pages
}
