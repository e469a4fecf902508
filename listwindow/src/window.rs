use crate::heights::HeightIndex;
use crate::types::Window;

/// Largest meaningful scroll offset for the given viewport.
pub fn max_scroll_offset<P>(heights: &HeightIndex<P>, viewport_height: u32) -> u64 {
    heights
        .total_height()
        .saturating_sub(viewport_height as u64)
}

/// The exact visible range for a scroll position, with no overscan margin.
pub fn visible_window<P>(
    heights: &HeightIndex<P>,
    scroll_offset: u64,
    viewport_height: u32,
) -> Window {
    compute_window(heights, scroll_offset, viewport_height, 0)
}

/// The window to materialize: the visible range expanded by `overscan`
/// items on both sides, saturating at the list ends.
///
/// The returned range always covers `[scroll_offset, scroll_offset +
/// viewport_height]` intersected with the content, using currently known
/// (estimated or measured) heights. Offsets past the end clamp to a window
/// ending at the last item; a zero viewport yields just the item under the
/// offset; an empty list yields the empty window.
pub fn compute_window<P>(
    heights: &HeightIndex<P>,
    scroll_offset: u64,
    viewport_height: u32,
    overscan: usize,
) -> Window {
    let n = heights.len();
    if n == 0 {
        return Window::empty();
    }

    let total = heights.total_height();
    let viewport = viewport_height as u64;
    let scroll = scroll_offset.min(total.saturating_sub(viewport));

    let start = heights.locate(scroll);
    let end = if viewport == 0 {
        start
    } else {
        let bottom = scroll.saturating_add(viewport);
        if bottom >= total {
            n - 1
        } else {
            (heights.locate(bottom) + 1).min(n - 1)
        }
    };

    let start = start.saturating_sub(overscan);
    let end = end.saturating_add(overscan).min(n - 1);
    debug_assert!(start <= end && end < n);

    Window {
        start_index: start,
        end_index: end,
        offset_y: heights.offset_of(start),
    }
}
