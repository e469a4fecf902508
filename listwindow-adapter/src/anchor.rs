use listwindow::ListWindow;

/// A scroll position remembered by item identity instead of raw offset.
///
/// Raw offsets go stale the moment rows are prepended, removed, or
/// re-estimated. Anchors survive those changes: capture one before the data
/// changes, reset the engine with the new rows, then apply it so the same
/// item lands back at its old place under the viewport top.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollAnchor {
    /// Identity token of the anchored item.
    pub token: u64,
    /// Distance from the item's top edge down to the viewport's top edge.
    pub offset_into_item: u64,
}

/// Captures an anchor for the first visible item.
///
/// Returns `None` when the list is empty or the engine has no identity fn
/// configured; anchors need stable tokens to outlive a reset.
pub fn capture_first_visible_anchor<P>(engine: &ListWindow<P>) -> Option<ScrollAnchor> {
    let window = engine.visible_window();
    if window.is_empty() {
        return None;
    }
    let index = window.start_index;
    let token = engine.token_of(index)?;
    let offset_into_item = engine
        .scroll_offset()
        .saturating_sub(engine.offset_of(index));
    Some(ScrollAnchor {
        token,
        offset_into_item,
    })
}

/// Applies a previously captured anchor by jumping the scroll offset so the
/// anchored item returns to its old viewport position.
///
/// Returns `true` when the token still resolves to an item in the current
/// data set.
pub fn apply_anchor<P>(engine: &mut ListWindow<P>, anchor: &ScrollAnchor) -> bool {
    let Some(index) = engine.find_token(anchor.token) else {
        return false;
    };
    let target = engine
        .offset_of(index)
        .saturating_add(anchor.offset_into_item);
    engine.scroll_to_offset(target);
    true
}
