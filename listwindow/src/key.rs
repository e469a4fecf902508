use alloc::sync::Arc;

/// Derives a stable identity token from an item payload.
///
/// Hosts typically hash a record id here. The token follows the item, not
/// the slot, so view-diffing layers can match old and new windows item by
/// item.
pub type IdentityFn<P> = Arc<dyn Fn(&P) -> u64 + Send + Sync>;

/// Recycle key for a rendered slot.
///
/// Stable across window recomputations for the same underlying item (the
/// host reuses the slot instead of remounting it) and distinct for different
/// items occupying the same slot (stale visual state is never carried over).
///
/// Without an identity fn the key degrades to the logical index alone. That
/// stays correct under reset and append, but cannot tell items apart if the
/// host swaps payloads in place; such hosts should supply an identity fn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SlotKey {
    pub index: usize,
    pub token: Option<u64>,
}

/// Composes the key for the item at `index`.
pub(crate) fn slot_key_for<P>(
    index: usize,
    identity: Option<&IdentityFn<P>>,
    payload: &P,
) -> SlotKey {
    SlotKey {
        index,
        token: identity.map(|f| f(payload)),
    }
}
