use alloc::vec::Vec;

use crate::error::EngineError;
use crate::fenwick::Fenwick;

/// Smallest admissible item height.
///
/// Offset lookup relies on cumulative heights being strictly monotone, so
/// zero estimates and zero measurements are clamped to this value at the
/// boundary instead of being stored.
pub const MIN_ITEM_HEIGHT: u32 = 1;

/// One tracked item: the insertion-time estimate, the host measurement once
/// one exists, and the payload.
#[derive(Clone, Debug)]
pub(crate) struct ItemRecord<P> {
    pub(crate) estimated: u32,
    pub(crate) measured: Option<u32>,
    pub(crate) payload: P,
}

impl<P> ItemRecord<P> {
    pub(crate) fn height(&self) -> u32 {
        self.measured.unwrap_or(self.estimated)
    }
}

/// Cumulative-height index over the item sequence.
///
/// Owns the items. Each height is estimated exactly once at insertion and
/// corrected in place when the host reports a real measurement; cumulative
/// offsets are served from a Fenwick tree so a correction costs `O(log n)`
/// rather than a rewrite of every offset after it.
#[derive(Clone, Debug)]
pub struct HeightIndex<P> {
    items: Vec<ItemRecord<P>>,
    sums: Fenwick,
}

impl<P> HeightIndex<P> {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            sums: Fenwick::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Rebuilds the index from scratch. `O(n)`.
    ///
    /// Every item is re-estimated and all previous measurements are
    /// discarded; the host re-measures whatever it renders next.
    pub fn reset<I>(&mut self, items: I, estimate: impl Fn(&P) -> u32)
    where
        I: IntoIterator<Item = P>,
    {
        self.items.clear();
        for payload in items {
            let estimated = estimate(&payload).max(MIN_ITEM_HEIGHT);
            self.items.push(ItemRecord {
                estimated,
                measured: None,
                payload,
            });
        }
        let heights: Vec<u32> = self.items.iter().map(|r| r.estimated).collect();
        self.sums = Fenwick::from_heights(&heights);
        lwdebug!(
            "height index reset: items={} total={}",
            self.items.len(),
            self.sums.total()
        );
    }

    /// Appends items at the end, continuing from the prior total.
    ///
    /// Existing cumulative offsets are not disturbed. Returns the number of
    /// items appended.
    pub fn append<I>(&mut self, items: I, estimate: impl Fn(&P) -> u32) -> usize
    where
        I: IntoIterator<Item = P>,
    {
        let before = self.items.len();
        for payload in items {
            let estimated = estimate(&payload).max(MIN_ITEM_HEIGHT);
            self.items.push(ItemRecord {
                estimated,
                measured: None,
                payload,
            });
            self.sums.push_height(estimated);
        }
        let added = self.items.len() - before;
        lwdebug!(
            "height index append: added={added} total={}",
            self.sums.total()
        );
        added
    }

    /// Replaces the height at `index` with a real measurement.
    ///
    /// Returns the signed difference against the previously effective height
    /// so the caller can decide whether the visible window needs a
    /// recompute. An out-of-range index leaves the index untouched.
    pub fn correct(&mut self, index: usize, measured: u32) -> Result<i64, EngineError> {
        let len = self.items.len();
        let Some(record) = self.items.get_mut(index) else {
            return Err(EngineError::StaleIndex { index, len });
        };
        let clamped = measured.max(MIN_ITEM_HEIGHT);
        let old = record.height();
        record.measured = Some(clamped);
        let delta = clamped as i64 - old as i64;
        if delta != 0 {
            self.sums.add(index, delta);
        }
        lwtrace!("height corrected: index={index} height={clamped} delta={delta}");
        Ok(delta)
    }

    /// Offset of the top of `index` from the top of the list.
    ///
    /// `0` for index 0; indices at or past the end return the total height.
    pub fn offset_of(&self, index: usize) -> u64 {
        self.sums.prefix_sum(index)
    }

    /// Index of the item covering `offset`: the smallest index whose
    /// cumulative height exceeds it.
    ///
    /// Offsets at or past the total clamp to the last index; an empty index
    /// returns 0.
    pub fn locate(&self, offset: u64) -> usize {
        let n = self.items.len();
        if n == 0 {
            return 0;
        }
        self.sums.lower_bound(offset).min(n - 1)
    }

    pub fn total_height(&self) -> u64 {
        self.sums.total()
    }

    /// Effective height of `index`: measured when available, estimated
    /// otherwise.
    pub fn height_of(&self, index: usize) -> Option<u32> {
        self.items.get(index).map(ItemRecord::height)
    }

    pub fn is_measured(&self, index: usize) -> bool {
        self.items
            .get(index)
            .is_some_and(|r| r.measured.is_some())
    }

    pub fn payload(&self, index: usize) -> Option<&P> {
        self.items.get(index).map(|r| &r.payload)
    }

    pub(crate) fn records(&self) -> &[ItemRecord<P>] {
        &self.items
    }
}

impl<P> Default for HeightIndex<P> {
    fn default() -> Self {
        Self::new()
    }
}
