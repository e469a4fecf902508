/// Trailing-edge debounce over the host-driven clock.
///
/// All times are host-supplied `now_ms` values; the scheduler owns no timer
/// or thread of its own. Arming replaces any earlier deadline, so at most
/// one recompute is ever pending, and only the state current at fire time is
/// acted on. Structural data changes bypass this entirely (the engine
/// recomputes them inline).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UpdateScheduler {
    deadline_ms: Option<u64>,
}

impl UpdateScheduler {
    pub fn new() -> Self {
        Self { deadline_ms: None }
    }

    /// Arms (or re-arms) the deadline at `now_ms + interval_ms`.
    pub fn schedule(&mut self, now_ms: u64, interval_ms: u64) {
        let deadline = now_ms.saturating_add(interval_ms);
        lwtrace!("debounce armed: deadline={deadline}");
        self.deadline_ms = Some(deadline);
    }

    /// Schedules a recompute for a height correction, unless the delta is
    /// within the jitter threshold.
    ///
    /// Shares the deadline with scroll events; whichever fires first covers
    /// both. Returns whether a recompute is now pending.
    pub fn note_correction(
        &mut self,
        delta: i64,
        now_ms: u64,
        interval_ms: u64,
        jitter_threshold: u32,
    ) -> bool {
        if delta.unsigned_abs() > jitter_threshold as u64 {
            self.schedule(now_ms, interval_ms);
        }
        self.deadline_ms.is_some()
    }

    /// Fires the pending deadline if the quiescence interval has elapsed.
    ///
    /// Disarms on fire; a burst of `schedule` calls therefore produces
    /// exactly one `true` from `poll`, after the burst goes quiet.
    pub fn poll(&mut self, now_ms: u64) -> bool {
        match self.deadline_ms {
            Some(deadline) if now_ms >= deadline => {
                lwtrace!("debounce fired: now={now_ms} deadline={deadline}");
                self.deadline_ms = None;
                true
            }
            _ => false,
        }
    }

    /// Drops the pending deadline, if any. Teardown path: nothing fires
    /// after this until a new event arms the scheduler again.
    pub fn cancel(&mut self) {
        self.deadline_ms = None;
    }

    pub fn is_armed(&self) -> bool {
        self.deadline_ms.is_some()
    }

    /// The pending deadline, for hosts that schedule their next wakeup
    /// around it.
    pub fn deadline_ms(&self) -> Option<u64> {
        self.deadline_ms
    }
}
