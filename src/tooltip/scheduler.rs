use std::time::Instant;

/// Deadline queue for delayed hides
///
/// The host drains it from its event loop; nothing fires on its own.
#[derive(Debug, Clone)]
pub struct HideScheduler<N> {
    pending: Vec<(Instant, N)>,
}

impl<N> Default for HideScheduler<N> {
    fn default() -> Self {
        Self {
            pending: Vec::new(),
        }
    }
}

impl<N: Copy + Eq> HideScheduler<N> {
    pub fn schedule(&mut self, target: N, due: Instant) {
        self.pending.push((due, target));
    }

    /// Remove every pending hide, returning their targets
    pub fn drain(&mut self) -> Vec<N> {
        self.pending.drain(..).map(|(_, target)| target).collect()
    }

    pub fn cancel(&mut self, target: N) {
        self.pending.retain(|&(_, t)| t != target);
    }

    /// Remove and return the targets whose deadline has passed, earliest first
    pub fn take_due(&mut self, now: Instant) -> Vec<N> {
        let mut due: Vec<(Instant, N)> = Vec::new();
        self.pending.retain(|&entry| {
            if entry.0 <= now {
                due.push(entry);
                false
            } else {
                true
            }
        });
        due.sort_by_key(|&(at, _)| at);
        due.into_iter().map(|(_, target)| target).collect()
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.iter().map(|&(at, _)| at).min()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
