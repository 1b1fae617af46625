use std::sync::atomic::{AtomicU64, Ordering};

/// Monotonic `<prefix><n>` id allocator that continues after seeded ids.
#[derive(Debug)]
pub(crate) struct IdSequence {
    prefix: &'static str,
    last: AtomicU64,
}

impl IdSequence {
    /// Starts after the highest numeric suffix among `existing`.
    pub(crate) fn starting_after<'a>(
        prefix: &'static str,
        existing: impl IntoIterator<Item = &'a str>,
    ) -> Self {
        let last = existing
            .into_iter()
            .filter_map(|id| id.strip_prefix(prefix))
            .filter_map(|suffix| suffix.parse::<u64>().ok())
            .max()
            .unwrap_or(0);

        Self {
            prefix,
            last: AtomicU64::new(last),
        }
    }

    pub(crate) fn next_id(&self) -> String {
        let next = self.last.fetch_add(1, Ordering::Relaxed) + 1;
        format!("{}{next}", self.prefix)
    }
}
