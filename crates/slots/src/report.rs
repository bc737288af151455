//! Pass results

/// What loading one slot did to the scene
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// A new item and source were created
    Created,
    /// A new item was attached to an already-open source
    Reused,
    /// Nothing was added (unrecognized content)
    Skipped,
}

/// Save pass result
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SaveReport {
    /// Slots written
    pub saved: usize,
    /// Items left out because their kind is unrecognized
    pub dropped: usize,
    /// Total pass time (microseconds)
    pub elapsed_micros: u64,
}

impl SaveReport {
    /// Get human-readable summary
    pub fn summary(&self) -> String {
        format!(
            "Save complete: {} slots, {} dropped, {:.2}ms",
            self.saved,
            self.dropped,
            self.elapsed_micros as f64 / 1000.0
        )
    }

    /// Check if any item was left out
    pub fn has_issues(&self) -> bool {
        self.dropped > 0
    }
}

/// Load pass result
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LoadReport {
    /// Items created with a new source
    pub created: usize,
    /// Items attached to an already-open source
    pub reused: usize,
    /// Slots skipped because their content is unrecognized
    pub skipped: usize,
    /// Total pass time (microseconds)
    pub elapsed_micros: u64,
}

impl LoadReport {
    /// Record one slot's outcome
    pub fn record(&mut self, outcome: LoadOutcome) {
        match outcome {
            LoadOutcome::Created => self.created += 1,
            LoadOutcome::Reused => self.reused += 1,
            LoadOutcome::Skipped => self.skipped += 1,
        }
    }

    /// Items added to the scene
    pub fn added(&self) -> usize {
        self.created + self.reused
    }

    /// Get human-readable summary
    pub fn summary(&self) -> String {
        format!(
            "Load complete: {} created, {} reused, {} skipped, {:.2}ms",
            self.created,
            self.reused,
            self.skipped,
            self.elapsed_micros as f64 / 1000.0
        )
    }

    /// Check if any slot was skipped
    pub fn has_issues(&self) -> bool {
        self.skipped > 0
    }
}
