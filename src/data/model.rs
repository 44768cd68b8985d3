//! Typed records for the adapter-content report.

/// One data row of the report.
///
/// Column 1 is the sample identifier and column 4 the adapter percentage;
/// columns 2-3 are carried through unchanged in `aux` without assuming any
/// semantics.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleRecord {
    pub sample_id: String,
    pub aux: [String; 2],
    /// Percentage of reads with adapters, expected in 0-100 but not clamped.
    pub adapter_percent: f64,
}

/// The report rows in original file order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdapterReport {
    pub samples: Vec<SampleRecord>,
}

impl AdapterReport {
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// The adapter percentages as a flat list, in row order.
    pub fn adapter_percentages(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.adapter_percent).collect()
    }
}
