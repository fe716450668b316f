use super::dimension::Dimension;

#[derive(Debug, Clone, PartialEq, Eq, serde_derive::Serialize)]
pub struct CategoryCount {
    pub category: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, serde_derive::Serialize)]
pub struct DailyCount {
    pub month: String,
    pub day: u32,
    pub count: usize,
}

/// Everything the charts need for one recompute cycle.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde_derive::Serialize)]
pub struct AggregationResult {
    pub total_records: usize,
    /// Descending by count; also the display order of the anliegen chart.
    pub anliegen_counts: Vec<CategoryCount>,
    pub service_name_counts: Vec<CategoryCount>,
    pub bezirk_counts: Vec<CategoryCount>,
    /// One entry per (month, day) with at least one appointment.
    pub daily_series: Vec<DailyCount>,
}

impl AggregationResult {
    pub fn counts(&self, dimension: Dimension) -> &[CategoryCount] {
        match dimension {
            Dimension::Anliegen => &self.anliegen_counts,
            Dimension::ServiceName => &self.service_name_counts,
            Dimension::Bezirk => &self.bezirk_counts,
        }
    }
}
