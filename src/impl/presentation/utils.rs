use num_format::{Locale, ToFormattedString as _};

/// Counts with thousands separators. Uses the en locale (1,234) regardless of
/// the data's origin, matching the chart labels.
pub(crate) fn format_count(count: usize) -> String {
    count.to_formatted_string(&Locale::en)
}

/// Checked months as shown in chart titles, in checklist order.
pub(crate) fn join_months(months: &[String]) -> String {
    months.join(", ")
}
