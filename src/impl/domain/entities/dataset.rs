use std::collections::HashSet;

use super::appointment::Appointment;

/// Loaded appointments. Read-only once built.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    appointments: Vec<Appointment>,
    months: Vec<String>,
}

impl Dataset {
    pub fn new(appointments: Vec<Appointment>) -> Self {
        let months = {
            let mut seen = HashSet::new();
            appointments
                .iter()
                .filter(|a| seen.insert(a.month.as_str()))
                .map(|a| a.month.clone())
                .collect()
        };
        Self {
            appointments,
            months,
        }
    }

    pub fn appointments(&self) -> &[Appointment] {
        &self.appointments
    }

    /// Distinct month names, in first-encountered order.
    pub fn months(&self) -> &[String] {
        &self.months
    }

    /// Initial checklist value: only the first month present in the data.
    pub fn default_months(&self) -> Vec<String> {
        self.months.iter().take(1).cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.appointments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.appointments.is_empty()
    }
}
