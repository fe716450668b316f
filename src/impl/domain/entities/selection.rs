use super::dimension::Dimension;

/// Drill-down values picked by clicking the dimension charts.
///
/// Each dimension holds at most one value; `None` means unselected. The month
/// checklist is tracked separately since it allows several values at once.
#[derive(
    Debug, Clone, Default, PartialEq, Eq, Hash, serde_derive::Serialize, serde_derive::Deserialize,
)]
pub struct SelectionState {
    pub selected_anliegen: Option<String>,
    pub selected_service_name: Option<String>,
    pub selected_bezirk: Option<String>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, dimension: Dimension) -> Option<&str> {
        self.slot(dimension).as_deref()
    }

    pub fn is_empty(&self) -> bool {
        Dimension::ALL.iter().all(|d| self.get(*d).is_none())
    }

    pub(crate) fn slot(&self, dimension: Dimension) -> &Option<String> {
        match dimension {
            Dimension::Anliegen => &self.selected_anliegen,
            Dimension::ServiceName => &self.selected_service_name,
            Dimension::Bezirk => &self.selected_bezirk,
        }
    }

    pub(crate) fn slot_mut(&mut self, dimension: Dimension) -> &mut Option<String> {
        match dimension {
            Dimension::Anliegen => &mut self.selected_anliegen,
            Dimension::ServiceName => &mut self.selected_service_name,
            Dimension::Bezirk => &mut self.selected_bezirk,
        }
    }
}
