use std::fmt;

/// Categorical attribute that supports single-value drill-down.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, serde_derive::Serialize, serde_derive::Deserialize,
)]
pub enum Dimension {
    /// Request type.
    Anliegen,
    /// Service type.
    ServiceName,
    /// District.
    Bezirk,
}

impl Dimension {
    pub const ALL: [Dimension; 3] = [
        Dimension::Anliegen,
        Dimension::ServiceName,
        Dimension::Bezirk,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Dimension::Anliegen => "anliegen",
            Dimension::ServiceName => "service_name",
            Dimension::Bezirk => "bezirk",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
