use fractic_server_error::{define_client_error, define_internal_error};

// IO-related.
define_client_error!(ReadError, "Error reading file.");

// Parsing-related.
define_client_error!(InvalidCsv, "Invalid CSV format.");
define_client_error!(
    MissingColumns,
    "Appointments CSV is missing required column(s): {columns}.",
    { columns: &str }
);
define_client_error!(
    InvalidTimestamp,
    "Invalid appointment start time: '{value}'.",
    { value: &str }
);
define_client_error!(InvalidConfig, "Invalid dataset configuration (invalid RON format).");

// Interaction-related.
define_client_error!(
    UnknownChartPayload,
    "Unrecognized click payload for the {chart} chart.",
    { chart: &str }
);

// Presentation-related.
define_internal_error!(
    ExportFailed,
    "Failed to export dashboard cycle: {details}.",
    { details: &str }
);
