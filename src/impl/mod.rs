// Crate-internal.
// ---

pub(crate) mod data {
    pub(crate) mod datasources {
        pub(crate) mod appointments_csv_datasource;
    }
    pub(crate) mod models {
        pub(crate) mod category_model;
        pub(crate) mod click_payload_model;
        pub(crate) mod start_time_model;
    }
    pub(crate) mod repositories {
        pub(crate) mod dataset_repository_impl;
    }
}

pub(crate) mod domain {
    pub(crate) mod entities {
        pub(crate) mod aggregation;
        pub(crate) mod appointment;
        pub(crate) mod dataset;
        pub(crate) mod dataset_config;
        pub(crate) mod dimension;
        pub(crate) mod handlers;
        pub(crate) mod selection;
    }
    pub(crate) mod logic {
        pub(crate) mod aggregation_engine;
        pub(crate) mod selection_toggle;
        pub(crate) mod session;
        mod utils;
    }
    pub(crate) mod repositories {
        pub(crate) mod dataset_repository;
    }
    pub(crate) mod usecases {
        pub(crate) mod load_usecase;
    }
}

pub(crate) mod presentation {
    pub(crate) mod dashboard_printer;
    pub(crate) mod utils;
}

// Public exports.
// ---

#[doc(hidden)]
#[allow(unused_imports)]
pub mod exports {
    // This mod represents how clients see the library, and can differ from the
    // internal structure.
    //
    // The contents of this mod are re-exported in the root of the crate.

    pub mod entities {
        pub use crate::domain::entities::aggregation::*;
        pub use crate::domain::entities::appointment::*;
        pub use crate::domain::entities::dataset::*;
        pub use crate::domain::entities::dataset_config::*;
        pub use crate::domain::entities::dimension::*;
        pub use crate::domain::entities::handlers::*;
        pub use crate::domain::entities::selection::*;
        pub use crate::presentation::dashboard_printer::ChartTitles;
    }

    pub mod logic {
        pub use crate::domain::logic::aggregation_engine::compute;
        pub use crate::domain::logic::selection_toggle::toggle;
        pub use crate::domain::logic::session::DashboardSession;
    }
}
