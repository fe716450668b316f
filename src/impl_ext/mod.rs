// Crate-internal.
// ---

pub(crate) mod standard_click_handlers {
    pub(crate) mod bar_chart;
    pub(crate) mod pie_chart;
}

// Public exports.
// ---

pub mod exports {
    // This mod represents how clients see the library, and can differ from the
    // internal structure.
    //
    // The contents of this mod are re-exported in the root of the crate.

    pub mod standard_click_handlers {
        pub use crate::impl_ext::standard_click_handlers::bar_chart::*;
        pub use crate::impl_ext::standard_click_handlers::pie_chart::*;
    }
}
