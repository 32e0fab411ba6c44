//! lc-chart: chart metadata, gallery variants, and the live preview
//! synchronizer.
//!
//! This crate is the seam between the form and the rendering surface: the
//! form fills in [`ChartMetadata`] and a curve source, the synchronizer in
//! [`preview`] recomputes the point sequence whenever a whole-form snapshot
//! changes, and [`variant`] carries the gallery-side records (a theme plus a
//! display title plus sample data).

pub mod metadata;
pub mod preview;
pub mod variant;

pub use metadata::{CATEGORIES, ChartError, ChartMetadata, DIFFICULTIES};
pub use preview::{FormSnapshot, PreviewSync, Subscription};
pub use variant::ChartVariant;
