//! Headless multi-stop bottom sheet.
//!
//! A panel rests at one of a few vertical stops, follows the finger while a
//! drag is claimed, and on release either settles on a stop or slides out and
//! notifies its host. Rendering is left to the host, which reads
//! [`BottomSheet::panel_translation`] and [`BottomSheet::backdrop_opacity`]
//! after each frame.

mod bottom_sheet;
pub mod config;
mod drag;
mod error;
pub mod layout;
pub mod presentation;
pub mod release;
pub mod stops;

pub use bottom_sheet::BottomSheet;
pub use config::SheetConfig;
pub use drag::DragIntegrator;
pub use error::SheetError;
pub use layout::{LayoutBounds, LayoutObserver};
pub use presentation::{backdrop_opacity, interpolate, panel_translation, Extrapolation};
pub use release::{auto_snap_index, resolve_release, DismissCause, ReleaseOutcome};
pub use stops::{SheetForms, Stops};

pub use sheetkit_foundation::{DragSample, PointerEvent};

pub mod prelude {
    pub use crate::bottom_sheet::BottomSheet;
    pub use crate::config::SheetConfig;
    pub use crate::release::{DismissCause, ReleaseOutcome};
    pub use crate::stops::{SheetForms, Stops};
    pub use sheetkit_foundation::prelude::*;
}
