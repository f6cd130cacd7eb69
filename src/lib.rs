//! Core library for the center-atlas command line application.
//!
//! The library reconciles two brand-specific spreadsheet exports of
//! childcare-center locations into one unified record set and prepares the
//! outputs their consumers need: a map specification for the visualization
//! frontend and a CSV export of the Kindercare table. The modules keep
//! responsibilities narrow and composable: IO adapters live under [`io`],
//! data representations inside [`model`], the normalization and coverage
//! logic in [`reconcile`], the map description in [`viz`], and the
//! end-to-end orchestration under [`pipeline`].

pub mod error;
pub mod io;
pub mod model;
pub mod pipeline;
pub mod reconcile;
pub mod viz;

pub use error::{AtlasError, Result};
