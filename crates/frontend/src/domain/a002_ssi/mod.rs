//! SSI weekly-metrics module: editable indicator × week grid,
//! server-side classification round-trip and the metas editor.

pub mod api;
pub mod grade;
pub mod metas;
pub mod ui;
