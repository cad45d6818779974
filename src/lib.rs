//! Floor-plan editing and derived-measurement engine for residential design.
//!
//! This crate is the headless core of a blueprint editor: it owns the
//! wall-graph document and every mutation against it (drawing, dragging,
//! clipboard, undo), derives room areas from unordered wall sets, imports
//! walls from raster blueprint images, generates whole layouts from
//! parameters, interprets plain-English editing commands against a
//! rectangle-room model, checks that model against zoning rules, and
//! round-trips everything through the versioned project file format. A UI
//! layer is responsible only for feeding pointer coordinates and text in and
//! drawing the resulting state out.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`store`] | The [`store::PlanStore`]: mutations, selection, clipboard, undo |
//! | [`doc`] | Wall-graph entity types and per-floor collections |
//! | [`geometry`] | Segment math, shoelace area, grid snap, ring closure |
//! | [`snap`] | Door/window wall-proximity snapping |
//! | [`history`] | Bounded undo snapshot stack |
//! | [`raster`] | Blueprint image to wall segment extraction |
//! | [`rooms`] | Rectangle-room plan and its observable store |
//! | [`command`] | Natural-language commands over the room plan |
//! | [`layout`] | Parametric layout generation and parameter extraction |
//! | [`validate`] | Zoning checks over the room plan |
//! | [`project`] | Versioned project JSON persistence |
//! | [`consts`] | Shared numeric constants (grid unit, snap radius, etc.) |

pub mod command;
pub mod consts;
pub mod doc;
pub mod geometry;
pub mod history;
pub mod layout;
pub mod project;
pub mod raster;
pub mod rooms;
pub mod snap;
pub mod store;
pub mod validate;
