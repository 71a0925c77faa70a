//! Terminal user interface.
//!
//! ```text
//! StoreSnapshot + AppState ──▶ views ──▶ PortalViewModel ──▶ components ──▶ ANSI frame
//! ```
//!
//! # Modules
//!
//! - [`views`]: Page views, pure functions of store slices and props
//! - [`datatable`]: Generic table engine used by the reports view
//! - [`viewmodel`]: Display-ready types
//! - [`renderer`]: Frame rendering entry point
//! - [`helpers`]: Frame buffer and highlight drawing
//! - [`theme`]: Color themes
//! - `components`: Per-element renderers

mod components;
pub mod datatable;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;
pub mod views;

pub use renderer::render;
pub use theme::Theme;
pub use viewmodel::PortalViewModel;
