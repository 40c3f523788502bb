//! UI module root: the resource panel and its helpers.

pub mod panel;
pub mod theme;
pub mod util;
