//! Last-commit widget core
//!
//! - Commit transport seam and GitHub implementation in `source`
//! - Widget configuration resolution in `config`
//! - Refresh-cycle and preview production in `timeline`
//! - Plain-text entry rendering in `render`

pub mod config;
pub mod render;
pub mod source;
pub mod timeline;
