//! folio: the view-activation core of a single-page portfolio.
//!
//! A [`viewport::Window`] stands in for the host browser window: it owns the laid-out document,
//! the scroll position and the listener registries. On top of it sit the scroll-spy
//! ([`spy`]), the scroll direction tracker ([`scroll`]), smooth navigation ([`nav`]), keyboard
//! shortcuts ([`shortcuts`]) and the persisted theme preference ([`theme`]). A
//! [`page::PageView`] mounts all of them for one page and releases them together when dropped.
//!
//! The [`app_state`] and [`ui`] modules drive a terminal front end from the same core.
#![allow(clippy::multiple_crate_versions)]

pub mod app_state;
pub mod config;
pub mod contact;
pub mod content;
pub mod error;
pub mod listener;
pub mod nav;
pub mod page;
pub mod scroll;
pub mod section;
pub mod shortcuts;
pub mod spy;
pub mod theme;
pub mod ui;
pub mod viewport;

pub use error::{Error, Result};
