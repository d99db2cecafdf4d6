//! Client-side interactivity for the portfolio site.
//!
//! This crate is compiled to WebAssembly and runs on every page of the
//! static site. Each behavior is modeled as plain Rust state first so it can
//! be tested without a browser; the [`web`] module (behind the `browser`
//! feature) binds that state to the real DOM and owns every `web-sys` call.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | Site content and settings, with JSON overrides |
//! | [`consts`] | Class names, labels, colors, and delays |
//! | [`style`] | Stylesheet text injected once per page |
//! | [`theme`] | Light/dark preference and the toggle controller |
//! | [`footer`] | Footer line built from year and last-modified text |
//! | [`nav`] | Active navigation link selection |
//! | [`page`] | Page-mode value and widget dispatch |
//! | [`widgets`] | Per-page widget state (facts, accordion, hover, projects, copy) |
//! | [`web`] | Browser bindings and exported entry points |

pub mod config;
pub mod consts;
pub mod footer;
pub mod nav;
pub mod page;
pub mod style;
pub mod theme;
#[cfg(feature = "browser")]
pub mod web;
pub mod widgets;
