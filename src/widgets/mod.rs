//! Per-page widget state.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each widget owns the state its DOM nodes display. Event handlers in the
//! browser layer call into these types and then render what they report, so
//! every interaction rule here is testable without a document.

pub mod accordion;
pub mod copy_email;
pub mod fun_fact;
pub mod hover;
pub mod projects;
pub mod timer;
