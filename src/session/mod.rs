//! Host-facing session.
//!
//! `Sandbox` ties the grid, rule engine, selection, history and clipboard
//! together behind the operations a host harness maps its input onto:
//!
//! | input | call |
//! |---|---|
//! | frame | [`Sandbox::tick`] |
//! | pause / step / back | [`Sandbox::toggle_pause`], [`Sandbox::step_once`], [`Sandbox::undo`] |
//! | click | [`Sandbox::click`] |
//! | selection mode | [`Sandbox::cycle_selection`] |
//! | regenerate | [`Sandbox::regenerate`] |
//! | mode keys | `toggle_topology`, `toggle_stability`, `toggle_paint_mode`, `cycle_placement` |
//! | copy / paste / import | `copy_selection`, `paste_selection`, `import_shape` |
//!
//! The host owns rendering: it reads [`Sandbox::grid`] each frame and
//! shades cells where [`Sandbox::is_highlighted`] is true.

mod sandbox;

pub use sandbox::{ClickOutcome, Sandbox};
