//! Session layer for Penmark: selection, gestures, menus, history, and
//! solved tracking around a board in play.
//!
//! The [`Session`] owns all mutable state; front ends translate input
//! into [`Action`]s (usually through the [`GestureInterpreter`]) and feed
//! them to [`Session::apply`], then redraw from [`Session::view`]. There
//! are no globals anywhere in this stack.
//!
//! ```
//! use penmark_core::{CellIndex, Digit};
//! use penmark_session::{Action, NullSink, Session};
//!
//! let mut session = Session::default();
//! let blank = CellIndex::all()
//!     .find(|&index| !session.board().cell(index).is_given)
//!     .unwrap();
//! session.apply(
//!     Action::SetValue {
//!         index: blank,
//!         digit: Digit::D1,
//!     },
//!     &mut NullSink,
//! );
//! session.apply(Action::Undo, &mut NullSink);
//! assert_eq!(session.board().cell(blank).value, None);
//! ```

pub use penmark_assist::AssistMode;

mod action;
mod catalog;
mod gesture;
mod history;
mod menu;
mod selection;
mod session;
mod undo_redo_stack;

pub use self::{
    action::Action,
    catalog::{Catalog, CatalogEntry, Difficulty, SolvedRecord},
    gesture::{
        DOUBLE_TAP_WINDOW_MS, DragMode, GestureInterpreter, GestureOutput, LONG_PRESS_MS,
        Modifiers, raster_line,
    },
    history::History,
    menu::{PillChoice, PillSession, RadialChoice},
    selection::Selection,
    session::{ActionEffect, NullSink, Session, SessionView, Settings, SolvedSink},
};
