//! The action vocabulary.
//!
//! The gesture interpreter and any front end produce [`Action`]s; only
//! [`Session::apply`](crate::Session::apply) executes them. This keeps
//! every mutation path funneled through one committing handler.

use penmark_core::{CellIndex, CellSet, Digit};

use crate::{
    gesture::DragMode,
    menu::{PillChoice, RadialChoice},
};
use penmark_assist::AssistMode;

/// Everything a front end can ask the session to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    // Board mutation.
    /// Commit a digit as a cell's value.
    SetValue {
        /// The cell to write.
        index: CellIndex,
        /// The value to commit.
        digit: Digit,
    },
    /// Clear a cell's value and marks.
    EraseCell(CellIndex),
    /// Number-picker digit tap: cycles marks over a selection, compares
    /// against a tapped target, or toggles the digit highlight.
    PickDigit(Digit),
    /// Delete tap: erases the tapped target if present, otherwise the
    /// whole selection as one batch.
    EraseInput,
    /// Run the chained naked-singles solve to a fixed point.
    SolveSingles,

    // Selection.
    /// Tap on a value-empty, non-given cell.
    TapEmpty {
        /// The tapped cell.
        index: CellIndex,
        /// Whether the tap adds to the selection instead of replacing it.
        additive: bool,
    },
    /// Tap on a cell holding a value (given or user-committed).
    TapFilled(CellIndex),
    /// Apply a drag step to the given cells.
    ApplyDrag {
        /// Cells swept over by the drag step.
        cells: CellSet,
        /// Whether the drag selects or deselects.
        mode: DragMode,
    },
    /// Drop the selection and the actioned latch.
    ClearSelection,

    // History.
    /// Step back one history snapshot.
    Undo,
    /// Step forward one history snapshot.
    Redo,

    // Assistance.
    /// Toggle an assist mode; the modes are mutually exclusive.
    ToggleAssist(AssistMode),

    // Menus.
    /// Open the radial menu on a non-given cell.
    OpenRadial(CellIndex),
    /// Commit the radial menu's choice to its target.
    RadialCommit(RadialChoice),
    /// Close the radial menu without committing.
    RadialDismiss,
    /// Open a pill menu for a digit; ignored while one is already open.
    OpenPill(Digit),
    /// Update the pill menu's hovered sub-region.
    PillHover(Option<PillChoice>),
    /// Release the pill menu, committing the hovered choice if any.
    PillRelease,
}
