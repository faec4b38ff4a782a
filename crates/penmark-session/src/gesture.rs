//! Pointer gesture interpretation.
//!
//! A state machine over one pointer sequence at a time. Time is explicit:
//! the host supplies millisecond timestamps with every down/up event and
//! owns the long-press timer, which the interpreter arms and cancels
//! through [`GestureOutput`] effects. Nothing here touches the board; the
//! interpreter reads session state and emits [`Action`]s.

use penmark_core::CellIndex;

use crate::{Session, action::Action};

/// Same-cell taps within this window count as a double tap.
pub const DOUBLE_TAP_WINDOW_MS: u64 = 300;
/// How long the host's long-press timer should run before calling
/// [`GestureInterpreter::on_long_press`].
pub const LONG_PRESS_MS: u64 = 300;

bitflags::bitflags! {
    /// Keyboard modifiers held during a pointer event.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Modifiers: u8 {
        /// The shift key.
        const SHIFT = 1;
        /// The control key.
        const CTRL = 1 << 1;
    }
}

impl Modifiers {
    /// Whether any additive-selection modifier is held.
    #[must_use]
    pub const fn is_additive(self) -> bool {
        !self.is_empty()
    }
}

/// Whether a drag adds to or removes from the selection. Fixed for the
/// whole drag by whether the starting cell was already selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum DragMode {
    /// Add swept cells to the selection.
    Select,
    /// Remove swept cells from the selection.
    Deselect,
}

/// An effect the host must carry out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureOutput {
    /// Start a [`LONG_PRESS_MS`] timer; call `on_long_press` on expiry.
    ArmLongPress,
    /// Cancel a previously armed long-press timer.
    CancelLongPress,
    /// Apply this action to the session.
    Act(Action),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PointerState {
    Idle,
    /// Pointer is down, no drag yet.
    Pending {
        start: CellIndex,
        modifiers: Modifiers,
        long_press_armed: bool,
    },
    Dragging {
        mode: DragMode,
        last: CellIndex,
    },
}

/// The per-pointer-sequence state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GestureInterpreter {
    state: PointerState,
    last_tap: Option<(CellIndex, u64)>,
}

impl Default for GestureInterpreter {
    fn default() -> Self {
        Self::new()
    }
}

impl GestureInterpreter {
    /// An interpreter with no pointer sequence in progress.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: PointerState::Idle,
            last_tap: None,
        }
    }

    /// Whether the starting cell can seed a long-press drag.
    fn drag_eligible(session: &Session, index: CellIndex) -> bool {
        let cell = session.board().cell(index);
        !cell.is_given && cell.value.is_none()
    }

    /// Pointer down on a grid cell at time `at` (milliseconds).
    ///
    /// A second down on the same non-given cell inside the double-tap
    /// window opens the radial menu and cancels the pending long-press.
    /// Otherwise the sequence becomes a pending tap and, if the cell is
    /// drag-eligible, arms the long-press timer.
    pub fn on_pointer_down(
        &mut self,
        session: &Session,
        index: CellIndex,
        at: u64,
        modifiers: Modifiers,
    ) -> Vec<GestureOutput> {
        // A pill session is a single modal interaction; new grid
        // activations are ignored until it resolves.
        if session.pill().is_some() {
            return Vec::new();
        }

        let double_tap = self
            .last_tap
            .is_some_and(|(cell, t)| cell == index && at.saturating_sub(t) <= DOUBLE_TAP_WINDOW_MS);
        if double_tap && !session.board().cell(index).is_given {
            self.state = PointerState::Idle;
            self.last_tap = None;
            return vec![
                GestureOutput::CancelLongPress,
                GestureOutput::Act(Action::OpenRadial(index)),
            ];
        }

        self.last_tap = Some((index, at));
        let long_press_armed = Self::drag_eligible(session, index);
        self.state = PointerState::Pending {
            start: index,
            modifiers,
            long_press_armed,
        };
        if long_press_armed {
            vec![GestureOutput::ArmLongPress]
        } else {
            Vec::new()
        }
    }

    /// The host's long-press timer expired.
    ///
    /// Begins a drag whose mode is fixed by the starting cell's current
    /// selection membership.
    pub fn on_long_press(&mut self, session: &Session) -> Vec<GestureOutput> {
        let PointerState::Pending {
            start,
            long_press_armed: true,
            ..
        } = self.state
        else {
            return Vec::new();
        };
        if !Self::drag_eligible(session, start) {
            self.state = PointerState::Idle;
            return Vec::new();
        }
        let mode = if session.selection().contains(start) {
            DragMode::Deselect
        } else {
            DragMode::Select
        };
        self.state = PointerState::Dragging { mode, last: start };
        // A drag is never a tap; forget the double-tap anchor.
        self.last_tap = None;
        vec![GestureOutput::Act(Action::ApplyDrag {
            cells: penmark_core::CellSet::from_cell(start),
            mode,
        })]
    }

    /// Pointer moved onto a (possibly unchanged) grid cell.
    ///
    /// While dragging, every cell on the rasterized line from the previous
    /// sample is applied, so fast pointer motion cannot skip cells. A move
    /// off the starting cell before the long-press fires abandons the
    /// pending tap.
    pub fn on_pointer_move(&mut self, index: CellIndex) -> Vec<GestureOutput> {
        match self.state {
            PointerState::Dragging { mode, ref mut last } => {
                if *last == index {
                    return Vec::new();
                }
                let from = *last;
                *last = index;
                let cells = raster_line(from, index)
                    .into_iter()
                    .filter(|&cell| cell != from)
                    .collect();
                vec![GestureOutput::Act(Action::ApplyDrag { cells, mode })]
            }
            PointerState::Pending {
                start,
                long_press_armed,
                ..
            } if start != index => {
                self.state = PointerState::Idle;
                if long_press_armed {
                    vec![GestureOutput::CancelLongPress]
                } else {
                    Vec::new()
                }
            }
            PointerState::Pending { .. } | PointerState::Idle => Vec::new(),
        }
    }

    /// Pointer up at time `at`.
    ///
    /// Finalizes a drag (the selection was mutated live, nothing more to
    /// do) or dispatches the pending tap: filled cells toggle the tapped
    /// target, empty cells toggle selection membership. Additive selection
    /// applies when a modifier was held or an un-actioned selection
    /// already exists.
    pub fn on_pointer_up(
        &mut self,
        session: &Session,
        index: CellIndex,
        _at: u64,
    ) -> Vec<GestureOutput> {
        match std::mem::replace(&mut self.state, PointerState::Idle) {
            PointerState::Dragging { .. } => Vec::new(),
            PointerState::Idle => Vec::new(),
            PointerState::Pending {
                start,
                modifiers,
                long_press_armed,
            } => {
                let mut outputs = Vec::new();
                if long_press_armed {
                    outputs.push(GestureOutput::CancelLongPress);
                }
                if start != index {
                    return outputs;
                }
                let cell = session.board().cell(index);
                let action = if cell.value.is_some() {
                    Action::TapFilled(index)
                } else if cell.is_given {
                    return outputs;
                } else {
                    let selection = session.selection();
                    let additive = modifiers.is_additive()
                        || (!selection.is_empty() && !selection.is_actioned());
                    Action::TapEmpty { index, additive }
                };
                outputs.push(GestureOutput::Act(action));
                outputs
            }
        }
    }
}

/// Rasterizes the grid line from `from` to `to`, inclusive of both ends.
///
/// Standard integer line walk over (col, row); used to recover cells the
/// pointer skipped between two move samples.
#[must_use]
pub fn raster_line(from: CellIndex, to: CellIndex) -> Vec<CellIndex> {
    let (mut x, mut y) = (i16::from(from.col()), i16::from(from.row()));
    let (x1, y1) = (i16::from(to.col()), i16::from(to.row()));
    let dx = (x1 - x).abs();
    let dy = -(y1 - y).abs();
    let sx = if x < x1 { 1 } else { -1 };
    let sy = if y < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    let mut cells = Vec::new();
    loop {
        #[expect(clippy::cast_sign_loss)]
        let cell = CellIndex::from_row_col(y as u8, x as u8);
        cells.push(cell);
        if x == x1 && y == y1 {
            return cells;
        }
        let doubled = 2 * err;
        if doubled >= dy {
            err += dy;
            x += sx;
        }
        if doubled <= dx {
            err += dx;
            y += sy;
        }
    }
}
