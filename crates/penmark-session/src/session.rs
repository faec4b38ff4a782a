//! The session: one puzzle in play, with selection, menus, assistance,
//! and history.

use std::num::NonZero;

use penmark_assist::{AssistMode, bi_value_cells, update_hidden_singles};
use penmark_board::{Applied, Board, Cell, MarkKind, Puzzle, PuzzleId, SolvePass};
use penmark_core::{CellIndex, CellSet, Digit, DigitSet};

use crate::{
    action::Action,
    gesture::DragMode,
    history::History,
    menu::{PillChoice, PillSession, RadialChoice},
    selection::Selection,
};

/// Session tunables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    /// Maximum number of history snapshots kept.
    pub history_capacity: NonZero<usize>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            history_capacity: History::default_capacity(),
        }
    }
}

/// Collaborator notified when the current puzzle is solved.
///
/// The session only ever writes through this seam; reading the solved
/// store is the collaborator's business.
pub trait SolvedSink {
    /// Called exactly once per puzzle, when the board first matches.
    fn mark_solved(&mut self, id: &PuzzleId);
}

/// A sink that discards notifications.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl SolvedSink for NullSink {
    fn mark_solved(&mut self, _id: &PuzzleId) {}
}

/// What applying an action produced beyond state changes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionEffect {
    /// The passes of a chained solve, in commit order. The front end plays
    /// these sequentially; each pass gates the next.
    pub solve_passes: Vec<SolvePass>,
    /// The puzzle became solved during this action.
    pub solved: bool,
}

/// Read-only render contract, rebuilt on demand after any mutation.
#[derive(Debug)]
pub struct SessionView<'a> {
    /// All 81 cells in row-major order.
    pub cells: &'a [Cell; 81],
    /// The selected cells.
    pub selection: CellSet,
    /// The filled cell tapped for highlighting, if any.
    pub tapped_target: Option<CellIndex>,
    /// The digit currently highlighted across the board, if any.
    pub highlighted_digit: Option<Digit>,
    /// The active assist mode.
    pub assist: AssistMode,
    /// Bi-value highlight cells; empty unless that assist mode is active.
    pub bi_value: CellSet,
    /// Digits currently isolated by the candidate-isolation mode.
    pub isolation: DigitSet,
    /// The radial menu's target cell while the menu is open.
    pub radial_target: Option<CellIndex>,
    /// The open pill menu, if any.
    pub pill: Option<PillSession>,
    /// Whether an undo step is available.
    pub can_undo: bool,
    /// Whether a redo step is available.
    pub can_redo: bool,
}

/// One puzzle in play. Owns the board, selection, menus, assistance
/// state, and history; every operation goes through [`Session::apply`].
#[derive(Debug)]
pub struct Session {
    board: Board,
    puzzle: Puzzle,
    selection: Selection,
    tapped_target: Option<CellIndex>,
    highlighted_digit: Option<Digit>,
    isolation: DigitSet,
    assist: AssistMode,
    radial: Option<CellIndex>,
    pill: Option<PillSession>,
    history: History,
    solved_reported: bool,
}

impl Session {
    /// Starts a session on `puzzle` with default settings.
    #[must_use]
    pub fn new(puzzle: Puzzle) -> Self {
        Self::with_settings(puzzle, Settings::default())
    }

    /// Starts a session on `puzzle` with explicit settings.
    #[must_use]
    pub fn with_settings(puzzle: Puzzle, settings: Settings) -> Self {
        let mut session = Self {
            board: Board::from_puzzle(&puzzle),
            puzzle,
            selection: Selection::default(),
            tapped_target: None,
            highlighted_digit: None,
            isolation: DigitSet::new(),
            assist: AssistMode::Off,
            radial: None,
            pill: None,
            history: History::with_capacity(settings.history_capacity),
            solved_reported: false,
        };
        session.history.reset(&session.board);
        session
    }

    /// Replaces the puzzle in play, resetting all transient state and the
    /// history to a single snapshot of the fresh board.
    pub fn load_puzzle(&mut self, puzzle: Puzzle) {
        self.board = Board::from_puzzle(&puzzle);
        self.puzzle = puzzle;
        self.selection.clear();
        self.tapped_target = None;
        self.highlighted_digit = None;
        self.isolation.clear();
        self.radial = None;
        self.pill = None;
        self.solved_reported = false;
        if self.assist == AssistMode::HiddenSingles {
            update_hidden_singles(&mut self.board);
        }
        self.history.reset(&self.board);
    }

    /// Parses and loads a puzzle from its string form.
    ///
    /// Malformed input never leaves the session half-constructed: on any
    /// parse error a warning is logged and the default board is loaded
    /// instead.
    pub fn load_puzzle_str(&mut self, board: &str, solution: Option<&str>, id: Option<&str>) {
        match Puzzle::parse(board, solution, id.map(PuzzleId::from)) {
            Ok(puzzle) => self.load_puzzle(puzzle),
            Err(err) => {
                log::warn!("puzzle rejected ({err}), loading the default board");
                self.load_puzzle(Puzzle::default());
            }
        }
    }

    /// The board in play.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The puzzle in play.
    #[must_use]
    pub fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    /// The current selection.
    #[must_use]
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// The undo/redo history.
    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }

    /// The active assist mode.
    #[must_use]
    pub fn assist(&self) -> AssistMode {
        self.assist
    }

    /// The open pill menu, if any.
    #[must_use]
    pub fn pill(&self) -> Option<&PillSession> {
        self.pill.as_ref()
    }

    /// Builds the read-only render contract.
    #[must_use]
    pub fn view(&self) -> SessionView<'_> {
        let bi_value = if self.assist == AssistMode::BiValue {
            bi_value_cells(&self.board)
        } else {
            CellSet::EMPTY
        };
        SessionView {
            cells: self.board.cells(),
            selection: self.selection.cells(),
            tapped_target: self.tapped_target,
            highlighted_digit: self.highlighted_digit,
            assist: self.assist,
            bi_value,
            isolation: self.isolation,
            radial_target: self.radial,
            pill: self.pill,
            can_undo: self.history.can_undo(),
            can_redo: self.history.can_redo(),
        }
    }

    /// Executes one action. Committing actions record exactly one history
    /// snapshot; actions that change nothing record none.
    pub fn apply(&mut self, action: Action, sink: &mut dyn SolvedSink) -> ActionEffect {
        let mut effect = ActionEffect::default();
        match action {
            Action::SetValue { index, digit } => {
                self.commit_value(index, digit, &mut effect, sink);
            }
            Action::EraseCell(index) => {
                if self.board.erase(index) == Ok(Applied::Yes) {
                    self.commit();
                }
            }
            Action::PickDigit(digit) => self.pick_digit(digit),
            Action::EraseInput => self.erase_input(),
            Action::SolveSingles => self.solve_singles(&mut effect, sink),
            Action::TapEmpty { index, additive } => self.tap_empty(index, additive),
            Action::TapFilled(index) => self.tap_filled(index),
            Action::ApplyDrag { cells, mode } => self.apply_drag(cells, mode),
            Action::ClearSelection => {
                self.selection.clear();
                self.tapped_target = None;
                self.highlighted_digit = None;
            }
            Action::Undo => {
                if self.history.undo(&mut self.board) {
                    self.refresh_assist();
                }
            }
            Action::Redo => {
                if self.history.redo(&mut self.board) {
                    self.refresh_assist();
                }
            }
            Action::ToggleAssist(mode) => {
                self.assist = self.assist.toggled(mode);
                self.refresh_assist();
            }
            Action::OpenRadial(index) => self.open_radial(index),
            Action::RadialCommit(choice) => self.radial_commit(choice, &mut effect, sink),
            Action::RadialDismiss => self.radial = None,
            Action::OpenPill(digit) => {
                // One pill session at a time; re-activation is ignored.
                if self.pill.is_none() {
                    self.pill = Some(PillSession::new(digit));
                }
            }
            Action::PillHover(choice) => {
                if let Some(pill) = &mut self.pill {
                    pill.hovered = choice;
                }
            }
            Action::PillRelease => self.pill_release(&mut effect, sink),
        }
        effect
    }

    /// Recomputes or clears derived annotations to match the assist mode.
    fn refresh_assist(&mut self) {
        if self.assist == AssistMode::HiddenSingles {
            update_hidden_singles(&mut self.board);
        } else {
            self.board.clear_hidden_singles();
        }
    }

    /// The pre-snapshot step of every committing action: bring derived
    /// annotations up to date, then record the snapshot.
    fn commit(&mut self) {
        self.refresh_assist();
        self.history.record(&self.board);
    }

    fn report_if_solved(&mut self, effect: &mut ActionEffect, sink: &mut dyn SolvedSink) {
        if self.solved_reported || !self.board.is_solved(self.puzzle.solution.as_ref()) {
            return;
        }
        self.solved_reported = true;
        effect.solved = true;
        if let Some(id) = &self.puzzle.id {
            sink.mark_solved(id);
        }
    }

    fn commit_value(
        &mut self,
        index: CellIndex,
        digit: Digit,
        effect: &mut ActionEffect,
        sink: &mut dyn SolvedSink,
    ) {
        if self.board.set_value(index, digit) == Ok(Applied::Yes) {
            self.commit();
            self.report_if_solved(effect, sink);
        }
    }

    fn pick_digit(&mut self, digit: Digit) {
        if !self.isolation.is_empty() {
            // Isolation mode captures picker taps; dropping the last digit
            // exits the mode.
            if !self.isolation.remove(digit) {
                self.isolation.insert(digit);
            }
        } else if !self.selection.is_empty() {
            if self.board.cycle_marks(self.selection.cells(), digit) == Applied::Yes {
                self.commit();
                self.selection.mark_actioned();
            }
        } else if let Some(target) = self.tapped_target {
            if self.board.cell(target).value == Some(digit) {
                self.highlighted_digit = Some(digit);
            } else {
                // Mismatch: drop the target, keep highlighting the digit.
                self.tapped_target = None;
                self.highlighted_digit = Some(digit);
            }
        } else if self.highlighted_digit == Some(digit) {
            self.highlighted_digit = None;
        } else {
            self.highlighted_digit = Some(digit);
        }
    }

    fn erase_input(&mut self) {
        if let Some(target) = self.tapped_target.take() {
            self.highlighted_digit = None;
            if self.board.erase(target) == Ok(Applied::Yes) {
                self.commit();
            }
            return;
        }
        let mut changed = false;
        for index in self.selection.cells() {
            if self.board.erase(index) == Ok(Applied::Yes) {
                changed = true;
            }
        }
        if changed {
            self.commit();
            self.selection.mark_actioned();
        }
    }

    fn solve_singles(&mut self, effect: &mut ActionEffect, sink: &mut dyn SolvedSink) {
        while let Some(pass) = self.board.solve_singles_pass() {
            self.commit();
            effect.solve_passes.push(pass);
        }
        if !effect.solve_passes.is_empty() {
            self.report_if_solved(effect, sink);
        }
    }

    fn tap_empty(&mut self, index: CellIndex, additive: bool) {
        let cell = self.board.cell(index);
        if cell.is_given || cell.value.is_some() {
            return;
        }
        self.tapped_target = None;
        self.highlighted_digit = None;
        if additive {
            self.selection.toggle(index);
        } else {
            // An exclusive tap on the sole selected cell deselects it.
            let was_sole = self.selection.len() == 1 && self.selection.contains(index);
            self.selection.clear();
            if !was_sole {
                self.selection.insert(index);
            }
        }
    }

    fn tap_filled(&mut self, index: CellIndex) {
        self.selection.clear();
        if self.tapped_target == Some(index) {
            self.tapped_target = None;
            self.highlighted_digit = None;
        } else {
            self.tapped_target = Some(index);
            self.highlighted_digit = self.board.cell(index).value;
        }
    }

    fn apply_drag(&mut self, cells: CellSet, mode: DragMode) {
        self.tapped_target = None;
        self.highlighted_digit = None;
        for index in cells {
            let cell = self.board.cell(index);
            if cell.is_given || cell.value.is_some() {
                continue;
            }
            match mode {
                DragMode::Select => self.selection.insert(index),
                DragMode::Deselect => self.selection.remove(index),
            }
        }
    }

    fn open_radial(&mut self, index: CellIndex) {
        if self.board.cell(index).is_given {
            return;
        }
        self.radial = Some(index);
        self.selection.clear();
        self.tapped_target = None;
        self.highlighted_digit = None;
    }

    fn radial_commit(
        &mut self,
        choice: RadialChoice,
        effect: &mut ActionEffect,
        sink: &mut dyn SolvedSink,
    ) {
        let Some(target) = self.radial.take() else {
            return;
        };
        match choice {
            RadialChoice::Value(digit) => self.commit_value(target, digit, effect, sink),
            RadialChoice::Erase => {
                if self.board.erase(target) == Ok(Applied::Yes) {
                    self.commit();
                }
            }
        }
    }

    fn pill_release(&mut self, effect: &mut ActionEffect, sink: &mut dyn SolvedSink) {
        let Some(pill) = self.pill.take() else {
            return;
        };
        match pill.hovered {
            None => {}
            Some(PillChoice::Value) => {
                // A value needs exactly one target; anything else is a
                // silent no-op, like other rejected targets.
                if self.selection.len() == 1
                    && let Some(index) = self.selection.cells().iter().next()
                {
                    self.selection.clear();
                    self.commit_value(index, pill.digit, effect, sink);
                }
            }
            Some(PillChoice::Candidate) => self.pill_mark(pill.digit, MarkKind::Candidate),
            Some(PillChoice::AntiCandidate) => self.pill_mark(pill.digit, MarkKind::AntiCandidate),
            Some(PillChoice::IsolationMode) => {
                self.isolation.insert(pill.digit);
                self.selection.clear();
            }
        }
    }

    fn pill_mark(&mut self, digit: Digit, kind: MarkKind) {
        // The latch only flips on an actual change; a fully-guarded batch
        // leaves the selection in its untouched state.
        if self.board.toggle_mark(self.selection.cells(), digit, kind) == Applied::Yes {
            self.commit();
            self.selection.mark_actioned();
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Puzzle::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default)]
    struct RecordingSink(Vec<String>);

    impl SolvedSink for RecordingSink {
        fn mark_solved(&mut self, id: &PuzzleId) {
            self.0.push(id.to_string());
        }
    }

    fn empty_session() -> Session {
        Session::new(".".repeat(81).parse::<Puzzle>().unwrap())
    }

    fn idx(row: u8, col: u8) -> CellIndex {
        CellIndex::from_row_col(row, col)
    }

    fn select(session: &mut Session, cells: &[CellIndex]) {
        for &index in cells {
            session.apply(
                Action::TapEmpty {
                    index,
                    additive: true,
                },
                &mut NullSink,
            );
        }
    }

    #[test]
    fn committed_mutations_record_one_snapshot_each() {
        let mut session = empty_session();
        assert_eq!(session.history().len(), 1);

        session.apply(
            Action::SetValue {
                index: idx(0, 0),
                digit: Digit::D5,
            },
            &mut NullSink,
        );
        assert_eq!(session.history().len(), 2);

        // Same digit again: no-op, no snapshot.
        session.apply(
            Action::SetValue {
                index: idx(0, 0),
                digit: Digit::D5,
            },
            &mut NullSink,
        );
        assert_eq!(session.history().len(), 2);
    }

    #[test]
    fn selection_changes_never_touch_history() {
        let mut session = empty_session();
        select(&mut session, &[idx(1, 1), idx(1, 2)]);
        session.apply(
            Action::ApplyDrag {
                cells: CellSet::from_cell(idx(1, 3)),
                mode: DragMode::Select,
            },
            &mut NullSink,
        );
        assert_eq!(session.history().len(), 1);
        assert_eq!(session.selection().len(), 3);
    }

    #[test]
    fn undo_then_new_action_truncates_redo() {
        let mut session = empty_session();
        session.apply(
            Action::SetValue {
                index: idx(0, 0),
                digit: Digit::D1,
            },
            &mut NullSink,
        );
        session.apply(
            Action::SetValue {
                index: idx(0, 1),
                digit: Digit::D2,
            },
            &mut NullSink,
        );
        session.apply(Action::Undo, &mut NullSink);
        assert_eq!(session.board().cell(idx(0, 1)).value, None);
        assert!(session.view().can_redo);

        session.apply(
            Action::SetValue {
                index: idx(0, 2),
                digit: Digit::D3,
            },
            &mut NullSink,
        );
        assert!(!session.view().can_redo);
    }

    #[test]
    fn chained_solve_snapshots_once_per_pass_and_is_idempotent() {
        let mut session = empty_session();
        let first = idx(0, 0);
        let second = idx(0, 5);
        // first: naked single {5}; second: {5, 2}, which becomes a naked
        // single on 2 once the first pass eliminates 5 from the row.
        session.apply(
            Action::TapEmpty {
                index: first,
                additive: false,
            },
            &mut NullSink,
        );
        session.apply(Action::PickDigit(Digit::D5), &mut NullSink);
        session.apply(
            Action::TapEmpty {
                index: second,
                additive: false,
            },
            &mut NullSink,
        );
        session.apply(Action::PickDigit(Digit::D5), &mut NullSink);
        session.apply(Action::PickDigit(Digit::D2), &mut NullSink);
        let baseline = session.history().len();

        let effect = session.apply(Action::SolveSingles, &mut NullSink);
        assert_eq!(effect.solve_passes.len(), 2);
        assert_eq!(effect.solve_passes[0].solved, vec![first]);
        assert_eq!(effect.solve_passes[1].solved, vec![second]);
        assert_eq!(session.history().len(), baseline + 2);
        assert_eq!(session.board().cell(first).value, Some(Digit::D5));
        assert_eq!(session.board().cell(second).value, Some(Digit::D2));

        // Settled board: nothing further, no snapshot.
        let effect = session.apply(Action::SolveSingles, &mut NullSink);
        assert!(effect.solve_passes.is_empty());
        assert_eq!(session.history().len(), baseline + 2);
    }

    #[test]
    fn hidden_singles_recompute_precedes_each_snapshot() {
        let mut session = empty_session();
        session.apply(
            Action::ToggleAssist(AssistMode::HiddenSingles),
            &mut NullSink,
        );
        let target = idx(0, 3);
        select(&mut session, &[target]);
        // Two pill commits leave {2, 9} on the target; it is the sole
        // carrier of both digits in every house, a hidden single.
        session.apply(Action::OpenPill(Digit::D2), &mut NullSink);
        session.apply(Action::PillHover(Some(PillChoice::Candidate)), &mut NullSink);
        session.apply(Action::PillRelease, &mut NullSink);
        session.apply(Action::OpenPill(Digit::D9), &mut NullSink);
        session.apply(Action::PillHover(Some(PillChoice::Candidate)), &mut NullSink);
        session.apply(Action::PillRelease, &mut NullSink);

        assert_eq!(session.board().cell(target).hidden_single, Some(Digit::D2));

        // The annotation was part of the committed snapshot: still there
        // after undo + redo.
        session.apply(Action::Undo, &mut NullSink);
        session.apply(Action::Redo, &mut NullSink);
        assert_eq!(session.board().cell(target).hidden_single, Some(Digit::D2));

        // Turning assistance off clears the derived markers.
        session.apply(
            Action::ToggleAssist(AssistMode::HiddenSingles),
            &mut NullSink,
        );
        assert_eq!(session.board().cell(target).hidden_single, None);
    }

    #[test]
    fn assist_modes_are_mutually_exclusive() {
        let mut session = empty_session();
        session.apply(
            Action::ToggleAssist(AssistMode::HiddenSingles),
            &mut NullSink,
        );
        assert_eq!(session.assist(), AssistMode::HiddenSingles);
        session.apply(Action::ToggleAssist(AssistMode::BiValue), &mut NullSink);
        assert_eq!(session.assist(), AssistMode::BiValue);
        session.apply(Action::ToggleAssist(AssistMode::BiValue), &mut NullSink);
        assert_eq!(session.assist(), AssistMode::Off);
    }

    #[test]
    fn bi_value_view_is_empty_unless_active() {
        let mut session = empty_session();
        let target = idx(2, 2);
        select(&mut session, &[target]);
        session.apply(Action::OpenPill(Digit::D1), &mut NullSink);
        session.apply(Action::PillHover(Some(PillChoice::Candidate)), &mut NullSink);
        session.apply(Action::PillRelease, &mut NullSink);
        // The selection survives pill mark commits, only latched.
        session.apply(Action::OpenPill(Digit::D8), &mut NullSink);
        session.apply(Action::PillHover(Some(PillChoice::Candidate)), &mut NullSink);
        session.apply(Action::PillRelease, &mut NullSink);

        assert!(session.view().bi_value.is_empty());
        session.apply(Action::ToggleAssist(AssistMode::BiValue), &mut NullSink);
        assert_eq!(session.view().bi_value, CellSet::from_cell(target));
    }

    #[test]
    fn pill_value_requires_exactly_one_selected_cell() {
        let mut session = empty_session();
        select(&mut session, &[idx(3, 0), idx(3, 1)]);
        session.apply(Action::OpenPill(Digit::D6), &mut NullSink);
        session.apply(Action::PillHover(Some(PillChoice::Value)), &mut NullSink);
        session.apply(Action::PillRelease, &mut NullSink);
        assert_eq!(session.board().cell(idx(3, 0)).value, None);
        assert_eq!(session.history().len(), 1);

        // Shrink to one cell; now the value commits.
        session.apply(
            Action::TapEmpty {
                index: idx(3, 1),
                additive: true,
            },
            &mut NullSink,
        );
        session.apply(Action::OpenPill(Digit::D6), &mut NullSink);
        session.apply(Action::PillHover(Some(PillChoice::Value)), &mut NullSink);
        session.apply(Action::PillRelease, &mut NullSink);
        assert_eq!(session.board().cell(idx(3, 0)).value, Some(Digit::D6));
        assert_eq!(session.history().len(), 2);
    }

    #[test]
    fn pill_reactivation_is_ignored_until_release() {
        let mut session = empty_session();
        session.apply(Action::OpenPill(Digit::D1), &mut NullSink);
        session.apply(Action::OpenPill(Digit::D9), &mut NullSink);
        assert_eq!(session.pill().unwrap().digit, Digit::D1);
        session.apply(Action::PillRelease, &mut NullSink);
        assert!(session.pill().is_none());
    }

    #[test]
    fn isolation_mode_enters_and_exits() {
        let mut session = empty_session();
        select(&mut session, &[idx(4, 4)]);
        session.apply(Action::OpenPill(Digit::D3), &mut NullSink);
        session.apply(
            Action::PillHover(Some(PillChoice::IsolationMode)),
            &mut NullSink,
        );
        session.apply(Action::PillRelease, &mut NullSink);
        assert!(session.view().isolation.contains(Digit::D3));
        assert!(session.selection().is_empty());

        // Picker taps now toggle isolation digits instead of highlights.
        session.apply(Action::PickDigit(Digit::D4), &mut NullSink);
        assert!(session.view().isolation.contains(Digit::D4));
        session.apply(Action::PickDigit(Digit::D4), &mut NullSink);
        session.apply(Action::PickDigit(Digit::D3), &mut NullSink);
        // Last digit removed: mode exited, picker taps highlight again.
        assert!(session.view().isolation.is_empty());
        session.apply(Action::PickDigit(Digit::D4), &mut NullSink);
        assert_eq!(session.view().highlighted_digit, Some(Digit::D4));
    }

    #[test]
    fn radial_commits_value_and_erase_to_its_target() {
        let mut session = empty_session();
        let target = idx(5, 5);
        session.apply(Action::OpenRadial(target), &mut NullSink);
        assert_eq!(session.view().radial_target, Some(target));
        session.apply(
            Action::RadialCommit(RadialChoice::Value(Digit::D8)),
            &mut NullSink,
        );
        assert_eq!(session.board().cell(target).value, Some(Digit::D8));
        assert_eq!(session.view().radial_target, None);

        session.apply(Action::OpenRadial(target), &mut NullSink);
        session.apply(Action::RadialCommit(RadialChoice::Erase), &mut NullSink);
        assert_eq!(session.board().cell(target).value, None);
        assert_eq!(session.history().len(), 3);
    }

    #[test]
    fn tapped_target_and_selection_are_mutually_exclusive() {
        let mut session = empty_session();
        let filled = idx(0, 0);
        session.apply(
            Action::SetValue {
                index: filled,
                digit: Digit::D9,
            },
            &mut NullSink,
        );
        select(&mut session, &[idx(1, 1)]);
        session.apply(Action::TapFilled(filled), &mut NullSink);
        assert!(session.selection().is_empty());
        assert_eq!(session.view().tapped_target, Some(filled));
        assert_eq!(session.view().highlighted_digit, Some(Digit::D9));

        session.apply(
            Action::TapEmpty {
                index: idx(1, 1),
                additive: false,
            },
            &mut NullSink,
        );
        assert_eq!(session.view().tapped_target, None);
        assert!(session.selection().contains(idx(1, 1)));

        // Tapping the filled cell twice toggles the target off.
        session.apply(Action::TapFilled(filled), &mut NullSink);
        session.apply(Action::TapFilled(filled), &mut NullSink);
        assert_eq!(session.view().tapped_target, None);
        assert_eq!(session.view().highlighted_digit, None);
    }

    #[test]
    fn actioned_latch_flips_only_on_actual_change() {
        let mut session = empty_session();
        session.apply(
            Action::SetValue {
                index: idx(0, 0),
                digit: Digit::D5,
            },
            &mut NullSink,
        );
        select(&mut session, &[idx(0, 1)]);
        // Clash-guarded candidate: the whole batch is a no-op, so the
        // selection stays unlatched.
        session.apply(Action::PickDigit(Digit::D5), &mut NullSink);
        assert!(!session.selection().is_actioned());
        // Erasing an already-empty cell changes nothing either.
        session.apply(Action::EraseInput, &mut NullSink);
        assert!(!session.selection().is_actioned());
        // An effective pick latches.
        session.apply(Action::PickDigit(Digit::D2), &mut NullSink);
        assert!(session.selection().is_actioned());
    }

    #[test]
    fn erase_input_prefers_the_tapped_target() {
        let mut session = empty_session();
        let filled = idx(0, 0);
        let marked = idx(1, 1);
        session.apply(
            Action::SetValue {
                index: filled,
                digit: Digit::D9,
            },
            &mut NullSink,
        );
        select(&mut session, &[marked]);
        session.apply(Action::PickDigit(Digit::D2), &mut NullSink);
        session.apply(Action::TapFilled(filled), &mut NullSink);

        session.apply(Action::EraseInput, &mut NullSink);
        assert_eq!(session.board().cell(filled).value, None);
        // The marked cell was not part of the erase.
        assert!(session.board().cell(marked).candidates.contains(Digit::D2));

        select(&mut session, &[marked]);
        session.apply(Action::EraseInput, &mut NullSink);
        assert!(session.board().cell(marked).candidates.is_empty());
    }

    #[test]
    fn solving_the_last_cell_notifies_the_sink_once() {
        let mut puzzle = Puzzle::default();
        puzzle.id = Some(PuzzleId::from("classic-1"));
        let solution = puzzle.solution.clone().unwrap();
        let mut session = Session::new(puzzle);
        let mut sink = RecordingSink::default();

        let blanks: Vec<CellIndex> = CellIndex::all()
            .filter(|&index| !session.board().cell(index).is_given)
            .collect();
        for &index in &blanks {
            session.apply(
                Action::SetValue {
                    index,
                    digit: solution.digit(index.as_usize()),
                },
                &mut sink,
            );
        }
        assert_eq!(sink.0, vec!["classic-1".to_owned()]);

        // Re-committing a value on the solved board does not re-notify.
        let last = *blanks.last().unwrap();
        session.apply(Action::EraseCell(last), &mut sink);
        session.apply(
            Action::SetValue {
                index: last,
                digit: solution.digit(last.as_usize()),
            },
            &mut sink,
        );
        assert_eq!(sink.0.len(), 1);
    }

    #[test]
    fn wrong_but_filled_board_is_not_reported_solved() {
        let mut puzzle = Puzzle::default();
        puzzle.id = Some(PuzzleId::from("classic-1"));
        let solution = puzzle.solution.clone().unwrap();
        let mut session = Session::new(puzzle);
        let mut sink = RecordingSink::default();

        let blanks: Vec<CellIndex> = CellIndex::all()
            .filter(|&index| !session.board().cell(index).is_given)
            .collect();
        let (&last, rest) = blanks.split_last().unwrap();
        for &index in rest {
            session.apply(
                Action::SetValue {
                    index,
                    digit: solution.digit(index.as_usize()),
                },
                &mut sink,
            );
        }
        let right = solution.digit(last.as_usize());
        let wrong = Digit::ALL.into_iter().find(|&d| d != right).unwrap();
        let effect = session.apply(
            Action::SetValue {
                index: last,
                digit: wrong,
            },
            &mut sink,
        );
        assert!(!effect.solved);
        assert!(sink.0.is_empty());
    }

    #[test]
    fn malformed_puzzle_falls_back_to_the_default_board() {
        let mut session = empty_session();
        session.load_puzzle_str("12345", None, Some("bogus"));
        // The default board loaded instead of a half-built one.
        assert_eq!(session.board(), &Board::default());
        assert_eq!(session.history().len(), 1);
    }
}
