//! The line-oriented session REPL.

use std::io::{self, BufRead, Write};

use penmark_board::SolvePass;
use penmark_core::{CellIndex, Digit};
use penmark_session::{
    Action, ActionEffect, AssistMode, PillChoice, RadialChoice, Session, SessionView, SolvedSink,
};

const HELP: &str = "\
commands:
  show                  print the board
  cell R C              print one cell's marks and annotations
  select R C            toggle a cell into/out of the selection
  clear                 drop selection and highlights
  digit D               number-picker tap (cycle marks over selection)
  set R C D             commit a value
  erase [R C]           erase a cell, or the selection/tapped target
  mark D cand|anti      pill-menu mark commit over the selection
  isolate D             enter/extend candidate isolation
  radial R C D|erase    radial-menu commit on one cell
  assist hidden|bivalue toggle an assistance mode
  undo / redo           step history
  solve                 run chained naked singles
  quit                  exit";

pub(crate) fn run(session: &mut Session, sink: &mut dyn SolvedSink) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    print_board(&session.view());
    loop {
        write!(stdout, "penmark> ")?;
        stdout.flush()?;
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            return Ok(());
        }
        let words: Vec<&str> = line.split_whitespace().collect();
        match dispatch(session, sink, &words) {
            Ok(Command::Quit) => return Ok(()),
            Ok(Command::Continue) => {}
            Err(message) => println!("{message}"),
        }
    }
}

enum Command {
    Continue,
    Quit,
}

fn dispatch(
    session: &mut Session,
    sink: &mut dyn SolvedSink,
    words: &[&str],
) -> Result<Command, String> {
    let mut effect = ActionEffect::default();
    match words {
        [] => return Ok(Command::Continue),
        ["quit" | "exit"] => return Ok(Command::Quit),
        ["help"] => println!("{HELP}"),
        ["show"] => print_board(&session.view()),
        ["cell", row, col] => print_cell(session, parse_cell(row, col)?),
        ["select", row, col] => {
            let index = parse_cell(row, col)?;
            session.apply(
                Action::TapEmpty {
                    index,
                    additive: true,
                },
                sink,
            );
        }
        ["clear"] => {
            session.apply(Action::ClearSelection, sink);
        }
        ["digit", digit] => {
            session.apply(Action::PickDigit(parse_digit(digit)?), sink);
        }
        ["set", row, col, digit] => {
            effect = session.apply(
                Action::SetValue {
                    index: parse_cell(row, col)?,
                    digit: parse_digit(digit)?,
                },
                sink,
            );
        }
        ["erase"] => {
            session.apply(Action::EraseInput, sink);
        }
        ["erase", row, col] => {
            session.apply(Action::EraseCell(parse_cell(row, col)?), sink);
        }
        ["mark", digit, kind] => {
            let choice = match *kind {
                "cand" => PillChoice::Candidate,
                "anti" => PillChoice::AntiCandidate,
                other => return Err(format!("unknown mark kind `{other}`")),
            };
            let digit = parse_digit(digit)?;
            session.apply(Action::OpenPill(digit), sink);
            session.apply(Action::PillHover(Some(choice)), sink);
            session.apply(Action::PillRelease, sink);
        }
        ["isolate", digit] => {
            let digit = parse_digit(digit)?;
            session.apply(Action::OpenPill(digit), sink);
            session.apply(Action::PillHover(Some(PillChoice::IsolationMode)), sink);
            session.apply(Action::PillRelease, sink);
        }
        ["radial", row, col, choice] => {
            let index = parse_cell(row, col)?;
            let choice = match *choice {
                "erase" => RadialChoice::Erase,
                digit => RadialChoice::Value(parse_digit(digit)?),
            };
            session.apply(Action::OpenRadial(index), sink);
            effect = session.apply(Action::RadialCommit(choice), sink);
        }
        ["assist", mode] => {
            let mode = match *mode {
                "hidden" => AssistMode::HiddenSingles,
                "bivalue" => AssistMode::BiValue,
                other => return Err(format!("unknown assist mode `{other}`")),
            };
            session.apply(Action::ToggleAssist(mode), sink);
            println!("assist: {:?}", session.assist());
        }
        ["undo"] => {
            session.apply(Action::Undo, sink);
        }
        ["redo"] => {
            session.apply(Action::Redo, sink);
        }
        ["solve"] => {
            effect = session.apply(Action::SolveSingles, sink);
            if effect.solve_passes.is_empty() {
                println!("no naked singles");
            }
            // Each pass gates the next; print them in commit order.
            for (number, pass) in effect.solve_passes.iter().enumerate() {
                print_pass(number + 1, pass);
            }
        }
        _ => return Err(format!("unknown command; try `help`: {}", words.join(" "))),
    }
    print_board(&session.view());
    if effect.solved {
        println!("solved!");
    }
    Ok(Command::Continue)
}

fn parse_cell(row: &str, col: &str) -> Result<CellIndex, String> {
    let parse = |s: &str| -> Result<u8, String> {
        match s.parse::<u8>() {
            Ok(n @ 1..=9) => Ok(n - 1),
            _ => Err(format!("`{s}` is not a row/column in 1..=9")),
        }
    };
    Ok(CellIndex::from_row_col(parse(row)?, parse(col)?))
}

fn parse_digit(s: &str) -> Result<Digit, String> {
    s.parse::<u8>()
        .ok()
        .and_then(Digit::try_from_value)
        .ok_or_else(|| format!("`{s}` is not a digit in 1..=9"))
}

fn print_pass(number: usize, pass: &SolvePass) {
    let cells: Vec<String> = pass.solved.iter().map(ToString::to_string).collect();
    println!("pass {number}: {}", cells.join(" "));
}

fn print_board(view: &SessionView<'_>) {
    for row in 0..9 {
        if row % 3 == 0 {
            println!("+-------+-------+-------+");
        }
        let mut line = String::new();
        for col in 0..9 {
            if col % 3 == 0 {
                line.push_str("| ");
            }
            let index = CellIndex::from_row_col(row, col);
            let cell = &view.cells[index.as_usize()];
            let symbol = match cell.value {
                Some(digit) => char::from(b'0' + digit.value()),
                None if view.selection.contains(index) => '*',
                None => '.',
            };
            line.push(symbol);
            line.push(' ');
        }
        line.push('|');
        println!("{line}");
    }
    println!("+-------+-------+-------+");
    if let Some(target) = view.tapped_target {
        println!("target: {target}");
    }
    if !view.isolation.is_empty() {
        let digits: Vec<String> = view.isolation.iter().map(|d| d.to_string()).collect();
        println!("isolating: {}", digits.join(" "));
    }
}

fn print_cell(session: &Session, index: CellIndex) {
    let cell = session.board().cell(index);
    let digits = |set: penmark_core::DigitSet| -> String {
        set.iter().map(|d| d.to_string()).collect::<Vec<_>>().join(" ")
    };
    println!(
        "{index}: value={} given={} candidates=[{}] anti=[{}] hidden={}",
        cell.value.map_or_else(|| "-".to_owned(), |d| d.to_string()),
        cell.is_given,
        digits(cell.candidates),
        digits(cell.anti_candidates),
        cell.hidden_single
            .map_or_else(|| "-".to_owned(), |d| d.to_string()),
    );
}
