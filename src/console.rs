#![cfg(feature = "std")]

//! Interactive terminal session and scripted replay.

use std::io::{self, Write};

use crate::board;
use crate::config::GRID_SIZE;
use crate::game::GameEngine;
use crate::ui;

/// One parsed input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Place the next mark at the cell with this row-major index.
    Place(usize),
    /// Jump to the given move number.
    JumpTo(usize),
    /// Flip the move-list order.
    ToggleSort,
    /// Print the command summary.
    Help,
    /// Leave the session.
    Quit,
}

impl Command {
    /// Parse one input line. `None` means the line is not a command.
    pub fn parse(line: &str) -> Option<Command> {
        let lower = line.trim().to_ascii_lowercase();
        let tokens: Vec<&str> = lower.split_whitespace().collect();
        match tokens.as_slice() {
            ["sort"] => Some(Command::ToggleSort),
            ["start"] => Some(Command::JumpTo(0)),
            ["help"] | ["?"] => Some(Command::Help),
            ["quit"] | ["exit"] | ["q"] => Some(Command::Quit),
            ["goto", target] => target.parse().ok().map(Command::JumpTo),
            [single] => {
                if let Some(target) = single.strip_prefix('#') {
                    target.parse().ok().map(Command::JumpTo)
                } else {
                    parse_coord(single).map(Command::Place)
                }
            }
            _ => None,
        }
    }
}

/// Parse a cell like `b2` (column letter, then row number) into a row-major
/// index.
fn parse_coord(input: &str) -> Option<usize> {
    let size = GRID_SIZE as usize;
    let mut chars = input.chars();
    let col_ch = chars.next()?.to_ascii_uppercase();
    let col = (col_ch as u8).wrapping_sub(b'A') as usize;
    let row_str: String = chars.collect();
    let row: usize = row_str.parse().ok()?;
    if row == 0 || row > size || col >= size {
        return None;
    }
    Some((row - 1) * size + col)
}

/// Apply a state-changing command. Rejected moves and jumps leave the
/// engine untouched; the re-rendered, unchanged position is the only
/// feedback.
pub fn apply(engine: &mut GameEngine, command: Command) {
    match command {
        Command::Place(index) => {
            let _ = engine.play(index);
        }
        Command::JumpTo(target) => {
            let _ = engine.jump_to(target);
        }
        Command::ToggleSort => engine.toggle_sort(),
        Command::Help | Command::Quit => {}
    }
}

fn render(engine: &GameEngine) {
    let verdict = engine.verdict();
    let highlight = board::highlights(&verdict);
    println!();
    println!("{}", ui::status_line(engine));
    for line in ui::grid_lines(engine.current(), &highlight) {
        println!("{}", line);
    }
    println!();
    println!("{}", ui::move_list_header(engine));
    for line in ui::move_list_lines(engine) {
        println!("{}", line);
    }
}

fn print_help() {
    println!("  a1 .. c3     place the next mark (column letter, row number)");
    println!("  goto <m>     go back to move m (also: #<m>; start = goto 0)");
    println!("  sort         flip the move list between oldest and newest first");
    println!("  help         this summary");
    println!("  quit         leave the game");
}

/// Drive one interactive session over stdin/stdout. Returns when the player
/// quits or stdin closes.
pub fn run(engine: &mut GameEngine) -> anyhow::Result<()> {
    println!("Commands: a1..c3 place, goto <m> / #<m> / start jump, sort, help, quit.");
    render(engine);
    let mut line = String::new();
    loop {
        print!("> ");
        io::stdout().flush()?;
        line.clear();
        if io::stdin().read_line(&mut line)? == 0 {
            return Ok(());
        }
        let trimmed = line.trim();
        if trimmed.is_empty() {
            render(engine);
            continue;
        }
        match Command::parse(trimmed) {
            Some(Command::Quit) => return Ok(()),
            Some(Command::Help) => print_help(),
            Some(command) => {
                apply(engine, command);
                render(engine);
            }
            None => println!("Invalid input"),
        }
    }
}

/// Apply a scripted sequence of commands and print the final rendering.
///
/// `help` and `quit` have no place in a script; they and unparseable tokens
/// are logged and skipped.
pub fn replay(engine: &mut GameEngine, script: &[String]) {
    for token in script {
        match Command::parse(token) {
            Some(Command::Help) | Some(Command::Quit) | None => {
                log::warn!("skipping script token {:?}", token);
            }
            Some(command) => apply(engine, command),
        }
    }
    render(engine);
}
