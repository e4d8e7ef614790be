use anyhow::Result;
use clap::{Parser, ValueEnum};
use colored::*;
use std::io::{self, BufRead, Write};
use sudoq::{ErrorKind, Level, Sudoku};

#[derive(Parser, Debug)]
#[command(name = "sudoq", version, about = "Playable Sudoku engine with rule checking")]
struct Cli {
    /// Difficulty: how much of the grid starts empty
    #[arg(short, long, value_enum, default_value_t = LevelArg::Medium)]
    level: LevelArg,

    /// Seed the puzzle generator for a reproducible game
    #[arg(short, long)]
    seed: Option<u64>,

    /// Print check results as JSON instead of text
    #[arg(long)]
    json: bool,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum LevelArg { Easy, Medium, Hard }

impl From<LevelArg> for Level {
    fn from(arg: LevelArg) -> Self {
        match arg {
            LevelArg::Easy => Level::Easy,
            LevelArg::Medium => Level::Medium,
            LevelArg::Hard => Level::Hard,
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut game = Sudoku::new(cli.level.into(), cli.seed);
    println!("{game}");
    print_help();

    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("> ");
        io::stdout().flush()?;
        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let parts: Vec<&str> = line.split_whitespace().collect();
        match parts.as_slice() {
            [] => {}
            ["quit"] | ["q"] | ["exit"] => break,
            ["show"] => println!("{game}"),
            ["new"] => {
                game.new_game(Level::default());
                println!("{game}");
            }
            ["new", level] => match parse_level(level) {
                Some(level) => {
                    game.new_game(level);
                    println!("{game}");
                }
                None => println!("unknown level {level} (easy, medium, hard)"),
            },
            ["set", row, col, value] => set_command(&mut game, row, col, value),
            ["check"] => check_command(&mut game, cli.json)?,
            ["errors"] => println!("{}", serde_json::to_string_pretty(game.errors().entries())?),
            ["load", position] => match game.load(position) {
                Ok(()) => println!("{game}"),
                Err(err) => println!("{} {err:#}", "load failed:".red()),
            },
            _ => print_help(),
        }
    }
    Ok(())
}

fn parse_level(text: &str) -> Option<Level> {
    match text.to_ascii_lowercase().as_str() {
        "easy" => Some(Level::Easy),
        "medium" => Some(Level::Medium),
        "hard" => Some(Level::Hard),
        _ => None,
    }
}

fn set_command(game: &mut Sudoku, row: &str, col: &str, value: &str) {
    let parsed = (row.parse::<usize>(), col.parse::<usize>(), value.parse::<u8>());
    match parsed {
        (Ok(row), Ok(col), Ok(value)) if row < 9 && col < 9 => {
            if game.set_number(row, col, value) {
                println!("{game}");
            } else {
                println!("{}", format!("value {value} rejected (expected 0-9)").red());
            }
        }
        _ => println!("usage: set <row 0-8> <col 0-8> <value 0-9; 0 clears>"),
    }
}

fn check_command(game: &mut Sudoku, json: bool) -> Result<()> {
    let ok = game.check();
    if json {
        println!("{}", serde_json::to_string_pretty(game.errors().entries())?);
        return Ok(());
    }
    if ok {
        println!("{}", "Well done! No rule violations.".green().bold());
    } else {
        println!("{game}");
        for e in game.errors().entries() {
            let what = match e.kind {
                ErrorKind::Empty => "empty cell".yellow(),
                ErrorKind::Repeat => format!("repeats {}", e.value).red(),
            };
            println!("  {} row {}, col {}: {}", "✗".red().bold(), e.row, e.col, what);
        }
    }
    Ok(())
}

fn print_help() {
    println!("commands: new [easy|medium|hard] | set <row> <col> <value> | check | show | errors | load <position> | quit");
}
