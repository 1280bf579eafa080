//! Command-line front end for the position codec and board renderer.
//!
//! Run with:
//! `cargo run --release -- 518`
//! `cargo run --release -- --random --theme utrecht --flip`
//! `cargo run --release -- --position rkrnnqbb --pgn --instructions`

use std::process::ExitCode;

use chess960_board::errors::BoardError;
use chess960_board::position::numbering::{position_to_id, PositionId};
use chess960_board::render::board::render_board;
use chess960_board::render::theme::DEFAULT_THEME;
use chess960_board::utils::fen::generate_fen;
use chess960_board::utils::instructions::setup_instructions;
use chess960_board::utils::pgn::{fen_to_pgn, write_game_record};

struct Options {
    id: Option<PositionId>,
    theme: String,
    flipped: bool,
    pgn: bool,
    record: bool,
    instructions: bool,
}

fn main() -> ExitCode {
    env_logger::init();

    match parse_args(std::env::args().skip(1)).and_then(run) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Options, BoardError> {
    let mut options = Options {
        id: None,
        theme: DEFAULT_THEME.to_owned(),
        flipped: false,
        pgn: false,
        record: false,
        instructions: false,
    };

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--random" => options.id = Some(PositionId::random()),
            "--position" => {
                let text = args
                    .next()
                    .ok_or_else(|| BoardError::InvalidPosition("missing value".to_owned()))?;
                options.id = Some(position_to_id(&text)?);
            }
            "--theme" => {
                options.theme = args
                    .next()
                    .ok_or_else(|| BoardError::InvalidTheme("missing value".to_owned()))?;
            }
            "--flip" => options.flipped = true,
            "--pgn" => options.pgn = true,
            "--record" => options.record = true,
            "--instructions" => options.instructions = true,
            _ => options.id = Some(arg.parse()?),
        }
    }

    Ok(options)
}

fn run(options: Options) -> Result<(), BoardError> {
    let id = options.id.unwrap_or_else(PositionId::random);
    let rank = id.back_rank();
    let fen = generate_fen(&rank);

    println!("id:       {id}");
    println!("position: {rank}");
    println!("fen:      {fen}");
    println!();
    println!("{}", render_board(&fen, &options.theme, options.flipped)?);

    if options.pgn {
        println!();
        println!("{}", fen_to_pgn(&fen));
    }

    if options.record {
        println!();
        print!("{}", write_game_record(id));
    }

    if options.instructions {
        let setup = setup_instructions(&rank);
        println!();
        println!("White:\n{}", setup.white);
        println!("Black:\n{}", setup.black);
        println!("{}", setup.notes);
    }

    Ok(())
}
