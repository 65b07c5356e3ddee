//! Enumerate every locked-board outcome for one spawned piece.
//!
//! Usage: placements <piece> [fumen-token] [--grey] [--height N]
//!
//! Spawns <piece> (i, o, t, s, z, j, l) on the decoded board (empty board if
//! no token is given) and prints each reachable outcome as a fumen token.

use std::env;

use anyhow::{bail, Context, Result};

use tetris_placements::codec;
use tetris_placements::core::{possible_boards, possible_boards_below_height, ActivePiece, Board};
use tetris_placements::types::PieceKind;

struct Args {
    kind: PieceKind,
    board: Board,
    grey: bool,
    height: Option<i8>,
}

fn parse_args() -> Result<Args> {
    let mut kind = None;
    let mut board = Board::new();
    let mut grey = false;
    let mut height = None;

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--grey" => grey = true,
            "--height" => {
                let value = args.next().context("--height requires a value")?;
                height = Some(value.parse().context("--height must be an integer")?);
            }
            token if token.starts_with(codec::PREFIX) => {
                let boards = codec::decode(token).context("bad fumen token")?;
                board = boards
                    .into_iter()
                    .next()
                    .context("fumen token holds no boards")?;
            }
            piece => {
                kind = Some(
                    PieceKind::from_str(piece)
                        .with_context(|| format!("unknown piece {piece:?}"))?,
                );
            }
        }
    }

    let Some(kind) = kind else {
        bail!("usage: placements <piece> [fumen-token] [--grey] [--height N]");
    };
    Ok(Args {
        kind,
        board,
        grey,
        height,
    })
}

fn main() -> Result<()> {
    let args = parse_args()?;
    let spawned = ActivePiece::spawn(args.board, args.kind);

    let boards = match args.height {
        Some(height) => possible_boards_below_height(&spawned, height, args.grey),
        None => possible_boards(&spawned, args.grey),
    };

    println!("{} placements for {}", boards.len(), args.kind.as_str());
    let mut tokens: Vec<String> = boards
        .iter()
        .map(|board| codec::encode(std::slice::from_ref(board)))
        .collect();
    tokens.sort();
    for token in tokens {
        println!("{token}");
    }
    Ok(())
}
