//! Board-sequence codec - the fumen v115 frame format
//!
//! Encodes an ordered list of boards into one compact ASCII token and
//! decodes it back losslessly. Each board is stored as a run-length encoded
//! per-cell difference from its predecessor (the first against the canonical
//! empty board), packed into two-character base-64 chunks with the least
//! significant digit first. Identical consecutive boards additionally carry
//! a one-character repeat count. Every frame is followed by a fixed
//! three-character flag marker and the whole token by a fixed version prefix.
//!
//! Format original by Mihys: <https://fumen.zui.jp/>. This is the simple
//! frame subset: no piece placement data, default flags always.

use std::fmt;

use crate::core::board::Board;
use crate::types::{Cell, CELL_COUNT};

/// Version tag every token starts with; must match exactly on decode.
pub const PREFIX: &str = "v115@";

/// Flag marker after the first frame ("guideline + lock on, rest off").
const FLAGS: &str = "AgH";
/// Flag marker after every subsequent frame.
const SUFFIX: &str = "AAA";

const BASE64_DIGITS: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// Bias keeping per-cell differences non-negative: diff = curr - prev + 8.
const DIFF_BIAS: i16 = 8;

/// Decode failure. Decoding never produces a partial result: a truncated or
/// corrupted token would silently poison downstream board comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// The token does not start with the version prefix.
    MissingPrefix,
    /// The payload ended in the middle of a chunk, repeat count or marker.
    Truncated,
    /// A frame's flag marker did not match the expected literal.
    FlagMismatch,
    /// A frame's runs did not line up with the 240-cell grid.
    RunOverflow,
    /// A cell difference produced a value outside the nine cell states.
    InvalidCell,
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            DecodeError::MissingPrefix => "missing version prefix",
            DecodeError::Truncated => "payload truncated mid-chunk",
            DecodeError::FlagMismatch => "frame flag marker mismatch",
            DecodeError::RunOverflow => "frame runs do not cover exactly 240 cells",
            DecodeError::InvalidCell => "cell difference out of range",
        };
        f.write_str(msg)
    }
}

impl std::error::Error for DecodeError {}

fn digit_value(byte: u8) -> Option<usize> {
    match byte {
        b'A'..=b'Z' => Some((byte - b'A') as usize),
        b'a'..=b'z' => Some((byte - b'a') as usize + 26),
        b'0'..=b'9' => Some((byte - b'0') as usize + 52),
        b'+' => Some(62),
        b'/' => Some(63),
        _ => None,
    }
}

/// Append one two-character chunk, least significant digit first.
/// Chunk values never exceed 16 * 240 + 239 < 64^2.
fn push_chunk(out: &mut String, value: usize) {
    out.push(BASE64_DIGITS[value % 64] as char);
    out.push(BASE64_DIGITS[(value / 64) % 64] as char);
}

/// Encode `boards` into one token. Round-trips through [`decode`] for any
/// finite list. Repeated boards are written in the naive form (a full
/// zero-diff frame plus a zero repeat count), which the original decoder
/// also accepts.
pub fn encode(boards: &[Board]) -> String {
    let mut token = String::from(PREFIX);
    let mut prev = Board::new();
    let mut first_frame = true;

    for board in boards {
        let prev_cells = prev.cells();
        let curr_cells = board.cells();

        // Run-length encode the biased per-cell differences, row-major.
        let mut index = 0;
        while index < CELL_COUNT {
            let diff = cell_diff(curr_cells[index], prev_cells[index]);
            let mut run = 1;
            while index + run < CELL_COUNT
                && cell_diff(curr_cells[index + run], prev_cells[index + run]) == diff
            {
                run += 1;
            }
            push_chunk(&mut token, diff * CELL_COUNT + (run - 1));
            index += run;
        }

        if *board == prev {
            // Repeat count 0: this frame stands for itself alone.
            token.push(BASE64_DIGITS[0] as char);
        }

        token.push_str(if first_frame { FLAGS } else { SUFFIX });
        first_frame = false;
        prev = board.clone();
    }
    token
}

fn cell_diff(curr: Cell, prev: Cell) -> usize {
    (curr.value() as i16 - prev.value() as i16 + DIFF_BIAS) as usize
}

/// Decode a token back into its board list. Characters outside the base-64
/// alphabet (stray formatting picked up in transit) are discarded before
/// processing; the version prefix is checked before that sanitization.
pub fn decode(token: &str) -> Result<Vec<Board>, DecodeError> {
    let payload = token
        .strip_prefix(PREFIX)
        .ok_or(DecodeError::MissingPrefix)?;
    let digits: Vec<usize> = payload.bytes().filter_map(digit_value).collect();

    let mut reader = Reader { digits, pos: 0 };
    let mut boards = Vec::new();
    let mut prev = Board::new();
    let mut first_frame = true;

    while !reader.is_empty() {
        let mut frame_boards = Vec::new();

        // Collect (diff, extra-run) pairs until they span the whole grid.
        let mut runs = Vec::new();
        let mut cells = 0usize;
        while cells < CELL_COUNT {
            let value = reader.poll(2)?;
            let diff = value / CELL_COUNT;
            let extra = value % CELL_COUNT;
            runs.push((diff, extra));
            cells += extra + 1;
        }
        if cells != CELL_COUNT {
            return Err(DecodeError::RunOverflow);
        }

        let curr = apply_diffs(&prev, &runs)?;
        frame_boards.push(curr.clone());

        // A frame identical to its predecessor is followed by a repeat count.
        if curr == prev {
            let repeats = reader.poll(1)?;
            for _ in 0..repeats {
                frame_boards.push(curr.clone());
            }
        }

        // Each emitted board consumes one flag marker.
        for _ in 0..frame_boards.len() {
            let expected = if first_frame { FLAGS } else { SUFFIX };
            reader.expect_marker(expected)?;
            first_frame = false;
        }

        prev = curr;
        boards.append(&mut frame_boards);
    }
    Ok(boards)
}

fn apply_diffs(prev: &Board, runs: &[(usize, usize)]) -> Result<Board, DecodeError> {
    let mut cells = *prev.cells();
    let mut index = 0;
    for &(diff, extra) in runs {
        for _ in 0..=extra {
            let value = cells[index].value() as i16 + diff as i16 - DIFF_BIAS;
            let cell = u8::try_from(value)
                .ok()
                .and_then(Cell::from_value)
                .ok_or(DecodeError::InvalidCell)?;
            cells[index] = cell;
            index += 1;
        }
    }
    Ok(Board::from_cells(cells))
}

struct Reader {
    digits: Vec<usize>,
    pos: usize,
}

impl Reader {
    fn is_empty(&self) -> bool {
        self.pos >= self.digits.len()
    }

    /// Read `n` digits as one value, least significant digit first.
    fn poll(&mut self, n: usize) -> Result<usize, DecodeError> {
        if self.pos + n > self.digits.len() {
            return Err(DecodeError::Truncated);
        }
        let mut value = 0;
        for i in (0..n).rev() {
            value = value * 64 + self.digits[self.pos + i];
        }
        self.pos += n;
        Ok(value)
    }

    /// Consume a three-character flag marker and check it literally.
    fn expect_marker(&mut self, expected: &str) -> Result<(), DecodeError> {
        for byte in expected.bytes() {
            let want = digit_value(byte).ok_or(DecodeError::FlagMismatch)?;
            let got = self.poll(1)?;
            if got != want {
                return Err(DecodeError::FlagMismatch);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_board_token_oracle() {
        // One empty board: a single 240-cell zero-diff run ("vh"), a zero
        // repeat count, then the start flags.
        assert_eq!(encode(&[Board::new()]), "v115@vhAAgH");
    }

    #[test]
    fn digit_alphabet_roundtrip() {
        for (i, &byte) in BASE64_DIGITS.iter().enumerate() {
            assert_eq!(digit_value(byte), Some(i));
        }
        assert_eq!(digit_value(b'?'), None);
        assert_eq!(digit_value(b'#'), None);
    }

    #[test]
    fn chunk_is_lsb_first() {
        let mut s = String::new();
        push_chunk(&mut s, 8 * 240 + 239);
        assert_eq!(s, "vh");
    }
}
