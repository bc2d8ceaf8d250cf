//! Color transposition of FEN records
//!
//! Produces the color-mirrored equivalent of a position: the board is flipped
//! top to bottom and every piece changes sides, so a position with White to move
//! becomes the same problem with Black to move.
//!
//! Field by field:
//!
//! - **Placement**: rank order reversed, piece letters change case
//! - **Side to move**: `w` <-> `b`
//! - **Castling**: letters change case, then uppercase rights are listed first
//!   with `K` before `Q` (so `Kq` becomes `Qk`)
//! - **En passant**: target rank mirrored (`e3` <-> `e6`)
//! - **Counters**: kept as they are
//!
//! The transform works on text only. Callers that need a legal board should
//! parse the result (see [`crate::StandardChess`]).

use crate::error::{RulesError, RulesResult};

/// Transpose a FEN record into its color-mirrored equivalent
///
/// Missing trailing fields stay missing. Fails only when the record is too
/// malformed to split into fields (empty, wrong rank count, bad side to move,
/// bad en-passant square).
pub fn transpose_fen(fen: &str) -> RulesResult<String> {
    let fields: Vec<&str> = fen.split_whitespace().collect();
    let Some((placement, rest)) = fields.split_first() else {
        return Err(RulesError::invalid(fen, "empty record"));
    };

    let mut out = Vec::with_capacity(fields.len());
    out.push(transpose_placement(fen, placement)?);

    for (i, field) in rest.iter().enumerate() {
        let transposed = match i {
            0 => transpose_turn(fen, field)?,
            1 => transpose_castling(field),
            2 => transpose_ep_square(fen, field)?,
            _ => field.to_string(),
        };
        out.push(transposed);
    }

    Ok(out.join(" "))
}

fn transpose_placement(fen: &str, placement: &str) -> RulesResult<String> {
    let ranks: Vec<&str> = placement.split('/').collect();
    if ranks.len() != 8 {
        return Err(RulesError::invalid(
            fen,
            format!("expected 8 ranks, found {}", ranks.len()),
        ));
    }

    let mirrored: Vec<String> = ranks.iter().rev().map(|rank| swap_case(rank)).collect();
    Ok(mirrored.join("/"))
}

fn transpose_turn(fen: &str, turn: &str) -> RulesResult<String> {
    match turn {
        "w" => Ok("b".to_string()),
        "b" => Ok("w".to_string()),
        other => Err(RulesError::invalid(
            fen,
            format!("side to move must be 'w' or 'b', found '{}'", other),
        )),
    }
}

fn transpose_castling(castling: &str) -> String {
    if castling == "-" {
        return castling.to_string();
    }

    let mut rights: Vec<char> = swap_case(castling).chars().collect();
    rights.sort_by_key(|&c| (c.is_ascii_lowercase(), castling_rank(c)));
    rights.into_iter().collect()
}

/// Sort key within one color: king side, queen side, then file letters
fn castling_rank(c: char) -> (u8, char) {
    match c.to_ascii_uppercase() {
        'K' => (0, c),
        'Q' => (1, c),
        _ => (2, c),
    }
}

fn transpose_ep_square(fen: &str, square: &str) -> RulesResult<String> {
    if square == "-" {
        return Ok(square.to_string());
    }

    let mut chars = square.chars();
    let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
        return Err(RulesError::invalid(
            fen,
            format!("bad en passant square '{}'", square),
        ));
    };

    let mirrored_rank = match rank {
        '1'..='8' => (b'1' + b'8' - rank as u8) as char,
        _ => {
            return Err(RulesError::invalid(
                fen,
                format!("bad en passant square '{}'", square),
            ))
        }
    };

    Ok(format!("{}{}", file, mirrored_rank))
}

fn swap_case(text: &str) -> String {
    text.chars()
        .map(|c| {
            if c.is_ascii_uppercase() {
                c.to_ascii_lowercase()
            } else {
                c.to_ascii_uppercase()
            }
        })
        .collect()
}
