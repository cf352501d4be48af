//! FEN-to-Game parser.
//!
//! Builds a `Game` from a Forsyth-Edwards Notation string: board layout,
//! side to move, castling rights and clocks. The en-passant field is checked
//! for shape and then dropped, since en-passant capture is not supported.

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::board::Board;
use crate::game_state::castle_ability::CastleAbility;
use crate::game_state::chess_types::*;
use crate::game_state::game_state::Game;
use crate::utils::algebraic::algebraic_to_coords;

pub fn parse_fen(fen: &str) -> ChessResult<Game> {
    let mut parts = fen.split_whitespace();

    let board_part = parts.next().ok_or_else(|| invalid("missing board layout"))?;
    let side_part = parts.next().ok_or_else(|| invalid("missing side-to-move"))?;
    let castling_part = parts.next().ok_or_else(|| invalid("missing castling rights"))?;
    let en_passant_part = parts.next().ok_or_else(|| invalid("missing en-passant square"))?;
    let halfmove_part = parts.next().ok_or_else(|| invalid("missing halfmove clock"))?;
    let fullmove_part = parts.next().ok_or_else(|| invalid("missing fullmove number"))?;

    if parts.next().is_some() {
        return Err(invalid("extra trailing fields"));
    }

    let board = parse_board(board_part)?;
    let side_to_move = parse_side_to_move(side_part)?;
    let castle_ability = parse_castling_rights(castling_part)?;
    parse_en_passant_square(en_passant_part)?;
    let halfmove_clock = halfmove_part
        .parse::<u32>()
        .map_err(|_| invalid(&format!("invalid halfmove clock: {halfmove_part}")))?;
    let fullmove_number = fullmove_part
        .parse::<u32>()
        .map_err(|_| invalid(&format!("invalid fullmove number: {fullmove_part}")))?;

    let move_counter = fullmove_number
        .saturating_sub(1)
        .checked_mul(2)
        .and_then(|plies| plies.checked_add(u32::from(side_to_move == Color::Black)))
        .ok_or_else(|| invalid(&format!("fullmove number out of range: {fullmove_part}")))?;

    Ok(Game::from_parts(
        board,
        castle_ability,
        side_to_move,
        move_counter,
        halfmove_clock,
    ))
}

fn parse_board(board_part: &str) -> ChessResult<Board> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(invalid("board layout must contain 8 ranks"));
    }

    let mut board = Board::empty();
    for (fen_rank_idx, rank_str) in ranks.iter().enumerate() {
        let row = (7 - fen_rank_idx) as u8;
        let mut col = 0u8;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(invalid(&format!("invalid empty-square count '{ch}'")));
                }
                col += empty_count as u8;
                if col > 8 {
                    return Err(invalid("board rank has too many files"));
                }
                continue;
            }

            let piece = piece_from_fen_char(ch)
                .ok_or_else(|| invalid(&format!("invalid piece character '{ch}'")))?;
            if col >= 8 {
                return Err(invalid("board rank has too many files"));
            }
            board.set(Coords::new(row, col), piece);
            col += 1;
        }

        if col != 8 {
            return Err(invalid("board rank does not sum to 8 files"));
        }
    }

    Ok(board)
}

fn parse_side_to_move(side_part: &str) -> ChessResult<Color> {
    match side_part {
        "w" => Ok(Color::White),
        "b" => Ok(Color::Black),
        _ => Err(invalid(&format!("invalid side-to-move field: {side_part}"))),
    }
}

fn parse_castling_rights(castling_part: &str) -> ChessResult<CastleAbility> {
    let mut rights = CastleAbility::none();
    if castling_part == "-" {
        return Ok(rights);
    }

    for ch in castling_part.chars() {
        match ch {
            'K' => rights.white_kingside = true,
            'Q' => rights.white_queenside = true,
            'k' => rights.black_kingside = true,
            'q' => rights.black_queenside = true,
            _ => return Err(invalid(&format!("invalid castling rights character: {ch}"))),
        }
    }

    Ok(rights)
}

fn parse_en_passant_square(en_passant_part: &str) -> ChessResult<()> {
    if en_passant_part == "-" {
        return Ok(());
    }
    let square = algebraic_to_coords(en_passant_part)
        .map_err(|_| invalid(&format!("invalid en-passant square: {en_passant_part}")))?;
    log::debug!("ignoring en-passant target {square:?}: en passant is not supported");
    Ok(())
}

fn piece_from_fen_char(ch: char) -> Option<Piece> {
    let color = if ch.is_ascii_uppercase() {
        Color::White
    } else if ch.is_ascii_lowercase() {
        Color::Black
    } else {
        return None;
    };

    let kind = match ch.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return None,
    };

    Some(Piece::new(color, kind))
}

fn invalid(reason: &str) -> ChessErrors {
    ChessErrors::InvalidFen(reason.to_owned())
}

#[cfg(test)]
mod tests {
    use super::parse_fen;
    use crate::chess_errors::ChessErrors;
    use crate::game_state::board::Board;
    use crate::game_state::castle_ability::CastleAbility;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::game_state::chess_types::*;
    use crate::utils::render_game_state::render_board;

    #[test]
    fn parse_starting_fen_and_render_board() {
        let game = parse_fen(STARTING_POSITION_FEN).expect("starting FEN should parse");

        println!("\n{}", render_board(game.board()));

        assert_eq!(*game.board(), Board::starting_position());
        assert_eq!(game.side_to_move(), Color::White);
        assert_eq!(*game.castle_ability(), CastleAbility::all());
        assert_eq!(game.move_counter(), 0);
        assert_eq!(game.halfmove_clock(), 0);
    }

    #[test]
    fn black_to_move_offsets_counter() {
        let game = parse_fen("4k3/8/8/8/4P3/8/8/4K3 b - e3 3 12").expect("FEN should parse");
        assert_eq!(game.side_to_move(), Color::Black);
        assert_eq!(game.move_counter(), 23);
        assert_eq!(game.halfmove_clock(), 3);
        assert_eq!(*game.castle_ability(), CastleAbility::none());
        assert_eq!(game.board().get(Coords::new(3, 4)), Piece::WhitePawn);
    }

    #[test]
    fn rejects_malformed_fields() {
        for fen in [
            "",
            "8/8/8/8/8/8/8 w - - 0 1",
            "9/8/8/8/8/8/8/8 w - - 0 1",
            "7x/8/8/8/8/8/8/8 w - - 0 1",
            "8/8/8/8/8/8/8/8 x - - 0 1",
            "8/8/8/8/8/8/8/8 w X - 0 1",
            "8/8/8/8/8/8/8/8 w - z9 0 1",
            "8/8/8/8/8/8/8/8 w - - a 1",
            "8/8/8/8/8/8/8/8 w - - 0 1 extra",
            "4k3/8/8/8/8/8/8/4K3 b - - 0 4294967295",
        ] {
            assert!(
                matches!(parse_fen(fen), Err(ChessErrors::InvalidFen(_))),
                "{fen:?} should be rejected"
            );
        }
    }
}
