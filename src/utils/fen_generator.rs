use crate::game_state::castle_ability::CastleAbility;
use crate::game_state::chess_types::*;
use crate::game_state::game_state::Game;

/// Write the game's position as FEN. The en-passant field is always `-`.
pub fn generate_fen(game: &Game) -> String {
    let board = generate_board_field(game);
    let side_to_move = match game.side_to_move() {
        Color::White => "w",
        Color::Black => "b",
    };
    let castling = generate_castling_field(game.castle_ability());
    let fullmove_number = game.move_counter() / 2 + 1;

    format!(
        "{} {} {} - {} {}",
        board,
        side_to_move,
        castling,
        game.halfmove_clock(),
        fullmove_number
    )
}

fn generate_board_field(game: &Game) -> String {
    let mut out = String::new();

    for (row_idx, row) in game.board().rows().iter().enumerate().rev() {
        let mut empty_count = 0u8;

        for piece in row {
            if let Some(ch) = piece_to_fen_char(*piece) {
                if empty_count > 0 {
                    out.push(char::from(b'0' + empty_count));
                    empty_count = 0;
                }
                out.push(ch);
            } else {
                empty_count += 1;
            }
        }

        if empty_count > 0 {
            out.push(char::from(b'0' + empty_count));
        }

        if row_idx > 0 {
            out.push('/');
        }
    }

    out
}

fn generate_castling_field(rights: &CastleAbility) -> String {
    let mut out = String::new();
    if rights.white_kingside {
        out.push('K');
    }
    if rights.white_queenside {
        out.push('Q');
    }
    if rights.black_kingside {
        out.push('k');
    }
    if rights.black_queenside {
        out.push('q');
    }
    if out.is_empty() {
        out.push('-');
    }
    out
}

fn piece_to_fen_char(piece: Piece) -> Option<char> {
    let ch = match piece.kind()? {
        PieceKind::Pawn => 'p',
        PieceKind::Knight => 'n',
        PieceKind::Bishop => 'b',
        PieceKind::Rook => 'r',
        PieceKind::Queen => 'q',
        PieceKind::King => 'k',
    };
    match piece.color()? {
        Color::White => Some(ch.to_ascii_uppercase()),
        Color::Black => Some(ch),
    }
}
