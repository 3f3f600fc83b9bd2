//! A deliberately small chess position model: just enough to replay a move
//! sequence and draw the resulting diagram. No legality checking is
//! performed; a malformed sequence surfaces as an error and the caller omits
//! the diagram.

mod diagram;

pub use diagram::*;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PositionError {
    #[error("invalid FEN: {0}")]
    Fen(String),
    #[error("invalid square name: {0}")]
    Square(String),
    #[error("invalid move: {0}")]
    Move(String),
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Side {
    White,
    Black,
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Piece {
    pub kind: PieceKind,
    pub side: Side,
}

impl Piece {
    fn from_fen_char(ch: char) -> Option<Piece> {
        let side = if ch.is_ascii_uppercase() {
            Side::White
        } else {
            Side::Black
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
        Some(Piece { kind, side })
    }
}

/// A board square; file and rank are both 0-based (a1 = file 0, rank 0)
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Square {
    pub file: u8,
    pub rank: u8,
}

impl Square {
    pub fn new(file: u8, rank: u8) -> Option<Square> {
        (file < 8 && rank < 8).then_some(Square { file, rank })
    }

    /// Parse an algebraic square name such as `e4`
    pub fn parse(name: &str) -> Result<Square, PositionError> {
        let mut chars = name.chars();
        let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(PositionError::Square(name.to_string()));
        };
        let file = (file as i32) - ('a' as i32);
        let rank = (rank as i32) - ('1' as i32);
        if !(0..8).contains(&file) || !(0..8).contains(&rank) {
            return Err(PositionError::Square(name.to_string()));
        }
        Ok(Square {
            file: file as u8,
            rank: rank as u8,
        })
    }

    fn index(self) -> usize {
        self.rank as usize * 8 + self.file as usize
    }
}

/// Parse a list of square names, silently skipping any that do not parse.
/// Mirrors the record format, where highlight lists are advisory.
pub fn parse_squares<S: AsRef<str>>(names: &[S]) -> Vec<Square> {
    names
        .iter()
        .filter_map(|name| match Square::parse(name.as_ref()) {
            Ok(sq) => Some(sq),
            Err(_) => {
                log::debug!("skipping unparseable square name {:?}", name.as_ref());
                None
            }
        })
        .collect()
}

/// A chess position: which piece, if any, sits on each of the 64 squares
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Board {
    squares: [Option<Piece>; 64],
}

impl Board {
    /// The standard starting position
    pub fn start() -> Board {
        Board::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1")
            .expect("the starting position FEN parses")
    }

    /// Parse the piece-placement field of a FEN string; the remaining fields
    /// (side to move, castling rights, ...) are accepted and ignored
    pub fn from_fen(fen: &str) -> Result<Board, PositionError> {
        let placement = fen
            .split_whitespace()
            .next()
            .ok_or_else(|| PositionError::Fen(fen.to_string()))?;

        let mut squares = [None; 64];
        let mut rank: i32 = 7;
        let mut file: i32 = 0;
        for ch in placement.chars() {
            match ch {
                '/' => {
                    if file != 8 {
                        return Err(PositionError::Fen(fen.to_string()));
                    }
                    rank -= 1;
                    file = 0;
                }
                '1'..='8' => {
                    file += ch as i32 - '0' as i32;
                }
                _ => {
                    let piece = Piece::from_fen_char(ch)
                        .ok_or_else(|| PositionError::Fen(fen.to_string()))?;
                    if !(0..8).contains(&file) || !(0..8).contains(&rank) {
                        return Err(PositionError::Fen(fen.to_string()));
                    }
                    squares[(rank * 8 + file) as usize] = Some(piece);
                    file += 1;
                }
            }
            if file > 8 || rank < 0 {
                return Err(PositionError::Fen(fen.to_string()));
            }
        }
        if rank != 0 || file != 8 {
            return Err(PositionError::Fen(fen.to_string()));
        }
        Ok(Board { squares })
    }

    /// Replay a whitespace-separated sequence of UCI moves from the starting
    /// position
    pub fn from_uci_moves(moves: &str) -> Result<Board, PositionError> {
        let mut board = Board::start();
        for mv in moves.split_whitespace() {
            board.push_uci(mv)?;
        }
        Ok(board)
    }

    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.squares[square.index()]
    }

    /// Apply one UCI move (`e2e4`, `e7e8q`, ...). Castling is recognized by
    /// the king moving two files and moves the rook as well; en passant is
    /// recognized by a pawn capturing onto an empty square. No legality
    /// checking beyond "the source square is occupied".
    pub fn push_uci(&mut self, mv: &str) -> Result<(), PositionError> {
        if mv.len() < 4 || !mv.is_ascii() {
            return Err(PositionError::Move(mv.to_string()));
        }
        let from = Square::parse(&mv[0..2])?;
        let to = Square::parse(&mv[2..4])?;
        let promotion = mv[4..].chars().next();

        let mut piece = self.squares[from.index()]
            .ok_or_else(|| PositionError::Move(format!("{mv}: empty source square")))?;

        if piece.kind == PieceKind::King && from.file.abs_diff(to.file) == 2 {
            // castling: bring the rook across as well
            let (rook_from, rook_to) = if to.file > from.file {
                (Square { file: 7, rank: from.rank }, Square { file: 5, rank: from.rank })
            } else {
                (Square { file: 0, rank: from.rank }, Square { file: 3, rank: from.rank })
            };
            let rook = self.squares[rook_from.index()].take();
            self.squares[rook_to.index()] = rook;
        }

        if piece.kind == PieceKind::Pawn
            && from.file != to.file
            && self.squares[to.index()].is_none()
        {
            // en passant: the captured pawn sits beside the destination
            let captured = Square {
                file: to.file,
                rank: from.rank,
            };
            self.squares[captured.index()] = None;
        }

        if let Some(promo) = promotion {
            piece.kind = match promo.to_ascii_lowercase() {
                'q' => PieceKind::Queen,
                'r' => PieceKind::Rook,
                'b' => PieceKind::Bishop,
                'n' => PieceKind::Knight,
                _ => return Err(PositionError::Move(mv.to_string())),
            };
        }

        self.squares[from.index()] = None;
        self.squares[to.index()] = Some(piece);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(name: &str) -> Square {
        Square::parse(name).unwrap()
    }

    #[test]
    fn starting_position_is_laid_out() {
        let board = Board::start();
        assert_eq!(
            board.piece_at(sq("a1")),
            Some(Piece {
                kind: PieceKind::Rook,
                side: Side::White
            })
        );
        assert_eq!(
            board.piece_at(sq("e8")),
            Some(Piece {
                kind: PieceKind::King,
                side: Side::Black
            })
        );
        assert_eq!(board.piece_at(sq("e4")), None);
    }

    #[test]
    fn square_names_parse_and_reject() {
        assert_eq!(sq("a1"), Square { file: 0, rank: 0 });
        assert_eq!(sq("h8"), Square { file: 7, rank: 7 });
        assert!(Square::parse("i1").is_err());
        assert!(Square::parse("a9").is_err());
        assert!(Square::parse("e44").is_err());
        assert!(Square::parse("").is_err());
    }

    #[test]
    fn bad_square_names_are_skipped() {
        let squares = parse_squares(&["e4", "z9", "d5"]);
        assert_eq!(squares, vec![sq("e4"), sq("d5")]);
    }

    #[test]
    fn pawn_push_moves_the_pawn() {
        let board = Board::from_uci_moves("e2e4").unwrap();
        assert_eq!(board.piece_at(sq("e2")), None);
        assert_eq!(
            board.piece_at(sq("e4")).map(|p| p.kind),
            Some(PieceKind::Pawn)
        );
    }

    #[test]
    fn kingside_castling_brings_the_rook() {
        let board = Board::from_uci_moves("e2e4 e7e5 g1f3 b8c6 f1c4 g8f6 e1g1").unwrap();
        assert_eq!(
            board.piece_at(sq("g1")).map(|p| p.kind),
            Some(PieceKind::King)
        );
        assert_eq!(
            board.piece_at(sq("f1")).map(|p| p.kind),
            Some(PieceKind::Rook)
        );
        assert_eq!(board.piece_at(sq("h1")), None);
    }

    #[test]
    fn en_passant_removes_the_captured_pawn() {
        let board = Board::from_uci_moves("e2e4 a7a6 e4e5 d7d5 e5d6").unwrap();
        assert_eq!(board.piece_at(sq("d5")), None);
        assert_eq!(
            board.piece_at(sq("d6")).map(|p| p.kind),
            Some(PieceKind::Pawn)
        );
    }

    #[test]
    fn promotion_changes_the_piece_kind() {
        let mut board = Board::from_fen("8/4P3/8/8/8/8/8/8 w - - 0 1").unwrap();
        board.push_uci("e7e8q").unwrap();
        assert_eq!(
            board.piece_at(sq("e8")),
            Some(Piece {
                kind: PieceKind::Queen,
                side: Side::White
            })
        );
    }

    #[test]
    fn malformed_input_errors_out() {
        assert!(Board::from_fen("not a fen").is_err());
        assert!(Board::from_uci_moves("e2e4 banana").is_err());
        assert!(Board::from_uci_moves("e4e5").is_err()); // empty source
    }
}
