//! Game state and move application.
//!
//! [`Game`] owns the board and is the only way pieces move. Every request
//! returns a [`MoveOutcome`]; rejected requests leave the game exactly as it
//! was.
//!
//! # Example
//! ```
//! use halfboard_chess::board::{Color, Game, MoveOutcome, Square};
//!
//! let mut game = Game::new(Color::White);
//! let outcome = game.apply_move(Square(6, 0), Square(4, 0));
//! assert!(matches!(outcome, MoveOutcome::Applied { .. }));
//! assert_eq!(game.current_turn(), Color::Black);
//! ```

use super::outcome::{checkmate_message, STALEMATE_MESSAGE};
use super::state::BACK_RANK;
use super::{
    Board, Color, GameError, GameStatus, MoveOutcome, MoveRecord, Piece, PieceKind, SetupError,
    Special, Square, SquareSet, ROWS,
};

/// Destination squares of a validated castling request
#[derive(Clone, Copy, Debug)]
pub(crate) struct CastlePlan {
    pub(crate) king_to: Square,
    pub(crate) rook_to: Square,
}

/// One game of half-board chess.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Game {
    board: Board,
    current_turn: Color,
    white_king_pos: Square,
    black_king_pos: Square,
    winner: Option<Color>,
    win_reason: Option<String>,
    /// Squares whose piece has stood there since setup
    unmoved: SquareSet,
    last_move: Option<MoveRecord>,
    /// Pawn move waiting for a promotion choice
    pending_promotion: Option<MoveRecord>,
    ply: u32,
}

impl Game {
    /// Start a game from the standard setup, `bottom` nearest the player.
    /// White moves first regardless of orientation.
    #[must_use]
    pub fn new(bottom: Color) -> Self {
        let board = Board::new(bottom);
        let king_file = BACK_RANK
            .iter()
            .position(|&k| k == PieceKind::King)
            .unwrap_or(0);
        let white_king_pos = Square(board.home_row(Color::White), king_file);
        let black_king_pos = Square(board.home_row(Color::Black), king_file);
        let unmoved = board.pieces().map(|(sq, _)| sq).collect();
        Game {
            board,
            current_turn: Color::White,
            white_king_pos,
            black_king_pos,
            winner: None,
            win_reason: None,
            unmoved,
            last_move: None,
            pending_promotion: None,
            ply: 0,
        }
    }

    /// Validate an arbitrary position and wrap it in a game.
    ///
    /// A piece counts as unmoved when it stands on the square the standard
    /// setup gives it and is not listed in `moved`. A single pawn of the side
    /// to move standing on its promotion row is a promotion still waiting
    /// for a choice; it is assumed to have stepped straight forward. A
    /// position in which the side to move has no legal move starts out
    /// ended.
    pub(crate) fn from_position(
        board: Board,
        current_turn: Color,
        moved: &[Square],
    ) -> Result<Self, SetupError> {
        for color in Color::BOTH {
            match board.king_count(color) {
                0 => return Err(SetupError::MissingKing { color }),
                1 => {}
                _ => return Err(SetupError::ExtraKing { color }),
            }
        }

        let promotion_row = board.promotion_row(current_turn);
        let mut awaiting: Option<Square> = None;
        for (square, piece) in board.pieces() {
            if piece.kind != PieceKind::Pawn || (square.row() != 0 && square.row() != ROWS - 1) {
                continue;
            }
            let promoting = piece.color == current_turn && square.row() == promotion_row;
            if !promoting || awaiting.is_some() {
                return Err(SetupError::PawnOnBackRank { square });
            }
            awaiting = Some(square);
        }

        // With a promotion pending the waiting side has not replied yet, so
        // it may legitimately stand in check.
        let waiting = current_turn.opponent();
        if awaiting.is_none() && board.is_in_check(waiting) {
            return Err(SetupError::OpponentInCheck { color: waiting });
        }

        let white_king_pos = board
            .find_king(Color::White)
            .ok_or(SetupError::MissingKing {
                color: Color::White,
            })?;
        let black_king_pos = board
            .find_king(Color::Black)
            .ok_or(SetupError::MissingKing {
                color: Color::Black,
            })?;
        let unmoved = board
            .pieces()
            .filter(|(sq, p)| board.setup_piece_at(*sq) == Some(*p) && !moved.contains(sq))
            .map(|(sq, _)| sq)
            .collect();
        let pending_promotion = awaiting.map(|to| MoveRecord {
            sequence: 1,
            color: current_turn,
            from: to
                .offset(-board.pawn_direction(current_turn), 0)
                .unwrap_or(to),
            to,
            piece: PieceKind::Pawn,
            captured: None,
            promotion: None,
            special: Special::None,
        });

        let mut game = Game {
            board,
            current_turn,
            white_king_pos,
            black_king_pos,
            winner: None,
            win_reason: None,
            unmoved,
            last_move: None,
            pending_promotion,
            ply: 0,
        };
        if pending_promotion.is_none() && !game.has_legal_move(current_turn) {
            if game.is_in_check(current_turn) {
                game.end(Some(waiting), checkmate_message(waiting));
            } else {
                game.end(None, STALEMATE_MESSAGE.to_string());
            }
        }
        Ok(game)
    }

    #[inline]
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    #[must_use]
    pub fn current_turn(&self) -> Color {
        self.current_turn
    }

    /// Cached square of `color`'s king
    #[inline]
    #[must_use]
    pub fn king_position(&self, color: Color) -> Square {
        match color {
            Color::White => self.white_king_pos,
            Color::Black => self.black_king_pos,
        }
    }

    #[inline]
    #[must_use]
    pub fn winner(&self) -> Option<Color> {
        self.winner
    }

    #[inline]
    #[must_use]
    pub fn win_reason(&self) -> Option<&str> {
        self.win_reason.as_deref()
    }

    /// True once the game has a result (win or draw)
    #[inline]
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.win_reason.is_some()
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        if let Some(reason) = &self.win_reason {
            return GameStatus::Ended {
                winner: self.winner,
                reason: reason.clone(),
            };
        }
        match self.pending_promotion {
            Some(record) => GameStatus::AwaitingPromotionChoice {
                square: record.to,
                color: record.color,
            },
            None => GameStatus::InProgress {
                turn: self.current_turn,
            },
        }
    }

    /// Most recent committed move
    #[inline]
    #[must_use]
    pub fn last_move(&self) -> Option<&MoveRecord> {
        self.last_move.as_ref()
    }

    /// The provisional pawn move waiting for a promotion choice
    #[inline]
    #[must_use]
    pub fn pending_promotion(&self) -> Option<&MoveRecord> {
        self.pending_promotion.as_ref()
    }

    /// Number of committed plies
    #[inline]
    #[must_use]
    pub fn ply(&self) -> u32 {
        self.ply
    }

    /// Returns true if the piece on `sq` has not moved since setup
    #[inline]
    #[must_use]
    pub fn is_unmoved(&self, sq: Square) -> bool {
        self.unmoved.contains(sq)
    }

    /// Pseudo-legal range of whatever stands on `sq`, for highlighting
    #[must_use]
    pub fn range(&self, sq: Square) -> SquareSet {
        self.board
            .piece_at(sq)
            .map_or(SquareSet::EMPTY, |p| p.range(sq, &self.board))
    }

    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        self.board
            .is_square_attacked(self.king_position(color), color.opponent())
    }

    /// Squares of the pieces currently giving check to `color`
    #[must_use]
    pub fn checkers(&self, color: Color) -> Vec<Square> {
        self.board
            .attackers_of(self.king_position(color), color.opponent())
    }

    /// Try to move the piece on `from` to `to` for the side to move.
    ///
    /// Selecting a king and then one of its own unmoved rooks (or the rook
    /// and then the king, or moving the king two squares toward the rook)
    /// requests castling.
    pub fn apply_move(&mut self, from: Square, to: Square) -> MoveOutcome {
        if self.is_over() {
            return MoveOutcome::GameAlreadyOver;
        }
        if !from.is_valid() || !to.is_valid() || from == to {
            return MoveOutcome::IllegalMove;
        }
        if self.pending_promotion.is_some() {
            engine_log!(trace, "move {from}-{to} refused: promotion pending");
            return MoveOutcome::IllegalMove;
        }
        let Some(piece) = self.board.piece_at(from) else {
            return MoveOutcome::IllegalMove;
        };
        if piece.color != self.current_turn {
            return MoveOutcome::IllegalMove;
        }

        if let Some((king_sq, rook_sq)) = self.castling_gesture(piece, from, to) {
            return self.castle(king_sq, rook_sq);
        }
        if let Some(victim) = self.en_passant_victim(piece, from, to) {
            return self.capture_en_passant(piece, from, to, victim);
        }

        if !piece.can_move(from, to, &self.board) {
            engine_log!(trace, "move {from}-{to} refused: out of range");
            return MoveOutcome::IllegalMove;
        }
        if self.exposes_king(piece.color, from, to, None) {
            return self.reject_self_check(piece.color);
        }
        self.commit(piece, from, to)
    }

    /// Replace the pawn waiting on the last row with `kind` and pass the
    /// turn.
    pub fn resolve_promotion(&mut self, kind: PieceKind) -> MoveOutcome {
        if self.is_over() {
            return MoveOutcome::GameAlreadyOver;
        }
        let Some(mut record) = self.pending_promotion else {
            return MoveOutcome::InvalidPromotionChoice;
        };
        if !kind.is_promotion_choice() {
            return MoveOutcome::InvalidPromotionChoice;
        }

        self.board.set_piece(record.to, Piece::new(record.color, kind));
        record.piece = kind;
        record.promotion = Some(kind);
        self.pending_promotion = None;
        self.finish_ply(record)
    }

    /// End the game because the side to move ran out of time.
    pub fn time_forfeit(&mut self) -> Result<(), GameError> {
        if self.is_over() {
            return Err(GameError::AlreadyOver);
        }
        let winner = self.current_turn.opponent();
        self.end(Some(winner), format!("Out of time! {winner} wins."));
        Ok(())
    }

    /// End the game with `color` conceding.
    pub fn resign(&mut self, color: Color) -> Result<(), GameError> {
        if self.is_over() {
            return Err(GameError::AlreadyOver);
        }
        let winner = color.opponent();
        self.end(Some(winner), format!("{color} resigned. {winner} wins."));
        Ok(())
    }

    pub(crate) fn end(&mut self, winner: Option<Color>, reason: String) {
        engine_log!(debug, "game over after ply {}: {}", self.ply, reason);
        self.winner = winner;
        self.win_reason = Some(reason);
        self.pending_promotion = None;
    }

    /// Would `color`'s king be attacked after moving `from` to `to`
    /// (additionally removing `also_remove`, for en passant)?
    pub(crate) fn exposes_king(
        &self,
        color: Color,
        from: Square,
        to: Square,
        also_remove: Option<Square>,
    ) -> bool {
        let mut scratch = self.board.clone();
        let moving = scratch.piece_at(from);
        scratch.move_piece(from, to);
        if let Some(sq) = also_remove {
            scratch.remove_piece(sq);
        }
        let king_sq = match moving {
            Some(p) if p.kind == PieceKind::King => to,
            _ => self.king_position(color),
        };
        scratch.is_square_attacked(king_sq, color.opponent())
    }

    fn reject_self_check(&self, color: Color) -> MoveOutcome {
        let message = if self.is_in_check(color) {
            "Your king is in check and this move does not resolve it."
        } else {
            "That move would leave your king in check."
        };
        engine_log!(trace, "move refused for {color}: {message}");
        MoveOutcome::MoveIntoCheckRejected {
            message: message.to_string(),
        }
    }

    fn set_king_position(&mut self, color: Color, sq: Square) {
        match color {
            Color::White => self.white_king_pos = sq,
            Color::Black => self.black_king_pos = sq,
        }
    }

    fn next_record(&self, piece: Piece, from: Square, to: Square) -> MoveRecord {
        MoveRecord {
            sequence: self.ply + 1,
            color: piece.color,
            from,
            to,
            piece: piece.kind,
            captured: None,
            promotion: None,
            special: Special::None,
        }
    }

    fn commit(&mut self, piece: Piece, from: Square, to: Square) -> MoveOutcome {
        let captured = self.board.move_piece(from, to);
        if piece.kind == PieceKind::King {
            self.set_king_position(piece.color, to);
        }
        self.unmoved.remove(from);
        self.unmoved.remove(to);

        let mut record = self.next_record(piece, from, to);
        record.captured = captured.map(|p| p.kind);

        if piece.kind == PieceKind::Pawn && to.row() == self.board.promotion_row(piece.color) {
            engine_log!(debug, "{} pawn reached {to}, awaiting promotion", piece.color);
            self.pending_promotion = Some(record);
            return MoveOutcome::PromotionRequired {
                square: to,
                color: piece.color,
            };
        }
        self.finish_ply(record)
    }

    /// Record the move, pass the turn and classify the new position
    fn finish_ply(&mut self, record: MoveRecord) -> MoveOutcome {
        engine_log!(debug, "{record}");
        self.ply = record.sequence;
        self.last_move = Some(record);
        self.switch_turn();
        self.classify(record)
    }

    fn switch_turn(&mut self) {
        self.current_turn = self.current_turn.opponent();
    }

    /// Recognise a castling request, returning (king square, rook square)
    fn castling_gesture(&self, piece: Piece, from: Square, to: Square) -> Option<(Square, Square)> {
        if from.row() != to.row() {
            return None;
        }
        let target = self.board.piece_at(to);
        match (piece.kind, target) {
            (PieceKind::King, Some(t)) if t.color == piece.color && t.kind == PieceKind::Rook => {
                Some((from, to))
            }
            (PieceKind::Rook, Some(t)) if t.color == piece.color && t.kind == PieceKind::King => {
                Some((to, from))
            }
            (PieceKind::King, None) if from.col().abs_diff(to.col()) == 2 => {
                let dir: isize = if to.col() > from.col() { 1 } else { -1 };
                let mut cur = from;
                while let Some(next) = cur.offset(0, dir) {
                    if let Some(p) = self.board.piece_at(next) {
                        let own_rook = p.color == piece.color && p.kind == PieceKind::Rook;
                        return own_rook.then_some((from, next));
                    }
                    cur = next;
                }
                None
            }
            _ => None,
        }
    }

    /// Check every castling condition for the king on `king_from` and the
    /// rook on `rook_from`.
    pub(crate) fn plan_castle(
        &self,
        king_from: Square,
        rook_from: Square,
    ) -> Result<CastlePlan, MoveOutcome> {
        let Some(king) = self.board.piece_at(king_from) else {
            return Err(MoveOutcome::IllegalMove);
        };
        let rook = Piece::new(king.color, PieceKind::Rook);
        if king.kind != PieceKind::King
            || self.board.piece_at(rook_from) != Some(rook)
            || king_from.row() != rook_from.row()
        {
            return Err(MoveOutcome::IllegalMove);
        }
        if !self.unmoved.contains(king_from) || !self.unmoved.contains(rook_from) {
            return Err(MoveOutcome::IllegalMove);
        }

        let distance = king_from.col().abs_diff(rook_from.col());
        if distance < 2 {
            return Err(MoveOutcome::IllegalMove);
        }
        let dir: isize = if rook_from.col() > king_from.col() { 1 } else { -1 };
        let blocked = (1..distance)
            .filter_map(|step| king_from.offset(0, dir * step as isize))
            .any(|sq| !self.board.is_empty(sq));
        if blocked {
            return Err(MoveOutcome::IllegalMove);
        }

        let (Some(king_to), Some(crossed)) = (king_from.offset(0, 2 * dir), king_from.offset(0, dir))
        else {
            return Err(MoveOutcome::IllegalMove);
        };
        let rook_to = crossed;

        let opponent = king.color.opponent();
        if self.board.is_square_attacked(king_from, opponent) {
            return Err(MoveOutcome::MoveIntoCheckRejected {
                message: "You cannot castle while in check.".to_string(),
            });
        }
        let mut after = self.board.clone();
        after.remove_piece(king_from);
        after.remove_piece(rook_from);
        after.set_piece(king_to, king);
        after.set_piece(rook_to, rook);
        if self.board.is_square_attacked(crossed, opponent)
            || self.board.is_square_attacked(king_to, opponent)
            || after.is_square_attacked(king_to, opponent)
        {
            return Err(MoveOutcome::MoveIntoCheckRejected {
                message: "The king cannot castle through or into check.".to_string(),
            });
        }
        Ok(CastlePlan { king_to, rook_to })
    }

    fn castle(&mut self, king_from: Square, rook_from: Square) -> MoveOutcome {
        let plan = match self.plan_castle(king_from, rook_from) {
            Ok(plan) => plan,
            Err(rejection) => return rejection,
        };
        let color = self.current_turn;
        let king = Piece::new(color, PieceKind::King);
        let rook = Piece::new(color, PieceKind::Rook);

        self.board.remove_piece(king_from);
        self.board.remove_piece(rook_from);
        self.board.set_piece(plan.king_to, king);
        self.board.set_piece(plan.rook_to, rook);
        self.set_king_position(color, plan.king_to);
        self.unmoved.remove(king_from);
        self.unmoved.remove(rook_from);

        let mut record = self.next_record(king, king_from, plan.king_to);
        record.special = Special::Castling {
            rook_from,
            rook_to: plan.rook_to,
        };
        self.finish_ply(record)
    }

    /// The pawn an en-passant capture from `from` to `to` would remove.
    ///
    /// Only available right after the opponent's two-square pawn advance
    /// landed beside the capturing pawn.
    pub(crate) fn en_passant_victim(&self, piece: Piece, from: Square, to: Square) -> Option<Square> {
        if piece.kind != PieceKind::Pawn {
            return None;
        }
        let last = self.last_move.as_ref()?;
        if last.color == piece.color || !last.is_double_pawn_push() {
            return None;
        }
        if !self.board.pawn_attacks(from, piece.color).contains(to) || !self.board.is_empty(to) {
            return None;
        }
        let victim = last.to;
        if victim.row() != from.row() || victim.col() != to.col() {
            return None;
        }
        let enemy_pawn = Piece::new(piece.color.opponent(), PieceKind::Pawn);
        (self.board.piece_at(victim) == Some(enemy_pawn)).then_some(victim)
    }

    fn capture_en_passant(
        &mut self,
        piece: Piece,
        from: Square,
        to: Square,
        victim: Square,
    ) -> MoveOutcome {
        if self.exposes_king(piece.color, from, to, Some(victim)) {
            return self.reject_self_check(piece.color);
        }
        self.board.move_piece(from, to);
        let captured = self.board.remove_piece(victim);
        self.unmoved.remove(from);
        self.unmoved.remove(victim);

        let mut record = self.next_record(piece, from, to);
        record.captured = captured.map(|p| p.kind);
        record.special = Special::EnPassant {
            captured_pawn: victim,
        };
        self.finish_ply(record)
    }
}
