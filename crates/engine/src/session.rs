use super::*;
use oxo_core::*;
use std::time::Duration;
use std::time::Instant;

/// Marker type for participant identities handed out by the gateway.
#[derive(Debug)]
pub struct Participant;

/// Lifecycle of a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Creator seated, waiting for an opponent.
    Waiting,
    /// Both seats taken, moves accepted.
    InProgress,
    /// A terminal outcome was reached; no further moves.
    Concluded,
}

/// One game instance shared by at most two participants. The creator sits
/// at seat 0 and holds the first turn; `current_turn` is the single source
/// of truth for turn order, the wire's `xIsNext` flag is derived from
/// board occupancy.
#[derive(Clone, Debug)]
pub struct Session {
    participants: Vec<ID<Participant>>,
    board: Board,
    current_turn: ID<Participant>,
    phase: Phase,
    touched: Instant,
}

impl Session {
    pub fn new(creator: ID<Participant>) -> Self {
        Self {
            participants: vec![creator],
            board: Board::default(),
            current_turn: creator,
            phase: Phase::Waiting,
            touched: Instant::now(),
        }
    }
    pub fn creator(&self) -> ID<Participant> {
        self.participants[0]
    }
    pub fn participants(&self) -> &[ID<Participant>] {
        &self.participants
    }
    pub fn board(&self) -> &Board {
        &self.board
    }
    pub fn current_turn(&self) -> ID<Participant> {
        self.current_turn
    }
    pub fn phase(&self) -> Phase {
        self.phase
    }
    pub fn seated(&self, pid: ID<Participant>) -> bool {
        self.participants.contains(&pid)
    }
    /// Time since the last accepted mutation.
    pub fn idle_for(&self) -> Duration {
        self.touched.elapsed()
    }
}

impl Session {
    /// Seats the second participant and starts the game. Rejects a third
    /// seat, and a participant rejoining a session they already occupy.
    pub fn join(&mut self, pid: ID<Participant>) -> Result<(), EngineError> {
        if self.participants.len() >= SEATS || self.seated(pid) {
            return Err(EngineError::GameFull);
        }
        self.participants.push(pid);
        self.phase = Phase::InProgress;
        self.touch();
        Ok(())
    }

    /// Applies one move: validates every precondition, writes the mark,
    /// hands the turn to the opponent, and reports the outcome if the move
    /// concluded the game. A rejection leaves the record untouched.
    pub fn play(
        &mut self,
        pid: ID<Participant>,
        cell: Cell,
        mark: Mark,
    ) -> Result<Option<Outcome>, EngineError> {
        match self.phase {
            Phase::Waiting => return Err(EngineError::GameNotStarted),
            Phase::Concluded => return Err(EngineError::GameOver),
            Phase::InProgress => {}
        }
        if pid != self.current_turn {
            return Err(EngineError::NotYourTurn);
        }
        if cell >= CELLS {
            return Err(EngineError::CellOutOfRange);
        }
        if self.board.get(cell).is_some() {
            return Err(EngineError::CellOccupied);
        }
        if mark != self.board.next_mark() {
            return Err(EngineError::WrongMark);
        }
        self.board.set(cell, mark);
        if let Some(next) = self.participants.iter().copied().find(|&p| p != pid) {
            self.current_turn = next;
        }
        self.touch();
        let outcome = rules::outcome(&self.board);
        if outcome.is_some() {
            self.phase = Phase::Concluded;
        }
        Ok(outcome)
    }

    fn touch(&mut self) {
        self.touched = Instant::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pid() -> ID<Participant> {
        ID::default()
    }

    #[test]
    fn creator_holds_the_first_turn() {
        let creator = pid();
        let session = Session::new(creator);
        assert_eq!(session.creator(), creator);
        assert_eq!(session.current_turn(), creator);
        assert_eq!(session.phase(), Phase::Waiting);
        assert_eq!(session.participants().len(), 1);
    }

    #[test]
    fn join_starts_the_game() {
        let mut session = Session::new(pid());
        let joiner = pid();
        assert_eq!(session.join(joiner), Ok(()));
        assert_eq!(session.phase(), Phase::InProgress);
        assert_eq!(session.participants().len(), 2);
        assert!(session.seated(joiner));
    }

    #[test]
    fn full_session_rejects_a_third_seat() {
        let mut session = Session::new(pid());
        session.join(pid()).unwrap();
        let before = session.participants().to_vec();
        assert_eq!(session.join(pid()), Err(EngineError::GameFull));
        assert_eq!(session.participants(), before.as_slice());
    }

    #[test]
    fn creator_cannot_join_their_own_session() {
        let creator = pid();
        let mut session = Session::new(creator);
        assert_eq!(session.join(creator), Err(EngineError::GameFull));
        assert_eq!(session.phase(), Phase::Waiting);
    }

    #[test]
    fn moves_wait_for_the_second_seat() {
        let creator = pid();
        let mut session = Session::new(creator);
        assert_eq!(
            session.play(creator, 0, Mark::X),
            Err(EngineError::GameNotStarted)
        );
        assert_eq!(session.board().occupied(), 0);
    }

    #[test]
    fn accepted_move_hands_the_turn_over() {
        let (creator, joiner) = (pid(), pid());
        let mut session = Session::new(creator);
        session.join(joiner).unwrap();
        assert_eq!(session.play(creator, 0, Mark::X), Ok(None));
        assert_eq!(session.board().get(0), Some(Mark::X));
        assert_eq!(session.current_turn(), joiner);
    }

    #[test]
    fn out_of_turn_move_changes_nothing() {
        let (creator, joiner) = (pid(), pid());
        let mut session = Session::new(creator);
        session.join(joiner).unwrap();
        assert_eq!(
            session.play(joiner, 0, Mark::X),
            Err(EngineError::NotYourTurn)
        );
        assert_eq!(session.board().occupied(), 0);
        assert_eq!(session.current_turn(), creator);
    }

    #[test]
    fn occupied_cell_is_never_overwritten() {
        let (creator, joiner) = (pid(), pid());
        let mut session = Session::new(creator);
        session.join(joiner).unwrap();
        session.play(creator, 0, Mark::X).unwrap();
        assert_eq!(
            session.play(joiner, 0, Mark::O),
            Err(EngineError::CellOccupied)
        );
        assert_eq!(session.board().get(0), Some(Mark::X));
        assert_eq!(session.current_turn(), joiner);
    }

    #[test]
    fn off_board_cell_is_rejected() {
        let (creator, joiner) = (pid(), pid());
        let mut session = Session::new(creator);
        session.join(joiner).unwrap();
        assert_eq!(
            session.play(creator, CELLS, Mark::X),
            Err(EngineError::CellOutOfRange)
        );
    }

    #[test]
    fn marks_must_alternate() {
        let (creator, joiner) = (pid(), pid());
        let mut session = Session::new(creator);
        session.join(joiner).unwrap();
        assert_eq!(
            session.play(creator, 0, Mark::O),
            Err(EngineError::WrongMark)
        );
        session.play(creator, 0, Mark::X).unwrap();
        assert_eq!(
            session.play(joiner, 1, Mark::X),
            Err(EngineError::WrongMark)
        );
    }

    #[test]
    fn winning_move_concludes_the_session() {
        let (creator, joiner) = (pid(), pid());
        let mut session = Session::new(creator);
        session.join(joiner).unwrap();
        session.play(creator, 0, Mark::X).unwrap();
        session.play(joiner, 3, Mark::O).unwrap();
        session.play(creator, 1, Mark::X).unwrap();
        session.play(joiner, 4, Mark::O).unwrap();
        assert_eq!(
            session.play(creator, 2, Mark::X),
            Ok(Some(Outcome::Winner(Mark::X)))
        );
        assert_eq!(session.phase(), Phase::Concluded);
        assert_eq!(
            session.play(joiner, 5, Mark::O),
            Err(EngineError::GameOver)
        );
    }

    #[test]
    fn filling_the_board_without_a_line_is_a_draw() {
        let (creator, joiner) = (pid(), pid());
        let mut session = Session::new(creator);
        session.join(joiner).unwrap();
        // X O X / X X O / O X O
        let moves = [
            (0, Mark::X),
            (1, Mark::O),
            (2, Mark::X),
            (5, Mark::O),
            (3, Mark::X),
            (6, Mark::O),
            (4, Mark::X),
            (8, Mark::O),
        ];
        let mut turn = creator;
        for (cell, mark) in moves {
            assert_eq!(session.play(turn, cell, mark), Ok(None));
            turn = if turn == creator { joiner } else { creator };
        }
        assert_eq!(session.play(turn, 7, Mark::X), Ok(Some(Outcome::Draw)));
        assert_eq!(session.phase(), Phase::Concluded);
    }
}
