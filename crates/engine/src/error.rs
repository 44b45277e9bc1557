/// Precondition failures reported back to the originating participant.
/// No variant is fatal and nothing is retried: the participant resends a
/// corrected request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EngineError {
    GameNotFound,
    GameFull,
    GameNotStarted,
    GameOver,
    NotYourTurn,
    CellOccupied,
    CellOutOfRange,
    WrongMark,
    BadMessage,
}

impl EngineError {
    /// Stable machine-readable reason code for the wire.
    pub fn code(&self) -> &'static str {
        match self {
            Self::GameNotFound => "game-not-found",
            Self::GameFull => "game-full",
            Self::GameNotStarted => "game-not-started",
            Self::GameOver => "game-over",
            Self::NotYourTurn => "not-your-turn",
            Self::CellOccupied => "cell-occupied",
            Self::CellOutOfRange => "cell-out-of-range",
            Self::WrongMark => "wrong-mark",
            Self::BadMessage => "bad-message",
        }
    }
}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::GameNotFound => write!(f, "game not found"),
            Self::GameFull => write!(f, "game is already full"),
            Self::GameNotStarted => write!(f, "waiting for an opponent"),
            Self::GameOver => write!(f, "game is over"),
            Self::NotYourTurn => write!(f, "not your turn"),
            Self::CellOccupied => write!(f, "cell is already occupied"),
            Self::CellOutOfRange => write!(f, "cell index out of range"),
            Self::WrongMark => write!(f, "wrong mark for this turn"),
            Self::BadMessage => write!(f, "unrecognized message"),
        }
    }
}

impl std::error::Error for EngineError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_kebab_case() {
        let all = [
            EngineError::GameNotFound,
            EngineError::GameFull,
            EngineError::GameNotStarted,
            EngineError::GameOver,
            EngineError::NotYourTurn,
            EngineError::CellOccupied,
            EngineError::CellOutOfRange,
            EngineError::WrongMark,
            EngineError::BadMessage,
        ];
        for error in all {
            assert!(
                error
                    .code()
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c == '-'),
                "{:?} has code {}",
                error,
                error.code()
            );
        }
    }
}
