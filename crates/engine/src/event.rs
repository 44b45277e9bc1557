use super::*;
use oxo_core::ID;

/// Events emitted by the engine toward the gateway, with explicit
/// recipients. Conversion to wire form happens in [`Protocol`].
#[derive(Clone, Debug)]
pub enum Event {
    /// Session created; delivered to the creator only.
    Created {
        to: ID<Participant>,
        game: ID<Session>,
    },
    /// Join confirmed; delivered to the joiner only.
    Joined {
        to: ID<Participant>,
        game: ID<Session>,
    },
    /// Authoritative state snapshot; delivered to every participant.
    Sync {
        recipients: Vec<ID<Participant>>,
        game: ID<Session>,
        board: Board,
        current: ID<Participant>,
    },
    /// Terminal result; delivered to every participant.
    Status {
        recipients: Vec<ID<Participant>>,
        game: ID<Session>,
        outcome: Outcome,
    },
    /// Precondition failure; delivered to the offender only.
    Rejected {
        to: ID<Participant>,
        error: EngineError,
    },
}

impl Event {
    /// Participants this event is delivered to.
    pub fn recipients(&self) -> &[ID<Participant>] {
        match self {
            Self::Created { to, .. } | Self::Joined { to, .. } | Self::Rejected { to, .. } => {
                std::slice::from_ref(to)
            }
            Self::Sync { recipients, .. } | Self::Status { recipients, .. } => recipients,
        }
    }
}

impl std::fmt::Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Created { game, .. } => write!(f, "game {} created", game),
            Self::Joined { game, .. } => write!(f, "game {} joined", game),
            Self::Sync { game, board, .. } => write!(f, "game {}: {}", game, board),
            Self::Status { game, outcome, .. } => write!(f, "game {}: {}", game, outcome),
            Self::Rejected { error, .. } => write!(f, "rejected: {}", error),
        }
    }
}
