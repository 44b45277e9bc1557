use super::*;
use oxo_core::*;
use serde::Deserialize;
use serde::Serialize;

/// Messages sent from client to server over the socket.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ClientMessage {
    /// Open a fresh session; the sender becomes its creator.
    CreateGame,
    /// Enter an existing session as the second participant.
    #[serde(rename_all = "camelCase")]
    JoinGame { game_id: String },
    /// Place a mark on a cell of the session's board.
    #[serde(rename_all = "camelCase")]
    MakeMove {
        game_id: String,
        index: Cell,
        value: Mark,
    },
}

/// Messages sent from server to client over the socket.
#[derive(Clone, Debug, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ServerMessage {
    /// Identity assignment on socket upgrade.
    #[serde(rename_all = "camelCase")]
    Connected { player_id: String },
    /// Session opened; the id is shared out-of-band to invite the opponent.
    #[serde(rename_all = "camelCase")]
    GameCreated { game_id: String },
    /// Join confirmation for the second participant.
    #[serde(rename_all = "camelCase")]
    GameJoined { game_id: String, player_id: String },
    /// Authoritative board snapshot after every accepted mutation.
    #[serde(rename_all = "camelCase")]
    GameUpdate {
        squares: [Option<Mark>; CELLS],
        x_is_next: bool,
        current_player: String,
    },
    /// Terminal result; a null winner is a draw.
    StatusUpdate { winner: Option<Mark> },
    /// Rejected request, with a stable reason code.
    Error {
        code: &'static str,
        message: String,
    },
}

impl ServerMessage {
    pub fn connected(player: ID<Participant>) -> Self {
        Self::Connected {
            player_id: player.to_string(),
        }
    }
    pub fn game_created(game: ID<Session>) -> Self {
        Self::GameCreated {
            game_id: game.to_string(),
        }
    }
    pub fn game_joined(game: ID<Session>, player: ID<Participant>) -> Self {
        Self::GameJoined {
            game_id: game.to_string(),
            player_id: player.to_string(),
        }
    }
    pub fn game_update(board: &Board, current: ID<Participant>) -> Self {
        Self::GameUpdate {
            squares: *board.squares(),
            x_is_next: board.x_is_next(),
            current_player: current.to_string(),
        }
    }
    pub fn status_update(outcome: Outcome) -> Self {
        Self::StatusUpdate {
            winner: match outcome {
                Outcome::Winner(mark) => Some(mark),
                Outcome::Draw => None,
            },
        }
    }
    pub fn error(error: &EngineError) -> Self {
        Self::Error {
            code: error.code(),
            message: error.to_string(),
        }
    }
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).expect("serialize server message")
    }
}
