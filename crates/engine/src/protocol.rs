use super::*;

/// Translation layer between the wire and the engine: inbound socket text
/// decodes to [`ClientMessage`], internal [`Event`]s encode to
/// [`ServerMessage`].
pub struct Protocol;

impl Protocol {
    /// Parses inbound socket text. Malformed JSON and unknown message
    /// types collapse to [`EngineError::BadMessage`].
    pub fn decode(text: &str) -> Result<ClientMessage, EngineError> {
        serde_json::from_str(text).map_err(|_| EngineError::BadMessage)
    }
    /// Converts an internal event to its wire form. The `xIsNext` display
    /// flag is derived from the board snapshot here rather than stored.
    pub fn encode(event: &Event) -> ServerMessage {
        match event {
            Event::Created { game, .. } => ServerMessage::game_created(*game),
            Event::Joined { to, game } => ServerMessage::game_joined(*game, *to),
            Event::Sync { board, current, .. } => ServerMessage::game_update(board, *current),
            Event::Status { outcome, .. } => ServerMessage::status_update(*outcome),
            Event::Rejected { error, .. } => ServerMessage::error(error),
        }
    }
}
