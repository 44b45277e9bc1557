use super::*;
use oxo_core::*;
use std::time::Duration;

/// Orchestrates create/join/move traffic against the session store and
/// describes the resulting fan-out. Fully synchronous: each call runs to
/// completion over in-memory state, so the hosting layer's single-writer
/// task is the only synchronization this type needs.
#[derive(Debug, Default)]
pub struct Engine {
    store: Store,
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Handles one inbound message to completion, returning the events to
    /// deliver. Failed preconditions never mutate state; they produce a
    /// single rejection addressed to the sender.
    pub fn handle(&mut self, from: ID<Participant>, message: ClientMessage) -> Vec<Event> {
        match message {
            ClientMessage::CreateGame => self.create(from),
            ClientMessage::JoinGame { game_id } => self.join(from, &game_id),
            ClientMessage::MakeMove {
                game_id,
                index,
                value,
            } => self.apply(from, &game_id, index, value),
        }
    }

    /// Gateway disconnect notification: the participant's sessions are
    /// torn down. Their peers learn through their own next request.
    pub fn disconnect(&mut self, pid: ID<Participant>) {
        for game in self.store.purge(pid) {
            log::info!("[engine] evicted game {} after {} disconnected", game, pid);
        }
    }

    /// Periodic idle eviction for sessions both sides walked away from.
    pub fn sweep(&mut self, ttl: Duration) {
        for game in self.store.evict_idle(ttl) {
            log::info!("[engine] evicted idle game {}", game);
        }
    }
}

impl Engine {
    fn create(&mut self, from: ID<Participant>) -> Vec<Event> {
        let game = self.store.create(from);
        log::info!("[engine] {} created game {}", from, game);
        vec![Event::Created { to: from, game }]
    }

    fn join(&mut self, from: ID<Participant>, game_id: &str) -> Vec<Event> {
        let game = match Self::parse(game_id) {
            Ok(game) => game,
            Err(error) => return Self::reject(from, error),
        };
        let session = match self.store.get_mut(&game) {
            Some(session) => session,
            None => return Self::reject(from, EngineError::GameNotFound),
        };
        match session.join(from) {
            Ok(()) => {
                log::info!("[engine] {} joined game {}", from, game);
                vec![
                    Event::Joined { to: from, game },
                    Event::Sync {
                        recipients: session.participants().to_vec(),
                        game,
                        board: *session.board(),
                        current: session.current_turn(),
                    },
                ]
            }
            Err(error) => Self::reject(from, error),
        }
    }

    fn apply(&mut self, from: ID<Participant>, game_id: &str, index: Cell, value: Mark) -> Vec<Event> {
        let game = match Self::parse(game_id) {
            Ok(game) => game,
            Err(error) => return Self::reject(from, error),
        };
        let session = match self.store.get_mut(&game) {
            Some(session) => session,
            None => return Self::reject(from, EngineError::GameNotFound),
        };
        match session.play(from, index, value) {
            Ok(outcome) => {
                log::debug!("[engine] {} played {} at {} in game {}", from, value, index, game);
                let recipients = session.participants().to_vec();
                let mut events = vec![Event::Sync {
                    recipients: recipients.clone(),
                    game,
                    board: *session.board(),
                    current: session.current_turn(),
                }];
                if let Some(outcome) = outcome {
                    log::info!("[engine] game {} concluded: {}", game, outcome);
                    events.push(Event::Status {
                        recipients,
                        game,
                        outcome,
                    });
                }
                events
            }
            Err(error) => Self::reject(from, error),
        }
    }

    /// Wire game ids are uuid strings; anything else names no session.
    fn parse(game_id: &str) -> Result<ID<Session>, EngineError> {
        uuid::Uuid::parse_str(game_id)
            .map(ID::from)
            .map_err(|_| EngineError::GameNotFound)
    }

    fn reject(to: ID<Participant>, error: EngineError) -> Vec<Event> {
        log::debug!("[engine] rejecting {}: {}", to, error);
        vec![Event::Rejected { to, error }]
    }
}
