use super::*;
use oxo_core::ID;
use oxo_engine::Engine;
use oxo_engine::Event;
use oxo_engine::Participant;
use oxo_engine::Protocol;
use oxo_engine::ServerMessage;
use oxo_engine::SweepConfig;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::sync::mpsc::UnboundedSender;
use tokio::sync::mpsc::unbounded_channel;

/// Inbound traffic from one participant's socket.
enum Inbound {
    Message(ID<Participant>, String),
    Disconnect(ID<Participant>),
}

/// Manages live connections and the single-writer engine task.
///
/// All session mutation happens on the engine task, which drains the
/// inbound queue one message at a time; this reproduces the relay's
/// one-mutation-in-flight-per-session guarantee on a multi-threaded
/// runtime without per-session locks.
pub struct Lobby {
    registry: RwLock<HashMap<ID<Participant>, UnboundedSender<String>>>,
    inbound: UnboundedSender<Inbound>,
}

impl Lobby {
    /// Spawns the engine task and returns the shared lobby.
    pub fn new(config: SweepConfig) -> Arc<Self> {
        let (tx, rx) = unbounded_channel();
        let lobby = Arc::new(Self {
            registry: RwLock::new(HashMap::new()),
            inbound: tx,
        });
        tokio::spawn(Arc::clone(&lobby).run(rx, config));
        lobby
    }

    /// Single-writer event loop: one engine, one task, messages handled
    /// to completion in arrival order. Sweep ticks between messages evict
    /// idle sessions.
    async fn run(self: Arc<Self>, mut inbound: UnboundedReceiver<Inbound>, config: SweepConfig) {
        let mut engine = Engine::new();
        let mut sweep = tokio::time::interval(config.interval);
        sweep.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
        loop {
            tokio::select! {
                message = inbound.recv() => match message {
                    Some(Inbound::Message(from, text)) => self.dispatch(&mut engine, from, text).await,
                    Some(Inbound::Disconnect(pid)) => {
                        self.registry.write().await.remove(&pid);
                        log::info!("[lobby] participant {} disconnected", pid);
                        engine.disconnect(pid);
                    }
                    None => break,
                },
                _ = sweep.tick() => engine.sweep(config.ttl),
            }
        }
        log::warn!("[lobby] inbound channel closed, engine task exiting");
    }

    async fn dispatch(&self, engine: &mut Engine, from: ID<Participant>, text: String) {
        let events = match Protocol::decode(&text) {
            Ok(message) => engine.handle(from, message),
            Err(error) => vec![Event::Rejected { to: from, error }],
        };
        for event in &events {
            self.deliver(event).await;
        }
    }

    /// Fans an event out to its recipients.
    async fn deliver(&self, event: &Event) {
        log::debug!("[lobby] deliver: {}", event);
        let message = Protocol::encode(event).to_json();
        let registry = self.registry.read().await;
        for pid in event.recipients() {
            match registry.get(pid) {
                Some(tx) => {
                    if tx.send(message.clone()).is_err() {
                        log::warn!("[lobby] delivery to {} failed", pid);
                    }
                }
                None => log::warn!("[lobby] no connection for {}", pid),
            }
        }
    }

    /// Registers a fresh participant and returns their endpoints.
    async fn connect(&self) -> Connection {
        let connection = Connection::pair();
        self.registry
            .write()
            .await
            .insert(connection.id, connection.tx.clone());
        log::info!("[lobby] participant {} connected", connection.id);
        connection
    }

    /// Spawns the WebSocket bridge for one upgraded connection: assigns an
    /// identity, then pumps registry fan-out into the socket and socket
    /// text into the engine task until either side closes.
    pub async fn bridge(
        &self,
        mut session: actix_ws::Session,
        mut stream: actix_ws::MessageStream,
    ) -> anyhow::Result<()> {
        use futures::StreamExt;
        let Connection { id, mut rx, .. } = self.connect().await;
        session
            .text(ServerMessage::connected(id).to_json())
            .await
            .map_err(|e| anyhow::anyhow!("{}", e))?;
        let inbound = self.inbound.clone();
        log::debug!("[bridge {}] connected", id);
        actix_web::rt::spawn(async move {
            'sesh: loop {
                tokio::select! {
                    biased;
                    message = rx.recv() => match message {
                        Some(json) => if session.text(json).await.is_err() { break 'sesh },
                        None => break 'sesh,
                    },
                    message = stream.next() => match message {
                        Some(Ok(actix_ws::Message::Text(text))) => {
                            if inbound.send(Inbound::Message(id, text.to_string())).is_err() {
                                break 'sesh;
                            }
                        }
                        Some(Ok(actix_ws::Message::Close(_))) => break 'sesh,
                        Some(Err(_)) => break 'sesh,
                        None => break 'sesh,
                        _ => continue 'sesh,
                    },
                }
            }
            let _ = inbound.send(Inbound::Disconnect(id));
            log::debug!("[bridge {}] disconnected", id);
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxo_engine::Mark;
    use std::time::Duration;

    async fn next_json(rx: &mut UnboundedReceiver<String>) -> serde_json::Value {
        let text = rx.recv().await.expect("a delivered message");
        serde_json::from_str(&text).expect("valid json")
    }

    fn send(lobby: &Lobby, from: ID<Participant>, text: impl Into<String>) {
        lobby
            .inbound
            .send(Inbound::Message(from, text.into()))
            .expect("engine task alive");
    }

    #[tokio::test]
    async fn create_join_and_win_over_channels() {
        let lobby = Lobby::new(SweepConfig::default());
        let mut a = lobby.connect().await;
        let mut b = lobby.connect().await;

        send(&lobby, a.id, r#"{"type":"createGame"}"#);
        let created = next_json(&mut a.rx).await;
        assert_eq!(created["type"], "gameCreated");
        let game = created["gameId"].as_str().unwrap().to_string();

        send(
            &lobby,
            b.id,
            format!(r#"{{"type":"joinGame","gameId":"{}"}}"#, game),
        );
        let joined = next_json(&mut b.rx).await;
        assert_eq!(joined["type"], "gameJoined");
        assert_eq!(joined["playerId"], b.id.to_string());
        let sync = next_json(&mut a.rx).await;
        assert_eq!(sync["type"], "gameUpdate");
        assert_eq!(sync["xIsNext"], true);
        assert_eq!(sync["currentPlayer"], a.id.to_string());
        assert_eq!(next_json(&mut b.rx).await["type"], "gameUpdate");

        let moves = [
            (a.id, 0, Mark::X),
            (b.id, 3, Mark::O),
            (a.id, 1, Mark::X),
            (b.id, 4, Mark::O),
            (a.id, 2, Mark::X),
        ];
        for (who, index, value) in moves {
            send(
                &lobby,
                who,
                format!(
                    r#"{{"type":"makeMove","gameId":"{}","index":{},"value":"{}"}}"#,
                    game, index, value
                ),
            );
            assert_eq!(next_json(&mut a.rx).await["type"], "gameUpdate");
            assert_eq!(next_json(&mut b.rx).await["type"], "gameUpdate");
        }
        let status = next_json(&mut a.rx).await;
        assert_eq!(status["type"], "statusUpdate");
        assert_eq!(status["winner"], "X");
        assert_eq!(next_json(&mut b.rx).await["type"], "statusUpdate");
    }

    #[tokio::test]
    async fn malformed_text_earns_a_bad_message_error() {
        let lobby = Lobby::new(SweepConfig::default());
        let mut a = lobby.connect().await;
        send(&lobby, a.id, "such nonsense");
        let error = next_json(&mut a.rx).await;
        assert_eq!(error["type"], "error");
        assert_eq!(error["code"], "bad-message");
    }

    #[tokio::test]
    async fn disconnect_unregisters_and_tears_down_sessions() {
        let lobby = Lobby::new(SweepConfig::default());
        let mut a = lobby.connect().await;
        let mut b = lobby.connect().await;
        send(&lobby, a.id, r#"{"type":"createGame"}"#);
        let game = next_json(&mut a.rx).await["gameId"]
            .as_str()
            .unwrap()
            .to_string();
        lobby
            .inbound
            .send(Inbound::Disconnect(a.id))
            .expect("engine task alive");
        send(
            &lobby,
            b.id,
            format!(r#"{{"type":"joinGame","gameId":"{}"}}"#, game),
        );
        let error = next_json(&mut b.rx).await;
        assert_eq!(error["code"], "game-not-found");
        assert!(lobby.registry.read().await.get(&a.id).is_none());
    }

    #[tokio::test]
    async fn idle_sessions_get_swept() {
        // real-clock test: session activity is stamped with std Instants
        let config = SweepConfig {
            ttl: Duration::from_millis(50),
            interval: Duration::from_millis(10),
        };
        let lobby = Lobby::new(config);
        let mut a = lobby.connect().await;
        let mut b = lobby.connect().await;
        send(&lobby, a.id, r#"{"type":"createGame"}"#);
        let game = next_json(&mut a.rx).await["gameId"]
            .as_str()
            .unwrap()
            .to_string();
        tokio::time::sleep(Duration::from_millis(200)).await;
        send(
            &lobby,
            b.id,
            format!(r#"{{"type":"joinGame","gameId":"{}"}}"#, game),
        );
        let error = next_json(&mut b.rx).await;
        assert_eq!(error["code"], "game-not-found");
    }
}
