use oxo_core::ID;
use oxo_engine::Participant;
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::sync::mpsc::UnboundedSender;
use tokio::sync::mpsc::unbounded_channel;

/// Endpoints for one connected participant. The lobby registers `tx` for
/// event fan-out; the bridge drains `rx` into the socket.
pub struct Connection {
    pub id: ID<Participant>,
    pub tx: UnboundedSender<String>,
    pub rx: UnboundedReceiver<String>,
}

impl Connection {
    /// Creates the channel pair for a fresh participant identity.
    pub fn pair() -> Self {
        let (tx, rx) = unbounded_channel();
        Self {
            id: ID::default(),
            tx,
            rx,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn pair_is_wired_through() {
        let mut connection = Connection::pair();
        connection.tx.send(String::from("hello")).unwrap();
        assert_eq!(connection.rx.recv().await.as_deref(), Some("hello"));
    }

    #[test]
    fn each_pair_gets_its_own_identity() {
        assert_ne!(Connection::pair().id, Connection::pair().id);
    }
}
