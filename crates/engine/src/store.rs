use super::*;
use oxo_core::ID;
use std::collections::HashMap;
use std::time::Duration;

/// In-memory session table keyed by generated ID. Plain keyed CRUD; all
/// game validation lives on the [`Session`] record. Safety under
/// concurrency comes from the hosting layer's single-writer discipline,
/// not from any lock in here.
#[derive(Debug, Default)]
pub struct Store {
    sessions: HashMap<ID<Session>, Session>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }
    /// Creates a session with the caller seated as creator and turn
    /// holder, returning its fresh identifier.
    pub fn create(&mut self, creator: ID<Participant>) -> ID<Session> {
        let id = ID::default();
        self.sessions.insert(id, Session::new(creator));
        id
    }
    pub fn get(&self, id: &ID<Session>) -> Option<&Session> {
        self.sessions.get(id)
    }
    pub fn get_mut(&mut self, id: &ID<Session>) -> Option<&mut Session> {
        self.sessions.get_mut(id)
    }
    pub fn remove(&mut self, id: &ID<Session>) -> Option<Session> {
        self.sessions.remove(id)
    }
    pub fn len(&self) -> usize {
        self.sessions.len()
    }
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
    /// Removes sessions idle beyond `ttl`, returning the evicted ids.
    pub fn evict_idle(&mut self, ttl: Duration) -> Vec<ID<Session>> {
        let expired = self
            .sessions
            .iter()
            .filter(|(_, session)| session.idle_for() >= ttl)
            .map(|(id, _)| *id)
            .collect::<Vec<_>>();
        for id in &expired {
            self.sessions.remove(id);
        }
        expired
    }
    /// Removes every session a departed participant was seated in,
    /// returning the removed ids.
    pub fn purge(&mut self, pid: ID<Participant>) -> Vec<ID<Session>> {
        let gone = self
            .sessions
            .iter()
            .filter(|(_, session)| session.seated(pid))
            .map(|(id, _)| *id)
            .collect::<Vec<_>>();
        for id in &gone {
            self.sessions.remove(id);
        }
        gone
    }
}
