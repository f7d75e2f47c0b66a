use std::collections::BTreeSet;
use std::sync::Arc;

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use parking_lot::Mutex;
use rand::Rng;
use tracing::info;

use crate::errors::domain::{ConflictKind, DomainError, NotFoundKind};
use crate::rooms::{ConnectionId, Room, RoomCode};

/// Code generation attempts before giving up.
pub const MAX_CODE_ATTEMPTS: usize = 64;

pub type RoomHandle = Arc<Mutex<Room>>;

/// Process-wide table of live rooms plus the reverse index from connection
/// to the rooms it sits in.
///
/// Lock order: a room's mutex may be held while touching the maps, never the
/// other way round. `get` hands out a cloned handle so no map guard is held
/// when the room is locked.
#[derive(Default)]
pub struct RoomRegistry {
    rooms: DashMap<RoomCode, RoomHandle>,
    memberships: DashMap<ConnectionId, BTreeSet<RoomCode>>,
}

impl RoomRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a room built by `build` under a fresh, unused code.
    pub fn create<R, F>(&self, rng: &mut R, build: F) -> Result<RoomHandle, DomainError>
    where
        R: Rng + ?Sized,
        F: FnOnce(RoomCode) -> Result<Room, DomainError>,
    {
        let mut build = Some(build);
        for _ in 0..MAX_CODE_ATTEMPTS {
            let code = RoomCode::generate(rng);
            let handle = match self.rooms.entry(code.clone()) {
                Entry::Occupied(_) => continue,
                Entry::Vacant(slot) => {
                    let Some(build) = build.take() else { break };
                    let handle = Arc::new(Mutex::new(build(code.clone())?));
                    slot.insert(Arc::clone(&handle));
                    handle
                }
            };
            // Shard guard is released here; `len` locks every shard.
            info!(room = %code, rooms = self.rooms.len(), "Room created");
            return Ok(handle);
        }
        Err(DomainError::conflict(
            ConflictKind::RoomCodesExhausted,
            "No free room code available, try again later",
        ))
    }

    pub fn get(&self, code: &RoomCode) -> Option<RoomHandle> {
        self.rooms.get(code).map(|entry| Arc::clone(entry.value()))
    }

    pub fn require(&self, code: &RoomCode) -> Result<RoomHandle, DomainError> {
        self.get(code).ok_or_else(|| {
            DomainError::not_found(NotFoundKind::Room, format!("Room {code} not found"))
        })
    }

    /// Drop the room from the table. Callers hold the room lock and have
    /// already marked it closed.
    pub fn remove(&self, code: &RoomCode) {
        if self.rooms.remove(code).is_some() {
            info!(room = %code, rooms = self.rooms.len(), "Room deleted");
        }
    }

    pub fn track(&self, conn: ConnectionId, code: &RoomCode) {
        self.memberships
            .entry(conn)
            .or_default()
            .insert(code.clone());
    }

    pub fn untrack(&self, conn: ConnectionId, code: &RoomCode) {
        if let Entry::Occupied(mut entry) = self.memberships.entry(conn) {
            entry.get_mut().remove(code);
            if entry.get().is_empty() {
                entry.remove();
            }
        }
    }

    /// Rooms `conn` is currently seated in.
    pub fn rooms_of(&self, conn: ConnectionId) -> Vec<RoomCode> {
        self.memberships
            .get(&conn)
            .map(|set| set.iter().cloned().collect())
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }
}
