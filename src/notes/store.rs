//! In-memory note storage.
//!
//! `NoteStore` is the seam between the HTTP layer and persistence: handlers
//! only ever talk to an `Arc<dyn NoteStore>`, so a durable backend can
//! replace `InMemoryNoteStore` without touching controller code.

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use uuid::Uuid;

use crate::models::Note;

/// Storage capability set for notes.
pub trait NoteStore: Send + Sync {
    /// Insert a note keyed by its id. The caller has already assigned the
    /// id and timestamps. An existing entry with the same id is replaced.
    fn create(&self, note: Note) -> Note;

    /// Clone out the note with the given id, if present.
    fn get_by_id(&self, id: Uuid) -> Option<Note>;

    /// All notes, newest first (`created_at` descending, id descending on ties).
    fn get_all(&self) -> Vec<Note>;

    /// Replace an existing note wholesale. Returns `None` and mutates
    /// nothing when no note with that id exists.
    fn update(&self, note: Note) -> Option<Note>;

    /// Remove the note with the given id. Returns whether a removal occurred.
    fn delete(&self, id: Uuid) -> bool;
}

/// Thread-safe in-memory implementation, keyed by note id.
pub struct InMemoryNoteStore {
    entries: DashMap<Uuid, Note>,
}

impl InMemoryNoteStore {
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }
}

impl Default for InMemoryNoteStore {
    fn default() -> Self {
        Self::new()
    }
}

impl NoteStore for InMemoryNoteStore {
    fn create(&self, note: Note) -> Note {
        self.entries.insert(note.id, note.clone());
        note
    }

    fn get_by_id(&self, id: Uuid) -> Option<Note> {
        self.entries.get(&id).map(|e| e.value().clone())
    }

    fn get_all(&self) -> Vec<Note> {
        let mut notes: Vec<Note> = self.entries.iter().map(|e| e.value().clone()).collect();
        notes.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        notes
    }

    fn update(&self, note: Note) -> Option<Note> {
        // Entry API keeps the check-and-replace atomic with respect to a
        // concurrent delete of the same id.
        match self.entries.entry(note.id) {
            Entry::Occupied(mut occupied) => {
                occupied.insert(note.clone());
                Some(note)
            }
            Entry::Vacant(_) => None,
        }
    }

    fn delete(&self, id: Uuid) -> bool {
        self.entries.remove(&id).is_some()
    }
}
