//! Contracts between the audit policy and the host ORM.
//!
//! The policy never touches host state directly; every read and write goes
//! through one of these traits. The in-memory [`Model`], [`Record`] and
//! [`Session`] types implement them, and so can a real ORM.

use crate::{
    schema::{BelongsTo, Model},
    stmt::{Record, Value},
    Session,
};

/// Schema introspection for a model.
pub trait FieldLookup {
    fn has_field(&self, name: &str) -> bool;
}

/// A model's table of many-to-one associations.
pub trait RelationRegistry {
    /// Registers `relation`, replacing an existing relation of the same name.
    fn register_relation(&mut self, relation: BelongsTo);

    /// Removes the named relation, returning it if it was registered.
    fn remove_relation(&mut self, name: &str) -> Option<BelongsTo>;
}

/// A record in the before-save phase of its lifecycle.
pub trait PendingSave {
    /// True if the record is already stored, i.e. this save is an update.
    fn exists(&self) -> bool;

    fn set(&mut self, field: &str, value: Value);
}

/// Request-scoped session state.
pub trait SessionStore {
    /// Nested lookup on a dotted path.
    fn get(&self, path: &str) -> Option<Value>;
}

impl FieldLookup for Model {
    fn has_field(&self, name: &str) -> bool {
        self.field_by_name(name).is_some()
    }
}

impl RelationRegistry for Model {
    fn register_relation(&mut self, relation: BelongsTo) {
        self.relations.insert(relation.name.clone(), relation);
    }

    fn remove_relation(&mut self, name: &str) -> Option<BelongsTo> {
        self.relations.shift_remove(name)
    }
}

impl PendingSave for Record {
    fn exists(&self) -> bool {
        self.exists
    }

    fn set(&mut self, field: &str, value: Value) {
        Record::set(self, field, value);
    }
}

impl SessionStore for Session {
    fn get(&self, path: &str) -> Option<Value> {
        Session::get(self, path)
    }
}
