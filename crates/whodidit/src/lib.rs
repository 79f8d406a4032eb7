//! Stamps "created by" / "modified by" fields with the acting user on save.
//!
//! Attach the policy to a model with [`WhoDidIt::setup`] (or
//! [`Attached::attach`] when driving a host ORM through the traits in
//! [`whodidit_core::host`]). Every save then goes through `before_save`,
//! which reads the actor id from the session at
//! `<auth_session>.<user_model>.id`.
//!
//! Stamping fails open: a missing actor or a misconfigured session path
//! leaves the record untouched and the save still proceeds.

mod attached;
pub use attached::{unbind_relations, Attached, AuditFields, CREATOR, MODIFIER};

pub mod config;
pub use config::{Config, Overrides};

mod who_did_it;
pub use who_did_it::WhoDidIt;

pub use whodidit_core::{
    host, schema, stmt, Error, FieldLookup, PendingSave, RelationRegistry, Result, Schema,
    Session, SessionStore,
};
