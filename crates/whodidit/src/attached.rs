use crate::{Config, Overrides};
use whodidit_core::{
    schema::BelongsTo,
    stmt::{ActorId, Update},
    FieldLookup, PendingSave, RelationRegistry, SessionStore,
};

/// Relation to the user who created the record.
pub const CREATOR: &str = "Creator";

/// Relation to the user who last modified the record.
pub const MODIFIER: &str = "Modifier";

/// Which audit fields the model has.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct AuditFields {
    pub created_by: bool,
    pub modified_by: bool,
}

impl AuditFields {
    pub fn any(self) -> bool {
        self.created_by || self.modified_by
    }
}

/// The policy attached to one model.
///
/// The configuration and field flags are fixed when the policy is attached.
/// Re-attaching builds a new `Attached`.
#[derive(Debug, Clone)]
pub struct Attached {
    config: Config,
    fields: AuditFields,
}

impl Attached {
    /// Attaches the policy to `model`, merging `overrides` over the default
    /// configuration. Registers the `Creator` / `Modifier` relations right
    /// away when `auto_bind` is set.
    pub fn attach<M>(model: &mut M, overrides: Overrides) -> Attached
    where
        M: FieldLookup + RelationRegistry + ?Sized,
    {
        let config = Config::default().merge(overrides);
        let fields = AuditFields {
            created_by: model.has_field(&config.created_by_field),
            modified_by: model.has_field(&config.modified_by_field),
        };

        tracing::debug!(
            created_by = fields.created_by,
            modified_by = fields.modified_by,
            auto_bind = config.auto_bind,
            "attached audit policy"
        );

        let attached = Attached { config, fields };
        attached.bind_relations(model, false);
        attached
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn fields(&self) -> AuditFields {
        self.fields
    }

    /// Computes the update to stage for a save, or `None` when nothing is
    /// stamped.
    ///
    /// `exists` is true when the record is already stored. New records get
    /// both fields; existing ones only the modified-by field.
    pub fn stamp(&self, exists: bool, session: &(impl SessionStore + ?Sized)) -> Option<Update> {
        if !self.fields.any() {
            tracing::trace!("no audit fields; skipping stamp");
            return None;
        }

        let path = self.config.actor_path();
        let Some(actor) = session.get(&path).and_then(ActorId::from_value) else {
            tracing::trace!(%path, "no actor in session; skipping stamp");
            return None;
        };

        let mut update = Update::new();
        update.set(&self.config.modified_by_field, &actor);

        if !exists {
            update.set(&self.config.created_by_field, &actor);
        }

        let fields: Vec<_> = update.fields().collect();
        tracing::debug!(%actor, ?fields, "stamping record");
        Some(update)
    }

    /// Before-save hook. Always returns `true`: stamping never aborts a save.
    pub fn before_save(
        &self,
        record: &mut (impl PendingSave + ?Sized),
        session: &(impl SessionStore + ?Sized),
    ) -> bool {
        if let Some(update) = self.stamp(record.exists(), session) {
            for assignment in update {
                record.set(&assignment.field, assignment.value);
            }
        }

        true
    }

    /// Registers `Creator` / `Modifier` for each audit field the model has.
    /// Does nothing unless `auto_bind` or `force` is set.
    ///
    /// Registration replaces a relation with the same name, so repeated
    /// calls leave the registry unchanged.
    pub fn bind_relations(&self, model: &mut (impl RelationRegistry + ?Sized), force: bool) {
        if !(self.config.auto_bind || force) {
            return;
        }

        if self.fields.created_by {
            self.bind(model, CREATOR, &self.config.created_by_field);
        }

        if self.fields.modified_by {
            self.bind(model, MODIFIER, &self.config.modified_by_field);
        }
    }

    fn bind(&self, model: &mut (impl RelationRegistry + ?Sized), name: &str, foreign_key: &str) {
        tracing::debug!(
            relation = name,
            target = %self.config.user_model,
            foreign_key,
            "binding relation"
        );
        model.register_relation(BelongsTo::new(
            name,
            self.config.user_model.as_str(),
            foreign_key,
        ));
    }

    pub fn unbind_relations(&self, model: &mut (impl RelationRegistry + ?Sized)) {
        unbind_relations(model);
    }
}

/// Removes the `Creator` and `Modifier` relations if present.
pub fn unbind_relations(model: &mut (impl RelationRegistry + ?Sized)) {
    for name in [CREATOR, MODIFIER] {
        if model.remove_relation(name).is_some() {
            tracing::debug!(relation = name, "unbound relation");
        }
    }
}
