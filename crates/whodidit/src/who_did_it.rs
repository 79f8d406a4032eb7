use crate::{attached, Attached, Overrides};
use indexmap::IndexMap;
use whodidit_core::{
    schema::{Model, ModelId},
    stmt::Record,
    SessionStore,
};

/// Audit policy attachments for the models of one schema, keyed by model.
///
/// Owned by the caller; there is no process-wide registry.
#[derive(Debug, Default)]
pub struct WhoDidIt {
    attached: IndexMap<ModelId, Attached>,
}

impl WhoDidIt {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attaches the policy to `model`, replacing any earlier attachment.
    pub fn setup(&mut self, model: &mut Model, overrides: Overrides) -> &Attached {
        tracing::debug!(model = %model.name.upper_camel_case(), "setting up audit policy");

        let attached = Attached::attach(model, overrides);
        self.attached.insert(model.id, attached);
        &self.attached[&model.id]
    }

    /// Removes the attachment for `model`. Relations already registered on
    /// the model are left in place.
    pub fn detach(&mut self, model: impl Into<ModelId>) -> Option<Attached> {
        self.attached.shift_remove(&model.into())
    }

    pub fn get(&self, model: impl Into<ModelId>) -> Option<&Attached> {
        self.attached.get(&model.into())
    }

    pub fn is_attached(&self, model: impl Into<ModelId>) -> bool {
        self.attached.contains_key(&model.into())
    }

    /// Runs the before-save hook for `record`'s model. Records of models
    /// without an attachment pass through untouched. Always returns `true`.
    pub fn before_save(&self, record: &mut Record, session: &(impl SessionStore + ?Sized)) -> bool {
        if let Some(attached) = self.attached.get(&record.model) {
            if let Some(update) = attached.stamp(record.exists, session) {
                record.apply(update);
            }
        }

        true
    }

    /// Registers the `Creator` / `Modifier` relations on `model`. Does
    /// nothing for a model without an attachment.
    pub fn bind(&self, model: &mut Model, force: bool) {
        if let Some(attached) = self.attached.get(&model.id) {
            attached.bind_relations(model, force);
        }
    }

    /// Removes the `Creator` / `Modifier` relations from `model`, attached
    /// or not.
    pub fn unbind(&self, model: &mut Model) {
        attached::unbind_relations(model);
    }
}
