//! Host-side model schema

mod belongs_to;
pub use belongs_to::BelongsTo;

mod field;
pub use field::{Field, FieldId};

mod model;
pub use model::{Model, ModelId};

mod name;
pub use name::Name;

use crate::{Error, Result};
use indexmap::IndexMap;

#[derive(Debug, Default)]
pub struct Schema {
    pub models: IndexMap<ModelId, Model>,
}

impl Schema {
    /// Builds a schema, rejecting duplicate model ids and names.
    pub fn new(models: impl IntoIterator<Item = Model>) -> Result<Self> {
        let mut schema = Schema::default();

        for model in models {
            if schema.models.contains_key(&model.id) {
                return Err(Error::invalid_schema(format!(
                    "duplicate model id {:?} (`{}`)",
                    model.id,
                    model.name.upper_camel_case()
                )));
            }

            if schema.model_by_name(&model.name.upper_camel_case()).is_some() {
                return Err(Error::invalid_schema(format!(
                    "duplicate model name `{}`",
                    model.name.upper_camel_case()
                )));
            }

            schema.models.insert(model.id, model);
        }

        Ok(schema)
    }

    pub fn models(&self) -> impl Iterator<Item = &Model> {
        self.models.values()
    }

    /// Get a model by ID
    pub fn model(&self, id: impl Into<ModelId>) -> &Model {
        self.models.get(&id.into()).expect("invalid model ID")
    }

    pub fn model_mut(&mut self, id: impl Into<ModelId>) -> &mut Model {
        self.models.get_mut(&id.into()).expect("invalid model ID")
    }

    pub fn model_by_name(&self, name: &str) -> Option<&Model> {
        let name = Name::new(name);
        self.models().find(|model| model.name == name)
    }

    /// The model a relation points at, if it is part of this schema.
    pub fn target(&self, relation: &BelongsTo) -> Option<&Model> {
        self.models().find(|model| model.name == relation.target)
    }
}
