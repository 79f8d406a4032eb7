use super::{Update, Value};
use crate::schema::ModelId;
use indexmap::IndexMap;

/// The in-flight field values of a record about to be saved.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// Model the record belongs to
    pub model: ModelId,

    /// Field values keyed by application field name, in assignment order
    pub values: IndexMap<String, Value>,

    /// True if the record is already present in storage (an update rather
    /// than an insert)
    pub exists: bool,
}

impl Record {
    /// A record that is about to be inserted.
    pub fn new(model: impl Into<ModelId>) -> Self {
        Self {
            model: model.into(),
            values: IndexMap::new(),
            exists: false,
        }
    }

    /// A record loaded from storage that is about to be updated.
    pub fn persisted<F, V>(
        model: impl Into<ModelId>,
        values: impl IntoIterator<Item = (F, V)>,
    ) -> Self
    where
        F: Into<String>,
        V: Into<Value>,
    {
        Self {
            model: model.into(),
            values: values
                .into_iter()
                .map(|(field, value)| (field.into(), value.into()))
                .collect(),
            exists: true,
        }
    }

    pub fn with(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(field, value);
        self
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.values.get(field)
    }

    pub fn set(&mut self, field: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(field.into(), value.into());
    }

    /// Writes every staged assignment into the record.
    pub fn apply(&mut self, update: Update) {
        for assignment in update {
            self.values.insert(assignment.field, assignment.value);
        }
    }
}
