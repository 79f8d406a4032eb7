use super::{BelongsTo, Field, FieldId, Name};
use indexmap::IndexMap;
use std::fmt;

#[derive(Debug, Clone)]
pub struct Model {
    /// Uniquely identifies the model within the schema
    pub id: ModelId,

    /// Name of the model
    pub name: Name,

    /// Fields contained by the model
    pub fields: Vec<Field>,

    /// Registered many-to-one associations, keyed by association name
    pub relations: IndexMap<String, BelongsTo>,
}

#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct ModelId(pub usize);

impl Model {
    pub fn new(id: ModelId, name: &str) -> Self {
        Self {
            id,
            name: Name::new(name),
            fields: vec![],
            relations: IndexMap::new(),
        }
    }

    /// Appends a field with the given application name.
    pub fn field(mut self, name: &str) -> Self {
        self.add_field(name);
        self
    }

    /// Appends a field to an existing model, returning its id.
    pub fn add_field(&mut self, name: &str) -> FieldId {
        let id = self.id.field(self.fields.len());
        self.fields.push(Field {
            id,
            name: name.to_string(),
        });
        id
    }

    pub fn field_by_name(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|field| field.name == name)
    }

    pub fn relation(&self, name: &str) -> Option<&BelongsTo> {
        self.relations.get(name)
    }

    pub fn relations(&self) -> impl ExactSizeIterator<Item = &BelongsTo> + '_ {
        self.relations.values()
    }
}

impl ModelId {
    /// Create a `FieldId` representing the current model's field at index
    /// `index`.
    pub const fn field(self, index: usize) -> FieldId {
        FieldId { model: self, index }
    }
}

impl fmt::Debug for ModelId {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "ModelId({})", self.0)
    }
}
