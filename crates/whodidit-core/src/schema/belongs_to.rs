use super::Name;

/// A many-to-one association from a model to one record of `target`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BelongsTo {
    /// Name the association is registered under
    pub name: String,

    /// Model the association points at
    pub target: Name,

    /// Field on the source model holding the target's primary key
    pub foreign_key: String,
}

impl BelongsTo {
    pub fn new(
        name: impl Into<String>,
        target: impl Into<Name>,
        foreign_key: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            target: target.into(),
            foreign_key: foreign_key.into(),
        }
    }
}
