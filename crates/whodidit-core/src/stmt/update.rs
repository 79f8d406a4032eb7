use super::Value;

/// An ordered set of field assignments staged for a pending save.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Update {
    pub assignments: Vec<Assignment>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    /// Application name of the assigned field
    pub field: String,

    pub value: Value,
}

impl Update {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stages `field = value`, replacing an earlier assignment to the same
    /// field.
    pub fn set(&mut self, field: impl Into<String>, value: impl Into<Value>) {
        let field = field.into();
        let value = value.into();

        match self.assignments.iter_mut().find(|a| a.field == field) {
            Some(assignment) => assignment.value = value,
            None => self.assignments.push(Assignment { field, value }),
        }
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.assignments
            .iter()
            .find(|a| a.field == field)
            .map(|a| &a.value)
    }

    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    pub fn fields(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.assignments.iter().map(|a| &a.field[..])
    }
}

impl IntoIterator for Update {
    type Item = Assignment;
    type IntoIter = std::vec::IntoIter<Assignment>;

    fn into_iter(self) -> Self::IntoIter {
        self.assignments.into_iter()
    }
}

impl<F: Into<String>, V: Into<Value>> FromIterator<(F, V)> for Update {
    fn from_iter<I: IntoIterator<Item = (F, V)>>(iter: I) -> Self {
        let mut update = Update::new();
        for (field, value) in iter {
            update.set(field, value);
        }
        update
    }
}
