use crate::{stmt::Value, Error, Result};

/// Request-scoped session state, stored as a nested JSON document.
///
/// Values are addressed by dotted paths such as `Auth.User.id`. A path
/// segment that parses as an integer indexes into an array.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    data: serde_json::Value,
}

impl Session {
    /// An empty session.
    pub fn new() -> Self {
        Self {
            data: serde_json::Value::Object(serde_json::Map::new()),
        }
    }

    pub fn from_json(src: &str) -> Result<Self> {
        let data: serde_json::Value = serde_json::from_str(src)
            .map_err(|err| Error::from(err).context(crate::err!("parsing session JSON")))?;
        Self::from_value(data)
    }

    pub fn from_value(data: serde_json::Value) -> Result<Self> {
        if !data.is_object() {
            return Err(Error::invalid_config("session root must be a JSON object"));
        }
        Ok(Self { data })
    }

    /// Looks up a scalar at `path`. Missing keys, out-of-range indices, and
    /// non-scalar values all yield `None`.
    pub fn get(&self, path: &str) -> Option<Value> {
        let mut current = &self.data;

        for segment in path.split('.') {
            current = match current {
                serde_json::Value::Object(map) => map.get(segment)?,
                serde_json::Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
                _ => return None,
            };
        }

        Value::from_json(current)
    }

    /// Stores `value` at `path`, creating intermediate objects as needed.
    /// Intermediate scalars along the path are replaced by objects.
    pub fn insert(&mut self, path: &str, value: impl Into<Value>) {
        let segments: Vec<&str> = path.split('.').collect();
        insert_at(&mut self.data, &segments, value.into().to_json());
    }

    pub fn with(mut self, path: &str, value: impl Into<Value>) -> Self {
        self.insert(path, value);
        self
    }
}

fn insert_at(node: &mut serde_json::Value, segments: &[&str], value: serde_json::Value) {
    let [first, rest @ ..] = segments else {
        *node = value;
        return;
    };

    if !node.is_object() {
        *node = serde_json::Value::Object(serde_json::Map::new());
    }

    if let serde_json::Value::Object(map) = node {
        let child = map.entry(*first).or_insert(serde_json::Value::Null);
        insert_at(child, rest, value);
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
