//! Drives `Attached` through the host traits with a hand-rolled ORM.

use pretty_assertions::assert_eq;
use std::collections::{BTreeMap, HashMap, HashSet};
use whodidit::schema::BelongsTo;
use whodidit::stmt::Value;
use whodidit::{
    unbind_relations, Attached, FieldLookup, Overrides, PendingSave, RelationRegistry,
    SessionStore,
};

#[derive(Default)]
struct Table {
    columns: HashSet<&'static str>,
    belongs_to: BTreeMap<String, BelongsTo>,
}

impl FieldLookup for Table {
    fn has_field(&self, name: &str) -> bool {
        self.columns.contains(name)
    }
}

impl RelationRegistry for Table {
    fn register_relation(&mut self, relation: BelongsTo) {
        self.belongs_to.insert(relation.name.clone(), relation);
    }

    fn remove_relation(&mut self, name: &str) -> Option<BelongsTo> {
        self.belongs_to.remove(name)
    }
}

struct Row {
    stored: bool,
    dirty: HashMap<String, Value>,
}

impl PendingSave for Row {
    fn exists(&self) -> bool {
        self.stored
    }

    fn set(&mut self, field: &str, value: Value) {
        self.dirty.insert(field.to_string(), value);
    }
}

struct FlatSession(HashMap<&'static str, Value>);

impl SessionStore for FlatSession {
    fn get(&self, path: &str) -> Option<Value> {
        self.0.get(path).cloned()
    }
}

fn table() -> Table {
    Table {
        columns: ["id", "created_by", "modified_by"].into_iter().collect(),
        ..Table::default()
    }
}

#[test]
fn stamps_through_traits() {
    let mut table = table();
    let attached = Attached::attach(&mut table, Overrides::new());
    assert_eq!(table.belongs_to.len(), 2);

    let session = FlatSession(HashMap::from([("Auth.User.id", Value::I64(42))]));
    let mut row = Row {
        stored: false,
        dirty: HashMap::new(),
    };

    assert!(attached.before_save(&mut row, &session));
    assert_eq!(
        row.dirty,
        HashMap::from([
            ("created_by".to_string(), Value::I64(42)),
            ("modified_by".to_string(), Value::I64(42)),
        ])
    );
}

#[test]
fn unbind_without_attachment() {
    let mut table = table();
    let _ = Attached::attach(&mut table, Overrides::new());
    assert_eq!(table.belongs_to.len(), 2);

    unbind_relations(&mut table);
    assert!(table.belongs_to.is_empty());
}

#[test]
fn dyn_collaborators() {
    let mut table = table();
    let registry: &mut dyn RelationRegistry = &mut table;
    registry.register_relation(BelongsTo::new("Owner", "User", "id"));

    let attached = Attached::attach(&mut table, Overrides::new().auto_bind(false));
    let session: &dyn SessionStore = &FlatSession(HashMap::new());
    assert_eq!(attached.stamp(false, session), None);

    let registry: &mut dyn RelationRegistry = &mut table;
    attached.bind_relations(registry, true);
    attached.unbind_relations(registry);
    assert_eq!(table.belongs_to.keys().collect::<Vec<_>>(), ["Owner"]);
}
