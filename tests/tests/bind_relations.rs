use pretty_assertions::assert_eq;
use tests::*;
use whodidit::schema::{BelongsTo, Name};
use whodidit::{Overrides, RelationRegistry, WhoDidIt, CREATOR, MODIFIER};

fn relation_names(schema: &whodidit::Schema, model: whodidit::schema::ModelId) -> Vec<String> {
    schema
        .model(model)
        .relations()
        .map(|relation| relation.name.clone())
        .collect()
}

#[test]
fn setup_auto_binds_creator_and_modifier() {
    let mut schema = blog_schema();
    let mut policy = WhoDidIt::new();
    policy.setup(schema.model_mut(POST), Overrides::new());

    let post = schema.model(POST);
    assert_eq!(
        post.relation(CREATOR),
        Some(&BelongsTo::new("Creator", "User", "created_by"))
    );
    assert_eq!(
        post.relation(MODIFIER),
        Some(&BelongsTo::new("Modifier", "User", "modified_by"))
    );

    // The relations resolve to the actor model
    let creator = post.relation(CREATOR).unwrap();
    assert_eq!(schema.target(creator).map(|m| m.id), Some(USER));
}

#[test]
fn only_existing_fields_get_relations() {
    let mut schema = blog_schema();
    let mut policy = WhoDidIt::new();
    policy.setup(schema.model_mut(COMMENT), Overrides::new());
    policy.setup(schema.model_mut(TAG), Overrides::new());

    assert_eq!(relation_names(&schema, COMMENT), ["Modifier"]);
    assert!(relation_names(&schema, TAG).is_empty());

    // Forcing cannot bind fields the model lacks
    policy.bind(schema.model_mut(TAG), true);
    assert!(relation_names(&schema, TAG).is_empty());
}

#[test]
fn auto_bind_disabled_waits_for_force() {
    let mut schema = blog_schema();
    let mut policy = WhoDidIt::new();
    policy.setup(schema.model_mut(POST), Overrides::new().auto_bind(false));
    assert!(relation_names(&schema, POST).is_empty());

    policy.bind(schema.model_mut(POST), false);
    assert!(relation_names(&schema, POST).is_empty());

    policy.bind(schema.model_mut(POST), true);
    assert_eq!(relation_names(&schema, POST), ["Creator", "Modifier"]);
}

#[test]
fn bind_is_idempotent() {
    let mut schema = blog_schema();
    let mut policy = WhoDidIt::new();
    policy.setup(schema.model_mut(POST), Overrides::new());
    let once = schema.model(POST).relations.clone();

    policy.bind(schema.model_mut(POST), false);
    policy.bind(schema.model_mut(POST), true);

    assert_eq!(schema.model(POST).relations, once);
}

#[test]
fn bind_then_unbind_restores_registry() {
    let mut schema = blog_schema();
    let mut policy = WhoDidIt::new();
    policy.setup(schema.model_mut(POST), Overrides::new().auto_bind(false));

    schema
        .model_mut(POST)
        .register_relation(BelongsTo::new("Category", "Category", "category_id"));
    let before = schema.model(POST).relations.clone();

    policy.bind(schema.model_mut(POST), true);
    assert_eq!(schema.model(POST).relations.len(), 3);

    policy.unbind(schema.model_mut(POST));
    assert_eq!(schema.model(POST).relations, before);

    // A second unbind is a no-op
    policy.unbind(schema.model_mut(POST));
    assert_eq!(schema.model(POST).relations, before);
}

#[test]
fn bind_on_unattached_model_is_a_no_op() {
    let mut schema = blog_schema();
    let policy = WhoDidIt::new();

    policy.bind(schema.model_mut(POST), true);
    assert!(relation_names(&schema, POST).is_empty());
}

#[test]
fn custom_actor_model_and_fields() {
    let mut schema = blog_schema();
    let mut policy = WhoDidIt::new();
    policy.setup(
        schema.model_mut(COMMENT),
        Overrides::new()
            .user_model("Member")
            .created_by_field("body")
            .modified_by_field("missing"),
    );

    let comment = schema.model(COMMENT);
    assert_eq!(relation_names(&schema, COMMENT), ["Creator"]);
    assert_eq!(comment.relation(CREATOR).unwrap().target, Name::new("Member"));
    assert_eq!(comment.relation(CREATOR).unwrap().foreign_key, "body");

    // `Member` is not part of the schema
    assert!(schema.target(comment.relation(CREATOR).unwrap()).is_none());
}
