use whodidit::schema::{Model, ModelId};
use whodidit::{Schema, Session};

pub const USER: ModelId = ModelId(0);
pub const POST: ModelId = ModelId(1);
pub const COMMENT: ModelId = ModelId(2);
pub const TAG: ModelId = ModelId(3);

/// Installs a test-writer subscriber so `RUST_LOG=whodidit=trace` shows
/// policy decisions in failing tests.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// A small blog schema:
///
/// - `Post` has both audit fields
/// - `Comment` only has `modified_by`
/// - `Tag` has neither
pub fn blog_schema() -> Schema {
    init_tracing();

    Schema::new([
        Model::new(USER, "User").field("id").field("email"),
        Model::new(POST, "Post")
            .field("id")
            .field("title")
            .field("created_by")
            .field("modified_by"),
        Model::new(COMMENT, "Comment")
            .field("id")
            .field("body")
            .field("modified_by"),
        Model::new(TAG, "Tag").field("id").field("label"),
    ])
    .unwrap()
}

/// A session with `id` logged in under the default `Auth.User` key.
pub fn logged_in(id: impl Into<whodidit::stmt::Value>) -> Session {
    Session::new().with("Auth.User.id", id)
}
