mod actor_id;
pub use actor_id::ActorId;

mod record;
pub use record::Record;

mod update;
pub use update::{Assignment, Update};

mod value;
pub use value::Value;
