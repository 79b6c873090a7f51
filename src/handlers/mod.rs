pub mod entries;
pub mod health;

pub use entries::{create_entry, delete_entry, get_entry, list_entries, update_entry};
pub use health::health_check;
