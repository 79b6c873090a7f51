pub mod entries;

pub use entries::{EntryEnvelope, EntryPayload, EntryResponse, MessageResponse};
