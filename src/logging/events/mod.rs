mod firestore_event;

pub use firestore_event::*;
