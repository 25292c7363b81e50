mod firestore;

pub use firestore::FirestoreApi;
