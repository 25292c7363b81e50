mod events;

pub use events::*;

/// Emits a structured event as its JSON encoding under the `event` field.
#[macro_export]
macro_rules! log_event {
    ($event:expr) => {
        ::tracing::debug!(event = $event.encode())
    };
}
