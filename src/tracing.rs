use crate::Status;
use tracing::Level;
use tracing_stackdriver::CloudTraceConfiguration;
use tracing_subscriber::{
    fmt::writer::MakeWriterExt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer,
};

pub struct Tracing;

impl Tracing {
    /// Logs to stdout, filtered by `RUST_LOG` and INFO when unset. Structured
    /// `FirestoreEvent`s are emitted at DEBUG, e.g.
    /// `RUST_LOG=info,results_backend=debug`. `name` identifies the binary in
    /// the startup line.
    pub fn setup(name: &str) -> Result<(), Status> {
        let directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();

        match tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::Layer::new()
                    .with_writer(std::io::stdout)
                    .with_filter(env_filter(directives.as_deref())),
            )
            .try_init()
        {
            Ok(()) => {
                tracing::info!("tracing ready for '{name}'");
                Ok(())
            }
            Err(e) => {
                eprintln!("{e}");
                Err(Status::new("Failed to setup tracing", e))
            }
        }
    }

    /// Emits Stackdriver formatted JSON logs linked to Cloud Trace in
    /// `project_id`. Capped at INFO, so DEBUG events are dropped.
    pub fn setup_prod(project_id: &str) -> Result<(), Status> {
        match tracing_subscriber::registry()
            .with(tracing_opentelemetry::layer())
            .with(
                tracing_stackdriver::layer()
                    .with_cloud_trace(CloudTraceConfiguration {
                        project_id: project_id.to_owned(),
                    })
                    .with_writer(std::io::stdout.with_max_level(Level::INFO)),
            )
            .try_init()
        {
            Ok(()) => Ok(()),
            Err(e) => {
                eprintln!("{e}");
                Err(Status::new("Failed to setup tracing", e))
            }
        }
    }
}

fn env_filter(directives: Option<&str>) -> EnvFilter {
    EnvFilter::new(directives.unwrap_or(DEFAULT_DIRECTIVES))
}

const DEFAULT_DIRECTIVES: &str = "info";

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::level_filters::LevelFilter;

    #[test]
    fn filter_defaults_to_info() {
        assert_eq!(env_filter(None).max_level_hint(), Some(LevelFilter::INFO));
    }

    #[test]
    fn filter_enables_debug_events() {
        assert_eq!(
            env_filter(Some("info,results_backend=debug")).max_level_hint(),
            Some(LevelFilter::DEBUG)
        );
    }
}
