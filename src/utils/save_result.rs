use std::sync::Arc;

use clap::Parser;
use futures::future::join_all;
use results_backend::{
    api::FirestoreApi, documents, results::ResultPersister, Status, Tracing,
};
use tracing::{error, info};

/// Util for saving result records from a JSON file into the results
/// collection.
#[derive(Parser)]
struct Opts {
    /// JSON file holding a single result object or an array of them.
    input: String,

    /// Firestore project that hosts the results collection.
    #[clap(long, default_value = "results-store")]
    project_id: String,

    #[clap(long)]
    prod_tracing: bool,
}

#[tokio::main]
async fn main() -> Result<(), Status> {
    let opts: Opts = Opts::parse();

    match opts.prod_tracing {
        false => Tracing::setup("utils/save_result")?,
        true => Tracing::setup_prod(&opts.project_id)?,
    }

    let records = documents::parse_records(&std::fs::read_to_string(&opts.input)?)?;
    info!("Read {} results from '{}'", records.len(), opts.input);

    let firestore = Arc::new(FirestoreApi::connect(&opts.project_id).await?);
    let persister = ResultPersister::new(Arc::clone(&firestore));

    let outcomes = join_all(records.iter().map(|record| persister.save(record))).await;
    let failed = outcomes.iter().filter(|saved| !**saved).count();

    println!(
        "Saved {} of {} results",
        outcomes.len() - failed,
        outcomes.len()
    );

    match failed {
        0 => Ok(()),
        failed => {
            error!("{failed} results failed to save");
            Err(Status::internal(format!("{failed} results failed to save")))
        }
    }
}
