use dotenvy::dotenv;
use plant_buddy::{
    config::{self, overrides},
    core::{collection::Collection, report::CareReport},
    errors::Result,
    loader,
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    // 2. Load .env file, env vars can also be set externally
    dotenv().ok();
    info!("Attempted to load .env file.");

    // 3. Load report settings and apply overrides
    let config_path = overrides::config_path(overrides::from_env);
    let app_config = config::load_config(&config_path)
        .map(|loaded| overrides::apply(loaded, overrides::from_env))
        .inspect(|_| info!("Configuration ready ({:?})", config_path))
        .inspect_err(|e| error!("Failed to load configuration: {}", e))?;
    let reference = overrides::reference_date(overrides::from_env)
        .inspect_err(|e| error!("Invalid reference date: {}", e))?;

    // 4. Load the data directory
    let data = loader::load_data_dir(&app_config.data_dir)
        .inspect(|_| info!("Data directory {:?} loaded", app_config.data_dir))
        .inspect_err(|e| error!("Failed to load data directory: {}", e))?;

    // 5. Assemble the collection and attach photo references
    let mut collection = Collection::assemble(data.input, reference);
    for (plant_name, images) in data.images {
        collection.attach_images(&plant_name, images);
    }

    // 6. Compute and print the report
    let report = CareReport::build(&collection, &data.graveyard, &app_config);
    println!("{}", report.render());

    Ok(())
}
