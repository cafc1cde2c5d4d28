use std::process::exit;

use plantlog::config::Settings;
use plantlog::database::{new_pool, run_migrations};
use plantlog::middleware::telemetry;
use plantlog::startup::Application;

/// Start the application after loading settings, the database, and telemetry.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    init_exit_handler();

    let settings = Settings::new().expect("Could not load settings.");
    let db_pool = new_pool(&settings.database_url).expect("Could not create database pool.");
    run_migrations(&db_pool).expect("Could not run database migrations.");
    telemetry::init_tracer(&settings).expect("Could not initialize telemetry.");

    let application = Application::build(settings, db_pool);

    application.run_until_stopped().await?;

    Ok(())
}

// actix-web will handle signals to exit, but doesn't offer a hook to customize it.
fn init_exit_handler() {
    ctrlc::set_handler(move || {
        // Ensure all spans have been reported.
        opentelemetry::global::shutdown_tracer_provider();

        exit(0);
    })
    .expect("Error setting Ctrl-C handler");
}
