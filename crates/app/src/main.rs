use anyhow::Context;
use app::config::{Cli, Command, ServeArgs, normalize_sqlite_url, prepare_sqlite_file};
use app::telemetry::init_logging;
use clap::Parser;
use services::AppServices;
use storage::repository::Storage;
use storage::sqlite::SqliteRepository;
use tokio::net::TcpListener;
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    let _guard = init_logging(cli.log_dir.as_deref())?;

    // Open + migrate SQLite at startup; the pool is closed again before exit.
    let db_url = normalize_sqlite_url(&cli.db_url);
    prepare_sqlite_file(&db_url)?;
    let repo = SqliteRepository::connect(&db_url)
        .await
        .with_context(|| format!("failed to open {db_url}"))?;
    repo.migrate().await.context("failed to migrate content schema")?;
    let services = AppServices::from_storage(&Storage::from_sqlite(repo.clone()));

    let result = match cli.command() {
        Command::Serve => serve(services, &cli.server).await,
        Command::Seed => seed(&services).await,
    };

    repo.close().await;
    result
}

async fn serve(services: AppServices, args: &ServeArgs) -> anyhow::Result<()> {
    let listener = TcpListener::bind((args.host.as_str(), args.port))
        .await
        .with_context(|| format!("failed to bind {}:{}", args.host, args.port))?;
    info!(addr = %listener.local_addr()?, "listening");

    axum::serve(listener, app::router(services))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server stopped");
    Ok(())
}

async fn seed(services: &AppServices) -> anyhow::Result<()> {
    let report = services.seed().run().await.context("seed failed")?;
    println!(
        "Seeded {} chapters ({} rows created, {} already present)",
        report.chapters_count, report.created, report.unchanged
    );
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!(error = %err, "failed to listen for shutdown signal");
    }
}
