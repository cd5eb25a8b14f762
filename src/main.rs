use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{error, info};

use files_manager::{
    BlobStore, Config, Database, FileService, JobQueue, SessionRepository, SessionResolver,
    ThumbnailJob, UserId, WebServer,
};

const USAGE: &str = "usage: files-manager [issue-token <user-id>]";

#[tokio::main]
async fn main() {
    // Load configuration
    let config = match Config::load_with_env("config.toml") {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config.toml: {e}");
            eprintln!("Using default configuration.");
            let mut config = Config::default();
            config.apply_env_overrides();
            config
        }
    };

    if let Err(e) = config.validate() {
        eprintln!("Invalid configuration: {e}");
        std::process::exit(1);
    }

    // Initialize logging
    if let Err(e) = files_manager::logging::init(&config.logging) {
        eprintln!("Failed to initialize logging: {e}");
        // Fall back to console-only logging
        files_manager::logging::init_console_only(&config.logging.level);
    }

    let db = match Database::open(&config.database.path).await {
        Ok(db) => Arc::new(db),
        Err(e) => {
            error!("Failed to open database {}: {}", config.database.path, e);
            std::process::exit(1);
        }
    };

    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.as_slice() {
        [] => {}
        [command, user] if command == "issue-token" => {
            issue_token(&db, user, config.auth.token_ttl_secs).await;
            return;
        }
        _ => {
            eprintln!("{USAGE}");
            std::process::exit(2);
        }
    }

    info!("Files Manager starting");
    info!("Blob storage at {}", config.files.storage_path);

    let (jobs, rx) = JobQueue::channel(config.queue.capacity);
    tokio::spawn(drain_jobs(rx));

    let service = FileService::new(
        db.clone(),
        BlobStore::new(&config.files.storage_path),
        jobs,
        Arc::new(SessionResolver::new(db)),
    );

    let server = match WebServer::new(&config.server, service) {
        Ok(server) => server,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = server.run().await {
        error!("Web server error: {}", e);
        std::process::exit(1);
    }
}

/// Mint a session token for `user` and print it.
async fn issue_token(db: &Database, user: &str, ttl_secs: u64) {
    let Ok(user_id) = user.parse::<i64>() else {
        eprintln!("Invalid user id: {user}");
        std::process::exit(2);
    };

    match SessionRepository::new(db.pool())
        .create(UserId::new(user_id), ttl_secs)
        .await
    {
        Ok(token) => println!("{token}"),
        Err(e) => {
            eprintln!("Failed to create session: {e}");
            std::process::exit(1);
        }
    }
}

/// Consume post-processing jobs. Thumbnails are not generated yet; each job
/// is only logged.
async fn drain_jobs(mut rx: mpsc::Receiver<ThumbnailJob>) {
    while let Some(job) = rx.recv().await {
        info!(
            owner_id = %job.owner_id,
            file_id = %job.file_id,
            "Received thumbnail job"
        );
    }
    info!("Job queue closed");
}
