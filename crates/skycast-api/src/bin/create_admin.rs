//! Maintenance CLI: create an admin user
//!
//! ```bash
//! cargo run -p skycast-api --bin create-admin -- --email admin@example.com --password 'P@$$w0rd123!'
//! ```

use anyhow::{bail, Context};
use clap::Parser;
use skycast_common::auth::{hash_password, validate_password_strength};
use skycast_common::{try_init_tracing, AppConfig};
use skycast_core::traits::UserRepository;
use skycast_db::{create_pool, run_migrations, PgUserRepository};
use tracing::info;

#[derive(Debug, Parser)]
#[command(name = "create-admin", about = "Create an admin user")]
struct Args {
    /// Email address for the admin account
    #[arg(long, short)]
    email: String,

    /// Password for the admin account
    #[arg(long, short)]
    password: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = try_init_tracing();

    let args = Args::parse();
    let config = AppConfig::from_env().context("Failed to load configuration")?;

    validate_password_strength(&args.password)
        .map_err(|e| anyhow::anyhow!(e.to_string()))
        .context("Password rejected")?;

    let db_config = skycast_db::DatabaseConfig {
        url: config.database.url.clone(),
        ..Default::default()
    };
    let pool = create_pool(&db_config)
        .await
        .context("Failed to connect to PostgreSQL")?;
    run_migrations(&pool).await.context("Failed to apply migrations")?;

    let repo = PgUserRepository::new(pool);

    if repo
        .find_by_email(&args.email)
        .await
        .map_err(|e| anyhow::anyhow!(e.to_string()))?
        .is_some()
    {
        bail!("User with email {} already exists", args.email);
    }

    let password_hash =
        hash_password(&args.password).map_err(|e| anyhow::anyhow!(e.to_string()))?;
    let user = repo
        .create(&args.email, &password_hash, true)
        .await
        .map_err(|e| anyhow::anyhow!(e.to_string()))?;

    info!(user_id = user.id, email = %user.email, "Admin user created");
    println!("Created admin user {} (id {})", user.email, user.id);

    Ok(())
}
