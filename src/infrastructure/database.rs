use sqlx::{PgPool, postgres::PgPoolOptions};

pub async fn init_pool(database_dsn: &str, max_connections: u32) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_dsn)
        .await?;

    tracing::info!(max_connections, "connected to PostgreSQL database");
    Ok(pool)
}

pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
