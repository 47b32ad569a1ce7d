use sqlx::{postgres::PgPoolOptions, PgPool};
use anyhow::Result;
use std::time::Duration;
use crate::common::config::AppConfig;

const SCHEMA: &str = r#"
    CREATE TABLE IF NOT EXISTS employees (
        id BIGSERIAL PRIMARY KEY,
        first_name VARCHAR(255) NOT NULL,
        last_name VARCHAR(255) NOT NULL,
        email VARCHAR(255) NOT NULL UNIQUE
    );
"#;

pub async fn create_database_pool(config: &AppConfig) -> Result<PgPool> {
    let connection_string = config.database.connection_string.as_deref()
        .ok_or_else(|| anyhow::anyhow!("EMS_DATABASE_URL no está configurada"))?;

    tracing::info!("Inicializando conexión a PostgreSQL con URL: {}",
                  connection_string.replace("postgres://", "postgres://[user]:[pass]@"));

    let mut attempt = 0;
    const MAX_ATTEMPTS: usize = 3;

    while attempt < MAX_ATTEMPTS {
        attempt += 1;
        tracing::info!("Intento de conexión a PostgreSQL #{}", attempt);

        match PgPoolOptions::new()
            .max_connections(config.database.max_connections)
            .min_connections(config.database.min_connections)
            .acquire_timeout(config.timeouts.db_acquire_timeout())
            .connect(connection_string)
            .await {
                Ok(pool) => {
                    // Crear la tabla si es una instalación nueva
                    match sqlx::query(SCHEMA).execute(&pool).await {
                        Ok(_) => {
                            tracing::info!("Conexión a PostgreSQL establecida correctamente");
                            return Ok(pool);
                        },
                        Err(e) => {
                            tracing::error!("Error al crear la tabla de empleados: {}", e);
                            if attempt >= MAX_ATTEMPTS {
                                return Err(anyhow::anyhow!("Error en la conexión a PostgreSQL: {}", e));
                            }
                        }
                    }
                },
                Err(e) => {
                    tracing::error!("Error al conectar a PostgreSQL: {}", e);
                    if attempt >= MAX_ATTEMPTS {
                        return Err(anyhow::anyhow!("Error en la conexión a PostgreSQL: {}", e));
                    }
                    tokio::time::sleep(Duration::from_secs(1)).await;
                }
            }
    }

    Err(anyhow::anyhow!("No se pudo establecer la conexión a PostgreSQL después de {} intentos", MAX_ATTEMPTS))
}
