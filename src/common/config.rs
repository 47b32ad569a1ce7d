use std::env;
use std::str::FromStr;
use std::time::Duration;

/// Configuración del servidor HTTP
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Dirección de escucha
    pub host: String,
    /// Puerto de escucha
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl ServerConfig {
    /// Dirección completa en formato host:puerto
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Configuración del cliente de la API de empleados
#[derive(Debug, Clone)]
pub struct ApiClientConfig {
    /// URL base del recurso de empleados
    pub base_url: String,
}

impl Default for ApiClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080/api/employees".to_string(),
        }
    }
}

/// Configuración de timeouts para diferentes operaciones
#[derive(Debug, Clone)]
pub struct TimeoutConfig {
    /// Timeout para operaciones de red (ms)
    pub network_operation_ms: u64,
    /// Timeout para adquirir una conexión de base de datos (s)
    pub db_acquire_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            network_operation_ms: 15000, // 15 segundos
            db_acquire_secs: 5,
        }
    }
}

impl TimeoutConfig {
    /// Obtiene un Duration para operaciones de red
    pub fn network_timeout(&self) -> Duration {
        Duration::from_millis(self.network_operation_ms)
    }

    /// Obtiene un Duration para adquirir conexiones
    pub fn db_acquire_timeout(&self) -> Duration {
        Duration::from_secs(self.db_acquire_secs)
    }
}

/// Configuración del borrado diferido con deshacer
#[derive(Debug, Clone)]
pub struct UndoConfig {
    /// Tiempo antes de confirmar el borrado en el backend (ms)
    pub commit_delay_ms: u64,
    /// Intervalo de refresco de la barra de progreso (ms)
    pub tick_interval_ms: u64,
}

impl Default for UndoConfig {
    fn default() -> Self {
        Self {
            commit_delay_ms: 3000,
            tick_interval_ms: 50,
        }
    }
}

impl UndoConfig {
    pub fn commit_delay(&self) -> Duration {
        Duration::from_millis(self.commit_delay_ms)
    }

    pub fn tick_interval(&self) -> Duration {
        // Un intervalo de cero haría girar el temporizador sin pausa
        Duration::from_millis(self.tick_interval_ms.max(1))
    }
}

/// Configuración de PostgreSQL
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Cadena de conexión; sin ella se usa el repositorio en memoria
    pub connection_string: Option<String>,
    pub max_connections: u32,
    pub min_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            connection_string: None,
            max_connections: 5,
            min_connections: 1,
        }
    }
}

/// Configuración global de la aplicación
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub api_client: ApiClientConfig,
    pub timeouts: TimeoutConfig,
    pub undo: UndoConfig,
    pub database: DatabaseConfig,
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno, partiendo de los valores por defecto
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Igual que `from_env` pero con una fuente de variables arbitraria
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(host) = lookup("EMS_SERVER_HOST") {
            config.server.host = host;
        }
        parse_into(&lookup, "EMS_SERVER_PORT", &mut config.server.port);

        if let Some(url) = lookup("EMS_API_URL") {
            config.api_client.base_url = url.trim_end_matches('/').to_string();
        }
        parse_into(&lookup, "EMS_NETWORK_TIMEOUT_MS", &mut config.timeouts.network_operation_ms);

        parse_into(&lookup, "EMS_UNDO_DURATION_MS", &mut config.undo.commit_delay_ms);
        parse_into(&lookup, "EMS_UNDO_TICK_MS", &mut config.undo.tick_interval_ms);

        config.database.connection_string = lookup("EMS_DATABASE_URL")
            .filter(|url| !url.trim().is_empty());
        parse_into(&lookup, "EMS_DB_MAX_CONNECTIONS", &mut config.database.max_connections);

        config
    }
}

fn parse_into<F, T>(lookup: &F, key: &str, target: &mut T)
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    if let Some(raw) = lookup(key) {
        match raw.trim().parse::<T>() {
            Ok(value) => *target = value,
            Err(_) => tracing::warn!("Ignoring invalid value for {}: {:?}", key, raw),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_match_undo_contract() {
        let config = AppConfig::from_lookup(|_| None);

        assert_eq!(config.undo.commit_delay(), Duration::from_millis(3000));
        assert_eq!(config.undo.tick_interval(), Duration::from_millis(50));
        assert_eq!(config.server.bind_address(), "0.0.0.0:8080");
        assert!(config.database.connection_string.is_none());
    }

    #[test]
    fn test_overrides_are_applied() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("EMS_SERVER_PORT", "9090"),
            ("EMS_API_URL", "http://backend:8080/api/employees/"),
            ("EMS_UNDO_DURATION_MS", "5000"),
            ("EMS_DATABASE_URL", "postgres://localhost/ems"),
        ]));

        assert_eq!(config.server.port, 9090);
        assert_eq!(config.api_client.base_url, "http://backend:8080/api/employees");
        assert_eq!(config.undo.commit_delay_ms, 5000);
        assert_eq!(config.database.connection_string.as_deref(), Some("postgres://localhost/ems"));
    }

    #[test]
    fn test_invalid_values_fall_back_to_defaults() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("EMS_SERVER_PORT", "not-a-port"),
            ("EMS_UNDO_TICK_MS", "0"),
        ]));

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.undo.tick_interval(), Duration::from_millis(1));
    }
}
