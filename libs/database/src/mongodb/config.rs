#[cfg(feature = "config")]
use core_config::{ConfigError, FromEnv};

/// Default connection string used when no environment variable is set.
const DEFAULT_URL: &str = "mongodb://localhost:27017/crud_db";

/// Database name used when the connection string names none.
const DEFAULT_DATABASE: &str = "crud_db";

/// MongoDB database configuration
///
/// This struct holds MongoDB connection settings.
/// It can be constructed manually or loaded from environment variables (with `config` feature).
///
/// # Example
///
/// ```ignore
/// use database::mongodb::MongoConfig;
///
/// // Manual construction, database name parsed from the URL path
/// let config = MongoConfig::new("mongodb://localhost:27017/crud_db");
///
/// // With an explicit database name
/// let config = MongoConfig::with_database("mongodb://localhost:27017", "mydb");
///
/// // From environment variables (requires `config` feature)
/// let config = MongoConfig::from_env()?;
/// ```
#[derive(Clone, Debug)]
pub struct MongoConfig {
    /// MongoDB connection URL
    /// Format: mongodb://[username:password@]host[:port][/database][?options]
    pub url: String,

    /// Database name to use
    pub database: String,

    /// Optional application name for server logs
    pub app_name: Option<String>,
}

impl MongoConfig {
    /// Create a new MongoConfig from a connection string.
    ///
    /// The database name is taken from the URL path, falling back to
    /// `crud_db` when the URL names none.
    pub fn new(url: impl Into<String>) -> Self {
        let url = url.into();
        let database = database_name_from_url(&url);
        Self {
            url,
            database,
            app_name: None,
        }
    }

    /// Create a MongoConfig with an explicit database name
    ///
    /// # Example
    /// ```ignore
    /// let config = MongoConfig::with_database("mongodb://localhost:27017", "mydb");
    /// ```
    pub fn with_database(url: impl Into<String>, database: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            database: database.into(),
            app_name: None,
        }
    }

    /// Set the application name for server logs
    pub fn with_app_name(mut self, app_name: impl Into<String>) -> Self {
        self.app_name = Some(app_name.into());
        self
    }

    /// Get a reference to the MongoDB URL
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Get the database name
    pub fn database(&self) -> &str {
        &self.database
    }
}

impl Default for MongoConfig {
    fn default() -> Self {
        Self::new(DEFAULT_URL)
    }
}

/// Extract the database name from a connection string path.
///
/// Query options after `?` are not part of the name. An empty path yields
/// the default database name.
fn database_name_from_url(url: &str) -> String {
    let without_scheme = url.split_once("://").map_or(url, |(_, rest)| rest);
    let path = without_scheme
        .split_once('/')
        .map(|(_, path)| path)
        .unwrap_or("");
    let name = path.split('?').next().unwrap_or("");

    if name.is_empty() {
        DEFAULT_DATABASE.to_string()
    } else {
        name.to_string()
    }
}

/// Load MongoConfig from environment variables
///
/// Environment variables:
/// - `MONGODB_URL` or `MONGO_URL` (optional, default: `mongodb://localhost:27017/crud_db`)
/// - `MONGODB_APP_NAME` (optional) - Application name for server logs
///
/// The database name is parsed from the connection string path.
///
/// # Example
/// ```ignore
/// use database::mongodb::MongoConfig;
/// use core_config::FromEnv;
///
/// let config = MongoConfig::from_env()?;
/// ```
#[cfg(feature = "config")]
impl FromEnv for MongoConfig {
    fn from_env() -> Result<Self, ConfigError> {
        // Try MONGODB_URL first, fall back to MONGO_URL
        let url = std::env::var("MONGODB_URL")
            .or_else(|_| std::env::var("MONGO_URL"))
            .unwrap_or_else(|_| DEFAULT_URL.to_string());

        let mut config = Self::new(url);
        if let Ok(app_name) = std::env::var("MONGODB_APP_NAME") {
            config = config.with_app_name(app_name);
        }

        Ok(config)
    }
}
