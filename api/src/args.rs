use clap::Parser;
use mediseek_core::domain::common::DatabaseConfig;

#[derive(Debug, Clone, Parser)]
#[command(name = "mediseek-api", about = "Doctor directory HTTP API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub database: DatabaseArgs,

    /// Emit logs as JSON instead of human-readable lines.
    #[arg(long, env = "LOG_JSON", default_value_t = false)]
    pub log_json: bool,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, env = "PORT", default_value_t = 5000)]
    pub port: u16,

    /// Prefix for every route, e.g. `/api`.
    #[arg(long, env = "ROOT_PATH", default_value = "/api")]
    pub root_path: String,

    #[arg(
        long,
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:3000"
    )]
    pub allowed_origins: Vec<String>,

    /// Per-request deadline; requests exceeding it get a timeout response.
    #[arg(long, env = "REQUEST_TIMEOUT_SECS", default_value_t = 30)]
    pub request_timeout_secs: u64,
}

#[derive(Debug, Clone, clap::Args)]
pub struct DatabaseArgs {
    #[arg(long, env = "DATABASE_HOST", default_value = "localhost")]
    pub database_host: String,

    #[arg(long, env = "DATABASE_PORT", default_value_t = 5432)]
    pub database_port: u16,

    #[arg(long, env = "DATABASE_USER", default_value = "mediseek")]
    pub database_user: String,

    #[arg(long, env = "DATABASE_PASSWORD", default_value = "")]
    pub database_password: String,

    #[arg(long, env = "DATABASE_NAME", default_value = "mediseek")]
    pub database_name: String,
}

impl From<&DatabaseArgs> for DatabaseConfig {
    fn from(args: &DatabaseArgs) -> Self {
        Self {
            host: args.database_host.clone(),
            port: args.database_port,
            username: args.database_user.clone(),
            password: args.database_password.clone(),
            name: args.database_name.clone(),
        }
    }
}
