use std::path::PathBuf;
use std::time::Instant;
use anyhow::Context;
use crate::config::config_manager::ConfigManager;
use crate::enums::commands::Commands;
use crate::server::api_server::ApiServer;
use crate::server::app_context::AppContext;
use crate::services::analysis_gateway::AnalysisGateway;
use crate::services::record_store::RecordStore;
use crate::structs::config::config::Config;

pub struct CommandRunner {
    config_path: Option<PathBuf>,
    start_time: Option<Instant>,
}

impl CommandRunner {
    pub const fn new(config_path: Option<PathBuf>) -> Self {
        Self {
            config_path,
            start_time: None,
        }
    }

    pub async fn run_command(&mut self, command: Commands) -> anyhow::Result<()> {
        self.start_time = Some(Instant::now());

        let result = match command {
            Commands::Serve { host, port, database } => self.serve_command(host, port, database).await,
            Commands::Init => Self::init_command(),
            Commands::Validate => self.validate_command(),
            Commands::History { limit } => self.history_command(limit),
        };

        if let Some(start) = self.start_time {
            let duration = start.elapsed();
            log::debug!("⏱️  Command completed in {:.2}s", duration.as_secs_f64());
        }

        result
    }

    fn load_config(&self) -> anyhow::Result<Config> {
        let config = ConfigManager::load(self.config_path.as_deref())
            .context("failed to load configuration")?;

        if let Err(errors) = ConfigManager::validate_config(&config) {
            for error in &errors {
                log::error!("❌ {error}");
            }
            anyhow::bail!("configuration has {} problem(s)", errors.len());
        }

        Ok(config)
    }

    async fn serve_command(
        &self,
        host: Option<String>,
        port: Option<u16>,
        database: Option<String>,
    ) -> anyhow::Result<()> {
        let mut config = self.load_config()?;

        if let Some(host) = host {
            config.server.host = host;
        }
        if let Some(port) = port {
            config.server.port = port;
        }
        if let Some(database) = database {
            config.database.path = database;
        }

        let store = RecordStore::from_config(&config.database);
        store
            .initialize()
            .with_context(|| format!("failed to initialize database at {}", config.database.path))?;
        log::info!("🗄️ Using database {}", store.db_path().display());

        let gateway = AnalysisGateway::from_config(&config.ai);
        let server = ApiServer::new(config.server, AppContext::new(store, gateway));

        server.run().await.context("server stopped with an error")
    }

    fn init_command() -> anyhow::Result<()> {
        log::info!("🚀 Initializing configuration...");

        let path = ConfigManager::create_sample_config()
            .context("failed to create configuration")?;

        log::info!("📝 Edit {} to adjust the server, database and model.", path.display());
        log::info!("🔧 Run 'kod-gozcusu validate' to check your configuration.");
        Ok(())
    }

    fn validate_command(&self) -> anyhow::Result<()> {
        let config = self.load_config()?;

        if config.ai.api_key().is_none() {
            log::warn!("🔑 {} is not set; analyses will return a missing-key notice", config.ai.api_key_env);
        }

        log::info!("✅ Configuration is valid");
        Ok(())
    }

    fn history_command(&self, limit: usize) -> anyhow::Result<()> {
        let config = self.load_config()?;
        let store = RecordStore::from_config(&config.database);
        store.initialize().context("failed to initialize database")?;

        let records = store.list_recent(limit).context("failed to load history")?;

        if records.is_empty() {
            println!("No analyses recorded yet.");
            return Ok(());
        }

        for record in records {
            println!("#{} [{}]", record.id, record.timestamp);
            println!("{}", "-".repeat(60));
            println!("{}", record.original_code.trim_end());
            println!("{}", "-".repeat(60));
            println!("{}\n", record.analysis_result.trim_end());
        }

        Ok(())
    }
}
