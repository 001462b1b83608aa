use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use anyhow::{anyhow, Context};
use crate::config::config_manager::ConfigManager;
use crate::enums::commands::Commands;
use crate::enums::report_variant::ReportVariant;
use crate::logger::animated_logger::AnimatedLogger;
use crate::server::report_server::ReportServer;
use crate::services::report_handler::ReportHandler;
use crate::structs::config::config::Config;

pub struct CommandRunner {
    config_path: Option<PathBuf>,
    start_time: Option<Instant>,
}

impl CommandRunner {
    pub fn new(config_path: Option<PathBuf>) -> Self {
        Self {
            config_path,
            start_time: None,
        }
    }

    pub async fn run_command(&mut self, command: Commands) -> anyhow::Result<()> {
        self.start_time = Some(Instant::now());

        let result = match command {
            Commands::Init => self.init_command(),
            Commands::Serve { host, port, variant } => self.serve_command(host, port, variant).await,
            Commands::Generate { target, variant, compact } => self.generate_command(target, variant, compact).await,
            Commands::Variants => self.variants_command(),
            Commands::Validate => self.validate_command(),
        };

        if let Some(start) = self.start_time {
            log::debug!("⏱️  Command completed in {:.2}s", start.elapsed().as_secs_f64());
        }

        result
    }

    fn init_command(&self) -> anyhow::Result<()> {
        log::info!("🚀 Initializing report-proxy configuration...");

        let path = match &self.config_path {
            Some(path) => path.clone(),
            None => ConfigManager::default_config_path()
                .ok_or_else(|| anyhow!("could not determine the home directory"))?,
        };

        ConfigManager::create_sample_config(&path)?;
        log::info!("📝 Edit the configuration file to choose models and the report variant.");
        log::info!("🔧 Run 'report-proxy validate' to check your configuration.");
        Ok(())
    }

    async fn serve_command(&self, host: Option<String>, port: Option<u16>, variant: Option<ReportVariant>) -> anyhow::Result<()> {
        let mut config = self.load_config(variant)?;
        if let Some(host) = host {
            config.server.host = host;
        }
        if let Some(port) = port {
            config.server.port = port;
        }
        Self::ensure_valid(&config)?;

        let handler = ReportHandler::from_config(&config)?;
        if std::env::var(&config.ai.api_key_env).map(|k| k.trim().is_empty()).unwrap_or(true) {
            log::warn!("⚠️ {} is not set; requests will be answered with 500 until it is", config.ai.api_key_env);
        }
        log::info!("🤖 Candidate models: {}", handler.models().join(" -> "));

        let mut server = ReportServer::new(Arc::new(handler), config.server.clone());
        server.start().await?;

        tokio::signal::ctrl_c().await.context("failed to listen for Ctrl-C")?;
        server.shutdown().await?;
        Ok(())
    }

    async fn generate_command(&self, target: String, variant: Option<ReportVariant>, compact: bool) -> anyhow::Result<()> {
        let config = self.load_config(variant)?;
        Self::ensure_valid(&config)?;

        let handler = ReportHandler::from_config(&config)?;

        let mut logger = AnimatedLogger::new(format!("Generating {} report for {}", handler.descriptor().title, target));
        logger.start();

        let result = handler
            .generate_with_progress(&target, |model, attempt, total| {
                logger.set_detail(format!("{} {}/{}", model, attempt, total));
            })
            .await;

        match result {
            Ok(generated) => {
                logger.stop(&format!("Report generated by {}", generated.model)).await;
                let output = if compact {
                    serde_json::to_string(&generated.report)?
                } else {
                    serde_json::to_string_pretty(&generated.report)?
                };
                println!("{}", output);
                Ok(())
            }
            Err(e) => {
                logger.error(&e.to_string()).await;
                Err(anyhow!(e.technical_details()))
            }
        }
    }

    fn variants_command(&self) -> anyhow::Result<()> {
        for variant in ReportVariant::ALL {
            let descriptor = variant.descriptor();
            println!("{:<20} {}", descriptor.name, descriptor.title);
            println!("{:<20} fields: {}", "", descriptor.required_fields.join(", "));
        }
        Ok(())
    }

    fn validate_command(&self) -> anyhow::Result<()> {
        log::info!("🔍 Validating configuration...");
        let config = self.load_config(None)?;
        Self::ensure_valid(&config)?;

        let descriptor = config.report.descriptor();
        log::info!("✅ Configuration is valid");
        log::info!("   Report: {} ({})", descriptor.name, descriptor.title);
        log::info!("   Models: {}", config.ai.models.join(", "));
        log::info!("   Endpoint: http://{}:{}/api/{}", config.server.host, config.server.port, config.server.route);
        Ok(())
    }

    fn load_config(&self, variant: Option<ReportVariant>) -> anyhow::Result<Config> {
        let mut config = ConfigManager::load(self.config_path.as_deref())?;
        if let Some(variant) = variant {
            config.report.variant = variant;
            config.report.custom = None;
        }
        Ok(config)
    }

    fn ensure_valid(config: &Config) -> anyhow::Result<()> {
        if let Err(errors) = ConfigManager::validate_config(config) {
            for error in &errors {
                log::error!("❌ {}", error);
            }
            return Err(anyhow!("configuration has {} error(s)", errors.len()));
        }
        Ok(())
    }
}
