//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands};
use crate::client::BatchClient;
use crate::config::ClientConfig;
use crate::options::ListOptions;
use crate::paging::{PageControl, Pager};
use anyhow::{bail, Context};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::info;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> anyhow::Result<()> {
        let client = self.build_client()?;
        let options = self.list_options();
        let limit = self.cli.limit;

        match &self.cli.command {
            Commands::ListPools => {
                print_listing(client.pools().list(Some(options))?, limit).await
            }
            Commands::ListJobs => print_listing(client.jobs().list(Some(options))?, limit).await,
            Commands::ListTasks { job_id } => {
                print_listing(client.tasks(job_id).list(Some(options))?, limit).await
            }
            Commands::ListCertificates => {
                print_listing(client.certificates().list(Some(options))?, limit).await
            }
            Commands::ListSchedules => {
                print_listing(client.job_schedules().list(Some(options))?, limit).await
            }
            Commands::ListNodes { pool_id } => {
                print_listing(client.nodes(pool_id).list(Some(options))?, limit).await
            }
            Commands::ListFiles {
                pool_id,
                node_id,
                recursive,
            } => {
                let pager = client
                    .node_files(pool_id, node_id)
                    .list(Some(*recursive), Some(options))?;
                print_listing(pager, limit).await
            }
        }
    }

    /// Resolve the client configuration: profile file, then environment,
    /// then flag overrides on top
    fn build_client(&self) -> anyhow::Result<BatchClient> {
        let mut config = if let Some(path) = &self.cli.profile {
            ClientConfig::from_file(path)
                .with_context(|| format!("failed to load profile {}", path.display()))?
        } else if let Some(endpoint) = &self.cli.endpoint {
            ClientConfig::new(endpoint)
        } else {
            ClientConfig::from_env().context(
                "no endpoint given; pass --endpoint, --profile, or set BATCHKIT_ENDPOINT",
            )?
        };

        if let Some(endpoint) = &self.cli.endpoint {
            config.endpoint = endpoint.clone();
        }
        if let Some(api_version) = &self.cli.api_version {
            config.api_version = api_version.clone();
        }
        for raw in &self.cli.headers {
            let (key, value) = raw
                .split_once('=')
                .with_context(|| format!("invalid --header '{raw}', expected KEY=VALUE"))?;
            config.headers.insert(key.to_string(), value.to_string());
        }

        if config.endpoint.is_empty() {
            bail!("endpoint must not be empty");
        }

        Ok(BatchClient::new(config)?)
    }

    fn list_options(&self) -> ListOptions {
        let mut options = ListOptions::new();
        if let Some(filter) = &self.cli.filter {
            options = options.filter(filter);
        }
        if let Some(select) = &self.cli.select {
            options = options.select(select);
        }
        if let Some(max_results) = self.cli.max_results {
            options = options.max_results(max_results);
        }
        options
    }
}

/// Print a listing as JSON lines, stopping early once `limit` items arrived
async fn print_listing<T>(pager: Pager<T>, limit: Option<usize>) -> anyhow::Result<()>
where
    T: DeserializeOwned + Serialize,
{
    let mut items = match limit {
        Some(limit) => {
            let mut seen = 0usize;
            pager
                .for_each_page(|page| {
                    seen += page.len();
                    if seen >= limit {
                        PageControl::Stop
                    } else {
                        PageControl::Continue
                    }
                })
                .await?
        }
        None => pager.collect().await?,
    };

    if let Some(limit) = limit {
        items.truncate(limit);
    }

    for item in &items {
        println!("{}", serde_json::to_string(item)?);
    }
    info!("{} items listed", items.len());

    Ok(())
}
