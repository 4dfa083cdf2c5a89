//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// batchkit - list Batch account resources from the command line
#[derive(Parser, Debug)]
#[command(name = "batchkit")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Profile file (YAML) with endpoint and api_version
    #[arg(short, long, global = true)]
    pub profile: Option<PathBuf>,

    /// Account endpoint (overrides profile and environment)
    #[arg(short, long, global = true)]
    pub endpoint: Option<String>,

    /// API version (overrides profile and environment)
    #[arg(long, global = true)]
    pub api_version: Option<String>,

    /// Extra request header as KEY=VALUE (repeatable)
    #[arg(long = "header", global = true)]
    pub headers: Vec<String>,

    /// OData $filter expression
    #[arg(long, global = true)]
    pub filter: Option<String>,

    /// OData $select projection
    #[arg(long, global = true)]
    pub select: Option<String>,

    /// Page-size hint (maxresults)
    #[arg(long, global = true)]
    pub max_results: Option<i32>,

    /// Stop after this many items
    #[arg(long, global = true)]
    pub limit: Option<usize>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the pools in the account
    ListPools,

    /// List the jobs in the account
    ListJobs,

    /// List the tasks of a job
    ListTasks {
        /// Job to list tasks for
        #[arg(long)]
        job_id: String,
    },

    /// List the certificates in the account
    ListCertificates,

    /// List the job schedules in the account
    ListSchedules,

    /// List the compute nodes of a pool
    ListNodes {
        /// Pool to list nodes for
        #[arg(long)]
        pool_id: String,
    },

    /// List the files on a compute node
    ListFiles {
        /// Pool the node belongs to
        #[arg(long)]
        pool_id: String,

        /// Node to list files on
        #[arg(long)]
        node_id: String,

        /// Recurse into subdirectories
        #[arg(long)]
        recursive: bool,
    },
}
