//! CLI argument parsing types.
//!
//! This module provides the command-line interface structure for the
//! gitlab-members binary.

use std::net::SocketAddr;
use std::time::Duration;

use clap::{Parser, Subcommand};

use crate::client::{token_from_env, GitLabClient, DEFAULT_API_URL, DEFAULT_TIMEOUT};
use crate::error::Result;
use crate::models::GroupId;

/// Message for a missing group ID on the command line.
pub const MISSING_ID_ARGUMENT: &str = "Missing argument \"id\" of top level group";

/// Audit member roles across a GitLab group hierarchy.
#[derive(Parser, Debug)]
#[command(name = "gitlab-members", about = "GitLab group membership audit", version)]
pub struct Cli {
    /// Numeric ID of the top-level group to audit.
    pub id: Option<String>,

    /// GitLab REST API base URL.
    #[arg(long, global = true, env = "GITLAB_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Timeout for each API request, in seconds.
    #[arg(long, global = true, env = "GITLAB_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT.as_secs())]
    pub timeout: u64,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Serve reports over HTTP: `GET /?id=<group id>`.
    Serve {
        /// Address to listen on.
        #[arg(long, env = "GITLAB_MEMBERS_BIND", default_value = "127.0.0.1:8080")]
        bind: SocketAddr,
    },
}

impl Cli {
    /// Validate the positional group ID.
    ///
    /// # Errors
    ///
    /// Fails for an absent, empty, zero, or non-numeric ID.
    pub fn group_id(&self) -> Result<GroupId> {
        GroupId::parse(self.id.as_deref(), MISSING_ID_ARGUMENT)
    }

    /// Build an API client from `GITLAB_TOKEN` and the parsed options.
    ///
    /// # Errors
    ///
    /// Fails if the token is missing or the base URL is invalid.
    pub fn client(&self) -> Result<GitLabClient> {
        self.client_with_token(&token_from_env()?)
    }

    /// Build an API client for `token` from the parsed options.
    ///
    /// # Errors
    ///
    /// Fails if the base URL is invalid.
    pub fn client_with_token(&self, token: &str) -> Result<GitLabClient> {
        GitLabClient::with_timeout(token, &self.api_url, Duration::from_secs(self.timeout))
    }
}
