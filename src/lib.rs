//! Client-side core of the club mobile application.
//!
//! Fetches members and meetings from the club API, joins the endpoint
//! responses and shapes them into view models: an enriched members
//! directory, a meeting list and per-meeting minutes.

use crate::commands::{Command, CommandOutput};
use crate::models::config::ClientConfig;
use crate::repository::HttpRepository;
use crate::services::{ServiceError, ServiceResult};

pub mod commands;
pub mod domain;
pub mod dto;
pub mod models;
pub mod repository;
pub mod services;

/// Builds the shared API client from `config` and runs `command` with it.
pub async fn run(config: &ClientConfig, command: &Command) -> ServiceResult<CommandOutput> {
    let repo = HttpRepository::new(config).map_err(ServiceError::from)?;

    log::info!(
        "{} {} using {}",
        config.app_name,
        config.version,
        config.api_root()
    );

    commands::execute(&repo, config, command).await
}
