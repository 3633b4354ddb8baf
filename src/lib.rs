pub mod config;
pub mod data;
pub mod dto;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
pub mod wizard;

use std::sync::Arc;
use std::time::Duration;

use crate::config::Config;
use crate::error::Result;
use crate::services::{
    job_board_service::{HttpJobBoard, JobBoard},
    session_service::SessionService,
};

#[derive(Clone)]
pub struct AppState {
    pub sessions: SessionService,
    pub job_board: Arc<dyn JobBoard>,
}

impl AppState {
    pub fn new(job_board: Arc<dyn JobBoard>) -> Self {
        Self::with_sessions(SessionService::default(), job_board)
    }

    pub fn with_sessions(sessions: SessionService, job_board: Arc<dyn JobBoard>) -> Self {
        Self {
            sessions,
            job_board,
        }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        let job_board = HttpJobBoard::from_config(config)?;
        let sessions =
            SessionService::new(Duration::from_secs(config.session_idle_timeout_secs));
        Ok(Self::with_sessions(sessions, Arc::new(job_board)))
    }
}
