pub mod config;
pub mod directory;
pub mod err;
pub mod flash;
pub mod ledger;
pub mod models;
pub mod pages;
pub mod routes;
pub mod sms;
pub mod store;
pub mod submission;

use std::sync::Arc;

use axum::handler::Handler;
use axum::routing::get;
use axum::{Extension, Router};
use tower::ServiceBuilder;

use crate::config::Config;
use crate::directory::{SqliteDirectory, StudentDirectory};
use crate::ledger::{MarksLedger, SqliteLedger};
use crate::sms::{SmsGateway, TwilioGateway};

/// Everything a request handler needs, built once at startup.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub directory: Arc<dyn StudentDirectory>,
    pub ledger: Arc<dyn MarksLedger>,
    pub gateway: Arc<dyn SmsGateway>,
}

impl AppState {
    pub fn from_config(config: Config) -> err::Result<AppState> {
        let gateway = TwilioGateway::new(config.twilio.clone())?;
        Ok(AppState {
            directory: Arc::new(SqliteDirectory::new(&config.database_url)),
            ledger: Arc::new(SqliteLedger::new(&config.database_url)),
            gateway: Arc::new(gateway),
            config: Arc::new(config),
        })
    }
}

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(routes::index))
        .route("/marks", get(routes::marks_form).post(routes::submit_marks))
        .route("/favicon.ico", get(routes::favicon))
        .fallback(err::handler404.into_service())
        .layer(ServiceBuilder::new().layer(Extension(state)))
}
