//! HTTP inquiry form server.
//!
//! Serves the form page and a small JSON API on top of
//! [`ProcessInquiryUseCase`]. Credential handling stays with the caller: the
//! server asks an [`InquiryBackend`] for a use case per request, passing the
//! API key the form carried, if any.

mod pages;
mod progress;
mod routes;

pub use progress::LogProgress;
pub use routes::config_routes;

use crate::output::status::SystemStatus;
use actix_web::{App, HttpServer, middleware::Logger, web};
use crew_application::ProcessInquiryUseCase;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// The use case could not be assembled (usually: no API key)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct SetupError(pub String);

/// Supplies use cases to the HTTP handlers
pub trait InquiryBackend: Send + Sync {
    /// Use case bound to `api_key`, or to the server's own credential when
    /// `None`
    fn use_case(&self, api_key: Option<&str>) -> Result<Arc<ProcessInquiryUseCase>, SetupError>;

    fn status(&self) -> SystemStatus;

    /// Company preselected in the form
    fn default_company(&self) -> &str;
}

/// Shared handler state
pub struct AppState {
    pub backend: Arc<dyn InquiryBackend>,
}

/// Bind and run until the process is stopped
pub async fn serve(backend: Arc<dyn InquiryBackend>, host: &str, port: u16) -> std::io::Result<()> {
    let state = web::Data::new(AppState { backend });

    info!("Inquiry form listening on http://{}:{}", host, port);
    println!("Inquiry form: http://{}:{}/", host, port);

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(Logger::default())
            .configure(config_routes)
    })
    .bind((host, port))?
    .run()
    .await
}
