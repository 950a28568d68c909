//! Tool executor for crew tasks.
//!
//! [`CrewToolExecutor`] serves the handles attached to one task. Every call
//! is resolved (aliases included), validated against its definition, then
//! dispatched to the web tool behind it. A scoped scrape always reads its
//! bound URL, whatever the model passes.

use super::web::{self, WebToolSettings};
use async_trait::async_trait;
use crew_application::ports::tool_executor::{ToolExecutorFactory, ToolExecutorPort};
use crew_domain::{
    DefaultToolValidator, ToolCall, ToolError, ToolHandle, ToolKind, ToolResult, ToolSpec,
    ToolValidator, tool_spec_for,
};
use std::sync::Arc;
use tracing::{debug, warn};

#[derive(Debug, Clone)]
pub struct CrewToolExecutor {
    tool_spec: ToolSpec,
    handles: Vec<ToolHandle>,
    settings: Arc<WebToolSettings>,
    http_client: reqwest::Client,
}

impl CrewToolExecutor {
    /// Executor with its own HTTP client
    pub fn from_handles(
        handles: &[ToolHandle],
        settings: WebToolSettings,
    ) -> Result<Self, reqwest::Error> {
        let http_client = settings.build_client()?;
        Ok(Self::with_client(handles, Arc::new(settings), http_client))
    }

    fn with_client(
        handles: &[ToolHandle],
        settings: Arc<WebToolSettings>,
        http_client: reqwest::Client,
    ) -> Self {
        Self {
            tool_spec: tool_spec_for(handles),
            handles: handles.to_vec(),
            settings,
            http_client,
        }
    }

    fn handle_for(&self, canonical: &str) -> Option<&ToolHandle> {
        self.handles.iter().find(|h| h.name() == canonical)
    }
}

#[async_trait]
impl ToolExecutorPort for CrewToolExecutor {
    fn tool_spec(&self) -> &ToolSpec {
        &self.tool_spec
    }

    async fn execute(&self, call: &ToolCall) -> ToolResult {
        let Some(canonical) = self.tool_spec.resolve(&call.tool_name) else {
            warn!("Model requested unknown tool '{}'", call.tool_name);
            return ToolResult::failure(
                &call.tool_name,
                ToolError::not_found(format!("Unknown tool: {}", call.tool_name)),
            );
        };

        let (Some(definition), Some(handle)) =
            (self.tool_spec.get(canonical), self.handle_for(canonical))
        else {
            return ToolResult::failure(canonical, ToolError::not_found(canonical));
        };

        if let Err(e) = DefaultToolValidator.validate(call, definition) {
            return ToolResult::failure(canonical, ToolError::invalid_argument(e));
        }

        debug!("Executing tool {} ({})", canonical, handle.kind);
        match handle.kind {
            ToolKind::Search => web::execute_search(&self.http_client, &self.settings, call).await,
            ToolKind::Scrape => match call.require_string("website_url") {
                Ok(url) => web::fetch_page(&self.http_client, &self.settings, canonical, url).await,
                Err(e) => ToolResult::failure(canonical, ToolError::invalid_argument(e)),
            },
            ToolKind::ScopedScrape => match handle.bound_url.as_deref() {
                Some(url) => web::fetch_page(&self.http_client, &self.settings, canonical, url).await,
                None => ToolResult::failure(
                    canonical,
                    ToolError::execution_failed("Scoped scrape tool has no URL bound"),
                ),
            },
        }
    }
}

/// Hands out [`CrewToolExecutor`]s that share one HTTP client
#[derive(Debug, Clone)]
pub struct CrewToolFactory {
    settings: Arc<WebToolSettings>,
    http_client: reqwest::Client,
}

impl CrewToolFactory {
    pub fn new(settings: WebToolSettings) -> Result<Self, reqwest::Error> {
        let http_client = settings.build_client()?;
        Ok(Self {
            settings: Arc::new(settings),
            http_client,
        })
    }
}

impl ToolExecutorFactory for CrewToolFactory {
    fn for_handles(&self, handles: &[ToolHandle]) -> Arc<dyn ToolExecutorPort> {
        Arc::new(CrewToolExecutor::with_client(
            handles,
            self.settings.clone(),
            self.http_client.clone(),
        ))
    }
}
