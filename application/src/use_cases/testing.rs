//! Scripted test doubles for the use case tests.

use crate::ports::llm_gateway::{GatewayError, LlmGateway, LlmSession, ToolResultMessage};
use crate::ports::tool_executor::{ToolExecutorFactory, ToolExecutorPort};
use crate::ports::tool_schema::ToolSchemaPort;
use async_trait::async_trait;
use crew_domain::{
    ContentBlock, LlmResponse, Model, StopReason, ToolCall, ToolDefinition, ToolError, ToolHandle,
    ToolResult, ToolSpec, tool_spec_for,
};
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

/// What one session saw
#[derive(Debug, Clone, Default)]
pub(crate) struct SessionRecord {
    pub system_prompt: String,
    pub prompts: Vec<String>,
    pub tool_names: Vec<String>,
    pub tool_results: Vec<ToolResultMessage>,
    pub used_tools_api: bool,
}

/// Responses for one session, consumed in order
pub(crate) struct MockSession {
    responses: VecDeque<Result<LlmResponse, GatewayError>>,
}

impl MockSession {
    pub fn new(responses: Vec<LlmResponse>) -> Self {
        Self {
            responses: responses.into_iter().map(Ok).collect(),
        }
    }

    pub fn failing(error: GatewayError) -> Self {
        Self {
            responses: VecDeque::from([Err(error)]),
        }
    }
}

struct ScriptedSession {
    model: Model,
    responses: Mutex<VecDeque<Result<LlmResponse, GatewayError>>>,
    records: Arc<Mutex<Vec<SessionRecord>>>,
    index: usize,
}

impl ScriptedSession {
    fn next(&self) -> Result<LlmResponse, GatewayError> {
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(GatewayError::Other("No more responses".to_string())))
    }

    fn record(&self, f: impl FnOnce(&mut SessionRecord)) {
        f(&mut self.records.lock().unwrap()[self.index]);
    }
}

#[async_trait]
impl LlmSession for ScriptedSession {
    fn model(&self) -> &Model {
        &self.model
    }

    async fn send(&self, content: &str) -> Result<String, GatewayError> {
        self.record(|r| r.prompts.push(content.to_string()));
        self.next().map(|r| r.text_content())
    }

    async fn send_with_tools(
        &self,
        content: &str,
        tools: &[serde_json::Value],
    ) -> Result<LlmResponse, GatewayError> {
        self.record(|r| {
            r.prompts.push(content.to_string());
            r.used_tools_api = true;
            r.tool_names = tools
                .iter()
                .filter_map(|t| t["function"]["name"].as_str().map(String::from))
                .collect();
        });
        self.next()
    }

    async fn send_tool_results(
        &self,
        results: &[ToolResultMessage],
    ) -> Result<LlmResponse, GatewayError> {
        self.record(|r| r.tool_results.extend_from_slice(results));
        self.next()
    }
}

/// Hands out one scripted session per `create_session_with_system_prompt`
pub(crate) struct MockGateway {
    scripts: Mutex<VecDeque<MockSession>>,
    records: Arc<Mutex<Vec<SessionRecord>>>,
}

impl MockGateway {
    pub fn new(sessions: Vec<MockSession>) -> Self {
        Self {
            scripts: Mutex::new(sessions.into()),
            records: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn recorded(&self) -> Vec<SessionRecord> {
        self.records.lock().unwrap().clone()
    }
}

#[async_trait]
impl LlmGateway for MockGateway {
    async fn create_session_with_system_prompt(
        &self,
        model: &Model,
        system_prompt: &str,
    ) -> Result<Box<dyn LlmSession>, GatewayError> {
        let script = self
            .scripts
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| GatewayError::Other("No session scripted".to_string()))?;

        let mut records = self.records.lock().unwrap();
        records.push(SessionRecord {
            system_prompt: system_prompt.to_string(),
            ..Default::default()
        });

        Ok(Box::new(ScriptedSession {
            model: model.clone(),
            responses: Mutex::new(script.responses),
            records: self.records.clone(),
            index: records.len() - 1,
        }))
    }
}

/// Minimal function-schema converter
pub(crate) struct MockToolSchema;

impl ToolSchemaPort for MockToolSchema {
    fn tool_to_schema(&self, tool: &ToolDefinition) -> serde_json::Value {
        serde_json::json!({
            "type": "function",
            "function": { "name": tool.name, "description": tool.description }
        })
    }

    fn all_tools_schema(&self, spec: &ToolSpec) -> Vec<serde_json::Value> {
        let mut tools: Vec<_> = spec.all().collect();
        tools.sort_by_key(|t| &t.name);
        tools.into_iter().map(|t| self.tool_to_schema(t)).collect()
    }
}

type ExecutionLog = Arc<Mutex<Vec<(String, Option<String>)>>>;

struct MockToolExecutor {
    spec: ToolSpec,
    handles: Vec<ToolHandle>,
    log: ExecutionLog,
}

#[async_trait]
impl ToolExecutorPort for MockToolExecutor {
    fn tool_spec(&self) -> &ToolSpec {
        &self.spec
    }

    async fn execute(&self, call: &ToolCall) -> ToolResult {
        let Some(name) = self.spec.resolve(&call.tool_name) else {
            return ToolResult::failure(&call.tool_name, ToolError::not_found(&call.tool_name));
        };
        let bound_url = self
            .handles
            .iter()
            .find(|h| h.name() == name)
            .and_then(|h| h.bound_url.clone());
        self.log.lock().unwrap().push((name.to_string(), bound_url));
        ToolResult::success(name, "mock page content")
    }
}

/// Builds executors that only succeed for the task's own tools
pub(crate) struct MockToolFactory {
    log: ExecutionLog,
}

impl MockToolFactory {
    pub fn new() -> Self {
        Self {
            log: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn executed(&self) -> Vec<String> {
        self.log.lock().unwrap().iter().map(|(n, _)| n.clone()).collect()
    }

    pub fn bound_urls(&self) -> Vec<Option<String>> {
        self.log.lock().unwrap().iter().map(|(_, u)| u.clone()).collect()
    }
}

impl ToolExecutorFactory for MockToolFactory {
    fn for_handles(&self, handles: &[ToolHandle]) -> Arc<dyn ToolExecutorPort> {
        Arc::new(MockToolExecutor {
            spec: tool_spec_for(handles),
            handles: handles.to_vec(),
            log: self.log.clone(),
        })
    }
}

pub(crate) fn text_response(text: &str) -> LlmResponse {
    LlmResponse {
        content: vec![ContentBlock::Text(text.to_string())],
        stop_reason: Some(StopReason::EndTurn),
        model: Some("test-model".to_string()),
    }
}

pub(crate) fn tool_use_response(tool_name: &str, native_id: &str) -> LlmResponse {
    LlmResponse {
        content: vec![ContentBlock::ToolUse {
            id: native_id.to_string(),
            name: tool_name.to_string(),
            input: HashMap::new(),
        }],
        stop_reason: Some(StopReason::ToolUse),
        model: Some("test-model".to_string()),
    }
}
