//! Run Crew use case.
//!
//! Executes the tasks of a [`Crew`] one after another against the model.
//!
//! For every task:
//! 1. Fill the request inputs into the task and its agent
//! 2. Open a session with the agent's system prompt
//! 3. Send the task prompt, with explicit context and crew memory
//! 4. If the task has tools, run the native tool-use loop until the model
//!    answers with text
//!
//! There is no retry. The first error aborts the run.

use crate::config::ExecutionParams;
use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::llm_gateway::{GatewayError, LlmGateway, LlmSession, ToolResultMessage};
use crate::ports::progress::ProgressNotifier;
use crate::ports::tool_executor::ToolExecutorFactory;
use crate::ports::tool_schema::ToolSchemaPort;
use crate::use_cases::tool_helpers::tool_args_preview;
use crew_domain::core::string::truncate;
use crew_domain::{
    Crew, CrewMemory, CrewOutput, CrewPromptTemplate, DomainError, InquiryInputs, LlmResponse,
    TaskDescriptor, TaskOutput,
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur while running a crew.
#[derive(Error, Debug)]
pub enum RunCrewError {
    #[error("Invalid crew: {0}")]
    InvalidCrew(#[from] DomainError),

    #[error("Gateway error: {0}")]
    GatewayError(#[from] GatewayError),

    #[error("Task '{task}' exceeded the limit of {max} tool turns")]
    ToolTurnsExceeded { task: String, max: usize },

    #[error("No response from model for task '{task}'")]
    EmptyResponse { task: String },
}

pub struct RunCrewUseCase {
    gateway: Arc<dyn LlmGateway>,
    tools: Arc<dyn ToolExecutorFactory>,
    tool_schema: Arc<dyn ToolSchemaPort>,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl Clone for RunCrewUseCase {
    fn clone(&self) -> Self {
        Self {
            gateway: self.gateway.clone(),
            tools: self.tools.clone(),
            tool_schema: self.tool_schema.clone(),
            conversation_logger: self.conversation_logger.clone(),
        }
    }
}

impl RunCrewUseCase {
    pub fn new(
        gateway: Arc<dyn LlmGateway>,
        tools: Arc<dyn ToolExecutorFactory>,
        tool_schema: Arc<dyn ToolSchemaPort>,
    ) -> Self {
        Self {
            gateway,
            tools,
            tool_schema,
            conversation_logger: Arc::new(NoConversationLogger),
        }
    }

    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    /// Run every task of `crew` in order and collect their outputs.
    pub async fn kickoff(
        &self,
        crew: &Crew,
        inputs: &InquiryInputs,
        params: &ExecutionParams,
        progress: &dyn ProgressNotifier,
    ) -> Result<CrewOutput, RunCrewError> {
        crew.validate()?;

        let total = crew.tasks.len();
        info!(
            "Kicking off crew: {} agents, {} tasks, {} process, model {}",
            crew.agents.len(),
            total,
            crew.process,
            params.model
        );

        let mut memory = CrewMemory::new();

        for (index, template) in crew.tasks.iter().enumerate() {
            let task = template.interpolate(inputs);
            progress.on_task_start(&task.name, &task.agent.role, index + 1, total);

            let system_prompt = CrewPromptTemplate::agent_system(&task.agent, task.has_tools());
            let prompt = {
                let context = memory.context_for(&task);
                let recalled = if crew.memory {
                    memory.recall_for(&task)
                } else {
                    Vec::new()
                };
                CrewPromptTemplate::task_prompt(&task, &context, &recalled)
            };

            if crew.verbose {
                info!("[{}] working on task '{}'", task.agent.role, task.name);
            }
            self.conversation_logger.log(ConversationEvent::new(
                "task_started",
                serde_json::json!({
                    "task": task.name,
                    "agent": task.agent.role,
                    "model": params.model.to_string(),
                    "system_prompt": system_prompt,
                    "prompt": prompt,
                }),
            ));

            let session = self
                .gateway
                .create_session_with_system_prompt(&params.model, &system_prompt)
                .await?;

            let answer = if task.has_tools() {
                self.run_tool_loop(session.as_ref(), &task, &prompt, params.max_tool_turns, progress)
                    .await?
            } else {
                let text = session.send(&prompt).await?;
                self.log_response(&task, &LlmResponse::from_text(text.clone()));
                text
            };

            let answer = answer.trim().to_string();
            if answer.is_empty() {
                return Err(RunCrewError::EmptyResponse { task: task.name });
            }

            if crew.verbose {
                info!(
                    "[{}] finished '{}': {}",
                    task.agent.role,
                    task.name,
                    truncate(&answer, 120)
                );
            }
            self.conversation_logger.log(ConversationEvent::new(
                "task_completed",
                serde_json::json!({
                    "task": task.name,
                    "agent": task.agent.role,
                    "bytes": answer.len(),
                    "output": answer,
                }),
            ));
            progress.on_task_complete(&task.name, index + 1, total);

            memory.record(TaskOutput {
                task_name: task.name,
                agent_role: task.agent.role,
                description: task.description,
                raw: answer,
            });
        }

        Ok(CrewOutput::from_tasks(memory.into_outputs()))
    }

    /// Native tool-use loop for one task.
    ///
    /// Returns the text of the first response that requests no tools.
    async fn run_tool_loop(
        &self,
        session: &dyn LlmSession,
        task: &TaskDescriptor,
        prompt: &str,
        max_turns: usize,
        progress: &dyn ProgressNotifier,
    ) -> Result<String, RunCrewError> {
        let executor = self.tools.for_handles(&task.tools);
        let schemas = self.tool_schema.all_tools_schema(executor.tool_spec());
        debug!(
            "Task '{}': {} tools offered ({})",
            task.name,
            schemas.len(),
            executor.available_tools().join(", ")
        );

        let mut response = session.send_with_tools(prompt, &schemas).await?;
        let mut turn_count = 0;

        loop {
            self.log_response(task, &response);

            let tool_calls = response.tool_calls();
            if tool_calls.is_empty() {
                break;
            }

            turn_count += 1;
            if turn_count > max_turns {
                warn!(
                    "Task '{}' exceeded max_tool_turns ({})",
                    task.name, max_turns
                );
                return Err(RunCrewError::ToolTurnsExceeded {
                    task: task.name.clone(),
                    max: max_turns,
                });
            }

            let mut futures = Vec::new();
            for call in &tool_calls {
                let preview = tool_args_preview(call);
                progress.on_tool_call(&call.tool_name, &preview);
                self.conversation_logger.log(ConversationEvent::new(
                    "tool_call",
                    serde_json::json!({
                        "task": task.name,
                        "tool": call.tool_name,
                        "arguments": call.arguments,
                    }),
                ));
                futures.push(executor.execute(call));
            }

            let results: Vec<_> = futures::future::join_all(futures).await;

            let mut tool_result_messages = Vec::new();
            for (call, result) in tool_calls.iter().zip(results) {
                let is_error = !result.is_success();
                let output = result.content_for_model();

                progress.on_tool_result(&call.tool_name, !is_error);
                if is_error {
                    warn!("Tool {} failed: {}", call.tool_name, output);
                }
                self.conversation_logger.log(ConversationEvent::new(
                    "tool_result",
                    serde_json::json!({
                        "task": task.name,
                        "tool": call.tool_name,
                        "is_error": is_error,
                        "bytes": output.len(),
                        "duration_ms": result.metadata.duration_ms,
                    }),
                ));

                match call.native_id.clone() {
                    Some(native_id) => tool_result_messages.push(ToolResultMessage {
                        tool_use_id: native_id,
                        tool_name: call.tool_name.clone(),
                        output,
                        is_error,
                    }),
                    None => warn!(
                        "Missing native_id for tool call '{}'; skipping result.",
                        call.tool_name
                    ),
                }
            }

            debug!(
                "Task '{}' tool turn {}/{}: sending {} tool results",
                task.name,
                turn_count,
                max_turns,
                tool_result_messages.len()
            );

            response = session.send_tool_results(&tool_result_messages).await?;
        }

        Ok(response.text_content())
    }

    fn log_response(&self, task: &TaskDescriptor, response: &LlmResponse) {
        self.conversation_logger.log(ConversationEvent::new(
            "llm_response",
            serde_json::json!({
                "task": task.name,
                "model": response.model,
                "stop_reason": response.stop_reason,
                "text": response.text_content(),
                "tool_calls": response.tool_calls().iter().map(|c| &c.tool_name).collect::<Vec<_>>(),
            }),
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::progress::NoProgress;
    use crate::use_cases::testing::*;
    use crew_domain::{AgentDescriptor, QUALITY_ASSURANCE_REVIEW, ToolHandle, create_agents, create_tasks};

    fn support_crew(company: &str) -> Crew {
        let agents = create_agents(company);
        let tasks = create_tasks(&agents.responder, &agents.reviewer, company);
        Crew::new(agents.as_vec(), tasks.into_vec())
    }

    fn inputs() -> InquiryInputs {
        InquiryInputs::new("DeepLearningAI", "Andrew Ng", "How do I add memory to my crew?")
    }

    fn use_case(gateway: Arc<MockGateway>, tools: Arc<MockToolFactory>) -> RunCrewUseCase {
        RunCrewUseCase::new(gateway, tools, Arc::new(MockToolSchema))
    }

    #[tokio::test]
    async fn test_two_tasks_with_explicit_context() {
        let gateway = Arc::new(MockGateway::new(vec![
            MockSession::new(vec![text_response("Draft: set memory=True.")]),
            MockSession::new(vec![text_response("Final: set memory=True on the Crew.")]),
        ]));
        let tools = Arc::new(MockToolFactory::new());
        let crew = support_crew("CrewAI");

        let output = use_case(gateway.clone(), tools)
            .kickoff(&crew, &inputs(), &ExecutionParams::default(), &NoProgress)
            .await
            .unwrap();

        assert_eq!(output.raw, "Final: set memory=True on the Crew.");
        assert_eq!(output.tasks_output.len(), 2);
        assert_eq!(output.tasks_output[0].raw, "Draft: set memory=True.");

        let calls = gateway.recorded();
        assert_eq!(calls.len(), 2);
        // inputs filled into the agent and the task
        assert!(calls[0].system_prompt.contains("support to DeepLearningAI"));
        assert!(calls[0].prompts[0].contains("Andrew Ng from DeepLearningAI"));
        // the draft reaches the reviewer as context
        assert!(calls[1].prompts[0].contains("This is the context you're working with"));
        assert!(calls[1].prompts[0].contains("Draft: set memory=True."));
        assert!(!calls[1].prompts[0].contains("Previous crew activity"));
    }

    #[tokio::test]
    async fn test_tool_loop_executes_calls_and_stops_on_text() {
        let gateway = Arc::new(MockGateway::new(vec![
            MockSession::new(vec![
                tool_use_response("read_company_docs", "call_1"),
                text_response("According to the docs, use memory=True."),
            ]),
            MockSession::new(vec![text_response("Reviewed answer.")]),
        ]));
        let tools = Arc::new(MockToolFactory::new());
        let crew = support_crew("CrewAI");

        let output = use_case(gateway.clone(), tools.clone())
            .kickoff(&crew, &inputs(), &ExecutionParams::default(), &NoProgress)
            .await
            .unwrap();

        assert_eq!(
            output.tasks_output[0].raw,
            "According to the docs, use memory=True."
        );
        assert_eq!(tools.executed(), vec!["read_company_docs".to_string()]);
        assert_eq!(
            tools.bound_urls(),
            vec![Some("https://crewai.com/docs/introduction".to_string())]
        );

        let calls = gateway.recorded();
        assert_eq!(calls[0].tool_results.len(), 1);
        assert_eq!(calls[0].tool_results[0].tool_use_id, "call_1");
        assert!(!calls[0].tool_results[0].is_error);
        assert_eq!(calls[0].tool_names, vec!["read_company_docs".to_string()]);
    }

    #[tokio::test]
    async fn test_tool_failure_goes_back_to_model() {
        let gateway = Arc::new(MockGateway::new(vec![
            MockSession::new(vec![
                tool_use_response("scrape_website", "call_x"),
                text_response("I could not open that page, but here is what I know."),
            ]),
            MockSession::new(vec![text_response("Reviewed.")]),
        ]));
        let tools = Arc::new(MockToolFactory::new());
        let crew = support_crew("CrewAI");

        let output = use_case(gateway.clone(), tools)
            .kickoff(&crew, &inputs(), &ExecutionParams::default(), &NoProgress)
            .await
            .unwrap();

        assert_eq!(output.raw, "Reviewed.");
        let result = &gateway.recorded()[0].tool_results[0];
        assert!(result.is_error);
        assert!(result.output.starts_with("Error: [NOT_FOUND]"));
    }

    #[tokio::test]
    async fn test_tool_turn_limit() {
        let responses = (0..5)
            .map(|i| tool_use_response("read_company_docs", &format!("call_{i}")))
            .collect();
        let gateway = Arc::new(MockGateway::new(vec![MockSession::new(responses)]));
        let tools = Arc::new(MockToolFactory::new());
        let crew = support_crew("CrewAI");
        let params = ExecutionParams::default().with_max_tool_turns(2);

        let err = use_case(gateway, tools.clone())
            .kickoff(&crew, &inputs(), &params, &NoProgress)
            .await
            .unwrap_err();

        match err {
            RunCrewError::ToolTurnsExceeded { task, max } => {
                assert_eq!(task, "inquiry_resolution");
                assert_eq!(max, 2);
            }
            other => panic!("expected ToolTurnsExceeded, got {other:?}"),
        }
        assert_eq!(tools.executed().len(), 2);
    }

    #[tokio::test]
    async fn test_empty_answer_is_error() {
        let gateway = Arc::new(MockGateway::new(vec![MockSession::new(vec![text_response(
            "   ",
        )])]));
        let crew = support_crew("CrewAI");

        let err = use_case(gateway, Arc::new(MockToolFactory::new()))
            .kickoff(&crew, &inputs(), &ExecutionParams::default(), &NoProgress)
            .await
            .unwrap_err();

        assert!(matches!(err, RunCrewError::EmptyResponse { ref task } if task == "inquiry_resolution"));
    }

    #[tokio::test]
    async fn test_gateway_error_aborts_without_second_task() {
        let gateway = Arc::new(MockGateway::new(vec![MockSession::failing(GatewayError::Authentication(
            "invalid api key".to_string(),
        ))]));
        let crew = support_crew("CrewAI");

        let err = use_case(gateway.clone(), Arc::new(MockToolFactory::new()))
            .kickoff(&crew, &inputs(), &ExecutionParams::default(), &NoProgress)
            .await
            .unwrap_err();

        assert!(matches!(err, RunCrewError::GatewayError(GatewayError::Authentication(_))));
        assert_eq!(gateway.recorded().len(), 1);
    }

    #[tokio::test]
    async fn test_invalid_crew_makes_no_calls() {
        let gateway = Arc::new(MockGateway::new(vec![]));
        let mut crew = support_crew("CrewAI");
        crew.tasks.reverse();

        let err = use_case(gateway.clone(), Arc::new(MockToolFactory::new()))
            .kickoff(&crew, &inputs(), &ExecutionParams::default(), &NoProgress)
            .await
            .unwrap_err();

        assert!(matches!(err, RunCrewError::InvalidCrew(DomainError::UnknownContext { .. })));
        assert!(gateway.recorded().is_empty());
    }

    #[tokio::test]
    async fn test_memory_recalls_outputs_outside_context() {
        let agent = AgentDescriptor::new("Researcher", "Research", "You research.");
        let tasks = vec![
            TaskDescriptor::new("research", "Look into {inquiry}", "Notes", agent.clone()),
            TaskDescriptor::new("outline", "Outline", "Outline", agent.clone()),
            TaskDescriptor::new("write", "Write", "Answer", agent.clone())
                .with_context("outline")
                .with_tool(ToolHandle::search()),
        ];
        let gateway = Arc::new(MockGateway::new(vec![
            MockSession::new(vec![text_response("research notes")]),
            MockSession::new(vec![text_response("the outline")]),
            MockSession::new(vec![text_response("the answer")]),
        ]));

        let crew = Crew::new(vec![agent.clone()], tasks.clone());
        use_case(gateway.clone(), Arc::new(MockToolFactory::new()))
            .kickoff(&crew, &inputs(), &ExecutionParams::default(), &NoProgress)
            .await
            .unwrap();

        let last = &gateway.recorded()[2].prompts[0];
        let context_at = last.find("the outline").unwrap();
        let memory_at = last.find("Previous crew activity").unwrap();
        assert!(context_at < memory_at);
        assert!(last.contains("research notes"));

        // memory off: only explicit context
        let gateway = Arc::new(MockGateway::new(vec![
            MockSession::new(vec![text_response("research notes")]),
            MockSession::new(vec![text_response("the outline")]),
            MockSession::new(vec![text_response("the answer")]),
        ]));
        let crew = Crew::new(vec![agent], tasks).with_memory(false);
        use_case(gateway.clone(), Arc::new(MockToolFactory::new()))
            .kickoff(&crew, &inputs(), &ExecutionParams::default(), &NoProgress)
            .await
            .unwrap();

        let last = &gateway.recorded()[2].prompts[0];
        assert!(last.contains("the outline"));
        assert!(!last.contains("research notes"));
    }

    #[derive(Default)]
    struct RecordingProgress {
        started: std::sync::Mutex<Vec<(String, usize, usize)>>,
        completed: std::sync::Mutex<Vec<(usize, usize)>>,
    }

    impl ProgressNotifier for RecordingProgress {
        fn on_stage(&self, _stage: crew_domain::ProgressStage) {}
        fn on_error(&self, _message: &str) {}

        fn on_task_start(&self, task_name: &str, _agent_role: &str, index: usize, total: usize) {
            self.started.lock().unwrap().push((task_name.to_string(), index, total));
        }

        fn on_task_complete(&self, _task_name: &str, index: usize, total: usize) {
            self.completed.lock().unwrap().push((index, total));
        }
    }

    #[tokio::test]
    async fn test_task_positions_are_one_based() {
        let gateway = Arc::new(MockGateway::new(vec![
            MockSession::new(vec![text_response("Draft.")]),
            MockSession::new(vec![text_response("Final.")]),
        ]));
        let progress = RecordingProgress::default();

        use_case(gateway, Arc::new(MockToolFactory::new()))
            .kickoff(&support_crew("CrewAI"), &inputs(), &ExecutionParams::default(), &progress)
            .await
            .unwrap();

        assert_eq!(
            *progress.started.lock().unwrap(),
            vec![
                ("inquiry_resolution".to_string(), 1, 2),
                (QUALITY_ASSURANCE_REVIEW.to_string(), 2, 2),
            ]
        );
        assert_eq!(*progress.completed.lock().unwrap(), vec![(1, 2), (2, 2)]);
    }

    #[tokio::test]
    async fn test_review_task_sent_without_tools() {
        let gateway = Arc::new(MockGateway::new(vec![
            MockSession::new(vec![text_response("Draft.")]),
            MockSession::new(vec![text_response("Final.")]),
        ]));
        let crew = support_crew("OpenAI");

        use_case(gateway.clone(), Arc::new(MockToolFactory::new()))
            .kickoff(&crew, &inputs(), &ExecutionParams::default(), &NoProgress)
            .await
            .unwrap();

        let calls = gateway.recorded();
        assert!(calls[0].used_tools_api);
        assert!(!calls[1].used_tools_api);
        assert!(calls[1].system_prompt.starts_with("You are Support Quality Assurance Specialist at OpenAI."));
        assert_eq!(crew.tasks[1].name, QUALITY_ASSURANCE_REVIEW);
    }
}
