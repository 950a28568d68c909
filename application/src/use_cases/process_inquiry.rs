//! Process Inquiry use case.
//!
//! The top-level request: validate the form, build the crew for the chosen
//! company, run it, and report progress at fixed milestones.
//!
//! | Stage | % | Work |
//! |-------|---|------|
//! | InitializingAgents | 20 | `create_agents(company)` |
//! | CreatingTasks | 40 | `create_tasks(...)` |
//! | SettingUpCrew | 60 | `Crew::new(...)` |
//! | ProcessingInquiry | 80 | `kickoff` |
//! | Complete | 100 | report |

use crate::config::ExecutionParams;
use crate::ports::progress::ProgressNotifier;
use crate::use_cases::run_crew::{RunCrewError, RunCrewUseCase};
use chrono::{DateTime, Utc};
use crew_domain::{
    CompanySelection, Crew, DomainError, InquiryInputs, ProgressStage, TaskOutput, create_agents,
    create_tasks,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{error, info};

#[derive(Error, Debug)]
pub enum ProcessInquiryError {
    #[error("Please fill in all fields ({0} is missing)")]
    MissingField(&'static str),

    #[error(transparent)]
    Crew(#[from] RunCrewError),
}

impl ProcessInquiryError {
    /// Whether the request was refused before any work started
    pub fn is_refusal(&self) -> bool {
        matches!(self, ProcessInquiryError::MissingField(_))
    }
}

/// One submitted inquiry form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InquiryRequest {
    #[serde(flatten)]
    pub inputs: InquiryInputs,
    /// Company the agents represent; blank means the default company
    #[serde(default)]
    pub company: String,
}

impl InquiryRequest {
    pub fn new(
        customer: impl Into<String>,
        person: impl Into<String>,
        inquiry: impl Into<String>,
        company: impl Into<String>,
    ) -> Self {
        Self {
            inputs: InquiryInputs::new(customer, person, inquiry),
            company: company.into(),
        }
    }

    /// Company name after applying the selector rules
    pub fn company_name(&self) -> String {
        CompanySelection::from_input(&self.company)
            .company_name()
            .to_string()
    }
}

/// What the user gets back
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InquiryReport {
    /// Final response text
    pub result: String,
    pub customer: String,
    pub person: String,
    pub company: String,
    pub tasks_output: Vec<TaskOutput>,
    pub completed_at: DateTime<Utc>,
}

pub struct ProcessInquiryUseCase {
    run_crew: RunCrewUseCase,
    params: ExecutionParams,
}

impl ProcessInquiryUseCase {
    pub fn new(run_crew: RunCrewUseCase, params: ExecutionParams) -> Self {
        Self { run_crew, params }
    }

    pub fn params(&self) -> &ExecutionParams {
        &self.params
    }

    pub async fn execute(
        &self,
        request: &InquiryRequest,
        progress: &dyn ProgressNotifier,
    ) -> Result<InquiryReport, ProcessInquiryError> {
        let inputs = &request.inputs;
        inputs.validate().map_err(|e| match e {
            DomainError::MissingField(field) => ProcessInquiryError::MissingField(field),
            other => ProcessInquiryError::Crew(RunCrewError::InvalidCrew(other)),
        })?;

        let company = request.company_name();
        info!(
            "Processing inquiry from {} ({}) for {}",
            inputs.customer, inputs.person, company
        );

        progress.on_stage(ProgressStage::InitializingAgents);
        let agents = create_agents(&company);

        progress.on_stage(ProgressStage::CreatingTasks);
        let tasks = create_tasks(&agents.responder, &agents.reviewer, &company);

        progress.on_stage(ProgressStage::SettingUpCrew);
        let crew = Crew::new(agents.as_vec(), tasks.into_vec())
            .with_verbose(self.params.verbose)
            .with_memory(self.params.memory);

        progress.on_stage(ProgressStage::ProcessingInquiry);
        let output = match self
            .run_crew
            .kickoff(&crew, inputs, &self.params, progress)
            .await
        {
            Ok(output) => output,
            Err(e) => {
                error!("Inquiry failed: {}", e);
                progress.on_error(&e.to_string());
                return Err(e.into());
            }
        };

        progress.on_stage(ProgressStage::Complete);

        Ok(InquiryReport {
            result: output.raw,
            customer: inputs.customer.clone(),
            person: inputs.person.clone(),
            company,
            tasks_output: output.tasks_output,
            completed_at: Utc::now(),
        })
    }
}
