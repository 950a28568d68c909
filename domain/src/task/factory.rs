//! Task factory for the two-step support flow

use super::descriptor::TaskDescriptor;
use crate::agent::AgentDescriptor;
use crate::tool::agent_tools;

pub const INQUIRY_RESOLUTION: &str = "inquiry_resolution";
pub const QUALITY_ASSURANCE_REVIEW: &str = "quality_assurance_review";

/// The two tasks of a support run, in execution order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupportTasks {
    pub inquiry_resolution: TaskDescriptor,
    pub quality_assurance_review: TaskDescriptor,
}

impl SupportTasks {
    pub fn into_vec(self) -> Vec<TaskDescriptor> {
        vec![self.inquiry_resolution, self.quality_assurance_review]
    }
}

/// Build the resolution and review tasks for `company`.
///
/// The review task lists the resolution task as context, so the draft
/// reaches the reviewer verbatim.
pub fn create_tasks(
    responder: &AgentDescriptor,
    reviewer: &AgentDescriptor,
    company: &str,
) -> SupportTasks {
    let tools = agent_tools(company);

    let inquiry_resolution = TaskDescriptor::new(
        INQUIRY_RESOLUTION,
        format!(
            "{{customer}} just reached out with a super important task: {{inquiry}}\n\n\
             {{person}} from {{customer}} is asking for help with {{inquiry}}\n\
             Make sure to use everything you know to provide the best possible support.\n\
             You must strive to provide a complete and accurate response to the customer's inquiry. \
             Use {company}'s documentation and resources when available."
        ),
        "A detailed, informative response to the customer's inquiry that addresses all aspects of their question.\n\
         The response should include references to everything you used to find the answer, \
         including external data or solutions.\n\
         Ensure the answer is complete, leaving no questions unanswered, \
         and maintain a helpful and friendly tone throughout the response.",
        responder.clone(),
    )
    .with_tool(tools.docs_scrape);

    let quality_assurance_review = TaskDescriptor::new(
        QUALITY_ASSURANCE_REVIEW,
        format!(
            "Review the response drafted by the Senior Support Representative for {{customer}}'s inquiry \
             and ensure that the answer is comprehensive, accurate, and adheres to high quality standards \
             for customer support at {company}.\n\
             Verify that all parts of the customer's query has been addressed thoroughly \
             with the helpful and friendly tone.\n\
             Check for references and sources used to find the answer, and ensure that the response \
             is well-supported and leaves no questions unanswered. \
             Ensure the response aligns with {company}'s brand and values."
        ),
        format!(
            "A final, detailed and informative response to the customer's inquiry that is complete, accurate, \
             and adheres to high quality standards for customer support.\n\
             This response should fully address the customer's inquiry, \
             incorporating all relevant feedbacks and improvements.\n\
             Do not be too formal, {company} is a modern and approachable company, \
             so keep it casual and friendly. \
             But maintain a professional tone and ensure that the response is complete and accurate."
        ),
        reviewer.clone(),
    )
    .with_context(INQUIRY_RESOLUTION);

    SupportTasks {
        inquiry_resolution,
        quality_assurance_review,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::create_agents;
    use crate::tool::{ToolHandle, ToolKind};

    fn tasks_for(company: &str) -> SupportTasks {
        let agents = create_agents(company);
        create_tasks(&agents.responder, &agents.reviewer, company)
    }

    #[test]
    fn test_resolution_task() {
        let tasks = tasks_for("CrewAI");
        let task = &tasks.inquiry_resolution;

        assert_eq!(task.name, INQUIRY_RESOLUTION);
        assert!(task.description.starts_with("{customer} just reached out"));
        assert!(task.description.contains("{person} from {customer}"));
        assert!(task.description.contains("Use CrewAI's documentation"));
        assert!(task.expected_output.starts_with("A detailed, informative response"));
        assert!(task.context.is_empty());
        assert_eq!(
            task.tools,
            vec![ToolHandle::scoped_scrape("https://crewai.com/docs/introduction")]
        );
        assert_eq!(task.agent.role, "Senior Support Agent Representative");
    }

    #[test]
    fn test_review_task() {
        let tasks = tasks_for("Amazon");
        let task = &tasks.quality_assurance_review;

        assert_eq!(task.name, QUALITY_ASSURANCE_REVIEW);
        assert!(task.description.contains("{customer}'s inquiry"));
        assert!(task.description.contains("customer support at Amazon"));
        assert!(task.expected_output.contains("Amazon is a modern and approachable company"));
        assert!(task.tools.is_empty());
        assert_eq!(task.context, vec![INQUIRY_RESOLUTION.to_string()]);
        assert_eq!(task.agent.role, "Support Quality Assurance Specialist at Amazon");
    }

    #[test]
    fn test_unknown_company_docs_tool() {
        let tasks = tasks_for("Foo Bar");
        let docs = &tasks.inquiry_resolution.tools[0];
        assert_eq!(docs.kind, ToolKind::ScopedScrape);
        assert_eq!(docs.bound_url.as_deref(), Some("https://foobar.com/docs"));
    }

    #[test]
    fn test_into_vec_order() {
        let names: Vec<String> = tasks_for("Google").into_vec().into_iter().map(|t| t.name).collect();
        assert_eq!(names, vec![INQUIRY_RESOLUTION, QUALITY_ASSURANCE_REVIEW]);
    }
}
