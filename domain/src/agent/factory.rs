//! Agent factory: the responder and the quality-assurance reviewer

use super::descriptor::AgentDescriptor;
use crate::company::CompanyProfile;

/// Role of the agent that drafts the answer
pub const RESPONDER_ROLE: &str = "Senior Support Agent Representative";
/// Goal of the agent that drafts the answer
pub const RESPONDER_GOAL: &str = "Be the most friendly and helpful support agent in your team";
/// Prefix of the reviewer role; the company name follows
pub const QA_ROLE_PREFIX: &str = "Support Quality Assurance Specialist at";

/// The two agents of a support crew
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupportAgents {
    /// Drafts the answer to the customer
    pub responder: AgentDescriptor,
    /// Reviews and finalizes the draft
    pub reviewer: AgentDescriptor,
}

impl SupportAgents {
    pub fn as_vec(&self) -> Vec<AgentDescriptor> {
        vec![self.responder.clone(), self.reviewer.clone()]
    }
}

/// Build both agents for `company`.
///
/// Company data is baked in now; `{customer}` stays as a placeholder until
/// kickoff.
pub fn create_agents(company: &str) -> SupportAgents {
    let profile = CompanyProfile::resolve(company);

    let responder = AgentDescriptor::new(
        RESPONDER_ROLE,
        RESPONDER_GOAL,
        format!(
            "You work at {name} ({website}) and you are a senior support agent. \
             You are known for your friendly and helpful nature. You are working on providing support to {{customer}}, \
             a super important customer for your company. \
             You need to make sure that you provide the best possible support to {{customer}}. \
             Make sure to provide full complete answers, and make no assumptions. \
             Use {docs} and other resources to provide accurate information.",
            name = company,
            website = profile.website,
            docs = profile.docs_url,
        ),
    )
    .with_delegation(false)
    .with_verbose(true);

    let reviewer = AgentDescriptor::new(
        format!("{} {}", QA_ROLE_PREFIX, company),
        format!(
            "Get recognition for providing the best support quality assurance at {}",
            company
        ),
        format!(
            "You work at {name} ({website}) and are now working with your team \
             on a request from {{customer}} ensuring that the support representative is providing the best support possible.\n\
             You need to make sure that the support representative is following the best practices and guidelines \
             for providing support. It is providing complete answers without any assumptions. \
             Ensure responses align with {name}'s standards and values. \
             Check facts against {docs} when in doubt.",
            name = company,
            website = profile.website,
            docs = profile.docs_url,
        ),
    )
    .with_verbose(true);

    SupportAgents {
        responder,
        reviewer,
    }
}
