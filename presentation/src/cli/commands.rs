//! CLI command definitions

use clap::{Parser, ValueEnum};
use crew_domain::OutputFormat as DomainOutputFormat;
use std::path::PathBuf;

/// Output format for inquiry results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Response plus customer, contact and company details
    Full,
    /// Only the final response
    Result,
    /// JSON report
    Json,
}

impl From<OutputFormat> for DomainOutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Full => DomainOutputFormat::Full,
            OutputFormat::Result => DomainOutputFormat::Result,
            OutputFormat::Json => DomainOutputFormat::Json,
        }
    }
}

/// CLI arguments for support-crew
#[derive(Parser, Debug)]
#[command(name = "support-crew")]
#[command(author, version, about = "Multi-agent customer support - a support agent drafts, a QA specialist reviews")]
#[command(long_about = r#"
support-crew answers a customer inquiry with two cooperating agents:

1. A Senior Support Agent drafts a reply, reading the company documentation
2. A Support QA Specialist reviews the draft and returns the final answer

The agents represent a company: CrewAI (default), OpenAI, Microsoft, Google,
Amazon, or any custom name.

Configuration files are loaded from (in priority order):
1. SUPPORT_CREW_* environment variables
2. --config <path>             Explicit config file
3. ./support-crew.toml         Project-level config
4. ~/.config/support-crew/config.toml   Global config

Example:
  support-crew --customer DeepLearningAI --person "Andrew Ng" \
      --inquiry "How do I add memory to my crew?"
  support-crew --form
  support-crew --serve --port 8080
"#)]
pub struct Cli {
    /// Customer or company making the inquiry
    #[arg(long, value_name = "NAME")]
    pub customer: Option<String>,

    /// Contact person at the customer
    #[arg(long, value_name = "NAME")]
    pub person: Option<String>,

    /// The inquiry text
    #[arg(long, value_name = "TEXT")]
    pub inquiry: Option<String>,

    /// Company the agents represent (known name or any custom name)
    #[arg(long, value_name = "COMPANY")]
    pub company: Option<String>,

    /// API key (overrides config and environment)
    #[arg(long, value_name = "KEY")]
    pub api_key: Option<String>,

    /// Model to use
    #[arg(short, long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Fill in the inquiry interactively
    #[arg(short, long, conflicts_with = "serve")]
    pub form: bool,

    /// Serve the inquiry form over HTTP
    #[arg(long)]
    pub serve: bool,

    /// Bind address for --serve
    #[arg(long, value_name = "HOST", requires = "serve")]
    pub host: Option<String>,

    /// Port for --serve
    #[arg(long, value_name = "PORT", requires = "serve")]
    pub port: Option<u16>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Write daily rolling log files to this directory
    #[arg(long, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Show system status and exit
    #[arg(long)]
    pub status: bool,
}

impl Cli {
    /// Whether any of the one-shot inquiry flags was given
    pub fn has_inquiry_args(&self) -> bool {
        self.customer.is_some() || self.person.is_some() || self.inquiry.is_some()
    }
}
