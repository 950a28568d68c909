//! Reedline-driven inquiry form.
//!
//! Asks for the company, customer, contact person and inquiry, then runs
//! the crew. Blank fields refuse the submission before anything runs.
//! When no API key is configured the form asks for one first.

use super::fields::{CompanyChoice, FormAnswers, parse_api_key, parse_company_choice};
use crate::config::{FormConfig, OutputConfig};
use crate::output::console::ConsoleFormatter;
use crate::output::formatter::OutputFormatter;
use crate::progress::reporter::{ProgressReporter, SimpleProgress};
use crate::server::InquiryBackend;
use colored::Colorize;
use crew_application::{InquiryRequest, NoProgress, ProcessInquiryError, ProcessInquiryUseCase};
use crew_domain::CompanySelection;
use reedline::{DefaultPrompt, DefaultPromptSegment, Reedline, Signal};
use std::io;
use std::sync::Arc;
use tracing::debug;

pub struct InquiryForm {
    backend: Arc<dyn InquiryBackend>,
    output: OutputConfig,
    config: FormConfig,
}

impl InquiryForm {
    pub fn new(backend: Arc<dyn InquiryBackend>, output: OutputConfig, config: FormConfig) -> Self {
        Self {
            backend,
            output,
            config,
        }
    }

    /// Run the form until the user declines another inquiry or hits Ctrl-D
    pub async fn run(&self) -> io::Result<()> {
        let mut editor = Reedline::create();
        self.print_welcome();

        let Some(use_case) = self.connect(&mut editor)? else {
            println!("Bye!");
            return Ok(());
        };

        loop {
            let Some(answers) = self.collect(&mut editor)? else {
                println!("Bye!");
                return Ok(());
            };

            self.submit(&use_case, answers.into_request()).await;

            match read_field(&mut editor, "Process another inquiry? [y/N]")? {
                Some(answer) if answer.trim().eq_ignore_ascii_case("y") => println!(),
                _ => {
                    println!("Bye!");
                    return Ok(());
                }
            }
        }
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│        Multi-Agent Customer Support         │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!("Support Agent handles the inquiry, QA Agent reviews the reply.");
        println!("Press Ctrl-D to leave.");
        println!();
    }

    /// Whether the key has to be typed into the form
    fn needs_api_key(&self) -> bool {
        !self.backend.status().api_configured
    }

    /// Obtain the use case, asking for an API key when none is configured.
    /// `None` when the user aborts or the key is rejected.
    fn connect(&self, editor: &mut Reedline) -> io::Result<Option<Arc<ProcessInquiryUseCase>>> {
        let mut manual_key = None;
        if self.needs_api_key() {
            println!("{}", "API Configuration".cyan().bold());
            println!("No OpenAI API key found in the config or environment.");
            loop {
                let Some(answer) = read_field(editor, "OpenAI API Key")? else {
                    return Ok(None);
                };
                match parse_api_key(&answer) {
                    Some(key) => {
                        manual_key = Some(key);
                        break;
                    }
                    None => println!("{}", "Please enter your OpenAI API key".yellow()),
                }
            }
            println!();
        }

        Ok(self.use_case_for(manual_key.as_deref()))
    }

    fn use_case_for(&self, manual_key: Option<&str>) -> Option<Arc<ProcessInquiryUseCase>> {
        match self.backend.use_case(manual_key) {
            Ok(use_case) => Some(use_case),
            Err(e) => {
                eprintln!("{}", format!("Error setting up OpenAI API: {}", e).red());
                None
            }
        }
    }

    /// Ask every field. `None` when the user aborts.
    fn collect(&self, editor: &mut Reedline) -> io::Result<Option<FormAnswers>> {
        println!("{}", "Select Company".cyan().bold());
        for (i, option) in CompanySelection::options().iter().enumerate() {
            let marker = if *option == self.config.default_company { " (default)" } else { "" };
            println!("  {}. {}{}", i + 1, option, marker);
        }

        let Some(choice) = read_field(editor, "Company")? else {
            return Ok(None);
        };
        let company = match parse_company_choice(&choice, &self.config.default_company) {
            CompanyChoice::Selected(selection) => selection,
            CompanyChoice::NeedsCustomName => {
                let Some(name) = read_field(editor, "Custom company name (e.g. TechCorp Inc.)")? else {
                    return Ok(None);
                };
                CompanySelection::Custom(name.trim().to_string())
            }
        };

        println!();
        println!("{}", "Customer Inquiry".cyan().bold());
        let Some(customer) = read_field(editor, "Customer/Company Name")? else {
            return Ok(None);
        };
        let Some(person) = read_field(editor, "Contact Person")? else {
            return Ok(None);
        };
        let Some(inquiry) = read_field(editor, "Customer Inquiry")? else {
            return Ok(None);
        };

        Ok(Some(FormAnswers {
            company,
            customer,
            person,
            inquiry,
        }))
    }

    async fn submit(&self, use_case: &ProcessInquiryUseCase, request: InquiryRequest) {
        if request.inputs.validate().is_err() {
            println!("{}", ConsoleFormatter::format_refusal());
            return;
        }

        println!();
        let result = if self.output.quiet {
            use_case.execute(&request, &NoProgress).await
        } else if self.output.color {
            let progress = ProgressReporter::new().with_verbose(self.config.verbose);
            use_case.execute(&request, &progress).await
        } else {
            use_case.execute(&request, &SimpleProgress).await
        };

        match result {
            Ok(report) => {
                debug!("Inquiry for {} answered", report.company);
                println!();
                println!("{}", ConsoleFormatter.render(&report, self.output.format));
            }
            Err(ProcessInquiryError::MissingField(_)) => {
                println!("{}", ConsoleFormatter::format_refusal());
            }
            Err(e) => {
                eprintln!("{}", ConsoleFormatter::format_error(&e.to_string()));
            }
        }
        println!();
    }
}

/// Read one line. `None` on Ctrl-C or Ctrl-D.
fn read_field(editor: &mut Reedline, label: &str) -> io::Result<Option<String>> {
    let prompt = DefaultPrompt::new(
        DefaultPromptSegment::Basic(label.to_string()),
        DefaultPromptSegment::Empty,
    );

    match editor.read_line(&prompt)? {
        Signal::Success(line) => Ok(Some(line)),
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::status::SystemStatus;
    use crate::server::SetupError;
    use std::sync::Mutex;

    /// Backend that records the key it was asked for and refuses to build
    struct KeyRecorder {
        configured: bool,
        requested: Mutex<Vec<Option<String>>>,
    }

    impl InquiryBackend for KeyRecorder {
        fn use_case(&self, api_key: Option<&str>) -> Result<Arc<ProcessInquiryUseCase>, SetupError> {
            self.requested.lock().unwrap().push(api_key.map(str::to_string));
            Err(SetupError("Missing API key: set OPENAI_API_KEY".to_string()))
        }

        fn status(&self) -> SystemStatus {
            SystemStatus {
                agents: 2,
                tools: 3,
                memory: true,
                api_configured: self.configured,
                model: "gpt-4o-mini".to_string(),
            }
        }

        fn default_company(&self) -> &str {
            "CrewAI"
        }
    }

    fn form(configured: bool) -> (InquiryForm, Arc<KeyRecorder>) {
        let backend = Arc::new(KeyRecorder {
            configured,
            requested: Mutex::new(Vec::new()),
        });
        let form = InquiryForm::new(
            backend.clone(),
            OutputConfig::default(),
            FormConfig {
                default_company: "CrewAI".to_string(),
                verbose: false,
            },
        );
        (form, backend)
    }

    #[test]
    fn test_asks_for_key_only_without_configured_credential() {
        assert!(form(false).0.needs_api_key());
        assert!(!form(true).0.needs_api_key());
    }

    #[test]
    fn test_typed_key_reaches_backend() {
        let (form, backend) = form(false);
        assert!(form.use_case_for(Some("sk-typed-123456")).is_none());
        assert_eq!(
            *backend.requested.lock().unwrap(),
            vec![Some("sk-typed-123456".to_string())]
        );
    }
}
