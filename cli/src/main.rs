//! CLI entrypoint for support-crew
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

mod backend;

use anyhow::{Context, Result};
use backend::CrewBackend;
use clap::Parser;
use crew_application::{InquiryRequest, NoProgress, ProcessInquiryError};
use crew_domain::{ConfigIssue, OutputFormat};
use crew_infrastructure::{ConfigLoader, CrewToolFactory, FileConfig, resolve_api_key};
use crew_presentation::{
    Cli, ConsoleFormatter, FormConfig, InquiryBackend, InquiryForm, OutputConfig,
    OutputFormatter, ProgressReporter, SimpleProgress,
};
use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    if cli.show_config {
        for line in ConfigLoader::describe_sources(cli.config.as_deref()) {
            println!("{}", line);
        }
        return Ok(ExitCode::SUCCESS);
    }

    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref()).context("Failed to load configuration")?
    };

    let log_dir = cli.log_dir.clone().or_else(|| config.logging.log_dir.clone());
    let _guard = init_tracing(cli.verbose, log_dir.as_deref());
    info!("Starting support-crew");

    if let Some(model) = &cli.model {
        config.llm.model = model.clone();
    }
    if !report_config_issues(&config.validate()) {
        return Ok(ExitCode::FAILURE);
    }

    let output = OutputConfig {
        format: cli
            .output
            .map(OutputFormat::from)
            .or(config.output.format)
            .unwrap_or_default(),
        color: config.output.color,
        quiet: cli.quiet,
    };
    ConsoleFormatter::set_color(output.color);

    let openai = &config.providers.openai;
    let server_key = resolve_api_key(
        cli.api_key.as_deref(),
        openai.api_key.as_deref(),
        &openai.api_key_env,
    );

    // === Dependency Injection ===
    let tools = CrewToolFactory::new(config.web_tool_settings())
        .context("Failed to build the web tool HTTP client")?;
    let backend = Arc::new(CrewBackend::new(config.clone(), server_key.clone().ok(), tools));

    if cli.status {
        println!("{}", ConsoleFormatter::format_status(&backend.status()));
        println!("{}", ConsoleFormatter::format_quick_stats());
        return Ok(ExitCode::SUCCESS);
    }

    if cli.serve {
        if let Err(e) = &server_key {
            warn!("{}; requests must carry an API key", e);
        }
        let host = cli.host.clone().unwrap_or_else(|| config.server.host.clone());
        let port = cli.port.unwrap_or(config.server.port);
        crew_presentation::serve(backend, &host, port).await?;
        return Ok(ExitCode::SUCCESS);
    }

    if cli.form {
        let form_config = FormConfig {
            default_company: config.crew.default_company.clone(),
            verbose: config.crew.verbose,
        };
        // without a configured key the form asks for one
        InquiryForm::new(backend, output, form_config).run().await?;
        return Ok(ExitCode::SUCCESS);
    }

    // One-shot inputs are checked before the credential
    let request = if cli.has_inquiry_args() {
        let request = InquiryRequest::new(
            cli.customer.clone().unwrap_or_default(),
            cli.person.clone().unwrap_or_default(),
            cli.inquiry.clone().unwrap_or_default(),
            cli.company.clone().unwrap_or_else(|| config.crew.default_company.clone()),
        );
        if request.inputs.validate().is_err() {
            eprintln!("{}", ConsoleFormatter::format_refusal());
            return Ok(ExitCode::from(2));
        }
        request
    } else {
        eprintln!("Provide --customer, --person and --inquiry, or use --form or --serve.");
        eprintln!("Run with --help for details.");
        return Ok(ExitCode::from(2));
    };

    let api_key = match server_key {
        Ok(key) => key,
        Err(e) => {
            eprintln!("Error setting up OpenAI API: {}", e);
            return Ok(ExitCode::FAILURE);
        }
    };
    let use_case = backend.build(api_key)?;

    if !output.quiet {
        println!();
        println!("+============================================================+");
        println!("|              Multi-Agent Customer Support                  |");
        println!("+============================================================+");
        println!();
        println!("Customer: {} ({})", request.inputs.customer, request.inputs.person);
        println!("Company:  {}", request.company_name());
        println!();
    }

    let result = if output.quiet {
        use_case.execute(&request, &NoProgress).await
    } else if output.color {
        let progress = ProgressReporter::new().with_verbose(config.crew.verbose);
        use_case.execute(&request, &progress).await
    } else {
        use_case.execute(&request, &SimpleProgress).await
    };

    match result {
        Ok(report) => {
            println!("{}", ConsoleFormatter.render(&report, output.format));
            Ok(ExitCode::SUCCESS)
        }
        Err(ProcessInquiryError::MissingField(_)) => {
            eprintln!("{}", ConsoleFormatter::format_refusal());
            Ok(ExitCode::from(2))
        }
        Err(e) => {
            eprintln!("{}", ConsoleFormatter::format_error(&e.to_string()));
            Ok(ExitCode::FAILURE)
        }
    }
}

/// Initialize logging based on verbosity level. `RUST_LOG` wins when set.
fn init_tracing(verbose: u8, log_dir: Option<&Path>) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    });

    let (file_layer, guard) = match log_dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "support-crew.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            (
                Some(fmt::layer().with_ansi(false).with_writer(writer)),
                Some(guard),
            )
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(file_layer)
        .init();

    guard
}

/// Print config issues. Returns false when one of them is an error.
fn report_config_issues(issues: &[ConfigIssue]) -> bool {
    let mut ok = true;
    for issue in issues {
        if issue.is_error() {
            eprintln!("Config error: {}", issue.message);
            ok = false;
        } else {
            warn!("{}", issue.message);
        }
    }
    ok
}
