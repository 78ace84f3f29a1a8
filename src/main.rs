//! Resume tailor: AI-powered resume tailoring tool

use clap::Parser;
use log::{error, info};
use resume_tailor::cli::{self, Cli, Commands, ConfigAction, InputArgs, OutputArgs};
use resume_tailor::config::{Config, OutputFormat};
use resume_tailor::error::{Result, ResumeTailorError};
use resume_tailor::input::InputManager;
use resume_tailor::llm::{GeminiClient, LanguageModel};
use resume_tailor::output::report::{self, ConsoleReporter};
use resume_tailor::pipeline::TailorPipeline;
use resume_tailor::session::{AnalysisRequest, AnalysisSession, TailoredResume};
use std::path::{Path, PathBuf};
use std::process;

const API_TEST_PROMPT: &str = "Say 'Hello, API is working!'";

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    // A missing .env is fine; the key may come from the real environment.
    dotenvy::dotenv().ok();

    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };
    let config = match config {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    let use_colors = config.output.color_output && !cli.no_color;
    if let Err(e) = run_command(cli.command, cli.config, config, use_colors).await {
        error!("Command failed: {}", e);
        eprintln!("❌ {}", e);
        process::exit(1);
    }
}

async fn run_command(
    command: Commands,
    config_path: Option<PathBuf>,
    config: Config,
    use_colors: bool,
) -> Result<()> {
    let reporter = ConsoleReporter::new(use_colors);

    match command {
        Commands::Analyze {
            input,
            session,
            detailed,
        } => {
            let client = build_client(&config)?;
            let pipeline = TailorPipeline::new(client);

            let request = read_request(&input).await?;
            let analysis = run_analysis(&pipeline, request).await?;

            if detailed {
                print_extraction(&pipeline, &reporter, &analysis);
            }
            println!("{}", reporter.format_analysis(&analysis));

            if let Some(path) = session {
                analysis.save(&path)?;
                println!("{}", reporter.success(&format!("Session saved to {}", path.display())));
                println!("💡 Next: resume-tailor generate --session {}", path.display());
            }
        }

        Commands::Generate { session, output } => {
            let client = build_client(&config)?;
            let pipeline = TailorPipeline::new(client);

            let (format, path) = resolve_output(&config, &output)?;

            let analysis = AnalysisSession::load(&session)?;
            info!("Loaded analysis session created at {}", analysis.created_at);

            let tailored = run_generation(&pipeline, &analysis).await?;
            finish(&pipeline, &reporter, &tailored, format, &path)?;
        }

        Commands::Tailor {
            input,
            output,
            detailed,
        } => {
            let client = build_client(&config)?;
            let pipeline = TailorPipeline::new(client);
            let (format, path) = resolve_output(&config, &output)?;

            let request = read_request(&input).await?;
            let analysis = run_analysis(&pipeline, request).await?;

            if detailed {
                print_extraction(&pipeline, &reporter, &analysis);
            }
            println!("{}", reporter.format_analysis(&analysis));

            let tailored = run_generation(&pipeline, &analysis).await?;
            finish(&pipeline, &reporter, &tailored, format, &path)?;
        }

        Commands::CheckApi => {
            let key = std::env::var(&config.model.api_key_env).ok();
            println!(
                "API Key exists: {}",
                if key.is_some() { "Yes" } else { "No" }
            );
            println!("API Key length: {}", key.as_deref().map_or(0, str::len));

            let client = build_client(&config)?;
            println!("🤖 Model: {}", client.model());

            let bar = report::spinner("Contacting the language model API...");
            let result = client.generate(API_TEST_PROMPT).await;
            bar.finish_and_clear();

            match result {
                Ok(reply) => {
                    println!("{}", reporter.success("API connection successful!"));
                    println!("Model Response: {}", reply.trim());
                }
                Err(e) => {
                    println!("❌ API connection failed!");
                    println!("Current Working Directory: {}", std::env::current_dir()?.display());
                    return Err(e);
                }
            }
        }

        Commands::Config { action } => {
            let path = config_path.unwrap_or_else(Config::config_path);
            match action {
                Some(ConfigAction::Show) | None => {
                    println!("⚙️  Current Configuration\n");
                    println!("Model: {}", config.model.name);
                    println!("API Base: {}", config.model.api_base);
                    println!("API Key Variable: {}", config.model.api_key_env);
                    println!("Timeout: {}s", config.model.timeout_secs);
                    println!("\nOutput:");
                    println!("  File: {}", config.output.file_name);
                    println!("  Format: {:?}", config.output.format);
                    println!("  Colors: {}", config.output.color_output);
                }

                Some(ConfigAction::Reset) => {
                    println!("🔄 Resetting configuration to defaults...");
                    Config::default().save_to(&path)?;
                    println!("{}", reporter.success("Configuration reset successfully!"));
                }

                Some(ConfigAction::Path) => {
                    println!("{}", path.display());
                }
            }
        }
    }

    Ok(())
}

/// Fails before any work is done when the API key is absent
fn build_client(config: &Config) -> Result<GeminiClient> {
    let api_key = config.api_key()?;
    GeminiClient::new(&config.model, api_key)
}

async fn read_request(input: &InputArgs) -> Result<AnalysisRequest> {
    cli::validate_file_extension(&input.resume, &["pdf", "txt", "md"])
        .map_err(|e| ResumeTailorError::InvalidInput(format!("Resume file: {}", e)))?;

    let input_manager = InputManager::new();

    println!("📄 Processing resume: {}", input.resume.display());
    let resume_text = input_manager.extract_text(&input.resume).await?;

    let job_description = input_manager
        .job_description(input.job.as_deref(), input.job_text.as_deref())
        .await?;

    info!(
        "Resume: {} characters, job description: {} characters",
        resume_text.len(),
        job_description.len()
    );

    AnalysisRequest::new(resume_text, job_description)
}

async fn run_analysis<M: LanguageModel>(
    pipeline: &TailorPipeline<M>,
    request: AnalysisRequest,
) -> Result<AnalysisSession> {
    let bar = report::spinner("Analyzing resume...");
    let result = pipeline.analyze(request).await;
    bar.finish_and_clear();
    result
}

async fn run_generation<M: LanguageModel>(
    pipeline: &TailorPipeline<M>,
    analysis: &AnalysisSession,
) -> Result<TailoredResume> {
    let bar = report::spinner("Generating enhanced resume...");
    let result = pipeline.generate(analysis).await;
    bar.finish_and_clear();
    result
}

fn print_extraction<M>(
    pipeline: &TailorPipeline<M>,
    reporter: &ConsoleReporter,
    analysis: &AnalysisSession,
) {
    let text = &analysis.request.resume_text;
    let contact = pipeline.parser().extract_contact_info(text);
    let sections = pipeline.parser().extract_sections(text);
    println!("{}", reporter.format_extraction(&contact, &sections));
}

fn resolve_output(config: &Config, output: &OutputArgs) -> Result<(OutputFormat, PathBuf)> {
    let format = match &output.format {
        Some(name) => cli::parse_output_format(name).map_err(ResumeTailorError::InvalidInput)?,
        None => config.output.format,
    };
    let path = output
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(&config.output.file_name, format));
    Ok((format, path))
}

fn finish<M>(
    pipeline: &TailorPipeline<M>,
    reporter: &ConsoleReporter,
    tailored: &TailoredResume,
    format: OutputFormat,
    path: &Path,
) -> Result<()> {
    println!("{}", reporter.format_tailored(tailored));

    let rendered = pipeline.formatter().render(tailored, format)?;
    report::write_output(path, &rendered)?;
    println!("{}", reporter.success(&format!("Enhanced resume saved to {}", path.display())));
    Ok(())
}

fn default_output_path(file_name: &str, format: OutputFormat) -> PathBuf {
    let path = Path::new(file_name);
    match format {
        OutputFormat::Text => path.to_path_buf(),
        OutputFormat::Markdown => path.with_extension("md"),
        OutputFormat::Json => path.with_extension("json"),
    }
}
