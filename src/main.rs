//! Resume ATS scorer: rates a plain-text resume against required skills

use clap::Parser;
use log::{error, info, warn};
use resume_ats::cli::{self, Cli, Commands, ConfigAction};
use resume_ats::config::{Config, OutputFormat};
use resume_ats::error::{Result, ResumeAtsError};
use resume_ats::input::sample::{sample_required_skills, SAMPLE_REQUIRE_GPA, SAMPLE_RESUME};
use resume_ats::input::{AnalysisInput, InputManager};
use resume_ats::output::ReportGenerator;
use resume_ats::processing::analyzer::{ResumeAnalysisResult, ResumeAnalyzer};
use std::path::{Path, PathBuf};
use std::process;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    // Reset must work even when the target config file is missing or broken.
    let resetting = matches!(&cli.command, Commands::Config { action: Some(ConfigAction::Reset) });
    let loaded = if resetting {
        Ok(Config::default())
    } else {
        Config::resolve(cli.config.as_deref())
    };

    let config = match loaded {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config, cli.config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

fn output_format(requested: Option<&str>, config: &Config) -> Result<OutputFormat> {
    match requested {
        Some(format) => cli::parse_output_format(format).map_err(ResumeAtsError::InvalidInput),
        None => Ok(config.output.format),
    }
}

fn emit(
    result: &ResumeAnalysisResult,
    format: OutputFormat,
    detailed: bool,
    save: Option<&Path>,
    config: &Config,
) -> Result<()> {
    match save {
        Some(path) => {
            // Saved reports never carry terminal color codes.
            let generator = ReportGenerator::with_options(false, detailed, true);
            generator.save_report(result, format, path)?;
            info!("Report saved to {}", path.display());
        }
        None => {
            let generator = ReportGenerator::with_options(config.output.color_output, detailed, true);
            println!("{}", generator.generate_report(result, format)?);
        }
    }
    Ok(())
}

async fn run_command(command: Commands, mut config: Config, config_path: Option<PathBuf>) -> Result<()> {
    match command {
        Commands::Analyze {
            resume,
            skills,
            skills_file,
            require_gpa,
            output,
            save,
            detailed,
        } => {
            let format = output_format(output.as_deref(), &config)?;

            let mut input_manager = InputManager::new();
            let AnalysisInput { text, required_skills } = input_manager
                .gather(
                    &resume,
                    skills.as_deref(),
                    skills_file.as_deref(),
                    &config.analysis.default_required_skills,
                )
                .await?;
            if required_skills.is_empty() {
                warn!("No required skills given; the skills score will be 0");
            }

            let analyzer = ResumeAnalyzer::new()?;
            let result = analyzer.analyze_resume(&text, &required_skills, require_gpa || config.analysis.require_gpa);
            info!("Analysis complete: ATS score {}", result.ats_score);

            emit(&result, format, detailed || config.output.detailed, save.as_deref(), &config)
        }

        Commands::Demo { output } => {
            let format = output_format(output.as_deref(), &config)?;
            info!("Analyzing the built-in sample resume");

            let analyzer = ResumeAnalyzer::new()?;
            let result = analyzer.analyze_resume(SAMPLE_RESUME, &sample_required_skills(), SAMPLE_REQUIRE_GPA);
            emit(&result, format, config.output.detailed, None, &config)
        }

        Commands::Config { action } => {
            let path = config_path.unwrap_or_else(Config::config_path);
            match action.unwrap_or(ConfigAction::Show) {
                ConfigAction::Show => {
                    println!("# {}", path.display());
                    let content = toml::to_string_pretty(&config)
                        .map_err(|e| ResumeAtsError::Configuration(format!("Failed to serialize config: {}", e)))?;
                    println!("{}", content);
                }
                ConfigAction::Reset => {
                    Config::default().save_to(&path)?;
                    info!("Configuration reset: {}", path.display());
                }
                ConfigAction::Set { key, value } => {
                    config.set(&key, &value)?;
                    config.save_to(&path)?;
                    info!("Set {} = {}", key, value);
                }
            }
            Ok(())
        }
    }
}
