//! `onboarding-wizard <script.{json,yaml}> [--config <file>]`
//!
//! Replays a scripted onboarding session through the controller and prints
//! the final profile as JSON on stdout. Logs go to stderr.

use std::error::Error;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use onboarding_wizard::adapters::{
    InMemoryEventBus, LoggingProfileSink, SimulatedRecommendationProvider,
};
use onboarding_wizard::application::{OnboardingController, ReplayScriptHandler, Script};
use onboarding_wizard::config::{AppConfig, TelemetryConfig};

const USAGE: &str = "usage: onboarding-wizard <script.{json,yaml}> [--config <file>]";

struct Args {
    script: PathBuf,
    config: Option<PathBuf>,
}

enum Command {
    Help,
    Replay(Args),
}

impl Command {
    fn parse(mut args: impl Iterator<Item = String>) -> Result<Self, String> {
        let mut script = None;
        let mut config = None;
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--config" | "-c" => {
                    let path = args
                        .next()
                        .ok_or_else(|| format!("--config needs a path\n{}", USAGE))?;
                    config = Some(PathBuf::from(path));
                }
                "--help" | "-h" => return Ok(Command::Help),
                _ if script.is_none() => script = Some(PathBuf::from(arg)),
                _ => return Err(format!("unexpected argument: {}\n{}", arg, USAGE)),
            }
        }
        Ok(Command::Replay(Args {
            script: script.ok_or_else(|| USAGE.to_string())?,
            config,
        }))
    }
}

fn init_tracing(telemetry: &TelemetryConfig) -> Result<(), Box<dyn Error>> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| telemetry.env_filter())?;

    let json_layer = telemetry
        .json
        .then(|| tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr));
    let text_layer = (!telemetry.json)
        .then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    tracing_subscriber::registry()
        .with(filter)
        .with(json_layer)
        .with(text_layer)
        .try_init()?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let args = match Command::parse(std::env::args().skip(1)) {
        Ok(Command::Replay(args)) => args,
        Ok(Command::Help) => {
            println!("{}", USAGE);
            return Ok(());
        }
        Err(message) => {
            eprintln!("{}", message);
            std::process::exit(2);
        }
    };

    let config = AppConfig::load_from(args.config.as_deref())?;
    config.validate()?;
    init_tracing(&config.telemetry)?;

    let bus = Arc::new(InMemoryEventBus::new());
    let controller = OnboardingController::new(
        config.flow_rules()?,
        Arc::new(SimulatedRecommendationProvider::from_config(&config.recommendations)),
        Arc::new(LoggingProfileSink::new()),
        bus.clone(),
    );

    let script = Script::load(&args.script)?;
    tracing::info!(
        script = %args.script.display(),
        actions = script.actions.len(),
        "Replaying onboarding script"
    );

    let outcome = match ReplayScriptHandler::new(controller.clone()).handle(script).await {
        Ok(outcome) => outcome,
        Err(err) => {
            tracing::error!(code = %err.code(), error = %err, "Replay failed");
            return Err(err.into());
        }
    };
    controller.wait_for_recommendations().await?;

    for rejected in &outcome.rejected {
        tracing::warn!(step = %rejected.step, hints = ?rejected.hints, "Advance was refused");
    }
    tracing::info!(events = bus.event_count(), "Replay finished");

    let state = controller.snapshot().await;
    println!("{}", serde_json::to_string_pretty(state.profile())?);
    Ok(())
}
