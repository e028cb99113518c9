use std::env;
use std::sync::Arc;
use std::time::Duration;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{
    CatalogStore, Clock, ConfigError, FailurePolicy, FetcherConfig, PROGRESS_URL_ENV, ProgressSync,
    RemoteProgressFetcher, SyncOutcome,
};
use thiserror::Error;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use ui::{App, UiApp, build_app_context};

const SPLASH_ENV: &str = "COURSE_SPLASH_MS";

#[derive(Debug, Error)]
enum ArgsError {
    #[error("{flag} requires a value")]
    MissingValue { flag: &'static str },
    #[error("unknown argument: {0}")]
    UnknownArg(String),
    #[error("unknown subcommand: {0}")]
    UnknownCommand(String),
    #[error("invalid --splash-ms value: {raw}")]
    InvalidSplash { raw: String },
    #[error(transparent)]
    Endpoint(#[from] ConfigError),
}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- ui   [--endpoint <url>] [--splash-ms <ms>] [--keep-on-error]");
    eprintln!("  cargo run -p app -- sync [--endpoint <url>] [--keep-on-error]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --endpoint {}", services::DEFAULT_PROGRESS_URL);
    eprintln!("  --splash-ms 10000   (0 disables the intro overlay)");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  COURSE_PROGRESS_URL, COURSE_SPLASH_MS, RUST_LOG");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Ui,
    Sync,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "ui" => Some(Self::Ui),
            "sync" => Some(Self::Sync),
            _ => None,
        }
    }
}

/// Raw values of the environment variables the app reads.
#[derive(Debug, Default)]
struct EnvArgs {
    endpoint: Option<String>,
    splash: Option<String>,
}

impl EnvArgs {
    fn read() -> Self {
        Self {
            endpoint: env::var(PROGRESS_URL_ENV).ok(),
            splash: env::var(SPLASH_ENV).ok(),
        }
    }
}

#[derive(Debug)]
struct Args {
    command: Command,
    fetcher: FetcherConfig,
    splash: Option<Duration>,
    policy: FailurePolicy,
    help: bool,
}

impl Args {
    /// Parse everything after the program name. Flags override environment,
    /// and an overridden variable is never validated.
    fn parse(argv: Vec<String>, env: EnvArgs) -> Result<Self, ArgsError> {
        let mut iter = argv.into_iter().peekable();

        let command = match iter.peek().map(String::as_str) {
            Some(first) if !first.starts_with('-') => {
                let command = Command::from_arg(first)
                    .ok_or_else(|| ArgsError::UnknownCommand(first.to_string()))?;
                iter.next();
                command
            }
            // Launching the UI is the default.
            _ => Command::Ui,
        };

        let mut endpoint = None;
        let mut splash = None;
        let mut policy = FailurePolicy::default();
        let mut help = false;

        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "--endpoint" => {
                    let value = require_value(&mut iter, "--endpoint")?;
                    endpoint = Some(FetcherConfig::parse(&value)?);
                }
                "--splash-ms" => {
                    let value = require_value(&mut iter, "--splash-ms")?;
                    splash = Some(parse_splash(&value)?);
                }
                "--keep-on-error" => policy = FailurePolicy::KeepCurrent,
                "--help" | "-h" => help = true,
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        let fetcher = match endpoint {
            Some(fetcher) => fetcher,
            None => FetcherConfig::from_env_value(env.endpoint.as_deref())?,
        };
        let splash = match (splash, env.splash) {
            (Some(splash), _) => splash,
            (None, Some(raw)) => parse_splash(&raw)?,
            (None, None) => Some(ui::splash::DEFAULT_SPLASH_DURATION),
        };

        Ok(Self {
            command,
            fetcher,
            splash,
            policy,
            help,
        })
    }
}

fn parse_splash(raw: &str) -> Result<Option<Duration>, ArgsError> {
    let millis: u64 = raw.trim().parse().map_err(|_| ArgsError::InvalidSplash {
        raw: raw.to_string(),
    })?;
    Ok((millis > 0).then(|| Duration::from_millis(millis)))
}

struct DesktopApp {
    progress_sync: Arc<ProgressSync>,
    splash: Option<Duration>,
}

impl UiApp for DesktopApp {
    fn progress_sync(&self) -> Arc<ProgressSync> {
        Arc::clone(&self.progress_sync)
    }

    fn splash_duration(&self) -> Option<Duration> {
        self.splash
    }
}

fn build_sync(args: &Args) -> Arc<ProgressSync> {
    let fetcher = RemoteProgressFetcher::new(args.fetcher.clone());
    let store = Arc::new(CatalogStore::seeded());
    Arc::new(
        ProgressSync::new(Clock::system(), Arc::new(fetcher), store).with_policy(args.policy),
    )
}

async fn run_headless_sync(sync: &ProgressSync) {
    let report = sync.sync_all().await;
    if matches!(report.outcome, SyncOutcome::Skipped) {
        eprintln!("progress source unavailable; showing last known state");
    }

    for lesson in sync.store().lessons() {
        let mark = if lesson.is_completed() { "x" } else { " " };
        println!(
            "[{mark}] {} {} ({})",
            lesson.id(),
            lesson.title(),
            lesson.duration()
        );
    }
    println!("{}", report.overview.label());
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let argv: Vec<String> = env::args().skip(1).collect();
    let args = Args::parse(argv, EnvArgs::read()).inspect_err(|_| print_usage())?;
    if args.help {
        print_usage();
        return Ok(());
    }

    tracing::info!(
        command = ?args.command,
        endpoint = %args.fetcher.endpoint,
        policy = ?args.policy,
        "starting"
    );
    let sync = build_sync(&args);

    match args.command {
        Command::Sync => {
            run_headless_sync(&sync).await;
            Ok(())
        }
        Command::Ui => {
            let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
                progress_sync: sync,
                splash: args.splash,
            });
            let context = build_app_context(&app);

            // On macOS, tao can default to an always-on-top window in some dev setups.
            let desktop_cfg = DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title("Curso de Diseño")
                    .with_always_on_top(false),
            );

            LaunchBuilder::desktop()
                .with_cfg(desktop_cfg)
                .with_context(context)
                .launch(App);
            Ok(())
        }
    }
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("services=info,app=info")),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[tokio::main]
async fn main() {
    init_tracing();
    if let Err(err) = run().await {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
