use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use pms::contract::model::{ExportFormat, RegisterData, Role, Screen, ViewKey};
use pms::domain::dashboard::overview_for;
use pms::domain::filter::{Choice, TextSearch};
use pms::domain::forms::login::LoginForm;
use pms::domain::forms::registration::RegistrationForm;
use pms::domain::navigation::QUICK_ACTIONS;
use pms::domain::notifications::{NotificationCenter, NotificationFilter};
use pms::domain::users::{ManagedUsers, UserQuery};
use pms::Pms;
use runtime::{AppConfig, CliArgs};

/// PMS console - performance management from the command line
#[derive(Parser)]
#[command(name = "pms-console")]
#[command(about = "PMS console - performance management from the command line")]
#[command(version = "0.1.0")]
struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print current configuration and exit
    #[arg(long)]
    print_config: bool,

    /// Log verbosity level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign in and persist the session
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Create an account and sign it in
    Register {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        confirm_password: String,
        #[arg(long)]
        role: Role,
        #[arg(long)]
        department: String,
    },
    /// Sign out and clear the persisted session
    Logout,
    /// Show the signed-in user
    Whoami,
    /// Show the navigation menu for the signed-in role
    Nav,
    /// Open a view and render its screen
    Open { view: ViewKey },
    /// List managed users
    Users {
        #[arg(long, default_value = "")]
        search: String,
        #[arg(long, default_value = "all")]
        role: Choice<Role>,
        #[arg(long, default_value = "all")]
        department: Choice<String>,
    },
    /// List notifications (all, unread, action)
    Notifications {
        #[arg(long, default_value = "all")]
        filter: NotificationFilter,
    },
    /// Organization report, optionally exported
    Report {
        #[arg(long)]
        period: Option<String>,
        #[arg(long, default_value = "all")]
        department: Choice<String>,
        /// csv or pdf
        #[arg(long)]
        export: Option<ExportFormat>,
    },
    /// Fetch and summarize analytics
    Analytics,
    /// Check configuration
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let args = CliArgs {
        config: cli.config.as_ref().map(|p| p.to_string_lossy().to_string()),
        print_config: cli.print_config,
        verbose: cli.verbose,
    };

    // Load configuration (normalized home_dir is applied inside)
    let mut config = AppConfig::load_or_default(cli.config.as_deref())?;
    config.apply_cli_overrides(&args);

    let logging_config = config.logging.as_ref().cloned().unwrap_or_default();
    runtime::logging::init_logging_from_config(&logging_config, &config.home_dir());
    tracing::info!("pms-console starting");

    if cli.print_config {
        println!("{}", config.to_yaml()?);
        return Ok(());
    }

    let pms = Pms::init(&config).context("failed to initialize pms module")?;
    run(&config, &pms, cli.command.unwrap_or(Commands::Whoami)).await
}

async fn run(config: &AppConfig, pms: &Pms, command: Commands) -> Result<()> {
    let api = pms.api();

    match command {
        Commands::Login { email, password } => {
            let who = LoginForm::new(email, password)
                .submit(&pms.session())
                .await
                .map_err(pms::error::PmsError::from)?;
            println!("Signed in as {} ({}, {})", who.name, who.role, who.department);
        }
        Commands::Register {
            name,
            email,
            password,
            confirm_password,
            role,
            department,
        } => {
            let form = RegistrationForm {
                name,
                email,
                password,
                confirm_password,
                role: Some(role),
                department,
            };
            let data: RegisterData = form.validate().map_err(pms::error::PmsError::from)?;
            let who = api.register(data).await?;
            println!("Registered and signed in as {} ({})", who.name, who.role);
        }
        Commands::Logout => {
            api.logout().await;
            println!("Signed out");
        }
        Commands::Whoami => match api.current_user().await {
            Some(who) => println!("{} <{}> {} / {}", who.name, who.email, who.role, who.department),
            None => println!("Not signed in"),
        },
        Commands::Nav => {
            for item in api.menu().await? {
                println!("{:<12} {}", item.view, item.label);
            }
            println!("Quick actions:");
            for item in QUICK_ACTIONS {
                println!("{:<12} {}", item.view, item.label);
            }
        }
        Commands::Open { view } => {
            let screen = api.navigate(view).await?;
            println!("Screen: {screen:?}");
            if screen == Screen::Dashboard {
                if let Some(who) = api.current_user().await {
                    println!("{}", serde_json::to_string_pretty(&overview_for(who.role))?);
                }
            }
        }
        Commands::Users {
            search,
            role,
            department,
        } => {
            api.navigate(ViewKey::Users).await?;
            let users = ManagedUsers::seeded();
            let page = users.query(&UserQuery {
                search: TextSearch::new(&search),
                role,
                department,
            });
            for u in &page.users {
                println!(
                    "{:<4} {:<16} {:<28} {:<11} {:<15} {:<9} {}",
                    u.id, u.name, u.email, u.role, u.department, u.status, u.last_login
                );
            }
            println!("Showing {} of {} users", page.shown(), page.total);
        }
        Commands::Notifications { filter } => {
            api.navigate(ViewKey::Notifications).await?;
            let center = NotificationCenter::seeded();
            for n in center.filtered(filter) {
                let marker = if n.read { " " } else { "*" };
                let action = if n.action_required { " [action]" } else { "" };
                println!("{marker} {:<3} {} {:<8} {}{action}", n.id, n.date, n.priority, n.title);
            }
            println!(
                "Unread: {}  Action required: {}",
                center.unread_count(),
                center.action_required_count()
            );
        }
        Commands::Report {
            period,
            department,
            export,
        } => {
            api.navigate(ViewKey::Reports).await?;
            let mut report = pms.reports();
            if let Some(period) = period {
                report.period = period;
            }
            report.department = department;

            println!("Period: {}", report.period);
            for row in report.departments() {
                println!(
                    "{:<12} avg {:<4} completed {}/{} ({}%)",
                    row.department,
                    row.avg_score,
                    row.completed,
                    row.employees,
                    row.completion_pct()
                );
            }
            println!("Goal completion: {}%", report.goal_completion_pct());

            if let Some(format) = export {
                let artifact = report.export(format);
                match &artifact.content {
                    Some(content) => {
                        let path = write_export(&pms.export_dir(), &artifact.file_name, content)?;
                        println!("Exported {}", path.display());
                    }
                    None => println!("PDF report \"{}\" would be generated", artifact.file_name),
                }
            }
        }
        Commands::Analytics => {
            let summary = pms.analytics().load().await;
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        Commands::Check => check_config(config)?,
    }

    Ok(())
}

fn write_export(dir: &Path, file_name: &str, content: &str) -> Result<PathBuf> {
    std::fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    let path = dir.join(file_name);
    std::fs::write(&path, content).with_context(|| format!("writing {}", path.display()))?;
    tracing::info!(path = %path.display(), "Report written");
    Ok(path)
}

fn check_config(config: &AppConfig) -> Result<()> {
    tracing::info!("Checking configuration...");

    let cfg: pms::config::PmsConfig = config.module_config(pms::module::MODULE_NAME)?;
    tracing::info!("Configuration is valid");
    println!("Configuration check passed");
    println!("Home dir: {}", config.home_dir().display());
    println!("Session file: {}", cfg.session_path(&config.home_dir()).display());
    println!("{}", config.to_yaml()?);
    Ok(())
}
