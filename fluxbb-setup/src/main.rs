mod settings;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;
use fluxbb_installer::db::Database;
use fluxbb_installer::{DemoContent, InstallEnvironment, InstallPlan, InstallReport, Installer, SeedStrings};
use fluxbb_types::{AdminAccount, BoardInfo, DatabaseConfig, DatabaseDriver};
use std::net::IpAddr;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use settings::Settings;

/// FluxBB Setup
///
/// Writes the forum config file, creates the database tables and seeds
/// groups, board options, the admin account and a demo forum.
#[derive(Parser, Debug)]
#[command(name = "fluxbb-setup")]
#[command(about = "Install a new FluxBB forum", long_about = None)]
struct Args {
    /// Application root; the config file is written to <root>/config
    #[arg(short, long, default_value = ".", env = "FLUXBB_ROOT")]
    root: PathBuf,

    /// Settings file with setup defaults (default: <root>/setup.toml)
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Database driver (sqlite, mysql, pgsql)
    #[arg(long)]
    db_driver: Option<String>,

    #[arg(long)]
    db_host: Option<String>,

    #[arg(long)]
    db_port: Option<u16>,

    /// Database name, or the database file for sqlite (relative to the root)
    #[arg(short, long)]
    database: Option<String>,

    #[arg(long)]
    db_username: Option<String>,

    #[arg(long, env = "FLUXBB_DB_PASSWORD", hide_env_values = true)]
    db_password: Option<String>,

    /// Table prefix
    #[arg(long)]
    db_prefix: Option<String>,

    #[arg(long)]
    board_title: Option<String>,

    #[arg(long)]
    board_description: Option<String>,

    /// Default style for the board and the admin account
    #[arg(long)]
    style: Option<String>,

    #[arg(long, env = "FLUXBB_ADMIN_USERNAME")]
    admin_username: String,

    #[arg(long, env = "FLUXBB_ADMIN_PASSWORD", hide_env_values = true)]
    admin_password: String,

    #[arg(long, env = "FLUXBB_ADMIN_EMAIL")]
    admin_email: String,

    /// Defaults to the admin email
    #[arg(long)]
    webmaster_email: Option<String>,

    /// Addresses that receive reports, defaults to the admin email
    #[arg(long)]
    mailing_list: Option<String>,

    /// Board and admin language
    #[arg(long)]
    locale: Option<String>,

    /// Address recorded as the admin registration IP
    #[arg(long, default_value = "127.0.0.1")]
    client_ip: IpAddr,

    /// Host file upload setting (on/true/1 enables avatars)
    #[arg(long)]
    file_uploads: Option<String>,

    /// JSON file with translated seed strings
    #[arg(long)]
    seed_strings: Option<PathBuf>,

    /// Skip confirmation prompt
    #[arg(short = 'y', long)]
    yes: bool,
}

/// SQLite files live under the app root unless given as absolute paths
fn resolve_database(root: &Path, driver: DatabaseDriver, database: String) -> String {
    if driver != DatabaseDriver::Sqlite
        || database == ":memory:"
        || Path::new(&database).is_absolute()
    {
        return database;
    }
    root.join(database).to_string_lossy().into_owned()
}

/// Merge command line flags over the loaded settings
fn build_plan(args: &Args, settings: Settings) -> Result<InstallPlan> {
    let driver_name = args.db_driver.as_deref().unwrap_or(&settings.database.driver);
    let driver = DatabaseDriver::parse(driver_name)
        .with_context(|| format!("Unknown database driver: {}", driver_name))?;

    let database = DatabaseConfig {
        driver,
        host: args.db_host.clone().unwrap_or(settings.database.host),
        port: args.db_port.or(settings.database.port),
        database: resolve_database(
            &args.root,
            driver,
            args.database.clone().unwrap_or(settings.database.name),
        ),
        username: args.db_username.clone().unwrap_or(settings.database.username),
        password: args.db_password.clone().unwrap_or(settings.database.password),
        prefix: args.db_prefix.clone().unwrap_or(settings.database.prefix),
    };

    let board = BoardInfo {
        title: args.board_title.clone().unwrap_or(settings.board.title),
        description: args.board_description.clone().unwrap_or(settings.board.description),
        default_style: args.style.clone().unwrap_or(settings.board.style),
        admin_email: args.admin_email.clone(),
        webmaster_email: args.webmaster_email.clone(),
        mailing_list: args.mailing_list.clone(),
    };

    let admin = AdminAccount {
        username: args.admin_username.clone(),
        password: args.admin_password.clone(),
        email: args.admin_email.clone(),
    };

    let environment = InstallEnvironment {
        locale: args.locale.clone().unwrap_or(settings.locale),
        request_time: Utc::now(),
        client_ip: args.client_ip,
        file_uploads: args.file_uploads.clone().or(settings.file_uploads),
    };

    let strings = match &args.seed_strings {
        Some(path) => SeedStrings::load(path)?,
        None => SeedStrings::english(),
    };

    Ok(InstallPlan {
        database,
        board,
        admin,
        environment,
        strings,
        demo: DemoContent::default(),
    })
}

/// Display installation results in a formatted way
fn display_report(report: &InstallReport) {
    println!();
    println!("Installation Summary");
    println!("====================");
    println!();
    println!("Config file: {}", report.config_path.display());
    println!("Tables created: {}", report.tables_created);
    println!("Groups created: {}", report.groups_created);
    println!("Board options: {}", report.options_inserted);
    println!("Admin user: {} (id {})", report.admin.username, report.admin.id);
    println!(
        "Demo forum: \"{}\" in \"{}\"",
        report.forum.forum_name, report.category.cat_name
    );
    println!();
    println!("Installation completed successfully!");
}

fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fluxbb_installer=info,fluxbb_setup=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    let settings = Settings::new(&args.root, args.settings.as_deref())
        .context("Failed to load setup settings")?;
    let plan = build_plan(&args, settings)?;

    println!("FluxBB Setup");
    println!("============");
    println!();
    println!("Application root: {}", args.root.display());
    println!("Database: {} ({})", plan.database.database, plan.database.driver);
    println!("Admin: {} <{}>", plan.admin.username, plan.admin.email);
    println!();

    if !args.yes {
        println!("This will install a new forum into an empty database.");
        println!("Do you want to continue? (y/N): ");

        let mut input = String::new();
        std::io::stdin()
            .read_line(&mut input)
            .context("Failed to read user input")?;

        let input = input.trim().to_lowercase();
        if input != "y" && input != "yes" {
            println!("Installation cancelled.");
            return Ok(());
        }
    }

    let db = Database::from_config(&plan.database).context("Failed to open database")?;
    let installer = Installer::new(db, &args.root);

    let report = installer.install(&plan).context("Installation failed")?;
    display_report(&report);

    Ok(())
}
