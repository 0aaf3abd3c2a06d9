#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;

use std::io;

use anyhow::bail;
use anyhow::Context;
use anyhow::Result;
use clap::builder::PossibleValuesParser;
use clap::value_parser;
use clap::Arg;
use clap::ArgAction;
use clap::Command;
use clap_complete::generate;
use clap_complete::Generator;
use clap_complete::Shell;
use strum::VariantNames;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use yansi::Paint;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::Outcome;
use crate::domain::models::UserSummary;
use crate::domain::services::CONNECT_ERROR;
use crate::infrastructure::backends::BackendManager;

fn print_completions<G: Generator>(gen: G, cmd: &mut Command) {
    generate(gen, cmd, cmd.get_name().to_string(), &mut io::stdout());
    std::process::exit(0);
}

fn format_user(user: &UserSummary) -> String {
    let count = user.food_choices.len();
    let mut res = format!("- {} ({count} foods)", user.name);
    if count == 1 {
        res = format!("- {} (1 food)", user.name);
    }

    if !user.food_choices.is_empty() {
        let mut line = user.food_choices.join(", ");
        if line.chars().count() >= 70 {
            line = format!("{}...", line.chars().take(67).collect::<String>());
        }
        res = format!("{res}: {line}");
    }

    return res;
}

async fn print_users() -> Result<()> {
    let outcome = BackendManager::get()?
        .list_users()
        .await
        .context(CONNECT_ERROR)?;

    let users = match outcome {
        Outcome::Success(users) => users,
        Outcome::Rejected(message) => {
            bail!(message.unwrap_or_else(|| return "Failed to list users".to_string()))
        }
        Outcome::Unreachable => bail!(CONNECT_ERROR),
    };

    if users.is_empty() {
        println!("Nobody has signed up yet. You could be the first!");
    } else {
        let lines = users
            .iter()
            .map(|user| {
                return format_user(user);
            })
            .collect::<Vec<String>>();
        println!("{}", lines.join("\n"));
    }

    return Ok(());
}

async fn create_config_file() -> Result<()> {
    let config_file_path_str = Config::get(ConfigKey::ConfigFile);
    let config_file_path = std::path::PathBuf::from(&config_file_path_str);
    if config_file_path.exists() {
        bail!(format!(
            "Config file already exists at {config_file_path_str}"
        ));
    }

    if let Some(parent) = config_file_path.parent() {
        if !parent.exists() {
            fs::create_dir_all(parent).await?;
        }
    }

    let mut file = fs::File::create(config_file_path.clone()).await?;
    file.write_all(Config::serialize_default(build()).as_bytes())
        .await?;

    println!("Created default config file at {config_file_path_str}");
    return Ok(());
}

fn subcommand_completions() -> Command {
    return Command::new("completions")
        .about("Generates shell completions.")
        .arg(
            clap::Arg::new("shell")
                .short('s')
                .long("shell")
                .help("Which shell to generate completions for.")
                .action(ArgAction::Set)
                .value_parser(value_parser!(Shell))
                .required(true),
        );
}

fn subcommand_config() -> Command {
    return Command::new("config")
        .about("Configuration file options.")
        .subcommand(
            Command::new("create").about("Saves the default config file to the configuration file path. This command will fail if the file exists already.")
        )
        .subcommand(
            Command::new("default").about("Outputs the default configuration file to stdout.")
        )
        .subcommand(
            Command::new("path").about("Returns the path for the configuration file.")
        );
}

fn subcommand_debug() -> Command {
    return Command::new("debug")
        .about("Debug helpers for Food-Friend")
        .hide(true)
        .subcommand(
            Command::new("log-path").about("Output path to debug log file generated when running Food-Friend with environment variable RUST_LOG=foodfriend")
        )
        .subcommand(
            Command::new("enum-config").about("List all config keys as strings.")
        );
}

fn subcommand_users() -> Command {
    return Command::new("users").about("List everyone registered on the Food-Friend API.");
}

pub fn build() -> Command {
    let about = format!(
        "{}\n\nVersion: {}\nCommit: {}",
        env!("CARGO_PKG_DESCRIPTION"),
        env!("CARGO_PKG_VERSION"),
        env!("VERGEN_GIT_DESCRIBE")
    );

    let keys = "KEYS:
  Enter - Log in, or add the typed food. `/describe TEXT` extracts foods from a description.
  Up/Down - Select a food.
  CTRL+X - Remove the selected food. Delete does the same while the input is empty.
  CTRL+F - Calculate matches.
  PageUp/PageDown - Scroll matches.
  CTRL+L - Switch user.
  CTRL+C - Exit.";

    return Command::new("foodfriend")
        .about(about)
        .author(env!("CARGO_PKG_AUTHORS"))
        .version(env!("CARGO_PKG_VERSION"))
        .after_help(keys)
        .arg_required_else_help(false)
        .subcommand(subcommand_completions())
        .subcommand(subcommand_config())
        .subcommand(subcommand_debug())
        .subcommand(subcommand_users())
        .arg(
            Arg::new(ConfigKey::ApiURL.to_string())
                .long(ConfigKey::ApiURL.to_string())
                .env("FOODFRIEND_API_URL")
                .num_args(1)
                .help(format!("Food-Friend API base URL. Every request path is appended to it. [default: {}]", Config::default(ConfigKey::ApiURL)))
                .global(true),
        )
        .arg(
            Arg::new(ConfigKey::HealthCheckTimeout.to_string())
                .long(ConfigKey::HealthCheckTimeout.to_string())
                .env("FOODFRIEND_HEALTH_CHECK_TIMEOUT")
                .num_args(1)
                .help(format!("Time to wait in milliseconds before timing out when health checking the API. [default: {}]", Config::default(ConfigKey::HealthCheckTimeout)))
                .global(true),
        )
        .arg(
            Arg::new(ConfigKey::Name.to_string())
                .short('n')
                .long(ConfigKey::Name.to_string())
                .env("FOODFRIEND_NAME")
                .num_args(1)
                .help("Name to pre-fill on the login screen."),
        )
        .arg(
            Arg::new(ConfigKey::AutoLogin.to_string())
                .long(ConfigKey::AutoLogin.to_string())
                .env("FOODFRIEND_AUTO_LOGIN")
                .num_args(0..=1)
                .default_missing_value("true")
                .help(format!("Submits the pre-filled name on start. [default: {}]", Config::default(ConfigKey::AutoLogin)))
                .value_parser(PossibleValuesParser::new(["true", "false"])),
        )
        .arg(
            Arg::new(ConfigKey::ConfigFile.to_string())
                .short('c')
                .long(ConfigKey::ConfigFile.to_string())
                .env("FOODFRIEND_CONFIG_FILE")
                .num_args(1)
                .help(format!("Path to configuration file [default: {}]", Config::default(ConfigKey::ConfigFile)))
                .global(true),
        );
}

/// Returns `true` when the UI should start.
pub async fn parse() -> Result<bool> {
    let matches = build().get_matches();

    match matches.subcommand() {
        Some(("debug", debug_matches)) => {
            match debug_matches.subcommand() {
                Some(("log-path", _)) => {
                    let log_path = Config::config_dir().join("debug.log");
                    println!("{}", log_path.to_string_lossy());
                }
                Some(("enum-config", _)) => {
                    let res = ConfigKey::VARIANTS.join("\n");
                    println!("{}", res);
                }
                _ => {
                    subcommand_debug().print_long_help()?;
                }
            }

            return Ok(false);
        }
        Some(("completions", subcmd_matches)) => {
            if let Some(completions) = subcmd_matches.get_one::<Shell>("shell").copied() {
                let mut app = build();
                print_completions(completions, &mut app);
            }

            return Ok(false);
        }
        Some(("config", subcmd_matches)) => {
            Config::load(build(), vec![&matches, subcmd_matches]).await?;
            match subcmd_matches.subcommand() {
                Some(("create", _)) => {
                    create_config_file().await?;
                }
                Some(("default", _)) => {
                    println!("{}", Config::serialize_default(build()));
                }
                Some(("path", _)) => {
                    println!("{}", Config::get(ConfigKey::ConfigFile));
                }
                _ => {
                    subcommand_config().print_long_help()?;
                }
            }

            return Ok(false);
        }
        Some(("users", subcmd_matches)) => {
            Config::load(build(), vec![&matches, subcmd_matches]).await?;
            if let Err(err) = print_users().await {
                eprintln!("{}", Paint::red(format!("{err:#}")));
                std::process::exit(1);
            }

            return Ok(false);
        }
        _ => {
            Config::load(build(), vec![&matches]).await?;
        }
    }

    return Ok(true);
}
