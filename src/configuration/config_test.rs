use anyhow::Result;

use super::Config;
use super::ConfigKey;
use crate::application::cli;

#[test]
fn it_serializes_to_valid_toml() -> Result<()> {
    let res = Config::serialize_default(cli::build());
    let doc = res.parse::<toml_edit::Document>()?;

    assert_eq!(
        doc.get("api-url").and_then(|e| return e.as_str()),
        Some("http://localhost:5000/api")
    );
    assert_eq!(
        doc.get("health-check-timeout")
            .and_then(|e| return e.as_integer()),
        Some(1000)
    );
    assert_eq!(
        doc.get("auto-login").and_then(|e| return e.as_bool()),
        Some(false)
    );
    assert!(doc.get("name").is_none());
    assert!(res.contains("# name = \"\""));
    assert!(!res.contains("config-file"));

    return Ok(());
}

#[test]
fn it_has_defaults() {
    assert_eq!(
        Config::default(ConfigKey::ApiURL),
        "http://localhost:5000/api"
    );
    assert_eq!(Config::default(ConfigKey::HealthCheckTimeout), "1000");
    assert!(Config::default(ConfigKey::ConfigFile).ends_with("config.toml"));
}

#[tokio::test]
async fn it_loads_config_from_file() -> Result<()> {
    // Both cases share the process wide store, so they run in one test.
    let bad_matches =
        cli::build().try_get_matches_from(vec!["foodfriend", "-c", "./test/bad-config.toml"])?;
    let res = Config::load(cli::build(), vec![&bad_matches]).await;
    assert!(res.is_err());

    let matches = cli::build().try_get_matches_from(vec![
        "foodfriend",
        "-c",
        "./test/config.example.toml",
        "--api-url",
        "http://food.test/api",
    ])?;
    Config::load(cli::build(), vec![&matches]).await?;

    assert_eq!(Config::get(ConfigKey::Name), "Sam");
    assert_eq!(Config::get(ConfigKey::HealthCheckTimeout), "1000");
    assert!(!Config::get_bool(ConfigKey::AutoLogin));
    assert_eq!(Config::get(ConfigKey::ApiURL), "http://food.test/api");

    return Ok(());
}
