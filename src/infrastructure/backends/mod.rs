pub mod food_friend;

use anyhow::bail;
use anyhow::Result;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::BackendBox;

pub struct BackendManager {}

impl BackendManager {
    pub fn get() -> Result<BackendBox> {
        let url = Config::get(ConfigKey::ApiURL);
        if let Err(err) = reqwest::Url::parse(&url) {
            bail!(format!("Invalid Food-Friend API URL '{url}': {err}"));
        }

        return Ok(Box::<food_friend::FoodFriend>::default());
    }
}
