use chrono_tz::Tz;
use serde::{
  Deserialize,
  Serialize
};
use taskfeed_gui_shared::{
  MAX_AVATARS,
  User
};

use crate::datetime::is_valid_date_format;

const DEFAULT_TIMEZONE: &str =
  "America/Mexico_City";
const DEFAULT_DATE_FORMAT: &str =
  "%b %-d, %Y";
const MAX_AVATARS_LIMIT: usize = 12;
const MAX_SIMULATED_LATENCY_MS: u32 =
  10_000;

fn default_version() -> u32 {
  1
}

fn default_timezone() -> String {
  DEFAULT_TIMEZONE.to_string()
}

fn default_date_format() -> String {
  DEFAULT_DATE_FORMAT.to_string()
}

fn default_max_avatars() -> usize {
  MAX_AVATARS
}

fn default_simulated_latency_ms() -> u32
{
  600
}

fn default_current_user() -> User {
  User {
    id: "viewer".to_string(),
    name: "Viewer".to_string(),
    ..User::placeholder()
  }
}

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
)]
pub struct FeedConfig {
  #[serde(default = "default_version")]
  pub version:              u32,
  #[serde(default = "default_timezone")]
  pub timezone:             String,
  #[serde(
    default = "default_date_format"
  )]
  pub date_format:          String,
  #[serde(
    default = "default_max_avatars"
  )]
  pub max_avatars:          usize,
  #[serde(
    default = "default_simulated_latency_ms"
  )]
  pub simulated_latency_ms: u32,
  #[serde(default)]
  pub avatar_url_template:  Option<String>,
  #[serde(default)]
  pub profile_url_template: Option<String>,
  #[serde(
    default = "default_current_user"
  )]
  pub current_user:         User
}

impl Default for FeedConfig {
  fn default() -> Self {
    Self {
      version:              default_version(),
      timezone:             default_timezone(),
      date_format:          default_date_format(),
      max_avatars:          default_max_avatars(),
      simulated_latency_ms:
        default_simulated_latency_ms(),
      avatar_url_template:  None,
      profile_url_template: None,
      current_user:         default_current_user()
    }
  }
}

/// Display settings shared with every
/// card through context.
#[derive(
  Debug,
  Clone,
  PartialEq,
)]
pub struct DisplaySettings {
  pub timezone:    Tz,
  pub date_format: String,
  pub max_avatars: usize
}

impl Default for DisplaySettings {
  fn default() -> Self {
    Self {
      timezone:    chrono_tz::America::Mexico_City,
      date_format: default_date_format(),
      max_avatars: MAX_AVATARS
    }
  }
}

pub fn parse_feed_config(
  raw: &str
) -> FeedConfig {
  match toml::from_str::<FeedConfig>(raw)
  {
    | Ok(mut config) => {
      sanitize_feed_config(&mut config);
      tracing::info!(
        version = config.version,
        timezone = %config.timezone,
        max_avatars = config.max_avatars,
        current_user = %config.current_user.id,
        "loaded feed config"
      );
      config
    }
    | Err(error) => {
      tracing::error!(%error, "failed parsing feed config; using defaults");
      FeedConfig::default()
    }
  }
}

fn sanitize_feed_config(
  config: &mut FeedConfig
) {
  if config
    .timezone
    .parse::<Tz>()
    .is_err()
  {
    tracing::warn!(
      timezone = %config.timezone,
      "unknown timezone; using default"
    );
    config.timezone = default_timezone();
  }
  if !is_valid_date_format(
    &config.date_format
  ) {
    tracing::warn!(
      date_format = %config.date_format,
      "invalid date format; using \
       default"
    );
    config.date_format =
      default_date_format();
  }
  config.max_avatars = config
    .max_avatars
    .clamp(1, MAX_AVATARS_LIMIT);
  config.simulated_latency_ms = config
    .simulated_latency_ms
    .min(MAX_SIMULATED_LATENCY_MS);
  if config.current_user.id.trim().is_empty()
  {
    config.current_user =
      default_current_user();
  }
}

impl FeedConfig {
  pub fn display_settings(
    &self
  ) -> DisplaySettings {
    DisplaySettings {
      timezone:    self
        .timezone
        .parse::<Tz>()
        .unwrap_or(
          chrono_tz::America::Mexico_City
        ),
      date_format: self
        .date_format
        .clone(),
      max_avatars: self.max_avatars
    }
  }

  pub fn avatar_url(
    &self,
    user_id: &str
  ) -> Option<String> {
    fill_user_template(
      self.avatar_url_template.as_deref(),
      user_id
    )
  }

  pub fn profile_url(
    &self,
    user_id: &str
  ) -> Option<String> {
    fill_user_template(
      self
        .profile_url_template
        .as_deref(),
      user_id
    )
  }
}

fn fill_user_template(
  template: Option<&str>,
  user_id: &str
) -> Option<String> {
  let template = template?;
  if user_id.is_empty() {
    return None;
  }
  Some(template.replace("{id}", user_id))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn empty_config_uses_defaults() {
    let config = parse_feed_config("");
    assert_eq!(
      config,
      FeedConfig::default()
    );
    assert_eq!(
      config.display_settings(),
      DisplaySettings::default()
    );
  }

  #[test]
  fn sanitizes_out_of_range_values() {
    let config = parse_feed_config(
      r#"
        timezone = "Mars/Olympus_Mons"
        date_format = "  "
        max_avatars = 40
        simulated_latency_ms = 90000

        [current_user]
        id = ""
      "#
    );
    assert_eq!(
      config.timezone,
      DEFAULT_TIMEZONE
    );
    assert_eq!(
      config.date_format,
      DEFAULT_DATE_FORMAT
    );
    assert_eq!(
      config.max_avatars,
      MAX_AVATARS_LIMIT
    );
    assert_eq!(
      config.simulated_latency_ms,
      MAX_SIMULATED_LATENCY_MS
    );
    assert_eq!(
      config.current_user,
      default_current_user()
    );

    let zero = parse_feed_config(
      "max_avatars = 0"
    );
    assert_eq!(zero.max_avatars, 1);
  }

  #[test]
  fn unknown_date_specifier_uses_default_format(
  ) {
    let config = parse_feed_config(
      "date_format = \"%Q\"\n"
    );
    assert_eq!(
      config.date_format,
      DEFAULT_DATE_FORMAT
    );
  }

  #[test]
  fn malformed_config_falls_back() {
    let config = parse_feed_config(
      "max_avatars = \"three\""
    );
    assert_eq!(
      config,
      FeedConfig::default()
    );
  }

  #[test]
  fn url_templates_fill_user_id() {
    let config = parse_feed_config(
      r#"
        avatar_url_template = "https://cdn.test/avatars/{id}.png"
        profile_url_template = "https://app.test/profile/{id}"
        timezone = "Europe/Berlin"
      "#
    );
    assert_eq!(
      config.avatar_url("u1").as_deref(),
      Some("https://cdn.test/avatars/u1.png")
    );
    assert_eq!(
      config.profile_url("u1").as_deref(),
      Some("https://app.test/profile/u1")
    );
    assert_eq!(config.avatar_url(""), None);
    assert_eq!(
      config.display_settings().timezone,
      chrono_tz::Europe::Berlin
    );
    assert_eq!(
      FeedConfig::default().avatar_url("u1"),
      None
    );
  }
}
