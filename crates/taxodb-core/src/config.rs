use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use taxodb_schema::{err, error::ErrorTree};
use time::{Date, format_description::FormatItem};

static DATE_FORMAT: OnceLock<Vec<FormatItem<'static>>> = OnceLock::new();

// `YYYY-MM-DD`, the only shape release dates arrive in.
fn date_format() -> &'static [FormatItem<'static>] {
    DATE_FORMAT
        .get_or_init(|| time::format_description::parse("[year]-[month]-[day]").unwrap())
}

///
/// Edition
///
/// Product edition the install runs under. Carried as system metadata and
/// surfaced by the report; the store itself does not gate features on it.
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
#[remain::sorted]
pub enum Edition {
    Client,
    #[default]
    Personal,
    Pro,
}

impl Edition {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Client => "Client",
            Self::Personal => "Personal",
            Self::Pro => "Pro",
        }
    }

    // Upgrade order, not declaration order.
    const fn rank(self) -> u8 {
        match self {
            Self::Personal => 0,
            Self::Client => 1,
            Self::Pro => 2,
        }
    }

    #[must_use]
    pub const fn can_upgrade(self) -> bool {
        self.rank() < Self::Pro.rank()
    }
}

impl std::fmt::Display for Edition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

///
/// SystemConfig
///
/// Typed contract for the excluded application container: edition and
/// licensing, site identity, system state, and upload-size limits. All
/// limits are in bytes; `memory_limit` may be negative (unlimited).
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct SystemConfig {
    pub edition: Edition,
    pub licensed_edition: Option<Edition>,
    pub site_name: String,
    pub site_url: String,
    pub system_on: bool,
    /// ISO-8601 calendar date of the installed release, if known.
    pub release_date: Option<String>,
    pub max_upload_filesize: u64,
    pub max_post_size: u64,
    pub memory_limit: i64,
    /// Extra cap from the site config; zero means no cap.
    pub max_upload_config_limit: u64,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            edition: Edition::default(),
            licensed_edition: None,
            site_name: String::new(),
            site_url: String::new(),
            system_on: true,
            release_date: None,
            max_upload_filesize: 8 * 1024 * 1024,
            max_post_size: 8 * 1024 * 1024,
            memory_limit: -1,
            max_upload_config_limit: 0,
        }
    }
}

impl SystemConfig {
    /// Structural check for configs built from deserialized data.
    pub fn validate(&self) -> Result<(), ErrorTree> {
        let mut errs = ErrorTree::new();

        if let Some(raw) = &self.release_date
            && Date::parse(raw, date_format()).is_err()
        {
            err!(errs, "releaseDate", "'{raw}' is not a YYYY-MM-DD date");
        }

        errs.result()
    }

    /// Installed release date, parsed.
    pub fn release_date(&self) -> Result<Option<Date>, ErrorTree> {
        let Some(raw) = &self.release_date else {
            return Ok(None);
        };

        match Date::parse(raw, date_format()) {
            Ok(date) => Ok(Some(date)),
            Err(_) => {
                let mut errs = ErrorTree::new();
                err!(errs, "releaseDate", "'{raw}' is not a YYYY-MM-DD date");
                Err(errs)
            }
        }
    }

    /// Effective upload ceiling: the smallest of the configured limits,
    /// ignoring non-positive ones.
    #[must_use]
    pub fn max_upload_bytes(&self) -> u64 {
        let mut bytes = self.max_upload_filesize.min(self.max_post_size);

        if let Ok(limit) = u64::try_from(self.memory_limit)
            && limit > 0
        {
            bytes = bytes.min(limit);
        }
        if self.max_upload_config_limit > 0 {
            bytes = bytes.min(self.max_upload_config_limit);
        }

        bytes
    }

    /// Whether the install runs an edition other than the licensed one.
    #[must_use]
    pub fn has_wrong_edition(&self) -> bool {
        self.licensed_edition
            .is_some_and(|licensed| licensed != self.edition)
    }
}
