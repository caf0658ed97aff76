//! Build metadata shown on the about screen.
//!
//! Release pipelines may set these at compile time:
//! - `RELWATCH_COMMIT_COUNT`: commit count, shown as `r<count>` on debug builds
//! - `RELWATCH_BUILD_TIME`: UTC build timestamp, `YYYY-MM-DDTHH:MMZ`
//! - `RELWATCH_NO_UPDATER`: build without the updater
//! - `RELWATCH_DEBUG_BUILD`: mark a development build (no updater, `r<count>` version)

use chrono::{DateTime, Local, NaiveDateTime, TimeZone, Utc};

use crate::updates::VERSION;

/// Input format of the build timestamp.
const BUILD_TIME_FORMAT: &str = "%Y-%m-%dT%H:%MZ";

/// Output format: medium date, short time.
const DISPLAY_FORMAT: &str = "%b %-d, %Y %H:%M";

/// What was built, when, and how.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildInfo {
    /// Release version name.
    pub version_name: String,
    /// Development build. These never check for updates.
    pub debug: bool,
    /// Number of commits at build time, if known.
    pub commit_count: Option<String>,
    /// Raw build timestamp, if known.
    pub build_time: Option<String>,
    /// Whether the updater was compiled in.
    pub include_updater: bool,
}

impl BuildInfo {
    /// Metadata of the running binary.
    pub fn current() -> Self {
        Self {
            version_name: VERSION.to_string(),
            debug: option_env!("RELWATCH_DEBUG_BUILD").is_some(),
            commit_count: option_env!("RELWATCH_COMMIT_COUNT").map(str::to_string),
            build_time: option_env!("RELWATCH_BUILD_TIME").map(str::to_string),
            include_updater: option_env!("RELWATCH_NO_UPDATER").is_none(),
        }
    }

    /// `r<commits>` for debug builds, else the version name.
    pub fn version_summary(&self) -> String {
        if self.debug {
            format!("r{}", self.commit_count.as_deref().unwrap_or("0"))
        } else {
            self.version_name.clone()
        }
    }

    /// Build time in the local timezone, or the raw value if unparseable.
    pub fn formatted_build_time(&self) -> String {
        match &self.build_time {
            Some(raw) => format_build_time(raw),
            None => "unknown".to_string(),
        }
    }
}

/// Reformat a `YYYY-MM-DDTHH:MMZ` timestamp for local display.
pub fn format_build_time(raw: &str) -> String {
    format_build_time_in(raw, &Local)
}

/// Reformat a `YYYY-MM-DDTHH:MMZ` timestamp in `tz`.
///
/// Input that does not match the format is returned unchanged.
pub fn format_build_time_in<Tz: TimeZone>(raw: &str, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    match NaiveDateTime::parse_from_str(raw.trim(), BUILD_TIME_FORMAT) {
        Ok(naive) => {
            let utc: DateTime<Utc> = Utc.from_utc_datetime(&naive);
            utc.with_timezone(tz).format(DISPLAY_FORMAT).to_string()
        }
        Err(e) => {
            tracing::debug!("Unparseable build time '{}': {}", raw, e);
            raw.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    fn info(debug: bool) -> BuildInfo {
        BuildInfo {
            version_name: "0.8.4".to_string(),
            debug,
            commit_count: Some("1234".to_string()),
            build_time: Some("2017-06-15T12:30Z".to_string()),
            include_updater: true,
        }
    }

    #[test]
    fn release_build_shows_version_name() {
        assert_eq!(info(false).version_summary(), "0.8.4");
    }

    #[test]
    fn debug_build_shows_commit_count() {
        assert_eq!(info(true).version_summary(), "r1234");
    }

    #[test]
    fn debug_build_without_count() {
        let mut build = info(true);
        build.commit_count = None;
        assert_eq!(build.version_summary(), "r0");
    }

    #[test]
    fn formats_in_utc() {
        assert_eq!(
            format_build_time_in("2017-06-15T12:30Z", &Utc),
            "Jun 15, 2017 12:30"
        );
    }

    #[test]
    fn formats_in_offset_timezone() {
        let tokyo = FixedOffset::east_opt(9 * 3600).unwrap();
        assert_eq!(
            format_build_time_in("2017-06-15T20:00Z", &tokyo),
            "Jun 16, 2017 05:00"
        );
    }

    #[test]
    fn unparseable_time_is_returned_verbatim() {
        assert_eq!(format_build_time_in("yesterday", &Utc), "yesterday");
    }

    #[test]
    fn local_formatting_keeps_year() {
        assert!(info(false).formatted_build_time().contains("2017"));
    }

    #[test]
    fn missing_build_time_is_unknown() {
        let mut build = info(false);
        build.build_time = None;
        assert_eq!(build.formatted_build_time(), "unknown");
    }

    #[test]
    fn current_uses_crate_version() {
        assert_eq!(BuildInfo::current().version_name, VERSION);
    }
}
