//! Client settings and the `key=value` config file loader

use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use log::{debug, info};
use crate::error::{CasJobsError, Result};
use crate::service::{DataTarget, DEFAULT_SERVICE_ENDPOINT};

/// Web service password
///
/// Formats as `***` so it can sit inside `Debug` output and log lines.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    pub fn new(password: impl Into<String>) -> Self {
        Self(password.into())
    }

    /// Raw password, only for building requests
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("***")
    }
}

impl fmt::Display for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("***")
    }
}

/// Mutable client state: credentials, defaults and endpoint
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Numeric web service id
    pub wsid: Option<i64>,
    pub password: Option<Password>,
    /// Default queue id
    pub queue: i64,
    /// Default retention in days
    pub days: i64,
    pub target: DataTarget,
    pub verbose: bool,
    pub debug: bool,
    pub endpoint: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            wsid: None,
            password: None,
            queue: 1,
            days: 1,
            target: DataTarget::default(),
            verbose: false,
            debug: false,
            endpoint: DEFAULT_SERVICE_ENDPOINT.to_string(),
        }
    }
}

impl Settings {
    /// Applies every line of the config file at `path`
    ///
    /// Lines are applied in order, so a malformed line leaves the
    /// settings from the preceding lines in place.
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => CasJobsError::ConfigNotFound(path.to_path_buf()),
            _ => CasJobsError::ConfigIo {
                path: path.to_path_buf(),
                source: e,
            },
        })?;

        self.load_str(&content)?;

        if self.verbose {
            info!("Loaded CasJobs config from {}", path.display());
        }
        Ok(())
    }

    /// Applies config lines from an in-memory string
    pub fn load_str(&mut self, content: &str) -> Result<()> {
        // `lines` drops the trailing `\n` and a preceding `\r`
        for (index, line) in content.lines().enumerate() {
            // blank lines are skipped, not reported as malformed
            if line.trim().is_empty() {
                continue;
            }
            let (key, value) = line
                .split_once('=')
                .ok_or_else(|| CasJobsError::MalformedConfigLine {
                    line: index + 1,
                    content: line.to_string(),
                })?;
            self.apply(key, value)?;
        }
        Ok(())
    }

    /// Applies one recognized key; unknown keys are ignored
    pub fn apply(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "wsid" => self.wsid = Some(parse_int(key, value)?),
            "password" => self.password = Some(Password::new(value)),
            // the misspelled key is what older config files carry
            "default_target" | "dafault_target" => self.target = value.parse()?,
            "default_queue" => self.queue = parse_int(key, value)?,
            "default_days" => self.days = parse_int(key, value)?,
            "verbose" => self.verbose = str_to_bool(value),
            "debug" => self.debug = str_to_bool(value),
            other => debug!("Ignoring unknown config key '{}'", other),
        }
        Ok(())
    }
}

/// Anything other than a case-insensitive `false` is true
pub fn str_to_bool(value: &str) -> bool {
    !value.eq_ignore_ascii_case("false")
}

fn parse_int(key: &str, value: &str) -> Result<i64> {
    value.trim().parse().map_err(|_| CasJobsError::InvalidConfigValue {
        key: key.to_string(),
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.wsid, None);
        assert_eq!(settings.password, None);
        assert_eq!(settings.queue, 1);
        assert_eq!(settings.days, 1);
        assert_eq!(settings.target.as_str(), "DR13");
        assert!(!settings.verbose);
        assert!(!settings.debug);
        assert_eq!(settings.endpoint, DEFAULT_SERVICE_ENDPOINT);
    }

    #[test]
    fn test_str_to_bool() {
        assert!(!str_to_bool("false"));
        assert!(!str_to_bool("False"));
        assert!(!str_to_bool("FALSE"));
        assert!(str_to_bool("true"));
        assert!(str_to_bool("no"));
        assert!(str_to_bool("0"));
        assert!(str_to_bool(""));
    }

    #[test]
    fn test_load_sets_only_named_fields() {
        let mut settings = Settings::default();
        settings.load_str("wsid=1234\ndefault_days=7\n").unwrap();

        let expected = Settings {
            wsid: Some(1234),
            days: 7,
            ..Settings::default()
        };
        assert_eq!(settings, expected);
    }

    #[test]
    fn test_load_all_keys() {
        let mut settings = Settings::default();
        settings
            .load_str(
                "wsid=42\r\npassword=s3cr=t\ndefault_target=DR10\ndefault_queue=500\n\
                 default_days=3\nverbose=True\ndebug=false\n",
            )
            .unwrap();

        assert_eq!(settings.wsid, Some(42));
        assert_eq!(settings.password.as_ref().map(Password::expose), Some("s3cr=t"));
        assert_eq!(settings.target, DataTarget::Dr10);
        assert_eq!(settings.queue, 500);
        assert_eq!(settings.days, 3);
        assert!(settings.verbose);
        assert!(!settings.debug);
    }

    #[test]
    fn test_unknown_key_ignored() {
        let mut settings = Settings::default();
        settings.load_str("colour=blue\n").unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_misspelled_target_key_accepted() {
        let mut settings = Settings::default();
        settings.load_str("dafault_target=DR9").unwrap();
        assert_eq!(settings.target, DataTarget::Dr9);
    }

    #[test]
    fn test_invalid_target_rejected() {
        let mut settings = Settings::default();
        let err = settings.load_str("default_target=DR42\n").unwrap_err();
        assert!(matches!(err, CasJobsError::InvalidTarget(ref t) if t == "DR42"));
        assert_eq!(settings.target, DataTarget::Dr13);
    }

    #[test]
    fn test_blank_lines_skipped() {
        let mut settings = Settings::default();
        settings.load_str("\nwsid=5\n   \r\n\ndefault_queue=2\n").unwrap();
        assert_eq!(settings.wsid, Some(5));
        assert_eq!(settings.queue, 2);
    }

    #[test]
    fn test_malformed_line() {
        let mut settings = Settings::default();
        let err = settings.load_str("wsid=1\n\njust text\n").unwrap_err();
        match err {
            CasJobsError::MalformedConfigLine { line, content } => {
                assert_eq!(line, 3);
                assert_eq!(content, "just text");
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(settings.wsid, Some(1));
    }

    #[test]
    fn test_invalid_integer() {
        let mut settings = Settings::default();
        let err = settings.load_str("default_queue=fast").unwrap_err();
        assert!(matches!(
            err,
            CasJobsError::InvalidConfigValue { ref key, ref value } if key == "default_queue" && value == "fast"
        ));
    }

    #[test]
    fn test_load_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "wsid=99").unwrap();
        writeln!(file, "password=hunter2").unwrap();
        writeln!(file, "verbose=FALSE").unwrap();

        let mut settings = Settings::default();
        settings.load_file(file.path()).unwrap();
        assert_eq!(settings.wsid, Some(99));
        assert_eq!(settings.password, Some(Password::new("hunter2")));
        assert!(!settings.verbose);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("CasJobs.config");

        let mut settings = Settings::default();
        let err = settings.load_file(&path).unwrap_err();
        assert!(matches!(err, CasJobsError::ConfigNotFound(ref p) if p == &path));
    }

    #[test]
    fn test_password_redacted() {
        let mut settings = Settings::default();
        settings.password = Some(Password::new("hunter2"));
        let rendered = format!("{:?}", settings);
        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains("***"));
        assert_eq!(Password::new("hunter2").to_string(), "***");
    }
}
