//! Setup-time option and retry schedule types.

use crate::error::{Result, RunAloneError};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use super::env::is_truthy;

/// Bounded count of re-attempts with a fixed wait between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetrySchedule {
    /// Number of re-attempts after the first failed lock attempt.
    pub times: u32,
    /// Seconds to sleep before each re-attempt. Always at least 1.
    pub interval_seconds: u64,
}

impl RetrySchedule {
    /// Create a schedule, clamping the interval to at least one second.
    pub fn new(times: u32, interval_seconds: u64) -> Self {
        Self {
            times,
            interval_seconds: interval_seconds.max(1),
        }
    }

    /// The wait before each re-attempt.
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_seconds)
    }
}

impl FromStr for RetrySchedule {
    type Err = RunAloneError;

    /// Parse `"N"` (one second interval) or `"N,M"`.
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || RunAloneError::InvalidRetry(s.to_string());
        let parse_part = |part: &str| -> Result<u64> {
            let part = part.trim();
            if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(invalid());
            }
            part.parse::<u64>().map_err(|_| invalid())
        };

        let mut parts = s.split(',');
        let times = parse_part(parts.next().unwrap_or_default())?;
        let interval = parts.next().map(parse_part).transpose()?.unwrap_or(1);
        if parts.next().is_some() {
            return Err(invalid());
        }

        let times = u32::try_from(times).map_err(|_| invalid())?;
        Ok(Self::new(times, interval))
    }
}

impl fmt::Display for RetrySchedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.times, self.interval_seconds)
    }
}

/// Options supplied by the host program (or the CLI) at setup time.
///
/// `retry` is kept unparsed: an environment override may replace it before
/// it is ever interpreted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SetupOptions {
    pub silent: Option<bool>,
    pub retry: Option<String>,
}

impl SetupOptions {
    /// No setup-time options; only the environment can configure the guard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build options from a flat argument list.
    ///
    /// A single bare value is the legacy form and means `silent = true`,
    /// whatever it says. Otherwise the list is read as `key, value` pairs; a
    /// trailing key without a value gets an empty one.
    pub fn from_args<I, S>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let args: Vec<S> = args.into_iter().collect();
        if let [_legacy] = args.as_slice() {
            return Ok(Self::new().silent(true));
        }

        let pairs = args
            .chunks(2)
            .map(|pair| (pair[0].as_ref(), pair.get(1).map_or("", |v| v.as_ref())));
        Self::from_pairs(pairs)
    }

    pub fn silent(mut self, silent: bool) -> Self {
        self.silent = Some(silent);
        self
    }

    pub fn retry(mut self, retry: impl Into<String>) -> Self {
        self.retry = Some(retry.into());
        self
    }

    /// Build options from key/value pairs.
    ///
    /// Recognised keys are `silent` (truthy string) and `retry`. Any other
    /// key is an error listing every unknown key in sorted order.
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut options = Self::default();
        let mut unknown = Vec::new();

        for (key, value) in pairs {
            match key.as_ref() {
                "silent" => options.silent = Some(is_truthy(value.as_ref())),
                "retry" => options.retry = Some(value.as_ref().to_string()),
                other => unknown.push(other.to_string()),
            }
        }

        if !unknown.is_empty() {
            unknown.sort();
            unknown.dedup();
            return Err(RunAloneError::UnknownOptions(unknown));
        }

        Ok(options)
    }

    /// Layer `other` on top of `self`: values set in `other` win.
    pub fn overlay(self, other: SetupOptions) -> Self {
        Self {
            silent: other.silent.or(self.silent),
            retry: other.retry.or(self.retry),
        }
    }
}
