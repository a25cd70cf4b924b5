//! Validation of the optional third-party integration variables.
//!
//! Every variable is opt-in: unset and empty both mean "not configured".
//! A set variable must satisfy its format constraint. All failures of one
//! validation pass are reported together.

pub mod analytics;
pub mod database;
pub mod email;
pub mod payments;

use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

pub use analytics::AnalyticsKeys;
pub use database::DatabaseKeys;
pub use email::EmailKeys;
pub use payments::PaymentKeys;

/// Lookup of environment variables by name.
pub trait EnvSource {
    fn var(&self, name: &str) -> Option<String>;
}

/// The real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

impl EnvSource for HashMap<String, String> {
    fn var(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

impl EnvSource for HashMap<&str, &str> {
    fn var(&self, name: &str) -> Option<String> {
        self.get(name).map(|v| v.to_string())
    }
}

fn email_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@([A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$")
            .expect("valid email regex")
    })
}

/// Format a set variable must satisfy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constraint {
    Url,
    Prefix(&'static str),
    Email,
}

impl Constraint {
    pub fn check(&self, value: &str) -> bool {
        match self {
            Self::Url => url::Url::parse(value).is_ok(),
            Self::Prefix(prefix) => value.starts_with(prefix),
            Self::Email => {
                !value.starts_with('.') && !value.contains("..") && email_re().is_match(value)
            }
        }
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Url => write!(f, "a valid URL"),
            Self::Prefix(prefix) => write!(f, "a value starting with `{}`", prefix),
            Self::Email => write!(f, "an email address"),
        }
    }
}

/// Whether a variable may be shipped to browsers or stays server-side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exposure {
    Client,
    Server,
}

/// A recognised variable and its constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnvVar {
    pub name: &'static str,
    pub constraint: Constraint,
    pub exposure: Exposure,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvIssue {
    pub var: &'static str,
    pub constraint: Constraint,
}

impl fmt::Display for EnvIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} must be empty or {}", self.var, self.constraint)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid environment variables: {}", join_issues(.issues))]
pub struct EnvError {
    pub issues: Vec<EnvIssue>,
}

fn join_issues(issues: &[EnvIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// One validation pass over a source; collects every failing variable.
pub struct Validator<'a, E: EnvSource + ?Sized> {
    source: &'a E,
    issues: Vec<EnvIssue>,
}

impl<'a, E: EnvSource + ?Sized> Validator<'a, E> {
    pub fn new(source: &'a E) -> Self {
        Self {
            source,
            issues: Vec::new(),
        }
    }

    /// Read `var`; `None` when unset, empty, or failing its constraint.
    pub fn read(&mut self, var: &EnvVar) -> Option<String> {
        let value = self.source.var(var.name).filter(|v| !v.is_empty())?;
        if var.constraint.check(&value) {
            Some(value)
        } else {
            self.issues.push(EnvIssue {
                var: var.name,
                constraint: var.constraint,
            });
            None
        }
    }

    pub fn finish<T>(self, value: T) -> Result<T, EnvError> {
        if self.issues.is_empty() {
            Ok(value)
        } else {
            Err(EnvError {
                issues: self.issues,
            })
        }
    }
}

/// Every integration validated in one pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntegrationKeys {
    pub analytics: AnalyticsKeys,
    pub database: DatabaseKeys,
    pub email: EmailKeys,
    pub payments: PaymentKeys,
}

impl IntegrationKeys {
    pub fn from_env<E: EnvSource + ?Sized>(source: &E) -> Result<Self, EnvError> {
        let mut v = Validator::new(source);
        let keys = Self {
            analytics: AnalyticsKeys::read(&mut v),
            database: DatabaseKeys::read(&mut v),
            email: EmailKeys::read(&mut v),
            payments: PaymentKeys::read(&mut v),
        };
        v.finish(keys)
    }

    /// Names of the integrations with at least one variable set.
    pub fn configured(&self) -> Vec<&'static str> {
        let mut names = Vec::new();
        if self.analytics.is_configured() {
            names.push("analytics");
        }
        if self.database.is_configured() {
            names.push("database");
        }
        if self.email.is_configured() {
            names.push("email");
        }
        if self.payments.is_configured() {
            names.push("payments");
        }
        names
    }

    /// Client-exposed variables that are set, for handing to page markup.
    pub fn client_vars(&self) -> Vec<(&'static str, &str)> {
        self.analytics
            .entries()
            .into_iter()
            .chain(self.database.entries())
            .chain(self.email.entries())
            .chain(self.payments.entries())
            .filter(|(var, _)| var.exposure == Exposure::Client)
            .filter_map(|(var, value)| value.map(|v| (var.name, v)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constraints() {
        assert!(Constraint::Url.check("https://eu.posthog.com"));
        assert!(Constraint::Url.check("postgresql://user:pw@db:5432/madmall"));
        assert!(!Constraint::Url.check("not a url"));
        assert!(Constraint::Prefix("sk_").check("sk_test_123"));
        assert!(!Constraint::Prefix("sk_").check("pk_test_123"));
        assert!(Constraint::Email.check("hello@madmall.org"));
        assert!(Constraint::Email.check("first.last+tag@mail.example.co"));
        assert!(!Constraint::Email.check("hello"));
        assert!(!Constraint::Email.check(".a@b.co"));
        assert!(!Constraint::Email.check("a..b@b.co"));
        assert!(!Constraint::Email.check("MADMall <hello@madmall.org>"));
    }

    #[test]
    fn test_empty_environment_is_valid() {
        let env: HashMap<&str, &str> = HashMap::new();
        let keys = IntegrationKeys::from_env(&env).unwrap();
        assert_eq!(keys, IntegrationKeys::default());
        assert!(keys.configured().is_empty());
    }

    #[test]
    fn test_empty_strings_are_accepted() {
        let env = HashMap::from([
            ("DATABASE_URL", ""),
            ("STRIPE_SECRET_KEY", ""),
            ("NEXT_PUBLIC_POSTHOG_HOST", ""),
        ]);
        let keys = IntegrationKeys::from_env(&env).unwrap();
        assert_eq!(keys.database.database_url, None);
        assert!(keys.configured().is_empty());
    }

    #[test]
    fn test_reports_every_failing_variable() {
        let env = HashMap::from([
            ("NEXT_PUBLIC_POSTHOG_KEY", "phx_oops"),
            ("DATABASE_URL", "localhost"),
            ("RESEND_FROM", "hello@madmall.org"),
            ("STRIPE_WEBHOOK_SECRET", "secret"),
        ]);
        let err = IntegrationKeys::from_env(&env).unwrap_err();
        let vars: Vec<_> = err.issues.iter().map(|i| i.var).collect();
        assert_eq!(
            vars,
            ["NEXT_PUBLIC_POSTHOG_KEY", "DATABASE_URL", "STRIPE_WEBHOOK_SECRET"]
        );
        let message = err.to_string();
        assert!(message.contains("STRIPE_WEBHOOK_SECRET must be empty or a value starting with `whsec_`"));
        assert!(!message.contains("phx_oops"));
    }

    #[test]
    fn test_configured_integrations() {
        let env = HashMap::from([
            ("NEXT_PUBLIC_GA_MEASUREMENT_ID", "G-ABC123"),
            ("RESEND_TOKEN", "re_123"),
        ]);
        let keys = IntegrationKeys::from_env(&env).unwrap();
        assert_eq!(keys.configured(), ["analytics", "email"]);
        assert_eq!(
            keys.client_vars(),
            [("NEXT_PUBLIC_GA_MEASUREMENT_ID", "G-ABC123")]
        );
    }

    #[test]
    fn test_client_vars_never_include_server_secrets() {
        let env = HashMap::from([
            ("NEXT_PUBLIC_POSTHOG_KEY", "phc_abc"),
            ("NEXT_PUBLIC_POSTHOG_HOST", "https://eu.posthog.com"),
            ("DATABASE_URL", "postgres://db/madmall"),
            ("RESEND_FROM", "hello@madmall.org"),
            ("RESEND_TOKEN", "re_123"),
            ("STRIPE_SECRET_KEY", "sk_test_1"),
            ("STRIPE_WEBHOOK_SECRET", "whsec_2"),
        ]);
        let keys = IntegrationKeys::from_env(&env).unwrap();
        let names: Vec<_> = keys.client_vars().into_iter().map(|(name, _)| name).collect();
        assert_eq!(names, ["NEXT_PUBLIC_POSTHOG_KEY", "NEXT_PUBLIC_POSTHOG_HOST"]);
        assert_eq!(keys.configured(), ["analytics", "database", "email", "payments"]);
    }
}
