//! Product analytics (PostHog, Google Analytics). Exposed to browsers.

use super::{Constraint, EnvSource, EnvVar, Exposure, Validator};

pub const POSTHOG_KEY: EnvVar = EnvVar {
    name: "NEXT_PUBLIC_POSTHOG_KEY",
    constraint: Constraint::Prefix("phc_"),
    exposure: Exposure::Client,
};

pub const POSTHOG_HOST: EnvVar = EnvVar {
    name: "NEXT_PUBLIC_POSTHOG_HOST",
    constraint: Constraint::Url,
    exposure: Exposure::Client,
};

pub const GA_MEASUREMENT_ID: EnvVar = EnvVar {
    name: "NEXT_PUBLIC_GA_MEASUREMENT_ID",
    constraint: Constraint::Prefix("G-"),
    exposure: Exposure::Client,
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnalyticsKeys {
    pub posthog_key: Option<String>,
    pub posthog_host: Option<String>,
    pub ga_measurement_id: Option<String>,
}

impl AnalyticsKeys {
    pub fn from_env<E: EnvSource + ?Sized>(source: &E) -> Result<Self, super::EnvError> {
        let mut v = Validator::new(source);
        let keys = Self::read(&mut v);
        v.finish(keys)
    }

    pub(crate) fn read<E: EnvSource + ?Sized>(v: &mut Validator<'_, E>) -> Self {
        Self {
            posthog_key: v.read(&POSTHOG_KEY),
            posthog_host: v.read(&POSTHOG_HOST),
            ga_measurement_id: v.read(&GA_MEASUREMENT_ID),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.entries().iter().any(|(_, value)| value.is_some())
    }

    /// Each variable paired with its validated value.
    pub fn entries(&self) -> [(EnvVar, Option<&str>); 3] {
        [
            (POSTHOG_KEY, self.posthog_key.as_deref()),
            (POSTHOG_HOST, self.posthog_host.as_deref()),
            (GA_MEASUREMENT_ID, self.ga_measurement_id.as_deref()),
        ]
    }
}
