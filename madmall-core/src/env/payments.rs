//! Payments (Stripe).

use super::{Constraint, EnvError, EnvSource, EnvVar, Exposure, Validator};

pub const STRIPE_SECRET_KEY: EnvVar = EnvVar {
    name: "STRIPE_SECRET_KEY",
    constraint: Constraint::Prefix("sk_"),
    exposure: Exposure::Server,
};

pub const STRIPE_WEBHOOK_SECRET: EnvVar = EnvVar {
    name: "STRIPE_WEBHOOK_SECRET",
    constraint: Constraint::Prefix("whsec_"),
    exposure: Exposure::Server,
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaymentKeys {
    pub secret_key: Option<String>,
    pub webhook_secret: Option<String>,
}

impl PaymentKeys {
    pub fn from_env<E: EnvSource + ?Sized>(source: &E) -> Result<Self, EnvError> {
        let mut v = Validator::new(source);
        let keys = Self::read(&mut v);
        v.finish(keys)
    }

    pub(crate) fn read<E: EnvSource + ?Sized>(v: &mut Validator<'_, E>) -> Self {
        Self {
            secret_key: v.read(&STRIPE_SECRET_KEY),
            webhook_secret: v.read(&STRIPE_WEBHOOK_SECRET),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.secret_key.is_some() || self.webhook_secret.is_some()
    }

    pub fn entries(&self) -> [(EnvVar, Option<&str>); 2] {
        [
            (STRIPE_SECRET_KEY, self.secret_key.as_deref()),
            (STRIPE_WEBHOOK_SECRET, self.webhook_secret.as_deref()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_stripe_prefixes() {
        let env = HashMap::from([
            ("STRIPE_SECRET_KEY", "sk_live_x"),
            ("STRIPE_WEBHOOK_SECRET", "whsec_y"),
        ]);
        let keys = PaymentKeys::from_env(&env).unwrap();
        assert_eq!(keys.secret_key.as_deref(), Some("sk_live_x"));
        assert_eq!(keys.webhook_secret.as_deref(), Some("whsec_y"));

        let env = HashMap::from([("STRIPE_SECRET_KEY", "pk_live_x")]);
        assert!(PaymentKeys::from_env(&env).is_err());
    }
}
