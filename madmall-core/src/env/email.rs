//! Transactional email (Resend).

use super::{Constraint, EnvError, EnvSource, EnvVar, Exposure, Validator};

pub const RESEND_FROM: EnvVar = EnvVar {
    name: "RESEND_FROM",
    constraint: Constraint::Email,
    exposure: Exposure::Server,
};

pub const RESEND_TOKEN: EnvVar = EnvVar {
    name: "RESEND_TOKEN",
    constraint: Constraint::Prefix("re_"),
    exposure: Exposure::Server,
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmailKeys {
    pub from: Option<String>,
    pub token: Option<String>,
}

impl EmailKeys {
    pub fn from_env<E: EnvSource + ?Sized>(source: &E) -> Result<Self, EnvError> {
        let mut v = Validator::new(source);
        let keys = Self::read(&mut v);
        v.finish(keys)
    }

    pub(crate) fn read<E: EnvSource + ?Sized>(v: &mut Validator<'_, E>) -> Self {
        Self {
            from: v.read(&RESEND_FROM),
            token: v.read(&RESEND_TOKEN),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.from.is_some() || self.token.is_some()
    }

    pub fn entries(&self) -> [(EnvVar, Option<&str>); 2] {
        [
            (RESEND_FROM, self.from.as_deref()),
            (RESEND_TOKEN, self.token.as_deref()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_sender_must_be_email() {
        let env = HashMap::from([("RESEND_FROM", "madmall"), ("RESEND_TOKEN", "tok_1")]);
        let err = EmailKeys::from_env(&env).unwrap_err();
        let vars: Vec<_> = err.issues.iter().map(|i| i.var).collect();
        assert_eq!(vars, ["RESEND_FROM", "RESEND_TOKEN"]);
    }
}
