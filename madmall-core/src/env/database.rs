//! Database connection string.

use super::{Constraint, EnvError, EnvSource, EnvVar, Exposure, Validator};

pub const DATABASE_URL: EnvVar = EnvVar {
    name: "DATABASE_URL",
    constraint: Constraint::Url,
    exposure: Exposure::Server,
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DatabaseKeys {
    pub database_url: Option<String>,
}

impl DatabaseKeys {
    pub fn from_env<E: EnvSource + ?Sized>(source: &E) -> Result<Self, EnvError> {
        let mut v = Validator::new(source);
        let keys = Self::read(&mut v);
        v.finish(keys)
    }

    pub(crate) fn read<E: EnvSource + ?Sized>(v: &mut Validator<'_, E>) -> Self {
        Self {
            database_url: v.read(&DATABASE_URL),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.database_url.is_some()
    }

    pub fn entries(&self) -> [(EnvVar, Option<&str>); 1] {
        [(DATABASE_URL, self.database_url.as_deref())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_database_url() {
        let env = HashMap::from([("DATABASE_URL", "postgres://localhost/madmall")]);
        assert!(DatabaseKeys::from_env(&env).unwrap().is_configured());

        let env = HashMap::from([("DATABASE_URL", "madmall-db")]);
        assert!(DatabaseKeys::from_env(&env).is_err());
    }
}
