use serde::Deserialize;
use std::collections::HashMap;
use thiserror::Error;

const DEFAULT_CONFIG: &str = include_str!("../defaults.toml");

#[derive(Error, Debug)]
pub enum Error {
    #[error("no C++ compiler mapping for {0:?}")]
    UnknownCompiler(String),
}

/// Built-in defaults, compiled into the program.
#[derive(Deserialize, Debug)]
pub struct Defaults {
    pub description: Option<String>,
    /// C compiler name to C++ compiler name.
    pub compilers: HashMap<String, String>,
}

impl Default for Defaults {
    fn default() -> Self {
        // The defaults are compiled into the program, so
        // make sure to test default() to catch panics compile-time.
        toml::from_str(DEFAULT_CONFIG).unwrap()
    }
}

impl Defaults {
    /// Resolve the C++ compiler name for a C compiler name.
    pub fn cxx_for(&self, cc: &str) -> Result<&str, Error> {
        self.compilers
            .get(cc)
            .map(String::as_str)
            .ok_or_else(|| Error::UnknownCompiler(cc.to_string()))
    }
}

#[cfg(test)]
pub mod test {
    use super::Defaults;

    #[test]
    pub fn load_default_configuration() {
        let cfg = Defaults::default();
        assert_eq!(cfg.description, Some("Built-in defaults".into()))
    }

    #[test]
    pub fn known_compilers_resolve() {
        let cfg = Defaults::default();
        assert_eq!(cfg.cxx_for("gcc").unwrap(), "g++");
        assert_eq!(cfg.cxx_for("clang").unwrap(), "clang++");
    }

    #[test]
    pub fn unknown_compiler_is_named_in_error() {
        let cfg = Defaults::default();
        let err = cfg.cxx_for("icc").unwrap_err();
        assert_eq!(err.to_string(), r#"no C++ compiler mapping for "icc""#);
    }
}
