use thiserror::Error;
use Error::*;

#[derive(Error, Debug)]
pub enum Error {
    #[error("malformed identifier {0:?}: expected <name>-<version> with exactly one '-'")]
    MalformedIdentifier(String),
}

/// Resolved OS and compiler combination for a single render.
#[derive(Debug, PartialEq, Eq)]
pub struct Target {
    pub os_name: String,
    pub os_version: String,
    pub compiler_name: String,
    pub compiler_version: String,
}

impl Target {
    pub fn parse(os: &str, compiler: &str) -> Result<Self, Error> {
        let (os_name, os_version) = split_identifier(os)?;
        let (compiler_name, compiler_version) = split_identifier(compiler)?;
        Ok(Self {
            os_name: os_name.to_string(),
            os_version: os_version.to_string(),
            compiler_name: compiler_name.to_string(),
            compiler_version: compiler_version.to_string(),
        })
    }
}

/// Split `<name>-<version>` on its single separator.
/// Identifiers with embedded hyphens in either part are rejected.
fn split_identifier(identifier: &str) -> Result<(&str, &str), Error> {
    match identifier.split('-').collect::<Vec<_>>()[..] {
        [name, version] if !name.is_empty() && !version.is_empty() => Ok((name, version)),
        _ => Err(MalformedIdentifier(identifier.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_os_and_compiler_identifiers() {
        let target = Target::parse("ubuntu-22.04", "gcc-11").unwrap();
        assert_eq!(
            target,
            Target {
                os_name: "ubuntu".into(),
                os_version: "22.04".into(),
                compiler_name: "gcc".into(),
                compiler_version: "11".into(),
            }
        );
    }

    #[test]
    fn rejects_identifier_without_separator() {
        let err = Target::parse("ubuntu", "gcc-11").unwrap_err();
        assert!(err.to_string().contains("ubuntu"));
    }

    #[test]
    fn rejects_identifier_with_multiple_separators() {
        assert!(Target::parse("ubuntu-22.04", "gcc-11-stage1").is_err());
    }

    #[test]
    fn rejects_empty_name_or_version() {
        assert!(Target::parse("-22.04", "gcc-11").is_err());
        assert!(Target::parse("ubuntu-22.04", "gcc-").is_err());
    }
}
