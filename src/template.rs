use log::debug;
use minijinja::{path_loader, Environment, ErrorKind, UndefinedBehavior};
use serde::Serialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("template {name} not found under {}", root.display())]
    NotFound { name: String, root: PathBuf },

    #[error("load template {name}: {err}")]
    Load { name: String, err: minijinja::Error },

    #[error("render {name}: {err}")]
    Render { name: String, err: minijinja::Error },
}

/// Variables available inside a Dockerfile template.
#[derive(Debug, Serialize)]
pub struct RenderContext<'a> {
    pub os_version: &'a str,
    pub cc: &'a str,
    pub cxx: &'a str,
    pub compiler_version: &'a str,
}

/// Render `<os_name>/Dockerfile` from the template root.
///
/// Undefined variables are strict errors, so the output never contains
/// unresolved placeholders. Jinja whitespace rules apply: the template's
/// single trailing newline is not part of the output.
pub fn render(root: &Path, os_name: &str, ctx: &RenderContext) -> Result<String, Error> {
    let name = format!("{os_name}/Dockerfile");
    debug!("loading template {name} from {}", root.display());

    let mut env = Environment::new();
    env.set_loader(path_loader(root));
    env.set_undefined_behavior(UndefinedBehavior::Strict);

    let template = match env.get_template(&name) {
        Ok(template) => template,
        Err(err) if err.kind() == ErrorKind::TemplateNotFound => {
            return Err(Error::NotFound {
                name,
                root: root.to_path_buf(),
            })
        }
        Err(err) => return Err(Error::Load { name, err }),
    };

    template.render(ctx).map_err(|err| Error::Render { name, err })
}
