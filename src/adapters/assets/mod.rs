//! Embedded templates and package catalog.

mod template_engine;

use include_dir::{Dir, include_dir};
use minijinja::{Environment, context};

use crate::domain::layout::storage;
use crate::domain::packages::parse_catalog_content;
use crate::domain::{AppError, CREDENTIAL_VARS, PackageCatalog};

use template_engine::{TemplateSource, build_template_environment, render_template_by_name};

static ASSETS_DIR: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/src/assets");

const TEMPLATES_DIR: &str = "templates";
const CATALOG_FILE: &str = "packages.toml";

const SYSTEM_CONFIG_TEMPLATE: &str = "system_config.yaml.j2";
const ENV_EXAMPLE_TEMPLATE: &str = "env.example.j2";
const HOOK_CONFIG_TEMPLATE: &str = "pre-commit-config.yaml.j2";

/// Templates and catalog compiled into the binary.
pub struct EmbeddedAssets {
    templates: Environment<'static>,
}

impl EmbeddedAssets {
    pub fn new() -> Result<Self, AppError> {
        let dir = ASSETS_DIR
            .get_dir(TEMPLATES_DIR)
            .ok_or_else(|| AppError::config_error("Embedded templates directory is missing"))?;

        let mut sources = Vec::new();
        for file in dir.files() {
            let name = file.path().file_name().and_then(|n| n.to_str()).ok_or_else(|| {
                AppError::config_error(format!("Invalid template path: {}", file.path().display()))
            })?;
            let content = file.contents_utf8().ok_or_else(|| AppError::Template {
                name: name.to_string(),
                details: "template is not valid UTF-8".to_string(),
            })?;
            sources.push(TemplateSource { name, content });
        }

        Ok(Self { templates: build_template_environment(&sources)? })
    }

    /// Package groups installed by setup.
    pub fn package_catalog(&self) -> Result<PackageCatalog, AppError> {
        let file = ASSETS_DIR
            .get_file(CATALOG_FILE)
            .ok_or_else(|| AppError::config_error("Embedded package catalog is missing"))?;
        let content = file
            .contents_utf8()
            .ok_or_else(|| AppError::config_error("Embedded package catalog is not valid UTF-8"))?;
        parse_catalog_content(content)
    }

    pub fn system_config(&self) -> Result<String, AppError> {
        let ctx = context! {
            storage => context! {
                memory => storage::MEMORY,
                vector_store => storage::VECTOR_STORE,
                knowledge_base => storage::KNOWLEDGE_BASE,
                models => storage::MODELS,
                outputs => storage::OUTPUTS,
                logs => storage::LOGS,
            },
        };
        render_template_by_name(&self.templates, SYSTEM_CONFIG_TEMPLATE, &ctx)
    }

    pub fn env_example(&self) -> Result<String, AppError> {
        let ctx = context! { credentials => CREDENTIAL_VARS.to_vec() };
        render_template_by_name(&self.templates, ENV_EXAMPLE_TEMPLATE, &ctx)
    }

    pub fn hook_config(&self) -> Result<String, AppError> {
        render_template_by_name(&self.templates, HOOK_CONFIG_TEMPLATE, &context! {})
    }
}
