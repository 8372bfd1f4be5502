use crate::adapters::EmbeddedAssets;
use crate::app::config::load_config;
use crate::domain::{AppError, LauncherConfig};
use crate::ports::{EnvironmentReader, ProcessRunner, ProjectStore};

/// Application context holding dependencies for command execution.
pub struct AppContext<S: ProjectStore, P: ProcessRunner, E: EnvironmentReader> {
    store: S,
    runner: P,
    env: E,
    config: LauncherConfig,
    assets: EmbeddedAssets,
}

impl<S: ProjectStore, P: ProcessRunner, E: EnvironmentReader> AppContext<S, P, E> {
    /// Create a new application context with an explicit configuration.
    pub fn new(store: S, runner: P, env: E, config: LauncherConfig) -> Result<Self, AppError> {
        config.validate()?;
        Ok(Self { store, runner, env, config, assets: EmbeddedAssets::new()? })
    }

    /// Create a context, reading `aisys.toml` and environment overrides.
    pub fn load(store: S, runner: P, env: E) -> Result<Self, AppError> {
        let config = load_config(&store, &env)?;
        Self::new(store, runner, env, config)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn runner(&self) -> &P {
        &self.runner
    }

    pub fn env(&self) -> &E {
        &self.env
    }

    pub fn config(&self) -> &LauncherConfig {
        &self.config
    }

    pub fn assets(&self) -> &EmbeddedAssets {
        &self.assets
    }
}
