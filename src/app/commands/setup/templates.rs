//! Static configuration templates. Always overwritten.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::app::AppContext;
use crate::domain::AppError;
use crate::domain::layout::{ENV_TEMPLATE, SYSTEM_CONFIG};
use crate::ports::{EnvironmentReader, ProcessRunner, ProjectStore};

/// Write `config/system_config.yaml` and `.env.example`, returning the paths written.
pub fn execute<S, P, E>(ctx: &AppContext<S, P, E>) -> Result<Vec<PathBuf>, AppError>
where
    S: ProjectStore,
    P: ProcessRunner,
    E: EnvironmentReader,
{
    let files = [
        (SYSTEM_CONFIG, ctx.assets().system_config()?),
        (ENV_TEMPLATE, ctx.assets().env_example()?),
    ];

    let mut written = Vec::with_capacity(files.len());
    for (path, content) in files {
        let path = Path::new(path);
        ctx.store().write_file(path, &content)?;
        info!(path = %path.display(), "Wrote template");
        written.push(path.to_path_buf());
    }

    Ok(written)
}

/// Render `.env.example` on its own, for seeding `.env` when setup did not run.
pub fn write_env_template<S, P, E>(ctx: &AppContext<S, P, E>) -> Result<(), AppError>
where
    S: ProjectStore,
    P: ProcessRunner,
    E: EnvironmentReader,
{
    ctx.store().write_file(Path::new(ENV_TEMPLATE), &ctx.assets().env_example()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::LauncherConfig;
    use crate::testing::{MemoryProjectStore, RecordingRunner, StaticEnvironment};

    fn context(store: MemoryProjectStore) -> AppContext<MemoryProjectStore, RecordingRunner, StaticEnvironment> {
        AppContext::new(store, RecordingRunner::new(), StaticEnvironment::new(), LauncherConfig::default())
            .unwrap()
    }

    #[test]
    fn writes_both_templates() {
        let store = MemoryProjectStore::new();
        let ctx = context(store.clone());

        let written = execute(&ctx).unwrap();

        assert_eq!(written, vec![PathBuf::from(SYSTEM_CONFIG), PathBuf::from(ENV_TEMPLATE)]);
        assert!(store.file(SYSTEM_CONFIG).unwrap().contains("${OPENAI_API_KEY}"));
        assert!(store.file(ENV_TEMPLATE).unwrap().contains("ANTHROPIC_API_KEY="));
    }

    #[test]
    fn overwrites_local_edits() {
        let store = MemoryProjectStore::new().with_file(SYSTEM_CONFIG, "edited: true\n");
        let ctx = context(store.clone());

        execute(&ctx).unwrap();

        assert!(!store.file(SYSTEM_CONFIG).unwrap().contains("edited"));
    }
}
