use std::path::Path;

use tokio::process::Command;
use tracing::{debug, info};

use crate::error::{GeneratorError, GeneratorResult};

const GIT_ARGS: &[&str] = &[
    "submodule",
    "update",
    "--remote",
    "--init",
    "--force",
    "--recursive",
];

/// Pull the latest icon sources into the vendored `core` submodule.
pub async fn update_submodules(root: &Path) -> GeneratorResult<()> {
    info!(root = %root.display(), "Updating git submodules");

    let output = Command::new("git")
        .args(GIT_ARGS)
        .current_dir(root)
        .output()
        .await
        .map_err(|e| GeneratorError::SubmoduleRefresh(format!("failed to run git: {}", e)))?;

    let stderr = String::from_utf8_lossy(&output.stderr);
    if !stderr.trim().is_empty() {
        debug!(stderr = %stderr.trim(), "git submodule output");
    }

    if !output.status.success() {
        return Err(GeneratorError::SubmoduleRefresh(format!(
            "git exited with {}: {}",
            output.status,
            stderr.trim()
        )));
    }

    info!("Updated submodule @phosphor-icons/core");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_update_outside_repository_fails() {
        let dir = tempfile::tempdir().unwrap();
        let result = update_submodules(dir.path()).await;
        assert!(matches!(result, Err(GeneratorError::SubmoduleRefresh(_))));
    }
}
