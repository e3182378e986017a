use std::{
    fs,
    path::PathBuf,
    process::{Command, Output},
};

use anyhow::{Context, Result};
use insta_cmd::get_cargo_bin;
use tempfile::TempDir;

mod analyze;
mod serve;

const BIN_NAME: &str = "callmap";

pub struct CliTest {
    _temp_dir: TempDir,
    project_dir: PathBuf,
}

impl CliTest {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let project_dir = temp_dir.path().canonicalize()?;
        Ok(Self { _temp_dir: temp_dir, project_dir })
    }

    pub fn write_file(&self, path: &str, content: &str) -> Result<()> {
        let file_path = self.project_dir.join(path);
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create directory: {}", parent.display()))?;
        }
        fs::write(&file_path, content)
            .with_context(|| format!("failed to write file: {}", file_path.display()))?;
        Ok(())
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::new(get_cargo_bin(BIN_NAME));
        cmd.current_dir(&self.project_dir);
        cmd.env_clear();
        cmd.env("NO_COLOR", "1");
        cmd
    }

    pub fn analyze_command(&self) -> Command {
        self.command()
    }

    pub fn run(&self, mut cmd: Command) -> Result<Output> {
        cmd.output().context("failed to spawn callmap")
    }

    pub fn read_output_json(&self, out_name: &str) -> Result<serde_json::Value> {
        let text = fs::read_to_string(self.project_dir.join(out_name))
            .with_context(|| format!("failed to read {out_name}"))?;
        Ok(serde_json::from_str(&text)?)
    }
}
