use crate::config::{starter_config, CONFIG_FILE_NAME};
use crate::session::file::starter_assessment;
use anyhow::Result;
use std::fs;
use std::path::Path;

const ASSESSMENT_FILE_NAME: &str = "assessment.toml";

pub fn run(force: bool) -> Result<()> {
    write_starter(Path::new(CONFIG_FILE_NAME), starter_config(), force)?;
    write_starter(Path::new(ASSESSMENT_FILE_NAME), starter_assessment(), force)?;
    println!("Edit {ASSESSMENT_FILE_NAME}, then run `lossmap report {ASSESSMENT_FILE_NAME}`");
    Ok(())
}

fn write_starter(path: &Path, content: &str, force: bool) -> Result<()> {
    if path.exists() && !force {
        anyhow::bail!("{} already exists. Use --force to overwrite.", path.display());
    }
    fs::write(path, content)?;
    println!("Created {}", path.display());
    Ok(())
}
