//! Handler for `pomcraft publications`.

use miette::Result;

use pomcraft_core::config::GlobalConfig;
use pomcraft_ops::ops_publish::{self, PublishOptions};
use pomcraft_util::errors::PomcraftError;

pub fn exec(with_javadoc_and_sources: bool, json: bool) -> Result<()> {
    let project_root = super::project_root()?;
    let global = GlobalConfig::load()?;
    let opts = PublishOptions {
        with_javadoc_and_sources: super::flag_override(with_javadoc_and_sources),
        output_dir: None,
    };

    let plan = ops_publish::plan(&project_root, &global, &opts)?;

    if json {
        let out = serde_json::to_string_pretty(&plan).map_err(|e| PomcraftError::Generic {
            message: format!("Failed to serialize publication plan: {e}"),
        })?;
        println!("{out}");
        return Ok(());
    }

    println!("Publication '{}' ({})", plan.publication, plan.coordinates);
    println!("  Files:");
    for file in &plan.files {
        println!("    {}", file.file_name);
    }

    if plan.destinations.is_empty() {
        println!("  No https repositories configured; nothing would be uploaded.");
        return Ok(());
    }

    println!("  Repositories:");
    for dest in &plan.destinations {
        println!("    {} ({} files)", dest.repository, dest.urls.len());
        for url in &dest.urls {
            println!("      {url}");
        }
    }
    Ok(())
}
