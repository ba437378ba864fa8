//! Handler for `pomcraft pom`.

use std::path::PathBuf;

use miette::Result;

use pomcraft_core::config::GlobalConfig;
use pomcraft_ops::ops_publish::{self, PublishOptions};

pub fn exec(with_javadoc_and_sources: bool, output_dir: Option<PathBuf>, stdout: bool) -> Result<()> {
    let project_root = super::project_root()?;
    let global = GlobalConfig::load()?;
    let opts = PublishOptions {
        with_javadoc_and_sources: super::flag_override(with_javadoc_and_sources),
        output_dir,
    };

    if stdout {
        let generated = ops_publish::render_pom(&project_root, &global, &opts)?;
        print!("{}", generated.xml);
        return Ok(());
    }

    let generated = ops_publish::generate_pom(&project_root, &global, &opts)?;
    let pom = generated.publication.pom();
    if let Some(path) = &generated.path {
        println!(
            "Generated POM for {}:{}:{} at {}",
            pom.group_id(),
            pom.artifact_id(),
            pom.version(),
            path.display()
        );
    }
    Ok(())
}
