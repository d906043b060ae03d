use std::io::{self, Write};

use crate::{options::PackagesOptions, project::read_config, report};

pub fn packages(options: PackagesOptions) -> anyhow::Result<()> {
    let config = read_config(options.project_path.as_ref())?;
    let packages = config.package_list()?;

    let stdout = io::stdout();
    let mut output = stdout.lock();
    report::write_package_list(&mut output, &packages)?;
    output.flush()?;

    Ok(())
}
