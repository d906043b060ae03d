use std::io::{self, BufWriter, Write};

use fs_err as fs;

use crate::{
    options::{PlanOptions, ReportFormat},
    project::Project,
    report,
};

pub fn plan(options: PlanOptions) -> anyhow::Result<()> {
    let project = Project::load(&options.project)?;
    let result = project.plan()?;

    let mut output: Box<dyn Write> = match &options.output {
        Some(path) => {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }

            Box::new(BufWriter::new(fs::File::create(path)?))
        }
        None => Box::new(io::stdout()),
    };

    match options.format {
        ReportFormat::Text => report::write_text(&mut output, &project.name, &result)?,
        ReportFormat::Json => {
            report::write_json(&mut output, &project.name, &result)?;
            writeln!(output)?;
        }
    }

    output.flush()?;

    Ok(())
}
