//! Create a named project from the template.
//!
//! Responsibility: validate the raw arguments, pick the filesystem adapter,
//! call the core scaffold service, and display progress. No naming rules
//! live here.

use tracing::{debug, info, instrument, warn};

use namer_adapters::{LocalFilesystem, PreviewFilesystem};
use namer_core::{
    application::{Filesystem, ScaffoldEvent, ScaffoldRequest, ScaffoldService},
    domain::{ProjectName, TemplateLayout, strip_quotes},
    error::NamerError,
};

use crate::{
    cli::CreateArgs,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute a scaffold run.
///
/// Dispatch sequence:
/// 1. Validate the project name, then the target path (no writes yet)
/// 2. Resolve the template root from the working directory
/// 3. Scaffold through `ScaffoldService`, printing progress as it goes
/// 4. Report "Done!" or "Failed."
#[instrument(skip_all, fields(project = %args.name))]
pub fn execute(args: CreateArgs, output: OutputManager) -> CliResult<()> {
    // Dry runs read the real template but keep every write in memory.
    let preview = args.dry_run.then(PreviewFilesystem::new);
    let filesystem: Box<dyn Filesystem> = match &preview {
        Some(preview) => Box::new(preview.clone()),
        None => Box::new(LocalFilesystem::new()),
    };
    let service = ScaffoldService::new(filesystem, TemplateLayout::default());

    // 1. Validate inputs
    let name = ProjectName::parse(strip_quotes(&args.name)).map_err(NamerError::from)?;
    let target_path = service.validate_target_path(strip_quotes(&args.path))?;
    debug!(name = %name, target = %target_path.display(), "Arguments validated");

    // 2. Template root
    let tool_dir = std::env::current_dir().map_err(|e| CliError::IoError {
        message: "failed to resolve the working directory".into(),
        source: e,
    })?;
    let template_root = service.layout().template_root(&tool_dir);

    let request = ScaffoldRequest {
        name,
        target_path,
        template_root,
    };

    // 3. Scaffold
    output.header(&format!(
        "--- Creating \"{}\" to \"{}\"...",
        request.name,
        request.target_path.display()
    ))?;

    let mut write_error = None;
    let result = service.scaffold_with(&request, |event| {
        if let Err(e) = report_event(&output, event, args.dry_run) {
            write_error.get_or_insert(e);
        }
    });

    // 4. Outcome
    let report = match result {
        Ok(report) => report,
        Err(e) => {
            if !e.is_root_creation_failure() {
                warn!(
                    error = %e,
                    "Aborted after creating the project root; partial output left in place"
                );
            }
            output.error("--- Failed. ---")?;
            return Err(e.into());
        }
    };
    if let Some(e) = write_error {
        return Err(e.into());
    }

    info!(
        root = %report.root.display(),
        directories = report.directories,
        files = report.files,
        "Project created"
    );

    if let Some(preview) = preview {
        output.info(&format!(
            "Dry run: would create {} directories and {} files",
            report.directories, report.files
        ))?;
        for path in preview.planned() {
            output.print(&format!("  {}", path.display()))?;
        }
        return Ok(());
    }

    output.success(&format!(
        "{} directories and {} files written to {}",
        report.directories,
        report.files,
        report.root.display()
    ))?;
    output.header("--- Done! ---")?;

    Ok(())
}

fn report_event(
    output: &OutputManager,
    event: ScaffoldEvent<'_>,
    dry_run: bool,
) -> std::io::Result<()> {
    match progress_line(event, dry_run) {
        Some(line) => output.progress(&line),
        None => Ok(()),
    }
}

/// Progress line for an event, if it gets one.
fn progress_line(event: ScaffoldEvent<'_>, dry_run: bool) -> Option<String> {
    match event {
        ScaffoldEvent::RootCreated(root) if dry_run => {
            Some(format!("Would create the directory {}", root.display()))
        }
        ScaffoldEvent::RootCreated(root) => Some(format!(
            "Successfully created the directory {}",
            root.display()
        )),
        ScaffoldEvent::TemplateResolved(template) => {
            Some(format!("The template path is \"{}\"", template.display()))
        }
        ScaffoldEvent::DirectoryCreated(_) | ScaffoldEvent::FileWritten(_) => None,
    }
}
