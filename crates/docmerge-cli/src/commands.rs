//! Command entry points for the docmerge CLI.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use docmerge_cli::input::{InputKind, file_name_of, load_records};
use docmerge_core::{
    PipelineError, UploadPreview, default_filename_template, generate_archive, preview_upload,
};
use docmerge_model::{
    ColumnFeedback, ColumnRequirement, Enforcement, GenerateRequest, NullPolicy, PreviewOptions,
};

use crate::cli::{GenerateArgs, NullPolicyArg, PreviewArgs, RequiredColumnArgs};

/// Everything `preview` prints.
pub struct PreviewReport {
    pub file: PathBuf,
    pub preview: UploadPreview,
}

/// Everything `generate` prints.
pub struct GenerateReport {
    pub archive_path: PathBuf,
    pub documents: usize,
    pub archive_bytes: usize,
    pub feedback: ColumnFeedback,
    pub missing_columns: Vec<String>,
}

pub fn run_preview(args: &PreviewArgs) -> Result<PreviewReport> {
    let span = info_span!("preview", file = %args.file.display());
    let _guard = span.enter();
    let start = Instant::now();

    let bytes = fs::read(&args.file).with_context(|| format!("read {}", args.file.display()))?;
    let file_name = file_name_of(&args.file)?;
    let options = PreviewOptions::new()
        .with_preview_rows(args.rows)
        .with_required(column_requirement(&args.columns));
    let preview = preview_upload(&bytes, file_name, &options)?;

    info!(
        rows = preview.table.row_count(),
        columns = preview.columns.len(),
        duration_ms = start.elapsed().as_millis(),
        "preview complete"
    );
    Ok(PreviewReport {
        file: args.file.clone(),
        preview,
    })
}

pub fn run_generate(args: &GenerateArgs) -> Result<GenerateReport> {
    let span = info_span!("generate", file = %args.file.display());
    let _guard = span.enter();
    let start = Instant::now();

    let bytes = fs::read(&args.file).with_context(|| format!("read {}", args.file.display()))?;
    let requirement = column_requirement(&args.columns);
    let kind = InputKind::from_path(&args.file)?;

    let (table, feedback, missing_columns, default_template) = match kind {
        InputKind::Records => {
            // Records payloads round-trip an earlier preview, so the values
            // arrive sanitized and only the column check remains.
            let table = load_records(&bytes)?;
            let missing = requirement.missing_from(&table.columns);
            if !missing.is_empty() && requirement.enforcement == Enforcement::Strict {
                return Err(PipelineError::MissingRequiredColumns { columns: missing }.into());
            }
            let template = default_filename_template(&table.columns, &requirement);
            (table, ColumnFeedback::new(), missing, template)
        }
        InputKind::Tabular(_) => {
            let file_name = file_name_of(&args.file)?;
            let options = PreviewOptions::new()
                .with_preview_rows(0)
                .with_required(requirement);
            let preview = preview_upload(&bytes, file_name, &options)?;
            (
                preview.table,
                preview.feedback,
                preview.missing_columns,
                preview.default_template,
            )
        }
    };

    let template = args.template.clone().unwrap_or(default_template);
    let mut request = GenerateRequest::new(template).with_null_policy(null_policy(args));
    if let Some(name) = &args.archive_name {
        request = request.with_archive_name(name.clone());
    }

    let documents = table.row_count();
    let archive = generate_archive(&table, &request)?;

    let output_dir = args
        .output_dir
        .clone()
        .unwrap_or_else(|| PathBuf::from("."));
    fs::create_dir_all(&output_dir)
        .with_context(|| format!("create {}", output_dir.display()))?;
    let archive_path = output_dir.join(&archive.file_name);
    fs::write(&archive_path, &archive.content)
        .with_context(|| format!("write {}", archive_path.display()))?;

    info!(
        documents,
        archive = %archive_path.display(),
        duration_ms = start.elapsed().as_millis(),
        "generate complete"
    );
    Ok(GenerateReport {
        archive_path,
        documents,
        archive_bytes: archive.content.len(),
        feedback,
        missing_columns,
    })
}

fn column_requirement(args: &RequiredColumnArgs) -> ColumnRequirement {
    let mut requirement = if args.no_required {
        ColumnRequirement::none()
    } else if args.require.is_empty() {
        ColumnRequirement::default()
    } else {
        ColumnRequirement::advisory(args.require.clone())
    };
    if args.strict_columns {
        requirement = requirement.with_enforcement(Enforcement::Strict);
    }
    requirement
}

fn null_policy(args: &GenerateArgs) -> NullPolicy {
    match args.null_policy {
        NullPolicyArg::Omit => NullPolicy::Omit,
        NullPolicyArg::Fill => NullPolicy::fill(args.null_value.clone()),
    }
}
