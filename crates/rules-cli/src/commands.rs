use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Local;
use serde::Serialize;
use tracing::{error, info, info_span};

use rules_map::{SummaryTables, TatTables, TripletTables};
use rules_transform::{
    ConversionReport, WorkflowStatistics, convert_lum, convert_tat, convert_workflow,
    load_overrides, load_worksheet,
};
use rules_cli::output::{default_output_path, write_json};

use crate::cli::{LumArgs, SourceArgs, TatArgs, WorkflowArgs};

/// What a finished run reports back to `main`.
pub struct RunOutcome {
    pub family: &'static str,
    pub report: ConversionReport,
    /// `None` on a dry run.
    pub output: Option<PathBuf>,
    pub statistics: Option<WorkflowStatistics>,
}

pub fn run_lum(args: &LumArgs) -> Result<RunOutcome> {
    let source = &args.source;
    let span = info_span!("convert", family = "lum", input = %source.input.display());
    let _guard = span.enter();

    let mut tables = TripletTables::default();
    load_overrides(source.mappings.as_deref())
        .context("load mapping overrides")?
        .apply_triplet(&mut tables);
    let sheet = load_worksheet(&source.input, source.sheet.as_deref())
        .with_context(|| format!("read {}", source.input.display()))?;

    let conversion = convert_lum(&sheet, &tables)
        .inspect_err(|err| error!(error = %err, "conversion aborted; no output written"))?;

    let output = finish(source, &args.output, &conversion.output, conversion.output.rules.len())?;
    Ok(RunOutcome {
        family: "lum",
        report: conversion.report,
        output,
        statistics: None,
    })
}

pub fn run_tat(args: &TatArgs) -> Result<RunOutcome> {
    let source = &args.source;
    let span = info_span!("convert", family = "tat", input = %source.input.display());
    let _guard = span.enter();

    let mut tables = TatTables::default();
    load_overrides(source.mappings.as_deref())
        .context("load mapping overrides")?
        .apply_tat(&mut tables);
    let sheet = load_worksheet(&source.input, source.sheet.as_deref())
        .with_context(|| format!("read {}", source.input.display()))?;

    let conversion = convert_tat(&sheet, &tables);
    let path = args
        .output
        .clone()
        .unwrap_or_else(|| default_output_path("TAT_Rules", &Local::now()));
    let output = finish(source, &path, &conversion.output, conversion.output.rules.len())?;
    Ok(RunOutcome {
        family: "tat",
        report: conversion.report,
        output,
        statistics: None,
    })
}

pub fn run_workflow(args: &WorkflowArgs) -> Result<RunOutcome> {
    let source = &args.source;
    let span = info_span!("convert", family = "workflow", input = %source.input.display());
    let _guard = span.enter();

    let mut tables = SummaryTables::default();
    load_overrides(source.mappings.as_deref())
        .context("load mapping overrides")?
        .apply_summary(&mut tables);
    let sheet_name = source
        .sheet
        .clone()
        .unwrap_or_else(|| tables.default_sheet.clone());
    let sheet = load_worksheet(&source.input, Some(sheet_name.as_str()))
        .with_context(|| format!("read {}", source.input.display()))?;

    let conversion = convert_workflow(&sheet, &tables).context("build summary decoder")?;
    let statistics = WorkflowStatistics::from_rules(&conversion.output);
    let path = args
        .output
        .clone()
        .unwrap_or_else(|| default_output_path("Workflow_Rules", &Local::now()));
    let output = finish(source, &path, &conversion.output, conversion.output.len())?;
    Ok(RunOutcome {
        family: "workflow",
        report: conversion.report,
        output,
        statistics: Some(statistics),
    })
}

/// Writes the document unless this is a dry run.
fn finish<T: Serialize>(
    source: &SourceArgs,
    path: &Path,
    document: &T,
    rules: usize,
) -> Result<Option<PathBuf>> {
    if source.dry_run {
        info!(rules, "dry run; output not written");
        return Ok(None);
    }
    write_json(path, document)?;
    info!(rules, output = %path.display(), "wrote rules");
    Ok(Some(path.to_path_buf()))
}
