//! `build`: convert a whole icon directory.
//!
//! Pipeline:
//! - **Clean** - optionally remove the output directory
//! - **Collect** - walk `build.input` for `*.svg` (sorted, so naming is stable)
//! - **Name** - assign unique component names sequentially
//! - **Convert** - transform and write in parallel, skipping unchanged files
//! - **Index** - write the barrel module
//! - **Report** - summary plus every per-file failure

use anyhow::{Context, Result, bail};
use jwalk::WalkDir;
use rayon::prelude::*;
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{
    config::ProjectConfig, debug, log, logger::ProgressLine, naming::NameRegistry, template,
};

/// One icon scheduled for conversion.
#[derive(Debug, Clone)]
struct Job {
    source: PathBuf,
    name: String,
}

#[derive(Debug)]
enum Outcome {
    Written,
    Unchanged,
    Failed(String),
}

/// Result of a batch build.
#[derive(Debug, Default)]
pub struct BuildReport {
    pub written: usize,
    pub unchanged: usize,
    /// `(source, error)` for every file that could not be converted.
    pub failed: Vec<(PathBuf, String)>,
    /// Component names in output order.
    pub components: Vec<String>,
}

impl BuildReport {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Entry point for the `build` command.
pub fn run_build(config: &ProjectConfig) -> Result<()> {
    let report = build_components(config, false)?;

    for (path, error) in &report.failed {
        log!("error"; "{}: {}", config.root_relative(path).display(), error);
    }
    log!(
        "build";
        "{} written, {} unchanged, {} failed",
        plural_count(report.written, "component"),
        report.unchanged,
        report.failed.len()
    );

    if !report.is_success() {
        bail!("{} failed to convert", plural_count(report.failed.len(), "icon"));
    }
    Ok(())
}

/// Convert every svg under `build.input` into `build.output`.
pub fn build_components(config: &ProjectConfig, quiet: bool) -> Result<BuildReport> {
    let build = &config.build;

    if build.clean && build.output.exists() {
        fs::remove_dir_all(&build.output)
            .with_context(|| format!("Failed to clean {}", build.output.display()))?;
        debug!("build"; "cleaned {}", build.output.display());
    }
    fs::create_dir_all(&build.output)
        .with_context(|| format!("Failed to create {}", build.output.display()))?;

    let jobs = plan_jobs(collect_svg_files(&build.input), &config.naming.prefix);
    debug!("build"; "found {} in {}", plural_count(jobs.len(), "svg"), build.input.display());

    let progress = (!quiet && !jobs.is_empty()).then(|| ProgressLine::new(&[("svg", jobs.len())]));
    let options = build.template_options();

    let outcomes: Vec<Outcome> = jobs
        .par_iter()
        .map(|job| {
            let outcome = convert_job(job, &build.output, &options);
            if let Some(p) = &progress {
                p.inc("svg");
            }
            outcome
        })
        .collect();

    if let Some(p) = progress {
        p.finish();
    }

    let mut report = BuildReport::default();
    for (job, outcome) in jobs.into_iter().zip(outcomes) {
        match outcome {
            Outcome::Written => report.written += 1,
            Outcome::Unchanged => report.unchanged += 1,
            Outcome::Failed(error) => {
                report.failed.push((job.source, error));
                continue;
            }
        }
        report.components.push(job.name);
    }

    if build.index {
        let index_path = build.output.join(build.index_file_name());
        write_if_changed(&index_path, &render_index(&report.components))?;
    }

    Ok(report)
}

/// All `*.svg` files below `dir`, sorted.
fn collect_svg_files(dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .map(|e| e.path())
        .filter(|p| {
            p.extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"))
        })
        .collect();
    files.sort();
    files
}

/// Assign names in path order so repeated builds produce the same files.
fn plan_jobs(files: Vec<PathBuf>, prefix: &str) -> Vec<Job> {
    let mut registry = NameRegistry::new(prefix);
    files
        .into_iter()
        .map(|source| {
            let stem = source
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default();
            let name = registry.claim(&stem);
            Job { source, name }
        })
        .collect()
}

fn convert_job(job: &Job, output_dir: &Path, options: &template::TemplateOptions) -> Outcome {
    match convert_file(job, output_dir, options) {
        Ok(true) => Outcome::Written,
        Ok(false) => Outcome::Unchanged,
        Err(e) => Outcome::Failed(format!("{e:#}")),
    }
}

fn convert_file(job: &Job, output_dir: &Path, options: &template::TemplateOptions) -> Result<bool> {
    let raw = fs::read_to_string(&job.source).context("read failed")?;
    let component = template::transform(&raw, options)?;
    if !component.has_fragment {
        bail!("no <svg> element found");
    }
    write_if_changed(&output_dir.join(format!("{}.vue", job.name)), &component.source)
}

/// Write `content` unless the file already holds it. Returns whether it wrote.
fn write_if_changed(path: &Path, content: &str) -> Result<bool> {
    if fs::read(path).is_ok_and(|existing| existing == content.as_bytes()) {
        return Ok(false);
    }
    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(true)
}

/// Barrel module re-exporting every component, sorted by name.
fn render_index(components: &[String]) -> String {
    let mut names: Vec<&str> = components.iter().map(String::as_str).collect();
    names.sort_unstable();
    names
        .iter()
        .map(|name| format!("export {{ default as {name} }} from './{name}.vue'\n"))
        .collect()
}

fn plural_count(count: usize, noun: &str) -> String {
    format!("{} {}{}", count, noun, if count == 1 { "" } else { "s" })
}
