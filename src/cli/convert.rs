//! `convert`: one svg in, one component out.

use anyhow::{Context, Result};
use std::{
    fs,
    io::{self, Read, Write},
    path::Path,
};

use super::ConvertArgs;
use crate::{config::ProjectConfig, dataurl::DataUrl, log, template};

/// Read the convert input: `-` (stdin), a `data:` URL, or a file path.
pub fn read_input(input: &str) -> Result<String> {
    if input == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read svg from stdin")?;
        return Ok(buf);
    }

    if DataUrl::is_data_url(input) {
        let url = DataUrl::parse(input).context("Failed to decode data url")?;
        if !url.mime.is_empty() && !url.mime.contains("svg") {
            log!("warning"; "data url declares `{}`, expected image/svg+xml", url.mime);
        }
        return Ok(url.text());
    }

    fs::read_to_string(input).with_context(|| format!("Failed to read {input}"))
}

pub fn run_convert(args: &ConvertArgs, config: &ProjectConfig) -> Result<()> {
    let source = convert_source(args, config)?;
    match &args.output {
        Some(path) => write_component(path, &source),
        None => {
            let mut stdout = io::stdout().lock();
            emit_component(&mut stdout, &source)
        }
    }
}

/// Component source for the convert input. Diagnostics go to the log.
fn convert_source(args: &ConvertArgs, config: &ProjectConfig) -> Result<String> {
    let raw = read_input(&args.input)?;
    let component = template::transform(&raw, &config.build.template_options())
        .with_context(|| format!("Failed to convert {}", args.input))?;

    if !component.has_fragment {
        log!("warning"; "no <svg> element found in {}", args.input);
    }
    Ok(component.source)
}

/// Write the bare component to `out`, nothing else.
fn emit_component(out: &mut impl Write, source: &str) -> Result<()> {
    out.write_all(source.as_bytes())?;
    out.flush()?;
    Ok(())
}

fn write_component(path: &Path, source: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    fs::write(path, source).with_context(|| format!("Failed to write {}", path.display()))?;
    log!("convert"; "wrote {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::TransformArgs;
    use base64::{Engine as _, engine::general_purpose::STANDARD};
    use tempfile::TempDir;

    #[test]
    fn test_read_input_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("home.svg");
        fs::write(&path, "<svg></svg>").unwrap();
        assert_eq!(read_input(path.to_str().unwrap()).unwrap(), "<svg></svg>");
    }

    #[test]
    fn test_read_input_data_url() {
        let url = format!("data:image/svg+xml;base64,{}", STANDARD.encode("<svg/></svg>"));
        assert_eq!(read_input(&url).unwrap(), "<svg/></svg>");
    }

    #[test]
    fn test_read_input_missing_file() {
        assert!(read_input("/no/such/icon.svg").is_err());
    }

    #[test]
    fn test_stdout_carries_only_component() {
        let url = "data:text/plain,%3Cdiv%2F%3E";
        let args = ConvertArgs {
            input: url.to_string(),
            output: None,
            transform: TransformArgs::default(),
        };
        let config = ProjectConfig::default();

        let source = convert_source(&args, &config).unwrap();
        let mut out = Vec::new();
        emit_component(&mut out, &source).unwrap();

        let expected = template::transform("<div/>", &config.build.template_options()).unwrap();
        assert_eq!(out, expected.source.as_bytes());
        assert!(out.starts_with(b"<template>"));
    }

    #[test]
    fn test_convert_to_file() {
        let temp = TempDir::new().unwrap();
        let input = temp.path().join("ring.svg");
        fs::write(
            &input,
            r#"<svg><radialGradient id="ring"/><circle fill="url(#ring)"/></svg>"#,
        )
        .unwrap();
        let output = temp.path().join("out/Ring.vue");

        let args = ConvertArgs {
            input: input.to_string_lossy().into_owned(),
            output: Some(output.clone()),
            transform: TransformArgs::default(),
        };
        let mut config = ProjectConfig::default();
        config.build.current_color = false;
        run_convert(&args, &config).unwrap();

        let written = fs::read_to_string(output).unwrap();
        assert!(written.contains(r#":fill="'url(#' + id0 + ')'""#));
        assert!(written.contains("id0: 'ring_' + randomString"));
    }
}
