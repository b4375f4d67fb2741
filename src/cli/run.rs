//! The decolor pipeline: load, detect, emit, strip, write.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use super::Cli;
use crate::embed::VECTOR_LOGO_SVG;
use crate::error::DecolorError;
use crate::svg::{embedded, find_embedded_png, strip_colors, strip_colors_with_stats};
use crate::utils::path::{colorless_path, vector_path};
use crate::{debug, log, logger};

/// Resolved input and output paths for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    pub input: PathBuf,
    pub output: PathBuf,
}

impl Job {
    /// Resolve paths, deriving the output from the input when not given.
    pub fn new(input: impl Into<PathBuf>, output: Option<PathBuf>) -> Self {
        let input = input.into();
        let output = output.unwrap_or_else(|| colorless_path(&input));
        Self { input, output }
    }

    pub fn from_cli(cli: &Cli) -> Self {
        Self::new(&cli.input, cli.output.clone())
    }

    /// Where the replacement logo goes if an embedded image is found.
    pub fn vector_output(&self) -> PathBuf {
        vector_path(&self.output)
    }
}

/// Run one job. Nothing is read or written when the input is missing.
pub fn run(job: &Job) -> Result<(), DecolorError> {
    if !job.input.exists() {
        return Err(DecolorError::MissingInput(job.input.clone()));
    }
    process(job).map_err(DecolorError::Processing)
}

fn process(job: &Job) -> Result<()> {
    let source = fs::read_to_string(&job.input)
        .with_context(|| format!("failed to read {}", job.input.display()))?;

    log!("decolor"; "processing: {}", job.input.display());
    debug!("decolor"; "output: {}", job.output.display());

    if let Some(image) = find_embedded_png(&source) {
        embedded::report(&image);

        let vector_output = job.vector_output();
        write_text(&vector_output, VECTOR_LOGO_SVG)?;
        log!("vector"; "created clean vector logo: {}", vector_output.display());
    }

    let stripped = if logger::is_verbose() {
        let (stripped, stats) = strip_colors_with_stats(&source);
        for rule in stats.iter().filter(|rule| rule.hits > 0) {
            debug!("strip"; "{}: {} replaced", rule.name, rule.hits);
        }
        stripped
    } else {
        strip_colors(&source)
    };

    write_text(&job.output, &stripped)?;
    log!("strip"; "created colorless version: {}", job.output.display());

    Ok(())
}

/// Write text, replacing any existing file.
fn write_text(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).with_context(|| format!("failed to write {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const RED_PIXEL: &str = "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mP8z8DwHwAFBQIAX8jx0gAAAABJRU5ErkJggg==";

    fn write_input(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    fn file_count(dir: &TempDir) -> usize {
        fs::read_dir(dir.path()).unwrap().count()
    }

    #[test]
    fn test_job_derives_colorless_output() {
        let job = Job::new("art/logo.svg", None);
        assert_eq!(job.output, PathBuf::from("art/logo-colorless.svg"));
        assert_eq!(job.vector_output(), PathBuf::from("art/logo-colorless-vector.svg"));
    }

    #[test]
    fn test_job_keeps_explicit_output() {
        let job = Job::new("logo.svg", Some(PathBuf::from("out/mono.svg")));
        assert_eq!(job.output, PathBuf::from("out/mono.svg"));
        assert_eq!(job.vector_output(), PathBuf::from("out/mono-vector.svg"));
    }

    #[test]
    fn test_job_from_cli() {
        let cli = <Cli as clap::Parser>::try_parse_from(["decolor", "a/b.svg"]).unwrap();
        assert_eq!(Job::from_cli(&cli), Job::new("a/b.svg", None));
    }

    #[test]
    fn test_run_writes_colorless_file() {
        let dir = TempDir::new().unwrap();
        let input = write_input(&dir, "logo.svg", r##"<svg><path fill="red" stroke="#000"/></svg>"##);

        let job = Job::new(&input, None);
        run(&job).unwrap();

        let out = fs::read_to_string(dir.path().join("logo-colorless.svg")).unwrap();
        assert_eq!(out, r#"<svg><path fill="currentColor" stroke="currentColor"/></svg>"#);
        assert!(!dir.path().join("logo-colorless-vector.svg").exists());
        // Input is left as is
        assert!(fs::read_to_string(&input).unwrap().contains(r#"fill="red""#));
    }

    #[test]
    fn test_run_honors_explicit_output() {
        let dir = TempDir::new().unwrap();
        let input = write_input(&dir, "in.svg", "<svg style='color:red'/>");
        let output = dir.path().join("custom.svg");

        run(&Job::new(&input, Some(output.clone()))).unwrap();

        assert_eq!(fs::read_to_string(&output).unwrap(), "<svg />");
        assert!(!dir.path().join("in-colorless.svg").exists());
    }

    #[test]
    fn test_run_overwrites_existing_output() {
        let dir = TempDir::new().unwrap();
        let input = write_input(&dir, "in.svg", r#"<g fill="blue"/>"#);
        let output = write_input(&dir, "in-colorless.svg", "stale");

        run(&Job::new(&input, None)).unwrap();

        assert_eq!(fs::read_to_string(&output).unwrap(), r#"<g fill="currentColor"/>"#);
    }

    #[test]
    fn test_run_keeps_crlf_line_endings() {
        let dir = TempDir::new().unwrap();
        let input = write_input(&dir, "crlf.svg", "<svg>\r\n<g fill=\"red\"/>\r\n</svg>\r\n");

        run(&Job::new(&input, None)).unwrap();

        let out = fs::read_to_string(dir.path().join("crlf-colorless.svg")).unwrap();
        assert_eq!(out, "<svg>\r\n<g fill=\"currentColor\"/>\r\n</svg>\r\n");
    }

    #[test]
    fn test_run_emits_vector_logo_for_embedded_png() {
        let dir = TempDir::new().unwrap();
        let svg = format!(
            r#"<svg><image fill="red" href="data:image/png;base64,{RED_PIXEL}"/></svg>"#
        );
        let input = write_input(&dir, "brand.svg", &svg);

        run(&Job::new(&input, None)).unwrap();

        let vector = fs::read_to_string(dir.path().join("brand-colorless-vector.svg")).unwrap();
        assert_eq!(vector, VECTOR_LOGO_SVG);

        // Raster stays in the colorless output, only colors change
        let out = fs::read_to_string(dir.path().join("brand-colorless.svg")).unwrap();
        assert!(out.contains(RED_PIXEL));
        assert!(out.contains(r#"fill="currentColor""#));
    }

    #[test]
    fn test_vector_logo_ignores_payload() {
        let dir = TempDir::new().unwrap();
        let a = write_input(&dir, "a.svg", "<image href=\"data:image/png;base64,QUJD\"/>");
        let b = write_input(&dir, "b.svg", &format!("data:image/png;base64,{RED_PIXEL}"));

        run(&Job::new(&a, None)).unwrap();
        run(&Job::new(&b, None)).unwrap();

        let va = fs::read(dir.path().join("a-colorless-vector.svg")).unwrap();
        let vb = fs::read(dir.path().join("b-colorless-vector.svg")).unwrap();
        assert_eq!(va, vb);
    }

    #[test]
    fn test_invalid_payload_still_succeeds() {
        let dir = TempDir::new().unwrap();
        let input = write_input(
            &dir,
            "bad.svg",
            r#"<svg fill="red"><image href="data:image/png;base64,A"/></svg>"#,
        );

        run(&Job::new(&input, None)).unwrap();

        let out = fs::read_to_string(dir.path().join("bad-colorless.svg")).unwrap();
        assert!(out.starts_with(r#"<svg fill="currentColor">"#));
        assert!(dir.path().join("bad-colorless-vector.svg").exists());
    }

    #[test]
    fn test_missing_input_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("nope.svg");

        let err = run(&Job::new(&input, None)).unwrap_err();

        assert!(matches!(err, DecolorError::MissingInput(ref p) if *p == input));
        assert_eq!(err.exit_code(), 1);
        assert_eq!(file_count(&dir), 0);
    }

    #[test]
    fn test_non_utf8_input_is_processing_failure() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("binary.svg");
        fs::write(&input, [0xff, 0xfe, 0x00, 0x80]).unwrap();

        let err = run(&Job::new(&input, None)).unwrap_err();

        assert!(matches!(err, DecolorError::Processing(_)));
        assert!(err.to_string().contains("failed to read"));
        assert!(!dir.path().join("binary-colorless.svg").exists());
    }

    #[test]
    fn test_unwritable_output_is_processing_failure() {
        let dir = TempDir::new().unwrap();
        let input = write_input(&dir, "in.svg", r#"<g fill="red"/>"#);
        let output = dir.path().join("missing-dir").join("out.svg");

        let err = run(&Job::new(&input, Some(output))).unwrap_err();

        assert!(matches!(err, DecolorError::Processing(_)));
        assert!(err.to_string().contains("failed to write"));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_vector_file_survives_later_failure() {
        let dir = TempDir::new().unwrap();
        let input = write_input(&dir, "in.svg", &format!("data:image/png;base64,{RED_PIXEL}"));
        // A directory in place of the primary output makes the final write fail
        let output = dir.path().join("out.svg");
        fs::create_dir(&output).unwrap();

        let err = run(&Job::new(&input, Some(output))).unwrap_err();

        assert!(matches!(err, DecolorError::Processing(_)));
        assert!(dir.path().join("out-vector.svg").is_file());
    }
}
