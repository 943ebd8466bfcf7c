// crates/generate_docconf/src/lib.rs

use std::path::PathBuf;

use anyhow::{bail, Result};
use assemble_doc_config::{assemble_configuration, ConfigBundle, TargetRecord, TARGET_NAMES};

/// Options for one configuration report, composed from the CLI.
pub struct DocconfOptions {
    /// Root of the toolbox checkout the documentation is generated from.
    pub project_root: PathBuf,
    /// Report only this record (`conf` or one of the five targets).
    pub target: Option<String>,
    /// Append the assembled copyright banner to the report.
    pub show_copyright: bool,
    /// Enable verbose logging.
    pub verbose: bool,
}

/// Assembles the configuration bundle and renders the requested report.
/// This is the bulk of the logic; `main.rs` only wires up the CLI.
pub fn run_docconf(options: &DocconfOptions) -> Result<String> {
    let bundle = assemble_configuration();

    if options.verbose {
        log::debug!(
            "Assembled {} target records for {}",
            TARGET_NAMES.len(),
            options.project_root.display()
        );
    }

    let mut report = String::new();

    match options.target.as_deref() {
        None => {
            for (name, record) in bundle.records() {
                report.push_str(&format_record(name, record));
            }
        }
        Some("conf") => report.push_str(&format_conf(&bundle)),
        Some(name) => match bundle.record(name) {
            Some(record) => report.push_str(&format_record(name, record)),
            None => bail!(
                "Unknown target '{}'. Valid targets are: conf, {}",
                name,
                TARGET_NAMES.join(", ")
            ),
        },
    }

    if options.show_copyright {
        let banner = (bundle.copyright)(&options.project_root)?;
        report.push_str("--------------------------------------------------\n");
        for line in banner {
            report.push_str(&line);
        }
    }

    Ok(report)
}

fn format_record(name: &str, record: &TargetRecord) -> String {
    let mut out = String::new();
    out.push_str("--------------------------------------------------\n");
    out.push_str(&format!("Target: {}\n", name));
    if !record.indexfiles.is_empty() {
        out.push_str(&format!("indexfiles: {}\n", record.indexfiles.join(", ")));
    }
    if let Some(ref includedir) = record.includedir {
        out.push_str(&format!("includedir: {}\n", includedir));
    }
    if let Some(ref urlbase) = record.urlbase {
        out.push_str(&format!("urlbase: {}\n", urlbase));
    }
    if let Some(ref basetype) = record.basetype {
        out.push_str(&format!("basetype: {}\n", basetype));
    }
    if !record.targets.is_empty() {
        out.push_str(&format!("targets: {}\n", record.targets.join(", ")));
    }
    if !record.notappears.is_empty() {
        out.push_str(&format!("notappears: {}\n", record.notappears.join(", ")));
    }
    if !record.ignore.is_empty() {
        out.push_str(&format!("ignore: {}\n", record.ignore.join(", ")));
    }
    out
}

fn format_conf(bundle: &ConfigBundle) -> String {
    let mut out = String::new();
    out.push_str("--------------------------------------------------\n");
    out.push_str("Target: conf\n");
    out.push_str(&format!(
        "contentsfiles: {}\n",
        bundle.contentsfiles.join(", ")
    ));
    out.push_str("copyright: assembled from ltfat_version and mat2doc/copyrightplate\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn options(root: &std::path::Path) -> DocconfOptions {
        DocconfOptions {
            project_root: root.to_path_buf(),
            target: None,
            show_copyright: false,
            verbose: false,
        }
    }

    #[test]
    fn test_default_report_lists_all_targets_in_order() {
        let dir = TempDir::new().unwrap();
        let report = run_docconf(&options(dir.path())).unwrap();

        let positions: Vec<usize> = ["php", "phplocal", "tex", "mat", "verify"]
            .iter()
            .map(|name| report.find(&format!("Target: {}\n", name)).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_single_target_report() {
        let dir = TempDir::new().unwrap();
        let mut opts = options(dir.path());
        opts.target = Some("verify".to_string());

        let report = run_docconf(&opts).unwrap();
        assert!(report.contains("basetype: verify"));
        assert!(report.contains("notappears: FIXME, BUG, XXL, XXX"));
        assert!(!report.contains("Target: php"));
    }

    #[test]
    fn test_conf_target_report() {
        let dir = TempDir::new().unwrap();
        let mut opts = options(dir.path());
        opts.target = Some("conf".to_string());

        let report = run_docconf(&opts).unwrap();
        assert!(report.contains("Target: conf"));
        assert!(report.contains("contentsfiles: Contents, gabor/Contents"));
    }

    #[test]
    fn test_unknown_target_errors() {
        let dir = TempDir::new().unwrap();
        let mut opts = options(dir.path());
        opts.target = Some("html".to_string());

        let err = run_docconf(&opts).unwrap_err();
        assert!(err.to_string().contains("Unknown target 'html'"));
        assert!(err.to_string().contains("verify"));
    }

    #[test]
    fn test_show_copyright_appends_banner() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("ltfat_version"), "1.2.3\n").unwrap();
        fs::create_dir_all(dir.path().join("mat2doc")).unwrap();
        fs::write(dir.path().join("mat2doc/copyrightplate"), "Plate line\n").unwrap();

        let mut opts = options(dir.path());
        opts.show_copyright = true;

        let report = run_docconf(&opts).unwrap();
        assert!(report.contains("Copyright (C) 2005-2012 Peter L. Soendergaard."));
        assert!(report.contains("This file is part of LTFAT version 1.2.3\n"));
        assert!(report.contains("Plate line\n"));
    }

    #[test]
    fn test_show_copyright_missing_version_is_fatal() {
        let dir = TempDir::new().unwrap();
        let mut opts = options(dir.path());
        opts.show_copyright = true;

        let err = run_docconf(&opts).unwrap_err();
        assert!(err.to_string().contains("ltfat_version"));
    }
}
