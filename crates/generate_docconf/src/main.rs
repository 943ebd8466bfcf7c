// crates/generate_docconf/src/main.rs

use anyhow::Result;
use clap::{Arg, Command};
use std::path::PathBuf;

use generate_docconf::{run_docconf, DocconfOptions};

fn main() -> Result<()> {
    let matches = Command::new("generate_docconf")
        .version("0.1.0")
        .about("Assembles and reports the documentation-generation configuration")
        .arg(
            Arg::new("project_root")
                .long("project-root")
                .num_args(1)
                .required(true)
                .help("Root of the toolbox checkout"),
        )
        .arg(
            Arg::new("target")
                .long("target")
                .num_args(1)
                .help("Report only this record (conf, php, phplocal, tex, mat, verify)"),
        )
        .arg(
            Arg::new("show_copyright")
                .long("show-copyright")
                .help("Append the assembled copyright banner to the report")
                .action(clap::ArgAction::SetTrue)
                .default_value("false"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose logging")
                .action(clap::ArgAction::SetTrue)
                .default_value("false"),
        )
        .get_matches();

    let options = DocconfOptions {
        project_root: PathBuf::from(matches.get_one::<String>("project_root").unwrap()),
        target: matches.get_one::<String>("target").cloned(),
        show_copyright: *matches.get_one::<bool>("show_copyright").unwrap(),
        verbose: *matches.get_one::<bool>("verbose").unwrap(),
    };

    let report = run_docconf(&options)?;
    print!("{}", report);
    Ok(())
}
