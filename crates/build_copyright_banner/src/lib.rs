// crates/build_copyright_banner/src/lib.rs

use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result};

/// First line of every generated banner.
pub const COPYRIGHT_HOLDER_LINE: &str = "Copyright (C) 2005-2012 Peter L. Soendergaard.\n";

/// Assembles the copyright banner for the given project root.
///
/// The banner is rebuilt on every call from two files under the root:
/// `ltfat_version` (only its first line is used, trailing newline kept) and
/// `mat2doc/copyrightplate` (appended verbatim, line by line). The version
/// line's newline ends up embedded in the second banner line; generated
/// output has always carried it that way, so it is preserved here.
///
/// # Errors
///
/// Returns an error if either file cannot be opened or read. The version
/// file is opened first; when it is missing, the plate file is never
/// touched.
pub fn build_copyright_banner(project_root: &Path) -> Result<Vec<String>> {
    let version_path = project_root.join("ltfat_version");
    let version_file = File::open(&version_path)
        .with_context(|| format!("Error opening {}", version_path.display()))?;
    let mut version = String::new();
    BufReader::new(version_file)
        .read_line(&mut version)
        .with_context(|| format!("Error reading {}", version_path.display()))?;

    let plate_path = project_root.join("mat2doc").join("copyrightplate");
    let plate = fs::read_to_string(&plate_path)
        .with_context(|| format!("Error opening {}", plate_path.display()))?;

    let mut banner = vec![
        COPYRIGHT_HOLDER_LINE.to_string(),
        format!("This file is part of LTFAT version {}", version),
    ];
    banner.extend(plate.split_inclusive('\n').map(str::to_string));

    Ok(banner)
}
