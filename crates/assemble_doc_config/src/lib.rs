// crates/assemble_doc_config/src/lib.rs

use std::path::Path;

use anyhow::Result;
use build_copyright_banner::build_copyright_banner;
use contents_list::contents_file_list;

/// Signature of the lazy banner builder: consumers invoke it with the
/// project root known at the point of use; the result is never cached.
pub type CopyrightFn = fn(&Path) -> Result<Vec<String>>;

/// The documentation targets, in the order they are assembled and reported.
pub const TARGET_NAMES: &[&str] = &["php", "phplocal", "tex", "mat", "verify"];

/// Options of one documentation-output target. Each target populates only
/// the fields its downstream generator reads; the rest stay empty.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TargetRecord {
    /// Relative paths treated as table-of-contents pages.
    pub indexfiles: Vec<String>,
    /// Included asset directory (PHP targets only).
    pub includedir: Option<String>,
    /// Base URL or base path used to resolve cross-references.
    pub urlbase: Option<String>,
    /// Tag identifying the kind of target (verify only).
    pub basetype: Option<String>,
    /// Section headings required in each documentation header (verify only).
    pub targets: Vec<String>,
    /// Marker tokens that must not appear in finalized docs (verify only).
    pub notappears: Vec<String>,
    /// Filename substrings excluded from verification (verify only).
    pub ignore: Vec<String>,
}

/// The assembled configuration: the five target records plus the generic
/// options every generator shares (the copyright callback and the index
/// list the PHP and LaTeX targets seed their `indexfiles` from).
pub struct ConfigBundle {
    /// Banner builder, invoked lazily by consumers.
    pub copyright: CopyrightFn,
    /// Shared index-file list.
    pub contentsfiles: Vec<String>,
    records: Vec<(String, TargetRecord)>,
}

impl ConfigBundle {
    /// Looks up one target record by name (`php`, `phplocal`, `tex`,
    /// `mat`, `verify`).
    pub fn record(&self, name: &str) -> Option<&TargetRecord> {
        self.records
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, record)| record)
    }

    /// Iterates the target records in assembly order.
    pub fn records(&self) -> impl Iterator<Item = (&str, &TargetRecord)> {
        self.records.iter().map(|(n, r)| (n.as_str(), r))
    }
}

/// Builds the five target records from the shared index-file list.
/// Pure: no I/O, no failure mode.
pub fn assemble_target_records(contents: &[String]) -> Vec<(String, TargetRecord)> {
    let php = TargetRecord {
        indexfiles: contents.to_vec(),
        includedir: Some("../include/".to_string()),
        urlbase: Some("doc/".to_string()),
        ..Default::default()
    };

    // The local PHP site is rendered from the same sources as the
    // Sourceforge one; the records only diverge when the two sites do.
    let phplocal = php.clone();

    let tex = TargetRecord {
        indexfiles: contents.to_vec(),
        urlbase: Some("http://ltfat.sourceforge.net/doc/".to_string()),
        ..Default::default()
    };

    let mat = TargetRecord {
        urlbase: Some("http://ltfat.sourceforge.net/doc/".to_string()),
        ..Default::default()
    };

    let verify = TargetRecord {
        basetype: Some("verify".to_string()),
        targets: ["AUTHOR", "TESTING", "REFERENCE"]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        notappears: ["FIXME", "BUG", "XXL", "XXX"]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        ignore: ["demo_", "comp_", "assert_", "Contents.m", "init.m"]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        ..Default::default()
    };

    vec![
        ("php".to_string(), php),
        ("phplocal".to_string(), phplocal),
        ("tex".to_string(), tex),
        ("mat".to_string(), mat),
        ("verify".to_string(), verify),
    ]
}

/// Assembles the whole configuration bundle. Pure as well: the project
/// root is only needed later, when the copyright callback is invoked.
pub fn assemble_configuration() -> ConfigBundle {
    let contentsfiles = contents_file_list();
    let records = assemble_target_records(&contentsfiles);
    ConfigBundle {
        copyright: build_copyright_banner,
        contentsfiles,
        records,
    }
}
