// crates/contents_list/src/lib.rs

//! The fixed list of `Contents` files treated as index pages
//! throughout the documentation tool-chain.

/// Relative paths of the `Contents` files, one per toolbox subdirectory,
/// in the order the generated indexes present them.
const CONTENTS_FILES: &[&str] = &[
    "Contents",
    "gabor/Contents",
    "fourier/Contents",
    "filterbank/Contents",
    "nonstatgab/Contents",
    "frames/Contents",
    "sigproc/Contents",
    "auditory/Contents",
    "demos/Contents",
    "signals/Contents",
];

/// Returns the index-file list as owned strings, ready to seed the
/// `indexfiles` field of the documentation targets.
pub fn contents_file_list() -> Vec<String> {
    CONTENTS_FILES.iter().map(|s| s.to_string()).collect()
}
