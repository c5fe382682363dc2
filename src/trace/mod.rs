//! Trace sources producing the sample stream

pub mod csv_source;
pub mod dsl_file;
pub mod sample;

pub use csv_source::{parse_samples, read_samples};
pub use dsl_file::{DslCapture, DslHeader};
pub use sample::{Pin, Sample};

use crate::Result;
use std::path::Path;

/// Load a trace, choosing the source by file extension.
///
/// `.dsl` files are read as DSLogic captures (optionally truncated to
/// `max_samples` positions); anything else is parsed as CSV.
pub fn load_trace<P: AsRef<Path>>(path: P, max_samples: Option<u64>) -> Result<Vec<Sample>> {
    let path = path.as_ref();
    let is_dsl = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("dsl"));

    if is_dsl {
        DslCapture::open(path)?.with_max_samples(max_samples).read_samples()
    } else {
        read_samples(path)
    }
}
