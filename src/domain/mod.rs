//! Request-side domain types.
//!
//! - `batch` — The `{"0": ...}` envelope the API wraps every call in
//! - `scan` — Web page scan input and parameters
//! - `package` — Package info input and parameters

pub mod batch;
pub mod package;
pub mod scan;

pub use batch::{Batch, DEFAULT_BATCH};
pub use package::{PackageInfoInput, PackageInfoParams};
pub use scan::{WebPageScanInput, WebPageScanParams};
