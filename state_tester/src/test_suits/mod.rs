//!
//! The runnable test collection trait.
//!

pub mod ethereum_general_state;

use std::path::Path;
use std::sync::Arc;
use std::sync::Mutex;

use crate::filters::Filters;
use crate::summary::Summary;
use crate::test::Test;

///
/// The tests directory trait.
///
pub trait Collection {
    ///
    /// Returns all directory tests.
    ///
    /// Defective files and fixtures are recorded in the summary as invalid
    /// outcomes instead of stopping the walk.
    ///
    fn read_all(
        directory_path: &Path,
        filters: &Filters,
        with_stress: bool,
        fill_mode: bool,
        summary: Arc<Mutex<Summary>>,
    ) -> anyhow::Result<Vec<Test>>;
}
