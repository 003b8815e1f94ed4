//! Report writers.
//!
//! # Submodules
//!
//! - [`table`]: Writes report rows as CSV in the fixed column order
//! - [`json`]: Writes the same rows plus run metadata as JSON
//!
//! # Output Structure
//!
//! ```text
//! output_dir/
//! ├── Output_Data_Structure.csv
//! └── Output_Data_Structure.json
//! ```

pub mod json;
pub mod table;

/// File stem shared by every report format.
pub const REPORT_STEM: &str = "Output_Data_Structure";
