//! CSV export for sampled concentration curves
//!
//! Writes a [`CurveSeries`] to CSV, compatible with Excel, Python pandas and
//! most analysis tools.
//!
//! # Features
//!
//! - **Simple interface**: export straight from a `CurveSeries`
//! - **Metadata support**: optional header comments with regimen parameters
//! - **Customizable**: delimiter, precision, header labels
//! - **Validation**: rejects empty series and non-finite values
//!
//! # Quick Example
//!
//! ```rust,ignore
//! use pk_rs::output::export::export_curve_csv;
//!
//! let series = schedule_curve(&schedule, store, 0.0, 30.0, 301, 1.0)?;
//! export_curve_csv(&series, "curve.csv", None)?;
//! ```
//!
//! **Output** (`curve.csv`):
//! ```csv
//! Time (days),Concentration (pg/mL)
//! 0.000000,0.000000
//! 0.100000,103.412887
//! ...
//! ```

use std::error::Error;
use std::fs::File;
use std::io::Write;

use crate::sampling::CurveSeries;

// =============================================================================
// Configuration Structures
// =============================================================================

/// Configuration for CSV export
///
/// # Example
///
/// ```rust,ignore
/// let config = CsvConfig {
///     delimiter: ';',        // European CSV
///     precision: 10,         // High precision
///     include_metadata: true,
///     ..Default::default()
/// };
/// ```
#[derive(Clone)]
pub struct CsvConfig {
    /// Column delimiter (default: ',')
    pub delimiter: char,

    /// Decimal separator (default: '.')
    pub decimal_separator: char,

    /// Number of decimal places for floating-point values (default: 6)
    pub precision: usize,

    /// Include metadata header comments (default: false)
    pub include_metadata: bool,

    /// Metadata to include in the header
    pub metadata: Option<CsvMetadata>,

    /// Custom header for the time column (default: "Time (days)")
    pub time_header: String,

    /// Custom header for the concentration column
    /// (default: "Concentration (pg/mL)")
    pub concentration_header: String,
}

impl Default for CsvConfig {
    fn default() -> Self {
        Self {
            delimiter: ',',
            decimal_separator: '.',
            precision: 6,
            include_metadata: false,
            metadata: None,
            time_header: "Time (days)".to_string(),
            concentration_header: "Concentration (pg/mL)".to_string(),
        }
    }
}

impl CsvConfig {
    /// Create config with European CSV format (semicolon, comma for decimal)
    pub fn european() -> Self {
        Self {
            delimiter: ';',
            decimal_separator: ',',
            ..Default::default()
        }
    }

    /// Create config with high precision (12 decimal places)
    pub fn high_precision() -> Self {
        Self {
            precision: 12,
            ..Default::default()
        }
    }

    /// Builder pattern: set delimiter
    pub fn delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Builder pattern: set precision
    pub fn precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Builder pattern: enable metadata
    pub fn with_metadata(mut self, metadata: CsvMetadata) -> Self {
        self.include_metadata = true;
        self.metadata = Some(metadata);
        self
    }
}

/// Metadata for CSV header comments
///
/// All fields are optional. Only non-None fields are included in the header.
#[derive(Clone, Default)]
pub struct CsvMetadata {
    /// Delivery model identifier (e.g. "EV im")
    pub model_name: Option<String>,

    /// Number of dose events in the schedule
    pub dose_count: Option<usize>,

    /// Repetition interval for steady-state regimens \[days\]
    pub interval: Option<f64>,

    /// Unit conversion factor applied to the values
    pub unit_factor: Option<f64>,

    /// Additional custom parameters
    pub custom: Vec<(String, String)>,
}

impl CsvMetadata {
    /// Create metadata for a schedule export
    pub fn from_schedule(model: &str, dose_count: usize) -> Self {
        Self {
            model_name: Some(model.to_string()),
            dose_count: Some(dose_count),
            ..Default::default()
        }
    }

    /// Add a custom parameter
    pub fn add_custom(&mut self, key: String, value: String) {
        self.custom.push((key, value));
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Write metadata header comments to file
fn write_metadata_header(file: &mut File, metadata: &CsvMetadata) -> Result<(), Box<dyn Error>> {
    writeln!(file, "# Pharmacokinetic Prediction Data")?;

    let now = chrono::Utc::now();
    writeln!(file, "# Generated: {}", now.to_rfc3339())?;

    if let Some(model) = &metadata.model_name {
        writeln!(file, "# Model: {}", model)?;
    }
    if let Some(count) = metadata.dose_count {
        writeln!(file, "# Dose Events: {}", count)?;
    }
    if let Some(interval) = metadata.interval {
        writeln!(file, "# Interval: {} days", interval)?;
    }
    if let Some(factor) = metadata.unit_factor {
        writeln!(file, "# Unit Factor: {}", factor)?;
    }

    for (key, value) in &metadata.custom {
        writeln!(file, "# {}: {}", key, value)?;
    }

    // Separator
    writeln!(file, "#")?;

    Ok(())
}

/// Format number with configured precision and decimal separator
fn format_number(value: f64, config: &CsvConfig) -> String {
    let formatted = format!("{:.prec$}", value, prec = config.precision);

    if config.decimal_separator != '.' {
        formatted.replace('.', &config.decimal_separator.to_string())
    } else {
        formatted
    }
}

// =============================================================================
// Export Functions
// =============================================================================

/// Export a sampled concentration curve to CSV
///
/// # Arguments
///
/// * `series` - Sampled curve (or cloud) points
/// * `output_path` - Output file path
/// * `configuration` - Optional CSV configuration (uses default if None)
///
/// # Errors
///
/// - Empty series
/// - NaN or Inf values
/// - File creation errors
///
/// # Example
///
/// ```rust,ignore
/// export_curve_csv(&series, "curve.csv", None)?;
/// ```
pub fn export_curve_csv(
    series: &CurveSeries,
    output_path: &str,
    configuration: Option<&CsvConfig>,
) -> Result<(), Box<dyn Error>> {
    // ============================= Validation =============================

    if series.is_empty() {
        return Err("Empty data: the curve series must not be empty".into());
    }

    if series.times().iter().any(|t| !t.is_finite()) {
        return Err("Invalid data: NaN or Inf detected in time abscissas".into());
    }

    if series.values().iter().any(|v| !v.is_finite()) {
        return Err("Invalid data: NaN or Inf detected in concentration values".into());
    }

    // ============================= Configuration ==========================

    let binding = CsvConfig::default();
    let configuration = configuration.unwrap_or(&binding);

    // ============================= Open File ==============================

    let mut file = File::create(output_path)?;

    // ============================= Write Metadata =========================

    if configuration.include_metadata {
        if let Some(metadata) = &configuration.metadata {
            write_metadata_header(&mut file, metadata)?;
        }
    }

    // ============================= Write Header ===========================

    writeln!(
        file,
        "{}{}{}",
        configuration.time_header, configuration.delimiter, configuration.concentration_header
    )?;

    // ============================= Write Data =============================

    for (time, concentration) in series.iter() {
        writeln!(
            file,
            "{}{}{}",
            format_number(time, configuration),
            configuration.delimiter,
            format_number(concentration, configuration)
        )?;
    }

    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
