//! JSON Lines writer and file populator.

use crate::error::JsonlPopulatorError;
use crate::naming::OutputSettings;
use forge_core::{GenerationPlan, Record};
use forge_generator::RecordGenerator;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// Default buffer size for JSON Lines writing.
pub const DEFAULT_BUFFER_SIZE: usize = 8192;

/// Attempts at finding an unused name for random prefixes.
const MAX_NAME_ATTEMPTS: usize = 16;

/// Metrics from a populate operation.
#[derive(Debug, Clone, Default)]
pub struct PopulateMetrics {
    /// Number of rows written.
    pub rows_written: u64,
    /// Total time taken.
    pub total_duration: Duration,
    /// Time spent generating records.
    pub generation_duration: Duration,
    /// Time spent serializing and writing.
    pub write_duration: Duration,
    /// Output size in bytes.
    pub file_size_bytes: u64,
}

impl PopulateMetrics {
    /// Calculate rows per second.
    pub fn rows_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.rows_written as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }

    /// Calculate bytes per second.
    pub fn bytes_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.file_size_bytes as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }

    /// Add another run's counters and durations to this one.
    pub fn accumulate(&mut self, other: &PopulateMetrics) {
        self.rows_written += other.rows_written;
        self.total_duration += other.total_duration;
        self.generation_duration += other.generation_duration;
        self.write_duration += other.write_duration;
        self.file_size_bytes += other.file_size_bytes;
    }
}

/// One file written by [`JsonlPopulator`].
#[derive(Debug, Clone)]
pub struct FileOutput {
    /// Index the file was generated for (1-based)
    pub index: u64,
    pub path: PathBuf,
    pub metrics: PopulateMetrics,
}

fn write_record<W: Write>(writer: &mut W, record: &Record) -> Result<(), JsonlPopulatorError> {
    serde_json::to_writer(&mut *writer, record)?;
    writeln!(writer)?;
    Ok(())
}

/// Write records as JSON Lines through a buffered writer.
///
/// Returns the number of records written. The buffer is flushed before
/// returning.
pub fn write_jsonl<W, I>(writer: W, records: I) -> Result<u64, JsonlPopulatorError>
where
    W: Write,
    I: IntoIterator<Item = Record>,
{
    let mut writer = BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, writer);
    let mut written = 0u64;

    for record in records {
        write_record(&mut writer, &record)?;
        written += 1;
    }

    writer.flush()?;
    Ok(written)
}

/// Writes generated records to named files in a directory.
pub struct JsonlPopulator {
    generator: RecordGenerator,
    settings: OutputSettings,
}

impl JsonlPopulator {
    /// Create a populator whose generator is seeded from OS entropy.
    pub fn new(plan: GenerationPlan, settings: OutputSettings) -> Self {
        Self::from_generator(RecordGenerator::new(plan), settings)
    }

    /// Create a populator with a fixed seed.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let populator = JsonlPopulator::with_seed(plan, settings, 42);
    /// ```
    pub fn with_seed(plan: GenerationPlan, settings: OutputSettings, seed: u64) -> Self {
        Self::from_generator(RecordGenerator::with_seed(plan, seed), settings)
    }

    /// Create a populator around an existing generator.
    pub fn from_generator(generator: RecordGenerator, settings: OutputSettings) -> Self {
        Self {
            generator,
            settings,
        }
    }

    /// Generate one file with `lines` records.
    ///
    /// # Arguments
    ///
    /// * `dir` - Existing directory to write into
    /// * `index` - File index, used by the `count` prefix
    /// * `lines` - Number of records to write
    pub fn populate_file(
        &mut self,
        dir: &Path,
        index: u64,
        lines: u64,
    ) -> Result<FileOutput, JsonlPopulatorError> {
        let start_time = Instant::now();
        let mut metrics = PopulateMetrics::default();

        let (path, file) = self.create_output(dir, index)?;
        let mut writer = BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, file);

        let mut generation_time = Duration::ZERO;
        let mut write_time = Duration::ZERO;

        for _ in 0..lines {
            let gen_start = Instant::now();
            let record = self.generator.next_record();
            generation_time += gen_start.elapsed();

            let write_start = Instant::now();
            write_record(&mut writer, &record).map_err(|e| with_path(e, &path))?;
            write_time += write_start.elapsed();

            metrics.rows_written += 1;
        }

        writer.flush().map_err(|source| JsonlPopulatorError::WriteFile {
            path: path.clone(),
            source,
        })?;
        drop(writer);

        metrics.file_size_bytes = std::fs::metadata(&path)?.len();
        metrics.total_duration = start_time.elapsed();
        metrics.generation_duration = generation_time;
        metrics.write_duration = write_time;

        debug!(
            "File written: {} ({} lines, {} bytes)",
            path.display(),
            metrics.rows_written,
            metrics.file_size_bytes
        );

        Ok(FileOutput {
            index,
            path,
            metrics,
        })
    }

    /// Generate `count` files with indices `start_index..start_index + count`.
    pub fn populate_files(
        &mut self,
        dir: &Path,
        start_index: u64,
        count: u64,
        lines: u64,
    ) -> Result<Vec<FileOutput>, JsonlPopulatorError> {
        let mut outputs = Vec::with_capacity(count as usize);

        for offset in 0..count {
            let output = self.populate_file(dir, start_index + offset, lines)?;
            debug!(
                "Created file {}/{}: {}",
                offset + 1,
                count,
                output.path.display()
            );
            outputs.push(output);
        }

        Ok(outputs)
    }

    /// Create the output file for `index`.
    ///
    /// Count prefixes overwrite an existing file of the same name. Random
    /// prefixes are redrawn until the name is unused, so concurrent workers
    /// never write to the same file.
    fn create_output(
        &self,
        dir: &Path,
        index: u64,
    ) -> Result<(PathBuf, File), JsonlPopulatorError> {
        let mut rng = rand::thread_rng();

        if !self.settings.file_prefix.is_random() {
            let path = dir.join(self.settings.file_name_for(index, &mut rng));
            let file = File::create(&path).map_err(|source| JsonlPopulatorError::WriteFile {
                path: path.clone(),
                source,
            })?;
            return Ok((path, file));
        }

        create_unique(dir, || self.settings.file_name_for(index, &mut rng))
    }
}

/// Create a file under a name drawn from `next_name`, redrawing while the
/// name is taken. The check and the create are one atomic `create_new` open.
fn create_unique<F>(dir: &Path, mut next_name: F) -> Result<(PathBuf, File), JsonlPopulatorError>
where
    F: FnMut() -> String,
{
    let mut path = dir.join(next_name());

    for attempt in 1..=MAX_NAME_ATTEMPTS {
        match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(file) => return Ok((path, file)),
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                debug!("Name {} is taken (attempt {attempt})", path.display());
                if attempt < MAX_NAME_ATTEMPTS {
                    path = dir.join(next_name());
                }
            }
            Err(source) => return Err(JsonlPopulatorError::WriteFile { path, source }),
        }
    }

    warn!("Overwriting existing file {}", path.display());
    let file = File::create(&path).map_err(|source| JsonlPopulatorError::WriteFile {
        path: path.clone(),
        source,
    })?;
    Ok((path, file))
}

fn with_path(error: JsonlPopulatorError, path: &Path) -> JsonlPopulatorError {
    match error {
        JsonlPopulatorError::Io(source) => JsonlPopulatorError::WriteFile {
            path: path.to_path_buf(),
            source,
        },
        other => other,
    }
}
