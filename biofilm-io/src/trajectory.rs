use std::fs::File;
use std::io;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use log::info;

/// Header row opening every trajectory file
pub const TRAJECTORY_HEADER: &str =
    "agent_id, tick_num, agent_type, pos_X, pos_Y, diameter, length, orientation_X, orientation_Y";

/// Separator row written after the rows of each tick
const TICK_SEPARATOR: &str = "########################################";

/// Once the cumulative line count of the current file reaches this limit, the writer
/// rotates to the next file; rotation happens only after a tick separator, so a tick
/// is never split across two files
pub const ROTATION_LINE_LIMIT: usize = 100_000;

/// Writes the simulation trajectory as a sequence of CSV files.
///
/// Files are named `simulation_output_part_NNN.csv` with a zero-padded, three digit
/// part number. Every file opens with [`TRAJECTORY_HEADER`]; each tick contributes
/// one row per particle followed by a separator row.
pub struct TrajectoryWriter {
    directory: PathBuf,
    line_limit: usize,
    part: usize,
    lines_in_part: usize,
    out: Option<BufWriter<File>>,
}

impl TrajectoryWriter {
    /// Creates a writer producing its files in a given directory.
    /// The first file is opened lazily, by the first row written.
    pub fn new<P: Into<PathBuf>>(directory: P) -> TrajectoryWriter {
        TrajectoryWriter {
            directory: directory.into(),
            line_limit: ROTATION_LINE_LIMIT,
            part: 0,
            lines_in_part: 0,
            out: None,
        }
    }

    /// As [`new()`](TrajectoryWriter::new), with a custom rotation limit
    pub fn with_line_limit<P: Into<PathBuf>>(directory: P, line_limit: usize) -> TrajectoryWriter {
        let mut w = TrajectoryWriter::new(directory);
        w.line_limit = line_limit;
        return w;
    }

    /// Name of the file the writer is currently producing
    pub fn current_file(&self) -> PathBuf {
        self.directory.join(format!("simulation_output_part_{:03}.csv", self.part))
    }

    fn writer(&mut self) -> io::Result<&mut BufWriter<File>> {
        if self.out.is_none() {
            let path = self.current_file();
            info!("opening trajectory file {}", path.display());
            let mut w = BufWriter::new(File::create(&path)?);
            writeln!(w, "{}", TRAJECTORY_HEADER)?;
            self.lines_in_part = 1;
            self.out = Some(w);
        }
        return Ok(self.out.as_mut().unwrap());
    }

    /// Appends one particle row for the given tick
    pub fn write_row(&mut self, agent_id: u32, tick: usize, agent_type: &str,
            pos_x: f64, pos_y: f64, diameter: f64, length: f64,
            orientation_x: f64, orientation_y: f64) -> io::Result<()> {
        let w = self.writer()?;
        writeln!(w, "{}, {}, {}, {:.6}, {:.6}, {:.6}, {:.6}, {:.6}, {:.6}",
            agent_id, tick, agent_type, pos_x, pos_y, diameter, length,
            orientation_x, orientation_y)?;
        self.lines_in_part += 1;
        return Ok(());
    }

    /// Closes a tick with the separator row, rotating to the next part when the
    /// current one has grown past the line limit
    pub fn end_tick(&mut self) -> io::Result<()> {
        let limit = self.line_limit;
        let w = self.writer()?;
        writeln!(w, "{}", TICK_SEPARATOR)?;
        self.lines_in_part += 1;

        if self.lines_in_part >= limit {
            self.flush()?;
            self.out = None;
            self.part += 1;
            self.lines_in_part = 0;
        }
        return Ok(());
    }

    pub fn flush(&mut self) -> io::Result<()> {
        if let Some(w) = self.out.as_mut() {
            w.flush()?;
        }
        return Ok(());
    }
}
