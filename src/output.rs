// src/output.rs
use crate::simulation::PathMatrix;
use ndarray::Array1;
use std::fs::File;
use std::io::{self, BufWriter, Write};

/// Write one line per trajectory: `path_id,r(t_0),r(t_1),...`
pub fn write_paths<W: Write>(
    writer: &mut W,
    paths: &PathMatrix,
    time_grid: &Array1<f64>,
) -> io::Result<()> {
    if time_grid.len() != paths.ncols() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!(
                "time grid has {} points but paths have {} columns",
                time_grid.len(),
                paths.ncols()
            ),
        ));
    }

    write!(writer, "path_id")?;
    for t in time_grid.iter() {
        write!(writer, ",t_{}", t)?;
    }
    writeln!(writer)?;

    for (i, row) in paths.outer_iter().enumerate() {
        write!(writer, "{}", i)?;
        for r in row.iter() {
            write!(writer, ",{}", r)?;
        }
        writeln!(writer)?;
    }
    Ok(())
}

pub fn write_paths_to_csv(
    filename: &str,
    paths: &PathMatrix,
    time_grid: &Array1<f64>,
) -> io::Result<()> {
    let mut file = BufWriter::new(File::create(filename)?);
    write_paths(&mut file, paths, time_grid)?;
    file.flush()
}

pub fn write_summary_to_csv(filename: &str, summary_data: &[(&str, String)]) -> io::Result<()> {
    let mut file = BufWriter::new(File::create(filename)?);
    for (key, value) in summary_data {
        writeln!(file, "{},{}", key, value)?;
    }
    file.flush()
}
