use std::io::Write;
use std::time::{Duration, Instant};

use log::debug;
use sm_matrix::{MatMul, Matrix};

use crate::error::Result;

/// Wall-clock time of one backend on one grid point.
#[derive(Debug, Clone)]
pub struct BackendTiming {
    pub backend: String,
    pub elapsed: Duration,
}

/// One `a x b` times `b x c` measurement.
#[derive(Debug, Clone)]
pub struct TimingRow {
    pub a: usize,
    pub b: usize,
    pub c: usize,
    pub timings: Vec<BackendTiming>,
}

/// Time every backend on constant matrices over a grid of sizes.
///
/// Visits every `(a, b, c)` in `sizes^3` with at least one side equal to the
/// smallest size, so the grid stays linear-ish in the large sizes.
pub fn timing_grid(
    sizes: &[usize],
    fill: f64,
    backends: &[&dyn MatMul],
) -> Result<Vec<TimingRow>> {
    let Some(&smallest) = sizes.iter().min() else {
        return Ok(Vec::new());
    };

    let mut rows = Vec::new();
    for &a in sizes {
        for &b in sizes {
            for &c in sizes {
                if a != smallest && b != smallest && c != smallest {
                    continue;
                }
                let lhs = Matrix::filled(a, b, fill);
                let rhs = Matrix::filled(b, c, fill);

                let mut timings = Vec::with_capacity(backends.len());
                for backend in backends {
                    let start = Instant::now();
                    backend.multiply(&lhs, &rhs)?;
                    let elapsed = start.elapsed();
                    debug!("{}x{} @ {}x{} with {}: {:?}", a, b, b, c, backend.name(), elapsed);
                    timings.push(BackendTiming {
                        backend: backend.name().to_string(),
                        elapsed,
                    });
                }
                rows.push(TimingRow { a, b, c, timings });
            }
        }
    }
    Ok(rows)
}

/// Write rows as a fixed-width table, one millisecond column per backend.
pub fn write_table<W: Write>(rows: &[TimingRow], out: &mut W) -> Result<()> {
    let Some(first) = rows.first() else {
        return Ok(());
    };
    write!(out, "{:<6}{:<6}{:<6}", "a", "b", "c")?;
    for timing in &first.timings {
        write!(out, "{:<12}", format!("{}_ms", timing.backend))?;
    }
    writeln!(out)?;

    for row in rows {
        write!(out, "{:<6}{:<6}{:<6}", row.a, row.b, row.c)?;
        for timing in &row.timings {
            write!(out, "{:<12}", timing.elapsed.as_millis())?;
        }
        writeln!(out)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sm_matrix::{MultiplyConfig, NaiveMultiplier, StrassenMultiplier};

    #[test]
    fn test_grid_keeps_points_touching_smallest() {
        let naive = NaiveMultiplier::new();
        let rows = timing_grid(&[2, 3], 1.0, &[&naive]).unwrap();
        // Only (3, 3, 3) lacks the smallest size.
        assert_eq!(rows.len(), 7);
        assert!(rows.iter().all(|r| r.a == 2 || r.b == 2 || r.c == 2));
        assert!(rows.iter().all(|r| r.timings.len() == 1));
    }

    #[test]
    fn test_empty_sizes() {
        let naive = NaiveMultiplier::new();
        assert!(timing_grid(&[], 1.0, &[&naive]).unwrap().is_empty());
    }

    #[test]
    fn test_table_layout() {
        let naive = NaiveMultiplier::new();
        let strassen = StrassenMultiplier::new(MultiplyConfig::new().with_naive_threshold(0));
        let rows = timing_grid(&[1, 4], 2.0, &[&strassen, &naive]).unwrap();
        let mut out = Vec::new();
        write_table(&rows, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let mut lines = text.lines();
        let header = lines.next().unwrap();
        assert!(header.starts_with("a     b     c     strassen_ms"));
        assert!(header.contains("naive_ms"));
        assert_eq!(lines.count(), rows.len());
    }
}
