use std::io::{self, Write};

use crate::sim::TickRecord;

/// Write a flight trajectory to CSV.
///
/// Columns: time, pos_0..pos_{N-1}, vel_0..vel_{N-1}, fuel, phase, distance.
pub fn write_trajectory<W: Write, const N: usize>(
    writer: &mut W,
    trajectory: &[TickRecord<N>],
) -> io::Result<()> {
    write!(writer, "time")?;
    for i in 0..N {
        write!(writer, ",pos_{i}")?;
    }
    for i in 0..N {
        write!(writer, ",vel_{i}")?;
    }
    writeln!(writer, ",fuel,phase,distance")?;

    for rec in trajectory {
        write!(writer, "{:.4}", rec.time)?;
        for i in 0..N {
            write!(writer, ",{:.4}", rec.position[i])?;
        }
        for i in 0..N {
            write!(writer, ",{:.4}", rec.velocity[i])?;
        }
        writeln!(writer, ",{:.4},{},{:.4}", rec.fuel, rec.phase, rec.distance)?;
    }

    Ok(())
}

/// Write a trajectory to a CSV file at the given path.
pub fn write_trajectory_file<const N: usize>(
    path: &str,
    trajectory: &[TickRecord<N>],
) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    write_trajectory(&mut file, trajectory)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guidance::Phase;
    use nalgebra::Vector2;

    #[test]
    fn csv_output_has_header_and_rows() {
        let traj = vec![
            TickRecord {
                time: 0.0,
                position: Vector2::new(100.0, 500.0),
                velocity: Vector2::zeros(),
                fuel: 100.0,
                phase: Phase::Launch,
                distance: 721.11,
            },
            TickRecord {
                time: 0.1,
                position: Vector2::new(100.0, 499.95),
                velocity: Vector2::new(0.0, -0.5),
                fuel: 100.0,
                phase: Phase::Ascent,
                distance: 721.14,
            },
        ];

        let mut buf = Vec::new();
        write_trajectory(&mut buf, &traj).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let mut lines = text.lines();

        assert_eq!(
            lines.next().unwrap(),
            "time,pos_0,pos_1,vel_0,vel_1,fuel,phase,distance"
        );
        assert_eq!(lines.clone().count(), 2);
        let row = lines.next().unwrap();
        assert!(row.starts_with("0.0000,100.0000,500.0000"));
        assert!(row.contains("LAUNCH"));
    }

    #[test]
    fn empty_trajectory_is_header_only() {
        let mut buf = Vec::new();
        write_trajectory::<_, 3>(&mut buf, &[]).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text.lines().count(), 1);
    }
}
