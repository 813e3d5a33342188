#[cfg(test)]
mod trajectory_test {
    use std::fs;
    use std::path::PathBuf;

    use biofilm_io::{TrajectoryWriter, TRAJECTORY_HEADER};

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("biofilm-trajectory-{}", name));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        return dir;
    }

    #[test]
    fn header_rows_and_separator_test() {
        let dir = scratch_dir("header");
        let mut w = TrajectoryWriter::new(&dir);
        w.write_row(0, 0, "cell", 1.0, 2.0, 1.0, 3.0, 1.0, 0.0).unwrap();
        w.write_row(10000, 0, "eps", 0.5, 0.5, 0.5, 0.0, 0.0, 1.0).unwrap();
        w.end_tick().unwrap();
        w.flush().unwrap();

        let content = fs::read_to_string(dir.join("simulation_output_part_000.csv")).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], TRAJECTORY_HEADER);
        assert!(lines[1].starts_with("0, 0, cell, 1.000000, 2.000000"));
        assert!(lines[2].starts_with("10000, 0, eps, 0.500000, 0.500000, 0.500000, 0.000000"));
        assert_eq!(lines[3], "########################################");
    }

    #[test]
    fn rotation_happens_after_separator_test() {
        let dir = scratch_dir("rotation");
        // header + 2 rows + separator = 4 lines; the limit of 4 forces a rotation per tick
        let mut w = TrajectoryWriter::with_line_limit(&dir, 4);
        for tick in 0..3 {
            w.write_row(0, tick, "cell", 0.0, 0.0, 1.0, 1.0, 1.0, 0.0).unwrap();
            w.write_row(1, tick, "cell", 2.0, 0.0, 1.0, 1.0, 1.0, 0.0).unwrap();
            w.end_tick().unwrap();
        }
        w.flush().unwrap();

        for part in 0..3 {
            let path = dir.join(format!("simulation_output_part_{:03}.csv", part));
            let content = fs::read_to_string(&path).unwrap();
            let lines: Vec<&str> = content.lines().collect();
            assert_eq!(lines.len(), 4, "file {} should hold one complete tick", part);
            assert_eq!(lines[0], TRAJECTORY_HEADER);
            assert_eq!(lines[3], "########################################");
        }
    }

    #[test]
    fn ticks_are_never_split_across_files_test() {
        let dir = scratch_dir("no-split");
        // the limit is reached mid-tick; rows must keep flowing to the same file
        // until the separator closes the tick
        let mut w = TrajectoryWriter::with_line_limit(&dir, 3);
        for i in 0..5 {
            w.write_row(i, 0, "cell", 0.0, 0.0, 1.0, 1.0, 1.0, 0.0).unwrap();
        }
        w.end_tick().unwrap();
        w.flush().unwrap();

        let content = fs::read_to_string(dir.join("simulation_output_part_000.csv")).unwrap();
        // header + 5 rows + separator, all in part 000
        assert_eq!(content.lines().count(), 7);
        assert!(!dir.join("simulation_output_part_001.csv").exists());

        // the next tick then opens part 001
        w.write_row(0, 1, "cell", 0.0, 0.0, 1.0, 1.0, 1.0, 0.0).unwrap();
        w.flush().unwrap();
        assert!(dir.join("simulation_output_part_001.csv").exists());
    }
}
