//! Tests for ds-output.

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use ds_core::Cardinal;
    use ds_sim::Phase;

    use crate::csv::{CsvWriter, SNAPSHOTS_FILE};
    use crate::row::SnapshotRow;
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn row(seq: u64) -> SnapshotRow {
        SnapshotRow {
            seq,
            tick:         seq,
            phase:        Phase::Running,
            lat:          0.0,
            lng:          seq as f64 * 0.01,
            distance_km:  seq as f64 * 1.1,
            progress_pct: seq as f64 * 0.5,
            elapsed_secs: seq as f64 * 36.0,
            segment:      0,
            heading:      Cardinal::E,
        }
    }

    #[test]
    fn csv_file_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join(SNAPSHOTS_FILE).exists());
    }

    #[test]
    fn csv_header_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join(SNAPSHOTS_FILE)).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(
            headers,
            ["seq", "tick", "phase", "lat", "lng", "distance_km", "progress_pct", "elapsed_secs", "segment", "heading"]
        );
    }

    #[test]
    fn csv_rows_written_in_order() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        for seq in 1..=3 {
            w.write_snapshot(&row(seq)).unwrap();
        }
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join(SNAPSHOTS_FILE)).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(&rows[0][0], "1");
        assert_eq!(&rows[0][2], "running");
        assert_eq!(&rows[1][4], "0.0200000");
        assert_eq!(&rows[2][7], "108.0");
        assert_eq!(&rows[2][9], "E");
    }

    #[test]
    fn finish_is_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }

    #[test]
    fn missing_directory_errors() {
        let dir = tmp();
        let result = CsvWriter::new(&dir.path().join("does/not/exist"));
        assert!(result.is_err());
    }
}

#[cfg(test)]
mod observer_tests {
    use tempfile::TempDir;

    use ds_clock::ManualClock;
    use ds_core::GeoPoint;
    use ds_route::RouteInput;
    use ds_sim::{PlaybackConfig, SimulationController};

    use crate::csv::SNAPSHOTS_FILE;
    use crate::{CsvWriter, OutputError, OutputResult, OutputWriter, SnapshotOutputObserver, SnapshotRow};

    fn route() -> RouteInput {
        RouteInput::starting_at(GeoPoint::new(0.0, 0.0))
            .leg(GeoPoint::new(0.0, 1.0), 600.0)
            .leg(GeoPoint::new(1.0, 1.0), 600.0)
    }

    #[test]
    fn integration_csv() {
        let dir: TempDir = tempfile::tempdir().unwrap();
        let config = PlaybackConfig { num_steps: 10, ..PlaybackConfig::default() };
        let mut sim = SimulationController::new(config, ManualClock::new());
        let mut obs = SnapshotOutputObserver::new(CsvWriter::new(dir.path()).unwrap());

        sim.start(&route()).unwrap();
        sim.run_ticks(5, &mut obs);
        sim.seek_to(75.0, &mut obs);
        sim.resume();
        sim.run(&mut obs);
        obs.finish();
        assert!(obs.take_error().is_none());

        // 5 ticks + 1 seek + 5 ticks to finish the second leg + the final row.
        assert_eq!(obs.rows(), 12);

        let mut rdr = csv::Reader::from_path(dir.path().join(SNAPSHOTS_FILE)).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 12);
        assert_eq!(&rows[5][2], "paused");
        assert_eq!(&rows[5][6], "75.00");
        assert_eq!(&rows[10][2], "running");
        assert_eq!(&rows[10][6], "100.00");
        assert_eq!(&rows[11][0], "12");
        assert_eq!(&rows[11][2], "finished");
        assert_eq!(&rows[11][6], "100.00");
    }

    /// Writer that fails every write.
    struct Failing {
        finishes: u32,
    }

    impl OutputWriter for Failing {
        fn write_snapshot(&mut self, _row: &SnapshotRow) -> OutputResult<()> {
            Err(OutputError::Io(std::io::Error::other("disk full")))
        }
        fn finish(&mut self) -> OutputResult<()> {
            self.finishes += 1;
            Ok(())
        }
    }

    #[test]
    fn first_error_is_kept() {
        let mut sim = SimulationController::new(PlaybackConfig::default(), ManualClock::new());
        let mut obs = SnapshotOutputObserver::new(Failing { finishes: 0 });
        sim.start(&route()).unwrap();
        sim.run_ticks(3, &mut obs);
        obs.finish();

        let err = obs.take_error().expect("write error stored");
        assert!(err.to_string().contains("disk full"));
        assert!(obs.take_error().is_none());
        assert_eq!(obs.rows(), 3);
        assert_eq!(obs.into_writer().finishes, 1);
    }
}
