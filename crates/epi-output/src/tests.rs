//! Integration tests for epi-output.

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use crate::csv::CsvWriter;
    use crate::row::{AgentSnapshotRow, StateCountsRow};
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn counts_row(run: u32, step: u64) -> StateCountsRow {
        StateCountsRow {
            run,
            step,
            susceptible: 90,
            infectious:  5,
            recovered:   3,
            dead:        1,
            quarantined: 1,
        }
    }

    fn snap_row(agent_id: u32, step: u64) -> AgentSnapshotRow {
        AgentSnapshotRow {
            run: 0,
            step,
            agent_id,
            x: 10.0 * agent_id as f64,
            y: 5.0,
            state: 'S',
        }
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("state_counts.csv").exists());
        assert!(dir.path().join("agent_snapshots.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("state_counts.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(
            headers,
            ["run", "step", "susceptible", "infectious", "recovered", "dead", "quarantined"]
        );

        let mut rdr2 = csv::Reader::from_path(dir.path().join("agent_snapshots.csv")).unwrap();
        let headers2: Vec<_> = rdr2.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers2, ["run", "step", "agent_id", "x", "y", "state"]);
    }

    #[test]
    fn csv_counts_round_trip() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_counts(&counts_row(2, 7)).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("state_counts.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][0], "2");  // run
        assert_eq!(&rows[0][1], "7");  // step
        assert_eq!(&rows[0][2], "90"); // susceptible
        assert_eq!(&rows[0][6], "1");  // quarantined
    }

    #[test]
    fn csv_snapshot_round_trip() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        let rows = vec![snap_row(0, 5), snap_row(1, 5), snap_row(2, 5)];
        w.write_snapshots(&rows).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("agent_snapshots.csv")).unwrap();
        let read_rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(read_rows.len(), 3);
        assert_eq!(&read_rows[0][2], "0");      // agent_id
        assert_eq!(&read_rows[1][3], "10.000"); // x
        assert_eq!(&read_rows[2][5], "S");      // state
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap(); // second call should not panic
    }

    #[test]
    fn csv_empty_snapshot_ok() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_snapshots(&[]).unwrap(); // should return Ok(())
    }

    #[test]
    fn integration_csv() {
        use epi_agent::{DiseaseRates, PopulationBuilder};
        use epi_core::{RunId, SimConfig, SimRng};
        use epi_disease::ModelVariant;
        use epi_sim::SimBuilder;

        use crate::observer::SimOutputObserver;

        let dir = tmp();
        let writer = CsvWriter::new(dir.path()).unwrap();
        let mut obs = SimOutputObserver::new(writer);

        // Two runs of six steps each, snapshots every 3 steps.
        for run in 0..2u32 {
            let mut config = SimConfig::new(6, 40 + run as u64);
            config.snapshot_interval = 3;
            let mut rng = SimRng::new(config.seed);
            let population =
                PopulationBuilder::new(200.0, 200.0, 10.0, DiseaseRates::sirqd(0.2, 0.1, 0.1, 0.5))
                    .susceptible(8)
                    .infectious(2)
                    .build(&mut rng)
                    .unwrap();
            let mut sim = SimBuilder::new(config, population, rng)
                .variant(ModelVariant::Sirqd)
                .build()
                .unwrap();

            obs.set_run(RunId(run));
            sim.run(&mut obs);
        }
        assert!(obs.take_error().is_none());
        drop(obs);

        // 2 runs × 6 steps.
        let mut counts = csv::Reader::from_path(dir.path().join("state_counts.csv")).unwrap();
        let rows: Vec<_> = counts.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 12);
        assert_eq!(&rows[0][0], "0");
        assert_eq!(&rows[6][0], "1");
        // Conservation column-wise: each row sums to the population size.
        for row in &rows {
            let total: u64 = (2..7).map(|i| row[i].parse::<u64>().unwrap()).sum();
            assert_eq!(total, 10);
        }

        // 2 runs × snapshots at steps 0 and 3 × 10 agents.
        let mut snaps = csv::Reader::from_path(dir.path().join("agent_snapshots.csv")).unwrap();
        let snap_rows: Vec<_> = snaps.records().map(|r| r.unwrap()).collect();
        assert_eq!(snap_rows.len(), 2 * 2 * 10);
    }
}
