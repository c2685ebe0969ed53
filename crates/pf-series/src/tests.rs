//! Unit tests for pf-series.

#[cfg(test)]
mod helpers {
    use std::path::{Path, PathBuf};

    use pf_core::{AreaId, series_file_name};

    /// Write a three-column N(t) file (`frame t N`-style extra column last).
    pub fn write_series(dir: &Path, area: u32, points: &[(f64, f64)]) -> PathBuf {
        let path = dir.join(series_file_name("traj", AreaId(area)));
        let mut text = String::from("# t\tN\textra\n");
        for (t, n) in points {
            text.push_str(&format!("{t}\t{n}\t0\n"));
        }
        std::fs::write(&path, text).unwrap();
        path
    }
}

// ── Loading ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod load {
    use pf_core::AreaId;

    use super::helpers::write_series;
    use crate::{SeriesError, load_series, series_area};

    #[test]
    fn first_two_columns_are_t_and_n() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_series(dir.path(), 4, &[(0.0, 0.0), (0.5, 2.0), (1.0, 5.0)]);
        let s = load_series(&path).unwrap();
        assert_eq!(s.area, AreaId(4));
        assert_eq!(s.points, vec![(0.0, 0.0), (0.5, 2.0), (1.0, 5.0)]);
        assert_eq!(s.bounds(), Some(((0.0, 1.0), (0.0, 5.0))));
    }

    #[test]
    fn single_column_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Flow_NT_traj_id_1.dat");
        std::fs::write(&path, "1\n2\n").unwrap();
        let err = load_series(&path).unwrap_err();
        assert!(matches!(err, SeriesError::TooFewColumns { found: 1, .. }));
    }

    #[test]
    fn area_from_name() {
        assert_eq!(
            series_area(std::path::Path::new("out/Flow_NT_my_id_run_id_12.dat")).unwrap(),
            AreaId(12)
        );
        assert!(series_area(std::path::Path::new("Flow_NT_traj.dat")).is_err());
    }

    #[test]
    fn empty_series_has_no_bounds() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_series(dir.path(), 1, &[]);
        let s = load_series(&path).unwrap();
        assert!(s.points.is_empty());
        assert_eq!(s.bounds(), None);
    }
}

// ── Discovery & selection ─────────────────────────────────────────────────────

#[cfg(test)]
mod select {
    use pf_core::{AreaId, AreaSelector};

    use super::helpers::write_series;
    use crate::{SeriesError, discover_series, select_series};

    #[test]
    fn discover_finds_only_series_files() {
        let dir = tempfile::tempdir().unwrap();
        write_series(dir.path(), 2, &[(0.0, 0.0)]);
        write_series(dir.path(), 1, &[(0.0, 0.0)]);
        std::fs::write(dir.path().join("Prf_d_traj_id_1_00001.dat"), "1\n").unwrap();
        let files = discover_series(dir.path()).unwrap();
        assert_eq!(files.len(), 2);
        assert!(files[0] < files[1]);
    }

    #[test]
    fn discover_empty_dir() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(discover_series(dir.path()).unwrap_err(), SeriesError::NoFiles(_)));
    }

    #[test]
    fn all_loads_every_file_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let files = vec![
            write_series(dir.path(), 3, &[(0.0, 1.0)]),
            write_series(dir.path(), 1, &[(0.0, 2.0)]),
            write_series(dir.path(), 2, &[(0.0, 3.0)]),
        ];
        let series = select_series(&files, AreaSelector::All).unwrap();
        let areas: Vec<AreaId> = series.iter().map(|s| s.area).collect();
        assert_eq!(areas, vec![AreaId(3), AreaId(1), AreaId(2)]);
    }

    #[test]
    fn specific_area_loads_only_match() {
        let dir = tempfile::tempdir().unwrap();
        let files = vec![
            write_series(dir.path(), 1, &[(0.0, 1.0)]),
            write_series(dir.path(), 2, &[(0.0, 2.0), (1.0, 4.0)]),
        ];
        let series = select_series(&files, AreaSelector::Area(AreaId(2))).unwrap();
        assert_eq!(series.len(), 1);
        assert_eq!(series[0].points.len(), 2);
    }

    #[test]
    fn absent_area_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let files = vec![write_series(dir.path(), 1, &[(0.0, 1.0)])];
        let err = select_series(&files, AreaSelector::Area(AreaId(5))).unwrap_err();
        assert!(matches!(err, SeriesError::AreaNotFound(AreaId(5))));
    }

    #[test]
    fn no_files_for_all() {
        let files: Vec<std::path::PathBuf> = vec![];
        let err = select_series(&files, AreaSelector::All).unwrap_err();
        assert!(matches!(err, SeriesError::NothingToPlot));
    }

    #[test]
    fn unselected_files_are_not_read() {
        let dir = tempfile::tempdir().unwrap();
        // Area 9 exists only as a name; reading it would fail.
        let ghost = dir.path().join("Flow_NT_traj_id_9.dat");
        let files = vec![ghost, write_series(dir.path(), 1, &[(0.0, 1.0)])];
        let series = select_series(&files, AreaSelector::Area(AreaId(1))).unwrap();
        assert_eq!(series.len(), 1);
    }
}
