//! Unit tests for pf-core primitives.

#[cfg(test)]
mod ids {
    use crate::{AreaId, AreaSelector, FrameIndex};

    #[test]
    fn index_roundtrip() {
        let id = AreaId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(AreaId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(FrameIndex(99) < FrameIndex(100));
        assert!(AreaId(2) > AreaId(1));
    }

    #[test]
    fn display_is_bare_number() {
        assert_eq!(AreaId(7).to_string(), "7");
        assert_eq!(FrameIndex(120).to_string(), "120");
    }

    #[test]
    fn selector_parses_all_and_legacy_sentinel() {
        assert_eq!("all".parse::<AreaSelector>().unwrap(), AreaSelector::All);
        assert_eq!("-1".parse::<AreaSelector>().unwrap(), AreaSelector::All);
        assert_eq!("3".parse::<AreaSelector>().unwrap(), AreaSelector::Area(AreaId(3)));
        assert!("-2".parse::<AreaSelector>().is_err());
        assert!("three".parse::<AreaSelector>().is_err());
    }

    #[test]
    fn selector_matches() {
        assert!(AreaSelector::All.matches(AreaId(9)));
        assert!(AreaSelector::Area(AreaId(2)).matches(AreaId(2)));
        assert!(!AreaSelector::Area(AreaId(2)).matches(AreaId(3)));
        assert_eq!(AreaSelector::All.to_string(), "all");
    }
}

#[cfg(test)]
mod geo {
    use crate::{Extent, Point2};

    #[test]
    fn extent_from_points() {
        let e = Extent::from_points([
            Point2::new(1.0, 2.0),
            Point2::new(-3.0, 5.0),
            Point2::new(4.0, -1.0),
        ])
        .unwrap();
        assert_eq!(e, Extent::new(-3.0, 4.0, -1.0, 5.0));
        assert_eq!(e.width(), 7.0);
        assert_eq!(e.height(), 6.0);
        assert!(e.is_proper());
    }

    #[test]
    fn extent_from_no_points() {
        assert!(Extent::from_points(std::iter::empty()).is_none());
    }

    #[test]
    fn degenerate_extent_is_not_proper() {
        let e = Extent::from_points([Point2::new(1.0, 1.0), Point2::new(1.0, 4.0)]).unwrap();
        assert!(!e.is_proper());
    }

    #[test]
    fn contains_is_closed() {
        let e = Extent::new(0.0, 10.0, 0.0, 2.0);
        assert!(e.contains(Point2::new(0.0, 0.0)));
        assert!(e.contains(Point2::new(10.0, 2.0)));
        assert!(!e.contains(Point2::new(10.01, 1.0)));
    }
}

#[cfg(test)]
mod naming {
    use crate::naming::{raster_glob, series_glob};
    use crate::{
        AreaId, FieldKind, FrameIndex, PfError, parse_raster_name, parse_series_area,
        raster_file_name, series_file_name,
    };

    #[test]
    fn parses_raster_name() {
        let n = parse_raster_name("Prf_d_traj_id_1_00042.dat").unwrap();
        assert_eq!(n.area, AreaId(1));
        assert_eq!(n.frame, FrameIndex(42));
    }

    #[test]
    fn trajectory_stem_with_marker_and_underscores() {
        let n = parse_raster_name("Prf_v_run_id_7_final_id_12_00300.dat").unwrap();
        assert_eq!(n.area, AreaId(12));
        assert_eq!(n.frame, FrameIndex(300));
    }

    #[test]
    fn rejects_bad_raster_names() {
        for bad in [
            "Prf_d_traj_id_1_00042.txt",
            "Prf_d_traj_id_1_00042",
            "Prf_d_traj_id_1_abc.dat",
            "Prf_d_traj_1_00042.dat",
            "Prf_d_traj_id_x_00042.dat",
            "Prf_d_traj_id__00042.dat",
        ] {
            let err = parse_raster_name(bad).unwrap_err();
            assert!(matches!(err, PfError::FileName { .. }), "{bad}: {err}");
        }
    }

    #[test]
    fn format_then_parse_raster_name() {
        let name = raster_file_name(FieldKind::Density, "bottleneck", AreaId(2), FrameIndex(7)).unwrap();
        assert_eq!(name, "Prf_d_bottleneck_id_2_00007.dat");
        let parsed = parse_raster_name(&name).unwrap();
        assert_eq!((parsed.area, parsed.frame), (AreaId(2), FrameIndex(7)));
    }

    #[test]
    fn flow_has_no_raster_name() {
        assert!(raster_file_name(FieldKind::Flow, "t", AreaId(1), FrameIndex(1)).is_err());
        assert!(raster_glob(FieldKind::Flow, AreaId(1)).is_none());
    }

    #[test]
    fn raster_glob_pattern() {
        assert_eq!(
            raster_glob(FieldKind::Velocity, AreaId(3)).unwrap(),
            "Prf_v_*id_3_*.dat"
        );
    }

    #[test]
    fn series_names() {
        let name = series_file_name("traj", AreaId(4));
        assert_eq!(name, "Flow_NT_traj_id_4.dat");
        assert_eq!(parse_series_area(&name).unwrap(), AreaId(4));
        assert_eq!(series_glob(), "Flow_NT_*id_*.dat");
        assert!(parse_series_area("Flow_NT_traj.dat").is_err());
    }
}

#[cfg(test)]
mod table {
    use std::io::Cursor;
    use std::path::Path;

    use crate::{PfError, read_table};

    fn parse(text: &str) -> Result<crate::Table, PfError> {
        read_table(Cursor::new(text), Path::new("mem.dat"))
    }

    #[test]
    fn reads_mixed_whitespace() {
        let t = parse("1 2\t3\n4   5 6\n").unwrap();
        assert_eq!((t.rows, t.cols), (2, 3));
        assert_eq!(t.values, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert_eq!(t.column(0).unwrap(), vec![1.0, 4.0]);
    }

    #[test]
    fn skips_comments_and_blank_lines() {
        let t = parse("# header\n\n0.5 1.5 # inline\n\n2.5 3.5\n").unwrap();
        assert_eq!((t.rows, t.cols), (2, 2));
        assert_eq!(t.column(1).unwrap(), vec![1.5, 3.5]);
        assert!(t.column(2).is_none());
    }

    #[test]
    fn empty_input_is_empty_table() {
        let t = parse("# nothing\n").unwrap();
        assert!(t.is_empty());
    }

    #[test]
    fn ragged_rows_rejected_with_line_number() {
        let err = parse("1 2 3\n4 5\n").unwrap_err();
        match err {
            PfError::Table { line, .. } => assert_eq!(line, 2),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn non_numeric_rejected() {
        assert!(matches!(parse("1 x\n").unwrap_err(), PfError::Table { line: 1, .. }));
    }
}

#[cfg(test)]
mod config {
    use crate::{AreaId, AveragingPolicy, FrameIndex, ProfileConfig, SteadyRequest};

    #[test]
    fn defaults() {
        let cfg = ProfileConfig::new("fields", AreaId(1));
        assert_eq!(cfg.steady, SteadyRequest::FULL);
        assert_eq!(cfg.policy, AveragingPolicy::BiasedByNominalWindow);
    }

    #[test]
    fn steady_request_new() {
        let r = SteadyRequest::new(Some(50), None);
        assert_eq!(r.begin, Some(FrameIndex(50)));
        assert_eq!(r.end, None);
    }

    #[test]
    fn policy_divisor() {
        assert_eq!(AveragingPolicy::BiasedByNominalWindow.divisor(5, 4), Some(5));
        assert_eq!(AveragingPolicy::CompleteFramesOnly.divisor(5, 4), Some(4));
        assert_eq!(AveragingPolicy::CompleteFramesOnly.divisor(5, 0), None);
    }
}
