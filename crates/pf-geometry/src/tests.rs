//! Unit tests for pf-geometry.

#[cfg(test)]
mod fixtures {
    /// Corridor 0..10 × 0..4 with one box obstacle and a transition that
    /// must be ignored.
    pub const CORRIDOR: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<geometry version="0.8" caption="corridor" unit="m">
  <rooms>
    <room id="0" caption="hall">
      <subroom id="0" class="subroom">
        <polygon caption="wall">
          <vertex px="0.0" py="0.0"/>
          <vertex px="10.0" py="0.0"/>
        </polygon>
        <polygon caption="wall">
          <vertex px="0.0" py="4.0"/>
          <vertex px="10.0" py="4.0"/>
        </polygon>
        <obstacle id="7" caption="pillar">
          <polygon>
            <vertex px="4.0" py="1.5"/>
            <vertex px="5.0" py="1.5"/>
            <vertex px="5.0" py="2.5"/>
            <vertex px="4.0" py="2.5"/>
          </polygon>
        </obstacle>
      </subroom>
    </room>
  </rooms>
  <transitions>
    <transition id="0">
      <vertex px="-5.0" py="-5.0"/>
      <vertex px="-5.0" py="9.0"/>
    </transition>
  </transitions>
</geometry>
"#;
}

// ── Model ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod model {
    use pf_core::{Extent, Point2};

    use crate::{Geometry, GeometryError, Polygon, Polyline};

    fn wall(points: &[(f64, f64)]) -> Polyline {
        Polyline {
            owner:    "0/0".into(),
            vertices: points.iter().copied().map(Point2::from).collect(),
        }
    }

    #[test]
    fn extent_spans_walls_and_obstacles() {
        let walls = vec![wall(&[(0.0, 0.0), (8.0, 0.0)])];
        let obstacles = vec![Polygon {
            id:       "1".into(),
            vertices: vec![Point2::new(2.0, 5.0), Point2::new(-1.0, 3.0)],
        }];
        let g = Geometry::new(walls, obstacles).unwrap();
        assert_eq!(g.extent(), Extent::new(-1.0, 8.0, 0.0, 5.0));
        assert_eq!(g.walls().len(), 1);
        assert_eq!(g.obstacles().len(), 1);
    }

    #[test]
    fn no_vertices_is_empty() {
        let err = Geometry::new(vec![], vec![]).unwrap_err();
        assert!(matches!(err, GeometryError::Empty));
    }
}

// ── XML provider ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod xml {
    use pf_core::{Extent, Point2};

    use super::fixtures::CORRIDOR;
    use crate::{GeometryError, GeometryProvider, JpsGeometryFile, parse_geometry_str};

    #[test]
    fn walls_and_obstacles_parsed() {
        let g = parse_geometry_str(CORRIDOR).unwrap();
        assert_eq!(g.walls().len(), 2);
        assert_eq!(g.walls()[0].owner, "0/0");
        assert_eq!(g.walls()[1].vertices, vec![Point2::new(0.0, 4.0), Point2::new(10.0, 4.0)]);

        assert_eq!(g.obstacles().len(), 1);
        assert_eq!(g.obstacles()[0].id, "7");
        assert_eq!(g.obstacles()[0].vertices.len(), 4);
    }

    #[test]
    fn transitions_do_not_widen_extent() {
        let g = parse_geometry_str(CORRIDOR).unwrap();
        assert_eq!(g.extent(), Extent::new(0.0, 10.0, 0.0, 4.0));
    }

    #[test]
    fn obstacle_without_id_gets_positional_name() {
        let xml = r#"<geometry><rooms><room id="2"><subroom id="5">
            <polygon><vertex px="0" py="0"/><vertex px="1" py="0"/></polygon>
            <obstacle><polygon><vertex px="0.2" py="0.2"/><vertex px="0.4" py="0.2"/></polygon></obstacle>
        </subroom></room></rooms></geometry>"#;
        let g = parse_geometry_str(xml).unwrap();
        assert_eq!(g.obstacles()[0].id, "2/5#0");
    }

    #[test]
    fn missing_coordinate_names_element() {
        let xml = r#"<geometry><rooms><room id="0"><subroom id="0">
            <polygon><vertex px="0"/></polygon>
        </subroom></room></rooms></geometry>"#;
        let err = parse_geometry_str(xml).unwrap_err();
        match &err {
            GeometryError::MissingAttribute { element, attribute, .. } => {
                assert_eq!(element, "vertex");
                assert_eq!(*attribute, "py");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn non_numeric_coordinate() {
        let xml = r#"<geometry><rooms><room id="0"><subroom id="0">
            <polygon><vertex px="one" py="0"/></polygon>
        </subroom></room></rooms></geometry>"#;
        let err = parse_geometry_str(xml).unwrap_err();
        assert!(matches!(err, GeometryError::BadNumber { attribute: "px", .. }));
    }

    #[test]
    fn malformed_xml() {
        let err = parse_geometry_str("<geometry><rooms>").unwrap_err();
        assert!(matches!(err, GeometryError::Xml(_)));
    }

    #[test]
    fn wrong_root() {
        let err = parse_geometry_str("<trajectories/>").unwrap_err();
        assert!(matches!(err, GeometryError::UnexpectedRoot(ref r) if r == "trajectories"));
    }

    #[test]
    fn no_rooms_is_empty() {
        let err = parse_geometry_str("<geometry><rooms/></geometry>").unwrap_err();
        assert!(matches!(err, GeometryError::Empty));
    }

    #[test]
    fn file_provider_reads_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("geo.xml");
        std::fs::write(&path, CORRIDOR).unwrap();
        let g = JpsGeometryFile::new(&path).geometry().unwrap();
        assert_eq!(g.walls().len(), 2);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = JpsGeometryFile::new(dir.path().join("absent.xml"))
            .geometry()
            .unwrap_err();
        assert!(matches!(err, GeometryError::Io { .. }));
        assert!(err.to_string().contains("absent.xml"));
    }

    #[test]
    fn in_memory_geometry_is_a_provider() {
        let g = parse_geometry_str(CORRIDOR).unwrap();
        assert_eq!(g.geometry().unwrap(), g);
    }
}
