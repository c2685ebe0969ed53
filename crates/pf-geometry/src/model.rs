//! In-memory geometry model.

use pf_core::{Extent, Point2};

use crate::{GeometryError, GeometryResult};

/// One open wall line, stroked as given.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Polyline {
    /// `room/subroom` the wall belongs to.
    pub owner:    String,
    pub vertices: Vec<Point2>,
}

/// One obstacle outline; implicitly closed.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Polygon {
    pub id:       String,
    pub vertices: Vec<Point2>,
}

/// Walls, obstacles and the extent they span.
///
/// The extent places the raster grids in physical coordinates.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Geometry {
    walls:     Vec<Polyline>,
    obstacles: Vec<Polygon>,
    extent:    Extent,
}

impl Geometry {
    /// Build a geometry and compute its extent over every wall and obstacle
    /// vertex.
    ///
    /// # Errors
    ///
    /// [`GeometryError::Empty`] when there is no vertex at all.
    pub fn new(walls: Vec<Polyline>, obstacles: Vec<Polygon>) -> GeometryResult<Self> {
        let points = walls
            .iter()
            .flat_map(|w| w.vertices.iter())
            .chain(obstacles.iter().flat_map(|o| o.vertices.iter()))
            .copied();
        let extent = Extent::from_points(points).ok_or(GeometryError::Empty)?;
        Ok(Self { walls, obstacles, extent })
    }

    pub fn walls(&self) -> &[Polyline] {
        &self.walls
    }

    pub fn obstacles(&self) -> &[Polygon] {
        &self.obstacles
    }

    #[inline]
    pub fn extent(&self) -> Extent {
        self.extent
    }
}
