//! Geometry sources.
//!
//! # Pluggability
//!
//! The renderer only needs a [`Geometry`] value; where it comes from is the
//! business of a [`GeometryProvider`].  [`JpsGeometryFile`] reads the
//! JuPedSim geometry XML used by the analysis tool; tests and synthetic
//! runs build a [`Geometry`] in memory instead.
//!
//! # Accepted XML
//!
//! ```text
//! <geometry>
//!   <rooms>
//!     <room id="0">
//!       <subroom id="1">
//!         <polygon caption="wall">            ← one wall polyline
//!           <vertex px="0.0" py="0.0"/>
//!           ...
//!         </polygon>
//!         <obstacle id="3">                   ← one obstacle polygon
//!           <polygon> <vertex .../> ... </polygon>
//!         </obstacle>
//!       </subroom>
//!     </room>
//!   </rooms>
//!   <transitions> ... </transitions>          ← ignored
//! </geometry>
//! ```

use std::path::{Path, PathBuf};

use roxmltree::{Document, Node};
use tracing::debug;

use pf_core::Point2;

use crate::{Geometry, GeometryError, GeometryResult, Polygon, Polyline};

// ── GeometryProvider trait ────────────────────────────────────────────────────

/// Anything that can supply the room geometry of a run.
pub trait GeometryProvider {
    fn geometry(&self) -> GeometryResult<Geometry>;
}

impl GeometryProvider for Geometry {
    fn geometry(&self) -> GeometryResult<Geometry> {
        Ok(self.clone())
    }
}

// ── JpsGeometryFile ───────────────────────────────────────────────────────────

/// A JuPedSim geometry XML file on disk.
#[derive(Clone, Debug)]
pub struct JpsGeometryFile {
    pub path: PathBuf,
}

impl JpsGeometryFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl GeometryProvider for JpsGeometryFile {
    fn geometry(&self) -> GeometryResult<Geometry> {
        let text = read_to_string(&self.path)?;
        let geometry = parse_geometry_str(&text)?;
        debug!(
            path = %self.path.display(),
            walls = geometry.walls().len(),
            obstacles = geometry.obstacles().len(),
            extent = %geometry.extent(),
            "loaded geometry"
        );
        Ok(geometry)
    }
}

fn read_to_string(path: &Path) -> GeometryResult<String> {
    std::fs::read_to_string(path).map_err(|source| GeometryError::Io {
        path: path.to_path_buf(),
        source,
    })
}

// ── Parsing ───────────────────────────────────────────────────────────────────

/// Parse JuPedSim geometry XML held in memory.
pub fn parse_geometry_str(xml: &str) -> GeometryResult<Geometry> {
    let doc = Document::parse(xml)?;
    let root = doc.root_element();
    if !root.has_tag_name("geometry") {
        return Err(GeometryError::UnexpectedRoot(root.tag_name().name().to_owned()));
    }

    let mut walls = Vec::new();
    let mut obstacles = Vec::new();

    for room in root.descendants().filter(|n| n.has_tag_name("room")) {
        let room_id = room.attribute("id").unwrap_or("?");
        for subroom in elements(room, "subroom") {
            let owner = format!("{room_id}/{}", subroom.attribute("id").unwrap_or("?"));

            for polygon in elements(subroom, "polygon") {
                walls.push(Polyline {
                    owner:    owner.clone(),
                    vertices: vertices(&doc, polygon)?,
                });
            }

            for (i, obstacle) in elements(subroom, "obstacle").enumerate() {
                let mut outline = Vec::new();
                for polygon in elements(obstacle, "polygon") {
                    outline.extend(vertices(&doc, polygon)?);
                }
                let id = obstacle
                    .attribute("id")
                    .map_or_else(|| format!("{owner}#{i}"), str::to_owned);
                obstacles.push(Polygon { id, vertices: outline });
            }
        }
    }

    Geometry::new(walls, obstacles)
}

/// Direct element children of `node` named `tag`.
fn elements<'a, 'input: 'a>(node: Node<'a, 'input>, tag: &'static str) -> impl Iterator<Item = Node<'a, 'input>> {
    node.children().filter(move |n| n.has_tag_name(tag))
}

fn vertices(doc: &Document<'_>, polygon: Node<'_, '_>) -> GeometryResult<Vec<Point2>> {
    elements(polygon, "vertex")
        .map(|v| -> GeometryResult<Point2> {
            Ok(Point2::new(coordinate(doc, v, "px")?, coordinate(doc, v, "py")?))
        })
        .collect()
}

fn coordinate(doc: &Document<'_>, node: Node<'_, '_>, attribute: &'static str) -> GeometryResult<f64> {
    let position = || doc.text_pos_at(node.range().start).to_string();
    let element = || node.tag_name().name().to_owned();

    let value = node.attribute(attribute).ok_or_else(|| GeometryError::MissingAttribute {
        element: element(),
        attribute,
        position: position(),
    })?;
    value.trim().parse().map_err(|_| GeometryError::BadNumber {
        element: element(),
        attribute,
        value: value.to_owned(),
        position: position(),
    })
}
