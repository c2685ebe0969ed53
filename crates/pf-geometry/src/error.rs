//! Geometry error type.

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced by `pf-geometry`.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("cannot read geometry file {}: {source}", .path.display())]
    Io {
        path:   PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed geometry XML: {0}")]
    Xml(#[from] roxmltree::Error),

    #[error("<{element}> at {position} lacks attribute {attribute:?}")]
    MissingAttribute {
        element:   String,
        attribute: &'static str,
        position:  String,
    },

    #[error("<{element}> at {position}: attribute {attribute:?} = {value:?} is not a number")]
    BadNumber {
        element:   String,
        attribute: &'static str,
        value:     String,
        position:  String,
    },

    #[error("expected root element <geometry>, found <{0}>")]
    UnexpectedRoot(String),

    #[error("geometry has no wall or obstacle vertices")]
    Empty,
}

pub type GeometryResult<T> = Result<T, GeometryError>;
