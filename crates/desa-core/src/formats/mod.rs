//! Readers for on-disk source data

pub mod boundary;

pub use boundary::{
    decode_text, parse_feature_collection, read_boundary_file, BoundaryProperties,
    DEFAULT_ID_PROPERTY, DEFAULT_NAME_PROPERTY,
};
