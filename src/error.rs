use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Unable to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unable to parse manifest XML")]
    Xml(#[from] roxmltree::Error),

    #[error("Manifest at {} does not have a dataObjectSection", .0.display())]
    ManifestStructure(PathBuf),

    #[error("Unable to locate '{0}' in manifest")]
    ManifestValue(String),

    #[error("Unexpected value '{value}' for '{field}' in manifest")]
    UnexpectedValue { field: String, value: String },

    #[error(
        "Unexpected product name '{0}': expected the Sentinel-3 naming convention, ending in .SEN3"
    )]
    NamingConvention(String),

    #[error("Unsupported product type '{0}'")]
    UnsupportedProductType(String),

    #[error("Unable to parse timestamp '{value}'")]
    Timestamp {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("Unable to read NetCDF file {}", path.display())]
    NetCdf {
        path: PathBuf,
        #[source]
        source: netcdf::Error,
    },

    #[error("NetCDF attribute '{name}' missing or malformed in {}", path.display())]
    NetCdfAttribute { name: String, path: PathBuf },

    #[error("Unable to serialize JSON")]
    Json(#[from] serde_json::Error),
}
