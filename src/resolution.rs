use crate::error::{Error, Result};
use std::path::Path;

/// Reads the `resolution` global attribute of a measurement file,
/// e.g. "[ 300 300 ]", as a list of integers.
pub fn read_grid_resolution(path: &Path) -> Result<Vec<i64>> {
    let value = read_string_attribute(path, "resolution")?;
    parse_grid_resolution(&value).ok_or_else(|| Error::NetCdfAttribute {
        name: "resolution".to_string(),
        path: path.to_path_buf(),
    })
}

/// The sea surface temperature product records its resolution as free text
/// under `spatial_resolution`, kept verbatim.
pub fn read_spatial_resolution(path: &Path) -> Result<String> {
    read_string_attribute(path, "spatial_resolution")
}

fn read_string_attribute(path: &Path, name: &str) -> Result<String> {
    let file = netcdf::open(path).map_err(|source| Error::NetCdf {
        path: path.to_path_buf(),
        source,
    })?;
    let attribute = file.attribute(name).ok_or_else(|| Error::NetCdfAttribute {
        name: name.to_string(),
        path: path.to_path_buf(),
    })?;
    match attribute.value() {
        Ok(netcdf::AttributeValue::Str(value)) => Ok(value),
        _ => Err(Error::NetCdfAttribute {
            name: name.to_string(),
            path: path.to_path_buf(),
        }),
    }
}

fn parse_grid_resolution(value: &str) -> Option<Vec<i64>> {
    let mut resolution = Vec::new();
    for token in value
        .trim()
        .trim_start_matches('[')
        .trim_end_matches(']')
        .split_whitespace()
    {
        resolution.push(token.parse().ok()?);
    }
    if resolution.is_empty() {
        None
    } else {
        Some(resolution)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_parse_grid_resolution() {
        assert_eq!(parse_grid_resolution("[ 300 300 ]"), Some(vec![300, 300]));
        assert_eq!(parse_grid_resolution("[270 294]"), Some(vec![270, 294]));
        assert_eq!(parse_grid_resolution("[ ]"), None);
        assert_eq!(parse_grid_resolution("[ one two ]"), None);
    }

    #[test]
    fn test_read_grid_resolution_from_file() {
        let path = PathBuf::from("/tmp/sen3-stac-resolution-grid.nc");
        let mut file = netcdf::create(&path).unwrap();
        file.add_attribute("resolution", "[ 270 294 ]").unwrap();
        drop(file);
        assert_eq!(read_grid_resolution(&path).unwrap(), vec![270, 294]);
    }

    #[test]
    fn test_read_spatial_resolution_from_file() {
        let path = PathBuf::from("/tmp/sen3-stac-resolution-spatial.nc");
        let mut file = netcdf::create(&path).unwrap();
        file.add_attribute("spatial_resolution", "1.0[km]").unwrap();
        drop(file);
        assert_eq!(read_spatial_resolution(&path).unwrap(), "1.0[km]");
    }

    #[test]
    fn test_missing_attribute_is_an_error() {
        let path = PathBuf::from("/tmp/sen3-stac-resolution-missing.nc");
        let file = netcdf::create(&path).unwrap();
        drop(file);
        let error = read_grid_resolution(&path).unwrap_err();
        assert_eq!(
            error.to_string(),
            "NetCDF attribute 'resolution' missing or malformed in /tmp/sen3-stac-resolution-missing.nc"
        );
    }
}
