use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

pub const STAC_VERSION: &str = "1.0.0";

pub const SAT_EXTENSION: &str = "https://stac-extensions.github.io/sat/v1.0.0/schema.json";
pub const EO_EXTENSION: &str = "https://stac-extensions.github.io/eo/v1.0.0/schema.json";
pub const PROJECTION_EXTENSION: &str =
    "https://stac-extensions.github.io/projection/v1.0.0/schema.json";
pub const FILE_EXTENSION: &str = "https://stac-extensions.github.io/file/v2.1.0/schema.json";

pub const XML_MEDIA_TYPE: &str = "application/xml";
pub const PNG_MEDIA_TYPE: &str = "image/png";
pub const COG_MEDIA_TYPE: &str = "image/tiff; application=geotiff; profile=cloud-optimized";

/// A STAC Item. Properties and per-asset extra fields are kept as JSON maps
/// so extension fields (`s3:*`, `file:*`, `eo:bands`) serialize next to the
/// standard ones.
#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct Item {
    #[serde(rename = "type")]
    pub type_field: String,
    pub stac_version: String,
    pub stac_extensions: Vec<String>,
    pub id: String,
    pub geometry: Option<geojson::Geometry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bbox: Option<Vec<f64>>,
    pub properties: Map<String, Value>,
    pub links: Vec<Link>,
    pub assets: BTreeMap<String, Asset>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection: Option<String>,
}

impl Item {
    pub fn new(id: impl Into<String>) -> Self {
        Item {
            type_field: "Feature".to_string(),
            stac_version: STAC_VERSION.to_string(),
            stac_extensions: vec![],
            id: id.into(),
            geometry: None,
            bbox: None,
            properties: Map::new(),
            links: vec![],
            assets: BTreeMap::new(),
            collection: None,
        }
    }

    pub fn write<P: AsRef<Path>>(self: &Self, path: P) -> Result<()> {
        write_json(self, path.as_ref())
    }

    pub fn read<P: AsRef<Path>>(path: P) -> Result<Self> {
        read_json(path.as_ref())
    }
}

#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct Asset {
    pub href: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub media_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub roles: Vec<String>,
    #[serde(flatten)]
    pub extra_fields: Map<String, Value>,
}

impl Asset {
    pub fn new(href: impl Into<String>) -> Self {
        Asset {
            href: href.into(),
            media_type: None,
            title: None,
            description: None,
            roles: vec![],
            extra_fields: Map::new(),
        }
    }
}

#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct Link {
    pub rel: String,
    pub href: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub media_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl Link {
    pub fn license(href: impl Into<String>) -> Self {
        Link {
            rel: "license".to_string(),
            href: href.into(),
            media_type: None,
            title: None,
        }
    }
}

#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct Provider {
    pub name: String,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub roles: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct Extent {
    pub spatial: SpatialExtent,
    pub temporal: TemporalExtent,
}

#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct SpatialExtent {
    pub bbox: Vec<Vec<f64>>,
}

#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct TemporalExtent {
    pub interval: Vec<Vec<Option<String>>>,
}

#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct Collection {
    #[serde(rename = "type")]
    pub type_field: String,
    pub stac_version: String,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub stac_extensions: Vec<String>,
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub description: String,
    pub license: String,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub providers: Vec<Provider>,
    pub extent: Extent,
    #[serde(skip_serializing_if = "Map::is_empty", default)]
    pub summaries: Map<String, Value>,
    pub links: Vec<Link>,
}

impl Collection {
    pub fn write<P: AsRef<Path>>(self: &Self, path: P) -> Result<()> {
        write_json(self, path.as_ref())
    }

    pub fn read<P: AsRef<Path>>(path: P) -> Result<Self> {
        read_json(path.as_ref())
    }
}

fn write_json<T: Serialize>(value: &T, path: &Path) -> Result<()> {
    let content = serde_json::to_string_pretty(value)?;
    fs::write(path, content).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(())
}

fn read_json<T: for<'de> Deserialize<'de>>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_json::from_str(&content)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_ITEM_PATH: &str = "/tmp/sen3-stac-catalog-item.json";

    fn mock_item() -> Item {
        let mut item = Item::new("S3A_OL_1_EFR_TEST");
        item.stac_extensions = vec![SAT_EXTENSION.to_string()];
        item.bbox = Some(vec![-12.7336, 39.5443, 7.26622, 52.4486]);
        item.properties.insert(
            "datetime".to_string(),
            Value::from("2021-08-20T10:33:22.751633Z"),
        );
        let mut asset = Asset::new("/data/Oa01_radiance.nc");
        asset.media_type = Some("application/x-netcdf".to_string());
        asset.roles = vec!["data".to_string()];
        item.assets.insert("Oa01_radianceData".to_string(), asset);
        item
    }

    #[test]
    fn test_item_serializes_type_and_version() {
        let item = mock_item();
        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value["type"], "Feature");
        assert_eq!(value["stac_version"], STAC_VERSION);
        assert_eq!(value["assets"]["Oa01_radianceData"]["type"], "application/x-netcdf");
    }

    #[test]
    fn test_item_write_read_roundtrip() {
        let item = mock_item();
        item.write(TEST_ITEM_PATH).unwrap();

        let read_back = Item::read(TEST_ITEM_PATH).unwrap();
        assert_eq!(read_back.id, item.id);
        assert_eq!(read_back.bbox, item.bbox);
        assert_eq!(read_back.assets.len(), 1);
    }

    #[test]
    fn test_asset_extra_fields_flatten() {
        let mut asset = Asset::new("/data/measurement.nc");
        asset
            .extra_fields
            .insert("file:size".to_string(), Value::from(1024));
        let value = serde_json::to_value(&asset).unwrap();
        assert_eq!(value["file:size"], 1024);
        assert_eq!(value.get("extra_fields"), None);
    }
}
