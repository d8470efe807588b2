use crate::bands::{ProductType, ResolutionSource};
use crate::catalog::{Asset, PNG_MEDIA_TYPE, XML_MEDIA_TYPE};
use crate::error::{Error, Result};
use crate::manifest::{DataObject, Manifest, ReadHrefModifier};
use crate::resolution;
use serde_json::Value;
use std::collections::HashMap;
use std::path::Path;

pub const SAFE_MANIFEST_KEY: &str = "safe-manifest";
pub const THUMBNAIL_KEY: &str = "thumbnail";

/// file:checksum prefix for an MD5 digest: multihash code 0xd5 as a two
/// byte varint, then the 16 byte length.
const MD5_MULTIHASH_PREFIX: &str = "d50110";

pub fn manifest_asset(manifest: &Manifest) -> Asset {
    let mut asset = Asset::new(manifest.href.display().to_string());
    asset.media_type = Some(XML_MEDIA_TYPE.to_string());
    asset.roles = vec!["metadata".to_string()];
    asset
}

/// Products ship a quicklook under preview/; absent for the altimeter and
/// the vegetation composites.
pub fn thumbnail_asset(granule: &Path) -> Option<Asset> {
    let path = granule.join("preview").join("quick-look.png");
    if !path.exists() {
        return None;
    }
    let mut asset = Asset::new(path.display().to_string());
    asset.media_type = Some(PNG_MEDIA_TYPE.to_string());
    asset.roles = vec!["thumbnail".to_string()];
    Some(asset)
}

/// Builds one asset per registry key, in registry order. Every key must
/// resolve to a manifest dataObject of the same ID. Resolution enrichment
/// opens the referenced NetCDF file and is skippable.
pub fn data_assets(
    manifest: &Manifest,
    product_type: ProductType,
    skip_resolution: bool,
    read_href_modifier: Option<&ReadHrefModifier>,
) -> Result<Vec<(String, Asset)>> {
    let granule = manifest.href.parent().unwrap_or_else(|| Path::new("")).to_path_buf();
    let data_objects = manifest.data_objects()?;
    let by_id: HashMap<&str, &DataObject> = data_objects
        .iter()
        .map(|data_object| (data_object.id.as_str(), data_object))
        .collect();

    let spec = product_type.spec();
    let mut assets = Vec::with_capacity(spec.assets.len());
    for asset_spec in spec.assets {
        let data_object = by_id.get(asset_spec.key).copied().ok_or_else(|| {
            Error::ManifestValue(format!("dataObject[@ID={}]", asset_spec.key))
        })?;
        let href = granule.join(&data_object.relative_href);

        let mut asset = Asset::new(href.display().to_string());
        asset.media_type = data_object.media_type.clone();
        asset.description = asset_spec
            .description
            .map(|description| description.to_string())
            .or_else(|| data_object.text_info.clone());
        asset.roles = vec!["data".to_string()];

        if !asset_spec.bands.is_empty() {
            let bands: Vec<Value> = asset_spec.bands.iter().map(|band| band.to_value()).collect();
            asset
                .extra_fields
                .insert("eo:bands".to_string(), Value::Array(bands));
        }
        if !skip_resolution {
            let read_href = match read_href_modifier {
                Some(modify) => modify(&href),
                None => href.clone(),
            };
            match spec.resolution {
                ResolutionSource::Grid => {
                    let value = resolution::read_grid_resolution(&read_href)?;
                    asset
                        .extra_fields
                        .insert("resolution".to_string(), Value::from(value));
                }
                ResolutionSource::Spatial => {
                    let value = resolution::read_spatial_resolution(&read_href)?;
                    asset
                        .extra_fields
                        .insert("resolution".to_string(), Value::from(value));
                }
                ResolutionSource::None => {}
            }
        }
        if let Some(filesize) = data_object.filesize {
            asset
                .extra_fields
                .insert("file:size".to_string(), Value::from(filesize));
        }
        if let Some(checksum) = multihash(data_object) {
            asset
                .extra_fields
                .insert("file:checksum".to_string(), Value::from(checksum));
        }
        asset.extra_fields.insert(
            "file:local_path".to_string(),
            Value::from(data_object.relative_href.clone()),
        );

        assets.push((asset_spec.key.to_string(), asset));
    }
    Ok(assets)
}

fn multihash(data_object: &DataObject) -> Option<String> {
    let algorithm = data_object.checksum_algorithm.as_deref()?;
    let checksum = data_object.checksum.as_deref()?;
    if algorithm == "MD5" {
        Some(format!("{MD5_MULTIHASH_PREFIX}{}", checksum.to_lowercase()))
    } else {
        None
    }
}
