use crate::assets;
use crate::catalog::{
    Collection, Extent, Item, Link, SpatialExtent, TemporalExtent, EO_EXTENSION, FILE_EXTENSION,
    PROJECTION_EXTENSION, SAT_EXTENSION, STAC_VERSION,
};
use crate::error::{Error, Result};
use crate::manifest::{Manifest, ReadHrefModifier};
use crate::product::ProductMetadata;
use crate::properties;
use serde_json::Value;
use std::path::Path;
use tracing::debug;

pub const COLLECTION_ID: &str = "sentinel-3";

pub const COLLECTION_DESCRIPTION: &str = "Sentinel-3 is an Earth observation satellite series \
     developed by the European Space Agency as part of the Copernicus Programme. It currently \
     consists of 2 satellites: Sentinel-3A and Sentinel-3B, carrying the OLCI, SLSTR, SRAL and \
     SYNERGY instruments.";

/// Mission start: Sentinel-3A launch.
const COLLECTION_TEMPORAL_START: &str = "2016-02-16T00:00:00Z";

#[derive(Default)]
pub struct CreateItemOptions<'a> {
    /// Leave the NetCDF measurement files unread; assets then carry no
    /// resolution field.
    pub skip_resolution: bool,
    /// Rewrites hrefs before reading, e.g. to point at a local mirror.
    pub read_href_modifier: Option<&'a ReadHrefModifier>,
}

pub fn create_item(granule: &Path) -> Result<Item> {
    create_item_with(granule, &CreateItemOptions::default())
}

/// Converts one .SEN3 archive into a STAC Item.
pub fn create_item_with(granule: &Path, options: &CreateItemOptions) -> Result<Item> {
    let granule = granule.canonicalize().map_err(|source| Error::Io {
        path: granule.to_path_buf(),
        source,
    })?;
    let manifest = Manifest::read_with(&granule, options.read_href_modifier)?;
    let metadata = ProductMetadata::parse(&manifest)?;
    debug!(
        "Parsed {} metadata from {}",
        metadata.product_type.as_str(),
        manifest.href.display()
    );

    let mut item = Item::new(&metadata.scene_id);
    item.stac_extensions = vec![
        SAT_EXTENSION.to_string(),
        EO_EXTENSION.to_string(),
        PROJECTION_EXTENSION.to_string(),
        FILE_EXTENSION.to_string(),
    ];
    item.geometry = Some(metadata.geometry.clone());
    item.bbox = Some(metadata.bbox.clone());

    properties::fill_metadata(&mut item.properties, &metadata);
    properties::fill_sat(&mut item.properties, &metadata);
    properties::fill_eo(&mut item.properties, &metadata);
    properties::fill_proj(&mut item.properties, &metadata);
    item.properties.insert(
        "providers".to_string(),
        serde_json::to_value(vec![properties::esa_provider()])?,
    );

    item.links.push(Link::license(properties::LICENSE_HREF));

    item.assets.insert(
        assets::SAFE_MANIFEST_KEY.to_string(),
        assets::manifest_asset(&manifest),
    );
    if let Some(thumbnail) = assets::thumbnail_asset(&granule) {
        item.assets
            .insert(assets::THUMBNAIL_KEY.to_string(), thumbnail);
    }
    for (key, asset) in assets::data_assets(
        &manifest,
        metadata.product_type,
        options.skip_resolution,
        options.read_href_modifier,
    )? {
        item.assets.insert(key, asset);
    }

    Ok(item)
}

/// The static collection all converted items belong to.
pub fn create_collection() -> Collection {
    let mut summaries = serde_json::Map::new();
    summaries.insert(
        "platform".to_string(),
        Value::from(vec!["Sentinel-3A", "Sentinel-3B"]),
    );
    summaries.insert(
        "constellation".to_string(),
        Value::from(vec![properties::CONSTELLATION]),
    );
    summaries.insert(
        "instruments".to_string(),
        Value::from(vec!["OLCI", "SLSTR", "SRAL", "SYNERGY"]),
    );

    Collection {
        type_field: "Collection".to_string(),
        stac_version: STAC_VERSION.to_string(),
        stac_extensions: vec![],
        id: COLLECTION_ID.to_string(),
        title: Some("Sentinel-3".to_string()),
        description: COLLECTION_DESCRIPTION.to_string(),
        license: "proprietary".to_string(),
        providers: vec![properties::esa_provider()],
        extent: Extent {
            spatial: SpatialExtent {
                bbox: vec![vec![-180.0, -90.0, 180.0, 90.0]],
            },
            temporal: TemporalExtent {
                interval: vec![vec![Some(COLLECTION_TEMPORAL_START.to_string()), None]],
            },
        },
        summaries,
        links: vec![Link::license(properties::LICENSE_HREF)],
    }
}
