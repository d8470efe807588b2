//! Placeholder collection and item, handy for wiring up and demonstrating
//! catalog tooling without real products.

use crate::catalog::{
    Asset, Collection, Extent, Item, Provider, SpatialExtent, TemporalExtent, COG_MEDIA_TYPE,
    PROJECTION_EXTENSION, STAC_VERSION,
};
use crate::product::TIMESTAMP_FORMAT;
use chrono::Utc;
use serde_json::Value;

pub const COLLECTION_ID: &str = "my-collection-id";
pub const ITEM_ID: &str = "my-item-id";

pub fn create_collection() -> Collection {
    Collection {
        type_field: "Collection".to_string(),
        stac_version: STAC_VERSION.to_string(),
        stac_extensions: vec![],
        id: COLLECTION_ID.to_string(),
        title: Some("A dummy STAC Collection".to_string()),
        description: "Used for demonstration purposes".to_string(),
        license: "CC-0".to_string(),
        providers: vec![Provider {
            name: "The OS Community".to_string(),
            roles: vec![
                "producer".to_string(),
                "processor".to_string(),
                "host".to_string(),
            ],
            url: Some("https://github.com/stac-utils/stactools".to_string()),
        }],
        extent: Extent {
            spatial: SpatialExtent {
                bbox: vec![vec![-180.0, -90.0, 180.0, 90.0]],
            },
            temporal: TemporalExtent {
                interval: vec![vec![
                    Some(Utc::now().format(TIMESTAMP_FORMAT).to_string()),
                    None,
                ]],
            },
        },
        summaries: serde_json::Map::new(),
        links: vec![],
    }
}

/// A whole-world item pointing at a single COG asset.
pub fn create_item(asset_href: &str) -> Item {
    let mut item = Item::new(ITEM_ID);
    item.stac_extensions = vec![PROJECTION_EXTENSION.to_string()];
    item.geometry = Some(geojson::Geometry::new(geojson::Value::Polygon(vec![vec![
        vec![-180.0, -90.0],
        vec![180.0, -90.0],
        vec![180.0, 90.0],
        vec![-180.0, 90.0],
        vec![-180.0, -90.0],
    ]])));
    item.bbox = Some(vec![-180.0, -90.0, 180.0, 90.0]);

    item.properties
        .insert("title".to_string(), Value::from("A dummy STAC Item"));
    item.properties.insert(
        "description".to_string(),
        Value::from("Used for demonstration purposes"),
    );
    item.properties.insert(
        "datetime".to_string(),
        Value::from(Utc::now().format(TIMESTAMP_FORMAT).to_string()),
    );
    item.properties
        .insert("proj:epsg".to_string(), Value::from(4326));
    item.properties.insert(
        "proj:bbox".to_string(),
        Value::from(vec![-180.0, -90.0, 180.0, 90.0]),
    );
    item.properties
        .insert("proj:shape".to_string(), Value::from(vec![1, 1]));
    item.properties.insert(
        "proj:transform".to_string(),
        Value::from(vec![-180, 360, 0, 90, 0, 180]),
    );

    let mut asset = Asset::new(asset_href);
    asset.media_type = Some(COG_MEDIA_TYPE.to_string());
    asset.roles = vec!["data".to_string()];
    asset.title = Some("A dummy STAC Item COG".to_string());
    item.assets.insert("image".to_string(), asset);

    item
}
