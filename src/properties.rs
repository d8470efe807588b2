use crate::catalog::Provider;
use crate::product::{ProductMetadata, TIMESTAMP_FORMAT};
use serde_json::{Map, Value};

pub const CONSTELLATION: &str = "Sentinel-3";

pub const LICENSE_HREF: &str =
    "https://sentinel.esa.int/documents/247904/690755/Sentinel_Data_Legal_Notice";

pub fn esa_provider() -> Provider {
    Provider {
        name: "ESA".to_string(),
        roles: vec![
            "producer".to_string(),
            "processor".to_string(),
            "licensor".to_string(),
        ],
        url: Some("https://earth.esa.int/web/guest/home".to_string()),
    }
}

/// Acquisition window, platform identity and the `s3:*` product fields,
/// including the per-family pixel classification percentages.
pub fn fill_metadata(properties: &mut Map<String, Value>, metadata: &ProductMetadata) {
    properties.insert(
        "datetime".to_string(),
        timestamp(metadata.centroid_datetime()),
    );
    properties.insert(
        "start_datetime".to_string(),
        timestamp(metadata.start_datetime),
    );
    properties.insert("end_datetime".to_string(), timestamp(metadata.end_datetime));
    properties.insert("platform".to_string(), Value::from(metadata.platform.clone()));
    properties.insert(
        "instruments".to_string(),
        Value::Array(vec![Value::from(metadata.product_type.instrument())]),
    );
    properties.insert("constellation".to_string(), Value::from(CONSTELLATION));
    if let Some(instrument) = &metadata.instrument {
        properties.insert("s3:instrument".to_string(), Value::from(instrument.clone()));
    }
    if let Some(mode) = &metadata.mode {
        properties.insert("s3:mode".to_string(), Value::from(mode.clone()));
    }
    properties.insert(
        "s3:productType".to_string(),
        Value::from(metadata.product_type_id.clone()),
    );
    for (key, value) in &metadata.quality_percentages {
        properties.insert(key.clone(), Value::from(*value));
    }
}

pub fn fill_sat(properties: &mut Map<String, Value>, metadata: &ProductMetadata) {
    if let Some(designator) = &metadata.international_designator {
        properties.insert(
            "sat:platform_international_designator".to_string(),
            Value::from(designator.clone()),
        );
    }
    properties.insert(
        "sat:orbit_state".to_string(),
        Value::from(metadata.orbit_state.as_str()),
    );
    properties.insert(
        "sat:absolute_orbit".to_string(),
        Value::from(metadata.absolute_orbit),
    );
    properties.insert(
        "sat:relative_orbit".to_string(),
        Value::from(metadata.relative_orbit),
    );
}

pub fn fill_eo(properties: &mut Map<String, Value>, metadata: &ProductMetadata) {
    if let Some(cloud_cover) = metadata.cloud_cover {
        properties.insert("eo:cloud_cover".to_string(), Value::from(cloud_cover));
    }
}

pub fn fill_proj(properties: &mut Map<String, Value>, metadata: &ProductMetadata) {
    properties.insert("proj:epsg".to_string(), Value::from(metadata.epsg));
    if let Some(shape) = metadata.shape {
        properties.insert("proj:shape".to_string(), Value::from(shape.to_vec()));
    }
}

fn timestamp(datetime: chrono::DateTime<chrono::Utc>) -> Value {
    Value::from(datetime.format(TIMESTAMP_FORMAT).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bands::ProductType;
    use crate::product::OrbitState;
    use geojson::Geometry;

    fn efr_metadata() -> ProductMetadata {
        ProductMetadata {
            scene_id: "EFR_SCENE".to_string(),
            product_type: ProductType::OlciL1Efr,
            product_type_id: "OL_1_EFR___".to_string(),
            start_datetime: "2021-08-20T10:31:53.110000Z".parse().unwrap(),
            end_datetime: "2021-08-20T10:34:52.393266Z".parse().unwrap(),
            geometry: Geometry::new(geojson::Value::Polygon(vec![vec![
                vec![-12.7336, 39.5443],
                vec![7.26622, 41.0212],
                vec![5.01427, 52.4486],
                vec![-12.7336, 39.5443],
            ]])),
            bbox: vec![-12.7336, 39.5443, 7.26622, 52.4486],
            epsg: 4326,
            platform: "Sentinel-3A".to_string(),
            instrument: Some("OLCI".to_string()),
            mode: Some("EO".to_string()),
            international_designator: Some("2016-011A".to_string()),
            orbit_state: OrbitState::Descending,
            absolute_orbit: 28685,
            relative_orbit: 222,
            shape: Some([4865, 4090]),
            cloud_cover: None,
            quality_percentages: vec![("s3:salineWaterPixels_percentage".to_string(), 52.0)],
        }
    }

    #[test]
    fn test_fill_metadata() {
        let mut properties = Map::new();
        fill_metadata(&mut properties, &efr_metadata());
        assert_eq!(properties["datetime"], "2021-08-20T10:33:22.751633Z");
        assert_eq!(properties["start_datetime"], "2021-08-20T10:31:53.110000Z");
        assert_eq!(properties["end_datetime"], "2021-08-20T10:34:52.393266Z");
        assert_eq!(properties["platform"], "Sentinel-3A");
        assert_eq!(properties["instruments"], serde_json::json!(["OLCI"]));
        assert_eq!(properties["constellation"], "Sentinel-3");
        assert_eq!(properties["s3:instrument"], "OLCI");
        assert_eq!(properties["s3:mode"], "EO");
        assert_eq!(properties["s3:productType"], "OL_1_EFR___");
        assert_eq!(properties["s3:salineWaterPixels_percentage"], 52.0);
    }

    #[test]
    fn test_fill_sat() {
        let mut properties = Map::new();
        fill_sat(&mut properties, &efr_metadata());
        assert_eq!(properties["sat:platform_international_designator"], "2016-011A");
        assert_eq!(properties["sat:orbit_state"], "descending");
        assert_eq!(properties["sat:absolute_orbit"], 28685);
        assert_eq!(properties["sat:relative_orbit"], 222);
    }

    #[test]
    fn test_fill_eo_only_when_cloud_cover_is_reported() {
        let mut properties = Map::new();
        fill_eo(&mut properties, &efr_metadata());
        assert_eq!(properties.get("eo:cloud_cover"), None);

        let mut cloudy = efr_metadata();
        cloudy.cloud_cover = Some(3.2);
        fill_eo(&mut properties, &cloudy);
        assert_eq!(properties["eo:cloud_cover"], 3.2);
    }

    #[test]
    fn test_fill_proj() {
        let mut properties = Map::new();
        fill_proj(&mut properties, &efr_metadata());
        assert_eq!(properties["proj:epsg"], 4326);
        assert_eq!(properties["proj:shape"], serde_json::json!([4865, 4090]));

        let mut profile = efr_metadata();
        profile.shape = None;
        let mut properties = Map::new();
        fill_proj(&mut properties, &profile);
        assert_eq!(properties.get("proj:shape"), None);
    }
}
