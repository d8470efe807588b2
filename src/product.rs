use crate::bands::ProductType;
use crate::error::{Error, Result};
use crate::manifest::{self, Manifest};
use chrono::{DateTime, NaiveDateTime, Utc};
use geojson::Geometry;
use roxmltree::Document;

/// Timestamps are emitted with microsecond precision, as the products
/// themselves record them.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6fZ";

const OLCI_L1_QUALITY: [&str; 10] = [
    "salineWaterPixels",
    "coastalPixels",
    "freshInlandWaterPixels",
    "tidalRegionPixels",
    "brightPixels",
    "invalidPixels",
    "cosmeticPixels",
    "duplicatedPixels",
    "saturatedPixels",
    "dubiousSamples",
];

const OLCI_L2_QUALITY: [&str; 10] = [
    "salineWaterPixels",
    "coastalPixels",
    "freshInlandWaterPixels",
    "tidalRegionPixels",
    "landPixels",
    "invalidPixels",
    "cosmeticPixels",
    "duplicatedPixels",
    "saturatedPixels",
    "dubiousSamples",
];

const SLSTR_QUALITY: [&str; 9] = [
    "salineWaterPixels",
    "landPixels",
    "coastalPixels",
    "freshInlandWaterPixels",
    "tidalRegionPixels",
    "cosmeticPixels",
    "duplicatedPixels",
    "saturatedPixels",
    "outOfRangePixels",
];

const SYNERGY_QUALITY: [&str; 5] = [
    "salineWaterPixels",
    "coastalPixels",
    "freshInlandWaterPixels",
    "tidalRegionPixels",
    "landPixels",
];

/// SRAL surface statistics are element text rather than a `percentage`
/// attribute, and their element names already end in "Percentage".
const SRAL_QUALITY: [&str; 6] = [
    "lrmModePercentage",
    "sarModePercentage",
    "landPercentage",
    "closedSeaPercentage",
    "continentalIcePercentage",
    "openOceanPercentage",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrbitState {
    Ascending,
    Descending,
}

impl OrbitState {
    fn parse(value: &str) -> Result<Self> {
        match value {
            "ascending" => Ok(OrbitState::Ascending),
            "descending" => Ok(OrbitState::Descending),
            _ => Err(Error::UnexpectedValue {
                field: "orbitNumber@groundTrackDirection".to_string(),
                value: value.to_string(),
            }),
        }
    }

    pub fn as_str(self: &Self) -> &'static str {
        match self {
            OrbitState::Ascending => "ascending",
            OrbitState::Descending => "descending",
        }
    }
}

/// Everything the item builder needs from one granule's manifest, pulled in
/// a single pass over the DOM.
#[derive(Debug)]
pub struct ProductMetadata {
    pub scene_id: String,
    pub product_type: ProductType,
    pub product_type_id: String,
    pub start_datetime: DateTime<Utc>,
    pub end_datetime: DateTime<Utc>,
    pub geometry: Geometry,
    pub bbox: Vec<f64>,
    pub epsg: i32,
    pub platform: String,
    pub instrument: Option<String>,
    pub mode: Option<String>,
    pub international_designator: Option<String>,
    pub orbit_state: OrbitState,
    pub absolute_orbit: i64,
    pub relative_orbit: i64,
    pub shape: Option<[i64; 2]>,
    pub cloud_cover: Option<f64>,
    pub quality_percentages: Vec<(String, f64)>,
}

impl ProductMetadata {
    pub fn parse(manifest: &Manifest) -> Result<ProductMetadata> {
        let directory = manifest
            .href
            .parent()
            .and_then(|granule| granule.file_name())
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        let scene_id = directory
            .strip_suffix(".SEN3")
            .ok_or_else(|| Error::NamingConvention(directory.clone()))?
            .to_string();

        let document = manifest.document()?;
        let product_type_id = manifest::require_text(&document, "productType")?;
        let product_type = ProductType::parse(&product_type_id)?;

        let start_datetime = parse_timestamp(&manifest::require_text(&document, "startTime")?)?;
        let end_datetime = parse_timestamp(&manifest::require_text(&document, "stopTime")?)?;
        let (geometry, bbox) = parse_footprint(&manifest::require_text(&document, "posList")?)?;

        let srs_name = manifest::require_attr(&document, "footPrint", "srsName")?;
        let epsg = srs_name
            .rsplit('/')
            .next()
            .and_then(|tail| tail.parse().ok())
            .ok_or_else(|| Error::UnexpectedValue {
                field: "footPrint@srsName".to_string(),
                value: srs_name.clone(),
            })?;

        let family_name = manifest::require_text(&document, "familyName")?;
        let number = manifest::require_text(&document, "number")?;
        let orbit_state = OrbitState::parse(&manifest::require_attr(
            &document,
            "orbitNumber",
            "groundTrackDirection",
        )?)?;
        let absolute_orbit = parse_int(
            "orbitNumber",
            &manifest::require_text(&document, "orbitNumber")?,
        )?;

        let shape = if product_type.has_raster_shape() {
            let columns = parse_int("columns", &manifest::require_text(&document, "columns")?)?;
            let rows = parse_int("rows", &manifest::require_text(&document, "rows")?)?;
            Some([columns, rows])
        } else {
            None
        };
        let cloud_cover = if product_type.has_cloud_cover() {
            let value = manifest::require_attr(&document, "cloudyPixels", "percentage")?;
            Some(parse_float("cloudyPixels@percentage", &value)?)
        } else {
            None
        };

        Ok(ProductMetadata {
            scene_id,
            product_type,
            product_type_id,
            start_datetime,
            end_datetime,
            geometry,
            bbox,
            epsg,
            platform: format!("{family_name}{number}"),
            instrument: attribute_of(&document, "familyName", "abbreviation"),
            mode: attribute_of(&document, "mode", "abbreviation"),
            international_designator: manifest::find_text(&document, "nssdcIdentifier"),
            orbit_state,
            absolute_orbit,
            relative_orbit: parse_relative_orbit(&document)?,
            shape,
            cloud_cover,
            quality_percentages: parse_quality_percentages(&document, product_type)?,
        })
    }

    /// Midpoint of the acquisition window, used as the item datetime.
    pub fn centroid_datetime(self: &Self) -> DateTime<Utc> {
        self.start_datetime + (self.end_datetime - self.start_datetime) / 2
    }
}

fn parse_timestamp(value: &str) -> Result<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.fZ")
        .map(|naive| naive.and_utc())
        .map_err(|source| Error::Timestamp {
            value: value.to_string(),
            source,
        })
}

/// The gml posList is a flat lat lon sequence. Positions are swapped into
/// lon,lat order and the ring is closed if the product left it open.
fn parse_footprint(pos_list: &str) -> Result<(Geometry, Vec<f64>)> {
    let mut values = Vec::new();
    for token in pos_list.split_whitespace() {
        values.push(parse_float("posList", token)?);
    }
    if values.len() < 6 || values.len() % 2 != 0 {
        return Err(Error::UnexpectedValue {
            field: "posList".to_string(),
            value: pos_list.to_string(),
        });
    }
    let mut ring: Vec<Vec<f64>> = values.chunks(2).map(|pair| vec![pair[1], pair[0]]).collect();
    if ring.first() != ring.last() {
        let first = ring[0].clone();
        ring.push(first);
    }
    let mut bbox = vec![f64::INFINITY, f64::INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY];
    for position in &ring {
        bbox[0] = bbox[0].min(position[0]);
        bbox[1] = bbox[1].min(position[1]);
        bbox[2] = bbox[2].max(position[0]);
        bbox[3] = bbox[3].max(position[1]);
    }
    let geometry = Geometry::new(geojson::Value::Polygon(vec![ring]));
    Ok((geometry, bbox))
}

/// First element carrying the attribute wins; the platform familyName has
/// no abbreviation, so this lands on the instrument's.
fn attribute_of(document: &Document, tag: &str, attribute: &str) -> Option<String> {
    document
        .descendants()
        .filter(|node| node.has_tag_name(tag))
        .filter_map(|node| node.attribute(attribute))
        .next()
        .map(|value| value.to_string())
}

/// Some products report 0 as the start relative orbit; the stop value is
/// used in that case.
fn parse_relative_orbit(document: &Document) -> Result<i64> {
    let elements = manifest::find_elements(document, "relativeOrbitNumber");
    let start = elements
        .first()
        .and_then(|node| node.text())
        .ok_or_else(|| Error::ManifestValue("relativeOrbitNumber".to_string()))?;
    let mut relative_orbit = parse_int("relativeOrbitNumber", start)?;
    if relative_orbit == 0 {
        if let Some(stop) = elements
            .iter()
            .filter(|node| node.attribute("type") == Some("stop"))
            .filter_map(|node| node.text())
            .next()
        {
            relative_orbit = parse_int("relativeOrbitNumber", stop)?;
        }
    }
    Ok(relative_orbit)
}

fn parse_quality_percentages(
    document: &Document,
    product_type: ProductType,
) -> Result<Vec<(String, f64)>> {
    let mut percentages = Vec::new();
    if matches!(product_type, ProductType::SralL2Lan | ProductType::SralL2Wat) {
        for name in SRAL_QUALITY {
            let value = manifest::require_text(document, name)?;
            percentages.push((format!("s3:{name}"), parse_float(name, &value)?));
        }
        return Ok(percentages);
    }
    for name in quality_elements(product_type) {
        let value = manifest::require_attr(document, name, "percentage")?;
        percentages.push((
            format!("s3:{name}_percentage"),
            parse_float(&format!("{name}@percentage"), &value)?,
        ));
    }
    Ok(percentages)
}

fn quality_elements(product_type: ProductType) -> &'static [&'static str] {
    match product_type {
        ProductType::OlciL1Efr | ProductType::OlciL1Err => &OLCI_L1_QUALITY,
        ProductType::OlciL2Lfr | ProductType::OlciL2Lrr | ProductType::OlciL2Wfr => {
            &OLCI_L2_QUALITY
        }
        ProductType::SlstrL1Rbt
        | ProductType::SlstrL2Frp
        | ProductType::SlstrL2Lst
        | ProductType::SlstrL2Wst => &SLSTR_QUALITY,
        ProductType::SynergyL2Aod | ProductType::SynergyL2Syn => &SYNERGY_QUALITY,
        _ => &[],
    }
}

fn parse_float(field: &str, value: &str) -> Result<f64> {
    value.trim().parse().map_err(|_| Error::UnexpectedValue {
        field: field.to_string(),
        value: value.to_string(),
    })
}

fn parse_int(field: &str, value: &str) -> Result<i64> {
    value.trim().parse().map_err(|_| Error::UnexpectedValue {
        field: field.to_string(),
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    const TEST_OUTPUT_DIR: &str = "/tmp/sen3-stac-product-test";

    fn efr_manifest() -> String {
        r#"<?xml version="1.0" encoding="UTF-8"?>
<xfdu:XFDU xmlns:xfdu="urn:ccsds:schema:xfdu:1"
           xmlns:sentinel-safe="http://www.esa.int/safe/sentinel/1.1"
           xmlns:sentinel3="http://www.esa.int/safe/sentinel/sentinel-3/1.0"
           xmlns:gml="http://www.opengis.net/gml"
           version="esa/safe/sentinel/1.1/sentinel-3/olci/level-1/1.0">
  <metadataSection>
    <metadataObject ID="acquisitionPeriod">
      <metadataWrap><xmlData>
        <sentinel-safe:acquisitionPeriod>
          <sentinel-safe:startTime>2021-08-20T10:31:53.110000Z</sentinel-safe:startTime>
          <sentinel-safe:stopTime>2021-08-20T10:34:52.393266Z</sentinel-safe:stopTime>
        </sentinel-safe:acquisitionPeriod>
      </xmlData></metadataWrap>
    </metadataObject>
    <metadataObject ID="platform">
      <metadataWrap><xmlData>
        <sentinel-safe:platform>
          <sentinel-safe:nssdcIdentifier>2016-011A</sentinel-safe:nssdcIdentifier>
          <sentinel-safe:familyName>Sentinel-3</sentinel-safe:familyName>
          <sentinel-safe:number>A</sentinel-safe:number>
          <sentinel-safe:instrument>
            <sentinel-safe:familyName abbreviation="OLCI">Ocean Land Colour Instrument</sentinel-safe:familyName>
            <sentinel-safe:mode identifier="Earth Observation" abbreviation="EO">Earth Observation</sentinel-safe:mode>
          </sentinel-safe:instrument>
        </sentinel-safe:platform>
      </xmlData></metadataWrap>
    </metadataObject>
    <metadataObject ID="measurementOrbitReference">
      <metadataWrap><xmlData>
        <sentinel-safe:orbitReference>
          <sentinel-safe:orbitNumber groundTrackDirection="descending" type="start">28685</sentinel-safe:orbitNumber>
          <sentinel-safe:relativeOrbitNumber type="start">222</sentinel-safe:relativeOrbitNumber>
        </sentinel-safe:orbitReference>
      </xmlData></metadataWrap>
    </metadataObject>
    <metadataObject ID="measurementFrameSet">
      <metadataWrap><xmlData>
        <sentinel-safe:frameSet>
          <sentinel-safe:footPrint srsName="http://www.opengis.net/def/crs/EPSG/0/4326">
            <gml:posList>39.5443 -12.7336 41.0212 7.26622 52.4486 5.01427 50.1204 -10.0039</gml:posList>
          </sentinel-safe:footPrint>
        </sentinel-safe:frameSet>
      </xmlData></metadataWrap>
    </metadataObject>
    <metadataObject ID="generalProductInformation">
      <metadataWrap><xmlData>
        <sentinel3:generalProductInformation>
          <sentinel3:productType>OL_1_EFR___</sentinel3:productType>
        </sentinel3:generalProductInformation>
      </xmlData></metadataWrap>
    </metadataObject>
    <metadataObject ID="olciProductInformation">
      <metadataWrap><xmlData>
        <sentinel3:olciProductInformation>
          <sentinel3:imageSize grid="1 km">
            <sentinel3:rows>4090</sentinel3:rows>
            <sentinel3:columns>4865</sentinel3:columns>
          </sentinel3:imageSize>
          <sentinel3:classificationSummary grid="1 km">
            <sentinel3:salineWaterPixels percentage="52.0"/>
            <sentinel3:coastalPixels percentage="0.0"/>
            <sentinel3:freshInlandWaterPixels percentage="0.0"/>
            <sentinel3:tidalRegionPixels percentage="2.0"/>
            <sentinel3:brightPixels percentage="45.0"/>
          </sentinel3:classificationSummary>
          <sentinel3:pixelQualitySummary>
            <sentinel3:invalidPixels percentage="4.0"/>
            <sentinel3:cosmeticPixels percentage="0.0"/>
            <sentinel3:duplicatedPixels percentage="23.0"/>
            <sentinel3:saturatedPixels percentage="0.000006"/>
            <sentinel3:dubiousSamples percentage="0.0"/>
          </sentinel3:pixelQualitySummary>
        </sentinel3:olciProductInformation>
      </xmlData></metadataWrap>
    </metadataObject>
  </metadataSection>
  <dataObjectSection>
  </dataObjectSection>
</xfdu:XFDU>
"#
        .to_string()
    }

    fn write_manifest(name: &str, content: &str) -> PathBuf {
        let granule = PathBuf::from(TEST_OUTPUT_DIR).join(name);
        fs::create_dir_all(&granule).unwrap();
        fs::write(granule.join("xfdumanifest.xml"), content).unwrap();
        granule
    }

    fn parse(name: &str, content: &str) -> Result<ProductMetadata> {
        let granule = write_manifest(name, content);
        let manifest = Manifest::read(&granule)?;
        ProductMetadata::parse(&manifest)
    }

    #[test]
    fn test_parse_efr_metadata() {
        let metadata = parse("EFR_METADATA.SEN3", &efr_manifest()).unwrap();
        assert_eq!(metadata.scene_id, "EFR_METADATA");
        assert_eq!(metadata.product_type, ProductType::OlciL1Efr);
        assert_eq!(metadata.product_type_id, "OL_1_EFR___");
        assert_eq!(metadata.platform, "Sentinel-3A");
        assert_eq!(metadata.instrument.as_deref(), Some("OLCI"));
        assert_eq!(metadata.mode.as_deref(), Some("EO"));
        assert_eq!(metadata.international_designator.as_deref(), Some("2016-011A"));
        assert_eq!(metadata.orbit_state, OrbitState::Descending);
        assert_eq!(metadata.absolute_orbit, 28685);
        assert_eq!(metadata.relative_orbit, 222);
        assert_eq!(metadata.epsg, 4326);
        assert_eq!(metadata.shape, Some([4865, 4090]));
        assert_eq!(metadata.cloud_cover, None);
        assert_eq!(metadata.bbox, vec![-12.7336, 39.5443, 7.26622, 52.4486]);
        assert_eq!(
            metadata
                .centroid_datetime()
                .format(TIMESTAMP_FORMAT)
                .to_string(),
            "2021-08-20T10:33:22.751633Z"
        );
    }

    #[test]
    fn test_parse_efr_quality_percentages() {
        let metadata = parse("EFR_QUALITY.SEN3", &efr_manifest()).unwrap();
        assert_eq!(metadata.quality_percentages.len(), 10);
        assert_eq!(
            metadata.quality_percentages[0],
            ("s3:salineWaterPixels_percentage".to_string(), 52.0)
        );
        assert_eq!(
            metadata.quality_percentages[4],
            ("s3:brightPixels_percentage".to_string(), 45.0)
        );
        assert_eq!(
            metadata.quality_percentages[8],
            ("s3:saturatedPixels_percentage".to_string(), 0.000006)
        );
    }

    #[test]
    fn test_footprint_ring_is_closed() {
        let metadata = parse("EFR_FOOTPRINT.SEN3", &efr_manifest()).unwrap();
        let rings = match &metadata.geometry.value {
            geojson::Value::Polygon(rings) => rings,
            _ => panic!("expected a polygon"),
        };
        assert_eq!(rings.len(), 1);
        assert_eq!(rings[0].len(), 5);
        assert_eq!(rings[0][0], vec![-12.7336, 39.5443]);
        assert_eq!(rings[0][0], rings[0][4]);
    }

    #[test]
    fn test_level2_products_report_cloud_cover() {
        let content = efr_manifest()
            .replace("OL_1_EFR___", "OL_2_WFR___")
            .replace("<sentinel3:brightPixels", "<sentinel3:landPixels")
            .replace(
                "<sentinel3:pixelQualitySummary>",
                "<sentinel3:cloudStatistics>\n            \
                 <sentinel3:cloudyPixels percentage=\"3.2\"/>\n          \
                 </sentinel3:cloudStatistics>\n          \
                 <sentinel3:pixelQualitySummary>",
            );
        let metadata = parse("WFR_CLOUDS.SEN3", &content).unwrap();
        assert_eq!(metadata.product_type, ProductType::OlciL2Wfr);
        assert_eq!(metadata.cloud_cover, Some(3.2));
        assert_eq!(
            metadata.quality_percentages[4],
            ("s3:landPixels_percentage".to_string(), 45.0)
        );
    }

    #[test]
    fn test_relative_orbit_zero_falls_back_to_stop() {
        let content = efr_manifest().replace(
            "<sentinel-safe:relativeOrbitNumber type=\"start\">222</sentinel-safe:relativeOrbitNumber>",
            "<sentinel-safe:relativeOrbitNumber type=\"start\">0</sentinel-safe:relativeOrbitNumber>\n          \
             <sentinel-safe:relativeOrbitNumber type=\"stop\">222</sentinel-safe:relativeOrbitNumber>",
        );
        let metadata = parse("EFR_ORBIT.SEN3", &content).unwrap();
        assert_eq!(metadata.relative_orbit, 222);
    }

    #[test]
    fn test_directory_must_end_in_sen3() {
        let error = parse("EFR_WRONG_SUFFIX", &efr_manifest()).unwrap_err();
        assert_eq!(
            error.to_string(),
            "Unexpected product name 'EFR_WRONG_SUFFIX': expected the Sentinel-3 naming convention, ending in .SEN3"
        );
    }

    #[test]
    fn test_unknown_product_type_is_an_error() {
        let content = efr_manifest().replace("OL_1_EFR___", "OL_2_WRR___");
        let error = parse("EFR_UNKNOWN_TYPE.SEN3", &content).unwrap_err();
        assert_eq!(error.to_string(), "Unsupported product type 'OL_2_WRR___'");
    }

    #[test]
    fn test_malformed_srs_name_is_an_error() {
        let content = efr_manifest().replace(
            "http://www.opengis.net/def/crs/EPSG/0/4326",
            "not-a-crs-urn",
        );
        let error = parse("EFR_BAD_SRS.SEN3", &content).unwrap_err();
        assert_eq!(
            error.to_string(),
            "Unexpected value 'not-a-crs-urn' for 'footPrint@srsName' in manifest"
        );
    }

    #[test]
    fn test_missing_timestamp_is_an_error() {
        let content = efr_manifest().replace("startTime>", "ignoredTime>");
        let error = parse("EFR_NO_START.SEN3", &content).unwrap_err();
        assert_eq!(
            error.to_string(),
            "Unable to locate 'startTime' in manifest"
        );
    }
}
