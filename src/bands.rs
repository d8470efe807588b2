use crate::error::{Error, Result};
use serde_json::{Map, Value};

/// A spectral or radar band descriptor. Optical bands carry a wavelength
/// pair, SRAL bands a frequency pair; `to_value` serializes whichever is
/// present.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Band {
    pub name: &'static str,
    pub description: &'static str,
    pub center_wavelength: Option<f64>,
    pub band_width: Option<f64>,
    pub central_frequency: Option<f64>,
    pub band_width_in_hz: Option<f64>,
}

impl Band {
    const fn spectral(
        name: &'static str,
        description: &'static str,
        center_wavelength: f64,
        band_width: f64,
    ) -> Self {
        Band {
            name,
            description,
            center_wavelength: Some(center_wavelength),
            band_width: Some(band_width),
            central_frequency: None,
            band_width_in_hz: None,
        }
    }

    const fn radar(
        name: &'static str,
        description: &'static str,
        central_frequency: f64,
        band_width_in_hz: f64,
    ) -> Self {
        Band {
            name,
            description,
            center_wavelength: None,
            band_width: None,
            central_frequency: Some(central_frequency),
            band_width_in_hz: Some(band_width_in_hz),
        }
    }

    pub fn to_value(self: &Self) -> Value {
        let mut band = Map::new();
        band.insert("name".to_string(), Value::from(self.name));
        band.insert("description".to_string(), Value::from(self.description));
        if let Some(center_wavelength) = self.center_wavelength {
            band.insert("center_wavelength".to_string(), num(center_wavelength));
        }
        if let Some(band_width) = self.band_width {
            band.insert("band_width".to_string(), num(band_width));
        }
        if let Some(central_frequency) = self.central_frequency {
            band.insert("central_frequency".to_string(), num(central_frequency));
        }
        if let Some(band_width_in_hz) = self.band_width_in_hz {
            band.insert("band_width_in_Hz".to_string(), num(band_width_in_hz));
        }
        Value::Object(band)
    }
}

/// Whole-number wavelengths serialize as JSON integers, matching the source
/// tables.
fn num(value: f64) -> Value {
    if value.fract() == 0.0 && value.abs() < 9e18 {
        Value::from(value as i64)
    } else {
        Value::from(value)
    }
}

const OA01: Band = Band::spectral(
    "Oa01",
    "Band 1 - Aerosol correction, improved water constituent retrieval",
    400.0,
    15.0,
);
const OA02: Band = Band::spectral(
    "Oa02",
    "Band 2 - Yellow substance and detrital pigments (turbidity)",
    412.5,
    10.0,
);
const OA03: Band = Band::spectral(
    "Oa03",
    "Band 3 - Chlorophyll absorption maximum, biogeochemistry, vegetation",
    442.5,
    10.0,
);
const OA04: Band = Band::spectral("Oa04", "Band 4 - Chlorophyll", 490.0, 10.0);
const OA05: Band = Band::spectral(
    "Oa05",
    "Band 5 - Chlorophyll, sediment, turbidity, red tide",
    510.0,
    10.0,
);
const OA06: Band = Band::spectral("Oa06", "Band 6 - Chlorophyll reference (minimum)", 560.0, 10.0);
const OA07: Band = Band::spectral("Oa07", "Band 7 - Sediment loading", 620.0, 10.0);
const OA08: Band = Band::spectral(
    "Oa08",
    "Band 8 - 2nd Chlorophyll absorption maximum, sediment, yellow substance / vegetation",
    665.0,
    10.0,
);
const OA09: Band = Band::spectral(
    "Oa09",
    "Band 9 - Improved fluorescence retrieval",
    673.75,
    7.5,
);
const OA10: Band = Band::spectral(
    "Oa10",
    "Band 10 - Chlorophyll fluorescence peak, red edge",
    681.25,
    7.5,
);
const OA11: Band = Band::spectral(
    "Oa11",
    "Band 11 - Chlorophyll fluorescence baseline, red edge transition",
    708.75,
    10.0,
);
const OA12: Band = Band::spectral(
    "Oa12",
    "Band 12 - O2 absorption / clouds, vegetation",
    753.75,
    7.5,
);
const OA13: Band = Band::spectral(
    "Oa13",
    "Band 13 - O2 absorption / aerosol correction",
    761.25,
    2.5,
);
const OA14: Band = Band::spectral("Oa14", "Band 14 - Atmospheric correction", 764.375, 3.75);
const OA15: Band = Band::spectral(
    "Oa15",
    "Band 15 - O2 absorption used for cloud top pressure, fluorescence over land",
    767.5,
    2.5,
);
const OA16: Band = Band::spectral(
    "Oa16",
    "Band 16 - Atmospheric / aerosol correction",
    778.75,
    15.0,
);
const OA17: Band = Band::spectral(
    "Oa17",
    "Band 17 - Atmospheric / aerosol correction, clouds, pixel co-registration",
    865.0,
    20.0,
);
const OA18: Band = Band::spectral(
    "Oa18",
    "Band 18 - Water vapour absorption reference. Common reference band with SLSTR. Vegetation monitoring",
    885.0,
    10.0,
);
const OA19: Band = Band::spectral(
    "Oa19",
    "Band 19 - Water vapour absorption, vegetation monitoring (maximum REFLECTANCE)",
    900.0,
    10.0,
);
const OA20: Band = Band::spectral(
    "Oa20",
    "Band 20 - Water vapour absorption, atmospheric / aerosol correction",
    940.0,
    20.0,
);
const OA21: Band = Band::spectral(
    "Oa21",
    "Band 21 - Water vapour absorption, atmospheric / aerosol correction",
    1020.0,
    40.0,
);

pub const OLCI_BANDS: [Band; 21] = [
    OA01, OA02, OA03, OA04, OA05, OA06, OA07, OA08, OA09, OA10, OA11, OA12, OA13, OA14, OA15,
    OA16, OA17, OA18, OA19, OA20, OA21,
];

const S1: Band = Band::spectral(
    "S1",
    "Band 1 - Cloud screening, vegetation monitoring, aerosol",
    554.27,
    19.26,
);
const S2: Band = Band::spectral(
    "S2",
    "Band 2 - NDVI, vegetation monitoring, aerosol",
    659.47,
    19.25,
);
const S3: Band = Band::spectral(
    "S3",
    "Band 3 - NDVI, cloud flagging, pixel co-registration",
    868.0,
    20.6,
);
const S4: Band = Band::spectral("S4", "Band 4 - Cirrus detection over land", 1374.8, 20.8);
const S5: Band = Band::spectral(
    "S5",
    "Band 5 - Cloud clearing, ice, snow, vegetation monitoring",
    1613.4,
    60.68,
);
const S6: Band = Band::spectral(
    "S6",
    "Band 6 - Vegetation state and cloud clearing",
    2255.7,
    50.15,
);
const S7: Band = Band::spectral("S7", "Band 7 - SST, LST, Active fire", 3742.0, 398.0);
const S8: Band = Band::spectral("S8", "Band 8 - SST, LST, Active fire", 10854.0, 776.0);
const S9: Band = Band::spectral("S9", "Band 9 - SST, LST", 12022.5, 905.0);
const F1: Band = Band::spectral("F1", "Band 10 - Active fire", 3742.0, 398.0);
const F2: Band = Band::spectral("F2", "Band 11 - Active fire", 10854.0, 776.0);

pub const SLSTR_BANDS: [Band; 11] = [S1, S2, S3, S4, S5, S6, S7, S8, S9, F1, F2];

const C_BAND: Band = Band::radar(
    "C",
    "Band C - Ionospheric correction",
    5409999872.0,
    290000000.0,
);
const KU_BAND: Band = Band::radar(
    "Ku",
    "Band Ku - Range measurements",
    13575000064.0,
    320000000.0,
);

pub const SRAL_BANDS: [Band; 2] = [C_BAND, KU_BAND];

const SYN01: Band = Band::spectral("SYN01", "OLCI channel Oa01", 400.0, 15.0);
const SYN02: Band = Band::spectral("SYN02", "OLCI channel Oa02", 412.5, 10.0);
const SYN03: Band = Band::spectral("SYN03", "OLCI channel Oa03", 442.5, 10.0);
const SYN04: Band = Band::spectral("SYN04", "OLCI channel Oa04", 490.0, 10.0);
const SYN05: Band = Band::spectral("SYN05", "OLCI channel Oa05", 510.0, 10.0);
const SYN06: Band = Band::spectral("SYN06", "OLCI channel Oa06", 560.0, 10.0);
const SYN07: Band = Band::spectral("SYN07", "OLCI channel Oa07", 620.0, 10.0);
const SYN08: Band = Band::spectral("SYN08", "OLCI channel Oa08", 665.0, 10.0);
const SYN09: Band = Band::spectral("SYN09", "OLCI channel Oa09", 673.75, 7.5);
const SYN10: Band = Band::spectral("SYN10", "OLCI channel Oa10", 681.25, 7.5);
const SYN11: Band = Band::spectral("SYN11", "OLCI channel Oa11", 708.75, 10.0);
const SYN12: Band = Band::spectral("SYN12", "OLCI channel Oa12", 753.75, 7.5);
const SYN13: Band = Band::spectral("SYN13", "OLCI channel Oa16", 778.5, 15.0);
const SYN14: Band = Band::spectral("SYN14", "OLCI channel Oa17", 865.0, 20.0);
const SYN15: Band = Band::spectral("SYN15", "OLCI channel Oa18", 885.0, 10.0);
const SYN16: Band = Band::spectral("SYN16", "OLCI channel Oa21", 1020.0, 40.0);
const SYN17: Band = Band::spectral("SYN17", "SLSTR nadir channel S1", 555.0, 20.0);
const SYN18: Band = Band::spectral("SYN18", "SLSTR nadir channel S2", 659.0, 20.0);
const SYN19: Band = Band::spectral("SYN19", "SLSTR nadir channel S3", 865.0, 20.0);
const SYN20: Band = Band::spectral("SYN20", "SLSTR nadir channel S5", 1610.0, 60.0);
const SYN21: Band = Band::spectral("SYN21", "SLSTR nadir channel S6", 2250.0, 50.0);
const SYN22: Band = Band::spectral("SYN22", "SLSTR oblique channel S1", 555.0, 20.0);
const SYN23: Band = Band::spectral("SYN23", "SLSTR oblique channel S2", 659.0, 20.0);
const SYN24: Band = Band::spectral("SYN24", "SLSTR oblique channel S3", 865.0, 20.0);
const SYN25: Band = Band::spectral("SYN25", "SLSTR oblique channel S5", 1610.0, 60.0);
const SYN26: Band = Band::spectral("SYN26", "SLSTR oblique channel S6", 2250.0, 50.0);
const SYN_440: Band = Band::spectral("SYN_440", "OLCI channel Oa03", 442.5, 10.0);
const SYN_550: Band = Band::spectral(
    "SYN_550",
    "SLSTR nadir and oblique channel S1",
    550.0,
    20.0,
);
const SYN_670: Band = Band::spectral(
    "SYN_670",
    "SLSTR nadir and oblique channel S2",
    659.0,
    20.0,
);
const SYN_865: Band = Band::spectral(
    "SYN_865",
    "OLCI channel Oa17, SLSTR nadir and oblique channel S2",
    865.0,
    20.0,
);
const SYN_1600: Band = Band::spectral(
    "SYN_1600",
    "SLSTR nadir and oblique channel S5",
    1610.0,
    60.0,
);
const SYN_2250: Band = Band::spectral(
    "SYN_2250",
    "SLSTR nadir and oblique channel S6",
    2250.0,
    50.0,
);
const B0: Band = Band::spectral("B0", "OLCI channels Oa02, Oa03", 450.0, 20.0);
const B2: Band = Band::spectral("B2", "OLCI channels Oa06, Oa07, Oa08, Oa09, Oa10", 645.0, 35.0);
const B3: Band = Band::spectral("B3", "OLCI channels Oa16, Oa17, Oa18, Oa21", 835.0, 55.0);
const MIR: Band = Band::spectral(
    "MIR",
    "SLSTR nadir and oblique channels S5, S6",
    1665.0,
    85.0,
);

pub const SYNERGY_BANDS: [Band; 36] = [
    SYN01, SYN02, SYN03, SYN04, SYN05, SYN06, SYN07, SYN08, SYN09, SYN10, SYN11, SYN12, SYN13,
    SYN14, SYN15, SYN16, SYN17, SYN18, SYN19, SYN20, SYN21, SYN22, SYN23, SYN24, SYN25, SYN26,
    SYN_440, SYN_550, SYN_670, SYN_865, SYN_1600, SYN_2250, B0, B2, B3, MIR,
];

/// One data asset the product carries: its manifest dataObject ID, an
/// optional fixed description (otherwise the manifest's textInfo is used)
/// and the bands measured in that file.
#[derive(Debug, Clone, Copy)]
pub struct AssetSpec {
    pub key: &'static str,
    pub description: Option<&'static str>,
    pub bands: &'static [Band],
}

impl AssetSpec {
    const fn banded(key: &'static str, bands: &'static [Band]) -> Self {
        AssetSpec {
            key,
            description: None,
            bands,
        }
    }

    const fn described(
        key: &'static str,
        description: &'static str,
        bands: &'static [Band],
    ) -> Self {
        AssetSpec {
            key,
            description: Some(description),
            bands,
        }
    }
}

/// Where an asset's spatial resolution comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionSource {
    /// NetCDF global attribute `resolution`, e.g. "[ 300 300 ]".
    Grid,
    /// NetCDF global attribute `spatial_resolution`, kept verbatim.
    Spatial,
    /// Along-track profiles without a gridded resolution.
    None,
}

#[derive(Debug, Clone, Copy)]
pub struct ProductSpec {
    pub assets: &'static [AssetSpec],
    pub resolution: ResolutionSource,
}

const OLCI_L1_ASSETS: [AssetSpec; 21] = [
    AssetSpec::banded("Oa01_radianceData", &[OA01]),
    AssetSpec::banded("Oa02_radianceData", &[OA02]),
    AssetSpec::banded("Oa03_radianceData", &[OA03]),
    AssetSpec::banded("Oa04_radianceData", &[OA04]),
    AssetSpec::banded("Oa05_radianceData", &[OA05]),
    AssetSpec::banded("Oa06_radianceData", &[OA06]),
    AssetSpec::banded("Oa07_radianceData", &[OA07]),
    AssetSpec::banded("Oa08_radianceData", &[OA08]),
    AssetSpec::banded("Oa09_radianceData", &[OA09]),
    AssetSpec::banded("Oa10_radianceData", &[OA10]),
    AssetSpec::banded("Oa11_radianceData", &[OA11]),
    AssetSpec::banded("Oa12_radianceData", &[OA12]),
    AssetSpec::banded("Oa13_radianceData", &[OA13]),
    AssetSpec::banded("Oa14_radianceData", &[OA14]),
    AssetSpec::banded("Oa15_radianceData", &[OA15]),
    AssetSpec::banded("Oa16_radianceData", &[OA16]),
    AssetSpec::banded("Oa17_radianceData", &[OA17]),
    AssetSpec::banded("Oa18_radianceData", &[OA18]),
    AssetSpec::banded("Oa19_radianceData", &[OA19]),
    AssetSpec::banded("Oa20_radianceData", &[OA20]),
    AssetSpec::banded("Oa21_radianceData", &[OA21]),
];

const OLCI_L2_LAND_ASSETS: [AssetSpec; 3] = [
    AssetSpec::banded("ogviData", &[OA03, OA10, OA17]),
    AssetSpec::banded("otciData", &[OA10, OA11, OA12]),
    AssetSpec::banded("iwvData", &[OA18, OA19]),
];

/// Bands feeding the OLCI neural-net water products.
const OLCI_NN_BANDS: [Band; 16] = [
    OA01, OA02, OA03, OA04, OA05, OA06, OA07, OA08, OA09, OA10, OA11, OA12, OA16, OA17, OA18,
    OA21,
];

const OLCI_L2_WATER_ASSETS: [AssetSpec; 24] = [
    AssetSpec::banded("Oa01_reflectanceData", &[OA01]),
    AssetSpec::banded("Oa02_reflectanceData", &[OA02]),
    AssetSpec::banded("Oa03_reflectanceData", &[OA03]),
    AssetSpec::banded("Oa04_reflectanceData", &[OA04]),
    AssetSpec::banded("Oa05_reflectanceData", &[OA05]),
    AssetSpec::banded("Oa06_reflectanceData", &[OA06]),
    AssetSpec::banded("Oa07_reflectanceData", &[OA07]),
    AssetSpec::banded("Oa08_reflectanceData", &[OA08]),
    AssetSpec::banded("Oa09_reflectanceData", &[OA09]),
    AssetSpec::banded("Oa10_reflectanceData", &[OA10]),
    AssetSpec::banded("Oa11_reflectanceData", &[OA11]),
    AssetSpec::banded("Oa12_reflectanceData", &[OA12]),
    AssetSpec::banded("Oa16_reflectanceData", &[OA16]),
    AssetSpec::banded("Oa17_reflectanceData", &[OA17]),
    AssetSpec::banded("Oa18_reflectanceData", &[OA18]),
    AssetSpec::banded("Oa21_reflectanceData", &[OA21]),
    AssetSpec::banded("chlNnData", &OLCI_NN_BANDS),
    AssetSpec::banded("chlOc4meData", &[OA03, OA04, OA05, OA06]),
    AssetSpec::banded("iopNnData", &[OA01, OA12, OA16, OA17, OA21]),
    AssetSpec::banded("iwvData", &[OA18, OA19]),
    AssetSpec::banded("parData", &[]),
    AssetSpec::banded("trspData", &[OA04, OA06]),
    AssetSpec::banded("tsmNnData", &OLCI_NN_BANDS),
    AssetSpec::banded("wAerData", &[OA05, OA06, OA17]),
];

const SLSTR_L1_ASSETS: [AssetSpec; 11] = [
    AssetSpec::banded("SLSTR_S1_RAD_AN_Data", &[S1]),
    AssetSpec::banded("SLSTR_S2_RAD_AN_Data", &[S2]),
    AssetSpec::banded("SLSTR_S3_RAD_AN_Data", &[S3]),
    AssetSpec::banded("SLSTR_S4_RAD_AN_Data", &[S4]),
    AssetSpec::banded("SLSTR_S5_RAD_AN_Data", &[S5]),
    AssetSpec::banded("SLSTR_S6_RAD_AN_Data", &[S6]),
    AssetSpec::banded("SLSTR_S7_BT_IN_Data", &[S7]),
    AssetSpec::banded("SLSTR_S8_BT_IN_Data", &[S8]),
    AssetSpec::banded("SLSTR_S9_BT_IN_Data", &[S9]),
    AssetSpec::banded("SLSTR_F1_BT_FN_Data", &[F1]),
    AssetSpec::banded("SLSTR_F2_BT_IN_Data", &[F2]),
];

const SLSTR_L2_FRP_ASSETS: [AssetSpec; 1] = [AssetSpec::described(
    "FRP_IN_Data",
    "Fire Radiative Power (FRP) dataset",
    &[S5, S6, S7, F1],
)];

const SLSTR_L2_LST_ASSETS: [AssetSpec; 1] = [AssetSpec::described(
    "LST_IN_Data",
    "Land Surface Temperature (LST) values",
    &[S8, S9],
)];

const SLSTR_L2_WST_ASSETS: [AssetSpec; 1] = [AssetSpec::described(
    "L2P_Data",
    "Data respects the Group for High Resolution Sea Surface Temperature (GHRSST) L2P specification",
    &[S7, S8, S9],
)];

const SRAL_L2_LAN_ASSETS: [AssetSpec; 2] = [
    AssetSpec::banded("standardMeasurementData", &SRAL_BANDS),
    AssetSpec::banded("enhancedMeasurementData", &SRAL_BANDS),
];

const SRAL_L2_WAT_ASSETS: [AssetSpec; 3] = [
    AssetSpec::banded("standardMeasurementData", &SRAL_BANDS),
    AssetSpec::banded("enhancedMeasurementData", &SRAL_BANDS),
    AssetSpec::banded("reducedMeasurementData", &SRAL_BANDS),
];

/// The six global synthesis bands of the aerosol product.
const SYNERGY_AOD_BANDS: [Band; 6] = [SYN_440, SYN_550, SYN_670, SYN_865, SYN_1600, SYN_2250];

const SYNERGY_AOD_ASSETS: [AssetSpec; 1] = [AssetSpec::described(
    "NTC_AOD_Data",
    "Global aerosol parameters",
    &SYNERGY_AOD_BANDS,
)];

const SYNERGY_SYN_ASSETS: [AssetSpec; 26] = [
    AssetSpec::banded("Syn_Oa01_reflectance_Data", &[SYN01]),
    AssetSpec::banded("Syn_Oa02_reflectance_Data", &[SYN02]),
    AssetSpec::banded("Syn_Oa03_reflectance_Data", &[SYN03]),
    AssetSpec::banded("Syn_Oa04_reflectance_Data", &[SYN04]),
    AssetSpec::banded("Syn_Oa05_reflectance_Data", &[SYN05]),
    AssetSpec::banded("Syn_Oa06_reflectance_Data", &[SYN06]),
    AssetSpec::banded("Syn_Oa07_reflectance_Data", &[SYN07]),
    AssetSpec::banded("Syn_Oa08_reflectance_Data", &[SYN08]),
    AssetSpec::banded("Syn_Oa09_reflectance_Data", &[SYN09]),
    AssetSpec::banded("Syn_Oa10_reflectance_Data", &[SYN10]),
    AssetSpec::banded("Syn_Oa11_reflectance_Data", &[SYN11]),
    AssetSpec::banded("Syn_Oa12_reflectance_Data", &[SYN12]),
    AssetSpec::banded("Syn_Oa16_reflectance_Data", &[SYN13]),
    AssetSpec::banded("Syn_Oa17_reflectance_Data", &[SYN14]),
    AssetSpec::banded("Syn_Oa18_reflectance_Data", &[SYN15]),
    AssetSpec::banded("Syn_Oa21_reflectance_Data", &[SYN16]),
    AssetSpec::banded("Syn_S1N_reflectance_Data", &[SYN17]),
    AssetSpec::banded("Syn_S2N_reflectance_Data", &[SYN18]),
    AssetSpec::banded("Syn_S3N_reflectance_Data", &[SYN19]),
    AssetSpec::banded("Syn_S5N_reflectance_Data", &[SYN20]),
    AssetSpec::banded("Syn_S6N_reflectance_Data", &[SYN21]),
    AssetSpec::banded("Syn_S1O_reflectance_Data", &[SYN22]),
    AssetSpec::banded("Syn_S2O_reflectance_Data", &[SYN23]),
    AssetSpec::banded("Syn_S3O_reflectance_Data", &[SYN24]),
    AssetSpec::banded("Syn_S5O_reflectance_Data", &[SYN25]),
    AssetSpec::banded("Syn_S6O_reflectance_Data", &[SYN26]),
];

const SYNERGY_V10_VG1_ASSETS: [AssetSpec; 5] = [
    AssetSpec::banded("b0Data", &[B0]),
    AssetSpec::banded("b2Data", &[B2]),
    AssetSpec::banded("b3Data", &[B3]),
    AssetSpec::banded("mirData", &[MIR]),
    AssetSpec::banded("ndviData", &[B2, B3]),
];

const SYNERGY_VGP_ASSETS: [AssetSpec; 4] = [
    AssetSpec::banded("b0Data", &[B0]),
    AssetSpec::banded("b2Data", &[B2]),
    AssetSpec::banded("b3Data", &[B3]),
    AssetSpec::banded("mirData", &[MIR]),
];

static OLCI_L1_SPEC: ProductSpec = ProductSpec {
    assets: &OLCI_L1_ASSETS,
    resolution: ResolutionSource::Grid,
};
static OLCI_L2_LAND_SPEC: ProductSpec = ProductSpec {
    assets: &OLCI_L2_LAND_ASSETS,
    resolution: ResolutionSource::Grid,
};
static OLCI_L2_WATER_SPEC: ProductSpec = ProductSpec {
    assets: &OLCI_L2_WATER_ASSETS,
    resolution: ResolutionSource::Grid,
};
static SLSTR_L1_SPEC: ProductSpec = ProductSpec {
    assets: &SLSTR_L1_ASSETS,
    resolution: ResolutionSource::Grid,
};
static SLSTR_L2_FRP_SPEC: ProductSpec = ProductSpec {
    assets: &SLSTR_L2_FRP_ASSETS,
    resolution: ResolutionSource::Grid,
};
static SLSTR_L2_LST_SPEC: ProductSpec = ProductSpec {
    assets: &SLSTR_L2_LST_ASSETS,
    resolution: ResolutionSource::Grid,
};
static SLSTR_L2_WST_SPEC: ProductSpec = ProductSpec {
    assets: &SLSTR_L2_WST_ASSETS,
    resolution: ResolutionSource::Spatial,
};
static SRAL_L2_LAN_SPEC: ProductSpec = ProductSpec {
    assets: &SRAL_L2_LAN_ASSETS,
    resolution: ResolutionSource::None,
};
static SRAL_L2_WAT_SPEC: ProductSpec = ProductSpec {
    assets: &SRAL_L2_WAT_ASSETS,
    resolution: ResolutionSource::None,
};
static SYNERGY_AOD_SPEC: ProductSpec = ProductSpec {
    assets: &SYNERGY_AOD_ASSETS,
    resolution: ResolutionSource::Grid,
};
static SYNERGY_SYN_SPEC: ProductSpec = ProductSpec {
    assets: &SYNERGY_SYN_ASSETS,
    resolution: ResolutionSource::Grid,
};
static SYNERGY_V10_VG1_SPEC: ProductSpec = ProductSpec {
    assets: &SYNERGY_V10_VG1_ASSETS,
    resolution: ResolutionSource::Grid,
};
static SYNERGY_VGP_SPEC: ProductSpec = ProductSpec {
    assets: &SYNERGY_VGP_ASSETS,
    resolution: ResolutionSource::Grid,
};

/// The closed set of supported Sentinel-3 product types. Each variant keys
/// one entry of the static band/asset registry; adding support for a new
/// product type means adding a variant and its tables here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProductType {
    OlciL1Efr,
    OlciL1Err,
    OlciL2Lfr,
    OlciL2Lrr,
    OlciL2Wfr,
    SlstrL1Rbt,
    SlstrL2Frp,
    SlstrL2Lst,
    SlstrL2Wst,
    SralL2Lan,
    SralL2Wat,
    SynergyL2Aod,
    SynergyL2Syn,
    SynergyL2V10,
    SynergyL2Vg1,
    SynergyL2Vgp,
}

impl ProductType {
    /// Parses the manifest's raw product type, e.g. "OL_1_EFR___".
    pub fn parse(raw: &str) -> Result<Self> {
        let product_type = match raw.trim_end_matches('_') {
            "OL_1_EFR" => ProductType::OlciL1Efr,
            "OL_1_ERR" => ProductType::OlciL1Err,
            "OL_2_LFR" => ProductType::OlciL2Lfr,
            "OL_2_LRR" => ProductType::OlciL2Lrr,
            "OL_2_WFR" => ProductType::OlciL2Wfr,
            "SL_1_RBT" => ProductType::SlstrL1Rbt,
            "SL_2_FRP" => ProductType::SlstrL2Frp,
            "SL_2_LST" => ProductType::SlstrL2Lst,
            "SL_2_WST" => ProductType::SlstrL2Wst,
            "SR_2_LAN" => ProductType::SralL2Lan,
            "SR_2_WAT" => ProductType::SralL2Wat,
            "SY_2_AOD" => ProductType::SynergyL2Aod,
            "SY_2_SYN" => ProductType::SynergyL2Syn,
            "SY_2_V10" => ProductType::SynergyL2V10,
            "SY_2_VG1" => ProductType::SynergyL2Vg1,
            "SY_2_VGP" => ProductType::SynergyL2Vgp,
            _ => return Err(Error::UnsupportedProductType(raw.to_string())),
        };
        Ok(product_type)
    }

    pub fn as_str(self: &Self) -> &'static str {
        match self {
            ProductType::OlciL1Efr => "OL_1_EFR",
            ProductType::OlciL1Err => "OL_1_ERR",
            ProductType::OlciL2Lfr => "OL_2_LFR",
            ProductType::OlciL2Lrr => "OL_2_LRR",
            ProductType::OlciL2Wfr => "OL_2_WFR",
            ProductType::SlstrL1Rbt => "SL_1_RBT",
            ProductType::SlstrL2Frp => "SL_2_FRP",
            ProductType::SlstrL2Lst => "SL_2_LST",
            ProductType::SlstrL2Wst => "SL_2_WST",
            ProductType::SralL2Lan => "SR_2_LAN",
            ProductType::SralL2Wat => "SR_2_WAT",
            ProductType::SynergyL2Aod => "SY_2_AOD",
            ProductType::SynergyL2Syn => "SY_2_SYN",
            ProductType::SynergyL2V10 => "SY_2_V10",
            ProductType::SynergyL2Vg1 => "SY_2_VG1",
            ProductType::SynergyL2Vgp => "SY_2_VGP",
        }
    }

    pub fn instrument(self: &Self) -> &'static str {
        match self {
            ProductType::OlciL1Efr
            | ProductType::OlciL1Err
            | ProductType::OlciL2Lfr
            | ProductType::OlciL2Lrr
            | ProductType::OlciL2Wfr => "OLCI",
            ProductType::SlstrL1Rbt
            | ProductType::SlstrL2Frp
            | ProductType::SlstrL2Lst
            | ProductType::SlstrL2Wst => "SLSTR",
            ProductType::SralL2Lan | ProductType::SralL2Wat => "SRAL",
            ProductType::SynergyL2Aod
            | ProductType::SynergyL2Syn
            | ProductType::SynergyL2V10
            | ProductType::SynergyL2Vg1
            | ProductType::SynergyL2Vgp => "SYNERGY",
        }
    }

    pub fn band_table(self: &Self) -> &'static [Band] {
        match self.instrument() {
            "OLCI" => &OLCI_BANDS,
            "SLSTR" => &SLSTR_BANDS,
            "SRAL" => &SRAL_BANDS,
            _ => &SYNERGY_BANDS,
        }
    }

    /// OLCI L1 and the altimeter do not report a cloudy-pixel percentage.
    pub fn has_cloud_cover(self: &Self) -> bool {
        !matches!(
            self,
            ProductType::OlciL1Efr
                | ProductType::OlciL1Err
                | ProductType::SralL2Lan
                | ProductType::SralL2Wat
        )
    }

    /// Altimetry profiles and the non-AOD SYNERGY composites are not fixed
    /// raster grids, so `proj:shape` does not apply to them.
    pub fn has_raster_shape(self: &Self) -> bool {
        !matches!(
            self,
            ProductType::SralL2Lan
                | ProductType::SralL2Wat
                | ProductType::SynergyL2Syn
                | ProductType::SynergyL2V10
                | ProductType::SynergyL2Vg1
                | ProductType::SynergyL2Vgp
        )
    }

    pub fn spec(self: &Self) -> &'static ProductSpec {
        match self {
            ProductType::OlciL1Efr | ProductType::OlciL1Err => &OLCI_L1_SPEC,
            ProductType::OlciL2Lfr | ProductType::OlciL2Lrr => &OLCI_L2_LAND_SPEC,
            ProductType::OlciL2Wfr => &OLCI_L2_WATER_SPEC,
            ProductType::SlstrL1Rbt => &SLSTR_L1_SPEC,
            ProductType::SlstrL2Frp => &SLSTR_L2_FRP_SPEC,
            ProductType::SlstrL2Lst => &SLSTR_L2_LST_SPEC,
            ProductType::SlstrL2Wst => &SLSTR_L2_WST_SPEC,
            ProductType::SralL2Lan => &SRAL_L2_LAN_SPEC,
            ProductType::SralL2Wat => &SRAL_L2_WAT_SPEC,
            ProductType::SynergyL2Aod => &SYNERGY_AOD_SPEC,
            ProductType::SynergyL2Syn => &SYNERGY_SYN_SPEC,
            ProductType::SynergyL2V10 | ProductType::SynergyL2Vg1 => &SYNERGY_V10_VG1_SPEC,
            ProductType::SynergyL2Vgp => &SYNERGY_VGP_SPEC,
        }
    }

    pub fn all() -> [ProductType; 16] {
        [
            ProductType::OlciL1Efr,
            ProductType::OlciL1Err,
            ProductType::OlciL2Lfr,
            ProductType::OlciL2Lrr,
            ProductType::OlciL2Wfr,
            ProductType::SlstrL1Rbt,
            ProductType::SlstrL2Frp,
            ProductType::SlstrL2Lst,
            ProductType::SlstrL2Wst,
            ProductType::SralL2Lan,
            ProductType::SralL2Wat,
            ProductType::SynergyL2Aod,
            ProductType::SynergyL2Syn,
            ProductType::SynergyL2V10,
            ProductType::SynergyL2Vg1,
            ProductType::SynergyL2Vgp,
        ]
    }
}
