//! # ISO 3166-1 Country Codes
//!
//! Static table of the officially assigned country codes in their three
//! forms: alpha-2 (`US`), alpha-3 (`USA`) and numeric (`840`). Codes are
//! matched exactly; alphabetic codes are upper case.

use crate::error::CodecError;

/// One row of the ISO 3166-1 table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Country {
    pub alpha2: &'static str,
    pub alpha3: &'static str,
    pub numeric: u16,
}

const fn c(alpha2: &'static str, alpha3: &'static str, numeric: u16) -> Country {
    Country {
        alpha2,
        alpha3,
        numeric,
    }
}

/// Every assigned country, in the order of the standard's English short names.
pub const COUNTRIES: &[Country] = &[
    c("AF", "AFG", 4),
    c("AX", "ALA", 248),
    c("AL", "ALB", 8),
    c("DZ", "DZA", 12),
    c("AS", "ASM", 16),
    c("AD", "AND", 20),
    c("AO", "AGO", 24),
    c("AI", "AIA", 660),
    c("AQ", "ATA", 10),
    c("AG", "ATG", 28),
    c("AR", "ARG", 32),
    c("AM", "ARM", 51),
    c("AW", "ABW", 533),
    c("AU", "AUS", 36),
    c("AT", "AUT", 40),
    c("AZ", "AZE", 31),
    c("BS", "BHS", 44),
    c("BH", "BHR", 48),
    c("BD", "BGD", 50),
    c("BB", "BRB", 52),
    c("BY", "BLR", 112),
    c("BE", "BEL", 56),
    c("BZ", "BLZ", 84),
    c("BJ", "BEN", 204),
    c("BM", "BMU", 60),
    c("BT", "BTN", 64),
    c("BO", "BOL", 68),
    c("BQ", "BES", 535),
    c("BA", "BIH", 70),
    c("BW", "BWA", 72),
    c("BV", "BVT", 74),
    c("BR", "BRA", 76),
    c("IO", "IOT", 86),
    c("BN", "BRN", 96),
    c("BG", "BGR", 100),
    c("BF", "BFA", 854),
    c("BI", "BDI", 108),
    c("CV", "CPV", 132),
    c("KH", "KHM", 116),
    c("CM", "CMR", 120),
    c("CA", "CAN", 124),
    c("KY", "CYM", 136),
    c("CF", "CAF", 140),
    c("TD", "TCD", 148),
    c("CL", "CHL", 152),
    c("CN", "CHN", 156),
    c("CX", "CXR", 162),
    c("CC", "CCK", 166),
    c("CO", "COL", 170),
    c("KM", "COM", 174),
    c("CG", "COG", 178),
    c("CD", "COD", 180),
    c("CK", "COK", 184),
    c("CR", "CRI", 188),
    c("CI", "CIV", 384),
    c("HR", "HRV", 191),
    c("CU", "CUB", 192),
    c("CW", "CUW", 531),
    c("CY", "CYP", 196),
    c("CZ", "CZE", 203),
    c("DK", "DNK", 208),
    c("DJ", "DJI", 262),
    c("DM", "DMA", 212),
    c("DO", "DOM", 214),
    c("EC", "ECU", 218),
    c("EG", "EGY", 818),
    c("SV", "SLV", 222),
    c("GQ", "GNQ", 226),
    c("ER", "ERI", 232),
    c("EE", "EST", 233),
    c("SZ", "SWZ", 748),
    c("ET", "ETH", 231),
    c("FK", "FLK", 238),
    c("FO", "FRO", 234),
    c("FJ", "FJI", 242),
    c("FI", "FIN", 246),
    c("FR", "FRA", 250),
    c("GF", "GUF", 254),
    c("PF", "PYF", 258),
    c("TF", "ATF", 260),
    c("GA", "GAB", 266),
    c("GM", "GMB", 270),
    c("GE", "GEO", 268),
    c("DE", "DEU", 276),
    c("GH", "GHA", 288),
    c("GI", "GIB", 292),
    c("GR", "GRC", 300),
    c("GL", "GRL", 304),
    c("GD", "GRD", 308),
    c("GP", "GLP", 312),
    c("GU", "GUM", 316),
    c("GT", "GTM", 320),
    c("GG", "GGY", 831),
    c("GN", "GIN", 324),
    c("GW", "GNB", 624),
    c("GY", "GUY", 328),
    c("HT", "HTI", 332),
    c("HM", "HMD", 334),
    c("VA", "VAT", 336),
    c("HN", "HND", 340),
    c("HK", "HKG", 344),
    c("HU", "HUN", 348),
    c("IS", "ISL", 352),
    c("IN", "IND", 356),
    c("ID", "IDN", 360),
    c("IR", "IRN", 364),
    c("IQ", "IRQ", 368),
    c("IE", "IRL", 372),
    c("IM", "IMN", 833),
    c("IL", "ISR", 376),
    c("IT", "ITA", 380),
    c("JM", "JAM", 388),
    c("JP", "JPN", 392),
    c("JE", "JEY", 832),
    c("JO", "JOR", 400),
    c("KZ", "KAZ", 398),
    c("KE", "KEN", 404),
    c("KI", "KIR", 296),
    c("KP", "PRK", 408),
    c("KR", "KOR", 410),
    c("KW", "KWT", 414),
    c("KG", "KGZ", 417),
    c("LA", "LAO", 418),
    c("LV", "LVA", 428),
    c("LB", "LBN", 422),
    c("LS", "LSO", 426),
    c("LR", "LBR", 430),
    c("LY", "LBY", 434),
    c("LI", "LIE", 438),
    c("LT", "LTU", 440),
    c("LU", "LUX", 442),
    c("MO", "MAC", 446),
    c("MG", "MDG", 450),
    c("MW", "MWI", 454),
    c("MY", "MYS", 458),
    c("MV", "MDV", 462),
    c("ML", "MLI", 466),
    c("MT", "MLT", 470),
    c("MH", "MHL", 584),
    c("MQ", "MTQ", 474),
    c("MR", "MRT", 478),
    c("MU", "MUS", 480),
    c("YT", "MYT", 175),
    c("MX", "MEX", 484),
    c("FM", "FSM", 583),
    c("MD", "MDA", 498),
    c("MC", "MCO", 492),
    c("MN", "MNG", 496),
    c("ME", "MNE", 499),
    c("MS", "MSR", 500),
    c("MA", "MAR", 504),
    c("MZ", "MOZ", 508),
    c("MM", "MMR", 104),
    c("NA", "NAM", 516),
    c("NR", "NRU", 520),
    c("NP", "NPL", 524),
    c("NL", "NLD", 528),
    c("NC", "NCL", 540),
    c("NZ", "NZL", 554),
    c("NI", "NIC", 558),
    c("NE", "NER", 562),
    c("NG", "NGA", 566),
    c("NU", "NIU", 570),
    c("NF", "NFK", 574),
    c("MK", "MKD", 807),
    c("MP", "MNP", 580),
    c("NO", "NOR", 578),
    c("OM", "OMN", 512),
    c("PK", "PAK", 586),
    c("PW", "PLW", 585),
    c("PS", "PSE", 275),
    c("PA", "PAN", 591),
    c("PG", "PNG", 598),
    c("PY", "PRY", 600),
    c("PE", "PER", 604),
    c("PH", "PHL", 608),
    c("PN", "PCN", 612),
    c("PL", "POL", 616),
    c("PT", "PRT", 620),
    c("PR", "PRI", 630),
    c("QA", "QAT", 634),
    c("RE", "REU", 638),
    c("RO", "ROU", 642),
    c("RU", "RUS", 643),
    c("RW", "RWA", 646),
    c("BL", "BLM", 652),
    c("SH", "SHN", 654),
    c("KN", "KNA", 659),
    c("LC", "LCA", 662),
    c("MF", "MAF", 663),
    c("PM", "SPM", 666),
    c("VC", "VCT", 670),
    c("WS", "WSM", 882),
    c("SM", "SMR", 674),
    c("ST", "STP", 678),
    c("SA", "SAU", 682),
    c("SN", "SEN", 686),
    c("RS", "SRB", 688),
    c("SC", "SYC", 690),
    c("SL", "SLE", 694),
    c("SG", "SGP", 702),
    c("SX", "SXM", 534),
    c("SK", "SVK", 703),
    c("SI", "SVN", 705),
    c("SB", "SLB", 90),
    c("SO", "SOM", 706),
    c("ZA", "ZAF", 710),
    c("GS", "SGS", 239),
    c("SS", "SSD", 728),
    c("ES", "ESP", 724),
    c("LK", "LKA", 144),
    c("SD", "SDN", 729),
    c("SR", "SUR", 740),
    c("SJ", "SJM", 744),
    c("SE", "SWE", 752),
    c("CH", "CHE", 756),
    c("SY", "SYR", 760),
    c("TW", "TWN", 158),
    c("TJ", "TJK", 762),
    c("TZ", "TZA", 834),
    c("TH", "THA", 764),
    c("TL", "TLS", 626),
    c("TG", "TGO", 768),
    c("TK", "TKL", 772),
    c("TO", "TON", 776),
    c("TT", "TTO", 780),
    c("TN", "TUN", 788),
    c("TR", "TUR", 792),
    c("TM", "TKM", 795),
    c("TC", "TCA", 796),
    c("TV", "TUV", 798),
    c("UG", "UGA", 800),
    c("UA", "UKR", 804),
    c("AE", "ARE", 784),
    c("GB", "GBR", 826),
    c("US", "USA", 840),
    c("UM", "UMI", 581),
    c("UY", "URY", 858),
    c("UZ", "UZB", 860),
    c("VU", "VUT", 548),
    c("VE", "VEN", 862),
    c("VN", "VNM", 704),
    c("VG", "VGB", 92),
    c("VI", "VIR", 850),
    c("WF", "WLF", 876),
    c("EH", "ESH", 732),
    c("YE", "YEM", 887),
    c("ZM", "ZMB", 894),
    c("ZW", "ZWE", 716),
];

/// Country with the given numeric code.
pub fn by_numeric(numeric: u16) -> Option<&'static Country> {
    COUNTRIES.iter().find(|c| c.numeric == numeric)
}

/// Country with the given alpha-2 code.
pub fn by_alpha2(code: &str) -> Option<&'static Country> {
    COUNTRIES.iter().find(|c| c.alpha2 == code)
}

/// Country with the given alpha-3 code.
pub fn by_alpha3(code: &str) -> Option<&'static Country> {
    COUNTRIES.iter().find(|c| c.alpha3 == code)
}

pub fn is_numeric(numeric: u16) -> bool {
    by_numeric(numeric).is_some()
}

pub fn is_alpha2(code: &str) -> bool {
    by_alpha2(code).is_some()
}

pub fn is_alpha3(code: &str) -> bool {
    by_alpha3(code).is_some()
}

/// Which alphabetic form a code is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alpha {
    Two,
    Three,
}

impl Alpha {
    /// Table name used in lookup errors.
    pub fn table(&self) -> &'static str {
        match self {
            Self::Two => "alpha2",
            Self::Three => "alpha3",
        }
    }

    pub fn lookup(&self, code: &str) -> Option<&'static Country> {
        match self {
            Self::Two => by_alpha2(code),
            Self::Three => by_alpha3(code),
        }
    }

    pub fn code_of(&self, country: &Country) -> &'static str {
        match self {
            Self::Two => country.alpha2,
            Self::Three => country.alpha3,
        }
    }
}

/// Alphabetic code of the country with numeric code `numeric`.
pub fn numeric_to_alpha(numeric: u16, alpha: Alpha) -> Result<&'static str, CodecError> {
    by_numeric(numeric)
        .map(|c| alpha.code_of(c))
        .ok_or_else(|| CodecError::LookupFailure {
            table: "numeric".to_string(),
            code: numeric.to_string(),
        })
}

/// Numeric code of the country with alphabetic code `code`.
pub fn alpha_to_numeric(code: &str, alpha: Alpha) -> Result<u16, CodecError> {
    alpha
        .lookup(code)
        .map(|c| c.numeric)
        .ok_or_else(|| CodecError::LookupFailure {
            table: alpha.table().to_string(),
            code: code.to_string(),
        })
}
