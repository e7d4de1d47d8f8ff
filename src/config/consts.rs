// src/config/consts.rs

// Net config
pub const BASE_URL: &str = "https://www.numbeo.com/cost-of-living/in/";
pub const USER_AGENT: &str = concat!("col_compare/", env!("CARGO_PKG_VERSION"));
pub const REQUEST_TIMEOUT_SECS: u64 = 20;

// Cities used when the user supplies none
pub const DEFAULT_CITIES: &str = "irvine,seattle,los-angeles,austin,new-york,hoboken";

// Source table
pub const COST_TABLE_SELECTOR: &str = "table.data_wide_table";
pub const UNKNOWN_CATEGORY: &str = "Unknown";

// Wide table field names
pub const ITEM_KEY: &str = "item";
pub const CATEGORY_KEY: &str = "category";
pub const MEDIAN_KEY: &str = "median";
pub const RANGE_KEY: &str = "range";
pub const MEDIAN_SUFFIX: &str = "-median";
pub const SHOWN_SUB_FIELDS: &[&str] = &[MEDIAN_KEY];

// Local files
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_FILE: &str = "comparison";

// Chart
pub const CHART_TITLE: &str = "Cost of Living";
pub const CHART_VALUE_AXIS: &str = "USD";
