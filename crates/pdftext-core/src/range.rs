use crate::extract::ExtractError;

pub const DEFAULT_MIN_PAGE: u32 = 1;
pub const DEFAULT_MAX_PAGE: u32 = 100;

/// Inclusive, 1-indexed page range `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRange {
    min: u32,
    max: u32,
}

impl Default for PageRange {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN_PAGE,
            max: DEFAULT_MAX_PAGE,
        }
    }
}

impl PageRange {
    /// Validate a pair of bounds. The max bound is checked first.
    pub fn new(min: i64, max: i64) -> Result<Self, ExtractError> {
        let max = u32::try_from(max)
            .ok()
            .filter(|&m| m >= 1)
            .ok_or(ExtractError::InvalidMaxPage)?;
        let min = u32::try_from(min)
            .ok()
            .filter(|&m| m >= 1 && m <= max)
            .ok_or(ExtractError::InvalidMinPage)?;
        Ok(Self { min, max })
    }

    /// Build a range from raw query-string values.
    ///
    /// Absent or empty values take the defaults; anything that is not an
    /// integer makes the corresponding bound invalid.
    pub fn from_query(min: Option<&str>, max: Option<&str>) -> Result<Self, ExtractError> {
        let max = parse_bound(max, DEFAULT_MAX_PAGE).ok_or(ExtractError::InvalidMaxPage)?;
        let min = parse_bound(min, DEFAULT_MIN_PAGE).ok_or(ExtractError::InvalidMinPage)?;
        Self::new(min, max)
    }

    pub fn min(&self) -> u32 {
        self.min
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    pub fn contains(&self, page: u32) -> bool {
        page >= self.min && page <= self.max
    }
}

fn parse_bound(raw: Option<&str>, default: u32) -> Option<i64> {
    match raw.map(str::trim) {
        None | Some("") => Some(i64::from(default)),
        Some(s) => s.parse::<i64>().ok(),
    }
}
