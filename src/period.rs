use serde::Serialize;

/// Display-only reporting period. It does not change what is fetched or how
/// it is aggregated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    #[default]
    Weekly,
    Monthly,
}

impl Period {
    pub const ALL: [Period; 2] = [Period::Weekly, Period::Monthly];

    /// Unknown or missing values fall back to weekly.
    pub fn from_query(value: Option<&str>) -> Self {
        match value.map(|v| v.trim().to_ascii_lowercase()).as_deref() {
            Some("monthly") => Period::Monthly,
            _ => Period::Weekly,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Period::Weekly => "weekly",
            Period::Monthly => "monthly",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Period::Weekly => "Weekly",
            Period::Monthly => "Monthly",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_period_defaults_to_weekly() {
        assert_eq!(Period::from_query(None), Period::Weekly);
        assert_eq!(Period::from_query(Some("daily")), Period::Weekly);
        assert_eq!(Period::from_query(Some(" Monthly ")), Period::Monthly);
    }
}
