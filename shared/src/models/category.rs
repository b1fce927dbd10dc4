//! AQI severity bands

use serde::{Deserialize, Serialize};

/// US EPA air quality category
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum AqiCategory {
    /// 0-50
    Good,
    /// 51-100
    Moderate,
    /// 101-150
    UnhealthyForSensitiveGroups,
    /// 151-200
    Unhealthy,
    /// 201-300
    VeryUnhealthy,
    /// Above 300
    Hazardous,
}

impl AqiCategory {
    /// All bands in ascending severity
    pub const ALL: [AqiCategory; 6] = [
        AqiCategory::Good,
        AqiCategory::Moderate,
        AqiCategory::UnhealthyForSensitiveGroups,
        AqiCategory::Unhealthy,
        AqiCategory::VeryUnhealthy,
        AqiCategory::Hazardous,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            AqiCategory::Good => "Good",
            AqiCategory::Moderate => "Moderate",
            AqiCategory::UnhealthyForSensitiveGroups => "Unhealthy for Sensitive Groups",
            AqiCategory::Unhealthy => "Unhealthy",
            AqiCategory::VeryUnhealthy => "Very Unhealthy",
            AqiCategory::Hazardous => "Hazardous",
        }
    }

    /// Display color used for badges and map markers
    pub fn color(&self) -> &'static str {
        match self {
            AqiCategory::Good => "#00e400",
            AqiCategory::Moderate => "#ffff00",
            AqiCategory::UnhealthyForSensitiveGroups => "#ff7e00",
            AqiCategory::Unhealthy => "#ff0000",
            AqiCategory::VeryUnhealthy => "#8f3f97",
            AqiCategory::Hazardous => "#7e0023",
        }
    }

    /// Inclusive upper bound of the band, `None` for the open-ended top band
    pub fn upper_bound(&self) -> Option<f64> {
        match self {
            AqiCategory::Good => Some(50.0),
            AqiCategory::Moderate => Some(100.0),
            AqiCategory::UnhealthyForSensitiveGroups => Some(150.0),
            AqiCategory::Unhealthy => Some(200.0),
            AqiCategory::VeryUnhealthy => Some(300.0),
            AqiCategory::Hazardous => None,
        }
    }
}

impl std::fmt::Display for AqiCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify an AQI value into its band.
///
/// Total over all inputs: negatives are `Good`, anything above 300 is
/// `Hazardous`. Fractional values between bands (e.g. `50.5`) fall into the
/// higher band. `NaN` compares false against every bound and lands in
/// `Hazardous`.
pub fn classify_aqi(aqi: f64) -> AqiCategory {
    AqiCategory::ALL
        .into_iter()
        .find(|category| category.upper_bound().map_or(true, |upper| aqi <= upper))
        .unwrap_or(AqiCategory::Hazardous)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_boundaries() {
        assert_eq!(classify_aqi(0.0), AqiCategory::Good);
        assert_eq!(classify_aqi(50.0), AqiCategory::Good);
        assert_eq!(classify_aqi(51.0), AqiCategory::Moderate);
        assert_eq!(classify_aqi(100.0), AqiCategory::Moderate);
        assert_eq!(classify_aqi(101.0), AqiCategory::UnhealthyForSensitiveGroups);
        assert_eq!(classify_aqi(150.0), AqiCategory::UnhealthyForSensitiveGroups);
        assert_eq!(classify_aqi(151.0), AqiCategory::Unhealthy);
        assert_eq!(classify_aqi(200.0), AqiCategory::Unhealthy);
        assert_eq!(classify_aqi(201.0), AqiCategory::VeryUnhealthy);
        assert_eq!(classify_aqi(300.0), AqiCategory::VeryUnhealthy);
        assert_eq!(classify_aqi(301.0), AqiCategory::Hazardous);
    }

    #[test]
    fn test_out_of_scale_values() {
        assert_eq!(classify_aqi(-15.0), AqiCategory::Good);
        assert_eq!(classify_aqi(999.0), AqiCategory::Hazardous);
        assert_eq!(classify_aqi(f64::INFINITY), AqiCategory::Hazardous);
    }

    #[test]
    fn test_fractional_values_between_bands() {
        assert_eq!(classify_aqi(50.5), AqiCategory::Moderate);
        assert_eq!(classify_aqi(300.1), AqiCategory::Hazardous);
    }

    #[test]
    fn test_display_and_color() {
        assert_eq!(
            AqiCategory::UnhealthyForSensitiveGroups.to_string(),
            "Unhealthy for Sensitive Groups"
        );
        assert_eq!(AqiCategory::Good.color(), "#00e400");
        assert_eq!(AqiCategory::Hazardous.color(), "#7e0023");
    }
}
