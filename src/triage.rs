use crate::models::Prediction;

pub const DEFAULT_SPO2: f64 = 100.0;

const CRITICAL_BELOW: f64 = 90.0;
const ELEVATED_BELOW: f64 = 94.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskBand {
    Critical,
    Elevated,
    Stable,
}

impl RiskBand {
    pub fn for_spo2(spo2: Option<f64>) -> Self {
        let value = spo2.unwrap_or(DEFAULT_SPO2);
        if value < CRITICAL_BELOW {
            RiskBand::Critical
        } else if value < ELEVATED_BELOW {
            RiskBand::Elevated
        } else {
            RiskBand::Stable
        }
    }

    pub fn prediction(self) -> Prediction {
        let (risk, ward, stay) = match self {
            RiskBand::Critical => ("CRITICAL", "ICU", "10+ Days"),
            RiskBand::Elevated => ("ELEVATED", "General Med", "3-5 Days"),
            RiskBand::Stable => ("STABLE", "Observation", "0-1 Day"),
        };
        Prediction {
            risk: risk.to_string(),
            ward: ward.to_string(),
            stay: stay.to_string(),
        }
    }
}

pub fn assess(spo2: Option<f64>) -> Prediction {
    RiskBand::for_spo2(spo2).prediction()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn low_saturation_is_critical() {
        assert_eq!(RiskBand::for_spo2(Some(85.0)), RiskBand::Critical);
        assert_eq!(RiskBand::for_spo2(Some(89.9)), RiskBand::Critical);
        assert_eq!(RiskBand::for_spo2(Some(0.0)), RiskBand::Critical);

        let prediction = assess(Some(85.0));
        assert_eq!(prediction.risk, "CRITICAL");
        assert_eq!(prediction.ward, "ICU");
        assert_eq!(prediction.stay, "10+ Days");
    }

    #[test]
    fn mid_band_is_elevated() {
        assert_eq!(RiskBand::for_spo2(Some(92.0)), RiskBand::Elevated);
        assert_eq!(RiskBand::for_spo2(Some(93.9)), RiskBand::Elevated);

        let prediction = assess(Some(92.0));
        assert_eq!(prediction.risk, "ELEVATED");
        assert_eq!(prediction.ward, "General Med");
        assert_eq!(prediction.stay, "3-5 Days");
    }

    #[test]
    fn band_boundaries_round_up() {
        assert_eq!(RiskBand::for_spo2(Some(90.0)), RiskBand::Elevated);
        assert_eq!(RiskBand::for_spo2(Some(94.0)), RiskBand::Stable);
    }

    #[test]
    fn high_saturation_is_stable() {
        assert_eq!(RiskBand::for_spo2(Some(96.0)), RiskBand::Stable);

        let prediction = assess(Some(96.0));
        assert_eq!(prediction.risk, "STABLE");
        assert_eq!(prediction.ward, "Observation");
        assert_eq!(prediction.stay, "0-1 Day");
    }

    #[test]
    fn missing_reading_defaults_to_stable() {
        assert_eq!(RiskBand::for_spo2(None), RiskBand::Stable);

        let prediction = assess(None);
        assert_eq!(prediction.risk, "STABLE");
        assert_eq!(prediction.ward, "Observation");
        assert_eq!(prediction.stay, "0-1 Day");
    }
}
