use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PatientSnapshot {
    #[serde(default)]
    pub vitals: VitalSigns,
    #[serde(default)]
    pub labs: LabPanel,
    #[serde(default)]
    pub risks: RiskFactors,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VitalSigns {
    #[serde(default, deserialize_with = "reading")]
    pub age: Option<f64>,
    #[serde(default, deserialize_with = "reading")]
    pub spo2: Option<f64>,
    #[serde(default, deserialize_with = "reading")]
    pub sys_bp: Option<f64>,
    #[serde(default, deserialize_with = "reading")]
    pub dia_bp: Option<f64>,
    #[serde(default, deserialize_with = "reading")]
    pub hr: Option<f64>,
    #[serde(default, deserialize_with = "reading")]
    pub rr: Option<f64>,
    #[serde(default, deserialize_with = "reading")]
    pub temp: Option<f64>,
    #[serde(default, deserialize_with = "reading")]
    pub bmi: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LabPanel {
    #[serde(default, deserialize_with = "reading")]
    pub glucose: Option<f64>,
    #[serde(default, deserialize_with = "reading")]
    pub wbc: Option<f64>,
    #[serde(default, deserialize_with = "reading")]
    pub hb: Option<f64>,
    #[serde(default, deserialize_with = "reading")]
    pub creatinine: Option<f64>,
    #[serde(default, deserialize_with = "reading")]
    pub troponin: Option<f64>,
    #[serde(default, deserialize_with = "reading")]
    pub ddimer: Option<f64>,
    #[serde(default, deserialize_with = "reading")]
    pub crp: Option<f64>,
    #[serde(default, deserialize_with = "reading")]
    pub platelets: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RiskFactors {
    #[serde(default, deserialize_with = "reading")]
    pub gcs: Option<f64>,
    #[serde(default, deserialize_with = "reading")]
    pub pain: Option<f64>,
    #[serde(default, deserialize_with = "reading")]
    pub oxygen: Option<f64>,
    #[serde(default, deserialize_with = "reading")]
    pub diabetes: Option<f64>,
    #[serde(default, deserialize_with = "reading")]
    pub hypertension: Option<f64>,
    #[serde(default, deserialize_with = "reading")]
    pub prev_adm: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prediction {
    pub risk: String,
    pub ward: String,
    pub stay: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StayRecord {
    pub pulse: f64,
    pub length_of_stay: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HospitalStats {
    pub avg_pulse: f64,
    pub avg_los: f64,
    pub total_beds: u32,
    pub occupied_beds: u32,
    pub vacant_beds: u32,
}

fn reading<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(parse_reading(&value))
}

fn parse_reading(value: &serde_json::Value) -> Option<f64> {
    let parsed = match value {
        serde_json::Value::Number(number) => number.as_f64(),
        serde_json::Value::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.filter(|reading| reading.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn readings_accept_form_strings_and_numbers() {
        let snapshot: PatientSnapshot = serde_json::from_value(json!({
            "vitals": { "age": "61", "spo2": 88.5, "temp": " 37.2 " },
            "labs": { "glucose": "140" },
            "risks": { "diabetes": "1" }
        }))
        .unwrap();

        assert_eq!(snapshot.vitals.age, Some(61.0));
        assert_eq!(snapshot.vitals.spo2, Some(88.5));
        assert_eq!(snapshot.vitals.temp, Some(37.2));
        assert_eq!(snapshot.labs.glucose, Some(140.0));
        assert_eq!(snapshot.risks.diabetes, Some(1.0));
    }

    #[test]
    fn malformed_readings_become_none() {
        let snapshot: PatientSnapshot = serde_json::from_value(json!({
            "vitals": { "spo2": "", "hr": "fast", "bmi": null },
            "labs": {},
            "risks": { "pain": "NaN" }
        }))
        .unwrap();

        assert_eq!(snapshot.vitals.spo2, None);
        assert_eq!(snapshot.vitals.hr, None);
        assert_eq!(snapshot.vitals.bmi, None);
        assert_eq!(snapshot.risks.pain, None);
    }

    #[test]
    fn missing_groups_default_to_empty() {
        let snapshot: PatientSnapshot = serde_json::from_value(json!({})).unwrap();
        assert_eq!(snapshot.vitals.spo2, None);
        assert_eq!(snapshot.labs.crp, None);
        assert_eq!(snapshot.risks.gcs, None);
    }

    #[test]
    fn snapshot_serializes_normalized_groups() {
        let snapshot: PatientSnapshot = serde_json::from_value(json!({
            "vitals": { "spo2": "96", "age": "bad" },
            "labs": { "wbc": "11.2" },
            "risks": { "prev_adm": "2" }
        }))
        .unwrap();

        let body = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(body["vitals"]["spo2"], json!(96.0));
        assert_eq!(body["vitals"]["age"], json!(null));
        assert_eq!(body["labs"]["wbc"], json!(11.2));
        assert_eq!(body["risks"]["prev_adm"], json!(2.0));
    }
}
