use crate::models::Prediction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Dashboard,
    NewPatient,
    PredictionResult,
}

impl Section {
    pub const ALL: [Section; 3] = [
        Section::Dashboard,
        Section::NewPatient,
        Section::PredictionResult,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            Section::Dashboard => "dashboard",
            Section::NewPatient => "new-patient",
            Section::PredictionResult => "prediction-result",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Section::ALL.into_iter().find(|section| section.slug() == slug)
    }
}

#[derive(Debug, Clone)]
pub struct PageState {
    pub active: Section,
    pub result: Option<Prediction>,
    pub analyzing: bool,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            active: Section::Dashboard,
            result: None,
            analyzing: false,
        }
    }
}

impl PageState {
    pub fn show_section(&mut self, target: Option<Section>) {
        if let Some(section) = target {
            self.active = section;
        }
    }

    pub fn begin_analysis(&mut self) {
        self.analyzing = true;
    }

    pub fn finish_analysis(&mut self, result: Prediction) {
        self.analyzing = false;
        self.result = Some(result);
        self.active = Section::PredictionResult;
    }

    pub fn is_active(&self, section: Section) -> bool {
        self.active == section
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_prediction() -> Prediction {
        Prediction {
            risk: "STABLE".to_string(),
            ward: "Observation".to_string(),
            stay: "0-1 Day".to_string(),
        }
    }

    #[test]
    fn show_section_activates_exactly_one() {
        let mut page = PageState::default();
        page.show_section(Some(Section::NewPatient));
        page.show_section(Some(Section::NewPatient));

        let active: Vec<Section> = Section::ALL
            .into_iter()
            .filter(|section| page.is_active(*section))
            .collect();
        assert_eq!(active, vec![Section::NewPatient]);
    }

    #[test]
    fn unknown_target_is_a_no_op() {
        let mut page = PageState::default();
        page.show_section(Section::from_slug("icu-roster"));
        assert!(page.is_active(Section::Dashboard));
    }

    #[test]
    fn analysis_lifecycle_toggles_the_trigger() {
        let mut page = PageState::default();
        page.show_section(Some(Section::NewPatient));

        page.begin_analysis();
        assert!(page.analyzing);

        page.finish_analysis(sample_prediction());
        assert!(!page.analyzing);
        assert!(page.is_active(Section::PredictionResult));
        assert_eq!(page.result.as_ref().unwrap().risk, "STABLE");
    }

    #[test]
    fn slugs_round_trip() {
        for section in Section::ALL {
            assert_eq!(Section::from_slug(section.slug()), Some(section));
        }
        assert_eq!(Section::from_slug("pharmacy"), None);
    }
}
