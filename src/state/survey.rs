use serde::{Deserialize, Serialize};

use crate::types::UserType;

/// Multi-select onboarding questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MultiField {
    AdoptionReadiness,
    EngagementIntent,
    TechnologyCategories,
    CareSetting,
    SeekingThroughPlatform,
    InnovatorTechnologyCategories,
    DeploymentSetting,
    ReadinessForEngagement,
}

/// Single-choice onboarding questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SingleField {
    RiskTolerance,
    TechnologyStage,
}

/// Answers collected across the onboarding steps. Lives for one onboarding
/// run and is reset on logout.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurveyState {
    pub user_type: Option<UserType>,
    pub adoption_readiness: Vec<String>,
    pub engagement_intent: Vec<String>,
    pub technology_categories: Vec<String>,
    pub care_setting: Vec<String>,
    pub risk_tolerance: Option<String>,
    pub technology_stage: Option<String>,
    pub seeking_through_platform: Vec<String>,
    pub innovator_technology_categories: Vec<String>,
    pub deployment_setting: Vec<String>,
    pub readiness_for_engagement: Vec<String>,
}

impl SurveyState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_user_type(&mut self, user_type: Option<UserType>) {
        self.user_type = user_type;
    }

    pub fn selections(&self, field: MultiField) -> &[String] {
        match field {
            MultiField::AdoptionReadiness => &self.adoption_readiness,
            MultiField::EngagementIntent => &self.engagement_intent,
            MultiField::TechnologyCategories => &self.technology_categories,
            MultiField::CareSetting => &self.care_setting,
            MultiField::SeekingThroughPlatform => &self.seeking_through_platform,
            MultiField::InnovatorTechnologyCategories => &self.innovator_technology_categories,
            MultiField::DeploymentSetting => &self.deployment_setting,
            MultiField::ReadinessForEngagement => &self.readiness_for_engagement,
        }
    }

    fn selections_mut(&mut self, field: MultiField) -> &mut Vec<String> {
        match field {
            MultiField::AdoptionReadiness => &mut self.adoption_readiness,
            MultiField::EngagementIntent => &mut self.engagement_intent,
            MultiField::TechnologyCategories => &mut self.technology_categories,
            MultiField::CareSetting => &mut self.care_setting,
            MultiField::SeekingThroughPlatform => &mut self.seeking_through_platform,
            MultiField::InnovatorTechnologyCategories => &mut self.innovator_technology_categories,
            MultiField::DeploymentSetting => &mut self.deployment_setting,
            MultiField::ReadinessForEngagement => &mut self.readiness_for_engagement,
        }
    }

    pub fn set_selections(&mut self, field: MultiField, values: Vec<String>) {
        *self.selections_mut(field) = values;
    }

    /// Adds `option` if absent, removes it if present. Returns whether it is
    /// selected afterwards.
    pub fn toggle(&mut self, field: MultiField, option: &str) -> bool {
        let list = self.selections_mut(field);
        if let Some(pos) = list.iter().position(|x| x == option) {
            list.remove(pos);
            false
        } else {
            list.push(option.to_string());
            true
        }
    }

    pub fn is_selected(&self, field: MultiField, option: &str) -> bool {
        self.selections(field).iter().any(|x| x == option)
    }

    /// A multi-select step may continue once something is picked.
    pub fn can_continue(&self, field: MultiField) -> bool {
        !self.selections(field).is_empty()
    }

    pub fn choice(&self, field: SingleField) -> Option<&str> {
        match field {
            SingleField::RiskTolerance => self.risk_tolerance.as_deref(),
            SingleField::TechnologyStage => self.technology_stage.as_deref(),
        }
    }

    pub fn set_choice(&mut self, field: SingleField, value: Option<String>) {
        match field {
            SingleField::RiskTolerance => self.risk_tolerance = value,
            SingleField::TechnologyStage => self.technology_stage = value,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_adds_then_removes_in_order() {
        let mut s = SurveyState::new();
        assert!(!s.can_continue(MultiField::CareSetting));
        assert!(s.toggle(MultiField::CareSetting, "Home"));
        assert!(s.toggle(MultiField::CareSetting, "Assisted living"));
        assert!(s.toggle(MultiField::CareSetting, "Memory care"));
        assert!(!s.toggle(MultiField::CareSetting, "Assisted living"));
        assert_eq!(s.selections(MultiField::CareSetting), ["Home", "Memory care"]);
        assert!(s.can_continue(MultiField::CareSetting));
        assert!(s.selections(MultiField::DeploymentSetting).is_empty());
    }

    #[test]
    fn reset_restores_initial_state() {
        let mut s = SurveyState::new();
        s.set_user_type(Some(UserType::Innovator));
        s.set_choice(SingleField::TechnologyStage, Some("Pilot".to_string()));
        s.toggle(MultiField::SeekingThroughPlatform, "Pilot partners");
        assert_eq!(s.choice(SingleField::TechnologyStage), Some("Pilot"));

        s.reset();
        assert_eq!(s, SurveyState::default());
    }

    #[test]
    fn restored_selections_answer_membership() {
        let mut s = SurveyState::new();
        s.set_selections(
            MultiField::TechnologyCategories,
            vec!["Fall detection".to_string(), "Telehealth".to_string()],
        );
        assert!(s.is_selected(MultiField::TechnologyCategories, "Telehealth"));
        assert!(!s.is_selected(MultiField::TechnologyCategories, "Robotics"));
        assert!(!s.is_selected(MultiField::CareSetting, "Telehealth"));

        assert!(!s.toggle(MultiField::TechnologyCategories, "Fall detection"));
        assert_eq!(s.selections(MultiField::TechnologyCategories), ["Telehealth"]);

        s.set_selections(MultiField::TechnologyCategories, Vec::new());
        assert!(!s.can_continue(MultiField::TechnologyCategories));
    }
}
