//! # Submission wizard
//!
//! A small state machine that collects one new record:
//!
//! ```text
//! ChooseBusinessUnit -> ChooseInformationType -> FillDetails -> Confirmed
//!        ^                      |    ^               |             |
//!        +------- back ---------+    +---- back -----+             |
//!                                    ^                             |
//!                                    +------ new submission -------+
//! ```
//!
//! Validation never touches the network: [`Wizard::payload`] either builds the
//! request body or returns a [`ValidationError`] with the entered values left
//! in place.

use api::NewInformation;
use store::{BusinessUnit, InformationType};

use crate::error::ValidationError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WizardStep {
    ChooseBusinessUnit,
    ChooseInformationType,
    FillDetails,
    Confirmed,
}

impl WizardStep {
    /// Step number shown in the progress header (1-based).
    pub fn number(self) -> usize {
        match self {
            WizardStep::ChooseBusinessUnit => 1,
            WizardStep::ChooseInformationType => 2,
            WizardStep::FillDetails => 3,
            WizardStep::Confirmed => 4,
        }
    }
}

/// The record being entered.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PendingRecord {
    pub business_unit: Option<BusinessUnit>,
    pub information_type: Option<InformationType>,
    pub lab: String,
    pub competing_product: String,
    pub comment: String,
}

impl PendingRecord {
    pub fn is_recommendation(&self) -> bool {
        self.information_type
            .is_some_and(InformationType::is_recommendation)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Wizard {
    step: WizardStep,
    pending: PendingRecord,
    /// Business unit and type of the last confirmed submission.
    last_choice: Option<(BusinessUnit, InformationType)>,
}

impl Default for Wizard {
    fn default() -> Self {
        Self::new()
    }
}

impl Wizard {
    pub fn new() -> Self {
        Self {
            step: WizardStep::ChooseBusinessUnit,
            pending: PendingRecord::default(),
            last_choice: None,
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn pending(&self) -> &PendingRecord {
        &self.pending
    }

    /// Abandon everything and return to business-unit selection.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn choose_business_unit(&mut self, bu: BusinessUnit) {
        if self.step != WizardStep::ChooseBusinessUnit {
            return;
        }
        self.pending.business_unit = Some(bu);
        self.step = WizardStep::ChooseInformationType;
    }

    /// Recommendations clear lab and product, which do not apply to them.
    pub fn choose_information_type(&mut self, kind: InformationType) {
        if self.step != WizardStep::ChooseInformationType {
            return;
        }
        self.pending.information_type = Some(kind);
        if kind.is_recommendation() {
            self.pending.lab.clear();
            self.pending.competing_product.clear();
        }
        self.step = WizardStep::FillDetails;
    }

    /// One step back. Choices already made are kept.
    pub fn back(&mut self) {
        self.step = match self.step {
            WizardStep::ChooseInformationType => WizardStep::ChooseBusinessUnit,
            WizardStep::FillDetails => WizardStep::ChooseInformationType,
            other => other,
        };
    }

    /// Set the lab. A different lab clears the chosen product.
    pub fn set_lab(&mut self, lab: impl Into<String>) {
        if self.pending.is_recommendation() {
            return;
        }
        let lab = lab.into();
        if lab != self.pending.lab {
            self.pending.competing_product.clear();
            self.pending.lab = lab;
        }
    }

    pub fn set_competing_product(&mut self, product: impl Into<String>) {
        if self.pending.is_recommendation() {
            return;
        }
        self.pending.competing_product = product.into();
    }

    pub fn set_comment(&mut self, comment: impl Into<String>) {
        self.pending.comment = comment.into();
    }

    /// Validate the pending record and build the request body.
    pub fn payload(&self, info_date: String) -> Result<NewInformation, ValidationError> {
        let p = &self.pending;
        let (Some(bu), Some(kind)) = (p.business_unit, p.information_type) else {
            return Err(ValidationError::MissingSelection);
        };
        let (laboratoire, produit) = if kind.is_recommendation() {
            if p.comment.trim().is_empty() {
                return Err(ValidationError::MissingRecommendation);
            }
            (String::new(), String::new())
        } else {
            if p.lab.trim().is_empty() {
                return Err(ValidationError::MissingLab);
            }
            (p.lab.trim().to_string(), p.competing_product.trim().to_string())
        };
        Ok(NewInformation {
            type_bu: bu.as_str().to_string(),
            type_info: kind.label().to_string(),
            laboratoire,
            produit,
            comment: p.comment.trim().to_string(),
            info_date,
        })
    }

    /// The backend accepted the record.
    pub fn confirm_submitted(&mut self) {
        if let (Some(bu), Some(kind)) = (self.pending.business_unit, self.pending.information_type) {
            self.last_choice = Some((bu, kind));
        }
        self.pending = PendingRecord::default();
        self.step = WizardStep::Confirmed;
    }

    /// From the confirmation screen straight to the details form, with the
    /// previous business unit and type already selected.
    pub fn new_submission(&mut self) {
        if self.step != WizardStep::Confirmed {
            return;
        }
        self.pending = PendingRecord::default();
        match self.last_choice {
            Some((bu, kind)) => {
                self.pending.business_unit = Some(bu);
                self.pending.information_type = Some(kind);
                self.step = WizardStep::FillDetails;
            }
            None => self.step = WizardStep::ChooseBusinessUnit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOW: &str = "2024-05-02T09:15:00.000Z";

    fn at_details(bu: BusinessUnit, kind: InformationType) -> Wizard {
        let mut w = Wizard::new();
        w.choose_business_unit(bu);
        w.choose_information_type(kind);
        assert_eq!(w.step(), WizardStep::FillDetails);
        w
    }

    #[test]
    fn test_product_intel_scenario() {
        let mut w = at_details(BusinessUnit::Cvs, InformationType::ProductIntel);
        w.set_lab("LabX");
        w.set_comment("test");
        let body = w.payload(NOW.into()).unwrap();
        assert_eq!(body.type_bu, "CVS");
        assert_eq!(body.type_info, "Produit concurrent");
        assert_eq!(body.laboratoire, "LabX");
        assert_eq!(body.produit, "");
        assert_eq!(body.comment, "test");
        assert_eq!(body.info_date, NOW);

        w.confirm_submitted();
        assert_eq!(w.step(), WizardStep::Confirmed);
        assert_eq!(w.pending(), &PendingRecord::default());
    }

    #[test]
    fn test_recommendation_requires_comment() {
        let mut w = at_details(BusinessUnit::Cns, InformationType::Recommendation);
        assert_eq!(
            w.payload(NOW.into()),
            Err(ValidationError::MissingRecommendation)
        );
        w.set_comment("   ");
        assert_eq!(
            w.payload(NOW.into()),
            Err(ValidationError::MissingRecommendation)
        );
        w.set_comment("Former les délégués");
        let body = w.payload(NOW.into()).unwrap();
        assert_eq!(body.laboratoire, "");
        assert_eq!(body.produit, "");
    }

    #[test]
    fn test_other_types_require_lab() {
        let mut w = at_details(BusinessUnit::Hosp, InformationType::MedicalActivity);
        w.set_comment("congrès");
        assert_eq!(w.payload(NOW.into()), Err(ValidationError::MissingLab));
        // failed validation keeps the entered values
        assert_eq!(w.pending().comment, "congrès");
        assert_eq!(w.step(), WizardStep::FillDetails);
    }

    #[test]
    fn test_recommendation_clears_and_locks_lab() {
        let mut w = Wizard::new();
        w.choose_business_unit(BusinessUnit::Pur);
        w.choose_information_type(InformationType::ProductIntel);
        w.set_lab("SANOFI");
        w.set_competing_product("Doliprane");
        w.back();
        w.choose_information_type(InformationType::Recommendation);
        assert_eq!(w.pending().lab, "");
        assert_eq!(w.pending().competing_product, "");
        w.set_lab("BAYER");
        assert_eq!(w.pending().lab, "");
    }

    #[test]
    fn test_changing_lab_clears_product() {
        let mut w = at_details(BusinessUnit::Cvs, InformationType::ProductIntel);
        w.set_lab("SANOFI");
        w.set_competing_product("Lovenox");
        w.set_lab("SANOFI");
        assert_eq!(w.pending().competing_product, "Lovenox");
        w.set_lab("SERVIER");
        assert_eq!(w.pending().competing_product, "");
    }

    #[test]
    fn test_back_keeps_choices() {
        let mut w = at_details(BusinessUnit::Commercial, InformationType::CommercialWatch);
        w.back();
        assert_eq!(w.step(), WizardStep::ChooseInformationType);
        w.back();
        assert_eq!(w.step(), WizardStep::ChooseBusinessUnit);
        assert_eq!(w.pending().business_unit, Some(BusinessUnit::Commercial));
        w.back();
        assert_eq!(w.step(), WizardStep::ChooseBusinessUnit);
    }

    #[test]
    fn test_missing_selection() {
        let w = Wizard::new();
        assert_eq!(w.payload(NOW.into()), Err(ValidationError::MissingSelection));
    }

    #[test]
    fn test_new_submission_returns_to_details() {
        let mut w = at_details(BusinessUnit::Cvs, InformationType::EventCampaign);
        w.set_lab("PFIZER");
        w.confirm_submitted();
        w.new_submission();
        assert_eq!(w.step(), WizardStep::FillDetails);
        assert_eq!(w.pending().business_unit, Some(BusinessUnit::Cvs));
        assert_eq!(w.pending().information_type, Some(InformationType::EventCampaign));
        assert_eq!(w.pending().lab, "");
    }

    #[test]
    fn test_choices_ignored_out_of_step() {
        let mut w = Wizard::new();
        w.choose_information_type(InformationType::ProductIntel);
        assert_eq!(w.step(), WizardStep::ChooseBusinessUnit);
        assert_eq!(w.pending().information_type, None);
        w.new_submission();
        assert_eq!(w.step(), WizardStep::ChooseBusinessUnit);
    }
}
