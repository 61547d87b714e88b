//! Welsh language requirements.

use crate::case::{Answer, ApplicationLanguage, CaseRecord};
use crate::checkers::requirements::{any_present, Requirements};
use crate::checkers::{settle, EventChecker, MandatoryCompletion};
use crate::events::Event;
use crate::ledger::{ErrorCode, ErrorLedger};

/// When the Welsh language scheme applies, the applicant picks the
/// language of the application and says whether the other language is
/// also needed.
pub struct WelshLanguageChecker;

impl WelshLanguageChecker {
    pub fn new() -> Self {
        Self
    }

    fn requirements(&self, case: &CaseRecord) -> Requirements {
        let language = case.welsh_language_requirement_application;

        let mut r = Requirements::new();
        r.field("welshLanguageRequirement", &case.welsh_language_requirement)
            .when(case.welsh_language_requirement.answered_yes(), |r| {
                r.field("welshLanguageRequirementApplication", &language)
                    .when(language == Some(ApplicationLanguage::English), |r| {
                        r.field(
                            "welshLanguageRequirementApplicationNeedWelsh",
                            &case.welsh_language_requirement_application_need_welsh,
                        );
                    })
                    .when(language == Some(ApplicationLanguage::Welsh), |r| {
                        r.field(
                            "languageRequirementApplicationNeedEnglish",
                            &case.language_requirement_application_need_english,
                        );
                    });
            });
        r
    }
}

impl Default for WelshLanguageChecker {
    fn default() -> Self {
        Self::new()
    }
}

impl EventChecker for WelshLanguageChecker {
    fn event(&self) -> Event {
        Event::WelshLanguageRequirements
    }

    fn is_started(&self, case: &CaseRecord) -> bool {
        any_present(&[
            &case.welsh_language_requirement,
            &case.welsh_language_requirement_application,
            &case.welsh_language_requirement_application_need_welsh,
            &case.language_requirement_application_need_english,
        ])
    }

    fn is_finished(&self, case: &CaseRecord, ledger: &mut ErrorLedger) -> bool {
        settle(
            self.event(),
            &self.requirements(case),
            ErrorCode::WelshLanguageError,
            ledger,
        )
    }

    fn mandatory_completion(&self, case: &CaseRecord) -> MandatoryCompletion {
        self.requirements(case).is_satisfied().into()
    }
}
