//! Requirement rules shared by the applicant, respondent and other-people
//! sections, which all collect the same kind of party record.

use crate::case::{Answer, Gender, PartyRecord};

use super::requirements::{any_present, Requirements};

/// Any identity or contact field of the party is present.
pub(crate) fn party_touched(party: &PartyRecord) -> bool {
    any_present(&[
        &party.first_name,
        &party.last_name,
        &party.previous_name,
        &party.gender,
        &party.is_date_of_birth_known,
        &party.date_of_birth,
        &party.is_place_of_birth_known,
        &party.place_of_birth,
        &party.is_current_address_known,
        &party.address,
        &party.is_at_address_less_than_5_years,
        &party.can_you_provide_email_address,
        &party.email,
        &party.can_you_provide_phone_number,
        &party.phone_number,
        &party.do_they_have_legal_representation,
        &party.representative_first_name,
        &party.representative_last_name,
        &party.solicitor_email,
        &party.solicitor_org_name,
    ])
}

fn names_and_gender(r: &mut Requirements, party: &PartyRecord) {
    r.field("firstName", &party.first_name)
        .field("lastName", &party.last_name)
        .field("gender", &party.gender)
        .when(party.gender == Some(Gender::Other), |r| {
            r.field("otherGender", &party.other_gender);
        });
}

/// Fields an applicant must provide before the application can be
/// submitted.
pub(crate) fn applicant_mandatory(r: &mut Requirements, party: &PartyRecord) {
    names_and_gender(r, party);
    r.field("dateOfBirth", &party.date_of_birth)
        .field("address", &party.address)
        .field(
            "isAtAddressLessThan5Years",
            &party.is_at_address_less_than_5_years,
        )
        .when(party.is_at_address_less_than_5_years.answered_yes(), |r| {
            r.field(
                "addressLivedLessThan5YearsDetails",
                &party.address_lived_less_than_5_years_details,
            );
        })
        .field(
            "canYouProvideEmailAddress",
            &party.can_you_provide_email_address,
        )
        .when(party.can_you_provide_email_address.answered_yes(), |r| {
            r.field("email", &party.email);
        })
        .field("phoneNumber", &party.phone_number);
}

/// Every field of the applicant page.
pub(crate) fn applicant_complete(r: &mut Requirements, party: &PartyRecord) {
    applicant_mandatory(r, party);
    r.field("placeOfBirth", &party.place_of_birth)
        .field("representativeFirstName", &party.representative_first_name)
        .field("representativeLastName", &party.representative_last_name)
        .field("solicitorEmail", &party.solicitor_email)
        .field("solicitorOrgName", &party.solicitor_org_name);
}

/// Names plus the "do you know..." discriminators, without the fields
/// they unlock.
pub(crate) fn known_details_answered(r: &mut Requirements, party: &PartyRecord) {
    r.field("firstName", &party.first_name)
        .field("lastName", &party.last_name)
        .field("isDateOfBirthKnown", &party.is_date_of_birth_known)
        .field("isPlaceOfBirthKnown", &party.is_place_of_birth_known)
        .field("isCurrentAddressKnown", &party.is_current_address_known)
        .field(
            "canYouProvideEmailAddress",
            &party.can_you_provide_email_address,
        )
        .field(
            "canYouProvidePhoneNumber",
            &party.can_you_provide_phone_number,
        );
}

/// Identity of a respondent or other person, where each detail is only
/// required if the applicant said they know it.
pub(crate) fn person_complete(r: &mut Requirements, party: &PartyRecord) {
    names_and_gender(r, party);
    r.field("isDateOfBirthKnown", &party.is_date_of_birth_known)
        .when(party.is_date_of_birth_known.answered_yes(), |r| {
            r.field("dateOfBirth", &party.date_of_birth);
        })
        .field("isPlaceOfBirthKnown", &party.is_place_of_birth_known)
        .when(party.is_place_of_birth_known.answered_yes(), |r| {
            r.field("placeOfBirth", &party.place_of_birth);
        })
        .field("isCurrentAddressKnown", &party.is_current_address_known)
        .when(party.is_current_address_known.answered_yes(), |r| {
            r.field("address", &party.address);
        })
        .field(
            "canYouProvideEmailAddress",
            &party.can_you_provide_email_address,
        )
        .when(party.can_you_provide_email_address.answered_yes(), |r| {
            r.field("email", &party.email);
        })
        .field(
            "canYouProvidePhoneNumber",
            &party.can_you_provide_phone_number,
        )
        .when(party.can_you_provide_phone_number.answered_yes(), |r| {
            r.field("phoneNumber", &party.phone_number);
        });
}

/// A respondent's identity plus their legal representation.
pub(crate) fn respondent_complete(r: &mut Requirements, party: &PartyRecord) {
    person_complete(r, party);
    r.field(
        "doTheyHaveLegalRepresentation",
        &party.do_they_have_legal_representation,
    )
    .when(party.do_they_have_legal_representation.answered_yes(), |r| {
        r.field("representativeFirstName", &party.representative_first_name)
            .field("representativeLastName", &party.representative_last_name)
            .field("solicitorEmail", &party.solicitor_email);
    });
}
