use chrono::{Datelike, NaiveDate};

/// Age in completed years on `today`. `None` for a birthdate after `today`.
pub fn calc_age(birthdate: NaiveDate, today: NaiveDate) -> Option<u32> {
    if birthdate > today {
        return None;
    }

    let mut years = today.year() - birthdate.year();
    if (today.month(), today.day()) < (birthdate.month(), birthdate.day()) {
        years -= 1;
    }

    u32::try_from(years).ok()
}

/// `calc_age` for an optional birthdate: absent means unknown age.
pub fn age_from_birthdate(birthdate: Option<NaiveDate>, today: NaiveDate) -> Option<u32> {
    birthdate.and_then(|b| calc_age(b, today))
}
