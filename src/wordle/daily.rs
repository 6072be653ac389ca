use chrono::{Datelike, NaiveDate};

use super::{lcg::Lcg48, words::WordsList, Error};

/// Numeric seed for a calendar date: `year * 10000 + month * 100 + day`,
/// so 2024-03-15 seeds as `20240315`.
///
/// The date is whatever the caller says it is. The service feeds in its
/// local date, which means deployments in different timezones can disagree
/// near midnight; that is accepted behavior rather than a bug.
pub fn date_seed(date: NaiveDate) -> i64 {
    i64::from(date.year()) * 10_000 + i64::from(date.month()) * 100 + i64::from(date.day())
}

/// Picks the word of the day.
///
/// Pure and stateless: the same date against the same list resolves to the
/// same word on every call and every instance. See [`Lcg48`] for the pinned
/// generator this leans on.
pub fn daily_word(date: NaiveDate, words: &WordsList) -> Result<&str, Error> {
    if words.is_empty() {
        return Err(Error::EmptyVocabulary);
    }

    let mut lcg = Lcg48::new(date_seed(date));
    let index = lcg.next_index(words.len() as u32) as usize;

    Ok(words.get(index).expect("drawn index is within bounds"))
}
