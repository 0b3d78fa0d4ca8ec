use time::Date;

use crate::ValidationError;

/// Enumerates every calendar day from `start` through `end`, inclusive of
/// both endpoints.
pub fn date_range(start: Date, end: Date) -> Result<Vec<Date>, ValidationError> {
    if start > end {
        return Err(ValidationError::InvertedDateRange { start, end });
    }

    let span = (end.to_julian_day() - start.to_julian_day() + 1) as usize;
    let mut dates = Vec::with_capacity(span);
    let mut current = start;
    while current <= end {
        dates.push(current);
        match current.next_day() {
            Some(next) => current = next,
            None => break,
        }
    }
    Ok(dates)
}
