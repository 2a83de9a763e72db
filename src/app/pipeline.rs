//! The pull pipeline: walk the date range, fetch, sort, concatenate.
//!
//! Strictly sequential, one day at a time:
//! fetch day -> sort batch by interval start -> append -> throttle pause
//!
//! Global ordering of the result needs no final sort: each day's batch is
//! sorted before it is appended, and days are processed in strictly
//! increasing order, so batches land already ordered relative to each other.

use chrono::{Local, NaiveDate};

use crate::data::{DaySource, EARLIEST_DATE};
use crate::domain::{IntensityRecord, PullConfig};
use crate::error::AppError;

/// Pull every day from [`EARLIEST_DATE`] through today, inclusive.
///
/// "Today" is evaluated once up front; a run that spans a midnight rollover
/// keeps its original upper bound.
pub fn pull_all_days<S: DaySource>(
    source: &S,
    config: &PullConfig,
) -> Result<Vec<IntensityRecord>, AppError> {
    let today = Local::now().date_naive();
    pull_range(source, config, EARLIEST_DATE, today)
}

/// Pull an explicit inclusive date range.
pub fn pull_range<S: DaySource>(
    source: &S,
    config: &PullConfig,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<Vec<IntensityRecord>, AppError> {
    let mut records = Vec::new();

    let mut date = start;
    while date <= end {
        log::info!("Pulling data for {date}");

        let day = source.fetch_day(date)?;
        records.extend(sort_day(day.data)?);

        // Fixed pause so a multi-year pull does not hammer the API.
        if date < end && !config.throttle.is_zero() {
            std::thread::sleep(config.throttle);
        }

        let Some(next) = date.succ_opt() else { break };
        date = next;
    }

    Ok(records)
}

/// Sort one day's batch ascending by interval start.
///
/// The API does not promise `data` is time-ordered, so order is fixed here,
/// before the batch joins the global sequence. An unparseable `from` aborts
/// the run.
fn sort_day(data: Vec<IntensityRecord>) -> Result<Vec<IntensityRecord>, AppError> {
    let mut keyed = data
        .into_iter()
        .map(|record| record.start().map(|start| (start, record)))
        .collect::<Result<Vec<_>, _>>()?;
    keyed.sort_by_key(|(start, _)| *start);
    Ok(keyed.into_iter().map(|(_, record)| record).collect())
}
