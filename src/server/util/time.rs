use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};

/// Start of `date` in the time zone `tz`, as a UTC instant.
///
/// When midnight does not exist locally (a DST gap at 00:00) the naive midnight is read
/// as UTC. When it is ambiguous the earlier instant wins.
pub fn local_midnight<Tz: TimeZone>(tz: &Tz, date: NaiveDate) -> DateTime<Utc> {
    let naive = date.and_time(NaiveTime::MIN);

    tz.from_local_datetime(&naive)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|| naive.and_utc())
}
