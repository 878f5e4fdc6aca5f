use time::{Date, OffsetDateTime, UtcOffset};
use time_tz::{Offset, TimeZone};

use crate::Error;

/// The current UTC offset of `canonical_timezone`, e.g. "Pacific/Auckland".
///
/// Returns `None` if the timezone is not known.
pub fn get_local_offset(canonical_timezone: &str) -> Option<UtcOffset> {
    time_tz::timezones::get_by_name(canonical_timezone)
        .map(|tz| tz.get_offset_utc(&OffsetDateTime::now_utc()).to_utc())
}

/// The current date in `canonical_timezone`, e.g. "Pacific/Auckland".
///
/// # Errors
/// Returns [Error::InvalidTimezoneError] if `canonical_timezone` is not a known timezone.
pub fn get_local_date(canonical_timezone: &str) -> Result<Date, Error> {
    let offset = get_local_offset(canonical_timezone)
        .ok_or_else(|| Error::InvalidTimezoneError(canonical_timezone.to_owned()))?;

    Ok(OffsetDateTime::now_utc().to_offset(offset).date())
}

/// The current date using the server's local UTC offset.
///
/// # Errors
/// Returns [Error::IndeterminateLocalOffset] if the operating system cannot report its offset.
pub fn get_server_local_date() -> Result<Date, Error> {
    let offset =
        UtcOffset::current_local_offset().map_err(|_| Error::IndeterminateLocalOffset)?;

    Ok(OffsetDateTime::now_utc().to_offset(offset).date())
}

/// The current date in `canonical_timezone` if one is configured, otherwise in the
/// server's local time.
///
/// # Errors
/// Returns an error if the timezone is not known or the local offset cannot be determined.
pub fn get_current_date(canonical_timezone: Option<&str>) -> Result<Date, Error> {
    match canonical_timezone {
        Some(timezone) => get_local_date(timezone),
        None => get_server_local_date(),
    }
}

#[cfg(test)]
mod tests {
    use time::{OffsetDateTime, UtcOffset};

    use crate::Error;

    use super::{get_current_date, get_local_date, get_local_offset, get_server_local_date};

    #[test]
    fn utc_has_zero_offset() {
        assert_eq!(get_local_offset("Etc/UTC").map(|offset| offset.is_utc()), Some(true));
    }

    #[test]
    fn utc_date_is_today() {
        let want = OffsetDateTime::now_utc().date();

        let got = get_local_date("Etc/UTC").unwrap();

        // Allow for the test running across midnight.
        assert!(got == want || got == want.next_day().unwrap(), "got {got}, want {want}");
    }

    #[test]
    fn unknown_timezone_is_an_error() {
        assert_eq!(
            get_local_date("Not/AZone"),
            Err(Error::InvalidTimezoneError("Not/AZone".to_owned()))
        );
    }

    #[test]
    fn unconfigured_timezone_uses_server_local_offset() {
        let offset = UtcOffset::current_local_offset().unwrap();
        let want = OffsetDateTime::now_utc().to_offset(offset).date();

        let got = get_current_date(None).unwrap();
        let server_date = get_server_local_date().unwrap();

        assert!(got == want || got == want.next_day().unwrap(), "got {got}, want {want}");
        assert!(server_date == got || server_date == got.next_day().unwrap());
    }

    #[test]
    fn configured_timezone_overrides_server_offset() {
        let want = OffsetDateTime::now_utc()
            .to_offset(get_local_offset("Pacific/Kiritimati").unwrap())
            .date();

        let got = get_current_date(Some("Pacific/Kiritimati")).unwrap();

        assert!(got == want || got == want.next_day().unwrap(), "got {got}, want {want}");
    }

    #[test]
    fn configured_unknown_timezone_is_an_error() {
        assert_eq!(
            get_current_date(Some("Mars/Olympus")),
            Err(Error::InvalidTimezoneError("Mars/Olympus".to_owned()))
        );
    }
}
