use chrono::format::{
  Item,
  StrftimeItems
};
use chrono::{
  DateTime,
  NaiveDate,
  Utc
};
use chrono_tz::Tz;
use taskfeed_gui_shared::TaskStatus;

pub fn parse_timestamp(
  raw: &str
) -> Option<DateTime<Utc>> {
  let raw = raw.trim();
  if let Ok(parsed) =
    DateTime::parse_from_rfc3339(raw)
  {
    return Some(
      parsed.with_timezone(&Utc)
    );
  }

  NaiveDate::parse_from_str(
    raw, "%Y-%m-%d"
  )
  .ok()
  .and_then(|date| {
    date.and_hms_opt(0, 0, 0)
  })
  .map(|naive| naive.and_utc())
}

/// Whether every strftime specifier in
/// `format` is one chrono understands.
pub fn is_valid_date_format(
  format: &str
) -> bool {
  !format.trim().is_empty()
    && StrftimeItems::new(format).all(
      |item| !matches!(item, Item::Error)
    )
}

/// Formats a timestamp in the display
/// timezone, falling back to the raw
/// text when it or the format does not
/// parse.
pub fn format_timestamp(
  raw: &str,
  timezone: Tz,
  format: &str
) -> String {
  if !is_valid_date_format(format) {
    tracing::warn!(
      format,
      "invalid date format"
    );
    return raw.to_string();
  }

  match parse_timestamp(raw) {
    | Some(at) => at
      .with_timezone(&timezone)
      .format(format)
      .to_string(),
    | None => {
      tracing::warn!(
        raw,
        "unparsable timestamp"
      );
      raw.to_string()
    }
  }
}

pub fn is_overdue(
  due_at: &str,
  status: TaskStatus,
  now: DateTime<Utc>
) -> bool {
  status.is_open()
    && parse_timestamp(due_at)
      .is_some_and(|due| due < now)
}

#[cfg(test)]
mod tests {
  use super::*;

  fn at(raw: &str) -> DateTime<Utc> {
    parse_timestamp(raw)
      .expect("valid timestamp")
  }

  #[test]
  fn parses_offsets_and_plain_dates() {
    assert_eq!(
      at("2026-10-20T12:00:00-05:00"),
      at("2026-10-20T17:00:00Z")
    );
    assert_eq!(
      at("2026-10-20"),
      at("2026-10-20T00:00:00Z")
    );
    assert!(
      parse_timestamp("next week")
        .is_none()
    );
  }

  #[test]
  fn formats_in_display_timezone() {
    assert_eq!(
      format_timestamp(
        "2026-10-20T03:00:00Z",
        chrono_tz::America::Mexico_City,
        "%b %-d, %Y"
      ),
      "Oct 19, 2026"
    );
    assert_eq!(
      format_timestamp(
        "soon",
        chrono_tz::UTC,
        "%b %-d, %Y"
      ),
      "soon"
    );
  }

  #[test]
  fn invalid_format_falls_back_to_raw_text(
  ) {
    assert!(!is_valid_date_format("%Q"));
    assert!(!is_valid_date_format(" "));
    assert!(is_valid_date_format(
      "%b %-d, %Y"
    ));
    assert_eq!(
      format_timestamp(
        "2026-10-20T03:00:00Z",
        chrono_tz::UTC,
        "%Q"
      ),
      "2026-10-20T03:00:00Z"
    );
  }

  #[test]
  fn only_open_tasks_are_overdue() {
    let now = at("2026-10-18T12:00:00Z");
    let past = "2026-10-17T12:00:00Z";
    let future = "2026-10-19T12:00:00Z";

    assert!(is_overdue(
      past,
      TaskStatus::InProgress,
      now
    ));
    assert!(!is_overdue(
      future,
      TaskStatus::NotStarted,
      now
    ));
    assert!(!is_overdue(
      past,
      TaskStatus::Completed,
      now
    ));
    assert!(!is_overdue(
      "garbage",
      TaskStatus::NotStarted,
      now
    ));
  }
}
