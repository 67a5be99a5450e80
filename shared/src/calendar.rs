//! Calendar Builder - Translates rotation shifts into an iCalendar feed.

use icalendar::{Calendar, Component, Event, EventLike, Property};

use crate::shifts::RotationShift;
use crate::{Error, Result};

/// Build the full-snapshot calendar document for a sequence of shifts.
///
/// Events are emitted in the order the shifts were received. The first
/// malformed record aborts the whole build; there is no partial document.
pub fn build_calendar(shifts: &[RotationShift], organization: &str) -> Result<Calendar> {
    let mut calendar = Calendar::new();
    // PUBLISH marks the feed as the complete set of events, so calendar
    // clients replace any previously fetched version instead of merging.
    calendar.append_property(Property::new("METHOD", "PUBLISH"));

    for shift in shifts {
        calendar.push(build_event(shift, organization)?);
    }

    Ok(calendar.done())
}

fn build_event(shift: &RotationShift, organization: &str) -> Result<Event> {
    let contact_id = shift.contact_ids.first().ok_or_else(|| {
        Error::MalformedRecord(format!(
            "shift starting at {} has no contact ids",
            shift.start_time
        ))
    })?;
    let oncall = display_name(contact_id);

    // TODO: surface shift overrides; shift_type distinguishes regular
    //       shifts from overridden ones.

    let mut event = Event::new();
    // The shift start time is the persistent, unique identifier for this
    // event; the source guarantees unique start instants within a rotation.
    event.uid(&shift.start_time.timestamp().to_string());
    // All-day dates instead of the exact start/end times, so the event
    // displays cleaner on consumer calendars.
    event.starts(shift.start_time.date_naive());
    event.ends(shift.end_time.date_naive());
    event.summary(&format!("On-Call: {}", oncall));
    event.description(&format!("{} is on-call for {}", oncall, organization));

    Ok(event.done())
}

/// Derive the display name from a contact ARN: take the final `/`-segment
/// as the human-readable slug and title-case it.
fn display_name(contact_id: &str) -> String {
    let slug = contact_id.rsplit('/').next().unwrap_or(contact_id);
    title_case(slug)
}

/// Capitalize the first letter of each space-delimited word.
///
/// Hyphens and underscores are not word boundaries: `"bob-smith"` becomes
/// `"Bob-smith"`. That matches the naming the feed has always published;
/// keep it unless product intent changes.
fn title_case(s: &str) -> String {
    s.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
