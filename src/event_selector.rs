//! Picks the authoritative event and date for a requested date type
//! (publication, creation, capture, copyright) under a tiered priority
//! policy, and resolves a representative publication date for the record.

use crate::model::{DateValue, Event};

/// The event best matching `date_type`, scanning tiers in priority order:
///
/// 1. an event holding a date of that type flagged primary (on the date
///    itself or on one of its structured sub-dates)
/// 2. an event of that type holding a date of that type
/// 3. any event holding a date of that type
/// 4. an event of that type holding an untyped date
///
/// Dates are considered across the event's own list and every parallel
/// event's list, flattened in document order.
pub fn select_event<'a>(events: &'a [Event], date_type: &str) -> Option<&'a Event> {
    events
        .iter()
        .find(|event| {
            dates_of(event).any(|date| {
                date.date_type.as_deref() == Some(date_type) && date_is_primary(date)
            })
        })
        .or_else(|| {
            events.iter().find(|event| {
                event_type_matches(event, date_type)
                    && dates_of(event).any(|date| date.date_type.as_deref() == Some(date_type))
            })
        })
        .or_else(|| {
            events.iter().find(|event| {
                dates_of(event).any(|date| date.date_type.as_deref() == Some(date_type))
            })
        })
        .or_else(|| {
            events.iter().find(|event| {
                event_type_matches(event, date_type)
                    && dates_of(event).any(|date| date.date_type.is_none())
            })
        })
}

/// The value of the event's best date for `date_type`: a primary date of
/// that type, then the first date of that type, then the first untyped date.
pub fn event_date(event: &Event, date_type: &str) -> Option<String> {
    let dates: Vec<&DateValue> = dates_of(event).collect();

    dates
        .iter()
        .find(|date| date.date_type.as_deref() == Some(date_type) && date_is_primary(date))
        .or_else(|| {
            dates
                .iter()
                .find(|date| date.date_type.as_deref() == Some(date_type))
        })
        .or_else(|| dates.iter().find(|date| date.date_type.is_none()))
        .and_then(|date| date_value(date))
}

/// Priority ladder for the record's representative publication date.
const PUB_DATE_LADDER: [&str; 4] = ["publication", "creation", "capture", "copyright"];

pub fn pub_date(events: &[Event]) -> Option<String> {
    PUB_DATE_LADDER.iter().find_map(|date_type| {
        select_event(events, date_type).and_then(|event| event_date(event, date_type))
    })
}

/// A date's display value: the literal value, else the first structured part
/// (start before end, by position), else the first parallel variant.
fn date_value(date: &DateValue) -> Option<String> {
    if let Some(value) = date.value.as_deref() {
        if !value.trim().is_empty() {
            return Some(value.to_string());
        }
    }
    if let Some(first) = date.structured_value.first() {
        return date_value(first);
    }
    date.parallel_value.first().and_then(date_value)
}

fn dates_of<'a>(event: &'a Event) -> impl Iterator<Item = &'a DateValue> {
    event.date.iter().chain(
        event
            .parallel_event
            .iter()
            .flat_map(|parallel| parallel.date.iter()),
    )
}

fn event_type_matches(event: &Event, date_type: &str) -> bool {
    event.event_type.as_deref() == Some(date_type)
        || event
            .parallel_event
            .iter()
            .any(|parallel| parallel.event_type.as_deref() == Some(date_type))
}

fn date_is_primary(date: &DateValue) -> bool {
    date.status.as_deref() == Some("primary")
        || date
            .structured_value
            .iter()
            .any(|part| part.status.as_deref() == Some("primary"))
}
