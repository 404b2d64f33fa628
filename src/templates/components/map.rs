use crate::domain::{format_price, group_thousands, Action, PropertyRecord, ViewState};
use crate::query::action_href;
use maud::{html, Markup};

/// Groups records by submarket, keeping first-seen order of both groups and records.
fn by_submarket<'a>(records: &[&'a PropertyRecord]) -> Vec<(&'a str, Vec<&'a PropertyRecord>)> {
    let mut groups: Vec<(&str, Vec<&PropertyRecord>)> = Vec::new();
    for &record in records {
        match groups.iter_mut().find(|(name, _)| *name == record.submarket) {
            Some((_, members)) => members.push(record),
            None => groups.push((record.submarket.as_str(), vec![record])),
        }
    }
    groups
}

/// Pin board for map mode. Clicking a pin highlights it; clicking it again
/// clears the highlight. The highlight is separate from the detail selection.
pub fn map_board(records: &[&PropertyRecord], state: &ViewState) -> Markup {
    let highlighted = state
        .highlighted_pin
        .and_then(|id| records.iter().find(|r| r.id == id).copied());

    html! {
        div class="map-board" {
            @for (submarket, members) in by_submarket(records) {
                div class="map-region" {
                    h4 { (submarket) }
                    ul class="pins" {
                        @for record in members {
                            @let is_active = state.highlighted_pin == Some(record.id);
                            @let action = if is_active { Action::ClearPin } else { Action::HighlightPin(record.id) };
                            @let pin_class = if is_active { "pin pin-active" } else { "pin" };
                            li {
                                a class=(pin_class)
                                    href=(action_href(state, action))
                                    title=(record.name)
                                {
                                    "📍 " (record.name)
                                }
                            }
                        }
                    }
                }
            }

            @if let Some(record) = highlighted {
                aside class="card pin-info" {
                    h3 { (record.name) }
                    p { (record.submarket) ", " (record.city) }
                    p { (group_thousands(record.square_footage)) " sq ft · " (format_price(record.total_price)) }
                    a class="btn" href=(action_href(state, Action::Select(record.id))) { "View Details" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::fixtures::sample_records;
    use crate::domain::{FixtureBounds, ViewMode};

    #[test]
    fn groups_keep_first_seen_order() {
        let records = sample_records();
        let refs: Vec<&PropertyRecord> = vec![&records[0], &records[2], &records[1]];
        let groups = by_submarket(&refs);
        let names: Vec<&str> = groups.iter().map(|(n, _)| *n).collect();
        assert_eq!(names, vec!["Ambattur Industrial Estate", "Kurichi", "Sriperumbudur"]);
    }

    #[test]
    fn highlighted_pin_outside_results_is_not_shown() {
        let records = sample_records();
        let refs: Vec<&PropertyRecord> = vec![&records[0]];
        let state = ViewState::initial(FixtureBounds::default())
            .apply(Action::SetViewMode(ViewMode::Map))
            .apply(Action::HighlightPin(2));

        let html = map_board(&refs, &state).into_string();
        assert!(!html.contains("pin-info"));
    }

    #[test]
    fn active_pin_links_to_clear() {
        let records = sample_records();
        let refs: Vec<&PropertyRecord> = records.iter().collect();
        let state = ViewState::initial(FixtureBounds::default())
            .apply(Action::SetViewMode(ViewMode::Map))
            .apply(Action::HighlightPin(1));

        let html = map_board(&refs, &state).into_string();
        assert!(html.contains("pin-info"));
        assert!(html.contains("href=\"/properties?view=map\""));
        assert!(html.contains("href=\"/properties?view=map&amp;selected=1&amp;pin=1\""));
    }
}
