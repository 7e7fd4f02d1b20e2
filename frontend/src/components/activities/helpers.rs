//! Pure rendering helpers for the activities view.
//!
//! The activity cards are produced as one HTML string and mounted with
//! `Html::from_html_unchecked` in `view.rs`. Because the string bypasses Yew's
//! own text escaping, every piece of roster data that ends up in it goes
//! through `escape_html` first, both in text and in attribute position.
//! The only value inserted raw is `max_participants`, which is numeric.
//!
//! Nothing here touches the DOM, so everything is unit tested natively.

use common::model::activity::Activity;
use common::model::roster::Roster;
use std::fmt::Write;

/// Label of the per-participant remove control when idle.
pub const REMOVE_LABEL: &str = "\u{d7}";

/// Label of the remove control while its request is in flight.
pub const BUSY_LABEL: &str = "\u{2026}";

/// Escapes special HTML characters in a string.
///
/// `&`, `<`, `>`, `"`, and `'` become their entity equivalents, so the result is
/// safe both as element text and inside a double-quoted attribute value.
pub fn escape_html(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Builds the markup of every activity card, in roster order.
///
/// Rendering is a pure function of the roster: the same roster always yields
/// the same string, and the mounted nodes are replaced wholesale when it changes.
pub fn render_roster_markup(roster: &Roster) -> String {
    let mut out = String::new();
    for (name, activity) in roster.iter() {
        push_activity_card(&mut out, name, activity);
    }
    out
}

fn push_activity_card(out: &mut String, name: &str, activity: &Activity) {
    let name = escape_html(name);
    let _ = write!(
        out,
        concat!(
            r#"<div class="activity-card" data-activity-name="{name}">"#,
            "<h4>{name}</h4>",
            "<p>{description}</p>",
            "<p><strong>Schedule:</strong> {schedule}</p>",
            "<p><strong>Max participants:</strong> {max}</p>",
            r#"<div class="participants">"#,
            r#"<h5>Participants <span class="participant-count">({count})</span></h5>"#,
            r#"<ul class="participants-list">"#,
        ),
        name = name,
        description = escape_html(&activity.description),
        schedule = escape_html(&activity.schedule),
        max = activity.max_participants,
        count = activity.participant_count(),
    );

    if activity.participants.is_empty() {
        out.push_str(r#"<li class="no-participants">No participants yet</li>"#);
    } else {
        for participant in &activity.participants {
            let email = escape_html(participant);
            let _ = write!(
                out,
                concat!(
                    r#"<li class="participant-item" data-email="{email}">{email}"#,
                    r#"<button type="button" class="remove-btn" title="Unregister" data-email="{email}">{label}</button>"#,
                    "</li>",
                ),
                email = email,
                label = REMOVE_LABEL,
            );
        }
    }

    out.push_str("</ul></div></div>");
}

/// Text of the select option for an activity: `"{name} ({current}/{max})"`.
///
/// Option text is set through Yew, which escapes it, so the name is used raw.
pub fn option_label(name: &str, activity: &Activity) -> String {
    format!(
        "{} ({}/{})",
        name,
        activity.participant_count(),
        activity.max_participants
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster(json: &str) -> Roster {
        serde_json::from_str(json).unwrap()
    }

    const CHESS: &str = r#"{"Chess Club": {"description": "d", "schedule": "Mon", "max_participants": 10, "participants": ["a@x.com"]}}"#;

    #[test]
    fn escapes_all_five_characters() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
        );
    }

    #[test]
    fn ampersand_is_escaped_first() {
        assert_eq!(escape_html("&lt;"), "&amp;lt;");
    }

    #[test]
    fn single_activity_example() {
        let roster = roster(CHESS);
        let markup = render_roster_markup(&roster);

        assert_eq!(markup.matches(r#"class="activity-card""#).count(), 1);
        assert!(markup.contains("<h4>Chess Club</h4>"));
        assert!(markup.contains(r#"data-activity-name="Chess Club""#));
        assert_eq!(markup.matches(r#"class="participant-item""#).count(), 1);
        assert!(markup.contains(r#"<li class="participant-item" data-email="a@x.com">a@x.com<button"#));
        assert!(markup.contains(r#"<span class="participant-count">(1)</span>"#));
        assert!(markup.contains("<p><strong>Max participants:</strong> 10</p>"));

        let chess = roster.get("Chess Club").unwrap();
        assert_eq!(option_label("Chess Club", chess), "Chess Club (1/10)");
    }

    #[test]
    fn one_card_per_activity_in_roster_order() {
        let roster = roster(
            r#"{
                "Zumba": {"description": "z", "schedule": "Sun", "max_participants": 5, "participants": []},
                "Art": {"description": "a", "schedule": "Tue", "max_participants": 8, "participants": ["b@x.com", "c@x.com"]}
            }"#,
        );
        let markup = render_roster_markup(&roster);

        assert_eq!(markup.matches(r#"class="activity-card""#).count(), 2);
        let zumba = markup.find("<h4>Zumba</h4>").unwrap();
        let art = markup.find("<h4>Art</h4>").unwrap();
        assert!(zumba < art);

        let labels: Vec<String> = roster
            .iter()
            .map(|(name, activity)| option_label(name, activity))
            .collect();
        assert_eq!(labels, vec!["Zumba (0/5)", "Art (2/8)"]);
    }

    #[test]
    fn empty_participants_render_placeholder() {
        let roster = roster(
            r#"{"Zumba": {"description": "z", "schedule": "Sun", "max_participants": 5, "participants": []}}"#,
        );
        let markup = render_roster_markup(&roster);

        assert!(markup.contains(r#"<li class="no-participants">No participants yet</li>"#));
        assert!(markup.contains(r#"<span class="participant-count">(0)</span>"#));
        assert!(!markup.contains("remove-btn"));
    }

    #[test]
    fn script_tags_never_reach_the_markup() {
        let roster = roster(
            r#"{"<script>alert(1)</script>": {
                "description": "<script>d</script>",
                "schedule": "<script>s</script>",
                "max_participants": 3,
                "participants": ["<script>p</script>@x.com", "\"><img src=x onerror=alert(1)>"]
            }}"#,
        );
        let markup = render_roster_markup(&roster);

        assert!(!markup.contains("<script"));
        assert!(!markup.contains("<img"));
        assert!(markup.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(markup.contains(r#"data-email="&quot;&gt;&lt;img src=x onerror=alert(1)&gt;""#));
    }

    #[test]
    fn quotes_in_names_stay_inside_the_attribute() {
        let roster = roster(
            r#"{"Rock 'n' \"Roll\"": {"description": "d", "schedule": "s", "max_participants": 1}}"#,
        );
        let markup = render_roster_markup(&roster);
        assert!(markup.contains(r#"data-activity-name="Rock &#39;n&#39; &quot;Roll&quot;""#));
    }

    #[test]
    fn rendering_is_deterministic() {
        let roster = roster(CHESS);
        assert_eq!(render_roster_markup(&roster), render_roster_markup(&roster));
        assert_eq!(render_roster_markup(&Roster::new()), "");
    }
}
