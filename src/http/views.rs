//! Homepage rendering
//!
//! The page is small enough to assemble directly; all interpolated values
//! are HTML-escaped.

use crate::models::{EventRecord, VenueRecord};

/// Render the homepage: the event list, the venue list, and the two add forms.
pub fn index_page(events: &[EventRecord], venues: &[VenueRecord]) -> String {
    let mut page = String::with_capacity(4096);

    page.push_str(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n\
         <meta charset=\"utf-8\">\n\
         <title>Eventboard</title>\n\
         <link rel=\"stylesheet\" href=\"/styles.css\">\n\
         </head>\n<body>\n\
         <h1>Eventboard</h1>\n",
    );

    page.push_str("<section>\n<h2>Events</h2>\n");
    if events.is_empty() {
        page.push_str("<p>No events yet.</p>\n");
    } else {
        page.push_str("<ul class=\"events\">\n");
        for event in events {
            page.push_str(&format!(
                "<li><strong>{}</strong> &mdash; {} at {}<br>{}</li>\n",
                escape(&event.title),
                event.date.format("%Y-%m-%d"),
                escape(&event.location),
                escape(&event.description),
            ));
        }
        page.push_str("</ul>\n");
    }
    page.push_str(
        "<form method=\"post\" action=\"/add-event\">\n\
         <h3>Add an event</h3>\n\
         <label>Title <input name=\"title\" required></label>\n\
         <label>Date <input name=\"date\" type=\"date\" required></label>\n\
         <label>Location <input name=\"location\" required></label>\n\
         <label>Description <input name=\"description\" required></label>\n\
         <button type=\"submit\">Add event</button>\n\
         </form>\n</section>\n",
    );

    page.push_str("<section>\n<h2>Venues</h2>\n");
    if venues.is_empty() {
        page.push_str("<p>No venues yet.</p>\n");
    } else {
        page.push_str("<ul class=\"venues\">\n");
        for venue in venues {
            page.push_str(&format!(
                "<li><strong>{}</strong> &mdash; {} (capacity {}){}</li>\n",
                escape(&venue.name),
                escape(&venue.address),
                venue.capacity,
                match &venue.amenities {
                    Some(amenities) => format!("<br>{}", escape(amenities)),
                    None => String::new(),
                },
            ));
        }
        page.push_str("</ul>\n");
    }
    page.push_str(
        "<form method=\"post\" action=\"/add-venue\">\n\
         <h3>Add a venue</h3>\n\
         <label>Name <input name=\"name\" required></label>\n\
         <label>Address <input name=\"address\" required></label>\n\
         <label>Capacity <input name=\"capacity\" type=\"number\" required></label>\n\
         <label>Amenities <input name=\"amenities\"></label>\n\
         <button type=\"submit\">Add venue</button>\n\
         </form>\n</section>\n",
    );

    page.push_str("</body>\n</html>\n");
    page
}

fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{NewEvent, NewVenue};

    fn event(title: &str) -> EventRecord {
        NewEvent::new(title, "2024-07-01", "Library", "Monthly meetup")
            .unwrap()
            .into()
    }

    fn venue(name: &str) -> VenueRecord {
        NewVenue::new(name, "1 Civic Sq", "250", "WiFi").unwrap().into()
    }

    #[test]
    fn renders_both_lists() {
        let page = index_page(&[event("Book Club")], &[venue("Town Hall")]);

        assert!(page.contains("Book Club"));
        assert!(page.contains("Town Hall"));
        assert!(page.contains("2024-07-01"));
    }

    #[test]
    fn renders_empty_state() {
        let page = index_page(&[], &[]);

        assert!(page.contains("No events yet."));
        assert!(page.contains("No venues yet."));
    }

    #[test]
    fn escapes_markup_in_titles() {
        let page = index_page(&[event("<script>alert(1)</script>")], &[]);

        assert!(!page.contains("<script>"));
        assert!(page.contains("&lt;script&gt;"));
    }

    #[test]
    fn escape_handles_all_specials() {
        assert_eq!(escape(r#"a&b<c>d"e'f"#), "a&amp;b&lt;c&gt;d&quot;e&#39;f");
    }
}
