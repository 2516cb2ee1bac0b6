use crate::flash::Flash;

pub const WELCOME: &str = "Welcome to the Online Student Marks Alerting System!";

const MARKS_FORM: &str = r#"    <form method="post" action="/marks">
      <label for="student_id">Student ID</label>
      <input type="text" id="student_id" name="student_id" required>
      <label for="subject">Subject</label>
      <input type="text" id="subject" name="subject" required>
      <label for="mark">Mark</label>
      <input type="number" id="mark" name="mark" step="1" required>
      <button type="submit">Submit</button>
    </form>
"#;

pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

/// The marks entry page with any pending status messages above the form.
pub fn marks_page(flashes: &[Flash]) -> String {
    let mut body = String::new();
    if !flashes.is_empty() {
        body.push_str("    <ul class=\"flashes\">\n");
        for flash in flashes {
            body.push_str(&format!(
                "      <li class=\"alert alert-{}\">{}</li>\n",
                flash.category.as_str(),
                escape_html(&flash.message)
            ));
        }
        body.push_str("    </ul>\n");
    }
    body.push_str(MARKS_FORM);

    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n  <meta charset=\"utf-8\">\n  \
         <title>Submit Marks</title>\n</head>\n<body>\n  <main>\n    <h1>Submit Marks</h1>\n{}  \
         </main>\n</body>\n</html>\n",
        body
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#x27;Jerry&#x27;&lt;/a&gt;"
        );
    }

    #[test]
    fn empty_page_has_form_only() {
        let html = marks_page(&[]);
        assert!(html.contains(r#"<form method="post" action="/marks">"#));
        assert!(html.contains(r#"name="student_id""#));
        assert!(html.contains(r#"name="subject""#));
        assert!(html.contains(r#"name="mark""#));
        assert!(!html.contains("flashes"));
    }

    #[test]
    fn renders_flashes_in_order_with_category() {
        let html = marks_page(&[
            Flash::danger("Failed <script>"),
            Flash::success("Marks submitted successfully!"),
        ]);
        let danger = html.find("alert-danger\">Failed &lt;script&gt;").unwrap();
        let success = html.find("alert-success\">Marks submitted successfully!").unwrap();
        assert!(danger < success);
    }
}
