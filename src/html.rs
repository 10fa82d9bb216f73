/// Content type of the HTML page.
pub const HTML_CONTENT_TYPE: &str = "text/html; charset=utf-8";

/// Render the static status page shown to browsers hitting the HTTP trigger.
///
/// The only dynamic part is the invocation timestamp. Timestamps produced by
/// [`crate::clock::iso_timestamp`] contain no HTML-significant characters, so
/// the value is embedded as-is.
pub fn render_page(time_utc: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>Hello from Lambda</title>
  <style>
    body {{ font-family: system-ui, sans-serif; margin: 3rem auto; max-width: 40rem; color: #222; }}
    code {{ background: #f3f3f3; padding: 0.1rem 0.3rem; border-radius: 3px; }}
  </style>
</head>
<body>
  <h1>Hello from Lambda (HTTP)!</h1>
  <p>This page was rendered at <time datetime="{time_utc}">{time_utc}</time> (UTC).</p>
  <p>Request <code>?format=json</code> for a machine-readable response.</p>
</body>
</html>
"#
    )
}
