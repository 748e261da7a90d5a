//! Server-rendered HTML pages.
//!
//! Pages are plain strings assembled around a shared layout. Every interpolated
//! value goes through `html_escape`, since guild names and settings are user
//! controlled.

pub mod dashboard;
pub mod guild;
pub mod landing;

use axum::response::Html;
use html_escape::encode_text;

/// Wraps `body` in the common page skeleton.
fn layout(title: &str, body: &str) -> Html<String> {
    Html(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{title}</title>
  <style>
    body {{ font-family: sans-serif; max-width: 48rem; margin: 2rem auto; padding: 0 1rem; }}
    ul.guilds {{ list-style: none; padding: 0; }}
    ul.guilds li {{ display: flex; align-items: center; gap: 0.75rem; margin: 0.5rem 0; }}
    ul.guilds img {{ width: 32px; height: 32px; border-radius: 50%; }}
    label {{ display: block; margin: 0.75rem 0 0.25rem; }}
  </style>
</head>
<body>
{body}
</body>
</html>
"#,
        title = encode_text(title),
        body = body,
    ))
}
