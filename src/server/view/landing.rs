use axum::response::Html;

use super::layout;

/// Page shown to anonymous visitors.
pub fn landing_page() -> Html<String> {
    layout(
        "Guild Dashboard",
        r#"<h1>Guild Dashboard</h1>
<p>Manage the bot settings of the Discord servers you administer.</p>
<p><a href="/login">Login with Discord</a></p>"#,
    )
}
