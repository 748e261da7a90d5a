use axum::response::Html;
use html_escape::{encode_double_quoted_attribute, encode_text};

use super::layout;
use crate::server::model::settings::GuildSettings;

/// Settings page for one guild.
///
/// Administrators get an edit form; everyone else sees the values read-only.
pub fn guild_page(guild_id: &str, settings: &GuildSettings, is_admin: bool) -> Html<String> {
    let log_channel = settings.log_channel.as_deref().unwrap_or("");

    let content = if is_admin {
        format!(
            r#"<form method="post" action="/dashboard/{id}/update">
  <label for="prefix">Command prefix</label>
  <input id="prefix" name="prefix" value="{prefix}">
  <label for="log_channel">Log channel ID</label>
  <input id="log_channel" name="log_channel" value="{log_channel}">
  <p><button type="submit">Save</button></p>
</form>"#,
            id = encode_double_quoted_attribute(guild_id),
            prefix = encode_double_quoted_attribute(&settings.prefix),
            log_channel = encode_double_quoted_attribute(log_channel),
        )
    } else {
        format!(
            r#"<dl>
  <dt>Command prefix</dt><dd>{prefix}</dd>
  <dt>Log channel ID</dt><dd>{log_channel}</dd>
</dl>
<p>You are not an administrator of this server, so these settings are read-only.</p>"#,
            prefix = encode_text(&settings.prefix),
            log_channel = if log_channel.is_empty() {
                "not set".into()
            } else {
                encode_text(log_channel)
            },
        )
    };

    let body = format!(
        "<h1>Server {id}</h1>\n{content}\n<p><a href=\"/dashboard\">Back to your servers</a></p>",
        id = encode_text(guild_id),
        content = content,
    );

    layout("Server settings", &body)
}
