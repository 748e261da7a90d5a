use axum::response::Html;
use html_escape::{encode_double_quoted_attribute, encode_text};

use super::layout;
use crate::server::model::discord::PartialGuild;

/// Lists the guilds the visitor can manage.
pub fn dashboard_page(guilds: &[PartialGuild]) -> Html<String> {
    let mut body = String::from("<h1>Your servers</h1>\n");

    if guilds.is_empty() {
        body.push_str(
            "<p>No servers found where you are an administrator and the bot is installed.</p>\n",
        );
    } else {
        body.push_str("<ul class=\"guilds\">\n");
        for guild in guilds {
            body.push_str(&guild_item(guild));
        }
        body.push_str("</ul>\n");
    }

    body.push_str("<p><a href=\"/logout\">Logout</a></p>");

    layout("Dashboard", &body)
}

fn guild_item(guild: &PartialGuild) -> String {
    let icon = guild
        .icon_url()
        .map(|url| {
            format!(
                "<img src=\"{}\" alt=\"\">",
                encode_double_quoted_attribute(&url)
            )
        })
        .unwrap_or_default();

    format!(
        "  <li>{icon}<a href=\"/dashboard/{id}\">{name}</a></li>\n",
        icon = icon,
        id = guild.id.get(),
        name = encode_text(&guild.name),
    )
}
