//! Pages and fragments for the board, assembled with the helper library.
//!
//! Every script and `onclick` below comes out of `prototype_helpers`; the
//! handlers in this crate answer exactly the requests that generated
//! JavaScript performs.

use prototype_helpers::{
    button_to_function, html_escape, AjaxHelpers, Attrs, HttpMethod, ObserverOptions,
    RequestOptions, RouteMap, UpdateTarget, UrlError, UrlSpec,
};

use crate::Post;

const PROTOTYPE_JS: &str =
    "https://ajax.googleapis.com/ajax/libs/prototype/1.7.3.0/prototype.js";

/// Route table mirroring the router in `lib.rs`.
fn helpers() -> AjaxHelpers<RouteMap> {
    AjaxHelpers::new(
        RouteMap::new()
            .route("posts", "/posts")
            .route("post", "/posts/{id}")
            .route("search", "/search")
            .route("status", "/status"),
    )
}

/// The full board page: current posts plus the composer, live-search and
/// status widgets.
pub fn board_page(posts: &[Post]) -> Result<String, UrlError> {
    let h = helpers();

    let refresh_link = h.link_to_remote(
        "Refresh",
        &RequestOptions {
            url: UrlSpec::route("posts", &[]),
            update: UpdateTarget::id("posts"),
            method: Some(HttpMethod::Get),
            ..Default::default()
        },
        &Attrs::new().with("href", "/posts"),
    )?;
    let toggle_button =
        button_to_function("Toggle composer", "Element.toggle('composer')", &Attrs::new());
    let submit_button = h.submit_to_remote(
        "post_btn",
        "Post",
        &RequestOptions {
            url: UrlSpec::route("posts", &[]),
            update: UpdateTarget::id("posts"),
            complete: Some("Form.reset('composer')".to_string()),
            ..Default::default()
        },
        &Attrs::new(),
    )?;
    let search_observer = h.observe_field(
        "search",
        &ObserverOptions {
            frequency: Some(0.5),
            request: RequestOptions {
                url: UrlSpec::route("search", &[]),
                update: UpdateTarget::id("suggestions"),
                with: Some("q".to_string()),
                ..Default::default()
            },
            ..Default::default()
        },
    )?;
    let status_poller = h.periodically_call_remote(&ObserverOptions {
        frequency: Some(5.0),
        request: RequestOptions {
            url: UrlSpec::route("status", &[]),
            update: UpdateTarget::id("status"),
            ..Default::default()
        },
        ..Default::default()
    })?;

    let posts_list = posts_fragment(posts)?;
    let status_line = status_fragment(posts.len());

    Ok(format!(
        "<!DOCTYPE html>\n\
         <html>\n\
         <head>\n\
         <title>Message board</title>\n\
         <script src=\"{PROTOTYPE_JS}\" type=\"text/javascript\"></script>\n\
         </head>\n\
         <body>\n\
         <h1>Message board</h1>\n\
         <p>{refresh_link} {toggle_button}</p>\n\
         <div id=\"posts\">{posts_list}</div>\n\
         <form id=\"composer\" action=\"/posts\" method=\"post\">\n\
         <input name=\"author\" type=\"text\" />\n\
         <input name=\"body\" type=\"text\" />\n\
         {submit_button}\n\
         </form>\n\
         <h2>Search</h2>\n\
         <input id=\"search\" name=\"q\" type=\"text\" />\n\
         <div id=\"suggestions\"></div>\n\
         {search_observer}\n\
         <div id=\"status\">{status_line}</div>\n\
         {status_poller}\n\
         </body>\n\
         </html>\n"
    ))
}

/// The post list, which is also the payload every `Ajax.Updater` targeting
/// `posts` swaps in.
pub fn posts_fragment(posts: &[Post]) -> Result<String, UrlError> {
    let h = helpers();
    let mut items = String::new();
    for post in posts {
        let delete_link = h.link_to_remote(
            "Delete",
            &RequestOptions {
                url: UrlSpec::route("post", &[("id", &post.id.to_string())]),
                update: UpdateTarget::id("posts"),
                method: Some(HttpMethod::Delete),
                confirm: Some(format!("Delete the post by {}?", post.author)),
                ..Default::default()
            },
            &Attrs::new(),
        )?;
        items.push_str(&format!(
            "<li id=\"post_{}\"><strong>{}</strong>: {} {delete_link}</li>",
            post.id,
            html_escape(&post.author),
            html_escape(&post.body)
        ));
    }
    Ok(format!("<ul id=\"post-list\">{items}</ul>"))
}

/// Suggestion list for the live-search box.
pub fn suggestions_fragment(posts: &[Post], query: &str) -> String {
    let query = query.to_lowercase();
    let mut items = String::new();
    for post in posts {
        if post.body.to_lowercase().contains(&query)
            || post.author.to_lowercase().contains(&query)
        {
            items.push_str(&format!("<li>{}</li>", html_escape(&post.body)));
        }
    }
    format!("<ul class=\"suggestions\">{items}</ul>")
}

/// One-line board summary, refreshed by the status poller.
pub fn status_fragment(count: usize) -> String {
    let noun = if count == 1 { "post" } else { "posts" };
    format!("<p>{count} {noun} on the board</p>")
}
