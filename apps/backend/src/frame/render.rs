//! Frame meta-tag documents.

use std::fmt::Write as _;

use actix_web::http::header::ContentType;
use actix_web::HttpResponse;

/// What a button does when tapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonAction {
    /// Post back to the frame's post URL.
    Post,
    /// Post, then redirect the user to the post URL.
    PostRedirect,
}

impl ButtonAction {
    pub fn as_str(self) -> &'static str {
        match self {
            ButtonAction::Post => "post",
            ButtonAction::PostRedirect => "post_redirect",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameButton {
    pub label: String,
    pub action: ButtonAction,
}

impl FrameButton {
    pub fn post(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            action: ButtonAction::Post,
        }
    }

    pub fn redirect(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            action: ButtonAction::PostRedirect,
        }
    }
}

/// Everything a client needs to draw the next frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameMeta {
    pub title: String,
    pub image_url: String,
    pub post_url: String,
    /// Placeholder of the text input; no input field when `None`.
    pub input_placeholder: Option<String>,
    /// Numbered from 1 in order.
    pub buttons: Vec<FrameButton>,
}

impl FrameMeta {
    pub fn to_html(&self) -> String {
        let title = escape_attr(&self.title);
        let image = escape_attr(&self.image_url);

        let mut head = String::new();
        let _ = write!(head, "<title>{title}</title>");
        push_meta(&mut head, "property", "og:title", &title);
        push_meta(&mut head, "property", "og:image", &image);
        push_meta(&mut head, "name", "fc:frame", "vNext");
        push_meta(&mut head, "name", "fc:frame:image", &image);
        push_meta(&mut head, "name", "fc:frame:post_url", &escape_attr(&self.post_url));
        if let Some(placeholder) = &self.input_placeholder {
            push_meta(&mut head, "name", "fc:frame:input:text", &escape_attr(placeholder));
        }
        for (i, button) in self.buttons.iter().enumerate() {
            let n = i + 1;
            push_meta(
                &mut head,
                "name",
                &format!("fc:frame:button:{n}"),
                &escape_attr(&button.label),
            );
            push_meta(
                &mut head,
                "name",
                &format!("fc:frame:button:{n}:action"),
                button.action.as_str(),
            );
        }

        format!("<!DOCTYPE html><html><head>{head}</head></html>")
    }

    /// Frames are always served with 200; logical failures are frames too.
    pub fn into_response(self) -> HttpResponse {
        HttpResponse::Ok()
            .content_type(ContentType::html())
            .insert_header(("cache-control", "no-store"))
            .body(self.to_html())
    }
}

/// `content` must already be escaped.
fn push_meta(out: &mut String, attr: &str, key: &str, content: &str) {
    let _ = write!(out, r#"<meta {attr}="{key}" content="{content}">"#);
}

fn escape_attr(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}
