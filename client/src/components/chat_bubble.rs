//! Single chat transcript entry.

use leptos::prelude::*;
use screening::{ChatMessage, Sender};

use crate::util::markdown::render_markdown_html;

#[component]
pub fn ChatBubble(message: ChatMessage) -> impl IntoView {
    let class = match message.sender {
        Sender::Bot => "chat-bubble chat-bubble--bot",
        Sender::User => "chat-bubble chat-bubble--user",
    };
    let html = render_markdown_html(&message.text);

    view! { <div class=class inner_html=html></div> }
}
