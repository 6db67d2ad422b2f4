use leptos::web_sys::HtmlDivElement;
use std::fmt::Display;

use chrono::TimeDelta;
use leptos::{logging::warn, prelude::*};
use uuid::Uuid;

#[derive(Clone, PartialEq)]
pub enum MsgType {
    Success,
    Warning,
    Error,
}

#[derive(Clone)]
pub struct SnackbarMsg {
    id: Uuid,
    msg_type: MsgType,
    content: String,
}

impl SnackbarMsg {
    fn new(msg_type: MsgType, content: String) -> Self {
        SnackbarMsg {
            id: Uuid::new_v4(),
            msg_type,
            content,
        }
    }
}

/// Toast notifications. Every message disappears after a few seconds or on
/// click.
pub trait SnackbarContext {
    fn success(&self, msg: &str);
    fn error(&self, msg: &str, e: impl Display);
    fn warning(&self, msg: &str);
}

#[component]
pub fn Snackbar(children: ChildrenFn) -> impl IntoView {
    let (messages, set_messages) = signal(Vec::<SnackbarMsg>::new());

    provide_context(set_messages);

    let div_ref = NodeRef::new();

    Effect::new(move || {
        let count = messages.with(|m| m.len());
        if let Some(div) = div_ref.get() {
            let div: HtmlDivElement = div;
            let style = format!(
                "left: 0; transition-duration: 0.25s; transform: translate(-50%,100%);bottom: {}em",
                count as f32 * 3.5
            );
            if let Err(e) = div.set_attribute("style", &style) {
                warn!("Could not position snackbar: {:?}", e);
            }
        }
    });

    view! {
        {children()}
        <div
            class="snackbar-root fixed z-2 w-0"
            style:bottom="0"
            style:left="50%"
            data-testid="snackbar-root"
        >
            <div node_ref=div_ref class="relative flex flex-col-reverse gap-1 items-center">
                <For
                    each=move || {
                        let mut messages = messages.get();
                        messages.reverse();
                        messages
                    }
                    key=|m: &SnackbarMsg| m.id
                    let:child
                >
                    <div
                        class="snackbar-msg rounded-md p-2 outline-2 select-none w-max max-w-96"
                        class:bg-red-600=child.msg_type == MsgType::Error
                        class:bg-green-600=child.msg_type == MsgType::Success
                        class:bg-yellow-600=child.msg_type == MsgType::Warning
                        on:click=move |_| set_messages.write().retain(|msg| msg.id != child.id)
                    >
                        {child.content}
                    </div>
                </For>
            </div>
        </div>
    }
}

fn insert_message(snck: &Option<WriteSignal<Vec<SnackbarMsg>>>, msg: SnackbarMsg) {
    let Some(ctx) = *snck else {
        return;
    };
    let id = msg.id;
    ctx.write().push(msg);
    set_timeout(
        move || ctx.write().retain(|snck| snck.id != id),
        TimeDelta::seconds(5).to_std().unwrap_or_default(),
    );
}

impl SnackbarContext for Option<WriteSignal<Vec<SnackbarMsg>>> {
    fn success(&self, msg: &str) {
        insert_message(self, SnackbarMsg::new(MsgType::Success, msg.to_string()));
    }

    fn error(&self, msg: &str, e: impl Display) {
        insert_message(self, SnackbarMsg::new(MsgType::Error, format!("{} {}", msg, e)));
    }

    fn warning(&self, msg: &str) {
        insert_message(self, SnackbarMsg::new(MsgType::Warning, msg.to_string()));
    }
}

pub fn use_snackbar() -> Option<WriteSignal<Vec<SnackbarMsg>>> {
    use_context::<WriteSignal<Vec<SnackbarMsg>>>()
}
