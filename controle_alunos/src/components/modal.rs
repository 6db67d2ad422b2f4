use leptos::prelude::*;

use crate::icons::close::CloseIcon;

#[component]
pub fn Modal(
    is_open: impl Fn() -> bool + Send + Sync + Copy + 'static,
    on_close: impl Fn() + Send + Sync + Copy + 'static,
    #[prop(into)] title: Signal<String>,
    children: ChildrenFn,
) -> impl IntoView {
    view! {
        <div
            class="flex fixed top-0 left-0 w-full h-full justify-center items-center backdrop-blur-xs z-1"
            class:hidden=move || !is_open()
            on:click=move |_| on_close()
        >
            <div
                class="flex flex-col gap-2 bg-gray-800 p-3 rounded-xl outline outline-white/15 max-h-full overflow-auto"
                role="dialog"
                on:click=|e| e.stop_propagation()
            >
                <div class="flex flex-row items-center gap-2">
                    <h2 class="text-lg flex-1">{move || title.get()}</h2>
                    <button class="btn" aria-label="Fechar" on:click=move |_| on_close()>
                        <CloseIcon />
                    </button>
                </div>
                <Show when=is_open>{children()}</Show>
            </div>
        </div>
    }
}
