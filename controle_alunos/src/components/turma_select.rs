use dto::turma::Turma;
use leptos::prelude::*;

/// `<select>` over every class code. The empty option maps to `None`.
#[component]
pub fn TurmaSelect(
    #[prop(into)] value: Signal<Option<Turma>>,
    on_change: impl Fn(Option<Turma>) + Send + Sync + Copy + 'static,
    empty_label: &'static str,
    #[prop(optional)] id: Option<&'static str>,
) -> impl IntoView {
    view! {
        <select
            id=id
            class="input"
            prop:value=move || value.get().map(|t| t.code()).unwrap_or("")
            on:change=move |ev| on_change(event_target_value(&ev).parse().ok())
        >
            <option value="" selected=move || value.get().is_none()>
                {empty_label}
            </option>
            {Turma::ALL
                .into_iter()
                .map(|turma| {
                    view! {
                        <option value=turma.code() selected=move || value.get() == Some(turma)>
                            {turma.code()}
                        </option>
                    }
                })
                .collect::<Vec<_>>()}
        </select>
    }
}
