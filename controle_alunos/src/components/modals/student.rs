use dto::guardian::Parentesco;
use leptos::{either::Either, logging::error, prelude::*};
use uuid::Uuid;

use crate::{
    components::turma_select::TurmaSelect,
    draft::{should_check_name, DraftGuardian, GuardianField, NameCheck, StudentDraft},
    icons::trash::TrashIcon,
    roster::EditorMode,
    services::student::check_name,
    session::use_session,
};

/// Body of the student dialog. Edits `draft` in place; saving is delegated
/// to `on_save`, which decides between create and update.
#[component]
pub fn StudentModal(
    mode: EditorMode,
    draft: RwSignal<StudentDraft>,
    on_save: impl Fn() + Send + Sync + Copy + 'static,
    on_close: impl Fn() + Send + Sync + Copy + 'static,
    #[prop(into)] saving: Signal<bool>,
) -> impl IntoView {
    let session = use_session();
    let (name_check, set_name_check) = signal(NameCheck::Unchecked);

    let verify_name = Action::new(move |nome: &String| {
        let nome = nome.clone();
        let token = session.token_untracked().unwrap_or_default();
        async move {
            let lookup = check_name(token, nome).await;
            if let Err(e) = &lookup {
                error!("Erro ao verificar o nome: {}", e);
            }
            set_name_check.set(NameCheck::from_lookup(&lookup));
        }
    });

    let guardians = move || draft.with(|d| d.responsaveis.clone());

    view! {
        <form
            class="flex flex-col gap-3 w-[40rem] max-w-full"
            on:submit=move |ev| {
                ev.prevent_default();
                on_save();
            }
        >
            <div class="flex flex-col">
                <label for="nome">
                    <strong>Nome do Aluno</strong>
                </label>
                <input
                    id="nome"
                    class="input"
                    autocomplete="off"
                    placeholder="Digite o nome completo"
                    required
                    prop:value=move || draft.with(|d| d.nome.clone())
                    on:input=move |ev| draft.update(|d| d.nome = event_target_value(&ev))
                    on:blur=move |ev| {
                        let nome = event_target_value(&ev);
                        if should_check_name(&nome) {
                            verify_name.dispatch(nome);
                        }
                    }
                />
                {move || {
                    name_check
                        .get()
                        .message()
                        .map(|message| view! { <div class="text-red-500 mt-1">{message}</div> })
                }}
            </div>

            <div class="flex flex-col">
                <label for="telefone">
                    <strong>Telefone do Responsável</strong>
                </label>
                <input
                    id="telefone"
                    class="input"
                    autocomplete="off"
                    placeholder="Digite o telefone atualizado do responsável"
                    required
                    prop:value=move || draft.with(|d| d.telefone.clone())
                    on:input=move |ev| draft.update(|d| d.telefone = event_target_value(&ev))
                />
            </div>

            <div class="flex flex-col">
                <label for="transporte">
                    <strong>Transporte Escolar</strong>
                </label>
                <textarea
                    id="transporte"
                    class="input"
                    rows="3"
                    placeholder="Digite o nome do transportador (se aplicável)"
                    prop:value=move || draft.with(|d| d.transporte_escolar.clone())
                    on:input=move |ev| {
                        draft.update(|d| d.transporte_escolar = event_target_value(&ev))
                    }
                ></textarea>
            </div>

            <div class="flex flex-col">
                <label for="turma">
                    <strong>Turma do Aluno</strong>
                </label>
                <TurmaSelect
                    id="turma"
                    empty_label="Selecione"
                    value=Signal::derive(move || draft.with(|d| d.turma))
                    on_change=move |turma| draft.update(|d| d.turma = turma)
                />
            </div>

            <label class="flex flex-row gap-2 items-center">
                <input
                    type="checkbox"
                    prop:checked=move || draft.with(|d| d.pode_sair_sozinho)
                    on:change=move |ev| {
                        draft.update(|d| d.pode_sair_sozinho = event_target_checked(&ev))
                    }
                />
                <strong>Pode sair sozinho</strong>
            </label>

            <h3 class="text-lg">Responsáveis</h3>
            <ul class="flex flex-col gap-2">
                {move || {
                    if draft.with(|d| d.responsaveis.is_empty()) {
                        Either::Left(view! { <li class="text-center p-1 text-gray-400">Nenhum responsável</li> })
                    } else {
                        Either::Right(view! {})
                    }
                }}
                <For each=guardians key=|g: &DraftGuardian| g.key let:guardian>
                    <GuardianRow draft guardian />
                </For>
            </ul>
            <button
                type="button"
                class="btn bg-green-700"
                on:click=move |_| {
                    draft.update(|d| {
                        d.add_guardian();
                    })
                }
            >
                Adicionar mais um Responsável
            </button>

            <div class="flex flex-row gap-2 justify-end">
                <button type="button" class="btn cancel" on:click=move |_| on_close() disabled=saving>
                    Fechar
                </button>
                <button type="submit" class="btn save" disabled=saving>
                    {match mode {
                        EditorMode::Create => "Cadastrar",
                        EditorMode::Edit(_) => "Salvar",
                    }}
                </button>
            </div>
        </form>
    }
}

#[component]
fn GuardianRow(draft: RwSignal<StudentDraft>, guardian: DraftGuardian) -> impl IntoView {
    let key: Uuid = guardian.key;
    let name_id = format!("responsavel-nome-{}", key);
    let kin_id = format!("responsavel-parentesco-{}", key);

    view! {
        <li class="flex flex-row gap-2 p-2 rounded-md outline outline-white/15 items-end">
            <div class="flex flex-col flex-1">
                <label for=name_id.clone()>Nome</label>
                <input
                    id=name_id
                    class="input"
                    autocomplete="off"
                    placeholder="Nome do responsável"
                    required
                    prop:value=guardian.nome
                    on:input=move |ev| {
                        draft
                            .update(|d| {
                                d.update_guardian(key, GuardianField::Nome(event_target_value(&ev)));
                            })
                    }
                />
            </div>
            <div class="flex flex-col">
                <label for=kin_id.clone()>Parentesco</label>
                <select
                    id=kin_id
                    class="input"
                    on:change=move |ev| {
                        let grau = event_target_value(&ev).parse::<Parentesco>().ok();
                        draft
                            .update(|d| {
                                d.update_guardian(key, GuardianField::GrauParentesco(grau));
                            })
                    }
                >
                    <option value="" selected=guardian.grau_parentesco.is_none()>
                        Selecione
                    </option>
                    {Parentesco::ALL
                        .into_iter()
                        .map(|grau| {
                            view! {
                                <option
                                    value=grau.code()
                                    selected=guardian.grau_parentesco == Some(grau)
                                >
                                    {grau.label()}
                                </option>
                            }
                        })
                        .collect::<Vec<_>>()}
                </select>
            </div>
            <button
                type="button"
                class="btn"
                aria-label="Remover responsável"
                on:click=move |_| {
                    draft
                        .update(|d| {
                            d.remove_guardian(key);
                        })
                }
            >
                <TrashIcon />
            </button>
        </li>
    }
}
