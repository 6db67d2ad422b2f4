use dto::student::{StudentDto, StudentPayload};
use dto::turma::Turma;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::{
    components::{
        modal::Modal,
        modals::{
            delete_student::DeleteStudentModal, report::ReportModal, student::StudentModal,
        },
        snackbar::{use_snackbar, SnackbarContext},
        turma_select::TurmaSelect,
    },
    draft::StudentDraft,
    roster::{filter_students, EditorMode},
    services::student::{create_student, get_students, update_student},
    session::use_session,
};

#[component]
pub fn Dashboard() -> impl IntoView {
    let session = use_session();
    let snackbar = use_snackbar();
    let navigate = use_navigate();

    let (students, set_students) = signal(Vec::<StudentDto>::new());
    let (search, set_search) = signal(String::new());
    let (turma_filter, set_turma_filter) = signal(None::<Turma>);
    let filtered = Memo::new(move |_| {
        students.with(|all| filter_students(all, &search.get(), turma_filter.get()))
    });

    let draft = RwSignal::new(StudentDraft::blank());
    let (editor, set_editor) = signal(None::<EditorMode>);
    let (deleting, set_deleting) = signal(None::<StudentDto>);
    let (report_open, set_report_open) = signal(false);

    let fetch_students = Action::new(move |token: &String| {
        let token = token.clone();
        async move {
            match get_students(token).await {
                Ok(list) => set_students.set(list),
                Err(e) => snackbar.error("Não foi possível carregar os alunos.", e),
            }
        }
    });

    let refresh = move || {
        if let Some(token) = session.token_untracked() {
            fetch_students.dispatch(token);
        }
    };

    Effect::new({
        let navigate = navigate.clone();
        move || match session.restore() {
            Some(token) => {
                fetch_students.dispatch(token);
            }
            None => navigate("/", Default::default()),
        }
    });

    let save_student = Action::new(move |(mode, payload): &(EditorMode, StudentPayload)| {
        let (mode, payload) = (*mode, payload.clone());
        let token = session.token_untracked().unwrap_or_default();
        async move {
            let saved = match mode {
                EditorMode::Create => create_student(token, payload).await,
                EditorMode::Edit(id) => update_student(token, id, payload).await,
            };
            match saved {
                Ok(_) => {
                    snackbar.success(mode.success_message());
                    set_editor.set(None);
                    refresh();
                }
                Err(e) => snackbar.error(mode.failure_message(), e),
            }
        }
    });

    let on_create = move |_| {
        draft.set(StudentDraft::blank());
        set_editor.set(Some(EditorMode::Create));
    };

    let on_edit = move |student: StudentDto| {
        draft.set(StudentDraft::from_student(&student));
        set_editor.set(Some(EditorMode::Edit(student.id)));
    };

    let on_delete = move |student: StudentDto| set_deleting.set(Some(student));

    let on_save = move || {
        if let Some(mode) = editor.get_untracked() {
            save_student.dispatch((mode, draft.with_untracked(|d| d.to_payload())));
        }
    };

    let on_logout = move |_| {
        session.sign_out();
        navigate("/", Default::default());
    };

    view! {
        <nav class="flex flex-row items-center gap-2 p-2 bg-blue-800 rounded-md">
            <span class="flex-1 text-xl">Controle de Alunos</span>
            <button class="btn bg-gray-900" on:click=move |_| set_report_open.set(true)>
                Gerar Relatório
            </button>
            <button class="btn bg-green-700" on:click=on_create>
                Cadastrar Aluno
            </button>
            <button class="btn bg-gray-900" on:click=on_logout>
                Sair
            </button>
        </nav>

        <main class="flex flex-col flex-1 gap-2 overflow-hidden">
            <div class="flex flex-row justify-between items-center gap-2">
                <input
                    class="input w-1/2"
                    placeholder="Busque pelo nome da criança"
                    bind:value=(search, set_search)
                />
                <TurmaSelect
                    empty_label="Todas turmas"
                    value=turma_filter
                    on_change=move |turma| set_turma_filter.set(turma)
                />
            </div>

            <div class="flex-1 overflow-auto rounded-md outline outline-white/15">
                <table class="w-full">
                    <thead class="bg-blue-800">
                        <tr>
                            <th>Nome</th>
                            <th>Turma</th>
                            <th>Telefone</th>
                            <th>Transporte Escolar</th>
                            <th>Sai sozinho</th>
                            <th>Responsáveis</th>
                            <th>Ações</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            filtered
                                .get()
                                .into_iter()
                                .map(|student| view! { <StudentRow student on_edit on_delete /> })
                                .collect::<Vec<_>>()
                        }}
                    </tbody>
                </table>
            </div>
        </main>

        <Modal
            is_open=move || editor.get().is_some()
            on_close=move || set_editor.set(None)
            title=Signal::derive(move || {
                editor.get().map(|mode| mode.title()).unwrap_or_default().to_string()
            })
        >
            {move || {
                editor
                    .get()
                    .map(|mode| {
                        view! {
                            <StudentModal
                                mode
                                draft
                                on_save
                                on_close=move || set_editor.set(None)
                                saving=save_student.pending()
                            />
                        }
                    })
            }}
        </Modal>

        <Modal
            is_open=move || deleting.get().is_some()
            on_close=move || set_deleting.set(None)
            title=String::from("Excluir aluno")
        >
            {move || {
                deleting
                    .get()
                    .map(|student| {
                        view! {
                            <DeleteStudentModal
                                student
                                on_close=move |deleted| {
                                    set_deleting.set(None);
                                    if deleted {
                                        refresh();
                                    }
                                }
                            />
                        }
                    })
            }}
        </Modal>

        <Modal
            is_open=move || report_open.get()
            on_close=move || set_report_open.set(false)
            title=String::from("Relatório por turma")
        >
            <ReportModal on_close=move || set_report_open.set(false) />
        </Modal>
    }
}

#[component]
fn StudentRow(
    student: StudentDto,
    on_edit: impl Fn(StudentDto) + Send + Sync + Copy + 'static,
    on_delete: impl Fn(StudentDto) + Send + Sync + Copy + 'static,
) -> impl IntoView {
    let for_edit = student.clone();
    let for_delete = student.clone();

    view! {
        <tr class="odd:bg-gray-900 hover:bg-gray-800">
            <td>{student.nome}</td>
            <td>{student.turma.map(|t| t.code()).unwrap_or("-")}</td>
            <td>{student.telefone}</td>
            <td>{student.transporte_escolar}</td>
            <td>{if student.pode_sair_sozinho { "Sim" } else { "Não" }}</td>
            <td>
                {student
                    .responsaveis
                    .into_iter()
                    .map(|r| {
                        let grau = r.grau_parentesco.map(|g| g.label()).unwrap_or("-");
                        view! { <div>{format!("{} ({})", r.nome, grau)}</div> }
                    })
                    .collect::<Vec<_>>()}
            </td>
            <td class="flex flex-row gap-1">
                <button class="btn bg-cyan-700" on:click=move |_| on_edit(for_edit.clone())>
                    Editar
                </button>
                <button class="btn bg-red-700" on:click=move |_| on_delete(for_delete.clone())>
                    Excluir
                </button>
            </td>
        </tr>
    }
}
