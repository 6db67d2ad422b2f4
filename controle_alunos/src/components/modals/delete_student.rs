use dto::student::StudentDto;
use leptos::prelude::*;

use crate::{
    components::snackbar::{use_snackbar, SnackbarContext},
    services::student::delete_student,
    session::use_session,
};

#[component]
pub fn DeleteStudentModal(
    student: StudentDto,
    on_close: impl Fn(bool) + Send + Sync + Copy + 'static,
) -> impl IntoView {
    let snackbar = use_snackbar();
    let session = use_session();
    let student_id = student.id;

    let delete_student = Action::new(move |_: &()| {
        let token = session.token_untracked().unwrap_or_default();
        async move {
            match delete_student(token, student_id).await {
                Ok(_) => {
                    snackbar.success("Aluno excluído com sucesso!");
                    on_close(true);
                }
                Err(e) => {
                    snackbar.error("Não foi possível excluir o aluno.", e);
                }
            }
        }
    });

    view! {
        <div class="flex flex-col gap-2">
            <div style:max-width="24em">
                Tem certeza que deseja excluir o aluno <em>{student.nome}</em>?
            </div>
            <div class="flex flex-row gap-2 justify-end">
                <button
                    class="btn cancel"
                    on:click=move |_| on_close(false)
                    disabled=delete_student.pending()
                >
                    Cancelar
                </button>
                <button
                    class="btn bg-red-700"
                    on:click=move |_| {
                        delete_student.dispatch(());
                    }
                    disabled=delete_student.pending()
                >
                    Excluir
                </button>
            </div>
        </div>
    }
}
