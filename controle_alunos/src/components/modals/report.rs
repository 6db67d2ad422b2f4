use dto::turma::Turma;
use std::time::Duration;

use leptos::{
    logging::{error, warn},
    prelude::*,
};
use wasm_bindgen::JsValue;

use crate::{
    components::{
        snackbar::{use_snackbar, SnackbarContext},
        turma_select::TurmaSelect,
    },
    roster::ReportRequest,
    services::student::get_report,
    session::use_session,
};

/// Asks for a class and opens its roster PDF in a new tab.
#[component]
pub fn ReportModal(on_close: impl Fn() + Send + Sync + Copy + 'static) -> impl IntoView {
    let snackbar = use_snackbar();
    let session = use_session();
    let (turma, set_turma) = signal(None::<Turma>);

    let generate = Action::new(move |request: &ReportRequest| {
        let ReportRequest { token, turma } = request.clone();
        async move {
            match get_report(token, turma).await {
                Ok(pdf) => match open_pdf(&pdf) {
                    Ok(()) => {
                        snackbar.success("Relatório gerado com sucesso!");
                        on_close();
                    }
                    Err(e) => {
                        error!("Falha ao abrir o relatório: {:?}", e);
                        snackbar.warning("Relatório gerado, mas o navegador bloqueou a nova aba.");
                    }
                },
                Err(e) => snackbar.error("Erro ao gerar o relatório.", e),
            }
        }
    });

    let on_generate = move |_| match ReportRequest::new(session.token_untracked(), turma.get()) {
        Ok(request) => {
            generate.dispatch(request);
        }
        Err(blocked) => snackbar.error("Não foi possível gerar o relatório:", blocked),
    };

    view! {
        <div class="flex flex-col gap-3 w-80">
            <label for="report-turma">Turma</label>
            <TurmaSelect
                id="report-turma"
                empty_label="Selecione a turma"
                value=turma
                on_change=move |t| set_turma.set(t)
            />
            <div class="flex flex-row gap-2 justify-end">
                <button
                    class="btn cancel"
                    on:click=move |_| on_close()
                    disabled=generate.pending()
                >
                    Cancelar
                </button>
                <button class="btn save" on:click=on_generate disabled=generate.pending()>
                    Gerar Relatório
                </button>
            </div>
        </div>
    }
}

fn open_pdf(bytes: &[u8]) -> Result<(), JsValue> {
    let parts = js_sys::Array::new();
    parts.push(&js_sys::Uint8Array::from(bytes));

    let options = web_sys::BlobPropertyBag::new();
    options.set_type("application/pdf");
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options)?;
    let url = web_sys::Url::create_object_url_with_blob(&blob)?;

    match window().open_with_url_and_target(&url, "_blank") {
        Ok(Some(_)) => {
            // The new tab needs the URL until it has loaded the document.
            set_timeout(move || revoke_url(&url), PDF_URL_LIFETIME);
            Ok(())
        }
        Ok(None) => {
            revoke_url(&url);
            Err(JsValue::from_str("popup blocked"))
        }
        Err(e) => {
            revoke_url(&url);
            Err(e)
        }
    }
}

const PDF_URL_LIFETIME: Duration = Duration::from_secs(60);

fn revoke_url(url: &str) {
    if let Err(e) = web_sys::Url::revoke_object_url(url) {
        warn!("Could not release report URL: {:?}", e);
    }
}
