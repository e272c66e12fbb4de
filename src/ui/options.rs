/// Options page: edit, add, delete and reset link formats

use crate::bridge::BrowserStorage;
use crate::error::StoreError;
use crate::format::{Format, FormatList};
use crate::storage::FormatStore;
use crate::ui::components::{FormatEdit, FormatRow};
use patternfly_yew::prelude::*;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

const RESET_PROMPT: &str = "Reset to default formats? This will remove all custom formats.";

type Store = Rc<FormatStore<BrowserStorage>>;

#[derive(Clone, PartialEq)]
enum PageState {
    Loading,
    Idle,
    Warning(String),
    Error(String),
}

/// Apply one field edit to the draft list
fn apply_edit(drafts: &[Format], index: usize, edit: FormatEdit) -> Vec<Format> {
    let mut drafts = drafts.to_vec();
    if let Some(format) = drafts.get_mut(index) {
        match edit {
            FormatEdit::Name(name) => format.name = name,
            FormatEdit::Template(template) => format.template = template,
            FormatEdit::Type(kind) => format.kind = kind,
        }
    }
    drafts
}

#[function_component(OptionsApp)]
pub fn options_app() -> Html {
    let store: Store = use_memo((), |_| FormatStore::new(BrowserStorage));
    let state = use_state(|| PageState::Loading);
    // Rows as the user sees them; may hold entries that fail validation
    let drafts = use_state(Vec::<Format>::new);

    // Load formats on mount
    {
        let store = store.clone();
        let state = state.clone();
        let drafts = drafts.clone();

        use_effect_with((), move |_| {
            spawn_local(async move {
                let formats = store.load().await;
                drafts.set(formats.into_vec());
                state.set(PageState::Idle);
            });
            || ()
        });
    }

    let on_edit = {
        let store = store.clone();
        let state = state.clone();
        let drafts = drafts.clone();

        Callback::from(move |(index, edit): (usize, FormatEdit)| {
            let updated = apply_edit(&drafts, index, edit);
            drafts.set(updated.clone());
            autosave(store.clone(), updated, state.clone());
        })
    };

    let on_delete = {
        let store = store.clone();
        let state = state.clone();
        let drafts = drafts.clone();

        Callback::from(move |index: usize| {
            let mut list = FormatList::new((*drafts).clone());
            match list.remove(index) {
                Ok(_) => {
                    let updated = list.into_vec();
                    drafts.set(updated.clone());
                    autosave(store.clone(), updated, state.clone());
                }
                Err(e) if is_blocking(&e) => alert(&e.to_string()),
                Err(e) => log::warn!("delete ignored: {}", e),
            }
        })
    };

    let on_add = {
        let store = store.clone();
        let state = state.clone();
        let drafts = drafts.clone();

        Callback::from(move |_| {
            let mut list = FormatList::new((*drafts).clone());
            list.push_new();
            let updated = list.into_vec();
            drafts.set(updated.clone());
            autosave(store.clone(), updated, state.clone());
        })
    };

    let on_reset = {
        let store = store.clone();
        let state = state.clone();
        let drafts = drafts.clone();

        Callback::from(move |_| {
            let store = store.clone();
            let state = state.clone();
            let drafts = drafts.clone();

            spawn_local(async move {
                match store.reset_to_defaults(|| confirm(RESET_PROMPT)).await {
                    Ok(formats) => {
                        drafts.set(formats.into_vec());
                        state.set(PageState::Idle);
                    }
                    Err(StoreError::ResetDeclined) => {}
                    Err(e) => state.set(PageState::Error(format!("Reset failed: {}", e))),
                }
            });
        })
    };

    let is_loading = matches!(*state, PageState::Loading);

    html! {
        <div class="container">
            <h1 class="main-title">{"Copy Link As: Formats"}</h1>
            <p class="hint">
                {"Placeholders: {{title}}, {{url}}, {{domain}}, {{domain_path}}"}
            </p>

            // Status display
            {match &*state {
                PageState::Loading => html! {
                    <div class="loading-text-center">
                        <Spinner />
                        <p class="loading-text">{"Loading formats..."}</p>
                    </div>
                },
                PageState::Warning(msg) => html! {
                    <Alert r#type={AlertType::Warning} title={msg.clone()} inline={true}>
                    </Alert>
                },
                PageState::Error(err) => html! {
                    <Alert r#type={AlertType::Danger} title={"Error"} inline={true}>
                        {err.clone()}
                    </Alert>
                },
                PageState::Idle => html! {}
            }}

            <div id="formats-container">
                {for drafts.iter().enumerate().map(|(index, format)| html! {
                    <FormatRow
                        key={index}
                        index={index}
                        format={format.clone()}
                        on_edit={on_edit.clone()}
                        on_delete={on_delete.clone()}
                    />
                })}
            </div>

            <div class="actions">
                <Button onclick={on_add} disabled={is_loading} variant={ButtonVariant::Primary}>
                    {"Add Format"}
                </Button>
                <Button onclick={on_reset} disabled={is_loading} variant={ButtonVariant::Secondary}>
                    {"Reset to Defaults"}
                </Button>
            </div>
        </div>
    }
}

// Helper functions

/// Validation failures block the page until acknowledged
fn is_blocking(error: &StoreError) -> bool {
    matches!(error, StoreError::NothingToSave | StoreError::LastFormat)
}

fn autosave(store: Store, drafts: Vec<Format>, state: UseStateHandle<PageState>) {
    spawn_local(async move {
        match store.save(&drafts).await {
            Ok(_) => state.set(PageState::Idle),
            Err(e) if is_blocking(&e) => {
                state.set(PageState::Warning(e.to_string()));
                alert(&e.to_string());
            }
            Err(e) => state.set(PageState::Error(format!("Failed to save: {}", e))),
        }
    });
}

fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.confirm_with_message(message).ok())
        .unwrap_or(false)
}

fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}
