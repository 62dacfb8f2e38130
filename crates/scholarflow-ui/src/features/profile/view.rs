//! Profile page view.
//!
//! # Design
//! - Edits go to a local draft; the store only changes when the draft is saved.
//! - The completeness score tracks the draft so it moves while typing.

use crate::components::daisy::{Button, Card, DaisyColor, DaisySize, Progress};
use crate::components::page::{PageProps, use_ui_config};
use crate::core::store::AppStore;
use crate::features::profile::logic::{completeness, optional_text, parse_interests};
use crate::features::upload::logic::{FileMeta, avatar_data_url, avatar_mime, validate_avatar};
use crate::models::{Profile, ToastKind};
use gloo::console;
use gloo::file::callbacks::{FileReader, read_as_bytes};
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;
use yewdux::prelude::use_store;

#[function_component(ProfilePage)]
pub(crate) fn profile_page(props: &PageProps) -> Html {
    let config = use_ui_config();
    let (store, dispatch) = use_store::<AppStore>();
    let draft = use_state(|| store.profile.clone());
    let interests_text = use_state(|| store.profile.interests.join(", "));
    let saving = use_state(|| false);
    let reader = use_mut_ref(|| None as Option<FileReader>);

    let scored = Profile {
        interests: parse_interests(&interests_text),
        ..(*draft).clone()
    };
    let score = completeness(&scored);

    let edit = |apply: fn(&mut Profile, String)| {
        let draft = draft.clone();
        Callback::from(move |value: String| {
            let mut next = (*draft).clone();
            apply(&mut next, value);
            draft.set(next);
        })
    };
    let on_name = edit(|profile, value| profile.name = value);
    let on_affiliation = edit(|profile, value| profile.affiliation = value);
    let on_bio = edit(|profile, value| profile.bio = value);
    let on_orcid = edit(|profile, value| profile.orcid = optional_text(&value));
    let on_website = edit(|profile, value| profile.website = optional_text(&value));
    let on_interests = {
        let interests_text = interests_text.clone();
        Callback::from(move |value: String| interests_text.set(value))
    };

    let on_avatar = {
        let draft = draft.clone();
        let on_show_toast = props.on_show_toast.clone();
        let limit = config.max_avatar_bytes;
        Callback::from(move |event: Event| {
            let Some(input) = event.target_dyn_into::<HtmlInputElement>() else {
                return;
            };
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };
            input.set_value("");
            let file = gloo::file::File::from(file);
            let meta = FileMeta {
                name: file.name(),
                mime: file.raw_mime_type(),
                size: file.size(),
            };
            if let Err(err) = validate_avatar(&meta, limit) {
                on_show_toast.emit((ToastKind::Error, err.user_message()));
                return;
            }
            let draft = draft.clone();
            let on_show_toast = on_show_toast.clone();
            let mime = avatar_mime(&meta);
            let task = read_as_bytes(&file, move |result| match result {
                Ok(bytes) => {
                    let mut next = (*draft).clone();
                    next.avatar_url = Some(avatar_data_url(&mime, &bytes));
                    draft.set(next);
                }
                Err(err) => {
                    console::error!("avatar read failed", err.to_string());
                    on_show_toast.emit((ToastKind::Error, "Could not read that image.".to_string()));
                }
            });
            *reader.borrow_mut() = Some(task);
        })
    };
    let on_remove_avatar = {
        let draft = draft.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*draft).clone();
            next.avatar_url = None;
            draft.set(next);
        })
    };
    let on_save = {
        let profile = scored.clone();
        let saving = saving.clone();
        let on_show_toast = props.on_show_toast.clone();
        let delay = config.save_delay_ms;
        Callback::from(move |_: MouseEvent| {
            saving.set(true);
            let profile = profile.clone();
            let saving = saving.clone();
            let dispatch = dispatch.clone();
            let on_show_toast = on_show_toast.clone();
            spawn_local(async move {
                TimeoutFuture::new(delay).await;
                dispatch.reduce_mut(|store| store.profile = profile);
                saving.set(false);
                on_show_toast.emit((ToastKind::Success, "Profile saved".to_string()));
            });
        })
    };

    html! {
        <div class="grid gap-6 lg:grid-cols-3">
            <Card title="Researcher profile" class="lg:col-span-2">
                <div class="flex items-center gap-4">
                    <div class="avatar">
                        <div class="w-20 rounded-full bg-base-200">
                            if let Some(src) = draft.avatar_url.clone() {
                                <img src={src} alt="Profile photo" />
                            } else {
                                <span class="iconify lucide--user size-20 opacity-40"></span>
                            }
                        </div>
                    </div>
                    <div class="flex flex-col gap-2">
                        <input
                            type="file"
                            accept="image/png,image/jpeg,image/webp"
                            class="file-input file-input-sm"
                            aria-label="Upload profile photo"
                            onchange={on_avatar}
                        />
                        if draft.avatar_url.is_some() {
                            <Button size={DaisySize::Xs} tone={DaisyColor::Error} onclick={on_remove_avatar}>
                                {"Remove photo"}
                            </Button>
                        }
                    </div>
                </div>
                <div class="grid gap-3 md:grid-cols-2">
                    <TextField label="Full name" value={draft.name.clone()} oninput={on_name} />
                    <TextField label="Affiliation" value={draft.affiliation.clone()} oninput={on_affiliation} />
                    <TextField label="ORCID iD" value={draft.orcid.clone().unwrap_or_default()} placeholder="0000-0000-0000-0000" oninput={on_orcid} />
                    <TextField label="Website" value={draft.website.clone().unwrap_or_default()} placeholder="https://" oninput={on_website} />
                </div>
                <TextField label="Research interests" value={(*interests_text).clone()} placeholder="Comma separated" oninput={on_interests} />
                <BioField value={draft.bio.clone()} oninput={on_bio} />
                <div class="flex justify-end">
                    <Button tone={DaisyColor::Primary} loading={*saving} disabled={*saving} onclick={on_save}>
                        {"Save profile"}
                    </Button>
                </div>
            </Card>

            <Card title="Profile completeness">
                <Progress
                    value={f64::from(score.percent)}
                    tone={if score.percent == 100 { DaisyColor::Success } else { DaisyColor::Warning }}
                    label={AttrValue::from(format!("{}% complete", score.percent))}
                />
                <p class="text-2xl font-bold">{format!("{}%", score.percent)}</p>
                if score.missing.is_empty() {
                    <p class="text-sm text-success">{"Your profile is complete."}</p>
                } else {
                    <ul class="list-disc pl-5 text-sm">
                        {for score.missing.iter().map(|field| html! {
                            <li key={field.label()}>{format!("{} (+{}%)", field.label(), field.weight())}</li>
                        })}
                    </ul>
                }
            </Card>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct TextFieldProps {
    label: AttrValue,
    value: AttrValue,
    #[prop_or_default]
    placeholder: Option<AttrValue>,
    oninput: Callback<String>,
}

#[function_component(TextField)]
fn text_field(props: &TextFieldProps) -> Html {
    let oninput = props.oninput.reform(|event: InputEvent| {
        event
            .target_dyn_into::<HtmlInputElement>()
            .map(|input| input.value())
            .unwrap_or_default()
    });
    html! {
        <label class="form-control w-full">
            <span class="label-text mb-1">{props.label.clone()}</span>
            <input
                class="input input-bordered w-full"
                value={props.value.clone()}
                placeholder={props.placeholder.clone()}
                oninput={oninput}
            />
        </label>
    }
}

#[derive(Properties, PartialEq)]
struct BioFieldProps {
    value: AttrValue,
    oninput: Callback<String>,
}

#[function_component(BioField)]
fn bio_field(props: &BioFieldProps) -> Html {
    let oninput = props.oninput.reform(|event: InputEvent| {
        event
            .target_dyn_into::<HtmlTextAreaElement>()
            .map(|area| area.value())
            .unwrap_or_default()
    });
    html! {
        <label class="form-control w-full">
            <span class="label-text mb-1">{"Bio"}</span>
            <textarea
                class="textarea textarea-bordered h-28 w-full"
                value={props.value.clone()}
                oninput={oninput}
            />
        </label>
    }
}
