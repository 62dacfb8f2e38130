//! Upload page view.
//!
//! # Design
//! - Validation runs before the simulated transfer so refusals surface as toasts.
//! - The transfer is an `Interval` ticking an `UploadSession` reducer; completion adds
//!   the paper to the library slice.

use std::rc::Rc;

use crate::components::daisy::{Badge, Button, Card, DaisyColor, DaisySize, DaisyVariant, Progress};
use crate::components::page::{PageProps, use_ui_config};
use crate::core::store::AppStore;
use crate::features::upload::logic::{
    FileMeta, UploadSession, human_size, paper_from_upload, validate_paper,
};
use crate::models::ToastKind;
use gloo::console;
use gloo_timers::callback::Interval;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yewdux::prelude::use_store;

enum UploadAction {
    Start(FileMeta),
    Tick(u8),
    Reset,
}

#[derive(Clone, Default, PartialEq)]
struct UploadReducer {
    session: UploadSession,
}

impl Reducible for UploadReducer {
    type Action = UploadAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let session = match action {
            UploadAction::Start(file) => UploadSession::start(file),
            UploadAction::Tick(step) => self.session.tick(step),
            UploadAction::Reset => UploadSession::default(),
        };
        Rc::new(Self { session })
    }
}

#[function_component(UploadPage)]
pub(crate) fn upload_page(props: &PageProps) -> Html {
    let config = use_ui_config();
    let (_, dispatch) = use_store::<AppStore>();
    let upload = use_reducer(UploadReducer::default);
    let ticker = use_mut_ref(|| None as Option<Interval>);
    let session = upload.session.clone();

    {
        let ticker = ticker.clone();
        let on_show_toast = props.on_show_toast.clone();
        let dispatcher = upload.dispatcher();
        use_effect_with_deps(
            move |session: &UploadSession| {
                if session.is_complete() {
                    drop(ticker.borrow_mut().take());
                    if let Some(file) = &session.file {
                        let paper = paper_from_upload(file, chrono::Local::now().date_naive());
                        let title = paper.title.clone();
                        dispatch.reduce_mut(|store| store.library.insert(0, paper));
                        on_show_toast.emit((ToastKind::Success, format!("Uploaded \"{title}\"")));
                    }
                    dispatcher.dispatch(UploadAction::Reset);
                }
                || ()
            },
            session.clone(),
        );
    }
    {
        let ticker = ticker.clone();
        use_effect_with_deps(
            move |_| move || drop(ticker.borrow_mut().take()),
            (),
        );
    }

    let onchange = {
        let dispatcher = upload.dispatcher();
        let on_show_toast = props.on_show_toast.clone();
        let limit = config.max_paper_bytes;
        let tick_ms = config.upload_tick_ms;
        let step = config.upload_step_pct;
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
            if let Err(err) = validate_paper(&meta, limit) {
                console::warn!("upload refused", err.to_string());
                on_show_toast.emit((ToastKind::Error, err.user_message()));
                return;
            }
            dispatcher.dispatch(UploadAction::Start(meta));
            let tick = dispatcher.clone();
            *ticker.borrow_mut() = Some(Interval::new(tick_ms, move || {
                tick.dispatch(UploadAction::Tick(step));
            }));
        })
    };
    let on_library = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit("/papers".to_string()))
    };

    html! {
        <div class="mx-auto max-w-2xl space-y-4">
            <Card
                title="Upload a paper"
                icon="lucide--file-up"
                subtitle={AttrValue::from(format!("PDF only, up to {}", human_size(config.max_paper_bytes)))}
                header_action={html! {
                    <Badge tone={DaisyColor::Info} variant={DaisyVariant::Soft}>
                        {if session.is_active() { "Uploading" } else { "Ready" }}
                    </Badge>
                }}
            >
                <label class="flex cursor-pointer flex-col items-center gap-3 rounded-box border-2 border-dashed border-base-300 p-10 text-center hover:border-primary">
                    <span class="iconify lucide--file-up size-10 text-primary"></span>
                    <span class="font-medium">{"Choose a PDF to add to your library"}</span>
                    <input
                        type="file"
                        accept="application/pdf,.pdf"
                        class="file-input file-input-bordered file-input-sm"
                        disabled={session.is_active()}
                        onchange={onchange}
                    />
                </label>
                if let Some(file) = session.file.as_ref().filter(|_| session.is_active()) {
                    <div class="space-y-1">
                        <div class="flex justify-between text-sm">
                            <span class="truncate">{file.name.clone()}</span>
                            <span>{format!("{}%", session.percent)}</span>
                        </div>
                        <Progress
                            value={f64::from(session.percent)}
                            tone={DaisyColor::Success}
                            label={AttrValue::from(format!("Uploading {}", file.name))}
                        />
                    </div>
                }
            </Card>
            <div class="flex justify-end">
                <Button variant={DaisyVariant::Outline} size={DaisySize::Lg} onclick={on_library}>
                    {"Go to library"}
                </Button>
            </div>
        </div>
    }
}
