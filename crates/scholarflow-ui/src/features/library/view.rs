//! Library page view.
//!
//! # Design
//! - Toolbar filters are local `use_state`; the paper list itself comes from the store.
//! - Copy-link runs the clipboard write in a spawned future and reports through toasts.

use crate::app::browser;
use crate::components::atoms::{EmptyState, SearchInput};
use crate::components::daisy::{Badge, Button, DaisyColor, DaisySize, DaisyVariant, Progress, Switch};
use crate::components::page::{PageProps, use_ui_config};
use crate::core::store::AppStore;
use crate::features::library::logic::{
    LibraryFilter, SortKey, filter_papers, library_tags, paper_link, scholar_search_url,
    toggle_bookmark,
};
use crate::models::{Paper, ToastKind};
use uuid::Uuid;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlSelectElement;
use yew::prelude::*;
use yewdux::prelude::use_store;

#[function_component(LibraryPage)]
pub(crate) fn library_page(props: &PageProps) -> Html {
    let config = use_ui_config();
    let (store, dispatch) = use_store::<AppStore>();
    let filter = use_state(LibraryFilter::default);

    let rows = filter_papers(&store.library, &filter);
    let tags = library_tags(&store.library);

    let on_search = {
        let filter = filter.clone();
        Callback::from(move |query: String| {
            filter.set(LibraryFilter {
                query,
                ..(*filter).clone()
            });
        })
    };
    let on_sort = {
        let filter = filter.clone();
        Callback::from(move |event: Event| {
            let Some(select) = event.target_dyn_into::<HtmlSelectElement>() else {
                return;
            };
            filter.set(LibraryFilter {
                sort: SortKey::from_value(&select.value()),
                ..(*filter).clone()
            });
        })
    };
    let on_bookmarked_only = {
        let filter = filter.clone();
        Callback::from(move |bookmarked_only: bool| {
            filter.set(LibraryFilter {
                bookmarked_only,
                ..(*filter).clone()
            });
        })
    };
    let on_tag = {
        let filter = filter.clone();
        Callback::from(move |tag: Option<String>| {
            let tag = if tag == filter.tag { None } else { tag };
            filter.set(LibraryFilter {
                tag,
                ..(*filter).clone()
            });
        })
    };
    let on_bookmark = dispatch.reduce_mut_callback_with(|store, id: Uuid| {
        toggle_bookmark(&mut store.library, id);
    });
    let on_copy = {
        let on_show_toast = props.on_show_toast.clone();
        let origin = browser::location_origin().unwrap_or_else(|| config.share_origin.clone());
        Callback::from(move |id: Uuid| {
            let link = paper_link(&origin, id);
            let on_show_toast = on_show_toast.clone();
            spawn_local(async move {
                match browser::copy_text(&link).await {
                    Ok(()) => on_show_toast.emit((ToastKind::Success, "Link copied".to_string())),
                    Err(_) => on_show_toast.emit((
                        ToastKind::Error,
                        "Clipboard is not available in this browser.".to_string(),
                    )),
                }
            });
        })
    };
    let on_upload = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit("/upload".to_string()))
    };

    html! {
        <div class="space-y-4">
            <div class="flex flex-wrap items-center gap-3">
                <SearchInput
                    value={AttrValue::from(filter.query.clone())}
                    placeholder="Search title, author, venue or tag"
                    class="w-full md:w-80"
                    on_search={on_search}
                />
                <select class="select select-sm" aria-label="Sort" onchange={on_sort}>
                    {for SortKey::all().into_iter().map(|key| html! {
                        <option value={key.as_str()} selected={key == filter.sort}>{key.label()}</option>
                    })}
                </select>
                <Switch
                    label="Bookmarked only"
                    checked={filter.bookmarked_only}
                    tone={DaisyColor::Secondary}
                    onchange={on_bookmarked_only}
                />
                <div class="ml-auto">
                    <Button tone={DaisyColor::Primary} size={DaisySize::Sm} onclick={on_upload.clone()}>
                        <span class="iconify lucide--upload size-4"></span>
                        {"Upload"}
                    </Button>
                </div>
            </div>

            <div class="flex flex-wrap gap-2">
                {for tags.into_iter().map(|tag| {
                    let active = filter.tag.as_deref() == Some(tag.as_str());
                    let on_tag = on_tag.clone();
                    let value = tag.clone();
                    html! {
                        <button
                            key={tag.clone()}
                            type="button"
                            class={classes!("badge", "cursor-pointer", if active { "badge-primary" } else { "badge-ghost" })}
                            onclick={Callback::from(move |_: MouseEvent| on_tag.emit(Some(value.clone())))}
                        >
                            {tag}
                        </button>
                    }
                })}
            </div>

            if rows.is_empty() {
                <EmptyState title="No papers match" description="Try a different search or clear the filters.">
                    <Button variant={DaisyVariant::Outline} onclick={on_upload}>{"Upload a paper"}</Button>
                </EmptyState>
            } else {
                <div class="grid gap-4 lg:grid-cols-2">
                    {for rows.iter().map(|paper| paper_card(paper, &on_bookmark, &on_copy))}
                </div>
            }
        </div>
    }
}

fn paper_card(paper: &Paper, on_bookmark: &Callback<Uuid>, on_copy: &Callback<Uuid>) -> Html {
    let id = paper.id;
    let bookmark = on_bookmark.reform(move |_: MouseEvent| id);
    let copy = on_copy.reform(move |_: MouseEvent| id);
    let bookmark_icon = if paper.is_bookmarked {
        "lucide--bookmark-check"
    } else {
        "lucide--bookmark"
    };
    html! {
        <article key={id.to_string()} class="card bg-base-100 shadow-sm">
            <div class="card-body gap-3">
                <div class="flex items-start justify-between gap-2">
                    <div class="min-w-0">
                        <h3 class="card-title text-base">{paper.title.clone()}</h3>
                        <p class="text-sm text-base-content/70">{paper.byline()}</p>
                        <p class="text-xs text-base-content/60">
                            {format!("{} · {} · {} citations", paper.venue, paper.year, paper.citations)}
                        </p>
                    </div>
                    <Button
                        size={DaisySize::Xs}
                        variant={DaisyVariant::Ghost}
                        tone={if paper.is_bookmarked { Some(DaisyColor::Warning) } else { None }}
                        onclick={bookmark}
                    >
                        <span class={classes!("iconify", bookmark_icon, "size-4")}></span>
                    </Button>
                </div>
                <div class="flex flex-wrap gap-1">
                    {for paper.tags.iter().map(|tag| html! {
                        <Badge key={tag.clone()} variant={DaisyVariant::Outline}>{tag.clone()}</Badge>
                    })}
                </div>
                <Progress value={f64::from(paper.reading_progress)} tone={DaisyColor::Info} class="progress-sm" />
                <div class="card-actions justify-end">
                    <a
                        class="btn btn-ghost btn-xs"
                        href={scholar_search_url(&paper.title)}
                        target="_blank"
                        rel="noopener noreferrer"
                    >
                        {"Search Scholar"}
                    </a>
                    <Button size={DaisySize::Xs} variant={DaisyVariant::Soft} onclick={copy}>
                        <span class="iconify lucide--link size-4"></span>
                        {"Copy link"}
                    </Button>
                </div>
            </div>
        </article>
    }
}
