//! Collaborators page view.

use crate::components::atoms::{EmptyState, SearchInput};
use crate::components::daisy::{Badge, Button, DaisyColor, DaisySize, DaisyVariant};
use crate::components::page::PageProps;
use crate::core::store::AppStore;
use crate::features::collaborators::logic::{filter_collaborators, initials, toggle_follow};
use crate::models::{Collaborator, ToastKind};
use uuid::Uuid;
use yew::prelude::*;
use yewdux::prelude::use_store;

#[function_component(CollaboratorsPage)]
pub(crate) fn collaborators_page(props: &PageProps) -> Html {
    let (store, dispatch) = use_store::<AppStore>();
    let query = use_state(String::new);
    let rows = filter_collaborators(&store.collaborators, &query);

    let on_search = {
        let query = query.clone();
        Callback::from(move |value: String| query.set(value))
    };
    let on_follow = {
        let on_show_toast = props.on_show_toast.clone();
        let dispatch = dispatch.clone();
        Callback::from(move |(id, name): (Uuid, String)| {
            let mut following = None;
            dispatch.reduce_mut(|store| following = toggle_follow(&mut store.collaborators, id));
            if let Some(following) = following {
                let message = if following {
                    format!("Following {name}")
                } else {
                    format!("Unfollowed {name}")
                };
                on_show_toast.emit((ToastKind::Info, message));
            }
        })
    };
    let on_settings = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit("/settings".to_string()))
    };

    html! {
        <div class="space-y-4">
            <div class="flex flex-wrap items-center justify-between gap-3">
                <SearchInput
                    value={AttrValue::from((*query).clone())}
                    placeholder="Search by name or institution"
                    class="w-full md:w-80"
                    on_search={on_search}
                />
                <Button size={DaisySize::Sm} variant={DaisyVariant::Outline} onclick={on_settings}>
                    <span class="iconify lucide--user-plus size-4"></span>
                    {"Invite to workspace"}
                </Button>
            </div>
            if rows.is_empty() {
                <EmptyState title="No collaborators found" />
            } else {
                <div class="grid gap-4 md:grid-cols-2 xl:grid-cols-3">
                    {for rows.iter().map(|person| collaborator_card(person, &on_follow))}
                </div>
            }
        </div>
    }
}

fn collaborator_card(person: &Collaborator, on_follow: &Callback<(Uuid, String)>) -> Html {
    let payload = (person.id, person.name.clone());
    let follow = on_follow.reform(move |_: MouseEvent| payload.clone());
    html! {
        <div key={person.id.to_string()} class="card bg-base-100 shadow-sm">
            <div class="card-body flex-row items-center gap-4">
                <div class="avatar avatar-placeholder">
                    <div class="w-12 rounded-full bg-neutral text-neutral-content">
                        <span>{initials(&person.name)}</span>
                    </div>
                </div>
                <div class="min-w-0 flex-1">
                    <p class="truncate font-medium">{person.name.clone()}</p>
                    <p class="truncate text-sm text-base-content/60">{person.affiliation.clone()}</p>
                    <Badge size={DaisySize::Xs} variant={DaisyVariant::Ghost}>
                        {format!("{} shared papers", person.shared_papers)}
                    </Badge>
                </div>
                <Button
                    size={DaisySize::Sm}
                    tone={DaisyColor::Primary}
                    variant={if person.is_following { DaisyVariant::Outline } else { DaisyVariant::Solid }}
                    onclick={follow}
                >
                    {if person.is_following { "Following" } else { "Follow" }}
                </Button>
            </div>
        </div>
    }
}
