//! Settings page view.
//!
//! # Design
//! - Theme and notification switches are controlled by the store.
//! - The invite form keeps its inputs local and reports refusals as toasts.

use crate::components::atoms::EmptyState;
use crate::components::daisy::{Badge, Button, Card, DaisyColor, DaisySize, DaisyVariant, Switch};
use crate::components::page::PageProps;
use crate::core::store::AppStore;
use crate::core::theme::ThemeMode;
use crate::features::settings::logic::{NotificationKind, invite, revoke};
use crate::models::{TeamRole, ToastKind};
use uuid::Uuid;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;
use yewdux::prelude::use_store;

#[function_component(SettingsPage)]
pub(crate) fn settings_page(props: &PageProps) -> Html {
    let (store, dispatch) = use_store::<AppStore>();
    let email = use_state(String::new);
    let role = use_state(|| TeamRole::Member);

    let on_theme = dispatch.reduce_mut_callback_with(|store, dark: bool| {
        store.prefs.theme = ThemeMode::from_prefers_dark(dark);
    });
    let on_sign_in_alerts = {
        let on_show_toast = props.on_show_toast.clone();
        Callback::from(move |enabled: bool| {
            let message = if enabled {
                "Sign-in alerts enabled"
            } else {
                "Sign-in alerts disabled"
            };
            on_show_toast.emit((ToastKind::Info, message.to_string()));
        })
    };
    let on_email = {
        let email = email.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                email.set(input.value());
            }
        })
    };
    let on_role = {
        let role = role.clone();
        Callback::from(move |event: Event| {
            let selected = event
                .target_dyn_into::<HtmlSelectElement>()
                .and_then(|select| TeamRole::from_value(&select.value()));
            if let Some(selected) = selected {
                role.set(selected);
            }
        })
    };
    let on_invite = {
        let email = email.clone();
        let role = role.clone();
        let dispatch = dispatch.clone();
        let on_show_toast = props.on_show_toast.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let mut outcome = None;
            dispatch.reduce_mut(|store| outcome = Some(invite(&mut store.team, &email, *role)));
            match outcome {
                Some(Ok(invitation)) => {
                    email.set(String::new());
                    on_show_toast.emit((
                        ToastKind::Success,
                        format!("Invitation sent to {}", invitation.email),
                    ));
                }
                Some(Err(err)) => on_show_toast.emit((ToastKind::Error, err.user_message())),
                None => {}
            }
        })
    };
    let on_revoke = dispatch.reduce_mut_callback_with(|store, id: Uuid| {
        revoke(&mut store.team, id);
    });

    html! {
        <div class="grid gap-6 lg:grid-cols-2">
            <Card title="Appearance" icon="lucide--palette">
                <Switch
                    label="Dark mode"
                    description="Switch between the light and dark reading themes."
                    checked={store.prefs.theme.is_dark()}
                    tone={DaisyColor::Primary}
                    onchange={on_theme}
                />
                <Switch
                    label="Sign-in alerts"
                    description="Tell me when my account is used on a new device."
                    onchange={on_sign_in_alerts}
                />
            </Card>

            <Card title="Notifications" icon="lucide--bell">
                {for NotificationKind::all().into_iter().map(|kind| {
                    let onchange = dispatch.reduce_mut_callback_with(move |store, value: bool| {
                        kind.set(&mut store.team.notifications, value);
                    });
                    html! {
                        <Switch
                            key={kind.label()}
                            label={kind.label()}
                            checked={kind.get(&store.team.notifications)}
                            tone={DaisyColor::Secondary}
                            onchange={onchange}
                        />
                    }
                })}
            </Card>

            <Card
                title="Team"
                icon="lucide--users"
                subtitle="Invite colleagues to your workspace"
                class="lg:col-span-2"
                header_action={html! {
                    <Badge variant={DaisyVariant::Soft} tone={DaisyColor::Neutral}>
                        {format!("{} members · {} pending", store.team.members.len(), store.team.invitations.len())}
                    </Badge>
                }}
            >
                <form class="flex flex-wrap items-end gap-3" onsubmit={on_invite}>
                    <label class="form-control grow">
                        <span class="label-text mb-1">{"Email"}</span>
                        <input
                            type="email"
                            class="input input-bordered w-full"
                            placeholder="colleague@university.edu"
                            value={(*email).clone()}
                            oninput={on_email}
                        />
                    </label>
                    <label class="form-control">
                        <span class="label-text mb-1">{"Role"}</span>
                        <select class="select select-bordered" onchange={on_role}>
                            {for TeamRole::invitable().into_iter().map(|option| html! {
                                <option value={option.as_str()} selected={option == *role}>{option.as_str()}</option>
                            })}
                        </select>
                    </label>
                    <button type="submit" class="btn btn-primary">{"Send invite"}</button>
                </form>

                <div class="grid gap-6 md:grid-cols-2">
                    <div>
                        <h4 class="mb-2 font-semibold">{"Members"}</h4>
                        <ul class="divide-y divide-base-200">
                            {for store.team.members.iter().map(|member| html! {
                                <li key={member.id.to_string()} class="flex items-center justify-between py-2">
                                    <div>
                                        <p class="font-medium">{member.name.clone()}</p>
                                        <p class="text-xs text-base-content/60">{member.email.clone()}</p>
                                    </div>
                                    <Badge tone={role_tone(member.role)} size={DaisySize::Md}>{member.role.as_str()}</Badge>
                                </li>
                            })}
                        </ul>
                    </div>
                    <div>
                        <h4 class="mb-2 font-semibold">{"Pending invitations"}</h4>
                        if store.team.invitations.is_empty() {
                            <EmptyState title="No pending invitations" />
                        } else {
                            <ul class="divide-y divide-base-200">
                                {for store.team.invitations.iter().map(|invitation| {
                                    let id = invitation.id;
                                    let onclick = on_revoke.reform(move |_: MouseEvent| id);
                                    html! {
                                        <li key={id.to_string()} class="flex items-center justify-between gap-2 py-2">
                                            <span class="truncate">{invitation.email.clone()}</span>
                                            <Badge tone={role_tone(invitation.role)} variant={DaisyVariant::Outline}>{invitation.role.as_str()}</Badge>
                                            <Button size={DaisySize::Xs} variant={DaisyVariant::Ghost} tone={DaisyColor::Error} onclick={onclick}>
                                                {"Revoke"}
                                            </Button>
                                        </li>
                                    }
                                })}
                            </ul>
                        }
                    </div>
                </div>
            </Card>
        </div>
    }
}

const fn role_tone(role: TeamRole) -> DaisyColor {
    match role {
        TeamRole::Owner => DaisyColor::Warning,
        TeamRole::Admin => DaisyColor::Info,
        TeamRole::Member => DaisyColor::Success,
        TeamRole::Viewer => DaisyColor::Neutral,
    }
}
