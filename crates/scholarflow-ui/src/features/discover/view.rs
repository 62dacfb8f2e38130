//! Discover page view.

use crate::components::atoms::{EmptyState, SearchInput};
use crate::components::daisy::{Badge, Button, Card, DaisyColor, DaisySize, DaisyVariant, Progress};
use crate::components::page::PageProps;
use crate::core::store::{AppStore, DiscoverState};
use crate::features::discover::logic::{
    all_tags, filter_recommendations, growth_label, trending_sorted,
};
use crate::features::library::logic::scholar_search_url;
use crate::models::{Recommendation, ToastKind};
use yew::prelude::*;
use yewdux::prelude::use_selector;

#[function_component(DiscoverPage)]
pub(crate) fn discover_page(props: &PageProps) -> Html {
    let discover = use_selector(|store: &AppStore| store.discover.clone());
    let query = use_state(String::new);
    let topic = use_state(|| None as Option<String>);

    let DiscoverState {
        recommendations,
        trending,
    } = &*discover;
    let rows = filter_recommendations(recommendations, &query, topic.as_deref());
    let topics = trending_sorted(trending);
    let tags = all_tags(recommendations, trending);

    let on_search = {
        let query = query.clone();
        Callback::from(move |value: String| query.set(value))
    };
    let on_topic = {
        let topic = topic.clone();
        Callback::from(move |tag: String| {
            if topic.as_deref() == Some(tag.as_str()) {
                topic.set(None);
            } else {
                topic.set(Some(tag));
            }
        })
    };
    let on_save = {
        let on_show_toast = props.on_show_toast.clone();
        Callback::from(move |title: String| {
            on_show_toast.emit((ToastKind::Info, format!("Saved \"{title}\" for later")));
        })
    };

    html! {
        <div class="grid gap-6 xl:grid-cols-3">
            <section class="space-y-4 xl:col-span-2">
                <SearchInput
                    value={AttrValue::from((*query).clone())}
                    placeholder="Search recommendations"
                    on_search={on_search}
                />
                <div class="flex flex-wrap gap-2">
                    {for tags.into_iter().map(|tag| {
                        let active = topic.as_deref() == Some(tag.as_str());
                        let onclick = on_topic.reform({
                            let tag = tag.clone();
                            move |_: MouseEvent| tag.clone()
                        });
                        html! {
                            <Button
                                key={tag.clone()}
                                size={DaisySize::Xs}
                                variant={if active { DaisyVariant::Solid } else { DaisyVariant::Outline }}
                                tone={DaisyColor::Primary}
                                onclick={onclick}
                            >
                                {tag}
                            </Button>
                        }
                    })}
                </div>
                if rows.is_empty() {
                    <EmptyState title="No recommendations" description="Clear the topic filter to see everything." />
                } else {
                    {for rows.iter().map(|rec| recommendation_card(rec, &on_save))}
                }
            </section>

            <Card title="Trending topics" subtitle="Growth over the last month">
                <ul class="space-y-3">
                    {for topics.iter().map(|topic| {
                        let tone = if topic.growth_pct >= 0 { DaisyColor::Success } else { DaisyColor::Error };
                        html! {
                            <li key={topic.tag.clone()} class="flex items-center justify-between gap-2">
                                <div>
                                    <p class="font-medium">{topic.name.clone()}</p>
                                    <p class="text-xs text-base-content/60">{format!("{} papers", topic.papers)}</p>
                                </div>
                                <Badge tone={tone} variant={DaisyVariant::Soft}>{growth_label(topic.growth_pct)}</Badge>
                            </li>
                        }
                    })}
                </ul>
            </Card>
        </div>
    }
}

fn recommendation_card(rec: &Recommendation, on_save: &Callback<String>) -> Html {
    let title = rec.title.clone();
    let save = on_save.reform(move |_: MouseEvent| title.clone());
    html! {
        <article key={rec.id.to_string()} class="card bg-base-100 shadow-sm">
            <div class="card-body gap-2">
                <div class="flex items-start justify-between gap-3">
                    <h3 class="card-title text-base">{rec.title.clone()}</h3>
                    <Badge tone={DaisyColor::Accent}>{rec.topic.clone()}</Badge>
                </div>
                <p class="text-sm text-base-content/70">{rec.authors.join(", ")}</p>
                <p class="text-sm italic">{rec.reason.clone()}</p>
                <Progress
                    value={f64::from(rec.relevance)}
                    tone={DaisyColor::Secondary}
                    class="progress-xs"
                    label={AttrValue::from(format!("Relevance {}%", rec.relevance))}
                />
                <div class="card-actions justify-end">
                    <a class="btn btn-ghost btn-xs" href={scholar_search_url(&rec.title)} target="_blank" rel="noopener noreferrer">
                        {"Open"}
                    </a>
                    <Button size={DaisySize::Xs} tone={DaisyColor::Primary} variant={DaisyVariant::Soft} onclick={save}>
                        {"Save"}
                    </Button>
                </div>
            </div>
        </article>
    }
}
