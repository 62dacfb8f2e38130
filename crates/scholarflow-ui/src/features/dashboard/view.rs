//! Dashboard page view.

use crate::components::atoms::EmptyState;
use crate::components::daisy::{Badge, Button, Card, DaisyColor, DaisySize, DaisyVariant, Progress};
use crate::components::page::PageProps;
use crate::core::store::AppStore;
use crate::features::dashboard::state::{
    compact_count, continue_reading, library_stats, recent_papers,
};
use crate::models::Paper;
use yew::prelude::*;
use yewdux::prelude::use_selector;

const RECENT_LIMIT: usize = 3;

#[function_component(DashboardPage)]
pub(crate) fn dashboard_page(props: &PageProps) -> Html {
    let library = use_selector(|store: &AppStore| store.library.clone());
    let stats = library_stats(&library);
    let recent = recent_papers(&library, RECENT_LIMIT);
    let reading = continue_reading(&library);

    let go = |path: &'static str| {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(path.to_string()))
    };

    html! {
        <div class="space-y-6">
            <section class="grid gap-4 sm:grid-cols-2 xl:grid-cols-4">
                <StatCard label="Papers" value={stats.total.to_string()} icon="lucide--library" />
                <StatCard label="Bookmarked" value={stats.bookmarked.to_string()} icon="lucide--bookmark" />
                <StatCard label="In progress" value={stats.in_progress.to_string()} icon="lucide--book-open" />
                <StatCard label="Citations" value={compact_count(stats.total_citations)} icon="lucide--quote" />
            </section>

            <Card title="Reading progress" subtitle="Average across your library">
                <Progress
                    value={f64::from(stats.average_progress)}
                    tone={DaisyColor::Primary}
                    label={AttrValue::from(format!("{} of {} papers finished", stats.completed, stats.total))}
                />
            </Card>

            <div class="grid gap-4 lg:grid-cols-2">
                <Card
                    title="Recently added"
                    actions={html! {
                        <Button size={DaisySize::Sm} variant={DaisyVariant::Ghost} onclick={go("/papers")}>
                            {"View library"}
                        </Button>
                    }}
                >
                    if recent.is_empty() {
                        <EmptyState title="No papers yet" description="Upload a PDF to start your library.">
                            <Button tone={DaisyColor::Primary} onclick={go("/upload")}>{"Upload paper"}</Button>
                        </EmptyState>
                    } else {
                        <ul class="divide-y divide-base-200">
                            {for recent.iter().map(paper_row)}
                        </ul>
                    }
                </Card>

                <Card title="Continue reading">
                    if reading.is_empty() {
                        <EmptyState title="Nothing in progress" />
                    } else {
                        <ul class="space-y-3">
                            {for reading.iter().map(|paper| html! {
                                <li key={paper.id.to_string()}>
                                    <p class="truncate text-sm font-medium">{paper.title.clone()}</p>
                                    <Progress
                                        value={f64::from(paper.reading_progress)}
                                        tone={DaisyColor::Accent}
                                        class="progress-sm"
                                    />
                                </li>
                            })}
                        </ul>
                    }
                </Card>
            </div>

            <div class="flex flex-wrap gap-2">
                <Button tone={DaisyColor::Primary} onclick={go("/upload")}>
                    <span class="iconify lucide--upload size-4"></span>
                    {"Upload paper"}
                </Button>
                <Button variant={DaisyVariant::Outline} onclick={go("/discover")}>
                    <span class="iconify lucide--compass size-4"></span>
                    {"Discover"}
                </Button>
            </div>
        </div>
    }
}

fn paper_row(paper: &Paper) -> Html {
    html! {
        <li key={paper.id.to_string()} class="flex items-center justify-between gap-3 py-2">
            <div class="min-w-0">
                <p class="truncate text-sm font-medium">{paper.title.clone()}</p>
                <p class="truncate text-xs text-base-content/60">
                    {format!("{} · {} {}", paper.byline(), paper.venue, paper.year)}
                </p>
            </div>
            <Badge size={DaisySize::Sm} variant={DaisyVariant::Soft} tone={DaisyColor::Neutral}>
                {paper.added_on.format("%b %d").to_string()}
            </Badge>
        </li>
    }
}

#[derive(Properties, PartialEq)]
struct StatCardProps {
    label: AttrValue,
    value: AttrValue,
    icon: &'static str,
}

#[function_component(StatCard)]
fn stat_card(props: &StatCardProps) -> Html {
    html! {
        <div class="stat rounded-box bg-base-100 shadow-sm">
            <div class="stat-figure text-primary">
                <span class={classes!("iconify", props.icon, "size-6")}></span>
            </div>
            <div class="stat-title">{props.label.clone()}</div>
            <div class="stat-value text-2xl">{props.value.clone()}</div>
        </div>
    }
}
