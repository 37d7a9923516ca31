use chrono::NaiveDate;
use gloo_timers::callback::Interval;
use leptos::*;

use crate::utils::time::format_day_month_year;

const SLIDE_INTERVAL_MS: u32 = 5_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slide {
    pub image_url: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
}

/// Demo photo shown in the public gallery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GalleryItem {
    pub image_url: &'static str,
    pub activity: &'static str,
    pub village: &'static str,
    pub date: &'static str,
}

pub const SLIDES: [Slide; 3] = [
    Slide {
        image_url: "https://picsum.photos/id/1018/1600/600",
        title: "Empowering Villages",
        subtitle: "Field activities across Vikarabad district.",
    },
    Slide {
        image_url: "https://picsum.photos/id/1019/1600/600",
        title: "Sustainable Agriculture",
        subtitle: "Monitoring soil health and irrigation practices.",
    },
    Slide {
        image_url: "https://picsum.photos/id/1020/1600/600",
        title: "Community Engagement",
        subtitle: "Stakeholder meetings at the grassroots level.",
    },
];

pub const GALLERY: [GalleryItem; 6] = [
    GalleryItem { image_url: "https://picsum.photos/id/10/400/300", activity: "Soil Testing", village: "Mominpet", date: "2024-03-15" },
    GalleryItem { image_url: "https://picsum.photos/id/11/400/300", activity: "Training Session", village: "Vikarabad", date: "2024-03-12" },
    GalleryItem { image_url: "https://picsum.photos/id/12/400/300", activity: "Plantation", village: "Pargi", date: "2024-03-10" },
    GalleryItem { image_url: "https://picsum.photos/id/13/400/300", activity: "Meeting", village: "Tandur", date: "2024-03-08" },
    GalleryItem { image_url: "https://picsum.photos/id/14/400/300", activity: "Survey", village: "Dharur", date: "2024-03-05" },
    GalleryItem { image_url: "https://picsum.photos/id/15/400/300", activity: "Soil Testing", village: "Pargi", date: "2024-03-01" },
];

const HIGHLIGHTS: [(&str, &str, &str); 4] = [
    ("Villages Covered", "45+", "fa-map-marker-alt"),
    ("Active Staff", "120+", "fa-users"),
    ("Work Hours Logged", "12k+", "fa-clock"),
    ("Projects Completed", "85", "fa-check-circle"),
];

/// Empty filters match everything.
pub fn filter_gallery(items: &[GalleryItem], village: &str, activity: &str) -> Vec<GalleryItem> {
    items
        .iter()
        .filter(|item| village.is_empty() || item.village == village)
        .filter(|item| activity.is_empty() || item.activity == activity)
        .copied()
        .collect()
}

/// Distinct values in first-seen order, for the filter dropdowns.
pub fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen = Vec::new();
    for value in values {
        if !seen.contains(&value) {
            seen.push(value);
        }
    }
    seen
}

fn display_date(raw: &str) -> String {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map(format_day_month_year)
        .unwrap_or_else(|_| raw.to_string())
}

#[component]
pub fn HomePage() -> impl IntoView {
    let current_slide = create_rw_signal(0usize);
    let village_filter = create_rw_signal(String::new());
    let activity_filter = create_rw_signal(String::new());

    create_effect(move |_| {
        let rotation = Interval::new(SLIDE_INTERVAL_MS, move || {
            current_slide.update(|i| *i = (*i + 1) % SLIDES.len())
        });
        on_cleanup(move || drop(rotation));
    });

    let gallery = move || {
        filter_gallery(&GALLERY, &village_filter.get(), &activity_filter.get())
    };
    let villages = distinct(GALLERY.iter().map(|i| i.village));
    let activities = distinct(GALLERY.iter().map(|i| i.activity));

    view! {
        <div class="bg-slate-50">
            <section class="relative h-[400px] sm:h-[600px] overflow-hidden">
                {SLIDES
                    .iter()
                    .enumerate()
                    .map(|(index, slide)| {
                        view! {
                            <div class=move || {
                                if current_slide.get() == index {
                                    "absolute inset-0 transition-opacity duration-1000 opacity-100"
                                } else {
                                    "absolute inset-0 transition-opacity duration-1000 opacity-0"
                                }
                            }>
                                <div class="absolute inset-0 bg-black/40 z-10"></div>
                                <img src=slide.image_url alt=slide.title class="w-full h-full object-cover"/>
                                <div class="absolute inset-0 flex flex-col items-center justify-center text-white z-20 px-4 text-center">
                                    <h1 class="text-4xl sm:text-6xl font-extrabold mb-4">{slide.title}</h1>
                                    <p class="text-lg sm:text-xl max-w-2xl">{slide.subtitle}</p>
                                    <a href="/login" class="mt-8 px-8 py-3 bg-indigo-600 hover:bg-indigo-700 rounded-full font-bold">
                                        "Staff Login"
                                    </a>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
                <div class="absolute bottom-6 left-1/2 -translate-x-1/2 flex space-x-2 z-30">
                    {(0..SLIDES.len())
                        .map(|index| {
                            view! {
                                <button
                                    class=move || {
                                        if current_slide.get() == index {
                                            "w-3 h-3 rounded-full bg-white"
                                        } else {
                                            "w-3 h-3 rounded-full bg-white/40"
                                        }
                                    }
                                    on:click=move |_| current_slide.set(index)
                                ></button>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="max-w-7xl mx-auto px-4 py-16">
                <div class="grid grid-cols-2 md:grid-cols-4 gap-8 text-center">
                    {HIGHLIGHTS
                        .iter()
                        .map(|(label, value, icon)| {
                            view! {
                                <div class="bg-white p-6 rounded-2xl shadow-sm border">
                                    <div class="text-indigo-600 mb-4 text-2xl">
                                        <i class=format!("fas {icon}")></i>
                                    </div>
                                    <div class="text-3xl font-bold text-slate-900">{*value}</div>
                                    <div class="text-sm text-slate-500 font-medium">{*label}</div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section id="gallery" class="max-w-7xl mx-auto px-4 py-16">
                <div class="flex flex-col md:flex-row md:items-end justify-between mb-8 gap-4">
                    <div>
                        <h2 class="text-3xl font-bold text-slate-900">"Field Gallery"</h2>
                        <p class="text-slate-500 mt-2">"Glimpses of activities from our field teams."</p>
                    </div>
                    <div class="flex flex-wrap gap-4">
                        <select
                            class="px-4 py-2 bg-white border rounded-lg text-sm"
                            on:change=move |ev| village_filter.set(event_target_value(&ev))
                        >
                            <option value="">"All Villages"</option>
                            {villages
                                .into_iter()
                                .map(|v| view! { <option value=v>{v}</option> })
                                .collect_view()}
                        </select>
                        <select
                            class="px-4 py-2 bg-white border rounded-lg text-sm"
                            on:change=move |ev| activity_filter.set(event_target_value(&ev))
                        >
                            <option value="">"All Activities"</option>
                            {activities
                                .into_iter()
                                .map(|a| view! { <option value=a>{a}</option> })
                                .collect_view()}
                        </select>
                    </div>
                </div>
                <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-6">
                    {move || {
                        gallery()
                            .into_iter()
                            .map(|item| {
                                view! {
                                    <div class="group relative overflow-hidden rounded-2xl bg-white border shadow-sm">
                                        <div class="aspect-[4/3] overflow-hidden">
                                            <img src=item.image_url alt=item.activity class="w-full h-full object-cover"/>
                                        </div>
                                        <div class="p-4">
                                            <div class="flex justify-between items-start mb-2">
                                                <h3 class="font-bold text-slate-900">{item.activity}</h3>
                                                <span class="text-xs bg-indigo-50 text-indigo-700 px-2 py-1 rounded font-semibold uppercase">
                                                    {item.village}
                                                </span>
                                            </div>
                                            <div class="flex items-center text-xs text-slate-500">
                                                <i class="far fa-calendar-alt mr-2"></i>
                                                {display_date(item.date)}
                                            </div>
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </section>
        </div>
    }
}
