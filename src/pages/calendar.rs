use chrono::{Datelike, Local, NaiveDate};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::icons::{icon_chevron_left, icon_chevron_right};
use crate::hooks::use_api;
use crate::models::{TrendPeriod, TrendPoint};
use crate::services::transactions;
use crate::util::{format_amount, month_name};

const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

pub(crate) fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|d| d.pred_opt())
        .map(|d| d.day())
        .unwrap_or(30)
}

/// Sunday-based column of the first day of the month.
pub(crate) fn first_weekday_offset(year: i32, month: u32) -> u32 {
    NaiveDate::from_ymd_opt(year, month, 1)
        .map(|d| d.weekday().num_days_from_sunday())
        .unwrap_or(0)
}

/// Leading blanks for alignment, then the day numbers.
pub(crate) fn month_grid(year: i32, month: u32) -> Vec<Option<u32>> {
    let offset = first_weekday_offset(year, month);
    let days = days_in_month(year, month);
    let mut cells = vec![None; offset as usize];
    cells.extend((1..=days).map(Some));
    cells
}

pub(crate) fn day_key(year: i32, month: u32, day: u32) -> String {
    format!("{:04}-{:02}-{:02}", year, month, day)
}

pub(crate) fn prev_month(year: i32, month: u32) -> (i32, u32) {
    if month == 1 {
        (year - 1, 12)
    } else {
        (year, month - 1)
    }
}

pub(crate) fn next_month(year: i32, month: u32) -> (i32, u32) {
    if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    }
}

#[function_component(CalendarPage)]
pub fn calendar_page() -> Html {
    let api = use_api();

    let cursor = use_state(|| {
        let now = Local::now();
        (now.year(), now.month())
    });
    let data = use_state(Vec::<TrendPoint>::new);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);

    {
        let api = api.clone();
        let data = data.clone();
        let loading = loading.clone();
        let error = error.clone();
        use_effect_with_deps(
            move |(year, month): &(i32, u32)| {
                let year = *year;
                let month = *month;
                spawn_local(async move {
                    loading.set(true);
                    match transactions::trends(&api, TrendPeriod::Daily, year, Some(month)).await {
                        Ok(points) => {
                            data.set(points);
                            error.set(None);
                        }
                        Err(err) => error.set(Some(err.to_string())),
                    }
                    loading.set(false);
                });
                || ()
            },
            *cursor,
        );
    }

    let (year, month) = *cursor;

    let on_prev = {
        let cursor = cursor.clone();
        Callback::from(move |_| {
            let (year, month) = *cursor;
            cursor.set(prev_month(year, month));
        })
    };
    let on_next = {
        let cursor = cursor.clone();
        Callback::from(move |_| {
            let (year, month) = *cursor;
            cursor.set(next_month(year, month));
        })
    };

    let today = Local::now().date_naive();
    let cells = month_grid(year, month);

    html! {
        <div class="p-6 max-w-7xl mx-auto flex flex-col h-full">
            <div class="flex items-center justify-between pb-4">
                <h1 class="text-2xl font-bold text-foreground">{"Calendar"}</h1>
                <div class="flex items-center gap-4 bg-card p-2 rounded-xl border border-border">
                    <button onclick={on_prev} class="p-2 hover:bg-secondary rounded-lg transition-colors text-foreground" aria-label="Previous month">
                        { icon_chevron_left() }
                    </button>
                    <span class="text-lg font-medium w-40 text-center text-foreground">
                        { format!("{} {}", month_name(month), year) }
                    </span>
                    <button onclick={on_next} class="p-2 hover:bg-secondary rounded-lg transition-colors text-foreground" aria-label="Next month">
                        { icon_chevron_right() }
                    </button>
                </div>
            </div>

            if let Some(msg) = &*error {
                <div class="bg-red-50 border border-red-200 text-red-600 px-4 py-3 rounded-lg text-sm mb-4">{ msg.clone() }</div>
            }

            <div class="flex-1 bg-card rounded-2xl shadow-sm border border-border flex flex-col overflow-hidden">
                <div class="grid grid-cols-7 border-b border-border">
                    { for WEEKDAYS.iter().map(|day| html! {
                        <div class="p-4 text-center text-sm font-semibold text-muted-foreground">{ *day }</div>
                    }) }
                </div>

                <div class="grid grid-cols-7 flex-1 auto-rows-fr">
                    { for cells.iter().map(|cell| {
                        match cell {
                            None => html! {
                                <div class="border-b border-r border-border bg-secondary/40 min-h-[100px]"></div>
                            },
                            Some(day) => {
                                let key = day_key(year, month, *day);
                                let point = data.iter().find(|p| p.period == key);
                                let is_today = NaiveDate::from_ymd_opt(year, month, *day)
                                    .map(|d| d == today)
                                    .unwrap_or(false);
                                let day_class = if is_today {
                                    "text-sm font-medium inline-flex w-7 h-7 items-center justify-center rounded-full bg-primary text-primary-foreground"
                                } else {
                                    "text-sm font-medium inline-flex w-7 h-7 items-center justify-center rounded-full text-muted-foreground"
                                };
                                let chips = match point {
                                    Some(point) if !*loading => html! {
                                        <div class="mt-2 space-y-1 text-xs">
                                            if point.income > 0.0 {
                                                <div class="text-green-700 font-medium px-1.5 py-0.5 bg-green-100 rounded truncate">
                                                    { format!("+{}", format_amount(point.income)) }
                                                </div>
                                            }
                                            if point.expense > 0.0 {
                                                <div class="text-red-600 font-medium px-1.5 py-0.5 bg-red-100 rounded truncate">
                                                    { format!("-{}", format_amount(point.expense)) }
                                                </div>
                                            }
                                        </div>
                                    },
                                    _ => html! {},
                                };
                                html! {
                                    <div class="border-b border-r border-border p-2 min-h-[100px] hover:bg-secondary/40 transition-colors">
                                        <span class={day_class}>{ *day }</span>
                                        { chips }
                                    </div>
                                }
                            }
                        }
                    }) }
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn february_respects_leap_years() {
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2025, 2), 28);
        assert_eq!(days_in_month(2024, 12), 31);
    }

    #[test]
    fn first_weekday_offset_is_sunday_based() {
        // 2025-03-01 is a Saturday, 2025-06-01 is a Sunday.
        assert_eq!(first_weekday_offset(2025, 3), 6);
        assert_eq!(first_weekday_offset(2025, 6), 0);
    }

    #[test]
    fn grid_pads_leading_blanks_then_counts_days() {
        let grid = month_grid(2025, 3);
        assert_eq!(grid.len(), 6 + 31);
        assert_eq!(grid[..6], vec![None; 6]);
        assert_eq!(grid[6], Some(1));
        assert_eq!(grid.last().copied().flatten(), Some(31));
    }

    #[test]
    fn day_keys_are_zero_padded_iso_dates() {
        assert_eq!(day_key(2025, 3, 5), "2025-03-05");
        assert_eq!(day_key(2025, 11, 30), "2025-11-30");
    }

    #[test]
    fn month_cursor_wraps_across_year_boundaries() {
        assert_eq!(prev_month(2025, 1), (2024, 12));
        assert_eq!(next_month(2025, 12), (2026, 1));
        assert_eq!(prev_month(2025, 7), (2025, 6));
        assert_eq!(next_month(2025, 7), (2025, 8));
    }
}
