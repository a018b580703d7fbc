use crate::calendar::{date_key, day_name, format_display_date};
use crate::catalog::{ChecklistItem, MEALS, OPTIONAL, SKINCARE_MORNING, SKINCARE_NIGHT, SKINCARE_WEEKLY};
use crate::models::{Category, DayRecord, Store};
use crate::progress::{percentage, DayContext};
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ItemView {
    pub id: &'static str,
    pub label: &'static str,
    pub group: Option<&'static str>,
    pub done: bool,
}

#[derive(Debug, Serialize)]
pub struct WorkoutView {
    pub day: u8,
    pub title: &'static str,
    pub exercises: Vec<ItemView>,
}

#[derive(Debug, Serialize)]
pub struct SkincareView {
    pub morning: Vec<ItemView>,
    pub night: Vec<ItemView>,
    pub weekly: Vec<ItemView>,
}

#[derive(Debug, Serialize, Default, PartialEq, Eq)]
pub struct ProgressView {
    pub meals: u32,
    pub workouts: u32,
    pub optional: u32,
    pub skincare: u32,
}

#[derive(Debug, Serialize)]
pub struct DaySummary {
    pub date: String,
    pub display_date: String,
    pub day_name: &'static str,
    pub is_sunday: bool,
    pub rest_day: bool,
    pub workout: Option<WorkoutView>,
    pub meals: Vec<ItemView>,
    pub optional: Vec<ItemView>,
    pub skincare: SkincareView,
    pub progress: ProgressView,
}

pub fn build_summary(date: NaiveDate, store: &Store) -> DaySummary {
    let key = date_key(date);
    let record = store.record_for(&key);
    build_summary_from(&DayContext::for_date(date), key, &record)
}

fn build_summary_from(ctx: &DayContext, key: String, record: &DayRecord) -> DaySummary {
    let views = |category: Category, items: &'static [ChecklistItem]| -> Vec<ItemView> {
        items
            .iter()
            .map(|item| ItemView {
                id: item.id,
                label: item.label,
                group: item.group,
                done: record.is_done(category, item.id),
            })
            .collect()
    };

    let workout = ctx.plan.map(|plan| WorkoutView {
        day: plan.id,
        title: plan.title,
        exercises: views(Category::Workouts, plan.exercises),
    });

    let weekly = if ctx.is_sunday() {
        views(Category::Skincare, SKINCARE_WEEKLY)
    } else {
        Vec::new()
    };

    DaySummary {
        date: key,
        display_date: format_display_date(ctx.date),
        day_name: day_name(ctx.weekday),
        is_sunday: ctx.is_sunday(),
        rest_day: ctx.is_rest_day(),
        workout,
        meals: views(Category::Meals, MEALS),
        optional: views(Category::Optional, OPTIONAL),
        skincare: SkincareView {
            morning: views(Category::Skincare, SKINCARE_MORNING),
            night: views(Category::Skincare, SKINCARE_NIGHT),
            weekly,
        },
        progress: ProgressView {
            meals: percentage(Category::Meals, ctx, record),
            workouts: percentage(Category::Workouts, ctx, record),
            optional: percentage(Category::Optional, ctx, record),
            skincare: percentage(Category::Skincare, ctx, record),
        },
    }
}
