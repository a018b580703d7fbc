use crate::calendar::workout_plan_for;
use crate::catalog::{
    workout_plan, WorkoutPlan, MEALS, OPTIONAL, SKINCARE_MORNING, SKINCARE_NIGHT, SKINCARE_WEEKLY,
};
use crate::models::{Category, DayRecord};
use chrono::{Datelike, NaiveDate, Weekday};

#[derive(Debug, Clone, Copy)]
pub struct DayContext {
    pub date: NaiveDate,
    pub weekday: Weekday,
    pub plan: Option<&'static WorkoutPlan>,
}

impl DayContext {
    pub fn for_date(date: NaiveDate) -> Self {
        let weekday = date.weekday();
        Self {
            date,
            weekday,
            plan: workout_plan_for(weekday).and_then(workout_plan),
        }
    }

    pub fn is_sunday(&self) -> bool {
        self.weekday == Weekday::Sun
    }

    pub fn is_rest_day(&self) -> bool {
        self.plan.is_none()
    }
}

pub fn total_for(category: Category, ctx: &DayContext) -> usize {
    match category {
        Category::Meals => MEALS.len(),
        Category::Workouts => ctx.plan.map_or(0, |plan| plan.exercises.len()),
        Category::Optional => OPTIONAL.len(),
        Category::Skincare => {
            let weekly = if ctx.is_sunday() {
                SKINCARE_WEEKLY.len()
            } else {
                0
            };
            SKINCARE_MORNING.len() + SKINCARE_NIGHT.len() + weekly
        }
    }
}

/// Counts every `true` flag in the record, including ids the catalog no
/// longer lists.
pub fn completed_for(category: Category, record: &DayRecord) -> usize {
    record.items(category).values().filter(|done| **done).count()
}

pub fn percentage(category: Category, ctx: &DayContext, record: &DayRecord) -> u32 {
    let total = total_for(category, ctx);
    if total == 0 {
        return 0;
    }
    let completed = completed_for(category, record);
    (completed as f64 / total as f64 * 100.0).round() as u32
}
