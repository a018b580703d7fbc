use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Meals,
    Workouts,
    Optional,
    Skincare,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Meals,
        Category::Workouts,
        Category::Optional,
        Category::Skincare,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Meals => "meals",
            Category::Workouts => "workouts",
            Category::Optional => "optional",
            Category::Skincare => "skincare",
        }
    }

    pub fn tab(self) -> &'static str {
        match self {
            Category::Meals => "meals",
            Category::Workouts | Category::Optional => "workout",
            Category::Skincare => "skincare",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct DayRecord {
    #[serde(default)]
    pub meals: BTreeMap<String, bool>,
    #[serde(default)]
    pub workouts: BTreeMap<String, bool>,
    #[serde(default)]
    pub optional: BTreeMap<String, bool>,
    #[serde(default)]
    pub skincare: BTreeMap<String, bool>,
}

impl DayRecord {
    pub fn items(&self, category: Category) -> &BTreeMap<String, bool> {
        match category {
            Category::Meals => &self.meals,
            Category::Workouts => &self.workouts,
            Category::Optional => &self.optional,
            Category::Skincare => &self.skincare,
        }
    }

    pub fn items_mut(&mut self, category: Category) -> &mut BTreeMap<String, bool> {
        match category {
            Category::Meals => &mut self.meals,
            Category::Workouts => &mut self.workouts,
            Category::Optional => &mut self.optional,
            Category::Skincare => &mut self.skincare,
        }
    }

    pub fn is_done(&self, category: Category, item_id: &str) -> bool {
        self.items(category).get(item_id).copied().unwrap_or(false)
    }
}

// serialized as a bare object of date keys
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Store {
    days: BTreeMap<String, DayRecord>,
}

impl Store {
    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn contains(&self, date_key: &str) -> bool {
        self.days.contains_key(date_key)
    }

    /// The stored record, or an all-false one that is not inserted.
    pub fn record_for(&self, date_key: &str) -> Cow<'_, DayRecord> {
        match self.days.get(date_key) {
            Some(record) => Cow::Borrowed(record),
            None => Cow::Owned(DayRecord::default()),
        }
    }

    pub fn toggle(&mut self, date_key: &str, category: Category, item_id: &str) -> bool {
        let flag = self
            .days
            .entry(date_key.to_string())
            .or_default()
            .items_mut(category)
            .entry(item_id.to_string())
            .or_insert(false);
        *flag = !*flag;
        *flag
    }
}

#[derive(Debug, Deserialize)]
pub struct ToggleRequest {
    pub category: Category,
    pub item_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_toggle_sets_and_second_clears() {
        let mut store = Store::default();
        assert!(store.toggle("2024-03-04", Category::Meals, "breakfast_eggs"));
        assert!(store.record_for("2024-03-04").is_done(Category::Meals, "breakfast_eggs"));

        assert!(!store.toggle("2024-03-04", Category::Meals, "breakfast_eggs"));
        assert!(!store.record_for("2024-03-04").is_done(Category::Meals, "breakfast_eggs"));
        assert!(store.contains("2024-03-04"));
    }

    #[test]
    fn toggle_only_touches_its_own_category_and_day() {
        let mut store = Store::default();
        store.toggle("2024-03-04", Category::Skincare, "night_brush");

        let record = store.record_for("2024-03-04");
        assert!(record.meals.is_empty());
        assert!(record.workouts.is_empty());
        assert!(record.optional.is_empty());
        assert_eq!(record.skincare.get("night_brush"), Some(&true));
        assert!(!store.contains("2024-03-05"));
    }

    #[test]
    fn record_for_missing_day_does_not_insert() {
        let store = Store::default();
        let record = store.record_for("2024-03-04");
        assert_eq!(*record, DayRecord::default());
        assert!(matches!(record, Cow::Owned(_)));
        assert!(store.is_empty());
    }

    #[test]
    fn unknown_item_ids_are_accepted() {
        let mut store = Store::default();
        assert!(store.toggle("2024-03-04", Category::Optional, "meditate"));
        assert!(store.record_for("2024-03-04").is_done(Category::Optional, "meditate"));
    }

    #[test]
    fn store_serializes_as_bare_date_map() {
        let mut store = Store::default();
        store.toggle("2024-03-21", Category::Workouts, "squats");

        let value = serde_json::to_value(&store).unwrap();
        assert_eq!(value["2024-03-21"]["workouts"]["squats"], true);
        assert!(value["2024-03-21"]["meals"].as_object().unwrap().is_empty());
    }

    #[test]
    fn partial_records_deserialize_with_empty_maps() {
        let store: Store =
            serde_json::from_str(r#"{"2024-03-21":{"meals":{"lunch_carbs":true}}}"#).unwrap();
        let record = store.record_for("2024-03-21");
        assert!(record.is_done(Category::Meals, "lunch_carbs"));
        assert!(record.skincare.is_empty());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn categories_parse_lowercase() {
        let request: ToggleRequest =
            serde_json::from_str(r#"{"category":"skincare","item_id":"weekly_scrub"}"#).unwrap();
        assert_eq!(request.category, Category::Skincare);
        assert!(serde_json::from_str::<Category>(r#""cardio""#).is_err());
        for category in Category::ALL {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.as_str()));
        }
    }
}
