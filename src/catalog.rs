use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ChecklistItem {
    pub id: &'static str,
    pub label: &'static str,
    pub group: Option<&'static str>,
}

#[derive(Debug, Serialize)]
pub struct WorkoutPlan {
    pub id: u8,
    pub title: &'static str,
    pub exercises: &'static [ChecklistItem],
}

const fn item(id: &'static str, label: &'static str) -> ChecklistItem {
    ChecklistItem {
        id,
        label,
        group: None,
    }
}

const fn grouped(id: &'static str, label: &'static str, group: &'static str) -> ChecklistItem {
    ChecklistItem {
        id,
        label,
        group: Some(group),
    }
}

pub const MEALS: &[ChecklistItem] = &[
    grouped("breakfast_eggs", "3 whole eggs OR 2 eggs + 100g paneer bhurji", "Breakfast"),
    grouped("breakfast_fruit", "1 fruit", "Breakfast"),
    grouped("breakfast_drink", "Black coffee or tea", "Breakfast"),
    grouped("lunch_protein", "120-150g chicken/fish OR paneer + dal", "Lunch"),
    grouped("lunch_carbs", "1 cup rice OR 2 rotis", "Lunch"),
    grouped("lunch_veggies", "Big bowl of vegetables", "Lunch"),
    grouped("lunch_dairy", "Curd or buttermilk", "Lunch"),
    grouped("snack_fruit", "Banana or apple", "Snack"),
    grouped("snack_protein", "Roasted chana/peanuts OR milk + almonds", "Snack"),
    grouped("dinner_protein", "Paneer, eggs, or fish", "Dinner"),
    grouped("dinner_veggies", "Stir-fried vegetables", "Dinner"),
];

pub const WORKOUT_PLANS: &[WorkoutPlan] = &[
    WorkoutPlan {
        id: 1,
        title: "Upper Push",
        exercises: &[
            item("bench_press", "Bench press"),
            item("overhead_press", "Overhead press"),
            item("incline_db", "Incline dumbbell press"),
            item("triceps_dips", "Triceps dips"),
            item("plank", "Plank 3×45s"),
        ],
    },
    WorkoutPlan {
        id: 2,
        title: "Lower Body",
        exercises: &[
            item("squats", "Squats"),
            item("rdl", "Romanian deadlifts"),
            item("lunges", "Lunges"),
            item("calf_raises", "Calf raises"),
            item("leg_raises", "Hanging leg raises"),
        ],
    },
    WorkoutPlan {
        id: 3,
        title: "Pull",
        exercises: &[
            item("pullups", "Pull-ups / lat pulldown"),
            item("barbell_rows", "Barbell rows"),
            item("face_pulls", "Face pulls"),
            item("biceps", "Biceps curls"),
            item("cable_crunch", "Cable crunches"),
        ],
    },
    WorkoutPlan {
        id: 4,
        title: "Athletic + Core",
        exercises: &[
            item("kb_swings", "Kettlebell swings"),
            item("box_jumps", "Box jumps / step-ups"),
            item("battle_ropes", "Battle ropes"),
            item("farmers_walk", "Farmer's walk"),
            item("ab_circuit", "Ab circuit (15 mins)"),
        ],
    },
    WorkoutPlan {
        id: 5,
        title: "Full Body",
        exercises: &[
            item("deadlift", "Deadlift (moderate)"),
            item("pushups", "Push-ups"),
            item("pullups_fb", "Pull-ups"),
            item("shoulder_raises", "Shoulder raises"),
            item("planks_wheel", "Planks + ab wheel"),
        ],
    },
];

pub const OPTIONAL: &[ChecklistItem] = &[
    item("water", "2.5–3L water"),
    item("workout", "Workout completed"),
    item("sleep", "7–8 hours sleep"),
];

pub const SKINCARE_MORNING: &[ChecklistItem] = &[
    grouped("morning_brush", "Brush teeth (2 minutes)", "Morning"),
    grouped("morning_rinse", "Rinse face with water", "Morning"),
    grouped("morning_cleanse", "Cleanse with Gabit facewash (20–30 seconds)", "Morning"),
    grouped("morning_moisturizer", "Apply Gabit moisturizer (1–2 pumps on damp skin)", "Morning"),
    grouped("morning_sunscreen", "Apply clay sunscreen (two-finger amount for face + neck)", "Morning"),
    grouped("morning_water", "Drink 1–2 glasses of water", "Morning"),
];

pub const SKINCARE_NIGHT: &[ChecklistItem] = &[
    grouped("night_brush", "Brush teeth (2 minutes)", "Night"),
    grouped("night_cleanse", "Cleanse with Gabit facewash", "Night"),
    grouped("night_moisturizer", "Apply Gabit moisturizer (slightly thicker layer)", "Night"),
    grouped("night_wash_hands", "Wash hands before sleep", "Night"),
    grouped("night_sleep", "Sleep before midnight (ideal)", "Night"),
];

pub const SKINCARE_WEEKLY: &[ChecklistItem] = &[
    grouped("weekly_scrub", "Clay scrub (once per week only)", "Weekly"),
    grouped("weekly_extra_moisturizer", "Extra moisturizer after scrub", "Weekly"),
];

pub fn workout_plan(id: u8) -> Option<&'static WorkoutPlan> {
    WORKOUT_PLANS.iter().find(|plan| plan.id == id)
}
