use crate::models::Category;
use crate::summary::{DaySummary, ItemView};
use std::fmt::Write;

pub fn render_index(summary: &DaySummary) -> String {
    INDEX_HTML
        .replace("{{DATE_KEY}}", &summary.date)
        .replace("{{DISPLAY_DATE}}", &escape_html(&summary.display_date))
        .replace("{{MEALS_TAB}}", &tab_label("Meals", summary.progress.meals))
        .replace("{{WORKOUT_TAB}}", &tab_label("Workout", summary.progress.workouts))
        .replace("{{SKINCARE_TAB}}", &tab_label("Skincare", summary.progress.skincare))
        .replace("{{MEALS}}", &render_meals(summary))
        .replace("{{WORKOUT}}", &render_workout(summary))
        .replace("{{SKINCARE}}", &render_skincare(summary))
}

fn tab_label(name: &str, percent: u32) -> String {
    if percent > 0 {
        format!("{name} · {percent}%")
    } else {
        name.to_string()
    }
}

fn render_meals(summary: &DaySummary) -> String {
    let mut html = String::new();
    let mut last_group = None;
    for item in &summary.meals {
        if item.group != last_group {
            if let Some(group) = item.group {
                let _ = write!(html, r#"<h3>{}</h3>"#, escape_html(group));
            }
            last_group = item.group;
        }
        html.push_str(&render_item(Category::Meals, item));
    }
    html
}

fn render_workout(summary: &DaySummary) -> String {
    let Some(workout) = &summary.workout else {
        return format!(
            r#"<div class="rest"><p>Rest day - {}</p><p class="hint">No workout scheduled for today</p></div>"#,
            summary.day_name
        );
    };

    let mut html = String::new();
    let _ = write!(
        html,
        r#"<section><h3>{} · Day {} · {}</h3>"#,
        summary.day_name,
        workout.day,
        escape_html(workout.title)
    );
    html.push_str(&render_list(Category::Workouts, &workout.exercises));
    html.push_str("</section><section><h3>Daily Habits</h3>");
    html.push_str(&render_list(Category::Optional, &summary.optional));
    html.push_str("</section>");
    html
}

fn render_skincare(summary: &DaySummary) -> String {
    let mut html = String::new();
    let sections = [
        ("Daily Morning Routine", &summary.skincare.morning),
        ("Daily Night Routine", &summary.skincare.night),
        ("Weekly Care (Night Only)", &summary.skincare.weekly),
    ];
    for (title, items) in sections {
        if items.is_empty() {
            continue;
        }
        let _ = write!(html, r#"<section><h3>{title}</h3>"#);
        html.push_str(&render_list(Category::Skincare, items));
        html.push_str("</section>");
    }
    html
}

fn render_list(category: Category, items: &[ItemView]) -> String {
    items.iter().map(|item| render_item(category, item)).collect()
}

fn render_item(category: Category, item: &ItemView) -> String {
    let checked = if item.done { " checked" } else { "" };
    let class = if item.done { "item done" } else { "item" };
    format!(
        r#"<form class="{class}" method="post" action="/toggle/{}/{}"><label><input type="checkbox" onchange="this.form.submit()"{checked} /><span>{}</span></label></form>"#,
        category.as_str(),
        item.id,
        escape_html(item.label)
    )
}

fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Daily Checklist</title>
  <style>
    :root {
      --ink: #111827;
      --muted: #6b7280;
      --faint: #9ca3af;
      --line: #e5e7eb;
      --hover: #f9fafb;
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      background: #fff;
      color: var(--ink);
      font-family: system-ui, -apple-system, "Segoe UI", sans-serif;
    }

    .app {
      max-width: 42rem;
      margin: 0 auto;
      min-height: 100vh;
      display: flex;
      flex-direction: column;
    }

    header {
      position: sticky;
      top: 0;
      background: #fff;
      border-bottom: 1px solid var(--line);
      padding: 16px 16px 0;
    }

    h1 {
      margin: 0 0 16px;
      text-align: center;
      font-size: 1.125rem;
      font-weight: 500;
    }

    nav {
      display: flex;
      gap: 24px;
    }

    nav button {
      border: 0;
      background: none;
      padding: 0 0 8px;
      font: inherit;
      font-size: 0.875rem;
      font-weight: 500;
      color: var(--muted);
      cursor: pointer;
      border-bottom: 2px solid transparent;
    }

    nav button.active {
      color: var(--ink);
      border-bottom-color: var(--ink);
    }

    main {
      flex: 1;
      padding: 16px;
    }

    .panel {
      display: none;
    }

    .panel.active {
      display: block;
    }

    h3 {
      margin: 24px 0 8px;
      font-size: 0.75rem;
      font-weight: 500;
      color: var(--muted);
      text-transform: uppercase;
      letter-spacing: 0.05em;
    }

    .item {
      margin: 0;
    }

    .item label {
      display: flex;
      align-items: flex-start;
      gap: 12px;
      padding: 8px;
      border-radius: 4px;
      cursor: pointer;
      font-size: 0.875rem;
    }

    .item label:hover {
      background: var(--hover);
    }

    .item.done span {
      text-decoration: line-through;
      color: var(--faint);
    }

    .rest {
      text-align: center;
      padding: 48px 0;
      color: var(--muted);
      font-size: 0.875rem;
    }

    .rest .hint {
      color: var(--faint);
      font-size: 0.75rem;
    }
  </style>
</head>
<body>
  <div class="app" data-date="{{DATE_KEY}}">
    <header>
      <h1>{{DISPLAY_DATE}}</h1>
      <nav>
        <button type="button" data-tab="meals">{{MEALS_TAB}}</button>
        <button type="button" data-tab="workout">{{WORKOUT_TAB}}</button>
        <button type="button" data-tab="skincare">{{SKINCARE_TAB}}</button>
      </nav>
    </header>
    <main>
      <div class="panel" id="meals">{{MEALS}}</div>
      <div class="panel" id="workout">{{WORKOUT}}</div>
      <div class="panel" id="skincare">{{SKINCARE}}</div>
    </main>
  </div>

  <script>
    const tabs = Array.from(document.querySelectorAll('nav button'));
    const panels = Array.from(document.querySelectorAll('.panel'));
    const shownDate = document.querySelector('.app').dataset.date;

    const setActiveTab = (name) => {
      if (!panels.some((panel) => panel.id === name)) {
        name = 'meals';
      }
      tabs.forEach((button) => button.classList.toggle('active', button.dataset.tab === name));
      panels.forEach((panel) => panel.classList.toggle('active', panel.id === name));
      history.replaceState(null, '', '#' + name);
    };

    tabs.forEach((button) => {
      button.addEventListener('click', () => setActiveTab(button.dataset.tab));
    });

    setActiveTab(location.hash.slice(1));

    setInterval(async () => {
      try {
        const res = await fetch('/api/today');
        if (!res.ok) {
          return;
        }
        const today = await res.json();
        if (today.date !== shownDate) {
          location.reload();
        }
      } catch (_) {}
    }, 60000);
  </script>
</body>
</html>
"#;
