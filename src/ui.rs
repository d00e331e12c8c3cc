use crate::models::{MoodLevel, Notification, NotificationVariant, Recommendation};
use crate::recommendations::select_level;
use crate::session::Dashboard;
use crate::stats::build_trends;

pub fn render_index(dashboard: &Dashboard, notice: Option<&Notification>) -> String {
    let trends = build_trends(dashboard.history());
    let checkin = if dashboard.checked_in_today() {
        String::new()
    } else {
        render_checkin_form()
    };

    INDEX_HTML
        .replace("{{HEADLINE}}", &escape(dashboard.headline()))
        .replace("{{SUBLINE}}", &escape(dashboard.subline()))
        .replace("{{TOAST}}", &notice.map(render_toast).unwrap_or_default())
        .replace("{{CHECKIN}}", &checkin)
        .replace(
            "{{RECOMMENDATIONS}}",
            &render_recommendations(select_level(dashboard.current_level())),
        )
        .replace("{{AVERAGE}}", &trends.average_display)
        .replace("{{TREND}}", &trends.trend_display)
        .replace("{{DIRECTION}}", trends.direction)
        .replace("{{CAPTION}}", &escape(&trends.caption))
}

fn render_toast(notification: &Notification) -> String {
    let class = match notification.variant {
        NotificationVariant::Default => "toast",
        NotificationVariant::Destructive => "toast destructive",
    };
    format!(
        r#"<div class="{class}" role="status"><strong>{}</strong><span>{}</span></div>"#,
        escape(&notification.title),
        escape(&notification.description),
    )
}

fn render_checkin_form() -> String {
    let options: String = MoodLevel::all()
        .map(|level| {
            format!(
                r#"<label class="mood"><input type="radio" name="level" value="{value}" /><span class="emoji">{emoji}</span><span>{label}</span></label>"#,
                value = level.value(),
                emoji = level.emoji(),
                label = level.label(),
            )
        })
        .collect();

    format!(
        r#"<section class="card">
      <h3>How are you feeling today?</h3>
      <form method="post" action="/checkin">
        <div class="moods">{options}</div>
        <label class="note">What's on your mind? (Optional)
          <textarea name="note" placeholder="Share your thoughts, feelings, or what happened today..."></textarea>
        </label>
        <button type="submit">Record My Mood</button>
      </form>
    </section>"#
    )
}

fn render_recommendations(recommendations: &[Recommendation]) -> String {
    recommendations
        .iter()
        .map(|rec| {
            format!(
                r#"<li class="rec"><div class="rec-head"><h4>{title}</h4><span>{duration}</span></div><p>{description}</p><span class="badge {category}">{category}</span></li>"#,
                title = escape(rec.title),
                duration = escape(rec.duration),
                description = escape(rec.description),
                category = rec.category.as_str(),
            )
        })
        .collect()
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Student Wellness Monitor</title>
  <style>
    :root {
      --bg: #f4f7f6;
      --ink: #23313a;
      --muted: #6b7a83;
      --primary: #4f8a8b;
      --positive: #3d9970;
      --warm: #e07a5f;
      --card: #ffffff;
      --shadow: 0 18px 40px rgba(35, 49, 58, 0.12);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      background: var(--bg);
      color: var(--ink);
      font-family: "Inter", "Segoe UI", sans-serif;
    }

    .hero {
      background: linear-gradient(135deg, var(--primary), #7fb7be);
      color: #fff;
      text-align: center;
      padding: 56px 18px;
    }

    .hero h1 {
      margin: 0 0 8px;
    }

    main {
      width: min(1040px, 100%);
      margin: 0 auto;
      padding: 32px 18px 48px;
      display: grid;
      gap: 28px;
    }

    .welcome {
      text-align: center;
    }

    .welcome p,
    .caption,
    .rec p {
      color: var(--muted);
    }

    .grid {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(320px, 1fr));
      gap: 24px;
    }

    .column {
      display: grid;
      gap: 24px;
      align-content: start;
    }

    .card {
      background: var(--card);
      border-radius: 16px;
      box-shadow: var(--shadow);
      padding: 24px;
    }

    .moods {
      display: grid;
      grid-template-columns: repeat(5, 1fr);
      gap: 10px;
      margin-bottom: 16px;
    }

    .mood {
      display: grid;
      justify-items: center;
      gap: 4px;
      padding: 10px 4px;
      border-radius: 12px;
      cursor: pointer;
      font-size: 12px;
    }

    .mood input {
      display: none;
    }

    .mood:has(input:checked) {
      outline: 2px solid var(--primary);
      background: rgba(79, 138, 139, 0.1);
    }

    .emoji {
      font-size: 26px;
    }

    .note textarea {
      width: 100%;
      min-height: 80px;
      margin-top: 6px;
      resize: none;
    }

    button {
      width: 100%;
      margin-top: 16px;
      padding: 12px;
      border: none;
      border-radius: 10px;
      background: var(--primary);
      color: #fff;
      font-weight: 600;
      cursor: pointer;
    }

    ul.recs {
      list-style: none;
      margin: 0;
      padding: 0;
      display: grid;
      gap: 14px;
    }

    .rec {
      border: 1px solid #dde5e8;
      border-radius: 12px;
      padding: 14px;
    }

    .rec-head {
      display: flex;
      justify-content: space-between;
      align-items: baseline;
    }

    .rec h4 {
      margin: 0;
    }

    .badge {
      font-size: 12px;
      padding: 2px 8px;
      border-radius: 999px;
      border: 1px solid currentColor;
    }

    .badge.mindfulness { color: var(--primary); }
    .badge.exercise { color: var(--positive); }
    .badge.social { color: var(--warm); }
    .badge.selfcare { color: #5a5aa8; }

    .stats {
      display: grid;
      grid-template-columns: 1fr 1fr;
      gap: 14px;
      text-align: center;
    }

    .stat strong {
      display: block;
      font-size: 28px;
    }

    .stat.up strong { color: var(--positive); }
    .stat.down strong { color: var(--warm); }

    svg.chart {
      width: 100%;
      height: 220px;
      margin-top: 16px;
    }

    .toast {
      position: fixed;
      right: 18px;
      bottom: 18px;
      display: grid;
      gap: 4px;
      padding: 14px 18px;
      border-radius: 12px;
      background: var(--ink);
      color: #fff;
      box-shadow: var(--shadow);
    }

    .toast.destructive {
      background: #b23a48;
    }

    .highlights {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
      gap: 24px;
    }

    .highlight {
      text-align: center;
      color: var(--muted);
    }

    .highlight strong {
      display: block;
      font-size: 26px;
      color: var(--ink);
    }

    footer {
      text-align: center;
      color: var(--muted);
    }
  </style>
</head>
<body>
  <div class="hero">
    <h1>Student Wellness Monitor</h1>
    <p>Track your mental health journey with daily check-ins</p>
  </div>
  <main>
    <section class="welcome">
      <h2>Welcome back! {{HEADLINE}}</h2>
      <p>{{SUBLINE}}</p>
    </section>

    <div class="highlights">
      <div class="card highlight"><strong>7 days</strong>Current Streak</div>
      <div class="card highlight"><strong>8.2/10</strong>Wellness Score</div>
      <div class="card highlight"><strong>+15%</strong>Progress</div>
    </div>

    <div class="grid">
      <div class="column">
        {{CHECKIN}}
        <section class="card">
          <h3>Personalized Recommendations</h3>
          <ul class="recs">{{RECOMMENDATIONS}}</ul>
        </section>
      </div>
      <div class="column">
        <section class="card">
          <h3>Mood Trends</h3>
          <div class="stats">
            <div class="stat"><strong>{{AVERAGE}}</strong>Average Mood</div>
            <div class="stat {{DIRECTION}}"><strong>{{TREND}}</strong>Trend</div>
          </div>
          <svg class="chart" id="chart" viewBox="0 0 400 220" preserveAspectRatio="none"></svg>
          <p class="caption">{{CAPTION}}</p>
        </section>
        <section class="card">
          <h3>Quick Access</h3>
          <p><strong>Crisis Support</strong> 24/7 helpline</p>
          <p><strong>Find Counselor</strong> Professional help</p>
        </section>
      </div>
    </div>

    <footer>Remember: It's okay to not be okay. Your mental health matters. 💙</footer>
  </main>
  {{TOAST}}

  <script>
    const chart = document.getElementById('chart');
    const NS = 'http://www.w3.org/2000/svg';

    const draw = (points) => {
      chart.innerHTML = '';
      if (points.length === 0) {
        return;
      }
      const width = 400;
      const height = 220;
      const pad = 20;
      const step = points.length > 1 ? (width - pad * 2) / (points.length - 1) : 0;
      const y = (level) => height - pad - ((level - 1) / 4) * (height - pad * 2);
      const coords = points.map((point, index) => [pad + index * step, y(point.level)]);

      const line = document.createElementNS(NS, 'polyline');
      line.setAttribute('points', coords.map((pair) => pair.join(',')).join(' '));
      line.setAttribute('fill', 'none');
      line.setAttribute('stroke', '#4f8a8b');
      line.setAttribute('stroke-width', '3');
      chart.appendChild(line);

      coords.forEach(([cx, cy], index) => {
        const dot = document.createElementNS(NS, 'circle');
        dot.setAttribute('cx', cx);
        dot.setAttribute('cy', cy);
        dot.setAttribute('r', '5');
        dot.setAttribute('fill', '#4f8a8b');
        const title = document.createElementNS(NS, 'title');
        title.textContent = `${points[index].display_date}: ${points[index].tooltip}`;
        dot.appendChild(title);
        chart.appendChild(dot);
      });
    };

    fetch('/api/trends')
      .then((res) => (res.ok ? res.json() : Promise.reject(new Error('Unable to load trends'))))
      .then((trends) => draw(trends.points))
      .catch((err) => console.error(err));

    const toast = document.querySelector('.toast');
    if (toast) {
      history.replaceState(null, '', '/');
      setTimeout(() => toast.remove(), 2500);
    }
  </script>
</body>
</html>
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{recorded_notification, CheckIn};
    use chrono::Utc;

    #[test]
    fn index_shows_form_until_checked_in() {
        let mut dashboard = Dashboard::new();
        let html = render_index(&dashboard, None);
        assert!(html.contains("Record My Mood"));
        assert!(html.contains("Ready for your daily check-in?"));
        assert!(html.contains("Progressive Relaxation"));

        dashboard
            .submit(CheckIn {
                level: Some(5),
                note: None,
                timestamp: Utc::now(),
            })
            .expect("accepted");
        let html = render_index(&dashboard, Some(&recorded_notification()));
        assert!(!html.contains("Record My Mood"));
        assert!(html.contains("Gratitude Journaling"));
        assert!(html.contains("Mood recorded!"));
        assert!(html.contains("Tracking 1 day"));
    }

    #[test]
    fn index_carries_fixed_highlights_and_footer() {
        let html = render_index(&Dashboard::new(), None);
        assert!(html.contains("Current Streak"));
        assert!(html.contains("Wellness Score"));
        assert!(html.contains("+15%"));
        assert!(html.contains("Your mental health matters. 💙"));
        assert!(!html.contains("class=\"toast"));
    }

    #[test]
    fn escape_handles_markup() {
        assert_eq!(escape("you're <b>"), "you&#39;re &lt;b&gt;");
    }
}
