use crate::mood::Mood;

pub fn render_index(date: &str) -> String {
    INDEX_HTML
        .replace("{{DATE}}", date)
        .replace("{{MOOD_BUTTONS}}", &mood_buttons())
}

fn mood_buttons() -> String {
    Mood::ALL
        .iter()
        .map(|mood| {
            format!(
                r#"<button type="submit" class="mood-btn {class}" formaction="/mood/{tag}" data-mood="{tag}" title="{label}">{emoji}<span>{label}</span></button>"#,
                class = mood.css_class(),
                tag = mood.as_str(),
                label = mood.label(),
                emoji = mood.emoji(),
            )
        })
        .collect::<Vec<_>>()
        .join("\n        ")
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Mood Journal</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #f8f3e6;
      --bg-2: #f5d3a7;
      --ink: #2b2a28;
      --accent: #ff6b4a;
      --accent-2: #2f4858;
      --card: rgba(255, 255, 255, 0.86);
      --shadow: 0 24px 60px rgba(47, 72, 88, 0.18);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #ffe9d4 60%, #f9f2e9 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(900px, 100%);
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 28px;
      animation: rise 600ms ease;
    }

    header {
      display: flex;
      flex-direction: column;
      gap: 6px;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(2rem, 4vw, 2.8rem);
      margin: 0;
    }

    h2 {
      margin: 0;
      font-size: 1.4rem;
    }

    .subtitle {
      margin: 0;
      color: #5f5c57;
      font-size: 1rem;
    }

    .card {
      background: white;
      border-radius: 20px;
      padding: 18px;
      border: 1px solid rgba(47, 72, 88, 0.08);
      display: grid;
      gap: 14px;
    }

    .emoji-buttons {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(110px, 1fr));
      gap: 12px;
    }

    button {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 12px 16px;
      font-size: 1rem;
      font-weight: 600;
      cursor: pointer;
      transition: transform 150ms ease, box-shadow 150ms ease;
      display: inline-flex;
      align-items: center;
      justify-content: center;
      gap: 8px;
    }

    button:active {
      transform: scale(0.98);
    }

    .mood-btn {
      font-size: 1.3rem;
      box-shadow: 0 10px 24px rgba(47, 72, 88, 0.15);
    }

    .mood-btn span {
      font-size: 0.9rem;
    }

    #mood-note {
      width: 100%;
      border-radius: 14px;
      border: 1px solid rgba(47, 72, 88, 0.2);
      padding: 12px 14px;
      font: inherit;
    }

    .mood-happy { background: #FFD700; }
    .mood-sad { background: #87CEEB; }
    .mood-angry { background: #FF6347; }
    .mood-anxious { background: #9370DB; }
    .mood-calm { background: #90EE90; }
    .mood-excited { background: #FFA500; }

    .quote {
      margin: 0;
      font-family: "Fraunces", "Georgia", serif;
      font-size: 1.2rem;
      color: var(--accent-2);
      min-height: 1.4em;
    }

    .calendar-header {
      display: flex;
      align-items: center;
      justify-content: space-between;
      gap: 12px;
    }

    .nav {
      background: rgba(47, 72, 88, 0.08);
      color: var(--accent-2);
      padding: 8px 14px;
    }

    #calendar-view {
      display: grid;
      grid-template-columns: repeat(7, 1fr);
      gap: 6px;
    }

    #calendar-view div {
      border-radius: 10px;
      padding: 10px 0;
      text-align: center;
      background: rgba(47, 72, 88, 0.04);
    }

    #calendar-view .weekday {
      background: transparent;
      font-size: 0.8rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: #8b857d;
    }

    #calendar-view .outside-month {
      background: transparent;
      color: #c2bcb4;
    }

    #calendar-view .today {
      outline: 2px solid var(--accent);
    }

    .panel {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(150px, 1fr));
      gap: 16px;
    }

    .stat {
      background: white;
      border-radius: 18px;
      padding: 18px;
      border: 1px solid rgba(47, 72, 88, 0.08);
      display: grid;
      gap: 8px;
    }

    .stat .label {
      font-size: 0.8rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: #8b857d;
    }

    .stat .value {
      font-size: 1.5rem;
      font-weight: 600;
      color: var(--accent-2);
    }

    #moodChart {
      width: 100%;
      height: 260px;
      display: block;
    }

    .chart-grid {
      stroke: rgba(47, 72, 88, 0.12);
    }

    .chart-label {
      fill: #7a746d;
      font-size: 11px;
    }

    .status {
      font-size: 0.95rem;
      color: #6b645d;
      min-height: 1.2em;
    }

    .status[data-type="error"] {
      color: #c63b2b;
    }

    .status[data-type="ok"] {
      color: #2d7a4b;
    }

    @keyframes rise {
      from {
        opacity: 0;
        transform: translateY(18px);
      }
      to {
        opacity: 1;
        transform: translateY(0);
      }
    }

    @media (max-width: 600px) {
      .app {
        padding: 28px 22px;
      }
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Mood Journal</h1>
      <p id="current-date" class="subtitle">Today: {{DATE}}</p>
    </header>

    <section class="card mood-entry">
      <h2>How are you feeling?</h2>
      <form id="mood-form" method="post">
        <button id="implicit-submit" type="submit" disabled hidden aria-hidden="true" tabindex="-1"></button>
        <input id="mood-note" name="note" type="text" maxlength="280" placeholder="Add a note (optional)" />
        <div class="emoji-buttons">
        {{MOOD_BUTTONS}}
        </div>
      </form>
      <p id="note-display" class="subtitle">No note added for today.</p>
    </section>

    <section class="quote-section">
      <p id="quote-text" class="quote"></p>
    </section>

    <section class="card mood-history">
      <div class="calendar-header">
        <button id="prev-month" class="nav" type="button" aria-label="Previous month">&larr;</button>
        <h2 id="month-year"></h2>
        <button id="next-month" class="nav" type="button" aria-label="Next month">&rarr;</button>
      </div>
      <div id="calendar-view"></div>
    </section>

    <section class="panel summary">
      <div class="stat">
        <span class="label">Most common</span>
        <span id="common-mood-name" class="value">-</span>
      </div>
      <div class="stat">
        <span class="label">Average score</span>
        <span id="average-score" class="value">-</span>
      </div>
      <div class="stat">
        <span class="label">Entries</span>
        <span id="mood-count" class="value">0</span>
      </div>
      <div class="stat">
        <span class="label">Best streak</span>
        <span id="streak-count" class="value">0</span>
      </div>
      <div class="stat">
        <span class="label">Most positive day</span>
        <span id="positive-day-date" class="value">-</span>
      </div>
    </section>

    <section class="card">
      <h2>Mood frequency</h2>
      <svg id="moodChart" viewBox="0 0 600 260" aria-label="Mood frequency chart" role="img"></svg>
    </section>

    <div class="status" id="status"></div>
  </main>

  <script>
    const statusEl = document.getElementById('status');
    const noteInput = document.getElementById('mood-note');
    const noteDisplay = document.getElementById('note-display');
    const quoteEl = document.getElementById('quote-text');
    const calendarEl = document.getElementById('calendar-view');
    const monthYearEl = document.getElementById('month-year');
    const chartEl = document.getElementById('moodChart');
    const form = document.getElementById('mood-form');

    let cursor = null;

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const getJson = async (url) => {
      const res = await fetch(url);
      if (!res.ok) {
        throw new Error((await res.text()) || 'Request failed');
      }
      return res.json();
    };

    const renderToday = (today) => {
      noteDisplay.textContent = today.note_text;
      quoteEl.textContent = today.quote || '';
    };

    const renderSummary = (summary) => {
      document.getElementById('common-mood-name').textContent = summary.common_mood;
      document.getElementById('average-score').textContent = summary.average_score;
      document.getElementById('mood-count').textContent = summary.entry_count;
      document.getElementById('streak-count').textContent = summary.best_streak;
      document.getElementById('positive-day-date').textContent = summary.most_positive_day;
    };

    const renderCalendar = (view) => {
      cursor = { year: view.year, month: view.month };
      monthYearEl.textContent = view.label;
      calendarEl.innerHTML = '';
      view.weekdays.forEach((day) => {
        const el = document.createElement('div');
        el.textContent = day;
        el.classList.add('weekday');
        calendarEl.appendChild(el);
      });
      view.cells.forEach((cell) => {
        const el = document.createElement('div');
        el.textContent = cell.day;
        if (!cell.in_month) {
          el.classList.add('outside-month');
        }
        if (cell.today) {
          el.classList.add('today');
        }
        if (cell.css_class) {
          el.classList.add(cell.css_class);
        }
        if (cell.tooltip) {
          el.title = cell.tooltip;
        }
        calendarEl.appendChild(el);
      });
    };

    const renderChart = (bars) => {
      const width = 600;
      const height = 260;
      const paddingX = 44;
      const paddingY = 34;
      const top = 24;
      const max = Math.max(1, ...bars.map((bar) => bar.count));
      const slot = (width - paddingX * 2) / bars.length;
      const scaleY = (height - top - paddingY) / max;

      let grid = '';
      const step = Math.max(1, Math.ceil(max / 4));
      for (let value = 0; value <= max; value += step) {
        const y = height - paddingY - value * scaleY;
        grid += `<line class="chart-grid" x1="${paddingX}" y1="${y}" x2="${width - paddingX}" y2="${y}" />`;
        grid += `<text class="chart-label" x="${paddingX - 10}" y="${y + 4}" text-anchor="end">${value}</text>`;
      }

      const rects = bars
        .map((bar, index) => {
          const h = bar.count * scaleY;
          const x = paddingX + index * slot + slot * 0.15;
          const y = height - paddingY - h;
          return `<rect x="${x}" y="${y}" width="${slot * 0.7}" height="${h}" rx="6" fill="${bar.color}"><title>${bar.label}: ${bar.count}</title></rect>` +
            `<text class="chart-label" x="${x + slot * 0.35}" y="${height - paddingY + 18}" text-anchor="middle">${bar.label}</text>`;
        })
        .join('');

      chartEl.innerHTML = `${grid}${rects}`;
    };

    const loadCalendar = async (nav) => {
      const params = new URLSearchParams();
      if (cursor) {
        params.set('year', cursor.year);
        params.set('month', cursor.month);
      }
      if (nav) {
        params.set('nav', nav);
      }
      renderCalendar(await getJson(`/api/calendar?${params}`));
    };

    const refresh = async () => {
      const [today, summary, chart] = await Promise.all([
        getJson('/api/today'),
        getJson('/api/summary'),
        getJson('/api/chart'),
        loadCalendar()
      ]);
      renderToday(today);
      renderSummary(summary);
      renderChart(chart);
    };

    const save = async (mood) => {
      setStatus('Saving...', 'info');
      const res = await fetch('/api/mood', {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify({ mood, note: noteInput.value.trim() })
      });
      if (!res.ok) {
        throw new Error((await res.text()) || 'Request failed');
      }
      const snapshot = await res.json();
      noteInput.value = '';
      renderToday(snapshot.today);
      renderSummary(snapshot.summary);
      renderChart(snapshot.chart);
      await loadCalendar();
      setStatus('Saved', 'ok');
      setTimeout(() => setStatus('', ''), 1200);
    };

    form.addEventListener('submit', (event) => {
      event.preventDefault();
      const button = event.submitter;
      if (!button || button.disabled || !button.dataset.mood) {
        return;
      }
      save(button.dataset.mood).catch((err) => setStatus(err.message, 'error'));
    });

    document.getElementById('prev-month').addEventListener('click', () => {
      loadCalendar('prev').catch((err) => setStatus(err.message, 'error'));
    });

    document.getElementById('next-month').addEventListener('click', () => {
      loadCalendar('next').catch((err) => setStatus(err.message, 'error'));
    });

    refresh().catch((err) => setStatus(err.message, 'error'));
  </script>
</body>
</html>
"#;
