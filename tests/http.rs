use once_cell::sync::Lazy;
use reqwest::Client;
use serde::Deserialize;
use std::net::TcpListener;
use std::process::{Child, Command, Stdio};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tokio::time::sleep;

#[derive(Debug, Deserialize)]
struct Entry {
    mood: String,
    note: String,
}

#[derive(Debug, Deserialize)]
struct TodayView {
    date: String,
    entry: Option<Entry>,
    note_text: String,
    quote: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Summary {
    common_mood: String,
    average_score: String,
    entry_count: usize,
    best_streak: usize,
    most_positive_day: String,
}

#[derive(Debug, Deserialize)]
struct ChartBar {
    label: String,
    count: u64,
    color: String,
}

#[derive(Debug, Deserialize)]
struct Snapshot {
    today: TodayView,
    summary: Summary,
    chart: Vec<ChartBar>,
}

#[derive(Debug, Deserialize)]
struct DayCell {
    day: u32,
    in_month: bool,
    date: Option<String>,
    today: bool,
    mood: Option<String>,
    tooltip: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CalendarView {
    year: i32,
    month: u32,
    label: String,
    cells: Vec<DayCell>,
}

struct TestServer {
    base_url: String,
    child: Child,
}

impl Drop for TestServer {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

static TEST_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));
static SERVER: Lazy<Mutex<Option<Arc<TestServer>>>> = Lazy::new(|| Mutex::new(None));

#[cfg(unix)]
mod cleanup {
    use std::sync::atomic::{AtomicI32, Ordering};
    use std::sync::Once;

    static REGISTER: Once = Once::new();
    static PID: AtomicI32 = AtomicI32::new(0);

    pub fn register(pid: u32) {
        REGISTER.call_once(|| {
            PID.store(pid as i32, Ordering::SeqCst);
            unsafe {
                libc::atexit(on_exit);
            }
        });
    }

    extern "C" fn on_exit() {
        let pid = PID.load(Ordering::SeqCst);
        if pid > 0 {
            unsafe {
                libc::kill(pid, libc::SIGTERM);
            }
        }
    }
}

fn pick_free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind random port");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    port
}

fn unique_data_path() -> String {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let mut path = std::env::temp_dir();
    path.push(format!("mood_journal_http_{}_{}.json", std::process::id(), nanos));
    path.to_string_lossy().to_string()
}

async fn wait_until_ready(base_url: &str) {
    let client = Client::new();
    let deadline = Instant::now() + Duration::from_secs(3);
    loop {
        if let Ok(resp) = client.get(format!("{base_url}/api/today")).send().await {
            if resp.status().is_success() {
                return;
            }
        }
        if Instant::now() > deadline {
            panic!("server did not become ready");
        }
        sleep(Duration::from_millis(100)).await;
    }
}

async fn spawn_server() -> TestServer {
    let port = pick_free_port();
    let data_path = unique_data_path();
    let child = Command::new(env!("CARGO_BIN_EXE_mood_journal"))
        .env("PORT", port.to_string())
        .env("APP_DATA_PATH", data_path)
        .env("RUST_LOG", "info")
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()
        .expect("failed to spawn server");

    #[cfg(unix)]
    cleanup::register(child.id());

    let base_url = format!("http://127.0.0.1:{port}");
    wait_until_ready(&base_url).await;

    TestServer { base_url, child }
}

async fn shared_server() -> Arc<TestServer> {
    let mut guard = SERVER.lock().await;
    if let Some(server) = guard.as_ref() {
        return Arc::clone(server);
    }
    let server = Arc::new(spawn_server().await);
    *guard = Some(Arc::clone(&server));
    server
}

async fn save_mood(client: &Client, base_url: &str, mood: &str, note: &str) -> Snapshot {
    let response = client
        .post(format!("{base_url}/api/mood"))
        .json(&serde_json::json!({ "mood": mood, "note": note }))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());
    response.json().await.unwrap()
}

#[tokio::test]
async fn http_save_mood_overwrites_today() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    save_mood(&client, &server.base_url, "sad", "rainy").await;
    let snapshot = save_mood(&client, &server.base_url, "happy", "  sunny  ").await;

    let entry = snapshot.today.entry.expect("today entry");
    assert_eq!(entry.mood, "happy");
    assert_eq!(entry.note, "sunny");
    assert_eq!(snapshot.today.note_text, "Note: sunny");
    assert_eq!(
        snapshot.today.quote.as_deref(),
        Some("Keep smiling, it's contagious!")
    );
    assert_eq!(snapshot.summary.entry_count, 1);
    assert_eq!(snapshot.summary.common_mood, "Happy");
    assert_eq!(snapshot.summary.average_score, "5.00");
    assert_eq!(snapshot.summary.best_streak, 1);
    assert_eq!(snapshot.summary.most_positive_day, snapshot.today.date);

    let happy = snapshot
        .chart
        .iter()
        .find(|bar| bar.label == "happy")
        .expect("happy bar");
    assert_eq!(happy.count, 1);
    assert_eq!(happy.color, "#FFD700");
    assert_eq!(snapshot.chart.iter().map(|bar| bar.count).sum::<u64>(), 1);

    let today: TodayView = client
        .get(format!("{}/api/today", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(today.date, snapshot.today.date);
    assert_eq!(today.entry.map(|entry| entry.mood).as_deref(), Some("happy"));

    let summary: Summary = client
        .get(format!("{}/api/summary", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(summary.entry_count, 1);
}

#[tokio::test]
async fn http_unknown_mood_is_rejected() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let response = client
        .post(format!("{}/api/mood", server.base_url))
        .json(&serde_json::json!({ "mood": "bored", "note": "" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 400);
}

#[tokio::test]
async fn http_calendar_marks_saved_day() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let snapshot = save_mood(&client, &server.base_url, "calm", "").await;

    let view: CalendarView = client
        .get(format!("{}/api/calendar", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(view.cells.len() % 7, 0);
    assert!(!view.label.is_empty());

    let cell = view
        .cells
        .iter()
        .find(|cell| cell.date.as_deref() == Some(snapshot.today.date.as_str()))
        .expect("today cell");
    assert!(cell.in_month);
    assert!(cell.today);
    assert_eq!(cell.mood.as_deref(), Some("calm"));
    assert_eq!(cell.tooltip.as_deref(), Some("Calm - Note: No note"));
}

#[tokio::test]
async fn http_calendar_navigation_wraps_year() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let view: CalendarView = client
        .get(format!(
            "{}/api/calendar?year=2024&month=0&nav=prev",
            server.base_url
        ))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!((view.year, view.month), (2023, 11));
    assert_eq!(view.label, "December 2023");
    assert_eq!(view.cells.iter().filter(|cell| cell.in_month).count(), 31);
    assert_eq!(view.cells.first().map(|cell| cell.day), Some(26));

    let response = client
        .get(format!("{}/api/calendar?year=2024&month=12", server.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 400);

    for query in [
        "year=-262143&month=0",
        "year=-2147483648&month=0&nav=prev",
        "year=2147483647&month=11&nav=next",
    ] {
        let response = client
            .get(format!("{}/api/calendar?{query}", server.base_url))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status().as_u16(), 400, "{query}");
    }
}

#[tokio::test]
async fn http_index_serves_page() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let html = client
        .get(format!("{}/", server.base_url))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(html.contains("Mood Journal"));
    assert!(html.contains("id=\"calendar-view\""));
}

#[tokio::test]
async fn http_form_fallback_saves_and_redirects() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap();

    let response = client
        .post(format!("{}/mood/anxious", server.base_url))
        .header("content-type", "application/x-www-form-urlencoded")
        .body("note=deadline+tomorrow")
        .send()
        .await
        .unwrap();
    assert!(response.status().is_redirection());
    let location = response
        .headers()
        .get("location")
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);
    assert_eq!(location.as_deref(), Some("/"));

    let today: TodayView = client
        .get(format!("{}/api/today", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let entry = today.entry.expect("today entry");
    assert_eq!(entry.mood, "anxious");
    assert_eq!(entry.note, "deadline tomorrow");
    assert_eq!(today.note_text, "Note: deadline tomorrow");

    let response = client
        .post(format!("{}/mood/bored", server.base_url))
        .header("content-type", "application/x-www-form-urlencoded")
        .body("note=")
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 400);
}

#[tokio::test]
async fn http_chart_lists_every_mood_in_order() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    save_mood(&client, &server.base_url, "excited", "").await;

    let bars: Vec<ChartBar> = client
        .get(format!("{}/api/chart", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let labels: Vec<&str> = bars.iter().map(|bar| bar.label.as_str()).collect();
    assert_eq!(labels, vec!["happy", "sad", "angry", "anxious", "calm", "excited"]);
    let counts: Vec<u64> = bars.iter().map(|bar| bar.count).collect();
    assert_eq!(counts, vec![0, 0, 0, 0, 0, 1]);
    assert_eq!(bars[5].color, "#FFA500");
}
