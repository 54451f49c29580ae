//! End-to-end presentation flow over the real HTTP thumbnail fetcher.

use std::io::{Cursor, Write};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use sv_app::{ActionOutcome, DecodeResultsUseCase, PresentationState, PresenterDeps, ResultsPresenter};
use sv_core::config::ThumbnailConfig;
use sv_core::ids::EntryId;
use sv_core::ports::{ClipboardPort, NotificationPort, ResultViewPort, UrlOpenerPort};
use sv_core::{FetchError, Notification, ResultCard, ThumbnailState};
use serde_json::{json, Value};
use sv_infra::HttpThumbnailFetcher;

#[derive(Default)]
struct RecordingClipboard {
    writes: Mutex<Vec<String>>,
}

impl ClipboardPort for RecordingClipboard {
    fn write_text(&self, text: &str) -> anyhow::Result<()> {
        self.writes.lock().unwrap().push(text.to_string());
        Ok(())
    }
}

#[derive(Default)]
struct RecordingOpener {
    opened: Mutex<Vec<String>>,
}

impl UrlOpenerPort for RecordingOpener {
    fn open_url(&self, url: &str) -> anyhow::Result<()> {
        self.opened.lock().unwrap().push(url.to_string());
        Ok(())
    }
}

#[derive(Default)]
struct RecordingNotifier {
    notifications: Mutex<Vec<Notification>>,
}

impl NotificationPort for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        self.notifications.lock().unwrap().push(notification);
    }
}

#[derive(Default)]
struct RecordingView {
    no_results: Mutex<usize>,
    cards: Mutex<Vec<ResultCard>>,
    thumbnails: Mutex<Vec<(EntryId, ThumbnailState)>>,
}

impl RecordingView {
    fn thumbnail(&self, id: EntryId) -> Option<ThumbnailState> {
        self.thumbnails
            .lock()
            .unwrap()
            .iter()
            .find(|(slot, _)| *slot == id)
            .map(|(_, state)| state.clone())
    }
}

impl ResultViewPort for RecordingView {
    fn show_no_results(&self) {
        *self.no_results.lock().unwrap() += 1;
    }

    fn render_card(&self, card: &ResultCard) {
        self.cards.lock().unwrap().push(card.clone());
    }

    fn update_thumbnail(&self, id: EntryId, state: &ThumbnailState) {
        self.thumbnails.lock().unwrap().push((id, state.clone()));
    }
}

struct Harness {
    presenter: ResultsPresenter,
    clipboard: Arc<RecordingClipboard>,
    opener: Arc<RecordingOpener>,
    notifier: Arc<RecordingNotifier>,
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}

fn harness(timeout_secs: u64) -> Harness {
    init_tracing();
    let fetcher = HttpThumbnailFetcher::from_config(&ThumbnailConfig {
        timeout_secs,
        ..ThumbnailConfig::default()
    })
    .unwrap();
    let clipboard = Arc::new(RecordingClipboard::default());
    let opener = Arc::new(RecordingOpener::default());
    let notifier = Arc::new(RecordingNotifier::default());
    let presenter = ResultsPresenter::new(PresenterDeps {
        fetcher: Arc::new(fetcher),
        clipboard: clipboard.clone(),
        url_opener: opener.clone(),
        notifier: notifier.clone(),
    });
    Harness {
        presenter,
        clipboard,
        opener,
        notifier,
    }
}

fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let image = image::RgbaImage::from_pixel(width, height, image::Rgba([10, 20, 30, 255]));
    let mut out = Cursor::new(Vec::new());
    image
        .write_to(&mut out, image::ImageFormat::Png)
        .unwrap();
    out.into_inner()
}

fn entry(index_id: i64, title: &str, thumbnail: Option<&str>, url: Option<&str>) -> Value {
    let mut header = json!({ "indexId": index_id, "similarity": "90.5" });
    if let Some(thumbnail) = thumbnail {
        header["thumbnailUrl"] = json!(thumbnail);
    }
    let urls: Vec<&str> = url.into_iter().collect();
    json!({
        "header": header,
        "data": { "title": title, "externalUrls": urls },
    })
}

fn payload(entries: Vec<Value>) -> String {
    json!({ "results": entries }).to_string()
}

#[tokio::test]
async fn test_each_entry_gets_its_own_thumbnail_outcome() {
    let mut server = mockito::Server::new_async().await;
    let ok = server
        .mock("GET", "/a.png")
        .with_status(200)
        .with_header("content-type", "image/png")
        .with_body(png_bytes(4, 2))
        .expect(1)
        .create_async()
        .await;
    let missing = server
        .mock("GET", "/gone.png")
        .with_status(404)
        .expect(1)
        .create_async()
        .await;

    let raw = payload(vec![
        entry(5, "First", Some(&format!("{}/a.png", server.url())), Some("https://src/1")),
        entry(2, "Second", Some(&format!("{}/gone.png", server.url())), None),
        entry(21, "Third", None, Some("https://src/3")),
        entry(999, "Fourth", Some("not a url"), None),
    ]);
    let h = harness(5);
    let view = Arc::new(RecordingView::default());

    let decoded = DecodeResultsUseCase::new().execute(raw.as_bytes());
    let mut session = h.presenter.present(decoded, view.clone());

    assert_eq!(session.state(), PresentationState::Showing { entries: 4 });
    let titles: Vec<String> = view.cards.lock().unwrap().iter().map(|c| c.title.clone()).collect();
    assert_eq!(titles, vec!["First", "Second", "Third", "Fourth"]);
    assert_eq!(view.cards.lock().unwrap()[3].source_name, "Unknown source");

    assert_eq!(session.wait_for_thumbnails().await, 4);
    ok.assert_async().await;
    missing.assert_async().await;

    match view.thumbnail(EntryId::new(0)) {
        Some(ThumbnailState::Loaded(thumbnail)) => {
            assert_eq!((thumbnail.width, thumbnail.height), (4, 2));
        }
        other => panic!("expected loaded thumbnail, got {other:?}"),
    }
    assert!(matches!(
        view.thumbnail(EntryId::new(1)),
        Some(ThumbnailState::Failed(FetchError::NetworkError { .. }))
    ));
    assert!(matches!(
        view.thumbnail(EntryId::new(2)),
        Some(ThumbnailState::Failed(FetchError::InvalidUrl { .. }))
    ));
    assert!(matches!(
        view.thumbnail(EntryId::new(3)),
        Some(ThumbnailState::Failed(FetchError::InvalidUrl { .. }))
    ));
    assert_eq!(view.thumbnails.lock().unwrap().len(), 4);

    assert_eq!(
        session.primary_action(EntryId::new(2)).unwrap(),
        ActionOutcome::Opened {
            url: "https://src/3".to_string()
        }
    );
    assert_eq!(
        session.primary_action(EntryId::new(1)).unwrap(),
        ActionOutcome::NoOp
    );
    assert_eq!(*h.opener.opened.lock().unwrap(), vec!["https://src/3"]);
}

#[tokio::test]
async fn test_secondary_action_copies_title_and_notifies() {
    let raw = payload(vec![entry(5, "Foo", None, Some("https://src/1"))]);
    let h = harness(5);

    let session = h.presenter.present(
        DecodeResultsUseCase::new().execute(raw.as_bytes()),
        Arc::new(RecordingView::default()),
    );

    assert_eq!(
        session.secondary_action(EntryId::new(0)).unwrap(),
        ActionOutcome::Copied {
            title: "Foo".to_string()
        }
    );
    assert_eq!(*h.clipboard.writes.lock().unwrap(), vec!["Foo"]);
    assert_eq!(
        *h.notifier.notifications.lock().unwrap(),
        vec![Notification::TitleCopied {
            title: "Foo".to_string()
        }]
    );
}

#[tokio::test]
async fn test_closing_session_discards_late_thumbnail() {
    let mut server = mockito::Server::new_async().await;
    let body = png_bytes(2, 2);
    let _slow = server
        .mock("GET", "/slow.png")
        .with_status(200)
        .with_chunked_body(move |w| {
            std::thread::sleep(Duration::from_millis(500));
            w.write_all(&body)
        })
        .create_async()
        .await;

    let raw = payload(vec![entry(
        5,
        "Slow",
        Some(&format!("{}/slow.png", server.url())),
        Some("https://src/1"),
    )]);
    let h = harness(5);
    let view = Arc::new(RecordingView::default());

    let mut session = h
        .presenter
        .present(DecodeResultsUseCase::new().execute(raw.as_bytes()), view.clone());
    tokio::time::sleep(Duration::from_millis(50)).await;
    session.close();

    assert_eq!(session.wait_for_thumbnails().await, 0);
    assert!(view.thumbnails.lock().unwrap().is_empty());
    assert_eq!(
        session.primary_action(EntryId::new(0)).unwrap(),
        ActionOutcome::NoOp
    );
    assert!(h.opener.opened.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_skipped_elements_do_not_disturb_neighbours() {
    let raw = r#"{"results":[
        {"header":{"indexId":5},"data":{"title":"Kept"}},
        {"data":{"title":"No header"}},
        {"header":{"indexId":"abc"},"data":{"title":"Bad index"}},
        {"header":{"indexId":"5"},"data":{"title":"Also kept"}}
    ]}"#;
    let h = harness(5);
    let view = Arc::new(RecordingView::default());

    let session = h
        .presenter
        .present(DecodeResultsUseCase::new().execute(raw.as_bytes()), view.clone());

    assert_eq!(session.state(), PresentationState::Showing { entries: 2 });
    assert_eq!(session.results().skipped_count(), 2);
    let cards = view.cards.lock().unwrap();
    assert_eq!(cards[0].id, EntryId::new(0));
    assert_eq!(cards[1].id, EntryId::new(1));
    assert_eq!(cards[1].title, "Also kept");
}

#[tokio::test]
async fn test_malformed_payload_notifies_once() {
    let h = harness(5);
    let view = Arc::new(RecordingView::default());

    let session = h
        .presenter
        .present(DecodeResultsUseCase::new().execute(b"{\"results\": 3}"), view.clone());

    assert_eq!(session.state(), PresentationState::Malformed);
    assert_eq!(*view.no_results.lock().unwrap(), 1);
    assert!(view.cards.lock().unwrap().is_empty());
    assert_eq!(h.notifier.notifications.lock().unwrap().len(), 1);
}
