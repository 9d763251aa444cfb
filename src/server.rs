//! HTTP server exposing card navigation.
//!
//! Every navigation route moves the shared cursor and answers with the card it
//! lands on as JSON. All requests share one [`CardStore`]; a mutex serializes
//! cursor updates so each response reflects a single consistent move.

use std::borrow::Cow;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::Number;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

use crate::flashcards::{Card, CardStore, NavigationError};

const EMPTY_ENGLISH: &str = "No cards available";
const EMPTY_ARABIC: &str = "لا توجد بطاقات";
const INVALID_ENGLISH: &str = "Invalid card number";
const INVALID_ARABIC: &str = "رقم البطاقة غير صالح";

/// Server state shared across requests.
pub struct CardServerState {
    store: Mutex<CardStore>,
}

impl CardServerState {
    pub fn new(store: CardStore) -> Self {
        Self {
            store: Mutex::new(store),
        }
    }

    /// Navigation never leaves the cursor out of range, so a poisoned lock is
    /// still safe to use.
    fn lock_store(&self) -> MutexGuard<'_, CardStore> {
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// JSON body returned by the navigation routes.
#[derive(Debug, Serialize)]
pub struct CardPayload<'a> {
    #[serde(flatten)]
    pub card: Cow<'a, Card>,
    pub position: usize,
    pub total: usize,
    /// Only reported by `/goto`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<bool>,
}

impl<'a> CardPayload<'a> {
    fn card(card: &'a Card, store: &CardStore) -> Self {
        Self {
            card: Cow::Borrowed(card),
            position: store.position(),
            total: store.size(),
            error: None,
        }
    }

    /// Placeholder when there are no cards at all
    fn empty() -> Self {
        Self {
            card: Cow::Owned(Card::new(EMPTY_ENGLISH, EMPTY_ARABIC, "", "")),
            position: 0,
            total: 0,
            error: None,
        }
    }

    /// Placeholder for a `/goto` target that does not exist
    fn invalid(total: usize) -> Self {
        Self {
            card: Cow::Owned(Card::new(INVALID_ENGLISH, INVALID_ARABIC, "", "")),
            position: 0,
            total,
            error: Some(true),
        }
    }
}

/// Body of a `/goto` request.
#[derive(Debug, Deserialize)]
pub struct GotoRequest {
    /// 1-based card number
    #[serde(default = "default_card_number")]
    pub card_number: Number,
}

fn default_card_number() -> Number {
    Number::from(1i64)
}

impl GotoRequest {
    /// The requested card number as an integer, or `None` for a fractional
    /// number. Whole numbers beyond the i64 range saturate, so they still
    /// land outside every collection.
    fn target(&self) -> Option<i64> {
        if let Some(n) = self.card_number.as_i64() {
            return Some(n);
        }
        if self.card_number.as_u64().is_some() {
            return Some(i64::MAX);
        }

        // Integers too large for u64 are parsed as f64
        let value = self.card_number.as_f64()?;
        (value.fract() == 0.0).then(|| value as i64)
    }
}

type Navigation = fn(&mut CardStore) -> Result<&Card, NavigationError>;

/// Apply a cursor move and answer with the resulting card.
fn navigate(state: &CardServerState, name: &str, op: Navigation) -> Response {
    let mut store = state.lock_store();

    let moved = op(&mut *store).map(|_| ());
    match moved.and_then(|()| store.current()) {
        Ok(card) => {
            log::debug!("{}: now at card {}/{}", name, store.position(), store.size());
            Json(CardPayload::card(card, &store)).into_response()
        }
        Err(e) => {
            log::debug!("{}: {}", name, e);
            Json(CardPayload::empty()).into_response()
        }
    }
}

async fn next_card(State(state): State<Arc<CardServerState>>) -> Response {
    navigate(&state, "next", CardStore::advance)
}

async fn previous_card(State(state): State<Arc<CardServerState>>) -> Response {
    navigate(&state, "previous", CardStore::retreat)
}

async fn first_card(State(state): State<Arc<CardServerState>>) -> Response {
    navigate(&state, "first", CardStore::jump_to_first)
}

async fn last_card(State(state): State<Arc<CardServerState>>) -> Response {
    navigate(&state, "last", CardStore::jump_to_last)
}

async fn go_to_card(
    State(state): State<Arc<CardServerState>>,
    Json(request): Json<GotoRequest>,
) -> Response {
    let Some(target) = request.target() else {
        log::debug!("goto: rejected card number {}", request.card_number);
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            "card_number must be a whole number",
        )
            .into_response();
    };

    let mut store = state.lock_store();

    let moved = store.jump_to(target).map(|_| ());
    match moved.and_then(|()| store.current()) {
        Ok(card) => {
            log::debug!("goto: now at card {}/{}", store.position(), store.size());
            let payload = CardPayload {
                error: Some(false),
                ..CardPayload::card(card, &store)
            };
            Json(payload).into_response()
        }
        Err(e) => {
            log::debug!("goto: {}", e);
            Json(CardPayload::invalid(store.size())).into_response()
        }
    }
}

/// Dump the whole collection.
async fn all_cards(State(state): State<Arc<CardServerState>>) -> Response {
    let store = state.lock_store();
    Json(store.cards()).into_response()
}

/// Minimal page showing the current card.
async fn index(State(state): State<Arc<CardServerState>>) -> Html<String> {
    let store = state.lock_store();
    Html(render_index(&store))
}

fn render_index(store: &CardStore) -> String {
    let body = match store.current() {
        Ok(card) => format!(
            "<h1>{}</h1>\n<h2 dir=\"rtl\">{}</h2>\n<p>{} &middot; {}</p>\n<p>{} / {}</p>",
            html_escape::encode_text(&card.english),
            html_escape::encode_text(&card.arabic),
            html_escape::encode_text(&card.form),
            html_escape::encode_text(&card.pronunciation),
            store.position(),
            store.size(),
        ),
        Err(_) => format!(
            "<h1>{}</h1>\n<h2 dir=\"rtl\">{}</h2>\n<p>0 / 0</p>",
            EMPTY_ENGLISH, EMPTY_ARABIC
        ),
    };

    format!(
        "<!DOCTYPE html>\n<html>\n<head><meta charset=\"utf-8\"><title>Arabic Verb Flashcards</title></head>\n<body>\n{}\n</body>\n</html>\n",
        body
    )
}

/// Build the router over a card store.
pub fn router(store: CardStore) -> Router {
    let state = Arc::new(CardServerState::new(store));

    Router::new()
        .route("/", get(index))
        .route("/next", get(next_card))
        .route("/previous", get(previous_card))
        .route("/first", get(first_card))
        .route("/last", get(last_card))
        .route("/goto", post(go_to_card))
        .route("/cards", get(all_cards))
        .with_state(state)
}

/// Card server handle for managing the server lifecycle.
pub struct CardServer {
    /// Address the server is listening on.
    pub addr: SocketAddr,
    /// Shutdown signal sender.
    shutdown_tx: Option<oneshot::Sender<()>>,
    task: Option<JoinHandle<()>>,
}

impl CardServer {
    /// Get the base URL for this server.
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Signal the server to stop accepting connections.
    pub fn stop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }

    /// Stop the server and wait for in-flight requests to finish.
    pub async fn shutdown(mut self) {
        self.stop();
        if let Some(task) = self.task.take() {
            if let Err(e) = task.await {
                log::error!("Card server task failed: {}", e);
            }
        }
    }
}

/// Start the card server on `bind_addr` (`host:port`).
pub async fn start_server(
    bind_addr: &str,
    store: CardStore,
) -> Result<CardServer, Box<dyn std::error::Error + Send + Sync>> {
    let app = router(store);

    let listener = TcpListener::bind(bind_addr).await?;
    let addr = listener.local_addr()?;

    log::info!("Flashcard server started on http://{}", addr);

    // Create shutdown channel
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    let task = tokio::spawn(async move {
        let result = axum::serve(listener, app)
            .with_graceful_shutdown(async {
                let _ = shutdown_rx.await;
                log::info!("Flashcard server shutting down");
            })
            .await;
        if let Err(e) = result {
            log::error!("Flashcard server error: {}", e);
        }
    });

    Ok(CardServer {
        addr,
        shutdown_tx: Some(shutdown_tx),
        task: Some(task),
    })
}
