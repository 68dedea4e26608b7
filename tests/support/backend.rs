//! Local HTTP server standing in for the token endpoint, the case API and
//! the document repository.

use std::collections::HashMap;
use std::io::Read;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use serde_json::{json, Value};
use tiny_http::{Header, Method, Request, Response, Server};

use super::fixtures::{CASE_TOKEN, REPOSITORY_TOKEN, SITE_TITLE, TENANT};

/// How the fake services answer.
#[derive(Debug, Clone)]
pub struct Behavior {
    /// Status of the case API token endpoint
    pub token_status: u16,
    /// Status of the repository login
    pub login_status: u16,
    /// Status of the folder lookup
    pub folder_status: u16,
    /// Status of file uploads
    pub upload_status: u16,
    /// `(numberOfRows, totalNumberOfRows)` keyed by scope value
    pub counts: HashMap<String, (i64, i64)>,
}

impl Default for Behavior {
    fn default() -> Self {
        Self {
            token_status: 200,
            login_status: 200,
            folder_status: 200,
            upload_status: 200,
            counts: HashMap::new(),
        }
    }
}

impl Behavior {
    pub fn with_count(mut self, caseworker: &str, rows: i64, total: i64) -> Self {
        self.counts.insert(caseworker.to_string(), (rows, total));
        self
    }
}

/// Everything the fake services saw.
#[derive(Debug, Clone, Default)]
pub struct Recorded {
    pub token_forms: Vec<String>,
    pub login_forms: Vec<String>,
    pub case_bodies: Vec<Value>,
    pub case_auth: Vec<String>,
    pub folder_urls: Vec<String>,
    pub uploads: Vec<(String, Vec<u8>)>,
}

pub struct FakeBackend {
    pub base: String,
    recorded: Arc<Mutex<Recorded>>,
    stop: Arc<AtomicBool>,
    handle: Option<thread::JoinHandle<()>>,
}

impl FakeBackend {
    pub fn start(behavior: Behavior) -> Self {
        let server = Server::http("127.0.0.1:0").expect("http server");
        let base = format!("http://{}", server.server_addr());
        let recorded = Arc::new(Mutex::new(Recorded::default()));
        let stop = Arc::new(AtomicBool::new(false));

        let rec = Arc::clone(&recorded);
        let stop_flag = Arc::clone(&stop);
        let handle = thread::spawn(move || {
            while !stop_flag.load(Ordering::Relaxed) {
                let req = match server.recv_timeout(Duration::from_millis(100)) {
                    Ok(Some(req)) => req,
                    Ok(None) => continue,
                    Err(_) => break,
                };
                serve(req, &behavior, &rec);
            }
        });

        Self {
            base,
            recorded,
            stop,
            handle: Some(handle),
        }
    }

    pub fn recorded(&self) -> Recorded {
        self.recorded.lock().expect("recorded lock").clone()
    }

    pub fn token_url(&self) -> String {
        format!("{}/token", self.base)
    }

    pub fn case_url(&self) -> String {
        format!("{}/api/Document/GetList?api-version=2.0-Case", self.base)
    }

    pub fn site_url(&self) -> String {
        format!("{}/Teams/tea-teamsite10168", self.base)
    }
}

impl Drop for FakeBackend {
    fn drop(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

fn json_response(status: u16, body: Value) -> Response<std::io::Cursor<Vec<u8>>> {
    Response::from_string(body.to_string())
        .with_status_code(status)
        .with_header(
            Header::from_bytes("Content-Type", "application/json").expect("content-type header"),
        )
}

fn header_value(req: &Request, name: &'static str) -> String {
    req.headers()
        .iter()
        .find(|h| h.field.equiv(name))
        .map(|h| h.value.as_str().to_string())
        .unwrap_or_default()
}

fn serve(mut req: Request, behavior: &Behavior, recorded: &Mutex<Recorded>) {
    let url = req.url().to_string();
    let path = url.split('?').next().unwrap_or_default().to_string();
    let method = req.method().clone();
    let auth = header_value(&req, "Authorization");

    let mut body = Vec::new();
    let _ = req.as_reader().read_to_end(&mut body);
    let mut rec = recorded.lock().expect("recorded lock");

    let response = if method == Method::Post && path == "/token" {
        rec.token_forms.push(String::from_utf8_lossy(&body).to_string());
        if behavior.token_status == 200 {
            json_response(200, json!({"access_token": CASE_TOKEN, "token_type": "Bearer"}))
        } else {
            json_response(behavior.token_status, json!({"error": "unauthorized_client"}))
        }
    } else if method == Method::Post && path == format!("/{}/oauth2/v2.0/token", TENANT) {
        rec.login_forms.push(String::from_utf8_lossy(&body).to_string());
        if behavior.login_status == 200 {
            json_response(200, json!({"access_token": REPOSITORY_TOKEN, "token_type": "Bearer"}))
        } else {
            json_response(behavior.login_status, json!({"error": "invalid_client"}))
        }
    } else if method == Method::Put && path == "/api/Document/GetList" {
        let parsed: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);
        rec.case_bodies.push(parsed.clone());
        rec.case_auth.push(auth.clone());
        if auth != format!("Bearer {}", CASE_TOKEN) {
            json_response(401, json!({"message": "unauthorized"}))
        } else {
            let scope = parsed["caseworker"]["kspIdentity"]
                .as_object()
                .and_then(|m| m.values().next())
                .and_then(|v| v.as_str())
                .unwrap_or_default()
                .to_string();
            let (rows, total) = behavior.counts.get(&scope).copied().unwrap_or((0, 0));
            json_response(
                200,
                json!({
                    "pagingInformation": {"numberOfRows": rows, "totalNumberOfRows": total},
                    "documents": []
                }),
            )
        }
    } else if auth != format!("Bearer {}", REPOSITORY_TOKEN) {
        json_response(401, json!({"error": "access denied"}))
    } else if method == Method::Get && path == "/Teams/tea-teamsite10168/_api/web" {
        json_response(200, json!({"Title": SITE_TITLE}))
    } else if method == Method::Post && path.contains("/Files/add(") {
        rec.uploads.push((url.clone(), body));
        json_response(behavior.upload_status, json!({"Name": "uploaded"}))
    } else if method == Method::Get && path.contains("GetFolderByServerRelativeUrl(") {
        rec.folder_urls.push(url.clone());
        json_response(
            behavior.folder_status,
            json!({
                "ServerRelativeUrl": "/Teams/tea-teamsite10168/Delte dokumenter/Dokumentsøgning",
                "Exists": true
            }),
        )
    } else {
        json_response(404, json!({"error": "not found", "path": path}))
    };

    drop(rec);
    let _ = req.respond(response);
}
