//! Tests of the HTTP task store, against a local server that replies canned responses

use std::sync::{Arc, Mutex};

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use task_calendar::client::TaskClient;
use task_calendar::store::HttpTaskStore;
use task_calendar::traits::TaskStore;
use task_calendar::{DateKey, Planner, Task};


/// A request, as received by the local server
#[derive(Clone, Debug)]
struct ReceivedRequest {
    request_line: String,
    body: String,
}

/// Start a server that answers every connection with the next canned response (status code, body).
/// Returns its base URL, and the requests it received so far
async fn canned_server(responses: Vec<(u16, &'static str)>) -> (String, Arc<Mutex<Vec<ReceivedRequest>>>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    let received = Arc::new(Mutex::new(Vec::new()));

    let received_by_server = Arc::clone(&received);
    tokio::spawn(async move {
        for (status, body) in responses {
            let (mut socket, _) = match listener.accept().await {
                Ok(conn) => conn,
                Err(_) => return,
            };

            let request = read_request(&mut socket).await;
            received_by_server.lock().unwrap().push(request);

            let response = format!(
                "HTTP/1.1 {} Canned\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status, body.len(), body
            );
            let _ = socket.write_all(response.as_bytes()).await;
            let _ = socket.shutdown().await;
        }
    });

    (format!("http://{}/api/task", address), received)
}

async fn read_request(socket: &mut tokio::net::TcpStream) -> ReceivedRequest {
    let mut data = Vec::new();
    let mut buffer = [0u8; 1024];

    let header_end = loop {
        let n = socket.read(&mut buffer).await.unwrap();
        if n == 0 {
            break data.len();
        }
        data.extend_from_slice(&buffer[..n]);
        if let Some(pos) = find(&data, b"\r\n\r\n") {
            break pos + 4;
        }
    };

    let headers = String::from_utf8_lossy(&data[..header_end]).to_string();
    let content_length = headers.lines()
        .filter_map(|line| {
            let (name, value) = line.split_once(':')?;
            if name.eq_ignore_ascii_case("content-length") {
                value.trim().parse::<usize>().ok()
            } else {
                None
            }
        })
        .next()
        .unwrap_or(0);

    while data.len() < header_end + content_length {
        let n = socket.read(&mut buffer).await.unwrap();
        if n == 0 {
            break;
        }
        data.extend_from_slice(&buffer[..n]);
    }

    ReceivedRequest {
        request_line: headers.lines().next().unwrap_or_default().to_string(),
        body: String::from_utf8_lossy(&data[header_end..]).to_string(),
    }
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|window| window == needle)
}


#[tokio::test]
async fn read_tasks() {
    let _ = env_logger::builder().is_test(true).try_init();

    let (url, received) = canned_server(vec![
        (200, r#"{"userId": "42", "date": "5-3-2024", "tasks": [{"text": "Read", "done": true}]}"#),
        (404, r#"{"message": "Tasks not found"}"#),
        (200, r#"{}"#),
        (500, r#"{"message": "oops"}"#),
    ]).await;
    let store = HttpTaskStore::new(&url, "42").unwrap();
    let key = DateKey::new(5, 3, 2024);

    assert_eq!(store.read_tasks(&key).await.unwrap(), vec![Task::new("Read", true)]);
    assert!(store.read_tasks(&key).await.unwrap().is_empty());
    assert!(store.read_tasks(&DateKey::shared_defaults()).await.unwrap().is_empty());
    assert!(store.read_tasks(&key).await.is_err());

    let received = received.lock().unwrap().clone();
    assert_eq!(received[0].request_line, "GET /api/task/42/5-3-2024 HTTP/1.1");
    assert_eq!(received[2].request_line, "GET /api/task/42/shared_default_tasks HTTP/1.1");
}

#[tokio::test]
async fn replace_tasks() {
    let _ = env_logger::builder().is_test(true).try_init();

    let (url, received) = canned_server(vec![
        (201, r#"{"message": "saved"}"#),
        (400, r#"{"message": "bad request"}"#),
    ]).await;
    let store = HttpTaskStore::new(&url, "42").unwrap();
    let key = DateKey::new(5, 3, 2024);

    store.replace_tasks(&key, &[Task::new("Read", false)]).await.unwrap();
    assert!(store.replace_tasks(&key, &[]).await.is_err());

    let received = received.lock().unwrap().clone();
    assert_eq!(received[0].request_line, "POST /api/task HTTP/1.1");
    let body: serde_json::Value = serde_json::from_str(&received[0].body).unwrap();
    assert_eq!(body, serde_json::json!({
        "userId": "42",
        "date": "5-3-2024",
        "tasks": [{"text": "Read", "done": false}],
    }));
}

#[tokio::test]
async fn unreachable_server() {
    let _ = env_logger::builder().is_test(true).try_init();

    // Nothing listens on this port once the listener is dropped
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let url = format!("http://{}/api/task", listener.local_addr().unwrap());
    drop(listener);

    let mut planner = Planner::new(TaskClient::new(HttpTaskStore::new(&url, "42").unwrap()));
    let tasks = planner.tasks_for(&DateKey::new(5, 3, 2024)).await;
    assert_eq!(tasks, task_calendar::config::default_tasks());
}
