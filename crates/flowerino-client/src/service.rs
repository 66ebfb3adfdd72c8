use flowerino_core::constants;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

/// One generated file delivered by the remote generation operation.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedArtifact {
    pub file_node_uri: String,
    pub content: String,
    pub generate_once: bool,
}

/// Reply payload of the desktop-agent info operation.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct AgentInfo {
    pub version: String,
}

/// Seam to the remote code-generation service.
///
/// `invoke` is the only transport-level method; the typed operations are
/// provided on top of it, so test doubles fake a single method.
pub trait RemoteService {
    /// Invoke a remote operation and unwrap its `messageResult` payload.
    ///
    /// `None` means "service unreachable" in any form: connect failure,
    /// non-2xx status, malformed body, missing result field. Callers must
    /// degrade gracefully instead of treating this as an error.
    fn invoke(&self, operation_path: &str) -> Option<Value>;

    /// Run the generation operation for a resource node. The service must
    /// not persist anything server-side; this client writes the files.
    fn generate_files(&self, node_uri: &str) -> Option<Vec<GeneratedArtifact>> {
        let operation = format!(
            "templateGeneratorService/generateFiles?nodeUri={}&generator={}&writeToDisk=false",
            urlencoding::encode(node_uri),
            constants::GENERATOR_KIND
        );
        decode_payload(self.invoke(&operation)?, &operation)
    }

    /// Fetch the hub's view of the current desktop-agent release.
    fn desktop_agent_info(&self) -> Option<AgentInfo> {
        let operation = "arduinoService/getDesktopAgentInfo";
        decode_payload(self.invoke(operation)?, operation)
    }
}

fn decode_payload<T: serde::de::DeserializeOwned>(payload: Value, operation: &str) -> Option<T> {
    match serde_json::from_value(payload) {
        Ok(decoded) => Some(decoded),
        Err(err) => {
            warn!(operation, error = %err, "unexpected payload shape from service");
            None
        }
    }
}

/// Blocking HTTP client for the hub's service dispatcher.
pub struct HttpServiceClient {
    server_url: String,
    client: reqwest::blocking::Client,
}

impl HttpServiceClient {
    pub fn new(server_url: impl Into<String>) -> Self {
        Self {
            server_url: server_url.into(),
            client: reqwest::blocking::Client::new(),
        }
    }

    pub fn server_url(&self) -> &str {
        &self.server_url
    }

    fn operation_url(&self, operation_path: &str) -> String {
        format!(
            "{}{}/{operation_path}",
            self.server_url,
            constants::SERVICE_PREFIX
        )
    }
}

impl RemoteService for HttpServiceClient {
    fn invoke(&self, operation_path: &str) -> Option<Value> {
        let url = self.operation_url(operation_path);
        debug!(url, "invoking remote service");

        let response = match self.client.get(&url).send() {
            Ok(response) => response,
            Err(err) => {
                warn!(url, error = %err, "error while accessing service");
                return None;
            }
        };
        if !response.status().is_success() {
            warn!(url, status = %response.status(), "service replied with error status");
            return None;
        }

        let body: Value = match response.json() {
            Ok(body) => body,
            Err(err) => {
                warn!(url, error = %err, "service reply is not valid json");
                return None;
            }
        };
        match body.get("messageResult") {
            Some(result) => Some(result.clone()),
            None => {
                warn!(url, "service reply has no messageResult field");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread;
    use std::time::Duration;

    fn bind_test_listener() -> Option<TcpListener> {
        match TcpListener::bind("127.0.0.1:0") {
            Ok(listener) => Some(listener),
            Err(err) if err.kind() == std::io::ErrorKind::PermissionDenied => None,
            Err(err) => panic!("mock server bind failed: {err}"),
        }
    }

    fn spawn_one_shot_server(listener: TcpListener, response: String) -> thread::JoinHandle<String> {
        thread::spawn(move || {
            let (mut stream, _) = listener.accept().expect("mock server accept failed");
            stream
                .set_read_timeout(Some(Duration::from_millis(300)))
                .unwrap();
            let mut request_buf = [0_u8; 4096];
            let read = stream.read(&mut request_buf).unwrap_or(0);
            stream
                .write_all(response.as_bytes())
                .expect("mock server write failed");
            String::from_utf8_lossy(&request_buf[..read]).to_string()
        })
    }

    fn json_response(body: &str) -> String {
        format!(
            "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            body.len(),
            body
        )
    }

    #[test]
    fn invoke_unwraps_message_result() {
        let Some(listener) = bind_test_listener() else {
            return;
        };
        let addr = listener.local_addr().unwrap();
        let server = spawn_one_shot_server(
            listener,
            json_response(r#"{"messageResult":{"version":"1.2.3"}}"#),
        );

        let client = HttpServiceClient::new(format!("http://{addr}"));
        let result = client.invoke("arduinoService/getDesktopAgentInfo");

        let request = server.join().unwrap();
        assert!(request.starts_with("GET /ws-dispatcher/arduinoService/getDesktopAgentInfo "));
        assert_eq!(result, Some(serde_json::json!({"version": "1.2.3"})));
    }

    #[test]
    fn invoke_returns_none_on_error_status() {
        let Some(listener) = bind_test_listener() else {
            return;
        };
        let addr = listener.local_addr().unwrap();
        let server = spawn_one_shot_server(
            listener,
            "HTTP/1.1 500 Internal Server Error\r\nContent-Length: 0\r\nConnection: close\r\n\r\n"
                .to_string(),
        );

        let client = HttpServiceClient::new(format!("http://{addr}"));
        assert_eq!(client.invoke("arduinoService/getDesktopAgentInfo"), None);
        server.join().unwrap();
    }

    #[test]
    fn invoke_returns_none_on_malformed_body() {
        let Some(listener) = bind_test_listener() else {
            return;
        };
        let addr = listener.local_addr().unwrap();
        let server = spawn_one_shot_server(listener, json_response("not json at all"));

        let client = HttpServiceClient::new(format!("http://{addr}"));
        assert_eq!(client.invoke("some/operation"), None);
        server.join().unwrap();
    }

    #[test]
    fn invoke_returns_none_when_message_result_is_missing() {
        let Some(listener) = bind_test_listener() else {
            return;
        };
        let addr = listener.local_addr().unwrap();
        let server = spawn_one_shot_server(listener, json_response(r#"{"other":1}"#));

        let client = HttpServiceClient::new(format!("http://{addr}"));
        assert_eq!(client.invoke("some/operation"), None);
        server.join().unwrap();
    }

    #[test]
    fn invoke_returns_none_when_unreachable() {
        let client = HttpServiceClient::new("http://127.0.0.1:9/never-reachable");
        assert_eq!(client.invoke("some/operation"), None);
    }

    #[test]
    fn generate_files_decodes_artifacts_and_escapes_node_uri() {
        let Some(listener) = bind_test_listener() else {
            return;
        };
        let addr = listener.local_addr().unwrap();
        let body = r#"{"messageResult":[{"fileNodeUri":"fpp:a/b|src/Main.ino","content":"void loop() {}","generateOnce":false}]}"#;
        let server = spawn_one_shot_server(listener, json_response(body));

        let client = HttpServiceClient::new(format!("http://{addr}"));
        let artifacts = client
            .generate_files("fpp:alice/robot|robot.flower-platform")
            .unwrap();

        let request = server.join().unwrap();
        assert!(
            request.contains(
                "nodeUri=fpp%3Aalice%2Frobot%7Crobot.flower-platform&generator=arduino&writeToDisk=false"
            ),
            "unexpected request line: {request}"
        );
        assert_eq!(artifacts.len(), 1);
        assert_eq!(artifacts[0].file_node_uri, "fpp:a/b|src/Main.ino");
        assert!(!artifacts[0].generate_once);
    }

    #[test]
    fn generate_files_rejects_unexpected_payload_shape() {
        let Some(listener) = bind_test_listener() else {
            return;
        };
        let addr = listener.local_addr().unwrap();
        let server =
            spawn_one_shot_server(listener, json_response(r#"{"messageResult":"oops"}"#));

        let client = HttpServiceClient::new(format!("http://{addr}"));
        assert_eq!(client.generate_files("fpp:a/b|b.flower-platform"), None);
        server.join().unwrap();
    }

    #[test]
    fn desktop_agent_info_decodes_version() {
        let Some(listener) = bind_test_listener() else {
            return;
        };
        let addr = listener.local_addr().unwrap();
        let server = spawn_one_shot_server(
            listener,
            json_response(r#"{"messageResult":{"version":"2.0.0"}}"#),
        );

        let client = HttpServiceClient::new(format!("http://{addr}"));
        let info = client.desktop_agent_info().unwrap();
        assert_eq!(info.version, "2.0.0");
        server.join().unwrap();
    }
}
