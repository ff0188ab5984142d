//! Tests for the HTTP server implementation.

#[cfg(test)]
mod server_tests {
    use std::io::{self, Cursor};
    use std::net::SocketAddr;
    use std::pin::Pin;
    use std::task::{Context, Poll};
    use std::time::Duration;
    use tokio::io::{AsyncRead, AsyncWrite, ReadBuf};
    use tokio::sync::mpsc;
    use tokio::task::JoinSet;

    use crate::pages;
    use crate::router::{ResponseInfo, Router};
    use crate::server::{Error, HttpResponse, HttpServer, ServerConfig};
    use crate::status::StatusCode;

    // Mock TcpStream for testing
    struct MockTcpStream {
        read_data: Cursor<Vec<u8>>,
        write_data: Vec<u8>,
    }

    impl MockTcpStream {
        fn new(read_data: &[u8]) -> Self {
            Self {
                read_data: Cursor::new(read_data.to_vec()),
                write_data: Vec::new(),
            }
        }

        fn written(&self) -> String {
            String::from_utf8_lossy(&self.write_data).into_owned()
        }
    }

    impl AsyncRead for MockTcpStream {
        fn poll_read(
            self: Pin<&mut Self>,
            _cx: &mut Context<'_>,
            buf: &mut ReadBuf<'_>,
        ) -> Poll<io::Result<()>> {
            let this = self.get_mut();
            let n = std::io::Read::read(&mut this.read_data, buf.initialize_unfilled())?;
            buf.advance(n);
            Poll::Ready(Ok(()))
        }
    }

    impl AsyncWrite for MockTcpStream {
        fn poll_write(
            self: Pin<&mut Self>,
            _cx: &mut Context<'_>,
            buf: &[u8],
        ) -> Poll<io::Result<usize>> {
            let this = self.get_mut();
            this.write_data.extend_from_slice(buf);
            Poll::Ready(Ok(buf.len()))
        }

        fn poll_flush(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<io::Result<()>> {
            Poll::Ready(Ok(()))
        }

        fn poll_shutdown(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<io::Result<()>> {
            Poll::Ready(Ok(()))
        }
    }

    async fn exchange(request: &[u8]) -> (Result<(), Error>, String) {
        let router = Router::new(pages::table());
        let mut stream = MockTcpStream::new(request);
        let result = HttpServer::handle_connection(&mut stream, &router, 1024).await;
        (result, stream.written())
    }

    #[test]
    fn test_config_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.addr, "127.0.0.1:8080".parse::<SocketAddr>().unwrap());
        assert_eq!(config.max_connections, 1024);
        assert_eq!(config.read_buffer_size, 8192);
    }

    #[test]
    fn test_config_from_partial_json() {
        let config = ServerConfig::from_json(r#"{"addr": "0.0.0.0:9000"}"#).unwrap();
        assert_eq!(config.addr, "0.0.0.0:9000".parse::<SocketAddr>().unwrap());
        assert_eq!(config.max_connections, 1024);
    }

    #[test]
    fn test_config_rejects_bad_json() {
        assert!(matches!(ServerConfig::from_json("{"), Err(Error::ConfigError(_))));
        assert!(matches!(
            ServerConfig::from_json(r#"{"max_connections": 0}"#),
            Err(Error::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_response_from_response_info() {
        let response = HttpResponse::from(ResponseInfo::plain(StatusCode::Forbidden, "Access Denied"));
        let bytes = String::from_utf8(response.to_bytes()).unwrap();
        assert!(bytes.starts_with("HTTP/1.1 403 Forbidden\r\n"));
        assert!(bytes.contains("Content-Type: text/plain\r\n"));
        assert!(bytes.contains("Content-Length: 13\r\n"));
        assert!(bytes.ends_with("\r\n\r\nAccess Denied"));
    }

    #[test]
    fn test_with_header_replaces_existing() {
        let response = HttpResponse::new(StatusCode::Ok)
            .with_content_type("text/plain")
            .with_content_type("text/html");
        assert_eq!(response.header("content-type"), Some("text/html"));
        assert_eq!(response.headers.iter().filter(|(k, _)| k == "Content-Type").count(), 1);
    }

    #[tokio::test]
    async fn test_handle_connection_index() {
        let (result, written) = exchange(b"GET / HTTP/1.1\r\nHost: localhost\r\n\r\n").await;
        assert!(result.is_ok());
        assert!(written.starts_with("HTTP/1.1 200 OK\r\n"));
        assert!(written.contains("Content-Type: text/html\r\n"));
        assert!(written.ends_with("Index Page"));
    }

    #[tokio::test]
    async fn test_handle_connection_user_with_query() {
        let (result, written) = exchange(b"GET /user/%3Cb%3E?x=1 HTTP/1.1\r\nHost: localhost\r\n\r\n").await;
        assert!(result.is_ok());
        assert!(written.ends_with("User: %3Cb%3E"));
    }

    #[tokio::test]
    async fn test_handle_connection_failure_signals() {
        let (_, written) = exchange(b"GET /bad-request HTTP/1.1\r\nHost: localhost\r\n\r\n").await;
        assert!(written.starts_with("HTTP/1.1 400 Bad Request\r\n"));
        assert!(written.ends_with("Bad Request"));

        let (_, written) = exchange(b"GET /access-denied HTTP/1.1\r\nHost: localhost\r\n\r\n").await;
        assert!(written.starts_with("HTTP/1.1 403 Forbidden\r\n"));
        assert!(written.ends_with("Access Denied"));
    }

    #[tokio::test]
    async fn test_handle_connection_with_not_found() {
        let (result, written) = exchange(b"GET /totally/unknown/path HTTP/1.1\r\nHost: localhost\r\n\r\n").await;
        // not-found is a routed response, not a connection error
        assert!(result.is_ok());
        assert!(written.starts_with("HTTP/1.1 404 Not Found\r\n"));
        assert!(written.contains("Content-Type: text/plain\r\n"));
        assert!(written.ends_with("Page not found"));
    }

    #[tokio::test]
    async fn test_handle_connection_with_method_not_allowed() {
        let (result, written) = exchange(b"POST /user/alice HTTP/1.1\r\nHost: localhost\r\n\r\n").await;
        assert!(matches!(result, Err(Error::MethodNotAllowed(_, ref path)) if path == "/user/alice"));
        assert!(written.starts_with("HTTP/1.1 405 Method Not Allowed\r\n"));
        assert!(written.contains("Allow: GET\r\n"));
    }

    #[tokio::test]
    async fn test_handle_connection_with_invalid_request() {
        let (result, written) = exchange(b"GET /hello HTTP/1.1\r\n\r\n").await;
        assert!(matches!(result, Err(Error::ParseError(_))));
        assert!(written.starts_with("HTTP/1.1 400 Bad Request\r\n"));
        assert!(written.contains("Required header is missing: Host"));
    }

    #[tokio::test]
    async fn test_handle_connection_closed_without_data() {
        let (result, written) = exchange(b"").await;
        assert!(result.is_ok());
        assert!(written.is_empty());
    }

    #[tokio::test]
    async fn test_serve_stops_on_shutdown_signal() {
        let _ = env_logger::builder().is_test(true).try_init();

        let config = ServerConfig {
            addr: "127.0.0.1:0".parse().unwrap(),
            ..ServerConfig::default()
        };
        let server = HttpServer::new(config, Router::new(pages::table()));
        let (shutdown_tx, shutdown_rx) = mpsc::channel(1);

        let handle = tokio::spawn(async move { server.serve(shutdown_rx, JoinSet::new()).await });
        shutdown_tx.send(()).await.unwrap();

        let result = tokio::time::timeout(Duration::from_secs(5), handle)
            .await
            .expect("server did not stop in time")
            .unwrap();
        assert!(result.is_ok());
    }
}
