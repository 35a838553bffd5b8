use axum::body::to_bytes;
use axum::body::Body;
use axum::http::{HeaderValue, Request};
use axum::middleware::Next;
use axum::response::Response;
use uuid::Uuid;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Middleware для логирования HTTP запросов
///
/// Пишет в tracing:
/// - идентификатор запроса (он же возвращается в заголовке `x-request-id`)
/// - длительность (ms)
/// - размер ответа (форматированный)
/// - статус код, метод и путь
pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let request_id = Uuid::new_v4();
    let method = req.method().clone();
    let uri = req.uri().clone();

    let response = next.run(req).await;
    let (mut parts, body) = response.into_parts();

    if let Ok(value) = HeaderValue::from_str(&request_id.to_string()) {
        parts.headers.insert(REQUEST_ID_HEADER, value);
    }

    // Читаем тело ответа, чтобы узнать реальный размер
    let bytes = match to_bytes(body, usize::MAX).await {
        Ok(b) => b,
        Err(e) => {
            tracing::error!(
                request_id = %request_id,
                "{:>5}ms | {:>12} | {} {:>6} {} | {}",
                start.elapsed().as_millis(),
                "error",
                parts.status.as_u16(),
                method,
                uri.path(),
                e
            );
            return Response::from_parts(parts, Body::default());
        }
    };

    let size = bytes.len();
    let duration = start.elapsed();

    if parts.status.is_server_error() {
        tracing::warn!(
            request_id = %request_id,
            "{:>5}ms | {:>12} | {} {:>6} {}",
            duration.as_millis(),
            format_number(size),
            parts.status.as_u16(),
            method,
            uri.path()
        );
    } else {
        tracing::info!(
            request_id = %request_id,
            "{:>5}ms | {:>12} | {} {:>6} {}",
            duration.as_millis(),
            format_number(size),
            parts.status.as_u16(),
            method,
            uri.path()
        );
    }

    // Создаем новый ответ с прочитанным телом
    Response::from_parts(parts, Body::from(bytes))
}

/// Число с разделителями триад: 1234567 -> "1.234.567"
fn format_number(n: usize) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push('.');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}
