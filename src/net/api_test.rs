use super::*;

#[test]
fn success_status_covers_2xx_only() {
    assert!(is_success_status(200));
    assert!(is_success_status(204));
    assert!(!is_success_status(199));
    assert!(!is_success_status(302));
    assert!(!is_success_status(403));
    assert!(!is_success_status(500));
}

#[test]
fn status_error_formats_code() {
    assert_eq!(ApiError::Status(403).to_string(), "network response was not ok: status 403");
}

#[test]
fn request_error_formats_cause() {
    assert_eq!(ApiError::Request("offline".to_owned()).to_string(), "request failed: offline");
}

#[cfg(not(feature = "csr"))]
#[test]
fn send_message_is_unavailable_natively() {
    let payload = SendMessageRequest { message: "hi".to_owned(), is_major: false, next_point_id: None };
    let fut = send_message("/api/send_message/1/", "token", &payload);
    let result = poll_ready(fut);
    assert_eq!(result, Err(ApiError::Unavailable));
}

#[cfg(not(feature = "csr"))]
fn poll_ready<F: std::future::Future>(fut: F) -> F::Output {
    use std::task::{Context, Poll, Waker};

    let mut fut = std::pin::pin!(fut);
    let mut cx = Context::from_waker(Waker::noop());
    match fut.as_mut().poll(&mut cx) {
        Poll::Ready(out) => out,
        Poll::Pending => panic!("native stub should resolve immediately"),
    }
}
