#![allow(dead_code)]

use admin::Navigator;
use axum::Router;
use tokio::net::TcpListener;

/// Serve a stub REST collaborator on an ephemeral local port and return its
/// base URL.
pub async fn spawn(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

/// Counts the transitions screens ask for instead of performing them.
#[derive(Default)]
pub struct RecordingNavigator {
    pub not_found_redirects: usize,
    pub back_navigations: usize,
}

impl Navigator for RecordingNavigator {
    fn redirect_to_not_found(&mut self) {
        self.not_found_redirects += 1;
    }

    fn back(&mut self) {
        self.back_navigations += 1;
    }
}
