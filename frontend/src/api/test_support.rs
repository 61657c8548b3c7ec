#[cfg(test)]
pub mod mock {
    use crate::api::client::{register_mock, MockResponse, TestResponder};
    use crate::api::ApiError;
    use reqwest::Method;
    use serde_json::Value;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    pub const POST: Method = Method::POST;

    #[derive(Clone)]
    pub struct MockServer {
        inner: Arc<Mutex<Inner>>,
        base: String,
    }

    struct Inner {
        routes: Vec<Route>,
        received: Vec<Received>,
    }

    #[derive(Clone)]
    struct Route {
        method: Method,
        path: String,
        body: Option<Value>,
        response: MockResponse,
    }

    #[derive(Clone)]
    struct Received {
        method: Method,
        path: String,
        body: Option<Value>,
    }

    impl MockServer {
        pub async fn start_async() -> Self {
            Self::start()
        }

        pub fn start() -> Self {
            static NEXT_ID: AtomicUsize = AtomicUsize::new(1);
            let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
            Self {
                inner: Arc::new(Mutex::new(Inner {
                    routes: Vec::new(),
                    received: Vec::new(),
                })),
                base: format!("http://mock-{}.local", id),
            }
        }

        pub fn url(&self, path: &str) -> String {
            register_mock(self.base.clone(), Arc::new(self.clone()));
            format!("{}{}", self.base, path)
        }

        pub fn mock<F>(&self, f: F)
        where
            F: FnOnce(&mut When, &mut Then),
        {
            let mut when = When::default();
            let mut then = Then::default();
            f(&mut when, &mut then);

            let method = when.method.clone().expect("mock requires method");
            let path = when.path.clone().expect("mock requires path");
            let status = then.status.unwrap_or(200);
            let response = match then.bytes.take() {
                Some((content_type, bytes)) => MockResponse::bytes(status, content_type, bytes),
                None => MockResponse::json(
                    status,
                    then.body.take().unwrap_or_else(|| serde_json::json!({})),
                ),
            };

            let mut inner = self.inner.lock().expect("mock lock");
            inner.routes.push(Route {
                method,
                path,
                body: when.body.take(),
                response,
            });
        }

        /// Number of requests received for `method` + `path`, matched or not.
        pub fn hits(&self, method: Method, path: &str) -> usize {
            let inner = self.inner.lock().expect("mock lock");
            inner
                .received
                .iter()
                .filter(|r| r.method == method && r.path == path)
                .count()
        }

        pub fn total_hits(&self) -> usize {
            self.inner.lock().expect("mock lock").received.len()
        }

        pub fn last_body(&self, path: &str) -> Option<Value> {
            let inner = self.inner.lock().expect("mock lock");
            inner
                .received
                .iter()
                .rev()
                .find(|r| r.path == path)
                .and_then(|r| r.body.clone())
        }
    }

    fn request_json(request: &reqwest::Request) -> Option<Value> {
        let bytes = request.body()?.as_bytes()?;
        serde_json::from_slice(bytes).ok()
    }

    impl TestResponder for MockServer {
        fn respond(&self, request: &reqwest::Request) -> Result<MockResponse, ApiError> {
            let method = request.method();
            let path = request.url().path();
            let body = request_json(request);
            let mut inner = self.inner.lock().map_err(|_| ApiError::unknown("mock lock"))?;
            inner.received.push(Received {
                method: method.clone(),
                path: path.to_string(),
                body: body.clone(),
            });

            let route = inner
                .routes
                .iter()
                .rev()
                .find(|route| {
                    route.method == *method
                        && route.path == path
                        && route.body.as_ref().map_or(true, |expected| Some(expected) == body.as_ref())
                })
                .cloned();

            route
                .map(|route| route.response)
                .ok_or_else(|| {
                    ApiError::request_failed(format!("No mock for {} {}", method, path))
                })
        }
    }

    #[derive(Default)]
    pub struct When {
        method: Option<Method>,
        path: Option<String>,
        body: Option<Value>,
    }

    impl When {
        pub fn method(&mut self, method: Method) -> &mut Self {
            self.method = Some(method);
            self
        }

        pub fn path(&mut self, path: &str) -> &mut Self {
            self.path = Some(path.to_string());
            self
        }

        pub fn json_body(&mut self, body: Value) -> &mut Self {
            self.body = Some(body);
            self
        }
    }

    #[derive(Default)]
    pub struct Then {
        status: Option<u16>,
        body: Option<Value>,
        bytes: Option<(&'static str, Vec<u8>)>,
    }

    impl Then {
        pub fn status(&mut self, status: u16) -> &mut Self {
            self.status = Some(status);
            self
        }

        pub fn json_body(&mut self, body: Value) -> &mut Self {
            self.body = Some(body);
            self
        }

        pub fn pdf_body(&mut self, bytes: &[u8]) -> &mut Self {
            self.bytes = Some(("application/pdf", bytes.to_vec()));
            self
        }
    }
}
