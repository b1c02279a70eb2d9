use std::collections::HashMap;
use std::net::SocketAddr;

use http::Request;

use super::RequestDetails;

impl RequestDetails {
    /// Copies the reportable parts out of an inbound request. The body is
    /// not read (it is generic and may already be consumed). The peer
    /// address comes from a `SocketAddr` request extension when the server
    /// stored one; otherwise set `ip_address` and `form`/`raw_data`
    /// yourself when you have them.
    pub fn from_request<B>(req: &Request<B>) -> Self {
        let ip_address = req
            .extensions()
            .get::<SocketAddr>()
            .map(ToString::to_string)
            .unwrap_or_default();

        let host_name = req
            .uri()
            .host()
            .map(str::to_string)
            .or_else(|| {
                req.headers()
                    .get(http::header::HOST)
                    .and_then(|value| value.to_str().ok())
                    .map(str::to_string)
            })
            .unwrap_or_default();

        let mut query: HashMap<String, Vec<String>> = HashMap::new();
        if let Some(raw) = req.uri().query() {
            for (key, value) in url::form_urlencoded::parse(raw.as_bytes()) {
                query.entry(key.into_owned()).or_default().push(value.into_owned());
            }
        }

        let mut headers: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in req.headers() {
            // Non-UTF-8 header values are skipped rather than mangled
            if let Ok(value) = value.to_str() {
                headers
                    .entry(name.to_string())
                    .or_default()
                    .push(value.to_string());
            }
        }

        RequestDetails {
            host_name,
            url: req.uri().to_string(),
            http_method: req.method().to_string(),
            ip_address,
            query_string: flatten_multi_map(query),
            headers: flatten_multi_map(headers),
            ..Default::default()
        }
    }
}

/// Flattens a multi-valued map into a single-valued one. A key with several
/// values gets them joined with `; ` inside brackets; a sole value is used
/// directly.
pub fn flatten_multi_map(map: HashMap<String, Vec<String>>) -> HashMap<String, String> {
    map.into_iter()
        .map(|(key, values)| {
            let flat = if values.len() > 1 {
                format!("[{}]", values.join("; "))
            } else {
                values.into_iter().next().unwrap_or_default()
            };
            (key, flat)
        })
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn single_values_pass_through() {
        let mut map = HashMap::new();
        map.insert("accept".to_string(), vec!["text/html".to_string()]);

        let flat = flatten_multi_map(map);
        assert_eq!(flat["accept"], "text/html");
    }

    #[test]
    fn multiple_values_are_joined_in_brackets() {
        let mut map = HashMap::new();
        map.insert(
            "tag".to_string(),
            vec!["a".to_string(), "b".to_string(), "c".to_string()],
        );

        let flat = flatten_multi_map(map);
        assert_eq!(flat["tag"], "[a; b; c]");
    }

    #[test]
    fn extracts_method_url_and_query() {
        let req = Request::builder()
            .method("POST")
            .uri("https://svc.example.com/submit?tag=a&tag=b&id=7")
            .header("x-trace", "abc")
            .body(())
            .unwrap();

        let details = RequestDetails::from_request(&req);

        assert_eq!(details.http_method, "POST");
        assert_eq!(details.host_name, "svc.example.com");
        assert_eq!(details.url, "https://svc.example.com/submit?tag=a&tag=b&id=7");
        assert_eq!(details.query_string["tag"], "[a; b]");
        assert_eq!(details.query_string["id"], "7");
        assert_eq!(details.headers["x-trace"], "abc");
        assert_eq!(details.ip_address, "");
    }

    #[test]
    fn peer_address_extension_fills_ip_address() {
        let addr: SocketAddr = "10.0.0.7:51412".parse().unwrap();
        let req = Request::builder()
            .uri("/submit")
            .extension(addr)
            .body(())
            .unwrap();

        let details = RequestDetails::from_request(&req);
        assert_eq!(details.ip_address, "10.0.0.7:51412");
    }

    #[test]
    fn host_header_is_fallback_for_relative_uris() {
        let req = Request::builder()
            .uri("/health")
            .header("host", "internal:8080")
            .body(())
            .unwrap();

        let details = RequestDetails::from_request(&req);
        assert_eq!(details.host_name, "internal:8080");
    }
}
