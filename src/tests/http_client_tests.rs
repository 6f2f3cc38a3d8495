#[cfg(test)]
mod tests {
    use std::net::SocketAddr;

    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    use crate::errors::StayError;
    use crate::implementations::config::ClientConfig;
    use crate::implementations::http_client::HttpStayClient;
    use crate::models::common::{PropertyType, TypeSelector};
    use crate::models::filter::{FilterState, PropertyQuery, SearchQuery};
    use crate::traits::StayApi;
    use crate::tests::mock_api::setup;

    fn client() -> HttpStayClient {
        HttpStayClient::new(&ClientConfig::default()).unwrap()
    }

    #[test]
    fn collection_endpoints_keep_trailing_slash() {
        setup();
        let client = client();
        assert_eq!(
            client.endpoint(&["properties"], true, &[]).as_str(),
            "http://localhost:8000/api/properties/"
        );
        assert_eq!(
            client.endpoint(&["properties", "featured"], false, &[]).as_str(),
            "http://localhost:8000/api/properties/featured"
        );
    }

    #[test]
    fn ids_are_percent_encoded_as_one_segment() {
        setup();
        let url = client().endpoint(&["properties", "a/b c"], false, &[]);
        assert_eq!(url.path(), "/api/properties/a%2Fb%20c");
    }

    #[test]
    fn empty_query_has_no_question_mark() {
        setup();
        let query = PropertyQuery::default();
        assert!(query.is_empty());
        let url = client().endpoint(&["properties"], true, &query.query_pairs());
        assert_eq!(url.query(), None);
    }

    #[test]
    fn property_query_omits_all_and_empty_search() {
        setup();
        let query = PropertyQuery {
            property_type: TypeSelector::All,
            price_range: Some((1000.0, 3000.0)),
            capacity: Some(4),
            search: Some(String::new()),
        };
        assert_eq!(
            query.query_pairs(),
            vec![
                ("min_price", "1000".to_string()),
                ("max_price", "3000".to_string()),
                ("capacity", "4".to_string()),
            ]
        );
    }

    #[test]
    fn property_query_from_filter_state() {
        setup();
        let filters = FilterState::default()
            .with_type(TypeSelector::Only(PropertyType::Homestay))
            .with_search("tea garden");
        let query = PropertyQuery::from(&filters);

        let url = client().endpoint(&["properties"], true, &query.query_pairs());
        assert_eq!(url.query(), Some("type=Homestay&search=tea+garden"));
    }

    #[test]
    fn search_query_params() {
        setup();
        let query = SearchQuery {
            q: Some("misty".to_string()),
            property_type: TypeSelector::Only(PropertyType::Tent),
            min_price: Some(1500.5),
            max_price: None,
        };
        assert_eq!(
            query.query_pairs(),
            vec![
                ("q", "misty".to_string()),
                ("type", "Tent".to_string()),
                ("min_price", "1500.5".to_string()),
            ]
        );
    }

    #[test]
    fn inquiry_limit_is_a_query_param() {
        setup();
        let url = client().endpoint(&["bookings", "inquiries"], false, &[("limit", "25".to_string())]);
        assert_eq!(url.as_str(), "http://localhost:8000/api/bookings/inquiries?limit=25");
    }

    /// Serve one canned HTTP response on a local port
    async fn serve_once(status_line: &'static str, body: &'static str) -> SocketAddr {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();
        });
        addr
    }

    fn client_for(addr: SocketAddr) -> HttpStayClient {
        let config = ClientConfig {
            backend_url: format!("http://{}", addr),
            timeout_secs: 5,
            ..ClientConfig::default()
        };
        HttpStayClient::new(&config).unwrap()
    }

    #[tokio::test]
    async fn not_found_maps_to_not_found() {
        setup();
        let addr = serve_once("404 Not Found", r#"{"detail":"Property not found"}"#).await;

        match client_for(addr).get_property("abc").await {
            Err(StayError::NotFound(path)) => assert_eq!(path, "/api/properties/abc"),
            other => panic!("expected NotFound, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn server_error_keeps_status_and_body() {
        setup();
        let addr = serve_once("500 Internal Server Error", "boom").await;

        match client_for(addr).featured_properties().await {
            Err(StayError::Http { status, message }) => {
                assert_eq!(status, 500);
                assert_eq!(message, "boom");
            }
            other => panic!("expected Http error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn empty_error_body_uses_reason_phrase() {
        setup();
        let addr = serve_once("503 Service Unavailable", "").await;

        match client_for(addr).list_testimonials().await {
            Err(StayError::Http { status, message }) => {
                assert_eq!(status, 503);
                assert_eq!(message, "Service Unavailable");
            }
            other => panic!("expected Http error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn decodes_mongo_id_and_lowercase_type() {
        setup();
        let body = r#"[{
            "_id": "1",
            "title": "Mist Valley Cottage",
            "type": "cottage",
            "price": 2500,
            "capacity": "4 guests",
            "image": "https://example.com/mist.jpg",
            "description": "Tea estate views",
            "location": "Vattavada"
        }]"#;
        let addr = serve_once("200 OK", body).await;

        let properties = client_for(addr).list_properties(&PropertyQuery::default()).await.unwrap();
        assert_eq!(properties.len(), 1);
        assert_eq!(properties[0].id.as_deref(), Some("1"));
        assert_eq!(properties[0].property_type, PropertyType::Cottage);
        assert_eq!(properties[0].min_guests, 1);
        assert_eq!(properties[0].max_guests, 4);
        assert!(properties[0].active);
    }

    #[tokio::test]
    async fn refused_connection_is_a_network_error() {
        setup();
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        match client_for(addr).list_experiences().await {
            Err(StayError::Network(_)) => {}
            other => panic!("expected Network error, got {:?}", other),
        }
    }
}
