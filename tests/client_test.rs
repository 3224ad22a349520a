use some_random_api::SraClient;
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn client_for(mock_server: &MockServer) -> SraClient {
    SraClient::new().with_base_url(&mock_server.uri()).unwrap()
}

#[tokio::test]
async fn test_dog_returns_image_and_fact() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/animal/dog"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "image": "https://i.some-random-api.ml/dog.jpg",
            "fact": "Dogs can smell fear."
        })))
        .mount(&mock_server)
        .await;

    let dog = client_for(&mock_server).await.dog().await.unwrap();

    assert_eq!(dog.image, "https://i.some-random-api.ml/dog.jpg");
    assert_eq!(dog.fact, "Dogs can smell fear.");
}

/// 上游把 character 拼成了 characther，解码要跟着 wire 格式走
#[tokio::test]
async fn test_anime_quote_decodes_misspelled_field() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/animu/quote"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "sentence": "I am going to be king of the pirates!",
            "characther": "Luffy",
            "anime": "One Piece"
        })))
        .mount(&mock_server)
        .await;

    let quote = client_for(&mock_server).await.anime_quote().await.unwrap();

    assert_eq!(quote.character, "Luffy");
    assert_eq!(quote.anime, "One Piece");
}

#[tokio::test]
async fn test_minecraft_decodes_name_history() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/mc"))
        .and(query_param("username", "notch"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "username": "notch",
            "uuid": "069a79f4-44e9-4726-a5be-fca90e38aaf5",
            "name_history": [
                {"name": "notch", "changedToAt": "original"}
            ]
        })))
        .mount(&mock_server)
        .await;

    let profile = client_for(&mock_server)
        .await
        .minecraft("notch")
        .await
        .unwrap();

    assert_eq!(profile.uuid, "069a79f4-44e9-4726-a5be-fca90e38aaf5");
    assert_eq!(profile.name_history.len(), 1);
    assert_eq!(profile.name_history[0].changed_to_at, "original");
}

#[tokio::test]
async fn test_lyrics_forwards_title_without_key() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/lyrics"))
        .and(query_param("title", "Never Gonna Give You Up"))
        .and(query_param_is_missing("key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "title": "Never Gonna Give You Up",
            "author": "Rick Astley",
            "lyrics": "...",
            "thumbnail": {"genius": "https://genius.com/t.png"},
            "links": {"genius": "https://genius.com/song"}
        })))
        .mount(&mock_server)
        .await;

    // token 已配置，但 lyrics 不是 token-capable 端点，不能带 key
    let client = SraClient::with_token("secret")
        .with_base_url(&mock_server.uri())
        .unwrap();
    let lyrics = client.lyrics("Never Gonna Give You Up").await.unwrap();

    assert_eq!(lyrics.author, "Rick Astley");
    assert_eq!(lyrics.links.genius, "https://genius.com/song");
}

#[tokio::test]
async fn test_chat_bot_forwards_token_as_key() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/chatbot"))
        .and(query_param("message", "hello"))
        .and(query_param("key", "s3cr3t&more"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"response": "hi"})),
        )
        .mount(&mock_server)
        .await;

    let client = SraClient::with_token("s3cr3t&more")
        .with_base_url(&mock_server.uri())
        .unwrap();
    let reply = client.chat_bot("hello").await.unwrap();

    assert_eq!(reply.response, "hi");
}

#[tokio::test]
async fn test_chat_bot_without_token_sends_no_key() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/chatbot"))
        .and(query_param("message", "hello"))
        .and(query_param_is_missing("key"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"response": "hi"})),
        )
        .mount(&mock_server)
        .await;

    let reply = client_for(&mock_server)
        .await
        .chat_bot("hello")
        .await
        .unwrap();

    assert_eq!(reply.response, "hi");
}

#[tokio::test]
async fn test_discord_bot_token_with_and_without_id() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/bottoken"))
        .and(query_param("id", "123456"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"token": "with-id"})),
        )
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/bottoken"))
        .and(query_param_is_missing("id"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"token": "without-id"})),
        )
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server).await;

    let with_id = client.discord_bot_token(Some(123456)).await.unwrap();
    assert_eq!(with_id.token, "with-id");

    let without_id = client.discord_bot_token(None).await.unwrap();
    assert_eq!(without_id.token, "without-id");
}

#[tokio::test]
async fn test_triggered_returns_raw_gif_bytes() {
    let mock_server = MockServer::start().await;

    let gif: &[u8] = b"GIF89a\xff\xfe\x00";
    Mock::given(method("GET"))
        .and(path("/canvas/triggered"))
        .and(query_param("avatar", "http://example.com/a.png"))
        .and(query_param("key", "secret"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(gif))
        .mount(&mock_server)
        .await;

    let client = SraClient::with_token("secret")
        .with_base_url(&mock_server.uri())
        .unwrap();
    let body = client.triggered("http://example.com/a.png").await.unwrap();

    assert_eq!(body.as_ref(), gif);
}

#[tokio::test]
async fn test_string_similarity_sends_both_params() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/stringsimilarity"))
        .and(query_param("string1", "hello"))
        .and(query_param("string2", "hullo"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"similarity": 0.8})),
        )
        .mount(&mock_server)
        .await;

    let similarity = client_for(&mock_server)
        .await
        .string_similarity("hello", "hullo")
        .await
        .unwrap();

    assert!((similarity.similarity - 0.8).abs() < f64::EPSILON);
}

#[tokio::test]
async fn test_rgb_and_hex_conversions() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/canvas/rgb"))
        .and(query_param("hex", "ff0000"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"r": 255, "g": 0, "b": 0})),
        )
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/canvas/hex"))
        .and(query_param("rgb", "255,0,0"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"hex": "#ff0000"})),
        )
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server).await;

    let rgb = client.rgb("ff0000").await.unwrap();
    assert_eq!((rgb.r, rgb.g, rgb.b), (255, 0, 0));

    let hex = client.hex("255,0,0").await.unwrap();
    assert_eq!(hex.hex, "#ff0000");
}

#[tokio::test]
async fn test_client_errors_propagate_unchanged() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/meme"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&mock_server)
        .await;

    let err = client_for(&mock_server).await.meme().await.unwrap_err();

    assert_eq!(err.code(), 429);
}

#[tokio::test]
async fn test_token_accessor_reports_configuration() {
    assert_eq!(SraClient::new().token(), None);
    assert_eq!(SraClient::with_token("abc").token(), Some("abc"));
}
