//! Integration tests for the full generation pipeline, with the AI provider
//! mocked by `wiremock`.

use anyhow::Result;
use casegen::providers::{
    ai::{gemini::GeminiProvider, openai::OpenAiProvider},
    factory,
};
use casegen::{
    CaseStudyGenerator, CaseStudyGeneratorBuilder, CaseStudyInput, GeneratorError, ProviderConfig,
    SectionKind,
};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const COMPLETIONS_PATH: &str = "/v1/chat/completions";
const GEMINI_PATH: &str = "/v1beta/models/mock-gemini:generateContent";

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .compact()
        .try_init();
}

fn sample_input() -> CaseStudyInput {
    CaseStudyInput {
        client_name: "Acme Co".to_string(),
        industry: "Manufacturing".to_string(),
        main_challenge: "slow onboarding".to_string(),
        solution_provided: "automated workflows".to_string(),
        location: None,
        project_scale: None,
        technologies_used: None,
        additional_context: None,
    }
}

fn build_generator(mock_server: &MockServer) -> Result<CaseStudyGenerator> {
    init_tracing();
    let provider = OpenAiProvider::new(
        format!("{}{}", mock_server.uri(), COMPLETIONS_PATH),
        "test-key".to_string(),
        Some("mock-chat-model".to_string()),
    )?;
    Ok(CaseStudyGeneratorBuilder::new()
        .ai_provider(Box::new(provider))
        .build()?)
}

async fn mount_completion(mock_server: &MockServer, content: &str) {
    Mock::given(method("POST"))
        .and(path(COMPLETIONS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{
                "message": { "role": "assistant", "content": content }
            }]
        })))
        .mount(mock_server)
        .await;
}

#[tokio::test]
async fn generates_five_sections_in_canonical_order() -> Result<()> {
    let mock_server = MockServer::start().await;
    mount_completion(
        &mock_server,
        "Intro paragraph.\n• First point\n• Second point\nClosing paragraph.",
    )
    .await;

    let generator = build_generator(&mock_server)?;
    let document = generator.generate_document(&sample_input()).await?;

    assert_eq!(document.title, "Case Study: Acme Co - slow onboarding");
    let kinds: Vec<SectionKind> = document.sections.iter().map(|s| s.kind).collect();
    assert_eq!(kinds, SectionKind::ALL.to_vec());

    // Every section made exactly one provider call.
    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 5);

    // Section headings appear in reading order in the rendered markup.
    let positions: Vec<usize> = ["Summary", "The Client", "The Challenges", "The Solution", "The Results"]
        .iter()
        .map(|title| {
            document
                .wordpress_content
                .find(&format!(">{title}</h2>"))
                .unwrap_or_else(|| panic!("missing heading for {title}"))
        })
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));

    // The bullet lines were converted into a list block.
    assert!(document.wordpress_content.contains("<!-- wp:list -->"));
    assert!(document.wordpress_content.contains("<li>First point</li>"));
    Ok(())
}

#[tokio::test]
async fn omitted_optional_fields_never_reach_the_provider() -> Result<()> {
    let mock_server = MockServer::start().await;
    mount_completion(&mock_server, "Some generated text.").await;

    let generator = build_generator(&mock_server)?;
    generator.generate_document(&sample_input()).await?;

    for request in mock_server.received_requests().await.unwrap() {
        let body = String::from_utf8(request.body.clone())?;
        assert!(!body.contains("Location:"), "prompt leaked Location label");
        assert!(!body.contains("Project scale:"));
        assert!(!body.contains("Technologies used:"));
        assert!(!body.contains("Additional context:"));
    }
    Ok(())
}

#[tokio::test]
async fn requests_use_the_fixed_temperature() -> Result<()> {
    let mock_server = MockServer::start().await;
    mount_completion(&mock_server, "Some generated text.").await;

    let generator = build_generator(&mock_server)?;
    generator.generate_document(&sample_input()).await?;

    for request in mock_server.received_requests().await.unwrap() {
        let body: serde_json::Value = serde_json::from_slice(&request.body)?;
        let temperature = body["temperature"].as_f64().unwrap();
        assert!((temperature - 0.7).abs() < 1e-6);
        assert_eq!(body["messages"].as_array().map(Vec::len), Some(1));
        assert_eq!(body["messages"][0]["role"].as_str(), Some("user"));
    }
    Ok(())
}

#[tokio::test]
async fn gemini_requests_carry_key_auth_and_temperature() -> Result<()> {
    init_tracing();
    let mock_server = MockServer::start().await;
    // The mock only matches when the API key is sent as the `key` query
    // parameter, so a missing or misplaced credential fails the test.
    Mock::given(method("POST"))
        .and(path(GEMINI_PATH))
        .and(query_param("key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{
                "content": { "parts": [{ "text": "Gemini generated text." }] }
            }]
        })))
        .mount(&mock_server)
        .await;

    let provider = GeminiProvider::new(
        format!("{}{}", mock_server.uri(), GEMINI_PATH),
        "test-key".to_string(),
    )?;
    let generator = CaseStudyGeneratorBuilder::new()
        .ai_provider(Box::new(provider))
        .build()?;
    let document = generator.generate_document(&sample_input()).await?;

    // The first candidate's first part is the section content.
    assert!(document
        .sections
        .iter()
        .all(|s| s.content == "Gemini generated text."));

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 5);
    for request in requests {
        let body: serde_json::Value = serde_json::from_slice(&request.body)?;
        let temperature = body["generationConfig"]["temperature"].as_f64().unwrap();
        assert!((temperature - 0.7).abs() < 1e-6);
        let text = body["contents"][0]["parts"][0]["text"].as_str().unwrap();
        assert!(text.contains("Acme Co"));
    }
    Ok(())
}

#[tokio::test]
async fn gemini_empty_candidates_fail_as_empty_completion() -> Result<()> {
    init_tracing();
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GEMINI_PATH))
        .and(query_param("key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "candidates": [] })))
        .mount(&mock_server)
        .await;

    let provider = GeminiProvider::new(
        format!("{}{}", mock_server.uri(), GEMINI_PATH),
        "test-key".to_string(),
    )?;
    let generator = CaseStudyGeneratorBuilder::new()
        .ai_provider(Box::new(provider))
        .build()?;

    let err = generator.generate_document(&sample_input()).await.unwrap_err();
    assert!(matches!(err, GeneratorError::EmptyCompletion(_)));
    Ok(())
}

#[tokio::test]
async fn empty_completion_fails_the_whole_request() -> Result<()> {
    let mock_server = MockServer::start().await;
    mount_completion(&mock_server, "   ").await;

    let generator = build_generator(&mock_server)?;
    let err = generator.generate_document(&sample_input()).await.unwrap_err();
    assert!(matches!(err, GeneratorError::EmptyCompletion(_)));
    Ok(())
}

#[tokio::test]
async fn provider_api_error_aborts_generation() -> Result<()> {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(COMPLETIONS_PATH))
        .respond_with(ResponseTemplate::new(429).set_body_string("rate limited"))
        .mount(&mock_server)
        .await;

    let generator = build_generator(&mock_server)?;
    let err = generator.generate_document(&sample_input()).await.unwrap_err();
    assert!(matches!(err, GeneratorError::AiApi(_)));
    Ok(())
}

#[tokio::test]
async fn invalid_input_fails_before_any_provider_call() -> Result<()> {
    let mock_server = MockServer::start().await;
    mount_completion(&mock_server, "Should never be requested.").await;

    let generator = build_generator(&mock_server)?;
    let mut input = sample_input();
    input.client_name = "   ".to_string();

    let err = generator.generate_document(&input).await.unwrap_err();
    assert!(matches!(err, GeneratorError::InvalidInput(_)));
    assert!(mock_server.received_requests().await.unwrap().is_empty());
    Ok(())
}

#[tokio::test]
async fn missing_credential_fails_before_any_network_interaction() {
    let config = ProviderConfig {
        provider: "openai".to_string(),
        api_url: None,
        api_key: None,
        model: None,
    };
    let err = factory::create_provider(&config).unwrap_err();
    assert!(matches!(err, GeneratorError::MissingApiKey));
}
