//! Tipos del API REST `generateContent` de Gemini y su traducción al modelo
//! de la aplicación. Aquí no hay red: solo construir peticiones y leer respuestas.

use crate::error::{Result, StudyError};
use crate::model::{Content, Language, SearchSource, StudySet};
use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

const FALLBACK_TITLE: &str = "General Search Result";
const FALLBACK_SNIPPET: &str = "View more resources on the web.";
const SOURCE_TITLE: &str = "Educational Resource";
const SOURCE_SNIPPET: &str = "Highly relevant study material found via Google Search grounding.";

#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    pub contents: Vec<RequestContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<RequestContent>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tools: Vec<Tool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct RequestContent {
    pub parts: Vec<Part>,
}

#[derive(Debug, Serialize, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Part {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inline_data: Option<InlineData>,
}

impl Part {
    fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Default::default()
        }
    }
}

#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    pub data: String,
    pub mime_type: String,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Tool {
    pub google_search: GoogleSearch,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct GoogleSearch {}

#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub response_mime_type: String,
    pub response_schema: Value,
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct GenerateResponse {
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Candidate {
    pub content: Option<ResponseContent>,
    pub grounding_metadata: Option<GroundingMetadata>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct ResponseContent {
    pub parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct ResponsePart {
    pub text: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct GroundingMetadata {
    pub grounding_chunks: Vec<GroundingChunk>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct GroundingChunk {
    pub web: Option<WebChunk>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct WebChunk {
    pub uri: Option<String>,
    pub title: Option<String>,
}

pub fn language_instruction(lang: Language) -> &'static str {
    match lang {
        Language::Si => {
            "Generate all content in talkative/colloquial Sinhala (as spoken naturally in everyday conversation). Avoid formal literary Sinhala. Use friendly, easy-to-understand spoken terms."
        }
        Language::Ta => {
            "Generate all content in talkative/colloquial Tamil (as spoken naturally in everyday conversation). Avoid formal literary/pure Tamil. Use casual, spoken Tamil terms."
        }
        Language::En => "Generate all content in English.",
    }
}

fn study_prompt(lang: Language, count: usize) -> String {
    format!(
        "Analyze the provided content and generate a comprehensive study set.
    REQUIRED OUTPUT:
    1. A title for the study set.
    2. A detailed summary.
    3. 8-10 flashcards for key concepts.
    4. EXACTLY {count} multiple-choice questions. No more, no less than {count}.

    LANGUAGE INSTRUCTION: {}",
        language_instruction(lang)
    )
}

fn study_set_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "title": { "type": "STRING" },
            "summary": { "type": "STRING" },
            "flashcards": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "front": { "type": "STRING" },
                        "back": { "type": "STRING" }
                    },
                    "required": ["front", "back"]
                }
            },
            "mcqs": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "question": { "type": "STRING" },
                        "options": { "type": "ARRAY", "items": { "type": "STRING" } },
                        "correctAnswerIndex": { "type": "INTEGER" },
                        "explanation": { "type": "STRING" }
                    },
                    "required": ["question", "options", "correctAnswerIndex", "explanation"]
                }
            }
        },
        "required": ["title", "summary", "flashcards", "mcqs"]
    })
}

/// Petición de generación del set de estudio.
pub fn build_study_request(content: &Content, lang: Language, count: usize) -> GenerateRequest {
    let mut prompt = study_prompt(lang, count);
    let mut parts = Vec::new();

    match content {
        Content::Text(text) => {
            parts.push(Part::text(format!("{prompt}\n\nCONTENT:\n{text}")));
        }
        Content::Images(images) => {
            for img in images {
                parts.push(Part {
                    inline_data: Some(InlineData {
                        data: img.data.clone(),
                        mime_type: img.mime_type.clone(),
                    }),
                    ..Default::default()
                });
            }
            parts.push(Part::text(prompt));
        }
        Content::Topic { topic, source_uri } => {
            prompt.push_str(&format!(
                "\n\nStudy this specific topic: \"{topic}\" using information from the following source: {source_uri}. If needed, use Google Search to get deeper details about this specific resource to ensure the study set is accurate."
            ));
            parts.push(Part::text(prompt));
        }
    }

    let tools = if content.uses_search() {
        vec![google_search()]
    } else {
        vec![]
    };

    GenerateRequest {
        contents: vec![RequestContent { parts }],
        system_instruction: Some(RequestContent {
            parts: vec![Part::text(format!(
                "You are an expert educational tutor. Your job is to transform raw input or search topics into structured study materials. You MUST generate exactly {count} multiple-choice questions."
            ))],
        }),
        tools,
        generation_config: Some(GenerationConfig {
            response_mime_type: "application/json".to_string(),
            response_schema: study_set_schema(),
        }),
    }
}

/// Petición de búsqueda con grounding de Google.
pub fn build_search_request(query: &str) -> GenerateRequest {
    let prompt = format!(
        "Find high-quality educational PDFs, books, or academic resources related to: \"{query}\".
    Return a list of specific sources with their titles and brief descriptions of what they cover."
    );

    GenerateRequest {
        contents: vec![RequestContent {
            parts: vec![Part::text(prompt)],
        }],
        system_instruction: None,
        tools: vec![google_search()],
        generation_config: None,
    }
}

fn google_search() -> Tool {
    Tool {
        google_search: GoogleSearch {},
    }
}

/// Concatena el texto del primer candidato.
pub fn response_text(response: &GenerateResponse) -> Result<String> {
    let text: String = response
        .candidates
        .first()
        .and_then(|c| c.content.as_ref())
        .map(|content| {
            content
                .parts
                .iter()
                .filter_map(|p| p.text.as_deref())
                .collect()
        })
        .unwrap_or_default();

    if text.trim().is_empty() {
        Err(StudyError::EmptyResponse)
    } else {
        Ok(text)
    }
}

/// Interpreta la respuesta como `StudySet`. El número de preguntas no se corrige.
pub fn parse_study_set(response: &GenerateResponse, requested: usize) -> Result<StudySet> {
    let text = response_text(response)?;
    let set: StudySet = serde_json::from_str(&text)?;

    if set.mcqs.len() != requested {
        log::warn!(
            "requested {requested} questions, model returned {}",
            set.mcqs.len()
        );
    }
    for (i, mcq) in set.mcqs.iter().enumerate() {
        if mcq.correct_option().is_none() {
            log::warn!(
                "question {} has answer index {} outside its {} options",
                i + 1,
                mcq.correct_answer_index,
                mcq.options.len()
            );
        }
    }

    Ok(set)
}

/// Fuentes web del grounding; nunca devuelve una lista vacía.
pub fn collect_sources(response: &GenerateResponse, query: &str) -> Vec<SearchSource> {
    let sources: Vec<SearchSource> = response
        .candidates
        .first()
        .and_then(|c| c.grounding_metadata.as_ref())
        .map(|meta| {
            meta.grounding_chunks
                .iter()
                .filter_map(|chunk| chunk.web.as_ref())
                .filter_map(|web| {
                    let uri = web.uri.as_deref()?.trim();
                    if uri.is_empty() {
                        return None;
                    }
                    let title = web
                        .title
                        .as_deref()
                        .map(str::trim)
                        .filter(|t| !t.is_empty())
                        .unwrap_or(SOURCE_TITLE);
                    Some(SearchSource {
                        title: title.to_string(),
                        uri: uri.to_string(),
                        snippet: SOURCE_SNIPPET.to_string(),
                    })
                })
                .collect()
        })
        .unwrap_or_default();

    if sources.is_empty() {
        log::warn!("search for {query:?} returned no grounding sources, using fallback");
        return vec![fallback_source(query)];
    }

    sources
}

pub fn fallback_source(query: &str) -> SearchSource {
    SearchSource {
        title: FALLBACK_TITLE.to_string(),
        uri: format!(
            "https://google.com/search?q={}",
            utf8_percent_encode(query, NON_ALPHANUMERIC)
        ),
        snippet: FALLBACK_SNIPPET.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::InlineImage;

    fn response(json: Value) -> GenerateResponse {
        serde_json::from_value(json).unwrap()
    }

    fn text_response(text: &str) -> GenerateResponse {
        response(json!({
            "candidates": [{ "content": { "parts": [{ "text": text }] } }]
        }))
    }

    #[test]
    fn text_request_embeds_content_and_count() {
        let req = build_study_request(&Content::Text("photosynthesis notes".into()), Language::En, 7);
        let value = serde_json::to_value(&req).unwrap();

        let prompt = value["contents"][0]["parts"][0]["text"].as_str().unwrap();
        assert!(prompt.contains("EXACTLY 7 multiple-choice questions"));
        assert!(prompt.ends_with("CONTENT:\nphotosynthesis notes"));
        assert!(prompt.contains("Generate all content in English."));
        assert!(value.get("tools").is_none());
        assert_eq!(
            value["generationConfig"]["responseMimeType"],
            "application/json"
        );
        assert!(
            value["systemInstruction"]["parts"][0]["text"]
                .as_str()
                .unwrap()
                .contains("exactly 7")
        );
    }

    #[test]
    fn image_request_sends_inline_parts_before_prompt() {
        let images = vec![
            InlineImage {
                data: "AAAA".into(),
                mime_type: "image/jpeg".into(),
            },
            InlineImage {
                data: "BBBB".into(),
                mime_type: "image/png".into(),
            },
        ];
        let req = build_study_request(&Content::Images(images), Language::Si, 5);
        let value = serde_json::to_value(&req).unwrap();
        let parts = value["contents"][0]["parts"].as_array().unwrap();

        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0]["inlineData"]["mimeType"], "image/jpeg");
        assert_eq!(parts[1]["inlineData"]["data"], "BBBB");
        assert!(parts[0].get("text").is_none());
        assert!(parts[2]["text"].as_str().unwrap().contains("colloquial Sinhala"));
    }

    #[test]
    fn topic_request_enables_google_search() {
        let content = Content::Topic {
            topic: "Linear Algebra".into(),
            source_uri: "https://example.org/la.pdf".into(),
        };
        let req = build_study_request(&content, Language::Ta, 3);
        let value = serde_json::to_value(&req).unwrap();

        assert_eq!(value["tools"], json!([{ "googleSearch": {} }]));
        let prompt = value["contents"][0]["parts"][0]["text"].as_str().unwrap();
        assert!(prompt.contains("\"Linear Algebra\""));
        assert!(prompt.contains("https://example.org/la.pdf"));
        assert!(prompt.contains("colloquial Tamil"));
    }

    #[test]
    fn search_request_has_tool_and_no_schema() {
        let value = serde_json::to_value(build_search_request("rust ownership")).unwrap();
        assert_eq!(value["tools"], json!([{ "googleSearch": {} }]));
        assert!(value.get("generationConfig").is_none());
        assert!(
            value["contents"][0]["parts"][0]["text"]
                .as_str()
                .unwrap()
                .contains("\"rust ownership\"")
        );
    }

    #[test]
    fn parses_study_set_from_split_text_parts() {
        let resp = response(json!({
            "candidates": [{ "content": { "parts": [
                { "text": "{\"title\":\"T\",\"summary\":\"S\"," },
                { "text": "\"flashcards\":[{\"front\":\"f\",\"back\":\"b\"}],\"mcqs\":[]}" }
            ] } }]
        }));
        let set = parse_study_set(&resp, 0).unwrap();
        assert_eq!(set.title, "T");
        assert_eq!(set.flashcards.len(), 1);
    }

    #[test]
    fn count_mismatch_is_accepted_as_is() {
        let resp = text_response(
            r#"{"title":"T","summary":"S","flashcards":[],"mcqs":[
                {"question":"q","options":["a","b"],"correctAnswerIndex":0,"explanation":"e"}
            ]}"#,
        );
        let set = parse_study_set(&resp, 5).unwrap();
        assert_eq!(set.mcqs.len(), 1);
    }

    #[test]
    fn malformed_json_is_an_error() {
        let err = parse_study_set(&text_response("not json"), 5).unwrap_err();
        assert!(matches!(err, StudyError::Json(_)));
    }

    #[test]
    fn missing_text_is_an_error() {
        let err = parse_study_set(&response(json!({ "candidates": [] })), 5).unwrap_err();
        assert!(matches!(err, StudyError::EmptyResponse));
    }

    #[test]
    fn grounding_chunks_become_sources() {
        let resp = response(json!({
            "candidates": [{
                "groundingMetadata": { "groundingChunks": [
                    { "web": { "uri": "https://a.example/book.pdf", "title": "Book A" } },
                    { "retrievedContext": {} },
                    { "web": { "uri": "https://b.example/" } }
                ] }
            }]
        }));
        let sources = collect_sources(&resp, "anything");
        assert_eq!(sources.len(), 2);
        assert_eq!(sources[0].title, "Book A");
        assert_eq!(sources[1].title, "Educational Resource");
        assert_eq!(sources[1].uri, "https://b.example/");
    }

    #[test]
    fn empty_grounding_yields_single_fallback() {
        let sources = collect_sources(&response(json!({})), "cell biology & DNA");
        assert_eq!(sources.len(), 1);
        assert_eq!(sources[0].title, "General Search Result");
        assert_eq!(
            sources[0].uri,
            "https://google.com/search?q=cell%20biology%20%26%20DNA"
        );
    }

    #[test]
    fn fallback_encodes_non_ascii_queries() {
        let source = fallback_source("ප්‍රකාශ");
        assert!(source.uri.starts_with("https://google.com/search?q=%E0%B6"));
        assert!(source.uri.is_ascii());
    }
}
