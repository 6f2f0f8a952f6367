use crate::services::RelayError;
use serde::Deserialize;
use validator::Validate;

pub const DEFAULT_WORD_LIMIT: i64 = 250;

/// Inbound body as sent by the frontend. Every field may be absent or `null`.
#[derive(Debug, Default, Deserialize)]
pub struct BlogRequestBody {
    pub title: Option<String>,
    pub keywords: Option<String>,
    pub wordlimit: Option<i64>,
}

impl BlogRequestBody {
    /// Decodes a raw body. Anything other than a JSON object is rejected.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, RelayError> {
        let value: serde_json::Value = serde_json::from_slice(bytes)?;
        if !value.is_object() {
            return Err(RelayError::NotAnObject);
        }

        Ok(serde_json::from_value(value)?)
    }
}

/// A request that has passed validation and may be relayed upstream.
#[derive(Debug, Clone, Validate)]
pub struct GenerationRequest {
    #[validate(length(min = 1, message = "Title cannot be empty"))]
    pub title: String,
    #[validate(length(min = 1, message = "Keywords cannot be empty"))]
    pub keywords: String,
    #[validate(range(min = 1, message = "Word limit must be positive"))]
    pub word_limit: i64,
}

impl GenerationRequest {
    /// Instruction sent to the model. Values are embedded verbatim.
    pub fn prompt(&self) -> String {
        format!(
            "Generate a Comprehensive, Engaging Blog relevant to this title: {} and these keywords: {} without exceeding the following number of words: {}",
            self.title, self.keywords, self.word_limit
        )
    }
}

impl TryFrom<BlogRequestBody> for GenerationRequest {
    type Error = RelayError;

    fn try_from(body: BlogRequestBody) -> Result<Self, Self::Error> {
        let request = GenerationRequest {
            title: body.title.unwrap_or_default(),
            keywords: body.keywords.unwrap_or_default(),
            word_limit: body.wordlimit.unwrap_or(DEFAULT_WORD_LIMIT),
        };

        request.validate().map_err(|e| {
            tracing::debug!(errors = %e, "Rejected blog request");
            RelayError::InvalidInput
        })?;

        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(title: Option<&str>, keywords: Option<&str>, wordlimit: Option<i64>) -> BlogRequestBody {
        BlogRequestBody {
            title: title.map(str::to_string),
            keywords: keywords.map(str::to_string),
            wordlimit,
        }
    }

    #[test]
    fn word_limit_defaults_to_250() {
        let request = GenerationRequest::try_from(body(Some("Cats"), Some("pets"), None)).unwrap();

        assert_eq!(request.word_limit, DEFAULT_WORD_LIMIT);
        assert!(request.prompt().ends_with("number of words: 250"));
    }

    #[test]
    fn missing_or_empty_fields_rejected() {
        let cases = [
            body(None, Some("pets"), Some(100)),
            body(Some(""), Some("pets"), Some(100)),
            body(Some("Cats"), None, Some(100)),
            body(Some("Cats"), Some(""), Some(100)),
            body(Some("Cats"), Some("pets"), Some(0)),
            body(Some("Cats"), Some("pets"), Some(-5)),
        ];

        for case in cases {
            let result = GenerationRequest::try_from(case);
            assert!(matches!(result, Err(RelayError::InvalidInput)));
        }
    }

    #[test]
    fn whitespace_title_is_not_empty() {
        let request = GenerationRequest::try_from(body(Some(" "), Some("pets"), Some(1)));

        assert!(request.is_ok());
    }

    #[test]
    fn prompt_embeds_fields_verbatim() {
        let request =
            GenerationRequest::try_from(body(Some("Cats"), Some("pets, fur"), Some(100))).unwrap();

        assert_eq!(
            request.prompt(),
            "Generate a Comprehensive, Engaging Blog relevant to this title: Cats and these keywords: pets, fur without exceeding the following number of words: 100"
        );
    }

    #[test]
    fn null_fields_decode_as_absent() {
        let decoded: BlogRequestBody =
            serde_json::from_str(r#"{"title": null, "keywords": "pets", "wordlimit": null}"#)
                .unwrap();

        assert!(decoded.title.is_none());
        assert!(decoded.wordlimit.is_none());
    }

    #[test]
    fn array_body_rejected() {
        let result = BlogRequestBody::from_slice(br#"["Cats", "pets", 100]"#);

        assert!(matches!(result, Err(RelayError::NotAnObject)));
    }

    #[test]
    fn scalar_body_rejected() {
        let result = BlogRequestBody::from_slice(b"42");

        assert!(matches!(result, Err(RelayError::NotAnObject)));
    }

    #[test]
    fn object_body_decoded() {
        let decoded =
            BlogRequestBody::from_slice(br#"{"title": "Cats", "keywords": "pets"}"#).unwrap();

        assert_eq!(decoded.title.as_deref(), Some("Cats"));
        assert!(decoded.wordlimit.is_none());
    }

    #[test]
    fn float_word_limit_fails_to_decode() {
        let result =
            BlogRequestBody::from_slice(br#"{"title": "Cats", "keywords": "pets", "wordlimit": 300.0}"#);

        assert!(matches!(result, Err(RelayError::MalformedBody(_))));
    }

    #[test]
    fn non_integer_word_limit_fails_to_decode() {
        let decoded = serde_json::from_str::<BlogRequestBody>(
            r#"{"title": "Cats", "keywords": "pets", "wordlimit": "many"}"#,
        );

        assert!(decoded.is_err());
    }
}
