use serde::{Deserialize, Serialize};

use crate::domain::RecommendationEntry;
use crate::processing::embedding::EmbeddingProvider;
use crate::processing::recommender::Recommender;

/// Request accepted on the ZMQ socket.
#[derive(Debug, Deserialize)]
pub struct RecommendRequest {
    pub major: String,
    #[serde(default)]
    pub category: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum RecommendReply {
    Recommendations {
        recommendations: Vec<RecommendationEntry>,
    },
    Error {
        error: String,
    },
}

/// Decode a JSON request, run it and encode the reply.
pub fn handle_request<P>(recommender: &Recommender<P>, payload: &[u8]) -> Vec<u8>
where
    P: EmbeddingProvider,
{
    let reply = match serde_json::from_slice::<RecommendRequest>(payload) {
        Ok(request) => {
            match recommender.recommend(&request.major, request.category.as_deref()) {
                Ok(recommendations) => RecommendReply::Recommendations { recommendations },
                Err(error) => {
                    log::warn!("Recommendation for {:?} failed: {error}", request.major);
                    RecommendReply::Error {
                        error: error.to_string(),
                    }
                }
            }
        }
        Err(error) => {
            log::error!("Failed to parse JSON: {error}");
            RecommendReply::Error {
                error: format!("invalid request: {error}"),
            }
        }
    };

    serde_json::to_vec(&reply).unwrap_or_else(|error| {
        log::error!("Failed to encode reply: {error}");
        br#"{"error":"internal error"}"#.to_vec()
    })
}

/// Serve requests on a REP socket bound to `address` until a socket error.
pub fn serve<P>(recommender: &Recommender<P>, address: &str) -> Result<(), zmq::Error>
where
    P: EmbeddingProvider,
{
    let context = zmq::Context::new();
    let responder = context.socket(zmq::REP)?;
    responder.bind(address)?;
    log::info!("Listening for recommendation requests on {address}");

    loop {
        let msg = responder.recv_bytes(0)?;
        let reply = handle_request(recommender, &msg);
        responder.send(reply, 0)?;
    }
}

#[cfg(test)]
mod tests {
    use serde_json::Value;

    use super::handle_request;
    use crate::domain::Record;
    use crate::processing::embedding::{EmbeddingProvider, EmbeddingResult};
    use crate::processing::recommender::{MatchSettings, Recommender};

    struct ConstantProvider;

    impl EmbeddingProvider for ConstantProvider {
        fn embed_batch(&self, texts: &[String]) -> EmbeddingResult<Vec<Vec<f32>>> {
            Ok(texts.iter().map(|_| vec![1.0, 0.0]).collect())
        }
    }

    fn recommender() -> Recommender<ConstantProvider> {
        let records = vec![
            Record::new("计算机科学", "软件工程师", "普通本科"),
            Record::new("会计学", "会计", "职教专科"),
        ];
        Recommender::bootstrap(&records, ConstantProvider, MatchSettings::default())
            .expect("bootstrap should succeed")
    }

    fn reply(payload: &str) -> Value {
        let bytes = handle_request(&recommender(), payload.as_bytes());
        serde_json::from_slice(&bytes).expect("reply should be JSON")
    }

    #[test]
    fn exact_request_returns_exact_entries() {
        let value = reply(r#"{"major": "计算机科学"}"#);

        assert_eq!(value["recommendations"][0]["match_kind"], "exact");
        assert_eq!(value["recommendations"][0]["job_text"], "软件工程师");
    }

    #[test]
    fn semantic_request_honours_category() {
        let value = reply(r#"{"major": "财务管理", "category": "职教专科"}"#);

        let entries = value["recommendations"].as_array().expect("array");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0]["job_text"], "会计 (职教专科)");
        assert_eq!(entries[0]["confidence"], "100%");
    }

    #[test]
    fn blank_major_and_bad_json_return_errors() {
        assert_eq!(reply(r#"{"major": " "}"#)["error"], "major must not be empty");
        assert!(
            reply("not json")["error"]
                .as_str()
                .expect("error string")
                .starts_with("invalid request")
        );
    }
}
