use crate::normalize::normalize_value;
use crate::stopwords::StopWords;
use actix_web::{middleware::Logger, web, App, HttpResponse, HttpServer, Responder};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub stop_words: Option<Arc<StopWords>>,
}

#[derive(Deserialize)]
pub struct NormalizeRequest {
    #[serde(default)]
    text: serde_json::Value,
    stop_words: Option<Vec<String>>,
}

#[derive(Serialize, Deserialize)]
pub struct NormalizeResponse {
    pub normalized: String,
}

#[derive(Deserialize)]
pub struct BatchRequest {
    texts: Vec<serde_json::Value>,
    stop_words: Option<Vec<String>>,
}

#[derive(Serialize, Deserialize)]
pub struct BatchResponse {
    pub normalized: Vec<String>,
}

impl AppState {
    /// Request-level stop words replace the server default.
    fn stop_words(&self, requested: Option<Vec<String>>) -> Option<Arc<StopWords>> {
        match requested {
            Some(words) => Some(Arc::new(StopWords::from_list(words))),
            None => self.stop_words.clone(),
        }
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health))
        .route("/normalize", web::post().to(normalize_handler))
        .route("/normalize/batch", web::post().to(batch_handler));
}

pub async fn run_server(
    stop_words: Option<StopWords>,
    host: String,
    max_payload: usize,
) -> anyhow::Result<()> {
    let data = web::Data::new(AppState {
        stop_words: stop_words.map(Arc::new),
    });

    log::info!("Server starting at http://{}", host);

    HttpServer::new(move || {
        App::new()
            .app_data(data.clone())
            .app_data(web::JsonConfig::default().limit(max_payload))
            .wrap(Logger::default())
            .configure(configure)
    })
    .bind(host)?
    .run()
    .await?;
    Ok(())
}

async fn health() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

async fn normalize_handler(
    data: web::Data<AppState>,
    web::Json(req): web::Json<NormalizeRequest>,
) -> impl Responder {
    let stop_words = data.stop_words(req.stop_words);
    let normalized = normalize_value(&req.text, stop_words.as_deref());
    HttpResponse::Ok().json(NormalizeResponse { normalized })
}

async fn batch_handler(
    data: web::Data<AppState>,
    web::Json(req): web::Json<BatchRequest>,
) -> impl Responder {
    let stop_words = data.stop_words(req.stop_words);
    let normalized: Vec<String> = req
        .texts
        .iter()
        .map(|t| normalize_value(t, stop_words.as_deref()))
        .collect();
    log::debug!("Normalized batch of {} texts", normalized.len());
    HttpResponse::Ok().json(BatchResponse { normalized })
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test;
    use serde_json::json;

    fn state(default: Option<&[&str]>) -> web::Data<AppState> {
        web::Data::new(AppState {
            stop_words: default.map(|w| Arc::new(StopWords::from_list(w))),
        })
    }

    #[actix_web::test]
    async fn normalizes_single_text() {
        let app =
            test::init_service(App::new().app_data(state(None)).configure(configure)).await;
        let req = test::TestRequest::post()
            .uri("/normalize")
            .set_json(json!({ "text": "كتاب   ۱۲۳؟" }))
            .to_request();
        let resp: NormalizeResponse = test::call_and_read_body_json(&app, req).await;
        assert_eq!(resp.normalized, "کتاب 123?");
    }

    #[actix_web::test]
    async fn non_string_text_is_empty() {
        let app =
            test::init_service(App::new().app_data(state(None)).configure(configure)).await;
        for body in [json!({ "text": 5 }), json!({ "text": null }), json!({})] {
            let req = test::TestRequest::post()
                .uri("/normalize")
                .set_json(body)
                .to_request();
            let resp: NormalizeResponse = test::call_and_read_body_json(&app, req).await;
            assert_eq!(resp.normalized, "");
        }
    }

    #[actix_web::test]
    async fn request_stop_words_override_default() {
        let app = test::init_service(
            App::new()
                .app_data(state(Some(&["این"][..])))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/normalize")
            .set_json(json!({ "text": "این یک متن است" }))
            .to_request();
        let resp: NormalizeResponse = test::call_and_read_body_json(&app, req).await;
        assert_eq!(resp.normalized, "یک متن است");

        let req = test::TestRequest::post()
            .uri("/normalize")
            .set_json(json!({ "text": "این یک متن است", "stop_words": ["یک", "است"] }))
            .to_request();
        let resp: NormalizeResponse = test::call_and_read_body_json(&app, req).await;
        assert_eq!(resp.normalized, "این متن");
    }

    #[actix_web::test]
    async fn batch_keeps_order() {
        let app =
            test::init_service(App::new().app_data(state(None)).configure(configure)).await;
        let req = test::TestRequest::post()
            .uri("/normalize/batch")
            .set_json(json!({ "texts": ["١٢٣", true, " سلام \t دنیا "] }))
            .to_request();
        let resp: BatchResponse = test::call_and_read_body_json(&app, req).await;
        assert_eq!(resp.normalized, vec!["123", "", "سلام دنیا"]);
    }

    #[actix_web::test]
    async fn health_is_ok() {
        let app =
            test::init_service(App::new().app_data(state(None)).configure(configure)).await;
        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());
    }
}
