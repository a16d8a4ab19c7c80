use actix_web::{HttpResponse, Responder, web};
use serde::{Deserialize, Serialize};

use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Serialize)]
pub struct ChatResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/api/chat").route(web::post().to(chat)));
}

async fn chat(state: web::Data<AppState>, body: web::Json<ChatRequest>) -> impl Responder {
    let message = body.message.trim();
    if message.is_empty() {
        return HttpResponse::BadRequest().json(ChatResponse {
            success: false,
            reply: None,
            error: Some("No user message provided".to_string()),
        });
    }

    // One turn at a time: the memory store is single-writer.
    let mut agent = state.agent.lock().await;
    match agent.process_message(message).await {
        Ok(reply) => HttpResponse::Ok().json(ChatResponse {
            success: true,
            reply: Some(reply),
            error: None,
        }),
        Err(e) => {
            log::error!("Completion failed: {}", e);
            let mut response = if e.is_server_error() {
                HttpResponse::BadGateway()
            } else {
                HttpResponse::InternalServerError()
            };
            response.json(ChatResponse {
                success: false,
                reply: None,
                error: Some(e.to_string()),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::Agent;
    use crate::config::Config;
    use actix_web::{App, test};
    use tempfile::tempdir;
    use tokio::sync::Mutex;

    fn test_state(dir: &std::path::Path) -> web::Data<AppState> {
        let config = Config {
            api_key: "test_key".to_string(),
            api_endpoint: "http://localhost:9/v1/chat/completions".to_string(),
            model: "test-model".to_string(),
            memory_dir: dir.to_string_lossy().into_owned(),
            port: 0,
        };
        let agent = Agent::new(&config).expect("agent");
        web::Data::new(AppState {
            agent: Mutex::new(agent),
        })
    }

    #[actix_web::test]
    async fn empty_message_is_rejected() {
        let dir = tempdir().unwrap();
        let app = test::init_service(
            App::new().app_data(test_state(dir.path())).configure(config),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/chat")
            .set_json(serde_json::json!({"message": "   "}))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }
}
