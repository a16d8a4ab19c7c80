//! Memory browsing endpoints: collection sizes, recent facts, and stored
//! procedures for the front-end's memory panel.

use actix_web::{HttpResponse, Responder, web};
use serde::{Deserialize, Serialize};

use crate::AppState;

#[derive(Serialize)]
struct MemoryStatsResponse {
    success: bool,
    facts: usize,
    procedures: usize,
    interactions: usize,
    short_term: usize,
}

#[derive(Debug, Deserialize)]
pub struct RecentFactsQuery {
    #[serde(default = "default_limit")]
    limit: usize,
}

fn default_limit() -> usize {
    3
}

#[derive(Serialize)]
struct FactView {
    fact: String,
    category: String,
    timestamp: String,
}

#[derive(Serialize)]
struct FactsResponse {
    success: bool,
    facts: Vec<FactView>,
}

#[derive(Serialize)]
struct ProcedureView {
    name: String,
    description: String,
    steps: Vec<String>,
}

#[derive(Serialize)]
struct ProceduresResponse {
    success: bool,
    procedures: Vec<ProcedureView>,
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/api/memory/stats").route(web::get().to(stats)))
        .service(web::resource("/api/memory/facts").route(web::get().to(recent_facts)))
        .service(web::resource("/api/memory/procedures").route(web::get().to(procedures)));
}

async fn stats(state: web::Data<AppState>) -> impl Responder {
    let agent = state.agent.lock().await;
    let memory = &agent.memory;

    HttpResponse::Ok().json(MemoryStatsResponse {
        success: true,
        facts: memory.facts.len(),
        procedures: memory.procedures.len(),
        interactions: memory.interactions.len(),
        short_term: memory.short_term.len(),
    })
}

/// The `limit` most recently stored facts, in insertion order.
async fn recent_facts(
    state: web::Data<AppState>,
    query: web::Query<RecentFactsQuery>,
) -> impl Responder {
    let agent = state.agent.lock().await;
    let facts = &agent.memory.facts;
    let start = facts.len().saturating_sub(query.limit);

    HttpResponse::Ok().json(FactsResponse {
        success: true,
        facts: facts[start..]
            .iter()
            .map(|f| FactView {
                fact: f.fact.clone(),
                category: f.category.clone(),
                timestamp: f.timestamp.clone(),
            })
            .collect(),
    })
}

async fn procedures(state: web::Data<AppState>) -> impl Responder {
    let agent = state.agent.lock().await;

    HttpResponse::Ok().json(ProceduresResponse {
        success: true,
        procedures: agent
            .memory
            .procedures
            .values()
            .map(|p| ProcedureView {
                name: p.name.clone(),
                description: p.description.clone(),
                steps: p.steps.clone(),
            })
            .collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::Agent;
    use crate::config::Config;
    use crate::prompts;
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
    async fn stats_reports_collection_sizes() {
        let dir = tempdir().unwrap();
        let state = test_state(dir.path());
        {
            let mut agent = state.agent.lock().await;
            agent.memory.add_procedure(
                "greeting",
                vec!["1. Say hello".to_string()],
                "say hello",
            );
        }

        let app = test::init_service(App::new().app_data(state.clone()).configure(config)).await;
        let req = test::TestRequest::get().uri("/api/memory/stats").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["success"], true);
        assert_eq!(
            body["facts"].as_u64().unwrap() as usize,
            prompts::seed_assistant_facts().len()
        );
        assert_eq!(body["procedures"], 1);
        assert_eq!(body["interactions"], 0);
        assert_eq!(body["short_term"], 0);
    }

    #[actix_web::test]
    async fn recent_facts_returns_the_tail_in_order() {
        let dir = tempdir().unwrap();
        let state = test_state(dir.path());
        {
            let mut agent = state.agent.lock().await;
            agent.memory.add_fact("Newest fact", "fact");
        }

        let app = test::init_service(App::new().app_data(state.clone()).configure(config)).await;
        let req = test::TestRequest::get()
            .uri("/api/memory/facts?limit=2")
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        let facts = body["facts"].as_array().unwrap();
        assert_eq!(facts.len(), 2);
        assert_eq!(facts[1]["fact"], "Newest fact");
    }
}
