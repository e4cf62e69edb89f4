use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{App, HttpResponse, HttpServer, Responder, get, middleware::Logger, post, web};
use log::{debug, error, info, warn};

use crate::config::ReaderConfig;
use crate::dto::{TranscriptRequest, TranscriptResponse};
use crate::reader::{ReaderError, YoutubeReader};
use crate::source::InnerTubeSource;

pub struct AppState {
    pub reader: YoutubeReader,
}

#[get("/health")]
pub async fn health_check() -> impl Responder {
    debug!("Health check endpoint called");
    HttpResponse::Ok().json(serde_json::json!({
        "message": "OK"
    }))
}

#[post("/v1/transcripts")]
pub async fn get_transcripts(
    data: web::Data<AppState>,
    request: web::Json<TranscriptRequest>,
) -> impl Responder {
    debug!("Transcript request received: {} links", request.ytlinks.len());

    match data.reader.load_data(&request.ytlinks).await {
        Ok(transcripts) => {
            info!(
                "Resolved {} transcripts successfully",
                transcripts.len()
            );
            let response: Vec<TranscriptResponse> = transcripts
                .into_iter()
                .map(|(video_id, transcript)| TranscriptResponse {
                    video_id,
                    transcript,
                })
                .collect();
            HttpResponse::Ok().json(response)
        }
        Err(e @ ReaderError::UnsupportedUrl { .. }) => {
            warn!("Rejected transcript request: {e}");
            HttpResponse::BadRequest().json(serde_json::json!({
                "detail": e.to_string()
            }))
        }
        Err(ReaderError::Source(e)) => {
            error!("Transcript source failed: {e}");
            HttpResponse::InternalServerError().json(serde_json::json!({
                "detail": format!("Unexpected error: {}", e)
            }))
        }
    }
}

pub async fn run_server(host: String, port: u16, config: ReaderConfig) -> std::io::Result<()> {
    info!("Starting YouTube transcript service");
    info!(
        "Using configuration: languages={:?}, min_duration={}s, proxy={:?}",
        config.languages, config.min_duration, config.proxy
    );

    let source = match InnerTubeSource::new(config.proxy.as_deref()) {
        Ok(s) => s,
        Err(e) => {
            error!("Failed to initialize transcript source: {e}");
            std::process::exit(1);
        }
    };

    let app_state = web::Data::new(AppState {
        reader: YoutubeReader::new(Arc::new(source), config),
    });

    info!("Starting HTTP server on {host}:{port}");

    HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .wrap(Logger::default())
            .service(health_check)
            .service(get_transcripts)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
